pub mod mock_clipboard;

use std::process::{Command, Output, Stdio};

/// Result of one invocation of the built binary
pub struct CliRun {
    pub output: Output,
}

impl CliRun {
    /// Run `caseshift` with `args` and the clipboard fallback disabled, so
    /// tests never touch the desktop clipboard.
    pub fn new(args: &[&str]) -> Self {
        Self::spawn(args.iter().copied())
    }

    /// Run with `flags`, then `query` after a `--` separator, the way a
    /// launcher invokes the binary.
    pub fn with_query(flags: &[&str], query: &str) -> Self {
        Self::spawn(flags.iter().copied().chain(["--", query]))
    }

    fn spawn<'a>(args: impl IntoIterator<Item = &'a str>) -> Self {
        let bin_path = env!("CARGO_BIN_EXE_caseshift");

        let output = Command::new(bin_path)
            .arg("--no-clipboard")
            .args(args)
            // Keep the caller's environment from changing the output mode or log noise
            .env_remove("CASESHIFT_OUTPUT")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null())
            .output()
            .expect("Failed to spawn caseshift");

        CliRun { output }
    }

    pub fn stdout(&self) -> String {
        String::from_utf8(self.output.stdout.clone()).expect("stdout is not UTF-8")
    }

    pub fn success(&self) -> bool {
        self.output.status.success()
    }
}
