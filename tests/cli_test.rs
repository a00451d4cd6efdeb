mod common;
use common::CliRun;

#[test]
fn test_cli_script_filter_output() {
    let run = CliRun::new(&["fooBar"]);
    assert!(run.success());

    let value: serde_json::Value =
        serde_json::from_str(&run.stdout()).expect("stdout should be JSON");
    let items = value["items"].as_array().expect("items array");
    assert_eq!(items.len(), 12);
    assert_eq!(items[0]["arg"], "fooBar");
    assert_eq!(items[0]["title"], "camelCase: fooBar");
    assert_eq!(items[0]["subtitle"], "Paste fooBar at cursor position");
    assert_eq!(items[10]["text"]["copy"], "foo_bar");
}

#[test]
fn test_cli_joins_query_words() {
    let run = CliRun::new(&["--format", "kebab", "hello", "bigWorld"]);
    assert!(run.success());

    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(value["items"][0]["arg"], "hello-big-world");
}

#[test]
fn test_cli_text_output() {
    let run = CliRun::new(&["--output", "text", "-f", "snake", "-f", "title", "my value"]);
    assert!(run.success());
    assert_eq!(run.stdout(), "snake_case\tmy_value\nTitle case\tMy Value\n");
}

#[test]
fn test_cli_empty_input_is_silent() {
    let run = CliRun::new(&["   "]);
    assert!(run.success());
    assert!(run.stdout().is_empty());
}

fn items(run: &CliRun) -> Vec<serde_json::Value> {
    let value: serde_json::Value =
        serde_json::from_str(&run.stdout()).expect("stdout should be JSON");
    value["items"].as_array().expect("items array").clone()
}

#[test]
fn test_cli_hyphenated_query_is_converted() {
    let run = CliRun::new(&["-fooBar"]);
    assert!(run.success());

    let items = items(&run);
    assert_eq!(items.len(), 12);
    assert_eq!(items[0]["arg"], "fooBar");
}

#[test]
fn test_cli_unknown_long_flag_is_query() {
    let run = CliRun::new(&["--my-var"]);
    assert!(run.success());
    assert_eq!(items(&run)[0]["arg"], "myVar");
}

#[test]
fn test_cli_flag_names_after_separator_are_query() {
    let run = CliRun::with_query(&[], "-v");
    assert!(run.success());
    assert_eq!(items(&run)[11]["arg"], "V");

    let run = CliRun::with_query(&["-f", "kebab"], "--help");
    assert!(run.success());
    let items = items(&run);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["arg"], "help");
}

#[test]
fn test_cli_flags_after_query_are_query_text() {
    let run = CliRun::new(&["-f", "snake", "foo", "-v"]);
    assert!(run.success());
    assert_eq!(items(&run)[0]["arg"], "foo_v");
}
