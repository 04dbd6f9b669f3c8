use assert_cmd::Command;
use predicates::prelude::*;

fn byehtml() -> Command {
    Command::cargo_bin("byehtml").expect("binary built")
}

#[test]
fn usage_without_arguments() {
    byehtml()
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"));
}

#[test]
fn joins_words_and_strips_scripts() {
    byehtml()
        .args(["<html><body><script>x=1</script><p>Hello", "world</p></body></html>"])
        .assert()
        .success()
        .stdout("Hello world\n");
}

#[test]
fn plain_text_is_echoed() {
    byehtml()
        .args(["not", "html", "at", "all"])
        .assert()
        .success()
        .stdout("not html at all\n");
}

#[test]
fn failure_still_exits_zero() {
    byehtml()
        .args(["--file", "/nonexistent/page.html"])
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains("Error decode"));
}

#[test]
fn json_output_carries_status() {
    let output = byehtml()
        .args(["--json", "--strategy", "none", "<p>hi</p>"])
        .output()
        .expect("run");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["text"], "<p>hi</p>");
    assert_eq!(value["success"], true);
    assert_eq!(value["strategy"], "none");
}

#[test]
fn unknown_strategy_warns_on_stderr() {
    byehtml()
        .args(["-s", "mystery", "<b>x</b>"])
        .assert()
        .success()
        .stdout("<b>x</b>\n")
        .stderr(predicate::str::contains("mystery"));
}

#[test]
fn hyphenated_words_are_input_not_flags() {
    byehtml()
        .args(["temperature", "-5", "degrees"])
        .assert()
        .success()
        .stdout("temperature -5 degrees\n");
}
