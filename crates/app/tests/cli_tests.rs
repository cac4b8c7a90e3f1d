use assert_cmd::Command;
use predicates::prelude::*;

fn recall() -> Command {
    Command::cargo_bin("recall").expect("binary builds")
}

#[test]
fn exits_cleanly_on_exit_command() {
    recall()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye bye!"));
}

#[test]
fn menu_lists_every_action() {
    recall().write_stdin("exit\n").assert().success().stdout(predicate::str::contains(
        "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):",
    ));
}

#[test]
fn closed_stdin_still_says_goodbye() {
    recall()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye bye!"));
}

#[test]
fn add_ask_and_hardest_card_flow() {
    // A single card makes the quiz draw deterministic.
    let script = "add\ncat\nmeow\nask\n1\nwrong guess\nhardest card\nexit\n";
    recall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The pair (\"cat\":\"meow\") has been added.",
        ))
        .stdout(predicate::str::contains("Print the definition of \"cat\""))
        .stdout(predicate::str::contains("Wrong. The right answer is \"meow\"."))
        .stdout(predicate::str::contains(
            "The hardest card is \"cat\". You have 1 error answering it.",
        ));
}

#[test]
fn export_then_import_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.json");

    let export_script = format!(
        "add\ncat\nmeow\nadd\ndog\nbark\nexport\n{}\nexit\n",
        path.display()
    );
    recall()
        .write_stdin(export_script)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 cards have been saved."));

    recall()
        .arg("--import_from")
        .arg(&path)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 cards have been loaded."));
}

#[test]
fn export_to_flag_writes_a_snapshot_on_exit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("final.json");

    recall()
        .arg("--export_to")
        .arg(&path)
        .write_stdin("add\ncat\nmeow\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cards have been saved."))
        .stdout(predicate::str::contains("Bye bye!"));

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("cat"));
    assert!(saved.contains("meow"));
}

#[test]
fn startup_import_of_a_missing_file_reports_and_continues() {
    recall()
        .arg("--import_from")
        .arg("/definitely/not/here.json")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found."))
        .stdout(predicate::str::contains("Bye bye!"));
}

#[test]
fn import_command_reports_a_missing_file() {
    recall()
        .write_stdin("import\n/definitely/not/here.json\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found."));
}

#[test]
fn import_of_a_malformed_snapshot_reports_the_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not a snapshot").unwrap();

    let script = format!("import\n{}\nexit\n", path.display());
    recall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("cards have been loaded.").not())
        .stdout(predicate::str::contains("Bye bye!"));
}

#[test]
fn log_command_saves_the_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.log");

    let script = format!("log\n{}\nexit\n", path.display());
    recall()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("The log has been saved."));

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("Input the action"));
    assert!(saved.contains("log\n"));
}

#[test]
fn unknown_argument_fails_with_usage() {
    recall()
        .arg("--bogus")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown argument: --bogus"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn flag_without_a_value_fails_with_usage() {
    recall()
        .arg("--import_from")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--import_from requires a value"));
}
