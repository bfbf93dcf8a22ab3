//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;

fn bowdler() -> Command {
    Command::cargo_bin("bowdler").expect("binary builds")
}

#[test]
fn check_exits_nonzero_on_profanity() {
    bowdler()
        .args(["check", "this is bullshit"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("profane"));
}

#[test]
fn check_exits_zero_on_clean_text() {
    bowdler()
        .args(["check", "perfectly fine sentence"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clean"));
}

#[test]
fn check_reads_stdin_when_no_argument() {
    bowdler()
        .arg("check")
        .write_stdin("this is bullshit\n")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn clean_redacts_characters() {
    bowdler()
        .args(["clean", "This is bullshit."])
        .assert()
        .success()
        .stdout("This is ********.\n");
}

#[test]
fn clean_accepts_a_custom_placeholder() {
    bowdler()
        .args(["clean", "--placeholder", "#", "This is bullshit."])
        .assert()
        .success()
        .stdout("This is ########.\n");
}

#[test]
fn clean_words_mode_uses_a_token() {
    bowdler()
        .args(["clean", "--words=[X]", "This is bullshit."])
        .assert()
        .success()
        .stdout("This is [X].\n");

    bowdler()
        .args(["clean", "--words", "This is bullshit."])
        .assert()
        .success()
        .stdout("This is ***.\n");
}

#[test]
fn detect_emits_json() {
    bowdler()
        .args(["detect", "this is bullshit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"has_profanity\": true"))
        .stdout(predicate::str::contains("\"severity\": \"mild\""))
        .stdout(predicate::str::contains("\"bullshit\""));
}

#[test]
fn extra_languages_load_on_request() {
    bowdler()
        .args(["check", "quelle merde"])
        .assert()
        .success();

    bowdler()
        .args(["check", "--language", "french", "quelle merde"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn languages_lists_the_bundled_dictionaries() {
    bowdler()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("english"))
        .stdout(predicate::str::contains("telugu"));
}
