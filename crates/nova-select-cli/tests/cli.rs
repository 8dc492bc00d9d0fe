use assert_cmd::Command;
use predicates::prelude::*;

fn nova_select() -> Command {
    Command::cargo_bin("nova-select").expect("binary builds")
}

#[test]
fn demo_resolves_every_fixture_slot() {
    nova_select()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("m()V -> J.m()V"))
        .stdout(predicate::str::contains("m()V -> C.m()V"))
        .stdout(predicate::str::contains("summary: all slots resolved"));
}

#[test]
fn demo_json_reports_targets_for_both_fixtures() {
    let assert = nova_select().args(["demo", "--json"]).assert().success();
    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");

    let scenarios = report["scenarios"].as_array().expect("scenarios array");
    assert_eq!(scenarios.len(), 2);
    for scenario in scenarios {
        let slots = scenario["slots"].as_array().expect("slots array");
        assert!(!slots.is_empty());
        for slot in slots {
            assert_eq!(slot["outcome"], "target");
        }
    }
}

#[test]
fn print_hierarchy_shows_each_path_occurrence() {
    nova_select()
        .args(["print-hierarchy", "--fixture", "diamond-override"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R\n"))
        .stdout(predicate::str::contains("  J\n"))
        .stdout(predicate::str::contains("    I1\n"))
        .stdout(predicate::str::contains("    I2\n"));
}

#[test]
fn print_hierarchy_json_lists_tree_lines() {
    let assert = nova_select()
        .args(["print-hierarchy", "--fixture", "class-wins", "--json"])
        .assert()
        .success();
    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");

    assert_eq!(report["fixture"], "class-wins");
    assert_eq!(report["root"], "R");
    let tree = report["tree"].as_array().expect("tree lines");
    assert_eq!(tree[0], "R");
    assert_eq!(tree[1], "  C");
}

#[test]
fn unknown_fixture_is_an_error() {
    nova_select()
        .args(["print-hierarchy", "--fixture", "nope"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown fixture"));
}
