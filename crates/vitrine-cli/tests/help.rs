use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn vitrine() -> Command {
    Command::cargo_bin("vitrine").unwrap()
}

#[test]
fn test_main_help_lists_subcommands() {
    vitrine()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("theme"));
}

#[test]
fn test_list_help_names_sort_modes() {
    vitrine()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("price-asc"))
        .stdout(predicate::str::contains("store-shopee"))
        .stdout(predicate::str::contains("store-ml"));
}

#[test]
fn test_unknown_sort_mode_is_rejected() {
    vitrine()
        .args(["list", "--sort", "cheapest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cheapest"));
}
