use assert_cmd::Command;

const BIN: &str = "skywatchd";

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("-h").assert().success();
}

#[test]
fn test_version_keyword() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("--help").assert().success();
}

#[test]
fn test_bad_keyword() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("bouh").assert().failure();
}

#[test]
fn test_missing_config() {
    // a config file that does not exist is a startup error
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["-c", "/nonexistent/config.hcl", "--once"])
        .assert()
        .failure();
}
