use assert_cmd::Command;

pub fn payday_cmd() -> Command {
    let mut cmd = Command::cargo_bin("payday").unwrap();
    cmd.env_remove("PAYDAY_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
