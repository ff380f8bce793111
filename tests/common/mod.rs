use assert_cmd::Command;

pub fn cfn_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cfn-yaml-tags").unwrap();
    cmd.env_remove("CFN_YAML_TAGS_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
