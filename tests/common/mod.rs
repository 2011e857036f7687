use assert_cmd::Command;
use std::path::Path;

pub fn snipbox_cmd() -> Command {
    let mut cmd = Command::cargo_bin("snipbox").unwrap();
    cmd.env_remove("SNIPBOX_ROOT");
    cmd.env_remove("SNIPBOX_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Initialize a library at `root`
#[allow(dead_code)]
pub fn init_library(root: &Path) {
    snipbox_cmd().arg("init").arg(root).assert().success();
}

/// Add a snippet inside the library at `root` and return its id
#[allow(dead_code)]
pub fn add_snippet(root: &Path, args: &[&str]) -> String {
    let output = snipbox_cmd()
        .current_dir(root)
        .arg("add")
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}
