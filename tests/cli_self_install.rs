mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn self_install_places_the_binary_under_home() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("self-install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed membank"));

    let installed = ctx.home().join(".local/bin/membank");
    assert!(installed.exists(), "binary should be installed at {}", installed.display());
}

#[cfg(unix)]
#[test]
fn installed_binary_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new();
    ctx.cli().arg("self-install").assert().success();

    let mode =
        fs::metadata(ctx.home().join(".local/bin/membank")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn self_install_warns_when_directory_is_off_path() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("self-install")
        .env("PATH", "/usr/bin:/bin")
        .assert()
        .success()
        .stdout(predicate::str::contains("not on your PATH"));
}

#[test]
fn force_overwrites_an_existing_installation() {
    let ctx = TestContext::new();
    let bin_dir = ctx.home().join(".local/bin");
    fs::create_dir_all(&bin_dir).unwrap();
    fs::write(bin_dir.join("membank"), b"stale").unwrap();

    ctx.cli().args(["self-install", "--force"]).assert().success();

    let size = fs::metadata(bin_dir.join("membank")).unwrap().len();
    assert!(size > 5, "stale placeholder should be replaced by the real binary");
}

#[cfg(target_os = "linux")]
#[test]
fn respects_xdg_bin_home_when_set() {
    let ctx = TestContext::new();
    let custom = ctx.home().join("custom-bin");

    ctx.cli().arg("self-install").env("XDG_BIN_HOME", &custom).assert().success();

    assert!(custom.join("membank").exists());
}
