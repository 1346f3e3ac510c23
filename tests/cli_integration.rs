//! CLI integration tests for Ballast.
//!
//! These tests verify the full CLI workflow: platform reporting, option
//! resolution, source enumeration, and build planning.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the ballast binary command, isolated from the user's environment.
///
/// `HOME` points into the temp dir so no `~/.ballast/config.toml` leaks in,
/// and `CC` names a nonexistent compiler so toolchain detection lands on the
/// vendor family instead of whatever the host has installed.
fn ballast(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ballast").unwrap();
    cmd.current_dir(tmp.path());
    cmd.env("HOME", tmp.path());
    cmd.env("CC", "ballast-test-cc");
    cmd
}

fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// ballast platform
// ============================================================================

#[test]
fn test_platform_reports_identifier_and_family() {
    let tmp = temp_dir();

    ballast(&tmp)
        .args(["platform", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("platform: "))
        .stdout(predicate::str::contains("family: "));
}

// ============================================================================
// ballast configure
// ============================================================================

#[test]
fn test_configure_linux_debug() {
    let tmp = temp_dir();

    ballast(&tmp)
        .args([
            "configure",
            "--platform",
            "i686-pc-linux-gnu",
            "-o",
            "debug=1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("platform: i686-pc-linux-gnu (linux)"))
        .stdout(predicate::str::contains("local lib: lib/i686-pc-linux-gnu"))
        .stdout(predicate::str::contains("-g"))
        .stdout(predicate::str::contains("-O1").not())
        .stdout(predicate::str::contains("pthread"));
}

#[test]
fn test_configure_unsupported_platform_fails() {
    let tmp = temp_dir();

    ballast(&tmp)
        .args(["configure", "--platform", "arm-unknown-unknown"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unsupported platform: `arm-unknown-unknown`",
        ));
}

#[test]
fn test_configure_user_defines_lead_the_flags() {
    let tmp = temp_dir();

    let output = ballast(&tmp)
        .args([
            "configure",
            "--platform",
            "sparc-sun-solaris2.9",
            "-o",
            "defines=FOO BAR",
            "-o",
            "enable64=1",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let flags_line = stdout
        .lines()
        .find(|l| l.starts_with("compiler flags:"))
        .unwrap();
    let dfoo = flags_line.find("-DFOO").unwrap();
    let dbar = flags_line.find("-DBAR").unwrap();
    let platform_flag = flags_line.find("-instances=static").unwrap();
    assert!(dfoo < dbar && dbar < platform_flag);
    assert!(flags_line.contains("-xtarget=generic64"));
    assert!(stdout.contains("local lib: lib/sparc-sun-solaris2.9-64"));
}

#[test]
fn test_configure_json_output() {
    let tmp = temp_dir();

    let output = ballast(&tmp)
        .args(["configure", "--platform", "win32", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["local_lib"], "lib/win32");
    assert_eq!(config["family"], "win32");
    assert!(config["defines"]
        .as_array()
        .unwrap()
        .contains(&serde_json::Value::from("-D_REENTRANT")));
}

#[test]
fn test_configure_reads_manifest_options() {
    let tmp = temp_dir();
    fs::write(
        tmp.path().join("ballast.toml"),
        r#"
        [options]
        warnings = true
        "#,
    )
    .unwrap();

    ballast(&tmp)
        .args(["configure", "--platform", "i686-pc-linux-gnu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-Wall"));

    // Command-line overrides beat the manifest.
    ballast(&tmp)
        .args([
            "configure",
            "--platform",
            "i686-pc-linux-gnu",
            "-o",
            "warnings=0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("-Wall").not());
}

// ============================================================================
// ballast sources
// ============================================================================

#[test]
fn test_sources_filters_other_platform_files() {
    let tmp = temp_dir();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("Io.c"), "").unwrap();
    fs::write(src.join("IoWin32.c"), "").unwrap();
    fs::write(src.join("IoPosix.c"), "").unwrap();

    ballast(&tmp)
        .args(["sources", "src", "--platform", "win32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IoWin32.c"))
        .stdout(predicate::str::contains("IoPosix.c").not());

    ballast(&tmp)
        .args(["sources", "src", "--platform", "i686-pc-linux-gnu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IoPosix.c"))
        .stdout(predicate::str::contains("IoWin32.c").not());

    ballast(&tmp)
        .args(["sources", "src", "--unfiltered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IoWin32.c"))
        .stdout(predicate::str::contains("IoPosix.c"));
}

// ============================================================================
// ballast plan
// ============================================================================

#[test]
fn test_plan_registers_manifest_targets() {
    let tmp = temp_dir();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.c"), "").unwrap();
    fs::write(src.join("b.c"), "").unwrap();
    fs::write(
        tmp.path().join("ballast.toml"),
        r#"
        [[lib]]
        name = "base"

        [[lib]]
        name = "nitf"
        depends = ["base"]
        dynamic = true
        "#,
    )
    .unwrap();

    ballast(&tmp)
        .args(["plan", "--platform", "i686-pc-linux-gnu"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "static lib/i686-pc-linux-gnu/base (2 sources)",
        ))
        .stdout(predicate::str::contains(
            "shared lib/i686-pc-linux-gnu/nitf (2 sources)",
        ))
        .stdout(predicate::str::contains("libs: base dl nsl pthread"));
}

#[test]
fn test_plan_without_targets_fails() {
    let tmp = temp_dir();

    ballast(&tmp)
        .args(["plan", "--platform", "i686-pc-linux-gnu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no [[lib]] targets"));
}

#[test]
fn test_plan_json_output() {
    let tmp = temp_dir();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.c"), "").unwrap();
    fs::write(
        tmp.path().join("ballast.toml"),
        r#"
        [[lib]]
        name = "base"
        "#,
    )
    .unwrap();

    let output = ballast(&tmp)
        .args(["plan", "--platform", "win32", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let libs = plan["libraries"].as_array().unwrap();
    assert_eq!(libs.len(), 1);
    assert_eq!(libs[0]["out"], "lib/win32/base");
    assert_eq!(libs[0]["linkage"], "static");
}
