//! Binary-level tests: run the compiled `cidls` and inspect stdout, stderr,
//! and exit status.

use std::fs;
use tempfile::TempDir;

use super::test_utils::{cidls_command, columns, run_plain};

#[test]
fn test_version_flag() {
    let sandbox = TempDir::new().unwrap();
    let output = cidls_command(&sandbox).arg("-v").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(&format!("Version: {}, Build: ", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_help_flag() {
    let sandbox = TempDir::new().unwrap();
    let output = cidls_command(&sandbox).arg("-h").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cidls [OPTIONS] [DIRECTORY] [CID_VERSION]"));
}

#[test]
fn test_lists_directory_with_cids() {
    let sandbox = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("file.txt"), "content").unwrap();

    let output = run_plain(&sandbox, dir.path(), &[]);
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().map(columns).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], ("nested", ""));
    assert_eq!(lines[1].0, "file.txt");
    assert!(lines[1].1.starts_with("bafkrei"));
    assert!(!stdout.contains('\x1b'));
    assert!(output.stderr.is_empty(), "logging must be off by default");
}

#[test]
fn test_positional_cid_version_zero() {
    let sandbox = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("file.txt"), "content").unwrap();

    let output = cidls_command(&sandbox)
        .arg("--color")
        .arg("never")
        .arg(dir.path())
        .arg("0")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let (_, cid) = columns(stdout.lines().next().unwrap());
    assert!(cid.starts_with("Qm"), "expected CIDv0, got {}", cid);
}

#[test]
fn test_invalid_cid_version_fails() {
    let sandbox = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();

    let output = cidls_command(&sandbox)
        .arg(dir.path())
        .arg("3")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid CID version. Use 0 or 1."));
}

#[test]
fn test_missing_directory_fails() {
    let sandbox = TempDir::new().unwrap();
    let missing = sandbox.path().join("does-not-exist");

    let output = run_plain(&sandbox, &missing, &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Directory"));
    assert!(stderr.contains("does not exist."));
}

#[test]
fn test_tilde_expands_to_home() {
    let sandbox = TempDir::new().unwrap();
    let home = sandbox.path().join("home");
    fs::create_dir_all(home.join("projects")).unwrap();
    fs::write(home.join("projects").join("plan.md"), "plan").unwrap();

    let output = cidls_command(&sandbox)
        .arg("--color")
        .arg("never")
        .arg("~/projects")
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(columns(stdout.lines().next().unwrap()).0, "plan.md");
}

#[test]
fn test_color_always_uses_ls_colors() {
    let sandbox = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("f"), "x").unwrap();

    let output = cidls_command(&sandbox)
        .env("LS_COLORS", "di=01;32:cid=36")
        .arg("--color")
        .arg("always")
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert!(lines[0].starts_with("\x1b[01;32msub"));
    assert!(lines[1].contains("\t\x1b[36mbafkrei"));
}

#[test]
fn test_json_format() {
    let sandbox = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("f.txt"), "x").unwrap();

    let output = run_plain(&sandbox, dir.path(), &["--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "sub");
    assert_eq!(entries[0]["kind"], "directory");
    assert_eq!(entries[1]["name"], "f.txt");
    assert!(entries[1]["cid"].as_str().unwrap().starts_with("bafkrei"));
}

#[test]
fn test_env_config_overrides_default_version() {
    let sandbox = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("f.txt"), "x").unwrap();

    let output = cidls_command(&sandbox)
        .env("CIDLS__LISTING__CID_VERSION", "0")
        .arg("--color")
        .arg("never")
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(columns(stdout.lines().next().unwrap()).1.starts_with("Qm"));
}

#[test]
fn test_global_config_file_is_read() {
    let sandbox = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("f.txt"), "x").unwrap();

    let config_dir = sandbox.path().join("config").join("cidls");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[listing]\nformat = \"json\"\n").unwrap();

    let output = run_plain(&sandbox, dir.path(), &[]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["name"], "f.txt");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let sandbox = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("f.txt"), "x").unwrap();

    let output = run_plain(&sandbox, dir.path(), &["--verbose"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cidls starting"));
}
