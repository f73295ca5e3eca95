use std::process::Command;

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_spellout"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_normalizes_german_text() {
    let output = Command::new(env!("CARGO_BIN_EXE_spellout"))
        .args(["--lang", "de", "25°C"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "fünfundzwanzig Grad Celsius");
}

#[test]
fn test_cli_rejects_unknown_language() {
    let output = Command::new(env!("CARGO_BIN_EXE_spellout"))
        .args(["--lang", "xx", "text"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not supported"));
}
