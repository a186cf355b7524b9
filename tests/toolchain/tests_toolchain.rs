//! Toolchain adapter tests.

use std::path::Path;

use tempfile::TempDir;

use ember_analysis::toolchain::{DEFAULT_PROGRAM, ToolCommand, ToolError, Toolchain};

#[test]
fn test_subcommand_argv_tokens() {
    assert_eq!(ToolCommand::Build.arg(), "build");
    assert_eq!(ToolCommand::Upload.arg(), "upload");
    assert_eq!(ToolCommand::Run.arg(), "run");
    assert_eq!(ToolCommand::Version.arg(), "--version");
}

#[test]
fn test_discover_targets_emberc_on_path() {
    assert_eq!(Toolchain::discover().program(), Path::new(DEFAULT_PROGRAM));
}

// The `cmd /C` wrapper on Windows reports a missing program through the
// exit code, not as a spawn error, so the NotFound tests are unix-only.
#[cfg(unix)]
#[test]
fn test_missing_executable_reports_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("blink.emb");
    std::fs::write(&source, "on start {\n}\n").expect("Failed to write source file");

    let toolchain = Toolchain::new(temp_dir.path().join("emberc-not-installed"));
    let error = toolchain.build(&source, temp_dir.path()).unwrap_err();

    assert!(
        matches!(error, ToolError::NotFound { .. }),
        "expected NotFound, got: {error}"
    );
    assert!(error.to_string().contains("emberc-not-installed"));
}

#[cfg(unix)]
#[test]
fn test_not_found_applies_to_every_subcommand() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("blink.emb");
    std::fs::write(&source, "on start {\n}\n").expect("Failed to write source file");

    let toolchain = Toolchain::new("/nonexistent/emberc-for-tests");

    assert!(matches!(
        toolchain.build(&source, temp_dir.path()),
        Err(ToolError::NotFound { .. })
    ));
    assert!(matches!(
        toolchain.upload(&source, temp_dir.path()),
        Err(ToolError::NotFound { .. })
    ));
    assert!(matches!(
        toolchain.run(&source, temp_dir.path()),
        Err(ToolError::NotFound { .. })
    ));
    assert!(matches!(
        toolchain.version(),
        Err(ToolError::NotFound { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_nonzero_exit_is_output_not_error() {
    // `false` exits 1 no matter the arguments; that is a failed build,
    // not a spawn error.
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("blink.emb");
    std::fs::write(&source, "on start {\n}\n").expect("Failed to write source file");

    let toolchain = Toolchain::new("false");
    let output = toolchain.build(&source, temp_dir.path()).unwrap();
    assert!(!output.success());
    assert_eq!(output.exit_code, 1);
}

#[cfg(unix)]
#[test]
fn test_successful_run_captures_output() {
    let toolchain = Toolchain::new("true");
    let output = toolchain.version().unwrap();
    assert!(output.success());
    assert!(output.stderr.is_empty());
}
