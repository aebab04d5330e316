use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI binary against an isolated data directory.
pub fn run_cli(data_dir: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_herdctl"));
    cmd.arg("--data-dir").arg(data_dir);
    cmd.args(args);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let output = run_cli(data_dir, args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Pull the trailing id out of a success message like
/// `✓ Registered farmer <id>`.
pub fn trailing_id(stdout: &str) -> String {
    stdout
        .split_whitespace()
        .last()
        .expect("expected an id in output")
        .to_string()
}
