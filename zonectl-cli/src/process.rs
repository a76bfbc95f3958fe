//! Structured subprocess invocation
//!
//! External programs (the script compiler, the delivery-service control
//! program) are invoked with an argument vector, never through a shell, so
//! nothing in the arguments is ever interpolated. Captured stdout and
//! stderr are re-emitted for the operator; a non-zero child exit becomes a
//! non-zero zonectl exit.

use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Runs `program` with `args`, re-emits its output and checks its exit code
///
/// # Errors
/// Fails when the program cannot be spawned (missing binary, permissions)
/// or exits non-zero. The error carries the exit code and trailing stderr.
pub fn run_checked(program: &str, args: &[&str]) -> Result<()> {
    debug!(program, ?args, "invoking external program");

    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to execute '{}'", program))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Re-emit the child's output on our own streams
    if !stdout.is_empty() {
        print!("{}", stdout);
    }
    if !stderr.is_empty() {
        eprint!("{}", stderr);
    }

    let exit_code = output.status.code().unwrap_or(-1);
    debug!(program, exit_code, "external program finished");

    if !output.status.success() {
        bail!(
            "'{}' exited with code {}{}",
            program,
            exit_code,
            match stderr.trim().lines().last() {
                Some(line) if !line.is_empty() => format!(": {}", line),
                _ => String::new(),
            }
        );
    }

    Ok(())
}
