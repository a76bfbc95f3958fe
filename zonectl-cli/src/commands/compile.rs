//! Script compilation
//!
//! Hands the script to the compiler configured for the environment. The
//! compiler runs as a plain argument vector, its output is re-emitted, and
//! its exit code decides ours.

use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::*;

use crate::config::Settings;
use crate::process::run_checked;

/// Compile one transformation script
pub fn compile_script(script: &str, settings: &Settings) -> Result<()> {
    if !Path::new(script).is_file() {
        bail!("script {} does not exist", script);
    }

    run_checked(&settings.env.compiler, &[script])
        .with_context(|| format!("compilation of {} failed", script))?;

    println!("{} {} compiled", "✓".green(), script);

    Ok(())
}
