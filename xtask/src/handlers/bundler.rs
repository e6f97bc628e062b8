use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use suite_bundler::BundlerConfig;

/// Prints the validated configuration document.
///
/// # Errors
/// Returns an error if the built-in configuration violates an invariant.
pub fn show_config(compact: bool) -> Result<()> {
    let config = BundlerConfig::preset();
    config.validate()?;

    let document = if compact { config.to_json()? } else { config.to_json_pretty()? };
    println!("{document}");
    Ok(())
}

/// Writes the validated configuration document to `out`.
///
/// # Errors
/// Returns an error if validation fails or the file cannot be written.
pub fn emit_config(out: &Path) -> Result<()> {
    let config = BundlerConfig::preset();
    config.validate()?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut document = config.to_json_pretty()?;
    document.push('\n');
    fs::write(out, document).with_context(|| format!("Failed to write {}", out.display()))?;

    println!("✅ Bundler configuration written to {}", out.display());
    Ok(())
}

/// Validates the built-in configuration, or the document at `file`.
///
/// # Errors
/// Returns an error if the document cannot be read or any invariant is violated.
pub fn check_config(file: Option<&Path>) -> Result<()> {
    let (config, label) = match file {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (BundlerConfig::from_json(&raw)?, path.display().to_string())
        },
        None => (BundlerConfig::preset(), "built-in configuration".to_owned()),
    };

    let violations = config.violations();
    if violations.is_empty() {
        println!("✅ {label} is valid");
        println!(
            "   base {}, {} plugins, {} chunks, worker format {}",
            config.base,
            config.plugins.len(),
            config.manual_chunks().len(),
            config.worker.format
        );
        return Ok(());
    }

    for violation in &violations {
        println!("❌ {violation}");
    }
    anyhow::bail!("{label}: {} violation(s) found", violations.len());
}
