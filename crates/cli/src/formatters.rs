//! Output rendering and delivery.
//!
//! Responsibilities:
//! - Render values as JSON (pretty or compact) or YAML.
//! - Write rendered output to stdout or atomically to a file.
//!
//! Does NOT handle:
//! - Choosing where output goes (see `dispatch`).
//!
//! Invariants:
//! - Rendered output always ends with a newline.
//! - Status messages go to stderr so stdout stays machine-readable.

use std::path::Path;

use anyhow::{Context, Result};
use dotpath_config::OutputFormat;
use serde::Serialize;

/// Render `value` in `format`.
///
/// `pretty` only affects JSON; YAML is always block style.
pub fn render<T>(value: &T, format: OutputFormat, pretty: bool) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let mut output = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// Write rendered output to file or stdout.
pub fn output_result(output: &str, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!("Results written to {} ({} format)", path.display(), format);
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Write formatted output to a file atomically.
///
/// Creates parent directories if needed, writes to temp file then renames
/// for atomicity.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // A bare file name has an empty parent; use the current directory.
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
