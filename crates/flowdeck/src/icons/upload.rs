use std::path::Path;

use anyhow::{Context, Result};

/// Substrings that block an upload, matched case-insensitively. A denylist
/// check, not full sanitization.
const DENYLIST: [&str; 4] = ["onerror", "onload", "onclick", "script"];

/// Validate user-submitted SVG text. Errors carry the user-visible message
/// shown in the upload dialog.
pub fn validate_svg(content: &str) -> Result<()> {
    if !content.contains("<svg") || !content.contains("</svg>") {
        anyhow::bail!("Invalid SVG content");
    }

    let lowered = content.to_lowercase();
    if DENYLIST.iter().any(|attr| lowered.contains(attr)) {
        anyhow::bail!("SVG contains potentially unsafe content");
    }

    Ok(())
}

/// Read and validate an `.svg` file dropped onto the palette. Returns the
/// icon name (file stem) and the SVG text.
pub fn read_svg_file(path: &Path) -> Result<(String, String)> {
    if path.extension().is_none_or(|ext| ext != "svg") {
        anyhow::bail!("Not an SVG file: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    validate_svg(&content)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("custom")
        .to_string();
    Ok((name, content))
}
