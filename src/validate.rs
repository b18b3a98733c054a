//! Checks run before publishing a build of the dashboard data.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::api::parse_document;

/// Fail when a file starts with a pasted `git diff` header
pub fn check_no_patch_header(path: &Path) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let first_line = content
        .trim_start_matches('\u{feff}')
        .lines()
        .next()
        .unwrap_or("")
        .trim();
    debug!("First line of {}: {:?}", path.display(), first_line);

    if first_line.starts_with("diff --git ") {
        bail!(
            "{} looks like it contains an accidentally pasted git patch. \
             Remove the lines starting with \"diff --git\", \"index\", \"---\", \"+++\" and \"@@\".",
            path.display()
        );
    }

    Ok(())
}

/// Fail when a file is not syntactically valid JSON (a leading BOM is fine)
pub fn check_json(path: &Path) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    if let Err(e) = parse_document(&content) {
        bail!("{} is not valid JSON: {:#}", path.display(), e);
    }

    Ok(())
}
