//! Resilient loading of plan files from a plans directory.
//!
//! A plans directory is a flat directory of `<name>.md` files. Loading is
//! resilient: files that cannot be interpreted as plans are skipped with a
//! [`Warning`] rather than failing the whole load, so a single malformed
//! file never hides the rest of the plan set. Only IO failure on the
//! directory itself is an error.

use crate::error::{Error, Result};
use crate::frontmatter::{PlanFile, parse_document};
use crate::warning::Warning;
use std::path::Path;
use tokio::fs;

/// Check whether a file name is a valid plan filename.
///
/// Valid names match `<stem>.md` where the stem is one or more ASCII
/// letters, digits, underscores, or hyphens. Explicit character checks are
/// used rather than a regex so the rule stays dependency-free and the
/// rejection reasons stay obvious.
#[must_use]
pub fn is_valid_plan_filename(filename: &str) -> bool {
    let Some(stem) = filename.strip_suffix(".md") else {
        return false;
    };

    !stem.is_empty()
        && stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Load a single plan file.
///
/// The file name must be a valid plan filename and the content must carry a
/// parseable frontmatter block.
///
/// # Errors
///
/// Returns [`Error::NotAPlanFile`] for naming or frontmatter problems and
/// [`Error::Io`] if the file cannot be read.
pub async fn load_plan_file(path: &Path) -> Result<PlanFile> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::NotAPlanFile(path.display().to_string()))?;

    if !is_valid_plan_filename(&filename) {
        return Err(Error::NotAPlanFile(filename));
    }

    let content = fs::read_to_string(path).await?;
    match parse_document(&content) {
        Ok(Some((frontmatter, body))) => Ok(PlanFile {
            filename,
            frontmatter,
            body,
        }),
        Ok(None) | Err(_) => Err(Error::NotAPlanFile(filename)),
    }
}

/// Load every plan file in a directory, skipping files that are not plans.
///
/// Returns the loaded plans together with one [`Warning`] per skipped file.
/// Plans are returned sorted by filename so a directory load is
/// deterministic regardless of filesystem iteration order.
///
/// Subdirectories are ignored.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory itself cannot be read. Per-file
/// problems are warnings, never errors.
pub async fn load_plan_dir(dir: &Path) -> Result<(Vec<PlanFile>, Vec<Warning>)> {
    let mut plans = Vec::new();
    let mut warnings = Vec::new();

    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let file_type = entry.file_type().await?;
        if file_type.is_dir() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();

        if !Path::new(&filename)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        {
            warnings.push(Warning::NotMarkdown { filename });
            continue;
        }

        if !is_valid_plan_filename(&filename) {
            warnings.push(Warning::InvalidFilename { filename });
            continue;
        }

        let content = match fs::read_to_string(entry.path()).await {
            Ok(content) => content,
            Err(e) => {
                warnings.push(Warning::Unreadable {
                    filename,
                    error: e.to_string(),
                });
                continue;
            }
        };

        match parse_document(&content) {
            Ok(Some((frontmatter, body))) => plans.push(PlanFile {
                filename,
                frontmatter,
                body,
            }),
            Ok(None) => warnings.push(Warning::MissingFrontmatter { filename }),
            Err(error) => warnings.push(Warning::MalformedFrontmatter { filename, error }),
        }
    }

    plans.sort_by(|a, b| a.filename.cmp(&b.filename));

    tracing::debug!(
        plans = plans.len(),
        skipped = warnings.len(),
        dir = %dir.display(),
        "Loaded plans directory"
    );

    Ok((plans, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("blue-running-fox.md", true)]
    #[case("plan_01.md", true)]
    #[case("A.md", true)]
    #[case("a b.md", false)]
    #[case(".md", false)]
    #[case("plan.markdown", false)]
    #[case("plan.md.bak", false)]
    #[case("../etc/passwd", false)]
    #[case("sub/dir.md", false)]
    #[case("", false)]
    fn plan_filename_validation(#[case] name: &str, #[case] valid: bool) {
        assert_eq!(is_valid_plan_filename(name), valid, "{name}");
    }
}
