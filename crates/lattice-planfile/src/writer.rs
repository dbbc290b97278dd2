//! Writing plan files back to disk.

use crate::error::Result;
use crate::frontmatter::PlanFile;
use std::path::Path;
use tokio::fs;

/// Render a plan file to its on-disk document form.
///
/// # Errors
///
/// Returns an error if the frontmatter fails YAML serialization.
pub fn render_plan_file(plan: &PlanFile) -> Result<String> {
    let yaml = serde_yaml::to_string(&plan.frontmatter)?;
    Ok(format!("---\n{yaml}---\n{}", plan.body))
}

/// Write a plan file into the given directory under its own filename.
///
/// # Errors
///
/// Returns an error if serialization or the filesystem write fails.
pub async fn write_plan_file(dir: &Path, plan: &PlanFile) -> Result<()> {
    let document = render_plan_file(plan)?;
    fs::write(dir.join(&plan.filename), document).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::{PlanFrontmatter, PlanStatus, parse_document};

    #[test]
    fn rendered_document_parses_back() {
        let mut frontmatter = PlanFrontmatter::new(PlanStatus::InProgress);
        frontmatter.tags = vec!["backend".to_string()];
        frontmatter.blocked_by = vec!["blue-running-fox.md".to_string()];

        let plan = PlanFile {
            filename: "green-dancing-cat.md".to_string(),
            frontmatter: frontmatter.clone(),
            body: "# Green dancing cat\n".to_string(),
        };

        let rendered = render_plan_file(&plan).unwrap();
        let (parsed, body) = parse_document(&rendered).unwrap().unwrap();
        assert_eq!(parsed, frontmatter);
        assert_eq!(body, plan.body);
    }
}
