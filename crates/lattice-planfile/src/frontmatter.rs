//! Plan frontmatter parsing and the in-memory plan file representation.
//!
//! A plan file is a markdown document whose first line is `---`, followed by
//! a YAML mapping, a closing `---` line, and an arbitrary markdown body:
//!
//! ```markdown
//! ---
//! status: in_progress
//! tags: [backend]
//! blocked_by:
//!   - blue-running-fox.md
//! ---
//! # Ship the importer
//! ```
//!
//! The body is opaque to this library; only the frontmatter is interpreted.
//! `blocked_by` entries are carried through verbatim — dangling references,
//! self-references, and duplicates are the dependency engine's concern, not
//! the parser's.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delimiter line opening and closing a frontmatter block.
const FRONTMATTER_DELIMITER: &str = "---";

/// Lifecycle status of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Plan has not been started.
    Todo,

    /// Plan is actively being worked on.
    InProgress,

    /// Plan has been completed.
    Done,

    /// Plan was abandoned.
    Cancelled,
}

impl PlanStatus {
    /// Returns the status as the string used in frontmatter and API output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The YAML frontmatter of a plan file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFrontmatter {
    /// Current status of the plan.
    pub status: PlanStatus,

    /// Free-form tags for filtering and grouping.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// When the plan was created. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Filenames of plans that must complete before this one.
    ///
    /// Order is the author's declaration order and is preserved. Entries are
    /// not validated here: they may name files that do not exist, repeat, or
    /// name the plan itself.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocked_by: Vec<String>,
}

impl PlanFrontmatter {
    /// Create a minimal frontmatter with the given status and no relations.
    #[must_use]
    pub fn new(status: PlanStatus) -> Self {
        Self {
            status,
            tags: Vec::new(),
            created: None,
            blocked_by: Vec::new(),
        }
    }
}

/// A fully parsed plan file: its name, frontmatter, and markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanFile {
    /// The file name (e.g. `blue-running-fox.md`), unique within a plans
    /// directory.
    pub filename: String,

    /// The parsed frontmatter.
    pub frontmatter: PlanFrontmatter,

    /// The markdown body following the frontmatter block, verbatim.
    pub body: String,
}

/// Outcome of splitting a document into frontmatter and body.
#[derive(Debug)]
pub(crate) enum SplitOutcome<'a> {
    /// Document had a well-delimited frontmatter block.
    Split {
        /// The raw YAML between the delimiter lines.
        yaml: &'a str,
        /// Everything after the closing delimiter line.
        body: &'a str,
    },
    /// Document does not start with a frontmatter block.
    NoFrontmatter,
}

/// Split a document into its raw frontmatter YAML and markdown body.
///
/// The opening delimiter must be the very first line. A missing closing
/// delimiter is treated as no frontmatter rather than guessed at.
pub(crate) fn split_frontmatter(content: &str) -> SplitOutcome<'_> {
    let Some(rest) = content
        .strip_prefix(FRONTMATTER_DELIMITER)
        .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
    else {
        return SplitOutcome::NoFrontmatter;
    };

    // Find the closing delimiter on its own line.
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == FRONTMATTER_DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return SplitOutcome::Split { yaml, body };
        }
        offset += line.len();
    }

    SplitOutcome::NoFrontmatter
}

/// Parse a plan document's content into frontmatter and body.
///
/// Returns `Ok(None)` when the document has no frontmatter block, and an
/// error string when the frontmatter is present but not valid YAML for
/// [`PlanFrontmatter`].
pub(crate) fn parse_document(
    content: &str,
) -> std::result::Result<Option<(PlanFrontmatter, String)>, String> {
    match split_frontmatter(content) {
        SplitOutcome::NoFrontmatter => Ok(None),
        SplitOutcome::Split { yaml, body } => {
            let frontmatter: PlanFrontmatter =
                serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
            Ok(Some((frontmatter, body.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_frontmatter() {
        let doc = "---\nstatus: in_progress\ntags: [backend, migration]\nblocked_by:\n  - blue-running-fox.md\n  - green-dancing-cat.md\n---\n# Title\n\nBody text.\n";
        let (fm, body) = parse_document(doc).unwrap().unwrap();
        assert_eq!(fm.status, PlanStatus::InProgress);
        assert_eq!(fm.tags, vec!["backend", "migration"]);
        assert_eq!(
            fm.blocked_by,
            vec!["blue-running-fox.md", "green-dancing-cat.md"]
        );
        assert_eq!(body, "# Title\n\nBody text.\n");
    }

    #[test]
    fn omitted_fields_default_to_empty() {
        let doc = "---\nstatus: todo\n---\nbody\n";
        let (fm, _) = parse_document(doc).unwrap().unwrap();
        assert!(fm.tags.is_empty());
        assert!(fm.blocked_by.is_empty());
        assert!(fm.created.is_none());
    }

    #[test]
    fn document_without_frontmatter_is_none() {
        assert!(parse_document("# Just markdown\n").unwrap().is_none());
        assert!(parse_document("").unwrap().is_none());
    }

    #[test]
    fn unclosed_frontmatter_is_none() {
        let doc = "---\nstatus: todo\nno closing delimiter\n";
        assert!(parse_document(doc).unwrap().is_none());
    }

    #[test]
    fn unknown_status_is_an_error() {
        let doc = "---\nstatus: paused\n---\n";
        assert!(parse_document(doc).is_err());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let doc = "---\nstatus: [unterminated\n---\n";
        assert!(parse_document(doc).is_err());
    }

    #[test]
    fn blocked_by_order_and_duplicates_are_preserved() {
        let doc = "---\nstatus: todo\nblocked_by: [b.md, a.md, b.md]\n---\n";
        let (fm, _) = parse_document(doc).unwrap().unwrap();
        assert_eq!(fm.blocked_by, vec!["b.md", "a.md", "b.md"]);
    }

    #[test]
    fn crlf_delimiters_are_accepted() {
        let doc = "---\r\nstatus: done\r\n---\r\nbody\r\n";
        let (fm, body) = parse_document(doc).unwrap().unwrap();
        assert_eq!(fm.status, PlanStatus::Done);
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn status_round_trips_through_yaml() {
        for status in [
            PlanStatus::Todo,
            PlanStatus::InProgress,
            PlanStatus::Done,
            PlanStatus::Cancelled,
        ] {
            let yaml = serde_yaml::to_string(&status).unwrap();
            let back: PlanStatus = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(back, status);
            assert_eq!(yaml.trim(), status.as_str());
        }
    }
}
