//! References: caller-supplied line ranges that anchor visible windows.
//!
//! References are an input snapshot. The engine clones them into each [`FoldingState`]
//! but never rewrites their ranges.
//!
//! [`FoldingState`]: crate::FoldingState

use serde::{Deserialize, Serialize};

/// The line span a reference points at (`start_line..=end_line`, 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRange {
    /// First referenced line (inclusive).
    pub start_line: usize,
    /// Last referenced line (inclusive).
    pub end_line: usize,
}

impl ReferenceRange {
    /// Create a reference range.
    pub const fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// A range covering exactly one line.
    pub const fn single(line: usize) -> Self {
        Self::new(line, line)
    }

    /// Check if line number is within the referenced span
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    /// `end_line - start_line`, used to rank how specific a reference is.
    fn span_len(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }
}

/// A region of interest in the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Caller-chosen identifier.
    pub id: String,
    /// Referenced lines. References without a range never force anything visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ReferenceRange>,
}

impl Reference {
    /// Create a reference with an explicit id.
    pub fn new(id: impl Into<String>, range: Option<ReferenceRange>) -> Self {
        Self {
            id: id.into(),
            range,
        }
    }

    /// Create a reference spanning `start_line..=end_line`.
    pub fn with_lines(id: impl Into<String>, start_line: usize, end_line: usize) -> Self {
        Self::new(id, Some(ReferenceRange::new(start_line, end_line)))
    }

    /// Create a reference to a file in a repository.
    ///
    /// The id has the form `file-reference-{repo}::{path}`, suffixed with
    /// `-{start}-{end}` when a range is given.
    pub fn for_file(repo: &str, path: &str, range: Option<ReferenceRange>) -> Self {
        let id = match range {
            Some(r) => format!(
                "file-reference-{repo}::{path}-{}-{}",
                r.start_line, r.end_line
            ),
            None => format!("file-reference-{repo}::{path}"),
        };
        Self { id, range }
    }
}

/// Find the most specific reference covering `line`.
///
/// Among all references whose range contains `line`, the one with the shortest range wins;
/// on ties the earliest reference in `references` is returned.
pub fn reference_at_line(references: &[Reference], line: usize) -> Option<&Reference> {
    references
        .iter()
        .filter_map(|reference| {
            let range = reference.range?;
            range.contains_line(line).then_some((range.span_len(), reference))
        })
        .min_by_key(|(len, _)| *len)
        .map(|(_, reference)| reference)
}

/// All line numbers covered by at least one reference, sorted and deduplicated.
///
/// Lines beyond `total_lines` are skipped so the result can be mapped straight onto
/// document lines.
pub fn referenced_lines(references: &[Reference], total_lines: usize) -> Vec<usize> {
    let mut lines: Vec<usize> = references
        .iter()
        .filter_map(|reference| reference.range)
        .flat_map(|range| range.start_line.max(1)..=range.end_line.min(total_lines))
        .collect();
    lines.sort_unstable();
    lines.dedup();
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_file_ids() {
        let with_range = Reference::for_file(
            "github.com/acme/widgets",
            "src/lib.rs",
            Some(ReferenceRange::new(10, 15)),
        );
        assert_eq!(
            with_range.id,
            "file-reference-github.com/acme/widgets::src/lib.rs-10-15"
        );

        let whole_file = Reference::for_file("github.com/acme/widgets", "src/lib.rs", None);
        assert_eq!(whole_file.id, "file-reference-github.com/acme/widgets::src/lib.rs");
        assert!(whole_file.range.is_none());
    }

    #[test]
    fn test_single_line_range() {
        let range = ReferenceRange::single(42);
        assert_eq!(range, ReferenceRange::new(42, 42));
        assert!(range.contains_line(42));
        assert!(!range.contains_line(43));
    }

    #[test]
    fn test_reference_at_line_prefers_shortest() {
        let references = vec![
            Reference::with_lines("outer", 1, 40),
            Reference::new("no-range", None),
            Reference::with_lines("inner", 10, 12),
            Reference::with_lines("inner-twin", 20, 22),
        ];

        assert_eq!(reference_at_line(&references, 11).map(|r| r.id.as_str()), Some("inner"));
        assert_eq!(reference_at_line(&references, 30).map(|r| r.id.as_str()), Some("outer"));
        assert!(reference_at_line(&references, 41).is_none());
    }

    #[test]
    fn test_reference_at_line_tie_keeps_input_order() {
        let references = vec![
            Reference::with_lines("first", 5, 8),
            Reference::with_lines("second", 6, 9),
        ];
        assert_eq!(reference_at_line(&references, 7).map(|r| r.id.as_str()), Some("first"));
    }

    #[test]
    fn test_referenced_lines_skips_out_of_bounds() {
        let references = vec![
            Reference::with_lines("a", 3, 5),
            Reference::with_lines("b", 4, 6),
            Reference::with_lines("c", 9, 14),
            Reference::new("d", None),
        ];
        assert_eq!(referenced_lines(&references, 10), vec![3, 4, 5, 6, 9, 10]);
    }

    #[test]
    fn test_reference_serde_shape() {
        let json = serde_json::to_value(Reference::with_lines("1", 10, 15)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "1", "range": { "startLine": 10, "endLine": 15 } })
        );

        let parsed: Reference = serde_json::from_str(r#"{ "id": "2" }"#).unwrap();
        assert_eq!(parsed, Reference::new("2", None));
    }
}
