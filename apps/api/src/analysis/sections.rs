//! Section Extractor — splits a document into labeled regions using an
//! explicit header lexicon and word-boundary matching.
//!
//! A section runs from immediately after its header keyword to immediately
//! before the next occurrence of any recognized header, or end of text. The
//! stop set is the pooled lexicon, so a repeated occurrence of the target
//! keyword also terminates the section.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The three extractable section labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLabel {
    Experience,
    Education,
    Skills,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 3] = [
        SectionLabel::Experience,
        SectionLabel::Education,
        SectionLabel::Skills,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            SectionLabel::Experience => "experience",
            SectionLabel::Education => "education",
            SectionLabel::Skills => "skills",
        }
    }

    /// Capitalized form used for gauge titles in the report.
    pub fn display(self) -> &'static str {
        match self {
            SectionLabel::Experience => "Experience",
            SectionLabel::Education => "Education",
            SectionLabel::Skills => "Skills",
        }
    }
}

/// Recognized header vocabulary. The first three are extractable labels;
/// projects/summary/objective are boundary-only.
const HEADERS: [&str; 6] = [
    "experience",
    "education",
    "skills",
    "projects",
    "summary",
    "objective",
];

/// Compiled header vocabulary. Matching is case-insensitive and whole-word:
/// "experienced" never matches "experience".
pub struct HeaderLexicon {
    header_re: Regex,
}

impl HeaderLexicon {
    pub fn new() -> Self {
        let pattern = format!(r"(?i)\b({})\b", HEADERS.join("|"));
        Self {
            header_re: Regex::new(&pattern).expect("header pattern is valid"),
        }
    }

    /// Extracts the region belonging to `label`, or `None` when the header
    /// does not occur. Adjacent headers yield `Some("")`, not `None`. The
    /// nearest following header wins regardless of label.
    ///
    /// The `regex` crate has no lookaround, so the header match and the
    /// following boundary are found as two scans over the same iterator and
    /// the text between them is sliced out.
    pub fn extract(&self, text: &str, label: SectionLabel) -> Option<String> {
        let keyword = label.keyword();
        let mut headers = self.header_re.find_iter(text);
        let start = headers
            .by_ref()
            .find(|m| m.as_str().eq_ignore_ascii_case(keyword))?
            .end();
        let end = headers.next().map(|m| m.start()).unwrap_or(text.len());
        Some(text[start..end].trim().to_string())
    }
}

impl Default for HeaderLexicon {
    fn default() -> Self {
        Self::new()
    }
}
