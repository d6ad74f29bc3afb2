//! Report model types.

use std::fmt::Write as _;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used in report headers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Descriptive metadata for one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Report title.
    pub title: String,
    /// When the report was generated.
    pub generated_at: NaiveDateTime,
    /// Company or context label.
    pub context_label: Option<String>,
}

impl ReportMetadata {
    /// Creates metadata with an explicit timestamp.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        generated_at: NaiveDateTime,
        context_label: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            generated_at,
            context_label,
        }
    }

    /// Creates metadata stamped with the current local time.
    #[must_use]
    pub fn now(title: impl Into<String>, context_label: Option<String>) -> Self {
        Self::new(title, chrono::Local::now().naive_local(), context_label)
    }
}

/// A single key/value line of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Label.
    pub key: String,
    /// Already formatted value.
    pub value: String,
}

/// A titled group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Section heading.
    pub title: String,
    /// Entries in display order.
    pub entries: Vec<ReportEntry>,
}

impl ReportSection {
    /// Creates an empty section.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(ReportEntry {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Appends an entry, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Looks up the value of the first entry with `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

/// Renderer-facing report: metadata plus ordered sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportModel {
    /// Report metadata.
    pub metadata: ReportMetadata,
    /// Sections in display order.
    pub sections: Vec<ReportSection>,
}

impl ReportModel {
    /// Looks up a section by title.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Plain-text layout: title, blank line, then each section as a heading
    /// followed by `key: value` lines.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.metadata.title);
        out.push('\n');

        for section in &self.sections {
            let _ = write!(out, "\n{}:\n", section.title);
            for entry in &section.entries {
                let _ = writeln!(out, "{}: {}", entry.key, entry.value);
            }
        }

        out
    }
}
