//! Output formatter implementations.

use serde::Serialize;

use crate::locator::{Locator, Root};
use crate::{Error, Result};

use super::OutputFormatter;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Validation {
        field: "json_output".to_string(),
        message: format!("failed to serialize to JSON: {e}"),
    })
}

/// Formatter for human-readable output, one entry per line.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_roots(&self, roots: &[Root]) -> Result<String> {
        Ok(roots
            .iter()
            .map(|root| root.locator().as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn format_locators(&self, locators: &[Locator]) -> Result<String> {
        Ok(locators
            .iter()
            .map(Locator::as_str)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn format_normalized(&self, roots: &[Root]) -> Result<String> {
        Ok(roots
            .iter()
            .map(|root| root.normalized().as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for JSON output.
///
/// Roots serialize as objects carrying both the discovered locator and its
/// normalized form; locators serialize as plain strings.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_roots(&self, roots: &[Root]) -> Result<String> {
        to_json(roots)
    }

    fn format_locators(&self, locators: &[Locator]) -> Result<String> {
        to_json(locators)
    }

    fn format_normalized(&self, roots: &[Root]) -> Result<String> {
        to_json(roots)
    }
}

/// Formatter joining entries into a single path-list.
///
/// Roots are written in normalized form so the result can be fed back in as
/// a path-list.
pub struct PathListFormatter {
    separator: char,
}

impl PathListFormatter {
    /// Create a formatter joining entries with `separator`.
    #[must_use]
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    fn join<'a>(&self, entries: impl Iterator<Item = &'a str>) -> String {
        entries
            .collect::<Vec<_>>()
            .join(self.separator.encode_utf8(&mut [0; 4]))
    }
}

impl OutputFormatter for PathListFormatter {
    fn format_roots(&self, roots: &[Root]) -> Result<String> {
        Ok(self.join(roots.iter().map(|root| root.normalized().as_str())))
    }

    fn format_locators(&self, locators: &[Locator]) -> Result<String> {
        Ok(self.join(locators.iter().map(Locator::as_str)))
    }

    fn format_normalized(&self, roots: &[Root]) -> Result<String> {
        self.format_roots(roots)
    }
}
