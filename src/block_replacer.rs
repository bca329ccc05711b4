/*!
 * Cross-line block replacement.
 *
 * A block runs from a literal start marker to the nearest following literal
 * end marker, across any number of lines. Every such block in a document is
 * swapped for a fixed replacement text; nothing from the matched text is
 * carried over.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::app_config::{BlockPattern, DEFAULT_REPLACEMENT};
use crate::errors::{MigrationError, MigrationResult};

/// Compiled pattern for the built-in logout modal block
static DEFAULT_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    build_regex(&BlockPattern::default()).expect("Invalid default block regex")
});

/// Result of replacing blocks in one document
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    /// Document text after replacement
    pub content: String,
    /// Number of blocks that were replaced
    pub blocks: usize,
}

impl Replacement {
    /// Whether any block was replaced
    pub fn changed(&self) -> bool {
        self.blocks > 0
    }
}

/// Replaces marker-delimited blocks with a fixed template
#[derive(Debug, Clone)]
pub struct BlockReplacer {
    regex: Regex,
    replacement: String,
}

impl BlockReplacer {
    /// Build a replacer for the given markers and replacement text
    pub fn new(pattern: &BlockPattern, replacement: impl Into<String>) -> MigrationResult<Self> {
        Ok(Self {
            regex: build_regex(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// Replacer for the logout modal block with the sidebar toggle template
    pub fn logout_modal() -> Self {
        Self {
            regex: DEFAULT_BLOCK_REGEX.clone(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }

    /// Count the blocks present in `content`
    pub fn count_blocks(&self, content: &str) -> usize {
        self.regex.find_iter(content).count()
    }

    /// Replace every block in `content` in a single pass. The template is
    /// returned as-is from the closure, so `$` is never expanded.
    pub fn replace(&self, content: &str) -> Replacement {
        let mut blocks = 0;
        let content = self
            .regex
            .replace_all(content, |_: &Captures| {
                blocks += 1;
                self.replacement.as_str()
            })
            .into_owned();

        if blocks > 0 {
            debug!("Replaced {} block(s)", blocks);
        }
        Replacement { content, blocks }
    }
}

// Markers are literal text; the body is non-greedy and spans newlines
fn build_regex(pattern: &BlockPattern) -> MigrationResult<Regex> {
    if pattern.start_marker.is_empty() || pattern.end_marker.is_empty() {
        return Err(MigrationError::InvalidPattern(
            "start and end markers must not be empty".to_string(),
        ));
    }

    let source = format!(
        "(?s){}.*?{}",
        regex::escape(&pattern.start_marker),
        regex::escape(&pattern.end_marker)
    );
    Ok(Regex::new(&source)?)
}
