//! Text markers that identify a room's history format.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Preamble that opens every hand of a Winamax tournament history.
pub const WINAMAX_TOURNAMENT_MARKER: &str = r#"Winamax Poker - Tournament ".*?" buyIn:"#;

/// Markers used to split a history file and decide which hands are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryFormat {
    /// Regex matching the start of every hand record
    pub block_marker: String,
    /// Hands whose text contains this token are skipped (Expresso tournaments)
    pub excluded_token: String,
    /// A hand must contain at least one of these to count as hold'em
    pub variant_tokens: Vec<String>,
}

impl Default for HistoryFormat {
    fn default() -> Self {
        Self::winamax()
    }
}

impl HistoryFormat {
    /// Winamax tournament histories.
    pub fn winamax() -> Self {
        Self {
            block_marker: WINAMAX_TOURNAMENT_MARKER.to_string(),
            excluded_token: "Expresso".to_string(),
            variant_tokens: vec!["Hold'em".to_string(), "Holdem".to_string()],
        }
    }

    /// Compile the block marker.
    pub fn marker_regex(&self) -> Result<Regex, PatternError> {
        Regex::new(&self.block_marker).map_err(|source| PatternError {
            field: "block_marker",
            source,
        })
    }

    /// Check whether a hand's text is a hold'em hand of an accepted format.
    pub fn accepts(&self, block: &str) -> bool {
        !block.contains(&self.excluded_token)
            && self.variant_tokens.iter().any(|token| block.contains(token.as_str()))
    }
}

/// A configured pattern failed to compile.
#[derive(Debug, Error)]
#[error("invalid {field} pattern: {source}")]
pub struct PatternError {
    /// Name of the offending setting
    pub field: &'static str,
    #[source]
    pub source: regex::Error,
}
