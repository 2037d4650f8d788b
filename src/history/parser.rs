//! Whole-log parsing: segmentation followed by extraction.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::extract::{Exclusion, HandExtractor, ParsedHand};
use super::format::{HistoryFormat, PatternError};
use super::segment::split_blocks;

/// Block counts from parsing one or more logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSummary {
    /// Hand blocks found
    pub blocks: usize,
    /// Blocks that produced a hand
    pub hands: usize,
    pub excluded_format: usize,
    pub missing_hand_id: usize,
    pub missing_seat: usize,
    pub missing_hole_cards: usize,
    pub wrong_table_size: usize,
}

impl ParseSummary {
    /// Count one excluded block.
    pub fn record_exclusion(&mut self, exclusion: Exclusion) {
        match exclusion {
            Exclusion::Format => self.excluded_format += 1,
            Exclusion::MissingHandId => self.missing_hand_id += 1,
            Exclusion::MissingSeat => self.missing_seat += 1,
            Exclusion::MissingHoleCards => self.missing_hole_cards += 1,
            Exclusion::TableSize(_) => self.wrong_table_size += 1,
        }
    }

    /// Total number of excluded blocks.
    pub fn excluded(&self) -> usize {
        self.excluded_format
            + self.missing_hand_id
            + self.missing_seat
            + self.missing_hole_cards
            + self.wrong_table_size
    }

    /// Add another summary's counts to this one.
    pub fn merge(&mut self, other: &ParseSummary) {
        self.blocks += other.blocks;
        self.hands += other.hands;
        self.excluded_format += other.excluded_format;
        self.missing_hand_id += other.missing_hand_id;
        self.missing_seat += other.missing_seat;
        self.missing_hole_cards += other.missing_hole_cards;
        self.wrong_table_size += other.wrong_table_size;
    }
}

/// Hands parsed from one log.
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    pub hands: Vec<ParsedHand>,
    pub summary: ParseSummary,
}

/// Parser for one history format and one target player.
#[derive(Debug, Clone)]
pub struct HistoryParser {
    marker: Regex,
    extractor: HandExtractor,
}

impl HistoryParser {
    pub fn new(format: &HistoryFormat, target: &str) -> Result<Self, PatternError> {
        Ok(Self {
            marker: format.marker_regex()?,
            extractor: HandExtractor::new(format.clone(), target)?,
        })
    }

    /// Parser for Winamax tournament histories.
    pub fn winamax(target: &str) -> Result<Self, PatternError> {
        Self::new(&HistoryFormat::winamax(), target)
    }

    pub fn target(&self) -> &str {
        self.extractor.target()
    }

    /// Split a log into hand blocks.
    pub fn blocks<'a>(&self, log: &'a str) -> Vec<&'a str> {
        split_blocks(log, &self.marker)
    }

    /// Parse a log, keeping counts of what was excluded and why.
    pub fn parse_log(&self, log: &str) -> ParsedLog {
        let mut parsed = ParsedLog::default();

        for (i, block) in self.blocks(log).into_iter().enumerate() {
            parsed.summary.blocks += 1;
            match self.extractor.extract(block) {
                Ok(hand) => {
                    log::debug!(
                        "block {}: hand {} seat {} [{}]",
                        i + 1,
                        hand.hand_id(),
                        hand.seat(),
                        hand.hole_cards()
                    );
                    parsed.summary.hands += 1;
                    parsed.hands.push(hand);
                }
                Err(exclusion) => {
                    log::debug!("block {}: skipped, {}", i + 1, exclusion);
                    parsed.summary.record_exclusion(exclusion);
                }
            }
        }

        parsed
    }

    /// Parse a log, returning only the eligible hands.
    pub fn parse_hands(&self, log: &str) -> Vec<ParsedHand> {
        self.parse_log(log).hands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::extract::tests::open_raise_block;

    const MARKER: &str = "Winamax Poker - Tournament \"Sunday Warmup\" buyIn:";

    fn log_of(blocks: &[String]) -> String {
        let mut log = String::from("\u{feff}");
        for block in blocks {
            log.push_str(MARKER);
            log.push_str(block);
        }
        log
    }

    #[test]
    fn test_empty_log() {
        let parser = HistoryParser::winamax("hero").unwrap();
        let parsed = parser.parse_log("");
        assert!(parsed.hands.is_empty());
        assert_eq!(parsed.summary, ParseSummary::default());
    }

    #[test]
    fn test_parse_mixed_log() {
        let good = open_raise_block("hero");
        let no_reveal = good.replace("hero shows [Ah Kh]", "hero mucks");
        let expresso = good.replace("Holdem no limit", "Expresso Holdem no limit");
        let short = good.replace("Seat 2: bob (14000)\n", "");
        let log = log_of(&[good.clone(), no_reveal, expresso, short, good]);

        let parser = HistoryParser::winamax("hero").unwrap();
        let parsed = parser.parse_log(&log);

        assert_eq!(parsed.hands.len(), 2);
        assert_eq!(parsed.summary.blocks, 5);
        assert_eq!(parsed.summary.hands, 2);
        assert_eq!(parsed.summary.missing_hole_cards, 1);
        assert_eq!(parsed.summary.excluded_format, 1);
        assert_eq!(parsed.summary.wrong_table_size, 1);
        assert_eq!(parsed.summary.excluded(), 3);
        assert_eq!(parser.parse_hands(&log), parsed.hands);
    }

    #[test]
    fn test_summary_merge() {
        let mut a = ParseSummary {
            blocks: 3,
            hands: 1,
            missing_seat: 2,
            ..Default::default()
        };
        let b = ParseSummary {
            blocks: 2,
            hands: 1,
            wrong_table_size: 1,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.blocks, 5);
        assert_eq!(a.hands, 2);
        assert_eq!(a.excluded(), 3);
    }
}
