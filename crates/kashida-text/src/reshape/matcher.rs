//! Compiled ligature patterns and leftmost-first matching.
//!
//! The enabled patterns are joined into one alternation, each wrapped in its
//! own capture group, so the regex engine's leftmost-first semantics pick the
//! earliest catalogue entry at the leftmost position. Catalogue patterns only
//! use non-capturing groups, which keeps group `i + 1` bound to record `i`.

use core::ops::Range;

use kashida_config::ReshaperConfig;
use regex::{CaptureMatches, Regex};
use tracing::{debug, warn};

use crate::reshape::ligatures::{LigatureRecord, find_ligature, ligatures};

/// One ligature occurrence, as a range of glyph positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LigatureMatch {
    pub range: Range<usize>,
    pub record: &'static LigatureRecord,
}

/// The enabled ligatures of one reshaper configuration, ready to match.
#[derive(Debug, Default)]
pub struct LigatureMatcher {
    records: Vec<&'static LigatureRecord>,
    regex: Option<Regex>,
}

impl LigatureMatcher {
    /// Compile every ligature `config` enables.
    ///
    /// Toggle names that match no known ligature are reported and ignored.
    pub fn build(config: &ReshaperConfig) -> Self {
        for name in config.ligatures.keys() {
            if find_ligature(name).is_none() {
                warn!(ligature = %name, "ignoring toggle for unknown ligature");
            }
        }
        if !config.support_ligatures {
            return Self::default();
        }

        let enabled = ligatures()
            .iter()
            .filter(|record| config.is_ligature_enabled(record.name));
        match Self::with_records(enabled) {
            Ok(matcher) => {
                debug!(enabled = matcher.len(), "ligature matcher built");
                matcher
            }
            Err(err) => {
                warn!(error = %err, "ligature patterns failed to compile; ligatures disabled");
                Self::default()
            }
        }
    }

    /// Compile exactly `records`, in the given priority order.
    pub fn with_records<I>(records: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = &'static LigatureRecord>,
    {
        let records: Vec<_> = records.into_iter().collect();
        if records.is_empty() {
            return Ok(Self::default());
        }

        let alternation = records
            .iter()
            .map(|record| format!("({})", record.pattern))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&alternation)?;
        if regex.captures_len() != records.len() + 1 {
            // a capturing group inside a pattern would shift every group after it
            return Err(regex::Error::Syntax(format!(
                "ligature patterns must not contain capturing groups: {alternation}"
            )));
        }

        Ok(Self {
            records,
            regex: Some(regex),
        })
    }

    /// Number of enabled ligatures.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The non-overlapping ligature matches in `text`, left to right, with
    /// ranges counted in chars.
    pub fn find_iter<'m, 't>(&'m self, text: &'t str) -> LigatureMatches<'m, 't> {
        LigatureMatches {
            records: &self.records,
            captures: self.regex.as_ref().map(|regex| regex.captures_iter(text)),
            text,
            byte_pos: 0,
            char_pos: 0,
        }
    }
}

/// Iterator returned by [`LigatureMatcher::find_iter`].
#[derive(Debug)]
pub struct LigatureMatches<'m, 't> {
    records: &'m [&'static LigatureRecord],
    captures: Option<CaptureMatches<'m, 't>>,
    text: &'t str,
    byte_pos: usize,
    char_pos: usize,
}

impl LigatureMatches<'_, '_> {
    /// Char index of `byte`; offsets must be visited in increasing order.
    fn char_index(&mut self, byte: usize) -> usize {
        self.char_pos += self.text[self.byte_pos..byte].chars().count();
        self.byte_pos = byte;
        self.char_pos
    }
}

impl Iterator for LigatureMatches<'_, '_> {
    type Item = LigatureMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.as_mut()?.next()?;
        let whole = caps.get(0)?;
        let group = caps.iter().skip(1).position(|group| group.is_some())?;
        let record = *self.records.get(group)?;

        let start = self.char_index(whole.start());
        let end = self.char_index(whole.end());
        Some(LigatureMatch {
            range: start..end,
            record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reshape::ligatures::LigatureGroup;

    static UNTERMINATED: LigatureRecord = LigatureRecord {
        group: LigatureGroup::Letter,
        name: "UNTERMINATED CLASS",
        pattern: "\u{0644}[\u{0627}\u{0623}",
        forms: [Some('\u{FEFB}'), None, None, None],
    };

    static CAPTURING: LigatureRecord = LigatureRecord {
        group: LigatureGroup::Letter,
        name: "CAPTURING GROUP",
        pattern: "\u{0644}(\u{0627}|\u{0623})",
        forms: [Some('\u{FEFB}'), None, None, None],
    };

    fn names(matcher: &LigatureMatcher, text: &str) -> Vec<(&'static str, Range<usize>)> {
        matcher
            .find_iter(text)
            .map(|m| (m.record.name, m.range))
            .collect()
    }

    fn only(names: &[&str]) -> LigatureMatcher {
        let records = names.iter().map(|name| find_ligature(name).unwrap());
        LigatureMatcher::with_records(records).unwrap()
    }

    #[test]
    fn every_builtin_pattern_compiles() {
        let matcher = LigatureMatcher::with_records(ligatures()).unwrap();
        assert_eq!(matcher.len(), ligatures().len());
        for record in ligatures() {
            assert!(Regex::new(record.pattern).is_ok(), "{}", record.name);
        }
    }

    #[test]
    fn rejects_malformed_patterns() {
        assert!(LigatureMatcher::with_records([&UNTERMINATED]).is_err());
        assert!(LigatureMatcher::with_records([&CAPTURING]).is_err());
    }

    #[test]
    fn earlier_ligature_wins_at_same_position() {
        // ALLAH comes before any letter ligature starting with alef
        let matcher = LigatureMatcher::build(&ReshaperConfig::default());
        let found = names(&matcher, "\u{0627}\u{0644}\u{0644}\u{0647}");
        assert_eq!(found, vec![("ALLAH", 0..4)]);
    }

    #[test]
    fn matches_do_not_overlap() {
        let matcher = only(&["ARABIC LIGATURE LAM WITH ALEF"]);
        // lam alef lam alef, then a lone lam
        let found = names(&matcher, "\u{0644}\u{0627}\u{0644}\u{0627}\u{0644}");
        assert_eq!(
            found,
            vec![
                ("ARABIC LIGATURE LAM WITH ALEF", 0..2),
                ("ARABIC LIGATURE LAM WITH ALEF", 2..4),
            ]
        );
    }

    #[test]
    fn ranges_count_chars_not_bytes() {
        let matcher = only(&["ARABIC LIGATURE LAM WITH ALEF"]);
        // two one-byte chars, then a two-byte letter, before the match
        let found = names(&matcher, "ab\u{0628}\u{0644}\u{0627}");
        assert_eq!(found, vec![("ARABIC LIGATURE LAM WITH ALEF", 3..5)]);
    }

    #[test]
    fn character_class_alternatives() {
        let matcher = only(&["RIAL SIGN"]);
        assert_eq!(names(&matcher, "\u{0631}\u{06CC}\u{0627}\u{0644}").len(), 1);
        assert_eq!(names(&matcher, "x\u{0631}\u{064A}\u{0627}\u{0644}"), vec![("RIAL SIGN", 1..5)]);
        assert!(names(&matcher, "\u{0631}\u{0627}\u{0627}\u{0644}").is_empty());
    }

    #[test]
    fn disabled_ligatures_are_not_compiled() {
        let mut config = ReshaperConfig::default();
        config.set_ligature("ALLAH", false);
        let all = LigatureMatcher::build(&ReshaperConfig::default());
        let matcher = LigatureMatcher::build(&config);
        assert_eq!(matcher.len() + 1, all.len());
        assert!(
            names(&matcher, "\u{0627}\u{0644}\u{0644}\u{0647}")
                .iter()
                .all(|(name, _)| *name != "ALLAH")
        );
    }

    #[test]
    fn ligature_support_off_matches_nothing() {
        let config = ReshaperConfig {
            support_ligatures: false,
            ..ReshaperConfig::default()
        };
        let matcher = LigatureMatcher::build(&config);
        assert!(matcher.is_empty());
        assert!(names(&matcher, "\u{0644}\u{0627}").is_empty());
    }

    #[test]
    fn unknown_toggle_names_are_ignored() {
        let mut config = ReshaperConfig::default();
        config.set_ligature("NOT A LIGATURE", true);
        let matcher = LigatureMatcher::build(&config);
        assert_eq!(matcher.len(), ligatures().len());
    }

    #[test]
    fn empty_text_has_no_matches() {
        let matcher = LigatureMatcher::build(&ReshaperConfig::default());
        assert_eq!(matcher.find_iter("").count(), 0);
    }
}
