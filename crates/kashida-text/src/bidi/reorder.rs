use core::ops::Range;

use tracing::trace;

use crate::bidi::BidiOptions;
use crate::bidi::class::{BidiClass, CharProperties, UnicodeProperties};
use crate::bidi::levels::{
    BidiChar, Direction, LevelRun, classify_text, forced_base_level, level_runs, paragraph_level,
    resolve_explicit,
};
use crate::bidi::resolve::{resolve_implicit, resolve_neutral, resolve_weak};

/// Stand-in for UTF-16 units that do not form a code point.
pub const REPLACEMENT_PLACEHOLDER: char = '?';

/// A run of text with a single BiDi embedding level, in visual order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidiRun {
    /// Index range into the visual character sequence.
    pub range: Range<usize>,
    /// Embedding level for this run.
    pub level: u8,
}

/// Result of running the bidi algorithm over one piece of text.
#[derive(Debug, Clone)]
pub struct BidiParagraph {
    base_level: u8,
    runs: Vec<LevelRun>,
    resolved: Vec<BidiChar>,
    visual: Vec<BidiChar>,
}

impl BidiParagraph {
    /// Run every pass over `text` using the bundled Unicode properties.
    pub fn new(text: &str, options: &BidiOptions) -> Self {
        Self::analyze(text.chars(), options, &UnicodeProperties)
    }

    /// Run every pass over `chars` with a caller-supplied property source.
    pub fn analyze<P, I>(chars: I, options: &BidiOptions, props: &P) -> Self
    where
        P: CharProperties + ?Sized,
        I: IntoIterator<Item = char>,
        I::IntoIter: Clone,
    {
        let chars = chars.into_iter();
        let base_level = forced_base_level(options.base_dir)
            .unwrap_or_else(|| paragraph_level(chars.clone(), options.upper_is_rtl, props));

        let mut records = classify_text(chars, base_level, options.upper_is_rtl, props);
        resolve_explicit(&mut records, base_level);

        let runs = level_runs(&records, base_level);
        resolve_weak(&mut records, &runs);
        resolve_neutral(&mut records, &runs);
        resolve_implicit(&mut records);

        let mut visual = records.clone();
        reset_whitespace_levels(&mut visual, base_level);
        reorder_lines(&mut visual);
        apply_mirroring(&mut visual, props);

        trace!(
            base_level,
            chars = records.len(),
            runs = runs.len(),
            "bidi paragraph resolved"
        );

        Self {
            base_level,
            runs,
            resolved: records,
            visual,
        }
    }

    pub fn base_level(&self) -> u8 {
        self.base_level
    }

    pub fn base_direction(&self) -> Direction {
        Direction::from_level(self.base_level)
    }

    /// Level runs computed after explicit resolution, in logical order.
    pub fn level_runs(&self) -> &[LevelRun] {
        &self.runs
    }

    /// Retained characters in logical order with their implicit levels.
    pub fn resolved_chars(&self) -> &[BidiChar] {
        &self.resolved
    }

    /// Characters in display order, after line resets and mirroring.
    pub fn visual_chars(&self) -> &[BidiChar] {
        &self.visual
    }

    /// Input char index for each visual position.
    ///
    /// Formatting characters removed by rule X9 have no visual position and
    /// do not appear in the map.
    pub fn visual_indices(&self) -> Vec<usize> {
        self.visual.iter().map(|ch| ch.index).collect()
    }

    /// Runs of equal final level, in visual order.
    pub fn visual_runs(&self) -> Vec<BidiRun> {
        let mut runs: Vec<BidiRun> = Vec::new();
        for (i, ch) in self.visual.iter().enumerate() {
            match runs.last_mut() {
                Some(run) if run.level == ch.level => run.range.end = i + 1,
                _ => runs.push(BidiRun {
                    range: i..i + 1,
                    level: ch.level,
                }),
            }
        }
        runs
    }

    pub fn to_visual_string(&self) -> String {
        self.visual.iter().map(|ch| ch.ch).collect()
    }
}

/// Rule L1: separators, and whitespace before them or at the end of the
/// text, return to the paragraph level.
fn reset_whitespace_levels(chars: &mut [BidiChar], base_level: u8) {
    let mut reset = true;
    for ch in chars.iter_mut().rev() {
        match ch.original_class {
            BidiClass::B | BidiClass::S => {
                ch.level = base_level;
                reset = true;
            }
            BidiClass::WS | BidiClass::BN if reset => ch.level = base_level,
            _ => reset = false,
        }
    }
}

/// Rule L2, line by line. Paragraph separators end a line and keep their
/// position.
fn reorder_lines(chars: &mut [BidiChar]) {
    let mut start = 0;
    for i in 0..chars.len() {
        if chars[i].original_class == BidiClass::B {
            reverse_levels(&mut chars[start..i]);
            start = i + 1;
        }
    }
    reverse_levels(&mut chars[start..]);
}

/// From the highest level down to the lowest odd level, reverse every
/// maximal sequence at or above that level.
fn reverse_levels(line: &mut [BidiChar]) {
    let Some(highest) = line.iter().map(|ch| ch.level).max() else {
        return;
    };
    let Some(lowest_odd) = line.iter().map(|ch| ch.level).filter(|l| l % 2 == 1).min() else {
        return;
    };

    for level in (lowest_odd..=highest).rev() {
        let mut i = 0;
        while i < line.len() {
            if line[i].level < level {
                i += 1;
                continue;
            }
            let start = i;
            while i < line.len() && line[i].level >= level {
                i += 1;
            }
            line[start..i].reverse();
        }
    }
}

/// Rule L4: characters displayed right-to-left take their mirror glyph.
fn apply_mirroring<P: CharProperties + ?Sized>(chars: &mut [BidiChar], props: &P) {
    for ch in chars.iter_mut() {
        if Direction::from_level(ch.level) == Direction::Rtl {
            if let Some(mirror) = props.mirrored(ch.ch) {
                ch.ch = mirror;
            }
        }
    }
}

/// Reorder `text` from logical to visual (display) order.
pub fn reorder_for_display(text: &str, options: &BidiOptions) -> String {
    reorder_with(text, options, &UnicodeProperties)
}

/// Like [`reorder_for_display`] with a caller-supplied property source.
pub fn reorder_with<P: CharProperties + ?Sized>(text: &str, options: &BidiOptions, props: &P) -> String {
    if text.is_empty() {
        return String::new();
    }
    BidiParagraph::analyze(text.chars(), options, props).to_visual_string()
}

/// Reorder UTF-16 text; unpaired surrogates become `?`.
pub fn reorder_utf16(units: &[u16], options: &BidiOptions) -> String {
    if units.is_empty() {
        return String::new();
    }
    let decoded = char::decode_utf16(units.iter().copied())
        .map(|unit| unit.unwrap_or(REPLACEMENT_PLACEHOLDER));
    let chars: Vec<char> = decoded.collect();
    BidiParagraph::analyze(chars, options, &UnicodeProperties).to_visual_string()
}

/// Build a visual-to-logical character index map for `text`.
///
/// For each visual index `v`, `map[v]` gives the logical char index in
/// `text`.
pub fn visual_index_map(text: &str, options: &BidiOptions) -> Vec<usize> {
    BidiParagraph::new(text, options).visual_indices()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kashida_config::BaseDirection;

    fn display(text: &str) -> String {
        reorder_for_display(text, &BidiOptions::default())
    }

    fn display_with(text: &str, base_dir: BaseDirection) -> String {
        reorder_for_display(
            text,
            &BidiOptions {
                base_dir,
                ..BidiOptions::default()
            },
        )
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(display(""), "");
        assert_eq!(reorder_utf16(&[], &BidiOptions::default()), "");
    }

    #[test]
    fn ltr_text_is_unchanged() {
        assert_eq!(display("hello"), "hello");
        assert_eq!(display("hello, world (1 + 2)"), "hello, world (1 + 2)");
    }

    #[test]
    fn rtl_text_is_reversed() {
        assert_eq!(display("سلام"), "مالس");
        assert_eq!(display("שלום"), "םולש");
    }

    #[test]
    fn arabic_word_after_latin_is_reversed_in_place() {
        assert_eq!(display("abc سلام"), "abc مالس");
    }

    #[test]
    fn rtl_paragraph_moves_latin_left() {
        assert_eq!(display("ابج abc"), "abc جبا");
    }

    #[test]
    fn digits_after_arabic_keep_their_order() {
        // the digits resolve to AN and sit one level above the letters
        assert_eq!(display("ابج 123"), "123 جبا");
    }

    #[test]
    fn brackets_are_mirrored_in_rtl() {
        assert_eq!(display("ا(ب)"), "(ب)ا");
        assert_eq!(display("(سلم)"), "(ملس)");
        assert_eq!(display("(a)"), "(a)");
    }

    #[test]
    fn override_forces_digits_rtl() {
        // RLO 1 2 3 PDF in an LTR paragraph; the Latin after PDF is unaffected
        let visual = display_with("\u{202E}123\u{202C} ab", BaseDirection::Ltr);
        assert_eq!(visual, "321 ab");

        let para = BidiParagraph::new(
            "\u{202E}123\u{202C} ab",
            &BidiOptions {
                base_dir: BaseDirection::Ltr,
                ..BidiOptions::default()
            },
        );
        let classes: Vec<BidiClass> = para.resolved_chars().iter().map(|c| c.class).collect();
        assert_eq!(&classes[..3], &[BidiClass::R, BidiClass::R, BidiClass::R]);
        assert_eq!(classes[4], BidiClass::L);
    }

    #[test]
    fn override_mirrors_forced_characters() {
        let visual = display_with("\u{202E}a(b\u{202C}", BaseDirection::Ltr);
        assert_eq!(visual, "b)a");
    }

    #[test]
    fn base_direction_override_rtl() {
        assert_eq!(display_with("abc def", BaseDirection::Rtl), "abc def");
        assert_eq!(display_with("abc 123", BaseDirection::Rtl), "abc 123");
        assert_eq!(display_with("a !", BaseDirection::Rtl), "! a");
    }

    #[test]
    fn trailing_whitespace_returns_to_base_level() {
        let para = BidiParagraph::new("اب  ", &BidiOptions::default());
        let levels: Vec<u8> = para.resolved_chars().iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![1, 1, 1, 1]);
        assert!(para.visual_chars().iter().all(|c| c.level == 1));
    }

    #[test]
    fn lines_are_reordered_independently() {
        assert_eq!(display("اب\nجد"), "با\nدج");
    }

    #[test]
    fn mirroring_only_applies_to_odd_levels() {
        let text = "a(b) س(ل)";
        let para = BidiParagraph::new(text, &BidiOptions::default());
        for (visual, original) in para
            .visual_chars()
            .iter()
            .zip(para.visual_indices().iter().map(|&i| text.chars().nth(i).unwrap()))
        {
            if visual.level % 2 == 1 && UnicodeProperties.mirrored(original).is_some() {
                assert_ne!(visual.ch, original);
            } else {
                assert_eq!(visual.ch, original);
            }
        }
    }

    #[test]
    fn index_map_for_arabic_word_in_ltr_paragraph() {
        // seen lam meem, space, a b: the space between the Arabic word and
        // the Latin one takes the paragraph direction
        let options = BidiOptions {
            base_dir: BaseDirection::Ltr,
            ..BidiOptions::default()
        };
        assert_eq!(visual_index_map("سلم ab", &options), vec![2, 1, 0, 3, 4, 5]);
    }

    #[test]
    fn index_map_for_bracketed_word_in_rtl_paragraph() {
        let map = visual_index_map("(سلم)", &BidiOptions::default());
        assert_eq!(map, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn removed_formatting_characters_have_no_visual_position() {
        let map = visual_index_map("a\u{202B}b\u{202C}c", &BidiOptions::default());
        assert_eq!(map, vec![0, 2, 4]);
    }

    #[test]
    fn only_formatting_characters_give_empty_output() {
        assert_eq!(display("\u{202B}\u{202C}"), "");
    }

    #[test]
    fn visual_runs_have_levels() {
        let para = BidiParagraph::new("اب gh", &BidiOptions::default());
        let runs = para.visual_runs();
        assert!(runs.len() >= 2);
        assert_eq!(runs.first().map(|r| r.range.start), Some(0));
        assert_eq!(runs.last().map(|r| r.range.end), Some(5));
    }

    #[test]
    fn unpaired_surrogate_becomes_placeholder() {
        let units = [0x0061, 0xD800, 0x0062];
        assert_eq!(reorder_utf16(&units, &BidiOptions::default()), "a?b");
    }

    #[test]
    fn uppercase_debug_mode() {
        let options = BidiOptions {
            upper_is_rtl: true,
            ..BidiOptions::default()
        };
        assert_eq!(reorder_for_display("car is THE CAR", &options), "car is RAC EHT");
    }

    #[test]
    fn implicit_parity_matches_resolved_class() {
        let para = BidiParagraph::new("abc (אבג) 123, \u{0627}\u{0644}1", &BidiOptions::default());
        for ch in para.resolved_chars() {
            assert_eq!(ch.level % 2 == 1, ch.class == BidiClass::R, "{:?}", ch);
        }
    }
}
