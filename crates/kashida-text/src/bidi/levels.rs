use core::ops::Range;

use kashida_config::BaseDirection;
use tracing::trace;

use crate::bidi::class::{BidiClass, CharProperties};

/// Highest embedding level reachable through explicit embeddings (exclusive).
pub const EXPLICIT_LEVEL_LIMIT: u8 = 62;

/// Left-to-right or right-to-left, as implied by an embedding level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Even levels are left-to-right, odd levels right-to-left.
    pub fn from_level(level: u8) -> Self {
        if level % 2 == 0 {
            Direction::Ltr
        } else {
            Direction::Rtl
        }
    }

    /// The strong class standing in for this direction.
    pub fn class(self) -> BidiClass {
        match self {
            Direction::Ltr => BidiClass::L,
            Direction::Rtl => BidiClass::R,
        }
    }
}

/// Paragraph embedding level forced by `base_dir`, if any.
pub fn forced_base_level(base_dir: BaseDirection) -> Option<u8> {
    match base_dir {
        BaseDirection::Auto => None,
        BaseDirection::Ltr => Some(0),
        BaseDirection::Rtl => Some(1),
    }
}

/// One retained code point and its resolution state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidiChar {
    /// The code point; replaced only by mirroring.
    pub ch: char,
    /// Position of the code point in the input, counted in chars.
    pub index: usize,
    /// Embedding level.
    pub level: u8,
    /// Current class, rewritten by the resolution passes.
    pub class: BidiClass,
    /// Class assigned at classification; never changes.
    pub original_class: BidiClass,
}

/// Classify `ch`, honouring the uppercase-is-RTL debug mode.
pub(crate) fn classify<P: CharProperties + ?Sized>(ch: char, upper_is_rtl: bool, props: &P) -> BidiClass {
    if upper_is_rtl && ch.is_uppercase() {
        BidiClass::R
    } else {
        props.bidi_class(ch)
    }
}

/// Rules P2/P3: the level of the first strong character, or 0.
pub fn paragraph_level<P, I>(chars: I, upper_is_rtl: bool, props: &P) -> u8
where
    P: CharProperties + ?Sized,
    I: IntoIterator<Item = char>,
{
    for ch in chars {
        match classify(ch, upper_is_rtl, props) {
            BidiClass::L => return 0,
            BidiClass::R | BidiClass::AL => return 1,
            _ => {}
        }
    }
    0
}

/// Build one record per code point, all at the paragraph level.
pub(crate) fn classify_text<P, I>(chars: I, base_level: u8, upper_is_rtl: bool, props: &P) -> Vec<BidiChar>
where
    P: CharProperties + ?Sized,
    I: IntoIterator<Item = char>,
{
    chars
        .into_iter()
        .enumerate()
        .map(|(index, ch)| {
            let class = classify(ch, upper_is_rtl, props);
            BidiChar {
                ch,
                index,
                level: base_level,
                class,
                original_class: class,
            }
        })
        .collect()
}

fn least_greater_odd(level: u8) -> u8 {
    (level + 1) | 1
}

fn least_greater_even(level: u8) -> u8 {
    (level + 2) & !1
}

/// Rules X1-X9: assign explicit embedding levels, apply overrides, then
/// drop the formatting characters.
///
/// Isolate initiators and PDI are not given special treatment; they take
/// the current level like any other character.
pub(crate) fn resolve_explicit(chars: &mut Vec<BidiChar>, base_level: u8) {
    let mut stack: Vec<(u8, Option<Direction>)> = Vec::new();
    let mut level = base_level;
    let mut overriding: Option<Direction> = None;
    let mut overflow: usize = 0;
    let mut almost_overflow: usize = 0;

    for ch in chars.iter_mut() {
        match ch.class {
            BidiClass::RLE | BidiClass::LRE | BidiClass::RLO | BidiClass::LRO => {
                if overflow > 0 {
                    overflow += 1;
                    continue;
                }
                let (next, next_override) = match ch.class {
                    BidiClass::RLE => (least_greater_odd(level), None),
                    BidiClass::LRE => (least_greater_even(level), None),
                    BidiClass::RLO => (least_greater_odd(level), Some(Direction::Rtl)),
                    _ => (least_greater_even(level), Some(Direction::Ltr)),
                };
                if next < EXPLICIT_LEVEL_LIMIT {
                    stack.push((level, overriding));
                    level = next;
                    overriding = next_override;
                } else if level == EXPLICIT_LEVEL_LIMIT - 2 {
                    almost_overflow += 1;
                } else {
                    overflow += 1;
                }
            }
            BidiClass::PDF => {
                if overflow > 0 {
                    overflow -= 1;
                } else if almost_overflow > 0 && level != EXPLICIT_LEVEL_LIMIT - 1 {
                    almost_overflow -= 1;
                } else if let Some((prev_level, prev_override)) = stack.pop() {
                    level = prev_level;
                    overriding = prev_override;
                }
            }
            BidiClass::B => {
                stack.clear();
                overflow = 0;
                almost_overflow = 0;
                level = base_level;
                overriding = None;
                ch.level = base_level;
            }
            BidiClass::BN => {}
            BidiClass::L
            | BidiClass::R
            | BidiClass::AL
            | BidiClass::EN
            | BidiClass::ES
            | BidiClass::ET
            | BidiClass::AN
            | BidiClass::CS
            | BidiClass::S
            | BidiClass::WS
            | BidiClass::ON
            | BidiClass::NSM
            | BidiClass::FSI
            | BidiClass::LRI
            | BidiClass::RLI
            | BidiClass::PDI => {
                ch.level = level;
                if let Some(dir) = overriding {
                    ch.class = dir.class();
                }
            }
        }
    }

    let before = chars.len();
    chars.retain(|ch| !ch.original_class.is_removed_by_x9());
    trace!(
        removed = before - chars.len(),
        remaining = chars.len(),
        "explicit levels resolved"
    );
}

/// A maximal run of characters sharing one embedding level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRun {
    /// Index range into the retained characters.
    pub range: Range<usize>,
    /// Embedding level of every character in the run.
    pub level: u8,
    /// Start-of-run direction.
    pub sor: Direction,
    /// End-of-run direction.
    pub eor: Direction,
}

/// Partition `chars` into level runs with their sor/eor directions.
///
/// Each boundary direction comes from the higher of the two levels meeting
/// there; the paragraph level stands in beyond both ends of the text.
pub fn level_runs(chars: &[BidiChar], base_level: u8) -> Vec<LevelRun> {
    let Some(first) = chars.first() else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let mut sor = Direction::from_level(base_level.max(first.level));
    let mut start = 0;
    let mut run_level = first.level;

    for (i, ch) in chars.iter().enumerate().skip(1) {
        if ch.level != run_level {
            let eor = Direction::from_level(run_level.max(ch.level));
            runs.push(LevelRun {
                range: start..i,
                level: run_level,
                sor,
                eor,
            });
            sor = eor;
            start = i;
            run_level = ch.level;
        }
    }

    runs.push(LevelRun {
        range: start..chars.len(),
        level: run_level,
        sor,
        eor: Direction::from_level(run_level.max(base_level)),
    });
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidi::class::UnicodeProperties;

    fn explicit(text: &str, base_level: u8) -> Vec<BidiChar> {
        let mut chars = classify_text(text.chars(), base_level, false, &UnicodeProperties);
        resolve_explicit(&mut chars, base_level);
        chars
    }

    #[test]
    fn detects_paragraph_direction_auto() {
        // Hebrew + Latin
        assert_eq!(paragraph_level("אבג abc".chars(), false, &UnicodeProperties), 1);
        assert_eq!(paragraph_level("abc אבג".chars(), false, &UnicodeProperties), 0);
        // Arabic letters count as strong right-to-left
        assert_eq!(paragraph_level("123 سلام".chars(), false, &UnicodeProperties), 1);
    }

    #[test]
    fn no_strong_character_defaults_to_ltr() {
        assert_eq!(paragraph_level("123 ...".chars(), false, &UnicodeProperties), 0);
        assert_eq!(paragraph_level("".chars(), false, &UnicodeProperties), 0);
    }

    #[test]
    fn uppercase_debug_mode_is_rtl() {
        assert_eq!(paragraph_level("Abc".chars(), true, &UnicodeProperties), 1);
        assert_eq!(paragraph_level("abC".chars(), true, &UnicodeProperties), 0);
    }

    #[test]
    fn base_direction_override_levels() {
        assert_eq!(forced_base_level(BaseDirection::Auto), None);
        assert_eq!(forced_base_level(BaseDirection::Ltr), Some(0));
        assert_eq!(forced_base_level(BaseDirection::Rtl), Some(1));
    }

    #[test]
    fn embeddings_raise_levels_and_pdf_restores() {
        // a RLE b PDF c
        let chars = explicit("a\u{202B}b\u{202C}c", 0);
        let levels: Vec<u8> = chars.iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![0, 1, 0]);
        let text: String = chars.iter().map(|c| c.ch).collect();
        assert_eq!(text, "abc");
    }

    #[test]
    fn nested_embeddings_pick_next_parity() {
        // LRE inside RLE: 0 -> 1 -> 2
        let chars = explicit("\u{202B}a\u{202A}b\u{202C}c\u{202C}d", 0);
        let levels: Vec<u8> = chars.iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![1, 2, 1, 0]);
    }

    #[test]
    fn override_forces_class() {
        let chars = explicit("\u{202E}12\u{202C}3", 0);
        assert_eq!(chars[0].class, BidiClass::R);
        assert_eq!(chars[1].class, BidiClass::R);
        assert_eq!(chars[0].original_class, BidiClass::EN);
        assert_eq!(chars[2].class, BidiClass::EN);
        assert_eq!(chars[2].level, 0);
    }

    #[test]
    fn overflowing_embeddings_are_counted_not_pushed() {
        let mut text = String::new();
        for _ in 0..40 {
            text.push('\u{202B}');
            text.push('\u{202A}');
        }
        text.push('x');
        let chars = explicit(&text, 0);
        assert_eq!(chars.len(), 1);
        assert!(chars[0].level < EXPLICIT_LEVEL_LIMIT);
        assert_eq!(chars[0].level, EXPLICIT_LEVEL_LIMIT - 1);
    }

    #[test]
    fn embedding_past_level_sixty_is_absorbed_by_next_pdf() {
        // thirty LREs climb to level 60; one more LRE cannot reach 62
        let mut text = "\u{202A}".repeat(30);
        text.push_str("a\u{202A}b\u{202C}c\u{202C}d");
        let chars = explicit(&text, 0);
        let levels: Vec<u8> = chars.iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![60, 60, 60, 58]);
    }

    #[test]
    fn rle_still_fits_after_refused_lre() {
        // at 60: a refused LRE, then RLE reaches 61; the first PDF leaves 61,
        // the second only cancels the refused LRE
        let mut text = "\u{202A}".repeat(30);
        text.push_str("\u{202A}\u{202B}a\u{202C}b\u{202C}c\u{202C}d");
        let chars = explicit(&text, 0);
        let levels: Vec<u8> = chars.iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![61, 60, 60, 58]);
    }

    #[test]
    fn paragraph_separator_resets_state() {
        let chars = explicit("\u{202B}a\nb", 0);
        let levels: Vec<u8> = chars.iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![1, 0, 0]);
    }

    #[test]
    fn isolates_are_not_removed() {
        let chars = explicit("a\u{2067}b\u{2069}", 0);
        assert_eq!(chars.len(), 4);
        assert!(chars.iter().all(|c| c.level == 0));
    }

    #[test]
    fn runs_tile_characters() {
        let chars = explicit("ab\u{202B}cd\u{202C}ef\u{202E}g", 0);
        let runs = level_runs(&chars, 0);
        assert_eq!(runs.len(), 4);
        let mut next = 0;
        for run in &runs {
            assert_eq!(run.range.start, next);
            assert!(run.range.end > run.range.start);
            next = run.range.end;
        }
        assert_eq!(next, chars.len());
    }

    #[test]
    fn sor_and_eor_follow_higher_level() {
        let chars = explicit("a\u{202B}b\u{202C}", 0);
        let runs = level_runs(&chars, 0);
        assert_eq!(runs[0].sor, Direction::Ltr);
        assert_eq!(runs[0].eor, Direction::Rtl);
        assert_eq!(runs[1].sor, Direction::Rtl);
        assert_eq!(runs[1].eor, Direction::Rtl);
    }

    #[test]
    fn no_runs_for_empty_text() {
        assert!(level_runs(&[], 1).is_empty());
    }
}
