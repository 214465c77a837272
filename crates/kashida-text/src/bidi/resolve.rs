//! Weak, neutral and implicit resolution (rules W1-W7, N1-N2, I1-I2).
//!
//! Every pass works run by run over the flat character vector; a run is
//! only ever addressed through its index range.

use crate::bidi::class::BidiClass;
use crate::bidi::levels::{BidiChar, Direction, LevelRun};

/// Rules W1-W7, applied in order within each level run.
pub(crate) fn resolve_weak(chars: &mut [BidiChar], runs: &[LevelRun]) {
    for run in runs {
        resolve_weak_run(&mut chars[run.range.clone()], run.sor.class());
    }
}

fn resolve_weak_run(run: &mut [BidiChar], sor: BidiClass) {
    // W1: NSM takes the class of the previous character.
    let mut prev = sor;
    for ch in run.iter_mut() {
        if ch.class == BidiClass::NSM {
            ch.class = prev;
        }
        prev = ch.class;
    }

    // W2: EN after AL becomes AN.
    let mut last_strong = sor;
    for ch in run.iter_mut() {
        if ch.class == BidiClass::EN && last_strong == BidiClass::AL {
            ch.class = BidiClass::AN;
        }
        if ch.class.is_strong() {
            last_strong = ch.class;
        }
    }

    // W3
    for ch in run.iter_mut() {
        if ch.class == BidiClass::AL {
            ch.class = BidiClass::R;
        }
    }

    // W4: a single separator between two numbers of the same kind.
    for i in 1..run.len().saturating_sub(1) {
        let before = run[i - 1].class;
        let after = run[i + 1].class;
        if run[i].class == BidiClass::ES && before == BidiClass::EN && after == BidiClass::EN {
            run[i].class = BidiClass::EN;
        }
        if run[i].class == BidiClass::CS
            && before == after
            && matches!(before, BidiClass::EN | BidiClass::AN)
        {
            run[i].class = before;
        }
    }

    // W5: terminators touching a European number join it.
    for i in 0..run.len() {
        if run[i].class != BidiClass::EN {
            continue;
        }
        for ch in run[..i].iter_mut().rev() {
            if ch.class != BidiClass::ET {
                break;
            }
            ch.class = BidiClass::EN;
        }
        for ch in run[i + 1..].iter_mut() {
            if ch.class != BidiClass::ET {
                break;
            }
            ch.class = BidiClass::EN;
        }
    }

    // W6
    for ch in run.iter_mut() {
        if matches!(ch.class, BidiClass::ET | BidiClass::ES | BidiClass::CS) {
            ch.class = BidiClass::ON;
        }
    }

    // W7: EN after L becomes L.
    let mut last_strong = sor;
    for ch in run.iter_mut() {
        if ch.class == BidiClass::EN && last_strong == BidiClass::L {
            ch.class = BidiClass::L;
        }
        if matches!(ch.class, BidiClass::L | BidiClass::R) {
            last_strong = ch.class;
        }
    }
}

/// Numbers count as right-to-left when bordering a neutral sequence.
fn neutral_context(class: BidiClass) -> BidiClass {
    match class {
        BidiClass::AN | BidiClass::EN => BidiClass::R,
        other => other,
    }
}

/// Rules N1-N2: neutral sequences take the direction of matching
/// neighbours, or the embedding direction otherwise.
pub(crate) fn resolve_neutral(chars: &mut [BidiChar], runs: &[LevelRun]) {
    for run in runs {
        let slice = &mut chars[run.range.clone()];
        let mut i = 0;
        while i < slice.len() {
            if !slice[i].class.is_neutral() {
                i += 1;
                continue;
            }
            let start = i;
            while i < slice.len() && slice[i].class.is_neutral() {
                i += 1;
            }

            let before = if start == 0 {
                run.sor.class()
            } else {
                slice[start - 1].class
            };
            let after = if i == slice.len() {
                run.eor.class()
            } else {
                slice[i].class
            };
            let before = neutral_context(before);
            let after = neutral_context(after);

            let resolved = if before == after {
                before
            } else {
                Direction::from_level(slice[start].level).class()
            };
            for ch in &mut slice[start..i] {
                ch.class = resolved;
            }
        }
    }
}

/// Rules I1-I2.
pub(crate) fn resolve_implicit(chars: &mut [BidiChar]) {
    for ch in chars.iter_mut() {
        match Direction::from_level(ch.level) {
            Direction::Ltr => match ch.class {
                BidiClass::R => ch.level += 1,
                BidiClass::AN | BidiClass::EN => ch.level += 2,
                _ => {}
            },
            Direction::Rtl => {
                if ch.class != BidiClass::R {
                    ch.level += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidi::class::UnicodeProperties;
    use crate::bidi::levels::{classify_text, level_runs, resolve_explicit};

    fn prepared(text: &str, base_level: u8) -> (Vec<BidiChar>, Vec<LevelRun>) {
        let mut chars = classify_text(text.chars(), base_level, false, &UnicodeProperties);
        resolve_explicit(&mut chars, base_level);
        let runs = level_runs(&chars, base_level);
        (chars, runs)
    }

    fn weak_classes(text: &str, base_level: u8) -> Vec<BidiClass> {
        let (mut chars, runs) = prepared(text, base_level);
        resolve_weak(&mut chars, &runs);
        chars.iter().map(|c| c.class).collect()
    }

    #[test]
    fn nsm_inherits_previous_class() {
        // Hebrew letter followed by a combining mark
        let classes = weak_classes("\u{05D0}\u{0591}", 1);
        assert_eq!(classes, vec![BidiClass::R, BidiClass::R]);
    }

    #[test]
    fn nsm_at_run_start_takes_sor() {
        let classes = weak_classes("\u{0300}a", 0);
        assert_eq!(classes[0], BidiClass::L);
    }

    #[test]
    fn european_number_after_arabic_letter_becomes_arabic_number() {
        use BidiClass::*;
        let classes = weak_classes("\u{0627} 12", 1);
        assert_eq!(classes, vec![R, WS, AN, AN]);
    }

    #[test]
    fn separators_between_numbers() {
        use BidiClass::*;
        assert_eq!(weak_classes("1+2", 1), vec![EN, EN, EN]);
        assert_eq!(weak_classes("1,2", 1), vec![EN, EN, EN]);
        // A separator between mismatched number kinds is neutral
        assert_eq!(weak_classes("1,\u{0661}", 1), vec![EN, ON, AN]);
    }

    #[test]
    fn terminators_join_adjacent_numbers() {
        use BidiClass::*;
        assert_eq!(weak_classes("$$5%", 1), vec![EN, EN, EN, EN]);
        assert_eq!(weak_classes("$ 5", 1), vec![ON, WS, EN]);
    }

    #[test]
    fn european_number_after_latin_becomes_l() {
        use BidiClass::*;
        assert_eq!(weak_classes("a 1", 0), vec![L, WS, L]);
        // sor of an LTR paragraph counts as a preceding L
        assert_eq!(weak_classes("1", 0), vec![L]);
    }

    #[test]
    fn neutrals_between_matching_strong_types() {
        use BidiClass::*;
        let (mut chars, runs) = prepared("\u{05D0} - \u{05D1}", 0);
        resolve_weak(&mut chars, &runs);
        resolve_neutral(&mut chars, &runs);
        let classes: Vec<BidiClass> = chars.iter().map(|c| c.class).collect();
        assert_eq!(classes, vec![R, R, R, R, R]);
    }

    #[test]
    fn neutrals_between_mismatched_types_follow_embedding() {
        use BidiClass::*;
        let (mut chars, runs) = prepared("a \u{05D0}", 0);
        resolve_weak(&mut chars, &runs);
        resolve_neutral(&mut chars, &runs);
        let classes: Vec<BidiClass> = chars.iter().map(|c| c.class).collect();
        assert_eq!(classes, vec![L, L, R]);
    }

    #[test]
    fn numbers_count_as_rtl_for_neutrals() {
        use BidiClass::*;
        let (mut chars, runs) = prepared("\u{05D0} 1", 0);
        resolve_weak(&mut chars, &runs);
        resolve_neutral(&mut chars, &runs);
        let classes: Vec<BidiClass> = chars.iter().map(|c| c.class).collect();
        assert_eq!(classes, vec![R, R, EN]);
    }

    #[test]
    fn implicit_levels_match_direction() {
        let (mut chars, runs) = prepared("abc \u{05D0}\u{05D1} 12 \u{0627}\u{0661}", 0);
        resolve_weak(&mut chars, &runs);
        resolve_neutral(&mut chars, &runs);
        resolve_implicit(&mut chars);
        for ch in &chars {
            assert_eq!(ch.level % 2 == 1, ch.class == BidiClass::R, "{:?}", ch);
        }
    }

    #[test]
    fn implicit_levels_on_odd_embedding() {
        let (mut chars, runs) = prepared("\u{05D0}a1", 1);
        resolve_weak(&mut chars, &runs);
        resolve_neutral(&mut chars, &runs);
        resolve_implicit(&mut chars);
        let levels: Vec<u8> = chars.iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![1, 2, 2]);
    }
}
