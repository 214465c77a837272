use hashbrown::HashMap;
use kashida_config::ReshaperConfig;
use tracing::trace;

use crate::reshape::forms::{GlyphForm, TATWEEL, ZWJ, is_harakat};
use crate::reshape::letters::LetterTable;
use crate::reshape::matcher::LigatureMatcher;

/// One output slot: a letter with its chosen form, a verbatim character, or
/// a blank left behind by a ligature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Glyph {
    ch: Option<char>,
    form: GlyphForm,
}

impl Glyph {
    fn new(ch: char, form: GlyphForm) -> Self {
        Self { ch: Some(ch), form }
    }

    const BLANK: Glyph = Glyph {
        ch: None,
        form: GlyphForm::NotSupported,
    };
}

/// Harakat waiting to be emitted after the glyph at a given position; -1
/// means before the first glyph.
type HarakatPositions = HashMap<isize, Vec<char>>;

/// Converts Arabic-script text into contextual presentation forms.
///
/// The letter table and the ligature matcher are resolved once, when the
/// reshaper is built; [`ArabicReshaper::reshape`] is then a pure function of
/// its input.
#[derive(Debug)]
pub struct ArabicReshaper {
    config: ReshaperConfig,
    letters: &'static LetterTable,
    matcher: LigatureMatcher,
}

impl Default for ArabicReshaper {
    fn default() -> Self {
        Self::new(&ReshaperConfig::default())
    }
}

impl ArabicReshaper {
    pub fn new(config: &ReshaperConfig) -> Self {
        Self {
            config: config.clone(),
            letters: LetterTable::for_language(config.language),
            matcher: LigatureMatcher::build(config),
        }
    }

    pub fn config(&self) -> &ReshaperConfig {
        &self.config
    }

    pub fn letters(&self) -> &'static LetterTable {
        self.letters
    }

    /// The form standing in for "isolated" under this configuration.
    fn isolated_form(&self) -> GlyphForm {
        if self.config.use_unshaped_instead_of_isolated {
            GlyphForm::Unshaped
        } else {
            GlyphForm::Isolated
        }
    }

    /// Reshape `text`. Characters outside the letter table pass through
    /// unchanged.
    pub fn reshape(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let (mut glyphs, harakat) = self.shape_letters(text);
        if !self.matcher.is_empty() {
            self.apply_ligatures(&mut glyphs);
        }
        let output = self.assemble(&glyphs, &harakat);
        trace!(
            input_chars = text.chars().count(),
            output_chars = output.chars().count(),
            "reshaped"
        );
        output
    }

    /// Choose a form for every letter, setting harakat aside.
    fn shape_letters(&self, text: &str) -> (Vec<Glyph>, HarakatPositions) {
        let config = &self.config;
        let isolated = self.isolated_form();
        let mut glyphs: Vec<Glyph> = Vec::with_capacity(text.len());
        let mut harakat = HarakatPositions::new();

        for ch in text.chars() {
            if is_harakat(ch) {
                if !config.delete_harakat {
                    let mut position = glyphs.len() as isize - 1;
                    if config.shift_harakat_position {
                        position -= 1;
                        harakat.entry(position).or_default().insert(0, ch);
                    } else {
                        harakat.entry(position).or_default().push(ch);
                    }
                }
            } else if (ch == TATWEEL && config.delete_tatweel) || (ch == ZWJ && !config.support_zwj) {
                // dropped
            } else if !self.letters.contains(ch) {
                glyphs.push(Glyph::new(ch, GlyphForm::NotSupported));
            } else {
                let form = match glyphs.last_mut() {
                    Some(prev) if self.joins(prev, ch) => {
                        prev.form = if prev.form == isolated {
                            GlyphForm::Initial
                        } else {
                            GlyphForm::Medial
                        };
                        GlyphForm::Final
                    }
                    _ => isolated,
                };
                glyphs.push(Glyph::new(ch, form));
            }

            let len = glyphs.len();
            if config.support_zwj && len > 1 && glyphs[len - 2].ch == Some(ZWJ) {
                glyphs.remove(len - 2);
            }
        }

        if config.support_zwj && glyphs.last().is_some_and(|g| g.ch == Some(ZWJ)) {
            glyphs.pop();
        }
        (glyphs, harakat)
    }

    /// Whether `letter` joins the glyph before it.
    fn joins(&self, prev: &Glyph, letter: char) -> bool {
        let Some(prev_ch) = prev.ch else {
            return false;
        };
        prev.form != GlyphForm::NotSupported
            && self.letters.connects_before(letter)
            && self.letters.connects_after(prev_ch)
            && !(prev.form == GlyphForm::Final && !self.letters.connects_both(prev_ch))
    }

    /// Replace every ligature match that has a form for its position in the
    /// word.
    fn apply_ligatures(&self, glyphs: &mut [Glyph]) {
        let isolated = self.isolated_form();
        let letters: String = glyphs.iter().filter_map(|g| g.ch).collect();
        debug_assert_eq!(letters.chars().count(), glyphs.len());

        for found in self.matcher.find_iter(&letters) {
            let range = found.range;
            let first = glyphs[range.start].form;
            let last = glyphs[range.end - 1].form;
            let opens = first == isolated || first == GlyphForm::Initial;
            let closes = last == isolated || last == GlyphForm::Final;
            let form = match (opens, closes) {
                (true, true) => GlyphForm::Isolated,
                (true, false) => GlyphForm::Initial,
                (false, true) => GlyphForm::Final,
                (false, false) => GlyphForm::Medial,
            };

            let Some(replacement) = found.record.form(form) else {
                continue;
            };
            trace!(ligature = found.record.name, ?form, "ligature applied");
            glyphs[range.start] = Glyph::new(replacement, GlyphForm::NotSupported);
            for glyph in &mut glyphs[range.start + 1..range.end] {
                *glyph = Glyph::BLANK;
            }
        }
    }

    fn assemble(&self, glyphs: &[Glyph], harakat: &HarakatPositions) -> String {
        let mut output = String::with_capacity(glyphs.len() * 3);
        if let Some(marks) = harakat.get(&-1) {
            output.extend(marks);
        }

        for (i, glyph) in glyphs.iter().enumerate() {
            if let Some(ch) = glyph.ch {
                let shaped = if glyph.form.is_verbatim() {
                    ch
                } else {
                    self.letters.form(ch, glyph.form).unwrap_or(ch)
                };
                output.push(shaped);
            }
            if let Some(marks) = harakat.get(&(i as isize)) {
                output.extend(marks);
            }
        }
        output
    }
}

/// Reshape `text` with a one-off reshaper built from `config`.
pub fn reshape(text: &str, config: &ReshaperConfig) -> String {
    ArabicReshaper::new(config).reshape(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kashida_config::Language;

    const ALEF: char = '\u{0627}';
    const BEH: char = '\u{0628}';
    const LAM: char = '\u{0644}';
    const HEH: char = '\u{0647}';
    const FATHA: char = '\u{064E}';
    const SHADDA: char = '\u{0651}';

    fn no_ligatures() -> ReshaperConfig {
        ReshaperConfig {
            support_ligatures: false,
            ..ReshaperConfig::default()
        }
    }

    fn word(chars: &[char]) -> String {
        chars.iter().collect()
    }

    #[test]
    fn empty_input() {
        assert_eq!(ArabicReshaper::default().reshape(""), "");
    }

    #[test]
    fn single_letter_is_isolated() {
        assert_eq!(reshape("\u{0628}", &no_ligatures()), "\u{FE8F}");
    }

    #[test]
    fn joined_letters_take_positional_forms() {
        let config = no_ligatures();
        assert_eq!(reshape(&word(&[BEH, BEH]), &config), "\u{FE91}\u{FE90}");
        assert_eq!(reshape(&word(&[BEH, BEH, BEH]), &config), "\u{FE91}\u{FE92}\u{FE90}");
    }

    #[test]
    fn non_joining_letter_breaks_the_word() {
        // alef never joins the letter after it
        let config = no_ligatures();
        assert_eq!(reshape(&word(&[ALEF, BEH]), &config), "\u{FE8D}\u{FE8F}");
        assert_eq!(
            reshape(&word(&[BEH, ALEF, BEH]), &config),
            "\u{FE91}\u{FE8E}\u{FE8F}"
        );
    }

    #[test]
    fn unknown_characters_pass_through() {
        let config = no_ligatures();
        assert_eq!(reshape("abc", &config), "abc");
        assert_eq!(reshape("\u{0628}a\u{0628}", &config), "\u{FE8F}a\u{FE8F}");
        assert_eq!(reshape("\u{0628} \u{0628}", &config), "\u{FE8F} \u{FE8F}");
    }

    #[test]
    fn lam_alef_ligature() {
        let text = word(&[LAM, ALEF]);
        assert_eq!(reshape(&text, &ReshaperConfig::default()), "\u{FEFB}");
        assert_eq!(reshape(&text, &no_ligatures()), "\u{FEDF}\u{FE8E}");
    }

    #[test]
    fn ligature_form_follows_word_position() {
        let mut config = ReshaperConfig {
            ligatures_default: false,
            ..ReshaperConfig::default()
        };
        config.set_ligature("ARABIC LIGATURE LAM WITH ALEF", true);
        // beh joins the lam, so lam-alef closes the word in final form
        assert_eq!(reshape(&word(&[BEH, LAM, ALEF]), &config), "\u{FE91}\u{FEFC}");
    }

    #[test]
    fn ligature_without_a_matching_form_is_skipped() {
        let mut config = ReshaperConfig {
            ligatures_default: false,
            ..ReshaperConfig::default()
        };
        config.set_ligature("SALLA", true);
        // SALLA only has an isolated form; preceded by beh it would be final
        let text = word(&[BEH, '\u{0635}', LAM, '\u{0649}']);
        assert_eq!(reshape(&text, &config), "\u{FE91}\u{FEBC}\u{FEE0}\u{FEF0}");
    }

    #[test]
    fn allah_ligature_toggle() {
        let text = word(&[ALEF, LAM, LAM, HEH]);
        assert_eq!(reshape(&text, &ReshaperConfig::default()), "\u{FDF2}");

        let mut config = ReshaperConfig {
            ligatures_default: false,
            ..ReshaperConfig::default()
        };
        config.set_ligature("ALLAH", true);
        assert_eq!(reshape(&text, &config), "\u{FDF2}");

        config.set_ligature("ALLAH", false);
        assert_eq!(reshape(&text, &config), "\u{FE8D}\u{FEDF}\u{FEE0}\u{FEEA}");
    }

    #[test]
    fn harakat_deleted_by_default() {
        let text = word(&[BEH, FATHA, BEH]);
        assert_eq!(reshape(&text, &no_ligatures()), "\u{FE91}\u{FE90}");
    }

    #[test]
    fn harakat_kept_after_their_letter() {
        let config = ReshaperConfig {
            delete_harakat: false,
            ..no_ligatures()
        };
        let text = word(&[BEH, FATHA, SHADDA, BEH]);
        assert_eq!(reshape(&text, &config), "\u{FE91}\u{064E}\u{0651}\u{FE90}");
        // a mark with no letter before it leads the output
        assert_eq!(reshape(&word(&[FATHA, BEH]), &config), "\u{064E}\u{FE8F}");
    }

    #[test]
    fn shifted_harakat_move_back_one_glyph() {
        let config = ReshaperConfig {
            delete_harakat: false,
            shift_harakat_position: true,
            ..no_ligatures()
        };
        let text = word(&[BEH, BEH, FATHA, SHADDA, BEH]);
        assert_eq!(
            reshape(&text, &config),
            "\u{FE91}\u{0651}\u{064E}\u{FE92}\u{FE90}"
        );
        // shifted before the first glyph
        assert_eq!(reshape(&word(&[BEH, FATHA]), &config), "\u{064E}\u{FE8F}");
    }

    #[test]
    fn tatweel_joins_or_is_deleted() {
        let text = word(&[BEH, TATWEEL, BEH]);
        assert_eq!(reshape(&text, &no_ligatures()), "\u{FE91}\u{0640}\u{FE90}");

        let config = ReshaperConfig {
            delete_tatweel: true,
            ..no_ligatures()
        };
        assert_eq!(reshape(&text, &config), "\u{FE91}\u{FE90}");
    }

    #[test]
    fn zwj_forces_joining_forms_and_is_removed() {
        let config = no_ligatures();
        assert_eq!(reshape(&word(&[BEH, ZWJ]), &config), "\u{FE91}");
        assert_eq!(reshape(&word(&[ZWJ, BEH]), &config), "\u{FE90}");
        assert_eq!(reshape(&word(&[ZWJ]), &config), "");
    }

    #[test]
    fn zwj_dropped_when_unsupported() {
        let config = ReshaperConfig {
            support_zwj: false,
            ..no_ligatures()
        };
        assert_eq!(reshape(&word(&[BEH, ZWJ]), &config), "\u{FE8F}");
        assert_eq!(reshape(&word(&[BEH, ZWJ, BEH]), &config), "\u{FE91}\u{FE90}");
    }

    #[test]
    fn unshaped_instead_of_isolated() {
        let config = ReshaperConfig {
            use_unshaped_instead_of_isolated: true,
            ..no_ligatures()
        };
        assert_eq!(reshape("\u{0628}", &config), "\u{0628}");
        assert_eq!(reshape(&word(&[BEH, BEH]), &config), "\u{FE91}\u{FE90}");
        assert_eq!(reshape(&word(&[ALEF, BEH]), &config), "\u{0627}\u{0628}");
    }

    #[test]
    fn language_tables() {
        let v2 = ReshaperConfig {
            language: Language::ArabicV2,
            ..no_ligatures()
        };
        assert_eq!(reshape("\u{0628}", &v2), "\u{0628}");

        let kurdish = ReshaperConfig {
            language: Language::Kurdish,
            ..no_ligatures()
        };
        assert_eq!(reshape("\u{0628}\u{06D5}", &kurdish), "\u{FE91}\u{E000}");
        // AE is not an Arabic-table letter and passes through
        assert_eq!(reshape("\u{0628}\u{06D5}", &no_ligatures()), "\u{FE8F}\u{06D5}");
    }

    #[test]
    fn reshaping_is_deterministic() {
        let reshaper = ArabicReshaper::default();
        let text = "\u{0627}\u{0644}\u{0639}\u{0631}\u{0628}\u{064A}\u{0629} abc";
        assert_eq!(reshaper.reshape(text), reshaper.reshape(text));
    }
}
