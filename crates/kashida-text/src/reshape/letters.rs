use std::sync::OnceLock;

use hashbrown::HashMap;
use kashida_config::Language;

use crate::reshape::forms::{GlyphForm, LetterForms, form_of};
use crate::reshape::tables;

static ARABIC_TABLE: OnceLock<LetterTable> = OnceLock::new();
static ARABIC_V2_TABLE: OnceLock<LetterTable> = OnceLock::new();
static KURDISH_TABLE: OnceLock<LetterTable> = OnceLock::new();

/// Contextual forms of the letters of one language, keyed by base letter.
///
/// A letter's connectivity is implied by which forms it has: a final or
/// medial form means it can join the letter before it, an initial or medial
/// form means it can join the letter after it.
#[derive(Debug)]
pub struct LetterTable {
    language: Language,
    letters: HashMap<char, LetterForms>,
}

impl LetterTable {
    /// The shared table for `language`, built on first use.
    pub fn for_language(language: Language) -> &'static LetterTable {
        let (cell, entries) = match language {
            Language::Arabic => (&ARABIC_TABLE, tables::ARABIC),
            Language::ArabicV2 => (&ARABIC_V2_TABLE, tables::ARABIC_V2),
            Language::Kurdish => (&KURDISH_TABLE, tables::KURDISH),
        };
        cell.get_or_init(|| Self::from_entries(language, entries))
    }

    fn from_entries(language: Language, entries: &[(char, LetterForms)]) -> Self {
        Self {
            language,
            letters: entries.iter().copied().collect(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains_key(&letter)
    }

    pub fn forms(&self, letter: char) -> Option<&LetterForms> {
        self.letters.get(&letter)
    }

    /// The presentation form of `letter` for `form`, if the letter has one.
    pub fn form(&self, letter: char, form: GlyphForm) -> Option<char> {
        self.forms(letter).and_then(|forms| form_of(forms, form))
    }

    /// Whether `letter` can join the letter before it.
    pub fn connects_before(&self, letter: char) -> bool {
        self.has_form(letter, GlyphForm::Final) || self.has_form(letter, GlyphForm::Medial)
    }

    /// Whether `letter` can join the letter after it.
    pub fn connects_after(&self, letter: char) -> bool {
        self.has_form(letter, GlyphForm::Initial) || self.has_form(letter, GlyphForm::Medial)
    }

    /// Whether `letter` can sit between two joined letters.
    pub fn connects_both(&self, letter: char) -> bool {
        self.has_form(letter, GlyphForm::Medial)
    }

    fn has_form(&self, letter: char, form: GlyphForm) -> bool {
        self.form(letter, form).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reshape::forms::{TATWEEL, ZWJ};

    const ALEF: char = '\u{0627}';
    const BEH: char = '\u{0628}';
    const HAMZA: char = '\u{0621}';

    #[test]
    fn tables_are_shared() {
        let a = LetterTable::for_language(Language::Arabic);
        let b = LetterTable::for_language(Language::Arabic);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.language(), Language::Arabic);
        assert!(!a.is_empty());
    }

    #[test]
    fn connectivity_follows_available_forms() {
        let table = LetterTable::for_language(Language::Arabic);
        assert!(table.connects_before(BEH));
        assert!(table.connects_after(BEH));
        assert!(table.connects_both(BEH));

        // Alef joins only the letter before it
        assert!(table.connects_before(ALEF));
        assert!(!table.connects_after(ALEF));
        assert!(!table.connects_both(ALEF));

        // Hamza never joins
        assert!(!table.connects_before(HAMZA));
        assert!(!table.connects_after(HAMZA));
    }

    #[test]
    fn presentation_forms() {
        let table = LetterTable::for_language(Language::Arabic);
        assert_eq!(table.form(BEH, GlyphForm::Isolated), Some('\u{FE8F}'));
        assert_eq!(table.form(BEH, GlyphForm::Initial), Some('\u{FE91}'));
        assert_eq!(table.form(BEH, GlyphForm::Medial), Some('\u{FE92}'));
        assert_eq!(table.form(BEH, GlyphForm::Final), Some('\u{FE90}'));
        assert_eq!(table.form(ALEF, GlyphForm::Initial), None);
        assert_eq!(table.form('a', GlyphForm::Isolated), None);
    }

    #[test]
    fn joiners_map_to_themselves() {
        for language in [Language::Arabic, Language::ArabicV2, Language::Kurdish] {
            let table = LetterTable::for_language(language);
            for ch in [TATWEEL, ZWJ] {
                assert_eq!(table.forms(ch), Some(&[Some(ch); 4]), "{language:?}");
                assert!(table.connects_both(ch));
            }
        }
    }

    #[test]
    fn v2_isolated_forms_are_base_letters() {
        let table = LetterTable::for_language(Language::ArabicV2);
        assert_eq!(table.form(BEH, GlyphForm::Isolated), Some(BEH));
        assert_eq!(table.form(BEH, GlyphForm::Final), Some('\u{FE90}'));
    }

    #[test]
    fn kurdish_letters() {
        let table = LetterTable::for_language(Language::Kurdish);
        // Kurdish (Sorani) vowel letters
        assert!(table.contains('\u{06CE}'));
        assert!(table.contains('\u{06D5}'));
        assert!(!LetterTable::for_language(Language::Arabic).contains('\u{06D5}'));
    }
}
