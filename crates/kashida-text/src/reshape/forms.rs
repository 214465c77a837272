//! Glyph forms and the character classes the reshaper treats specially.

/// Arabic tatweel (kashida), U+0640.
pub const TATWEEL: char = '\u{0640}';

/// Zero-width joiner, U+200D.
pub const ZWJ: char = '\u{200D}';

/// Isolated, initial, medial and final forms, in that order.
pub type LetterForms = [Option<char>; 4];

/// The contextual form chosen for one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphForm {
    Isolated,
    Initial,
    Medial,
    Final,
    /// Emitted as the base letter instead of a presentation form.
    Unshaped,
    /// Not a letter of the active table (or already substituted); emitted
    /// verbatim.
    NotSupported,
}

impl GlyphForm {
    /// Position of this form in a [`LetterForms`] array.
    pub fn index(self) -> Option<usize> {
        match self {
            GlyphForm::Isolated => Some(0),
            GlyphForm::Initial => Some(1),
            GlyphForm::Medial => Some(2),
            GlyphForm::Final => Some(3),
            GlyphForm::Unshaped | GlyphForm::NotSupported => None,
        }
    }

    /// Whether the glyph text is emitted as-is rather than looked up.
    pub fn is_verbatim(self) -> bool {
        matches!(self, GlyphForm::Unshaped | GlyphForm::NotSupported)
    }
}

/// Pick the `form` slot out of `forms`.
pub fn form_of(forms: &LetterForms, form: GlyphForm) -> Option<char> {
    form.index().and_then(|i| forms[i])
}

/// Arabic diacritics (harakat) and Quranic annotation marks.
pub fn is_harakat(ch: char) -> bool {
    matches!(
        ch,
        '\u{0610}'..='\u{061A}'
            | '\u{064B}'..='\u{065F}'
            | '\u{0670}'
            | '\u{06D6}'..='\u{06DC}'
            | '\u{06DF}'..='\u{06E8}'
            | '\u{06EA}'..='\u{06ED}'
            | '\u{08D4}'..='\u{08FF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harakat_ranges() {
        // fatha, shadda, superscript alef
        assert!(is_harakat('\u{064E}'));
        assert!(is_harakat('\u{0651}'));
        assert!(is_harakat('\u{0670}'));
        assert!(is_harakat('\u{08F0}'));
        assert!(!is_harakat('\u{0627}'));
        assert!(!is_harakat(TATWEEL));
        assert!(!is_harakat('\u{06DD}'));
        assert!(!is_harakat('a'));
    }

    #[test]
    fn form_slots() {
        let forms = [Some('a'), None, Some('c'), Some('d')];
        assert_eq!(form_of(&forms, GlyphForm::Isolated), Some('a'));
        assert_eq!(form_of(&forms, GlyphForm::Initial), None);
        assert_eq!(form_of(&forms, GlyphForm::Final), Some('d'));
        assert_eq!(form_of(&forms, GlyphForm::Unshaped), None);
        assert!(GlyphForm::NotSupported.is_verbatim());
        assert!(!GlyphForm::Medial.is_verbatim());
    }
}
