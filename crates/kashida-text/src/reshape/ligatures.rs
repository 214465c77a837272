//! The built-in ligature catalogue.
//!
//! Records are kept in matching priority order: whole sentences first, then
//! words, then letter pairs and triples. Patterns are regular expressions
//! over base letters for [`LigatureMatcher`]; they use literal characters,
//! `[...]` classes and non-capturing `(?:a|b)` groups only.
//!
//! [`LigatureMatcher`]: crate::reshape::LigatureMatcher

use crate::reshape::forms::{GlyphForm, LetterForms, form_of};

use LigatureGroup::{Letter, Sentence, Word};

/// Which part of the catalogue a ligature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LigatureGroup {
    /// Whole phrases such as the basmala.
    Sentence,
    /// Single words such as ALLAH.
    Word,
    /// Letter combinations from the Arabic Presentation Forms blocks.
    Letter,
}

/// One ligature: a stable name, a pattern over base letters, and the
/// presentation forms used when the match sits isolated, initial, medial or
/// final in its word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LigatureRecord {
    pub group: LigatureGroup,
    pub name: &'static str,
    pub pattern: &'static str,
    pub forms: LetterForms,
}

impl LigatureRecord {
    const fn new(
        group: LigatureGroup,
        name: &'static str,
        pattern: &'static str,
        forms: LetterForms,
    ) -> Self {
        Self {
            group,
            name,
            pattern,
            forms,
        }
    }

    /// The replacement character for `form`, if this ligature has one.
    pub fn form(&self, form: GlyphForm) -> Option<char> {
        form_of(&self.forms, form)
    }
}

/// Every known ligature, in matching priority order.
pub fn ligatures() -> &'static [LigatureRecord] {
    LIGATURES
}

/// Look up a ligature by its name.
pub fn find_ligature(name: &str) -> Option<&'static LigatureRecord> {
    LIGATURES.iter().find(|record| record.name == name)
}

/// Names of the ligatures in `group`, or of all ligatures when `None`.
pub fn ligature_names(group: Option<LigatureGroup>) -> impl Iterator<Item = &'static str> {
    LIGATURES
        .iter()
        .filter(move |record| group.is_none_or(|g| record.group == g))
        .map(|record| record.name)
}

#[rustfmt::skip]
static LIGATURES: &[LigatureRecord] = &[
    LigatureRecord::new(Sentence, "BISMILLAH AR-RAHMAN AR-RAHEEM", "\u{0628}\u{0633}\u{0645}\u{0020}\u{0627}\u{0644}\u{0644}\u{0647}\u{0020}\u{0627}\u{0644}\u{0631}\u{062D}\u{0645}\u{0646}\u{0020}\u{0627}\u{0644}\u{0631}\u{062D}\u{064A}\u{0645}", [Some('\u{FDFD}'), None, None, None]),
    LigatureRecord::new(Sentence, "JALLAJALALOUHOU", "\u{062C}\u{0644}\u{0020}\u{062C}\u{0644}\u{0627}\u{0644}\u{0647}", [Some('\u{FDFB}'), None, None, None]),
    LigatureRecord::new(Sentence, "SALLALLAHOU ALAYHE WASALLAM", "\u{0635}\u{0644}\u{0649}\u{0020}\u{0627}\u{0644}\u{0644}\u{0647}\u{0020}\u{0639}\u{064A}\u{0647}\u{0020}\u{0648}\u{0633}\u{0644}\u{0645}", [Some('\u{FDFA}'), None, None, None]),
    LigatureRecord::new(Word, "ALLAH", "\u{0627}\u{0644}\u{0644}\u{0647}", [Some('\u{FDF2}'), None, None, None]),
    LigatureRecord::new(Word, "AKBAR", "\u{0623}\u{0643}\u{0628}\u{0631}", [Some('\u{FDF3}'), None, None, None]),
    LigatureRecord::new(Word, "ALAYHE", "\u{0639}\u{064A}\u{0647}", [Some('\u{FDF7}'), None, None, None]),
    LigatureRecord::new(Word, "MOHAMMAD", "\u{0645}\u{062D}\u{0645}\u{062F}", [Some('\u{FDF4}'), None, None, None]),
    LigatureRecord::new(Word, "RASOUL", "\u{0631}\u{0633}\u{0648}\u{0644}", [Some('\u{FDF6}'), None, None, None]),
    LigatureRecord::new(Word, "SALAM", "\u{0635}\u{0644}\u{0639}\u{0645}", [Some('\u{FDF5}'), None, None, None]),
    LigatureRecord::new(Word, "SALLA", "\u{0635}\u{0644}\u{0649}", [Some('\u{FDF9}'), None, None, None]),
    LigatureRecord::new(Word, "WASALLAM", "\u{0648}\u{0633}\u{0644}\u{0645}", [Some('\u{FDF8}'), None, None, None]),
    LigatureRecord::new(Word, "RIAL SIGN", "\u{0631}[\u{06CC}\u{064A}]\u{0627}\u{0644}", [Some('\u{FDFC}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE AIN WITH ALEF MAKSURA", "\u{0639}\u{0649}", [Some('\u{FCF7}'), None, None, Some('\u{FD13}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE AIN WITH JEEM", "\u{0639}\u{062C}", [Some('\u{FC29}'), Some('\u{FCBA}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE AIN WITH JEEM WITH MEEM", "\u{0639}\u{062C}\u{0645}", [None, Some('\u{FDC4}'), None, Some('\u{FD75}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE AIN WITH MEEM", "\u{0639}\u{0645}", [Some('\u{FC2A}'), Some('\u{FCBB}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE AIN WITH MEEM WITH ALEF MAKSURA", "\u{0639}\u{0645}\u{0649}", [None, None, None, Some('\u{FD78}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE AIN WITH MEEM WITH MEEM", "\u{0639}\u{0645}\u{0645}", [None, Some('\u{FD77}'), None, Some('\u{FD76}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE AIN WITH MEEM WITH YEH", "\u{0639}\u{0645}\u{064A}", [None, None, None, Some('\u{FDB6}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE AIN WITH YEH", "\u{0639}\u{064A}", [Some('\u{FCF8}'), None, None, Some('\u{FD14}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE ALEF MAKSURA WITH SUPERSCRIPT ALEF", "\u{0649}\u{0670}", [Some('\u{FC5D}'), None, None, Some('\u{FC90}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE ALEF WITH FATHATAN", "\u{0627}\u{064B}", [Some('\u{FD3D}'), None, None, Some('\u{FD3C}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH ALEF MAKSURA", "\u{0628}\u{0649}", [Some('\u{FC09}'), None, None, Some('\u{FC6E}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH HAH", "\u{0628}\u{062D}", [Some('\u{FC06}'), Some('\u{FC9D}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH HAH WITH YEH", "\u{0628}\u{062D}\u{064A}", [None, None, None, Some('\u{FDC2}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH HEH", "\u{0628}\u{0647}", [None, Some('\u{FCA0}'), Some('\u{FCE2}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH JEEM", "\u{0628}\u{062C}", [Some('\u{FC05}'), Some('\u{FC9C}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH KHAH", "\u{0628}\u{062E}", [Some('\u{FC07}'), Some('\u{FC9E}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH KHAH WITH YEH", "\u{0628}\u{062E}\u{064A}", [None, None, None, Some('\u{FD9E}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH MEEM", "\u{0628}\u{0645}", [Some('\u{FC08}'), Some('\u{FC9F}'), Some('\u{FCE1}'), Some('\u{FC6C}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH NOON", "\u{0628}\u{0646}", [None, None, None, Some('\u{FC6D}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH REH", "\u{0628}\u{0631}", [None, None, None, Some('\u{FC6A}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH YEH", "\u{0628}\u{064A}", [Some('\u{FC0A}'), None, None, Some('\u{FC6F}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE BEH WITH ZAIN", "\u{0628}\u{0632}", [None, None, None, Some('\u{FC6B}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE DAD WITH ALEF MAKSURA", "\u{0636}\u{0649}", [Some('\u{FD07}'), None, None, Some('\u{FD23}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE DAD WITH HAH", "\u{0636}\u{062D}", [Some('\u{FC23}'), Some('\u{FCB5}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE DAD WITH HAH WITH ALEF MAKSURA", "\u{0636}\u{062D}\u{0649}", [None, None, None, Some('\u{FD6E}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE DAD WITH HAH WITH YEH", "\u{0636}\u{062D}\u{064A}", [None, None, None, Some('\u{FDAB}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE DAD WITH JEEM", "\u{0636}\u{062C}", [Some('\u{FC22}'), Some('\u{FCB4}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE DAD WITH KHAH", "\u{0636}\u{062E}", [Some('\u{FC24}'), Some('\u{FCB6}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE DAD WITH KHAH WITH MEEM", "\u{0636}\u{062E}\u{0645}", [None, Some('\u{FD70}'), None, Some('\u{FD6F}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE DAD WITH MEEM", "\u{0636}\u{0645}", [Some('\u{FC25}'), Some('\u{FCB7}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE DAD WITH REH", "\u{0636}\u{0631}", [Some('\u{FD10}'), None, None, Some('\u{FD2C}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE DAD WITH YEH", "\u{0636}\u{064A}", [Some('\u{FD08}'), None, None, Some('\u{FD24}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE FEH WITH ALEF MAKSURA", "\u{0641}\u{0649}", [Some('\u{FC31}'), None, None, Some('\u{FC7C}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE FEH WITH HAH", "\u{0641}\u{062D}", [Some('\u{FC2E}'), Some('\u{FCBF}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE FEH WITH JEEM", "\u{0641}\u{062C}", [Some('\u{FC2D}'), Some('\u{FCBE}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE FEH WITH KHAH", "\u{0641}\u{062E}", [Some('\u{FC2F}'), Some('\u{FCC0}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE FEH WITH KHAH WITH MEEM", "\u{0641}\u{062E}\u{0645}", [None, Some('\u{FD7D}'), None, Some('\u{FD7C}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE FEH WITH MEEM", "\u{0641}\u{0645}", [Some('\u{FC30}'), Some('\u{FCC1}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE FEH WITH MEEM WITH YEH", "\u{0641}\u{0645}\u{064A}", [None, None, None, Some('\u{FDC1}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE FEH WITH YEH", "\u{0641}\u{064A}", [Some('\u{FC32}'), None, None, Some('\u{FC7D}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE GHAIN WITH ALEF MAKSURA", "\u{063A}\u{0649}", [Some('\u{FCF9}'), None, None, Some('\u{FD15}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE GHAIN WITH JEEM", "\u{063A}\u{062C}", [Some('\u{FC2B}'), Some('\u{FCBC}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE GHAIN WITH MEEM", "\u{063A}\u{0645}", [Some('\u{FC2C}'), Some('\u{FCBD}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE GHAIN WITH MEEM WITH ALEF MAKSURA", "\u{063A}\u{0645}\u{0649}", [None, None, None, Some('\u{FD7B}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE GHAIN WITH MEEM WITH MEEM", "\u{063A}\u{0645}\u{0645}", [None, None, None, Some('\u{FD79}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE GHAIN WITH MEEM WITH YEH", "\u{063A}\u{0645}\u{064A}", [None, None, None, Some('\u{FD7A}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE GHAIN WITH YEH", "\u{063A}\u{064A}", [Some('\u{FCFA}'), None, None, Some('\u{FD16}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HAH WITH ALEF MAKSURA", "\u{062D}\u{0649}", [Some('\u{FCFF}'), None, None, Some('\u{FD1B}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HAH WITH JEEM", "\u{062D}\u{062C}", [Some('\u{FC17}'), Some('\u{FCA9}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HAH WITH JEEM WITH YEH", "\u{062D}\u{062C}\u{064A}", [None, None, None, Some('\u{FDBF}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HAH WITH MEEM", "\u{062D}\u{0645}", [Some('\u{FC18}'), Some('\u{FCAA}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HAH WITH MEEM WITH ALEF MAKSURA", "\u{062D}\u{0645}\u{0649}", [None, None, None, Some('\u{FD5B}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HAH WITH MEEM WITH YEH", "\u{062D}\u{0645}\u{064A}", [None, None, None, Some('\u{FD5A}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HAH WITH YEH", "\u{062D}\u{064A}", [Some('\u{FD00}'), None, None, Some('\u{FD1C}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HEH WITH ALEF MAKSURA", "\u{0647}\u{0649}", [Some('\u{FC53}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HEH WITH JEEM", "\u{0647}\u{062C}", [Some('\u{FC51}'), Some('\u{FCD7}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HEH WITH MEEM", "\u{0647}\u{0645}", [Some('\u{FC52}'), Some('\u{FCD8}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HEH WITH MEEM WITH JEEM", "\u{0647}\u{0645}\u{062C}", [None, Some('\u{FD93}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HEH WITH MEEM WITH MEEM", "\u{0647}\u{0645}\u{0645}", [None, Some('\u{FD94}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HEH WITH SUPERSCRIPT ALEF", "\u{0647}\u{0670}", [None, Some('\u{FCD9}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE HEH WITH YEH", "\u{0647}\u{064A}", [Some('\u{FC54}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE JEEM WITH ALEF MAKSURA", "\u{062C}\u{0649}", [Some('\u{FD01}'), None, None, Some('\u{FD1D}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE JEEM WITH HAH", "\u{062C}\u{062D}", [Some('\u{FC15}'), Some('\u{FCA7}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE JEEM WITH HAH WITH ALEF MAKSURA", "\u{062C}\u{062D}\u{0649}", [None, None, None, Some('\u{FDA6}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE JEEM WITH HAH WITH YEH", "\u{062C}\u{062D}\u{064A}", [None, None, None, Some('\u{FDBE}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE JEEM WITH MEEM", "\u{062C}\u{0645}", [Some('\u{FC16}'), Some('\u{FCA8}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE JEEM WITH MEEM WITH ALEF MAKSURA", "\u{062C}\u{0645}\u{0649}", [None, None, None, Some('\u{FDA7}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE JEEM WITH MEEM WITH HAH", "\u{062C}\u{0645}\u{062D}", [None, Some('\u{FD59}'), None, Some('\u{FD58}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE JEEM WITH MEEM WITH YEH", "\u{062C}\u{0645}\u{064A}", [None, None, None, Some('\u{FDA5}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE JEEM WITH YEH", "\u{062C}\u{064A}", [Some('\u{FD02}'), None, None, Some('\u{FD1E}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KAF WITH ALEF", "\u{0643}\u{0627}", [Some('\u{FC37}'), None, None, Some('\u{FC80}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KAF WITH ALEF MAKSURA", "\u{0643}\u{0649}", [Some('\u{FC3D}'), None, None, Some('\u{FC83}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KAF WITH HAH", "\u{0643}\u{062D}", [Some('\u{FC39}'), Some('\u{FCC5}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KAF WITH JEEM", "\u{0643}\u{062C}", [Some('\u{FC38}'), Some('\u{FCC4}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KAF WITH KHAH", "\u{0643}\u{062E}", [Some('\u{FC3A}'), Some('\u{FCC6}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KAF WITH LAM", "\u{0643}\u{0644}", [Some('\u{FC3B}'), Some('\u{FCC7}'), Some('\u{FCEB}'), Some('\u{FC81}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KAF WITH MEEM", "\u{0643}\u{0645}", [Some('\u{FC3C}'), Some('\u{FCC8}'), Some('\u{FCEC}'), Some('\u{FC82}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KAF WITH MEEM WITH MEEM", "\u{0643}\u{0645}\u{0645}", [None, Some('\u{FDC3}'), None, Some('\u{FDBB}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KAF WITH MEEM WITH YEH", "\u{0643}\u{0645}\u{064A}", [None, None, None, Some('\u{FDB7}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KAF WITH YEH", "\u{0643}\u{064A}", [Some('\u{FC3E}'), None, None, Some('\u{FC84}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KHAH WITH ALEF MAKSURA", "\u{062E}\u{0649}", [Some('\u{FD03}'), None, None, Some('\u{FD1F}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KHAH WITH HAH", "\u{062E}\u{062D}", [Some('\u{FC1A}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KHAH WITH JEEM", "\u{062E}\u{062C}", [Some('\u{FC19}'), Some('\u{FCAB}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KHAH WITH MEEM", "\u{062E}\u{0645}", [Some('\u{FC1B}'), Some('\u{FCAC}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE KHAH WITH YEH", "\u{062E}\u{064A}", [Some('\u{FD04}'), None, None, Some('\u{FD20}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH ALEF", "\u{0644}\u{0627}", [Some('\u{FEFB}'), None, None, Some('\u{FEFC}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH ALEF MAKSURA", "\u{0644}\u{0649}", [Some('\u{FC43}'), None, None, Some('\u{FC86}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH ALEF WITH HAMZA ABOVE", "\u{0644}\u{0623}", [Some('\u{FEF7}'), None, None, Some('\u{FEF8}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH ALEF WITH HAMZA BELOW", "\u{0644}\u{0625}", [Some('\u{FEF9}'), None, None, Some('\u{FEFA}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH ALEF WITH MADDA ABOVE", "\u{0644}\u{0622}", [Some('\u{FEF5}'), None, None, Some('\u{FEF6}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH HAH", "\u{0644}\u{062D}", [Some('\u{FC40}'), Some('\u{FCCA}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH HAH WITH ALEF MAKSURA", "\u{0644}\u{062D}\u{0649}", [None, None, None, Some('\u{FD82}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH HAH WITH MEEM", "\u{0644}\u{062D}\u{0645}", [None, Some('\u{FDB5}'), None, Some('\u{FD80}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH HAH WITH YEH", "\u{0644}\u{062D}\u{064A}", [None, None, None, Some('\u{FD81}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH HEH", "\u{0644}\u{0647}", [None, Some('\u{FCCD}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH JEEM", "\u{0644}\u{062C}", [Some('\u{FC3F}'), Some('\u{FCC9}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH JEEM WITH JEEM", "\u{0644}\u{062C}\u{062C}", [None, Some('\u{FD83}'), None, Some('\u{FD84}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH JEEM WITH MEEM", "\u{0644}\u{062C}\u{0645}", [None, Some('\u{FDBA}'), None, Some('\u{FDBC}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH JEEM WITH YEH", "\u{0644}\u{062C}\u{064A}", [None, None, None, Some('\u{FDAC}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH KHAH", "\u{0644}\u{062E}", [Some('\u{FC41}'), Some('\u{FCCB}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH KHAH WITH MEEM", "\u{0644}\u{062E}\u{0645}", [None, Some('\u{FD86}'), None, Some('\u{FD85}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH MEEM", "\u{0644}\u{0645}", [Some('\u{FC42}'), Some('\u{FCCC}'), Some('\u{FCED}'), Some('\u{FC85}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH MEEM WITH HAH", "\u{0644}\u{0645}\u{062D}", [None, Some('\u{FD88}'), None, Some('\u{FD87}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH MEEM WITH YEH", "\u{0644}\u{0645}\u{064A}", [None, None, None, Some('\u{FDAD}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE LAM WITH YEH", "\u{0644}\u{064A}", [Some('\u{FC44}'), None, None, Some('\u{FC87}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH ALEF", "\u{0645}\u{0627}", [None, None, None, Some('\u{FC88}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH ALEF MAKSURA", "\u{0645}\u{0649}", [Some('\u{FC49}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH HAH", "\u{0645}\u{062D}", [Some('\u{FC46}'), Some('\u{FCCF}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH HAH WITH JEEM", "\u{0645}\u{062D}\u{062C}", [None, Some('\u{FD89}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH HAH WITH MEEM", "\u{0645}\u{062D}\u{0645}", [None, Some('\u{FD8A}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH HAH WITH YEH", "\u{0645}\u{062D}\u{064A}", [None, None, None, Some('\u{FD8B}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH JEEM", "\u{0645}\u{062C}", [Some('\u{FC45}'), Some('\u{FCCE}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH JEEM WITH HAH", "\u{0645}\u{062C}\u{062D}", [None, Some('\u{FD8C}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH JEEM WITH KHAH", "\u{0645}\u{062C}\u{062E}", [None, Some('\u{FD92}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH JEEM WITH MEEM", "\u{0645}\u{062C}\u{0645}", [None, Some('\u{FD8D}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH JEEM WITH YEH", "\u{0645}\u{062C}\u{064A}", [None, None, None, Some('\u{FDC0}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH KHAH", "\u{0645}\u{062E}", [Some('\u{FC47}'), Some('\u{FCD0}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH KHAH WITH JEEM", "\u{0645}\u{062E}\u{062C}", [None, Some('\u{FD8E}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH KHAH WITH MEEM", "\u{0645}\u{062E}\u{0645}", [None, Some('\u{FD8F}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH KHAH WITH YEH", "\u{0645}\u{062E}\u{064A}", [None, None, None, Some('\u{FDB9}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH MEEM", "\u{0645}\u{0645}", [Some('\u{FC48}'), Some('\u{FCD1}'), None, Some('\u{FC89}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH MEEM WITH YEH", "\u{0645}\u{0645}\u{064A}", [None, None, None, Some('\u{FDB1}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE MEEM WITH YEH", "\u{0645}\u{064A}", [Some('\u{FC4A}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH ALEF MAKSURA", "\u{0646}\u{0649}", [Some('\u{FC4F}'), None, None, Some('\u{FC8E}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH HAH", "\u{0646}\u{062D}", [Some('\u{FC4C}'), Some('\u{FCD3}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH HAH WITH ALEF MAKSURA", "\u{0646}\u{062D}\u{0649}", [None, None, None, Some('\u{FD96}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH HAH WITH MEEM", "\u{0646}\u{062D}\u{0645}", [None, Some('\u{FD95}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH HAH WITH YEH", "\u{0646}\u{062D}\u{064A}", [None, None, None, Some('\u{FDB3}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH HEH", "\u{0646}\u{0647}", [None, Some('\u{FCD6}'), Some('\u{FCEF}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH JEEM", "\u{0646}\u{062C}", [Some('\u{FC4B}'), Some('\u{FCD2}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH JEEM WITH ALEF MAKSURA", "\u{0646}\u{062C}\u{0649}", [None, None, None, Some('\u{FD99}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH JEEM WITH HAH", "\u{0646}\u{062C}\u{062D}", [None, Some('\u{FDB8}'), None, Some('\u{FDBD}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH JEEM WITH MEEM", "\u{0646}\u{062C}\u{0645}", [None, Some('\u{FD98}'), None, Some('\u{FD97}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH JEEM WITH YEH", "\u{0646}\u{062C}\u{064A}", [None, None, None, Some('\u{FDC7}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH KHAH", "\u{0646}\u{062E}", [Some('\u{FC4D}'), Some('\u{FCD4}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH MEEM", "\u{0646}\u{0645}", [Some('\u{FC4E}'), Some('\u{FCD5}'), Some('\u{FCEE}'), Some('\u{FC8C}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH MEEM WITH ALEF MAKSURA", "\u{0646}\u{0645}\u{0649}", [None, None, None, Some('\u{FD9B}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH MEEM WITH YEH", "\u{0646}\u{0645}\u{064A}", [None, None, None, Some('\u{FD9A}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH NOON", "\u{0646}\u{0646}", [None, None, None, Some('\u{FC8D}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH REH", "\u{0646}\u{0631}", [None, None, None, Some('\u{FC8A}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH YEH", "\u{0646}\u{064A}", [Some('\u{FC50}'), None, None, Some('\u{FC8F}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE NOON WITH ZAIN", "\u{0646}\u{0632}", [None, None, None, Some('\u{FC8B}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE QAF WITH ALEF MAKSURA", "\u{0642}\u{0649}", [Some('\u{FC35}'), None, None, Some('\u{FC7E}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE QAF WITH HAH", "\u{0642}\u{062D}", [Some('\u{FC33}'), Some('\u{FCC2}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE QAF WITH MEEM", "\u{0642}\u{0645}", [Some('\u{FC34}'), Some('\u{FCC3}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE QAF WITH MEEM WITH HAH", "\u{0642}\u{0645}\u{062D}", [None, Some('\u{FDB4}'), None, Some('\u{FD7E}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE QAF WITH MEEM WITH MEEM", "\u{0642}\u{0645}\u{0645}", [None, None, None, Some('\u{FD7F}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE QAF WITH MEEM WITH YEH", "\u{0642}\u{0645}\u{064A}", [None, None, None, Some('\u{FDB2}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE QAF WITH YEH", "\u{0642}\u{064A}", [Some('\u{FC36}'), None, None, Some('\u{FC7F}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE QALA USED AS KORANIC STOP SIGN", "\u{0642}\u{0644}\u{06D2}", [Some('\u{FDF1}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE REH WITH SUPERSCRIPT ALEF", "\u{0631}\u{0670}", [Some('\u{FC5C}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SAD WITH ALEF MAKSURA", "\u{0635}\u{0649}", [Some('\u{FD05}'), None, None, Some('\u{FD21}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SAD WITH HAH", "\u{0635}\u{062D}", [Some('\u{FC20}'), Some('\u{FCB1}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SAD WITH HAH WITH HAH", "\u{0635}\u{062D}\u{062D}", [None, Some('\u{FD65}'), None, Some('\u{FD64}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SAD WITH HAH WITH YEH", "\u{0635}\u{062D}\u{064A}", [None, None, None, Some('\u{FDA9}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SAD WITH KHAH", "\u{0635}\u{062E}", [None, Some('\u{FCB2}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SAD WITH MEEM", "\u{0635}\u{0645}", [Some('\u{FC21}'), Some('\u{FCB3}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SAD WITH MEEM WITH MEEM", "\u{0635}\u{0645}\u{0645}", [None, Some('\u{FDC5}'), None, Some('\u{FD66}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SAD WITH REH", "\u{0635}\u{0631}", [Some('\u{FD0F}'), None, None, Some('\u{FD2B}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SAD WITH YEH", "\u{0635}\u{064A}", [Some('\u{FD06}'), None, None, Some('\u{FD22}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SALLA USED AS KORANIC STOP SIGN", "\u{0635}\u{0644}\u{06D2}", [Some('\u{FDF0}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH ALEF MAKSURA", "\u{0633}\u{0649}", [Some('\u{FCFB}'), None, None, Some('\u{FD17}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH HAH", "\u{0633}\u{062D}", [Some('\u{FC1D}'), Some('\u{FCAE}'), Some('\u{FD35}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH HAH WITH JEEM", "\u{0633}\u{062D}\u{062C}", [None, Some('\u{FD5C}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH HEH", "\u{0633}\u{0647}", [None, Some('\u{FD31}'), Some('\u{FCE8}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH JEEM", "\u{0633}\u{062C}", [Some('\u{FC1C}'), Some('\u{FCAD}'), Some('\u{FD34}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH JEEM WITH ALEF MAKSURA", "\u{0633}\u{062C}\u{0649}", [None, None, None, Some('\u{FD5E}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH JEEM WITH HAH", "\u{0633}\u{062C}\u{062D}", [None, Some('\u{FD5D}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH KHAH", "\u{0633}\u{062E}", [Some('\u{FC1E}'), Some('\u{FCAF}'), Some('\u{FD36}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH KHAH WITH ALEF MAKSURA", "\u{0633}\u{062E}\u{0649}", [None, None, None, Some('\u{FDA8}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH KHAH WITH YEH", "\u{0633}\u{062E}\u{064A}", [None, None, None, Some('\u{FDC6}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH MEEM", "\u{0633}\u{0645}", [Some('\u{FC1F}'), Some('\u{FCB0}'), Some('\u{FCE7}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH MEEM WITH HAH", "\u{0633}\u{0645}\u{062D}", [None, Some('\u{FD60}'), None, Some('\u{FD5F}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH MEEM WITH JEEM", "\u{0633}\u{0645}\u{062C}", [None, Some('\u{FD61}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH MEEM WITH MEEM", "\u{0633}\u{0645}\u{0645}", [None, Some('\u{FD63}'), None, Some('\u{FD62}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH REH", "\u{0633}\u{0631}", [Some('\u{FD0E}'), None, None, Some('\u{FD2A}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SEEN WITH YEH", "\u{0633}\u{064A}", [Some('\u{FCFC}'), None, None, Some('\u{FD18}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH DAMMATAN ISOLATED FORM", "(?:\u{064C}\u{0651}|\u{0651}\u{064C})", [Some('\u{FC5E}'), Some('\u{FC5E}'), Some('\u{FC5E}'), Some('\u{FC5E}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH KASRATAN ISOLATED FORM", "(?:\u{064D}\u{0651}|\u{0651}\u{064D})", [Some('\u{FC5F}'), Some('\u{FC5F}'), Some('\u{FC5F}'), Some('\u{FC5F}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH FATHA ISOLATED FORM", "(?:\u{064E}\u{0651}|\u{0651}\u{064E})", [Some('\u{FC60}'), Some('\u{FC60}'), Some('\u{FC60}'), Some('\u{FC60}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH DAMMA ISOLATED FORM", "(?:\u{064F}\u{0651}|\u{0651}\u{064F})", [Some('\u{FC61}'), Some('\u{FC61}'), Some('\u{FC61}'), Some('\u{FC61}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH KASRA ISOLATED FORM", "(?:\u{0650}\u{0651}|\u{0651}\u{0650})", [Some('\u{FC62}'), Some('\u{FC62}'), Some('\u{FC62}'), Some('\u{FC62}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH SUPERSCRIPT ALEF", "(?:\u{0651}\u{0670}|\u{0670}\u{0651})", [Some('\u{FC63}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH FATHA MEDIAL FORM", "\u{0640}(?:\u{064E}\u{0651}|\u{0651}\u{064E})", [Some('\u{FCF2}'), Some('\u{FCF2}'), Some('\u{FCF2}'), Some('\u{FCF2}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH DAMMA MEDIAL FORM", "\u{0640}(?:\u{064F}\u{0651}|\u{0651}\u{064F})", [Some('\u{FCF3}'), Some('\u{FCF3}'), Some('\u{FCF3}'), Some('\u{FCF3}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH KASRA MEDIAL FORM", "\u{0640}(?:\u{0650}\u{0651}|\u{0651}\u{0650})", [Some('\u{FCF4}'), Some('\u{FCF4}'), Some('\u{FCF4}'), Some('\u{FCF4}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH FATHA", "\u{0640}(?:\u{064E}\u{0651}|\u{0651}\u{064E})", [Some('\u{FCF2}'), Some('\u{FCF2}'), Some('\u{FCF2}'), Some('\u{FCF2}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH DAMMA", "\u{0640}(?:\u{064F}\u{0651}|\u{0651}\u{064F})", [Some('\u{FCF3}'), Some('\u{FCF3}'), Some('\u{FCF3}'), Some('\u{FCF3}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHADDA WITH KASRA", "\u{0640}(?:\u{0650}\u{0651}|\u{0651}\u{0650})", [Some('\u{FCF4}'), Some('\u{FCF4}'), Some('\u{FCF4}'), Some('\u{FCF4}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH ALEF MAKSURA", "\u{0634}\u{0649}", [Some('\u{FCFD}'), None, None, Some('\u{FD19}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH HAH", "\u{0634}\u{062D}", [Some('\u{FD0A}'), Some('\u{FD2E}'), Some('\u{FD38}'), Some('\u{FD26}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH HAH WITH MEEM", "\u{0634}\u{062D}\u{0645}", [None, Some('\u{FD68}'), None, Some('\u{FD67}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH HAH WITH YEH", "\u{0634}\u{062D}\u{064A}", [None, None, None, Some('\u{FDAA}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH HEH", "\u{0634}\u{0647}", [None, Some('\u{FD32}'), Some('\u{FCEA}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH JEEM", "\u{0634}\u{062C}", [Some('\u{FD09}'), Some('\u{FD2D}'), Some('\u{FD37}'), Some('\u{FD25}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH JEEM WITH YEH", "\u{0634}\u{062C}\u{064A}", [None, None, None, Some('\u{FD69}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH KHAH", "\u{0634}\u{062E}", [Some('\u{FD0B}'), Some('\u{FD2F}'), Some('\u{FD39}'), Some('\u{FD27}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH MEEM", "\u{0634}\u{0645}", [Some('\u{FD0C}'), Some('\u{FD30}'), Some('\u{FCE9}'), Some('\u{FD28}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH MEEM WITH KHAH", "\u{0634}\u{0645}\u{062E}", [None, Some('\u{FD6B}'), None, Some('\u{FD6A}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH MEEM WITH MEEM", "\u{0634}\u{0645}\u{0645}", [None, Some('\u{FD6D}'), None, Some('\u{FD6C}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH REH", "\u{0634}\u{0631}", [Some('\u{FD0D}'), None, None, Some('\u{FD29}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE SHEEN WITH YEH", "\u{0634}\u{064A}", [Some('\u{FCFE}'), None, None, Some('\u{FD1A}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TAH WITH ALEF MAKSURA", "\u{0637}\u{0649}", [Some('\u{FCF5}'), None, None, Some('\u{FD11}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TAH WITH HAH", "\u{0637}\u{062D}", [Some('\u{FC26}'), Some('\u{FCB8}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TAH WITH MEEM", "\u{0637}\u{0645}", [Some('\u{FC27}'), Some('\u{FD33}'), Some('\u{FD3A}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TAH WITH MEEM WITH HAH", "\u{0637}\u{0645}\u{062D}", [None, Some('\u{FD72}'), None, Some('\u{FD71}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TAH WITH MEEM WITH MEEM", "\u{0637}\u{0645}\u{0645}", [None, Some('\u{FD73}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TAH WITH MEEM WITH YEH", "\u{0637}\u{0645}\u{064A}", [None, None, None, Some('\u{FD74}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TAH WITH YEH", "\u{0637}\u{064A}", [Some('\u{FCF6}'), None, None, Some('\u{FD12}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH ALEF MAKSURA", "\u{062A}\u{0649}", [Some('\u{FC0F}'), None, None, Some('\u{FC74}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH HAH", "\u{062A}\u{062D}", [Some('\u{FC0C}'), Some('\u{FCA2}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH HAH WITH JEEM", "\u{062A}\u{062D}\u{062C}", [None, Some('\u{FD52}'), None, Some('\u{FD51}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH HAH WITH MEEM", "\u{062A}\u{062D}\u{0645}", [None, Some('\u{FD53}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH HEH", "\u{062A}\u{0647}", [None, Some('\u{FCA5}'), Some('\u{FCE4}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH JEEM", "\u{062A}\u{062C}", [Some('\u{FC0B}'), Some('\u{FCA1}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH JEEM WITH ALEF MAKSURA", "\u{062A}\u{062C}\u{0649}", [None, None, None, Some('\u{FDA0}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH JEEM WITH MEEM", "\u{062A}\u{062C}\u{0645}", [None, Some('\u{FD50}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH JEEM WITH YEH", "\u{062A}\u{062C}\u{064A}", [None, None, None, Some('\u{FD9F}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH KHAH", "\u{062A}\u{062E}", [Some('\u{FC0D}'), Some('\u{FCA3}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH KHAH WITH ALEF MAKSURA", "\u{062A}\u{062E}\u{0649}", [None, None, None, Some('\u{FDA2}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH KHAH WITH MEEM", "\u{062A}\u{062E}\u{0645}", [None, Some('\u{FD54}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH KHAH WITH YEH", "\u{062A}\u{062E}\u{064A}", [None, None, None, Some('\u{FDA1}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH MEEM", "\u{062A}\u{0645}", [Some('\u{FC0E}'), Some('\u{FCA4}'), Some('\u{FCE3}'), Some('\u{FC72}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH MEEM WITH ALEF MAKSURA", "\u{062A}\u{0645}\u{0649}", [None, None, None, Some('\u{FDA4}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH MEEM WITH HAH", "\u{062A}\u{0645}\u{062D}", [None, Some('\u{FD56}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH MEEM WITH JEEM", "\u{062A}\u{0645}\u{062C}", [None, Some('\u{FD55}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH MEEM WITH KHAH", "\u{062A}\u{0645}\u{062E}", [None, Some('\u{FD57}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH MEEM WITH YEH", "\u{062A}\u{0645}\u{064A}", [None, None, None, Some('\u{FDA3}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH NOON", "\u{062A}\u{0646}", [None, None, None, Some('\u{FC73}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH REH", "\u{062A}\u{0631}", [None, None, None, Some('\u{FC70}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH YEH", "\u{062A}\u{064A}", [Some('\u{FC10}'), None, None, Some('\u{FC75}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE TEH WITH ZAIN", "\u{062A}\u{0632}", [None, None, None, Some('\u{FC71}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE THAL WITH SUPERSCRIPT ALEF", "\u{0630}\u{0670}", [Some('\u{FC5B}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE THEH WITH ALEF MAKSURA", "\u{062B}\u{0649}", [Some('\u{FC13}'), None, None, Some('\u{FC7A}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE THEH WITH HEH", "\u{062B}\u{0647}", [None, None, Some('\u{FCE6}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE THEH WITH JEEM", "\u{062B}\u{062C}", [Some('\u{FC11}'), None, None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE THEH WITH MEEM", "\u{062B}\u{0645}", [Some('\u{FC12}'), Some('\u{FCA6}'), Some('\u{FCE5}'), Some('\u{FC78}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE THEH WITH NOON", "\u{062B}\u{0646}", [None, None, None, Some('\u{FC79}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE THEH WITH REH", "\u{062B}\u{0631}", [None, None, None, Some('\u{FC76}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE THEH WITH YEH", "\u{062B}\u{064A}", [Some('\u{FC14}'), None, None, Some('\u{FC7B}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE THEH WITH ZAIN", "\u{062B}\u{0632}", [None, None, None, Some('\u{FC77}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE UIGHUR KIRGHIZ YEH WITH HAMZA ABOVE WITH ALEF MAKSURA", "\u{0626}\u{0649}", [Some('\u{FBF9}'), Some('\u{FBFB}'), None, Some('\u{FBFA}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH ALEF MAKSURA", "\u{064A}\u{0649}", [Some('\u{FC59}'), None, None, Some('\u{FC95}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAH", "\u{064A}\u{062D}", [Some('\u{FC56}'), Some('\u{FCDB}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAH WITH YEH", "\u{064A}\u{062D}\u{064A}", [None, None, None, Some('\u{FDAE}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH AE", "\u{0626}\u{06D5}", [Some('\u{FBEC}'), None, None, Some('\u{FBED}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH ALEF", "\u{0626}\u{0627}", [Some('\u{FBEA}'), None, None, Some('\u{FBEB}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH ALEF MAKSURA", "\u{0626}\u{0649}", [Some('\u{FC03}'), None, None, Some('\u{FC68}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH E", "\u{0626}\u{06D0}", [Some('\u{FBF6}'), Some('\u{FBF8}'), None, Some('\u{FBF7}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH HAH", "\u{0626}\u{062D}", [Some('\u{FC01}'), Some('\u{FC98}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH HEH", "\u{0626}\u{0647}", [None, Some('\u{FC9B}'), Some('\u{FCE0}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH JEEM", "\u{0626}\u{062C}", [Some('\u{FC00}'), Some('\u{FC97}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH KHAH", "\u{0626}\u{062E}", [None, Some('\u{FC99}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH MEEM", "\u{0626}\u{0645}", [Some('\u{FC02}'), Some('\u{FC9A}'), Some('\u{FCDF}'), Some('\u{FC66}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH NOON", "\u{0626}\u{0646}", [None, None, None, Some('\u{FC67}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH OE", "\u{0626}\u{06C6}", [Some('\u{FBF2}'), None, None, Some('\u{FBF3}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH REH", "\u{0626}\u{0631}", [None, None, None, Some('\u{FC64}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH U", "\u{0626}\u{06C7}", [Some('\u{FBF0}'), None, None, Some('\u{FBF1}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH WAW", "\u{0626}\u{0648}", [Some('\u{FBEE}'), None, None, Some('\u{FBEF}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH YEH", "\u{0626}\u{064A}", [Some('\u{FC04}'), None, None, Some('\u{FC69}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH YU", "\u{0626}\u{06C8}", [Some('\u{FBF4}'), None, None, Some('\u{FBF5}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HAMZA ABOVE WITH ZAIN", "\u{0626}\u{0632}", [None, None, None, Some('\u{FC65}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH HEH", "\u{064A}\u{0647}", [None, Some('\u{FCDE}'), Some('\u{FCF1}'), None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH JEEM", "\u{064A}\u{062C}", [Some('\u{FC55}'), Some('\u{FCDA}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH JEEM WITH YEH", "\u{064A}\u{062C}\u{064A}", [None, None, None, Some('\u{FDAF}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH KHAH", "\u{064A}\u{062E}", [Some('\u{FC57}'), Some('\u{FCDC}'), None, None]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH MEEM", "\u{064A}\u{0645}", [Some('\u{FC58}'), Some('\u{FCDD}'), Some('\u{FCF0}'), Some('\u{FC93}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH MEEM WITH MEEM", "\u{064A}\u{0645}\u{0645}", [None, Some('\u{FD9D}'), None, Some('\u{FD9C}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH MEEM WITH YEH", "\u{064A}\u{0645}\u{064A}", [None, None, None, Some('\u{FDB0}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH NOON", "\u{064A}\u{0646}", [None, None, None, Some('\u{FC94}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH REH", "\u{064A}\u{0631}", [None, None, None, Some('\u{FC91}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH YEH", "\u{064A}\u{064A}", [Some('\u{FC5A}'), None, None, Some('\u{FC96}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE YEH WITH ZAIN", "\u{064A}\u{0632}", [None, None, None, Some('\u{FC92}')]),
    LigatureRecord::new(Letter, "ARABIC LIGATURE ZAH WITH MEEM", "\u{0638}\u{0645}", [Some('\u{FC28}'), Some('\u{FCB9}'), Some('\u{FD3B}'), None]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use super::LigatureGroup::{Letter, Sentence, Word};

    #[test]
    fn catalogue_is_ordered_by_group() {
        let groups: Vec<LigatureGroup> = ligatures().iter().map(|r| r.group).collect();
        let first_word = groups.iter().position(|g| *g == Word).unwrap();
        let first_letter = groups.iter().position(|g| *g == Letter).unwrap();
        assert!(groups[..first_word].iter().all(|g| *g == Sentence));
        assert!(groups[first_word..first_letter].iter().all(|g| *g == Word));
        assert!(groups[first_letter..].iter().all(|g| *g == Letter));
    }

    #[test]
    fn group_sizes() {
        assert_eq!(ligature_names(Some(Sentence)).count(), 3);
        assert_eq!(ligature_names(Some(Word)).count(), 9);
        assert_eq!(ligature_names(None).count(), ligatures().len());
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = ligature_names(None).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn lookup_by_name() {
        let allah = find_ligature("ALLAH").unwrap();
        assert_eq!(allah.group, Word);
        assert_eq!(allah.form(GlyphForm::Isolated), Some('\u{FDF2}'));
        assert_eq!(allah.form(GlyphForm::Final), None);

        let lam_alef = find_ligature("ARABIC LIGATURE LAM WITH ALEF").unwrap();
        assert_eq!(lam_alef.pattern, "\u{0644}\u{0627}");
        assert_eq!(lam_alef.form(GlyphForm::Isolated), Some('\u{FEFB}'));
        assert_eq!(lam_alef.form(GlyphForm::Final), Some('\u{FEFC}'));

        assert!(find_ligature("NO SUCH LIGATURE").is_none());
    }

    #[test]
    fn every_record_has_a_form() {
        for record in ligatures() {
            assert!(record.forms.iter().any(Option::is_some), "{}", record.name);
        }
    }
}
