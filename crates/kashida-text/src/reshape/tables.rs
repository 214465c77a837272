//! Contextual forms of every supported letter, per language.
//!
//! Each entry lists the isolated, initial, medial and final presentation
//! forms of a letter; `None` marks a form the letter does not have.

use crate::reshape::forms::LetterForms;

/// Arabic letters with their Arabic Presentation Forms-B shapes.
#[rustfmt::skip]
pub(crate) static ARABIC: &[(char, LetterForms)] = &[
    ('\u{0621}', [Some('\u{FE80}'), None, None, None]), // HAMZA
    ('\u{0622}', [Some('\u{FE81}'), None, None, Some('\u{FE82}')]), // ALEF WITH MADDA ABOVE
    ('\u{0623}', [Some('\u{FE83}'), None, None, Some('\u{FE84}')]), // ALEF WITH HAMZA ABOVE
    ('\u{0624}', [Some('\u{FE85}'), None, None, Some('\u{FE86}')]), // WAW WITH HAMZA ABOVE
    ('\u{0625}', [Some('\u{FE87}'), None, None, Some('\u{FE88}')]), // ALEF WITH HAMZA BELOW
    ('\u{0626}', [Some('\u{FE89}'), Some('\u{FE8B}'), Some('\u{FE8C}'), Some('\u{FE8A}')]), // YEH WITH HAMZA ABOVE
    ('\u{0627}', [Some('\u{FE8D}'), None, None, Some('\u{FE8E}')]), // ALEF
    ('\u{0628}', [Some('\u{FE8F}'), Some('\u{FE91}'), Some('\u{FE92}'), Some('\u{FE90}')]), // BEH
    ('\u{0629}', [Some('\u{FE93}'), None, None, Some('\u{FE94}')]), // TEH MARBUTA
    ('\u{062A}', [Some('\u{FE95}'), Some('\u{FE97}'), Some('\u{FE98}'), Some('\u{FE96}')]), // TEH
    ('\u{062B}', [Some('\u{FE99}'), Some('\u{FE9B}'), Some('\u{FE9C}'), Some('\u{FE9A}')]), // THEH
    ('\u{062C}', [Some('\u{FE9D}'), Some('\u{FE9F}'), Some('\u{FEA0}'), Some('\u{FE9E}')]), // JEEM
    ('\u{062D}', [Some('\u{FEA1}'), Some('\u{FEA3}'), Some('\u{FEA4}'), Some('\u{FEA2}')]), // HAH
    ('\u{062E}', [Some('\u{FEA5}'), Some('\u{FEA7}'), Some('\u{FEA8}'), Some('\u{FEA6}')]), // KHAH
    ('\u{062F}', [Some('\u{FEA9}'), None, None, Some('\u{FEAA}')]), // DAL
    ('\u{0630}', [Some('\u{FEAB}'), None, None, Some('\u{FEAC}')]), // THAL
    ('\u{0631}', [Some('\u{FEAD}'), None, None, Some('\u{FEAE}')]), // REH
    ('\u{0632}', [Some('\u{FEAF}'), None, None, Some('\u{FEB0}')]), // ZAIN
    ('\u{0633}', [Some('\u{FEB1}'), Some('\u{FEB3}'), Some('\u{FEB4}'), Some('\u{FEB2}')]), // SEEN
    ('\u{0634}', [Some('\u{FEB5}'), Some('\u{FEB7}'), Some('\u{FEB8}'), Some('\u{FEB6}')]), // SHEEN
    ('\u{0635}', [Some('\u{FEB9}'), Some('\u{FEBB}'), Some('\u{FEBC}'), Some('\u{FEBA}')]), // SAD
    ('\u{0636}', [Some('\u{FEBD}'), Some('\u{FEBF}'), Some('\u{FEC0}'), Some('\u{FEBE}')]), // DAD
    ('\u{0637}', [Some('\u{FEC1}'), Some('\u{FEC3}'), Some('\u{FEC4}'), Some('\u{FEC2}')]), // TAH
    ('\u{0638}', [Some('\u{FEC5}'), Some('\u{FEC7}'), Some('\u{FEC8}'), Some('\u{FEC6}')]), // ZAH
    ('\u{0639}', [Some('\u{FEC9}'), Some('\u{FECB}'), Some('\u{FECC}'), Some('\u{FECA}')]), // AIN
    ('\u{063A}', [Some('\u{FECD}'), Some('\u{FECF}'), Some('\u{FED0}'), Some('\u{FECE}')]), // GHAIN
    ('\u{0640}', [Some('\u{0640}'), Some('\u{0640}'), Some('\u{0640}'), Some('\u{0640}')]), // ARABIC TATWEEL
    ('\u{0641}', [Some('\u{FED1}'), Some('\u{FED3}'), Some('\u{FED4}'), Some('\u{FED2}')]), // FEH
    ('\u{0642}', [Some('\u{FED5}'), Some('\u{FED7}'), Some('\u{FED8}'), Some('\u{FED6}')]), // QAF
    ('\u{0643}', [Some('\u{FED9}'), Some('\u{FEDB}'), Some('\u{FEDC}'), Some('\u{FEDA}')]), // KAF
    ('\u{0644}', [Some('\u{FEDD}'), Some('\u{FEDF}'), Some('\u{FEE0}'), Some('\u{FEDE}')]), // LAM
    ('\u{0645}', [Some('\u{FEE1}'), Some('\u{FEE3}'), Some('\u{FEE4}'), Some('\u{FEE2}')]), // MEEM
    ('\u{0646}', [Some('\u{FEE5}'), Some('\u{FEE7}'), Some('\u{FEE8}'), Some('\u{FEE6}')]), // NOON
    ('\u{0647}', [Some('\u{FEE9}'), Some('\u{FEEB}'), Some('\u{FEEC}'), Some('\u{FEEA}')]), // HEH
    ('\u{0648}', [Some('\u{FEED}'), None, None, Some('\u{FEEE}')]), // WAW
    ('\u{0649}', [Some('\u{FEEF}'), Some('\u{FBE8}'), Some('\u{FBE9}'), Some('\u{FEF0}')]), // ALEF MAKSURA
    ('\u{064A}', [Some('\u{FEF1}'), Some('\u{FEF3}'), Some('\u{FEF4}'), Some('\u{FEF2}')]), // YEH
    ('\u{0671}', [Some('\u{FB50}'), None, None, Some('\u{FB51}')]), // ALEF WASLA
    ('\u{0677}', [Some('\u{FBDD}'), None, None, None]), // U WITH HAMZA ABOVE
    ('\u{0679}', [Some('\u{FB66}'), Some('\u{FB68}'), Some('\u{FB69}'), Some('\u{FB67}')]), // TTEH
    ('\u{067A}', [Some('\u{FB5E}'), Some('\u{FB60}'), Some('\u{FB61}'), Some('\u{FB5F}')]), // TTEHEH
    ('\u{067B}', [Some('\u{FB52}'), Some('\u{FB54}'), Some('\u{FB55}'), Some('\u{FB53}')]), // BEEH
    ('\u{067E}', [Some('\u{FB56}'), Some('\u{FB58}'), Some('\u{FB59}'), Some('\u{FB57}')]), // PEH
    ('\u{067F}', [Some('\u{FB62}'), Some('\u{FB64}'), Some('\u{FB65}'), Some('\u{FB63}')]), // TEHEH
    ('\u{0680}', [Some('\u{FB5A}'), Some('\u{FB5C}'), Some('\u{FB5D}'), Some('\u{FB5B}')]), // BEHEH
    ('\u{0683}', [Some('\u{FB76}'), Some('\u{FB78}'), Some('\u{FB79}'), Some('\u{FB77}')]), // NYEH
    ('\u{0684}', [Some('\u{FB72}'), Some('\u{FB74}'), Some('\u{FB75}'), Some('\u{FB73}')]), // DYEH
    ('\u{0686}', [Some('\u{FB7A}'), Some('\u{FB7C}'), Some('\u{FB7D}'), Some('\u{FB7B}')]), // TCHEH
    ('\u{0687}', [Some('\u{FB7E}'), Some('\u{FB80}'), Some('\u{FB81}'), Some('\u{FB7F}')]), // TCHEHEH
    ('\u{0688}', [Some('\u{FB88}'), None, None, Some('\u{FB89}')]), // DDAL
    ('\u{068C}', [Some('\u{FB84}'), None, None, Some('\u{FB85}')]), // DAHAL
    ('\u{068D}', [Some('\u{FB82}'), None, None, Some('\u{FB83}')]), // DDAHAL
    ('\u{068E}', [Some('\u{FB86}'), None, None, Some('\u{FB87}')]), // DUL
    ('\u{0691}', [Some('\u{FB8C}'), None, None, Some('\u{FB8D}')]), // RREH
    ('\u{0698}', [Some('\u{FB8A}'), None, None, Some('\u{FB8B}')]), // JEH
    ('\u{06A4}', [Some('\u{FB6A}'), Some('\u{FB6C}'), Some('\u{FB6D}'), Some('\u{FB6B}')]), // VEH
    ('\u{06A6}', [Some('\u{FB6E}'), Some('\u{FB70}'), Some('\u{FB71}'), Some('\u{FB6F}')]), // PEHEH
    ('\u{06A9}', [Some('\u{FB8E}'), Some('\u{FB90}'), Some('\u{FB91}'), Some('\u{FB8F}')]), // KEHEH
    ('\u{06AD}', [Some('\u{FBD3}'), Some('\u{FBD5}'), Some('\u{FBD6}'), Some('\u{FBD4}')]), // NG
    ('\u{06AF}', [Some('\u{FB92}'), Some('\u{FB94}'), Some('\u{FB95}'), Some('\u{FB93}')]), // GAF
    ('\u{06B1}', [Some('\u{FB9A}'), Some('\u{FB9C}'), Some('\u{FB9D}'), Some('\u{FB9B}')]), // NGOEH
    ('\u{06B3}', [Some('\u{FB96}'), Some('\u{FB98}'), Some('\u{FB99}'), Some('\u{FB97}')]), // GUEH
    ('\u{06BA}', [Some('\u{FB9E}'), None, None, Some('\u{FB9F}')]), // NOON GHUNNA
    ('\u{06BB}', [Some('\u{FBA0}'), Some('\u{FBA2}'), Some('\u{FBA3}'), Some('\u{FBA1}')]), // RNOON
    ('\u{06BE}', [Some('\u{FBAA}'), Some('\u{FBAC}'), Some('\u{FBAD}'), Some('\u{FBAB}')]), // HEH DOACHASHMEE
    ('\u{06C0}', [Some('\u{FBA4}'), None, None, Some('\u{FBA5}')]), // HEH WITH YEH ABOVE
    ('\u{06C1}', [Some('\u{FBA6}'), Some('\u{FBA8}'), Some('\u{FBA9}'), Some('\u{FBA7}')]), // HEH GOAL
    ('\u{06C5}', [Some('\u{FBE0}'), None, None, Some('\u{FBE1}')]), // KIRGHIZ OE
    ('\u{06C6}', [Some('\u{FBD9}'), None, None, Some('\u{FBDA}')]), // OE
    ('\u{06C7}', [Some('\u{FBD7}'), None, None, Some('\u{FBD8}')]), // U
    ('\u{06C8}', [Some('\u{FBDB}'), None, None, Some('\u{FBDC}')]), // YU
    ('\u{06C9}', [Some('\u{FBE2}'), None, None, Some('\u{FBE3}')]), // KIRGHIZ YU
    ('\u{06CB}', [Some('\u{FBDE}'), None, None, Some('\u{FBDF}')]), // VE
    ('\u{06CC}', [Some('\u{FBFC}'), Some('\u{FBFE}'), Some('\u{FBFF}'), Some('\u{FBFD}')]), // FARSI YEH
    ('\u{06D0}', [Some('\u{FBE4}'), Some('\u{FBE6}'), Some('\u{FBE7}'), Some('\u{FBE5}')]), // E
    ('\u{06D2}', [Some('\u{FBAE}'), None, None, Some('\u{FBAF}')]), // YEH BARREE
    ('\u{06D3}', [Some('\u{FBB0}'), None, None, Some('\u{FBB1}')]), // YEH BARREE WITH HAMZA ABOVE
    ('\u{200D}', [Some('\u{200D}'), Some('\u{200D}'), Some('\u{200D}'), Some('\u{200D}')]), // ZERO WIDTH JOINER
];

/// Arabic letters whose isolated form is the letter itself, plus Kurdish additions.
#[rustfmt::skip]
pub(crate) static ARABIC_V2: &[(char, LetterForms)] = &[
    ('\u{0621}', [Some('\u{FE80}'), None, None, None]), // HAMZA
    ('\u{0622}', [Some('\u{0622}'), None, None, Some('\u{FE82}')]), // ALEF WITH MADDA ABOVE
    ('\u{0623}', [Some('\u{0623}'), None, None, Some('\u{FE84}')]), // ALEF WITH HAMZA ABOVE
    ('\u{0624}', [Some('\u{0624}'), None, None, Some('\u{FE86}')]), // WAW WITH HAMZA ABOVE
    ('\u{0625}', [Some('\u{0625}'), None, None, Some('\u{FE88}')]), // ALEF WITH HAMZA BELOW
    ('\u{0626}', [Some('\u{0626}'), Some('\u{FE8B}'), Some('\u{FE8C}'), Some('\u{FE8A}')]), // YEH WITH HAMZA ABOVE
    ('\u{0627}', [Some('\u{0627}'), None, None, Some('\u{FE8E}')]), // ALEF
    ('\u{0628}', [Some('\u{0628}'), Some('\u{FE91}'), Some('\u{FE92}'), Some('\u{FE90}')]), // BEH
    ('\u{0629}', [Some('\u{0629}'), None, None, Some('\u{FE94}')]), // TEH MARBUTA
    ('\u{062A}', [Some('\u{062A}'), Some('\u{FE97}'), Some('\u{FE98}'), Some('\u{FE96}')]), // TEH
    ('\u{062B}', [Some('\u{062B}'), Some('\u{FE9B}'), Some('\u{FE9C}'), Some('\u{FE9A}')]), // THEH
    ('\u{062C}', [Some('\u{062C}'), Some('\u{FE9F}'), Some('\u{FEA0}'), Some('\u{FE9E}')]), // JEEM
    ('\u{062D}', [Some('\u{FEA1}'), Some('\u{FEA3}'), Some('\u{FEA4}'), Some('\u{FEA2}')]), // HAH
    ('\u{062E}', [Some('\u{062E}'), Some('\u{FEA7}'), Some('\u{FEA8}'), Some('\u{FEA6}')]), // KHAH
    ('\u{062F}', [Some('\u{062F}'), None, None, Some('\u{FEAA}')]), // DAL
    ('\u{0630}', [Some('\u{0630}'), None, None, Some('\u{FEAC}')]), // THAL
    ('\u{0631}', [Some('\u{0631}'), None, None, Some('\u{FEAE}')]), // REH
    ('\u{0632}', [Some('\u{0632}'), None, None, Some('\u{FEB0}')]), // ZAIN
    ('\u{0633}', [Some('\u{0633}'), Some('\u{FEB3}'), Some('\u{FEB4}'), Some('\u{FEB2}')]), // SEEN
    ('\u{0634}', [Some('\u{0634}'), Some('\u{FEB7}'), Some('\u{FEB8}'), Some('\u{FEB6}')]), // SHEEN
    ('\u{0635}', [Some('\u{0635}'), Some('\u{FEBB}'), Some('\u{FEBC}'), Some('\u{FEBA}')]), // SAD
    ('\u{0636}', [Some('\u{0636}'), Some('\u{FEBF}'), Some('\u{FEC0}'), Some('\u{FEBE}')]), // DAD
    ('\u{0637}', [Some('\u{0637}'), Some('\u{FEC3}'), Some('\u{FEC4}'), Some('\u{FEC2}')]), // TAH
    ('\u{0638}', [Some('\u{0638}'), Some('\u{FEC7}'), Some('\u{FEC8}'), Some('\u{FEC6}')]), // ZAH
    ('\u{0639}', [Some('\u{0639}'), Some('\u{FECB}'), Some('\u{FECC}'), Some('\u{FECA}')]), // AIN
    ('\u{063A}', [Some('\u{063A}'), Some('\u{FECF}'), Some('\u{FED0}'), Some('\u{FECE}')]), // GHAIN
    ('\u{0640}', [Some('\u{0640}'), Some('\u{0640}'), Some('\u{0640}'), Some('\u{0640}')]), // ARABIC TATWEEL
    ('\u{0641}', [Some('\u{0641}'), Some('\u{FED3}'), Some('\u{FED4}'), Some('\u{FED2}')]), // FEH
    ('\u{0642}', [Some('\u{0642}'), Some('\u{FED7}'), Some('\u{FED8}'), Some('\u{FED6}')]), // QAF
    ('\u{0643}', [Some('\u{0643}'), Some('\u{FEDB}'), Some('\u{FEDC}'), Some('\u{FEDA}')]), // KAF
    ('\u{0644}', [Some('\u{0644}'), Some('\u{FEDF}'), Some('\u{FEE0}'), Some('\u{FEDE}')]), // LAM
    ('\u{0645}', [Some('\u{0645}'), Some('\u{FEE3}'), Some('\u{FEE4}'), Some('\u{FEE2}')]), // MEEM
    ('\u{0646}', [Some('\u{0646}'), Some('\u{FEE7}'), Some('\u{FEE8}'), Some('\u{FEE6}')]), // NOON
    ('\u{0647}', [Some('\u{0647}'), Some('\u{FEEB}'), Some('\u{FEEC}'), Some('\u{FEEA}')]), // HEH
    ('\u{0648}', [Some('\u{0648}'), None, None, Some('\u{FEEE}')]), // WAW
    ('\u{0649}', [Some('\u{0649}'), Some('\u{FBE8}'), Some('\u{FBE9}'), Some('\u{FEF0}')]), // ALEF MAKSURA
    ('\u{064A}', [Some('\u{064A}'), Some('\u{FEF3}'), Some('\u{FEF4}'), Some('\u{FEF2}')]), // YEH
    ('\u{0671}', [Some('\u{0671}'), None, None, Some('\u{FB51}')]), // ALEF WASLA
    ('\u{0677}', [Some('\u{0677}'), None, None, None]), // U WITH HAMZA ABOVE
    ('\u{0679}', [Some('\u{0679}'), Some('\u{FB68}'), Some('\u{FB69}'), Some('\u{FB67}')]), // TTEH
    ('\u{067A}', [Some('\u{067A}'), Some('\u{FB60}'), Some('\u{FB61}'), Some('\u{FB5F}')]), // TTEHEH
    ('\u{067B}', [Some('\u{067B}'), Some('\u{FB54}'), Some('\u{FB55}'), Some('\u{FB53}')]), // BEEH
    ('\u{067E}', [Some('\u{067E}'), Some('\u{FB58}'), Some('\u{FB59}'), Some('\u{FB57}')]), // PEH
    ('\u{067F}', [Some('\u{067F}'), Some('\u{FB64}'), Some('\u{FB65}'), Some('\u{FB63}')]), // TEHEH
    ('\u{0680}', [Some('\u{0680}'), Some('\u{FB5C}'), Some('\u{FB5D}'), Some('\u{FB5B}')]), // BEHEH
    ('\u{0683}', [Some('\u{0683}'), Some('\u{FB78}'), Some('\u{FB79}'), Some('\u{FB77}')]), // NYEH
    ('\u{0684}', [Some('\u{0684}'), Some('\u{FB74}'), Some('\u{FB75}'), Some('\u{FB73}')]), // DYEH
    ('\u{0686}', [Some('\u{0686}'), Some('\u{FB7C}'), Some('\u{FB7D}'), Some('\u{FB7B}')]), // TCHEH
    ('\u{0687}', [Some('\u{0687}'), Some('\u{FB80}'), Some('\u{FB81}'), Some('\u{FB7F}')]), // TCHEHEH
    ('\u{0688}', [Some('\u{0688}'), None, None, Some('\u{FB89}')]), // DDAL
    ('\u{068C}', [Some('\u{068C}'), None, None, Some('\u{FB85}')]), // DAHAL
    ('\u{068D}', [Some('\u{068D}'), None, None, Some('\u{FB83}')]), // DDAHAL
    ('\u{068E}', [Some('\u{068E}'), None, None, Some('\u{FB87}')]), // DUL
    ('\u{0691}', [Some('\u{0691}'), None, None, Some('\u{FB8D}')]), // RREH
    ('\u{0698}', [Some('\u{0698}'), None, None, Some('\u{FB8B}')]), // JEH
    ('\u{06A4}', [Some('\u{06A4}'), Some('\u{FB6C}'), Some('\u{FB6D}'), Some('\u{FB6B}')]), // VEH
    ('\u{06A6}', [Some('\u{06A6}'), Some('\u{FB70}'), Some('\u{FB71}'), Some('\u{FB6F}')]), // PEHEH
    ('\u{06A9}', [Some('\u{06A9}'), Some('\u{FB90}'), Some('\u{FB91}'), Some('\u{FB8F}')]), // KEHEH
    ('\u{06AD}', [Some('\u{06AD}'), Some('\u{FBD5}'), Some('\u{FBD6}'), Some('\u{FBD4}')]), // NG
    ('\u{06AF}', [Some('\u{06AF}'), Some('\u{FB94}'), Some('\u{FB95}'), Some('\u{FB93}')]), // GAF
    ('\u{06B1}', [Some('\u{06B1}'), Some('\u{FB9C}'), Some('\u{FB9D}'), Some('\u{FB9B}')]), // NGOEH
    ('\u{06B3}', [Some('\u{06B3}'), Some('\u{FB98}'), Some('\u{FB99}'), Some('\u{FB97}')]), // GUEH
    ('\u{06BA}', [Some('\u{06BA}'), None, None, Some('\u{FB9F}')]), // NOON GHUNNA
    ('\u{06BB}', [Some('\u{06BB}'), Some('\u{FBA2}'), Some('\u{FBA3}'), Some('\u{FBA1}')]), // RNOON
    ('\u{06BE}', [Some('\u{06BE}'), Some('\u{FBAC}'), Some('\u{FBAD}'), Some('\u{FBAB}')]), // HEH DOACHASHMEE
    ('\u{06C0}', [Some('\u{06C0}'), None, None, Some('\u{FBA5}')]), // HEH WITH YEH ABOVE
    ('\u{06C1}', [Some('\u{06C1}'), Some('\u{FBA8}'), Some('\u{FBA9}'), Some('\u{FBA7}')]), // HEH GOAL
    ('\u{06C5}', [Some('\u{06C5}'), None, None, Some('\u{FBE1}')]), // KIRGHIZ OE
    ('\u{06C6}', [Some('\u{06C6}'), None, None, Some('\u{FBDA}')]), // OE
    ('\u{06C7}', [Some('\u{06C7}'), None, None, Some('\u{FBD8}')]), // U
    ('\u{06C8}', [Some('\u{06C8}'), None, None, Some('\u{FBDC}')]), // YU
    ('\u{06C9}', [Some('\u{06C9}'), None, None, Some('\u{FBE3}')]), // KIRGHIZ YU
    ('\u{06CB}', [Some('\u{06CB}'), None, None, Some('\u{FBDF}')]), // VE
    ('\u{06CC}', [Some('\u{06CC}'), Some('\u{FBFE}'), Some('\u{FBFF}'), Some('\u{FBFD}')]), // FARSI YEH
    ('\u{06CE}', [Some('\u{E004}'), Some('\u{E005}'), Some('\u{E006}'), Some('\u{E004}')]), // YEH WITH SMALL V
    ('\u{06D0}', [Some('\u{06D0}'), Some('\u{FBE6}'), Some('\u{FBE7}'), Some('\u{FBE5}')]), // E
    ('\u{06D2}', [Some('\u{06D2}'), None, None, Some('\u{FBAF}')]), // YEH BARREE
    ('\u{06D3}', [Some('\u{06D3}'), None, None, Some('\u{FBB1}')]), // YEH BARREE WITH HAMZA ABOVE
    ('\u{06D5}', [Some('\u{06D5}'), None, None, Some('\u{E000}')]), // AE
    ('\u{200D}', [Some('\u{200D}'), Some('\u{200D}'), Some('\u{200D}'), Some('\u{200D}')]), // ZERO WIDTH JOINER
];

/// Kurdish (Sorani) letters.
#[rustfmt::skip]
pub(crate) static KURDISH: &[(char, LetterForms)] = &[
    ('\u{0621}', [Some('\u{FE80}'), None, None, None]), // HAMZA
    ('\u{0622}', [Some('\u{0622}'), None, None, Some('\u{FE82}')]), // ALEF WITH MADDA ABOVE
    ('\u{0623}', [Some('\u{0623}'), None, None, Some('\u{FE84}')]), // ALEF WITH HAMZA ABOVE
    ('\u{0624}', [Some('\u{0624}'), None, None, Some('\u{FE86}')]), // WAW WITH HAMZA ABOVE
    ('\u{0625}', [Some('\u{0625}'), None, None, Some('\u{FE88}')]), // ALEF WITH HAMZA BELOW
    ('\u{0626}', [Some('\u{0626}'), Some('\u{FE8B}'), Some('\u{FE8C}'), Some('\u{FE8A}')]), // YEH WITH HAMZA ABOVE
    ('\u{0627}', [Some('\u{0627}'), None, None, Some('\u{FE8E}')]), // ALEF
    ('\u{0628}', [Some('\u{0628}'), Some('\u{FE91}'), Some('\u{FE92}'), Some('\u{FE90}')]), // BEH
    ('\u{0629}', [Some('\u{0629}'), None, None, Some('\u{FE94}')]), // TEH MARBUTA
    ('\u{062A}', [Some('\u{062A}'), Some('\u{FE97}'), Some('\u{FE98}'), Some('\u{FE96}')]), // TEH
    ('\u{062B}', [Some('\u{062B}'), Some('\u{FE9B}'), Some('\u{FE9C}'), Some('\u{FE9A}')]), // THEH
    ('\u{062C}', [Some('\u{062C}'), Some('\u{FE9F}'), Some('\u{FEA0}'), Some('\u{FE9E}')]), // JEEM
    ('\u{062D}', [Some('\u{FEA1}'), Some('\u{FEA3}'), Some('\u{FEA4}'), Some('\u{FEA2}')]), // HAH
    ('\u{062E}', [Some('\u{062E}'), Some('\u{FEA7}'), Some('\u{FEA8}'), Some('\u{FEA6}')]), // KHAH
    ('\u{062F}', [Some('\u{062F}'), None, None, Some('\u{FEAA}')]), // DAL
    ('\u{0630}', [Some('\u{0630}'), None, None, Some('\u{FEAC}')]), // THAL
    ('\u{0631}', [Some('\u{0631}'), None, None, Some('\u{FEAE}')]), // REH
    ('\u{0632}', [Some('\u{0632}'), None, None, Some('\u{FEB0}')]), // ZAIN
    ('\u{0633}', [Some('\u{0633}'), Some('\u{FEB3}'), Some('\u{FEB4}'), Some('\u{FEB2}')]), // SEEN
    ('\u{0634}', [Some('\u{0634}'), Some('\u{FEB7}'), Some('\u{FEB8}'), Some('\u{FEB6}')]), // SHEEN
    ('\u{0635}', [Some('\u{0635}'), Some('\u{FEBB}'), Some('\u{FEBC}'), Some('\u{FEBA}')]), // SAD
    ('\u{0636}', [Some('\u{0636}'), Some('\u{FEBF}'), Some('\u{FEC0}'), Some('\u{FEBE}')]), // DAD
    ('\u{0637}', [Some('\u{0637}'), Some('\u{FEC3}'), Some('\u{FEC4}'), Some('\u{FEC2}')]), // TAH
    ('\u{0638}', [Some('\u{0638}'), Some('\u{FEC7}'), Some('\u{FEC8}'), Some('\u{FEC6}')]), // ZAH
    ('\u{0639}', [Some('\u{0639}'), Some('\u{FECB}'), Some('\u{FECC}'), Some('\u{FECA}')]), // AIN
    ('\u{063A}', [Some('\u{063A}'), Some('\u{FECF}'), Some('\u{FED0}'), Some('\u{FECE}')]), // GHAIN
    ('\u{0640}', [Some('\u{0640}'), Some('\u{0640}'), Some('\u{0640}'), Some('\u{0640}')]), // ARABIC TATWEEL
    ('\u{0641}', [Some('\u{0641}'), Some('\u{FED3}'), Some('\u{FED4}'), Some('\u{FED2}')]), // FEH
    ('\u{0642}', [Some('\u{0642}'), Some('\u{FED7}'), Some('\u{FED8}'), Some('\u{FED6}')]), // QAF
    ('\u{0643}', [Some('\u{0643}'), Some('\u{FEDB}'), Some('\u{FEDC}'), Some('\u{FEDA}')]), // KAF
    ('\u{0644}', [Some('\u{0644}'), Some('\u{FEDF}'), Some('\u{FEE0}'), Some('\u{FEDE}')]), // LAM
    ('\u{0645}', [Some('\u{0645}'), Some('\u{FEE3}'), Some('\u{FEE4}'), Some('\u{FEE2}')]), // MEEM
    ('\u{0646}', [Some('\u{0646}'), Some('\u{FEE7}'), Some('\u{FEE8}'), Some('\u{FEE6}')]), // NOON
    ('\u{0647}', [Some('\u{FBAB}'), Some('\u{FBAB}'), Some('\u{FBAB}'), Some('\u{FBAB}')]), // HEH
    ('\u{0648}', [Some('\u{0648}'), None, None, Some('\u{FEEE}')]), // WAW
    ('\u{0649}', [Some('\u{0649}'), Some('\u{FBE8}'), Some('\u{FBE9}'), Some('\u{FEF0}')]), // ALEF MAKSURA
    ('\u{064A}', [Some('\u{064A}'), Some('\u{FEF3}'), Some('\u{FEF4}'), Some('\u{FEF2}')]), // YEH
    ('\u{0671}', [Some('\u{0671}'), None, None, Some('\u{FB51}')]), // ALEF WASLA
    ('\u{0677}', [Some('\u{0677}'), None, None, None]), // U WITH HAMZA ABOVE
    ('\u{0679}', [Some('\u{0679}'), Some('\u{FB68}'), Some('\u{FB69}'), Some('\u{FB67}')]), // TTEH
    ('\u{067A}', [Some('\u{067A}'), Some('\u{FB60}'), Some('\u{FB61}'), Some('\u{FB5F}')]), // TTEHEH
    ('\u{067B}', [Some('\u{067B}'), Some('\u{FB54}'), Some('\u{FB55}'), Some('\u{FB53}')]), // BEEH
    ('\u{067E}', [Some('\u{067E}'), Some('\u{FB58}'), Some('\u{FB59}'), Some('\u{FB57}')]), // PEH
    ('\u{067F}', [Some('\u{067F}'), Some('\u{FB64}'), Some('\u{FB65}'), Some('\u{FB63}')]), // TEHEH
    ('\u{0680}', [Some('\u{0680}'), Some('\u{FB5C}'), Some('\u{FB5D}'), Some('\u{FB5B}')]), // BEHEH
    ('\u{0683}', [Some('\u{0683}'), Some('\u{FB78}'), Some('\u{FB79}'), Some('\u{FB77}')]), // NYEH
    ('\u{0684}', [Some('\u{0684}'), Some('\u{FB74}'), Some('\u{FB75}'), Some('\u{FB73}')]), // DYEH
    ('\u{0686}', [Some('\u{0686}'), Some('\u{FB7C}'), Some('\u{FB7D}'), Some('\u{FB7B}')]), // TCHEH
    ('\u{0687}', [Some('\u{0687}'), Some('\u{FB80}'), Some('\u{FB81}'), Some('\u{FB7F}')]), // TCHEHEH
    ('\u{0688}', [Some('\u{0688}'), None, None, Some('\u{FB89}')]), // DDAL
    ('\u{068C}', [Some('\u{068C}'), None, None, Some('\u{FB85}')]), // DAHAL
    ('\u{068D}', [Some('\u{068D}'), None, None, Some('\u{FB83}')]), // DDAHAL
    ('\u{068E}', [Some('\u{068E}'), None, None, Some('\u{FB87}')]), // DUL
    ('\u{0691}', [Some('\u{0691}'), None, None, Some('\u{FB8D}')]), // RREH
    ('\u{0698}', [Some('\u{0698}'), None, None, Some('\u{FB8B}')]), // JEH
    ('\u{06A4}', [Some('\u{06A4}'), Some('\u{FB6C}'), Some('\u{FB6D}'), Some('\u{FB6B}')]), // VEH
    ('\u{06A6}', [Some('\u{06A6}'), Some('\u{FB70}'), Some('\u{FB71}'), Some('\u{FB6F}')]), // PEHEH
    ('\u{06A9}', [Some('\u{06A9}'), Some('\u{FB90}'), Some('\u{FB91}'), Some('\u{FB8F}')]), // KEHEH
    ('\u{06AD}', [Some('\u{06AD}'), Some('\u{FBD5}'), Some('\u{FBD6}'), Some('\u{FBD4}')]), // NG
    ('\u{06AF}', [Some('\u{06AF}'), Some('\u{FB94}'), Some('\u{FB95}'), Some('\u{FB93}')]), // GAF
    ('\u{06B1}', [Some('\u{06B1}'), Some('\u{FB9C}'), Some('\u{FB9D}'), Some('\u{FB9B}')]), // NGOEH
    ('\u{06B3}', [Some('\u{06B3}'), Some('\u{FB98}'), Some('\u{FB99}'), Some('\u{FB97}')]), // GUEH
    ('\u{06BA}', [Some('\u{06BA}'), None, None, Some('\u{FB9F}')]), // NOON GHUNNA
    ('\u{06BB}', [Some('\u{06BB}'), Some('\u{FBA2}'), Some('\u{FBA3}'), Some('\u{FBA1}')]), // RNOON
    ('\u{06BE}', [Some('\u{06BE}'), Some('\u{FBAC}'), Some('\u{FBAD}'), Some('\u{FBAB}')]), // HEH DOACHASHMEE
    ('\u{06C0}', [Some('\u{06C0}'), None, None, Some('\u{FBA5}')]), // HEH WITH YEH ABOVE
    ('\u{06C1}', [Some('\u{06C1}'), Some('\u{FBA8}'), Some('\u{FBA9}'), Some('\u{FBA7}')]), // HEH GOAL
    ('\u{06C5}', [Some('\u{06C5}'), None, None, Some('\u{FBE1}')]), // KIRGHIZ OE
    ('\u{06C6}', [Some('\u{06C6}'), None, None, Some('\u{FBDA}')]), // OE
    ('\u{06C7}', [Some('\u{06C7}'), None, None, Some('\u{FBD8}')]), // U
    ('\u{06C8}', [Some('\u{06C8}'), None, None, Some('\u{FBDC}')]), // YU
    ('\u{06C9}', [Some('\u{06C9}'), None, None, Some('\u{FBE3}')]), // KIRGHIZ YU
    ('\u{06CB}', [Some('\u{06CB}'), None, None, Some('\u{FBDF}')]), // VE
    ('\u{06CC}', [Some('\u{06CC}'), Some('\u{FBFE}'), Some('\u{FBFF}'), Some('\u{FBFD}')]), // FARSI YEH
    ('\u{06CE}', [Some('\u{E004}'), Some('\u{E005}'), Some('\u{E006}'), Some('\u{E004}')]), // YEH WITH SMALL V
    ('\u{06D0}', [Some('\u{06D0}'), Some('\u{FBE6}'), Some('\u{FBE7}'), Some('\u{FBE5}')]), // E
    ('\u{06D2}', [Some('\u{06D2}'), None, None, Some('\u{FBAF}')]), // YEH BARREE
    ('\u{06D3}', [Some('\u{06D3}'), None, None, Some('\u{FBB1}')]), // YEH BARREE WITH HAMZA ABOVE
    ('\u{06D5}', [Some('\u{06D5}'), None, None, Some('\u{E000}')]), // AE
    ('\u{200D}', [Some('\u{200D}'), Some('\u{200D}'), Some('\u{200D}'), Some('\u{200D}')]), // ZERO WIDTH JOINER
];
