//! Bidi mirroring glyph lookup for right-to-left text.
//!
//! The table pairs each mirrored character with its `Bidi_Mirroring_Glyph`
//! counterpart (UCD `BidiMirroring.txt`), restricted to the entries that
//! have an exact mirror. Both directions of every pair are listed.

/// Mirrored pairs, sorted by the first element.
static MIRROR_PAIRS: &[(char, char)] = &[
    ('(', ')'), (')', '('), ('<', '>'), ('>', '<'),
    ('[', ']'), (']', '['), ('{', '}'), ('}', '{'),
    ('\u{00AB}', '\u{00BB}'), ('\u{00BB}', '\u{00AB}'), ('\u{0F3A}', '\u{0F3B}'), ('\u{0F3B}', '\u{0F3A}'),
    ('\u{0F3C}', '\u{0F3D}'), ('\u{0F3D}', '\u{0F3C}'), ('\u{169B}', '\u{169C}'), ('\u{169C}', '\u{169B}'),
    ('\u{2039}', '\u{203A}'), ('\u{203A}', '\u{2039}'), ('\u{2045}', '\u{2046}'), ('\u{2046}', '\u{2045}'),
    ('\u{207D}', '\u{207E}'), ('\u{207E}', '\u{207D}'), ('\u{208D}', '\u{208E}'), ('\u{208E}', '\u{208D}'),
    ('\u{2208}', '\u{220B}'), ('\u{2209}', '\u{220C}'), ('\u{220A}', '\u{220D}'), ('\u{220B}', '\u{2208}'),
    ('\u{220C}', '\u{2209}'), ('\u{220D}', '\u{220A}'), ('\u{2215}', '\u{29F5}'), ('\u{223C}', '\u{223D}'),
    ('\u{223D}', '\u{223C}'), ('\u{2243}', '\u{22CD}'), ('\u{2252}', '\u{2253}'), ('\u{2253}', '\u{2252}'),
    ('\u{2254}', '\u{2255}'), ('\u{2255}', '\u{2254}'), ('\u{2264}', '\u{2265}'), ('\u{2265}', '\u{2264}'),
    ('\u{2266}', '\u{2267}'), ('\u{2267}', '\u{2266}'), ('\u{2268}', '\u{2269}'), ('\u{2269}', '\u{2268}'),
    ('\u{226A}', '\u{226B}'), ('\u{226B}', '\u{226A}'), ('\u{226E}', '\u{226F}'), ('\u{226F}', '\u{226E}'),
    ('\u{2270}', '\u{2271}'), ('\u{2271}', '\u{2270}'), ('\u{2272}', '\u{2273}'), ('\u{2273}', '\u{2272}'),
    ('\u{2274}', '\u{2275}'), ('\u{2275}', '\u{2274}'), ('\u{2276}', '\u{2277}'), ('\u{2277}', '\u{2276}'),
    ('\u{2278}', '\u{2279}'), ('\u{2279}', '\u{2278}'), ('\u{227A}', '\u{227B}'), ('\u{227B}', '\u{227A}'),
    ('\u{227C}', '\u{227D}'), ('\u{227D}', '\u{227C}'), ('\u{227E}', '\u{227F}'), ('\u{227F}', '\u{227E}'),
    ('\u{2280}', '\u{2281}'), ('\u{2281}', '\u{2280}'), ('\u{2282}', '\u{2283}'), ('\u{2283}', '\u{2282}'),
    ('\u{2284}', '\u{2285}'), ('\u{2285}', '\u{2284}'), ('\u{2286}', '\u{2287}'), ('\u{2287}', '\u{2286}'),
    ('\u{2288}', '\u{2289}'), ('\u{2289}', '\u{2288}'), ('\u{228A}', '\u{228B}'), ('\u{228B}', '\u{228A}'),
    ('\u{228F}', '\u{2290}'), ('\u{2290}', '\u{228F}'), ('\u{2291}', '\u{2292}'), ('\u{2292}', '\u{2291}'),
    ('\u{2298}', '\u{29B8}'), ('\u{22A2}', '\u{22A3}'), ('\u{22A3}', '\u{22A2}'), ('\u{22A6}', '\u{2ADE}'),
    ('\u{22B0}', '\u{22B1}'), ('\u{22B1}', '\u{22B0}'), ('\u{22B2}', '\u{22B3}'), ('\u{22B3}', '\u{22B2}'),
    ('\u{22B4}', '\u{22B5}'), ('\u{22B5}', '\u{22B4}'), ('\u{22B6}', '\u{22B7}'), ('\u{22B7}', '\u{22B6}'),
    ('\u{22C9}', '\u{22CA}'), ('\u{22CA}', '\u{22C9}'), ('\u{22CB}', '\u{22CC}'), ('\u{22CC}', '\u{22CB}'),
    ('\u{22CD}', '\u{2243}'), ('\u{22D0}', '\u{22D1}'), ('\u{22D1}', '\u{22D0}'), ('\u{22D6}', '\u{22D7}'),
    ('\u{22D7}', '\u{22D6}'), ('\u{22D8}', '\u{22D9}'), ('\u{22D9}', '\u{22D8}'), ('\u{22DA}', '\u{22DB}'),
    ('\u{22DB}', '\u{22DA}'), ('\u{22DC}', '\u{22DD}'), ('\u{22DD}', '\u{22DC}'), ('\u{22DE}', '\u{22DF}'),
    ('\u{22DF}', '\u{22DE}'), ('\u{22E0}', '\u{22E1}'), ('\u{22E1}', '\u{22E0}'), ('\u{22E2}', '\u{22E3}'),
    ('\u{22E3}', '\u{22E2}'), ('\u{22E4}', '\u{22E5}'), ('\u{22E5}', '\u{22E4}'), ('\u{22E6}', '\u{22E7}'),
    ('\u{22E7}', '\u{22E6}'), ('\u{22E8}', '\u{22E9}'), ('\u{22E9}', '\u{22E8}'), ('\u{22EA}', '\u{22EB}'),
    ('\u{22EB}', '\u{22EA}'), ('\u{22EC}', '\u{22ED}'), ('\u{22ED}', '\u{22EC}'), ('\u{22F0}', '\u{22F1}'),
    ('\u{22F1}', '\u{22F0}'), ('\u{2308}', '\u{2309}'), ('\u{2309}', '\u{2308}'), ('\u{230A}', '\u{230B}'),
    ('\u{230B}', '\u{230A}'), ('\u{2329}', '\u{232A}'), ('\u{232A}', '\u{2329}'), ('\u{2768}', '\u{2769}'),
    ('\u{2769}', '\u{2768}'), ('\u{276A}', '\u{276B}'), ('\u{276B}', '\u{276A}'), ('\u{276C}', '\u{276D}'),
    ('\u{276D}', '\u{276C}'), ('\u{276E}', '\u{276F}'), ('\u{276F}', '\u{276E}'), ('\u{2770}', '\u{2771}'),
    ('\u{2771}', '\u{2770}'), ('\u{2772}', '\u{2773}'), ('\u{2773}', '\u{2772}'), ('\u{2774}', '\u{2775}'),
    ('\u{2775}', '\u{2774}'), ('\u{27C3}', '\u{27C4}'), ('\u{27C4}', '\u{27C3}'), ('\u{27C5}', '\u{27C6}'),
    ('\u{27C6}', '\u{27C5}'), ('\u{27C8}', '\u{27C9}'), ('\u{27C9}', '\u{27C8}'), ('\u{27D5}', '\u{27D6}'),
    ('\u{27D6}', '\u{27D5}'), ('\u{27DD}', '\u{27DE}'), ('\u{27DE}', '\u{27DD}'), ('\u{27E2}', '\u{27E3}'),
    ('\u{27E3}', '\u{27E2}'), ('\u{27E4}', '\u{27E5}'), ('\u{27E5}', '\u{27E4}'), ('\u{27E6}', '\u{27E7}'),
    ('\u{27E7}', '\u{27E6}'), ('\u{27E8}', '\u{27E9}'), ('\u{27E9}', '\u{27E8}'), ('\u{27EA}', '\u{27EB}'),
    ('\u{27EB}', '\u{27EA}'), ('\u{27EC}', '\u{27ED}'), ('\u{27ED}', '\u{27EC}'), ('\u{27EE}', '\u{27EF}'),
    ('\u{27EF}', '\u{27EE}'), ('\u{2983}', '\u{2984}'), ('\u{2984}', '\u{2983}'), ('\u{2985}', '\u{2986}'),
    ('\u{2986}', '\u{2985}'), ('\u{2987}', '\u{2988}'), ('\u{2988}', '\u{2987}'), ('\u{2989}', '\u{298A}'),
    ('\u{298A}', '\u{2989}'), ('\u{298B}', '\u{298C}'), ('\u{298C}', '\u{298B}'), ('\u{298D}', '\u{2990}'),
    ('\u{298E}', '\u{298F}'), ('\u{298F}', '\u{298E}'), ('\u{2990}', '\u{298D}'), ('\u{2991}', '\u{2992}'),
    ('\u{2992}', '\u{2991}'), ('\u{2993}', '\u{2994}'), ('\u{2994}', '\u{2993}'), ('\u{2995}', '\u{2996}'),
    ('\u{2996}', '\u{2995}'), ('\u{2997}', '\u{2998}'), ('\u{2998}', '\u{2997}'), ('\u{29B8}', '\u{2298}'),
    ('\u{29C0}', '\u{29C1}'), ('\u{29C1}', '\u{29C0}'), ('\u{29C4}', '\u{29C5}'), ('\u{29C5}', '\u{29C4}'),
    ('\u{29D1}', '\u{29D2}'), ('\u{29D2}', '\u{29D1}'), ('\u{29D4}', '\u{29D5}'), ('\u{29D5}', '\u{29D4}'),
    ('\u{29D8}', '\u{29D9}'), ('\u{29D9}', '\u{29D8}'), ('\u{29DA}', '\u{29DB}'), ('\u{29DB}', '\u{29DA}'),
    ('\u{29F5}', '\u{2215}'), ('\u{29FC}', '\u{29FD}'), ('\u{29FD}', '\u{29FC}'), ('\u{2ADE}', '\u{22A6}'),
    ('\u{2E02}', '\u{2E03}'), ('\u{2E03}', '\u{2E02}'), ('\u{2E04}', '\u{2E05}'), ('\u{2E05}', '\u{2E04}'),
    ('\u{2E09}', '\u{2E0A}'), ('\u{2E0A}', '\u{2E09}'), ('\u{2E0C}', '\u{2E0D}'), ('\u{2E0D}', '\u{2E0C}'),
    ('\u{2E1C}', '\u{2E1D}'), ('\u{2E1D}', '\u{2E1C}'), ('\u{2E20}', '\u{2E21}'), ('\u{2E21}', '\u{2E20}'),
    ('\u{2E22}', '\u{2E23}'), ('\u{2E23}', '\u{2E22}'), ('\u{2E24}', '\u{2E25}'), ('\u{2E25}', '\u{2E24}'),
    ('\u{2E26}', '\u{2E27}'), ('\u{2E27}', '\u{2E26}'), ('\u{2E28}', '\u{2E29}'), ('\u{2E29}', '\u{2E28}'),
    ('\u{3008}', '\u{3009}'), ('\u{3009}', '\u{3008}'), ('\u{300A}', '\u{300B}'), ('\u{300B}', '\u{300A}'),
    ('\u{300C}', '\u{300D}'), ('\u{300D}', '\u{300C}'), ('\u{300E}', '\u{300F}'), ('\u{300F}', '\u{300E}'),
    ('\u{3010}', '\u{3011}'), ('\u{3011}', '\u{3010}'), ('\u{3014}', '\u{3015}'), ('\u{3015}', '\u{3014}'),
    ('\u{3016}', '\u{3017}'), ('\u{3017}', '\u{3016}'), ('\u{3018}', '\u{3019}'), ('\u{3019}', '\u{3018}'),
    ('\u{301A}', '\u{301B}'), ('\u{301B}', '\u{301A}'), ('\u{FE59}', '\u{FE5A}'), ('\u{FE5A}', '\u{FE59}'),
    ('\u{FE5B}', '\u{FE5C}'), ('\u{FE5C}', '\u{FE5B}'), ('\u{FE5D}', '\u{FE5E}'), ('\u{FE5E}', '\u{FE5D}'),
    ('\u{FE64}', '\u{FE65}'), ('\u{FE65}', '\u{FE64}'), ('\u{FF08}', '\u{FF09}'), ('\u{FF09}', '\u{FF08}'),
    ('\u{FF1C}', '\u{FF1E}'), ('\u{FF1E}', '\u{FF1C}'), ('\u{FF3B}', '\u{FF3D}'), ('\u{FF3D}', '\u{FF3B}'),
    ('\u{FF5B}', '\u{FF5D}'), ('\u{FF5D}', '\u{FF5B}'), ('\u{FF5F}', '\u{FF60}'), ('\u{FF60}', '\u{FF5F}'),
    ('\u{FF62}', '\u{FF63}'), ('\u{FF63}', '\u{FF62}'),
];

/// Return the mirrored counterpart of `ch`, if it has one.
pub fn mirrored_char(ch: char) -> Option<char> {
    MIRROR_PAIRS
        .binary_search_by_key(&ch, |&(from, _)| from)
        .ok()
        .map(|idx| MIRROR_PAIRS[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_parentheses() {
        assert_eq!(mirrored_char('('), Some(')'));
        assert_eq!(mirrored_char(')'), Some('('));
    }

    #[test]
    fn mirrors_brackets_and_braces() {
        assert_eq!(mirrored_char('['), Some(']'));
        assert_eq!(mirrored_char(']'), Some('['));
        assert_eq!(mirrored_char('{'), Some('}'));
        assert_eq!(mirrored_char('}'), Some('{'));
    }

    #[test]
    fn mirrors_quotes_and_relations() {
        assert_eq!(mirrored_char('\u{00AB}'), Some('\u{00BB}'));
        assert_eq!(mirrored_char('<'), Some('>'));
        assert_eq!(mirrored_char('\u{2264}'), Some('\u{2265}'));
        assert_eq!(mirrored_char('\u{2215}'), Some('\u{29F5}'));
    }

    #[test]
    fn letters_have_no_mirror() {
        assert_eq!(mirrored_char('a'), None);
        assert_eq!(mirrored_char('\u{05D0}'), None);
        assert_eq!(mirrored_char('\u{0627}'), None);
    }

    #[test]
    fn table_is_sorted_and_symmetric() {
        for window in MIRROR_PAIRS.windows(2) {
            assert!(window[0].0 < window[1].0);
        }
        for &(from, to) in MIRROR_PAIRS {
            assert_eq!(mirrored_char(to), Some(from));
        }
    }
}
