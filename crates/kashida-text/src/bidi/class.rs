//! Directional character classes and the property lookup seam.

use crate::bidi::mirror::mirrored_char;

/// Unicode `Bidi_Class` values (UAX #9, Table 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidiClass {
    /// Left-to-right
    L,
    /// Right-to-left
    R,
    /// Right-to-left Arabic
    AL,
    /// European number
    EN,
    /// European number separator
    ES,
    /// European number terminator
    ET,
    /// Arabic number
    AN,
    /// Common number separator
    CS,
    /// Paragraph separator
    B,
    /// Segment separator
    S,
    /// Whitespace
    WS,
    /// Other neutral
    ON,
    LRE,
    LRO,
    RLE,
    RLO,
    PDF,
    /// Non-spacing mark
    NSM,
    /// Boundary neutral
    BN,
    FSI,
    LRI,
    RLI,
    PDI,
}

impl BidiClass {
    /// Strong classes anchor direction for weak and neutral resolution.
    pub fn is_strong(self) -> bool {
        matches!(self, BidiClass::L | BidiClass::R | BidiClass::AL)
    }

    /// Classes that take part in neutral resolution (rule N1/N2).
    pub fn is_neutral(self) -> bool {
        matches!(
            self,
            BidiClass::B | BidiClass::S | BidiClass::WS | BidiClass::ON
        )
    }

    /// Embedding and override initiators (rules X2-X5).
    pub fn is_embedding_initiator(self) -> bool {
        matches!(
            self,
            BidiClass::RLE | BidiClass::LRE | BidiClass::RLO | BidiClass::LRO
        )
    }

    /// Classes dropped from the character stream by rule X9.
    pub fn is_removed_by_x9(self) -> bool {
        self.is_embedding_initiator() || matches!(self, BidiClass::BN | BidiClass::PDF)
    }
}

impl From<unicode_bidi::BidiClass> for BidiClass {
    #[allow(unreachable_patterns)]
    fn from(class: unicode_bidi::BidiClass) -> Self {
        use unicode_bidi::BidiClass as Ucd;
        match class {
            Ucd::L => BidiClass::L,
            Ucd::R => BidiClass::R,
            Ucd::AL => BidiClass::AL,
            Ucd::EN => BidiClass::EN,
            Ucd::ES => BidiClass::ES,
            Ucd::ET => BidiClass::ET,
            Ucd::AN => BidiClass::AN,
            Ucd::CS => BidiClass::CS,
            Ucd::B => BidiClass::B,
            Ucd::S => BidiClass::S,
            Ucd::WS => BidiClass::WS,
            Ucd::ON => BidiClass::ON,
            Ucd::LRE => BidiClass::LRE,
            Ucd::LRO => BidiClass::LRO,
            Ucd::RLE => BidiClass::RLE,
            Ucd::RLO => BidiClass::RLO,
            Ucd::PDF => BidiClass::PDF,
            Ucd::NSM => BidiClass::NSM,
            Ucd::BN => BidiClass::BN,
            Ucd::FSI => BidiClass::FSI,
            Ucd::LRI => BidiClass::LRI,
            Ucd::RLI => BidiClass::RLI,
            Ucd::PDI => BidiClass::PDI,
            // Classes added by future UCD versions are unclassified here.
            _ => BidiClass::ON,
        }
    }
}

/// Per-code-point properties consumed by the bidi engine.
pub trait CharProperties {
    fn bidi_class(&self, ch: char) -> BidiClass;

    /// The `Bidi_Mirroring_Glyph` of `ch`, if it has one.
    fn mirrored(&self, ch: char) -> Option<char>;
}

/// Property source backed by the UCD tables bundled with `unicode-bidi`
/// and the built-in mirroring table.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeProperties;

impl CharProperties for UnicodeProperties {
    fn bidi_class(&self, ch: char) -> BidiClass {
        unicode_bidi::bidi_class(ch).into()
    }

    fn mirrored(&self, ch: char) -> Option<char> {
        mirrored_char(ch)
    }
}
