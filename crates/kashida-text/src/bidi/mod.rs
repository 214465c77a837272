//! Bidirectional (BiDi) text reordering.
//!
//! A direct run of the UAX #9 passes over a flat character vector:
//! - Paragraph level detection (P2-P3) or an explicit override
//! - Explicit embeddings and overrides (X1-X9), level runs (X10)
//! - Weak, neutral and implicit resolution (W1-W7, N1-N2, I1-I2)
//! - Line reordering and mirroring (L1, L2, L4)
//!
//! Isolate initiators (FSI, LRI, RLI, PDI) are treated as ordinary
//! characters rather than opening isolating run sequences.

pub mod class;
pub mod levels;
pub mod mirror;
pub mod reorder;
mod resolve;

use kashida_config::{BaseDirection, BidiConfig};

pub use class::{BidiClass, CharProperties, UnicodeProperties};
pub use levels::{BidiChar, Direction, LevelRun, paragraph_level};
pub use mirror::mirrored_char;
pub use reorder::{
    BidiParagraph, BidiRun, reorder_for_display, reorder_utf16, reorder_with, visual_index_map,
};

/// Options for a reorder call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BidiOptions {
    /// Paragraph direction; `Auto` uses the first strong character.
    pub base_dir: BaseDirection,
    /// Debug mode: uppercase letters are strong right-to-left.
    pub upper_is_rtl: bool,
}

impl From<&BidiConfig> for BidiOptions {
    fn from(config: &BidiConfig) -> Self {
        Self {
            base_dir: config.base_dir,
            upper_is_rtl: config.upper_is_rtl,
        }
    }
}
