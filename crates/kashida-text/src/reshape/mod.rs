//! Arabic reshaping.
//!
//! Replaces base Arabic letters with the presentation form each one takes
//! in its word (isolated, initial, medial or final), substitutes enabled
//! ligatures, and handles harakat, tatweel and ZERO WIDTH JOINER according
//! to a [`ReshaperConfig`](kashida_config::ReshaperConfig).

pub mod forms;
pub mod letters;
pub mod ligatures;
pub mod matcher;
pub mod shaper;
mod tables;

pub use forms::{GlyphForm, LetterForms, TATWEEL, ZWJ, is_harakat};
pub use letters::LetterTable;
pub use ligatures::{LigatureGroup, LigatureRecord, find_ligature, ligature_names, ligatures};
pub use matcher::{LigatureMatch, LigatureMatcher};
pub use shaper::{ArabicReshaper, reshape};
