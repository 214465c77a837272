//! kashida-text: Arabic reshaping and bidirectional reordering.
//!
//! - [`reshape`]: contextual letter forms and ligatures for Arabic-script text
//! - [`bidi`]: logical-to-visual reordering for display
//!
//! Both engines operate on plain strings and keep no state between calls.

pub mod bidi;
pub mod reshape;

pub use bidi::{
    BidiClass, BidiOptions, BidiParagraph, CharProperties, UnicodeProperties, reorder_for_display,
    reorder_utf16, visual_index_map,
};
pub use reshape::{
    ArabicReshaper, GlyphForm, LetterTable, LigatureGroup, LigatureMatcher, LigatureRecord,
    ligature_names,
};
