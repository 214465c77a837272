//! kashida: prepare Arabic-script text for renderers that neither shape
//! nor reorder.
//!
//! Text is first reshaped into contextual presentation forms and then
//! reordered from logical to visual order, so that drawing the result
//! left to right displays it correctly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use kashida_config::{
    BaseDirection, BidiConfig, ConfigError, KashidaConfig, Language, ReshaperConfig,
};
pub use kashida_text::bidi::{BidiOptions, BidiParagraph, reorder_for_display};
pub use kashida_text::reshape::{ArabicReshaper, LigatureGroup, ligature_names, reshape};

/// Errors from the file-level helpers.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, DisplayError>;

/// A configured reshape-then-reorder pipeline.
///
/// Building one resolves the letter table and compiles the enabled
/// ligatures; [`DisplayPipeline::process`] can then be called any number of
/// times.
#[derive(Debug)]
pub struct DisplayPipeline {
    reshaper: Option<ArabicReshaper>,
    bidi: BidiOptions,
}

impl DisplayPipeline {
    pub fn new(config: &KashidaConfig) -> Self {
        debug!(
            language = %config.reshaper.language,
            base_dir = ?config.bidi.base_dir,
            "display pipeline built"
        );
        Self {
            reshaper: Some(ArabicReshaper::new(&config.reshaper)),
            bidi: BidiOptions::from(&config.bidi),
        }
    }

    /// A pipeline that only reorders, leaving letter forms untouched.
    pub fn bidi_only(config: &BidiConfig) -> Self {
        Self {
            reshaper: None,
            bidi: BidiOptions::from(config),
        }
    }

    /// Reshape (when enabled) and reorder `text` as one stream.
    pub fn process(&self, text: &str) -> String {
        match &self.reshaper {
            Some(reshaper) => reorder_for_display(&reshaper.reshape(text), &self.bidi),
            None => reorder_for_display(text, &self.bidi),
        }
    }

    /// Process every line on its own, so each line picks its own paragraph
    /// direction.
    ///
    /// Lines end at `\n` or `\r\n`; the output always separates them with
    /// `\n`. A trailing line break is kept.
    pub fn process_lines(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| self.process(line.strip_suffix('\r').unwrap_or(line)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Reshape `text` with `config.reshaper`, then reorder it for display with
/// `config.bidi`.
pub fn process_display(text: &str, config: &KashidaConfig) -> String {
    DisplayPipeline::new(config).process(text)
}

/// [`process_display`] with the default configuration.
pub fn process_display_default(text: &str) -> String {
    process_display(text, &KashidaConfig::default())
}

/// Replace `text` with its display form.
pub fn process_in_place(text: &mut String, config: &KashidaConfig) {
    *text = process_display(text, config);
}

/// Read `input`, process it and write the display form to `output`.
///
/// With `line_by_line` every line gets its own paragraph direction;
/// otherwise the whole file is one stream whose direction comes from its
/// first strong character.
pub fn process_file<P, Q>(
    input: P,
    output: Q,
    config: &KashidaConfig,
    line_by_line: bool,
) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    process_file_with(&DisplayPipeline::new(config), input, output, line_by_line)
}

/// [`process_file`] with an already built pipeline.
pub fn process_file_with<P, Q>(
    pipeline: &DisplayPipeline,
    input: P,
    output: Q,
    line_by_line: bool,
) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();
    let text = fs::read_to_string(input).map_err(|source| DisplayError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let processed = if line_by_line {
        pipeline.process_lines(&text)
    } else {
        pipeline.process(&text)
    };

    fs::write(output, processed).map_err(|source| DisplayError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(
        input = %input.display(),
        output = %output.display(),
        line_by_line,
        "file processed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAM_ALEF: &str = "\u{0644}\u{0627}";

    #[test]
    fn empty_text() {
        assert_eq!(process_display_default(""), "");
    }

    #[test]
    fn latin_passes_through() {
        assert_eq!(process_display_default("hello"), "hello");
    }

    #[test]
    fn in_place_matches_process_display() {
        let config = KashidaConfig::default();
        let mut text = String::from(LAM_ALEF);
        process_in_place(&mut text, &config);
        assert_eq!(text, process_display(LAM_ALEF, &config));
        assert_eq!(text, "\u{FEFB}");
    }

    #[test]
    fn bidi_only_skips_reshaping() {
        let pipeline = DisplayPipeline::bidi_only(&BidiConfig::default());
        assert_eq!(pipeline.process(LAM_ALEF), "\u{0627}\u{0644}");
    }

    #[test]
    fn lines_keep_their_breaks() {
        let pipeline = DisplayPipeline::new(&KashidaConfig::default());
        assert_eq!(pipeline.process_lines("ab\ncd\n"), "ab\ncd\n");
        assert_eq!(pipeline.process_lines(""), "");
        assert_eq!(pipeline.process_lines("\n\n"), "\n\n");
    }

    #[test]
    fn crlf_lines_lose_the_carriage_return() {
        let pipeline = DisplayPipeline::new(&KashidaConfig::default());
        assert_eq!(pipeline.process_lines("ab\r\ncd\r\n"), "ab\ncd\n");
        assert_eq!(
            pipeline.process_lines(&format!("x {LAM_ALEF}\r\n{LAM_ALEF} x")),
            "x \u{FEFB}\nx \u{FEFB}"
        );
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let err = process_file(
            "/nonexistent/kashida-input.txt",
            "/nonexistent/kashida-output.txt",
            &KashidaConfig::default(),
            false,
        )
        .unwrap_err();
        match err {
            DisplayError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/kashida-input.txt"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    const SALAM: &str = "\u{0633}\u{0644}\u{0627}\u{0645}";
    const SALAM_VISUAL: &str = "\u{FEE1}\u{FEFC}\u{FEB3}";

    #[test]
    fn file_round_trip_whole_text() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, format!("hello {SALAM}\n{SALAM} hello\n")).unwrap();

        process_file(&input, &output, &KashidaConfig::default(), false).unwrap();

        // one paragraph direction (left-to-right, from "hello") for every line
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            format!("hello {SALAM_VISUAL}\n{SALAM_VISUAL} hello\n")
        );
    }

    #[test]
    fn file_round_trip_line_by_line() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, format!("hello {SALAM}\r\n{SALAM} hello\r\n")).unwrap();

        let pipeline = DisplayPipeline::new(&KashidaConfig::default());
        process_file_with(&pipeline, &input, &output, true).unwrap();

        // the second line is right-to-left on its own
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            format!("hello {SALAM_VISUAL}\nhello {SALAM_VISUAL}\n")
        );
    }
}
