//! Error types for loading and converting vector drawables

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Fatal errors that abort the conversion of a single asset
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input is not a well-formed XML element tree
    #[error("malformed source at {span:?}: {message}")]
    MalformedSource { span: Span, message: String },

    /// The root element lacks a required viewport attribute
    #[error("missing required viewport attribute 'android:{attribute}'")]
    MissingViewport { attribute: &'static str, span: Span },

    /// A viewport attribute is present but is not a positive number
    #[error("invalid viewport attribute 'android:{attribute}': '{value}' is not a positive number")]
    InvalidViewport {
        attribute: &'static str,
        value: String,
        span: Span,
    },
}

impl ConvertError {
    /// Create a malformed source error from a roxmltree failure
    pub(crate) fn malformed(err: &roxmltree::Error, text: &str) -> Self {
        let pos = err.pos();
        let offset = byte_offset(text, pos.row, pos.col);
        Self::MalformedSource {
            span: offset..offset,
            message: err.to_string(),
        }
    }

    /// Get the source span of the error
    pub fn span(&self) -> &Span {
        match self {
            Self::MalformedSource { span, .. } => span,
            Self::MissingViewport { span, .. } => span,
            Self::InvalidViewport { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let label = match self {
            Self::MalformedSource { message, .. } => message.clone(),
            Self::MissingViewport { attribute, .. } => {
                format!("root element needs an 'android:{}' attribute", attribute)
            }
            Self::InvalidViewport { value, .. } => {
                format!("expected a positive number, found '{}'", value)
            }
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Translate a 1-based row/column position (columns counted in characters)
/// into a byte offset, clamped to the end of the text.
fn byte_offset(text: &str, row: u32, col: u32) -> usize {
    let mut offset = 0;
    for (index, line) in text.split_inclusive('\n').enumerate() {
        if index + 1 == row as usize {
            let in_line = line
                .char_indices()
                .nth(col.saturating_sub(1) as usize)
                .map(|(i, _)| i)
                .unwrap_or(line.len());
            return offset + in_line;
        }
        offset += line.len();
    }
    text.len()
}
