use thiserror::Error;

/// Errors raised while reading or decoding SD data.
///
/// Every variant except [`Error::Io`] is confined to a single molecule block;
/// `line` is 1-based within that block.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("unsupported molfile format at line {line}: {details}")]
    Format { line: usize, details: String },

    #[error("invalid {field} '{value}' at line {line}")]
    FieldDecode {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("missing {field} at line {line}")]
    MissingField { line: usize, field: &'static str },

    #[error("block ended at line {line} before the {table} table was complete (expected {expected} rows, found {found})")]
    Truncated {
        line: usize,
        table: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("malformed property tag at line {line}: '{text}'")]
    TagSyntax { line: usize, text: String },
}

impl Error {
    pub fn format(line: usize, details: impl Into<String>) -> Self {
        Self::Format {
            line,
            details: details.into(),
        }
    }

    pub fn field(line: usize, field: &'static str, value: impl Into<String>) -> Self {
        Self::FieldDecode {
            line,
            field,
            value: value.into(),
        }
    }

    pub fn tag(line: usize, text: impl Into<String>) -> Self {
        Self::TagSyntax {
            line,
            text: text.into(),
        }
    }
}
