use crate::Word;

/// Errors raised while decoding flat records or building images.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The record is structurally too short or declares impossible sizes.
    #[error("invalid {context} format: {message}")]
    InvalidFormat {
        context: &'static str,
        message: String,
    },

    /// A text record holds a word that is not a Unicode scalar value.
    #[error("invalid character code {code} at offset {offset}")]
    InvalidCharCode { code: Word, offset: usize },

    /// Pixel values must be non-negative so they never collide with the sentinel.
    #[error("negative pixel value {value}")]
    NegativeValue { value: Word },

    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    PixelOutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
}

impl Error {
    pub(crate) fn invalid(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidFormat {
            context,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
