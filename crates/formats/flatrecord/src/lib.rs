//! Codecs between structured setting values and flat integer records.
//!
//! A key-value store that only persists numbers and number arrays can still
//! hold booleans, images, and arrays of strings or images: each value is
//! flattened into a [`Word`] sequence here and rebuilt on read.
//!
//! Variable-length items that share one record are separated by
//! [`SENTINEL`]. Payload words (pixels, character codes, dimensions) are
//! never negative, so the sentinel is unambiguous.

pub mod cursor;
pub mod error;
pub mod framing;
pub mod image;
pub mod image_seq;
pub mod scalar;
pub mod text;

pub use error::{Error, Result};
pub use image::{decode_image, encode_image, Image};
pub use image_seq::{decode_images, decode_images_prefixed, encode_images, encode_images_prefixed};
pub use scalar::{decode_boolean, decode_booleans, encode_boolean, encode_booleans};
pub use text::{decode_strings, decode_strings_prefixed, encode_strings, encode_strings_prefixed};

/// Element type of a flat record.
pub type Word = i32;

/// Reserved word separating sub-records inside one flat record.
pub const SENTINEL: Word = -1;
