use crate::cursor::{Cursor, Writer};
use crate::error::{Error, Result};
use crate::Word;

/// A rectangular grid of pixel values, stored row-major.
///
/// Pixels are non-negative, so an encoded image never contains the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    width: u16,
    height: u16,
    pixels: Vec<Word>,
}

impl Image {
    /// An image with every pixel set to 0.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; usize::from(width) * usize::from(height)],
        }
    }

    /// Build an image from row-major pixel data.
    pub fn from_pixels(width: u16, height: u16, pixels: Vec<Word>) -> Result<Self> {
        let expected = usize::from(width) * usize::from(height);
        if pixels.len() != expected {
            return Err(Error::invalid(
                "image",
                format!(
                    "{width}x{height} image needs {expected} pixels, got {}",
                    pixels.len()
                ),
            ));
        }
        if let Some(&value) = pixels.iter().find(|&&p| p < 0) {
            return Err(Error::NegativeValue { value });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[Word] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Word]> {
        // chunks(0) panics; a zero-width image has no visible rows either way.
        let width = usize::from(self.width).max(1);
        self.pixels.chunks(width)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(self.width) * usize::from(y) + usize::from(x))
    }

    /// Pixel at column `x`, row `y`, or `None` outside the image.
    pub fn get_pixel(&self, x: u16, y: u16) -> Option<Word> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set_pixel(&mut self, x: u16, y: u16, value: Word) -> Result<()> {
        if value < 0 {
            return Err(Error::NegativeValue { value });
        }
        let i = self.index(x, y).ok_or(Error::PixelOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.pixels[i] = value;
        Ok(())
    }
}

/// Encode an image as `[width, height, pixels...]`.
pub fn encode_image(image: &Image) -> Vec<Word> {
    let mut w = Writer::with_capacity(2 + image.pixels.len());
    write_image(&mut w, image);
    w.into_record()
}

pub(crate) fn write_image(w: &mut Writer, image: &Image) {
    w.write_size(usize::from(image.width));
    w.write_size(usize::from(image.height));
    for row in image.rows() {
        w.write_words(row);
    }
}

/// Decode an `[width, height, pixels...]` record.
///
/// Fails with [`Error::InvalidFormat`] when the record cannot hold the width
/// and height, or holds fewer pixels than they declare. Words past the last
/// pixel are ignored.
pub fn decode_image(record: &[Word]) -> Result<Image> {
    if record.len() < 2 {
        return Err(Error::invalid(
            "image",
            format!(
                "record has {} words, need at least 2 for width and height",
                record.len()
            ),
        ));
    }
    let mut c = Cursor::new(record, "image");
    let width = read_dimension(&mut c, "width")?;
    let height = read_dimension(&mut c, "height")?;
    read_pixels(&mut c, width, height)
}

pub(crate) fn read_dimension(c: &mut Cursor<'_>, what: &str) -> Result<u16> {
    let offset = c.position();
    let size = c.read_size(what)?;
    u16::try_from(size).map_err(|_| {
        Error::invalid(
            "image",
            format!("{what} {size} at offset {offset} exceeds {}", u16::MAX),
        )
    })
}

fn read_pixels(c: &mut Cursor<'_>, width: u16, height: u16) -> Result<Image> {
    let count = usize::from(width) * usize::from(height);
    let pixels = c.read_words(count)?;
    Image::from_pixels(width, height, pixels.to_vec())
}
