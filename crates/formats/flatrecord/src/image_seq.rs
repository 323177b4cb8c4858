use crate::cursor::Cursor;
use crate::error::Result;
use crate::framing::length_prefixed;
use crate::framing::sentinel::{self, EmptyRecord};
use crate::image::{decode_image, encode_image, read_dimension, write_image, Image};
use crate::Word;

/// Encode images back to back, with a sentinel between consecutive records.
pub fn encode_images(images: &[Image]) -> Vec<Word> {
    sentinel::join(images, write_image)
}

/// Decode a sentinel-framed image sequence.
///
/// The trailing segment is always decoded, so an empty record yields one
/// 0x0 image rather than an empty sequence. A segment too short to hold its
/// width or height reads the missing dimension as 0. Callers that need to
/// tell "no images" apart must check for an empty record themselves.
pub fn decode_images(record: &[Word]) -> Result<Vec<Image>> {
    sentinel::segments(record, EmptyRecord::OneSegment)
        .into_iter()
        .map(decode_segment)
        .collect()
}

fn decode_segment(segment: &[Word]) -> Result<Image> {
    if segment.len() >= 2 {
        return decode_image(segment);
    }
    let mut prefix = [0; 2];
    prefix[..segment.len()].copy_from_slice(segment);
    let mut c = Cursor::new(&prefix, "image");
    let width = read_dimension(&mut c, "width")?;
    let height = read_dimension(&mut c, "height")?;
    // At least one dimension is 0, so there are no pixels to read.
    Ok(Image::new(width, height))
}

/// Length-prefixed alternative to [`encode_images`].
pub fn encode_images_prefixed(images: &[Image]) -> Vec<Word> {
    length_prefixed::encode(images, encode_image)
}

pub fn decode_images_prefixed(record: &[Word]) -> Result<Vec<Image>> {
    length_prefixed::decode(record)?
        .into_iter()
        .map(decode_image)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn one_by_one() -> Image {
        Image::from_pixels(1, 1, vec![5]).unwrap()
    }

    fn two_by_one() -> Image {
        Image::from_pixels(2, 1, vec![1, 2]).unwrap()
    }

    #[test]
    fn encodes_records_separated_by_sentinel() {
        let record = encode_images(&[one_by_one(), two_by_one()]);
        assert_eq!(record, vec![1, 1, 5, -1, 2, 1, 1, 2]);
        assert_eq!(decode_images(&record).unwrap(), vec![one_by_one(), two_by_one()]);
    }

    #[test]
    fn single_image_has_no_sentinel() {
        assert_eq!(encode_images(&[one_by_one()]), vec![1, 1, 5]);
    }

    #[test]
    fn empty_record_decodes_to_one_blank_image() {
        // Current behavior: the trailing flush always emits an image.
        assert!(encode_images(&[]).is_empty());
        let images = decode_images(&[]).unwrap();
        assert_eq!(images, vec![Image::new(0, 0)]);
    }

    #[test]
    fn short_prefix_reads_missing_dimension_as_zero() {
        assert_eq!(decode_images(&[3]).unwrap(), vec![Image::new(3, 0)]);
        assert_eq!(
            decode_images(&[1, 1, 5, -1]).unwrap(),
            vec![one_by_one(), Image::new(0, 0)]
        );
    }

    #[test]
    fn truncated_segment_is_invalid_format() {
        assert!(matches!(
            decode_images(&[2, 2, 1, -1, 1, 1, 4]),
            Err(Error::InvalidFormat { .. })
        ));
    }

    #[test]
    fn prefixed_distinguishes_empty_sequence() {
        assert_eq!(encode_images_prefixed(&[]), vec![0]);
        assert!(decode_images_prefixed(&[0]).unwrap().is_empty());
        let images = vec![two_by_one(), Image::new(0, 0), one_by_one()];
        let record = encode_images_prefixed(&images);
        assert_eq!(record, vec![3, 4, 2, 1, 1, 2, 2, 0, 0, 3, 1, 1, 5]);
        assert_eq!(decode_images_prefixed(&record).unwrap(), images);
    }
}
