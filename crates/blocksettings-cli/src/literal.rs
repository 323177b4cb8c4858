//! Text form for images: one hex digit per pixel, rows separated by `/` or
//! newlines, `.` for 0. Whitespace inside a row is ignored.
//!
//! ```text
//! . 1 . / 1 f 1 / . 1 .
//! ```

use anyhow::{bail, Context, Result};
use flatrecord::{Image, Word};

pub fn parse_image(text: &str) -> Result<Image> {
    let rows: Vec<Vec<Word>> = text
        .split(['/', '\n'])
        .map(parse_row)
        .collect::<Result<_>>()?;
    // Leading and trailing separators leave empty rows behind.
    let rows: Vec<Vec<Word>> = rows.into_iter().filter(|r| !r.is_empty()).collect();

    let width = rows.first().map_or(0, Vec::len);
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        bail!("row {i} has {} pixels, expected {width}", row.len());
    }
    let width = u16::try_from(width).context("image too wide")?;
    let height = u16::try_from(rows.len()).context("image too tall")?;
    let pixels = rows.into_iter().flatten().collect();
    Ok(Image::from_pixels(width, height, pixels)?)
}

fn parse_row(row: &str) -> Result<Vec<Word>> {
    row.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '.' => Ok(0),
            _ => c
                .to_digit(16)
                .map(|d| d as Word)
                .with_context(|| format!("invalid pixel {c:?}")),
        })
        .collect()
}

/// Format an image in the literal form, one row per line.
///
/// Pixels above 15 have no single-digit form and are written as `?`.
pub fn format_image(image: &Image) -> String {
    let mut out = String::new();
    for row in image.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&p| match p {
                0 => ".".to_string(),
                1..=15 => format!("{p:x}"),
                _ => "?".to_string(),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slash_and_newline_rows() {
        let a = parse_image(". 1 . / 1 f 1 / . 1 .").unwrap();
        let b = parse_image(".1.\n1f1\n.1.\n").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.width(), 3);
        assert_eq!(a.height(), 3);
        assert_eq!(a.get_pixel(1, 1), Some(15));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(parse_image("11/1").is_err());
    }

    #[test]
    fn invalid_digit_is_rejected() {
        assert!(parse_image("1g").is_err());
    }

    #[test]
    fn empty_literal_is_empty_image() {
        let img = parse_image("").unwrap();
        assert_eq!((img.width(), img.height()), (0, 0));
    }

    #[test]
    fn format_matches_parse() {
        let img = parse_image(". a / 3 .").unwrap();
        assert_eq!(format_image(&img), ". a\n3 .\n");
        assert_eq!(parse_image(&format_image(&img)).unwrap(), img);
    }
}
