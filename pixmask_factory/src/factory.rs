use crate::pixels::Pixel_Source;
use pixmask_common::colors::{same_rgb, Color};
use pixmask_core::{Bit_Mask, Mask_Error};

/// Builds a mask with every pixel for which `pred` holds set. All other
/// builders funnel through this.
pub fn from_predicate<F>(width: i32, height: i32, pred: F) -> Result<Bit_Mask, Mask_Error>
where
    F: Fn(i32, i32) -> bool,
{
    let mut mask = Bit_Mask::new(width, height)?;
    for x in 0..width {
        for y in 0..height {
            if pred(x, y) {
                mask.set_bit(x, y);
            }
        }
    }
    Ok(mask)
}

/// Builds a mask from an image's alpha channel: a pixel is set iff its alpha
/// exceeds `floor(threshold * 255)`, with `threshold` in `[0, 1]`. At
/// threshold 0 only fully transparent pixels stay unset; at threshold 1 no
/// pixel qualifies, since no alpha exceeds 255.
pub fn from_alpha_channel(
    src: &impl Pixel_Source,
    threshold: f64,
) -> Result<Bit_Mask, Mask_Error> {
    if !src.has_alpha() {
        return Err(Mask_Error::Missing_Alpha_Channel);
    }

    let int_threshold = (threshold * 255.0) as i32;
    let mask = from_predicate(src.width(), src.height(), |x, y| {
        i32::from(src.alpha_at(x, y)) > int_threshold
    })?;
    lverbose!(
        "Built {}x{} mask from alpha channel (threshold {})",
        mask.width(),
        mask.height(),
        threshold
    );
    Ok(mask)
}

/// Builds a mask from a color-keyed image: a pixel is set iff its RGB does
/// not exactly match `key`. Alpha is ignored on both sides.
pub fn from_color_key(src: &impl Pixel_Source, key: Color) -> Result<Bit_Mask, Mask_Error> {
    let mask = from_predicate(src.width(), src.height(), |x, y| {
        !same_rgb(src.color_at(x, y), key)
    })?;
    lverbose!(
        "Built {}x{} mask from color key",
        mask.width(),
        mask.height()
    );
    Ok(mask)
}

/// Builds a mask from newline-separated ASCII art: a pixel is set iff its
/// character equals `on_char`. Width comes from the first line, height from
/// the line count. Lines are expected to be equally long; short lines read
/// as unset pixels and excess characters are ignored.
pub fn from_ascii_art(art: &str, on_char: char) -> Result<Bit_Mask, Mask_Error> {
    let lines: Vec<&str> = art.lines().collect();
    let height = lines.len() as i32;
    let width = lines.first().map_or(0, |line| line.chars().count() as i32);

    let mut mask = Bit_Mask::new(width, height)?;
    for (y, line) in lines.iter().enumerate() {
        debug_assert!(
            line.chars().count() == width as usize,
            "ragged ascii art at line {}",
            y
        );
        for (x, ch) in line.chars().take(width as usize).enumerate() {
            if ch == on_char {
                mask.set_bit(x as i32, y as i32);
            }
        }
    }
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::Raster_Image;
    use pixmask_common::colors::{rgb, rgba, RED};

    fn alpha_strip(alphas: &[u8]) -> Raster_Image {
        let pixels = alphas.iter().map(|&a| rgba(0, 0, 0, a)).collect();
        Raster_Image::new(alphas.len() as i32, 1, true, pixels)
    }

    #[test]
    fn predicate_sets_matching_pixels() {
        let mask = from_predicate(4, 4, |x, y| x == y).unwrap();
        assert_eq!(mask.count_bits(), 4);
        for i in 0..4 {
            assert!(mask.get_bit(i, i));
        }
    }

    #[test]
    fn predicate_rejects_bad_dimensions() {
        assert_eq!(
            from_predicate(0, 3, |_, _| true),
            Err(Mask_Error::Invalid_Dimensions {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn alpha_threshold_zero_excludes_only_fully_transparent() {
        let image = alpha_strip(&[0, 1, 127, 128, 255]);
        let mask = from_alpha_channel(&image, 0.0).unwrap();
        assert!(!mask.get_bit(0, 0));
        assert!(mask.get_bit(1, 0));
        assert!(mask.get_bit(2, 0));
        assert!(mask.get_bit(3, 0));
        assert!(mask.get_bit(4, 0));
    }

    #[test]
    fn alpha_threshold_half_splits_at_127() {
        let image = alpha_strip(&[0, 1, 127, 128, 255]);
        let mask = from_alpha_channel(&image, 0.5).unwrap();
        assert!(!mask.get_bit(0, 0));
        assert!(!mask.get_bit(1, 0));
        assert!(!mask.get_bit(2, 0));
        assert!(mask.get_bit(3, 0));
        assert!(mask.get_bit(4, 0));
    }

    #[test]
    fn alpha_threshold_one_excludes_everything() {
        let image = alpha_strip(&[0, 1, 127, 128, 255]);
        let mask = from_alpha_channel(&image, 1.0).unwrap();
        assert_eq!(mask.count_bits(), 0);
    }

    #[test]
    fn alpha_builder_requires_an_alpha_channel() {
        let image = Raster_Image::new(2, 1, false, vec![rgb(0, 0, 0), rgb(1, 1, 1)]);
        assert_eq!(
            from_alpha_channel(&image, 0.5),
            Err(Mask_Error::Missing_Alpha_Channel)
        );
    }

    #[test]
    fn color_key_sets_everything_but_the_key() {
        let image = Raster_Image::new(
            2,
            2,
            false,
            vec![RED, rgb(0, 255, 0), rgb(255, 0, 0), rgb(255, 1, 0)],
        );
        let mask = from_color_key(&image, RED).unwrap();
        assert!(!mask.get_bit(0, 0));
        assert!(mask.get_bit(1, 0));
        assert!(!mask.get_bit(0, 1));
        assert!(mask.get_bit(1, 1));
    }

    #[test]
    fn color_key_ignores_alpha() {
        let image = Raster_Image::new(1, 1, true, vec![rgba(255, 0, 0, 0)]);
        let mask = from_color_key(&image, RED).unwrap();
        assert_eq!(mask.count_bits(), 0);
    }

    #[test]
    fn ascii_art_round_trips_through_display() {
        let art = "o..\n.o.\nooo";
        let mask = from_ascii_art(art, 'o').unwrap();
        assert_eq!(mask.width(), 3);
        assert_eq!(mask.height(), 3);
        assert_eq!(mask.to_string(), "o..\n.o.\nooo\n");
    }

    #[test]
    fn ascii_art_respects_the_on_char() {
        let mask = from_ascii_art("#.\n.#", '#').unwrap();
        assert!(mask.get_bit(0, 0));
        assert!(!mask.get_bit(1, 0));
        assert!(mask.get_bit(1, 1));
    }

    #[test]
    fn empty_ascii_art_is_an_error() {
        assert_eq!(
            from_ascii_art("", 'o'),
            Err(Mask_Error::Invalid_Dimensions {
                width: 0,
                height: 0
            })
        );
    }
}
