use crate::glyph::{GlyphMask, GlyphSource};
use crate::models::{IconSpec, IconStyle};
use image::{ImageBuffer, Rgba, RgbaImage};
use imageproc::pixelops::interpolate;

/// Draws one icon: a solid square with the glyph centered on it.
///
/// The preferred font is sized to half the edge length. Centering uses the
/// rendered glyph's bounding box, floored, and a glyph larger than the
/// canvas stays centered and is cropped on every side.
pub fn create_icon(spec: IconSpec, source: &GlyphSource, style: &IconStyle) -> RgbaImage {
    let mut canvas = ImageBuffer::from_pixel(spec.size, spec.size, Rgba(style.background));
    if let Some(mask) = source.rasterize(style.glyph, spec.font_px()) {
        draw_centered(&mut canvas, &mask, Rgba(style.foreground));
    }
    canvas
}

/// Top-left corner that centers a `width` x `height` box on the canvas.
/// Negative when the box is larger than the canvas.
pub fn centered_origin(canvas_size: u32, width: u32, height: u32) -> (i64, i64) {
    let size = i64::from(canvas_size);
    (
        (size - i64::from(width)).div_euclid(2),
        (size - i64::from(height)).div_euclid(2),
    )
}

fn draw_centered(canvas: &mut RgbaImage, mask: &GlyphMask, color: Rgba<u8>) {
    let (origin_x, origin_y) = centered_origin(canvas.width(), mask.width, mask.height);
    for y in 0..mask.height {
        for x in 0..mask.width {
            let coverage = mask.get(x, y);
            if coverage <= 0.0 {
                continue;
            }
            let (px, py) = (origin_x + i64::from(x), origin_y + i64::from(y));
            if px < 0 || py < 0 || px >= i64::from(canvas.width()) || py >= i64::from(canvas.height()) {
                continue;
            }
            let (px, py) = (px as u32, py as u32);
            let under = *canvas.get_pixel(px, py);
            canvas.put_pixel(px, py, interpolate(color, under, coverage));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::FallbackGlyph;

    const BLUE: Rgba<u8> = Rgba([59, 130, 246, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn fallback() -> GlyphSource {
        GlyphSource::Fallback(FallbackGlyph)
    }

    #[test]
    fn origin_is_floored() {
        assert_eq!(centered_origin(72, 14, 15), (29, 28));
        assert_eq!(centered_origin(73, 14, 15), (29, 29));
    }

    #[test]
    fn oversized_glyph_gets_negative_origin() {
        assert_eq!(centered_origin(8, 14, 15), (-3, -4));
        assert_eq!(centered_origin(1, 2, 3), (-1, -1));
    }

    #[test]
    fn oversized_glyph_is_cropped_around_its_center() {
        let icon = create_icon(IconSpec::new(8), &fallback(), &IconStyle::default());
        // Canvas row 0 shows row 4 of the wand bitmap (the sparkle's bar),
        // shifted left by the 1px crop and the 3px negative origin.
        let row0: Vec<bool> = (0..8).map(|x| *icon.get_pixel(x, 0) == WHITE).collect();
        assert_eq!(row0, vec![false, false, false, false, true, true, true, true]);
        // Row 3 shows bitmap row 7: the top of the stick and the sparkle's tail.
        let row3: Vec<bool> = (0..8).map(|x| *icon.get_pixel(x, 3) == WHITE).collect();
        assert_eq!(row3, vec![false, false, false, false, true, true, false, true]);
        assert_eq!(*icon.get_pixel(0, 0), BLUE);
    }

    #[test]
    fn canvas_matches_requested_size() {
        let icon = create_icon(IconSpec::new(72), &fallback(), &IconStyle::default());
        assert_eq!(icon.dimensions(), (72, 72));
        assert_eq!(*icon.get_pixel(0, 0), BLUE);
        assert_eq!(*icon.get_pixel(71, 71), BLUE);
    }

    #[test]
    fn fallback_mark_is_drawn_in_the_middle() {
        let icon = create_icon(IconSpec::new(72), &fallback(), &IconStyle::default());
        let mask = fallback().rasterize('🪄', 36).unwrap();

        let white: Vec<(u32, u32)> = icon
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == WHITE)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!white.is_empty());
        assert!(white.iter().all(|&(x, y)| {
            (29..29 + mask.width).contains(&x) && (28..28 + mask.height).contains(&y)
        }));
        // Bottom-left end of the stick.
        assert_eq!(*icon.get_pixel(29, 28 + 14), WHITE);
    }

    #[test]
    fn tiny_canvas_clips_without_panicking() {
        let icon = create_icon(IconSpec::new(4), &fallback(), &IconStyle::default());
        assert_eq!(icon.dimensions(), (4, 4));
    }

    #[test]
    fn custom_colors_are_used() {
        let style = IconStyle {
            background: [0, 0, 0, 255],
            foreground: [255, 0, 0, 255],
            glyph: 'x',
        };
        let icon = create_icon(IconSpec::new(96), &fallback(), &style);
        assert_eq!(*icon.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert!(icon.pixels().any(|p| *p == Rgba([255, 0, 0, 255])));
    }
}
