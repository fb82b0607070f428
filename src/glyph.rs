//! Glyph acquisition: a scalable font when one can be used, otherwise a
//! fixed-size mark compiled into the binary.

use crate::config::GlyphSettings;
use crate::error::IconError;
use crate::models::GlyphSourceKind;
use ab_glyph::{Font, FontVec, PxScale};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 16x16 wand mark used when no font can draw the glyph.
const FALLBACK_BITMAP: [&str; 16] = [
    "...........#....",
    "...........#....",
    ".........#.#.#..",
    "..........###...",
    "........#######.",
    "..........###...",
    ".........#.#.#..",
    "........##.#....",
    ".......##.......",
    "......##........",
    ".....##.........",
    "....##..........",
    "...##...........",
    "..##............",
    ".##.............",
    "................",
];

/// Anti-aliased coverage of one rendered glyph, cropped to its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    coverage: Vec<f32>,
}

impl GlyphMask {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0.0; (width * height) as usize],
        }
    }

    /// Coverage in `0.0..=1.0` at a position inside the mask.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.coverage[(y * self.width + x) as usize]
    }

    fn set(&mut self, x: u32, y: u32, value: f32) {
        if x < self.width && y < self.height {
            self.coverage[(y * self.width + x) as usize] = value.clamp(0.0, 1.0);
        }
    }
}

/// Reasons a font candidate was passed over. Only ever logged.
#[derive(Debug, Error)]
enum FontRejection {
    #[error("unreadable: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("not a usable font: {0}")]
    Invalid(#[from] ab_glyph::InvalidFont),
    #[error("no outline for {0:?}")]
    MissingGlyph(char),
}

/// A scalable font that has an outline for the requested glyph.
pub struct PreferredFont {
    path: PathBuf,
    font: FontVec,
}

impl PreferredFont {
    fn open(path: &Path, glyph: char) -> Result<Self, FontRejection> {
        let data = fs::read(path)?;
        // Face 0 of a collection is used for .ttc files.
        let font = FontVec::try_from_vec_and_index(data, 0)?;
        let id = font.glyph_id(glyph);
        if id.0 == 0 || font.outline(id).is_none() {
            return Err(FontRejection::MissingGlyph(glyph));
        }
        Ok(Self {
            path: path.to_path_buf(),
            font,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rasterize(&self, glyph: char, px: u32) -> Option<GlyphMask> {
        if px == 0 {
            return None;
        }
        // PxScale is relative to ascent - descent, so convert from the em size.
        let scale = match self.font.units_per_em() {
            Some(units_per_em) => {
                PxScale::from(px as f32 * self.font.height_unscaled() / units_per_em)
            }
            None => PxScale::from(px as f32),
        };
        let outlined = self
            .font
            .outline_glyph(self.font.glyph_id(glyph).with_scale(scale))?;
        let bounds = outlined.px_bounds();
        let width = bounds.width() as u32;
        let height = bounds.height() as u32;
        if width == 0 || height == 0 {
            return None;
        }
        let mut mask = GlyphMask::new(width, height);
        outlined.draw(|x, y, c| mask.set(x, y, c));
        Some(mask)
    }
}

/// The built-in mark. Its size is fixed and it ignores the requested character.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackGlyph;

impl FallbackGlyph {
    fn rasterize(&self) -> GlyphMask {
        let set = |x: usize, y: usize| FALLBACK_BITMAP[y].as_bytes()[x] == b'#';
        let rows = FALLBACK_BITMAP.len();
        let cols = FALLBACK_BITMAP[0].len();

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (cols, rows, 0, 0);
        for y in 0..rows {
            for x in 0..cols {
                if set(x, y) {
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                }
            }
        }

        let mut mask = GlyphMask::new((max_x - min_x + 1) as u32, (max_y - min_y + 1) as u32);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if set(x, y) {
                    mask.set((x - min_x) as u32, (y - min_y) as u32, 1.0);
                }
            }
        }
        mask
    }
}

/// Outcome of acquiring a glyph source for one icon.
pub enum GlyphSource {
    Preferred(PreferredFont),
    Fallback(FallbackGlyph),
}

impl GlyphSource {
    pub fn kind(&self) -> GlyphSourceKind {
        match self {
            GlyphSource::Preferred(_) => GlyphSourceKind::Preferred,
            GlyphSource::Fallback(_) => GlyphSourceKind::Fallback,
        }
    }

    /// Renders `glyph` with an em size of `px` pixels. `None` means there is
    /// nothing to draw, e.g. a zero pixel size.
    pub fn rasterize(&self, glyph: char, px: u32) -> Option<GlyphMask> {
        match self {
            GlyphSource::Preferred(font) => font.rasterize(glyph, px),
            GlyphSource::Fallback(fallback) => Some(fallback.rasterize()),
        }
    }
}

/// Tries each configured font in order and falls back to the built-in mark.
/// Font problems are never reported as errors.
///
/// A font that loads but has no outline for `glyph` is skipped as well, so
/// the mark is drawn instead of that font's `.notdef` box.
pub fn load_glyph_source(settings: &GlyphSettings, glyph: char) -> Result<GlyphSource, IconError> {
    for path in &settings.font_paths {
        match PreferredFont::open(path, glyph) {
            Ok(font) => {
                tracing::debug!(path = %font.path().display(), "using font");
                return Ok(GlyphSource::Preferred(font));
            }
            Err(reason) => {
                tracing::debug!(path = %path.display(), %reason, "skipping font");
            }
        }
    }

    if settings.builtin_fallback {
        tracing::warn!(glyph = %glyph, "no usable font, drawing built-in mark");
        Ok(GlyphSource::Fallback(FallbackGlyph))
    } else {
        Err(IconError::NoGlyphSourceAvailable)
    }
}
