use crate::error::IconError;
use crate::models::{
    Color, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_GLYPH, DEFAULT_SIZES, IconSpec,
    IconStyle,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Font files tried, in order, when none are configured.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf",
    "/usr/share/fonts/noto/NotoEmoji-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\seguiemj.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Settings for one generator run. Every field may be omitted from the JSON file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub sizes: Vec<u32>,
    pub background: Color,
    pub foreground: Color,
    pub glyph: char,
    pub font_paths: Vec<PathBuf>,
    pub builtin_fallback: bool,
    pub out_dir: PathBuf,
    pub manifest: bool,
    pub manifest_src_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            background: DEFAULT_BACKGROUND,
            foreground: DEFAULT_FOREGROUND,
            glyph: DEFAULT_GLYPH,
            font_paths: DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect(),
            builtin_fallback: true,
            out_dir: PathBuf::from("."),
            manifest: false,
            manifest_src_prefix: "icons/".to_string(),
        }
    }
}

/// The part of the config that decides how glyphs are acquired.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSettings {
    pub font_paths: Vec<PathBuf>,
    pub builtin_fallback: bool,
}

impl Config {
    /// Loads a config from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Config, IconError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }
        let file = File::open(path).map_err(|e| IconError::io(path, e))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader).map_err(|source| IconError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects sizes that cannot produce an image.
    pub fn validate(&self) -> Result<(), IconError> {
        match self.sizes.iter().find(|&&s| s == 0) {
            Some(&s) => Err(IconError::InvalidSize(s)),
            None => Ok(()),
        }
    }

    /// Requested icons, ascending and without duplicates.
    pub fn icon_specs(&self) -> Vec<IconSpec> {
        self.sizes
            .iter()
            .copied()
            .collect::<BTreeSet<u32>>()
            .into_iter()
            .map(IconSpec::new)
            .collect()
    }

    pub fn style(&self) -> IconStyle {
        IconStyle {
            background: self.background,
            foreground: self.foreground,
            glyph: self.glyph,
        }
    }

    pub fn glyph_settings(&self) -> GlyphSettings {
        GlyphSettings {
            font_paths: self.font_paths.clone(),
            builtin_fallback: self.builtin_fallback,
        }
    }
}
