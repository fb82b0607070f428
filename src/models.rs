use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Edge lengths generated when no sizes are configured.
pub const DEFAULT_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// An RGBA color, serialized as a four-element array.
pub type Color = [u8; 4];

pub const DEFAULT_BACKGROUND: Color = [59, 130, 246, 255];
pub const DEFAULT_FOREGROUND: Color = [255, 255, 255, 255];
pub const DEFAULT_GLYPH: char = '🪄';

/// One square icon to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconSpec {
    pub size: u32,
}

impl IconSpec {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// File name used for this icon, e.g. `icon-72x72.png`.
    pub fn file_name(&self) -> String {
        format!("icon-{0}x{0}.png", self.size)
    }

    /// The `sizes` value of a manifest entry, e.g. `72x72`.
    pub fn dimensions(&self) -> String {
        format!("{0}x{0}", self.size)
    }

    /// Pixel size of the preferred font for this icon.
    pub fn font_px(&self) -> u32 {
        self.size / 2
    }
}

/// Colors used while drawing a single icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconStyle {
    pub background: Color,
    pub foreground: Color,
    pub glyph: char,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            foreground: DEFAULT_FOREGROUND,
            glyph: DEFAULT_GLYPH,
        }
    }
}

/// Which kind of glyph source drew an icon.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GlyphSourceKind {
    Preferred,
    Fallback,
}

/// Holds metadata about a single written icon file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub file_name: String,
    pub path: PathBuf,
    pub sha256: String,
    pub glyph_source: GlyphSourceKind,
}

/// A single entry of a web app manifest `icons` array.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// The `icons` fragment written next to the images.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ManifestFragment {
    pub icons: Vec<ManifestIcon>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_follows_convention() {
        assert_eq!(IconSpec::new(72).file_name(), "icon-72x72.png");
        assert_eq!(IconSpec::new(512).dimensions(), "512x512");
    }

    #[test]
    fn font_px_rounds_down() {
        assert_eq!(IconSpec::new(73).font_px(), 36);
        assert_eq!(IconSpec::new(1).font_px(), 0);
    }

    #[test]
    fn manifest_icon_uses_type_key() {
        let entry = ManifestIcon {
            src: "icons/icon-96x96.png".into(),
            sizes: "96x96".into(),
            mime_type: "image/png".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "image/png");
        assert!(json.get("mime_type").is_none());
    }
}
