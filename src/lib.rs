//! Generates the PNG icon set of a web app manifest: a glyph centered on a
//! solid square, one file per size.

pub mod config;
pub mod error;
pub mod generator;
pub mod glyph;
pub mod icon;
pub mod models;
pub mod utils;

pub use config::Config;
pub use error::IconError;
pub use generator::run;
pub use models::{GeneratedIcon, GlyphSourceKind, IconSpec};
