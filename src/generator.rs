use crate::config::Config;
use crate::error::IconError;
use crate::glyph::load_glyph_source;
use crate::icon::create_icon;
use crate::models::{GeneratedIcon, IconSpec, ManifestFragment, ManifestIcon};
use crate::utils::{encode_png, save_json, sha256_hex, write_atomically};
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE_NAME: &str = "manifest-icons.json";

/// Generates every configured icon into `config.out_dir`.
///
/// Sizes are processed in ascending order and each one is independent: the
/// glyph source and canvas are created for that size and dropped after its
/// file is written. `on_created` is called after each file lands on disk.
pub fn run<F>(config: &Config, mut on_created: F) -> Result<Vec<GeneratedIcon>, IconError>
where
    F: FnMut(&GeneratedIcon),
{
    config.validate()?;
    let out_dir = config.out_dir.as_path();
    fs::create_dir_all(out_dir).map_err(|e| IconError::io(out_dir, e))?;

    let specs = config.icon_specs();
    let mut generated = Vec::with_capacity(specs.len());
    for spec in specs {
        let icon = generate_one(config, spec, out_dir)?;
        on_created(&icon);
        generated.push(icon);
    }

    if config.manifest {
        let path = out_dir.join(MANIFEST_FILE_NAME);
        save_json(&manifest_fragment(&generated, &config.manifest_src_prefix), &path)?;
        tracing::info!(path = %path.display(), entries = generated.len(), "wrote manifest fragment");
    }

    Ok(generated)
}

fn generate_one(config: &Config, spec: IconSpec, out_dir: &Path) -> Result<GeneratedIcon, IconError> {
    let source = load_glyph_source(&config.glyph_settings(), config.glyph)?;
    let canvas = create_icon(spec, &source, &config.style());
    let bytes = encode_png(&canvas)?;

    let file_name = spec.file_name();
    let path = out_dir.join(&file_name);
    write_atomically(&path, &bytes)?;

    let sha256 = sha256_hex(&bytes);
    tracing::info!(file = %file_name, sha256 = %sha256, source = ?source.kind(), "wrote icon");

    Ok(GeneratedIcon {
        size: spec.size,
        file_name,
        path,
        sha256,
        glyph_source: source.kind(),
    })
}

/// Builds the `icons` array of a web app manifest for the written files.
pub fn manifest_fragment(icons: &[GeneratedIcon], src_prefix: &str) -> ManifestFragment {
    ManifestFragment {
        icons: icons
            .iter()
            .map(|icon| ManifestIcon {
                src: format!("{}{}", src_prefix, icon.file_name),
                sizes: IconSpec::new(icon.size).dimensions(),
                mime_type: "image/png".to_string(),
            })
            .collect(),
    }
}
