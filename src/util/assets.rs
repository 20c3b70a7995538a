use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use thiserror::Error;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("embedded asset not found: {0}")]
    Missing(String),
    #[error("embedded asset {0} is not valid UTF-8")]
    InvalidUtf8(String),
}

/// Returns the contents of `assets/main.css`, or an empty sheet if missing.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css").unwrap_or_default())
        .as_str()
}

/// Reads a text asset. Accepts `recipes.json`, `/assets/recipes.json`, ...
pub fn load_text(path: &str) -> Result<String, AssetError> {
    let asset = load_asset(path)?;
    String::from_utf8(asset.into_owned()).map_err(|_| AssetError::InvalidUtf8(path.to_string()))
}

fn load_asset(path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .ok_or_else(|| AssetError::Missing(path.to_string()))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}
