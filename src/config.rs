//! Runtime settings read from `<meta>` tags in the HTML shell.

use wasm_bindgen::JsCast;

pub const API_BASE_META: &str = "nutrisnap-api-base";
pub const MAX_UPLOAD_META: &str = "nutrisnap-max-upload-mb";

const DEFAULT_MAX_UPLOAD_MB: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every endpoint; empty means the hosting origin.
    pub api_base: String,
    pub max_upload_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

impl ClientConfig {
    /// Build a config from a meta-tag lookup, falling back to defaults for
    /// anything missing or malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base = lookup(API_BASE_META)
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let max_upload_bytes = lookup(MAX_UPLOAD_META)
            .and_then(|mb| mb.trim().parse::<u64>().ok())
            .filter(|mb| *mb > 0)
            .and_then(|mb| mb.checked_mul(1024 * 1024))
            .unwrap_or(defaults.max_upload_bytes);

        Self { api_base, max_upload_bytes }
    }

    pub fn from_document() -> Self {
        Self::from_lookup(read_meta)
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element
        .dyn_into::<web_sys::HtmlMetaElement>()
        .ok()
        .map(|meta| meta.content())
}
