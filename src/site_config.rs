use web_sys::Document;

use folio_core::{SiteConfig, CONFIG_ELEMENT_ID};

/// Reads the optional JSON block `<script type="application/json" id="folio-config">`.
pub(crate) fn load_site_config(document: &Document) -> SiteConfig {
    let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let raw = block.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return SiteConfig::default();
    }
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("folio: config ignored", err.to_string());
            SiteConfig::default()
        }
    }
}
