//! Page Commands
//!
//! Reads settings embedded in `index.html`.

use widget_core::WidgetConfig;

/// Id of the `<script type="application/json">` holding config overrides
pub const CONFIG_ELEMENT_ID: &str = "widget-config";

/// Config from the page, or the defaults when the element is missing
pub fn load_config() -> WidgetConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) => WidgetConfig::from_json(&raw),
        None => {
            log::debug!("no #{} element, using default config", CONFIG_ELEMENT_ID);
            WidgetConfig::default()
        }
    }
}
