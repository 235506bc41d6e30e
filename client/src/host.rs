//! Everything that touches the host page outside the widget's own subtree.

use data::{ConfigError, RawWidgetConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::styles::{STYLE_ELEMENT_ID, STYLESHEET};

/// Name of the global the host page may set before loading the script.
pub const GLOBAL_CONFIG: &str = "CLIPWidget";

/// Id shared by every container that configures itself through `data-*` attributes.
pub const DECLARED_CONTAINER_ID: &str = "clip-search-widget";

pub fn window() -> Result<Window, ConfigError> {
    web_sys::window().ok_or_else(|| ConfigError::InvalidConfig("no window".into()))
}

pub fn document() -> Result<Document, ConfigError> {
    window()?
        .document()
        .ok_or_else(|| ConfigError::InvalidConfig("no document".into()))
}

pub fn parse_config(value: JsValue) -> Result<RawWidgetConfig, ConfigError> {
    if value.is_undefined() || value.is_null() {
        return Err(ConfigError::MissingConfig);
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| ConfigError::InvalidConfig(err.to_string()))
}

/// Reads `window.CLIPWidget`. `Ok(None)` when the page did not set it.
pub fn global_config() -> Result<Option<RawWidgetConfig>, ConfigError> {
    let window: JsValue = window()?.into();
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_CONFIG))
        .map_err(|err| ConfigError::InvalidConfig(format!("{err:?}")))?;
    match parse_config(value) {
        Ok(raw) => Ok(Some(raw)),
        Err(ConfigError::MissingConfig) => Ok(None),
        Err(err) => Err(err),
    }
}

pub fn container(document: &Document, id: &str) -> Result<HtmlElement, ConfigError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ConfigError::MissingContainer(id.to_string()))
}

/// All `id="clip-search-widget"` elements. Pages repeat the id to get several widgets.
pub fn declared_containers(document: &Document) -> Result<Vec<HtmlElement>, ConfigError> {
    let nodes = document
        .query_selector_all(&format!("[id=\"{DECLARED_CONTAINER_ID}\"]"))
        .map_err(|err| ConfigError::InvalidConfig(format!("{err:?}")))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Config of a declared container: `data-api-key` and optional `data-server-url`.
pub fn attribute_config(element: &HtmlElement) -> RawWidgetConfig {
    RawWidgetConfig {
        api_key: element.get_attribute("data-api-key"),
        server_url: element.get_attribute("data-server-url"),
        container_id: Some(DECLARED_CONTAINER_ID.to_string()),
        ..RawWidgetConfig::default()
    }
}

/// Appends the stylesheet to `<head>` unless an earlier mount already did.
pub fn inject_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLESHEET));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?
            .append_child(&style)?,
    };
    Ok(())
}
