use clip_widget::{host::DECLARED_CONTAINER_ID, mount_declared, mount_widget, mounted_count, styles::STYLE_ELEMENT_ID};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fresh_container(id: &str) -> web_sys::Element {
    let document = document();
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let div = document.create_element("div").unwrap();
    div.set_id(id);
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn config(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

#[wasm_bindgen_test]
fn missing_api_key_leaves_container_untouched() {
    let container = fresh_container("no-key");
    let handle = mount_widget(config(r#"{"containerId": "no-key"}"#));
    assert!(handle.is_none());
    assert_eq!(container.inner_html(), "");
}

#[wasm_bindgen_test]
fn missing_container_is_not_mounted() {
    let handle = mount_widget(config(r#"{"apiKey": "k", "containerId": "does-not-exist"}"#));
    assert!(handle.is_none());
}

#[wasm_bindgen_test]
fn mounting_twice_replaces_previous_widget() {
    let container = fresh_container("twice");
    let json = r#"{"apiKey": "k", "containerId": "twice"}"#;

    let before = mounted_count();
    let _first = mount_widget(config(json)).unwrap();
    let after_first = container.inner_html();
    let second = mount_widget(config(json)).unwrap();

    assert!(after_first.contains("clip-tabs"));
    assert_eq!(container.inner_html(), after_first);
    assert_eq!(container.query_selector_all(".clip-widget-wrap").unwrap().length(), 1);
    assert_eq!(mounted_count(), before + 1);

    second.unmount();
    assert_eq!(mounted_count(), before);
}

#[wasm_bindgen_test]
fn declared_containers_mount_from_data_attributes() {
    let document = document();
    let body = document.body().unwrap();
    let keyed: Vec<_> = (0..2)
        .map(|_| {
            let div = document.create_element("div").unwrap();
            div.set_id(DECLARED_CONTAINER_ID);
            div.set_attribute("data-api-key", "k").unwrap();
            div.set_attribute("data-server-url", "http://localhost:5000").unwrap();
            body.append_child(&div).unwrap();
            div
        })
        .collect();
    let keyless = document.create_element("div").unwrap();
    keyless.set_id(DECLARED_CONTAINER_ID);
    body.append_child(&keyless).unwrap();

    assert_eq!(mount_declared(), 2);
    for div in &keyed {
        assert_eq!(div.query_selector_all(".clip-widget-wrap").unwrap().length(), 1);
    }
    assert_eq!(keyless.inner_html(), "");

    for div in keyed.iter().chain([&keyless]) {
        div.remove();
    }
}

#[wasm_bindgen_test]
fn stylesheet_is_injected_once() {
    fresh_container("styled-a");
    fresh_container("styled-b");
    let _a = mount_widget(config(r#"{"apiKey": "k", "containerId": "styled-a"}"#)).unwrap();
    let _b = mount_widget(config(r#"{"apiKey": "k", "containerId": "styled-b"}"#)).unwrap();

    let styles = document()
        .query_selector_all(&format!("style#{STYLE_ELEMENT_ID}"))
        .unwrap();
    assert_eq!(styles.length(), 1);
}

#[wasm_bindgen_test]
fn examples_render_as_chips() {
    let container = fresh_container("chips");
    let _handle = mount_widget(config(
        r#"{"apiKey": "k", "containerId": "chips", "examples": ["camisa azul", "zapatos negros"]}"#,
    ))
    .unwrap();

    let chips = container.query_selector_all(".clip-example-tag").unwrap();
    assert_eq!(chips.length(), 2);
    assert_eq!(chips.get(0).unwrap().text_content().as_deref(), Some("camisa azul"));
}
