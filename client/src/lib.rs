//! Embeddable product search widget: image upload or free text, matched by CLIP on the server.
//!
//! Loading the generated module mounts one widget when the host page sets
//! `window.CLIPWidget`, plus one per `id="clip-search-widget"` element with a
//! `data-api-key` attribute. Further widgets can be mounted with [`mount_widget`].

pub mod app;
mod feedback;
pub mod host;
mod preview;
mod product_card;
mod product_grid;
mod registry;
pub mod styles;
mod tabs;
mod text_panel;
pub mod transport;
mod upload_panel;

use data::{ConfigError, WidgetConfig};
use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::app::Widget;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let document = match host::document() {
        Ok(document) => document,
        Err(err) => {
            error!("{err}");
            return;
        }
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || boot());
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            error!("cannot wait for DOMContentLoaded: {err:?}");
        }
    } else {
        boot();
    }
}

fn boot() {
    boot_from_global();
    mount_declared();
}

fn boot_from_global() {
    let raw = match host::global_config() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("window.{} not set, waiting for mount_widget", host::GLOBAL_CONFIG);
            return;
        }
        Err(err) => {
            error!("{err}");
            return;
        }
    };
    if let Err(err) = raw.resolve().and_then(mount) {
        error!("{err}");
    }
}

/// Mounts a widget into every `id="clip-search-widget"` element carrying a
/// `data-api-key`. Containers without a key are left untouched. Returns the
/// number of widgets mounted.
pub fn mount_declared() -> usize {
    let containers = match host::document().and_then(|document| host::declared_containers(&document)) {
        Ok(containers) => containers,
        Err(err) => {
            error!("{err}");
            return 0;
        }
    };
    containers
        .into_iter()
        .filter(|container| match host::attribute_config(container).resolve() {
            Ok(config) => mount_into(container.clone(), config).is_ok(),
            Err(err) => {
                error!("#{}: {err}", host::DECLARED_CONTAINER_ID);
                false
            }
        })
        .count()
}

/// Refers to a mounted widget. Dropping the handle leaves the widget in place.
#[wasm_bindgen]
pub struct WidgetHandle {
    id: u64,
}

#[wasm_bindgen]
impl WidgetHandle {
    pub fn unmount(&self) {
        if registry::release(self.id) {
            info!("widget unmounted");
        }
    }
}

/// Mounts a widget from a plain JS config object. Returns `undefined` and logs the reason
/// when the config or the container is unusable.
#[wasm_bindgen]
pub fn mount_widget(config: JsValue) -> Option<WidgetHandle> {
    match host::parse_config(config).and_then(|raw| raw.resolve()).and_then(mount) {
        Ok(handle) => Some(handle),
        Err(err) => {
            error!("{err}");
            None
        }
    }
}

/// Number of widgets currently mounted on the page.
pub fn mounted_count() -> usize {
    registry::count()
}

/// Replaces the content of the element with id `config.container_id` with a fresh widget.
pub fn mount(config: WidgetConfig) -> Result<WidgetHandle, ConfigError> {
    let document = host::document()?;
    let container = host::container(&document, &config.container_id)?;
    mount_into(container, config)
}

fn mount_into(container: HtmlElement, config: WidgetConfig) -> Result<WidgetHandle, ConfigError> {
    let document = host::document()?;
    if let Err(err) = host::inject_styles(&document) {
        error!("cannot inject widget styles: {err:?}");
    }
    if registry::release_container(&container) > 0 {
        debug!("previous widget in #{} released", config.container_id);
    }
    container.set_inner_html("");

    let container_id = config.container_id.clone();
    let handle = leptos::mount::mount_to(container.clone(), move || view! { <Widget config=config.clone() /> });
    info!("widget mounted in #{container_id}");

    Ok(WidgetHandle { id: registry::register(container, Box::new(handle)) })
}
