use data::UploadPolicy;
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::app::WidgetState;

fn first_dropped(ev: &DragEvent) -> Option<File> {
    ev.data_transfer()?.files()?.get(0)
}

fn first_selected(ev: &Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    // Picking the same file twice in a row must still fire `change`.
    input.set_value("");
    file
}

#[component]
pub fn UploadPanel(state: WidgetState, button_text: String, policy: UploadPolicy) -> impl IntoView {
    let file_input = NodeRef::<Input>::new();
    let (drag_over, set_drag_over) = signal(false);
    let hint = policy.hint();
    let accept = policy.accept();

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        if let Some(file) = first_dropped(&ev) {
            state.choose_file(file);
        }
    };

    view! {
        <h2 class="clip-search-title">"Encontrá productos similares"</h2>
        <p class="clip-search-subtitle">"Subí una foto y te mostramos lo más parecido del catálogo"</p>
        <input
            type="file"
            accept=accept
            style="display: none;"
            node_ref=file_input
            on:change=move |ev| {
                if let Some(file) = first_selected(&ev) {
                    state.choose_file(file);
                }
            }
        />
        <Show
            when=move || state.has_image.get()
            fallback=move || {
                let hint = hint.clone();
                view! {
                    <div
                        class="clip-upload-area"
                        class:drag-over=move || drag_over.get()
                        on:click=open_picker
                        on:dragover=move |ev: DragEvent| {
                            ev.prevent_default();
                            set_drag_over.set(true);
                        }
                        on:dragleave=move |_| set_drag_over.set(false)
                        on:drop=on_drop
                    >
                        <div class="clip-upload-icon">"📤"</div>
                        <div class="clip-upload-text">"Arrastrá una imagen o hacé click para seleccionar"</div>
                        <div class="clip-upload-hint">{hint}</div>
                    </div>
                }
            }
        >
            <div class="clip-preview">
                <div class="clip-preview-container">
                    <Show when=move || state.preview.with(Option::is_some) fallback=|| ()>
                        <img src=move || state.preview.get().unwrap_or_default() alt="Vista previa" />
                    </Show>
                    <button
                        class="clip-remove-btn"
                        title="Quitar imagen"
                        on:click=move |_| state.remove_image()
                    >
                        "×"
                    </button>
                </div>
            </div>
        </Show>
        <button
            class="clip-search-btn"
            disabled=move || !state.has_image.get() || state.is_searching()
            on:click=move |_| state.search_image()
        >
            {button_text}
        </button>
    }
}
