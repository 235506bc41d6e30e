use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::app::WidgetState;

#[component]
pub fn TextPanel(state: WidgetState, examples: Vec<String>) -> impl IntoView {
    let on_key_down = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            state.search_text();
        }
    };

    view! {
        <h2 class="clip-search-title">"Describí lo que buscás"</h2>
        <p class="clip-search-subtitle">"Escribí con tus palabras y encontramos productos que coincidan"</p>
        <div class="clip-input-wrap">
            <span class="clip-input-icon">"🔍"</span>
            <input
                class="clip-input"
                type="text"
                placeholder="Ej: remera blanca con estampado"
                prop:value=move || state.text.get()
                on:input=move |ev| state.text.set(event_target_value(&ev))
                on:keydown=on_key_down
            />
        </div>
        <button
            class="clip-search-btn"
            disabled=move || state.is_searching()
            on:click=move |_| state.search_text()
        >
            "Buscar"
        </button>
        {(!examples.is_empty()).then(|| {
            view! {
                <div class="clip-examples">
                    <div class="clip-examples-label">"Probá con:"</div>
                    {examples
                        .into_iter()
                        .map(|example| {
                            let query = example.clone();
                            view! {
                                <button
                                    class="clip-example-tag"
                                    on:click=move |_| state.search_example(query.clone())
                                >
                                    {example}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })}
    }
}
