use data::SearchTab;
use leptos::prelude::*;

#[component]
pub fn TabBar(
    tab: RwSignal<SearchTab>,
    on_switch: impl Fn(SearchTab) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div class="clip-tabs">
            <button
                class="clip-tab"
                class:active=move || tab.get() == SearchTab::Image
                on:click=move |_| on_switch(SearchTab::Image)
            >
                <span>"📸"</span>
                <span>"Buscar por Imagen"</span>
            </button>
            <button
                class="clip-tab"
                class:active=move || tab.get() == SearchTab::Text
                on:click=move |_| on_switch(SearchTab::Text)
            >
                <span>"🔍"</span>
                <span>"Buscar por Texto"</span>
            </button>
        </div>
    }
}
