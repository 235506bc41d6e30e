//! Loading indicator, inline notices and the two non-result outcomes.

use data::presenter::{CategoryErrorView, RefinementPrompt};
use leptos::prelude::*;

#[component]
pub fn Loading(active: Signal<bool>) -> impl IntoView {
    view! {
        <div class="clip-loading" class:active=move || active.get()>
            <div class="clip-spinner"></div>
            <div class="clip-loading-text">"Buscando productos similares..."</div>
        </div>
    }
}

/// Validation and submit messages that do not replace the results area.
#[component]
pub fn Notice(notice: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || notice.with(Option::is_some) fallback=|| ()>
            <div class="clip-notice">{move || notice.get().unwrap_or_default()}</div>
        </Show>
    }
}

#[component]
pub fn RefinementPanel(
    prompt: RefinementPrompt,
    on_pick: impl Fn(String) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let RefinementPrompt { message, groups } = prompt;

    view! {
        <div class="clip-refinement">
            <div>"💡 " {message}</div>
            {groups
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="clip-chip-group">
                            <div class="clip-chip-group-label">{group.facet.label()}</div>
                            {group
                                .chips
                                .into_iter()
                                .map(|chip| {
                                    let pick = chip.clone();
                                    view! {
                                        <button class="clip-chip" on:click=move |_| on_pick(pick.clone())>
                                            {chip}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn CategoryErrorPanel(error: CategoryErrorView) -> impl IntoView {
    let CategoryErrorView { message, details, categories } = error;

    view! {
        <div class="clip-category-error">
            <div>"⚠️ " {message}</div>
            <div class="clip-category-details">{details}</div>
            <div>
                {categories
                    .into_iter()
                    .map(|category| view! { <span class="clip-category-tag">{category}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
