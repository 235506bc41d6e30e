use data::ResultsView;
use leptos::prelude::*;

use crate::product_card::ProductTile;

#[component]
pub fn ProductGrid(results: ResultsView) -> impl IntoView {
    let ResultsView { count_label, layout, cards } = results;

    view! {
        <div class="clip-results">
            <div class="clip-results-header">
                <h3 class="clip-results-title">"✨ Productos Encontrados"</h3>
                <span class="clip-results-count">{count_label}</span>
            </div>
            <div class=layout.class()>
                <For
                    each=move || cards.clone()
                    key=|card| card.key.clone()
                    children=move |card| view! { <ProductTile card=card /> }
                />
            </div>
        </div>
    }
}
