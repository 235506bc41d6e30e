use data::presenter::{AttributeRow, StockIndicator};
use data::ProductCard;
use leptos::prelude::*;

#[component]
pub fn ProductTile(card: ProductCard) -> impl IntoView {
    let ProductCard {
        name,
        image_url,
        category,
        sku,
        price,
        stock,
        similarity,
        attributes,
        product_url,
        ..
    } = card;
    let alt = name.clone();

    view! {
        <div class="clip-product">
            <div class="clip-product-img-wrap">
                {image_url.map(|src| {
                    view! { <img class="clip-product-img" src=src alt=alt loading="lazy" /> }
                })}
                {similarity.map(|score| view! { <div class="clip-similarity-badge">{score}</div> })}
            </div>
            <div class="clip-product-info">
                <div class="clip-product-category">{category}</div>
                <div class="clip-product-name">{name}</div>
                {sku.map(|sku| view! { <div class="clip-product-sku">"SKU: " {sku}</div> })}
                <div class="clip-product-price">{price}</div>
                {stock.map(|StockIndicator { in_stock, label }| {
                    view! {
                        <div class="clip-product-stock" class:in-stock=in_stock>
                            {label}
                        </div>
                    }
                })}
                {(!attributes.is_empty()).then(|| {
                    view! {
                        <ul class="clip-attributes">
                            {attributes
                                .into_iter()
                                .map(|AttributeRow { label, value }| {
                                    view! {
                                        <li>
                                            <span class="clip-attribute-label">{label} ":"</span>
                                            {value}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                })}
                {product_url.map(|href| {
                    view! {
                        <a class="clip-product-link" href=href target="_blank" rel="noopener noreferrer">
                            "Ver producto →"
                        </a>
                    }
                })}
            </div>
        </div>
    }
}
