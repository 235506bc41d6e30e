use criterion::{criterion_group, criterion_main, Criterion};
use data::presenter::{present, PresenterOptions};
use data::SearchResponse;
use std::hint::black_box;

fn sample_body(products: usize) -> String {
    let results: Vec<String> = (0..products)
        .map(|i| {
            format!(
                r#"{{"product_id": {i}, "name": "Camisa {i}", "sku": "SKU-{i}", "image_url": "https://cdn.example/{i}.jpg",
                    "price": {i}.5, "stock": {stock}, "similarity": 0.{i:02}, "category": "camisas",
                    "attributes": {{"color_principal": "azul", "talle": {{"value": "M", "visible": true}},
                                    "url_producto": "https://tienda.example/{i}"}}}}"#,
                stock = i % 3
            )
        })
        .collect();
    format!(r#"{{"success": true, "total_results": {products}, "results": [{}]}}"#, results.join(","))
}

fn bench_decode_and_present(c: &mut Criterion) {
    let body = sample_body(50);
    c.bench_function("decode and present 50 products", |b| {
        b.iter(|| {
            let response: SearchResponse = serde_json::from_str(black_box(&body)).unwrap();
            present(&response, &PresenterOptions::default())
        })
    });

    let response: SearchResponse = serde_json::from_str(&body).unwrap();
    c.bench_function("present 50 decoded products", |b| {
        b.iter(|| present(black_box(&response), &PresenterOptions::default()))
    });
}

criterion_group!(benches, bench_decode_and_present);
criterion_main!(benches);
