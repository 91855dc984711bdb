use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::model::error::ErrorBody;
use common::model::product::Product;
use serde_json::json;

use super::configure_routes;
use crate::store::ids::ShortIdGenerator;
use crate::store::{seed, ProductStore};

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data($store.clone())
                .service(configure_routes(64 * 1024)),
        )
        .await
    };
}

fn empty_store() -> web::Data<ProductStore> {
    web::Data::new(ProductStore::new(ShortIdGenerator::default()))
}

fn test_payload() -> serde_json::Value {
    json!({
        "name": "Тест",
        "category": "Тест",
        "description": "Тест",
        "price": 100,
        "stock": 5
    })
}

#[actix_web::test]
async fn full_lifecycle_of_a_product() {
    let store = empty_store();
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(test_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 6);
    assert_eq!(created["name"], "Тест");
    assert_eq!(created["price"], 100);
    assert_eq!(created["stock"], 5);

    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{id}"))
        .to_request();
    let fetched: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/products/{id}"))
        .set_json(json!({ "stock": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(patched["stock"], 3);
    assert_eq!(patched["name"], created["name"]);
    assert_eq!(patched["category"], created["category"]);
    assert_eq!(patched["description"], created["description"]);
    assert_eq!(patched["price"], created["price"]);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/products/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.error, "Товар не найден");
}

#[actix_web::test]
async fn create_without_category_is_rejected() {
    let store = empty_store();
    let app = app!(store);
    let mut payload = test_payload();
    payload.as_object_mut().unwrap().remove("category");

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Все поля обязательны" }));
    assert_eq!(store.len().await, 0);
}

#[actix_web::test]
async fn create_trims_and_casts() {
    let store = empty_store();
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "name": "  Мышь Razer ",
            "category": " Аксессуары",
            "description": "игровая ",
            "price": "3200",
            "stock": "9"
        }))
        .to_request();
    let created: Product = test::call_and_read_body_json(&app, req).await;

    assert_eq!(created.name, "Мышь Razer");
    assert_eq!(created.category, "Аксессуары");
    assert_eq!(created.description, "игровая");
    assert_eq!(created.price, 3200.0);
    assert_eq!(created.stock, 9);
    assert_eq!(store.list().await, vec![created]);
}

#[actix_web::test]
async fn create_assigns_an_id_that_was_not_in_the_store() {
    let store = web::Data::new(seed::products());
    let app = app!(store);
    let before = store.list().await;

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(test_payload())
        .to_request();
    let created: Product = test::call_and_read_body_json(&app, req).await;

    assert!(before.iter().all(|p| p.id != created.id));
    let after = store.list().await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&created));
}

#[actix_web::test]
async fn list_returns_the_seeded_catalogue_in_order() {
    let store = web::Data::new(seed::products());
    let app = app!(store);

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let products: Vec<Product> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(products, store.list().await);
    assert_eq!(products.len(), 10);
}

#[actix_web::test]
async fn unknown_ids_are_404_and_change_nothing() {
    let store = web::Data::new(seed::products());
    let app = app!(store);
    let before = store.list().await;

    let requests = [
        test::TestRequest::get().uri("/api/products/nope42"),
        test::TestRequest::patch()
            .uri("/api/products/nope42")
            .set_json(json!({ "stock": 1 })),
        test::TestRequest::delete().uri("/api/products/nope42"),
    ];
    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Товар не найден");
    }

    assert_eq!(store.list().await, before);
}

#[actix_web::test]
async fn repeating_a_patch_gives_the_same_record() {
    let store = web::Data::new(seed::products());
    let app = app!(store);
    let target = store.list().await[2].clone();

    let mut results = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::patch()
            .uri(&format!("/api/products/{}", target.id))
            .set_json(json!({ "name": " Смартфон Galaxy ", "price": 33000 }))
            .to_request();
        let product: Product = test::call_and_read_body_json(&app, req).await;
        results.push(product);
    }

    assert_eq!(results[0], results[1]);
    assert_eq!(results[0].name, "Смартфон Galaxy");
    assert_eq!(results[0].price, 33000.0);
    assert_eq!(results[0].category, target.category);
    assert_eq!(results[0].stock, target.stock);
}

#[actix_web::test]
async fn invalid_patch_is_rejected_whole() {
    let store = web::Data::new(seed::products());
    let app = app!(store);
    let target = store.list().await[0].clone();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/products/{}", target.id))
        .set_json(json!({ "name": "Новое имя", "stock": -1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.get(&target.id).await.unwrap(), target);
}

#[actix_web::test]
async fn deleting_twice_is_404_the_second_time() {
    let store = web::Data::new(seed::products());
    let app = app!(store);
    let target = store.list().await[4].clone();
    let uri = format!("/api/products/{}", target.id);

    let first = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    let second = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;

    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.len().await, 9);
}

#[actix_web::test]
async fn malformed_json_is_a_json_400() {
    let store = empty_store();
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.error, "Некорректное тело запроса");
}

#[actix_web::test]
async fn blank_numeric_string_counts_as_missing() {
    let store = empty_store();
    let app = app!(store);
    let mut payload = test_payload();
    payload["stock"] = json!("");

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.error, "Все поля обязательны");
    assert_eq!(store.len().await, 0);
}
