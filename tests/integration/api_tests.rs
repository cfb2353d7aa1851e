//! API integration tests
//!
//! Each test starts its own server on an ephemeral port, seeded with two books.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use livres_server::{
    api,
    models::SeedBook,
    repository::{BookStore, Repository},
    AppState,
};

fn seed() -> Vec<SeedBook> {
    serde_json::from_value(json!([
        {"nom": "Le Petit Prince", "auteur": "Antoine de Saint-Exupéry", "editeur": "Gallimard"},
        {"nom": "L'Étranger", "auteur": "Albert Camus", "editeur": "Gallimard"}
    ]))
    .expect("valid seed")
}

/// Start a server and return its base URL
async fn spawn_server() -> String {
    let state = AppState::new(Repository::new(BookStore::from_seed(seed())));
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{}", addr)
}

async fn total(client: &Client, base: &str) -> u64 {
    let body: Value = client
        .get(format!("{}/total_livres", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    body["total"].as_u64().expect("total is a number")
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server().await;
    let response = Client::new()
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 2);
}

#[tokio::test]
async fn test_seeded_store() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/total_livres", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"total": 2}));

    let response = client
        .get(format!("{}/livre/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({"id": 1, "nom": "Le Petit Prince", "auteur": "Antoine de Saint-Exupéry", "editeur": "Gallimard"})
    );

    let response = client
        .get(format!("{}/livre/99", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_list_books() {
    let base = spawn_server().await;
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/Livres", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let books = body.as_array().expect("array of books");
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["id"], 1);
    assert_eq!(books[1]["id"], 2);
    assert_eq!(books[1]["nom"], "L'Étranger");
    assert_eq!(books.len() as u64, total(&client, &base).await);
}

#[tokio::test]
async fn test_create_book() {
    let base = spawn_server().await;
    let client = Client::new();
    let payload = json!({"id": 3, "nom": "X", "auteur": "Y", "editeur": "Z"});

    let response = client
        .post(format!("{}/livre/", base))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, payload);

    assert_eq!(total(&client, &base).await, 3);

    let body: Value = client
        .get(format!("{}/livre/3", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_create_without_trailing_slash() {
    let base = spawn_server().await;
    let client = Client::new();
    let payload = json!({"id": 4, "nom": "X", "auteur": "Y", "editeur": "Z"});

    let response = client
        .post(format!("{}/livre", base))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, payload);
    assert_eq!(total(&client, &base).await, 3);
}

#[tokio::test]
async fn test_create_duplicate_id() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/livre/", base))
        .json(&json!({"id": 1, "nom": "X", "auteur": "Y", "editeur": "Z"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Le livre avec l'ID 1 existe déjà !");

    assert_eq!(total(&client, &base).await, 2);
}

#[tokio::test]
async fn test_create_blank_fields() {
    let base = spawn_server().await;
    let client = Client::new();

    for blank in ["", " ", "\t"] {
        for payload in [
            json!({"id": 3, "nom": blank, "auteur": "Y", "editeur": "Z"}),
            json!({"id": 3, "nom": "X", "auteur": blank, "editeur": "Z"}),
            json!({"id": 3, "nom": "X", "auteur": "Y", "editeur": blank}),
        ] {
            let response = client
                .post(format!("{}/livre/", base))
                .json(&payload)
                .send()
                .await
                .expect("Failed to send request");
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    assert_eq!(total(&client, &base).await, 2);
}

#[tokio::test]
async fn test_create_malformed_body() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/livre/", base))
        .json(&json!({"id": 3, "nom": "X"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(total(&client, &base).await, 2);
}

#[tokio::test]
async fn test_update_forces_path_id() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/livre/1", base))
        .json(&json!({"id": 5, "nom": "A", "auteur": "B", "editeur": "C"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"id": 1, "nom": "A", "auteur": "B", "editeur": "C"}));

    let body: Value = client
        .get(format!("{}/livre/1", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body, json!({"id": 1, "nom": "A", "auteur": "B", "editeur": "C"}));

    let response = client
        .get(format!("{}/livre/5", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(total(&client, &base).await, 2);
}

#[tokio::test]
async fn test_update_errors() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/livre/42", base))
        .json(&json!({"id": 42, "nom": "A", "auteur": "B", "editeur": "C"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for blank in ["", " ", "\t"] {
        for payload in [
            json!({"id": 1, "nom": blank, "auteur": "B", "editeur": "C"}),
            json!({"id": 1, "nom": "A", "auteur": blank, "editeur": "C"}),
            json!({"id": 1, "nom": "A", "auteur": "B", "editeur": blank}),
        ] {
            let response = client
                .put(format!("{}/livre/1", base))
                .json(&payload)
                .send()
                .await
                .expect("Failed to send request");
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    let body: Value = client
        .get(format!("{}/livre/1", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["nom"], "Le Petit Prince");
    assert_eq!(body["auteur"], "Antoine de Saint-Exupéry");
    assert_eq!(body["editeur"], "Gallimard");
}

#[tokio::test]
async fn test_delete_twice() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/livre/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], 1);
    assert_eq!(body["nom"], "Le Petit Prince");

    let response = client
        .delete(format!("{}/livre/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Le livre 1 n'existe pas.");

    assert_eq!(total(&client, &base).await, 1);
}

#[tokio::test]
async fn test_invalid_path_ids() {
    let base = spawn_server().await;
    let client = Client::new();

    for id in ["0", "-1", "abc"] {
        let response = client
            .get(format!("{}/livre/{}", base, id))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "id {id}");

        let response = client
            .delete(format!("{}/livre/{}", base, id))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "id {id}");
    }

    assert_eq!(total(&client, &base).await, 2);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let base = spawn_server().await;
    let response = Client::new()
        .get(format!("{}/openapi.json", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["paths"]["/Livres"].is_object());
}
