//! API integration tests
//!
//! These run against a live server seeded with the sample data:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3001/api/v1";

/// Helper to get an authenticated token for a sample user
async fn get_auth_token(client: &Client, email: &str, password: &str) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": email,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["data"]["token"]
        .as_str()
        .expect("No token in response")
        .to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "john.doe@example.com",
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["data"]["token"].is_string());
    assert_eq!(body["data"]["user"]["email"], "john.doe@example.com");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "john.doe@example.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_get_current_user() {
    let client = Client::new();
    let token = get_auth_token(&client, "jane.smith@example.com", "password123").await;

    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "jane.smith@example.com");
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["data"].is_array());
    assert!(body["pagination"]["total"].is_number());
    assert!(body["pagination"]["totalPages"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_search_books_by_genre() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/books?genre=Science%20Fiction&sortBy=year&sortOrder=asc",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body["data"].as_array().expect("No book array");
    assert!(!books.is_empty());
    for book in books {
        assert_eq!(book["genre"], "Science Fiction");
    }
}

#[tokio::test]
#[ignore]
async fn test_list_books_rejects_bad_limit() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books?limit=500", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_get_book_not_found() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/books/00000000-0000-0000-0000-000000000000",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore]
async fn test_rent_requires_authentication() {
    let client = Client::new();

    let response = client
        .post(format!(
            "{}/books/00000000-0000-0000-0000-000000000000/rent",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_rent_and_return_cycle() {
    let client = Client::new();
    let token = get_auth_token(&client, "admin@library.com", "admin123").await;

    // Pick a book with available copies
    let response = client
        .get(format!("{}/books?limit=100", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let book = body["data"]
        .as_array()
        .expect("No book array")
        .iter()
        .find(|b| b["availableCopies"].as_u64().unwrap_or(0) > 0)
        .expect("No available book in sample data")
        .clone();
    let book_id = book["id"].as_str().expect("No book ID");

    // Rent it
    let response = client
        .post(format!("{}/books/{}/rent", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let rental_id = body["data"]["id"].as_str().expect("No rental ID").to_string();
    assert_eq!(body["data"]["isReturned"], false);

    // Renting the same book again conflicts
    let response = client
        .post(format!("{}/books/{}/rent", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // The rental shows up in the user's books
    let me: Value = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let user_id = me["data"]["id"].as_str().expect("No user ID");

    let body: Value = client
        .get(format!("{}/users/{}/books", BASE_URL, user_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let rentals = body["data"].as_array().expect("No rental array");
    assert!(rentals.iter().any(|r| r["rentalId"] == rental_id.as_str()));

    // Return it
    let response = client
        .post(format!("{}/rentals/{}/return", BASE_URL, rental_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["isReturned"], true);

    // A second return is rejected
    let response = client
        .post(format!("{}/rentals/{}/return", BASE_URL, rental_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_cannot_view_other_users_books() {
    let client = Client::new();
    let token = get_auth_token(&client, "john.doe@example.com", "password123").await;

    let response = client
        .get(format!(
            "{}/users/00000000-0000-0000-0000-000000000000/books",
            BASE_URL
        ))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_email() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "email": "john.doe@example.com",
            "password": "another-password",
            "firstName": "John",
            "lastName": "Impostor"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}
