//! API integration tests.
//!
//! Drive the full router (extractors, services, error mapping) over
//! in-memory repositories and a counting object store.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use uuid::Uuid;

use common::{upload_request, Part, TestApp};
use realty_api::config::MAX_UPLOAD_BYTES;
use realty_api::domain::{PhotoSlot, Role, SettingsInput};

fn titles(body: &Value) -> Vec<String> {
    body["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

fn jpeg(size: usize) -> Part<'static> {
    Part::File {
        name: "file",
        file_name: "front.jpg",
        content_type: "image/jpeg",
        bytes: vec![0xFF; size],
    }
}

// =============================================================================
// Health and root
// =============================================================================

#[tokio::test]
async fn test_root() {
    let app = TestApp::new();
    let (status, _) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_degraded_without_database() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
}

// =============================================================================
// Authentication and authorization
// =============================================================================

#[tokio::test]
async fn test_write_without_session_is_unauthorized() {
    let app = TestApp::new();
    let (status, body) = app
        .json("POST", "/api/properties", None, json!({ "title": "Loft" }))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = TestApp::new();
    let (status, _) = app
        .json(
            "POST",
            "/api/properties",
            Some("not.a.token"),
            json!({ "title": "Loft" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unauthorized_wins_over_invalid_body() {
    let app = TestApp::new();
    let (status, _) = app
        .json("POST", "/api/properties", None, json!({ "bedrooms": -4 }))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_cookie_is_accepted() {
    let app = TestApp::new();
    let token = app.token_for(Role::Admin);

    let request = Request::post("/api/properties")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, format!("theme=dark; sb-access-token={}", token))
        .body(Body::from(json!({ "title": "Cookie cottage" }).to_string()))
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["property"]["title"], "Cookie cottage");
}

#[tokio::test]
async fn test_viewer_cannot_create_property() {
    let app = TestApp::new();
    let viewer = app.token_for(Role::Viewer);

    let (status, body) = app
        .json("POST", "/api/properties", Some(&viewer), json!({ "title": "Loft" }))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (_, listing) = app.get("/api/properties").await;
    assert_eq!(listing["properties"], json!([]));
}

#[tokio::test]
async fn test_user_without_profile_is_treated_as_viewer() {
    let app = TestApp::new();
    let token = app.token_without_profile();

    let (status, _) = app
        .json("POST", "/api/properties", Some(&token), json!({ "title": "Loft" }))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_forbidden_wins_over_invalid_body() {
    let app = TestApp::new();
    let viewer = app.token_for(Role::Viewer);

    let (status, _) = app
        .json("POST", "/api/properties", Some(&viewer), json!({ "title": "" }))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_current_profile() {
    let app = TestApp::new();
    let token = app.token_for(Role::Photographer);

    let request = Request::get("/api/auth/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["role"], "photographer");
}

#[tokio::test]
async fn test_current_profile_requires_session() {
    let app = TestApp::new();
    let (status, _) = app.get("/api/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_profile_missing_row_is_not_found() {
    let app = TestApp::new();
    let token = app.token_without_profile();

    let request = Request::get("/api/auth/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

// =============================================================================
// Properties
// =============================================================================

#[tokio::test]
async fn test_photographer_creates_property_with_defaults() {
    let app = TestApp::new();
    let photographer = app.token_for(Role::Photographer);

    let (status, body) = app
        .json(
            "POST",
            "/api/properties",
            Some(&photographer),
            json!({ "title": "Riverside flat", "bedrooms": 2, "price": 240000.0 }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let property = &body["property"];
    assert_eq!(property["title"], "Riverside flat");
    assert_eq!(property["status"], "available");
    assert_eq!(property["bedrooms"], 2);
    assert!(property["created_by"].is_string());
    assert!(property["main_photo_url"].is_null());
}

#[tokio::test]
async fn test_create_property_missing_title_is_rejected() {
    let app = TestApp::new();
    let admin = app.token_for(Role::Admin);

    let (status, body) = app
        .json("POST", "/api/properties", Some(&admin), json!({ "city": "Porto" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_listing_is_public_and_newest_first() {
    let app = TestApp::new();
    app.seed_property(json!({ "title": "First" })).await;
    app.seed_property(json!({ "title": "Second" })).await;
    app.seed_property(json!({ "title": "Third" })).await;

    let (status, body) = app.get("/api/properties").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_listing_filters_narrow_the_result() {
    let app = TestApp::new();
    app.seed_property(json!({
        "title": "Alfama loft", "status": "available", "bedrooms": 1,
        "price": 180000.0, "city": "Lisbon", "neighborhood": "Alfama"
    }))
    .await;
    app.seed_property(json!({
        "title": "Belem house", "status": "available", "bedrooms": 4,
        "price": 650000.0, "city": "Lisbon", "neighborhood": "Belem"
    }))
    .await;
    app.seed_property(json!({
        "title": "Ribeira flat", "status": "sold", "bedrooms": 3,
        "price": 300000.0, "city": "Porto", "neighborhood": "Ribeira"
    }))
    .await;

    let (_, all) = app.get("/api/properties").await;
    let (_, lisbon) = app.get("/api/properties?city=LIS").await;
    let (_, big_in_lisbon) = app.get("/api/properties?city=lis&bedrooms=3").await;
    let (_, cheap) = app.get("/api/properties?maxPrice=300000").await;
    let (_, sold) = app.get("/api/properties?status=sold").await;
    let (_, blank) = app.get("/api/properties?city=&status=").await;

    assert_eq!(titles(&all).len(), 3);
    assert_eq!(titles(&lisbon), vec!["Belem house", "Alfama loft"]);
    assert_eq!(titles(&big_in_lisbon), vec!["Belem house"]);
    assert_eq!(titles(&cheap), vec!["Ribeira flat", "Alfama loft"]);
    assert_eq!(titles(&sold), vec!["Ribeira flat"]);
    assert_eq!(titles(&blank).len(), 3);
}

#[tokio::test]
async fn test_listing_with_no_match_is_empty() {
    let app = TestApp::new();
    app.seed_property(json!({ "title": "Loft", "city": "Lisbon" })).await;

    let (status, body) = app.get("/api/properties?city=Atlantis").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["properties"], json!([]));
}

#[tokio::test]
async fn test_listing_rejects_unknown_status() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/properties?status=demolished").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_property_by_id() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft" })).await;

    let (status, body) = app.get(&format!("/api/properties/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["property"]["id"], id.to_string());

    let (status, _) = app.get(&format!("/api/properties/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_id_is_a_validation_error() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/properties/42").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_property() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft", "price": 200000.0 })).await;
    let photographer = app.token_for(Role::Photographer);
    let uri = format!("/api/properties/{}", id);

    let (status, body) = app
        .json("PUT", &uri, Some(&photographer), json!({ "status": "reserved" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["property"]["status"], "reserved");
    assert_eq!(body["property"]["title"], "Loft");

    let (status, _) = app.json("PUT", &uri, Some(&photographer), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_rejects_blank_title() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft" })).await;
    let admin = app.token_for(Role::Admin);

    let (status, body) = app
        .json(
            "PUT",
            &format!("/api/properties/{}", id),
            Some(&admin),
            json!({ "title": "   " }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(app.properties.get(id).unwrap().title, "Loft");
}

#[tokio::test]
async fn test_only_admin_deletes_property() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft" })).await;
    let uri = format!("/api/properties/{}", id);

    let photographer = app.token_for(Role::Photographer);
    let (status, _) = app.json("DELETE", &uri, Some(&photographer), json!({})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = app.token_for(Role::Admin);
    let (status, body) = app.json("DELETE", &uri, Some(&admin), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Property deleted successfully");
    assert!(app.properties.get(id).is_none());

    let (status, _) = app.json("DELETE", &uri, Some(&admin), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Owners
// =============================================================================

#[tokio::test]
async fn test_viewer_cannot_create_owner() {
    let app = TestApp::new();
    let viewer = app.token_for(Role::Viewer);

    let (status, _) = app
        .json("POST", "/api/owners", Some(&viewer), json!({ "name": "Ana" }))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(app.owners.active_count(), 0);
}

#[tokio::test]
async fn test_photographer_cannot_manage_owners() {
    let app = TestApp::new();
    let photographer = app.token_for(Role::Photographer);

    let (status, _) = app
        .json("POST", "/api/owners", Some(&photographer), json!({ "name": "Ana" }))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_owner_capacity() {
    let app = TestApp::new();
    let admin = app.token_for(Role::Admin);

    for name in ["Ana", "Rui"] {
        let (status, _) = app
            .json("POST", "/api/owners", Some(&admin), json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app
        .json("POST", "/api/owners", Some(&admin), json!({ "name": "Marta" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["owner"]["is_active"], true);

    let (status, body) = app
        .json("POST", "/api/owners", Some(&admin), json!({ "name": "Pedro" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CAPACITY_EXCEEDED");
    assert_eq!(app.owners.active_count(), 3);
}

#[tokio::test]
async fn test_owner_reactivation_respects_capacity() {
    let app = TestApp::new();
    let admin = app.token_for(Role::Admin);

    let (_, body) = app
        .json(
            "POST",
            "/api/owners",
            Some(&admin),
            json!({ "name": "Retired", "is_active": false }),
        )
        .await;
    let retired = body["owner"]["id"].as_str().unwrap().to_string();

    for name in ["Ana", "Rui", "Marta"] {
        let (status, _) = app
            .json("POST", "/api/owners", Some(&admin), json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app
        .json(
            "PUT",
            &format!("/api/owners/{}", retired),
            Some(&admin),
            json!({ "is_active": true }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CAPACITY_EXCEEDED");
}

#[tokio::test]
async fn test_public_owner_list_shows_active_in_display_order() {
    let app = TestApp::new();
    let admin = app.token_for(Role::Admin);

    for (name, order, active) in [("Rui", 2, true), ("Hidden", 0, false), ("Ana", 1, true)] {
        let (status, _) = app
            .json(
                "POST",
                "/api/owners",
                Some(&admin),
                json!({ "name": name, "display_order": order, "is_active": active }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.get("/api/owners").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["owners"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana", "Rui"]);
}

// =============================================================================
// Site settings
// =============================================================================

#[tokio::test]
async fn test_settings_round_trip() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let admin = app.token_for(Role::Admin);
    let input = json!({
        "company_name": "Casa Azul",
        "phone": "+351 910 000 000",
        "email": "hello@casaazul.pt"
    });
    let (status, saved) = app
        .json("POST", "/api/settings", Some(&admin), input.clone())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["company_name"], "Casa Azul");

    let (_, fetched) = app.get("/api/settings").await;
    assert_eq!(fetched, saved);

    // A second save overwrites the same row
    let (status, _) = app
        .json("POST", "/api/settings", Some(&admin), json!({ "company_name": "Casa Verde" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.settings.writes(), 2);

    let (_, fetched) = app.get("/api/settings").await;
    assert_eq!(fetched["company_name"], "Casa Verde");
    assert!(fetched["phone"].is_null());
}

#[tokio::test]
async fn test_saved_settings_echo_the_input() {
    use realty_api::infra::SettingsRepository;

    let app = TestApp::new();
    let input = SettingsInput {
        company_name: Some("Casa Azul".to_string()),
        about: Some("Family-run since 1998".to_string()),
        ..Default::default()
    };

    let saved = app.settings.upsert(input.clone()).await.unwrap();
    assert_eq!(saved.to_input(), input);
}

#[tokio::test]
async fn test_settings_write_requires_admin() {
    let app = TestApp::new();
    let photographer = app.token_for(Role::Photographer);

    let (status, _) = app
        .json("POST", "/api/settings", Some(&photographer), json!({ "phone": "1" }))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(app.settings.writes(), 0);
}

#[tokio::test]
async fn test_settings_invalid_email_is_rejected() {
    let app = TestApp::new();
    let admin = app.token_for(Role::Admin);

    let (status, body) = app
        .json("POST", "/api/settings", Some(&admin), json!({ "email": "nope" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(app.settings.writes(), 0);
}

// =============================================================================
// Testimonials
// =============================================================================

#[tokio::test]
async fn test_testimonial_lifecycle() {
    let app = TestApp::new();
    let admin = app.token_for(Role::Admin);

    let (status, body) = app
        .json(
            "POST",
            "/api/testimonials",
            Some(&admin),
            json!({ "author_name": "Rita", "content": "Found our home in two weeks", "rating": 5 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["testimonial"]["is_active"], true);
    let id = body["testimonial"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .json("PATCH", &format!("/api/testimonials/{}/toggle", id), Some(&admin), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["testimonial"]["is_active"], false);

    let (_, active) = app.get("/api/testimonials?active=true").await;
    assert_eq!(active["testimonials"], json!([]));

    let (_, all) = app.get("/api/testimonials").await;
    assert_eq!(all["testimonials"].as_array().unwrap().len(), 1);

    let (status, body) = app
        .json("DELETE", &format!("/api/testimonials/{}", id), Some(&admin), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_testimonial_rating_out_of_range() {
    let app = TestApp::new();
    let admin = app.token_for(Role::Admin);

    let (status, _) = app
        .json(
            "POST",
            "/api/testimonials",
            Some(&admin),
            json!({ "author_name": "Rita", "content": "Great", "rating": 9 }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_toggle_missing_testimonial_is_not_found() {
    let app = TestApp::new();
    let admin = app.token_for(Role::Admin);

    let (status, _) = app
        .json(
            "PATCH",
            &format!("/api/testimonials/{}/toggle", Uuid::new_v4()),
            Some(&admin),
            json!({}),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Photo upload
// =============================================================================

#[tokio::test]
async fn test_upload_requires_session() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft" })).await;
    let property_id = id.to_string();

    let (status, _) = app
        .send(upload_request(
            None,
            vec![jpeg(16), Part::Text("propertyId", &property_id)],
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.storage.puts(), 0);
}

#[tokio::test]
async fn test_viewer_cannot_upload() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft" })).await;
    let property_id = id.to_string();
    let viewer = app.token_for(Role::Viewer);

    let (status, _) = app
        .send(upload_request(
            Some(&viewer),
            vec![jpeg(16), Part::Text("propertyId", &property_id)],
        ))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(app.storage.puts(), 0);
}

#[tokio::test]
async fn test_oversized_upload_never_reaches_storage() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft" })).await;
    let property_id = id.to_string();
    let photographer = app.token_for(Role::Photographer);

    let (status, body) = app
        .send(upload_request(
            Some(&photographer),
            vec![jpeg(MAX_UPLOAD_BYTES + 1), Part::Text("propertyId", &property_id)],
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("File too large"));
    assert_eq!(app.storage.puts(), 0);
}

#[tokio::test]
async fn test_wrong_mime_type_never_reaches_storage() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft" })).await;
    let property_id = id.to_string();
    let photographer = app.token_for(Role::Photographer);

    let (status, body) = app
        .send(upload_request(
            Some(&photographer),
            vec![
                Part::File {
                    name: "file",
                    file_name: "plan.pdf",
                    content_type: "application/pdf",
                    bytes: vec![1; 64],
                },
                Part::Text("propertyId", &property_id),
            ],
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid file type"));
    assert_eq!(app.storage.puts(), 0);
}

#[tokio::test]
async fn test_upload_missing_fields() {
    let app = TestApp::new();
    let photographer = app.token_for(Role::Photographer);

    let (status, body) = app
        .send(upload_request(Some(&photographer), vec![Part::Text("propertyId", "x")]))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");

    let (status, body) = app
        .send(upload_request(Some(&photographer), vec![jpeg(16)]))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "propertyId is required");

    assert_eq!(app.storage.puts(), 0);
}

#[tokio::test]
async fn test_upload_for_unknown_property_is_not_found() {
    let app = TestApp::new();
    let photographer = app.token_for(Role::Photographer);
    let missing = Uuid::new_v4().to_string();

    let (status, _) = app
        .send(upload_request(
            Some(&photographer),
            vec![jpeg(16), Part::Text("propertyId", &missing)],
        ))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.storage.puts(), 0);
}

#[tokio::test]
async fn test_upload_defaults_to_main_photo() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft" })).await;
    let property_id = id.to_string();
    let photographer = app.token_for(Role::Photographer);

    let (status, body) = app
        .send(upload_request(
            Some(&photographer),
            vec![jpeg(MAX_UPLOAD_BYTES), Part::Text("propertyId", &property_id)],
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Photo uploaded successfully");
    assert_eq!(body["photoType"], "main");

    let url = body["url"].as_str().unwrap();
    let stored = app.properties.get(id).unwrap();
    assert_eq!(stored.photo_url(PhotoSlot::Main), Some(url));
    assert_eq!(stored.photo_url(PhotoSlot::Photo2), None);

    let keys = app.storage.keys();
    assert_eq!(keys.len(), 1);
    assert!(keys[0].starts_with(&format!("{}/main-", id)));
    assert!(keys[0].ends_with(".jpg"));
}

#[tokio::test]
async fn test_upload_into_secondary_slot() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft" })).await;
    let property_id = id.to_string();
    let photographer = app.token_for(Role::Photographer);

    let (status, body) = app
        .send(upload_request(
            Some(&photographer),
            vec![
                Part::File {
                    name: "file",
                    file_name: "kitchen.webp",
                    content_type: "image/webp",
                    bytes: vec![7; 128],
                },
                Part::Text("propertyId", &property_id),
                Part::Text("photoType", "photo_3"),
            ],
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["photoType"], "photo_3");

    let stored = app.properties.get(id).unwrap();
    assert_eq!(stored.photo_url(PhotoSlot::Photo3), body["url"].as_str());
    assert_eq!(stored.photo_url(PhotoSlot::Main), None);
}

#[tokio::test]
async fn test_storage_failure_is_reported_and_leaves_property_untouched() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft" })).await;
    let property_id = id.to_string();
    let photographer = app.token_for(Role::Photographer);
    app.storage.fail_with("Bucket not found");

    let (status, body) = app
        .send(upload_request(
            Some(&photographer),
            vec![jpeg(16), Part::Text("propertyId", &property_id)],
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bucket not found");
    assert_eq!(app.storage.puts(), 1);
    assert_eq!(app.properties.get(id).unwrap().main_photo_url, None);
}

#[tokio::test]
async fn test_database_failure_while_linking_photo_is_reported_as_backend_error() {
    let app = TestApp::new();
    let id = app.seed_property(json!({ "title": "Loft" })).await;
    let property_id = id.to_string();
    let photographer = app.token_for(Role::Photographer);
    app.properties
        .fail_photo_links_with("permission denied for table properties");

    let (status, body) = app
        .send(upload_request(
            Some(&photographer),
            vec![jpeg(16), Part::Text("propertyId", &property_id)],
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BACKEND_ERROR");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("permission denied for table properties"));
    assert_eq!(app.storage.puts(), 1);
}
