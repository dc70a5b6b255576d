//! Shared test harness: the real router and services over in-memory backends.

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use realty_api::api::{create_router, AppState};
use realty_api::domain::{
    ensure_capacity, NewOwner, NewProperty, NewTestimonial, Owner, OwnerChanges, PhotoSlot,
    Profile, Property, PropertyChanges, PropertyFilter, Role, SettingsInput, SiteSettings,
    Testimonial, TestimonialChanges,
};
use realty_api::errors::{AppError, AppResult};
use realty_api::infra::{
    Database, ObjectStorage, OwnerRepository, ProfileRepository, PropertyRepository,
    SettingsRepository, TestimonialRepository,
};
use realty_api::services::{Backends, Claims, JwtSessions, Services};

pub const JWT_SECRET: &[u8] = b"integration-test-secret-at-least-32-bytes";
pub const AUDIENCE: &str = "authenticated";

// =============================================================================
// In-memory repositories
// =============================================================================

#[derive(Default)]
pub struct InMemoryProfiles {
    rows: Mutex<Vec<Profile>>,
}

impl InMemoryProfiles {
    pub fn insert(&self, id: Uuid, role: Role) {
        self.rows.lock().unwrap().push(Profile {
            id,
            role,
            full_name: None,
        });
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryProperties {
    rows: Mutex<Vec<Property>>,
    link_failure: Mutex<Option<String>>,
}

fn contains_ignore_case(value: &Option<String>, needle: &str) -> bool {
    value
        .as_deref()
        .map(|v| v.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

fn matches(property: &Property, filter: &PropertyFilter) -> bool {
    filter.status.map_or(true, |s| property.status == s)
        && filter
            .bedrooms
            .map_or(true, |min| property.bedrooms.map_or(false, |b| b >= min))
        && filter
            .bathrooms
            .map_or(true, |min| property.bathrooms.map_or(false, |b| b >= min))
        && filter
            .max_price
            .map_or(true, |max| property.price.map_or(false, |p| p <= max))
        && filter
            .city
            .as_deref()
            .map_or(true, |c| contains_ignore_case(&property.city, c))
        && filter
            .neighborhood
            .as_deref()
            .map_or(true, |n| contains_ignore_case(&property.neighborhood, n))
}

impl InMemoryProperties {
    pub fn get(&self, id: Uuid) -> Option<Property> {
        self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }

    /// Make every following photo URL write fail with a database error
    pub fn fail_photo_links_with(&self, message: &str) {
        *self.link_failure.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl PropertyRepository for InMemoryProperties {
    async fn list(&self, filter: &PropertyFilter) -> AppResult<Vec<Property>> {
        // Newest insert first, then a stable sort keeps that order on ties
        let mut found: Vec<Property> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|p| matches(p, filter))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Property>> {
        Ok(self.get(id))
    }

    async fn create(&self, input: NewProperty, created_by: Option<Uuid>) -> AppResult<Property> {
        let now = Utc::now();
        let property = Property {
            id: Uuid::new_v4(),
            title: input.title.trim().to_string(),
            description: input.description,
            status: input.status.unwrap_or_default(),
            bedrooms: input.bedrooms,
            bathrooms: input.bathrooms,
            price: input.price,
            area_m2: input.area_m2,
            address: input.address,
            city: input.city,
            neighborhood: input.neighborhood,
            main_photo_url: None,
            photo_2_url: None,
            photo_3_url: None,
            created_by,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(property.clone());
        Ok(property)
    }

    async fn update(&self, id: Uuid, changes: PropertyChanges) -> AppResult<Property> {
        let mut rows = self.rows.lock().unwrap();
        let property = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound("Property"))?;

        if let Some(title) = changes.title {
            property.title = title;
        }
        if let Some(status) = changes.status {
            property.status = status;
        }
        if let Some(price) = changes.price {
            property.price = Some(price);
        }
        if let Some(city) = changes.city {
            property.city = Some(city);
        }
        property.updated_at = Utc::now();
        Ok(property.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound("Property"));
        }
        Ok(())
    }

    async fn set_photo_url(&self, id: Uuid, slot: PhotoSlot, url: String) -> AppResult<Property> {
        if let Some(message) = self.link_failure.lock().unwrap().clone() {
            return Err(AppError::Database(sea_orm::DbErr::Custom(message)));
        }
        let mut rows = self.rows.lock().unwrap();
        let property = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound("Property"))?;

        match slot {
            PhotoSlot::Main => property.main_photo_url = Some(url),
            PhotoSlot::Photo2 => property.photo_2_url = Some(url),
            PhotoSlot::Photo3 => property.photo_3_url = Some(url),
        }
        Ok(property.clone())
    }
}

#[derive(Default)]
pub struct InMemoryOwners {
    rows: Mutex<Vec<Owner>>,
}

impl InMemoryOwners {
    pub fn active_count(&self) -> usize {
        self.rows.lock().unwrap().iter().filter(|o| o.is_active).count()
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwners {
    async fn list_active(&self) -> AppResult<Vec<Owner>> {
        let mut owners: Vec<Owner> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.is_active)
            .cloned()
            .collect();
        owners.sort_by_key(|o| o.display_order);
        Ok(owners)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Owner>> {
        Ok(self.rows.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    async fn create_within_capacity(&self, input: NewOwner, limit: u64) -> AppResult<Owner> {
        // The lock plays the part of the serializable transaction
        let mut rows = self.rows.lock().unwrap();
        let active = rows.iter().filter(|o| o.is_active).count() as u64;
        ensure_capacity(active, limit)?;

        let owner = Owner {
            id: Uuid::new_v4(),
            name: input.name,
            role: input.role,
            bio: input.bio,
            photo_url: input.photo_url,
            is_active: input.is_active.unwrap_or(true),
            display_order: input.display_order.unwrap_or(0),
            created_at: Utc::now(),
        };
        rows.push(owner.clone());
        Ok(owner)
    }

    async fn update_within_capacity(
        &self,
        id: Uuid,
        changes: OwnerChanges,
        limit: u64,
    ) -> AppResult<Owner> {
        let mut rows = self.rows.lock().unwrap();
        let active = rows.iter().filter(|o| o.is_active).count() as u64;
        let owner = rows
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(AppError::NotFound("Owner"))?;

        if changes.is_active == Some(true) && !owner.is_active {
            ensure_capacity(active, limit)?;
        }
        if let Some(name) = changes.name {
            owner.name = name;
        }
        if let Some(is_active) = changes.is_active {
            owner.is_active = is_active;
        }
        if let Some(order) = changes.display_order {
            owner.display_order = order;
        }
        Ok(owner.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|o| o.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound("Owner"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySettings {
    row: Mutex<Option<SiteSettings>>,
    writes: AtomicUsize,
}

impl InMemorySettings {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettings {
    async fn get(&self) -> AppResult<Option<SiteSettings>> {
        Ok(self.row.lock().unwrap().clone())
    }

    async fn upsert(&self, input: SettingsInput) -> AppResult<SiteSettings> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let settings = SiteSettings {
            company_name: input.company_name,
            owner_name: input.owner_name,
            license_number: input.license_number,
            phone: input.phone,
            whatsapp: input.whatsapp,
            email: input.email,
            address: input.address,
            instagram_url: input.instagram_url,
            facebook_url: input.facebook_url,
            about: input.about,
            updated_at: Utc::now(),
        };
        *self.row.lock().unwrap() = Some(settings.clone());
        Ok(settings)
    }
}

#[derive(Default)]
pub struct InMemoryTestimonials {
    rows: Mutex<Vec<Testimonial>>,
}

#[async_trait]
impl TestimonialRepository for InMemoryTestimonials {
    async fn list(&self, active: Option<bool>) -> AppResult<Vec<Testimonial>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|t| active.map_or(true, |a| t.is_active == a))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Testimonial>> {
        Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, input: NewTestimonial) -> AppResult<Testimonial> {
        let testimonial = Testimonial {
            id: Uuid::new_v4(),
            author_name: input.author_name,
            content: input.content,
            rating: input.rating,
            is_active: input.is_active.unwrap_or(true),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(testimonial.clone());
        Ok(testimonial)
    }

    async fn update(&self, id: Uuid, changes: TestimonialChanges) -> AppResult<Testimonial> {
        let mut rows = self.rows.lock().unwrap();
        let testimonial = rows
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::NotFound("Testimonial"))?;

        if let Some(content) = changes.content {
            testimonial.content = content;
        }
        if let Some(is_active) = changes.is_active {
            testimonial.is_active = is_active;
        }
        Ok(testimonial.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound("Testimonial"));
        }
        Ok(())
    }
}

/// Object storage that keeps nothing and counts uploads
#[derive(Default)]
pub struct FakeStorage {
    puts: AtomicUsize,
    keys: Mutex<Vec<String>>,
    failure: Mutex<Option<String>>,
}

impl FakeStorage {
    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }

    /// Make every following upload fail with `message`
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl ObjectStorage for FakeStorage {
    async fn put(&self, key: &str, _content_type: &str, _bytes: Vec<u8>) -> AppResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(AppError::backend(message));
        }
        self.keys.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://storage.test/public/{}", key)
    }
}

// =============================================================================
// Test application
// =============================================================================

pub struct TestApp {
    pub router: Router,
    pub profiles: Arc<InMemoryProfiles>,
    pub properties: Arc<InMemoryProperties>,
    pub owners: Arc<InMemoryOwners>,
    pub settings: Arc<InMemorySettings>,
    pub testimonials: Arc<InMemoryTestimonials>,
    pub storage: Arc<FakeStorage>,
}

impl TestApp {
    pub fn new() -> Self {
        let profiles = Arc::new(InMemoryProfiles::default());
        let properties = Arc::new(InMemoryProperties::default());
        let owners = Arc::new(InMemoryOwners::default());
        let settings = Arc::new(InMemorySettings::default());
        let testimonials = Arc::new(InMemoryTestimonials::default());
        let storage = Arc::new(FakeStorage::default());

        let services = Services::new(Backends {
            sessions: Arc::new(JwtSessions::new(JWT_SECRET, AUDIENCE)),
            profiles: profiles.clone(),
            properties: properties.clone(),
            owners: owners.clone(),
            settings: settings.clone(),
            testimonials: testimonials.clone(),
            storage: storage.clone(),
        });
        let database = Arc::new(Database::from_connection(DatabaseConnection::Disconnected));
        let router = create_router(AppState::new(services, database), &[]);

        Self {
            router,
            profiles,
            properties,
            owners,
            settings,
            testimonials,
            storage,
        }
    }

    /// Token for a new user holding `role`
    pub fn token_for(&self, role: Role) -> String {
        let id = Uuid::new_v4();
        self.profiles.insert(id, role);
        token(id)
    }

    /// Token for a user that has no profile row
    pub fn token_without_profile(&self) -> String {
        token(Uuid::new_v4())
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty)
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn json(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Create a property as an admin and return its id
    pub async fn seed_property(&self, body: Value) -> Uuid {
        let admin = self.token_for(Role::Admin);
        let (status, created) = self
            .json("POST", "/api/properties", Some(&admin), body)
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", created);
        created["property"]["id"].as_str().unwrap().parse().unwrap()
    }
}

/// Sign a session token the way the auth provider does
pub fn token(user_id: Uuid) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        email: Some("agent@example.com".to_string()),
        role: Some("authenticated".to_string()),
        aud: AUDIENCE.to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: Some(now.timestamp()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET),
    )
    .unwrap()
}

// =============================================================================
// Multipart bodies
// =============================================================================

pub const BOUNDARY: &str = "realty-test-boundary";

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: Vec<u8>,
    },
}

pub fn multipart_body(parts: Vec<Part<'_>>) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, file_name, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(&bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn upload_request(token: Option<&str>, parts: Vec<Part<'_>>) -> Request<Body> {
    let mut builder = Request::post("/api/upload").header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", BOUNDARY),
    );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(multipart_body(parts))).unwrap()
}
