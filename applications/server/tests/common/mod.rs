//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use devroster_core::{
    types::{Dev, DevId},
    DevService,
};
use devroster_server::{create_router, services::FlashStore, state::AppState};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tower::util::ServiceExt;

/// One call received by [`RecordingDevService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Insert(Dev),
    SelectAll,
    SelectByKey(DevId),
    Update(Dev),
    Delete(DevId),
}

/// `DevService` that records every call and serves a fixed row set
#[derive(Default)]
pub struct RecordingDevService {
    rows: Vec<Dev>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingDevService {
    pub fn with_rows(rows: Vec<Dev>) -> Self {
        Self {
            rows,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DevService for RecordingDevService {
    async fn insert(&self, dev: &Dev) -> devroster_core::Result<u64> {
        self.record(Call::Insert(dev.clone()));
        Ok(1)
    }

    async fn select_all(&self) -> devroster_core::Result<Vec<Dev>> {
        self.record(Call::SelectAll);
        Ok(self.rows.clone())
    }

    async fn select_by_key(&self, id: DevId) -> devroster_core::Result<Option<Dev>> {
        self.record(Call::SelectByKey(id));
        Ok(self.rows.iter().find(|d| d.id == id).cloned())
    }

    async fn update(&self, dev: &Dev) -> devroster_core::Result<u64> {
        self.record(Call::Update(dev.clone()));
        Ok(u64::from(self.rows.iter().any(|d| d.id == dev.id)))
    }

    async fn delete(&self, id: DevId) -> devroster_core::Result<u64> {
        self.record(Call::Delete(id));
        Ok(u64::from(self.rows.iter().any(|d| d.id == id)))
    }
}

/// Router wired to `service`
pub fn create_test_app(service: Arc<dyn DevService>) -> Router {
    let flash = Arc::new(FlashStore::new(Duration::from_secs(60)));
    create_router(AppState::new(service, flash))
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// `name=value` part of the flash cookie set by a redirect
pub fn flash_cookie(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("redirect should set the flash cookie")
        .to_str()
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

/// Test fixtures
pub mod fixtures {
    use devroster_core::types::{Dev, Gender};

    pub const FULL_FORM: &str =
        "name=Hong+Gildong&career=5&email=hong%40example.com&gender=M&lang=Java&lang=Rust";

    pub fn stored_dev(id: i64, name: &str) -> Dev {
        let mut dev = Dev::new(
            name,
            3,
            format!("{}@example.com", name.to_lowercase()),
            Some(Gender::Female),
            vec!["Go".to_string()],
        );
        dev.id = id;
        dev
    }
}
