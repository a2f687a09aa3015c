/// View and redirect outcomes of the request handlers
use crate::{error::Result, middleware::Flash, services::FlashTicket};
use axum::{
    http::{header, HeaderValue},
    response::{self, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// A view identifier plus the named values it renders
///
/// Responds with `{"view": ..., "model": {...}}`; turning that into a page
/// is the renderer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    name: String,
    model: Map<String, Value>,
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: Map::new(),
        }
    }

    /// Attach `value` under `key`
    pub fn attribute(mut self, key: impl Into<String>, value: &impl Serialize) -> Result<Self> {
        self.model.insert(key.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Expose the messages of a consumed flash to the view
    pub fn with_flash(mut self, flash: &Flash) -> Self {
        for (key, message) in flash.messages() {
            self.model.insert(key.clone(), Value::String(message.clone()));
        }
        self
    }

    pub fn model(&self) -> &Map<String, Value> {
        &self.model
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        Json(json!({
            "view": self.name,
            "model": self.model,
        }))
        .into_response()
    }
}

/// `303 See Other` to `target`, optionally handing over a flash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    target: String,
    flash: Option<FlashTicket>,
}

impl Redirect {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            flash: None,
        }
    }

    pub fn with_flash(mut self, ticket: FlashTicket) -> Self {
        self.flash = Some(ticket);
        self
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        let mut response = response::Redirect::to(&self.target).into_response();

        if let Some(ticket) = self.flash {
            match HeaderValue::from_str(&ticket.cookie()) {
                Ok(cookie) => {
                    response.headers_mut().append(header::SET_COOKIE, cookie);
                }
                Err(e) => tracing::error!("Unusable flash cookie for {}: {}", ticket, e),
            }
        }

        response
    }
}
