use super::BindError;
use crate::error::ServerError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, Method},
};
use std::{fmt::Display, str::FromStr};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request parameters: the query string followed by the urlencoded body
///
/// Repeated names keep every value in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    pairs: Vec<(String, String)>,
}

impl FormParams {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Decode `application/x-www-form-urlencoded` query and body
    pub fn parse(query: Option<&str>, body: &[u8]) -> Self {
        let query = query.unwrap_or_default().as_bytes();
        let pairs = url::form_urlencoded::parse(query)
            .chain(url::form_urlencoded::parse(body))
            .map(|(k, v)| (k.into_owned(), v.into_owned()));

        Self::from_pairs(pairs)
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `name`
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Typed value that must be present
    pub fn required<T>(&self, name: &str) -> Result<T, BindError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.get(name).ok_or_else(|| BindError::missing(name))?;
        parse_value(name, raw)
    }

    /// Typed value that may be absent; an empty value counts as absent
    pub fn optional<T>(&self, name: &str) -> Result<Option<T>, BindError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.get(name) {
            None | Some("") => Ok(None),
            Some(raw) => parse_value(name, raw).map(Some),
        }
    }

    /// Text value, `default` when absent or empty
    pub fn optional_or(&self, name: &str, default: &str) -> String {
        match self.get(name) {
            None | Some("") => default.to_string(),
            Some(value) => value.to_string(),
        }
    }

    /// All values under `name`; at least one must be present
    pub fn required_all(&self, name: &str) -> Result<Vec<String>, BindError> {
        let values = self.get_all(name);
        if values.is_empty() {
            return Err(BindError::missing(name));
        }
        Ok(values.into_iter().map(str::to_string).collect())
    }
}

pub(super) fn parse_value<T>(name: &str, raw: &str) -> Result<T, BindError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|e| BindError::invalid(name, raw, e))
}

/// Media types compare case-insensitively and may carry parameters
fn is_form_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(is_form_content_type)
}

#[axum::async_trait]
impl<S> FromRequest<S> for FormParams
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_string);
        let reads_body = *req.method() != Method::GET && *req.method() != Method::HEAD;
        let form = is_form(&req);

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;

        if !reads_body || body.is_empty() {
            return Ok(Self::parse(query.as_deref(), &[]));
        }

        if !form {
            return Err(ServerError::BadRequest(format!(
                "Expected {} body",
                FORM_CONTENT_TYPE
            )));
        }

        Ok(Self::parse(query.as_deref(), &body))
    }
}
