/// Flash middleware: consumes the pending flash of each request
use crate::services::{FlashMessages, FlashStore, FlashTicket, FLASH_COOKIE};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::{convert::Infallible, sync::Arc};

/// Messages handed over by the previous redirect (empty when there were none)
///
/// Can be used as an extractor in handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash(pub FlashMessages);

impl Flash {
    pub fn messages(&self) -> &FlashMessages {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

const CLEAR_FLASH_COOKIE: &str = "flash=; Path=/; Max-Age=0";

fn flash_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .map(|(_, value)| value)
}

fn sets_flash_cookie(response: &Response) -> bool {
    let prefix = format!("{}=", FLASH_COOKIE);
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .any(|h| h.starts_with(&prefix))
}

/// Take the flash named by the request's cookie, expose it as [`Flash`],
/// and expire the cookie unless the handler issued a new one
pub async fn flash_middleware(
    State(store): State<Arc<FlashStore>>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie = flash_cookie(request.headers()).map(str::to_string);

    let flash = cookie
        .as_deref()
        .and_then(FlashTicket::parse)
        .and_then(|ticket| store.take(&ticket))
        .map(Flash)
        .unwrap_or_default();

    if !flash.is_empty() {
        tracing::debug!("Consumed flash {:?}", flash.messages());
    }

    request.extensions_mut().insert(flash);

    let mut response = next.run(request).await;

    if cookie.is_some() && !sets_flash_cookie(&response) {
        response
            .headers_mut()
            .append(header::SET_COOKIE, HeaderValue::from_static(CLEAR_FLASH_COOKIE));
    }

    response
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Flash>().cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_flash_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; flash=abc; lang=ko"),
        );
        assert_eq!(flash_cookie(&headers), Some("abc"));
    }

    #[test]
    fn no_cookie_header() {
        assert_eq!(flash_cookie(&HeaderMap::new()), None);
    }

    #[test]
    fn clear_cookie_targets_flash() {
        assert!(CLEAR_FLASH_COOKIE.starts_with(&format!("{}=", FLASH_COOKIE)));
    }
}
