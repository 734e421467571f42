// ============================================================================
// HTTP TRANSPORT - Trait común + implementación web (gloo-net)
// ============================================================================
// ApiClient sólo conoce el trait; en WASM usa GlooTransport, en tests un
// transporte en memoria.
// ============================================================================

use crate::services::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transporte HTTP. Single-thread (WASM): los futures no necesitan Send.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// Errores de transporte se devuelven como `Network`/`Timeout`;
    /// cualquier status HTTP es una respuesta válida.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[cfg(target_arch = "wasm32")]
pub use web::GlooTransport;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{HttpRequest, HttpResponse, HttpTransport, Method};
    use crate::services::error::ApiError;
    use futures::future::{self, Either};
    use gloo_net::http::Request;
    use gloo_timers::future::TimeoutFuture;

    /// Transporte basado en `fetch` del navegador
    #[derive(Clone, Debug, Default)]
    pub struct GlooTransport {
        timeout_ms: u32,
    }

    impl GlooTransport {
        /// `timeout_ms = 0` desactiva el timeout
        pub fn new(timeout_ms: u32) -> Self {
            Self { timeout_ms }
        }
    }

    impl HttpTransport for GlooTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let exchange = Box::pin(exchange(request));
            if self.timeout_ms == 0 {
                return exchange.await;
            }
            let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));
            match future::select(exchange, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => {
                    log::warn!("⏱️ Timeout de red ({} ms)", self.timeout_ms);
                    Err(ApiError::Timeout(self.timeout_ms))
                }
            }
        }
    }

    async fn exchange(request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name, value));

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Body read error: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            method: Method::Get,
            url: "http://x".into(),
            headers: vec![("Authorization".into(), "Bearer t".into())],
            body: None,
        };
        assert_eq!(request.header("authorization"), Some("Bearer t"));
        assert_eq!(request.header("content-type"), None);
    }

    #[test]
    fn ok_means_2xx() {
        let response = |status| HttpResponse { status, body: String::new() };
        assert!(response(200).ok());
        assert!(response(204).ok());
        assert!(!response(302).ok());
        assert!(!response(401).ok());
    }
}
