pub mod error;
pub mod http;
pub mod api_client;

#[cfg(test)]
pub mod testing;

pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, HttpTransport, Method};
#[cfg(target_arch = "wasm32")]
pub use http::GlooTransport;
pub use api_client::{ApiClient, ApiRequest, Auth};
