//! FIPE Proxy Library
//!
//! An HTTP façade over the FIPE vehicle-pricing table. Republishes the
//! month/brand/model/year/fuel hierarchy under a simplified path syntax
//! (`/api/mes=319&tipo=2/marca=80/...`), shields callers from the upstream
//! form-encoded POST protocol, and caches list responses for one hour.

pub mod cache;
pub mod config;
pub mod http;
pub mod observability;
pub mod routing;
pub mod security;
pub mod upstream;

pub use cache::ResponseCache;
pub use config::ProxyConfig;
pub use http::HttpServer;
pub use routing::Resolver;
pub use upstream::FipeClient;
