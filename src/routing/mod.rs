//! Request routing subsystem.
//!
//! # Data Flow
//! ```text
//! path remainder after /api/
//!     → path.rs (exhaustive shape table → RouteShape, or None)
//!     → resolver.rs (cache lookup → upstream fetch → local filter)
//!     → JSON body, or ResolveError for the boundary responder
//! ```
//!
//! Resolution is linear and per-request; there is no session state.

pub mod path;
pub mod resolver;

pub use path::{parse_shape, RouteShape};
pub use resolver::{ResolveError, Resolver};
