//! Upstream FIPE integration subsystem.
//!
//! # Data Flow
//! ```text
//! resolver query
//!     → client.rs (form-encoded POST to one of four endpoints)
//!     → types.rs (typed sequences where the resolver filters locally,
//!                 raw JSON where the payload passes through)
//!     → back to resolver, or UpstreamError to the boundary responder
//! ```

pub mod client;
pub mod types;

pub use client::FipeClient;
pub use types::{LabeledCode, ReferenceMonth, UpstreamError, VehicleType, VEHICLE_TYPES};
