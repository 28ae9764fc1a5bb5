//! Wire types for the FIPE vehicle API.
//!
//! Field names mirror the upstream JSON exactly so filtered entries
//! re-serialize byte-for-byte like the pass-through responses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One dated snapshot of the reference price table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ReferenceMonth {
    #[serde(rename = "Codigo")]
    pub code: i64,
    #[serde(rename = "Mes")]
    pub label: String,
}

/// A labelled code as the upstream returns brands, models and model years.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LabeledCode {
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Value")]
    pub code: String,
}

/// A vehicle category. Static — the upstream has no endpoint for these.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VehicleType {
    pub codigo: u8,
    pub nome: &'static str,
}

/// The three vehicle categories the FIPE table distinguishes.
pub const VEHICLE_TYPES: [VehicleType; 3] = [
    VehicleType {
        codigo: 1,
        nome: "Carro",
    },
    VehicleType {
        codigo: 2,
        nome: "Moto",
    },
    VehicleType {
        codigo: 3,
        nome: "Caminhão",
    },
];

/// Errors from talking to the upstream FIPE service.
///
/// Never retried; each surfaces once at the boundary responder as a 500
/// carrying the cause text.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network failure, timeout or connection refusal.
    #[error("request to FIPE failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("FIPE returned status {status}")]
    Status { status: reqwest::StatusCode },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reference_month_round_trips_wire_names() {
        let month: ReferenceMonth =
            serde_json::from_value(json!({"Codigo": 319, "Mes": "março/2025 "})).unwrap();
        assert_eq!(month.code, 319);
        assert_eq!(
            serde_json::to_value(&month).unwrap(),
            json!({"Codigo": 319, "Mes": "março/2025 "})
        );
    }

    #[test]
    fn vehicle_types_are_static() {
        assert_eq!(VEHICLE_TYPES[0].nome, "Carro");
        assert_eq!(VEHICLE_TYPES[1].nome, "Moto");
        assert_eq!(VEHICLE_TYPES[2].nome, "Caminhão");
        assert_eq!(
            serde_json::to_value(VEHICLE_TYPES[1].clone()).unwrap(),
            json!({"codigo": 2, "nome": "Moto"})
        );
    }
}
