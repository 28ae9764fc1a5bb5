//! Query resolution: cache-or-fetch policy plus in-process filtering.
//!
//! # Design Decisions
//! - Only the three list resources `referencias`, `marcas` and `modelos`
//!   are cached; year lists and price quotes always hit the upstream so a
//!   lookup never serves a stale valuation
//! - Code lookups (month, brand) refetch the full list and filter locally;
//!   the upstream has no by-code endpoint
//! - Errors thread through as values and surface once at the HTTP boundary

use serde_json::Value;
use thiserror::Error;

use crate::cache::{cache_key, ResponseCache};
use crate::routing::path::RouteShape;
use crate::upstream::{FipeClient, UpstreamError, VEHICLE_TYPES};

/// Failure while resolving a matched route shape.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The upstream call failed; carries the underlying cause.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The shape was valid but no entity matched the requested code.
    #[error("{message}")]
    NotFound { message: String },

    /// Re-serialization of a typed payload failed.
    #[error("internal serialization error: {0}")]
    Internal(#[from] serde_json::Error),
}

impl ResolveError {
    fn month_not_found() -> Self {
        Self::NotFound {
            message: "O mês de referência solicitado não existe. Consulte os exemplos abaixo."
                .to_string(),
        }
    }

    fn brand_not_found() -> Self {
        Self::NotFound {
            message: "A marca solicitada não existe. Consulte os exemplos abaixo.".to_string(),
        }
    }
}

/// Resolves parsed route shapes against the cache and the upstream client.
#[derive(Clone)]
pub struct Resolver {
    cache: ResponseCache,
    client: FipeClient,
}

impl Resolver {
    /// Create a resolver over an injected cache and upstream client.
    pub fn new(cache: ResponseCache, client: FipeClient) -> Self {
        Self { cache, client }
    }

    /// Resolve one shape to its JSON response body.
    pub async fn resolve(&self, shape: RouteShape) -> Result<Value, ResolveError> {
        match shape {
            RouteShape::Months => self.months().await,
            RouteShape::Month { mes } => self.month(&mes).await,
            RouteShape::VehicleTypes { .. } => self.vehicle_types(),
            RouteShape::Brands { mes, tipo } => self.brands(&mes, &tipo).await,
            RouteShape::Brand { mes, tipo, marca } => self.brand(&mes, &tipo, &marca).await,
            RouteShape::Models { mes, tipo, marca } => self.models(&mes, &tipo, &marca).await,
            RouteShape::ModelYears {
                mes,
                tipo,
                marca,
                modelo,
            } => Ok(self.client.model_years(&mes, &tipo, &marca, &modelo).await?),
            RouteShape::PriceQuote {
                mes,
                tipo,
                marca,
                modelo,
                ano,
                anomodelo,
                combustivel,
            } => Ok(self
                .client
                .price_quote(&mes, &tipo, &marca, &modelo, &ano, &anomodelo, &combustivel)
                .await?),
        }
    }

    /// Cached list of reference months, verbatim.
    async fn months(&self) -> Result<Value, ResolveError> {
        let key = cache_key("referencias", &[]);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let months = self.client.reference_months().await?;
        let value = serde_json::to_value(months)?;
        self.cache.set(&key, value.clone());
        Ok(value)
    }

    /// One reference month by code; always refetched, never cached.
    async fn month(&self, mes: &str) -> Result<Value, ResolveError> {
        let months = self.client.reference_months().await?;
        let month = months
            .into_iter()
            .find(|m| m.code.to_string() == mes)
            .ok_or_else(ResolveError::month_not_found)?;
        Ok(serde_json::to_value(month)?)
    }

    /// Static vehicle-type list; the month parameter is accepted for path
    /// symmetry only and never consulted.
    fn vehicle_types(&self) -> Result<Value, ResolveError> {
        Ok(serde_json::to_value(VEHICLE_TYPES)?)
    }

    /// Cached brand list for a (month, type) pair.
    async fn brands(&self, mes: &str, tipo: &str) -> Result<Value, ResolveError> {
        let key = cache_key("marcas", &[("mes", mes), ("tipo", tipo)]);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let brands = self.client.brands(mes, tipo).await?;
        let value = serde_json::to_value(brands)?;
        self.cache.set(&key, value.clone());
        Ok(value)
    }

    /// One brand by code, filtered locally from a fresh list fetch.
    async fn brand(&self, mes: &str, tipo: &str, marca: &str) -> Result<Value, ResolveError> {
        let brands = self.client.brands(mes, tipo).await?;
        let brand = brands
            .into_iter()
            .find(|b| b.code == marca)
            .ok_or_else(ResolveError::brand_not_found)?;
        Ok(serde_json::to_value(brand)?)
    }

    /// Cached model listing for a brand, passed through verbatim.
    async fn models(&self, mes: &str, tipo: &str, marca: &str) -> Result<Value, ResolveError> {
        let key = cache_key("modelos", &[("mes", mes), ("tipo", tipo), ("marca", marca)]);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let value = self.client.models(mes, tipo, marca).await?;
        self.cache.set(&key, value.clone());
        Ok(value)
    }
}
