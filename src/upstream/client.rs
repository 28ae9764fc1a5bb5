//! HTTP client adapter for the FIPE vehicle API.
//!
//! # Responsibilities
//! - One method per upstream capability, each a single form-encoded POST
//! - Deserialize list responses that resolver-side filters need as typed
//!   sequences; pass everything else through as raw JSON
//! - Surface any transport or non-2xx failure as `UpstreamError`, untouched
//!
//! # Design Decisions
//! - No retries and no client-side timeout beyond reqwest's defaults; a
//!   hanging upstream stalls only the request that hit it

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::upstream::types::{LabeledCode, ReferenceMonth, UpstreamError};

/// Client for the upstream FIPE service.
#[derive(Clone)]
pub struct FipeClient {
    http: reqwest::Client,
    base_url: String,
}

impl FipeClient {
    /// Create a client against a base URL (e.g. `.../api/veiculos`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the ordered list of reference months.
    pub async fn reference_months(&self) -> Result<Vec<ReferenceMonth>, UpstreamError> {
        self.post("ConsultarTabelaDeReferencia", &[]).await
    }

    /// Fetch the brand list for a (month, vehicle type) pair.
    pub async fn brands(&self, mes: &str, tipo: &str) -> Result<Vec<LabeledCode>, UpstreamError> {
        self.post(
            "ConsultarMarcas",
            &[("codigoTabelaReferencia", mes), ("codigoTipoVeiculo", tipo)],
        )
        .await
    }

    /// Fetch the model listing for a brand. The upstream answers a composite
    /// `{Modelos, Anos}` object which is passed through as-is.
    pub async fn models(&self, mes: &str, tipo: &str, marca: &str) -> Result<Value, UpstreamError> {
        self.post(
            "ConsultarModelos",
            &[
                ("codigoTabelaReferencia", mes),
                ("codigoTipoVeiculo", tipo),
                ("codigoMarca", marca),
            ],
        )
        .await
    }

    /// Fetch the model-year list for a model.
    pub async fn model_years(
        &self,
        mes: &str,
        tipo: &str,
        marca: &str,
        modelo: &str,
    ) -> Result<Value, UpstreamError> {
        self.post(
            "ConsultarAnoModelo",
            &[
                ("codigoTabelaReferencia", mes),
                ("codigoTipoVeiculo", tipo),
                ("codigoMarca", marca),
                ("codigoModelo", modelo),
            ],
        )
        .await
    }

    /// Fetch the final price quote. The `ano` value may encode a composite
    /// year-fuel string ("2020-1"); it is forwarded verbatim, and the query
    /// mode is fixed to the traditional valuation.
    #[allow(clippy::too_many_arguments)]
    pub async fn price_quote(
        &self,
        mes: &str,
        tipo: &str,
        marca: &str,
        modelo: &str,
        ano: &str,
        anomodelo: &str,
        combustivel: &str,
    ) -> Result<Value, UpstreamError> {
        self.post(
            "ConsultarValorComTodosParametros",
            &[
                ("codigoTabelaReferencia", mes),
                ("codigoTipoVeiculo", tipo),
                ("codigoMarca", marca),
                ("codigoModelo", modelo),
                ("ano", ano),
                ("anoModelo", anomodelo),
                ("codigoTipoCombustivel", combustivel),
                ("tipoConsulta", "tradicional"),
            ],
        )
        .await
    }

    /// Issue one form-encoded POST to an upstream endpoint.
    async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(endpoint = %endpoint, "Querying FIPE upstream");

        let response = self.http.post(&url).form(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!(endpoint = %endpoint, status = %status, "FIPE upstream returned error status");
            return Err(UpstreamError::Status { status });
        }

        Ok(response.json().await?)
    }
}
