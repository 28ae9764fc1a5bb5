//! Path-shape matching for the simplified query syntax.
//!
//! # Responsibilities
//! - Parse `key=value` path segments into one of the resolvable shapes
//! - Enforce the fixed hierarchical order (mes → tipo → marca → modelo →
//!   ano → anomodelo → combustivel)
//! - Reject everything else so the server falls through to the catch-all
//!
//! # Design Decisions
//! - Explicit exhaustive match over the shape table instead of a framework
//!   router; the whole simplified syntax is visible in one place
//! - Values are forwarded verbatim (no decoding, no validation); composite
//!   strings like "2020-1" stay intact

/// One fully parsed simplified query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteShape {
    /// `/api/mes` — list all reference months.
    Months,
    /// `/api/mes=:mes` — one reference month by code.
    Month { mes: String },
    /// `/api/mes=:mes&tipo` — static vehicle-type list.
    VehicleTypes { mes: String },
    /// `/api/mes=:mes&tipo=:tipo/marca` — brand list.
    Brands { mes: String, tipo: String },
    /// `/api/mes=:mes&tipo=:tipo/marca=:marca` — one brand by code.
    Brand {
        mes: String,
        tipo: String,
        marca: String,
    },
    /// `.../marca=:marca/modelo` — model listing.
    Models {
        mes: String,
        tipo: String,
        marca: String,
    },
    /// `.../modelo=:modelo/ano` — model-year list.
    ModelYears {
        mes: String,
        tipo: String,
        marca: String,
        modelo: String,
    },
    /// `.../ano=:ano/anomodelo=:anomodelo/combustivel=:combustivel` — final
    /// price lookup.
    PriceQuote {
        mes: String,
        tipo: String,
        marca: String,
        modelo: String,
        ano: String,
        anomodelo: String,
        combustivel: String,
    },
}

impl RouteShape {
    /// Stable shape name for logging and metrics labels.
    pub fn name(&self) -> &'static str {
        match self {
            RouteShape::Months => "months",
            RouteShape::Month { .. } => "month",
            RouteShape::VehicleTypes { .. } => "vehicle_types",
            RouteShape::Brands { .. } => "brands",
            RouteShape::Brand { .. } => "brand",
            RouteShape::Models { .. } => "models",
            RouteShape::ModelYears { .. } => "model_years",
            RouteShape::PriceQuote { .. } => "price_quote",
        }
    }
}

/// Parse the path remainder after `/api/` into a shape.
///
/// Returns `None` for anything outside the shape table; the caller answers
/// those with the catch-all guide.
pub fn parse_shape(path: &str) -> Option<RouteShape> {
    let path = path.strip_suffix('/').unwrap_or(path);
    let mut segments = path.split('/');

    // First segment carries mes, optionally &tipo[=N].
    let head = segments.next()?;
    let mut pairs = head.split('&');

    let (mes_key, mes) = split_token(pairs.next()?)?;
    if mes_key != "mes" {
        return None;
    }

    let (mes, tipo) = match pairs.next() {
        None => {
            // Bare `/api/mes` or `/api/mes=319` with nothing further.
            if segments.next().is_some() {
                return None;
            }
            return match mes {
                None => Some(RouteShape::Months),
                Some(mes) => Some(RouteShape::Month { mes }),
            };
        }
        Some(token) => {
            let (key, value) = split_token(token)?;
            if key != "tipo" || pairs.next().is_some() {
                return None;
            }
            let mes = mes?;
            match value {
                None => {
                    // `/api/mes=X&tipo` is terminal.
                    if segments.next().is_some() {
                        return None;
                    }
                    return Some(RouteShape::VehicleTypes { mes });
                }
                Some(tipo) => (mes, tipo),
            }
        }
    };

    // `mes=X&tipo=Y` alone is only a prefix of the brand shapes.
    let (key, marca) = split_token(segments.next()?)?;
    if key != "marca" {
        return None;
    }
    let marca = match marca {
        None => {
            return segments
                .next()
                .is_none()
                .then_some(RouteShape::Brands { mes, tipo });
        }
        Some(marca) => marca,
    };

    let token = match segments.next() {
        None => return Some(RouteShape::Brand { mes, tipo, marca }),
        Some(token) => token,
    };
    let (key, modelo) = split_token(token)?;
    if key != "modelo" {
        return None;
    }
    let modelo = match modelo {
        None => {
            return segments
                .next()
                .is_none()
                .then_some(RouteShape::Models { mes, tipo, marca });
        }
        Some(modelo) => modelo,
    };

    let (key, ano) = split_token(segments.next()?)?;
    if key != "ano" {
        return None;
    }
    let ano = match ano {
        None => {
            return segments.next().is_none().then_some(RouteShape::ModelYears {
                mes,
                tipo,
                marca,
                modelo,
            });
        }
        Some(ano) => ano,
    };

    let (key, anomodelo) = split_token(segments.next()?)?;
    let anomodelo = anomodelo?;
    if key != "anomodelo" {
        return None;
    }
    let (key, combustivel) = split_token(segments.next()?)?;
    let combustivel = combustivel?;
    if key != "combustivel" || segments.next().is_some() {
        return None;
    }

    Some(RouteShape::PriceQuote {
        mes,
        tipo,
        marca,
        modelo,
        ano,
        anomodelo,
        combustivel,
    })
}

/// Split a `key=value` token; a bare `key` carries no value, and an empty
/// value (`key=`) matches no shape at all.
fn split_token(token: &str) -> Option<(&str, Option<String>)> {
    match token.split_once('=') {
        Some((_, "")) => None,
        Some((key, value)) => Some((key, Some(value.to_string()))),
        None => Some((token, None)),
    }
}
