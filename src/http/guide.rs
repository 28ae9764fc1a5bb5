//! Static usage-guide payloads.
//!
//! The manual is embedded in every welcome and error response so a caller
//! can self-correct without leaving the API. The catch-all payload for
//! unmatched routes is defined independently of the per-resource manual,
//! mirroring the published surface of the original service.

use serde_json::{json, Map, Value};

/// Contact block shared by the manual and the welcome payloads.
fn contato() -> Value {
    json!({
        "instagram": "https://instagram.com/alequizao",
        "whatsapp": "https://wa.me/5582988717072",
        "autor": "@alequizao",
        "email": "alexjuniorcalado@gmail.com",
        "versao": "1.0.0"
    })
}

fn exemplos() -> Value {
    json!({
        "1. Consultar Meses": {
            "Listar todos": "/api/mes",
            "Consultar específico": "/api/mes=319"
        },
        "2. Consultar Tipos de Veículo": {
            "Listar todos": "/api/mes=319&tipo",
            "Consultar específico": "/api/mes=319&tipo=2 (1:Carro, 2:Moto, 3:Caminhão)"
        },
        "3. Consultar Marcas": {
            "Listar todas": "/api/mes=319&tipo=2/marca",
            "Consultar específica": "/api/mes=319&tipo=2/marca=80"
        },
        "4. Consultar Modelos": {
            "Listar todos": "/api/mes=319&tipo=2/marca=80/modelo",
            "Consultar específico": "/api/mes=319&tipo=2/marca=80/modelo=8071"
        },
        "5. Consultar Anos": {
            "Listar todos": "/api/mes=319&tipo=2/marca=80/modelo=8071/ano",
            "Consultar específico": "/api/mes=319&tipo=2/marca=80/modelo=8071/ano=2020-1"
        },
        "6. Consulta Completa": {
            "Exemplo": "/api/mes=319&tipo=2/marca=80/modelo=8071/ano=2020-1/anomodelo=2020/combustivel=1"
        }
    })
}

fn passo_a_passo() -> Value {
    json!({
        "Como usar": "Siga o passo a passo abaixo para consultar um veículo:",
        "Passo 1": "Consulte o mês de referência usando /api/mes",
        "Passo 2": "Escolha o tipo de veículo usando /api/mes=XXX&tipo",
        "Passo 3": "Selecione a marca usando /api/mes=XXX&tipo=Y/marca",
        "Passo 4": "Escolha o modelo usando /api/mes=XXX&tipo=Y/marca=ZZ/modelo",
        "Passo 5": "Selecione o ano usando /api/mes=XXX&tipo=Y/marca=ZZ/modelo=WWWW/ano",
        "Passo 6": "Faça a consulta completa usando o exemplo em '6. Consulta Completa'"
    })
}

fn codigos_uteis() -> Value {
    json!({
        "Tipos de Veículo": {
            "1": "Carro",
            "2": "Moto",
            "3": "Caminhão"
        },
        "Combustível": {
            "1": "Gasolina",
            "2": "Álcool",
            "3": "Diesel",
            "4": "Flex"
        }
    })
}

/// The per-resource usage manual embedded in welcome and error envelopes.
pub fn manual() -> Value {
    let mut guia = passo_a_passo();
    if let Some(guia) = guia.as_object_mut() {
        guia.insert("Códigos Úteis".to_string(), codigos_uteis());
    }
    json!({
        "contato": contato(),
        "exemplos": exemplos(),
        "guiaDeUso": guia
    })
}

/// Welcome payload for `/api`.
pub fn welcome_api() -> Value {
    merge(
        json!({
            "message": "Bem-vindo à API de Consulta FIPE",
            "descricao": "Esta API permite consultar preços de veículos na tabela FIPE de forma simples e intuitiva.",
            "autor": "@alequizao",
            "versao": "1.0.0"
        }),
        manual(),
    )
}

/// Welcome payload for the bare root.
pub fn welcome_root() -> Value {
    merge(
        json!({
            "message": "Bem-vindo à API de Consulta FIPE",
            "descricao": "Use o prefixo /api para acessar os endpoints da API.",
            "autor": "@alequizao",
            "versao": "1.0.0",
            "email": "alexjuniorcalado@gmail.com",
            "whatsapp": "https://wa.me/5582988717072",
            "instagram": "https://instagram.com/alequizao"
        }),
        manual(),
    )
}

/// Catch-all payload for requests matching no shape.
pub fn route_not_found() -> Value {
    json!({
        "error": "Rota não encontrada",
        "message": "A URL solicitada não existe ou está incorreta. Siga o passo a passo abaixo:",
        "contato": {
            "instagram": "https://instagram.com/alequizao",
            "whatsapp": "https://wa.me/5582988717072"
        },
        "guiaDeUso": passo_a_passo(),
        "exemplos": exemplos(),
        "codigosUteis": codigos_uteis()
    })
}

/// Append the manual's sections to an envelope, keeping the envelope's own
/// fields first.
pub fn merge(envelope: Value, guide: Value) -> Value {
    let mut merged = match envelope {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("body".to_string(), other);
            map
        }
    };
    if let Value::Object(fields) = guide {
        merged.extend(fields);
    }
    Value::Object(merged)
}
