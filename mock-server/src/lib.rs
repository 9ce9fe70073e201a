use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{debug, info};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub cep: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub unidade: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub regiao: String,
    #[serde(default)]
    pub ibge: String,
    #[serde(default)]
    pub gia: String,
    #[serde(default)]
    pub ddd: String,
    #[serde(default)]
    pub siafi: String,
}

/// Addresses keyed by the 8-digit postal code (no hyphen).
pub type Db = Arc<HashMap<String, Address>>;

pub fn se_square() -> Address {
    Address {
        cep: "01001-000".to_string(),
        logradouro: "Praça da Sé".to_string(),
        complemento: "lado ímpar".to_string(),
        unidade: String::new(),
        bairro: "Sé".to_string(),
        localidade: "São Paulo".to_string(),
        uf: "SP".to_string(),
        estado: "São Paulo".to_string(),
        regiao: "Sudeste".to_string(),
        ibge: "3550308".to_string(),
        gia: "1004".to_string(),
        ddd: "11".to_string(),
        siafi: "7107".to_string(),
    }
}

pub fn app() -> Router {
    app_with(vec![se_square()])
}

pub fn app_with(addresses: Vec<Address>) -> Router {
    let db: Db = Arc::new(
        addresses
            .into_iter()
            .map(|a| (normalize(&a.cep), a))
            .collect(),
    );
    Router::new()
        .route("/ws/{cep}/json", get(lookup))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock zip-code API listening");
    }
    axum::serve(listener, app()).await
}

fn normalize(cep: &str) -> String {
    cep.replace('-', "")
}

fn is_valid_cep(cep: &str) -> bool {
    cep.len() == 8 && cep.bytes().all(|b| b.is_ascii_digit())
}

async fn lookup(State(db): State<Db>, Path(cep): Path<String>) -> Response {
    let cep = normalize(&cep);
    if !is_valid_cep(&cep) {
        debug!(cep = %cep, "rejecting malformed postal code");
        return StatusCode::BAD_REQUEST.into_response();
    }
    match db.get(&cep) {
        Some(address) => Json(address.clone()).into_response(),
        None => {
            debug!(cep = %cep, "unknown postal code");
            Json(json!({ "erro": true })).into_response()
        }
    }
}
