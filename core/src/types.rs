//! Address record returned by the zip-code lookup API.
//!
//! # Design
//! Field names are English; the upstream JSON keys (Portuguese, ViaCEP
//! style) are kept on the wire through `serde(rename)`. Every field is
//! optional because the upstream omits fields freely and because the empty
//! record doubles as the "lookup failed" value. The mock-server crate defines
//! its own copy of this schema; integration tests catch drift between the two.

use serde::{Deserialize, Serialize};

/// A flat address record keyed by postal code.
///
/// Unknown keys in the upstream payload (such as the `"erro": true` marker
/// sent for unknown codes) are ignored, so such a payload decodes to the
/// empty record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZipCodeResponse {
    #[serde(rename = "cep", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "logradouro", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(rename = "complemento", skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(rename = "unidade", skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "bairro", skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(rename = "localidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "uf", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    #[serde(rename = "regiao", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gia: Option<String>,
    #[serde(rename = "ddd", skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub siafi: Option<String>,
}

impl ZipCodeResponse {
    /// True when no field is set, i.e. the value equals `ZipCodeResponse::default()`.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(ZipCodeResponse::default().is_empty());
    }

    #[test]
    fn deserializes_upstream_keys() {
        let body = r#"{
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "unidade": "",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP",
            "estado": "São Paulo",
            "regiao": "Sudeste",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        }"#;
        let address: ZipCodeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(address.postal_code.as_deref(), Some("01001-000"));
        assert_eq!(address.street.as_deref(), Some("Praça da Sé"));
        assert_eq!(address.complement.as_deref(), Some("lado ímpar"));
        assert_eq!(address.unit.as_deref(), Some(""));
        assert_eq!(address.neighborhood.as_deref(), Some("Sé"));
        assert_eq!(address.city.as_deref(), Some("São Paulo"));
        assert_eq!(address.state.as_deref(), Some("SP"));
        assert_eq!(address.state_name.as_deref(), Some("São Paulo"));
        assert_eq!(address.region.as_deref(), Some("Sudeste"));
        assert_eq!(address.ibge.as_deref(), Some("3550308"));
        assert_eq!(address.gia.as_deref(), Some("1004"));
        assert_eq!(address.area_code.as_deref(), Some("11"));
        assert_eq!(address.siafi.as_deref(), Some("7107"));
        assert!(!address.is_empty());
    }

    #[test]
    fn missing_fields_stay_unset() {
        let address: ZipCodeResponse =
            serde_json::from_str(r#"{"cep":"01001-000","uf":"SP"}"#).unwrap();
        assert_eq!(address.state.as_deref(), Some("SP"));
        assert!(address.street.is_none());
        assert!(address.city.is_none());
    }

    #[test]
    fn not_found_marker_decodes_to_empty_record() {
        let address: ZipCodeResponse = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(address.is_empty());
    }

    #[test]
    fn serializes_with_upstream_keys_and_skips_unset() {
        let address = ZipCodeResponse {
            postal_code: Some("01001-000".to_string()),
            city: Some("São Paulo".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["cep"], "01001-000");
        assert_eq!(json["localidade"], "São Paulo");
        assert!(json.get("logradouro").is_none());
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
