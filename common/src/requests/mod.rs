use serde::{Deserialize, Serialize};

use crate::model::supplier::Supplier;

/// Path of the supplier creation endpoint, relative to the API base.
pub const REGISTER_PATH: &str = "/fornecedores/adicionar";

/// Path of the supplier matching endpoint, relative to the API base.
pub const CONSULT_PATH: &str = "/fornecedores/consultar";

/// Multipart field carrying the binary logo.
pub const LOGO_FIELD: &str = "logo";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Request payload for the consult endpoint.
/// Contains the declared monthly consumption in kWh.
pub struct ConsultRequest {
    pub consumo: f64,
}

/// Text fields of the multipart registration body, in send order.
///
/// The binary `logo` part is appended separately by the caller. `telefone` is
/// only included when the phone is filled in.
pub fn multipart_text_fields(supplier: &Supplier) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("nome", supplier.name.clone()),
        ("estado", supplier.state.clone()),
        ("custo_por_kwh", supplier.cost_per_kwh.to_string()),
        ("limite_minimo_kwh", supplier.min_kwh_threshold.to_string()),
        ("numero_total_clientes", supplier.total_customers.to_string()),
        ("avaliacao_media", supplier.average_rating.to_string()),
    ];
    if !supplier.phone.trim().is_empty() {
        fields.push(("telefone", supplier.phone.clone()));
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consult_request_wire_shape() {
        let body = serde_json::to_string(&ConsultRequest { consumo: 350.5 }).unwrap();
        assert_eq!(body, r#"{"consumo":350.5}"#);
    }

    #[test]
    fn multipart_fields_skip_empty_phone() {
        let supplier = Supplier {
            name: "Acme".to_string(),
            state: "MG".to_string(),
            cost_per_kwh: 0.5,
            min_kwh_threshold: 100.0,
            average_rating: 4.0,
            ..Default::default()
        };
        let fields = multipart_text_fields(&supplier);
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "nome",
                "estado",
                "custo_por_kwh",
                "limite_minimo_kwh",
                "numero_total_clientes",
                "avaliacao_media"
            ]
        );
        assert_eq!(fields[2].1, "0.5");
        assert_eq!(fields[3].1, "100");
    }

    #[test]
    fn multipart_fields_include_phone() {
        let supplier = Supplier {
            phone: "(31) 90000-0000".to_string(),
            ..Default::default()
        };
        let fields = multipart_text_fields(&supplier);
        assert_eq!(
            fields.last(),
            Some(&("telefone", "(31) 90000-0000".to_string()))
        );
    }
}
