//! User-facing error types shared by the forms.
//!
//! The `Display` text of every variant is the message shown inline in the UI,
//! so the strings stay in Portuguese.

use thiserror::Error;

/// Failures of the supplier registration form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("O campo Nome é obrigatório.")]
    NameRequired,
    #[error("O campo Custo por kWh deve ser maior que 0,0.")]
    CostNotPositive,
    #[error("O campo Limite Mínimo kWh deve ser maior que 0")]
    MinKwhNotPositive,
    #[error("O campo avaliação média não deve ser maior que 5")]
    RatingAboveMax,
    #[error("O campo avaliação média não deve ser menor que 0")]
    RatingNegative,
    /// Non-2xx response, transport failure or undecodable body.
    #[error("Erro ao adicionar fornecedor")]
    RequestFailed,
}

impl RegistrationError {
    /// `true` for failures detected before any request is sent.
    pub fn is_validation(&self) -> bool {
        !matches!(self, RegistrationError::RequestFailed)
    }
}

/// Failures of the consumption query form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Por favor, informe o consumo mensal.")]
    ConsumptionRequired,
    #[error("Informe um consumo mensal válido.")]
    ConsumptionInvalid,
    #[error("Erro ao buscar fornecedores")]
    RequestFailed,
    /// A successful query that matched nothing.
    #[error("Não existe fornecedores que atendam nessas condições")]
    NoMatches,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failures_are_not_validation() {
        assert!(RegistrationError::NameRequired.is_validation());
        assert!(!RegistrationError::RequestFailed.is_validation());
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            QueryError::ConsumptionRequired.to_string(),
            "Por favor, informe o consumo mensal."
        );
        assert_eq!(
            RegistrationError::RequestFailed.to_string(),
            "Erro ao adicionar fornecedor"
        );
    }
}
