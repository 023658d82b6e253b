//! Draft state and validation for the supplier registration form.
//!
//! The draft is edited one field at a time from raw input text. Submission
//! goes through `RegistrationState::begin_submit`, which either hands back the
//! validated draft to send or records the validation error and blocks the
//! request. `finish_submit` applies the outcome of the single POST.

use std::collections::HashMap;

use crate::errors::RegistrationError;
use crate::model::supplier::Supplier;

/// Highest accepted average rating.
pub const MAX_RATING: f64 = 5.0;

/// Confirmation shown after a successful registration.
pub const SUCCESS_MESSAGE: &str = "Fornecedor adicionado com sucesso!";

/// One input of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplierField {
    Name,
    Logo,
    State,
    CostPerKwh,
    MinKwhThreshold,
    TotalCustomers,
    AverageRating,
    Phone,
}

impl SupplierField {
    pub const ALL: [SupplierField; 8] = [
        SupplierField::Name,
        SupplierField::Logo,
        SupplierField::State,
        SupplierField::CostPerKwh,
        SupplierField::MinKwhThreshold,
        SupplierField::TotalCustomers,
        SupplierField::AverageRating,
        SupplierField::Phone,
    ];

    /// DOM id of the input; matches the wire name of the field.
    pub fn id(self) -> &'static str {
        match self {
            SupplierField::Name => "nome",
            SupplierField::Logo => "logo",
            SupplierField::State => "estado",
            SupplierField::CostPerKwh => "custo_por_kwh",
            SupplierField::MinKwhThreshold => "limite_minimo_kwh",
            SupplierField::TotalCustomers => "numero_total_clientes",
            SupplierField::AverageRating => "avaliacao_media",
            SupplierField::Phone => "telefone",
        }
    }

    pub fn from_id(id: &str) -> Option<SupplierField> {
        SupplierField::ALL.into_iter().find(|field| field.id() == id)
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            SupplierField::CostPerKwh
                | SupplierField::MinKwhThreshold
                | SupplierField::TotalCustomers
                | SupplierField::AverageRating
        )
    }
}

/// Coerces raw input text into a number. Empty or unparseable text becomes
/// `0.0`, which the positivity checks then reject.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// The supplier being edited in the registration form.
///
/// Numeric fields keep the text as typed next to the coerced value, so an
/// empty or half-typed input is shown back unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SupplierDraft {
    pub supplier: Supplier,
    numeric_text: HashMap<SupplierField, String>,
}

impl SupplierDraft {
    /// Updates exactly one field from its raw input text.
    pub fn apply_input(&mut self, field: SupplierField, raw: &str) {
        let s = &mut self.supplier;
        match field {
            SupplierField::Name => s.name = raw.to_string(),
            SupplierField::Logo => s.logo = raw.to_string(),
            SupplierField::State => s.state = raw.to_string(),
            SupplierField::Phone => s.phone = raw.to_string(),
            SupplierField::CostPerKwh => s.cost_per_kwh = coerce_number(raw),
            SupplierField::MinKwhThreshold => s.min_kwh_threshold = coerce_number(raw),
            SupplierField::TotalCustomers => s.total_customers = coerce_number(raw),
            SupplierField::AverageRating => s.average_rating = coerce_number(raw),
        }
        if field.is_numeric() {
            self.numeric_text.insert(field, raw.to_string());
        }
    }

    /// Text of a field as last typed; numeric fields never edited are empty.
    pub fn display_value(&self, field: SupplierField) -> String {
        let s = &self.supplier;
        match field {
            SupplierField::Name => s.name.clone(),
            SupplierField::Logo => s.logo.clone(),
            SupplierField::State => s.state.clone(),
            SupplierField::Phone => s.phone.clone(),
            _ => self.numeric_text.get(&field).cloned().unwrap_or_default(),
        }
    }

    /// Client-side checks, in the order the form reports them.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let s = &self.supplier;
        if s.name.trim().is_empty() {
            return Err(RegistrationError::NameRequired);
        }
        if s.cost_per_kwh.is_nan() || s.cost_per_kwh <= 0.0 {
            return Err(RegistrationError::CostNotPositive);
        }
        if s.min_kwh_threshold.is_nan() || s.min_kwh_threshold <= 0.0 {
            return Err(RegistrationError::MinKwhNotPositive);
        }
        if s.average_rating > MAX_RATING {
            return Err(RegistrationError::RatingAboveMax);
        }
        if s.average_rating < 0.0 {
            return Err(RegistrationError::RatingNegative);
        }
        Ok(())
    }
}

/// Registration form state: the draft plus the feedback shown below it.
#[derive(Debug, Clone, Default)]
pub struct RegistrationState {
    pub draft: SupplierDraft,
    pub error: Option<RegistrationError>,
    pub success: Option<&'static str>,
    /// A POST is in flight; further submits are ignored until it settles.
    pub submitting: bool,
}

impl RegistrationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_input(&mut self, field: SupplierField, raw: &str) {
        self.draft.apply_input(field, raw);
    }

    /// Validates the draft and, if it passes, marks a submission in flight.
    ///
    /// Returns the supplier to send, or `None` when no request may be issued
    /// (validation failed, or a submission is already pending). On validation
    /// failure the error is recorded and the draft is left untouched.
    pub fn begin_submit(&mut self) -> Option<Supplier> {
        if self.submitting {
            return None;
        }
        match self.draft.validate() {
            Ok(()) => {
                self.error = None;
                self.success = None;
                self.submitting = true;
                Some(self.draft.supplier.clone())
            }
            Err(err) => {
                self.error = Some(err);
                self.success = None;
                None
            }
        }
    }

    /// Applies the outcome of the POST started by `begin_submit`.
    pub fn finish_submit(&mut self, result: Result<(), RegistrationError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.draft = SupplierDraft::default();
                self.error = None;
                self.success = Some(SUCCESS_MESSAGE);
            }
            Err(err) => {
                self.error = Some(err);
                self.success = None;
            }
        }
    }
}
