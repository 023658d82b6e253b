//! State of the consumption query form.
//!
//! Every submit gets a sequence number, whether or not it passes validation.
//! Searches may overlap; only the response of the most recent submit is
//! applied, so a slow earlier response can never overwrite a newer result or
//! the validation error of a later submit.

use std::rc::Rc;

use crate::errors::QueryError;
use crate::model::supplier::Supplier;
use crate::requests::ConsultRequest;

/// Parses the free-text consumption into the consult payload.
pub fn parse_consumption(raw: &str) -> Result<ConsultRequest, QueryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QueryError::ConsumptionRequired);
    }
    match trimmed.parse::<f64>() {
        Ok(consumo) if consumo.is_finite() => Ok(ConsultRequest { consumo }),
        _ => Err(QueryError::ConsumptionInvalid),
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// Raw text of the consumption input.
    pub input: String,
    /// Suppliers on display; shared read-only with the carousel.
    pub suppliers: Rc<Vec<Supplier>>,
    pub error: Option<QueryError>,
    /// Sequence number of the latest submit, `0` before the first.
    latest_search: u64,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, raw: String) {
        self.input = raw;
    }

    #[cfg(test)]
    fn latest_search(&self) -> u64 {
        self.latest_search
    }

    /// Validates the input and registers a new search.
    ///
    /// On success returns the sequence number to hand back to
    /// `finish_search` along with the payload to send. On failure the error is
    /// recorded, no request may be issued, and any search still in flight is
    /// superseded.
    pub fn begin_search(&mut self) -> Result<(u64, ConsultRequest), QueryError> {
        self.latest_search += 1;
        match parse_consumption(&self.input) {
            Ok(request) => Ok((self.latest_search, request)),
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Applies the response of search `seq`.
    ///
    /// Returns `false` when the response belongs to a superseded search and
    /// was discarded.
    pub fn finish_search(&mut self, seq: u64, result: Result<Vec<Supplier>, QueryError>) -> bool {
        if seq != self.latest_search {
            return false;
        }
        match result {
            Ok(list) if list.is_empty() => {
                self.suppliers = Rc::new(Vec::new());
                self.error = Some(QueryError::NoMatches);
            }
            Ok(list) => {
                self.suppliers = Rc::new(list);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(name: &str) -> Supplier {
        Supplier {
            name: name.to_string(),
            cost_per_kwh: 0.5,
            min_kwh_threshold: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn parse_consumption_rejects_blank_and_garbage() {
        assert_eq!(parse_consumption(""), Err(QueryError::ConsumptionRequired));
        assert_eq!(parse_consumption("  "), Err(QueryError::ConsumptionRequired));
        assert_eq!(parse_consumption("abc"), Err(QueryError::ConsumptionInvalid));
        assert_eq!(parse_consumption("inf"), Err(QueryError::ConsumptionInvalid));
        assert_eq!(
            parse_consumption(" 250.5 "),
            Ok(ConsultRequest { consumo: 250.5 })
        );
    }

    #[test]
    fn empty_consumption_sends_nothing() {
        let mut state = QueryState::new();
        state.set_input(String::new());
        assert_eq!(state.begin_search(), Err(QueryError::ConsumptionRequired));
        assert_eq!(state.latest_search(), 1);
        assert_eq!(
            state.error.as_ref().map(ToString::to_string).as_deref(),
            Some("Por favor, informe o consumo mensal.")
        );
    }

    #[test]
    fn empty_result_is_reported_and_clears_list() {
        let mut state = QueryState::new();
        state.set_input("100".to_string());
        let (seq, _) = state.begin_search().unwrap();
        state.finish_search(seq, Ok(vec![supplier("A")]));
        assert_eq!(state.suppliers.len(), 1);

        let (seq, _) = state.begin_search().unwrap();
        assert!(state.finish_search(seq, Ok(Vec::new())));
        assert!(state.suppliers.is_empty());
        assert_eq!(state.error, Some(QueryError::NoMatches));
    }

    #[test]
    fn matches_are_stored_and_error_cleared() {
        let mut state = QueryState::new();
        state.set_input("".to_string());
        let _ = state.begin_search();
        state.set_input("300".to_string());
        let (seq, request) = state.begin_search().unwrap();
        assert_eq!(request.consumo, 300.0);
        state.finish_search(seq, Ok(vec![supplier("A"), supplier("B")]));
        assert_eq!(state.error, None);
        assert_eq!(state.suppliers.len(), 2);
    }

    #[test]
    fn request_failure_keeps_previous_list() {
        let mut state = QueryState::new();
        state.set_input("300".to_string());
        let (seq, _) = state.begin_search().unwrap();
        state.finish_search(seq, Ok(vec![supplier("A")]));
        let (seq, _) = state.begin_search().unwrap();
        state.finish_search(seq, Err(QueryError::RequestFailed));
        assert_eq!(state.suppliers.len(), 1);
        assert_eq!(state.error, Some(QueryError::RequestFailed));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = QueryState::new();
        state.set_input("300".to_string());
        let (first, _) = state.begin_search().unwrap();
        let (second, _) = state.begin_search().unwrap();

        assert!(state.finish_search(second, Ok(vec![supplier("new")])));
        assert!(!state.finish_search(first, Ok(Vec::new())));
        assert_eq!(state.suppliers[0].name, "new");
        assert_eq!(state.error, None);
    }

    #[test]
    fn failed_validation_supersedes_search_in_flight() {
        let mut state = QueryState::new();
        state.set_input("100".to_string());
        let (seq, _) = state.begin_search().unwrap();

        state.set_input(String::new());
        assert_eq!(state.begin_search(), Err(QueryError::ConsumptionRequired));

        assert!(!state.finish_search(seq, Ok(vec![supplier("A")])));
        assert!(state.suppliers.is_empty());
        assert_eq!(state.error, Some(QueryError::ConsumptionRequired));
    }
}
