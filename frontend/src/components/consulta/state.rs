use common::query::QueryState;

/// Main state container for the `ConsultaPage`.
pub struct ConsultaPage {
    /// Consumption input, search results and the inline error.
    pub query: QueryState,
}

impl ConsultaPage {
    pub fn new() -> Self {
        Self {
            query: QueryState::new(),
        }
    }
}
