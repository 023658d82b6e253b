use common::errors::QueryError;
use common::model::supplier::Supplier;

pub enum Msg {
    ConsumptionChanged(String),
    Search,
    SearchFinished {
        seq: u64,
        result: Result<Vec<Supplier>, QueryError>,
    },
}
