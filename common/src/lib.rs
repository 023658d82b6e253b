pub mod carousel;
pub mod errors;
pub mod forms;
pub mod model;
pub mod query;
pub mod requests;
