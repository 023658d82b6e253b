use std::rc::Rc;

use common::model::supplier::Supplier;
use yew::prelude::*;

/// Properties for the `SupplierCarousel`.
#[derive(Properties, PartialEq, Clone)]
pub struct SupplierCarouselProps {
    /// Suppliers returned by the last search. Read-only for the carousel; a
    /// new list (new `Rc`) resets it to the first page.
    pub suppliers: Rc<Vec<Supplier>>,
}
