//! Update function for the query page.
//!
//! `Search` validates the consumption and, when it is valid, fires one POST;
//! the response comes back as `SearchFinished` tagged with its search number,
//! and `QueryState` drops it if a newer search has started meanwhile.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::consult_suppliers;

use super::messages::Msg;
use super::state::ConsultaPage;

pub fn update(component: &mut ConsultaPage, ctx: &Context<ConsultaPage>, msg: Msg) -> bool {
    match msg {
        Msg::ConsumptionChanged(value) => {
            component.query.set_input(value);
            true
        }
        Msg::Search => {
            if let Ok((seq, request)) = component.query.begin_search() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = consult_suppliers(&request).await;
                    link.send_message(Msg::SearchFinished { seq, result });
                });
            }
            true
        }
        Msg::SearchFinished { seq, result } => component.query.finish_search(seq, result),
    }
}
