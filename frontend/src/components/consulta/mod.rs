//! Query page (`/`): asks for the monthly consumption, posts it to the
//! matching endpoint and shows the returned suppliers in a carousel.

use yew::prelude::*;

pub mod carousel;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ConsultaPage;

impl Component for ConsultaPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ConsultaPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
