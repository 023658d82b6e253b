use crate::route::{switch, Route};
use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

/// Application shell: the router plus the centered page frame.
pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <div style="min-height:100vh;display:flex;align-items:center;justify-content:center;padding:1.5rem 0;">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        }
    }
}
