//! Update function for the supplier carousel.

use common::carousel::TRANSITION_DELAY_MS;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::fetch_asset;

use super::messages::Msg;
use super::state::SupplierCarousel;

pub fn update(component: &mut SupplierCarousel, ctx: &Context<SupplierCarousel>, msg: Msg) -> bool {
    match msg {
        Msg::Navigate(direction) => {
            let Some(token) = component.carousel.begin(direction) else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TRANSITION_DELAY_MS).await;
                link.send_message(Msg::Swap { direction, token });
            });
            true
        }
        Msg::Swap { direction, token } => component.carousel.complete(direction, token),
        Msg::ViewportResized(width) => component.carousel.resize(width),
        Msg::LogoResolved { name, url } => {
            component.logos.resolve(&name, url);
            true
        }
    }
}

/// Starts one independent load per logo filename not seen before.
pub fn preload_logos(component: &mut SupplierCarousel, ctx: &Context<SupplierCarousel>) {
    for name in component.logos.schedule(&ctx.props().suppliers) {
        let link = ctx.link().clone();
        spawn_local(async move {
            let url = fetch_asset(&name).await;
            link.send_message(Msg::LogoResolved { name, url });
        });
    }
}
