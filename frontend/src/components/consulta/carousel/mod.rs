//! Supplier carousel: paginated, animated view over the search results.
//!
//! Responsibilities
//! - Track page and page size (`common::carousel::CarouselState`), with the
//!   page size following the window width through a `resize` listener.
//! - Run the two-phase transition: fade/slide out, swap after
//!   `TRANSITION_DELAY_MS`, slide back in.
//! - Resolve logo filenames once per name through `LogoCache`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use common::carousel::logo_cache::LogoCache;
use common::carousel::CarouselState;

use crate::helpers::viewport_width;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SupplierCarouselProps;
pub use state::SupplierCarousel;

impl Component for SupplierCarousel {
    type Message = Msg;
    type Properties = SupplierCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = SupplierCarousel {
            carousel: CarouselState::new(ctx.props().suppliers.len(), viewport_width()),
            logos: LogoCache::new(),
            resize_listener: None,
        };
        component.resize_listener = listen_to_resize(ctx);
        update::preload_logos(&mut component, ctx);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if std::rc::Rc::ptr_eq(&old_props.suppliers, &ctx.props().suppliers) {
            return false;
        }
        self.carousel.reset(ctx.props().suppliers.len());
        update::preload_logos(self, ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.resize_listener.take()) {
            window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}

fn listen_to_resize(ctx: &Context<SupplierCarousel>) -> Option<Closure<dyn Fn()>> {
    let window = web_sys::window()?;
    let link = ctx.link().clone();
    let listener = Closure::<dyn Fn()>::new(move || {
        link.send_message(Msg::ViewportResized(viewport_width()));
    });
    window
        .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(listener)
}
