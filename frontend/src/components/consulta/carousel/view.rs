//! View rendering for the supplier carousel.
//!
//! Layout: previous button, the sliding track with the visible cards, next
//! button, and the page indicator below on wide viewports. Buttons are only
//! rendered when there is more than one page.

use common::carousel::Direction;
use common::model::supplier::{card_key, Supplier};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::customers_label;

use super::messages::Msg;
use super::state::SupplierCarousel;

const NAV_BUTTON_STYLE: &str = "color:#fff;background:#4b5563;border:none;padding:0.5rem 1rem;cursor:pointer;";
const CARD_STYLE: &str = "text-align:center;color:#fff;margin:0 8px;flex-shrink:0;background:#111827;border-radius:0.5rem;box-shadow:0 4px 6px rgba(0,0,0,0.3);padding:1rem;box-sizing:border-box;";
const CONTACT_STYLE: &str = "display:flex;align-items:center;justify-content:center;margin-top:1rem;background:#22c55e;color:#fff;padding:0.5rem 1rem;border-radius:0.5rem;text-decoration:none;";

pub fn view(component: &SupplierCarousel, ctx: &Context<SupplierCarousel>) -> Html {
    let suppliers = &ctx.props().suppliers;
    if suppliers.is_empty() {
        return html! {};
    }

    let link = ctx.link();
    let carousel = &component.carousel;
    let per_page = carousel.items_per_page();
    let cards = suppliers[carousel.visible_range()]
        .iter()
        .enumerate()
        .map(|(offset, supplier)| {
            let key = card_key(suppliers, carousel.current_index() + offset);
            supplier_card(component, supplier, key, per_page)
        })
        .collect::<Html>();

    html! {
        <div style="position:relative;width:100%;margin:0 auto;padding:1rem;box-sizing:border-box;">
            <div style="display:flex;align-items:center;justify-content:space-between;">
                { nav_button(link, Direction::Previous, carousel.show_controls(), carousel.prev_disabled()) }
                <div style="display:flex;width:100%;overflow:hidden;">
                    <div style={carousel.animation().style()}>
                        { cards }
                    </div>
                </div>
                { nav_button(link, Direction::Next, carousel.show_controls(), carousel.next_disabled()) }
            </div>
            {
                if carousel.is_large_screen() {
                    html! {
                        <div style="text-align:center;color:#fff;margin-top:1rem;">
                            { format!("Página {} de {}", carousel.current_page(), carousel.total_pages()) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn nav_button(
    link: &Scope<SupplierCarousel>,
    direction: Direction,
    visible: bool,
    disabled: bool,
) -> Html {
    if !visible {
        return html! {};
    }
    let (label, corners) = match direction {
        Direction::Previous => ("<", "border-radius:0.75rem 0 0 0.75rem;margin-right:0.5rem;"),
        Direction::Next => (">", "border-radius:0 0.75rem 0.75rem 0;margin-left:0.5rem;"),
    };
    html! {
        <button
            type="button"
            style={format!("{NAV_BUTTON_STYLE}{corners}")}
            {disabled}
            onclick={link.callback(move |_| Msg::Navigate(direction))}
        >
            { label }
        </button>
    }
}

fn supplier_card(
    component: &SupplierCarousel,
    supplier: &Supplier,
    key: String,
    per_page: usize,
) -> Html {
    let width = format!("width:calc(100% / {per_page} - 16px);");
    html! {
        <div {key} style={format!("{CARD_STYLE}{width}")}>
            <div style="display:flex;flex-direction:column;justify-content:center;margin-bottom:0.5rem;">
                <p style="font-size:1.125rem;font-weight:600;margin:0 0 0.25rem 0;">{ supplier.rating_label() }</p>
                <div style="display:flex;justify-content:center;margin-bottom:0.5rem;">
                    { stars(supplier) }
                </div>
            </div>
            <div style="display:flex;justify-content:center;margin-bottom:1rem;">
                { logo(component, supplier) }
            </div>
            <h3 style="font-size:1.25rem;font-weight:600;margin:0;">{ supplier.name.clone() }</h3>
            <p>{ supplier.state.clone() }</p>
            <p>{ supplier.cost_label() }</p>
            <p>{ supplier.min_kwh_label() }</p>
            <p style="color:#9ca3af;">{ customers_label(supplier.customer_count()) }</p>
            {
                match supplier.contact_link() {
                    Some(href) => html! {
                        <a {href} target="_blank" rel="noopener noreferrer" style={CONTACT_STYLE}>
                            { whatsapp_icon() }
                            <span>{ "Entrar em contato" }</span>
                        </a>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

/// Chat bubble with a handset, drawn in the link's text color.
fn whatsapp_icon() -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"
            style="margin-right:0.5rem;" aria-hidden="true">
            <path d="M3.5 20.5l1.3-4.1A8.5 8.5 0 1 1 8 19.4z" />
            <path d="M9 8.5c0 3.6 2.9 6.5 6.5 6.5l1-1.6-2-1-1 .9c-1-.4-1.9-1.3-2.3-2.3l.9-1-1-2z" fill="currentColor" stroke="none" />
        </svg>
    }
}

fn stars(supplier: &Supplier) -> Html {
    supplier
        .star_scale()
        .iter()
        .map(|filled| {
            let color = if *filled { "#facc15" } else { "#9ca3af" };
            html! { <span style={format!("color:{color};font-size:1rem;")}>{ if *filled { "★" } else { "☆" } }</span> }
        })
        .collect::<Html>()
}

fn logo(component: &SupplierCarousel, supplier: &Supplier) -> Html {
    match component.logos.image_url(&supplier.logo) {
        Some(src) => html! {
            <img
                src={src.to_string()}
                alt={supplier.name.clone()}
                style="max-width:100%;height:auto;max-height:100px;object-fit:contain;"
            />
        },
        None => html! { <div style="width:100px;height:100px;" /> },
    }
}
