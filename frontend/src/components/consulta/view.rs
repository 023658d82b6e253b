//! View rendering for the query page: consumption form, inline error,
//! results carousel and the link to the registration page.

use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::inputs::FieldInput;
use crate::components::FORM_STYLE;
use crate::route::Route;

use super::carousel::SupplierCarousel;
use super::messages::Msg;
use super::state::ConsultaPage;

pub fn view(component: &ConsultaPage, ctx: &Context<ConsultaPage>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Search
    });
    let query = &component.query;

    html! {
        <div style="width:100%;display:flex;align-items:center;justify-content:center;padding:0 1rem;box-sizing:border-box;">
            <form style={FORM_STYLE} {onsubmit}>
                <div style="display:flex;justify-content:center;margin-bottom:2rem;padding-bottom:1.5rem;">
                    <h1 style="color:#fff;font-size:1.5rem;">{ "Buscar - Fornecedores" }</h1>
                </div>

                <div style="display:flex;flex-wrap:wrap;justify-content:space-around;align-items:center;gap:1rem;margin-bottom:2rem;padding-bottom:1.5rem;">
                    <div>
                        <FieldInput
                            id="consumo"
                            label="Consumo Mensal"
                            input_type="number"
                            value={query.input.clone()}
                            placeholder="Digite o consumo mensal"
                            on_input={link.callback(Msg::ConsumptionChanged)}
                        />
                    </div>
                    <span style="color:#fff;">{ "kWh" }</span>
                    <button id="buscar" type="submit" style="background:#000;color:#fff;border:none;border-radius:0.375rem;padding:0.5rem 1.5rem;cursor:pointer;">
                        { "Buscar" }
                    </button>
                </div>

                {
                    match &query.error {
                        Some(err) => html! {
                            <div style="display:flex;justify-content:center;color:#ef4444;font-size:0.875rem;">{ err.to_string() }</div>
                        },
                        None => html! {},
                    }
                }

                <div style="display:flex;flex-direction:column;margin-bottom:2rem;padding-bottom:1.5rem;">
                    {
                        if query.suppliers.is_empty() {
                            html! {}
                        } else {
                            html! { <SupplierCarousel suppliers={query.suppliers.clone()} /> }
                        }
                    }
                </div>

                <div style="display:flex;justify-content:center;">
                    <Link<Route> to={Route::CadastrarFornecedor} classes="nav-link">{ "Novo Fornecedor" }</Link<Route>>
                </div>
            </form>
        </div>
    }
}
