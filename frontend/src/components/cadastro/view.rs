//! View rendering for the registration page.

use common::forms::registration::SupplierField;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::inputs::{FieldInput, ImageInput};
use crate::components::FORM_STYLE;
use crate::route::Route;

use super::messages::Msg;
use super::state::CadastroPage;

pub fn view(component: &CadastroPage, ctx: &Context<CadastroPage>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let form = &component.form;

    html! {
        <div style="width:100%;display:flex;align-items:center;justify-content:center;">
            <form style={FORM_STYLE} {onsubmit}>
                <div style="display:flex;justify-content:center;margin-bottom:2rem;padding-bottom:1.5rem;">
                    <h1 style="color:#fff;font-size:1.5rem;">{ "Adicionar Fornecedor" }</h1>
                </div>

                <div style="display:flex;flex-direction:column;margin-bottom:1rem;">
                    { for SupplierField::ALL.iter().map(|field| field_input(component, link, *field)) }
                    <div>
                        <ImageInput
                            key={component.picker_generation}
                            id="logo_arquivo"
                            label="Logo (arquivo)"
                            on_file_change={link.callback(Msg::LogoFileChanged)}
                        />
                    </div>
                </div>

                {
                    match &form.error {
                        Some(err) => html! {
                            <div style="display:flex;justify-content:center;color:#ef4444;margin-bottom:1rem;">{ err.to_string() }</div>
                        },
                        None => html! {},
                    }
                }
                {
                    match form.success {
                        Some(message) => html! {
                            <div style="display:flex;justify-content:center;color:#22c55e;margin-bottom:1rem;">{ message }</div>
                        },
                        None => html! {},
                    }
                }

                <div style="display:flex;flex-wrap:wrap-reverse;justify-content:space-between;align-items:center;gap:0.75rem;margin-top:1.5rem;">
                    <Link<Route> to={Route::Consulta} classes="nav-link">{ "Voltar" }</Link<Route>>
                    <button
                        type="submit"
                        disabled={form.submitting}
                        style="background:#000;color:#fff;border:none;padding:0.5rem 1rem;border-radius:0.375rem;cursor:pointer;"
                    >
                        { if form.submitting { "Enviando..." } else { "Adicionar" } }
                    </button>
                </div>
            </form>
        </div>
    }
}

fn field_input(component: &CadastroPage, link: &Scope<CadastroPage>, field: SupplierField) -> Html {
    let (label, placeholder) = field_text(field);
    let input_type = if field.is_numeric() { "number" } else { "text" };
    html! {
        <FieldInput
            id={field.id()}
            {label}
            {input_type}
            value={component.form.draft.display_value(field)}
            {placeholder}
            on_input={link.callback(move |value: String| Msg::FieldChanged(field, value))}
        />
    }
}

/// Label and placeholder of each registration input.
fn field_text(field: SupplierField) -> (&'static str, &'static str) {
    match field {
        SupplierField::Name => ("Nome", "Digite o nome do fornecedor"),
        SupplierField::Logo => ("Logo", "Digite o nome do arquivo ou a URL da logo"),
        SupplierField::State => ("Estado", "Digite o estado"),
        SupplierField::CostPerKwh => ("Custo por kWh", "Digite o custo por kWh"),
        SupplierField::MinKwhThreshold => ("Limite Mínimo kWh", "Digite o limite mínimo kWh"),
        SupplierField::TotalCustomers => ("Número Total de Clientes", "Digite o número total de clientes"),
        SupplierField::AverageRating => ("Avaliação Média", "Digite a avaliação média"),
        SupplierField::Phone => ("Telefone - (WhatsApp)", "(99) 99999-9999"),
    }
}
