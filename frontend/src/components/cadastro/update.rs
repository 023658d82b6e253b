//! Update function for the registration page.
//!
//! Edits go straight into the draft. `Submit` runs the client-side checks in
//! `RegistrationState::begin_submit`; only a draft that passes them (and no
//! pending submission) produces the single POST.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::register_supplier;
use crate::helpers::{show_toast, Toast};

use super::messages::Msg;
use super::state::CadastroPage;

pub fn update(component: &mut CadastroPage, ctx: &Context<CadastroPage>, msg: Msg) -> bool {
    match msg {
        Msg::FieldChanged(field, value) => {
            component.form.apply_input(field, &value);
            true
        }
        Msg::LogoFileChanged(file) => {
            component.logo_file = file;
            false
        }
        Msg::Submit => {
            if let Some(supplier) = component.form.begin_submit() {
                let logo = component.logo_file.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = register_supplier(&supplier, logo).await;
                    link.send_message(Msg::SubmitFinished(result));
                });
            }
            true
        }
        Msg::SubmitFinished(result) => {
            let succeeded = result.is_ok();
            component.form.finish_submit(result);
            if succeeded {
                component.logo_file = None;
                component.picker_generation += 1;
                if let Some(message) = component.form.success {
                    show_toast(message, Toast::Success);
                }
            } else if let Some(err) = component.form.error.as_ref().filter(|e| !e.is_validation()) {
                show_toast(&err.to_string(), Toast::Failure);
            }
            true
        }
    }
}
