use common::errors::RegistrationError;
use common::forms::registration::SupplierField;

pub enum Msg {
    FieldChanged(SupplierField, String),
    LogoFileChanged(Option<web_sys::File>),
    Submit,
    SubmitFinished(Result<(), RegistrationError>),
}
