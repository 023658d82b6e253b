use common::forms::registration::RegistrationState;

/// Main state container for the `CadastroPage`.
///
/// Fields are `pub` because they are accessed by `view` and `update`.
pub struct CadastroPage {
    /// Draft supplier, inline error/success and the in-flight flag.
    pub form: RegistrationState,

    /// Logo picked in the image field. When present the supplier is sent as
    /// multipart form data instead of JSON.
    pub logo_file: Option<web_sys::File>,

    /// Key of the image field; bumped after a successful registration so the
    /// file input and its preview are rebuilt empty.
    pub picker_generation: u32,
}

impl CadastroPage {
    pub fn new() -> Self {
        Self {
            form: RegistrationState::new(),
            logo_file: None,
            picker_generation: 0,
        }
    }
}
