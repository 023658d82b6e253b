pub mod cadastro;
pub mod consulta;
pub mod inputs;

/// Card-like container shared by both page forms.
pub(crate) const FORM_STYLE: &str = "width:100%;max-width:48rem;background:#1e293b;box-shadow:0 4px 6px rgba(0,0,0,0.3);border-radius:1.5rem;padding:1.5rem 2rem;margin-bottom:1rem;box-sizing:border-box;";
