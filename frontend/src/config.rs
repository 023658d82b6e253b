//! Compile-time configuration of the client.
//!
//! Both values can be overridden when building (`trunk build`) through the
//! environment; otherwise the production defaults are used.

/// Remote supplier API used when `FORNECEDORES_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "https://api.imglic.tech";

/// Base path of logo assets when `FORNECEDORES_ASSETS_URL` is not set.
pub const DEFAULT_ASSETS_URL: &str = "/assets";

pub fn api_url() -> &'static str {
    option_env!("FORNECEDORES_API_URL").unwrap_or(DEFAULT_API_URL)
}

pub fn assets_url() -> &'static str {
    option_env!("FORNECEDORES_ASSETS_URL").unwrap_or(DEFAULT_ASSETS_URL)
}

/// Full URL of an API endpoint such as `/fornecedores/consultar`.
pub fn endpoint(path: &str) -> String {
    join_url(api_url(), path)
}

/// Full URL of a logo asset by filename.
pub fn asset(filename: &str) -> String {
    join_url(assets_url(), filename)
}

/// Joins a base and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
