//! Calls to the remote supplier API.
//!
//! Each function issues exactly one request, with no timeout, retry or
//! cancellation, and folds every failure into the error the form displays.
//! Details of the failure are written to the browser console.

use gloo_console::{error, log};
use gloo_net::http::{Request, Response};
use serde_json::Value;
use web_sys::{File, FormData};

use common::carousel::logo_cache::is_image_content_type;
use common::errors::{QueryError, RegistrationError};
use common::model::supplier::Supplier;
use common::requests::{
    multipart_text_fields, ConsultRequest, CONSULT_PATH, LOGO_FIELD, REGISTER_PATH,
};

use crate::config;

/// `POST /fornecedores/consultar` with the declared consumption.
///
/// An empty array is a valid answer and is returned as such; deciding that
/// it means "no match" is up to the caller.
pub async fn consult_suppliers(request: &ConsultRequest) -> Result<Vec<Supplier>, QueryError> {
    let consumo = request.consumo.to_string();
    let response = Request::post(&config::endpoint(CONSULT_PATH))
        .query([("consumo", consumo.as_str())])
        .json(request)
        .map_err(|e| {
            error!(format!("Erro ao montar consulta: {}", e));
            QueryError::RequestFailed
        })?
        .send()
        .await
        .map_err(|e| {
            error!(format!("Erro ao buscar fornecedores: {}", e));
            QueryError::RequestFailed
        })?;

    if !response.ok() {
        log_failed_response("consultar", &response).await;
        return Err(QueryError::RequestFailed);
    }

    response.json::<Vec<Supplier>>().await.map_err(|e| {
        error!(format!("Resposta inválida de consultar: {}", e));
        QueryError::RequestFailed
    })
}

/// `POST /fornecedores/adicionar`.
///
/// Sends the supplier as JSON, or as multipart form data when a logo file is
/// attached. A 2xx answer must carry a JSON body to count as a success.
pub async fn register_supplier(
    supplier: &Supplier,
    logo: Option<File>,
) -> Result<(), RegistrationError> {
    let url = config::endpoint(REGISTER_PATH);
    let request = match logo {
        Some(file) => build_multipart(supplier, &file)
            .and_then(|form| Request::post(&url).body(form).map_err(|e| e.to_string())),
        None => Request::post(&url).json(supplier).map_err(|e| e.to_string()),
    }
    .map_err(|e| {
        error!(format!("Erro ao montar cadastro: {}", e));
        RegistrationError::RequestFailed
    })?;

    let response = request.send().await.map_err(|e| {
        error!(format!("Erro ao adicionar fornecedor: {}", e));
        RegistrationError::RequestFailed
    })?;

    if !response.ok() {
        log_failed_response("adicionar", &response).await;
        return Err(RegistrationError::RequestFailed);
    }

    match response.json::<Value>().await {
        Ok(body) => {
            log!(format!("Fornecedor adicionado com sucesso: {}", body));
            Ok(())
        }
        Err(e) => {
            error!(format!("Resposta inválida de adicionar: {}", e));
            Err(RegistrationError::RequestFailed)
        }
    }
}

/// Checks that a logo asset can be loaded, returning its URL when it can.
///
/// A 2xx answer only counts when it carries an image; an HTML page served in
/// place of a missing file is a failure.
pub async fn fetch_asset(filename: &str) -> Option<String> {
    let url = config::asset(filename);
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => {
            let content_type = response.headers().get("content-type");
            if is_image_content_type(content_type.as_deref()) {
                Some(url)
            } else {
                error!(format!(
                    "Erro ao carregar imagem: {} ({})",
                    filename,
                    content_type.unwrap_or_default()
                ));
                None
            }
        }
        Ok(response) => {
            error!(format!(
                "Erro ao carregar imagem: {} ({})",
                filename,
                response.status()
            ));
            None
        }
        Err(e) => {
            error!(format!("Erro ao carregar imagem: {} ({})", filename, e));
            None
        }
    }
}

fn build_multipart(supplier: &Supplier, logo: &File) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{:?}", e))?;
    for (name, value) in multipart_text_fields(supplier) {
        form.append_with_str(name, &value)
            .map_err(|e| format!("{:?}", e))?;
    }
    form.append_with_blob_and_filename(LOGO_FIELD, logo, &logo.name())
        .map_err(|e| format!("{:?}", e))?;
    Ok(form)
}

async fn log_failed_response(endpoint: &str, response: &Response) {
    let body = response.text().await.unwrap_or_default();
    error!(format!(
        "Falha em {}: {} {}",
        endpoint,
        response.status(),
        body
    ));
}
