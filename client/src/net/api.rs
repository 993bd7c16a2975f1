//! REST API client: one function per backend operation.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`, each attaching
//! the bearer token from the persisted session (or the build-time
//! fallback) and performing exactly one request — no retry, no backoff.
//! Native build: stubs returning errors, so pages and tests compile off
//! the wasm target.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, String>` where the error is the backend's own
//! message when one exists. Failures surface directly; converting them
//! into notices is the caller's job.

#![allow(clippy::unused_async)]

use records::{ArticleRecord, LlmLogEntry, Role, SearchHit, SearchParams, UserAccount};

#[cfg(feature = "csr")]
use gloo_net::http::{Method, RequestBuilder};

#[cfg(feature = "csr")]
use super::types::{Ack, LoginResponse, error_message};
use super::types::AnalysisOutcome;

#[cfg(not(feature = "csr"))]
const OFFLINE: &str = "not available outside the browser";

/// API base URL. Overridable at build time; defaults to a same-origin
/// `/api` prefix.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("CURATION_API_URL").unwrap_or("/api")
}

#[cfg(feature = "csr")]
fn api_url(path: &str) -> String {
    format!("{}{path}", api_base().trim_end_matches('/'))
}

/// Token attached to outgoing calls: the persisted session token, or the
/// build-time fallback used by kiosk deployments.
#[cfg(feature = "csr")]
fn bearer_token() -> Option<String> {
    crate::util::storage::load_token()
        .or_else(|| option_env!("CURATION_API_TOKEN").map(ToOwned::to_owned))
}

#[cfg(feature = "csr")]
fn builder(method: Method, path: &str) -> RequestBuilder {
    let mut request = RequestBuilder::new(&api_url(path)).method(method);
    if let Some(token) = bearer_token() {
        request = request.header("Authorization", &format!("Bearer {token}"));
    }
    request
}

#[cfg(feature = "csr")]
async fn send_for<T: serde::de::DeserializeOwned>(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<T, String> {
    let request = request.map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(status, &body));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

/// Exchange credentials for a session token via `POST /login`.
///
/// # Errors
///
/// Returns the backend's error message on rejected credentials.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let response: LoginResponse =
            send_for(builder(Method::POST, "/login").json(&payload)).await?;
        Ok(response.access_token)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err(OFFLINE.to_owned())
    }
}

/// Run a database search via `POST /search`.
///
/// # Errors
///
/// Returns an error string if the request or decode fails.
pub async fn search_articles(params: &SearchParams) -> Result<Vec<SearchHit>, String> {
    #[cfg(feature = "csr")]
    {
        send_for(builder(Method::POST, "/search").json(params)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = params;
        Err(OFFLINE.to_owned())
    }
}

/// Persist the selected search hits via `POST /save`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn save_articles(selected: &[SearchHit]) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "selected_rows": selected });
        let ack: Ack = send_for(builder(Method::POST, "/save").json(&payload)).await?;
        Ok(ack.message_or("Dados salvos com sucesso!"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = selected;
        Err(OFFLINE.to_owned())
    }
}

/// Fetch the full curation record set via `GET /curation`.
///
/// # Errors
///
/// Returns an error string if the request or decode fails.
pub async fn fetch_curation() -> Result<Vec<ArticleRecord>, String> {
    #[cfg(feature = "csr")]
    {
        send_for(builder(Method::GET, "/curation").build()).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Kick off AI classification of every pending record via
/// `POST /trigger-curation`. Fire-and-forget: the backend acknowledges
/// and keeps working, so callers re-fetch after a delay.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn trigger_batch_curation() -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let ack: Ack = send_for(builder(Method::POST, "/trigger-curation").build()).await?;
        Ok(ack.message_or("Curadoria em lote acionada."))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Classify one record via `POST /trigger-curation-single`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn trigger_single_curation(row_number: i64) -> Result<AnalysisOutcome, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "row_number": row_number });
        send_for(builder(Method::POST, "/trigger-curation-single").json(&payload)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = row_number;
        Err(OFFLINE.to_owned())
    }
}

/// Categorize one record via `POST /categorize-single`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn categorize_row(row_number: i64) -> Result<AnalysisOutcome, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "row_number": row_number });
        send_for(builder(Method::POST, "/categorize-single").json(&payload)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = row_number;
        Err(OFFLINE.to_owned())
    }
}

/// Delete one record via `POST /delete-row`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_row(row_number: i64) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "row_number": row_number });
        let ack: Ack = send_for(builder(Method::POST, "/delete-row").json(&payload)).await?;
        Ok(ack.message_or("Artigo excluído com sucesso."))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = row_number;
        Err(OFFLINE.to_owned())
    }
}

/// Bulk-delete every record without a local document via
/// `POST /delete-unavailable`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_unavailable() -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let ack: Ack = send_for(builder(Method::POST, "/delete-unavailable").build()).await?;
        Ok(ack.message_or("Artigos indisponíveis excluídos."))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Record the human curator's approval via `POST /manual-approval`.
/// `file_name` is the record's local document, which the backend copies
/// into the approved folder.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn manual_approve(row_number: i64, file_name: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "row_number": row_number, "fileName": file_name });
        let ack: Ack = send_for(builder(Method::POST, "/manual-approval").json(&payload)).await?;
        Ok(ack.message_or("Artigo aprovado manualmente com sucesso!"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (row_number, file_name);
        Err(OFFLINE.to_owned())
    }
}

/// Record the human curator's rejection via `POST /manual-rejection`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn manual_reject(row_number: i64) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "row_number": row_number });
        let ack: Ack = send_for(builder(Method::POST, "/manual-rejection").json(&payload)).await?;
        Ok(ack.message_or("Artigo rejeitado."))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = row_number;
        Err(OFFLINE.to_owned())
    }
}

/// Queue server-side processing of a backend-visible folder via
/// `POST /batch-process-local-folder`. Fire-and-forget.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn process_local_folder(folder_path: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "folder_path": folder_path });
        let ack: Ack =
            send_for(builder(Method::POST, "/batch-process-local-folder").json(&payload)).await?;
        Ok(ack.message_or("Processamento em lote iniciado."))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = folder_path;
        Err(OFFLINE.to_owned())
    }
}

/// Register a new account via `POST /register`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn register_user(
    username: &str,
    email: &str,
    password: &str,
    role: &Role,
) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
            "role": role,
        });
        let ack: Ack = send_for(builder(Method::POST, "/register").json(&payload)).await?;
        Ok(ack.message_or("Usuário registrado com sucesso!"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, email, password, role);
        Err(OFFLINE.to_owned())
    }
}

/// Probe `GET /health`. True when the backend answers 2xx.
pub async fn check_health() -> bool {
    #[cfg(feature = "csr")]
    {
        match builder(Method::GET, "/health").build() {
            Ok(request) => request.send().await.is_ok_and(|response| response.ok()),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Fetch all accounts via `GET /users`.
///
/// # Errors
///
/// Returns an error string if the request or decode fails.
pub async fn fetch_users() -> Result<Vec<UserAccount>, String> {
    #[cfg(feature = "csr")]
    {
        send_for(builder(Method::GET, "/users").build()).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Delete an account via `DELETE /users/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_user(id: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let path = format!("/users/{id}");
        let ack: Ack = send_for(builder(Method::DELETE, &path).build()).await?;
        Ok(ack.message_or("Usuário excluído com sucesso!"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(OFFLINE.to_owned())
    }
}

/// Update an account's role and category restriction via
/// `PUT /users/:id/permissions`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn update_user_permissions(
    id: &str,
    role: &Role,
    allowed_categories: &[String],
) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let path = format!("/users/{id}/permissions");
        let payload = serde_json::json!({
            "role": role,
            "allowed_categories": allowed_categories,
        });
        let ack: Ack = send_for(builder(Method::PUT, &path).json(&payload)).await?;
        Ok(ack.message_or("Permissões atualizadas com sucesso!"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, role, allowed_categories);
        Err(OFFLINE.to_owned())
    }
}

/// Fetch the AI service's decision log via `GET /llm-logs`.
///
/// # Errors
///
/// Returns an error string if the request or decode fails.
pub async fn fetch_llm_logs() -> Result<Vec<LlmLogEntry>, String> {
    #[cfg(feature = "csr")]
    {
        send_for(builder(Method::GET, "/llm-logs").build()).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Insert a record via `POST /manual-insert`: plain JSON, or multipart
/// when a document file accompanies it.
///
/// # Errors
///
/// Returns an error string if the request fails.
#[cfg(feature = "csr")]
pub async fn manual_insert(
    record: &ArticleRecord,
    file: Option<web_sys::File>,
) -> Result<String, String> {
    let ack: Ack = match file {
        Some(file) => {
            let form = form_data_from(record)?;
            form.append_with_blob_and_filename("file", &file, &file.name())
                .map_err(|_| "falha ao montar o upload".to_owned())?;
            send_for(builder(Method::POST, "/manual-insert").body(form)).await?
        }
        None => send_for(builder(Method::POST, "/manual-insert").json(record)).await?,
    };
    Ok(ack.message_or("Artigo catalogado com sucesso na base de dados!"))
}

/// Upload a ZIP of documents for server-side batch curation via
/// `POST /batch-upload-zip`. Fire-and-forget.
///
/// # Errors
///
/// Returns an error string if the request fails.
#[cfg(feature = "csr")]
pub async fn upload_zip(file: web_sys::File) -> Result<String, String> {
    let form =
        web_sys::FormData::new().map_err(|_| "falha ao montar o upload".to_owned())?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| "falha ao montar o upload".to_owned())?;
    let ack: Ack = send_for(builder(Method::POST, "/batch-upload-zip").body(form)).await?;
    Ok(ack.message_or("Processamento do ZIP iniciado."))
}

/// Ask the AI service to extract record metadata from a title and/or PDF
/// via `POST /extract-metadata`. The response is a partial record whose
/// columns overwrite the form's empty fields.
///
/// # Errors
///
/// Returns an error string if the request fails.
#[cfg(feature = "csr")]
pub async fn extract_metadata(
    title: Option<&str>,
    file: Option<web_sys::File>,
) -> Result<ArticleRecord, String> {
    let form =
        web_sys::FormData::new().map_err(|_| "falha ao montar o upload".to_owned())?;
    if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
        form.append_with_str("title", title)
            .map_err(|_| "falha ao montar o upload".to_owned())?;
    }
    if let Some(file) = file {
        form.append_with_blob_and_filename("file", &file, &file.name())
            .map_err(|_| "falha ao montar o upload".to_owned())?;
    }
    send_for(builder(Method::POST, "/extract-metadata").body(form)).await
}

/// Flatten a record into multipart string fields, mirroring its JSON
/// column names.
#[cfg(feature = "csr")]
fn form_data_from(record: &ArticleRecord) -> Result<web_sys::FormData, String> {
    let form =
        web_sys::FormData::new().map_err(|_| "falha ao montar o upload".to_owned())?;
    let value = serde_json::to_value(record).map_err(|e| e.to_string())?;
    if let serde_json::Value::Object(map) = value {
        for (key, field) in map {
            let rendered = match field {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            form.append_with_str(&key, &rendered)
                .map_err(|_| "falha ao montar o upload".to_owned())?;
        }
    }
    Ok(form)
}
