//! PDF attachment routes, guarded by the API key.

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::warn;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
};
use aprobaciones_core::attachment::document_kind;

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Creates the attachment routes (requires the API-key middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/documentos-pdf/get", get(get_document))
        .route("/documentos-pdf/upsert", post(upsert_document))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// Query identifying one attachment.
#[derive(Debug, Deserialize)]
pub struct DocumentQuery {
    /// Document kind: 1 budget, 2 purchase order.
    pub tipo: Option<i16>,
    /// Document number.
    pub numero: Option<i64>,
}

/// GET /documentos-pdf/get - Raw PDF bytes.
async fn get_document(
    State(state): State<AppState>,
    Query(query): Query<DocumentQuery>,
) -> ApiResult<Response> {
    let (Some(tipo), Some(numero)) = (query.tipo, query.numero) else {
        return Err(ApiError::validation("tipo y numero son obligatorios"));
    };
    let kind = document_kind(tipo)?;
    let content = state.attachments.fetch(kind, numero).await?;

    Ok(([(header::CONTENT_TYPE, "application/pdf")], content).into_response())
}

#[derive(Default)]
struct UpsertForm {
    tipo: Option<String>,
    numero: Option<String>,
    pdf: Option<Vec<u8>>,
}

async fn read_form(mut multipart: Multipart) -> ApiResult<UpsertForm> {
    let mut form = UpsertForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!(error = %e, "Malformed multipart body");
        ApiError::validation(format!("Formulario inválido: {e}"))
    })? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "tipo" | "numero" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::validation(format!("Campo {name} inválido: {e}")))?;
                if name == "tipo" {
                    form.tipo = Some(text);
                } else {
                    form.numero = Some(text);
                }
            }
            "pdf" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::validation(format!("Archivo pdf inválido: {e}")))?;
                form.pdf = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    Ok(form)
}

fn parse_field<T: std::str::FromStr>(value: Option<String>, name: &str) -> ApiResult<T> {
    let value = value.ok_or_else(|| ApiError::validation(format!("Falta el campo {name}")))?;
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(format!("El campo {name} debe ser numérico")))
}

/// POST /documentos-pdf/upsert - Create or overwrite the PDF of a document.
async fn upsert_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Response> {
    let form = read_form(multipart).await?;

    let tipo: i16 = parse_field(form.tipo, "tipo")?;
    let numero: i64 = parse_field(form.numero, "numero")?;
    let pdf = form
        .pdf
        .ok_or_else(|| ApiError::validation("Falta el campo pdf"))?;

    let kind = document_kind(tipo)?;
    let outcome = state.attachments.upsert(kind, numero, pdf).await?;

    let status = if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.attachment())).into_response())
}
