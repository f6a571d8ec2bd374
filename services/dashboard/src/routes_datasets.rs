use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use audit::{audit_dataset, AuditReport};
use tabular::{load_csv, read_dataset, DatasetKind, TabularError};

use crate::state::SharedState;

type RouteError = (StatusCode, Json<Value>);

#[derive(Serialize)]
pub struct DatasetEntry {
    pub slug: &'static str,
    pub display_name: &'static str,
    pub file_name: &'static str,
    pub present: bool,
}

pub async fn list_datasets(State(state): State<SharedState>) -> Json<Vec<DatasetEntry>> {
    let entries = DatasetKind::ALL
        .iter()
        .map(|k| DatasetEntry {
            slug: k.slug(),
            display_name: k.display_name(),
            file_name: k.file_name(),
            present: k.path_in(&state.cfg.data_dir).is_file(),
        })
        .collect();

    Json(entries)
}

pub async fn audit_known_dataset(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Json<AuditReport>, RouteError> {
    let kind = DatasetKind::from_slug(&slug).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("Unknown dataset: {slug}")})),
        )
    })?;

    // Each request loads fresh; no caching across invocations.
    let path = kind.path_in(&state.cfg.data_dir);
    let dataset = tokio::task::spawn_blocking(move || load_csv(&path))
        .await
        .map_err(|e| internal(e.to_string()))?
        .map_err(load_error)?;

    Ok(Json(audit_dataset(&dataset, kind.display_name())))
}

pub async fn audit_uploaded_dataset(
    mut mp: Multipart,
) -> Result<Json<AuditReport>, RouteError> {
    let mut name: Option<String> = None;
    let mut file_bytes: Option<bytes::Bytes> = None;

    while let Some(field) = mp
        .next_field()
        .await
        .map_err(|e| bad_request(e.to_string()))?
    {
        match field.name() {
            Some("name") => {
                name = Some(field.text().await.map_err(|e| bad_request(e.to_string()))?)
            }
            Some("file") => {
                file_bytes = Some(field.bytes().await.map_err(|e| bad_request(e.to_string()))?)
            }
            _ => {}
        }
    }

    let name = name.unwrap_or_else(|| "uploaded".to_string());
    let bytes = file_bytes.ok_or_else(|| bad_request("Missing file".to_string()))?;

    // Audited in memory, never persisted.
    let dataset = tokio::task::spawn_blocking(move || read_dataset(bytes.as_ref()))
        .await
        .map_err(|e| internal(e.to_string()))?
        .map_err(load_error)?;

    Ok(Json(audit_dataset(&dataset, &name)))
}

fn bad_request(msg: String) -> RouteError {
    (StatusCode::BAD_REQUEST, Json(json!({"error": msg})))
}

fn internal(msg: String) -> RouteError {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": msg})))
}

fn load_error(err: TabularError) -> RouteError {
    let status = match err {
        TabularError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
        TabularError::MalformedInput { .. } | TabularError::ShapeMismatch { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        TabularError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({"error": err.to_string()})))
}
