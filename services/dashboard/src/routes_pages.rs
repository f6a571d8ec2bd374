use axum::Json;
use serde_json::{json, Value};
use tabular::DatasetKind;

const LOADING_SNIPPET: &str = r#"// Load the datasets
let mitbih_train = tabular::load_csv("data/mitbih_train.csv")?;
let mitbih_test = tabular::load_csv("data/mitbih_test.csv")?;
let ptbdb_abnormal = tabular::load_csv("data/ptbdb_abnormal.csv")?;
let ptbdb_normal = tabular::load_csv("data/ptbdb_normal.csv")?;
"#;

/// Introduction page payload.
pub async fn introduction() -> Json<Value> {
    Json(json!({
        "title": "ECG Dataset Audit",
        "description": "Inspect the MIT-BIH and PTBDB heartbeat datasets: per-column types, roles and missing-value rates.",
        "pages": ["/", "/loading-code", "/datasets", "/datasets/{slug}/audit"],
        "datasets": DatasetKind::ALL.iter().map(|k| k.display_name()).collect::<Vec<_>>(),
    }))
}

/// The data-loading code panel.
pub async fn loading_code() -> Json<Value> {
    Json(json!({
        "language": "rust",
        "code": LOADING_SNIPPET,
    }))
}
