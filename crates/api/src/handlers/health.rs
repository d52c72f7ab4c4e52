use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthModel {
    /// `ok` when the database answers and the recipe schema is migrated.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Newest applied migration.
    pub schema_version: Option<i64>,
}

/// GET /health
pub async fn check(State(state): State<AppState>) -> Json<HealthModel> {
    let (db_healthy, schema_version) = match recipes_db::schema_version(&state.pool).await {
        Ok(version) => (true, version),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read schema version");
            (false, None)
        }
    };

    let status = match (db_healthy, schema_version) {
        (true, Some(_)) => "ok",
        _ => "degraded",
    };

    Json(HealthModel {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
    })
}
