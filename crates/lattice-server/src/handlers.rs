//! API request handlers.

use crate::error::ApiError;
use axum::Json;
use axum::extract::{Path, State};
use lattice::DependencyEngine;
use lattice::domain::{DependencyGraph, PlanDependencies};
use lattice::snapshot::DirectorySnapshotProvider;
use serde::Serialize;
use std::sync::Arc;

/// Shared server state.
#[derive(Debug)]
pub struct ServerState {
    /// The dependency engine over the workspace's plans directory.
    pub engine: DependencyEngine<DirectorySnapshotProvider>,
}

/// Shared server state handle passed to every handler.
pub type SharedState = Arc<ServerState>;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server can respond at all.
    pub status: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /api/dependencies`
///
/// Build and return the full dependency graph from the current plan
/// snapshot.
pub async fn dependency_graph(
    State(state): State<SharedState>,
) -> Result<Json<DependencyGraph>, ApiError> {
    let graph = state.engine.dependency_graph().await?;
    Ok(Json(graph))
}

/// `GET /api/dependencies/{filename}`
///
/// Return the dependency summary for one plan. The filename is validated
/// before the snapshot is read; `400` for a malformed name, `404` when no
/// plan with that name exists.
pub async fn plan_dependencies(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
) -> Result<Json<PlanDependencies>, ApiError> {
    let deps = state.engine.plan_dependencies(&filename).await?;
    Ok(Json(deps))
}
