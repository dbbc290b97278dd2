//! Integration tests driving the router directly, without a socket.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use lattice::DependencyEngine;
use lattice::snapshot::DirectorySnapshotProvider;
use lattice_server::{ServerState, create_router};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build a router over a tempdir plans directory with the given plan files.
fn router_with_plans(plans: &[(&str, &str)]) -> (TempDir, Router) {
    let temp = TempDir::new().unwrap();
    for (name, content) in plans {
        std::fs::write(temp.path().join(name), content).unwrap();
    }
    let state = Arc::new(ServerState {
        engine: DependencyEngine::new(DirectorySnapshotProvider::new(temp.path())),
    });
    (temp, create_router(state))
}

async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

const FOX: &str = "---\nstatus: todo\n---\n";
const CAT: &str = "---\nstatus: in_progress\nblocked_by:\n  - blue-running-fox.md\n---\n";

#[tokio::test]
async fn health_reports_ok() {
    let (_temp, router) = router_with_plans(&[]);
    let (status, body) = get(router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn full_graph_endpoint_returns_the_analysis() {
    let (_temp, router) = router_with_plans(&[
        ("blue-running-fox.md", FOX),
        ("green-dancing-cat.md", CAT),
    ]);

    let (status, body) = get(router, "/api/dependencies").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(body["edges"][0]["from"], "blue-running-fox.md");
    assert_eq!(body["edges"][0]["to"], "green-dancing-cat.md");
    assert_eq!(body["hasCycle"], false);
    assert_eq!(
        body["criticalPath"],
        serde_json::json!(["blue-running-fox.md", "green-dancing-cat.md"])
    );
}

#[tokio::test]
async fn cyclic_workspace_is_reported_not_rejected() {
    let (_temp, router) = router_with_plans(&[
        ("a.md", "---\nstatus: todo\nblocked_by: [b.md]\n---\n"),
        ("b.md", "---\nstatus: todo\nblocked_by: [a.md]\n---\n"),
    ]);

    let (status, body) = get(router, "/api/dependencies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hasCycle"], true);
    assert_eq!(body["criticalPath"], serde_json::json!([]));
}

#[tokio::test]
async fn single_plan_endpoint_returns_both_relations() {
    let (_temp, router) = router_with_plans(&[
        ("blue-running-fox.md", FOX),
        ("green-dancing-cat.md", CAT),
    ]);

    let (status, body) = get(router, "/api/dependencies/green-dancing-cat.md").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filename"], "green-dancing-cat.md");
    assert_eq!(body["blockedBy"], serde_json::json!(["blue-running-fox.md"]));
    assert_eq!(body["blocks"], serde_json::json!([]));
}

#[tokio::test]
async fn unknown_plan_is_404() {
    let (_temp, router) = router_with_plans(&[("blue-running-fox.md", FOX)]);

    let (status, body) = get(router, "/api/dependencies/missing.md").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("missing.md"));
}

#[tokio::test]
async fn malformed_filename_is_400() {
    let (_temp, router) = router_with_plans(&[("blue-running-fox.md", FOX)]);

    let (status, body) = get(router, "/api/dependencies/not%20a%20plan").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid"));
}

#[tokio::test]
async fn missing_plans_directory_is_500() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("gone");
    let state = Arc::new(ServerState {
        engine: DependencyEngine::new(DirectorySnapshotProvider::new(&missing)),
    });
    let router = create_router(state);

    let (status, body) = get(router, "/api/dependencies").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("error").is_some());
}
