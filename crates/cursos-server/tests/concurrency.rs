//! Integration tests for concurrent access to the shared registry.

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use cursos_server::router::build_router;
use cursos_server::state::AppState;

fn test_app() -> Router {
    build_router(AppState::new())
}

async fn request_json(
    app: Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(json!(null));
    (status, json)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_stored_with_distinct_ids() {
    let app = test_app();

    let tasks: Vec<_> = (0..64)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                request_json(
                    app,
                    Method::POST,
                    "/cursos/",
                    Some(json!({ "nombre": format!("course {i}"), "nivel": "n", "duracion": i })),
                )
                .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for task in tasks {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK, "create failed: {body:?}");
        assert!(ids.insert(body["id"].as_str().unwrap().to_string()));
    }
    assert_eq!(ids.len(), 64);

    let (status, listed) = request_json(app, Method::GET, "/cursos/", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed_ids: HashSet<String> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed_ids, ids);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_deletes_of_same_id_succeed_exactly_once() {
    let app = test_app();
    let (_, created) = request_json(
        app.clone(),
        Method::POST,
        "/cursos/",
        Some(json!({ "nombre": "contested", "nivel": "n", "duracion": 1 })),
    )
    .await;
    let path = format!("/cursos/{}", created["id"].as_str().unwrap());

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let app = app.clone();
            let path = path.clone();
            tokio::spawn(async move { request_json(app, Method::DELETE, &path, None).await })
        })
        .collect();

    let mut ok = 0;
    let mut not_found = 0;
    for task in tasks {
        let (status, body) = task.await.unwrap();
        if status == StatusCode::OK {
            ok += 1;
        } else if status == StatusCode::NOT_FOUND {
            not_found += 1;
        } else {
            panic!("unexpected status {status}: {body:?}");
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(not_found, 15);

    let (_, listed) = request_json(app, Method::GET, "/cursos/", None).await;
    assert_eq!(listed, json!([]));
}
