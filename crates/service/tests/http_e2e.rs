use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use common::http::TransportSettings;
use common::{ApiClient, CoreError, ReqwestTransport};
use models::member::MemberUpdate;
use serde_json::json;
use service::{categories, members, reports, users, ServiceError};
use tokio::net::TcpListener;

#[derive(Debug, Clone, PartialEq)]
struct Hit {
    method: String,
    uri: String,
    auth: Option<String>,
    has_request_id: bool,
}

#[derive(Clone, Default)]
struct Seen {
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl Seen {
    fn hits(&self) -> Vec<Hit> { self.hits.lock().unwrap().clone() }
}

async fn backend(State(seen): State<Seen>, method: Method, uri: Uri, headers: HeaderMap) -> Response {
    seen.hits.lock().unwrap().push(Hit {
        method: method.to_string(),
        uri: uri.to_string(),
        auth: headers.get("authorization").and_then(|v| v.to_str().ok()).map(str::to_string),
        has_request_id: headers.contains_key("x-request-id"),
    });
    match (method.as_str(), uri.path()) {
        ("GET", "/categories") => Json(json!([{"id": 1, "name": "Mercado", "kind": "expense"}])).into_response(),
        ("PUT", "/members/17") => Json(json!({"id": 17, "name": "Ana"})).into_response(),
        ("DELETE", "/members/17") => StatusCode::NO_CONTENT.into_response(),
        ("GET", "/users/me") => (StatusCode::INTERNAL_SERVER_ERROR, "db down").into_response(),
        ("GET", "/celulas/5/reports/by-month/2024/3") => {
            Json(json!({"year": 2024, "month": 3, "members": [], "reports": []})).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

struct TestApp {
    client: ApiClient,
    seen: Seen,
}

async fn start_backend() -> anyhow::Result<TestApp> {
    let seen = Seen::default();
    let app: Router = Router::new().fallback(backend).with_state(seen.clone());
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("backend error: {}", e); }
    });

    let transport = ReqwestTransport::new(TransportSettings {
        base_url: format!("http://{}", addr),
        token: Some("t0k3n".into()),
        ..Default::default()
    })?;
    Ok(TestApp { client: ApiClient::new(Arc::new(transport)), seen })
}

#[tokio::test]
async fn category_filter_only_when_present() -> anyhow::Result<()> {
    let app = start_backend().await?;

    let all = categories::get_all(&app.client, None).await?;
    assert_eq!(all.len(), 1);
    categories::get_all(&app.client, Some(7)).await?;

    let hits = app.seen.hits();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].uri, "/categories");
    assert_eq!(hits[1].uri, "/categories?groupId=7");
    assert_eq!(hits[0].auth.as_deref(), Some("Bearer t0k3n"));
    assert!(hits.iter().all(|h| h.has_request_id));
    Ok(())
}

#[tokio::test]
async fn member_mutations_hit_flat_path() -> anyhow::Result<()> {
    let app = start_backend().await?;

    let updated = members::update_member(&app.client, 3, 17, &MemberUpdate { name: Some("Ana".into()), ..Default::default() }).await?;
    assert_eq!(updated.id, 17);
    members::delete_member(&app.client, 3, 17).await?;

    let hits = app.seen.hits();
    assert_eq!(hits.len(), 2);
    assert_eq!((hits[0].method.as_str(), hits[0].uri.as_str()), ("PUT", "/members/17"));
    assert_eq!((hits[1].method.as_str(), hits[1].uri.as_str()), ("DELETE", "/members/17"));
    Ok(())
}

#[tokio::test]
async fn monthly_reports_path() -> anyhow::Result<()> {
    let app = start_backend().await?;
    let bundle = reports::get_reports_by_month(&app.client, 5, 2024, 3).await?;
    assert_eq!((bundle.year, bundle.month), (2024, 3));
    assert_eq!(app.seen.hits()[0].uri, "/celulas/5/reports/by-month/2024/3");
    Ok(())
}

#[tokio::test]
async fn server_error_surfaces_without_retry() -> anyhow::Result<()> {
    let app = start_backend().await?;

    let err = users::me(&app.client).await.unwrap_err();
    match err {
        ServiceError::Client(CoreError::Status { status, ref body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "db down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(app.seen.hits().len(), 1);
    Ok(())
}

#[tokio::test]
async fn unknown_resource_is_a_status_error() -> anyhow::Result<()> {
    let app = start_backend().await?;
    let err = categories::get_by_id(&app.client, 404).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    Ok(())
}

#[tokio::test]
async fn refused_connection_is_a_network_error() -> anyhow::Result<()> {
    // grab a free port, then close it so nothing is listening
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let transport = ReqwestTransport::new(TransportSettings {
        base_url: format!("http://{}", addr),
        ..Default::default()
    })?;
    let client = ApiClient::new(Arc::new(transport));
    let err = users::me(&client).await.unwrap_err();
    assert!(matches!(err, ServiceError::Client(CoreError::Network(_))));
    assert_eq!(err.status(), None);
    Ok(())
}
