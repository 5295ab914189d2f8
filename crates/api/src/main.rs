use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, MethodRouter},
    Json, Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use etf_advisor_core::domain::contract::AdviceResponse;
use etf_advisor_core::error::AdviceError;

const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed. Use POST.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = etf_advisor_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    if let Err(e) = serve(&settings).await {
        sentry_anyhow::capture_anyhow(&e);
        tracing::error!(error = %e, "api stopped with error");
        return Err(e);
    }

    Ok(())
}

async fn serve(settings: &etf_advisor_core::config::Settings) -> anyhow::Result<()> {
    let state = AppState {
        report_model: Arc::from(settings.report_model.as_str()),
    };
    let app = app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!(%addr, model = %settings.report_model, "api listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr} failed"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

#[derive(Debug, Clone)]
struct AppState {
    report_model: Arc<str>,
}

fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/healthz", get(healthz).fallback(method_not_allowed))
        .route("/", report_route())
        .route("/report", report_route())
        .fallback(dispatch)
        .with_state(state);
    with_layers(router)
}

// CORS headers sit outside the panic catcher so 500s carry them too.
fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
}

fn report_route() -> MethodRouter<AppState> {
    post(generate_report)
        .options(preflight)
        .fallback(method_not_allowed)
}

/// Any other path behaves like the report endpoint.
async fn dispatch(method: Method, state: State<AppState>, body: Bytes) -> Response {
    match method {
        Method::POST => generate_report(state, body).await.into_response(),
        Method::OPTIONS => preflight().await.into_response(),
        _ => method_not_allowed().await.into_response(),
    }
}

async fn healthz() -> &'static str {
    "ok"
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn method_not_allowed() -> (StatusCode, Json<AdviceResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(AdviceResponse::failure(METHOD_NOT_ALLOWED_MESSAGE)),
    )
}

async fn generate_report(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<AdviceResponse>) {
    let now = chrono::Utc::now();
    match etf_advisor_core::advice::handle_json(&body, now, &state.report_model) {
        Ok(advice) => (StatusCode::OK, Json(advice.into())),
        Err(err) => {
            tracing::warn!(error = %err, "rejected report request");
            (status_for(&err), Json(err.into()))
        }
    }
}

// An unreadable body is a server-side failure, not a missing field.
fn status_for(err: &AdviceError) -> StatusCode {
    match err {
        AdviceError::MissingUserInput => StatusCode::BAD_REQUEST,
        AdviceError::MalformedRequest(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!(error = %detail, "report handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(AdviceResponse::failure(detail)),
    )
        .into_response()
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &etf_advisor_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(AppState {
            report_model: Arc::from("template-ai-v1"),
        })
    }

    async fn send(method: Method, uri: &str, body: Body) -> (StatusCode, axum::http::HeaderMap, Bytes) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, headers, bytes)
    }

    #[tokio::test]
    async fn post_returns_report_envelope() {
        let body = json!({
            "userInput": "공격적으로 80% 레버리지 써주세요",
            "marketData": { "kospi": { "price": 2650.5, "change": 1.2 } }
        });
        let (status, headers, bytes) =
            send(Method::POST, "/", Body::from(body.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["success"], true);
        assert_eq!(v["metadata"]["profile"], "aggressive");
        assert_eq!(v["metadata"]["model"], "template-ai-v1");
        assert!(v["metadata"]["timestamp"].as_str().unwrap().ends_with('Z'));
        assert!(v["report"].as_str().unwrap().contains("ACTION_PLAN\n"));
    }

    #[tokio::test]
    async fn report_path_is_an_alias() {
        let body = json!({ "userInput": "균형있게 투자하고 싶어요" });
        let (status, _, bytes) =
            send(Method::POST, "/report", Body::from(body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["metadata"]["profile"], "moderate");
    }

    #[tokio::test]
    async fn missing_input_is_bad_request() {
        let (status, _, bytes) = send(Method::POST, "/", Body::from("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            v,
            json!({ "success": false, "error": "Missing userInput parameter" })
        );
    }

    #[tokio::test]
    async fn malformed_body_is_internal_error() {
        let (status, _, bytes) = send(Method::POST, "/", Body::from("{oops")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["success"], false);
        assert!(!v["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn other_methods_are_rejected_with_json() {
        let (status, headers, bytes) = send(Method::GET, "/", Body::empty()).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            v,
            json!({ "success": false, "error": "Method not allowed. Use POST." })
        );
    }

    #[tokio::test]
    async fn preflight_has_no_body() {
        let (status, headers, bytes) = send(Method::OPTIONS, "/", Body::empty()).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(bytes.is_empty());
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, POST, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let (status, _, bytes) = send(Method::GET, "/healthz", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn unknown_paths_follow_report_contract() {
        let body = json!({ "userInput": "안전하게 20%만 레버리지" });
        let (status, headers, bytes) =
            send(Method::POST, "/api/report", Body::from(body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["metadata"]["profile"], "conservative");

        let (status, headers, bytes) = send(Method::GET, "/anything", Body::empty()).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["error"], "Method not allowed. Use POST.");

        let (status, _, bytes) = send(Method::OPTIONS, "/anything", Body::empty()).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn healthz_rejects_other_methods_with_json() {
        let (status, headers, bytes) = send(Method::POST, "/healthz", Body::empty()).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["success"], false);
    }

    #[tokio::test]
    async fn panicking_route_returns_json_500_with_cors() {
        async fn exploding_handler() -> StatusCode {
            panic!("composer exploded")
        }

        let router: Router = Router::new().route("/boom", post(exploding_handler));
        let req = Request::builder()
            .method(Method::POST)
            .uri("/boom")
            .body(Body::empty())
            .unwrap();
        let res = with_layers(router).oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v, json!({ "success": false, "error": "composer exploded" }));
    }

    #[tokio::test]
    async fn panics_become_json_errors() {
        let res = panic_response(Box::new("boom"));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v, json!({ "success": false, "error": "boom" }));
    }
}
