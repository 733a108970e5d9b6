use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// `GET /api/municipalities` — the full dataset as JSON, with a count that
/// always equals the array length and a UTC timestamp.
pub async fn municipalities_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    debug!("Serving municipality list");
    Json(json!({
        "municipalities": state.municipalities,
        "count": state.municipalities.len(),
        "timestamp": Utc::now(),
    }))
}

/// `GET /health` — simple readiness/health endpoint. Keep it lightweight.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": state.service,
        "version": state.version,
        "timestamp": Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pages::{render_page, PAGE_TITLE};
    use chrono::DateTime;
    use std::io::Write;

    fn test_state() -> Arc<AppState> {
        let mut tmpl = tempfile::NamedTempFile::new().expect("tempfile");
        write!(tmpl, "<html>{{{{title}}}}|{{{{count}}}}|{{{{rows}}}}</html>").expect("write");
        let cfg = Config {
            service: None,
            version: None,
            template_path: Some(tmpl.path().to_string_lossy().into_owned()),
            static_dir: None,
        };
        Arc::new(AppState::from_config(&cfg).expect("state"))
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let bytes = hyper::body::to_bytes(resp.into_body()).await.expect("bytes");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn municipalities_count_matches_array_length() {
        let state = test_state();
        let resp = municipalities_handler(State(state)).await.into_response();
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        let v = json_body(resp).await;
        let arr = v
            .get("municipalities")
            .and_then(|m| m.as_array())
            .expect("municipalities array");
        assert_eq!(arr.len(), 4);
        assert_eq!(v.get("count").and_then(|c| c.as_u64()), Some(4));
        assert_eq!(
            arr[0].get("name").and_then(|n| n.as_str()),
            Some("Raleigh")
        );
    }

    #[tokio::test]
    async fn municipalities_timestamp_is_rfc3339() {
        let state = test_state();
        let resp = municipalities_handler(State(state)).await.into_response();
        let v = json_body(resp).await;
        let ts = v.get("timestamp").and_then(|t| t.as_str()).expect("timestamp");
        DateTime::parse_from_rfc3339(ts).expect("well-formed timestamp");
    }

    #[tokio::test]
    async fn json_order_matches_html_order() {
        let state = test_state();
        let resp = municipalities_handler(State(state.clone()))
            .await
            .into_response();
        let v = json_body(resp).await;
        let json_names: Vec<String> = v
            .get("municipalities")
            .and_then(|m| m.as_array())
            .expect("array")
            .iter()
            .filter_map(|m| m.get("name"))
            .filter_map(|n| n.as_str())
            .map(|s| s.to_string())
            .collect();

        let html = render_page(&state.page_template, PAGE_TITLE, &state.municipalities)
            .expect("render");
        let html_positions: Vec<usize> = json_names
            .iter()
            .map(|n| html.find(n.as_str()).expect("name in page"))
            .collect();
        let mut sorted = html_positions.clone();
        sorted.sort_unstable();
        assert_eq!(
            html_positions, sorted,
            "HTML must list municipalities in the same order as the JSON array"
        );
    }

    #[tokio::test]
    async fn health_reports_healthy_with_identity() {
        let state = test_state();
        let resp = health_handler(State(state)).await.into_response();
        let v = json_body(resp).await;
        assert_eq!(v.get("status").and_then(|s| s.as_str()), Some("healthy"));
        assert_eq!(
            v.get("service").and_then(|s| s.as_str()),
            Some("nc-fttx-portal")
        );
        assert_eq!(v.get("version").and_then(|s| s.as_str()), Some("1.0.0"));
        let ts = v.get("timestamp").and_then(|t| t.as_str()).expect("timestamp");
        DateTime::parse_from_rfc3339(ts).expect("well-formed timestamp");
    }
}
