use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use std::fmt::Write;
use std::sync::Arc;

/// `GET /metrics` — Prometheus text exposition for monitoring integration.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        render_exposition(state.municipalities.len()),
    )
}

/// Renders the exposition body: HELP and TYPE comment lines followed by the
/// sample for each metric. The request counter is a fixed placeholder sample,
/// not a tracked count.
pub fn render_exposition(municipality_count: usize) -> String {
    let mut out = String::new();
    // write! into a String cannot fail
    let _ = writeln!(
        out,
        "# HELP nc_fttx_municipalities_total Total number of municipalities"
    );
    let _ = writeln!(out, "# TYPE nc_fttx_municipalities_total gauge");
    let _ = writeln!(out, "nc_fttx_municipalities_total {}", municipality_count);
    let _ = writeln!(out, "# HELP nc_fttx_http_requests_total Total HTTP requests");
    let _ = writeln!(out, "# TYPE nc_fttx_http_requests_total counter");
    let _ = writeln!(
        out,
        "nc_fttx_http_requests_total{{method=\"GET\",endpoint=\"/\"}} 1"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_value_tracks_dataset_length() {
        let body = render_exposition(4);
        assert!(body.contains("nc_fttx_municipalities_total 4\n"));
        let body = render_exposition(7);
        assert!(body.contains("nc_fttx_municipalities_total 7\n"));
    }

    #[test]
    fn every_metric_has_help_and_type_lines() {
        let body = render_exposition(4);
        for metric in ["nc_fttx_municipalities_total", "nc_fttx_http_requests_total"] {
            assert!(body.contains(&format!("# HELP {}", metric)), "{}", metric);
            assert!(body.contains(&format!("# TYPE {}", metric)), "{}", metric);
        }
        assert!(body.contains("# TYPE nc_fttx_municipalities_total gauge"));
        assert!(body.contains("# TYPE nc_fttx_http_requests_total counter"));
    }

    #[test]
    fn counter_sample_is_labeled_by_method_and_endpoint() {
        let body = render_exposition(4);
        assert!(body.contains("nc_fttx_http_requests_total{method=\"GET\",endpoint=\"/\"} 1"));
    }
}
