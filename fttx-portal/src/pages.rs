use crate::municipality::Municipality;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Html};
use std::fmt::Write;
use std::sync::Arc;
use tracing::{debug, error};

pub const PAGE_TITLE: &str = "NC FTTX Permitting Portal";

/// `GET /` — renders the municipality listing page from the template loaded
/// at startup. A render failure surfaces as 500 with the error text as body.
pub async fn index_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    debug!("Rendering municipality page");
    match render_page(&state.page_template, PAGE_TITLE, &state.municipalities) {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            error!("Template rendering failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Fills the `{{title}}`, `{{count}}` and `{{rows}}` placeholders of the page
/// template. Row order is the dataset's order; all record fields are escaped.
pub fn render_page(
    template: &str,
    title: &str,
    municipalities: &[Municipality],
) -> anyhow::Result<String> {
    for placeholder in ["{{title}}", "{{count}}", "{{rows}}"] {
        if !template.contains(placeholder) {
            anyhow::bail!("template is missing the {} placeholder", placeholder);
        }
    }

    let mut rows = String::new();
    for m in municipalities {
        // write! into a String cannot fail
        let _ = write!(
            rows,
            concat!(
                "<tr>",
                "<td>{name} <span class=\"badge\">{kind}</span></td>",
                "<td>{expiration}</td>",
                "<td><a href=\"mailto:{email}\">{email}</a><br>{phone}</td>",
                "<td>{turnaround} days</td>",
                "<td>{fee}</td>",
                "<td>{requirements}</td>",
                "<td><a href=\"{gis}\" target=\"_blank\">GIS</a> ",
                "<a href=\"{portal}\" target=\"_blank\">Permit Portal</a></td>",
                "</tr>\n"
            ),
            name = escape_html(&m.name),
            kind = m.kind.as_str(),
            expiration = escape_html(&m.permit_expiration),
            email = escape_html(&m.contact_email),
            phone = escape_html(&m.contact_phone),
            turnaround = m.turnaround_days,
            fee = escape_html(&m.permit_fee),
            requirements = escape_html(&m.requirements),
            gis = escape_html(&m.gis_link),
            portal = escape_html(&m.permit_portal_link),
        );
    }

    Ok(template
        .replace("{{title}}", &escape_html(title))
        .replace("{{count}}", &municipalities.len().to_string())
        .replace("{{rows}}", &rows))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
