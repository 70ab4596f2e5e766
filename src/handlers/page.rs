//! Form page handlers
//!
//! The page is stateless on the server: the last verdict rides along in a
//! hidden field and is restored into a fresh form on every post.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tokio::sync::mpsc;
use validator::Validate;

use crate::error::VALIDATION_MESSAGE;
use crate::logic::{drain_notices, FeatureSubmissionForm, Notice, NoticeLevel};
use crate::models::{Verdict, MAX_INPUT_LEN};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct PageForm {
    #[serde(default)]
    #[validate(length(max = MAX_INPUT_LEN))]
    pub features: String,

    #[serde(default)]
    pub verdict: String,
}

/// Render the empty form
pub async fn show() -> Html<String> {
    Html(render_page("", Verdict::Unset, &[]))
}

/// Run one submission and render the resulting state
pub async fn submit(
    State(state): State<AppState>,
    Form(req): Form<PageForm>,
) -> Html<String> {
    let prior = req.verdict.parse::<Verdict>().unwrap_or_else(|e| {
        tracing::debug!("Ignoring posted verdict: {}", e);
        Verdict::Unset
    });

    if let Err(e) = req.validate() {
        tracing::debug!("Rejected oversized input: {}", e);
        return Html(render_page(&req.features, prior, &[Notice::warning(VALIDATION_MESSAGE)]));
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut form = FeatureSubmissionForm::with_state(state.predictor.clone(), tx, req.features, prior);

    match form.on_submit().await {
        Ok(submission) => tracing::debug!("Rendering verdict for submission {}", submission.id),
        // Already queued as a notice
        Err(e) => tracing::debug!("Rendering failed submission: {}", e),
    }

    let notices = drain_notices(&mut rx);
    Html(render_page(form.input(), form.verdict(), &notices))
}

/// Build the full HTML document for the given form state
pub fn render_page(input: &str, verdict: Verdict, notices: &[Notice]) -> String {
    let notice_html: String = notices
        .iter()
        .map(|n| {
            let class = match n.level {
                NoticeLevel::Warning => "notice notice-warning",
                NoticeLevel::Error => "notice notice-error",
            };
            format!("<div class=\"{}\" role=\"alert\">{}</div>\n", class, escape_html(n.message))
        })
        .collect();

    let verdict_html = match verdict {
        Verdict::Unset => String::new(),
        Verdict::Fraud => format!(
            "<h4 class=\"verdict\">Fraud Prediction: <span class=\"text-danger\">&#x1F6A8; {}</span></h4>",
            Verdict::Fraud.label().unwrap_or_default()
        ),
        Verdict::Legitimate => format!(
            "<h4 class=\"verdict\">Fraud Prediction: <span class=\"text-success\">&#x2705; {}</span></h4>",
            Verdict::Legitimate.label().unwrap_or_default()
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Credit Card Fraud Detection</title>
<style>
body {{ background: #1e2a38; font-family: sans-serif; display: flex; justify-content: center; align-items: center; min-height: 100vh; margin: 0; }}
h2 {{ color: whitesmoke; margin-right: 2rem; }}
.card {{ background: white; padding: 1.5rem; border-radius: 8px; }}
.form-control {{ width: 24rem; padding: 0.4rem; }}
.notice {{ margin-top: 0.75rem; padding: 0.5rem; border-radius: 4px; }}
.notice-warning {{ background: #fff3cd; }}
.notice-error {{ background: #f8d7da; }}
.text-danger {{ color: #dc3545; }}
.text-success {{ color: #198754; }}
</style>
</head>
<body>
<h2>Credit Card Fraud Detection</h2>
<div class="card">
<form method="post" action="/">
<label for="features">Enter 29 Features (Comma-Separated)</label><br>
<input type="text" id="features" name="features" class="form-control" value="{input}" placeholder="e.g., 1.2, 3.4, 5.6, ..., 7.8" maxlength="{max_len}">
<input type="hidden" name="verdict" value="{verdict}">
<div><button type="submit">Check Fraud</button></div>
</form>
{notices}{verdict_html}
</div>
</body>
</html>
"#,
        input = escape_html(input),
        max_len = MAX_INPUT_LEN,
        verdict = verdict.as_str(),
        notices = notice_html,
        verdict_html = verdict_html,
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
