//! Static page handlers and HTML rendering.
//!
//! Pages are compiled in from `templates/` and filled with plain placeholder
//! substitution; there is no templating engine.

use axum::response::Html;

const FORM_PAGE: &str = include_str!("../../templates/thyroid_disease.html");
const RESULT_PAGE: &str = include_str!("../../templates/predict_result.html");
const ERROR_PAGE: &str = include_str!("../../templates/error.html");

/// Thyroid disease input form
pub async fn form() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Fill the result page with the predicted label
pub fn render_result(label: &str) -> String {
    RESULT_PAGE.replace("{{prediction}}", &escape(label))
}

/// Fill the error page with a user-facing message
pub fn render_error(message: &str) -> String {
    ERROR_PAGE.replace("{{message}}", &escape(message))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
