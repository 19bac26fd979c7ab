//! Prediction form handler

use axum::{
    extract::State,
    response::Html,
    Form,
};

use crate::{AppResult, AppState};
use crate::features::FeatureVector;
use crate::handlers::pages;

/// Handle a submitted thyroid screening form.
///
/// Values are taken in form-submission order; the form layout is expected to
/// match the feature order the classifier was trained on. Any failure along
/// the way renders the generic error page via `AppError`.
pub async fn predict(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    let features = FeatureVector::from_form_pairs(&fields)?;
    let prediction = state.store.predict(&features).await?;

    tracing::info!(
        label = %prediction.label,
        score = prediction.score,
        n_features = features.len(),
        "prediction served"
    );

    Ok(Html(pages::render_result(&prediction.label)))
}
