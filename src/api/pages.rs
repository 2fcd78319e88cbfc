use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::{
    error::AppResult,
    services,
    templates::{self, IndexTemplate, ResultTemplate, SELECTION_FIELDS},
};

use super::AppState;

/// Fields posted by the selection form
#[derive(Debug, Default, Deserialize)]
pub struct SelectionForm {
    #[serde(default)]
    pub movie1: Option<String>,
    #[serde(default)]
    pub movie2: Option<String>,
    #[serde(default)]
    pub movie3: Option<String>,
}

impl SelectionForm {
    /// Non-empty selections in field order
    pub fn selected(self) -> Vec<String> {
        [self.movie1, self.movie2, self.movie3]
            .into_iter()
            .flatten()
            .filter(|title| !title.is_empty())
            .collect()
    }
}

/// Selection form
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    templates::render(&IndexTemplate {
        fields: &SELECTION_FIELDS,
        movies: state.data.catalog(),
    })
}

/// Result page for a submitted selection
///
/// A request without a usable form body counts as an empty selection.
pub async fn recommend(
    State(state): State<AppState>,
    form: Option<Form<SelectionForm>>,
) -> AppResult<Html<String>> {
    let selected = form.map(|Form(form)| form).unwrap_or_default().selected();
    let recommendations = services::recommend(&state.data, &selected, &state.settings);
    let title_text = recommendations.heading(state.settings.limit);

    tracing::info!(
        selected = selected.len(),
        results = recommendations.titles().len(),
        "Rendered recommendations"
    );

    templates::render(&ResultTemplate {
        title_text: &title_text,
        recommendations: recommendations.titles(),
    })
}
