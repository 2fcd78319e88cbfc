use askama::Template;
use axum::response::Html;

use crate::error::AppResult;

/// Names of the selectors on the index form
pub const SELECTION_FIELDS: [&str; 3] = ["movie1", "movie2", "movie3"];

/// Selection form listing every movie title
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub fields: &'a [&'a str],
    pub movies: &'a [String],
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate<'a> {
    pub title_text: &'a str,
    pub recommendations: Vec<&'a str>,
}

/// Renders a template into an HTML response
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}
