//! HTML fragments for each page region
//!
//! Every piece of catalog or backend text goes through [`escape_html`]
//! before it is interpolated.

use crate::client::selection::Selection;
use crate::models::{CatalogEntry, Recommendation};

pub const NO_MATCHES: &str = "No movies found";
pub const NO_SELECTION: &str = "No movies selected yet";
pub const LOADING: &str = "Finding your perfect movies...";
pub const NO_RECOMMENDATIONS: &str = "No recommendations found. Try selecting different movies.";

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Dropdown items for the search box
pub fn render_search_results(results: &[&CatalogEntry]) -> String {
    if results.is_empty() {
        return format!(r#"<div class="search-result-item">{}</div>"#, NO_MATCHES);
    }

    results
        .iter()
        .map(|movie| {
            let title = escape_html(&movie.title);
            let genres = if movie.genres.is_empty() {
                "N/A".to_string()
            } else {
                escape_html(&movie.genres)
            };
            format!(
                r#"<div class="search-result-item" data-title="{title}"><div class="title">{title}</div><div class="genres">{genres}</div></div>"#
            )
        })
        .collect()
}

/// Tags for the selected titles, each with a remove button
pub fn render_selection(selection: &Selection) -> String {
    if selection.is_empty() {
        return format!(r#"<p class="placeholder">{}</p>"#, NO_SELECTION);
    }

    selection
        .titles()
        .iter()
        .map(|title| {
            let title = escape_html(title);
            format!(
                r#"<div class="selected-movie-tag"><span>{title}</span><button class="remove-btn" data-title="{title}" aria-label="Remove">&times;</button></div>"#
            )
        })
        .collect()
}

pub fn render_loading() -> String {
    format!(r#"<div class="loading">{}</div>"#, LOADING)
}

pub fn render_error(message: &str) -> String {
    format!(r#"<div class="error">{}</div>"#, escape_html(message))
}

/// One card per recommendation, in the order given
pub fn render_cards(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return render_error(NO_RECOMMENDATIONS);
    }

    recommendations
        .iter()
        .enumerate()
        .map(|(index, movie)| render_card(index, movie))
        .collect()
}

fn render_card(index: usize, movie: &Recommendation) -> String {
    let percent = movie.similarity_percent();
    let rating = if movie.rating > 0.0 {
        format!("{:.1}", movie.rating)
    } else {
        "N/A".to_string()
    };
    let genres: String = movie
        .genre_list()
        .into_iter()
        .map(|genre| format!(r#"<span class="genre-tag">{}</span>"#, escape_html(genre)))
        .collect();
    let keywords = if movie.keywords.is_empty() {
        "N/A".to_string()
    } else {
        escape_html(&movie.keywords)
    };
    let delay = index as f64 * 0.1;

    format!(
        concat!(
            r#"<div class="movie-card" style="animation-delay: {delay:.1}s">"#,
            r#"<div class="movie-card-header">"#,
            r#"<div class="movie-card-title">{title}</div>"#,
            r#"<div class="movie-card-rating">&#11088; {rating}</div>"#,
            r#"</div>"#,
            r#"<div class="movie-card-body">"#,
            r#"<div class="movie-card-genres">{genres}</div>"#,
            r#"<div class="movie-card-keywords"><strong>Keywords:</strong> {keywords}</div>"#,
            r#"<div class="movie-card-similarity"><span>Match: {percent}%</span>"#,
            r#"<div class="similarity-bar"><div class="similarity-fill" style="width: {percent}%"></div></div>"#,
            r#"</div></div></div>"#,
        ),
        delay = delay,
        title = escape_html(&movie.title),
        rating = rating,
        genres = genres,
        keywords = keywords,
        percent = percent,
    )
}
