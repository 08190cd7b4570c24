//! Content-based recommender
//!
//! Each movie is a TF-IDF vector over its genres and keywords. The user
//! profile is the mean of the favorites' vectors, and candidates are ranked
//! by cosine similarity to that profile.

use std::collections::HashSet;

use crate::{
    models::{CatalogEntry, Recommendation},
    services::{
        dataset::Dataset,
        tfidf::{SparseVector, TfidfVectorizer},
    },
};

pub struct Recommender {
    dataset: Dataset,
    vectorizer: TfidfVectorizer,
    rows: Vec<SparseVector>,
}

impl Recommender {
    /// Builds the similarity model over every movie in `dataset`
    pub fn new(dataset: Dataset, max_features: usize) -> Self {
        let documents: Vec<String> = dataset
            .movies()
            .iter()
            .map(CatalogEntry::combined_features)
            .collect();
        let (vectorizer, rows) = TfidfVectorizer::fit_transform(&documents, max_features);

        tracing::info!(
            movies = dataset.len(),
            features = vectorizer.n_features(),
            "Built TF-IDF model"
        );

        Self {
            dataset,
            vectorizer,
            rows,
        }
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        self.dataset.movies()
    }

    /// Top `top_n` movies most similar to the favorites, favorites excluded.
    ///
    /// Favorites are matched by title ignoring case; unknown titles are
    /// skipped. Returns an empty list when none of them is in the catalog.
    pub fn recommend(&self, favorites: &[String], top_n: usize) -> Vec<Recommendation> {
        let favorite_indices: Vec<usize> = favorites
            .iter()
            .filter_map(|title| self.dataset.find_by_title(title))
            .collect();

        if favorite_indices.is_empty() {
            tracing::debug!(requested = favorites.len(), "No favorites found in catalog");
            return Vec::new();
        }

        let profile = self.profile(&favorite_indices);
        let profile_norm = profile.iter().map(|w| w * w).sum::<f64>().sqrt();

        let mut scored: Vec<(usize, f64)> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| (index, cosine(row, &profile, profile_norm)))
            .collect();
        // Stable sort keeps catalog order among equal scores
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut seen: HashSet<String> = favorites.iter().map(|t| t.to_lowercase()).collect();
        let mut recommendations = Vec::with_capacity(top_n);

        for (index, score) in scored {
            if recommendations.len() >= top_n {
                break;
            }
            let Some(movie) = self.dataset.get(index) else {
                continue;
            };
            if seen.insert(movie.title.to_lowercase()) {
                recommendations.push(Recommendation::from_entry(movie, score));
            }
        }

        tracing::debug!(
            favorites = favorite_indices.len(),
            returned = recommendations.len(),
            "Computed recommendations"
        );

        recommendations
    }

    fn profile(&self, indices: &[usize]) -> Vec<f64> {
        let mut profile = vec![0.0; self.vectorizer.n_features()];
        for &index in indices {
            for (feature, weight) in self.rows[index].entries() {
                profile[*feature] += weight;
            }
        }
        let count = indices.len() as f64;
        for weight in &mut profile {
            *weight /= count;
        }
        profile
    }
}

fn cosine(row: &SparseVector, profile: &[f64], profile_norm: f64) -> f64 {
    let row_norm = row.norm();
    if row_norm == 0.0 || profile_norm == 0.0 {
        return 0.0;
    }
    (row.dot_dense(profile) / (row_norm * profile_norm)).clamp(0.0, 1.0)
}
