//! Movie dataset loader
//!
//! Reads the CSV the backend serves from. Only `title`, `genres`, `keywords`
//! and `rating` are used; any other column is ignored. Rows without a title,
//! genres or keywords are dropped, and a rating that is missing or not a
//! number becomes `None`.

use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::{error::AppResult, models::CatalogEntry};

#[derive(Debug, Deserialize)]
struct MovieRow {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    genres: Option<String>,
    #[serde(default)]
    keywords: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    rating: Option<f64>,
}

impl MovieRow {
    fn into_entry(self) -> Option<CatalogEntry> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let genres = self.genres.filter(|g| !g.is_empty())?;
        let keywords = self.keywords.filter(|k| !k.is_empty())?;
        let rating = self.rating.filter(|r| r.is_finite());
        Some(CatalogEntry {
            title,
            genres,
            keywords,
            rating,
        })
    }
}

/// The immutable movie list the recommender is built over
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    movies: Vec<CatalogEntry>,
}

impl Dataset {
    pub fn new(movies: Vec<CatalogEntry>) -> Self {
        Self { movies }
    }

    /// Loads the dataset from a CSV file on disk
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            movies = dataset.len(),
            "Loaded movie dataset"
        );

        Ok(dataset)
    }

    /// Parses CSV data with a header row
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut movies = Vec::new();
        let mut dropped = 0usize;

        for row in csv_reader.deserialize::<MovieRow>() {
            match row?.into_entry() {
                Some(entry) => movies.push(entry),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            tracing::debug!(dropped, "Skipped incomplete dataset rows");
        }

        Ok(Self { movies })
    }

    pub fn movies(&self) -> &[CatalogEntry] {
        &self.movies
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.movies.get(index)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Index of the first movie whose title equals `title`, ignoring case
    pub fn find_by_title(&self, title: &str) -> Option<usize> {
        let needle = title.to_lowercase();
        self.movies
            .iter()
            .position(|m| m.title.to_lowercase() == needle)
    }
}
