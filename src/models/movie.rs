use serde::{Deserialize, Deserializer, Serialize};

/// Separator used between genres in the dataset, e.g. `Action|Sci-Fi`
const GENRE_SEPARATOR: char = '|';

/// A movie in the catalog as served by `GET /api/movies`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: String,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl CatalogEntry {
    pub fn new(
        title: impl Into<String>,
        genres: impl Into<String>,
        keywords: impl Into<String>,
        rating: Option<f64>,
    ) -> Self {
        Self {
            title: title.into(),
            genres: genres.into(),
            keywords: keywords.into(),
            rating,
        }
    }

    /// Text the similarity model is built from
    pub fn combined_features(&self) -> String {
        format!("{} {}", self.genres, self.keywords)
    }
}

/// A recommended movie with its similarity to the user's profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: String,
    /// 0.0 when the dataset has no rating
    #[serde(default, deserialize_with = "null_as_zero")]
    pub rating: f64,
    /// Cosine similarity in `[0, 1]`
    pub similarity_score: f64,
}

impl Recommendation {
    pub fn from_entry(entry: &CatalogEntry, similarity_score: f64) -> Self {
        Self {
            title: entry.title.clone(),
            genres: entry.genres.clone(),
            keywords: entry.keywords.clone(),
            rating: entry.rating.unwrap_or(0.0),
            similarity_score,
        }
    }

    /// Genres split on `|`, trimmed, blanks dropped
    pub fn genre_list(&self) -> Vec<&str> {
        split_genres(&self.genres)
    }

    /// Similarity as a whole percentage, used for the match bar width
    pub fn similarity_percent(&self) -> i64 {
        (self.similarity_score * 100.0).round() as i64
    }
}

fn split_genres(genres: &str) -> Vec<&str> {
    genres
        .split(GENRE_SEPARATOR)
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_entry_tolerates_missing_fields() {
        let entry: CatalogEntry =
            serde_json::from_value(json!({ "title": "Heat", "genres": null })).unwrap();
        assert_eq!(entry.title, "Heat");
        assert_eq!(entry.genres, "");
        assert_eq!(entry.keywords, "");
        assert_eq!(entry.rating, None);
    }

    #[test]
    fn test_genre_list_drops_blanks() {
        let entry = CatalogEntry::new("Alien", "Horror| Sci-Fi ||", "", Some(8.5));
        let rec = Recommendation::from_entry(&entry, 0.9);
        assert_eq!(rec.genre_list(), vec!["Horror", "Sci-Fi"]);
    }

    #[test]
    fn test_combined_features() {
        let entry = CatalogEntry::new("Alien", "Horror|Sci-Fi", "space crew", None);
        assert_eq!(entry.combined_features(), "Horror|Sci-Fi space crew");
    }

    #[test]
    fn test_recommendation_null_rating_is_zero() {
        let rec: Recommendation = serde_json::from_value(json!({
            "title": "Alien",
            "genres": "Horror",
            "keywords": "space",
            "rating": null,
            "similarity_score": 0.456
        }))
        .unwrap();
        assert_eq!(rec.rating, 0.0);
        assert_eq!(rec.similarity_percent(), 46);
    }

    #[test]
    fn test_from_entry_defaults_rating() {
        let entry = CatalogEntry::new("Alien", "Horror", "space", None);
        let rec = Recommendation::from_entry(&entry, 0.5);
        assert_eq!(rec.rating, 0.0);
        assert_eq!(rec.similarity_percent(), 50);
    }
}
