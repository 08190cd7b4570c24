use crate::models::CatalogEntry;

/// Normalizes raw input the way every search sees it: trimmed, lowercased
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive substring match over title or genres, first `limit` hits
/// in catalog order. An empty query matches nothing.
pub fn search<'a>(catalog: &'a [CatalogEntry], query: &str, limit: usize) -> Vec<&'a CatalogEntry> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|movie| {
            movie.title.to_lowercase().contains(&query)
                || movie.genres.to_lowercase().contains(&query)
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogEntry> {
        let mut movies = vec![
            CatalogEntry::new("The Matrix", "Action|Sci-Fi", "hacker", Some(8.7)),
            CatalogEntry::new("Heat", "Crime|Thriller", "heist", Some(8.3)),
            CatalogEntry::new("Alien", "Horror|Sci-Fi", "space", None),
        ];
        for i in 0..20 {
            movies.push(CatalogEntry::new(
                format!("Drama {i}"),
                "Drama",
                "filler",
                None,
            ));
        }
        movies
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(search(&catalog(), "", 10).is_empty());
        assert!(search(&catalog(), "   ", 10).is_empty());
    }

    #[test]
    fn test_title_substring_ignores_case() {
        let catalog = catalog();
        let results = search(&catalog, "MATR", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "The Matrix");
    }

    #[test]
    fn test_matches_genres() {
        let catalog = catalog();
        let titles: Vec<&str> = search(&catalog, "sci-fi", 10)
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(titles, vec!["The Matrix", "Alien"]);
    }

    #[test]
    fn test_results_capped_at_limit() {
        let catalog = catalog();
        assert_eq!(search(&catalog, "drama", 10).len(), 10);
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  The MATRIX "), "the matrix");
    }
}
