/// Ordered list of unique titles the user picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    titles: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `title` unless already present. Returns whether it was added.
    pub fn add(&mut self, title: &str) -> bool {
        if self.contains(title) {
            return false;
        }
        self.titles.push(title.to_string());
        true
    }

    /// Removes every occurrence of `title`. Returns whether anything changed.
    pub fn remove(&mut self, title: &str) -> bool {
        let before = self.titles.len();
        self.titles.retain(|t| t != title);
        self.titles.len() != before
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut selection = Selection::new();
        assert!(selection.add("Heat"));
        assert!(!selection.add("Heat"));
        assert_eq!(selection.titles(), ["Heat"]);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut selection = Selection::new();
        selection.add("Heat");
        selection.add("Alien");
        selection.add("Up");
        assert_eq!(selection.titles(), ["Heat", "Alien", "Up"]);
    }

    #[test]
    fn test_remove() {
        let mut selection = Selection::new();
        selection.add("Heat");
        selection.add("Alien");
        assert!(selection.remove("Heat"));
        assert!(!selection.remove("Heat"));
        assert_eq!(selection.titles(), ["Alien"]);
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let mut selection = Selection::new();
        selection.add("Heat");
        assert!(selection.add("heat"));
        assert_eq!(selection.len(), 2);
    }
}
