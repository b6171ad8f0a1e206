/// The three mutually exclusive ways to browse the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// Catalog order, no filtering.
    Plain,
    /// Case-insensitive name substring search.
    Search(String),
    /// Members of one category.
    Filter(String),
}

/// Category value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

impl QueryMode {
    /// Pick the active mode from optional user inputs.
    ///
    /// A non-blank search overrides any category. A blank category or
    /// `all` means plain listing.
    pub fn resolve(search: Option<&str>, category: Option<&str>) -> Self {
        if let Some(query) = search.map(str::trim).filter(|q| !q.is_empty()) {
            return Self::Search(query.to_string());
        }
        match category.map(|c| c.trim().to_lowercase()) {
            Some(c) if !c.is_empty() && c != ALL_CATEGORIES => Self::Filter(c),
            _ => Self::Plain,
        }
    }

    /// Whether resolving these inputs discards the category in favor of search.
    pub fn search_overrides_filter(search: Option<&str>, category: Option<&str>) -> bool {
        let has_search = search.is_some_and(|q| !q.trim().is_empty());
        let has_filter = category.is_some_and(|c| {
            let c = c.trim();
            !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES)
        });
        has_search && has_filter
    }

    /// Short human-readable label for headers.
    pub fn description(&self) -> String {
        match self {
            Self::Plain => "All entries".to_string(),
            Self::Search(q) => format!("Search: \"{q}\""),
            Self::Filter(c) => format!("Category: {c}"),
        }
    }
}

impl std::fmt::Display for QueryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_set_is_plain() {
        assert_eq!(QueryMode::resolve(None, None), QueryMode::Plain);
        assert_eq!(QueryMode::resolve(Some("  "), Some("")), QueryMode::Plain);
    }

    #[test]
    fn all_category_is_plain() {
        assert_eq!(QueryMode::resolve(None, Some("All")), QueryMode::Plain);
    }

    #[test]
    fn search_overrides_category() {
        assert_eq!(
            QueryMode::resolve(Some(" pika "), Some("fire")),
            QueryMode::Search("pika".to_string())
        );
        assert!(QueryMode::search_overrides_filter(Some("pika"), Some("fire")));
        assert!(!QueryMode::search_overrides_filter(Some("pika"), Some("all")));
    }

    #[test]
    fn category_is_lowercased() {
        assert_eq!(
            QueryMode::resolve(None, Some("Fire")),
            QueryMode::Filter("fire".to_string())
        );
    }
}
