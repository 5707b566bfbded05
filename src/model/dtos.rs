/// Sortable catalog columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Trimester,
    CourseNumber,
    CourseName,
    SemesterCredits,
    TotalClockHours,
}

impl SortKey {
    /// Maps a column name as typed at the prompt to a sort key
    pub fn parse(name: &str) -> Option<SortKey> {
        match name.to_lowercase().as_str() {
            "trimester" => Some(SortKey::Trimester),
            "number" => Some(SortKey::CourseNumber),
            "name" => Some(SortKey::CourseName),
            "credits" => Some(SortKey::SemesterCredits),
            "hours" => Some(SortKey::TotalClockHours),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Sort configuration for one render pass; no key means catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

/// Common parameters for one catalog render pass
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    pub search: String,
    pub sort: SortConfig,
    pub page: usize,
}

impl Default for CatalogQuery {
    fn default() -> CatalogQuery {
        CatalogQuery {
            search: String::new(),
            sort: SortConfig::default(),
            // pages are 1-based
            page: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_column_names() {
        assert_eq!(SortKey::parse("trimester"), Some(SortKey::Trimester));
        assert_eq!(SortKey::parse("Number"), Some(SortKey::CourseNumber));
        assert_eq!(SortKey::parse("NAME"), Some(SortKey::CourseName));
        assert_eq!(SortKey::parse("credits"), Some(SortKey::SemesterCredits));
        assert_eq!(SortKey::parse("hours"), Some(SortKey::TotalClockHours));
        assert_eq!(SortKey::parse("teacher"), None);
    }

    #[test]
    fn default_query_starts_unsorted_on_page_one() {
        let query = CatalogQuery::default();
        assert!(query.search.is_empty());
        assert_eq!(query.sort.key, None);
        assert_eq!(query.sort.direction, SortDirection::Ascending);
        assert_eq!(query.page, 1);
    }
}
