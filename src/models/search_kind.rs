use std::fmt;

/// Dimension a catalog query runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Author,
    Genre,
    Title,
}

impl SearchKind {
    /// Picker order.
    pub const ALL: [SearchKind; 3] = [SearchKind::Author, SearchKind::Genre, SearchKind::Title];

    pub fn label(self) -> &'static str {
        match self {
            SearchKind::Author => "Author",
            SearchKind::Genre => "Genre",
            SearchKind::Title => "Title",
        }
    }

    /// Name of the array holding the records in this kind's response.
    pub fn records_field(self) -> &'static str {
        match self {
            SearchKind::Genre => "works",
            SearchKind::Author | SearchKind::Title => "docs",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
