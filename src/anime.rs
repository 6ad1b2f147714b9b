use std::collections::BTreeMap;
use std::fmt;

/// A title as shown on a listing page
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Site-relative link to the title page
    pub url: String,
    pub title: String,
    pub thumbnail: String,
}

/// One page of a listing
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Page {
    pub entries: Vec<Entry>,
    pub has_next: bool,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum Status {
    #[default]
    Ongoing,
    Completed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "Ongoing"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Details {
    pub title: String,
    pub thumbnail: String,
    pub description: String,
    pub genres: Vec<String>,
    pub status: Status,
    /// Optional metadata keyed by field name (`country`, `category`, ...)
    pub attribution: BTreeMap<String, String>,
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Episode {
    pub url: String,
    pub name: String,
}
