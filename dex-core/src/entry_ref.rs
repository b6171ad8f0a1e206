/// Identifies a catalog entry either by numeric id or by name.
///
/// Names are normalized (trimmed, lowercased) so that `" Pikachu "` and
/// `"pikachu"` hit the same upstream resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryRef {
    Id(u32),
    Name(String),
}

impl EntryRef {
    /// Build a name reference, normalizing the input.
    pub fn name(name: impl AsRef<str>) -> Self {
        Self::Name(name.as_ref().trim().to_lowercase())
    }

    /// Path segment to use in upstream URLs.
    pub fn as_path_segment(&self) -> String {
        self.to_string()
    }
}

impl From<u32> for EntryRef {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl std::fmt::Display for EntryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Error returned when a string is neither an id nor a usable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRefParseError(pub String);

impl std::fmt::Display for EntryRefParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not an entry id or name", self.0)
    }
}

impl std::error::Error for EntryRefParseError {}

impl std::str::FromStr for EntryRef {
    type Err = EntryRefParseError;

    /// All-digit input parses as an id; anything else without path
    /// separators or whitespace inside is a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        if trimmed.is_empty() {
            return Err(EntryRefParseError(s.to_string()));
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed
                .parse::<u32>()
                .map(Self::Id)
                .map_err(|_| EntryRefParseError(s.to_string()));
        }
        if trimmed.contains(['/', '?', '#']) || trimmed.contains(char::is_whitespace) {
            return Err(EntryRefParseError(s.to_string()));
        }
        Ok(Self::name(trimmed))
    }
}
