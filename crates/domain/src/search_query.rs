use crate::errors::QueryError;
use std::fmt;

/// Longest accepted query, counted in characters after normalization.
pub const MAX_QUERY_CHARS: usize = 100;

/// A normalized search query: trimmed, lowercased, non-empty and at most
/// [`MAX_QUERY_CHARS`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let normalized = raw.to_lowercase().trim().to_string();

        if normalized.is_empty() {
            return Err(QueryError::Empty);
        }

        let actual = normalized.chars().count();
        if actual > MAX_QUERY_CHARS {
            return Err(QueryError::TooLong {
                max: MAX_QUERY_CHARS,
                actual,
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cache key of one search page.
///
/// Query and page token are kept as separate fields, so distinct
/// `(query, token)` pairs never share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchCacheKey {
    query: String,
    page_token: String,
}

impl SearchCacheKey {
    pub fn new(query: &SearchQuery, page_token: &str) -> Self {
        Self {
            query: query.as_str().to_string(),
            page_token: page_token.to_string(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_token(&self) -> &str {
        &self.page_token
    }
}

impl fmt::Display for SearchCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{241F}{}", self.query, self.page_token)
    }
}
