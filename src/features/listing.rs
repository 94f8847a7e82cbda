use serde::Deserialize;

/// List endpoints answer either with a bare array or with a paginated
/// envelope whose rows sit under `results`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Page { results: Vec<T> },
    Items(Vec<T>),
}

impl<T> Listing<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            Self::Page { results } | Self::Items(results) => results,
        }
    }
}

/// Renders an optional cell; missing values show as `-`.
pub(crate) fn cell(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => "-".to_string(),
    }
}
