//! Layout type filters and lookup chains.

use crate::model::layout::SITE_TYPE;

/// Context types used to narrow layout lookups.
///
/// Segments are ordered from least to most specific, e.g.
/// `["singular", "post", "42"]`. A trailing numeric segment is a content id
/// and is combined with the segment before it during lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFilter {
    segments: Vec<String>,
}

impl TypeFilter {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The plain `site` filter.
    pub fn site() -> Self {
        Self::new([SITE_TYPE])
    }

    /// Appends a more specific segment.
    pub fn with(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends a numeric content id segment.
    pub fn with_id(self, id: u64) -> Self {
        self.with(id.to_string())
    }

    /// Builds the lookup chain, most specific type first.
    ///
    /// The segments are reversed and `site` is appended. When the first
    /// chain entry is an unsigned integer (ASCII digits only) it becomes
    /// `<next>-<id>`, so `["singular", "post", "42"]` yields
    /// `["post-42", "post", "singular", "site"]`. Content ids are `u64`, so
    /// signed or fractional heads such as `-3` or `4.5` are searched as-is.
    pub fn chain(&self) -> Vec<String> {
        let mut chain: Vec<String> = self.segments.iter().rev().cloned().collect();
        chain.push(SITE_TYPE.to_string());

        if is_numeric(&chain[0]) {
            chain[0] = format!("{}-{}", chain[1], chain[0]);
        }
        chain
    }
}

impl Default for TypeFilter {
    fn default() -> Self {
        Self::site()
    }
}

impl From<&str> for TypeFilter {
    fn from(value: &str) -> Self {
        Self::new([value])
    }
}

impl From<String> for TypeFilter {
    fn from(value: String) -> Self {
        Self::new([value])
    }
}

impl<const N: usize> From<[&str; N]> for TypeFilter {
    fn from(value: [&str; N]) -> Self {
        Self::new(value)
    }
}

impl From<Vec<String>> for TypeFilter {
    fn from(value: Vec<String>) -> Self {
        Self { segments: value }
    }
}

impl From<&TypeFilter> for TypeFilter {
    fn from(value: &TypeFilter) -> Self {
        value.clone()
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::TypeFilter;

    #[test]
    fn site_filter_chain_is_site_twice() {
        assert_eq!(TypeFilter::site().chain(), vec!["site", "site"]);
    }

    #[test]
    fn chain_reverses_segments_and_appends_site() {
        let chain = TypeFilter::from(["archive", "category"]).chain();
        assert_eq!(chain, vec!["category", "archive", "site"]);
    }

    #[test]
    fn chain_splices_trailing_numeric_id() {
        let chain = TypeFilter::from(["singular", "post"]).with_id(42).chain();
        assert_eq!(chain, vec!["post-42", "post", "singular", "site"]);
    }

    #[test]
    fn lone_numeric_segment_is_spliced_with_site() {
        let chain = TypeFilter::from("7").chain();
        assert_eq!(chain, vec!["site-7", "site"]);
    }

    #[test]
    fn empty_filter_falls_back_to_site() {
        let chain = TypeFilter::new(Vec::<String>::new()).chain();
        assert_eq!(chain, vec!["site"]);
    }

    #[test]
    fn signed_or_fractional_heads_are_not_spliced() {
        let negative = TypeFilter::from(["singular", "post", "-3"]).chain();
        assert_eq!(negative, vec!["-3", "post", "singular", "site"]);

        let fractional = TypeFilter::from(["singular", "post", "4.5"]).chain();
        assert_eq!(fractional[0], "4.5");
    }

    #[test]
    fn non_digit_segments_are_not_spliced() {
        let chain = TypeFilter::from(["archive", "4a"]).chain();
        assert_eq!(chain[0], "4a");
    }
}
