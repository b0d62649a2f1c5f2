//! Layout descriptor model.
//!
//! # Responsibility
//! - Define the structured record stored for every registered layout.
//! - Apply registration defaults exactly once, at construction.
//!
//! # Invariants
//! - `id` is never blank.
//! - `types` is non-empty when a descriptor is created.
//! - `is_default` is owned by the registry; descriptors never flip it alone.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Layout id: main content first, primary sidebar second.
pub const CONTENT_SIDEBAR: &str = "content-sidebar";
/// Layout id: primary sidebar first, main content second.
pub const SIDEBAR_CONTENT: &str = "sidebar-content";
/// Layout id: content, primary sidebar, secondary sidebar.
pub const CONTENT_SIDEBAR_SIDEBAR: &str = "content-sidebar-sidebar";
/// Layout id: secondary sidebar, primary sidebar, content.
pub const SIDEBAR_SIDEBAR_CONTENT: &str = "sidebar-sidebar-content";
/// Layout id: secondary sidebar, content, primary sidebar.
pub const SIDEBAR_CONTENT_SIDEBAR: &str = "sidebar-content-sidebar";
/// Layout id: content only.
pub const FULL_WIDTH_CONTENT: &str = "full-width-content";

/// Sentinel returned when no default layout matches a filter.
pub const NO_LAYOUT: &str = "nolayout";
/// Fallback type appended to every lookup chain.
pub const SITE_TYPE: &str = "site";
/// Label used when registration input carries none.
pub const DEFAULT_LABEL: &str = "No Label Selected";
/// Placeholder image file, relative to the layouts image directory.
pub const DEFAULT_IMAGE_FILE: &str = "none.gif";

/// Registered layout record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    /// Stable layout key, e.g. `content-sidebar`.
    pub id: String,
    /// Human-readable name shown in pickers.
    pub label: String,
    /// Preview image reference (URL or path).
    pub image: String,
    /// Context types this layout applies to.
    pub types: BTreeSet<String>,
    /// Whether this layout is the registry fallback.
    #[serde(rename = "default")]
    pub is_default: bool,
}

impl LayoutDescriptor {
    /// Builds a descriptor from partial input, filling missing fields.
    ///
    /// `images_url` is the base used for the placeholder image.
    pub fn from_args(id: impl Into<String>, args: &LayoutArgs, images_url: &str) -> Self {
        let types = match &args.types {
            Some(types) => types.iter().map(|value| value.trim().to_string()).collect(),
            None => BTreeSet::from([SITE_TYPE.to_string()]),
        };

        Self {
            id: id.into(),
            label: args
                .label
                .clone()
                .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            image: args
                .image
                .clone()
                .unwrap_or_else(|| layout_image_url(images_url, DEFAULT_IMAGE_FILE)),
            types,
            is_default: args.is_default.unwrap_or(false),
        }
    }

    /// Returns whether this layout applies to `layout_type`.
    pub fn has_type(&self, layout_type: &str) -> bool {
        self.types.contains(layout_type)
    }
}

/// Partial layout input used at registration.
///
/// Every `None` field is replaced by its default when the descriptor is
/// built; `Some(vec![])` for `types` is rejected by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutArgs {
    pub label: Option<String>,
    pub image: Option<String>,
    pub types: Option<Vec<String>>,
    #[serde(rename = "default")]
    pub is_default: Option<bool>,
}

impl LayoutArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn default_layout(mut self, is_default: bool) -> Self {
        self.is_default = Some(is_default);
        self
    }
}

/// Joins the layouts image directory under `images_url` with `file`.
pub fn layout_image_url(images_url: &str, file: &str) -> String {
    format!("{}/layouts/{file}", images_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::{layout_image_url, LayoutArgs, LayoutDescriptor, DEFAULT_LABEL, SITE_TYPE};

    #[test]
    fn from_args_fills_missing_fields() {
        let descriptor = LayoutDescriptor::from_args("wide", &LayoutArgs::new(), "/img/");

        assert_eq!(descriptor.id, "wide");
        assert_eq!(descriptor.label, DEFAULT_LABEL);
        assert_eq!(descriptor.image, "/img/layouts/none.gif");
        assert!(descriptor.has_type(SITE_TYPE));
        assert_eq!(descriptor.types.len(), 1);
        assert!(!descriptor.is_default);
    }

    #[test]
    fn from_args_keeps_supplied_fields_and_dedups_types() {
        let args = LayoutArgs::new()
            .label("Wide")
            .image("wide.gif")
            .types(["singular", " singular ", "archive"])
            .default_layout(true);
        let descriptor = LayoutDescriptor::from_args("wide", &args, "/img");

        assert_eq!(descriptor.label, "Wide");
        assert_eq!(descriptor.image, "wide.gif");
        assert_eq!(descriptor.types.len(), 2);
        assert!(!descriptor.has_type(SITE_TYPE));
        assert!(descriptor.is_default);
    }

    #[test]
    fn descriptor_serializes_default_flag_under_short_name() {
        let descriptor = LayoutDescriptor::from_args("wide", &LayoutArgs::new(), "/img");
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["default"], false);
        assert_eq!(json["types"][0], "site");
    }

    #[test]
    fn image_url_joins_without_double_slash() {
        assert_eq!(layout_image_url("/a/", "cs.gif"), "/a/layouts/cs.gif");
        assert_eq!(layout_image_url("/a", "cs.gif"), "/a/layouts/cs.gif");
    }
}
