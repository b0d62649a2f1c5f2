//! Rendering contexts and the content lookup contract.

use crate::model::layout::SITE_TYPE;
use crate::registry::type_filter::TypeFilter;

/// What is being rendered for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutContext {
    /// A single post/page, or the posts page when it is not the front page.
    Singular {
        post_type: String,
        post_id: Option<u64>,
    },
    /// A category, tag or custom taxonomy term archive.
    Taxonomy { taxonomy: String, term_id: u64 },
    /// A post type archive with archive settings support.
    PostTypeArchive { post_type: String },
    /// An author archive.
    Author { author_id: u64 },
    /// Anything else.
    Site,
}

impl LayoutContext {
    pub fn singular(post_type: impl Into<String>, post_id: Option<u64>) -> Self {
        Self::Singular {
            post_type: post_type.into(),
            post_id,
        }
    }

    pub fn taxonomy(taxonomy: impl Into<String>, term_id: u64) -> Self {
        Self::Taxonomy {
            taxonomy: taxonomy.into(),
            term_id,
        }
    }

    pub fn post_type_archive(post_type: impl Into<String>) -> Self {
        Self::PostTypeArchive {
            post_type: post_type.into(),
        }
    }

    /// Type filter used to validate candidates for this context.
    pub fn type_filter(&self) -> TypeFilter {
        match self {
            Self::Singular { post_type, post_id } => {
                let filter = TypeFilter::from(["singular", post_type.as_str()]);
                match post_id {
                    Some(id) => filter.with_id(*id),
                    None => filter,
                }
            }
            Self::Taxonomy { taxonomy, term_id } => {
                TypeFilter::from(["archive", taxonomy.as_str()]).with_id(*term_id)
            }
            Self::PostTypeArchive { post_type } => {
                TypeFilter::from(["archive"]).with(format!("post-type-archive-{post_type}"))
            }
            Self::Author { author_id } => {
                TypeFilter::from(["archive", "author"]).with_id(*author_id)
            }
            Self::Site => TypeFilter::from(SITE_TYPE),
        }
    }

    /// Short name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Singular { .. } => "singular",
            Self::Taxonomy { .. } => "taxonomy",
            Self::PostTypeArchive { .. } => "post_type_archive",
            Self::Author { .. } => "author",
            Self::Site => "site",
        }
    }
}

/// Content lookup collaborator supplying stored layout choices.
///
/// Every method defaults to "nothing stored". Empty strings are treated
/// as absent by the resolver.
pub trait LayoutSource {
    /// Explicit per-post assignment. `None` id means the current post.
    fn post_layout(&self, _post_id: Option<u64>) -> Option<String> {
        None
    }

    /// Layout stored on a taxonomy term.
    fn term_layout(&self, _term_id: u64) -> Option<String> {
        None
    }

    /// Layout stored in a post type's archive settings.
    fn post_type_archive_layout(&self, _post_type: &str) -> Option<String> {
        None
    }

    /// Layout stored on an author profile.
    fn author_layout(&self, _author_id: u64) -> Option<String> {
        None
    }

    /// Global site layout option.
    fn site_layout(&self) -> Option<String>;
}

/// Source with nothing stored anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoStoredLayouts;

impl LayoutSource for NoStoredLayouts {
    fn site_layout(&self) -> Option<String> {
        None
    }
}
