//! Per-request layout resolution.
//!
//! # Responsibility
//! - Pick the active layout id for one request context.
//! - Keep the resolved value for the rest of the request when asked to.
//!
//! # Invariants
//! - A short-circuit value always wins, even over the cache.
//! - A candidate is only returned when the registry lists it for the
//!   context; otherwise the context default (or `nolayout`) is returned.
//! - The cache lives on the resolver, so it never outlives one request.

use crate::registry::layout_registry::LayoutRegistry;
use crate::resolve::context::{LayoutContext, LayoutSource};
use log::debug;

/// Resolver bound to one registry snapshot for the duration of a request.
#[derive(Debug)]
pub struct LayoutResolver<'a> {
    registry: &'a LayoutRegistry,
    cache: Option<String>,
}

impl<'a> LayoutResolver<'a> {
    pub fn new(registry: &'a LayoutRegistry) -> Self {
        Self {
            registry,
            cache: None,
        }
    }

    /// Returns the cached layout id, if one was stored.
    pub fn cached(&self) -> Option<&str> {
        self.cache.as_deref()
    }

    /// Drops the cached layout id.
    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    /// Resolves the layout id for `context`.
    ///
    /// Precedence: `short_circuit`, then the cache (when `use_cache`), then
    /// the context-specific stored value, then the global site option. The
    /// chosen candidate must be listed for the context's type filter.
    pub fn resolve(
        &mut self,
        context: &LayoutContext,
        source: &dyn LayoutSource,
        short_circuit: Option<&str>,
        use_cache: bool,
    ) -> String {
        if let Some(value) = short_circuit {
            debug!(
                "event=layout_resolve module=resolve status=ok path=short_circuit context={}",
                context.kind()
            );
            return value.to_string();
        }

        if use_cache {
            if let Some(cached) = &self.cache {
                return cached.clone();
            }
        }

        let candidate = context_layout(context, source).or_else(|| stored(source.site_layout()));
        let filter = context.type_filter();
        let resolved = match candidate {
            Some(id) if self.registry.get(&id, &filter).is_some() => id,
            _ => self.registry.default_layout(&filter),
        };

        debug!(
            "event=layout_resolve module=resolve status=ok path=computed context={} layout={}",
            context.kind(),
            resolved
        );

        if use_cache {
            self.cache = Some(resolved.clone());
        }
        resolved
    }
}

fn context_layout(context: &LayoutContext, source: &dyn LayoutSource) -> Option<String> {
    let value = match context {
        LayoutContext::Singular { post_id, .. } => source.post_layout(*post_id),
        LayoutContext::Taxonomy { term_id, .. } => source.term_layout(*term_id),
        LayoutContext::PostTypeArchive { post_type } => source.post_type_archive_layout(post_type),
        LayoutContext::Author { author_id } => source.author_layout(*author_id),
        LayoutContext::Site => None,
    };
    stored(value)
}

fn stored(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}
