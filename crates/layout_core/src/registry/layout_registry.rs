//! In-process layout registry.
//!
//! # Responsibility
//! - Store layout descriptors keyed by id, in registration order.
//! - Answer typed lookups through the most-specific-first fallback chain.
//! - Own the single default-layout flag.
//!
//! # Invariants
//! - Ids are unique; duplicate registration never overwrites.
//! - At most one descriptor has `is_default = true`.
//! - Read paths never fail; they return `None`, `false` or `nolayout`.

use crate::model::layout::{LayoutArgs, LayoutDescriptor, NO_LAYOUT};
use crate::registry::type_filter::TypeFilter;
use indexmap::IndexMap;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Layout registration/mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutRegistryError {
    EmptyId,
    DuplicateId(String),
    NotRegistered(String),
    InvalidType(String),
}

impl Display for LayoutRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "layout id must not be empty"),
            Self::DuplicateId(value) => write!(f, "layout id already registered: {value}"),
            Self::NotRegistered(value) => write!(f, "layout not registered: {value}"),
            Self::InvalidType(value) => write!(f, "layout type is invalid: {value}"),
        }
    }
}

impl Error for LayoutRegistryError {}

pub type LayoutResult<T> = Result<T, LayoutRegistryError>;

/// Registry of layouts available to resolution.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: IndexMap<String, LayoutDescriptor>,
    images_url: String,
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutRegistry {
    /// Creates an empty registry whose placeholder images live under `/images`.
    pub fn new() -> Self {
        Self::with_images_url(crate::config::DEFAULT_IMAGES_URL)
    }

    /// Creates an empty registry using `images_url` for placeholder images.
    pub fn with_images_url(images_url: impl Into<String>) -> Self {
        Self {
            layouts: IndexMap::new(),
            images_url: images_url.into(),
        }
    }

    /// Registers one layout, filling missing fields from defaults.
    ///
    /// Args flagged as default go through [`Self::set_default`] so the
    /// single-default invariant holds.
    pub fn register(
        &mut self,
        id: &str,
        args: LayoutArgs,
    ) -> LayoutResult<LayoutDescriptor> {
        let id = id.trim();
        if id.is_empty() {
            return Err(LayoutRegistryError::EmptyId);
        }
        if self.layouts.contains_key(id) {
            debug!("event=layout_register module=registry status=error reason=duplicate id={id}");
            return Err(LayoutRegistryError::DuplicateId(id.to_string()));
        }
        if let Some(types) = &args.types {
            if types.is_empty() {
                return Err(LayoutRegistryError::InvalidType(format!(
                    "{id} declares no types"
                )));
            }
            validate_type_names(types)?;
        }

        let mut descriptor = LayoutDescriptor::from_args(id, &args, &self.images_url);
        let make_default = descriptor.is_default;
        descriptor.is_default = false;
        self.layouts.insert(id.to_string(), descriptor);

        if make_default {
            self.set_default(id)?;
        }

        debug!(
            "event=layout_register module=registry status=ok id={id} default={make_default}"
        );
        Ok(self.layouts[id].clone())
    }

    /// Removes one layout. Returns whether anything was removed.
    pub fn unregister(&mut self, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() {
            return false;
        }
        let removed = self.layouts.shift_remove(id).is_some();
        if removed {
            debug!("event=layout_unregister module=registry status=ok id={id}");
        }
        removed
    }

    /// Adds types to a registered layout and returns its new type set.
    pub fn add_type<I, S>(&mut self, id: &str, types: I) -> LayoutResult<BTreeSet<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let types: Vec<String> = types.into_iter().map(Into::into).collect();
        validate_type_names(&types)?;
        let descriptor = self.require_mut(id)?;
        descriptor
            .types
            .extend(types.iter().map(|value| value.trim().to_string()));
        Ok(descriptor.types.clone())
    }

    /// Removes types from a registered layout and returns its new type set.
    ///
    /// A layout left without types stays registered but matches no filter.
    pub fn remove_type<I, S>(&mut self, id: &str, types: I) -> LayoutResult<BTreeSet<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let descriptor = self.require_mut(id)?;
        for value in types {
            let value: String = value.into();
            descriptor.types.remove(value.trim());
        }
        if descriptor.types.is_empty() {
            warn!(
                "event=layout_types_empty module=registry status=ok id={}",
                descriptor.id
            );
        }
        Ok(descriptor.types.clone())
    }

    /// Marks `id` as the only default layout.
    pub fn set_default(&mut self, id: &str) -> LayoutResult<String> {
        let id = id.trim();
        if id.is_empty() {
            return Err(LayoutRegistryError::EmptyId);
        }
        if !self.layouts.contains_key(id) {
            return Err(LayoutRegistryError::NotRegistered(id.to_string()));
        }

        for (key, descriptor) in self.layouts.iter_mut() {
            descriptor.is_default = key == id;
        }
        debug!("event=layout_set_default module=registry status=ok id={id}");
        Ok(id.to_string())
    }

    /// Lists layouts matching the first type in the filter chain that has any.
    pub fn list(&self, filter: impl Into<TypeFilter>) -> Vec<(&str, &LayoutDescriptor)> {
        let filter = filter.into();
        for layout_type in filter.chain() {
            let matches: Vec<(&str, &LayoutDescriptor)> = self
                .layouts
                .iter()
                .filter(|(_, descriptor)| descriptor.has_type(&layout_type))
                .map(|(id, descriptor)| (id.as_str(), descriptor))
                .collect();
            if !matches.is_empty() {
                return matches;
            }
        }
        vec![]
    }

    /// Returns one layout only if it is listed for `filter`.
    pub fn get(&self, id: &str, filter: impl Into<TypeFilter>) -> Option<&LayoutDescriptor> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        self.list(filter)
            .into_iter()
            .find(|(key, _)| *key == id)
            .map(|(_, descriptor)| descriptor)
    }

    /// Returns the default layout id for `filter`, or `nolayout`.
    pub fn default_layout(&self, filter: impl Into<TypeFilter>) -> String {
        self.list(filter)
            .into_iter()
            .find(|(_, descriptor)| descriptor.is_default)
            .map(|(id, _)| id.to_string())
            .unwrap_or_else(|| NO_LAYOUT.to_string())
    }

    /// Returns whether more than one layout is listed for `filter`.
    pub fn has_multiple_layouts(&self, filter: impl Into<TypeFilter>) -> bool {
        self.list(filter).len() > 1
    }

    /// Returns `(id, label)` pairs for pickers.
    pub fn labels(&self, filter: impl Into<TypeFilter>) -> Vec<(String, String)> {
        self.list(filter)
            .into_iter()
            .map(|(id, descriptor)| (id.to_string(), descriptor.label.clone()))
            .collect()
    }

    /// Returns one layout regardless of type.
    pub fn descriptor(&self, id: &str) -> Option<&LayoutDescriptor> {
        self.layouts.get(id.trim())
    }

    /// Returns ids in registration order.
    pub fn ids(&self) -> Vec<String> {
        self.layouts.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    fn require_mut(&mut self, id: &str) -> LayoutResult<&mut LayoutDescriptor> {
        let id = id.trim();
        if id.is_empty() {
            return Err(LayoutRegistryError::EmptyId);
        }
        self.layouts
            .get_mut(id)
            .ok_or_else(|| LayoutRegistryError::NotRegistered(id.to_string()))
    }
}

fn validate_type_names(types: &[String]) -> LayoutResult<()> {
    match types.iter().find(|value| value.trim().is_empty()) {
        Some(value) => Err(LayoutRegistryError::InvalidType(format!("{value:?}"))),
        None => Ok(()),
    }
}
