//! Layout registration and resolution core.
//! Owns layout descriptors, typed lookup chains and per-request resolution.

pub mod config;
pub mod logging;
pub mod model;
pub mod registry;
pub mod resolve;

pub use config::{ConfigError, ExtraLayout, LayoutConfig, DEFAULT_IMAGES_URL};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, log_registry_summary,
    logging_status,
};
pub use model::layout::{
    LayoutArgs, LayoutDescriptor, CONTENT_SIDEBAR, CONTENT_SIDEBAR_SIDEBAR, FULL_WIDTH_CONTENT,
    NO_LAYOUT, SIDEBAR_CONTENT, SIDEBAR_CONTENT_SIDEBAR, SIDEBAR_SIDEBAR_CONTENT, SITE_TYPE,
};
pub use registry::builtin::{builtin_layout_ids, builtin_layouts, register_builtin_layouts};
pub use registry::layout_registry::{LayoutRegistry, LayoutRegistryError, LayoutResult};
pub use registry::shared::SharedLayoutRegistry;
pub use registry::type_filter::TypeFilter;
pub use resolve::context::{LayoutContext, LayoutSource, NoStoredLayouts};
pub use resolve::resolver::LayoutResolver;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
