//! Built-in layouts registered at startup.

use crate::config::{ExtraLayout, LayoutConfig};
use crate::model::layout::{
    layout_image_url, LayoutArgs, CONTENT_SIDEBAR, CONTENT_SIDEBAR_SIDEBAR, DEFAULT_IMAGE_FILE,
    FULL_WIDTH_CONTENT, SIDEBAR_CONTENT, SIDEBAR_CONTENT_SIDEBAR, SIDEBAR_SIDEBAR_CONTENT,
    SITE_TYPE,
};
use crate::registry::layout_registry::{LayoutRegistry, LayoutResult};
use log::info;

const BUILTIN_LAYOUTS: &[(&str, &str, &str)] = &[
    (CONTENT_SIDEBAR, "Content, Primary Sidebar", "cs.gif"),
    (SIDEBAR_CONTENT, "Primary Sidebar, Content", "sc.gif"),
    (
        CONTENT_SIDEBAR_SIDEBAR,
        "Content, Primary Sidebar, Secondary Sidebar",
        "css.gif",
    ),
    (
        SIDEBAR_SIDEBAR_CONTENT,
        "Secondary Sidebar, Primary Sidebar, Content",
        "ssc.gif",
    ),
    (
        SIDEBAR_CONTENT_SIDEBAR,
        "Secondary Sidebar, Content, Primary Sidebar",
        "scs.gif",
    ),
    (FULL_WIDTH_CONTENT, "Full Width Content", "c.gif"),
];

/// Returns the built-in layout ids in registration order.
pub fn builtin_layout_ids() -> Vec<&'static str> {
    BUILTIN_LAYOUTS.iter().map(|(id, _, _)| *id).collect()
}

/// Returns the built-in layout args for `config`.
///
/// Right-to-left sites default to `sidebar-content`, everything else to
/// `content-sidebar`.
pub fn builtin_layouts(config: &LayoutConfig) -> Vec<(&'static str, LayoutArgs)> {
    let default_id = if config.rtl {
        SIDEBAR_CONTENT
    } else {
        CONTENT_SIDEBAR
    };

    BUILTIN_LAYOUTS
        .iter()
        .map(|(id, label, image)| {
            let args = LayoutArgs::new()
                .label(*label)
                .image(layout_image_url(&config.images_url, image))
                .types([SITE_TYPE])
                .default_layout(*id == default_id);
            (*id, args)
        })
        .collect()
}

/// Registers the built-in layouts, then any extra layouts from `config`.
///
/// Ids that are already registered are skipped so callers can pre-register
/// their own variant of a built-in. Every image, extras included, is based
/// on `config.images_url`.
pub fn register_builtin_layouts(
    registry: &mut LayoutRegistry,
    config: &LayoutConfig,
) -> LayoutResult<usize> {
    let mut registered = 0;
    let builtins: Vec<(&str, LayoutArgs)> = builtin_layouts(config);
    let layouts = builtins.into_iter().chain(
        config
            .extra_layouts
            .iter()
            .map(|extra| (extra.id.as_str(), extra_args(extra, config))),
    );

    for (id, args) in layouts {
        if registry.descriptor(id).is_some() {
            continue;
        }
        registry.register(id, args)?;
        registered += 1;
    }

    info!(
        "event=layouts_seeded module=registry status=ok registered={registered} total={} rtl={}",
        registry.len(),
        config.rtl
    );
    Ok(registered)
}

fn extra_args(extra: &ExtraLayout, config: &LayoutConfig) -> LayoutArgs {
    let mut args = extra.args.clone();
    if args.image.is_none() {
        args.image = Some(layout_image_url(&config.images_url, DEFAULT_IMAGE_FILE));
    }
    args
}

#[cfg(test)]
mod tests {
    use super::{builtin_layout_ids, register_builtin_layouts};
    use crate::config::{ExtraLayout, LayoutConfig};
    use crate::model::layout::LayoutArgs;
    use crate::registry::layout_registry::LayoutRegistry;

    #[test]
    fn registers_six_builtins_with_content_sidebar_default() {
        let mut registry = LayoutRegistry::new();
        let count = register_builtin_layouts(&mut registry, &LayoutConfig::default())
            .expect("builtins should register");

        assert_eq!(count, 6);
        assert_eq!(registry.ids(), builtin_layout_ids());
        assert_eq!(registry.default_layout("site"), "content-sidebar");
        let full = registry.descriptor("full-width-content").expect("full width");
        assert_eq!(full.image, "/images/layouts/c.gif");
    }

    #[test]
    fn rtl_defaults_to_sidebar_content() {
        let mut registry = LayoutRegistry::new();
        let config = LayoutConfig {
            rtl: true,
            ..LayoutConfig::default()
        };
        register_builtin_layouts(&mut registry, &config).expect("builtins should register");
        assert_eq!(registry.default_layout("site"), "sidebar-content");
    }

    #[test]
    fn skips_pre_registered_ids_and_appends_extras() {
        let mut registry = LayoutRegistry::new();
        registry
            .register("full-width-content", LayoutArgs::new().label("Custom"))
            .expect("custom should register");
        let config = LayoutConfig {
            extra_layouts: vec![ExtraLayout {
                id: "landing".to_string(),
                args: LayoutArgs::new().types(["singular"]),
            }],
            ..LayoutConfig::default()
        };

        let count = register_builtin_layouts(&mut registry, &config).expect("seed");
        assert_eq!(count, 6);
        assert_eq!(registry.len(), 7);
        assert_eq!(
            registry.descriptor("full-width-content").expect("custom").label,
            "Custom"
        );
        assert_eq!(registry.ids().last().map(String::as_str), Some("landing"));
    }
}
