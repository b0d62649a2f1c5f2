//! CLI smoke entry point.
//!
//! # Responsibility
//! - Seed a layout registry from an optional JSON config path.
//! - Print the site listing and the resolved site layout deterministically.
//!
//! Usage: `layout_cli [config.json] [log_dir]`; `log_dir` overrides the
//! config's `log_dir`.

use layout_core::{
    core_version, init_logging_from_config, LayoutConfig, LayoutContext, LayoutResolver,
    NoStoredLayouts,
};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("layout_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let mut config = match args.next() {
        Some(path) => LayoutConfig::from_path(&path).map_err(|err| err.to_string())?,
        None => LayoutConfig::default(),
    };
    if let Some(log_dir) = args.next() {
        config.log_dir = Some(log_dir);
    }
    init_logging_from_config(&config)?;

    let registry = config.build_registry().map_err(|err| err.to_string())?;
    info!(
        "event=cli_start module=cli status=ok layouts={} rtl={}",
        registry.len(),
        config.rtl
    );

    println!("layout_core version={}", core_version());
    for (id, label) in registry.labels("site") {
        println!("layout {id} label=\"{label}\"");
    }

    let mut resolver = LayoutResolver::new(&registry);
    let resolved = resolver.resolve(
        &LayoutContext::Site,
        &NoStoredLayouts,
        None,
        config.cache_resolution,
    );
    println!("site_layout={resolved}");
    Ok(())
}
