use rhai::Engine;
use std::sync::Arc;

use crate::config::HostConfig;

pub mod bridge;
pub mod docs;
pub mod registry;

/// Registers the string library under `host.namespace` and, when
/// `host.expose_globally` is set, in the global namespace as well.
pub fn register_all_functions(engine: &mut Engine, host: &HostConfig) {
    // rhai's "sync" feature makes shared modules Arc-backed
    let module = Arc::new(registry::build_module(host));
    if host.expose_globally {
        engine.register_global_module(module.clone());
    }
    engine.register_static_module(host.namespace.as_str(), module);
}
