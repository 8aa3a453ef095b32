use std::sync::Arc;

use super::client::Client;
use super::cmd::{self, CmdFn};
use super::options::ClientOptions;
use super::registry::{FunctionOverrideRegistry, OverrideKind};

// identifier for the underlying mock implementation being adapted
pub const ADAPTEE: &str = "mem-store";

struct Inner {
    registry: FunctionOverrideRegistry,
}

// Produces clients with the reference surface. Cheap to clone; clones
// share the same override registry.
#[derive(Clone)]
pub struct Adapter {
    inner: Arc<Inner>,
}

impl Adapter {
    pub fn new() -> Self {
        Adapter::with_registry(FunctionOverrideRegistry::new())
    }

    // a registry injected per adapter keeps tests isolated from each other
    pub fn with_registry(registry: FunctionOverrideRegistry) -> Self {
        Adapter {
            inner: Arc::new(Inner { registry }),
        }
    }

    pub(crate) fn registry(&self) -> &FunctionOverrideRegistry {
        &self.inner.registry
    }

    // Create a new adapted client with the given options. Registered
    // overrides are replayed onto it in registration order; overrides
    // registered later do not affect it.
    pub fn create_client(&self, options: Option<ClientOptions>) -> Client {
        let functions = self.inner.registry.materialize();
        log::debug!(
            "adapting {} client: end supplied via quit, {} override(s) applied",
            ADAPTEE,
            functions.len()
        );
        Client::new(self.clone(), options, functions)
    }

    // the effective function a client created now would get for the slot
    pub fn get_function(&self, name: &str) -> Option<CmdFn> {
        self.inner
            .registry
            .materialize()
            .get(name)
            .cloned()
            .or_else(|| cmd::builtin(name))
    }

    pub fn set_function(&self, name: &str, kind: OverrideKind) {
        self.inner.registry.set(name, kind);
    }

    pub fn delete_function(&self, name: &str) {
        self.inner.registry.delete(name);
    }
}

impl Default for Adapter {
    fn default() -> Self {
        Adapter::new()
    }
}
