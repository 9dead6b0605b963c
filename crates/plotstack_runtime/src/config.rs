//! Runtime configuration.

use plotstack_foundation::{Value, Variables};
use plotstack_language::Features;

/// Settings shared by the REPL and the batch runner.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Which words may be invoked.
    pub features: Features,

    /// Print the type summary alongside the stack.
    pub show_types: bool,

    /// Print every intermediate step instead of only the final stack.
    pub debug: bool,

    /// Show the welcome banner when the REPL starts.
    pub banner: bool,

    /// Variables every execution starts with.
    pub variables: Variables,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            features: Features::Stable,
            show_types: false,
            debug: false,
            banner: true,
            variables: Variables::new(),
        }
    }
}

impl RuntimeConfig {
    /// Builder method to set the feature level.
    #[must_use]
    pub const fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    /// Builder method to toggle type summaries.
    #[must_use]
    pub const fn with_show_types(mut self, show_types: bool) -> Self {
        self.show_types = show_types;
        self
    }

    /// Builder method to toggle step tracing.
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Builder method to toggle the banner.
    #[must_use]
    pub const fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Builder method to bind an initial variable.
    #[must_use]
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables = self.variables.insert(key.into(), value.into());
        self
    }
}
