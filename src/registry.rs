use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::Error;
use crate::frequency_space::{FrequencySpacePlot, PlotConfig};

/// Constructor invoked when a projection is selected by name.
pub type ProjectionCtor = Arc<dyn Fn(&PlotConfig) -> FrequencySpacePlot + Send + Sync>;

/// Name under which the stock nomogram projection is registered.
pub const FREQUENCY_SPACE: &str = "frequency_space";

/// Explicit name-to-constructor table for plot creation.
///
/// Hosts select a coordinate system by name at plot-creation time. Keeping
/// the table explicit (built once at startup, passed where needed) avoids
/// the hidden registration-order dependencies of a global mutable registry.
#[derive(Default)]
pub struct ProjectionRegistry {
    table: IndexMap<String, ProjectionCtor>,
}

impl ProjectionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the stock [`FREQUENCY_SPACE`] projection registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(FREQUENCY_SPACE, Arc::new(FrequencySpacePlot::new));
        registry
    }

    /// Register (or replace) a constructor under a name.
    pub fn register(&mut self, name: impl Into<String>, ctor: ProjectionCtor) {
        self.table.insert(name.into(), ctor);
    }

    /// Instantiate the named projection with the given configuration.
    pub fn create(&self, name: &str, config: &PlotConfig) -> Result<FrequencySpacePlot, Error> {
        match self.table.get(name) {
            Some(ctor) => Ok(ctor(config)),
            None => Err(Error::UnknownProjection(name.to_string())),
        }
    }

    /// Registered projection names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}
