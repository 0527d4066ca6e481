//! Ordered, immutable cutter registry
//!
//! Registration order is priority: when several cutters claim the same
//! offset the earliest registered one wins.

use crate::cutter::Cutter;
use std::fmt;
use std::sync::Arc;

/// Immutable ordered list of cutters, cheap to clone and share
#[derive(Clone)]
pub struct CutterRegistry {
    cutters: Arc<[Arc<dyn Cutter>]>,
}

impl CutterRegistry {
    /// Start building a registry
    pub fn builder() -> CutterRegistryBuilder {
        CutterRegistryBuilder::default()
    }

    /// Number of registered cutters
    pub fn len(&self) -> usize {
        self.cutters.len()
    }

    /// Check if no cutter is registered
    pub fn is_empty(&self) -> bool {
        self.cutters.is_empty()
    }

    /// Cutter at a priority position
    pub fn get(&self, index: usize) -> Option<&dyn Cutter> {
        self.cutters.get(index).map(|cutter| &**cutter)
    }

    /// Cutter at a position known to be registered
    pub(crate) fn cutter(&self, index: usize) -> &dyn Cutter {
        &*self.cutters[index]
    }

    /// Cutters in priority order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Cutter> + '_ {
        self.cutters.iter().map(|cutter| &**cutter)
    }

    /// Cutter names in priority order
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|cutter| cutter.name()).collect()
    }

    /// Priority position of the cutter with the given name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.iter().position(|cutter| cutter.name() == name)
    }
}

impl fmt::Debug for CutterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<C: Cutter + 'static> FromIterator<C> for CutterRegistry {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::builder(), |builder, cutter| builder.with(cutter))
            .build()
    }
}

/// Builder for [`CutterRegistry`]
#[derive(Default)]
pub struct CutterRegistryBuilder {
    cutters: Vec<Arc<dyn Cutter>>,
}

impl CutterRegistryBuilder {
    /// Register a cutter at the next-lower priority
    pub fn with<C: Cutter + 'static>(mut self, cutter: C) -> Self {
        self.cutters.push(Arc::new(cutter));
        self
    }

    /// Register a shared cutter at the next-lower priority
    pub fn with_shared(mut self, cutter: Arc<dyn Cutter>) -> Self {
        self.cutters.push(cutter);
        self
    }

    /// Freeze the registry
    pub fn build(self) -> CutterRegistry {
        CutterRegistry {
            cutters: self.cutters.into(),
        }
    }
}

impl fmt::Debug for CutterRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.cutters.iter().map(|cutter| cutter.name()))
            .finish()
    }
}
