//! Descriptor registry.
//!
//! Descriptors are supplied by an external [`DescriptorProvider`] and published once:
//! 1. **Build:** [`RegistryBuilder`] collects descriptors and rejects duplicate type names.
//! 2. **Freeze:** [`Registry`] is a read-only map shared through `Arc`s.
//! 3. **Install:** [`Registry::install`] publishes one registry for the whole process.
//!
//! Once installed the registry is never mutated, so readers need no locking.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::config::ConfigError;
use crate::descriptor::EnumDescriptor;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Source of enum descriptors.
pub trait DescriptorProvider {
    /// Returns every descriptor this provider knows about.
    ///
    /// # Errors
    ///
    /// Provider-specific failures, such as a member value outside its width.
    fn descriptors(&self) -> Result<Vec<EnumDescriptor>, ConfigError>;
}

/// Read-only map from type name to descriptor.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: BTreeMap<String, Arc<EnumDescriptor>>,
}

/// Collects descriptors before freezing them into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<String, Arc<EnumDescriptor>>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor.
    ///
    /// # Errors
    ///
    /// `DuplicateType` if a descriptor with the same name was already added.
    pub fn register(mut self, descriptor: EnumDescriptor) -> Result<Self, ConfigError> {
        let name = descriptor.name().to_owned();
        if self.entries.contains_key(&name) {
            return Err(ConfigError::DuplicateType(name));
        }
        let _ = self.entries.insert(name, Arc::new(descriptor));
        Ok(self)
    }

    /// Adds every descriptor of `provider`.
    ///
    /// # Errors
    ///
    /// The provider's own failure, or `DuplicateType`.
    pub fn register_all(self, provider: &dyn DescriptorProvider) -> Result<Self, ConfigError> {
        provider
            .descriptors()?
            .into_iter()
            .try_fold(self, Self::register)
    }

    /// Freezes the collected descriptors.
    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }
}

impl Registry {
    /// Starts an empty registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Builds a registry holding every descriptor of `provider`.
    ///
    /// # Errors
    ///
    /// The provider's own failure, or `DuplicateType`.
    pub fn from_provider(provider: &dyn DescriptorProvider) -> Result<Self, ConfigError> {
        Ok(RegistryBuilder::new().register_all(provider)?.build())
    }

    /// Returns the descriptor registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<EnumDescriptor>> {
        self.entries.get(name)
    }

    /// Returns the descriptor registered under `name`.
    ///
    /// # Errors
    ///
    /// `UnknownType` if nothing is registered under `name`.
    pub fn require(&self, name: &str) -> Result<&Arc<EnumDescriptor>, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::UnknownType(name.to_owned()))
    }

    /// Iterates descriptors ordered by type name.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<EnumDescriptor>> + '_ {
        self.entries.values()
    }

    /// Returns the number of registered descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Publishes this registry for the whole process.
    ///
    /// # Errors
    ///
    /// `AlreadyInstalled` if a registry was installed before; the first one stays.
    pub fn install(self) -> Result<&'static Self, ConfigError> {
        let count = self.len();
        GLOBAL
            .set(self)
            .map_err(|_| ConfigError::AlreadyInstalled)?;
        tracing::debug!(enums = count, "installed global enum registry");
        GLOBAL.get().ok_or(ConfigError::AlreadyInstalled)
    }

    /// Returns the installed registry, if any.
    pub fn global() -> Option<&'static Self> {
        GLOBAL.get()
    }
}
