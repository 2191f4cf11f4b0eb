//! Factory method: one factory type per product, looked up from a registry.
//!
//! The concrete factories hold no state, so a single instance of each can live in
//! the registry and be reused for every request. Adding a product means registering
//! a new factory, not growing a `match`.

use super::{Animal, Cat, Dog, FactoryError};
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::{debug, warn};

/// Knows how to build exactly one kind of [`Animal`].
pub trait AnimalFactory: Debug + Send + Sync {
    fn create_instance(&self) -> Animal;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DogFactory;

impl AnimalFactory for DogFactory {
    fn create_instance(&self) -> Animal {
        Animal::Dog(Dog)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CatFactory;

impl AnimalFactory for CatFactory {
    fn create_instance(&self) -> Animal {
        Animal::Cat(Cat)
    }
}

/// Registry mapping a type key to the factory that builds it.
///
/// Keys are matched exactly; `"Dog"` is not `"dog"`.
#[derive(Debug)]
pub struct FactoryMethod {
    factories: HashMap<String, Box<dyn AnimalFactory>>,
}

impl FactoryMethod {
    /// Registry preloaded with `"dog"` and `"cat"`.
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register("dog", DogFactory);
        registry.register("cat", CatFactory);
        registry
    }

    /// Adds or replaces the factory for `kind`.
    pub fn register(&mut self, kind: impl Into<String>, factory: impl AnimalFactory + 'static) {
        let kind = kind.into();
        debug!(%kind, ?factory, "Registered factory");
        self.factories.insert(kind, Box::new(factory));
    }

    pub fn is_registered(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    pub fn create(&self, kind: &str) -> Result<Animal, FactoryError> {
        let Some(factory) = self.factories.get(kind) else {
            warn!(kind, "Type not found");
            return Err(FactoryError::UnknownType(kind.to_string()));
        };
        let animal = factory.create_instance();
        debug!(kind, %animal, "Created");
        Ok(animal)
    }
}

impl Default for FactoryMethod {
    fn default() -> Self {
        Self::new()
    }
}
