//! Simple factory: one function, one `match`, every product.
//!
//! Use this when construction is trivial. Once each product needs its own setup,
//! move to [`FactoryMethod`](super::FactoryMethod).

use super::{Animal, Cat, Dog, FactoryError};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Builds a fresh [`Animal`] for every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFactory;

impl SimpleFactory {
    /// Creates the animal named by `kind`, ignoring case.
    pub fn create(&self, kind: &str) -> Result<Animal, FactoryError> {
        let animal = match kind.to_lowercase().as_str() {
            "dog" => Animal::from(Dog),
            "cat" => Animal::from(Cat),
            _ => {
                warn!(kind, "Unknown animal type");
                return Err(FactoryError::UnknownType(kind.to_string()));
            }
        };
        debug!(kind, %animal, "Created");
        Ok(animal)
    }
}

/// Simple factory whose products are built once, up front, and then shared.
///
/// Works when the products are stateless and safe to reuse.
#[derive(Debug, Clone)]
pub struct CachedSimpleFactory {
    animals: HashMap<&'static str, Animal>,
}

impl CachedSimpleFactory {
    pub fn new() -> Self {
        let animals = [Animal::from(Dog), Animal::from(Cat)]
            .into_iter()
            .map(|animal| (animal.kind(), animal))
            .collect();
        Self { animals }
    }

    /// Looks up the shared instance for `kind`, ignoring case.
    pub fn get(&self, kind: &str) -> Result<&Animal, FactoryError> {
        let key = kind.to_lowercase();
        let found = self.animals.get(key.as_str());
        debug!(kind, found = found.is_some(), "Get");
        found.ok_or_else(|| FactoryError::UnknownType(kind.to_string()))
    }
}

impl Default for CachedSimpleFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_factory_known_types() {
        let factory = SimpleFactory;
        assert_eq!(factory.create("dog").unwrap(), Animal::Dog(Dog));
        assert_eq!(factory.create("Cat").unwrap(), Animal::Cat(Cat));
        assert_eq!(factory.create("DOG").unwrap().kind(), "dog");
    }

    #[test]
    fn test_simple_factory_unknown_type() {
        let err = SimpleFactory.create("parrot").unwrap_err();
        assert_eq!(err, FactoryError::UnknownType("parrot".into()));
        assert!(SimpleFactory.create("").is_err());
    }

    #[test]
    fn test_cached_factory_reuses_instances() {
        let factory = CachedSimpleFactory::new();
        let first = factory.get("dog").unwrap();
        let second = factory.get("Dog").unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(*first, Animal::Dog(Dog));
    }

    #[test]
    fn test_cached_factory_unknown_type() {
        let factory = CachedSimpleFactory::default();
        assert_eq!(
            factory.get("horse"),
            Err(FactoryError::UnknownType("horse".into()))
        );
    }
}
