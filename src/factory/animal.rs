//! Products made by the animal factories.

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cat;

/// Closed set of animals a factory can hand out.
///
/// There is no behaviour to dispatch on, so a tagged variant replaces the usual
/// abstract base class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animal {
    Dog(Dog),
    Cat(Cat),
}

impl Animal {
    /// Lower-case registry key for this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Animal::Dog(_) => "dog",
            Animal::Cat(_) => "cat",
        }
    }
}

impl From<Dog> for Animal {
    fn from(dog: Dog) -> Self {
        Animal::Dog(dog)
    }
}

impl From<Cat> for Animal {
    fn from(cat: Cat) -> Self {
        Animal::Cat(cat)
    }
}

impl Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}
