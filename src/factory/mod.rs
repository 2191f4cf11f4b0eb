//! # Factory Patterns
//!
//! Creation logic for a family of subtypes, hidden behind a single entry point.
//!
//! | Flavour | Type | When to reach for it |
//! |---------|------|----------------------|
//! | Simple factory | [`SimpleFactory`] | Construction is trivial, a `match` is enough |
//! | Cached simple factory | [`CachedSimpleFactory`] | Products are stateless and can be shared |
//! | Factory method | [`FactoryMethod`] | Each product has its own construction logic |
//! | Abstract factory | [`ParserFactory`] | Products come in families that must not be mixed |

pub mod abstract_factory;
pub mod animal;
pub mod error;
pub mod method;
pub mod simple;

pub use abstract_factory::*;
pub use animal::*;
pub use error::*;
pub use method::*;
pub use simple::*;
