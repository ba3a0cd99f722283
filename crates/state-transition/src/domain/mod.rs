//! # Domain Layer
//!
//! Pure business logic: entities, value objects, gas accounting, and
//! stateless derivations. Nothing in this layer performs I/O.

pub mod entities;
pub mod gas;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use gas::*;
pub use services::*;
pub use value_objects::*;
