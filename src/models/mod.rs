//! Record models
//!
//! The two kinds of record reconstructed from a genealogy file: people and
//! the family units that link them.

pub mod family;
pub mod individual;
pub mod traits;

pub use family::Family;
pub use individual::Individual;
pub use traits::EntityModel;
