//! Pure data structures: the [`Product`] record and its lenient field parsers.

pub mod lenient;
pub mod product;

pub use lenient::*;
pub use product::*;
