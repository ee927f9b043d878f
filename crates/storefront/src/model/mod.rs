//! Domain data: catalog products, order wire types and the lenient number parsing
//! the catalog API requires.

pub mod amount;
pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
