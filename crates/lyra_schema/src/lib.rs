pub mod field;
pub mod serialization;
pub mod tags;

pub use field::*;
pub use serialization::*;
pub use tags::*;
