pub mod arrange;
pub mod builder;
pub mod factory;
pub mod form;
pub mod harvest;
pub mod headless;
pub mod registry;
pub mod toolkit;

pub use arrange::*;
pub use factory::{Created, GLYPH_CLOSED, GLYPH_OPEN};
pub use form::*;
pub use headless::*;
pub use registry::*;
pub use toolkit::*;
