//! Operations the presentation layer calls. Each takes the session state and
//! returns plain serializable values.

pub mod catalog;
pub mod favorites;
pub mod syntax;

pub use catalog::*;
pub use favorites::*;
pub use syntax::*;
