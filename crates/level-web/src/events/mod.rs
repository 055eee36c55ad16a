pub mod pointer;
pub mod sensor;

pub use pointer::{wire_input_handlers, InputWiring};
pub use sensor::wire_orientation;
