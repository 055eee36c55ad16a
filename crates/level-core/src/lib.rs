pub mod constants;
pub mod demo;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod orientation;
pub mod readout;
pub mod render;
pub mod rotor;
pub mod state;

pub use demo::*;
pub use error::*;
pub use geometry::*;
pub use layout::*;
pub use orientation::*;
pub use readout::*;
pub use render::*;
pub use rotor::*;
pub use state::*;
