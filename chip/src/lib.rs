pub mod chip8;
pub mod definitions;
pub mod devices;
pub mod opcode;
pub mod resources;
pub mod timer;
mod error;

// reexporting for convenience
mod runner;
pub use chip8::{Cycle, Interpreter, Resolution};
pub use error::*;
pub use runner::*;
