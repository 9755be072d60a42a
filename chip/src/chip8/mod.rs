//! The full implementation of the chip8 interpreter, from the opcodes to an option to pretty
//! print them.
mod interpreter;
mod opcodes;
mod print;
mod render;

/// reexport interpreter structs and data for simpler usage
pub use interpreter::*;
pub use render::Resolution;
