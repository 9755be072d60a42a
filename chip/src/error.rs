use thiserror::Error;

use crate::opcode::Opcode;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ProcessError {
    #[error("Invalid opcode state '{0}'.")]
    Opcode(#[from] OpcodeError),
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
    #[error("There is no program loaded into the interpreter.")]
    NotLoaded,
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum OpcodeError {
    #[error("An unsupported opcode was used {0:#06X?}.")]
    InvalidOpcode(Opcode),
    #[error("Pointer location invalid there can not be an access at {pointer}, if data len is {len}")]
    MemoryInvalid { pointer: usize, len: usize },
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Full,
    #[error("Stack is empty!")]
    Empty,
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum LoadError {
    #[error("Unable to read the rom '{name}': {reason}")]
    Unreadable { name: String, reason: String },
    #[error("The rom '{0}' does not contain any data.")]
    Empty(String),
    #[error("The rom '{name}' is {len} bytes long, but only {max} bytes fit into memory.")]
    TooLarge { name: String, len: usize, max: usize },
    #[error("Unable to extract from the rom archive: {0}")]
    Archive(String),
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum RenderError {
    #[error("A pixel needs at least a single channel.")]
    NoChannels,
    #[error("The pixel buffer has {actual} bytes, but {expected} are needed.")]
    BufferSize { expected: usize, actual: usize },
}
