use thiserror::Error;

/// Everything that can stop a cycle, a load or the construction of a machine
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown opcode: {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("stack overflow: call depth limit of {depth} reached")]
    StackOverflow { depth: usize },

    #[error("memory access out of bounds at address {address:#06X}")]
    AddressOutOfBounds { address: usize },

    #[error("invalid key {key:#04X}, keys range from 0x0 to 0xF")]
    InvalidKey { key: u8 },

    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("invalid machine configuration: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
