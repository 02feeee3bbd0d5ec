use crate::error::{Error, Result};

/// 16-bit return addresses, used to call subroutines and return from them.
/// The COSMAC VIP interpreter could go into 16 nested subroutines before the stack overflowed,
/// the limit here comes from the machine configuration.
#[derive(Debug, Clone)]
pub struct Stack {
    values: Vec<u16>,
    limit: usize,
}

impl Stack {
    pub fn new(limit: usize) -> Self {
        Self {
            values: Vec::with_capacity(limit),
            limit,
        }
    }

    pub fn push(&mut self, address: u16) -> Result<()> {
        if self.values.len() >= self.limit {
            return Err(Error::StackOverflow { depth: self.limit });
        }
        self.values.push(address);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        self.values.pop().ok_or(Error::StackUnderflow)
    }

    /// Points at the next free slot, so it equals the call depth
    pub fn stack_pointer(&self) -> usize {
        self.values.len()
    }

    pub fn peek(&self) -> Option<u16> {
        self.values.last().copied()
    }
}
