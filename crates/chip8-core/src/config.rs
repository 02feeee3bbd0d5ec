use crate::constants::{
    DEFAULT_FONT_SET_START_ADDRESS, DEFAULT_MEMORY_START_ADDRESS, DEFAULT_STACK_DEPTH, RAM_SIZE,
};
use crate::error::{Error, Result};
use crate::font::FONT_SET;

/// # Memory layout and behaviour of a machine
///
/// Handed to [`Cpu::new`](crate::Cpu::new) once and never changed afterwards.
///
/// ```
/// use chip8_core::MachineConfig;
///
/// let config = MachineConfig::default()
///     .with_rng_seed(7)
///     .with_index_overflow_flag(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Where roms are loaded and where the program counter starts
    pub memory_start_address: u16,
    /// Where the 80 byte hexadecimal font set is loaded
    pub font_set_start_address: u16,
    /// How many return addresses fit on the call stack
    pub stack_depth: usize,
    /// Fixed seed for the random number generator, drawn from the thread rng when unset
    pub rng_seed: Option<u64>,
    /// Set VF when Fx1E pushes the index register past 0xFFF
    pub index_overflow_flag: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            memory_start_address: DEFAULT_MEMORY_START_ADDRESS,
            font_set_start_address: DEFAULT_FONT_SET_START_ADDRESS,
            stack_depth: DEFAULT_STACK_DEPTH,
            rng_seed: None,
            index_overflow_flag: false,
        }
    }
}

impl MachineConfig {
    pub fn with_memory_start_address(mut self, address: u16) -> Self {
        self.memory_start_address = address;
        self
    }

    pub fn with_font_set_start_address(mut self, address: u16) -> Self {
        self.font_set_start_address = address;
        self
    }

    pub fn with_stack_depth(mut self, depth: usize) -> Self {
        self.stack_depth = depth;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_index_overflow_flag(mut self, enabled: bool) -> Self {
        self.index_overflow_flag = enabled;
        self
    }

    /// Checks that the font set and the program start both fit in ram
    pub fn validate(&self) -> Result<()> {
        let font_end = usize::from(self.font_set_start_address) + FONT_SET.len();
        if font_end > RAM_SIZE {
            return Err(Error::InvalidConfig(format!(
                "font set at {:#05X} does not fit in {RAM_SIZE} bytes of ram",
                self.font_set_start_address
            )));
        }
        // at least one instruction has to fit behind the start address
        if usize::from(self.memory_start_address) + 2 > RAM_SIZE {
            return Err(Error::InvalidConfig(format!(
                "program start {:#05X} lies outside of ram",
                self.memory_start_address
            )));
        }
        Ok(())
    }
}
