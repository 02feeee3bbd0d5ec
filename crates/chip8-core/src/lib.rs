//! A CHIP-8 virtual machine without any frontend.
//!
//! The host owns the loop: it feeds key states in, calls [`Cpu::cycle`] (or [`Cpu::run_frame`])
//! at its own pace, ticks the timers at 60Hz and reads the [`Framebuffer`] back out.
//!
//! ```
//! use chip8_core::{Cpu, MachineConfig, RomBuffer};
//!
//! let mut cpu = Cpu::new(MachineConfig::default().with_rng_seed(7)).unwrap();
//! // V0 = 0x0A, V1 = 0x05, V0 += V1
//! cpu.load_rom(&RomBuffer::from(&[0x60, 0x0A, 0x61, 0x05, 0x80, 0x14][..])).unwrap();
//! cpu.run_frame(3).unwrap();
//! assert_eq!(cpu.registers().get_register(0), 0x0F);
//! ```

///Machine layout and the configuration it is built from
mod config;
///This holds all of the constants (written in capital letters in the code)
pub mod constants;
///Handles the fetch, decode execute cycle
mod cpu;
///The 64 by 32 monochrome display
mod display;
///Everything that can go wrong while running a program
mod error;
///The built in hexadecimal font
mod font;
///An overview of all instructions in the chip 8 instruction set architecture
mod instruction;
///The 16 keys of the hex keypad
mod keypad;
///Splits raw 16 bit opcodes into their fields
mod opcode;
///A data structure modeling ram
mod ram;
///The registers for the chip8 cpu
mod registers;
///Holds the data loaded from disk
mod rombuffer;
///The stack that is used in the cpu
mod stack;

// Re-export structs and modules that might be used by frontends
pub use config::MachineConfig;
pub use constants::{CYCLES_PER_FRAME, DISPLAY_HEIGHT, DISPLAY_WIDTH, NUM_KEYS, TIMER_FREQUENCY_HZ};
pub use cpu::{Cpu, CycleState};
pub use display::Framebuffer;
pub use error::{Error, Result};
pub use font::FONT_SET;
pub use instruction::Instruction;
pub use keypad::Keypad;
pub use opcode::Opcode;
pub use ram::Ram;
pub use registers::Registers;
pub use rombuffer::RomBuffer;
