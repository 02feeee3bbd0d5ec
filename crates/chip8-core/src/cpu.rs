use log::{debug, info, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::MachineConfig;
use crate::constants::{FONT_GLYPH_SIZE, RAM_SIZE};
use crate::display::Framebuffer;
use crate::error::{Error, Result};
use crate::font::FONT_SET;
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::ram::Ram;
use crate::registers::Registers;
use crate::rombuffer::RomBuffer;
use crate::stack::Stack;

/// What the cpu did during a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// The instruction ran, the next cycle fetches the next one
    Executed,
    /// Fx0A found no key pressed. The program counter points at it again, so the host can
    /// update the keypad and simply keep cycling
    WaitingForKey { register: u8 },
}

/// The main cpu, owns every bit of machine state
pub struct Cpu {
    /// The black and white pixels of the display, only changed by 00E0 and Dxyn
    framebuffer: Framebuffer,
    /// Set whenever the framebuffer changes, cleared by the host through `take_redraw`
    redraw: bool,
    ///Program counter, used to keep track of what to fetch,decode and execute from ram, initialized at the memory start address
    program_counter: u16,
    /// The opcode fetched by the last cycle
    current_opcode: u16,
    keypad: Keypad,
    /// The memory, holds the font set and the rom
    memory: Ram,
    /// Seeded once, so a fixed seed replays the same random numbers
    rng: ChaCha8Rng,
    config: MachineConfig,
    /// Registers 0x0 through 0xF, the index register and both timers
    registers: Registers,
    stack: Stack,
}

impl Cpu {
    /// Creates a cpu with the font set loaded, ready to receive a rom
    pub fn new(config: MachineConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        let mut memory = Ram::default();
        memory.load(&FONT_SET, config.font_set_start_address)?;

        info!(
            "machine ready [program start: {:#05X}, font set: {:#05X}, stack depth: {}]",
            config.memory_start_address, config.font_set_start_address, config.stack_depth
        );

        Ok(Self {
            framebuffer: Framebuffer::default(),
            redraw: false,
            program_counter: config.memory_start_address,
            current_opcode: 0,
            keypad: Keypad::default(),
            memory,
            rng,
            config,
            registers: Registers::default(),
            stack: Stack::new(config.stack_depth),
        })
    }

    /// Creates a cpu with the default configuration and `rom` loaded
    pub fn with_rom(rom: &RomBuffer) -> Result<Self> {
        let mut cpu = Cpu::new(MachineConfig::default())?;
        cpu.load_rom(rom)?;
        Ok(cpu)
    }

    /// Copies bytes verbatim into memory starting at `start`
    pub fn load_into_memory(&mut self, bytes: &[u8], start: u16) -> Result<()> {
        self.memory.load(bytes, start)
    }

    /// Places a rom at the memory start address
    pub fn load_rom(&mut self, rom: &RomBuffer) -> Result<()> {
        let max_size = RAM_SIZE - usize::from(self.config.memory_start_address);
        if rom.len() > max_size {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max_size,
            });
        }
        self.load_into_memory(rom.contents(), self.config.memory_start_address)?;
        info!("loaded rom [size: {}]", rom.len());
        Ok(())
    }

    /// Returns two bytes from memory at the location where the program counter currently points to
    fn fetch(&self) -> Result<u16> {
        self.memory.get_opcode(self.program_counter)
    }

    /// A single cpu cycle: fetches, advances the program counter, decodes and executes.
    ///
    /// Timers are left alone, the host calls [`Cpu::tick_timers`] at 60Hz.
    /// On an error the program counter already points past the offending instruction,
    /// so a host may skip it by cycling again.
    pub fn cycle(&mut self) -> Result<CycleState> {
        let opcode = self.fetch()?;
        self.current_opcode = opcode;
        self.program_counter += 2;

        let instruction = Instruction::try_from(opcode)
            .inspect_err(|err| warn!("decode failed at {:#05X}: {err}", self.program_counter - 2))?;
        debug!("{:#05X} {opcode:04X} {instruction:?}", self.program_counter - 2);

        let state = self
            .execute(instruction)
            .inspect_err(|err| warn!("{instruction:?} failed: {err}"))?;
        trace!(
            "v{:02X?} i{:04X} pc{:04X} sp{}",
            self.registers.as_slice(),
            self.registers.get_index_register(),
            self.program_counter,
            self.stack.stack_pointer()
        );
        Ok(state)
    }

    /// Runs up to `cycles` cycles and then ticks the timers once.
    /// Stops early while the program waits for a key.
    pub fn run_frame(&mut self, cycles: usize) -> Result<CycleState> {
        let mut state = CycleState::Executed;
        for _ in 0..cycles {
            state = self.cycle()?;
            if let CycleState::WaitingForKey { .. } = state {
                break;
            }
        }
        self.tick_timers();
        Ok(state)
    }

    /// Counts the delay and sound timers down by one, meant to be called 60 times per second
    pub fn tick_timers(&mut self) {
        self.registers.decrement_timers();
        trace!(
            "timers [delay: {}] [sound: {}]",
            self.registers.get_delay_timer(),
            self.registers.get_sound_timer()
        );
    }

    ///Execute the instruction, for details on the instruction, check the instruction enum
    ///definition
    fn execute(&mut self, instruction: Instruction) -> Result<CycleState> {
        match instruction {
            //00E0
            Instruction::ClearScreen => {
                self.framebuffer.clear();
                self.redraw = true;
            }
            //00EE
            Instruction::ReturnFromSubroutine => {
                self.program_counter = self.stack.pop()?;
                trace!("return to {:#05X}", self.program_counter);
            }
            //1NNN
            Instruction::Jump { nnn } => {
                self.program_counter = nnn;
            }
            //2NNN
            Instruction::Call { nnn } => {
                self.stack.push(self.program_counter)?;
                trace!("call {nnn:#05X}, return to {:#05X}", self.program_counter);
                self.program_counter = nnn;
            }
            //3XKK
            Instruction::SkipIfEqualByte { x, kk } => {
                let vx = self.registers.get_register(x);
                self.skip_if(vx == kk);
            }
            //4XKK
            Instruction::SkipIfNotEqualByte { x, kk } => {
                let vx = self.registers.get_register(x);
                self.skip_if(vx != kk);
            }
            //5XY0
            Instruction::SkipIfEqual { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.skip_if(vx == vy);
            }
            //6XKK
            Instruction::LoadByte { x, kk } => {
                self.registers.set_register(x, kk);
            }
            //7XKK
            Instruction::AddByte { x, kk } => {
                let vx = self.registers.get_register(x);
                self.registers.set_register(x, vx.wrapping_add(kk));
            }
            //8xy0
            Instruction::Load { x, y } => {
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vy);
            }
            //8xy1
            Instruction::Or { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vx | vy);
            }
            //8xy2
            Instruction::And { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vx & vy);
            }
            //8xy3
            Instruction::Xor { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vx ^ vy);
            }
            // The flag is written after the result, so VF holds the flag even when x is 0xF
            //8xy4
            Instruction::Add { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                let (res, carry) = vx.overflowing_add(vy);
                self.registers.set_register(x, res);
                self.registers.set_flag(carry);
            }
            //8xy5
            Instruction::Sub { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vx.wrapping_sub(vy));
                self.registers.set_flag(vx >= vy);
            }
            //8xy6
            Instruction::ShiftRight { x } => {
                let vx = self.registers.get_register(x);
                self.registers.set_register(x, vx >> 1);
                self.registers.set_flag(vx & 0x1 == 0x1);
            }
            //8xy7
            Instruction::SubReversed { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.registers.set_register(x, vy.wrapping_sub(vx));
                self.registers.set_flag(vy >= vx);
            }
            //8xyE
            Instruction::ShiftLeft { x } => {
                let vx = self.registers.get_register(x);
                self.registers.set_register(x, vx << 1);
                self.registers.set_flag(vx & 0x80 == 0x80);
            }
            //9XY0
            Instruction::SkipIfNotEqual { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.skip_if(vx != vy);
            }
            //ANNN
            Instruction::SetIndex { nnn } => {
                self.registers.set_index_register(nnn);
            }
            //BNNN
            Instruction::JumpPlusV0 { nnn } => {
                let v0 = u16::from(self.registers.get_register(0x0));
                self.program_counter = nnn + v0;
            }
            //CXKK
            Instruction::Random { x, kk } => {
                let random_byte: u8 = self.rng.random();
                self.registers.set_register(x, random_byte & kk);
            }
            //DXYN
            Instruction::Draw { x, y, n } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                let sprite = self
                    .memory
                    .slice(self.registers.get_index_register(), usize::from(n))?;

                let collision = self.framebuffer.draw_sprite(vx, vy, sprite);
                self.registers.set_flag(collision);
                self.redraw = true;
            }
            //EX9E
            Instruction::SkipIfPressed { x } => {
                let pressed = self.keypad.is_pressed(self.registers.get_register(x))?;
                self.skip_if(pressed);
            }
            //EXA1
            Instruction::SkipIfNotPressed { x } => {
                let pressed = self.keypad.is_pressed(self.registers.get_register(x))?;
                self.skip_if(!pressed);
            }
            //FX07
            Instruction::LoadDelayTimer { x } => {
                let delay_timer = self.registers.get_delay_timer();
                self.registers.set_register(x, delay_timer);
            }
            //FX0A
            Instruction::WaitForKey { x } => match self.keypad.get_pressed_key() {
                Some(key) => self.registers.set_register(x, key),
                None => {
                    // run this instruction again on the next cycle
                    self.program_counter -= 2;
                    return Ok(CycleState::WaitingForKey { register: x });
                }
            },
            //FX15
            Instruction::SetDelayTimer { x } => {
                let vx = self.registers.get_register(x);
                self.registers.set_delay_timer(vx);
            }
            //FX18
            Instruction::SetSoundTimer { x } => {
                let vx = self.registers.get_register(x);
                self.registers.set_sound_timer(vx);
            }
            //FX1E
            Instruction::AddToIndex { x } => {
                let vx = u16::from(self.registers.get_register(x));
                let added = self.registers.get_index_register().wrapping_add(vx);
                self.registers.set_index_register(added);
                if self.config.index_overflow_flag {
                    self.registers.set_flag(added > 0x0FFF);
                }
            }
            //FX29
            Instruction::SetIndexToGlyph { x } => {
                //the sprite at *index* vx, not location vx.
                let vx = u16::from(self.registers.get_register(x));
                self.registers
                    .set_index_register(self.config.font_set_start_address + vx * FONT_GLYPH_SIZE);
            }
            //FX33
            Instruction::StoreBcd { x } => {
                let vx = self.registers.get_register(x);
                let digits = [vx / 100, (vx % 100) / 10, vx % 10];
                self.memory
                    .slice_mut(self.registers.get_index_register(), digits.len())?
                    .copy_from_slice(&digits);
            }
            //FX55
            Instruction::StoreRegisters { x } => {
                let count = usize::from(x) + 1;
                self.memory
                    .slice_mut(self.registers.get_index_register(), count)?
                    .copy_from_slice(&self.registers.as_slice()[..count]);
            }
            //FX65
            Instruction::LoadRegisters { x } => {
                let bytes = self
                    .memory
                    .slice(self.registers.get_index_register(), usize::from(x) + 1)?;
                for (register, value) in (0..=x).zip(bytes) {
                    self.registers.set_register(register, *value);
                }
            }
        }

        Ok(CycleState::Executed)
    }

    /// The program counter already moved past the current instruction, skipping moves it past the next one
    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.program_counter += 2;
        }
    }

    /// Set key's state
    pub fn set_key_state(&mut self, key: u8, pressed: bool) -> Result<()> {
        self.keypad.set_key_state(key, pressed)
    }

    /// Lets go of every key, e.g. when the host window loses focus
    pub fn release_keys(&mut self) {
        self.keypad.release_all();
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// True if the framebuffer changed since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Ram {
        &self.memory
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn current_opcode(&self) -> u16 {
        self.current_opcode
    }

    pub fn stack_pointer(&self) -> usize {
        self.stack.stack_pointer()
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// A host should beep while this is true
    pub fn sound_active(&self) -> bool {
        self.registers.get_sound_timer() > 0
    }
}
