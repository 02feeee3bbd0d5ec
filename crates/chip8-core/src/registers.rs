use crate::constants::{FLAG_REGISTER, NUM_REGISTERS};

#[derive(Debug, Clone, Copy, Default)]
///# Holds all the registers and the sound and delay timers
pub struct Registers {
    register: [u8; NUM_REGISTERS],
    index: u16,
    /// 0 by default, unless its set to a number then it will just start decrementing by one 60 times per
    /// second
    delay_timer: u8,
    /// Also 0, and decremented with 60hz when set to a number like the delay timer. A host may
    /// beep while it is not zero, the machine itself stays silent
    sound_timer: u8,
}

impl Registers {
    pub fn set_index_register(&mut self, value: u16) {
        self.index = value;
    }
    pub fn get_index_register(&self) -> u16 {
        self.index
    }
    pub fn set_sound_timer(&mut self, value: u8) {
        self.sound_timer = value;
    }
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer
    }
    pub fn set_delay_timer(&mut self, value: u8) {
        self.delay_timer = value;
    }
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer
    }
    /// Counts both timers down by one, neither goes below zero
    pub fn decrement_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    /// `register` is a nibble taken from an opcode, so it is always in 0x0..=0xF
    pub fn get_register(&self, register: u8) -> u8 {
        self.register[usize::from(register)]
    }
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.register[usize::from(register)] = value;
    }
    pub fn set_flag(&mut self, flag: bool) {
        self.set_register(FLAG_REGISTER, u8::from(flag));
    }
    pub fn get_flag(&self) -> u8 {
        self.get_register(FLAG_REGISTER)
    }
    pub fn as_slice(&self) -> &[u8] {
        &self.register
    }
}
