use crate::constants::NUM_KEYS;
use crate::error::{Error, Result};

/// A list of "buttons", for the hexadecimal keypad. set to true when pressed, false otherwise.
/// Written by the host, read by the key instructions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keypad {
    keys: [bool; NUM_KEYS as usize],
}

impl Keypad {
    pub fn set_key_state(&mut self, key: u8, pressed: bool) -> Result<()> {
        let slot = self
            .keys
            .get_mut(usize::from(key))
            .ok_or(Error::InvalidKey { key })?;
        *slot = pressed;
        Ok(())
    }

    pub fn is_pressed(&self, key: u8) -> Result<bool> {
        self.keys
            .get(usize::from(key))
            .copied()
            .ok_or(Error::InvalidKey { key })
    }

    /// The lowest key that is currently held down
    pub fn get_pressed_key(&self) -> Option<u8> {
        self.keys
            .iter()
            .position(|button_pressed| *button_pressed)
            .map(|key| key as u8)
    }

    pub fn release_all(&mut self) {
        self.keys = [false; NUM_KEYS as usize];
    }
}
