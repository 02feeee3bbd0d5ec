use crate::constants::RAM_SIZE;
use crate::error::{Error, Result};

///The ram of the chip8 cpu, uses big endian, and is laid out in the following way:
///0x000 start of chip-8 ram
///0x000 to 0x1ff reserved for the interpreter, the font set lives in here
///0x200 start of most chip-8 programs
///0xfff end of chip8 ram
///
/// Every access is checked, an address past 0xfff is an error rather than a wrap.
#[derive(Debug, Clone)]
pub struct Ram {
    bytes: [u8; RAM_SIZE],
}

impl Default for Ram {
    fn default() -> Self {
        Self {
            bytes: [0; RAM_SIZE],
        }
    }
}

impl Ram {
    /// Copies `data` verbatim into ram, starting at `start`
    pub fn load(&mut self, data: &[u8], start: u16) -> Result<()> {
        self.slice_mut(start, data.len())?.copy_from_slice(data);
        Ok(())
    }

    /// Returns the two bytes at `address` and `address + 1` as one big endian opcode
    pub fn get_opcode(&self, address: u16) -> Result<u16> {
        let high = self.get_byte(address)?;
        let low = self.get_byte(address.wrapping_add(1))?;
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    pub fn get_byte(&self, address: u16) -> Result<u8> {
        self.bytes
            .get(usize::from(address))
            .copied()
            .ok_or(Error::AddressOutOfBounds {
                address: usize::from(address),
            })
    }

    pub fn set(&mut self, address: u16, value: u8) -> Result<()> {
        let byte = self
            .bytes
            .get_mut(usize::from(address))
            .ok_or(Error::AddressOutOfBounds {
                address: usize::from(address),
            })?;
        *byte = value;
        Ok(())
    }

    /// `len` bytes starting at `start`, fails if any of them lies outside of ram
    pub fn slice(&self, start: u16, len: usize) -> Result<&[u8]> {
        let start = usize::from(start);
        self.bytes
            .get(start..start + len)
            .ok_or(Error::AddressOutOfBounds {
                address: start + len.saturating_sub(1),
            })
    }

    pub fn slice_mut(&mut self, start: u16, len: usize) -> Result<&mut [u8]> {
        let start = usize::from(start);
        self.bytes
            .get_mut(start..start + len)
            .ok_or(Error::AddressOutOfBounds {
                address: start + len.saturating_sub(1),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_opcodes_big_endian() {
        let mut ram = Ram::default();
        ram.load(&[0xAB, 0xCD], 0x200).unwrap();
        assert_eq!(ram.get_opcode(0x200).unwrap(), 0xABCD);
    }

    #[test]
    fn last_byte_is_addressable() {
        let mut ram = Ram::default();
        ram.set(0xFFF, 0x42).unwrap();
        assert_eq!(ram.get_byte(0xFFF).unwrap(), 0x42);
    }

    #[test]
    fn rejects_access_past_end_of_ram() {
        let mut ram = Ram::default();
        assert!(matches!(
            ram.get_byte(0x1000),
            Err(Error::AddressOutOfBounds { address: 0x1000 })
        ));
        assert!(ram.set(0x1000, 1).is_err());
        // the second byte of the opcode is out of bounds
        assert!(ram.get_opcode(0xFFF).is_err());
    }

    #[test]
    fn rejects_loads_that_do_not_fit() {
        let mut ram = Ram::default();
        assert!(ram.load(&[1, 2, 3], 0xFFE).is_err());
        // nothing was written
        assert_eq!(ram.get_byte(0xFFE).unwrap(), 0);
        assert!(ram.load(&[1, 2], 0xFFE).is_ok());
    }
}
