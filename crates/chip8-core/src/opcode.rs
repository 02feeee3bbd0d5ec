/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, fetched big endian from two bytes of ram.
/// Their fields are named after the nibbles they occupy:
/// - `class` `[c___]` picks the instruction family
/// - `x` `[_x__]` and `y` `[__y_]` are register indexes
/// - `n` `[___n]` is a 4-bit immediate
/// - `kk` `[__kk]` is an 8-bit immediate
/// - `nnn` `[_nnn]` is a 12-bit address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    pub fn from_bytes(high: u8, low: u8) -> Self {
        Opcode(u16::from_be_bytes([high, low]))
    }

    /// A nibble is 4 bits, nibble 0 is the most significant one
    fn get_nibble(self, nth: u8) -> u8 {
        ((self.0 >> (12 - 4 * nth)) & 0xf) as u8
    }

    pub fn class(self) -> u8 {
        self.get_nibble(0)
    }

    pub fn x(self) -> u8 {
        self.get_nibble(1)
    }

    pub fn y(self) -> u8 {
        self.get_nibble(2)
    }

    pub fn n(self) -> u8 {
        self.get_nibble(3)
    }

    /// Returns the last full byte of an opcode
    pub fn kk(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Returns the last 12 bits of an opcode
    pub fn nnn(self) -> u16 {
        self.0 & 0xfff
    }
}

impl From<u16> for Opcode {
    fn from(raw: u16) -> Self {
        Opcode(raw)
    }
}
