use crate::error::{Error, Result};
use crate::opcode::Opcode;

/// # Every instruction in the chip8 language
/// ## nnn
/// a hexadecimal memory address, it's 12 bits long
/// ## kk
/// a hexadecimal byte, 8 bits
/// ## n
/// a "nibble" 4 bits
/// ## x and y
/// Register indexes. Instructions read the registers they point at, never the indexes themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Turns all the pixels to off
    ClearScreen, //00e0
    /// Sets the program counter to the last address on the stack
    ReturnFromSubroutine, //00ee
    /// Sets the program counter to nnn
    Jump { nnn: u16 }, //1nnn
    /// Pushes the program counter and jumps to nnn
    Call { nnn: u16 }, //2nnn
    SkipIfEqualByte { x: u8, kk: u8 },    //3xkk
    SkipIfNotEqualByte { x: u8, kk: u8 }, //4xkk
    SkipIfEqual { x: u8, y: u8 },         //5xy0
    /// Set register x to the value kk
    LoadByte { x: u8, kk: u8 }, //6xkk
    /// Adds the value kk to register x, the carry is dropped and VF is left alone
    AddByte { x: u8, kk: u8 }, //7xkk
    /// Stores the value of register y in register x
    Load { x: u8, y: u8 }, //8xy0
    Or { x: u8, y: u8 },   //8xy1
    And { x: u8, y: u8 },  //8xy2
    Xor { x: u8, y: u8 },  //8xy3
    /// vx + vy, VF is the carry
    Add { x: u8, y: u8 }, //8xy4
    /// vx - vy, VF is set when there was no borrow
    Sub { x: u8, y: u8 }, //8xy5
    /// shift register x one bit to the right, VF gets the bit that fell off
    ShiftRight { x: u8 }, //8xy6
    /// vy - vx, VF is set when there was no borrow
    SubReversed { x: u8, y: u8 }, //8xy7
    /// shift register x one bit to the left, VF gets the bit that fell off
    ShiftLeft { x: u8 }, //8xye
    SkipIfNotEqual { x: u8, y: u8 }, //9xy0
    SetIndex { nnn: u16 },           //annn
    JumpPlusV0 { nnn: u16 },         //bnnn
    Random { x: u8, kk: u8 },        //cxkk
    /// Draws a sprite of width 8 and height n at the coordinates held in vx and vy
    Draw { x: u8, y: u8, n: u8 }, //dxyn
    SkipIfPressed { x: u8 },      //ex9e
    SkipIfNotPressed { x: u8 },   //exa1
    LoadDelayTimer { x: u8 },     //fx07
    WaitForKey { x: u8 },         //fx0a
    SetDelayTimer { x: u8 },      //fx15
    SetSoundTimer { x: u8 },      //fx18
    AddToIndex { x: u8 },         //fx1e
    SetIndexToGlyph { x: u8 },    //fx29
    StoreBcd { x: u8 },           //fx33
    StoreRegisters { x: u8 },     //fx55
    LoadRegisters { x: u8 },      //fx65
}

impl TryFrom<u16> for Instruction {
    type Error = Error;

    fn try_from(raw: u16) -> Result<Self> {
        Instruction::decode(Opcode(raw))
    }
}

impl Instruction {
    /// Looks at the leading nibble first. The families 0, 8, E and F hold several
    /// instructions each and are told apart by their last nibble or last byte.
    pub fn decode(opcode: Opcode) -> Result<Self> {
        let x = opcode.x();
        let y = opcode.y();
        let kk = opcode.kk();
        let nnn = opcode.nnn();
        let unknown = Error::UnknownOpcode { opcode: opcode.0 };

        let instruction = match opcode.class() {
            0x0 => match nnn {
                0x0E0 => Instruction::ClearScreen,
                0x0EE => Instruction::ReturnFromSubroutine,
                _ => return Err(unknown),
            },
            0x1 => Instruction::Jump { nnn },
            0x2 => Instruction::Call { nnn },
            0x3 => Instruction::SkipIfEqualByte { x, kk },
            0x4 => Instruction::SkipIfNotEqualByte { x, kk },
            0x5 if opcode.n() == 0x0 => Instruction::SkipIfEqual { x, y },
            0x6 => Instruction::LoadByte { x, kk },
            0x7 => Instruction::AddByte { x, kk },
            0x8 => match opcode.n() {
                0x0 => Instruction::Load { x, y },
                0x1 => Instruction::Or { x, y },
                0x2 => Instruction::And { x, y },
                0x3 => Instruction::Xor { x, y },
                0x4 => Instruction::Add { x, y },
                0x5 => Instruction::Sub { x, y },
                0x6 => Instruction::ShiftRight { x },
                0x7 => Instruction::SubReversed { x, y },
                0xE => Instruction::ShiftLeft { x },
                _ => return Err(unknown),
            },
            0x9 if opcode.n() == 0x0 => Instruction::SkipIfNotEqual { x, y },
            0xA => Instruction::SetIndex { nnn },
            0xB => Instruction::JumpPlusV0 { nnn },
            0xC => Instruction::Random { x, kk },
            0xD => Instruction::Draw {
                x,
                y,
                n: opcode.n(),
            },
            0xE => match kk {
                0x9E => Instruction::SkipIfPressed { x },
                0xA1 => Instruction::SkipIfNotPressed { x },
                _ => return Err(unknown),
            },
            0xF => match kk {
                0x07 => Instruction::LoadDelayTimer { x },
                0x0A => Instruction::WaitForKey { x },
                0x15 => Instruction::SetDelayTimer { x },
                0x18 => Instruction::SetSoundTimer { x },
                0x1E => Instruction::AddToIndex { x },
                0x29 => Instruction::SetIndexToGlyph { x },
                0x33 => Instruction::StoreBcd { x },
                0x55 => Instruction::StoreRegisters { x },
                0x65 => Instruction::LoadRegisters { x },
                _ => return Err(unknown),
            },
            _ => return Err(unknown),
        };

        Ok(instruction)
    }
}
