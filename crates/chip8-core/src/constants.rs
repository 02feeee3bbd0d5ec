/// The width of the display in pixels
pub const DISPLAY_WIDTH: usize = 64;
/// The height of the display in pixels
pub const DISPLAY_HEIGHT: usize = 32;
/// The size of ram in bytes
pub const RAM_SIZE: usize = 4096;
/// Amount of registers CHIP-8 has
pub const NUM_REGISTERS: usize = 16;
/// Amount of keys on the hexadecimal keypad
pub const NUM_KEYS: u8 = 16;
/// The flag register, overwritten by arithmetic and display instructions
pub const FLAG_REGISTER: u8 = 0xF;
/// Every font glyph is 5 rows of 8 pixels
pub const FONT_GLYPH_SIZE: u16 = 5;
/// For the regular chip 8 roms
pub const DEFAULT_MEMORY_START_ADDRESS: u16 = 0x200;
/// Where the hexadecimal font set is placed unless configured otherwise
pub const DEFAULT_FONT_SET_START_ADDRESS: u16 = 0x050;
/// Nesting depth of subroutine calls on the COSMAC VIP interpreter
pub const DEFAULT_STACK_DEPTH: usize = 16;
/// How often the delay and sound timers count down
pub const TIMER_FREQUENCY_HZ: u32 = 60;
/// How many cycles the cpu advances for every frame. This decides how fast the cpu will run
pub const CYCLES_PER_FRAME: usize = 10;
