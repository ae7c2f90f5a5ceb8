
pub const WORD_SIZE: usize = 2; // Bytes

// Internal ROM, in words.
pub const ROM_START: u16 = 0x0000;
pub const ROM_WORDS: usize = 0x1000;
pub const ROM_BYTES: usize = ROM_WORDS * WORD_SIZE;

pub const VECTORS_START: u16 = 0x0000;
pub const VECTORS_END: u16 = RESET_HANDLER; // Exclusive
pub const VECTOR_SLOT_WORDS: u16 = 2;

pub const RESET_HANDLER: u16 = 0x0020;
pub const INT_HANDLER: u16 = 0x0080;

pub const STUBS_START: u16 = 0x0100;
pub const STUBS_END: usize = ROM_WORDS; // Exclusive, note type

// Rest of program memory, as the board maps it.
pub const USER_RAM_START: u16 = 0x1000;
pub const USER_RAM_END: u16 = 0x1fff; // Inclusive
pub const SARAM_START: u16 = 0x2000;
pub const SARAM_END: u16 = 0x23ff; // Inclusive
pub const DARAM_B0_START: u16 = 0xfe00;
pub const DARAM_B0_END: u16 = 0xffff; // Inclusive

// Where the boot loader hands off to the game program.
pub const PROGRAM_ENTRY: u16 = SARAM_START;
