
use crate::mem::WriteU16;

use std::fmt;
use std::io::{self, Write};

use derive_more::IsVariant;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;


// TMS320C5x opcode words. Only the ones the internal ROM stub needs.
#[derive(Debug, Clone, Copy, FromPrimitive, PartialEq, Eq)]
#[repr(u16)]
pub enum Opcode {
    Ret = 0x000d,  // Return from subroutine
    Rete = 0x000f, // Return from interrupt, re-enabling interrupts
    B = 0xf495,    // Branch unconditionally, pma in the next word
}

impl Opcode {
    pub fn to_word(self) -> u16 {
        self as u16
    }

    pub fn from_word(word: u16) -> Option<Opcode> {
        Opcode::from_u16(word)
    }

    // Including the opcode word itself.
    pub fn num_words(self) -> usize {
        match self {
            Opcode::B => 2,
            Opcode::Ret | Opcode::Rete => 1,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}


////////////////////////////////////////////////////////////////////////////////


#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Ins {
    B(u16), // Target program address
    Ret,
    Rete,
}

impl Ins {
    /// `B pma`. Program addresses are 16 bits; anything above is discarded.
    pub fn b(target: u32) -> Ins {
        Ins::B((target & 0xffff) as u16)
    }

    pub fn ret() -> Ins {
        Ins::Ret
    }

    pub fn rete() -> Ins {
        Ins::Rete
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Ins::B(_) => Opcode::B,
            Ins::Ret => Opcode::Ret,
            Ins::Rete => Opcode::Rete,
        }
    }

    /// Size in words.
    pub fn size(&self) -> usize {
        self.opcode().num_words()
    }

    pub fn words(&self) -> Vec<u16> {
        match self {
            Ins::B(target) => vec![Opcode::B.to_word(), *target],
            Ins::Ret | Ins::Rete => vec![self.opcode().to_word()],
        }
    }

    pub fn emit(&self, out: &mut impl Write) -> io::Result<()> {
        for word in self.words() {
            out.write_u16(word)?;
        }
        Ok(())
    }

    /// Decodes the instruction starting at `input[0]`. Returns None for words that aren't one of
    /// ours, or for a branch whose target was cut off.
    pub fn decode(input: &[u16]) -> Option<Ins> {
        let op = Opcode::from_word(*input.first()?)?;
        Some(match op {
            Opcode::B => Ins::B(*input.get(1)?),
            Opcode::Ret => Ins::Ret,
            Opcode::Rete => Ins::Rete,
        })
    }
}

impl fmt::Display for Ins {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ins::B(target) => write!(f, "{}\t{:#06x}", self.opcode(), target),
            Ins::Ret | Ins::Rete => write!(f, "{}", self.opcode()),
        }
    }
}
