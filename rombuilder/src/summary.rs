use crate::OUTPUT_FILE;

use common::asm::Opcode;
use common::constants::{INT_HANDLER, RESET_HANDLER, STUBS_START, WORD_SIZE};
use common::vectors::Vector;
use romimage::RomImage;

use std::fmt;


/// One diagnostic word read back from the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub addr: u16,
    pub actual: Option<u16>,
    pub expected: u16,
    pub kind: ProbeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    Opcode(Opcode),
    Target, // Operand word of a branch
}

impl Probe {
    fn opcode(rom: &RomImage, addr: u16, op: Opcode) -> Probe {
        Probe {
            addr,
            actual: rom.word(addr as usize),
            expected: op.to_word(),
            kind: ProbeKind::Opcode(op),
        }
    }

    fn target(rom: &RomImage, addr: u16, expected: u16) -> Probe {
        Probe {
            addr,
            actual: rom.word(addr as usize),
            expected,
            kind: ProbeKind::Target,
        }
    }

    pub fn matches(&self) -> bool {
        self.actual == Some(self.expected)
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:#06X}] = ", self.addr)?;
        match self.actual {
            Some(word) => write!(f, "0x{word:04X}")?,
            None => write!(f, "------")?,
        }
        match self.kind {
            ProbeKind::Opcode(op) => {
                write!(f, " ({}={:#06x})", op.to_string().to_uppercase(), self.expected)
            }
            ProbeKind::Target => write!(f, " (-> 0x{:04X})", self.expected),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub words: usize,
    pub bytes: usize,
    pub probes: [Probe; 4],
}

impl Summary {
    pub fn of(rom: &RomImage) -> Summary {
        Summary {
            words: rom.len(),
            bytes: rom.len() * WORD_SIZE,
            probes: [
                Probe::opcode(rom, Vector::Reset.addr(), Opcode::B),
                Probe::target(rom, Vector::Reset.addr() + 1, RESET_HANDLER),
                Probe::opcode(rom, INT_HANDLER, Opcode::Rete),
                Probe::opcode(rom, STUBS_START, Opcode::Ret),
            ],
        }
    }

    pub fn all_match(&self) -> bool {
        self.probes.iter().all(Probe::matches)
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &Probe> {
        self.probes.iter().filter(|p| !p.matches())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Generated {} words ({} bytes) -> {OUTPUT_FILE}", self.words, self.bytes)?;
        for probe in &self.probes {
            write!(f, "\n  {probe}")?;
        }
        Ok(())
    }
}
