use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use common::asm::Ins;
use common::constants::{ROM_BYTES, ROM_WORDS};
use common::mem::{ReadU16, as_le_bytes};

use log::{debug, trace};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RomError {
    #[error("unable to create {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("unable to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("unable to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("read failed: {0}")]
    Read(#[from] io::Error),

    #[error("image truncated after {words} words, expected {}", ROM_WORDS)]
    Truncated { words: usize },

    #[error("image has data past word {:#x}", ROM_WORDS)]
    TrailingData,

    #[error("image is {words} words, expected {}", ROM_WORDS)]
    WrongSize { words: usize },
}

/// The internal program ROM, one entry per word address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomImage {
    words: Vec<u16>,
}

impl RomImage {
    pub fn empty() -> RomImage {
        RomImage {
            words: vec![0; ROM_WORDS],
        }
    }

    pub fn from_words(words: Vec<u16>) -> Result<RomImage, RomError> {
        if words.len() != ROM_WORDS {
            return Err(RomError::WrongSize { words: words.len() });
        }
        Ok(RomImage { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[u16] {
        &self.words
    }

    pub fn word(&self, addr: usize) -> Option<u16> {
        self.words.get(addr).copied()
    }

    pub fn ins_at(&self, addr: usize) -> Option<Ins> {
        Ins::decode(self.words.get(addr..)?)
    }

    /// Writes `words` at consecutive addresses starting at `addr`. Anything that would land at or
    /// past the end of the ROM is dropped.
    pub fn place(&mut self, addr: usize, words: &[u16]) {
        for (i, &word) in words.iter().enumerate() {
            let Some(slot) = addr.checked_add(i).and_then(|a| self.words.get_mut(a)) else {
                debug!("Dropping {word:#06x} placed past end of ROM (addr {addr:#x} + {i})");
                continue;
            };
            *slot = word;
        }
    }

    pub fn place_ins(&mut self, addr: usize, ins: Ins) {
        trace!("Placing `{ins}` at {addr:#06x}");
        self.place(addr, &ins.words());
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        as_le_bytes(&self.words).into_owned()
    }

    // Flat little-endian words, no header.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writer.write_all(&as_le_bytes(&self.words))
    }

    pub fn read_from(reader: &mut impl Read) -> Result<RomImage, RomError> {
        let mut words = Vec::with_capacity(ROM_WORDS);
        while words.len() < ROM_WORDS {
            match reader.read_u16() {
                Ok(word) => words.push(word),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(RomError::Truncated { words: words.len() });
                }
                Err(e) => return Err(e.into()),
            }
        }

        // Make sure we read the whole file.
        let mut buf = [0u8; 1];
        match reader.read_exact(&mut buf) {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(RomImage { words }),
            Err(e) => Err(e.into()),
            Ok(()) => Err(RomError::TrailingData),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RomError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| RomError::Create {
            path: path.to_owned(),
            source,
        })?;

        let mut out = BufWriter::new(file);
        self.write_to(&mut out)
            .and_then(|()| out.flush())
            .map_err(|source| RomError::Write {
                path: path.to_owned(),
                source,
            })?;
        debug!("Wrote {ROM_BYTES} bytes to {}", path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<RomImage, RomError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RomError::Open {
            path: path.to_owned(),
            source,
        })?;
        Self::read_from(&mut BufReader::new(file))
    }
}

impl Default for RomImage {
    fn default() -> Self {
        Self::empty()
    }
}
