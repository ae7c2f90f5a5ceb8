use std::borrow::Cow;
use std::io::{self, Read, Write};

use bytemuck::cast_slice;

// Little-endian byte view of a word buffer. Zero-copy when the host agrees.
pub fn as_le_bytes(input: &[u16]) -> Cow<'_, [u8]> {
    if cfg!(target_endian = "little") {
        Cow::Borrowed(cast_slice(input))
    } else {
        Cow::Owned(input.iter().flat_map(|w| w.to_le_bytes()).collect())
    }
}

////////////////////////////////////////////////////////////////////////////////

pub trait ReadU16 {
    fn read_u16(&mut self) -> io::Result<u16>;
}

impl<T: Read> ReadU16 for T {
    fn read_u16(&mut self) -> io::Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        let lower = buf[0] as u16;
        let upper = buf[1] as u16;
        Ok(lower | (upper << u8::BITS))
    }
}

////////////////////////////////////////////////////////////////////////////////

pub trait WriteU16 {
    fn write_u16(&mut self, val: u16) -> io::Result<()>;
}

impl<T: Write> WriteU16 for T {
    fn write_u16(&mut self, val: u16) -> io::Result<()> {
        let lower = val as u8;
        let upper = (val >> u8::BITS) as u8;
        self.write_all(&[lower, upper])
    }
}

////////////////////////////////////////////////////////////////////////////////
