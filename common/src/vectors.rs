use crate::constants::{VECTORS_END, VECTORS_START, VECTOR_SLOT_WORDS};

use std::fmt;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;


// Interrupt vector slots at the bottom of the internal ROM, two words each, in slot order.
#[derive(Debug, Clone, Copy, FromPrimitive, PartialEq, Eq)]
pub enum Vector {
    Reset = 0,
    Int0,
    Int1,
    Int2,
    Int3,
    Tint, // Timer
    Rint, // Serial receive
    Xint, // Serial transmit
    Trnt, // TDM receive
    Txnt, // TDM transmit
    Int4,
    Reserved0,
    Reserved1,
    Reserved2,
    Reserved3,
    Reserved4,
}

impl Vector {
    pub const NUM: usize = ((VECTORS_END - VECTORS_START) / VECTOR_SLOT_WORDS) as usize;

    pub const ALL: [Vector; Vector::NUM] = [
        Vector::Reset,
        Vector::Int0,
        Vector::Int1,
        Vector::Int2,
        Vector::Int3,
        Vector::Tint,
        Vector::Rint,
        Vector::Xint,
        Vector::Trnt,
        Vector::Txnt,
        Vector::Int4,
        Vector::Reserved0,
        Vector::Reserved1,
        Vector::Reserved2,
        Vector::Reserved3,
        Vector::Reserved4,
    ];

    pub fn index(self) -> u16 {
        self as u16
    }

    pub fn addr(self) -> u16 {
        VECTORS_START + self.index() * VECTOR_SLOT_WORDS
    }

    /// The vector whose slot contains `addr`, if any.
    pub fn at(addr: u16) -> Option<Vector> {
        if !(VECTORS_START..VECTORS_END).contains(&addr) {
            return None;
        }
        Vector::from_u16((addr - VECTORS_START) / VECTOR_SLOT_WORDS)
    }

    pub fn is_reserved(self) -> bool {
        self.index() >= Vector::Reserved0.index()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_uppercase())
    }
}
