use common::asm::Ins;
use common::constants::{INT_HANDLER, PROGRAM_ENTRY, RESET_HANDLER, STUBS_END, STUBS_START};
use common::vectors::Vector;
use romimage::RomImage;

use log::{debug, trace};


// Every vector but RESET funnels into the one interrupt handler.
pub fn fill_vectors(rom: &mut RomImage) {
    for vector in Vector::ALL {
        let target = match vector {
            Vector::Reset => RESET_HANDLER,
            _ => INT_HANDLER,
        };
        trace!("Vector {vector} at {:#06x} -> {target:#06x}", vector.addr());
        rom.place_ins(vector.addr() as usize, Ins::b(target.into()));
    }
}

// The boot loader is emulated outside the ROM; RESET only gets here if that's bypassed, in which
// case go straight to the game program.
pub fn fill_handlers(rom: &mut RomImage) {
    rom.place_ins(RESET_HANDLER as usize, Ins::b(PROGRAM_ENTRY.into()));
    rom.place_ins(INT_HANDLER as usize, Ins::rete());
}

// Each address is its own one-word routine, so a call to any undumped library entry point returns
// immediately.
pub fn fill_stubs(rom: &mut RomImage) {
    let ret = Ins::ret().words();
    for addr in (STUBS_START as usize)..STUBS_END {
        rom.place(addr, &ret);
    }
}

pub fn build() -> RomImage {
    let mut rom = RomImage::empty();

    debug!("Filling vector table");
    fill_vectors(&mut rom);

    debug!("Filling reset and interrupt handlers");
    fill_handlers(&mut rom);

    debug!("Filling function stubs {STUBS_START:#06x}..{STUBS_END:#06x}");
    fill_stubs(&mut rom);

    rom
}
