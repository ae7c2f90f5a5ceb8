use common::asm::Ins;
use common::constants::{INT_HANDLER, PROGRAM_ENTRY, RESET_HANDLER};
use rom_lib::build;

#[test]
fn reset_handler() {
    let rom = build();
    assert_eq!(rom.word(0x0020), Some(0xf495));
    assert_eq!(rom.word(0x0021), Some(0x2000));
    assert_eq!(rom.ins_at(RESET_HANDLER as usize), Some(Ins::B(PROGRAM_ENTRY)));
}

#[test]
fn interrupt_handler() {
    let rom = build();
    assert_eq!(rom.word(0x0080), Some(0x000f));
    assert!(rom.ins_at(INT_HANDLER as usize).unwrap().is_rete());
}
