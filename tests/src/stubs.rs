use common::asm::Ins;
use common::constants::{ROM_WORDS, STUBS_START};
use rom_lib::build;

#[test]
fn every_stub_returns() {
    let rom = build();
    for addr in 0x0100..=0x0fff {
        assert_eq!(rom.word(addr), Some(0x000d), "addr {addr:#06x}");
    }
}

#[test]
fn stubs_decode_as_ret() {
    let rom = build();
    assert!((STUBS_START as usize..ROM_WORDS).all(|addr| rom.ins_at(addr) == Some(Ins::Ret)));
}

#[test]
fn last_word() {
    let rom = build();
    assert_eq!(rom.word(ROM_WORDS - 1), Some(0x000d));
    assert_eq!(rom.word(ROM_WORDS), None);
}
