use common::constants::{ROM_BYTES, ROM_WORDS};
use rom_lib::build;

#[test]
fn length() {
    let rom = build();
    assert_eq!(rom.len(), ROM_WORDS);
    assert_eq!(rom.as_bytes().len(), ROM_BYTES);
    assert_eq!(ROM_BYTES, 8192);
}

#[test]
fn deterministic() {
    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn bytes_are_le_words() {
    let rom = build();
    let bytes = rom.as_bytes();
    for (addr, chunk) in bytes.chunks_exact(2).enumerate() {
        let word = u16::from_le_bytes([chunk[0], chunk[1]]);
        assert_eq!(Some(word), rom.word(addr), "addr {addr:#06x}");
    }
}
