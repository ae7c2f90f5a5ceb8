use common::asm::Ins;
use common::constants::{INT_HANDLER, RESET_HANDLER};
use common::vectors::Vector;
use rom_lib::build;

#[test]
fn reset_vector() {
    let rom = build();
    assert_eq!(rom.word(0x0000), Some(0xf495));
    assert_eq!(rom.word(0x0001), Some(RESET_HANDLER));
    assert_eq!(rom.ins_at(0x0000), Some(Ins::b(RESET_HANDLER.into())));
}

#[test]
fn interrupt_vectors() {
    let rom = build();
    for addr in (0x0002..=0x001e).step_by(2) {
        assert_eq!(rom.word(addr), Some(0xf495), "addr {addr:#06x}");
        assert_eq!(rom.word(addr + 1), Some(INT_HANDLER), "addr {addr:#06x}");
    }
}

#[test]
fn by_name() {
    let rom = build();
    for vector in Vector::ALL {
        let expected = if vector == Vector::Reset { RESET_HANDLER } else { INT_HANDLER };
        assert_eq!(
            rom.ins_at(vector.addr() as usize),
            Some(Ins::B(expected)),
            "vector {vector}"
        );
    }
}

#[test]
fn reserved_go_to_int_handler() {
    let rom = build();
    let reserved = Vector::ALL.iter().filter(|v| v.is_reserved());
    for vector in reserved {
        assert_eq!(rom.ins_at(vector.addr() as usize), Some(Ins::B(INT_HANDLER)));
    }
}
