use common::constants::ROM_BYTES;
use rom_lib::{OUTPUT_FILE, build};
use romimage::{RomError, RomImage};

#[test]
fn save_size_and_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE);

    let rom = build();
    rom.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), ROM_BYTES);
    assert_eq!(&bytes[..4], &[0x95, 0xf4, 0x20, 0x00]);
    assert_eq!(&bytes[0x40..0x44], &[0x95, 0xf4, 0x00, 0x20]);
    assert_eq!(&bytes[0x100..0x102], &[0x0f, 0x00]);
    assert_eq!(&bytes[ROM_BYTES - 2..], &[0x0d, 0x00]);
}

#[test]
fn save_twice_identical() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.bin");
    let b = dir.path().join("b.bin");
    build().save(&a).unwrap();
    build().save(&b).unwrap();
    assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
}

#[test]
fn load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE);
    let rom = build();
    rom.save(&path).unwrap();
    assert_eq!(RomImage::load(&path).unwrap(), rom);
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory can't be created as a file.
    let err = build().save(dir.path()).unwrap_err();
    assert!(matches!(err, RomError::Create { .. }), "{err:?}");
}
