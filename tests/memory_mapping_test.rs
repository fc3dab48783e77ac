//! Tests for the NES CPU memory map.

use nes_cpu::{Bus, FlatMemory, Mmu, OpenBus};

/// Records the last write it saw
#[derive(Default)]
struct RegisterFile {
    last_write: Option<(u16, u8)>,
}

impl Bus for RegisterFile {
    fn read(&self, addr: u16) -> u8 {
        (addr >> 8) as u8
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.last_write = Some((addr, value));
    }
}

#[test]
fn test_ram_mirrored_four_times() {
    let mut mmu = Mmu::new();
    mmu.write(0x0042, 0x99);

    for mirror in [0x0042, 0x0842, 0x1042, 0x1842] {
        assert_eq!(mmu.read(mirror), 0x99, "{:04X}", mirror);
    }

    mmu.write(0x1FFF, 0x11);
    assert_eq!(mmu.read(0x07FF), 0x11);
    assert_eq!(mmu.ram()[0x07FF], 0x11);
}

#[test]
fn test_unmapped_region_reads_zero() {
    let mut mmu: Mmu<OpenBus> = Mmu::default();

    mmu.write(0x2000, 0xFF);
    mmu.write(0xFFFF, 0xFF);

    assert_eq!(mmu.read(0x2000), 0x00);
    assert_eq!(mmu.read(0xFFFF), 0x00);
}

#[test]
fn test_external_bus_sees_upper_range_only() {
    let mut mmu = Mmu::with_bus(RegisterFile::default());

    mmu.write(0x1FFF, 0x01);
    assert_eq!(mmu.bus().last_write, None);

    mmu.write(0x2000, 0x02);
    assert_eq!(mmu.bus().last_write, Some((0x2000, 0x02)));

    assert_eq!(mmu.read(0x4016), 0x40);
    assert_eq!(mmu.read(0x0016), 0x00);

    mmu.bus_mut().last_write = None;
    assert_eq!(mmu.bus().last_write, None);
}

#[test]
fn test_flat_memory_behind_ram() {
    let mut mmu = Mmu::with_bus(FlatMemory::new());

    mmu.write(0x0000, 0x01);
    mmu.write(0x8000, 0x80);

    // The low window never reaches the flat memory
    assert_eq!(mmu.bus().read(0x0000), 0x00);
    assert_eq!(mmu.bus().read(0x8000), 0x80);
}

#[test]
fn test_read_word_little_endian() {
    let mut mmu = Mmu::new();
    mmu.write(0x0010, 0x34);
    mmu.write(0x0011, 0x12);

    let word = mmu.read_word(0x0010);
    assert_eq!(word.value(), 0x1234);
    assert_eq!(word.lo(), 0x34);
    assert_eq!(word.hi(), 0x12);
}

#[test]
fn test_plain_accesses_do_not_touch_boundary_flag() {
    let mut mmu = Mmu::new();
    assert!(!mmu.boundary_crossed());

    mmu.write(0x00FF, 0x01);
    let _ = mmu.read(0x0100);

    assert!(!mmu.boundary_crossed());
}
