//! Tests for the load and store instructions (LDA, LDX, LDY, STA, STX, STY).
//!
//! Tests cover:
//! - Every addressing mode of LDA and STA
//! - Zero-page index wraparound
//! - N/Z updates on loads, no flag changes on stores

use emu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== LDA ==========

#[test]
fn test_lda_immediate_zero_sets_zero_flag() {
    let mut cpu = setup_cpu();

    // LDA #$00
    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.set_flag_z(false);
    cpu.set_flag_n(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lda_immediate_negative() {
    let mut cpu = setup_cpu();

    // LDA #$80
    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu();

    // LDA $42
    cpu.memory_mut().write(0x8000, 0xA5);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0x37);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let mut cpu = setup_cpu();

    // LDA $F0,X with X = 0x20 reads $0010, not $0110
    cpu.memory_mut().write(0x8000, 0xB5);
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.memory_mut().write(0x0010, 0x11);
    cpu.memory_mut().write(0x0110, 0x22);
    cpu.set_x(0x20);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x11);
}

#[test]
fn test_lda_absolute() {
    let mut cpu = setup_cpu();

    // LDA $1234
    cpu.memory_mut().write(0x8000, 0xAD);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1234, 0x5A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_x_crosses_page() {
    let mut cpu = setup_cpu();

    // LDA $12F0,X with X = 0x20
    cpu.memory_mut().write(0x8000, 0xBD);
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1310, 0x77);
    cpu.set_x(0x20);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
    // No page-crossing penalty is modeled
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_y_wraps_address_space() {
    let mut cpu = setup_cpu();

    // LDA $FFFF,Y with Y = 2 reads $0001
    cpu.memory_mut().write(0x8000, 0xB9);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0xFF);
    cpu.memory_mut().write(0x0001, 0x66);
    cpu.set_y(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x66);
}

#[test]
fn test_lda_indexed_indirect() {
    let mut cpu = setup_cpu();

    // LDA ($20,X) with X = 4: pointer at $24/$25 -> $3040
    cpu.memory_mut().write(0x8000, 0xA1);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x0024, 0x40);
    cpu.memory_mut().write(0x0025, 0x30);
    cpu.memory_mut().write(0x3040, 0x99);
    cpu.set_x(0x04);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_lda_indexed_indirect_pointer_wraps_in_zero_page() {
    let mut cpu = setup_cpu();

    // LDA ($FE,X) with X = 1: pointer low at $FF, high at $00
    cpu.memory_mut().write(0x8000, 0xA1);
    cpu.memory_mut().write(0x8001, 0xFE);
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x20);
    cpu.memory_mut().write(0x2000, 0x42);
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_lda_indirect_indexed() {
    let mut cpu = setup_cpu();

    // LDA ($40),Y with Y = 0x10: base $2000 + 0x10
    cpu.memory_mut().write(0x8000, 0xB1);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0040, 0x00);
    cpu.memory_mut().write(0x0041, 0x20);
    cpu.memory_mut().write(0x2010, 0xC3);
    cpu.set_y(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xC3);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 5);
}

// ========== LDX / LDY ==========

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();

    // LDX $10,Y
    cpu.memory_mut().write(0x8000, 0xB6);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0013, 0x08);
    cpu.set_y(0x03);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x08);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();

    // LDY $0200,X
    cpu.memory_mut().write(0x8000, 0xBC);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x02);
    cpu.memory_mut().write(0x0205, 0xFF);
    cpu.set_x(0x05);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0xFF);
    assert!(cpu.flag_n());
}

// ========== Stores ==========

#[test]
fn test_sta_zero_page_leaves_flags() {
    let mut cpu = setup_cpu();

    // STA $10
    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.set_a(0x00);
    cpu.set_status(0x24);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert_eq!(cpu.status(), 0x24);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_sta_indirect_indexed() {
    let mut cpu = setup_cpu();

    // STA ($80),Y
    cpu.memory_mut().write(0x8000, 0x91);
    cpu.memory_mut().write(0x8001, 0x80);
    cpu.memory_mut().write(0x0080, 0xFF);
    cpu.memory_mut().write(0x0081, 0x10);
    cpu.set_a(0xAB);
    cpu.set_y(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1100), 0xAB);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_stx_zero_page_y_wraps() {
    let mut cpu = setup_cpu();

    // STX $FF,Y with Y = 2 writes $0001
    cpu.memory_mut().write(0x8000, 0x96);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.set_x(0x5D);
    cpu.set_y(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0001), 0x5D);
    assert_eq!(cpu.memory().read(0x0101), 0x00);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu();

    // STY $4000
    cpu.memory_mut().write(0x8000, 0x8C);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x40);
    cpu.set_y(0x7E);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x4000), 0x7E);
    assert_eq!(cpu.pc(), 0x8003);
}
