mod common;

use mmu::entry::{ENTRY_ACTIVE, ENTRY_UNEXECUTABLE, ENTRY_UNWRITABLE};
use mmu::{Fault, Mmu};

#[test]
fn faults_stick_across_successful_operations() {
    let mmu = common::mapped_mmu();
    mmu.load_u8(0xFFFF_FFFF);
    assert_eq!(mmu.fault(), Some(Fault::OutOfBounds));

    // a successful access does not acknowledge anything
    mmu.store_u8(0xABCD_1234, 0x7);
    assert_eq!(mmu.load_u8(0xABCD_1234), 0x7);
    assert_eq!(mmu.fault(), Some(Fault::OutOfBounds));
}

#[test]
fn new_fault_overwrites_the_old() {
    let mmu = common::mapped_mmu();
    mmu.load_u8(0xFFFF_FFFF);
    assert_eq!(mmu.fault(), Some(Fault::OutOfBounds));

    mmu.store_u32(
        common::tbl_addr(),
        common::DATA_FRAME | ENTRY_ACTIVE | ENTRY_UNWRITABLE,
    );
    mmu.store_u8(0xABCD_1234, 0x1);
    assert_eq!(mmu.fault(), Some(Fault::UnauthorizedWrite));
}

#[test]
fn clear_resets_the_slot() {
    let mmu = common::mapped_mmu();
    mmu.load_u8(0xFFFF_FFFF);
    assert_eq!(mmu.fault(), Some(Fault::OutOfBounds));
    mmu.clear_fault();
    assert_eq!(mmu.fault(), None);
    mmu.clear_fault();
    assert_eq!(mmu.fault(), None);
}

#[test]
fn faulted_reads_return_zero_and_stores_are_discarded() {
    let mmu = common::mapped_mmu();
    mmu.physical_mut()[0x2_B234] = 0x66;

    mmu.store_u32(
        common::tbl_addr(),
        common::DATA_FRAME | ENTRY_ACTIVE | ENTRY_UNWRITABLE | ENTRY_UNEXECUTABLE,
    );
    mmu.store_u8(0xABCD_1234, 0x1);
    assert_eq!(mmu.physical()[0x2_B234], 0x66);
    assert_eq!(mmu.fault(), Some(Fault::UnauthorizedWrite));
    mmu.clear_fault();

    assert_eq!(mmu.fetch_opcode(0xABCD_1234), 0);
    assert_eq!(mmu.fault(), Some(Fault::UnauthorizedExecution));
}
