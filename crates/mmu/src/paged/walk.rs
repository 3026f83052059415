use crate::entry::{
    access, PageEntry, PageInfo, DIR_SHIFT, INDEX_MASK, PAGE_ENTRIES, PAGE_OFFSET_MASK, PAGE_SHIFT,
};
use crate::fault::Fault;
use crate::paged::PagedMmu;

impl PagedMmu {
    /// Translate a logical address into a physical offset plus the
    /// restriction flags picked up along the walk.
    ///
    /// With paging off, or when the address runs into an inactive directory
    /// or table entry, the logical address passes through unchanged (flagged
    /// `NOT_ACTIVE`/`UNMAPPED`) and the bounds check at the access site
    /// decides its fate. A walk that itself leaves physical memory records
    /// `OutOfBounds` here and yields offset 0; callers must treat the fault
    /// slot as authoritative over the returned offset.
    pub fn translate(&self, logical: u64) -> (u64, u8) {
        let mut flags = 0u8;
        if !self.root().active() {
            flags |= access::NOT_ACTIVE;
            return (logical, flags);
        }

        let dir_index = logical >> DIR_SHIFT;
        let tbl_index = (logical >> PAGE_SHIFT) & INDEX_MASK;
        let offset = logical & PAGE_OFFSET_MASK;

        let table = self.table_walk(dir_index, tbl_index, &mut flags);
        if table.error {
            self.set_fault(Fault::OutOfBounds);
            return (0, flags);
        }
        if !table.active {
            flags |= access::UNMAPPED;
            return (logical, flags);
        }
        (u64::from(table.page) << PAGE_SHIFT | offset, flags)
    }

    /// Read and decode one directory slot, accumulating the supervisor flag.
    ///
    /// A directory index past the 1024-entry directory, or a slot address at
    /// or beyond physical memory, is a walk error rather than a crash.
    pub(super) fn directory_walk(&self, dir_index: u64, flags: &mut u8) -> PageInfo {
        let root = self.root();
        if !root.active() {
            *flags |= access::NOT_ACTIVE;
            return PageInfo::default();
        }
        if dir_index >= u64::from(PAGE_ENTRIES) {
            return PageInfo::walk_error();
        }
        let addr = root.base() + dir_index * 4;
        if addr >= self.store().size() {
            return PageInfo::walk_error();
        }
        let entry = PageEntry::new(self.store().get32(addr as usize));
        if entry.supervisor() {
            *flags |= access::SUPERVISOR;
        }
        PageInfo::from(entry)
    }

    /// Read and decode one table slot, walking through its directory entry
    /// first. Write/fetch protection comes from this level only.
    pub(super) fn table_walk(&self, dir_index: u64, tbl_index: u64, flags: &mut u8) -> PageInfo {
        let dir = self.directory_walk(dir_index, flags);
        if dir.error {
            return PageInfo::walk_error();
        }
        if !dir.active {
            *flags |= access::NOT_ACTIVE;
            return PageInfo::default();
        }
        if tbl_index >= u64::from(PAGE_ENTRIES) {
            return PageInfo::walk_error();
        }
        let addr = u64::from(dir.page) << PAGE_SHIFT | tbl_index * 4;
        if addr >= self.store().size() {
            return PageInfo::walk_error();
        }
        let entry = PageEntry::new(self.store().get32(addr as usize));
        if entry.unwritable() {
            *flags |= access::UNWRITABLE;
        }
        if entry.unexecutable() {
            *flags |= access::UNEXECUTABLE;
        }
        PageInfo::from(entry)
    }
}
