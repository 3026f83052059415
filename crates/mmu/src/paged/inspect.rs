//! Debug queries over the page structure.
//!
//! Everything here re-runs the same walk the translator uses, one level at a
//! time, for monitors and tests. None of it sits on the access hot path.

use crate::entry::{access, PageInfo, PAGE_ENTRIES, PAGE_SHIFT};
use crate::paged::PagedMmu;

/// One level of a page walk: the decoded slot plus the restriction flags
/// accumulated on the way down to it.
#[derive(Clone, Copy, Debug, Default)]
pub struct WalkStep {
    pub entry: PageInfo,
    pub flags: u8,
}

impl PagedMmu {
    /// Decoded view of the vmem register (root frame + active bit).
    pub fn vmem_page(&self) -> PageInfo {
        PageInfo::from(self.root())
    }

    /// Decode one directory slot.
    pub fn directory_page(&self, dir_index: u32) -> WalkStep {
        let mut flags = 0u8;
        let entry = self.directory_walk(u64::from(dir_index), &mut flags);
        WalkStep { entry, flags }
    }

    /// Decode one table slot, including the flags inherited from its
    /// directory entry.
    pub fn table_page(&self, dir_index: u32, tbl_index: u32) -> WalkStep {
        let mut flags = 0u8;
        let entry = self.table_walk(u64::from(dir_index), u64::from(tbl_index), &mut flags);
        WalkStep { entry, flags }
    }

    /// Resolve one logical page to its physical frame plus a flag summary.
    /// `mapped` is false when the table entry for the page was inactive.
    pub fn physical_page_from_logical(&self, logical_page: u32) -> PageInfo {
        let (addr, flags) = self.translate(u64::from(logical_page) << PAGE_SHIFT);
        PageInfo {
            page: (addr >> PAGE_SHIFT) as u32,
            active: flags & access::NOT_ACTIVE == 0,
            supervisor: flags & access::SUPERVISOR != 0,
            unwritable: flags & access::UNWRITABLE != 0,
            unexecutable: flags & access::UNEXECUTABLE != 0,
            error: false,
            mapped: flags & access::UNMAPPED == 0,
        }
    }

    /// Every logical page currently mapped onto `frame`, in ascending order.
    ///
    /// Scans all 1024 directory slots and, under each active one, all 1024
    /// table slots. Debug/tooling path only; empty when paging is off.
    pub fn logical_pages_from_physical(&self, frame: u32) -> Vec<PageInfo> {
        let mut pages = Vec::new();
        if !self.root().active() {
            return pages;
        }
        for dir_index in 0..u64::from(PAGE_ENTRIES) {
            let mut dir_flags = 0u8;
            let dir = self.directory_walk(dir_index, &mut dir_flags);
            if dir.error || !dir.active {
                continue;
            }
            for tbl_index in 0..u64::from(PAGE_ENTRIES) {
                let mut flags = 0u8;
                let tbl = self.table_walk(dir_index, tbl_index, &mut flags);
                if tbl.error || !tbl.active || tbl.page != frame {
                    continue;
                }
                pages.push(PageInfo {
                    page: (dir_index << 10 | tbl_index) as u32,
                    active: flags & access::NOT_ACTIVE == 0,
                    supervisor: flags & access::SUPERVISOR != 0,
                    unwritable: flags & access::UNWRITABLE != 0,
                    unexecutable: flags & access::UNEXECUTABLE != 0,
                    error: false,
                    mapped: true,
                });
            }
        }
        pages
    }
}
