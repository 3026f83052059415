use core::fmt;

/// Memory violations recorded in the sticky fault slot.
///
/// A new violation overwrites an unacknowledged old one; the slot is only
/// reset by an explicit clear. Faulted reads return 0 and faulted writes are
/// discarded, so the fault slot, not the returned value, is authoritative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// Access or page walk landed at or beyond physical memory.
    OutOfBounds,
    /// Store to a write-protected page.
    UnauthorizedWrite,
    /// Opcode fetch from a fetch-protected page.
    UnauthorizedExecution,
    /// User-mode access to a supervisor-only page.
    UnauthorizedUserAccess,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Fault::OutOfBounds => "out of bounds",
            Fault::UnauthorizedWrite => "unauthorized write",
            Fault::UnauthorizedExecution => "unauthorized execution",
            Fault::UnauthorizedUserAccess => "unauthorized user access",
        };
        f.write_str(s)
    }
}
