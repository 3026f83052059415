use std::path::Path;

use mmu::{FlatMmu, Mmu, PagedMmu};

use crate::config::{Config, ConfigError, Variant};

/// One constructed MMU engine. The enum is the whole set: adding a variant
/// means adding it here and in [`Variant`].
#[derive(Debug)]
pub enum MmuDevice {
    Flat(FlatMmu),
    Paged(PagedMmu),
}

impl MmuDevice {
    pub fn new(variant: Variant, size_bytes: u64) -> Self {
        match variant {
            Variant::Flat => MmuDevice::Flat(FlatMmu::new(size_bytes)),
            Variant::Paged => MmuDevice::Paged(PagedMmu::new(size_bytes)),
        }
    }

    pub fn mmu(&self) -> &dyn Mmu {
        match self {
            MmuDevice::Flat(mmu) => mmu,
            MmuDevice::Paged(mmu) => mmu,
        }
    }

    /// The paging engine, when that is what the machine runs. Inspection
    /// tooling needs the concrete type; data access never does.
    pub fn paged(&self) -> Option<&PagedMmu> {
        match self {
            MmuDevice::Paged(mmu) => Some(mmu),
            MmuDevice::Flat(_) => None,
        }
    }
}

/// A named machine: for now just an MMU and the memory behind it.
#[derive(Debug)]
pub struct Computer {
    name: String,
    device: MmuDevice,
}

impl Computer {
    pub fn new(config: Config) -> Self {
        let device = MmuDevice::new(config.mmu.variant, config.mmu.size_k * 1024);
        Self {
            name: config.name,
            device,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Config::from_file(path.as_ref()).map(Self::new)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mmu(&self) -> &dyn Mmu {
        self.device.mmu()
    }

    pub fn device(&self) -> &MmuDevice {
        &self.device
    }
}
