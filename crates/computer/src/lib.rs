//! Machine assembly for TinyVM: a `Computer` owns one MMU engine picked from
//! a closed set of variants by a JSON machine config. Selection is plain
//! data; there is no runtime code loading.

pub mod computer;
pub mod config;

pub use computer::{Computer, MmuDevice};
pub use config::{Config, ConfigError, MmuConfig, Variant};
