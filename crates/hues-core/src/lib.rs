//! Hues Core — domain layer for the legacy client's hue system.
//!
//! This crate decodes the fixed-layout hue and radar colour tables, derives
//! the float palette used by renderers, and provides the 16-bit/32-bit colour
//! conversions and hue remap lookups. No filesystem or GPU dependencies; raw
//! table bytes come in through [`RawBufferProvider`].

pub mod config;
pub mod convert;
mod error;
pub mod layout;
pub mod loader;
pub mod lookup;
pub mod palette;
pub mod patch;
pub mod source;
pub mod table;

// Re-exports for convenience.
pub use config::HuesConfig;
pub use error::{ConfigError, LoadError, PatchError};
pub use loader::{Hues, SharedHues};
pub use palette::Palette;
pub use patch::{PatchGroup, PatchLayout};
pub use source::{MemoryProvider, RawBufferProvider};
pub use table::{HueEntry, HueGroup, HueTable, RadarColorTable};
