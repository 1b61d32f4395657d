//! Loading the tables and sharing them with renderers.
//!
//! [`Hues`] owns one hue table and one radar table. It is built once at
//! startup and handed to whoever needs it; there is no global instance.
//! [`SharedHues`] wraps it for callers that patch groups while other threads
//! are reading.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::HuesConfig;
use crate::error::LoadError;
use crate::layout::GROUP_SIZE;
use crate::palette::Palette;
use crate::patch::PatchGroup;
use crate::source::RawBufferProvider;
use crate::table::{HueTable, RadarColorTable};

/// The loaded hue and radar tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hues {
    pub table: HueTable,
    pub radar: RadarColorTable,
}

impl Hues {
    /// Read and decode both tables.
    ///
    /// The hue file is opened first; a missing source fails the load with
    /// [`LoadError::SourceNotFound`].
    pub fn load(
        provider: &impl RawBufferProvider,
        config: &HuesConfig,
    ) -> Result<Self, LoadError> {
        let hue_bytes = provider.open(&config.hues_file)?;
        let radar_bytes = provider.open(&config.radar_file)?;
        Ok(Self::decode(&hue_bytes, &radar_bytes))
    }

    /// Decode both tables from raw buffers already in memory.
    pub fn decode(hue_bytes: &[u8], radar_bytes: &[u8]) -> Self {
        let table = HueTable::decode(hue_bytes);
        let radar = RadarColorTable::decode(radar_bytes);

        let trailing = hue_bytes.len() % GROUP_SIZE;
        if trailing != 0 {
            tracing::debug!("Ignoring {trailing} trailing bytes after the last hue group");
        }
        tracing::info!(
            "Loaded hue table: {} groups, {} hues, {} radar colors",
            table.group_count(),
            table.hue_count(),
            radar.len()
        );

        Self { table, radar }
    }

    /// Replace both tables with a fresh load.
    ///
    /// On error the current tables are left untouched.
    pub fn reload(
        &mut self,
        provider: &impl RawBufferProvider,
        config: &HuesConfig,
    ) -> Result<(), LoadError> {
        *self = Self::load(provider, config)?;
        Ok(())
    }

    /// Total number of addressable hues.
    pub fn hue_count(&self) -> usize {
        self.table.hue_count()
    }

    /// Build the float palette from the current hue table.
    pub fn build_palette(&self) -> Palette {
        Palette::build(&self.table)
    }

    /// See [`HueTable::replace_group`].
    pub fn replace_group(&mut self, index: i32, patch: &PatchGroup) {
        self.table.replace_group(index, patch);
    }

    /// Radar colour at `index`, or `0` when out of range.
    pub fn radar_color(&self, index: usize) -> u16 {
        self.radar.color(index)
    }
}

/// Thread-safe handle to loaded tables and their current palette.
///
/// Table reads take a shared lock, group patches an exclusive one. The
/// palette is rebuilt into a new allocation and swapped in, so readers
/// holding the previous `Arc<Palette>` keep a consistent snapshot.
#[derive(Debug, Clone)]
pub struct SharedHues {
    hues: Arc<RwLock<Hues>>,
    palette: Arc<RwLock<Arc<Palette>>>,
}

impl SharedHues {
    /// Wrap loaded tables and build the initial palette.
    pub fn new(hues: Hues) -> Self {
        let palette = Arc::new(hues.build_palette());
        Self {
            hues: Arc::new(RwLock::new(hues)),
            palette: Arc::new(RwLock::new(palette)),
        }
    }

    /// Run `f` with shared access to the tables.
    pub fn read<R>(&self, f: impl FnOnce(&Hues) -> R) -> R {
        f(&self.hues.read())
    }

    /// Patch one group under the write lock.
    ///
    /// The palette is not rebuilt; call [`rebuild_palette`](Self::rebuild_palette)
    /// once all patches are applied.
    pub fn replace_group(&self, index: i32, patch: &PatchGroup) {
        self.hues.write().replace_group(index, patch);
    }

    /// Reload both tables in place.
    pub fn reload(
        &self,
        provider: &impl RawBufferProvider,
        config: &HuesConfig,
    ) -> Result<(), LoadError> {
        let fresh = Hues::load(provider, config)?;
        *self.hues.write() = fresh;
        Ok(())
    }

    /// Build a palette from the current tables and publish it.
    ///
    /// The table read lock is held until the palette is published. Patches
    /// need the write lock, so palettes are published in table order and a
    /// rebuild that follows a patch is never overwritten by an older one.
    pub fn rebuild_palette(&self) -> Arc<Palette> {
        let hues = self.hues.read();
        let palette = Arc::new(hues.build_palette());
        *self.palette.write() = Arc::clone(&palette);
        drop(hues);
        palette
    }

    /// The most recently published palette.
    pub fn palette(&self) -> Arc<Palette> {
        self.palette.read().clone()
    }
}
