//! Filesystem-backed table source for hues-core.
//!
//! Resolves table file names (`hues.mul`, `radarcol.mul`, ...) under the
//! client's data folder and reads them whole.

mod folder;

pub use folder::MulFolder;
