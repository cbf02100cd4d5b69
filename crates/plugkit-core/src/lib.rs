pub mod catalog;
pub mod error;
pub mod installer;
pub mod inventory;
pub mod io;
pub mod paths;

pub use error::{PluginError, Result};
pub use installer::{InstallOutcome, Installer, PluginStatus, UninstallOutcome};
