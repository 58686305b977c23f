//! The resolved platform record

use crate::path_list::PathList;
use serde::Serialize;

/// Leaf segment appended to the cache location for this application's own
/// cache files.
pub(crate) const CACHE_LEAF: &str = "sysfetch/";

/// Machine and environment identity, resolved once at process start.
///
/// All fields are best-effort: an empty string or list means "unknown" and
/// is never an error. The record is built by [`Platform::resolve`] and
/// read-only afterwards; detector modules consume it for the remainder of
/// the process.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Platform {
    /// Absolute home directory with a trailing slash; empty only if every
    /// source failed.
    pub home_dir: String,
    /// Cache directory for this application, trailing slash, ending in the
    /// application leaf segment.
    pub cache_dir: String,
    /// Configuration search paths, most preferred first
    pub config_dirs: PathList,
    /// Data search paths, most preferred first
    pub data_dirs: PathList,
    pub username: String,
    pub hostname: String,
    pub domain_name: String,
    pub system_name: String,
    pub system_release: String,
    pub system_version: String,
    pub system_architecture: String,
}

impl Platform {
    /// Resolve the platform for the current process.
    ///
    /// Runs the per-OS resolution procedure: home and cache directories
    /// first, then the config/data search paths (which may derive
    /// candidates from the home directory), then the scalar identity
    /// fields. Sources that fail are skipped; this never fails as a whole.
    pub fn resolve() -> Self {
        let mut platform = Self::default();
        crate::imp::resolve(&mut platform);
        platform
    }
}
