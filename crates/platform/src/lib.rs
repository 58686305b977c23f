//! Platform identity and search-path resolution for sysfetch
//!
//! This crate resolves machine and environment identity once at process
//! start: user, host and domain names, OS name/version/architecture, and
//! the ordered, deduplicated search paths for configuration, cache and
//! data directories (XDG-style precedence on POSIX systems, known-folder
//! and registry lookups on Windows). Detector modules read the resolved
//! [`Platform`] record for the remainder of the process; nothing is
//! refreshed after startup.
//!
//! Every lookup is best-effort: a source that fails is skipped and the
//! corresponding field stays empty. Resolution never fails as a whole.

mod arch;
mod error;
mod path_list;
mod platform;
mod search;
mod version;

#[cfg(unix)]
#[path = "unix.rs"]
mod imp;

#[cfg(windows)]
#[path = "windows.rs"]
mod imp;

pub use arch::canonical_arch;
pub use error::PlatformError;
pub use path_list::PathList;
pub use platform::Platform;
pub use version::{release_string, version_from_tiers};
