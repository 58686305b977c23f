//! POSIX platform resolution
//!
//! Directories follow XDG precedence with no known-folder sources; scalar
//! identity comes from `whoami` and the `sysinfo` statics.

use sysinfo::System;
use tracing::debug;

use crate::arch::canonical_arch;
use crate::error::PlatformError;
use crate::path_list::normalize_dir;
use crate::platform::{CACHE_LEAF, Platform};
use crate::search::{self, CONFIG, DATA};

pub(crate) fn resolve(platform: &mut Platform) {
    platform.home_dir = home_dir().unwrap_or_else(|err| {
        debug!("home directory unavailable: {err}");
        String::new()
    });
    platform.cache_dir = cache_dir(&platform.home_dir);
    platform.config_dirs = search::build(&CONFIG, &platform.home_dir, &[]);
    platform.data_dirs = search::build(&DATA, &platform.home_dir, &[]);

    platform.username = whoami::fallible::username().unwrap_or_default();
    platform.hostname = whoami::fallible::hostname().unwrap_or_default();
    platform.domain_name = domain_from_hostname(&platform.hostname);

    platform.system_name = System::name().unwrap_or_default();
    platform.system_release = System::kernel_version().unwrap_or_default();
    platform.system_version = System::os_version().unwrap_or_default();
    platform.system_architecture = canonical_arch(std::env::consts::ARCH).to_string();
}

fn home_dir() -> Result<String, PlatformError> {
    let home = dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)?;
    Ok(normalize_dir(&home.to_string_lossy()))
}

/// XDG cache location with the application leaf appended; falls back to
/// the `~/.cache/` convention, or empty when no home is known either.
fn cache_dir(home: &str) -> String {
    if let Some(cache) = dirs::cache_dir() {
        return format!("{}{CACHE_LEAF}", normalize_dir(&cache.to_string_lossy()));
    }
    if home.is_empty() {
        debug!("cache directory unavailable");
        return String::new();
    }
    format!("{home}.cache/{CACHE_LEAF}")
}

/// DNS domain of a fully qualified hostname; short hostnames yield ""
fn domain_from_hostname(hostname: &str) -> String {
    hostname
        .split_once('.')
        .map(|(_, domain)| domain.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn domain_comes_from_fqdn() {
        assert_eq!(domain_from_hostname("box.example.org"), "example.org");
        assert_eq!(domain_from_hostname("box"), "");
        assert_eq!(domain_from_hostname(""), "");
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[serial]
    fn cache_dir_honors_xdg_cache_home() {
        temp_env::with_vars([("XDG_CACHE_HOME", Some("/var/cache/u"))], || {
            assert_eq!(cache_dir("/home/u/"), "/var/cache/u/sysfetch/");
        });
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[serial]
    fn cache_dir_falls_back_to_home_convention() {
        // dirs::cache_dir only fails when no home is known at all, so the
        // fallback path is exercised directly.
        temp_env::with_vars([("XDG_CACHE_HOME", None::<&str>)], || {
            assert!(cache_dir("/home/u/").ends_with(".cache/sysfetch/"));
        });
    }

    #[test]
    fn empty_home_yields_empty_cache_only_without_native_source() {
        // With a native cache location available the home argument is not
        // consulted at all.
        let cache = cache_dir("");
        if !cache.is_empty() {
            assert!(cache.ends_with("sysfetch/"));
        }
    }
}
