//! Windows platform resolution
//!
//! Directories come from the known-folder locations exposed by `dirs`;
//! release and display version come from the CurrentVersion registry key
//! with tiered fallbacks; the architecture is mapped from the native
//! processor architecture code.

use std::path::PathBuf;
use std::ptr;

use tracing::debug;
use winapi::shared::minwindef::{DWORD, HKEY};
use winapi::shared::winerror::ERROR_SUCCESS;
use winapi::um::sysinfoapi::{
    ComputerNameDnsDomain, GetComputerNameExW, GetNativeSystemInfo, SYSTEM_INFO,
};
use winapi::um::winnt::{
    KEY_QUERY_VALUE, PROCESSOR_ARCHITECTURE_AMD64, PROCESSOR_ARCHITECTURE_ARM,
    PROCESSOR_ARCHITECTURE_ARM64, PROCESSOR_ARCHITECTURE_IA64, PROCESSOR_ARCHITECTURE_INTEL,
    PROCESSOR_ARCHITECTURE_MIPS, PROCESSOR_ARCHITECTURE_PPC,
};
use winapi::um::winreg::{
    HKEY_LOCAL_MACHINE, RRF_RT_REG_DWORD, RRF_RT_REG_SZ, RegCloseKey, RegGetValueW, RegOpenKeyExW,
};

use crate::error::PlatformError;
use crate::path_list::normalize_dir;
use crate::platform::{CACHE_LEAF, Platform};
use crate::search::{self, CONFIG, DATA};
use crate::version::{release_string, version_from_tiers};

const CURRENT_VERSION_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion";

pub(crate) fn resolve(platform: &mut Platform) {
    platform.home_dir = home_dir().unwrap_or_else(|err| {
        debug!("home directory unavailable: {err}");
        String::new()
    });
    platform.cache_dir = cache_dir(&platform.home_dir);
    platform.config_dirs = search::build(&CONFIG, &platform.home_dir, &config_known_folders());
    platform.data_dirs = search::build(&DATA, &platform.home_dir, &data_known_folders());

    platform.username = whoami::fallible::username().unwrap_or_default();
    platform.hostname = whoami::fallible::hostname().unwrap_or_default();
    platform.domain_name = domain_name().unwrap_or_else(|err| {
        debug!("domain name unavailable: {err}");
        String::new()
    });

    platform.system_name = "Windows_NT".to_string();
    system_release_and_version(platform);
    platform.system_architecture = system_architecture().to_string();
}

fn home_dir() -> Result<String, PlatformError> {
    let home = dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)?;
    Ok(normalize_dir(&home.to_string_lossy()))
}

/// Local app data with the application leaf appended; falls back to the
/// conventional profile-relative location, or empty when no home is known
/// either.
fn cache_dir(home: &str) -> String {
    if let Some(cache) = dirs::cache_dir() {
        return format!("{}{CACHE_LEAF}", normalize_dir(&cache.to_string_lossy()));
    }
    if home.is_empty() {
        debug!("cache directory unavailable");
        return String::new();
    }
    format!("{home}AppData/Local/{CACHE_LEAF}")
}

/// Roaming then local app data, searched for config files in that order
fn config_known_folders() -> Vec<String> {
    normalized_folders([dirs::config_dir(), dirs::config_local_dir()])
}

/// Roaming then local app data, searched for data files in that order
fn data_known_folders() -> Vec<String> {
    normalized_folders([dirs::data_dir(), dirs::data_local_dir()])
}

fn normalized_folders(folders: [Option<PathBuf>; 2]) -> Vec<String> {
    folders
        .into_iter()
        .flatten()
        .map(|folder| normalize_dir(&folder.to_string_lossy()))
        .collect()
}

fn domain_name() -> Result<String, PlatformError> {
    // First call reports the required length in characters including the
    // terminator; the buffer is sized to match and the call retried.
    let mut size: DWORD = 0;
    unsafe { GetComputerNameExW(ComputerNameDnsDomain, ptr::null_mut(), &mut size) };
    if size == 0 {
        return Ok(String::new());
    }

    let mut buffer = vec![0u16; size as usize];
    let ok = unsafe { GetComputerNameExW(ComputerNameDnsDomain, buffer.as_mut_ptr(), &mut size) };
    if ok == 0 {
        return Err(PlatformError::Lookup("GetComputerNameExW".to_string()));
    }

    Ok(String::from_utf16_lossy(&buffer[..size as usize]))
}

/// Release is `{version}.{build}.{ubr}` where each tier degrades
/// independently: major/minor numbers, else the CurrentVersion string,
/// else "0.0"; build and UBR default to zero.
fn system_release_and_version(platform: &mut Platform) {
    let key = match RegKey::open_local_machine(CURRENT_VERSION_KEY) {
        Ok(key) => key,
        Err(err) => {
            debug!("version key unavailable: {err}");
            return;
        }
    };

    let major_minor = key
        .dword_value("CurrentMajorVersionNumber")
        .and_then(|major| {
            key.dword_value("CurrentMinorVersionNumber")
                .map(|minor| (major, minor))
        })
        .ok();
    let fallback = if major_minor.is_none() {
        key.string_value("CurrentVersion").ok()
    } else {
        None
    };
    let version = version_from_tiers(major_minor, fallback);

    let build = key.string_value("CurrentBuildNumber").ok();
    let ubr = key.dword_value("UBR").ok();
    platform.system_release = release_string(&version, build, ubr);

    platform.system_version = key.string_value("DisplayVersion").unwrap_or_default();
}

/// Fixed mapping from native architecture codes to canonical names;
/// unrecognized codes yield "" (unknown).
fn system_architecture() -> &'static str {
    let mut info: SYSTEM_INFO = unsafe { std::mem::zeroed() };
    unsafe { GetNativeSystemInfo(&mut info) };

    match unsafe { info.u.s().wProcessorArchitecture } {
        PROCESSOR_ARCHITECTURE_AMD64 => "x86_64",
        PROCESSOR_ARCHITECTURE_ARM64 => "aarch64",
        PROCESSOR_ARCHITECTURE_INTEL => "x86",
        PROCESSOR_ARCHITECTURE_ARM => "arm",
        PROCESSOR_ARCHITECTURE_PPC => "ppc",
        PROCESSOR_ARCHITECTURE_MIPS => "mips",
        PROCESSOR_ARCHITECTURE_IA64 => "ia64",
        _ => "",
    }
}

/// Open registry key, closed on drop
struct RegKey(HKEY);

impl RegKey {
    fn open_local_machine(path: &str) -> Result<Self, PlatformError> {
        let path_w = wide(path);
        let mut key: HKEY = ptr::null_mut();
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_LOCAL_MACHINE,
                path_w.as_ptr(),
                0,
                KEY_QUERY_VALUE,
                &mut key,
            )
        };
        if status != ERROR_SUCCESS as i32 {
            return Err(PlatformError::Registry {
                value: path.to_string(),
                status,
            });
        }
        Ok(Self(key))
    }

    /// Read a string value: query the byte count first, size the buffer to
    /// match, then read.
    fn string_value(&self, value: &str) -> Result<String, PlatformError> {
        let value_w = wide(value);
        let mut size: DWORD = 0;
        let status = unsafe {
            RegGetValueW(
                self.0,
                ptr::null(),
                value_w.as_ptr(),
                RRF_RT_REG_SZ,
                ptr::null_mut(),
                ptr::null_mut(),
                &mut size,
            )
        };
        if status != ERROR_SUCCESS as i32 {
            return Err(PlatformError::Registry {
                value: value.to_string(),
                status,
            });
        }

        let mut buffer = vec![0u16; (size as usize).div_ceil(2)];
        let status = unsafe {
            RegGetValueW(
                self.0,
                ptr::null(),
                value_w.as_ptr(),
                RRF_RT_REG_SZ,
                ptr::null_mut(),
                buffer.as_mut_ptr().cast(),
                &mut size,
            )
        };
        if status != ERROR_SUCCESS as i32 {
            return Err(PlatformError::Registry {
                value: value.to_string(),
                status,
            });
        }

        let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
        Ok(String::from_utf16_lossy(&buffer[..len]))
    }

    fn dword_value(&self, value: &str) -> Result<u32, PlatformError> {
        let value_w = wide(value);
        let mut data: DWORD = 0;
        let mut size = std::mem::size_of::<DWORD>() as DWORD;
        let status = unsafe {
            RegGetValueW(
                self.0,
                ptr::null(),
                value_w.as_ptr(),
                RRF_RT_REG_DWORD,
                ptr::null_mut(),
                (&mut data as *mut DWORD).cast(),
                &mut size,
            )
        };
        if status != ERROR_SUCCESS as i32 {
            return Err(PlatformError::Registry {
                value: value.to_string(),
                status,
            });
        }
        Ok(data)
    }
}

impl Drop for RegKey {
    fn drop(&mut self) {
        unsafe {
            RegCloseKey(self.0);
        }
    }
}

fn wide(s: &str) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;
    std::ffi::OsStr::new(s)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}
