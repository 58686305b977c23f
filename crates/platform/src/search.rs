//! XDG-style search path construction
//!
//! Candidates are appended in strict precedence order: environment
//! override, home-relative convention path, OS known folders, bare home,
//! compatibility-shell candidates, then the system-wide directory list.
//! Sources that yield nothing are skipped; `PathList` handles
//! normalization and deduplication.

use crate::path_list::PathList;
use std::env;
use tracing::trace;

/// Variable names and convention paths for one directory kind
pub(crate) struct SearchSpec {
    /// Environment override, e.g. `XDG_CONFIG_HOME`
    pub env_home: &'static str,
    /// Home-relative convention path, e.g. `.config/`
    pub home_suffix: &'static str,
    /// System-wide list variable, e.g. `XDG_CONFIG_DIRS`
    pub env_dirs: &'static str,
}

pub(crate) const CONFIG: SearchSpec = SearchSpec {
    env_home: "XDG_CONFIG_HOME",
    home_suffix: ".config/",
    env_dirs: "XDG_CONFIG_DIRS",
};

pub(crate) const DATA: SearchSpec = SearchSpec {
    env_home: "XDG_DATA_HOME",
    home_suffix: ".local/share/",
    env_dirs: "XDG_DATA_DIRS",
};

/// Build one search path list.
///
/// `home` is the already-normalized home directory (empty if unresolved;
/// home-relative candidates are then skipped). `known_folders` are
/// OS-native locations that slot in between the home convention path and
/// the bare-home fallback.
pub(crate) fn build(spec: &SearchSpec, home: &str, known_folders: &[String]) -> PathList {
    let mut dirs = PathList::new();

    push_env(&mut dirs, spec.env_home);

    if !home.is_empty() {
        dirs.push(join_dir(home, spec.home_suffix));
    }

    for folder in known_folders {
        dirs.push(folder);
    }

    if !home.is_empty() {
        dirs.push(home);
    }

    // MSYS2 / Git Bash keeps its own POSIX home in $HOME
    if env::var_os("MSYSTEM").is_some() {
        if let Some(posix_home) = env_nonempty("HOME") {
            dirs.push(join_dir(&posix_home, spec.home_suffix));
            dirs.push(&posix_home);
        }
    }

    push_env_list(&mut dirs, spec.env_dirs);

    dirs
}

/// Join a suffix onto a base directory without doubling separators
pub(crate) fn join_dir(base: &str, suffix: &str) -> String {
    format!("{}/{}", base.trim_end_matches(['/', '\\']), suffix)
}

fn env_nonempty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn push_env(dirs: &mut PathList, name: &str) {
    match env_nonempty(name) {
        Some(value) => dirs.push(value),
        None => trace!("{name} unset, skipping"),
    }
}

fn push_env_list(dirs: &mut PathList, name: &str) {
    let Some(value) = env_nonempty(name) else {
        trace!("{name} unset, skipping");
        return;
    };
    for entry in value.split(LIST_SEPARATOR).filter(|entry| !entry.is_empty()) {
        dirs.push(entry);
    }
}

#[cfg(windows)]
const LIST_SEPARATOR: char = ';';

#[cfg(not(windows))]
const LIST_SEPARATOR: char = ':';
