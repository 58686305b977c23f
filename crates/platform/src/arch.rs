//! Canonical CPU architecture names

/// Map a native architecture identifier to its canonical lowercase name.
///
/// Unrecognized identifiers map to the empty string ("unknown") rather
/// than failing.
pub fn canonical_arch(raw: &str) -> &'static str {
    match raw.to_ascii_lowercase().as_str() {
        "x86_64" | "amd64" | "x64" => "x86_64",
        "aarch64" | "arm64" => "aarch64",
        "x86" | "i386" | "i586" | "i686" => "x86",
        "arm" | "armv6l" | "armv7l" => "arm",
        "ppc" | "powerpc" => "ppc",
        "mips" => "mips",
        "ia64" => "ia64",
        _ => "",
    }
}
