use anyhow::Result;
use console::{Term, style};
use sysfetch_platform::Platform;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    // Resolved once; everything below only reads the record
    let platform = Platform::resolve();
    let term = Term::stdout();

    term.write_line(&format!(
        "{} sysfetch v{}",
        style("::").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    ))?;
    term.write_line("")?;

    write_field(&term, "User", &platform.username)?;
    write_field(&term, "Host", &platform.hostname)?;
    write_field(&term, "Domain", &platform.domain_name)?;
    write_field(&term, "OS", &platform.system_name)?;
    write_field(&term, "Release", &platform.system_release)?;
    write_field(&term, "Version", &platform.system_version)?;
    write_field(&term, "Arch", &platform.system_architecture)?;
    write_field(&term, "Home", &platform.home_dir)?;
    write_field(&term, "Cache", &platform.cache_dir)?;

    term.write_line("")?;
    write_dirs(&term, "Config dirs", platform.config_dirs.iter())?;
    write_dirs(&term, "Data dirs", platform.data_dirs.iter())?;

    Ok(())
}

fn write_field(term: &Term, label: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        term.write_line(&format!("  {label:<8} {}", style("unknown").dim()))?;
    } else {
        term.write_line(&format!("  {label:<8} {value}"))?;
    }
    Ok(())
}

fn write_dirs<'a>(
    term: &Term,
    label: &str,
    dirs: impl Iterator<Item = &'a str>,
) -> Result<()> {
    term.write_line(&format!("  {}", style(label).bold()))?;
    for dir in dirs {
        term.write_line(&format!("    {dir}"))?;
    }
    Ok(())
}
