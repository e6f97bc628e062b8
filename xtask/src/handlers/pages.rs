use crate::services::git::GitRemote;
use anyhow::Result;
use suite_kernel::domain::config::PagesConfig;

/// Prints the GitHub Pages checklist for the configured remote.
///
/// Nothing is printed unless the remote was read and recognized.
///
/// # Errors
/// Returns an error if the remote cannot be read or is not a `github.com` URL.
pub fn check_pages(config: &PagesConfig) -> Result<()> {
    let url = GitRemote::new(&config.git_binary, &config.remote).url()?;
    let checklist = suite_pages::run(&url, &config.site_path)?;

    print!("{checklist}");
    Ok(())
}
