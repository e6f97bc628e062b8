//! # Pages
//!
//! Builds the static-site hosting checklist for the repository behind a git
//! remote URL. Everything here is pure: the caller fetches the URL (one
//! subprocess at the process boundary) and hands it in.
//!
//! ```rust
//! use suite_pages::run;
//!
//! let checklist = run("git@github.com:Acme/widget.git", "3d-printer-suite").unwrap();
//! assert_eq!(checklist.hosting_url(), "https://acme.github.io/widget/3d-printer-suite/");
//! ```

mod checklist;
mod error;
mod remote;

pub use crate::checklist::{Checklist, Section, SectionKind};
pub use crate::error::{PagesError, PagesErrorExt};
pub use crate::remote::RemoteDescriptor;

/// Parses `remote_url` and builds the checklist for `site_path`.
///
/// # Errors
/// Returns [`PagesError::UnrecognizedRemote`] if the URL is not a `github.com`
/// owner/repository URL. Nothing is rendered in that case.
pub fn run(remote_url: &str, site_path: &str) -> Result<Checklist, PagesError> {
    let descriptor = RemoteDescriptor::parse(remote_url)?;
    tracing::debug!(
        owner = descriptor.owner(),
        repository = descriptor.repository(),
        "Parsed remote"
    );
    Ok(Checklist::new(&descriptor, site_path))
}
