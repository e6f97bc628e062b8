use crate::error::PagesError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use suite_domain::constants::{GITHUB_HOST, PAGES_DOMAIN};

// optional scheme and user, the host itself must be `github.com`,
// then `:` or `/`, owner, repository, optional `.git`
static REMOTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z][A-Za-z0-9+.-]*://)?(?:[^@/:\s]+@)?github\.com[:/]([^/:\s]+)/([^/\s]+?)(?:\.git)?$",
    )
    .expect("remote pattern is valid")
});

/// Owner and repository name scraped from a remote URL.
///
/// Both parts are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDescriptor {
    owner: String,
    repository: String,
}

impl RemoteDescriptor {
    /// Extracts `owner/repository` from an HTTPS or SSH `github.com` URL.
    ///
    /// Surrounding whitespace is ignored and a trailing `.git` is stripped.
    ///
    /// # Errors
    /// Returns [`PagesError::UnrecognizedRemote`] if the URL does not match.
    pub fn parse(url: &str) -> Result<Self, PagesError> {
        let url = url.trim();
        let unrecognized = || PagesError::UnrecognizedRemote { url: url.to_owned(), context: None };

        let captures = REMOTE_PATTERN.captures(url).ok_or_else(unrecognized)?;
        let (Some(owner), Some(repository)) = (captures.get(1), captures.get(2)) else {
            return Err(unrecognized());
        };

        Ok(Self { owner: owner.as_str().to_owned(), repository: repository.as_str().to_owned() })
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// `https://github.com/<owner>/<repository>`
    #[must_use]
    pub fn repository_url(&self) -> String {
        format!("https://{GITHUB_HOST}/{}/{}", self.owner, self.repository)
    }

    #[must_use]
    pub fn settings_url(&self) -> String {
        format!("{}/settings/pages", self.repository_url())
    }

    #[must_use]
    pub fn actions_url(&self) -> String {
        format!("{}/actions", self.repository_url())
    }

    /// Public URL the application is served from.
    ///
    /// Pages subdomains are lowercase, so the owner is lower-cased; the
    /// repository keeps its case.
    #[must_use]
    pub fn hosting_url(&self, site_path: &str) -> String {
        let owner = self.owner.to_lowercase();
        let site_path = site_path.trim_matches('/');
        if site_path.is_empty() {
            format!("https://{owner}.{PAGES_DOMAIN}/{}/", self.repository)
        } else {
            format!("https://{owner}.{PAGES_DOMAIN}/{}/{site_path}/", self.repository)
        }
    }
}

impl fmt::Display for RemoteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_https_and_ssh_forms() {
        for url in [
            "https://github.com/Acme/widget.git",
            "https://github.com/Acme/widget",
            "git@github.com:Acme/widget.git",
            "ssh://git@github.com/Acme/widget.git",
            "https://token@github.com/Acme/widget\n",
        ] {
            let descriptor = RemoteDescriptor::parse(url).expect(url);
            assert_eq!(descriptor.owner(), "Acme", "{url}");
            assert_eq!(descriptor.repository(), "widget", "{url}");
        }
    }

    #[test]
    fn keeps_dots_inside_repository_names() {
        let descriptor = RemoteDescriptor::parse("git@github.com:acme/acme.github.io.git").unwrap();
        assert_eq!(descriptor.repository(), "acme.github.io");
    }

    #[test]
    fn rejects_foreign_hosts_and_malformed_paths() {
        for url in [
            "",
            "https://gitlab.com/acme/widget.git",
            "git@bitbucket.org:acme/widget.git",
            "https://github.com/acme",
            "https://github.com/acme/widget/",
            "https://github.com/acme/widget/tree/main",
            "https://gitlab.com/mirror/github.com/acme/widget.git",
            "https://notgithub.com/acme/widget.git",
            "git@evil.example:github.com/acme/widget.git",
            "https://github.com.evil.example/acme/widget.git",
        ] {
            let err = RemoteDescriptor::parse(url).expect_err(url);
            assert!(matches!(err, PagesError::UnrecognizedRemote { .. }), "{url}");
        }
    }

    #[test]
    fn hosting_url_lowercases_owner_only() {
        let descriptor = RemoteDescriptor::parse("https://github.com/Acme/widget.git").unwrap();
        assert_eq!(
            descriptor.hosting_url("3d-printer-suite"),
            "https://acme.github.io/widget/3d-printer-suite/"
        );

        let descriptor = RemoteDescriptor::parse("https://github.com/ACME/Widget").unwrap();
        assert_eq!(descriptor.hosting_url("/viewer/"), "https://acme.github.io/Widget/viewer/");
        assert_eq!(descriptor.hosting_url(""), "https://acme.github.io/Widget/");
    }

    #[test]
    fn github_links_keep_original_case() {
        let descriptor = RemoteDescriptor::parse("git@github.com:Acme/Widget.git").unwrap();
        assert_eq!(descriptor.to_string(), "Acme/Widget");
        assert_eq!(descriptor.settings_url(), "https://github.com/Acme/Widget/settings/pages");
        assert_eq!(descriptor.actions_url(), "https://github.com/Acme/Widget/actions");
    }
}
