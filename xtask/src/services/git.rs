use std::process::{Command, Stdio};
use suite_pages::{PagesError, PagesErrorExt};

/// Reads a remote URL through the `git` command line.
///
/// This is the only place the toolkit shells out for the pages checklist;
/// everything downstream works on the returned string.
#[derive(Debug)]
pub struct GitRemote {
    binary: String,
    remote: String,
}

impl GitRemote {
    #[must_use]
    pub fn new(binary: impl Into<String>, remote: impl Into<String>) -> Self {
        Self { binary: binary.into(), remote: remote.into() }
    }

    /// Runs `git remote get-url <remote>` in the working directory.
    ///
    /// # Errors
    /// Returns [`PagesError::RemoteLookup`] if `git` cannot be started, exits
    /// unsuccessfully (not a repository, unknown remote), or prints nothing.
    pub fn url(&self) -> Result<String, PagesError> {
        self.lookup().context(format!("remote '{}'", self.remote))
    }

    fn lookup(&self) -> Result<String, PagesError> {
        let output = Command::new(&self.binary)
            .args(["remote", "get-url", &self.remote])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| PagesError::RemoteLookup {
                message: format!("failed to execute {}: {e}", self.binary).into(),
                context: None,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("{} exited with {}", self.binary, output.status),
                reason => reason.to_owned(),
            };
            return Err(PagesError::RemoteLookup { message: message.into(), context: None });
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_owned();
        if url.is_empty() {
            return Err(PagesError::RemoteLookup {
                message: "git printed an empty remote URL".into(),
                context: None,
            });
        }

        tracing::debug!(remote = %self.remote, %url, "Resolved remote URL");
        Ok(url)
    }
}

#[test]
fn missing_binary_is_a_lookup_error() {
    let remote = GitRemote::new("definitely-not-a-git-binary", "origin");
    let err = remote.url().unwrap_err();
    assert!(matches!(err, PagesError::RemoteLookup { context: Some(_), .. }));
    assert!(err.to_string().contains("remote 'origin'"), "got: {err}");
}
