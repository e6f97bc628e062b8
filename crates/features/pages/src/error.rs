use std::borrow::Cow;

/// Pages checker error type.
#[derive(Debug, thiserror::Error)]
pub enum PagesError {
    /// The version-control tool could not report the remote URL.
    #[error("Remote lookup failed{}: {message}", format_context(.context))]
    RemoteLookup { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The remote URL is not a `github.com` owner/repository URL.
    #[error("Unrecognized remote URL{}: '{url}' is not a github.com owner/repository URL", format_context(.context))]
    UnrecognizedRemote { url: String, context: Option<Cow<'static, str>> },
}

pub trait PagesErrorExt<T> {
    /// Attaches `context` to a [`PagesError`].
    ///
    /// # Errors
    /// Returns the original error with the context set.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PagesError>;
}

impl<T> PagesErrorExt<T> for Result<T, PagesError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                PagesError::RemoteLookup { context: c, .. }
                | PagesError::UnrecognizedRemote { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
