use crate::config::ModuleFormat;
use std::borrow::Cow;

/// Bundler configuration error type.
#[derive(Debug, thiserror::Error)]
pub enum BundlerError {
    #[error("Base path '{base}' must be './' or start and end with '/'")]
    InvalidBasePath { base: String },

    #[error("Package '{package}' must be deduplicated to a single copy")]
    MissingDedupe { package: String },

    #[error("Package '{package}' is assigned to both chunk '{first}' and chunk '{second}'")]
    DuplicateChunkMember { package: String, first: String, second: String },

    #[error("Package '{package}' is listed more than once in chunk '{chunk}'")]
    RepeatedChunkMember { package: String, chunk: String },

    #[error("Chunk '{chunk}' has no packages")]
    EmptyChunk { chunk: String },

    #[error("Worker output format '{worker}' differs from main output format '{main}'")]
    WorkerFormatMismatch { worker: ModuleFormat, main: ModuleFormat },

    #[error("Worker bundle must inline dynamic imports into a single file")]
    WorkerNotInlined,

    #[error("Plugin order invalid: {message}")]
    PluginOrder { message: Cow<'static, str> },

    #[error("Worker plugins must use the same UI-framework plugin as the main bundle")]
    WorkerPluginMismatch,

    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

pub trait BundlerErrorExt<T> {
    /// Wraps a serialization failure with `context`.
    ///
    /// # Errors
    /// Returns [`BundlerError::Serialization`].
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, BundlerError>;
}

impl<T> BundlerErrorExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, BundlerError> {
        self.map_err(|source| BundlerError::Serialization { source, context: Some(context.into()) })
    }
}

impl From<serde_json::Error> for BundlerError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
