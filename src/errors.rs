//! Crate-specific error and result types, plus common conversions.

use ::std::fmt::{self, Display};

use ::thiserror::Error as ThisError;

/// Result type returned by fallible keyboard, injection and settings
/// operations.
pub type Result<T> = ::std::result::Result<T, Error>;

/// The category of failure, independent of any context attached along the
/// way.
#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The bound injection target does not accept edits.
    #[error("injection target is read-only")]
    ReadOnlyTarget,

    /// The bound injection target refused the edit for a reason of its own.
    /// Returned by embedder-implemented [`InjectionTarget`]s, such as a field
    /// with a length limit.
    ///
    /// [`InjectionTarget`]: crate::inject::InjectionTarget
    #[error("injection target rejected the edit: {0}")]
    TargetRejected(String),

    /// A locale name which does not name any known layout.
    #[error("unknown keyboard layout `{0}`")]
    UnknownLocale(String),

    /// A key name which does not name any key, modifier or special key.
    #[error("unknown key `{0}`")]
    UnknownKey(String),

    /// Persisted settings could not be parsed.
    #[error("malformed keyboard settings: {0}")]
    SettingsParse(String),

    /// Settings could not be serialized.
    #[error("failed to serialize keyboard settings: {0}")]
    SettingsSerialize(String),

    /// A persisted settings value was present but not usable.
    #[error("invalid value `{value}` for setting `{key}`")]
    InvalidSetting { key: &'static str, value: String },
}

/// Error type for the crate. The error captures the [`ErrorKind`] and, where
/// available, a description of what was happening at the time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,

    /// An optional context information which describes what was happening
    /// at the time error.
    context: Option<String>,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { kind, context } = &self;

        if let Some(context) = context {
            write!(f, "{context}\nCaused by:\n    {kind}")
        } else {
            write!(f, "{kind}")
        }
    }
}

impl ::std::error::Error for Error {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl Error {
    /// Returns the category of the failure.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the context message, if any was attached.
    pub fn context_message(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }
}

impl From<::toml::de::Error> for Error {
    fn from(err: ::toml::de::Error) -> Self {
        ErrorKind::SettingsParse(err.to_string()).into()
    }
}

impl From<::toml::ser::Error> for Error {
    fn from(err: ::toml::ser::Error) -> Self {
        ErrorKind::SettingsSerialize(err.to_string()).into()
    }
}

/// A crate-private trait which allows context information to be attached to
/// fallible types.
pub(crate) trait Context<T> {
    /// Attach a context message to a fallible type and return crate error.
    fn context(self, ctx: impl AsRef<str>) -> Result<T>
    where
        Self: Sized;
}

impl<T> Context<T> for Result<T> {
    fn context(mut self, ctx: impl AsRef<str>) -> Result<T>
    where
        Self: Sized,
    {
        if let Err(err) = &mut self {
            err.context = Some(ctx.as_ref().to_owned());
        }
        self
    }
}

impl<T> Context<T> for ::std::result::Result<T, ErrorKind> {
    fn context(self, ctx: impl AsRef<str>) -> Result<T> {
        self.map_err(|kind| Error {
            kind,
            context: Some(ctx.as_ref().to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_display_without_context() {
        let err: Error = ErrorKind::ReadOnlyTarget.into();
        assert_eq!(err.to_string(), "injection target is read-only");
    }

    #[test]
    fn test_display_with_context() {
        let res: Result<()> = Err(ErrorKind::UnknownLocale("Klingon".into()).into());
        let err = res.context("Failed to load keyboard settings").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to load keyboard settings\nCaused by:\n    unknown keyboard layout `Klingon`"
        );
        assert_eq!(err.kind(), &ErrorKind::UnknownLocale("Klingon".into()));
    }

    #[test]
    fn test_context_on_error_kind() {
        let res: ::std::result::Result<(), ErrorKind> = Err(ErrorKind::ReadOnlyTarget);
        let err = res.context("Typing into target").unwrap_err();

        assert_eq!(err.context_message(), Some("Typing into target"));
        assert_eq!(err.kind(), &ErrorKind::ReadOnlyTarget);
    }
}
