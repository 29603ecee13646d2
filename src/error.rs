use thiserror::Error;

/// Configuration errors raised while building the initializer table.
///
/// Both variants indicate a mistake in how the steps were declared, not a
/// runtime condition: they are reported once, at registration, and never
/// retried. Failures inside a running step are not represented here; the
/// runner does not intercept them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("duplicate order key {key}: `{existing}` and `{incoming}`")]
    DuplicateKey {
        key: isize,
        existing: String,
        incoming: String,
    },
    #[error("error in initializers: order key in `{name}` does not fit a native integer")]
    MalformedOrderKey { name: String },
}
