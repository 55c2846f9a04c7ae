use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("No guestbook configured (pass --url or --file, or set `url` in config.toml)")]
    MissingStore,

    #[error("Invalid {key} \"{input}\" in config")]
    InvalidConfig { key: &'static str, input: String },

    #[error("Failed to read input: {0}")]
    Input(std::io::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Fetch(#[from] FetchError),
}

/// Rejections raised before a new entry is encoded.
///
/// `Display` is the exact wording shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Please enter a name")]
    EmptyName,

    #[error("Your name cannot include a tilda (~)")]
    NameHasTilde,

    #[error("Your name cannot include a grave (`)")]
    NameHasGrave,

    #[error("Please enter a message")]
    EmptyMessage,

    #[error("Your message cannot include a grave (`)")]
    MessageHasGrave,
}

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Request worker panicked")]
    WorkerPanicked,
}
