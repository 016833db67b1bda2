#![forbid(unsafe_code)]

#[derive(Debug)]
pub enum SuggestError {
    /// No credential provisioned; the call fails before any request is made.
    MissingCredential,
    Transport(reqwest::Error),
    Status { code: u16, message: String },
    MalformedResponse,
}

impl std::fmt::Display for SuggestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential => {
                write!(f, "API key not configured; set GEMINI_API_KEY in the environment")
            }
            Self::Transport(err) => write!(f, "transport: {err}"),
            Self::Status { code, message } => write!(f, "upstream status {code}: {message}"),
            Self::MalformedResponse => write!(f, "upstream response had no text candidate"),
        }
    }
}

impl std::error::Error for SuggestError {}

impl From<reqwest::Error> for SuggestError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Failure as the inline string the caller merges into the same field a
/// successful response would have filled. Collaborator trouble is never
/// thrown through the editing state machine.
pub fn inline_error(err: &SuggestError) -> String {
    format!("Error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_error_carries_the_error_prefix() {
        let rendered = inline_error(&SuggestError::MissingCredential);
        assert!(rendered.starts_with("Error: "));
        assert!(rendered.contains("GEMINI_API_KEY"));
    }
}
