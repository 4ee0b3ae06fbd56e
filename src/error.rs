/// Failures crossing the service boundary.
///
/// Every variant is caught at the operation boundary and turned into a
/// single notification; none of them end the session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConsoleError {
    /// Service unreachable, timed out, or answered with a bare HTTP error.
    #[error("transport error: {0}")]
    Transport(String),

    /// Service answered with a structured failure; the message is shown verbatim.
    #[error("{0}")]
    Service(String),

    /// Response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

impl ConsoleError {
    /// Text for the user-facing notification. Service messages pass through,
    /// everything else collapses to the operation's generic message.
    pub fn notification_text(&self, generic: &str) -> String {
        match self {
            ConsoleError::Service(message) => format!("Error: {message}"),
            ConsoleError::Transport(_) | ConsoleError::Decode(_) => generic.to_string(),
        }
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ConsoleError::Decode(err.to_string())
        } else {
            ConsoleError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_text() {
        let service = ConsoleError::Service("File 'posts.csv' not found".to_string());
        assert_eq!(
            service.notification_text("Import error"),
            "Error: File 'posts.csv' not found"
        );

        let transport = ConsoleError::Transport("connection refused".to_string());
        assert_eq!(transport.notification_text("Import error"), "Import error");

        let decode = ConsoleError::Decode("expected value".to_string());
        assert_eq!(decode.notification_text("Search error"), "Search error");
    }
}
