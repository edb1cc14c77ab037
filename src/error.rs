//! Error handling for cloudsub

use thiserror::Error;

/// Main error type for cloudsub
#[derive(Error, Debug, Clone)]
pub enum CloudSubError {
    #[error("{message}")]
    Usage { message: String },

    #[error("Cannot read file '{path}': {message}")]
    FileAccess { path: String, message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        url: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CloudSubError {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a file access error
    pub fn file_access(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>, url: Option<String>) -> Self {
        Self::Network {
            message: message.into(),
            url,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Usage { message } => message.clone(),
            Self::FileAccess { path, message } => {
                format!(
                    "❌ Cannot read wordlist '{}': {}\n💡 Install SecLists or set CLOUDSUB_WORDLIST to a readable file",
                    path, message
                )
            }
            Self::Network { message, url } => {
                let target = url.as_ref().map_or(String::new(), |u| format!(" ({})", u));
                format!("❌ Network error{}: {}\n💡 Check your internet connection", target, message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or environment", message)
            }
        }
    }
}

impl From<reqwest::Error> for CloudSubError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string());
        if err.is_builder() {
            Self::config(format!("Failed to build HTTP client: {}", err))
        } else {
            Self::network(err.to_string(), url)
        }
    }
}

impl From<std::io::Error> for CloudSubError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CloudSubError>;
