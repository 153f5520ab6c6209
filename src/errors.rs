use std::fmt;

#[derive(Debug, Clone)]
pub enum JshortError {
    Validation(String),
    Submission(String),
    FileOperation(String),
    Serialization(String),
    Clipboard(String),
    NotFound(String),
}

impl JshortError {
    pub fn code(&self) -> &'static str {
        match self {
            JshortError::Validation(_) => "E001",
            JshortError::Submission(_) => "E002",
            JshortError::FileOperation(_) => "E003",
            JshortError::Serialization(_) => "E004",
            JshortError::Clipboard(_) => "E005",
            JshortError::NotFound(_) => "E006",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            JshortError::Validation(_) => "Validation Error",
            JshortError::Submission(_) => "Submission Error",
            JshortError::FileOperation(_) => "File Operation Error",
            JshortError::Serialization(_) => "Serialization Error",
            JshortError::Clipboard(_) => "Clipboard Error",
            JshortError::NotFound(_) => "Resource Not Found",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            JshortError::Validation(msg) => msg,
            JshortError::Submission(msg) => msg,
            JshortError::FileOperation(msg) => msg,
            JshortError::Serialization(msg) => msg,
            JshortError::Clipboard(msg) => msg,
            JshortError::NotFound(msg) => msg,
        }
    }

    /// Format as simple output (CLI mode)
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }
}

impl fmt::Display for JshortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for JshortError {}

// Convenience constructors
impl JshortError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        JshortError::Validation(msg.into())
    }

    pub fn submission<T: Into<String>>(msg: T) -> Self {
        JshortError::Submission(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        JshortError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        JshortError::Serialization(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        JshortError::Clipboard(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        JshortError::NotFound(msg.into())
    }
}

impl From<std::io::Error> for JshortError {
    fn from(err: std::io::Error) -> Self {
        JshortError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for JshortError {
    fn from(err: serde_json::Error) -> Self {
        JshortError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for JshortError {
    fn from(err: chrono::ParseError) -> Self {
        JshortError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, JshortError>;
