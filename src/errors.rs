use std::fmt;

pub enum AppError {
    Config(String),
    Credential(String),
    Sheets(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "{}", msg),
            AppError::Credential(msg) => write!(f, "{}", msg),
            AppError::Sheets(msg) => write!(f, "{}", msg),
        }
    }
}
