//! Translation of libgit2 failures into short, user-facing reasons

use git2::{Error, ErrorClass, ErrorCode};

/// Interpret a git2 error and provide a more user-friendly message
pub fn interpret_git_error(err: &Error) -> String {
    let message = err.message().to_lowercase();

    if err.code() == ErrorCode::NotFound
        || message.contains("not found")
        || message.contains("404")
        || message.contains("too many redirects")
    {
        // A missing branch shows up as "reference not found" too, which is the common
        // case here since every variant key is a branch of the core repository.
        return "Repository or branch not found".to_string();
    }
    if err.code() == ErrorCode::Auth || message.contains("authentication") {
        return "Authentication failed".to_string();
    }
    if err.code() == ErrorCode::Certificate || message.contains("certificate") {
        return "Certificate error".to_string();
    }
    if message.contains("timed out") || message.contains("connection") {
        return "Network error".to_string();
    }

    match err.class() {
        ErrorClass::Http => format!("HTTP error: {}", err.message()),
        ErrorClass::Ssh => format!("SSH error: {}", err.message()),
        _ => err.message().to_string(),
    }
}
