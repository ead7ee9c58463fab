//! Git error handling
//!
//! This module handles:
//! - Interpreting git2 errors into user-friendly messages
//! - Telling "ref does not exist" apart from real failures

use git2::{Error, ErrorClass, ErrorCode};

/// Internal enum for error type classification
#[derive(Clone, Copy)]
enum ErrorKind {
    RemoteNotFound,
    AuthenticationFailed,
    PermissionDenied,
    NetworkError,
    HttpCertificate,
    HttpSsl,
    Other(ErrorClass),
}

type ErrorCheck = fn(&str, ErrorClass) -> bool;

const ERROR_CLASSIFICATIONS: &[(ErrorCheck, ErrorKind)] = &[
    (
        |msg, class| {
            matches!(class, ErrorClass::Http | ErrorClass::Net | ErrorClass::Ssh)
                && (msg.contains("not found")
                    || msg.contains("404")
                    || msg.contains("too many redirects")
                    || msg.contains("authentication replays"))
        },
        ErrorKind::RemoteNotFound,
    ),
    (
        |msg, _| msg.contains("authentication") || msg.contains("credentials"),
        ErrorKind::AuthenticationFailed,
    ),
    (
        |msg, _| msg.contains("permission denied") || msg.contains("access denied"),
        ErrorKind::PermissionDenied,
    ),
    (
        |msg, _| {
            msg.contains("connection")
                || msg.contains("network")
                || msg.contains("timeout")
                || msg.contains("timed out")
        },
        ErrorKind::NetworkError,
    ),
    (
        |msg, class| class == ErrorClass::Http && msg.contains("certificate"),
        ErrorKind::HttpCertificate,
    ),
    (
        |msg, class| class == ErrorClass::Http && msg.contains("ssl"),
        ErrorKind::HttpSsl,
    ),
];

fn classify(msg: &str, class: ErrorClass) -> ErrorKind {
    ERROR_CLASSIFICATIONS
        .iter()
        .find(|(check, _)| check(msg, class))
        .map_or(ErrorKind::Other(class), |(_, kind)| *kind)
}

/// Interpret a git2 error and provide a more user-friendly message
pub fn interpret_git_error(err: &Error) -> String {
    let message = err.message().to_lowercase();

    match classify(&message, err.class()) {
        ErrorKind::RemoteNotFound => "Remote repository not found".to_string(),
        ErrorKind::AuthenticationFailed => "Authentication failed".to_string(),
        ErrorKind::PermissionDenied => "Permission denied".to_string(),
        ErrorKind::NetworkError => "Network error".to_string(),
        ErrorKind::HttpCertificate => "Certificate error".to_string(),
        ErrorKind::HttpSsl => "SSL error".to_string(),
        ErrorKind::Other(ErrorClass::Http) => format!("HTTP error: {}", err.message()),
        ErrorKind::Other(ErrorClass::Ssh) => format!("SSH error: {}", err.message()),
        ErrorKind::Other(_) => err.message().to_string(),
    }
}

/// Whether a lookup error means "there is no such ref"
///
/// Invalid ref names (such as `HEAD~1` or `abc..def`) can never name a ref, so
/// they count as missing too.
pub fn is_missing_ref(err: &Error) -> bool {
    matches!(err.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error() {
        let err = Error::new(
            ErrorCode::GenericError,
            ErrorClass::Net,
            "failed to connect: Connection refused",
        );
        assert_eq!(interpret_git_error(&err), "Network error");
    }

    #[test]
    fn test_auth_error() {
        let err = Error::new(ErrorCode::Auth, ErrorClass::Http, "authentication required");
        assert_eq!(interpret_git_error(&err), "Authentication failed");
    }

    #[test]
    fn test_remote_not_found() {
        let err = Error::new(
            ErrorCode::GenericError,
            ErrorClass::Http,
            "unexpected http status code: 404",
        );
        assert_eq!(interpret_git_error(&err), "Remote repository not found");
    }

    #[test]
    fn test_missing_reference_keeps_message() {
        // A local "not found" is not a remote repository problem
        let err = Error::new(
            ErrorCode::NotFound,
            ErrorClass::Reference,
            "reference 'refs/heads/nope' not found",
        );
        assert_eq!(
            interpret_git_error(&err),
            "reference 'refs/heads/nope' not found"
        );
    }

    #[test]
    fn test_ssh_error_has_prefix() {
        let err = Error::new(ErrorCode::GenericError, ErrorClass::Ssh, "handshake failed");
        assert_eq!(interpret_git_error(&err), "SSH error: handshake failed");
    }

    #[test]
    fn test_is_missing_ref() {
        let not_found = Error::new(ErrorCode::NotFound, ErrorClass::Reference, "no ref");
        assert!(is_missing_ref(&not_found));

        let invalid = Error::new(ErrorCode::InvalidSpec, ErrorClass::Reference, "bad name");
        assert!(is_missing_ref(&invalid));

        let io = Error::new(ErrorCode::GenericError, ErrorClass::Os, "disk on fire");
        assert!(!is_missing_ref(&io));
    }
}
