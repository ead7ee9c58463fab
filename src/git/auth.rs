//! Credentials for fetching remotes
//!
//! Remotes are fetched with whatever git itself would use, tried in order:
//! - Default credentials (negotiate / public repositories)
//! - The SSH agent, then the usual keys in ~/.ssh/, one per attempt
//! - Configured credential helpers
//!
//! Nothing is ever prompted for. A remote that needs interactive input fails
//! the refresh, which is fatal for the resolution.

use std::path::{Path, PathBuf};

use git2::{Cred, CredentialType, Error, ErrorClass, ErrorCode, RemoteCallbacks};

const SSH_KEY_NAMES: &[&str] = &["id_ed25519", "id_rsa", "id_ecdsa"];

/// Agent, every key file, plus one default or helper attempt
const MAX_ATTEMPTS: usize = SSH_KEY_NAMES.len() + 2;

fn auth_failed(message: &str) -> Error {
    Error::new(ErrorCode::Auth, ErrorClass::Http, message)
}

/// A private key file and its `.pub` companion, if present
#[derive(Debug, Clone, PartialEq, Eq)]
struct SshKey {
    private_key: PathBuf,
    public_key: Option<PathBuf>,
}

/// What to offer on a given SSH attempt
#[derive(Debug, Clone, PartialEq, Eq)]
enum SshAttempt {
    Agent,
    KeyFile(SshKey),
}

fn ssh_key_candidates(ssh_dir: &Path) -> Vec<SshKey> {
    SSH_KEY_NAMES
        .iter()
        .map(|name| ssh_dir.join(name))
        .filter(|private_key| private_key.exists())
        .map(|private_key| {
            let public_key = private_key.with_extension("pub");
            let public_key = public_key.exists().then_some(public_key);
            SshKey {
                private_key,
                public_key,
            }
        })
        .collect()
}

/// The agent is offered first, then each key file in turn
///
/// libgit2 only calls back again once the previous credential was rejected,
/// so the attempt number is enough to move down the list.
fn ssh_attempt(attempt: usize, keys: &[SshKey]) -> Option<SshAttempt> {
    match attempt {
        0 => Some(SshAttempt::Agent),
        n => keys.get(n - 1).cloned().map(SshAttempt::KeyFile),
    }
}

fn ssh_credentials(username: &str, attempt: SshAttempt) -> std::result::Result<Cred, Error> {
    match attempt {
        SshAttempt::Agent => Cred::ssh_key_from_agent(username),
        SshAttempt::KeyFile(key) => Cred::ssh_key(
            username,
            key.public_key.as_deref(),
            &key.private_key,
            None,
        ),
    }
}

fn helper_credentials(url: &str, username: Option<&str>) -> std::result::Result<Cred, Error> {
    let config = git2::Config::open_default()?;
    Cred::credential_helper(&config, url, username)
        .map_err(|_| auth_failed("no credential helper provided credentials"))
}

/// Install the credentials callback on a set of remote callbacks
///
/// libgit2 keeps calling the callback while authentication fails, so the
/// number of attempts is capped to avoid looping on a rejected credential.
pub fn setup_auth_callbacks(callbacks: &mut RemoteCallbacks<'_>) {
    let mut attempts = 0usize;
    let mut ssh_attempts = 0usize;
    let mut ssh_keys: Option<Vec<SshKey>> = None;
    callbacks.credentials(move |url, username_from_url, allowed_types| {
        attempts += 1;
        if attempts > MAX_ATTEMPTS {
            return Err(auth_failed("authentication failed"));
        }

        if allowed_types.contains(CredentialType::DEFAULT) {
            return Cred::default();
        }

        if allowed_types.contains(CredentialType::SSH_KEY) {
            let keys = ssh_keys.get_or_insert_with(|| {
                ssh_key_candidates(&dirs::home_dir().unwrap_or_default().join(".ssh"))
            });
            let attempt = ssh_attempt(ssh_attempts, keys)
                .ok_or_else(|| auth_failed("no usable SSH key found"))?;
            ssh_attempts += 1;
            return ssh_credentials(username_from_url.unwrap_or("git"), attempt);
        }

        if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
            return helper_credentials(url, username_from_url);
        }

        Err(auth_failed("authentication failed"))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_auth_failed_is_auth_code() {
        let err = auth_failed("nope");
        assert_eq!(err.code(), ErrorCode::Auth);
        assert_eq!(err.message(), "nope");
    }

    #[test]
    fn test_ssh_key_candidates_pairs_public_keys() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("id_rsa"), "private").unwrap();
        std::fs::write(temp.path().join("id_rsa.pub"), "public").unwrap();
        std::fs::write(temp.path().join("id_ecdsa"), "private").unwrap();

        let keys = ssh_key_candidates(temp.path());
        assert_eq!(
            keys,
            vec![
                SshKey {
                    private_key: temp.path().join("id_rsa"),
                    public_key: Some(temp.path().join("id_rsa.pub")),
                },
                SshKey {
                    private_key: temp.path().join("id_ecdsa"),
                    public_key: None,
                },
            ]
        );
    }

    #[test]
    fn test_ssh_key_file_offered_after_agent() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("id_ed25519"), "private").unwrap();
        std::fs::write(temp.path().join("id_rsa"), "private").unwrap();
        let keys = ssh_key_candidates(temp.path());

        // The agent credential is built even without a running agent, so
        // the key files must come from later attempts
        assert!(Cred::ssh_key_from_agent("git").is_ok());

        assert_eq!(ssh_attempt(0, &keys), Some(SshAttempt::Agent));
        assert_eq!(
            ssh_attempt(1, &keys),
            Some(SshAttempt::KeyFile(keys[0].clone()))
        );
        assert_eq!(
            ssh_attempt(2, &keys),
            Some(SshAttempt::KeyFile(keys[1].clone()))
        );
        assert_eq!(ssh_attempt(3, &keys), None);
    }

    #[test]
    fn test_ssh_key_file_credential_is_built() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("id_ed25519"), "private").unwrap();
        let keys = ssh_key_candidates(temp.path());

        let attempt = ssh_attempt(1, &keys).unwrap();
        let cred = ssh_credentials("git", attempt).unwrap();
        assert!(cred.has_username());
    }

    #[test]
    fn test_ssh_attempts_without_keys_stop_after_agent() {
        assert_eq!(ssh_attempt(0, &[]), Some(SshAttempt::Agent));
        assert_eq!(ssh_attempt(1, &[]), None);
    }
}
