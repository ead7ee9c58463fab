//! Ref namespace classification
//!
//! A fully-qualified ref name lives in exactly one namespace. Only the three
//! namespaces a diff base can point into are recognized here.

const REMOTES_PREFIX: &str = "refs/remotes/";
const HEADS_PREFIX: &str = "refs/heads/";
const TAGS_PREFIX: &str = "refs/tags/";

/// A fully-qualified ref name split into its namespace and short name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefNamespace {
    /// `refs/remotes/<remote>/<branch>`, holding `<remote>/<branch>`
    Remote(String),
    /// `refs/heads/<branch>`, holding `<branch>`
    Local(String),
    /// `refs/tags/<tag>`, holding `<tag>`
    Tag(String),
}

impl RefNamespace {
    /// Classify a fully-qualified ref name
    ///
    /// Prefixes are tested remote first, then local heads, then tags.
    /// Returns `None` for names outside these namespaces (e.g. a detached `HEAD`
    /// or `refs/notes/...`).
    pub fn classify(full_name: &str) -> Option<Self> {
        if let Some(short) = full_name.strip_prefix(REMOTES_PREFIX) {
            return Some(RefNamespace::Remote(short.to_string()));
        }
        if let Some(short) = full_name.strip_prefix(HEADS_PREFIX) {
            return Some(RefNamespace::Local(short.to_string()));
        }
        full_name
            .strip_prefix(TAGS_PREFIX)
            .map(|short| RefNamespace::Tag(short.to_string()))
    }
}

/// Split `<remote>/<branch>` using the configured remote names
///
/// When several remotes match (e.g. `origin` and `origin/mirror`), the longest
/// one wins.
pub fn split_remote_branch<'a, S: AsRef<str>>(
    short_name: &'a str,
    remotes: &[S],
) -> Option<(String, &'a str)> {
    remotes
        .iter()
        .map(|remote| remote.as_ref())
        .filter_map(|remote| {
            short_name
                .strip_prefix(remote)
                .and_then(|rest| rest.strip_prefix('/'))
                .filter(|branch| !branch.is_empty())
                .map(|branch| (remote, branch))
        })
        .max_by_key(|(remote, _)| remote.len())
        .map(|(remote, branch)| (remote.to_string(), branch))
}
