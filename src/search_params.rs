//! Query-string editing against an explicit location value.

use url::form_urlencoded;

/// A browsing location: path plus raw query string (no leading `?`).
///
/// Stands in for the hosting page's current URL, so edits are deterministic
/// and never touch navigation state; callers apply the returned path string
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentLocation {
    pub path: String,
    pub query: String,
}

impl CurrentLocation {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
        }
    }

    fn pairs(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(self.query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Set `key=value` and return the new `path?query` string.
    ///
    /// The key match is case-sensitive. An existing entry is overwritten in
    /// place (later duplicates dropped); otherwise the pair is appended.
    pub fn set_param(&self, key: &str, value: &str) -> String {
        let mut pairs = self.pairs();
        let mut replaced = false;
        pairs.retain_mut(|(k, v)| {
            if k == key {
                if replaced {
                    return false;
                }
                *v = value.to_string();
                replaced = true;
            }
            true
        });
        if !replaced {
            pairs.push((key.to_string(), value.to_string()));
        }
        self.with_query(&pairs)
    }

    /// Remove the parameter whose key equals the lowercased `key` and return
    /// the new `path?query` string.
    ///
    /// Only the argument is case-folded; stored keys are compared as-is, so
    /// an upper-cased stored key never matches. Removing an absent key is a
    /// no-op.
    pub fn delete_param(&self, key: &str) -> String {
        let folded = key.to_lowercase();
        let mut pairs = self.pairs();
        pairs.retain(|(k, _)| *k != folded);
        self.with_query(&pairs)
    }

    fn with_query(&self, pairs: &[(String, String)]) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        format!("{}?{}", self.path, query)
    }
}
