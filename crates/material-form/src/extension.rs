//! Extension allow-lists for dropped files.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Extension followed by a query/fragment marker or the end of the name.
static EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.([0-9a-z]+)(?:[?#]|$)").expect("extension pattern is valid")
});

/// Extract the lowercase extension of `path`, if it has one.
///
/// `"Wood_Albedo.PNG"` gives `Some("png")`, `"scene.usdz?v=2"` gives `Some("usdz")`,
/// `"README"` gives `None`.
pub fn extension_of(path: &str) -> Option<String> {
    EXTENSION
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
}

/// Ordered set of permitted extensions, stored lowercase without a leading dot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowList {
    extensions: Vec<String>,
}

impl AllowList {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase();
            if !ext.is_empty() && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        Self { extensions: normalized }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }

    /// True if `filename` carries one of the allowed extensions.
    pub fn is_allowed(&self, filename: &str) -> bool {
        extension_of(filename).is_some_and(|ext| self.contains(&ext))
    }

    /// True iff every name in the batch is allowed. An empty batch passes.
    pub fn batch_allowed<I, S>(&self, filenames: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        filenames
            .into_iter()
            .all(|name| self.is_allowed(name.as_ref()))
    }
}

/// Comma separated with no spaces: `png,jpg`.
impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extensions.join(","))
    }
}
