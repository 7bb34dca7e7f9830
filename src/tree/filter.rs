// src/tree/filter.rs
// =============================================================================
// Which files count as "text" and show up in listings.
//
// The check is a plain case-sensitive suffix match on the file name, so
// "README.md" passes and "README.MD" does not.
// =============================================================================

/// Extensions listed by default.
const DEFAULT_EXTENSIONS: [&str; 7] = [".md", ".py", ".js", ".tsx", ".ts", ".jsx", ".txt"];

/// An allow-list of file name suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl ExtensionFilter {
    /// Build a filter from extensions, with or without the leading dot.
    ///
    /// Empty strings are ignored.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref().trim();
            if ext.is_empty() {
                continue;
            }
            let ext = if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{}", ext)
            };
            if !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        Self {
            extensions: normalized,
        }
    }

    pub fn allows(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allow_list() {
        let filter = ExtensionFilter::default();
        for name in ["README.md", "main.py", "app.js", "App.tsx", "index.ts", "View.jsx", "notes.txt"] {
            assert!(filter.allows(name), "{} should be allowed", name);
        }
        for name in ["image.png", "Cargo.toml", "lib.rs", "Makefile"] {
            assert!(!filter.allows(name), "{} should be dropped", name);
        }
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let filter = ExtensionFilter::default();
        assert!(!filter.allows("README.MD"));
    }

    #[test]
    fn test_custom_extensions_normalized() {
        let filter = ExtensionFilter::new(["rs", ".toml", "", "rs"]);
        assert_eq!(filter.extensions(), &[".rs".to_string(), ".toml".to_string()]);
        assert!(filter.allows("main.rs"));
        assert!(filter.allows("Cargo.toml"));
        assert!(!filter.allows("README.md"));
    }
}
