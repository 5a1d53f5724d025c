//! Per-site success hints
//!
//! Maps site identifiers to the URL fragment expected after a successful
//! run. The runner consults the table after every successful attempt: if
//! the task targets a known site and the final URL lacks the marker, the
//! attempt is treated as a failure and retried.

use url::Url;

use crate::core::{Config, HintEntry};

/// Expected success marker for one site
#[derive(Debug, Clone)]
pub struct ProviderHint {
    /// Site identifier looked for in the task text
    pub site: String,
    /// URL fragment expected after a successful run
    pub success_url: String,
}

impl ProviderHint {
    /// Create a new hint
    pub fn new(site: impl Into<String>, success_url: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            success_url: success_url.into(),
        }
    }

    /// Check whether a final URL carries the success marker
    pub fn verify(&self, final_url: &str) -> bool {
        // Compare against the path + fragment when the URL parses; the
        // engine occasionally reports bare fragments.
        if let Ok(parsed) = Url::parse(final_url) {
            let mut target = parsed.path().to_string();
            if let Some(fragment) = parsed.fragment() {
                target.push('#');
                target.push_str(fragment);
            }
            return target.contains(&self.success_url);
        }

        final_url.contains(&self.success_url)
    }
}

impl From<&HintEntry> for ProviderHint {
    fn from(entry: &HintEntry) -> Self {
        Self::new(&entry.site, &entry.success_url)
    }
}

/// Lookup table of per-site hints
#[derive(Debug, Clone)]
pub struct HintBook {
    hints: Vec<ProviderHint>,
}

impl HintBook {
    /// The built-in table
    pub fn builtin() -> Self {
        Self {
            hints: vec![
                ProviderHint::new("saucedemo", "inventory.html"),
                ProviderHint::new("practicetestautomation", "logged-in-successfully"),
            ],
        }
    }

    /// Built-in table merged with config entries.
    ///
    /// A config entry for a known site replaces the built-in marker.
    pub fn from_config(config: &Config) -> Self {
        let mut book = Self::builtin();
        for entry in &config.hints {
            book.insert(ProviderHint::from(entry));
        }
        book
    }

    /// Add or replace a hint
    pub fn insert(&mut self, hint: ProviderHint) {
        if let Some(existing) = self.hints.iter_mut().find(|h| h.site == hint.site) {
            *existing = hint;
        } else {
            self.hints.push(hint);
        }
    }

    /// Find the hint for the site a task targets, if any.
    ///
    /// Matching is a case-insensitive search for the site identifier in
    /// the task text, which covers both bare names ("saucedemo") and full
    /// URLs ("https://www.saucedemo.com/").
    pub fn hint_for(&self, task: &str) -> Option<&ProviderHint> {
        let task = task.to_lowercase();
        self.hints.iter().find(|h| task.contains(&h.site))
    }

    /// Number of known sites
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

impl Default for HintBook {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let book = HintBook::builtin();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_hint_for_matches_url_in_task() {
        let book = HintBook::builtin();
        let hint = book
            .hint_for("Login to https://www.saucedemo.com/ with username standard_user")
            .expect("saucedemo should match");
        assert_eq!(hint.success_url, "inventory.html");
    }

    #[test]
    fn test_hint_for_is_case_insensitive() {
        let book = HintBook::builtin();
        assert!(book.hint_for("Login to SauceDemo").is_some());
    }

    #[test]
    fn test_hint_for_unknown_site() {
        let book = HintBook::builtin();
        assert!(book.hint_for("login to example.com").is_none());
    }

    #[test]
    fn test_verify_accepts_marker_in_path() {
        let hint = ProviderHint::new("saucedemo", "inventory.html");
        assert!(hint.verify("https://www.saucedemo.com/inventory.html"));
        assert!(!hint.verify("https://www.saucedemo.com/"));
    }

    #[test]
    fn test_verify_ignores_marker_in_host() {
        // The marker must appear after the host, not inside it
        let hint = ProviderHint::new("inventory", "inventory");
        assert!(!hint.verify("https://inventory.example.com/login"));
    }

    #[test]
    fn test_verify_unparseable_url_falls_back_to_substring() {
        let hint = ProviderHint::new("practicetestautomation", "logged-in-successfully");
        assert!(hint.verify("practicetestautomation.com/logged-in-successfully/"));
    }

    #[test]
    fn test_config_entries_extend_and_override() {
        let mut config = Config::default();
        config.hints = vec![
            HintEntry {
                site: "the-internet".to_string(),
                success_url: "/secure".to_string(),
            },
            HintEntry {
                site: "saucedemo".to_string(),
                success_url: "checkout.html".to_string(),
            },
        ];

        let book = HintBook::from_config(&config);
        assert_eq!(book.len(), 3);
        assert_eq!(
            book.hint_for("go to the-internet").unwrap().success_url,
            "/secure"
        );
        assert_eq!(
            book.hint_for("saucedemo login").unwrap().success_url,
            "checkout.html"
        );
    }
}
