// ABOUTME: Whitelist-gated read access to process environment variables
// ABOUTME: Implements the single, multi, and bulk lookup contract of the env function

use std::collections::BTreeMap;
use std::env;

use super::error::{EnvError, Result};

/// The set of environment variable names approved for template access.
///
/// An empty whitelist means no name is pre-approved: single and multi name
/// lookups are unrestricted, but bulk listing is refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    names: Vec<String>,
}

impl Whitelist {
    /// Build a whitelist from the configured names, sorted and deduplicated.
    pub fn new(mut names: Vec<String>) -> Self {
        names.sort();
        names.dedup();
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Read interface over process environment variables, gated by a whitelist.
/// Built once from configuration and immutable for the rest of the run.
#[derive(Debug, Clone)]
pub struct EnvAccess {
    whitelist: Whitelist,
}

impl EnvAccess {
    pub fn new(whitelist: Whitelist) -> Self {
        Self { whitelist }
    }

    /// All whitelisted variables that are set, as a name-to-value map. Bulk
    /// listing always requires an explicit non-empty whitelist.
    pub fn list(&self) -> Result<BTreeMap<String, String>> {
        if self.whitelist.is_empty() {
            return Err(EnvError::WhitelistRequired);
        }
        Ok(set_vars(|name| self.whitelist.contains(name)))
    }

    /// The value of a single variable, or the empty string when unset. The
    /// whitelist is enforced only when it is non-empty.
    pub fn get(&self, name: &str) -> Result<String> {
        if !self.whitelist.is_empty() && !self.whitelist.contains(name) {
            return Err(EnvError::NotWhitelisted {
                name: name.to_string(),
            });
        }
        Ok(env::var(name).unwrap_or_default())
    }

    /// The requested variables that are set, as a name-to-value map. Unset
    /// names are absent from the result rather than mapped to an empty
    /// string. With a non-empty whitelist, every requested name must be
    /// whitelisted; the first offender is reported.
    pub fn get_many(&self, names: &[String]) -> Result<BTreeMap<String, String>> {
        if !self.whitelist.is_empty() {
            for name in names {
                if !self.whitelist.contains(name) {
                    return Err(EnvError::NotWhitelisted { name: name.clone() });
                }
            }
        }
        Ok(set_vars(|name| names.iter().any(|n| n == name)))
    }
}

/// Snapshot of the set environment variables matching a predicate. Entries
/// that are not valid UTF-8 are skipped.
fn set_vars(keep: impl Fn(&str) -> bool) -> BTreeMap<String, String> {
    env::vars_os()
        .filter_map(|(name, value)| {
            let name = name.into_string().ok()?;
            let value = value.into_string().ok()?;
            Some((name, value))
        })
        .filter(|(name, _)| keep(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitelist_sorts_and_dedups() {
        let whitelist = Whitelist::new(vec![
            "B".to_string(),
            "A".to_string(),
            "B".to_string(),
        ]);
        assert_eq!(whitelist.names(), &["A".to_string(), "B".to_string()]);
        assert!(whitelist.contains("A"));
        assert!(!whitelist.contains("C"));
    }

    #[test]
    fn test_bulk_listing_requires_nonempty_whitelist() {
        let access = EnvAccess::new(Whitelist::default());
        assert_eq!(access.list().unwrap_err(), EnvError::WhitelistRequired);
    }

    #[test]
    fn test_bulk_listing_returns_exactly_the_whitelisted_set_vars() {
        env::set_var("STENCIL_LIST_A", "1");
        env::set_var("STENCIL_LIST_B", "2");
        env::set_var("STENCIL_LIST_C", "3");

        let access = EnvAccess::new(Whitelist::new(vec![
            "STENCIL_LIST_A".to_string(),
            "STENCIL_LIST_B".to_string(),
            "STENCIL_LIST_UNSET".to_string(),
        ]));
        let listed = access.list().unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed["STENCIL_LIST_A"], "1");
        assert_eq!(listed["STENCIL_LIST_B"], "2");
    }

    #[test]
    fn test_single_lookup_is_unrestricted_with_empty_whitelist() {
        env::set_var("STENCIL_SINGLE_X", "x-value");

        let access = EnvAccess::new(Whitelist::default());
        assert_eq!(access.get("STENCIL_SINGLE_X").unwrap(), "x-value");
        assert_eq!(access.get("STENCIL_SINGLE_UNSET").unwrap(), "");
    }

    #[test]
    fn test_single_lookup_checked_against_nonempty_whitelist() {
        let access = EnvAccess::new(Whitelist::new(vec!["STENCIL_ALLOWED".to_string()]));
        let err = access.get("STENCIL_FORBIDDEN").unwrap_err();
        assert_eq!(
            err,
            EnvError::NotWhitelisted {
                name: "STENCIL_FORBIDDEN".to_string()
            }
        );
    }

    #[test]
    fn test_multi_lookup_reports_first_unlisted_name() {
        let access = EnvAccess::new(Whitelist::new(vec![
            "STENCIL_MULTI_A".to_string(),
            "STENCIL_MULTI_B".to_string(),
        ]));
        let err = access
            .get_many(&["STENCIL_MULTI_A".to_string(), "STENCIL_MULTI_Z".to_string()])
            .unwrap_err();
        assert_eq!(
            err,
            EnvError::NotWhitelisted {
                name: "STENCIL_MULTI_Z".to_string()
            }
        );
    }

    #[test]
    fn test_multi_lookup_omits_unset_names() {
        env::set_var("STENCIL_MULTI_SET", "here");

        let access = EnvAccess::new(Whitelist::default());
        let found = access
            .get_many(&[
                "STENCIL_MULTI_SET".to_string(),
                "STENCIL_MULTI_MISSING".to_string(),
            ])
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found["STENCIL_MULTI_SET"], "here");
        assert!(!found.contains_key("STENCIL_MULTI_MISSING"));
    }
}
