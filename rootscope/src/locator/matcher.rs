//! Mapping resource locators back to the root that owns them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::locator::types::{Locator, NormalizedPath, Root};

/// How to pick among several roots that all contain a locator.
///
/// # Examples
///
/// ```
/// use rootscope::MatchMode;
///
/// assert_eq!(MatchMode::default(), MatchMode::FirstMatch);
/// assert_eq!("longest-prefix".parse::<MatchMode>().unwrap(), MatchMode::LongestPrefix);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// The first containing root in candidate order wins.
    ///
    /// Discovery order usually lists inner, more specific roots first, so
    /// this approximates the longest match.
    #[default]
    FirstMatch,

    /// The containing root with the longest normalized form wins. Ties go to
    /// the earlier candidate.
    LongestPrefix,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstMatch => write!(f, "first-match"),
            Self::LongestPrefix => write!(f, "longest-prefix"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-match" | "first" => Ok(Self::FirstMatch),
            "longest-prefix" | "longest" => Ok(Self::LongestPrefix),
            _ => Err(format!(
                "invalid match mode: {s} (expected first-match or longest-prefix)"
            )),
        }
    }
}

/// Finds the root a locator belongs to.
///
/// Candidates are normalized once, when their [`Root`] is built; the locator
/// is normalized once per query.
///
/// # Examples
///
/// ```
/// use rootscope::{Locator, Matcher, Root};
///
/// let roots = vec![Root::new("/a/b"), Root::new("/a/bc")];
/// let matcher = Matcher::new();
///
/// let owner = matcher.best_match(&Locator::from("/a/bc/file"), &roots);
/// assert_eq!(owner, Root::new("/a/bc"));
///
/// // Nothing matches: the locator comes back as its own root
/// let stray = matcher.best_match(&Locator::from("/elsewhere/x"), &roots);
/// assert_eq!(stray.locator().as_str(), "/elsewhere/x");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    mode: MatchMode,
}

impl Matcher {
    /// Create a first-match matcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given match mode.
    #[must_use]
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// The configured match mode.
    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Find the candidate that contains `locator`, if any.
    #[must_use]
    pub fn find_root<'r>(
        &self,
        locator: &NormalizedPath,
        candidates: &'r [Root],
    ) -> Option<&'r Root> {
        let mut containing = candidates.iter().filter(|root| root.owns(locator));

        match self.mode {
            MatchMode::FirstMatch => containing.next(),
            MatchMode::LongestPrefix => {
                containing.fold(None, |best: Option<&Root>, root| match best {
                    Some(current) if current.normalized().len() >= root.normalized().len() => {
                        Some(current)
                    }
                    _ => Some(root),
                })
            }
        }
    }

    /// The root that owns `locator`, or `locator` itself as a root when no
    /// candidate contains it.
    #[must_use]
    pub fn best_match(&self, locator: &Locator, candidates: &[Root]) -> Root {
        let normalized = locator.normalized();
        if let Some(root) = self.find_root(&normalized, candidates) {
            log::trace!("{locator} belongs to root {root}");
            return root.clone();
        }

        log::trace!("no root contains {locator}; passing it through");
        Root::new(locator.clone())
    }

    /// Like [`best_match`](Self::best_match), but an absent locator yields an
    /// absent root without any normalization.
    #[must_use]
    pub fn best_matching_root(
        &self,
        locator: Option<&Locator>,
        candidates: &[Root],
    ) -> Option<Root> {
        locator.map(|locator| self.best_match(locator, candidates))
    }

    /// Map every locator to its root. Output order and length follow the
    /// input, including pass-through entries.
    #[must_use]
    pub fn best_matching_roots(&self, locators: &[Locator], candidates: &[Root]) -> Vec<Root> {
        locators
            .iter()
            .map(|locator| self.best_match(locator, candidates))
            .collect()
    }
}

/// First-match lookup of a single optional locator.
///
/// # Examples
///
/// ```
/// use rootscope::{best_matching_root, Locator, Root};
///
/// let roots = [Root::new("/lib/a.jar")];
/// assert!(best_matching_root(None, &roots).is_none());
///
/// let locator = Locator::from("jar:file:/lib/a.jar!/x/Y.class");
/// assert_eq!(best_matching_root(Some(&locator), &roots), Some(Root::new("/lib/a.jar")));
/// ```
#[must_use]
pub fn best_matching_root(locator: Option<&Locator>, candidates: &[Root]) -> Option<Root> {
    Matcher::new().best_matching_root(locator, candidates)
}

/// First-match lookup of many locators.
#[must_use]
pub fn best_matching_roots(locators: &[Locator], candidates: &[Root]) -> Vec<Root> {
    Matcher::new().best_matching_roots(locators, candidates)
}
