//! Keyword routing from task descriptions to owning roles.

use super::RoleId;

const FRONTEND_KEYWORDS: &[&str] = &["sidebar", "link", "ui"];
const RELEASE_KEYWORDS: &[&str] = &["deploy"];
const BACKEND_KEYWORDS: &[&str] = &["test"];

/// Condition a task description must satisfy for a rule to match.
///
/// Descriptions are lowercased before matching and keywords are plain
/// substrings, so `ui` also matches `build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePredicate {
    /// Matches when the description contains any of the keywords.
    ContainsAny(&'static [&'static str]),
}

impl RoutePredicate {
    /// Returns `true` when `lowered_description` satisfies the predicate.
    #[must_use]
    pub fn matches(self, lowered_description: &str) -> bool {
        match self {
            Self::ContainsAny(keywords) => keywords
                .iter()
                .any(|keyword| lowered_description.contains(keyword)),
        }
    }
}

/// A single routing rule: tasks matching `predicate` go to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingRule {
    /// Condition on the lowercased description.
    pub predicate: RoutePredicate,
    /// Role that receives matching tasks.
    pub target: RoleId,
}

/// Ordered rule table evaluated first-match-wins, with a fallback role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    rules: Vec<RoutingRule>,
    fallback: RoleId,
}

impl RoutingTable {
    /// Creates a table from rules in priority order.
    #[must_use]
    pub const fn new(rules: Vec<RoutingRule>, fallback: RoleId) -> Self {
        Self { rules, fallback }
    }

    /// The standard table used by the architect.
    ///
    /// UI keywords win over `deploy`, which wins over `test`; anything else
    /// goes to the optimization role.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            vec![
                RoutingRule {
                    predicate: RoutePredicate::ContainsAny(FRONTEND_KEYWORDS),
                    target: RoleId::Frontend,
                },
                RoutingRule {
                    predicate: RoutePredicate::ContainsAny(RELEASE_KEYWORDS),
                    target: RoleId::Release,
                },
                RoutingRule {
                    predicate: RoutePredicate::ContainsAny(BACKEND_KEYWORDS),
                    target: RoleId::Backend,
                },
            ],
            RoleId::Optimization,
        )
    }

    /// Returns the rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[RoutingRule] {
        &self.rules
    }

    /// Returns the role that receives unmatched tasks.
    #[must_use]
    pub const fn fallback(&self) -> RoleId {
        self.fallback
    }

    /// Picks the owning role for a task description.
    #[must_use]
    pub fn route(&self, description: &str) -> RoleId {
        let lowered = description.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(&lowered))
            .map_or(self.fallback, |rule| rule.target)
    }
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self::standard()
    }
}
