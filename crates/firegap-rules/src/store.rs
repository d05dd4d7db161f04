use crate::RuleCatalog;
use firegap_types::{ConditionClause, Material, RuleRecord, ids};
use time::Date;

/// What the engine asks the store for.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateQuery {
    pub material: Material,
    pub dn: u32,
    pub as_of: Date,
}

/// Source of candidate rules.
///
/// Implementations pre-filter by scope, validity, and coarsely by material and
/// DN. The filter may be permissive; the engine re-checks every clause.
pub trait RuleStore: Send + Sync {
    fn candidates(&self, query: &CandidateQuery) -> anyhow::Result<Vec<RuleRecord>>;
}

/// In-memory store over a loaded [`RuleCatalog`].
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    catalog: RuleCatalog,
}

impl CatalogStore {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }
}

impl RuleStore for CatalogStore {
    fn candidates(&self, query: &CandidateQuery) -> anyhow::Result<Vec<RuleRecord>> {
        let mut out: Vec<RuleRecord> = Vec::new();
        for rule in &self.catalog.rules {
            if rule.scope != ids::SCOPE_PIPE_TO_PIPE {
                tracing::debug!(rule = %rule.id, scope = %rule.scope, "skipping rule outside scope");
                continue;
            }
            if !rule.is_valid_on(query.as_of) {
                tracing::debug!(rule = %rule.id, as_of = %query.as_of, "skipping rule outside validity window");
                continue;
            }
            if coarse_excludes(rule, query) {
                continue;
            }
            out.push(rule.clone());
        }
        // Stable: equal priorities keep catalog order.
        out.sort_by(|a, b| b.priority.cmp(&a.priority));
        Ok(out)
    }
}

/// Only definitive failures exclude; anything else is left to the engine.
fn coarse_excludes(rule: &RuleRecord, query: &CandidateQuery) -> bool {
    rule.conditions.iter().any(|clause| match clause {
        ConditionClause::MaterialIn(allowed) => {
            !allowed.is_empty() && !allowed.contains(&query.material)
        }
        ConditionClause::DnMax(max) => query.dn > *max,
        _ => false,
    })
}
