/*!
# Merge/Append

Folds freshly flattened token sets into an existing collection. Same-named
sets are extended key by key (last write wins, which is what makes
re-running with a new locale prefix additive); nothing already present is
ever removed.
*/
use crate::token::Collection;

/// How a single incoming set was folded into the collection.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct MergeReport {
    /// Name of the token set.
    pub set: String,
    /// Number of tokens taken from the incoming set.
    pub tokens: usize,
    /// Whether a same-named set already existed and was extended, as
    /// opposed to the set being created.
    pub extended: bool,
}

/// Merge `incoming` sets into `existing`, returning one report per set in
/// incoming order.
pub fn merge(existing: &mut Collection, incoming: Collection) -> Vec<MergeReport> {
    let mut reports = Vec::with_capacity(incoming.len());
    for (name, tokens) in incoming {
        let count = tokens.len();
        let extended = match existing.get_mut(&name) {
            Some(set) => {
                set.extend(tokens);
                true
            }
            None => {
                existing.insert(name.clone(), tokens);
                false
            }
        };
        reports.push(MergeReport {
            set: name,
            tokens: count,
            extended,
        });
    }
    reports
}
