// Filter engine - selects the enterprises a selection state shows
use crate::domain::enterprise::Enterprise;
use crate::domain::selection::{Role, SelectionState};
use std::collections::BTreeSet;

/// Pick the enterprises to display, in dataset order.
///
/// `active` is the resolved enterprise for the user role; admin-only sets
/// have no effect there.
pub fn filter_enterprises<'a>(
    dataset: &'a [Enterprise],
    active: Option<&'a Enterprise>,
    selection: &SelectionState,
) -> Vec<&'a Enterprise> {
    match selection.role {
        Role::User => active.into_iter().collect(),
        Role::Admin => dataset
            .iter()
            .filter(|e| matches_admin_filters(e, selection))
            .collect(),
    }
}

/// AND across dimensions, membership within each; empty sets always pass.
pub fn matches_admin_filters(enterprise: &Enterprise, selection: &SelectionState) -> bool {
    allows(&selection.regions, &enterprise.region)
        && allows(&selection.enterprise_ids, &enterprise.id)
        && allows_any(
            &selection.deviation_types,
            enterprise.deviations.iter().map(|d| &d.kind),
        )
        && allows_any(
            &selection.responsible_names,
            enterprise.deviations.iter().map(|d| &d.responsible),
        )
}

fn allows<T: Ord>(selected: &BTreeSet<T>, value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}

fn allows_any<'a, T, I>(selected: &BTreeSet<T>, mut values: I) -> bool
where
    T: Ord + 'a,
    I: Iterator<Item = &'a T>,
{
    selected.is_empty() || values.any(|v| selected.contains(v))
}
