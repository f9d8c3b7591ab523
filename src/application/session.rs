// Session reducer - turns discrete user actions into new selection snapshots
use crate::domain::selection::{FilterOptions, Role, SelectionState};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    Regions,
    Enterprises,
    DeviationTypes,
    ResponsibleNames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    ToggleRegion(String),
    ToggleEnterprise(u32),
    ToggleDeviationType(String),
    ToggleResponsible(String),
    /// Select every option, or clear the dimension if all are already selected
    ToggleAll(FilterDimension),
    ResetFilters,
    SwitchRole(Role),
    SelectEnterprise(u32),
}

/// Apply one action; the input snapshot is left untouched.
pub fn apply(
    state: &SelectionState,
    action: SelectionAction,
    options: &FilterOptions,
) -> SelectionState {
    let mut next = state.clone();

    match action {
        SelectionAction::ToggleRegion(region) => toggle(&mut next.regions, region),
        SelectionAction::ToggleEnterprise(id) => toggle(&mut next.enterprise_ids, id),
        SelectionAction::ToggleDeviationType(kind) => toggle(&mut next.deviation_types, kind),
        SelectionAction::ToggleResponsible(name) => toggle(&mut next.responsible_names, name),
        SelectionAction::ToggleAll(dimension) => match dimension {
            FilterDimension::Regions => {
                toggle_all(&mut next.regions, options.regions.iter().cloned())
            }
            FilterDimension::Enterprises => {
                toggle_all(&mut next.enterprise_ids, options.enterprise_ids())
            }
            FilterDimension::DeviationTypes => {
                toggle_all(&mut next.deviation_types, options.deviation_types.iter().cloned())
            }
            FilterDimension::ResponsibleNames => toggle_all(
                &mut next.responsible_names,
                options.responsible_names.iter().cloned(),
            ),
        },
        SelectionAction::ResetFilters => {
            next.regions.clear();
            next.enterprise_ids.clear();
            next.deviation_types.clear();
            next.responsible_names.clear();
        }
        SelectionAction::SwitchRole(role) => next.role = role,
        SelectionAction::SelectEnterprise(id) => {
            if options.enterprise_ids().any(|known| known == id) {
                next.active_enterprise_id = Some(id);
            } else {
                tracing::warn!("Ignoring selection of unknown enterprise {}", id);
            }
        }
    }

    next
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

fn toggle_all<T, I>(set: &mut BTreeSet<T>, all: I)
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let all: BTreeSet<T> = all.into_iter().collect();
    if *set == all {
        set.clear();
    } else {
        *set = all;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::infrastructure::dataset_repository::InMemoryRepository;
    use std::sync::Arc;

    fn options() -> FilterOptions {
        DashboardService::new(Arc::new(InMemoryRepository::sample())).filter_options()
    }

    #[test]
    fn test_toggle_region_twice_restores_state() {
        let options = options();
        let start = SelectionState::admin();
        let once = apply(&start, SelectionAction::ToggleRegion("Москва".into()), &options);
        assert!(once.regions.contains("Москва"));
        assert!(start.regions.is_empty());

        let twice = apply(&once, SelectionAction::ToggleRegion("Москва".into()), &options);
        assert_eq!(twice, start);
    }

    #[test]
    fn test_toggle_all_selects_then_clears() {
        let options = options();
        let start = SelectionState::admin().with_regions(["Москва"]);

        let all = apply(&start, SelectionAction::ToggleAll(FilterDimension::Regions), &options);
        assert_eq!(all.regions.len(), 4);

        let none = apply(&all, SelectionAction::ToggleAll(FilterDimension::Regions), &options);
        assert!(none.regions.is_empty());
    }

    #[test]
    fn test_toggle_all_enterprises() {
        let options = options();
        let state = apply(
            &SelectionState::admin(),
            SelectionAction::ToggleAll(FilterDimension::Enterprises),
            &options,
        );
        assert_eq!(state.enterprise_ids.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reset_clears_every_dimension() {
        let options = options();
        let state = SelectionState::admin()
            .with_regions(["Москва"])
            .with_enterprise_ids([1])
            .with_deviation_types(["Превышение бюджета"])
            .with_responsible_names(["Петров П.П."]);
        let reset = apply(&state, SelectionAction::ResetFilters, &options);
        assert_eq!(reset.active_filter_count(), 0);
        assert_eq!(reset.role, Role::Admin);
    }

    #[test]
    fn test_switch_role_keeps_selections() {
        let options = options();
        let state = SelectionState::user(2);
        let admin = apply(&state, SelectionAction::SwitchRole(Role::Admin), &options);
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.active_enterprise_id, Some(2));
    }

    #[test]
    fn test_select_unknown_enterprise_is_ignored() {
        let options = options();
        let state = SelectionState::user(2);
        assert_eq!(apply(&state, SelectionAction::SelectEnterprise(42), &options), state);

        let moved = apply(&state, SelectionAction::SelectEnterprise(3), &options);
        assert_eq!(moved.active_enterprise_id, Some(3));
    }
}
