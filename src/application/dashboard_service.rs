// Dashboard service - Use case for deriving the dashboard view
use crate::application::aggregator::{
    flatten_deviations, group_by_responsible, group_by_type, total_stats,
};
use crate::application::enterprise_repository::EnterpriseRepository;
use crate::application::filter_engine::filter_enterprises;
use crate::domain::dashboard::DashboardView;
use crate::domain::enterprise::Enterprise;
use crate::domain::selection::{EnterpriseOption, FilterOptions, Role, SelectionState};
use std::sync::Arc;

pub const ALL_REGIONS: &str = "Все регионы";

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn EnterpriseRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn EnterpriseRepository>) -> Self {
        Self { repository }
    }

    /// Recompute the whole view from the dataset and a selection snapshot.
    pub fn derive(&self, selection: &SelectionState) -> DashboardView {
        let dataset = self.repository.enterprises();
        let active = match selection.role {
            Role::User => self.resolve_active(selection),
            Role::Admin => None,
        };

        let filtered = filter_enterprises(dataset, active, selection);
        let totals = total_stats(&filtered);
        let flattened = flatten_deviations(&filtered);
        let grouped_by_type = group_by_type(&flattened);
        let grouped_by_responsible = group_by_responsible(&flattened);

        tracing::debug!(
            "Derived {} view: {} of {} enterprises, {} deviations",
            selection.role,
            filtered.len(),
            dataset.len(),
            flattened.len()
        );

        DashboardView {
            role: selection.role,
            filtered_enterprises: filtered.into_iter().cloned().collect(),
            totals,
            flattened_deviations: flattened,
            grouped_by_type,
            grouped_by_responsible,
        }
    }

    /// The enterprise a user session looks at.
    ///
    /// A missing or unknown id falls back to the first enterprise; `None`
    /// only when the dataset is empty.
    pub fn resolve_active(&self, selection: &SelectionState) -> Option<&Enterprise> {
        let dataset = self.repository.enterprises();
        match selection.active_enterprise_id {
            Some(id) => self.repository.find(id).or_else(|| {
                tracing::warn!("Enterprise {} not in dataset, falling back to first", id);
                dataset.first()
            }),
            None => dataset.first(),
        }
    }

    /// Fresh session: user role on the first enterprise.
    pub fn default_selection(&self) -> SelectionState {
        SelectionState {
            active_enterprise_id: self.repository.enterprises().first().map(|e| e.id),
            ..SelectionState::default()
        }
    }

    pub fn filter_options(&self) -> FilterOptions {
        let dataset = self.repository.enterprises();
        let mut options = FilterOptions::default();

        for enterprise in dataset {
            push_distinct(&mut options.regions, &enterprise.region);
            options.enterprises.push(EnterpriseOption {
                id: enterprise.id,
                name: enterprise.name.clone(),
            });
            for deviation in &enterprise.deviations {
                push_distinct(&mut options.deviation_types, &deviation.kind);
                push_distinct(&mut options.responsible_names, &deviation.responsible);
            }
        }

        options
    }

    /// Region line of the summary card
    pub fn region_summary(&self, selection: &SelectionState) -> String {
        match selection.role {
            Role::Admin if selection.regions.is_empty() => ALL_REGIONS.to_string(),
            Role::Admin => selection
                .regions
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            Role::User => self
                .resolve_active(selection)
                .map(|e| e.region.clone())
                .unwrap_or_default(),
        }
    }
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dataset_repository::InMemoryRepository;
    use crate::infrastructure::sample_dataset::sample_enterprises;

    fn service() -> DashboardService {
        DashboardService::new(Arc::new(InMemoryRepository::sample()))
    }

    #[test]
    fn test_scenario_admin_all_enterprises() {
        let view = service().derive(&SelectionState::admin());
        assert_eq!(view.filtered_enterprises.len(), 4);
        assert_eq!(view.totals.employees, 4351);
        assert_eq!(view.totals.deviation_count, 4);
        assert_eq!(view.flattened_deviations.len(), 4);
    }

    #[test]
    fn test_scenario_admin_region_moscow() {
        let view = service().derive(&SelectionState::admin().with_regions(["Москва"]));
        let ids: Vec<u32> = view.filtered_enterprises.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(view.totals.employees, 1247);
    }

    #[test]
    fn test_scenario_admin_deviation_type() {
        let view = service()
            .derive(&SelectionState::admin().with_deviation_types(["Недокомплект персонала"]));
        assert!(!view.filtered_enterprises.is_empty());
        for enterprise in &view.filtered_enterprises {
            assert!(enterprise.has_deviations());
            assert!(
                enterprise
                    .deviations
                    .iter()
                    .any(|d| d.kind == "Недокомплект персонала")
            );
        }
    }

    #[test]
    fn test_scenario_user_without_deviations() {
        let view = service().derive(&SelectionState::user(4));
        assert_eq!(view.filtered_enterprises.len(), 1);
        assert_eq!(view.filtered_enterprises[0].id, 4);
        assert_eq!(view.totals.deviation_count, 0);
        assert!(view.flattened_deviations.is_empty());
        assert!(view.grouped_by_type.is_empty());
    }

    #[test]
    fn test_user_role_always_one_enterprise() {
        let service = service();
        for id in [1, 2, 3, 4] {
            let selection = SelectionState::user(id)
                .with_regions(["Нигде"])
                .with_deviation_types(["Нет такого"]);
            let view = service.derive(&selection);
            assert_eq!(view.filtered_enterprises.len(), 1);
            assert_eq!(view.filtered_enterprises[0].id, id);
        }
    }

    #[test]
    fn test_dangling_active_enterprise_falls_back_to_first() {
        let view = service().derive(&SelectionState::user(99));
        assert_eq!(view.filtered_enterprises.len(), 1);
        assert_eq!(view.filtered_enterprises[0].id, 1);
    }

    #[test]
    fn test_empty_dataset_yields_empty_view() {
        let service = DashboardService::new(Arc::new(InMemoryRepository::new(vec![])));
        let view = service.derive(&SelectionState::user(1));
        assert!(view.filtered_enterprises.is_empty());
        assert_eq!(view.totals.employees, 0);
        assert_eq!(service.default_selection().active_enterprise_id, None);
    }

    #[test]
    fn test_derive_is_idempotent() {
        let service = service();
        let selection = SelectionState::admin().with_responsible_names(["Иванов И.И."]);
        assert_eq!(service.derive(&selection), service.derive(&selection));
    }

    #[test]
    fn test_totals_match_filtered_subset() {
        let service = service();
        let selection = SelectionState::admin().with_enterprise_ids([2, 4]);
        let view = service.derive(&selection);
        let employees: u64 = view.filtered_enterprises.iter().map(|e| u64::from(e.employees)).sum();
        let deviations: usize = view.filtered_enterprises.iter().map(|e| e.deviations.len()).sum();
        assert_eq!(view.totals.employees, employees);
        assert_eq!(view.totals.deviation_count as usize, deviations);
        assert_eq!(view.grouped_by_type.deviation_count(), view.flattened_deviations.len());
        assert_eq!(
            view.grouped_by_responsible.deviation_count(),
            view.flattened_deviations.len()
        );
    }

    #[test]
    fn test_filtered_subset_keeps_dataset_order() {
        let dataset = sample_enterprises();
        let view = service().derive(&SelectionState::admin().with_enterprise_ids([3, 1]));
        let positions: Vec<usize> = view
            .filtered_enterprises
            .iter()
            .map(|e| dataset.iter().position(|d| d.id == e.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filter_options_first_seen_order() {
        let options = service().filter_options();
        assert_eq!(
            options.regions,
            vec![
                "Москва",
                "Санкт-Петербург",
                "Свердловская область",
                "Новосибирская область"
            ]
        );
        assert_eq!(options.enterprise_ids().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(options.deviation_types[0], "Превышение сроков ремонта");
        assert_eq!(options.responsible_names.len(), 4);
    }

    #[test]
    fn test_region_summary() {
        let service = service();
        assert_eq!(service.region_summary(&SelectionState::admin()), ALL_REGIONS);
        assert_eq!(
            service.region_summary(&SelectionState::admin().with_regions(["Москва", "Санкт-Петербург"])),
            "Москва, Санкт-Петербург"
        );
        assert_eq!(service.region_summary(&SelectionState::user(3)), "Свердловская область");
    }

    #[test]
    fn test_default_selection() {
        let selection = service().default_selection();
        assert_eq!(selection.role, Role::User);
        assert_eq!(selection.active_enterprise_id, Some(1));
    }
}
