// Aggregator - folds a filtered subset into totals and deviation views
use crate::domain::dashboard::{AnnotatedDeviation, DeviationGroups, TotalStats};
use crate::domain::enterprise::Enterprise;

pub fn total_stats(enterprises: &[&Enterprise]) -> TotalStats {
    enterprises.iter().fold(TotalStats::default(), |acc, e| TotalStats {
        employees: acc.employees + u64::from(e.employees),
        completed: acc.completed + u64::from(e.repair_stats.completed),
        pending: acc.pending + u64::from(e.repair_stats.pending),
        overdue: acc.overdue + u64::from(e.repair_stats.overdue),
        deviation_count: acc.deviation_count + e.deviations.len() as u64,
    })
}

/// Every owned deviation in subset order, then in each enterprise's own order.
pub fn flatten_deviations(enterprises: &[&Enterprise]) -> Vec<AnnotatedDeviation> {
    enterprises
        .iter()
        .flat_map(|e| {
            e.deviations
                .iter()
                .map(move |d| AnnotatedDeviation::new(d.clone(), e))
        })
        .collect()
}

pub fn group_by_type(deviations: &[AnnotatedDeviation]) -> DeviationGroups {
    group_by(deviations, |d| &d.deviation.kind)
}

pub fn group_by_responsible(deviations: &[AnnotatedDeviation]) -> DeviationGroups {
    group_by(deviations, |d| &d.deviation.responsible)
}

fn group_by<F>(deviations: &[AnnotatedDeviation], key: F) -> DeviationGroups
where
    F: Fn(&AnnotatedDeviation) -> &String,
{
    let mut groups = DeviationGroups::default();
    for deviation in deviations {
        groups.push(key(deviation), deviation.clone());
    }
    groups
}
