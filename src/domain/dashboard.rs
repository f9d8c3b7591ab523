// Dashboard domain model - derived view handed to presentation
use super::enterprise::{Deviation, Enterprise};
use super::selection::Role;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalStats {
    pub employees: u64,
    pub completed: u64,
    pub pending: u64,
    pub overdue: u64,
    pub deviation_count: u64,
}

/// A deviation paired with where it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedDeviation {
    #[serde(flatten)]
    pub deviation: Deviation,
    pub enterprise_name: String,
    pub region: String,
}

impl AnnotatedDeviation {
    pub fn new(deviation: Deviation, enterprise: &Enterprise) -> Self {
        Self {
            deviation,
            enterprise_name: enterprise.name.clone(),
            region: enterprise.region.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviationGroup {
    pub label: String,
    pub deviations: Vec<AnnotatedDeviation>,
}

/// Label to deviations mapping that keeps first-seen label order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviationGroups {
    groups: Vec<DeviationGroup>,
}

impl DeviationGroups {
    pub fn push(&mut self, label: &str, deviation: AnnotatedDeviation) {
        match self.groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.deviations.push(deviation),
            None => self.groups.push(DeviationGroup {
                label: label.to_string(),
                deviations: vec![deviation],
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviationGroup> {
        self.groups.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
impl DeviationGroups {
    pub fn get(&self, label: &str) -> Option<&[AnnotatedDeviation]> {
        self.groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.deviations.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.label.as_str())
    }

    /// Deviations across all groups
    pub fn deviation_count(&self) -> usize {
        self.groups.iter().map(|g| g.deviations.len()).sum()
    }
}

impl Serialize for DeviationGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.label, &group.deviations)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub enterprise_id: u32,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub has_deviations: bool,
}

impl MapMarker {
    pub fn color(&self) -> &'static str {
        if self.has_deviations { "#dc2626" } else { "#059669" }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub role: Role,
    pub filtered_enterprises: Vec<Enterprise>,
    pub totals: TotalStats,
    pub flattened_deviations: Vec<AnnotatedDeviation>,
    pub grouped_by_type: DeviationGroups,
    pub grouped_by_responsible: DeviationGroups,
}

impl DashboardView {
    pub fn map_markers(&self) -> Vec<MapMarker> {
        self.filtered_enterprises
            .iter()
            .map(|e| MapMarker {
                enterprise_id: e.id,
                label: e.short_label().to_string(),
                x: e.coordinates.x,
                y: e.coordinates.y,
                has_deviations: e.has_deviations(),
            })
            .collect()
    }
}
