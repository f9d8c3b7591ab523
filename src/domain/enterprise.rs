// Enterprise domain model
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RepairStats {
    pub completed: u32,
    pub pending: u32,
    pub overdue: u32,
}

/// Placement on the decorative map plane, both axes in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn is_within_plane(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviationStatus {
    Critical,
    Warning,
    Normal,
}

impl DeviationStatus {
    /// Badge text shown next to a deviation
    pub fn label(&self) -> &'static str {
        match self {
            DeviationStatus::Critical => "Критично",
            DeviationStatus::Warning => "Предупреждение",
            DeviationStatus::Normal => "В норме",
        }
    }
}

impl fmt::Display for DeviationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            DeviationStatus::Critical => "critical",
            DeviationStatus::Warning => "warning",
            DeviationStatus::Normal => "normal",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deviation {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub deadline: NaiveDate,
    pub responsible: String,
    pub description: String,
    pub status: DeviationStatus,
}

impl Deviation {
    /// Deadline in the fixed ru-RU short form, e.g. 15.10.2025
    pub fn deadline_ru(&self) -> String {
        self.deadline.format("%d.%m.%Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enterprise {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub employees: u32,
    pub repair_stats: RepairStats,
    #[serde(default)]
    pub deviations: Vec<Deviation>,
    pub coordinates: Coordinates,
}

impl Enterprise {
    pub fn has_deviations(&self) -> bool {
        !self.deviations.is_empty()
    }

    /// First word of the name, used as the map marker caption
    pub fn short_label(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
