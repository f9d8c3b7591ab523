// Selection state domain model
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}', expected 'user' or 'admin'", other)),
        }
    }
}

/// Snapshot of what the session has selected.
///
/// Every admin set follows the same rule: an empty set places no constraint
/// on its dimension. The user role ignores the sets entirely and shows only
/// `active_enterprise_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionState {
    pub role: Role,
    pub active_enterprise_id: Option<u32>,
    pub regions: BTreeSet<String>,
    pub enterprise_ids: BTreeSet<u32>,
    pub deviation_types: BTreeSet<String>,
    pub responsible_names: BTreeSet<String>,
}

impl SelectionState {
    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_enterprise_ids<I: IntoIterator<Item = u32>>(mut self, ids: I) -> Self {
        self.enterprise_ids = ids.into_iter().collect();
        self
    }

    pub fn with_deviation_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deviation_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_responsible_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.responsible_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Number of selected items across the four admin sets (filter badge)
    pub fn active_filter_count(&self) -> usize {
        self.regions.len()
            + self.enterprise_ids.len()
            + self.deviation_types.len()
            + self.responsible_names.len()
    }
}

#[cfg(test)]
impl SelectionState {
    pub fn user(active_enterprise_id: u32) -> Self {
        Self {
            role: Role::User,
            active_enterprise_id: Some(active_enterprise_id),
            ..Self::default()
        }
    }

    pub fn admin() -> Self {
        Self {
            role: Role::Admin,
            ..Self::default()
        }
    }
}

/// Values a session can pick from, each list in first-seen dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub enterprises: Vec<EnterpriseOption>,
    pub deviation_types: Vec<String>,
    pub responsible_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnterpriseOption {
    pub id: u32,
    pub name: String,
}

impl FilterOptions {
    pub fn enterprise_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.enterprises.iter().map(|e| e.id)
    }
}
