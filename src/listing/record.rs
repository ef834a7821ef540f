use serde::{Deserialize, Serialize};
use std::fmt;

/// One normalized job advertisement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub title: String,
    /// Minimal salary in roubles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<u64>,
    /// Maximal salary in roubles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<u64>,
    pub company_name: String,
    pub address: String,
    pub description: String,
}

// Descriptions are free-form markup; two records of the same listing compare
// equal whatever their description bodies hold.
impl PartialEq for JobRecord {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.min_salary == other.min_salary
            && self.max_salary == other.max_salary
            && self.company_name == other.company_name
            && self.address == other.address
    }
}

impl Eq for JobRecord {}

impl fmt::Display for JobRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.title, self.company_name)?;
        match (self.min_salary, self.max_salary) {
            (Some(min), Some(max)) if min == max => write!(f, " ({})", min),
            (Some(min), Some(max)) => write!(f, " ({}-{})", min, max),
            (Some(min), None) => write!(f, " (from {})", min),
            (None, Some(max)) => write!(f, " (up to {})", max),
            (None, None) => Ok(()),
        }
    }
}
