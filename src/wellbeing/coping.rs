//! Categories of the guided coping exercises ("Hugo").

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopingCategory {
    Loneliness,
    Anxiety,
    Stress,
    Overwhelm,
}

impl CopingCategory {
    pub const ALL: [CopingCategory; 4] = [
        CopingCategory::Loneliness,
        CopingCategory::Anxiety,
        CopingCategory::Stress,
        CopingCategory::Overwhelm,
    ];

    /// Stable id written to the category list in the store.
    pub fn id(&self) -> &'static str {
        match self {
            CopingCategory::Loneliness => "einsamkeit",
            CopingCategory::Anxiety => "angst",
            CopingCategory::Stress => "stress",
            CopingCategory::Overwhelm => "ueberforderung",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CopingCategory::Loneliness => "Einsamkeit",
            CopingCategory::Anxiety => "Angst",
            CopingCategory::Stress => "Stress",
            CopingCategory::Overwhelm => "Überforderung",
        }
    }
}

impl fmt::Display for CopingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CopingCategory {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "einsamkeit" | "loneliness" => Ok(CopingCategory::Loneliness),
            "angst" | "anxiety" => Ok(CopingCategory::Anxiety),
            "stress" => Ok(CopingCategory::Stress),
            "ueberforderung" | "überforderung" | "overwhelm" => Ok(CopingCategory::Overwhelm),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}
