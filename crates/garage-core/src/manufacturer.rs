//! Manufacturer records

use serde::{Deserialize, Serialize};

/// Identifier of a manufacturer, unique within the manufacturer sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManufacturerId(pub i32);

impl ManufacturerId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ManufacturerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ManufacturerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vehicle manufacturer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    /// Unique identifier, assigned at creation
    pub id: ManufacturerId,

    /// Display name
    pub name: String,

    /// Free-form revenue text; currency and magnitude are not normalized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
}

impl Manufacturer {
    pub fn new(id: impl Into<ManufacturerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            revenue: None,
        }
    }

    pub fn with_revenue(mut self, revenue: impl Into<String>) -> Self {
        self.revenue = Some(revenue.into());
        self
    }
}

/// Data for creating a new manufacturer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewManufacturer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
}

impl NewManufacturer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            revenue: None,
        }
    }

    pub fn with_revenue(mut self, revenue: impl Into<String>) -> Self {
        self.revenue = Some(revenue.into());
        self
    }

    /// Build the stored record once an id has been assigned
    pub fn into_manufacturer(self, id: ManufacturerId) -> Manufacturer {
        Manufacturer {
            id,
            name: self.name,
            revenue: self.revenue,
        }
    }
}
