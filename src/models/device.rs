use crate::error::{PricingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    #[default]
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// All conditions, best first.
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    /// Wire name, e.g. `"like-new"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like-new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }

    /// Human-readable name, e.g. `"Like New"`.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| PricingError::InvalidArgument(format!("Unknown condition '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// DeviceType
// ---------------------------------------------------------------------------

/// Device category chosen before specs are entered. The estimator itself is
/// category-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Smartphone,
    Laptop,
    Tablet,
    Smartwatch,
    Headphones,
    Desktop,
    Camera,
    Tv,
}

impl DeviceType {
    pub const ALL: [DeviceType; 8] = [
        DeviceType::Smartphone,
        DeviceType::Laptop,
        DeviceType::Tablet,
        DeviceType::Smartwatch,
        DeviceType::Headphones,
        DeviceType::Desktop,
        DeviceType::Camera,
        DeviceType::Tv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Smartphone => "smartphone",
            DeviceType::Laptop => "laptop",
            DeviceType::Tablet => "tablet",
            DeviceType::Smartwatch => "smartwatch",
            DeviceType::Headphones => "headphones",
            DeviceType::Desktop => "desktop",
            DeviceType::Camera => "camera",
            DeviceType::Tv => "tv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::Smartphone => "Smartphone",
            DeviceType::Laptop => "Laptop",
            DeviceType::Tablet => "Tablet",
            DeviceType::Smartwatch => "Smartwatch",
            DeviceType::Headphones => "Headphones",
            DeviceType::Desktop => "Desktop",
            DeviceType::Camera => "Camera",
            DeviceType::Tv => "TV",
        }
    }

    /// Brands offered for this category. Always ends with `"Other"`.
    pub fn brand_options(&self) -> &'static [&'static str] {
        match self {
            DeviceType::Smartphone => &[
                "Apple", "Samsung", "Google", "Xiaomi", "OnePlus", "Huawei", "Motorola", "Sony",
                "LG", "Other",
            ],
            DeviceType::Laptop => &[
                "Apple", "Dell", "HP", "Lenovo", "Asus", "Microsoft", "Acer", "MSI", "Razer",
                "Other",
            ],
            DeviceType::Tablet => &[
                "Apple", "Samsung", "Microsoft", "Lenovo", "Amazon", "Huawei", "Google", "Other",
            ],
            DeviceType::Smartwatch => &[
                "Apple", "Samsung", "Garmin", "Fitbit", "Fossil", "Huawei", "Amazfit", "Other",
            ],
            DeviceType::Headphones => &[
                "Apple",
                "Sony",
                "Bose",
                "Sennheiser",
                "JBL",
                "Samsung",
                "Beats",
                "Jabra",
                "Other",
            ],
            DeviceType::Desktop | DeviceType::Camera | DeviceType::Tv => {
                &["Apple", "Samsung", "Sony", "LG", "Other"]
            }
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        DeviceType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| PricingError::InvalidArgument(format!("Unknown device type '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// DeviceSpecs
// ---------------------------------------------------------------------------

/// User-entered attributes of one device.
///
/// Numeric sizes are in GB (`ram`, `storage`), inches (`screen_size`), and
/// mAh (`battery`). Keys outside the fixed field set land in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSpecs {
    pub brand: String,
    pub model: String,
    pub release_year: i32,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphics: Option<String>,
    #[serde(default)]
    pub additional_features: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl DeviceSpecs {
    /// Specs for a new device with no optional attributes set.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, release_year: i32) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            release_year,
            condition: Condition::New,
            processor: None,
            ram: None,
            storage: None,
            screen_size: None,
            resolution: None,
            camera: None,
            battery: None,
            operating_system: None,
            graphics: None,
            additional_features: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_ram(mut self, gb: u32) -> Self {
        self.ram = Some(gb);
        self
    }

    pub fn with_storage(mut self, gb: u32) -> Self {
        self.storage = Some(gb);
        self
    }

    pub fn with_processor(mut self, processor: impl Into<String>) -> Self {
        self.processor = Some(processor.into());
        self
    }
}
