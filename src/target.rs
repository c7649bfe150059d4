//! Named vendor/product targets.
//!
//! A [`Target`] picks out a device model by exact match on both IDs.
//! [`TargetSet`] is the serializable form, so lookup tables can live in a
//! TOML document instead of being compiled in.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::DeviceDescriptor;
use crate::error::Result;

/// Hiwonder/LOBOT xArm USB Vendor ID.
pub const XARM_VENDOR_ID: u16 = 0x0483;

/// Hiwonder/LOBOT xArm USB Product ID.
pub const XARM_PRODUCT_ID: u16 = 0x5750;

/// Identifies a device model to search for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Display name used in reports (e.g. `"xArm"`).
    pub name: String,
    pub vendor_id: u16,
    pub product_id: u16,
}

impl Target {
    pub fn new(name: impl Into<String>, vendor_id: u16, product_id: u16) -> Self {
        Self {
            name: name.into(),
            vendor_id,
            product_id,
        }
    }

    /// The built-in xArm target.
    pub fn xarm() -> Self {
        Self::new("xArm", XARM_VENDOR_ID, XARM_PRODUCT_ID)
    }

    /// True when `device` matches both IDs exactly.
    pub fn matches(&self, device: &DeviceDescriptor) -> bool {
        self.vendor_id == device.vendor_id && self.product_id == device.product_id
    }
}

/// Serializable set of named targets.
///
/// ```toml
/// [[targets]]
/// name = "xArm"
/// vendor_id = 0x0483
/// product_id = 0x5750
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetSet {
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl TargetSet {
    /// Parses a target set from a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a target set from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
