//! Device descriptor snapshot.
//!
//! [`DeviceDescriptor`] is a lightweight, cloneable description of one HID
//! device as reported by the platform at enumeration time. It is suitable
//! for report rendering, logging, and persistence; string fields the
//! platform did not report remain `None`.
//!
//! # Conventions
//! - `vendor_id`/`product_id` identify the device model and are stable
//!   across reconnects.
//! - `serial_number` (when present) identifies the physical unit.
//! - `path` is an OS/topology path (opaque string) that addresses the
//!   device for a later open; it may change across ports, drivers, and
//!   reconnects. Treat it as diagnostic first, identity second.
//!
//! A descriptor is a snapshot: it is created fresh on each enumeration and
//! never mutated. Duplicates and ordering are whatever the platform
//! reported.

use hidapi::DeviceInfo;
use serde::{Deserialize, Serialize};

/// Snapshot of one attached HID device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// USB Vendor ID (VID).
    pub vendor_id: u16,

    /// USB Product ID (PID).
    pub product_id: u16,

    /// Serial number supplied by firmware/OS, if present.
    ///
    /// On USB this usually maps to the iSerialNumber string.
    pub serial_number: Option<String>,

    /// Manufacturer name from the driver/firmware.
    pub manufacturer_string: Option<String>,

    /// Human-readable product name from the driver/firmware.
    pub product_string: Option<String>,

    /// OS/topological path to the device, lossily decoded from the
    /// platform's C string.
    pub path: String,
}

impl From<&DeviceInfo> for DeviceDescriptor {
    fn from(info: &DeviceInfo) -> Self {
        Self {
            vendor_id: info.vendor_id(),
            product_id: info.product_id(),
            serial_number: info.serial_number().map(str::to_owned),
            manufacturer_string: info.manufacturer_string().map(str::to_owned),
            product_string: info.product_string().map(str::to_owned),
            path: info.path().to_string_lossy().into_owned(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serializes_and_round_trips() {
        let descriptor = DeviceDescriptor {
            vendor_id: 0x0483,
            product_id: 0x5750,
            serial_number: Some("4985732".to_owned()),
            manufacturer_string: Some("MyUSB_HID".to_owned()),
            product_string: Some("LOBOT".to_owned()),
            path: "/dev/hidraw3".to_owned(),
        };

        let json = serde_json::to_string(&descriptor).unwrap();
        let back: DeviceDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, descriptor);
    }

    #[test]
    fn absent_strings_stay_absent() {
        let json = r#"{
            "vendor_id": 1240,
            "product_id": 63,
            "serial_number": null,
            "manufacturer_string": null,
            "product_string": null,
            "path": ""
        }"#;

        let descriptor: DeviceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.vendor_id, 0x04d8);
        assert_eq!(descriptor.product_id, 0x003f);
        assert!(descriptor.serial_number.is_none());
        assert!(descriptor.product_string.is_none());
    }
}
