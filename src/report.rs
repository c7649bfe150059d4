//! Text reports over device snapshots.
//!
//! Writers are generic over [`io::Write`] so the exact output can be
//! asserted against byte buffers; the binaries pass a locked stdout.

use std::io::{self, Write};

use crate::descriptor::DeviceDescriptor;
use crate::target::Target;

/// Placeholder rendered for descriptor strings the platform did not report.
const UNKNOWN: &str = "Unknown";

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNKNOWN)
}

/// Writes the full inventory: a header line, then vendor and product IDs
/// for every device, two lines per device, IDs as 4-digit lowercase hex.
pub fn write_inventory(out: &mut impl Write, devices: &[DeviceDescriptor]) -> io::Result<()> {
    writeln!(out, "Listing all HID devices:")?;
    for device in devices {
        writeln!(out, "Vendor ID: 0x{:04x}", device.vendor_id)?;
        writeln!(out, "Product ID: 0x{:04x}", device.product_id)?;
    }
    Ok(())
}

/// Writes the search report for `target`.
///
/// Matches get their path, serial number, manufacturer and product strings
/// printed one per line. With no match, falls back to one combined line per
/// device of the unfiltered snapshot `all`.
pub fn write_target_report(
    out: &mut impl Write,
    target: &Target,
    matches: &[DeviceDescriptor],
    all: &[DeviceDescriptor],
) -> io::Result<()> {
    writeln!(out, "Checking for {} device...", target.name)?;

    if matches.is_empty() {
        writeln!(
            out,
            "{} device not found. Listing all HID devices:",
            target.name
        )?;
        for device in all {
            writeln!(
                out,
                "VID: 0x{:04x}, PID: 0x{:04x}, Product: {}",
                device.vendor_id,
                device.product_id,
                field(&device.product_string)
            )?;
        }
        return Ok(());
    }

    writeln!(out, "{} device found:", target.name)?;
    for device in matches {
        writeln!(out, "  Path: {}", device.path)?;
        writeln!(out, "  Serial Number: {}", field(&device.serial_number))?;
        writeln!(out, "  Manufacturer: {}", field(&device.manufacturer_string))?;
        writeln!(out, "  Product: {}", field(&device.product_string))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn xarm_descriptor() -> DeviceDescriptor {
        DeviceDescriptor {
            vendor_id: 0x0483,
            product_id: 0x5750,
            serial_number: Some("4985732".to_owned()),
            manufacturer_string: Some("MyUSB_HID".to_owned()),
            product_string: Some("LOBOT".to_owned()),
            path: "/dev/hidraw3".to_owned(),
        }
    }

    fn other_descriptor() -> DeviceDescriptor {
        DeviceDescriptor {
            vendor_id: 0x04d8,
            product_id: 0x003f,
            serial_number: None,
            manufacturer_string: Some("Microchip".to_owned()),
            product_string: Some("Simple HID".to_owned()),
            path: "/dev/hidraw1".to_owned(),
        }
    }

    fn render(devices: &[DeviceDescriptor]) -> String {
        let mut out = Vec::new();
        write_inventory(&mut out, devices).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn inventory_formats_ids_as_four_digit_lowercase_hex() {
        let text = render(&[other_descriptor(), xarm_descriptor()]);
        assert_eq!(
            text,
            "Listing all HID devices:\n\
             Vendor ID: 0x04d8\n\
             Product ID: 0x003f\n\
             Vendor ID: 0x0483\n\
             Product ID: 0x5750\n"
        );
    }

    #[test]
    fn empty_inventory_is_header_only() {
        assert_eq!(render(&[]), "Listing all HID devices:\n");
    }

    #[test]
    fn inventory_is_deterministic() {
        let devices = [xarm_descriptor(), other_descriptor()];
        assert_eq!(render(&devices), render(&devices));
    }

    #[test]
    fn target_report_prints_match_details() {
        let mut out = Vec::new();
        write_target_report(&mut out, &Target::xarm(), &[xarm_descriptor()], &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Checking for xArm device...\n\
             xArm device found:\n\
             \x20 Path: /dev/hidraw3\n\
             \x20 Serial Number: 4985732\n\
             \x20 Manufacturer: MyUSB_HID\n\
             \x20 Product: LOBOT\n"
        );
    }

    #[test]
    fn target_report_falls_back_to_combined_listing() {
        let all = [other_descriptor(), xarm_descriptor()];
        let mut out = Vec::new();
        write_target_report(&mut out, &Target::xarm(), &[], &all).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Checking for xArm device...\n\
             xArm device not found. Listing all HID devices:\n\
             VID: 0x04d8, PID: 0x003f, Product: Simple HID\n\
             VID: 0x0483, PID: 0x5750, Product: LOBOT\n"
        );
    }

    #[test]
    fn absent_strings_render_as_unknown() {
        let mut bare = other_descriptor();
        bare.manufacturer_string = None;
        bare.product_string = None;

        let mut out = Vec::new();
        write_target_report(
            &mut out,
            &Target::new("Simple HID", 0x04d8, 0x003f),
            &[bare.clone()],
            &[],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  Serial Number: Unknown\n"));
        assert!(text.contains("  Manufacturer: Unknown\n"));
        assert!(text.contains("  Product: Unknown\n"));

        let mut out = Vec::new();
        write_target_report(&mut out, &Target::xarm(), &[], &[bare]).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("VID: 0x04d8, PID: 0x003f, Product: Unknown\n"));
    }
}
