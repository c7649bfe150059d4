//! armscout: HID device inventory and xArm servo control.
//!
//! Provides a point-in-time snapshot of attached HID devices via `hidapi`,
//! text reports over those snapshots, and a controller for the
//! serial-over-HID protocol spoken by Hiwonder/LOBOT xArm robot arms.

pub mod controller;
pub mod descriptor;
pub mod error;
pub mod lister;
pub mod protocol;
pub mod report;
pub mod target;

pub use controller::Controller;
pub use descriptor::DeviceDescriptor;
pub use error::{Error, Result};
pub use lister::DeviceLister;
pub use target::{Target, TargetSet};
