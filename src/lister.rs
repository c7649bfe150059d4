use hidapi::HidApi;

use crate::descriptor::DeviceDescriptor;
use crate::error::Result;
use crate::target::Target;

/// Enumerates the HID devices currently attached to the host.
///
/// Holds the process-wide `hidapi` context; hand out [`DeviceLister::api`]
/// instead of constructing a second `HidApi`.
pub struct DeviceLister {
    api: HidApi,
}

impl DeviceLister {
    pub fn new() -> Result<Self> {
        Ok(Self {
            api: HidApi::new()?,
        })
    }

    /// All attached devices, in the order the platform reports them.
    pub fn snapshot(&self) -> Vec<DeviceDescriptor> {
        self.api.device_list().map(DeviceDescriptor::from).collect()
    }

    /// Devices matching `target` exactly on both IDs.
    ///
    /// `hidapi` only exposes unfiltered enumeration, so the filter runs
    /// in-process over the full list.
    pub fn matching(&self, target: &Target) -> Vec<DeviceDescriptor> {
        self.api
            .device_list()
            .map(DeviceDescriptor::from)
            .filter(|device| target.matches(device))
            .collect()
    }

    /// The underlying `hidapi` context, for opening devices.
    pub fn api(&self) -> &HidApi {
        &self.api
    }
}
