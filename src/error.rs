//! Every error that can occur in armscout.

use thiserror::Error;

/// Alias to simplify the results of armscout functions.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The host's HID layer could not be queried, or device I/O failed.
    #[error("HID platform access failed: {0}")]
    Platform(#[from] hidapi::HidError),

    /// Writing a report to the output stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A target-set document failed to parse.
    #[error("invalid target set: {0}")]
    Config(#[from] toml::de::Error),

    /// No attached device matched the requested target.
    #[error("no device matching {0} is attached")]
    DeviceNotFound(String),

    /// A descriptor path contained an interior NUL byte and cannot be used
    /// to address a device.
    #[error("device path is not a valid C string: {0}")]
    Path(#[from] std::ffi::NulError),

    /// A commanded servo position was outside the arm's accepted range.
    #[error("servo position {0} out of range (0..=1000)")]
    PositionOutOfRange(u16),

    /// The device produced no well-formed reply to the given command within
    /// the read timeout.
    #[error("no reply for command {cmd:#04x}")]
    NoReply { cmd: u8 },
}
