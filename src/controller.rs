//! Servo control over an open xArm HID connection.

use std::ffi::CString;
use std::thread;
use std::time::Duration;

use hidapi::{HidApi, HidDevice};
use log::debug;

use crate::descriptor::DeviceDescriptor;
use crate::error::{Error, Result};
use crate::protocol::{
    self, CMD_GET_BATTERY_VOLTAGE, CMD_GET_SERVO_POSITION, CMD_SERVO_MOVE, CMD_SERVO_STOP,
};
use crate::target::Target;

/// Servo IDs present on a six-axis xArm.
pub const ALL_SERVOS: [u8; 6] = [1, 2, 3, 4, 5, 6];

/// An open connection to an xArm's HID control endpoint.
///
/// Commands are fire-and-forget writes; queries write a request and block
/// up to the protocol read timeout for the matching reply.
pub struct Controller {
    device: HidDevice,
}

impl Controller {
    /// Opens the first attached device matching `target`'s IDs.
    pub fn open(api: &HidApi, target: &Target) -> Result<Self> {
        Ok(Self {
            device: api.open(target.vendor_id, target.product_id)?,
        })
    }

    /// Opens the device a snapshot entry points at, via its platform path.
    pub fn open_device(api: &HidApi, descriptor: &DeviceDescriptor) -> Result<Self> {
        let path = CString::new(descriptor.path.as_str())?;
        Ok(Self {
            device: api.open_path(&path)?,
        })
    }

    fn send(&self, cmd: u8, params: &[u8]) -> Result<()> {
        let report = protocol::encode_report(cmd, params);
        debug!("send {:02x?}", &report[1..]);
        self.device.write(&report)?;
        Ok(())
    }

    fn recv(&self, cmd: u8) -> Result<Vec<u8>> {
        let mut buf = [0u8; protocol::REPORT_LEN];
        let read = self.device.read_timeout(&mut buf, protocol::READ_TIMEOUT_MS)?;
        match protocol::parse_reply(&buf[..read], cmd) {
            Some(params) => {
                debug!("recv {:02x?}", params);
                Ok(params.to_vec())
            }
            None => Err(Error::NoReply { cmd }),
        }
    }

    /// Moves one servo to `position` over `duration_ms` milliseconds.
    ///
    /// With `wait` set, blocks until the move duration has elapsed.
    pub fn set_position(&self, servo: u8, position: u16, duration_ms: u16, wait: bool) -> Result<()> {
        self.set_positions(&[(servo, position)], duration_ms, wait)
    }

    /// Moves several servos in one grouped command over a shared duration.
    pub fn set_positions(&self, moves: &[(u8, u16)], duration_ms: u16, wait: bool) -> Result<()> {
        for &(_, position) in moves {
            if position > protocol::POSITION_MAX {
                return Err(Error::PositionOutOfRange(position));
            }
        }

        self.send(CMD_SERVO_MOVE, &protocol::servo_move_params(moves, duration_ms))?;
        if wait {
            thread::sleep(Duration::from_millis(u64::from(duration_ms)));
        }
        Ok(())
    }

    /// Reads one servo's current position.
    pub fn position(&self, servo: u8) -> Result<u16> {
        let mut positions = self.positions(&[servo])?;
        positions
            .pop()
            .map(|(_, position)| position)
            .ok_or(Error::NoReply {
                cmd: CMD_GET_SERVO_POSITION,
            })
    }

    /// Reads several servo positions in one round trip, returned as
    /// `(servo, position)` pairs in the order the arm reports them.
    pub fn positions(&self, servos: &[u8]) -> Result<Vec<(u8, u16)>> {
        let mut params = Vec::with_capacity(servos.len() + 1);
        params.push(servos.len() as u8);
        params.extend_from_slice(servos);
        self.send(CMD_GET_SERVO_POSITION, &params)?;

        // Reply params: count, then (id, position LE) triplets.
        let reply = self.recv(CMD_GET_SERVO_POSITION)?;
        let no_reply = || Error::NoReply {
            cmd: CMD_GET_SERVO_POSITION,
        };
        let count = usize::from(*reply.first().ok_or_else(no_reply)?);
        let triplets = reply.get(1..1 + count * 3).ok_or_else(no_reply)?;

        Ok(triplets
            .chunks_exact(3)
            .map(|t| (t[0], u16::from_le_bytes([t[1], t[2]])))
            .collect())
    }

    /// Releases torque on the given servos.
    pub fn servo_off(&self, servos: &[u8]) -> Result<()> {
        let mut params = Vec::with_capacity(servos.len() + 1);
        params.push(servos.len() as u8);
        params.extend_from_slice(servos);
        self.send(CMD_SERVO_STOP, &params)
    }

    /// Releases torque on all six servos.
    pub fn servo_off_all(&self) -> Result<()> {
        self.servo_off(&ALL_SERVOS)
    }

    /// Reads the battery voltage in volts.
    pub fn battery_voltage(&self) -> Result<f32> {
        self.send(CMD_GET_BATTERY_VOLTAGE, &[])?;
        let reply = self.recv(CMD_GET_BATTERY_VOLTAGE)?;
        match *reply.as_slice() {
            [lo, hi, ..] => Ok(f32::from(u16::from_le_bytes([lo, hi])) / 1000.0),
            _ => Err(Error::NoReply {
                cmd: CMD_GET_BATTERY_VOLTAGE,
            }),
        }
    }
}
