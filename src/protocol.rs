//! Frame codec for the xArm's serial-over-HID protocol.
//!
//! Every frame is `0x55 0x55 <len> <cmd> <params...>` where `len` counts
//! the command byte, the length byte itself, and the parameters
//! (`len = params + 2`). Outgoing HID reports prepend a zero report ID.
//! Multi-byte values inside `params` are little-endian.

/// Frame signature byte, sent twice.
pub const SIGNATURE: u8 = 0x55;

/// Size of the report buffer used for reads; the arm answers in one report.
pub const REPORT_LEN: usize = 64;

/// Reply read timeout in milliseconds.
pub const READ_TIMEOUT_MS: i32 = 50;

/// Highest commandable servo position.
pub const POSITION_MAX: u16 = 1000;

/// Degrees represented by one position unit; positions are centered on 500.
pub const DEGREES_PER_UNIT: f32 = 0.24;

/// Moves one or more servos to target positions over a shared duration.
pub const CMD_SERVO_MOVE: u8 = 3;

/// Reads the battery voltage in millivolts.
pub const CMD_GET_BATTERY_VOLTAGE: u8 = 15;

/// Releases torque on one or more servos.
pub const CMD_SERVO_STOP: u8 = 20;

/// Reads the current position of one or more servos.
pub const CMD_GET_SERVO_POSITION: u8 = 21;

/// Builds the outgoing HID report for `cmd`: a zero report ID, the doubled
/// signature, the length byte, the command, then the parameters.
pub fn encode_report(cmd: u8, params: &[u8]) -> Vec<u8> {
    let mut report = Vec::with_capacity(params.len() + 5);
    report.push(0x00); // HID report ID
    report.push(SIGNATURE);
    report.push(SIGNATURE);
    report.push(params.len() as u8 + 2);
    report.push(cmd);
    report.extend_from_slice(params);
    report
}

/// Extracts the parameter bytes of a reply to `cmd`.
///
/// Returns `None` unless both signature bytes are present, the command
/// echoes `cmd`, and the buffer holds all `len - 2` parameter bytes.
pub fn parse_reply(buf: &[u8], cmd: u8) -> Option<&[u8]> {
    if buf.len() < 4 || buf[0] != SIGNATURE || buf[1] != SIGNATURE || buf[3] != cmd {
        return None;
    }
    let len = usize::from(buf[2]);
    if len < 2 {
        return None;
    }
    buf.get(4..2 + len)
}

/// Parameter block for a grouped [`CMD_SERVO_MOVE`]: servo count, duration
/// in milliseconds (LE), then an `(id, position LE)` triplet per servo.
pub fn servo_move_params(moves: &[(u8, u16)], duration_ms: u16) -> Vec<u8> {
    let mut params = Vec::with_capacity(3 + moves.len() * 3);
    params.push(moves.len() as u8);
    params.extend_from_slice(&duration_ms.to_le_bytes());
    for &(servo, position) in moves {
        params.push(servo);
        params.extend_from_slice(&position.to_le_bytes());
    }
    params
}

/// Converts a raw servo position to degrees relative to the 500 midpoint.
pub fn position_to_degrees(position: u16) -> f32 {
    (f32::from(position) - 500.0) * DEGREES_PER_UNIT
}

/// Converts degrees back to a raw position, clamped to the commanded range.
pub fn degrees_to_position(degrees: f32) -> u16 {
    let units = (degrees / DEGREES_PER_UNIT + 500.0).round();
    units.clamp(0.0, f32::from(POSITION_MAX)) as u16
}
