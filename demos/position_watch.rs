//! Polls all six servo positions at roughly 100 Hz and prints one line per
//! iteration, then releases torque on exit.

use std::thread;
use std::time::{Duration, Instant};

use armscout::controller::ALL_SERVOS;
use armscout::{Controller, DeviceLister, Error, Target};

fn main() -> Result<(), Error> {
    env_logger::init();

    let lister = DeviceLister::new()?;
    let target = Target::xarm();
    let descriptor = lister
        .matching(&target)
        .into_iter()
        .next()
        .ok_or_else(|| Error::DeviceNotFound(target.name.clone()))?;
    let arm = Controller::open_device(lister.api(), &descriptor)?;

    println!("battery: {:.2} V", arm.battery_voltage()?);

    let iterations = 100;
    let interval = Duration::from_millis(10); // 100 Hz

    for i in 0..iterations {
        let start = Instant::now();

        let positions = arm.positions(&ALL_SERVOS)?;
        let fields: Vec<String> = positions
            .iter()
            .map(|&(servo, position)| format!("{servo}={position:4}"))
            .collect();
        println!("iteration {:3}: {}", i + 1, fields.join(" "));

        // Keep the pace without drifting when a read runs long.
        if let Some(rest) = interval.checked_sub(start.elapsed()) {
            thread::sleep(rest);
        }
    }

    arm.servo_off_all()?;
    Ok(())
}
