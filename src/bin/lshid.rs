//! Prints the vendor and product ID of every attached HID device.

use std::io;

use armscout::report::write_inventory;
use armscout::{DeviceLister, Error};

fn main() -> Result<(), Error> {
    env_logger::init();

    let lister = DeviceLister::new()?;
    let devices = lister.snapshot();
    write_inventory(&mut io::stdout().lock(), &devices)?;
    Ok(())
}
