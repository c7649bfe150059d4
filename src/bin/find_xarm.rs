//! Looks for an xArm and prints its descriptor fields.
//!
//! Falls back to a combined listing of every attached HID device when no
//! arm is found. An optional `targets.toml` in the working directory
//! replaces the built-in xArm target.

use std::io;
use std::path::Path;

use armscout::report::write_target_report;
use armscout::{DeviceLister, Error, Target, TargetSet};

const TARGETS_FILE: &str = "targets.toml";

fn targets() -> Result<Vec<Target>, Error> {
    if Path::new(TARGETS_FILE).exists() {
        let set = TargetSet::load(TARGETS_FILE)?;
        if !set.targets.is_empty() {
            return Ok(set.targets);
        }
    }
    Ok(vec![Target::xarm()])
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let lister = DeviceLister::new()?;
    let mut out = io::stdout().lock();

    for target in targets()? {
        let matches = lister.matching(&target);
        let all = if matches.is_empty() {
            lister.snapshot()
        } else {
            Vec::new()
        };
        write_target_report(&mut out, &target, &matches, &all)?;
    }
    Ok(())
}
