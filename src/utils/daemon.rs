//! Background mode

use std::{
    ffi::OsString,
    io,
    process::{Command, Stdio},
};
use tracing::info;

/// Relaunch the current executable with `args`, detached from the terminal
///
/// The child gets its own process group, so a Ctrl-C in the launching
/// terminal does not reach it, and null stdio. Returns the child's pid.
pub fn spawn_detached(args: &[OsString]) -> io::Result<u32> {
    let exe = std::env::current_exe()?;

    let mut command = Command::new(exe);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let child = command.spawn()?;
    info!("Countdown continues in background process {}", child.id());
    Ok(child.id())
}
