use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Launch `cmdline` in the background.
///
/// Standard streams are detached so the child cannot write into the
/// status stream.  The child is reaped on a separate task; failures are
/// only logged.
pub fn spawn_command(cmdline: &str) {
    let Some(argv) = shlex::split(cmdline) else {
        warn!("Cannot parse command line '{cmdline}'");
        return;
    };
    let Some((program, args)) = argv.split_first() else {
        warn!("Empty command line");
        return;
    };

    let spawned = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(mut child) => {
            info!("Launched '{cmdline}'");
            let cmdline = cmdline.to_string();
            tokio::spawn(async move {
                match child.wait().await {
                    Ok(status) => debug!("'{cmdline}' exited with {status}"),
                    Err(e) => warn!("Waiting for '{cmdline}' failed: {e}"),
                }
            });
        }
        Err(e) => warn!("Cannot launch '{cmdline}': {e}"),
    }
}
