//! Subprocess execution for the CLI under test.

use std::path::Path;
use std::process::ExitStatus;

use tokio::process::Command;

/// Runs a tokenized command and captures its combined output.
///
/// The first token is the program; it is resolved relative to the current
/// directory unless already absolute, so scenarios can name a locally built
/// binary without a `./` prefix. Stdout and stderr are captured separately
/// and concatenated, stdout first.
///
/// A non-zero exit is not an error here; callers decide how to treat the
/// exit status.
pub async fn run_captured(args: &[String]) -> std::io::Result<(ExitStatus, String)> {
    let (program, rest) = args.split_first().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command line")
    })?;

    // Path::join passes absolute programs through untouched.
    let output = Command::new(Path::new(".").join(program))
        .args(rest)
        .output()
        .await?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok((output.status, combined))
}
