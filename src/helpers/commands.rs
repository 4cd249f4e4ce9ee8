use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("empty command line")]
    Empty,
    #[error("could not run '{cmd}': {source}")]
    Spawn {
        cmd: String,
        source: std::io::Error,
    },
    #[error("'{cmd}' was terminated by a signal")]
    Signal { cmd: String },
}

/// Output of a finished command.
#[derive(Debug)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
}

/// Runs `cmdline` (program followed by fixed leading arguments, whitespace
/// separated) with `args` appended, and waits for it to finish. Only
/// `cmdline` is logged, never the appended arguments.
pub fn run_command<I, S>(cmdline: &str, args: I) -> Result<CommandOutput, CommandError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parts = cmdline.split_whitespace();
    let program = parts.next().ok_or(CommandError::Empty)?;
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    let mut command = Command::new(program);
    command.args(parts);
    command.args(&args);
    command.stdin(Stdio::null());

    // Appended arguments may carry credentials
    log::debug!("Running '{cmdline}' with {} argument(s)", args.len());
    let output = command.output().map_err(|source| CommandError::Spawn {
        cmd: cmdline.to_string(),
        source,
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        log::debug!("'{cmdline}' stderr: {}", stderr.trim_end());
    }

    match output.status.code() {
        Some(code) => Ok(CommandOutput {
            code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        }),
        None => Err(CommandError::Signal {
            cmd: cmdline.to_string(),
        }),
    }
}
