//! Handing external URLs to the platform

use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

use crate::errors::LinkError;

/// Opens a URL outside the terminal
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<(), LinkError>;
}

/// Spawns the desktop's default handler without blocking the UI
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<(), LinkError> {
        #[cfg(target_os = "windows")]
        let (program, args): (&'static str, Vec<String>) = (
            "cmd",
            vec!["/C".into(), "start".into(), String::new(), escape_for_cmd(url)],
        );

        #[cfg(target_os = "macos")]
        let (program, args): (&'static str, Vec<String>) = ("open", vec![url.to_string()]);

        #[cfg(all(unix, not(target_os = "macos")))]
        let (program, args): (&'static str, Vec<String>) = ("xdg-open", vec![url.to_string()]);

        launch(program, &args, url)
    }
}

/// Spawn `program` detached from the terminal. A background thread waits on
/// the child so it is reaped when it exits.
fn launch(program: &'static str, args: &[String], url: &str) -> Result<(), LinkError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LinkError::Spawn {
            program,
            url: url.to_string(),
            source,
        })?;

    thread::spawn(move || match child.wait() {
        Ok(status) => debug!(program, %status, "link handler exited"),
        Err(e) => debug!(program, error = %e, "link handler wait failed"),
    });
    Ok(())
}

/// `cmd` splits commands on `&` and `|` even inside a URL; `^` makes each
/// metacharacter literal.
#[cfg(any(windows, test))]
fn escape_for_cmd(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        if matches!(c, '^' | '&' | '|' | '<' | '>' | '(' | ')') {
            escaped.push('^');
        }
        escaped.push(c);
    }
    escaped
}
