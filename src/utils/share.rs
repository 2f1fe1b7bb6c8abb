use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use std::io::Write;
use std::process::{Command, Stdio};

use crate::utils::format::format_percent;

pub fn share_message(average: f64) -> String {
    format!(
        "الحمد لله، حققت اليوم نسبة خشوع {} في صلواتي عبر تطبيق خاشع. 🌿✨ #خاشع #صلاة",
        format_percent(average)
    )
}

pub trait ShareTarget {
    fn name(&self) -> &str;
    fn share(&self, message: &str) -> Result<()>;
}

/// Pipes the message into the first clipboard tool found on the system.
pub struct ClipboardCommand {
    candidates: Vec<(&'static str, Vec<&'static str>)>,
}

impl Default for ClipboardCommand {
    fn default() -> Self {
        Self {
            candidates: vec![
                ("wl-copy", vec![]),
                ("xclip", vec!["-selection", "clipboard"]),
                ("pbcopy", vec![]),
            ],
        }
    }
}

impl ClipboardCommand {
    fn pipe_into(program: &str, args: &[&str], message: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Spawning {}", program))?;
        child
            .stdin
            .take()
            .context("Clipboard stdin unavailable")?
            .write_all(message.as_bytes())?;
        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(anyhow!("{} exited with {}", program, status))
        }
    }
}

impl ShareTarget for ClipboardCommand {
    fn name(&self) -> &str {
        "clipboard"
    }

    fn share(&self, message: &str) -> Result<()> {
        for (program, args) in &self.candidates {
            match Self::pipe_into(program, args, message) {
                Ok(()) => return Ok(()),
                Err(e) => debug!("Clipboard via {} failed: {:#}", program, e),
            }
        }
        Err(anyhow!("No clipboard tool available"))
    }
}

/// Prints the message so it can be copied by hand.
pub struct StdoutShare;

impl ShareTarget for StdoutShare {
    fn name(&self) -> &str {
        "stdout"
    }

    fn share(&self, message: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", message)?;
        Ok(())
    }
}

/// Try each target in order. Returns the name of the one that worked.
/// Failures are logged, never returned.
pub fn share<'a>(message: &str, targets: &'a [&'a dyn ShareTarget]) -> Option<&'a str> {
    for target in targets {
        match target.share(message) {
            Ok(()) => return Some(target.name()),
            Err(e) => warn!("Sharing via {} failed: {:#}", target.name(), e),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Failing;

    impl ShareTarget for Failing {
        fn name(&self) -> &str {
            "failing"
        }
        fn share(&self, _message: &str) -> Result<()> {
            Err(anyhow!("share surface absent"))
        }
    }

    #[derive(Default)]
    struct Recording {
        seen: RefCell<Vec<String>>,
    }

    impl ShareTarget for Recording {
        fn name(&self) -> &str {
            "recording"
        }
        fn share(&self, message: &str) -> Result<()> {
            self.seen.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn message_carries_rounded_average() {
        assert!(share_message(69.6).contains("70%"));
    }

    #[test]
    fn falls_back_to_next_target() {
        let recording = Recording::default();
        let targets: [&dyn ShareTarget; 2] = [&Failing, &recording];
        assert_eq!(share("hello", &targets), Some("recording"));
        assert_eq!(recording.seen.borrow().as_slice(), ["hello".to_string()]);
    }

    #[test]
    fn all_failing_is_not_an_error() {
        let targets: [&dyn ShareTarget; 1] = [&Failing];
        assert_eq!(share("hello", &targets), None);
    }
}
