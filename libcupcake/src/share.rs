//! Share collaborator
//!
//! Hands a finished order summary (subject + body) to something outside
//! the wizard. Sharing is fire-and-forget: no target reports delivery.
//!
//! # Targets
//!
//! - [`CommandShare`]: launches a configured program, body on stdin
//! - [`LogShare`]: records the order as a structured log event
//! - [`MemoryShare`]: keeps shares in memory, for tests and embedding

use std::io::{ErrorKind, Write};
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::error::ShareError;
use crate::order::OrderSnapshot;

/// Subject line used for every shared order
pub const ORDER_SUBJECT: &str = "New Cupcake Order";

/// Placeholder replaced by the subject in share command arguments
pub const SUBJECT_PLACEHOLDER: &str = "{subject}";

/// Something that can receive a shared order
pub trait ShareTarget {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Hand off the subject and body and return immediately
    fn share(&self, subject: &str, body: &str) -> Result<(), ShareError>;
}

/// Text of a shared order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub subject: String,
    pub body: String,
}

impl OrderSummary {
    pub fn from_snapshot(snapshot: &OrderSnapshot) -> Self {
        let flavor = snapshot.flavor.as_deref().unwrap_or("-");
        let date = snapshot.date.as_deref().unwrap_or("-");
        let body = format!(
            "Quantity: {} cupcakes\nFlavor: {}\nPickup date: {}\nTotal: {}\n\nThank you!",
            snapshot.quantity, flavor, date, snapshot.price
        );
        Self {
            subject: ORDER_SUBJECT.to_string(),
            body,
        }
    }
}

/// Launches an external program for each shared order
///
/// Arguments equal to or containing `{subject}` have it substituted. The
/// body is written to the program's stdin. The program is not awaited;
/// finished children are reaped on later shares.
pub struct CommandShare {
    program: String,
    args: Vec<String>,
    children: Mutex<Vec<Child>>,
}

impl CommandShare {
    /// Build from a command line such as `["mail", "-s", "{subject}", "me@example.com"]`
    pub fn from_command(command: &[String]) -> Result<Self, ShareError> {
        let (program, args) = command.split_first().ok_or(ShareError::EmptyCommand)?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            children: Mutex::new(Vec::new()),
        })
    }

    fn reap(children: &mut Vec<Child>) {
        children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                debug!(pid = child.id(), %status, "Share command exited");
                false
            }
            Ok(None) => true,
            Err(e) => {
                warn!(pid = child.id(), error = %e, "Failed to poll share command");
                false
            }
        });
    }
}

impl ShareTarget for CommandShare {
    fn name(&self) -> &str {
        &self.program
    }

    fn share(&self, subject: &str, body: &str) -> Result<(), ShareError> {
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(SUBJECT_PLACEHOLDER, subject))
            .collect();

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ShareError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // stdin is dropped at the end of the block so the program sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(body.as_bytes()),
            None => Ok(()),
        };
        let pid = child.id();

        // Track the child before reporting anything so it is always reaped
        {
            let mut children = self
                .children
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            Self::reap(&mut children);
            children.push(child);
        }

        match written {
            Ok(()) => {
                info!(program = %self.program, pid, "Order handed to share command");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                warn!(program = %self.program, pid, "Share command did not read the order body");
                Ok(())
            }
            Err(e) => Err(ShareError::Stdin(e)),
        }
    }
}

/// Records each shared order as an `info` log event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogShare;

impl ShareTarget for LogShare {
    fn name(&self) -> &str {
        "log"
    }

    fn share(&self, subject: &str, body: &str) -> Result<(), ShareError> {
        info!(subject = %subject, body = %body, "Order shared");
        Ok(())
    }
}

/// Keeps shared orders in memory
///
/// Clones share the same storage, so a test can keep one handle and give
/// the other to the flow controller.
#[derive(Debug, Default, Clone)]
pub struct MemoryShare {
    shared: Arc<Mutex<Vec<OrderSummary>>>,
}

impl MemoryShare {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders shared so far, oldest first
    pub fn shared(&self) -> Vec<OrderSummary> {
        self.shared
            .lock()
            .map(|shared| shared.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl ShareTarget for MemoryShare {
    fn name(&self) -> &str {
        "memory"
    }

    fn share(&self, subject: &str, body: &str) -> Result<(), ShareError> {
        let mut shared = self
            .shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        shared.push(OrderSummary {
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Pick the share target for an optional configured command
pub fn target_for(command: Option<&[String]>) -> Result<Box<dyn ShareTarget>, ShareError> {
    match command {
        Some(command) => Ok(Box::new(CommandShare::from_command(command)?)),
        None => Ok(Box::new(LogShare)),
    }
}
