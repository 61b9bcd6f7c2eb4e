use std::io::Write;

/// Progress reporting for a bump run.
///
/// The run never prints on its own; everything it has to say goes through a `Reporter`, so the
/// same run can log to a terminal or talk to a CI system.
pub trait Reporter {
    /// An informational message.
    fn info(&mut self, message: &str);

    /// Something worth the user's attention that does not fail the run.
    fn notice(&mut self, message: &str);

    /// Opens a named group of messages.
    fn start_group(&mut self, name: &str);

    /// Closes the most recently opened group.
    fn end_group(&mut self);

    /// The run failed with `message`.
    fn fail(&mut self, message: &str);
}

/// Reports through `tracing` events.
#[derive(Debug, Default)]
pub struct LogReporter {
    groups: Vec<String>,
}

impl LogReporter {
    /// Returns a reporter with no open groups.
    pub fn new() -> Self {
        Self::default()
    }

    fn group(&self) -> &str {
        self.groups.last().map(String::as_str).unwrap_or_default()
    }
}

impl Reporter for LogReporter {
    fn info(&mut self, message: &str) {
        tracing::info!(group = self.group(), "{message}");
    }

    fn notice(&mut self, message: &str) {
        tracing::warn!(group = self.group(), "{message}");
    }

    fn start_group(&mut self, name: &str) {
        tracing::info!(group = name, "started");
        self.groups.push(name.to_owned());
    }

    fn end_group(&mut self) {
        if let Some(name) = self.groups.pop() {
            tracing::debug!(group = %name, "finished");
        }
    }

    fn fail(&mut self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Reports as GitHub Actions workflow commands, e.g. `::group::name`.
///
/// Write errors are dropped: there is nowhere else to report them.
#[derive(Debug)]
pub struct WorkflowReporter<W: Write> {
    out: W,
}

impl<W: Write> WorkflowReporter<W> {
    /// Returns a reporter writing commands to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn command(&mut self, name: &str, data: &str) {
        let _ = writeln!(self.out, "::{name}::{}", escape_data(data));
    }
}

/// Escapes workflow command data so it stays on one line.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl<W: Write> Reporter for WorkflowReporter<W> {
    fn info(&mut self, message: &str) {
        let _ = writeln!(self.out, "{message}");
    }

    fn notice(&mut self, message: &str) {
        self.command("notice", message);
    }

    fn start_group(&mut self, name: &str) {
        self.command("group", name);
    }

    fn end_group(&mut self) {
        let _ = writeln!(self.out, "::endgroup::");
    }

    fn fail(&mut self, message: &str) {
        self.command("error", message);
    }
}
