//! The kman processes module.
//!
//! Runs the bulk actions against the external tool, [TOOL].
//! Every selected file gets one synchronous `<tool> <verb> -f <file>` invocation and the
//! combined stdout/stderr of each call is copied to the transcript writer before the next one
//! starts. The first launch failure or non-zero exit aborts the remaining queue.
//!
//! Spawning goes through the [CommandRunner] trait so the ordering and abort rules can be
//! exercised without a real tool on PATH. [SystemRunner] is the implementation used by the binary.

use std::fmt;
use std::io::{self, Read, Write};
use std::process::{Child, Command, Stdio};

use thiserror::Error;

/// The external tool every bulk action drives.
pub const TOOL: &str = "kubectl";

/// The three bulk actions offered in the picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BulkAction {
    Apply,
    Delete,
    /// Delete every file, then apply every file.
    Restart,
}

impl BulkAction {
    /// The subcommand passes in execution order.
    pub fn passes(self) -> &'static [Verb] {
        match self {
            BulkAction::Apply => &[Verb::Apply],
            BulkAction::Delete => &[Verb::Delete],
            BulkAction::Restart => &[Verb::Delete, Verb::Apply],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BulkAction::Apply => "apply",
            BulkAction::Delete => "delete",
            BulkAction::Restart => "restart",
        }
    }
}

/// Subcommand handed to the external tool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verb {
    Apply,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Apply => "apply",
            Verb::Delete => "delete",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One queued call of the external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub verb: Verb,
    pub file: &'a str,
}

impl Invocation<'_> {
    pub fn args(&self) -> [&str; 3] {
        [self.verb.as_str(), "-f", self.file]
    }

    pub fn command_line(&self, tool: &str) -> String {
        format!("{} {} -f {}", tool, self.verb, self.file)
    }
}

/// Expands `action` over `selection` into the exact invocation order.
/// Passes never interleave: a restart deletes everything before applying anything.
pub fn plan(action: BulkAction, selection: &[String]) -> Vec<Invocation<'_>> {
    action
        .passes()
        .iter()
        .flat_map(|&verb| {
            selection
                .iter()
                .map(move |file| Invocation {
                    verb,
                    file: file.as_str(),
                })
        })
        .collect()
}

/// Result of a finished subprocess.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// stdout and stderr as they were written.
    pub output: Vec<u8>,
}

impl CommandOutput {
    #[inline]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Launches a program and waits for it.
pub trait CommandRunner {
    fn run(&mut self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// Runs commands with [std::process::Command], stdout and stderr sharing one pipe.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let (mut reader, writer) = io::pipe()?;

        // The command owns the write ends; dropping it after spawn leaves only the child's copies
        // so read_to_end sees EOF when the child exits.
        let mut child = {
            let mut cmd = Command::new(program);
            cmd.args(args)
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            cmd.spawn()?
        };

        drain_and_wait(&mut reader, &mut child)
    }
}

/// Reads the child's output to EOF, then waits for it. The child is reaped even when reading fails.
fn drain_and_wait<R: Read>(reader: &mut R, child: &mut Child) -> io::Result<CommandOutput> {
    let mut output = Vec::new();
    let read = reader.read_to_end(&mut output);
    let status = child.wait()?;
    read?;

    Ok(CommandOutput {
        code: status.code(),
        output,
    })
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{}", launch_message(.tool, .source))]
    Launch {
        tool: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` failed with {}", describe_code(.code))]
    Exit { command: String, code: Option<i32> },
    #[error("failed to write command output: {0}")]
    Output(#[from] io::Error),
}

fn launch_message(tool: &str, source: &io::Error) -> String {
    if source.kind() == io::ErrorKind::NotFound {
        format!("{} was not found in PATH", tool)
    } else {
        format!("failed to run {}: {}", tool, source)
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(c) => format!("exit status {}", c),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

/// Runs `action` over `selection` with `tool`, echoing each command line and its output to `out`.
///
/// Returns the number of invocations that completed. Stops at the first failing invocation.
pub fn run_bulk<R, W>(
    runner: &mut R,
    tool: &str,
    action: BulkAction,
    selection: &[String],
    out: &mut W,
) -> Result<usize, ActionError>
where
    R: CommandRunner + ?Sized,
    W: Write + ?Sized,
{
    tracing::info!(action = action.label(), files = selection.len(), "running bulk action");

    let mut done = 0;
    for inv in plan(action, selection) {
        let command = inv.command_line(tool);
        writeln!(out, "$ {}", command)?;
        out.flush()?;

        let result = runner
            .run(tool, &inv.args())
            .map_err(|source| ActionError::Launch {
                tool: tool.to_string(),
                source,
            })?;

        out.write_all(&result.output)?;
        out.flush()?;
        tracing::debug!(%command, code = ?result.code, "invocation finished");

        if !result.success() {
            return Err(ActionError::Exit {
                command,
                code: result.code,
            });
        }
        done += 1;
    }
    Ok(done)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plan_restart_deletes_everything_first() {
        let sel = files(&["f1", "f2"]);
        let order: Vec<_> = plan(BulkAction::Restart, &sel)
            .iter()
            .map(|i| (i.verb, i.file))
            .collect();
        assert_eq!(
            order,
            vec![
                (Verb::Delete, "f1"),
                (Verb::Delete, "f2"),
                (Verb::Apply, "f1"),
                (Verb::Apply, "f2"),
            ]
        );
    }

    #[test]
    fn plan_single_pass_keeps_order() {
        let sel = files(&["b", "a", "c"]);
        let applied: Vec<_> = plan(BulkAction::Apply, &sel).iter().map(|i| i.file).collect();
        assert_eq!(applied, vec!["b", "a", "c"]);
        assert!(plan(BulkAction::Delete, &sel).iter().all(|i| i.verb == Verb::Delete));
        assert!(plan(BulkAction::Restart, &[]).is_empty());
    }

    #[test]
    fn invocation_args() {
        let inv = Invocation {
            verb: Verb::Delete,
            file: "svc.yaml",
        };
        assert_eq!(inv.args(), ["delete", "-f", "svc.yaml"]);
        assert_eq!(inv.command_line("kubectl"), "kubectl delete -f svc.yaml");
    }

    #[test]
    fn launch_error_mentions_path() {
        let err = ActionError::Launch {
            tool: "kubectl".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "kubectl was not found in PATH");
    }

    #[test]
    fn exit_error_reports_code() {
        let err = ActionError::Exit {
            command: "kubectl apply -f a".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "`kubectl apply -f a` failed with exit status 1");
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_merges_streams() -> io::Result<()> {
        let out = SystemRunner.run("sh", &["-c", "echo out; echo err 1>&2; exit 3"])?;
        assert_eq!(out.code, Some(3));
        let text = String::from_utf8_lossy(&out.output);
        assert!(text.contains("out"));
        assert!(text.contains("err"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn failed_read_still_reaps_the_child() -> io::Result<()> {
        struct BrokenPipe;
        impl Read for BrokenPipe {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
        }

        let mut child = Command::new("sleep").arg("0.2").spawn()?;
        let err = drain_and_wait(&mut BrokenPipe, &mut child).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // Still running would give None here.
        assert!(child.try_wait()?.is_some());
        Ok(())
    }

    #[test]
    fn system_runner_reports_missing_program() {
        let err = SystemRunner
            .run("kman-definitely-not-a-real-tool", &[])
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
