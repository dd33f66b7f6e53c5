//! Out-of-process evaluator.
//!
//! One child process per candidate file. The child speaks the reply
//! protocol from [`crate::evaluator::harness`] on its stdout; its stderr
//! is inherited so runtime diagnostics land on the diagnostic stream,
//! never in the manifest.

use crate::error::ManifestError;
use crate::evaluator::harness::{HARNESS, Reply};
use crate::evaluator::{Evaluate, Export, Produced, Thunk};
use serde_json::Value;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};
use tracing::debug;

/// Evaluates a module's default export in a child runtime process.
pub struct SubprocessEvaluator {
    program: String,
    args: Vec<String>,
}

impl SubprocessEvaluator {
    /// Default runtime: node with type stripping, running the embedded
    /// harness. The candidate path is appended as the script argument.
    pub fn new() -> Self {
        Self {
            program: "node".to_string(),
            args: vec![
                "--experimental-strip-types".to_string(),
                "--input-type=module".to_string(),
                "-e".to_string(),
                HARNESS.to_string(),
                "--".to_string(),
            ],
        }
    }

    /// Substitute runtime, invoked as `<program> <path>`. The program
    /// must speak the reply protocol on its own stdio.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

impl Default for SubprocessEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// A live exchange with one runtime child.
struct RuntimeSession {
    child: Child,
    stdout: BufReader<ChildStdout>,
    path: PathBuf,
}

impl RuntimeSession {
    fn spawn(evaluator: &SubprocessEvaluator, path: &Path) -> crate::Result<Self> {
        let mut child = Command::new(&evaluator.program)
            .args(&evaluator.args)
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| ManifestError::runtime_spawn(path, err))?;

        let stdout = match child.stdout.take() {
            Some(stdout) => BufReader::new(stdout),
            None => return Err(ManifestError::protocol(path, "runtime stdout unavailable")),
        };

        Ok(Self {
            child,
            stdout,
            path: path.to_path_buf(),
        })
    }

    fn read_reply(&mut self) -> crate::Result<Reply> {
        let mut line = String::new();
        let read = self
            .stdout
            .read_line(&mut line)
            .map_err(|err| ManifestError::protocol(&self.path, format!("failed to read reply: {err}")))?;
        if read == 0 {
            return Err(ManifestError::protocol(
                &self.path,
                "runtime exited without a reply",
            ));
        }
        serde_json::from_str(line.trim())
            .map_err(|err| ManifestError::protocol(&self.path, format!("malformed reply: {err}")))
    }

    fn request_invocation(&mut self) -> crate::Result<()> {
        let stdin = self.child.stdin.as_mut().ok_or_else(|| {
            ManifestError::protocol(&self.path, "runtime stdin unavailable")
        })?;
        stdin
            .write_all(b"invoke\n")
            .and_then(|()| stdin.flush())
            .map_err(|err| {
                ManifestError::protocol(&self.path, format!("failed to request invocation: {err}"))
            })
    }

    /// Reap the child. The exit status is informational only: failures
    /// surface through `error` replies, which carry the actual cause.
    fn finish(mut self) -> crate::Result<()> {
        drop(self.child.stdin.take());
        let status = self.child.wait().map_err(|err| {
            ManifestError::protocol(&self.path, format!("failed to wait for runtime: {err}"))
        })?;
        if !status.success() {
            debug!(path = %self.path.display(), %status, "runtime exited non-zero");
        }
        Ok(())
    }
}

impl Evaluate for SubprocessEvaluator {
    fn evaluate(&self, path: &Path) -> crate::Result<Option<Export>> {
        debug!(path = %path.display(), "evaluating module");
        let mut session = RuntimeSession::spawn(self, path)?;
        match session.read_reply()? {
            Reply::None => {
                session.finish()?;
                Ok(None)
            }
            Reply::Value { value } => {
                session.finish()?;
                Ok(Some(Export::Direct(value)))
            }
            Reply::Sequence { items } => {
                session.finish()?;
                Ok(Some(Export::Sequence(items)))
            }
            Reply::Callable => Ok(Some(Export::Callable(Box::new(SubprocessThunk {
                session,
            })))),
            Reply::Error { message } => {
                let _ = session.finish();
                Err(ManifestError::evaluation(path, message))
            }
        }
    }
}

/// Keeps the runtime session alive between classification and
/// invocation. Consumed by `invoke`, so the exchange happens once.
struct SubprocessThunk {
    session: RuntimeSession,
}

impl Thunk for SubprocessThunk {
    fn invoke(mut self: Box<Self>) -> crate::Result<Produced> {
        self.session.request_invocation()?;
        let reply = self.session.read_reply()?;
        let path = self.session.path.clone();
        let produced = match reply {
            Reply::Value { value } => Produced::Direct(value),
            Reply::Sequence { items } => Produced::Sequence(items),
            Reply::Callable => Produced::Callable,
            // A callable resolving to undefined serializes to null.
            Reply::None => Produced::Direct(Value::Null),
            Reply::Error { message } => {
                let _ = self.session.finish();
                return Err(ManifestError::evaluation(path, message));
            }
        };
        self.session.finish()?;
        Ok(produced)
    }
}
