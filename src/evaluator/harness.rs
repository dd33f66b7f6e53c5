//! Embedded evaluation harness and its reply protocol.
//!
//! The harness runs inside the module-execution runtime (node with type
//! stripping by default). It imports the target module, classifies the
//! default export, and reports the result on stdout as one
//! newline-terminated JSON reply. When the export is a callable the
//! harness holds it uninvoked and waits for `invoke\n` on stdin, so the
//! invocation decision stays with the aggregator. The second reply uses
//! the same grammar.

use serde::Deserialize;
use serde_json::Value;

/// ESM source passed to the runtime via `-e`. The target path arrives as
/// the first script argument.
pub const HARNESS: &str = r#"
import { pathToFileURL } from "node:url";
import process from "node:process";

// Script argument indices differ between `-e` and file invocation; the
// target path is always the last argument.
const target = process.argv[process.argv.length - 1];
const emit = (reply) => process.stdout.write(JSON.stringify(reply) + "\n");
const classify = (value) => {
  if (value === undefined) return { kind: "none" };
  if (typeof value === "function") return { kind: "callable" };
  if (Array.isArray(value)) return { kind: "sequence", items: value };
  return { kind: "value", value };
};

try {
  const mod = await import(pathToFileURL(target).href);
  const shape = classify(mod.default);
  emit(shape);
  if (shape.kind === "callable") {
    await new Promise((resolve) => process.stdin.once("data", resolve));
    emit(classify(await mod.default()));
  }
} catch (err) {
  emit({ kind: "error", message: String((err && err.stack) || err) });
  process.exit(1);
}
"#;

/// One reply line from the runtime.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Reply {
    /// The module has no default export.
    None,
    /// A direct value export.
    Value { value: Value },
    /// An array export, or an array produced by a callable.
    Sequence { items: Vec<Value> },
    /// The export (or the produced value) is a function.
    Callable,
    /// Evaluation failed inside the runtime.
    Error { message: String },
}
