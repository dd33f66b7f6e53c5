//! Entry collector and the per-candidate normalization loop.

use crate::evaluator::{Evaluate, Export, Produced};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Append-only aggregate list.
///
/// Owned by the aggregation loop for the duration of one run and handed
/// off read-only afterwards. The final order equals the concatenation of
/// each candidate's contribution in candidate order; a sequence of N
/// elements occupies N consecutive positions.
#[derive(Debug, Default)]
pub struct EntryCollector {
    entries: Vec<Value>,
}

impl EntryCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single entry.
    pub fn push(&mut self, entry: Value) {
        self.entries.push(entry);
    }

    /// Append a sequence's elements in order.
    pub fn extend(&mut self, entries: Vec<Value>) {
        self.entries.extend(entries);
    }

    /// Number of entries collected so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the collector and return the aggregate list.
    pub fn into_entries(self) -> Vec<Value> {
        self.entries
    }
}

/// Evaluate every candidate in order and collect the normalized entries.
///
/// A file with no default export contributes zero entries and is not an
/// error. Callable exports are invoked exactly once; the loop waits for
/// the produced value before moving on, so entries always land in
/// candidate order. The first evaluation or invocation failure aborts
/// the run.
pub fn aggregate(candidates: &[PathBuf], evaluator: &dyn Evaluate) -> crate::Result<Vec<Value>> {
    let mut collector = EntryCollector::new();

    for path in candidates {
        let Some(export) = evaluator.evaluate(path)? else {
            debug!(path = %path.display(), "no default export, skipping");
            continue;
        };
        match export {
            Export::Direct(value) => collector.push(value),
            Export::Sequence(items) => collector.extend(items),
            Export::Callable(thunk) => match thunk.invoke()? {
                Produced::Direct(value) => collector.push(value),
                Produced::Sequence(items) => collector.extend(items),
                Produced::Callable => {
                    // Almost certainly an authoring error in the module;
                    // the produced callable is terminal and renders as
                    // null, exactly as JSON serialization would render it.
                    warn!(
                        path = %path.display(),
                        "callable export produced another callable; treating it as a terminal value"
                    );
                    collector.push(Value::Null);
                }
            },
        }
    }

    Ok(collector.into_entries())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ManifestError;
    use crate::evaluator::Thunk;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::Path;
    use std::rc::Rc;

    /// Per-path behavior of the stub evaluator.
    enum Script {
        NoExport,
        Direct(Value),
        Sequence(Vec<Value>),
        CallableDirect(Value),
        CallableSequence(Vec<Value>),
        CallableCallable,
        Fail(&'static str),
    }

    struct StubThunk {
        produced: Produced,
        invocations: Rc<RefCell<usize>>,
    }

    impl Thunk for StubThunk {
        fn invoke(self: Box<Self>) -> crate::Result<Produced> {
            *self.invocations.borrow_mut() += 1;
            Ok(self.produced)
        }
    }

    #[derive(Default)]
    struct StubEvaluator {
        scripts: HashMap<PathBuf, Script>,
        evaluated: RefCell<Vec<PathBuf>>,
        invocations: Rc<RefCell<usize>>,
    }

    impl StubEvaluator {
        fn with(mut self, path: &str, script: Script) -> Self {
            self.scripts.insert(PathBuf::from(path), script);
            self
        }
    }

    impl Evaluate for StubEvaluator {
        fn evaluate(&self, path: &Path) -> crate::Result<Option<Export>> {
            self.evaluated.borrow_mut().push(path.to_path_buf());
            let script = self.scripts.get(path).expect("unexpected candidate");
            let thunk = |produced| {
                Box::new(StubThunk {
                    produced,
                    invocations: Rc::clone(&self.invocations),
                })
            };
            Ok(match script {
                Script::NoExport => None,
                Script::Direct(value) => Some(Export::Direct(value.clone())),
                Script::Sequence(items) => Some(Export::Sequence(items.clone())),
                Script::CallableDirect(value) => {
                    Some(Export::Callable(thunk(Produced::Direct(value.clone()))))
                }
                Script::CallableSequence(items) => {
                    Some(Export::Callable(thunk(Produced::Sequence(items.clone()))))
                }
                Script::CallableCallable => Some(Export::Callable(thunk(Produced::Callable))),
                Script::Fail(message) => {
                    return Err(ManifestError::evaluation(path, *message));
                }
            })
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_order_preservation_across_shapes() {
        let evaluator = StubEvaluator::default()
            .with("p1.ts", Script::Sequence(vec![json!("x"), json!("y")]))
            .with("p2.ts", Script::Direct(json!("z")))
            .with("p3.ts", Script::CallableSequence(vec![json!("w")]));

        let entries = aggregate(&paths(&["p1.ts", "p2.ts", "p3.ts"]), &evaluator).unwrap();
        assert_eq!(entries, vec![json!("x"), json!("y"), json!("z"), json!("w")]);
        assert_eq!(*evaluator.invocations.borrow(), 1);
    }

    #[test]
    fn test_direct_export_contributes_one_entry() {
        let evaluator =
            StubEvaluator::default().with("a.ts", Script::Direct(json!({"name": "web"})));
        let entries = aggregate(&paths(&["a.ts"]), &evaluator).unwrap();
        assert_eq!(entries, vec![json!({"name": "web"})]);
    }

    #[test]
    fn test_sequence_export_contributes_each_element() {
        let evaluator = StubEvaluator::default().with(
            "a.ts",
            Script::Sequence(vec![json!(1), json!(2), json!(3)]),
        );
        let entries = aggregate(&paths(&["a.ts"]), &evaluator).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_callable_invoked_exactly_once() {
        let evaluator = StubEvaluator::default()
            .with("a.ts", Script::CallableDirect(json!("v")))
            .with("b.ts", Script::CallableSequence(vec![json!(1)]));

        let entries = aggregate(&paths(&["a.ts", "b.ts"]), &evaluator).unwrap();
        assert_eq!(entries, vec![json!("v"), json!(1)]);
        assert_eq!(*evaluator.invocations.borrow(), 2);
    }

    #[test]
    fn test_no_export_contributes_nothing() {
        let evaluator = StubEvaluator::default()
            .with("a.ts", Script::NoExport)
            .with("b.ts", Script::Direct(json!("kept")));

        let entries = aggregate(&paths(&["a.ts", "b.ts"]), &evaluator).unwrap();
        assert_eq!(entries, vec![json!("kept")]);
    }

    #[test]
    fn test_callable_producing_callable_is_terminal() {
        let evaluator = StubEvaluator::default().with("a.ts", Script::CallableCallable);

        let entries = aggregate(&paths(&["a.ts"]), &evaluator).unwrap();
        assert_eq!(entries, vec![Value::Null]);
        assert_eq!(*evaluator.invocations.borrow(), 1);
    }

    #[test]
    fn test_failure_aborts_the_run() {
        let evaluator = StubEvaluator::default()
            .with("a.ts", Script::Direct(json!(1)))
            .with("b.ts", Script::Fail("boom"))
            .with("c.ts", Script::Direct(json!(2)));

        let err = aggregate(&paths(&["a.ts", "b.ts", "c.ts"]), &evaluator).unwrap_err();
        assert!(err.to_string().contains("b.ts"));
        assert!(err.to_string().contains("boom"));

        // Nothing past the failing candidate is touched.
        assert_eq!(*evaluator.evaluated.borrow(), paths(&["a.ts", "b.ts"]));
    }

    #[test]
    fn test_empty_candidate_list_yields_empty_aggregate() {
        let evaluator = StubEvaluator::default();
        assert!(aggregate(&[], &evaluator).unwrap().is_empty());
    }

    #[test]
    fn test_collector_append_only_interface() {
        let mut collector = EntryCollector::new();
        assert!(collector.is_empty());

        collector.push(json!(1));
        collector.extend(vec![json!(2), json!(3)]);
        assert_eq!(collector.len(), 3);
        assert_eq!(collector.into_entries(), vec![json!(1), json!(2), json!(3)]);
    }
}
