use std::collections::BTreeMap;

use tracing::debug;

use crate::error::InitError;
use crate::pattern;

// =============================================================================
// 1. THE ABSTRACTION (Subject trait)
// =============================================================================

/// Trait a type implements to expose its setup steps as an ordered sequence.
///
/// `register` is called with a fresh [`InitRunner`] once per [`run_all`]
/// invocation; the subject declares each step together with its order key
/// and the runner takes care of ordering. Steps may borrow the subject, so
/// any state they mutate must sit behind interior mutability.
pub trait OrderedInit {
    fn register<'a>(&'a self, runner: &mut InitRunner<'a>) -> Result<(), InitError>;
}

// =============================================================================
// 2. THE ORDERED TABLE
// =============================================================================

struct Step<'a> {
    name: String,
    run: Box<dyn FnMut() + 'a>,
}

/// An ordered table of named, zero-argument setup steps.
///
/// Steps are keyed by an explicit integer order key and invoked in ascending
/// key order. Registering two steps under the same key is a hard error
/// rather than a silent overwrite, so the table never depends on
/// registration order for correctness.
#[derive(Default)]
pub struct InitRunner<'a> {
    steps: BTreeMap<isize, Step<'a>>,
}

impl<'a> InitRunner<'a> {
    pub fn new() -> Self {
        Self {
            steps: BTreeMap::new(),
        }
    }

    /// Registers `step` under the explicit order key `key`.
    ///
    /// `name` is a label used in diagnostics only; it carries no ordering
    /// information here. Fails with [`InitError::DuplicateKey`] if the key
    /// is already taken, leaving the table unchanged.
    pub fn register(
        &mut self,
        key: isize,
        name: impl Into<String>,
        step: impl FnMut() + 'a,
    ) -> Result<(), InitError> {
        let name = name.into();
        if let Some(existing) = self.steps.get(&key) {
            return Err(InitError::DuplicateKey {
                key,
                existing: existing.name.clone(),
                incoming: name,
            });
        }
        debug!(key, name = %name, "registered initializer");
        self.steps.insert(
            key,
            Step {
                name,
                run: Box::new(step),
            },
        );
        Ok(())
    }

    /// Registers `step` under the key embedded in its convention name
    /// (`Initialize<digits><suffix>`).
    ///
    /// Names that do not follow the convention are skipped without error and
    /// reported as `Ok(false)`, so a caller can feed an arbitrary member
    /// list through this method and only the matching entries land in the
    /// table. A matching name whose digit run overflows the native integer
    /// range fails with [`InitError::MalformedOrderKey`].
    pub fn register_named(
        &mut self,
        name: impl Into<String>,
        step: impl FnMut() + 'a,
    ) -> Result<bool, InitError> {
        let name = name.into();
        let Some(key) = pattern::order_key(&name)? else {
            debug!(name = %name, "name does not match the initializer pattern, skipped");
            return Ok(false);
        };
        self.register(key, name, step)?;
        Ok(true)
    }

    /// Invokes every registered step, in ascending order of its key.
    ///
    /// Synchronous and sequential; a panic in a step propagates to the
    /// caller and the remaining steps do not run. The table is left intact,
    /// so calling this again re-runs the same steps.
    pub fn run_all(&mut self) {
        debug!(count = self.steps.len(), "running initializers");
        for (key, step) in self.steps.iter_mut() {
            debug!(key = *key, name = %step.name, "running initializer");
            (step.run)();
        }
    }

    /// Number of registered steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the table holds no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// =============================================================================
// 3. THE ONE-SHOT PIPELINE
// =============================================================================

/// Collects and runs the setup steps declared by `subject`.
///
/// Builds a fresh table, lets the subject register its steps, and invokes
/// them in ascending key order; the table is discarded on return. `None` is
/// intentionally a silent no-op so callers may conditionally omit a subject.
///
/// Registration mistakes (duplicate or malformed order keys) surface as
/// [`InitError`] before any step has run.
pub fn run_all<S: OrderedInit>(subject: Option<&S>) -> Result<(), InitError> {
    let Some(subject) = subject else {
        return Ok(());
    };

    let mut runner = InitRunner::new();
    subject.register(&mut runner)?;
    runner.run_all();
    Ok(())
}
