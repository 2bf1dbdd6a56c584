//! Per-scenario state.

use std::sync::Arc;

use zone_harness_provider::ZoneProvider;

/// State carried through one scenario: the fixture domain, the zone ids
/// awaiting cleanup, and the output of the last CLI run.
///
/// Each scenario gets a fresh context, so concurrent or repeated runs never
/// observe each other's state.
pub struct ScenarioContext {
    provider: Arc<dyn ZoneProvider>,
    binary: String,
    domain: String,
    pending_cleanup: Vec<String>,
    run_output: Option<String>,
}

impl ScenarioContext {
    /// Creates a context bound to a provider, a CLI binary path, and the
    /// scenario's fixture domain name.
    pub fn new(provider: Arc<dyn ZoneProvider>, binary: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            provider,
            binary: binary.into(),
            domain: domain.into(),
            pending_cleanup: Vec::new(),
            run_output: None,
        }
    }

    pub fn provider(&self) -> &Arc<dyn ZoneProvider> {
        &self.provider
    }

    /// Path to the CLI under test.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// The scenario's fixture domain name (no trailing dot).
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Expands the `$domain` placeholder in step text.
    #[must_use]
    pub fn substitute(&self, text: &str) -> String {
        text.replace("$domain", &self.domain)
    }

    /// Registers a zone id for teardown.
    pub fn register_cleanup(&mut self, zone_id: impl Into<String>) {
        self.pending_cleanup.push(zone_id.into());
    }

    /// Forgets every registered zone id. Used when a deletion has been
    /// confirmed against the provider and teardown would only double-delete.
    pub fn clear_cleanup(&mut self) {
        self.pending_cleanup.clear();
    }

    /// Takes ownership of the registered ids, leaving the registry empty.
    pub fn drain_cleanup(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_cleanup)
    }

    pub fn pending_cleanup(&self) -> &[String] {
        &self.pending_cleanup
    }

    pub fn set_run_output(&mut self, output: String) {
        self.run_output = Some(output);
    }

    /// Combined stdout and stderr of the last successful CLI run, if any.
    pub fn run_output(&self) -> Option<&str> {
        self.run_output.as_deref()
    }
}
