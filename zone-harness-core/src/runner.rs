//! Scenario execution: fresh context per scenario, teardown no matter what.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use log::{error, info};
use serde::Serialize;

use zone_harness_provider::ZoneProvider;

use crate::context::ScenarioContext;
use crate::error::{HarnessError, HarnessResult, StepError};
use crate::fixture::{teardown, test_domain_name};
use crate::steps::{execute, parse_step};

/// A named scenario: an ordered list of step lines.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub name: String,
    pub steps: Vec<String>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, steps: &[&str]) -> Self {
        Self {
            name: name.into(),
            steps: steps.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Outcome of one scenario run.
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    /// One entry per failed assertion, in step order.
    pub failures: Vec<String>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives scenarios against one provider and one CLI binary.
pub struct Harness {
    provider: Arc<dyn ZoneProvider>,
    binary: String,
}

impl Harness {
    pub fn new(provider: Arc<dyn ZoneProvider>, binary: impl Into<String>) -> Self {
        Self {
            provider,
            binary: binary.into(),
        }
    }

    /// Runs a single scenario in a fresh context with a fresh fixture domain.
    ///
    /// Assertion failures are collected and the remaining steps still run.
    /// A fatal error or an unrecognized step aborts the scenario; either way
    /// teardown runs before this method returns.
    pub async fn run_scenario(&self, scenario: &Scenario) -> HarnessResult<ScenarioReport> {
        let started_at = Utc::now();
        let clock = Instant::now();
        let domain = test_domain_name();
        let mut ctx = ScenarioContext::new(self.provider.clone(), self.binary.clone(), &domain);

        info!("Scenario '{}' using fixture domain {domain}", scenario.name);

        let mut failures = Vec::new();
        let mut fatal: Option<HarnessError> = None;

        for line in &scenario.steps {
            let Some(step) = parse_step(line) else {
                fatal = Some(HarnessError::UnknownStep(line.clone()));
                break;
            };
            match execute(&step, &mut ctx).await {
                Ok(()) => {}
                Err(StepError::Failed(message)) => {
                    error!("Scenario '{}': {message}", scenario.name);
                    failures.push(message);
                }
                Err(StepError::Fatal(e)) => {
                    fatal = Some(e);
                    break;
                }
            }
        }

        // Registered fixtures are reclaimed even on the fatal path.
        teardown(&mut ctx).await;

        if let Some(e) = fatal {
            return Err(e);
        }

        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = clock.elapsed().as_millis() as u64;
        Ok(ScenarioReport {
            name: scenario.name.clone(),
            started_at,
            duration_ms,
            failures,
        })
    }

    /// Runs scenarios in order, stopping at the first fatal error.
    pub async fn run_scenarios(&self, scenarios: &[Scenario]) -> HarnessResult<Vec<ScenarioReport>> {
        let mut reports = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            reports.push(self.run_scenario(scenario).await?);
        }
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockZoneProvider;

    #[tokio::test]
    async fn unknown_step_aborts_with_teardown() {
        let provider = Arc::new(MockZoneProvider::new());
        let harness = Harness::new(provider.clone(), "./cli");
        let scenario = Scenario::new(
            "unknown step",
            &[r#"I have a domain "$domain""#, "I make a cup of tea"],
        );
        let result = harness.run_scenario(&scenario).await;
        assert!(matches!(result, Err(HarnessError::UnknownStep(_))));
        // The fixture created by the first step was still reclaimed.
        assert_eq!(provider.zone_count().await, 0);
    }

    #[tokio::test]
    async fn each_scenario_gets_its_own_domain() {
        let provider = Arc::new(MockZoneProvider::new());
        let harness = Harness::new(provider.clone(), "./cli");
        let scenario = Scenario::new("fixture", &[r#"I have a domain "$domain""#]);

        let first = harness.run_scenario(&scenario).await.unwrap();
        let second = harness.run_scenario(&scenario).await.unwrap();
        assert!(first.passed());
        assert!(second.passed());
        assert_eq!(provider.zone_count().await, 0);
    }

    #[tokio::test]
    async fn failures_do_not_stop_later_steps() {
        let provider = Arc::new(MockZoneProvider::new());
        let harness = Harness::new(provider, "./cli");
        let scenario = Scenario::new(
            "two failures",
            &[
                r#"the output contains "anything""#,
                r#"the output contains "something else""#,
            ],
        );
        let report = harness.run_scenario(&scenario).await.unwrap();
        assert_eq!(report.failures.len(), 2);
        assert!(!report.passed());
    }
}
