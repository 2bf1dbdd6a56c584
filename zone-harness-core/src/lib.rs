//! Acceptance-test harness for DNS zone management CLIs.
//!
//! The harness runs scenarios against a live provider: each scenario gets a
//! fresh ephemeral fixture zone, steps drive the CLI under test and assert
//! on provider state, and every fixture is torn down afterwards no matter
//! how the scenario went.
//!
//! ```no_run
//! use std::sync::Arc;
//! use zone_harness_core::{Harness, Scenario};
//! use zone_harness_provider::{create_provider, ProviderCredentials};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = ProviderCredentials::from_env().ok_or("missing credentials")?;
//! let provider = create_provider(credentials)?;
//! let harness = Harness::new(provider, "./zonecli");
//!
//! let scenario = Scenario::new(
//!     "create and verify",
//!     &[
//!         r#"I run "./zonecli create $domain""#,
//!         r#"the domain "$domain" is created"#,
//!         r#"the domain "$domain" has 2 records"#,
//!     ],
//! );
//! let report = harness.run_scenario(&scenario).await?;
//! assert!(report.passed());
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod error;
pub mod exec;
pub mod fixture;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod test_utils;
pub mod zonefile;

pub use context::ScenarioContext;
pub use error::{HarnessError, HarnessResult, StepError};
pub use runner::{Harness, Scenario, ScenarioReport};
pub use shell::split_args;
pub use steps::{execute, parse_step, Step};
pub use zonefile::{diff_zones, normalize_zone};
