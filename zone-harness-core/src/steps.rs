//! The step library: parsing scenario step text and executing steps.
//!
//! Step text is matched against a fixed pattern table and parsed into a
//! typed [`Step`] before execution, so an unknown step is rejected up front
//! instead of silently skipped.

use std::sync::OnceLock;

use log::info;
use regex::{Captures, Regex};

use crate::context::ScenarioContext;
use crate::error::StepError;
use crate::exec::run_captured;
use crate::fixture::{create_domain, find_zone};
use crate::shell::split_args;
use crate::zonefile::{diff_zones, normalize_zone};

/// A parsed scenario step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `I have a domain "<name>"` — create a fixture zone.
    GivenDomain(String),
    /// `I run "<command>"` — run the CLI and capture its output.
    RunCommand(String),
    /// `the domain "<name>" is created`
    DomainCreated(String),
    /// `the domain "<name>" is deleted`
    DomainDeleted(String),
    /// `the domain "<name>" has <n> record(s)`
    HasRecordCount { domain: String, count: usize },
    /// `the domain "<name>" has record "<record>"`
    HasRecord { domain: String, record: String },
    /// `the domain "<name>" doesn't have record "<record>"`
    DoesNotHaveRecord { domain: String, record: String },
    /// `the domain "<name>" export matches file "<path>"[ including auth]`
    ExportMatchesFile {
        domain: String,
        path: String,
        include_authority: bool,
    },
    /// `the output contains "<text>"`
    OutputContains(String),
}

type Builder = fn(&Captures) -> Step;

const PATTERNS: &[(&str, Builder)] = &[
    (r#"^I have a domain "(.+?)"$"#, |c| {
        Step::GivenDomain(c[1].to_string())
    }),
    (r#"^I run "(.+?)"$"#, |c| Step::RunCommand(c[1].to_string())),
    (r#"^the domain "(.+?)" is created$"#, |c| {
        Step::DomainCreated(c[1].to_string())
    }),
    (r#"^the domain "(.+?)" is deleted$"#, |c| {
        Step::DomainDeleted(c[1].to_string())
    }),
    (r#"^the domain "(.+?)" has (\d+) records?$"#, |c| {
        Step::HasRecordCount {
            domain: c[1].to_string(),
            count: c[2].parse().unwrap_or(0),
        }
    }),
    (r#"^the domain "(.+?)" has record "(.+?)"$"#, |c| {
        Step::HasRecord {
            domain: c[1].to_string(),
            record: c[2].to_string(),
        }
    }),
    (r#"^the domain "(.+?)" doesn't have record "(.+?)"$"#, |c| {
        Step::DoesNotHaveRecord {
            domain: c[1].to_string(),
            record: c[2].to_string(),
        }
    }),
    (
        r#"^the domain "(.+?)" export matches file "(.+?)"( including auth)?$"#,
        |c| Step::ExportMatchesFile {
            domain: c[1].to_string(),
            path: c[2].to_string(),
            include_authority: c.get(3).is_some(),
        },
    ),
    (r#"^the output contains "(.+?)"$"#, |c| {
        Step::OutputContains(c[1].to_string())
    }),
];

fn registry() -> &'static Vec<(Regex, Builder)> {
    static REGISTRY: OnceLock<Vec<(Regex, Builder)>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        PATTERNS
            .iter()
            .filter_map(|(pattern, builder)| Regex::new(pattern).ok().map(|re| (re, *builder)))
            .collect()
    })
}

/// Parses one line of step text. Returns `None` for unrecognized text.
#[must_use]
pub fn parse_step(text: &str) -> Option<Step> {
    registry()
        .iter()
        .find_map(|(re, builder)| re.captures(text).map(|c| builder(&c)))
}

/// Executes a parsed step against the scenario context.
///
/// `Err(StepError::Failed(_))` is an assertion failure; `Err(StepError::
/// Fatal(_))` means the provider connection or local I/O is unusable.
pub async fn execute(step: &Step, ctx: &mut ScenarioContext) -> Result<(), StepError> {
    match step {
        Step::GivenDomain(name) => {
            let name = ctx.substitute(name);
            let zone = create_domain(ctx, &name).await?;
            info!("Created fixture zone {} ({})", zone.name, zone.id);
            Ok(())
        }

        Step::RunCommand(command) => {
            let command = ctx.substitute(command);
            let args = split_args(&command);
            match run_captured(&args).await {
                Ok((status, output)) => {
                    if status.success() {
                        ctx.set_run_output(output);
                        Ok(())
                    } else {
                        Err(StepError::failed(format!(
                            "Command {command:?} exited with {status}:\n{output}"
                        )))
                    }
                }
                Err(e) => Err(StepError::failed(format!(
                    "Command {command:?} failed to run: {e}"
                ))),
            }
        }

        Step::DomainCreated(name) => {
            let name = ctx.substitute(name);
            match find_zone(ctx.provider().as_ref(), &name).await? {
                Some(zone) => {
                    // The CLI created it, so the harness now owns cleanup.
                    ctx.register_cleanup(zone.id);
                    Ok(())
                }
                None => Err(StepError::failed(format!("Domain {name} was not created"))),
            }
        }

        Step::DomainDeleted(name) => {
            let name = ctx.substitute(name);
            match find_zone(ctx.provider().as_ref(), &name).await? {
                None => {
                    // Confirmed gone; teardown must not try to delete again.
                    ctx.clear_cleanup();
                    Ok(())
                }
                Some(zone) => {
                    ctx.register_cleanup(zone.id);
                    Err(StepError::failed(format!("Domain {name} was not deleted")))
                }
            }
        }

        Step::HasRecordCount { domain, count } => {
            let domain = ctx.substitute(domain);
            let Some(zone) = find_zone(ctx.provider().as_ref(), &domain).await? else {
                return Err(StepError::failed(format!("Domain {domain} not found")));
            };
            let sets = ctx.provider().list_record_sets(&zone.id).await?;
            if sets.len() == *count {
                Ok(())
            } else {
                Err(StepError::failed(format!(
                    "Domain {domain}: expected {count} records, actually {} records",
                    sets.len()
                )))
            }
        }

        Step::HasRecord { domain, record } => {
            let domain = ctx.substitute(domain);
            let record = ctx.substitute(record).replace('\t', " ");
            if record_present(ctx, &domain, &record).await? {
                Ok(())
            } else {
                Err(StepError::failed(format!(
                    "Domain {domain} does not have record '{record}'"
                )))
            }
        }

        Step::DoesNotHaveRecord { domain, record } => {
            let domain = ctx.substitute(domain);
            let record = ctx.substitute(record).replace('\t', " ");
            if record_present(ctx, &domain, &record).await? {
                Err(StepError::failed(format!(
                    "Domain {domain} has unexpected record '{record}'"
                )))
            } else {
                Ok(())
            }
        }

        Step::ExportMatchesFile {
            domain,
            path,
            include_authority,
        } => {
            let domain = ctx.substitute(domain);
            let command = format!("{} export {domain}", ctx.binary());
            let args = split_args(&command);
            let export = match run_captured(&args).await {
                Ok((status, output)) if status.success() => output,
                Ok((status, output)) => {
                    return Err(StepError::failed(format!(
                        "Command {command:?} exited with {status}:\n{output}"
                    )));
                }
                Err(e) => {
                    return Err(StepError::failed(format!(
                        "Command {command:?} failed to run: {e}"
                    )));
                }
            };

            let reference = tokio::fs::read_to_string(path)
                .await
                .map_err(crate::error::HarnessError::from)?;
            let expected = normalize_zone(&ctx.substitute(&reference), *include_authority);
            let actual = normalize_zone(&export, *include_authority);
            let report = diff_zones(&expected, &actual);
            if report.is_empty() {
                Ok(())
            } else {
                Err(StepError::failed(report.join("\n")))
            }
        }

        Step::OutputContains(text) => {
            let text = ctx.substitute(text);
            if ctx.run_output().is_some_and(|o| o.contains(&text)) {
                Ok(())
            } else {
                Err(StepError::failed(format!(
                    "Output did not contain \"{text}\""
                )))
            }
        }
    }
}

/// True when any rendered record line of the domain equals `record` exactly
/// (after tab normalization on both sides).
async fn record_present(
    ctx: &ScenarioContext,
    domain: &str,
    record: &str,
) -> Result<bool, StepError> {
    let Some(zone) = find_zone(ctx.provider().as_ref(), domain).await? else {
        return Err(StepError::failed(format!("Domain {domain} not found")));
    };
    let sets = ctx.provider().list_record_sets(&zone.id).await?;
    Ok(sets
        .iter()
        .flat_map(zone_harness_provider::RecordSet::bind_lines)
        .any(|line| line.replace('\t', " ") == record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_given_domain() {
        assert_eq!(
            parse_step(r#"I have a domain "$domain""#),
            Some(Step::GivenDomain("$domain".into()))
        );
    }

    #[test]
    fn parses_run_command() {
        assert_eq!(
            parse_step(r#"I run "./zonecli rrcreate $domain 'www 300 A 1.2.3.4'""#),
            Some(Step::RunCommand(
                "./zonecli rrcreate $domain 'www 300 A 1.2.3.4'".into()
            ))
        );
    }

    #[test]
    fn parses_record_count_singular_and_plural() {
        assert_eq!(
            parse_step(r#"the domain "$domain" has 1 record"#),
            Some(Step::HasRecordCount {
                domain: "$domain".into(),
                count: 1
            })
        );
        assert_eq!(
            parse_step(r#"the domain "$domain" has 3 records"#),
            Some(Step::HasRecordCount {
                domain: "$domain".into(),
                count: 3
            })
        );
    }

    #[test]
    fn parses_export_with_and_without_authority() {
        assert_eq!(
            parse_step(r#"the domain "$domain" export matches file "tests/data/basic.txt""#),
            Some(Step::ExportMatchesFile {
                domain: "$domain".into(),
                path: "tests/data/basic.txt".into(),
                include_authority: false,
            })
        );
        assert_eq!(
            parse_step(
                r#"the domain "$domain" export matches file "tests/data/full.txt" including auth"#
            ),
            Some(Step::ExportMatchesFile {
                domain: "$domain".into(),
                path: "tests/data/full.txt".into(),
                include_authority: true,
            })
        );
    }

    #[test]
    fn parses_negated_record_step() {
        assert_eq!(
            parse_step(r#"the domain "$domain" doesn't have record "www.$domain. 300 IN A 1.2.3.4""#),
            Some(Step::DoesNotHaveRecord {
                domain: "$domain".into(),
                record: "www.$domain. 300 IN A 1.2.3.4".into(),
            })
        );
    }

    #[test]
    fn rejects_unknown_text() {
        assert_eq!(parse_step("I pour myself a coffee"), None);
        assert_eq!(parse_step(r#"the domain "x" has n records"#), None);
    }

    #[test]
    fn patterns_are_anchored() {
        assert_eq!(parse_step(r#"well, I run "ls" sometimes"#), None);
    }
}
