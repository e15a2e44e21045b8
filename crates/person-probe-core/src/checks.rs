//! Behavioral checks against a resolved Person type
//!
//! Every check builds its own [`Instance`], so checks are independent and
//! may run in any order. A check either passes or fails with a reason;
//! setup errors (construction, unsupported numeric kinds) abort the run.
//!
//! Existence checks are one per member, so a type missing one member fails
//! exactly one existence check.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::{
    descriptor::TypeDescriptor, numeric, value::ParamKind, Error, Instance, Number, Result, Value,
};

const FULL_NAME_FIRST: &str = "Ala";
const FULL_NAME_LAST: &str = "Makota";
const BIRTHDAY_BASE_AGE: i64 = 20;
const RENAME_FIRST: &str = "Jan";
const RENAME_LAST: &str = "Kowalski";

/// Stable identifier of a check.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    PropertyFirstName,
    PropertyLastName,
    PropertyAge,
    MethodGetFullName,
    MethodHaveBirthday,
    MethodRename,
    FullName,
    Birthday,
    Rename,
}

impl CheckId {
    /// One-line description for reports.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PropertyFirstName => "FirstName is a readable property",
            Self::PropertyLastName => "LastName is a readable property",
            Self::PropertyAge => "Age is a readable property",
            Self::MethodGetFullName => "GetFullName() exists",
            Self::MethodHaveBirthday => "HaveBirthday() or HaveBirthday(number) exists",
            Self::MethodRename => "Rename(string, string) exists",
            Self::FullName => "GetFullName contains both names, case-insensitively",
            Self::Birthday => "HaveBirthday increments Age by exactly one",
            Self::Rename => "Rename overwrites FirstName and LastName exactly",
        }
    }

    /// Run this check on a fresh instance of `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns setup errors only. Missing members and failed assertions
    /// become [`CheckOutcome::Failed`].
    pub fn run(self, descriptor: &Arc<TypeDescriptor>) -> Result<CheckOutcome> {
        let mut instance = Instance::construct(descriptor)?;

        let result = match self {
            Self::PropertyFirstName => require_property(&instance, "FirstName"),
            Self::PropertyLastName => require_property(&instance, "LastName"),
            Self::PropertyAge => require_property(&instance, "Age"),
            Self::MethodGetFullName => {
                require_method(&instance, "GetFullName", "no arguments", <[ParamKind]>::is_empty)
            }
            Self::MethodHaveBirthday => require_method(
                &instance,
                "HaveBirthday",
                "no arguments or one number",
                |params| params.is_empty() || is_single_number(params),
            ),
            Self::MethodRename => {
                require_method(&instance, "Rename", "(string, string)", |params| {
                    params == [ParamKind::Text, ParamKind::Text]
                })
            }
            Self::FullName => check_full_name(&mut instance),
            Self::Birthday => check_birthday(&mut instance),
            Self::Rename => check_rename(&mut instance),
        };

        match result {
            Ok(()) => Ok(CheckOutcome::Passed),
            Err(e) if e.is_check_failure() => Ok(CheckOutcome::Failed {
                reason: e.to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckOutcome {
    Passed,
    Failed { reason: String },
}

impl CheckOutcome {
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

fn require_property(instance: &Instance, name: &str) -> Result<()> {
    instance
        .descriptor()
        .property(name)
        .filter(|p| p.readable)
        .map(|_| ())
        .ok_or_else(|| Error::member_not_found(instance.descriptor().qualified_name(), name))
}

fn require_method(
    instance: &Instance,
    name: &str,
    expected: &str,
    signature: impl Fn(&[ParamKind]) -> bool,
) -> Result<()> {
    let descriptor = instance.descriptor();
    if descriptor.method_where(name, signature).is_some() {
        return Ok(());
    }
    if descriptor.overloads(name).next().is_some() {
        return Err(Error::argument_mismatch(
            name,
            format!("no overload takes {expected}"),
        ));
    }
    Err(Error::member_not_found(descriptor.qualified_name(), name))
}

fn is_single_number(params: &[ParamKind]) -> bool {
    matches!(params, [kind] if kind.is_numeric())
}

fn check_full_name(instance: &mut Instance) -> Result<()> {
    instance.set_if_settable("FirstName", Value::from(FULL_NAME_FIRST))?;
    instance.set_if_settable("LastName", Value::from(FULL_NAME_LAST))?;

    let result = instance.invoke("GetFullName", &[])?;
    let full_name = result.as_text().ok_or_else(|| {
        Error::check_failed(format!(
            "GetFullName returned {} instead of string",
            result.type_name()
        ))
    })?;

    let lowered = full_name.to_lowercase();
    let missing: Vec<&str> = [FULL_NAME_FIRST, FULL_NAME_LAST]
        .into_iter()
        .filter(|part| !lowered.contains(&part.to_lowercase()))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::check_failed(format!(
            "GetFullName returned '{full_name}', missing {}",
            missing.join(" and ")
        )))
    }
}

fn check_birthday(instance: &mut Instance) -> Result<()> {
    instance.set_if_settable("Age", Value::Number(Number::Long(BIRTHDAY_BASE_AGE)))?;
    let before = numeric::to_integer(&instance.get("Age")?)?;

    let descriptor = instance.descriptor();
    let takes_amount = descriptor
        .method_where("HaveBirthday", <[ParamKind]>::is_empty)
        .is_none()
        && descriptor
            .method_where("HaveBirthday", is_single_number)
            .is_some();
    let args = if takes_amount {
        vec![Value::Number(Number::Long(1))]
    } else {
        Vec::new()
    };

    instance.invoke("HaveBirthday", &args)?;
    let after = numeric::to_integer(&instance.get("Age")?)?;

    if after == before.saturating_add(1) {
        Ok(())
    } else {
        Err(Error::check_failed(format!(
            "Age went from {before} to {after}, expected {}",
            before.saturating_add(1)
        )))
    }
}

fn check_rename(instance: &mut Instance) -> Result<()> {
    instance.invoke(
        "Rename",
        &[Value::from(RENAME_FIRST), Value::from(RENAME_LAST)],
    )?;

    for (property, expected) in [("FirstName", RENAME_FIRST), ("LastName", RENAME_LAST)] {
        let actual = instance.get(property)?;
        if actual.as_text() != Some(expected) {
            return Err(Error::check_failed(format!(
                "{property} is {actual:?} after Rename, expected \"{expected}\""
            )));
        }
    }
    Ok(())
}

/// Outcome of one check within a suite run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub id: CheckId,
    pub description: String,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Outcomes of a suite run against one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub type_name: String,
    pub results: Vec<CheckResult>,
}

impl SuiteReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_passed()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Outcome of one check, if it ran.
    #[must_use]
    pub fn outcome(&self, id: CheckId) -> Option<&CheckOutcome> {
        self.results.iter().find(|r| r.id == id).map(|r| &r.outcome)
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Parse(format!("Failed to serialize report: {e}")))
    }
}

/// An ordered selection of checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSuite {
    checks: Vec<CheckId>,
}

impl Default for CheckSuite {
    fn default() -> Self {
        Self::all()
    }
}

impl CheckSuite {
    /// Every check, in declaration order.
    #[must_use]
    pub fn all() -> Self {
        Self {
            checks: CheckId::iter().collect(),
        }
    }

    /// Only the given checks, in the order given. Duplicates are dropped.
    pub fn only(ids: impl IntoIterator<Item = CheckId>) -> Self {
        let checks = ids.into_iter().fold(Vec::new(), |mut acc, id| {
            if !acc.contains(&id) {
                acc.push(id);
            }
            acc
        });
        Self { checks }
    }

    #[must_use]
    pub fn checks(&self) -> &[CheckId] {
        &self.checks
    }

    /// Run every selected check against `descriptor`.
    ///
    /// # Errors
    ///
    /// Stops at the first setup error.
    pub fn run(&self, descriptor: &Arc<TypeDescriptor>) -> Result<SuiteReport> {
        let results = self
            .checks
            .iter()
            .map(|&id| {
                let outcome = id.run(descriptor)?;
                match &outcome {
                    CheckOutcome::Passed => tracing::debug!(check = %id, "Check passed"),
                    CheckOutcome::Failed { reason } => {
                        tracing::warn!(check = %id, %reason, "Check failed");
                    }
                }
                Ok(CheckResult {
                    id,
                    description: id.description().to_string(),
                    outcome,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let report = SuiteReport {
            type_name: descriptor.qualified_name().to_string(),
            results,
        };
        tracing::info!(
            type_name = %report.type_name,
            passed = report.passed(),
            failed = report.failed(),
            "Check suite finished"
        );
        Ok(report)
    }
}
