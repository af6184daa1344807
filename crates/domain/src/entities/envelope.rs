//! Response envelope - the top-level object returned by the status API
//!
//! Validation is deliberately shallow: the envelope only checks that a
//! `homeworks` list exists. Items are inspected lazily, first by
//! [`HomeworkEnvelope::select_latest`] (timestamps only) and then by
//! [`Homework::from_value`] for the chosen item.

use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

use super::homework::{Homework, UPDATED_AT_KEYS};
use crate::common::str_field;
use crate::error::{json_kind, DomainError, SchemaError};
use crate::value_objects::UpdatedAt;

const HOMEWORKS_KEY: &str = "homeworks";
const CURRENT_DATE_KEY: &str = "current_date";

/// What an empty `homeworks` list means for an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyListPolicy {
    /// Nothing was ever submitted - report `SchemaError::EmptyList`.
    #[default]
    Error,
    /// Treat as "nothing to report" and finish the iteration quietly.
    Ignore,
}

impl fmt::Display for EmptyListPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyListPolicy::Error => write!(f, "error"),
            EmptyListPolicy::Ignore => write!(f, "ignore"),
        }
    }
}

impl std::str::FromStr for EmptyListPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(EmptyListPolicy::Error),
            "ignore" => Ok(EmptyListPolicy::Ignore),
            _ => Err(DomainError::parse(format!(
                "Unknown empty list policy: {} (expected \"error\" or \"ignore\")",
                s
            ))),
        }
    }
}

/// A validated `{"homeworks": [...]}` payload.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkEnvelope {
    homeworks: Vec<Value>,
    current_date: Option<i64>,
}

impl HomeworkEnvelope {
    /// Validate the top-level shape of a parsed response body.
    ///
    /// # Errors
    ///
    /// - `SchemaError::NotAnObject` if the body is not a JSON object
    /// - `SchemaError::MissingHomeworks` if the `homeworks` key is absent
    /// - `SchemaError::HomeworksNotAList` if `homeworks` is not an array
    pub fn from_value(body: Value) -> Result<Self, SchemaError> {
        let mut object = match body {
            Value::Object(object) => object,
            other => {
                return Err(SchemaError::NotAnObject {
                    found: json_kind(&other),
                })
            }
        };

        let current_date = object.get(CURRENT_DATE_KEY).and_then(Value::as_i64);

        match object.remove(HOMEWORKS_KEY) {
            None => Err(SchemaError::MissingHomeworks),
            Some(Value::Array(homeworks)) => Ok(Self {
                homeworks,
                current_date,
            }),
            Some(other) => Err(SchemaError::HomeworksNotAList {
                found: json_kind(&other),
            }),
        }
    }

    pub fn homeworks(&self) -> &[Value] {
        &self.homeworks
    }

    pub fn len(&self) -> usize {
        self.homeworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.homeworks.is_empty()
    }

    /// Server time of the response, when the API includes it.
    pub fn current_date(&self) -> Option<i64> {
        self.current_date
    }

    /// Pick the most recently updated raw item.
    ///
    /// - Empty list: `Ok(None)` under [`EmptyListPolicy::Ignore`], otherwise
    ///   `SchemaError::EmptyList`.
    /// - One item: returned as is, without looking at its timestamp.
    /// - Several items: every item must be an object with a non-empty
    ///   `updated_at`. The greatest timestamp wins and the first one seen wins
    ///   a tie. Timestamps are compared as instants when all of them parse,
    ///   and as plain strings otherwise.
    pub fn select_latest(&self, policy: EmptyListPolicy) -> Result<Option<&Value>, SchemaError> {
        match self.homeworks.as_slice() {
            [] => match policy {
                EmptyListPolicy::Error => Err(SchemaError::EmptyList),
                EmptyListPolicy::Ignore => Ok(None),
            },
            [only] => Ok(Some(only)),
            items => {
                let stamps = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| updated_at_of(index, item))
                    .collect::<Result<Vec<_>, _>>()?;

                let chronological = stamps.iter().all(|ts| ts.instant().is_some());
                let newer = |a: &UpdatedAt, b: &UpdatedAt| -> Ordering {
                    if chronological {
                        a.instant().cmp(&b.instant())
                    } else {
                        a.raw().cmp(b.raw())
                    }
                };

                let mut best = 0;
                for (index, ts) in stamps.iter().enumerate().skip(1) {
                    if newer(ts, &stamps[best]) == Ordering::Greater {
                        best = index;
                    }
                }
                Ok(items.get(best))
            }
        }
    }

    /// Select the latest item and parse it into a [`Homework`].
    pub fn latest_homework(&self, policy: EmptyListPolicy) -> Result<Option<Homework>, SchemaError> {
        self.select_latest(policy)?
            .map(Homework::from_value)
            .transpose()
    }
}

fn updated_at_of(index: usize, item: &Value) -> Result<UpdatedAt, SchemaError> {
    let object = item.as_object().ok_or(SchemaError::ItemNotAnObject {
        found: json_kind(item),
    })?;
    str_field(object, UPDATED_AT_KEYS)
        .map(UpdatedAt::new)
        .ok_or(SchemaError::MissingTimestamp { index })
}
