//! Conditional visibility evaluation against the current profile snapshot.

use serde_json::Value;

use crate::profile::{AnswerValue, ProfileSnapshot};

use super::types::{Predicate, PredicateOp, Question};

/// Whether a question should be shown given the current profile. Questions
/// without a predicate are always visible.
#[must_use]
pub fn is_visible(question: &Question, profile: &ProfileSnapshot) -> bool {
    question
        .visibility
        .as_ref()
        .is_none_or(|predicate| predicate_holds(predicate, profile))
}

/// Evaluate a predicate. No side effects. Unknown operators evaluate to
/// true (fail-open) so a catalog bug cannot hide a required question.
#[must_use]
pub fn predicate_holds(predicate: &Predicate, profile: &ProfileSnapshot) -> bool {
    let field_value = profile.get(&predicate.field);

    match predicate.op {
        PredicateOp::Exists => field_value.is_some_and(AnswerValue::is_present),
        PredicateOp::NotExists => !field_value.is_some_and(AnswerValue::is_present),
        PredicateOp::Equals => values_equal(field_value, predicate.value.as_ref()),
        PredicateOp::NotEquals => !values_equal(field_value, predicate.value.as_ref()),
        PredicateOp::Includes => {
            let Some(AnswerValue::List(items)) = field_value else {
                return false;
            };
            predicate
                .value
                .as_ref()
                .and_then(Value::as_str)
                .is_some_and(|needle| items.iter().any(|item| item == needle))
        }
        PredicateOp::GreaterThan => compare_numeric(field_value, predicate.value.as_ref())
            .is_some_and(|(lhs, rhs)| lhs > rhs),
        PredicateOp::LessThan => compare_numeric(field_value, predicate.value.as_ref())
            .is_some_and(|(lhs, rhs)| lhs < rhs),
        PredicateOp::Unknown => true,
    }
}

fn values_equal(field_value: Option<&AnswerValue>, expected: Option<&Value>) -> bool {
    let (Some(actual), Some(expected)) = (field_value, expected) else {
        return false;
    };
    match (actual, expected) {
        (AnswerValue::Text(s), Value::String(e)) => s == e,
        (AnswerValue::Number(n), Value::Number(e)) => e.as_f64() == Some(*n),
        (AnswerValue::Flag(b), Value::Bool(e)) => b == e,
        _ => false,
    }
}

fn compare_numeric(
    field_value: Option<&AnswerValue>,
    expected: Option<&Value>,
) -> Option<(f64, f64)> {
    let lhs = field_value?.as_number()?;
    let rhs = match expected? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    Some((lhs, rhs))
}
