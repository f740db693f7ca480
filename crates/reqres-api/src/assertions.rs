//! Contract checks shared by the scenario catalog.
//!
//! Each check returns [`ApiError::AssertionFailed`] describing the first
//! offending value instead of panicking, so callers decide how to report it.

use chrono::{DateTime, Local, NaiveDate};

use crate::error::{ApiError, ApiResult};
use crate::models::{ResourceRecord, UserRecord};

// ============================================================================
// Clock
// ============================================================================

/// Source of "today" for date checks.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Calendar date of the machine running the checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// ============================================================================
// Checks
// ============================================================================

/// Fail with expected/actual when the two differ.
pub fn assert_equals<T>(check: &str, expected: &T, actual: &T) -> ApiResult<()>
where
    T: PartialEq + std::fmt::Debug + ?Sized,
{
    if expected == actual {
        Ok(())
    } else {
        Err(ApiError::assertion(
            check,
            format!("{expected:?}"),
            format!("{actual:?}"),
        ))
    }
}

/// Every user's email contains `domain`. A missing email fails too.
pub fn assert_all_emails_contain(users: &[UserRecord], domain: &str) -> ApiResult<()> {
    for user in users {
        match user.email.as_deref() {
            Some(email) if email.contains(domain) => {}
            other => {
                return Err(ApiError::assertion(
                    format!("email of user {}", user.id),
                    format!("an address containing '{domain}'"),
                    format!("{other:?}"),
                ));
            }
        }
    }
    Ok(())
}

/// `id` never decreases between neighbours.
pub fn assert_ids_non_decreasing(resources: &[ResourceRecord]) -> ApiResult<()> {
    for pair in resources.windows(2) {
        if let [left, right] = pair {
            if left.id > right.id {
                return Err(ApiError::assertion(
                    format!("id following resource {}", left.id),
                    format!(">= {}", left.id),
                    right.id,
                ));
            }
        }
    }
    Ok(())
}

/// Date component of an RFC 3339 timestamp, in the timestamp's own offset.
pub fn timestamp_date(raw: &str) -> ApiResult<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.date_naive())
        .map_err(|source| ApiError::InvalidTimestamp {
            value: raw.to_string(),
            source,
        })
}

/// The timestamp falls on `clock.today()`. Time of day is ignored.
pub fn assert_timestamp_is_today(raw: &str, clock: &dyn Clock) -> ApiResult<()> {
    let date = timestamp_date(raw)?;
    assert_equals("timestamp date", &clock.today(), &date)
}
