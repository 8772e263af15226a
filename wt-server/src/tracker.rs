//! Work-period bookkeeping on top of the period repository.
//!
//! A user has at most one on-going period at a time. The database cannot
//! express that constraint directly, so the helpers here tolerate (and log)
//! the degenerate multi-period case instead of failing.

use chrono::Utc;
use sqlx::SqlitePool;

use wt_core::{Period, User};
use wt_db::{PeriodRepository, Result as DbResult};

async fn ongoing_periods(pool: &SqlitePool, user: &User) -> DbResult<Vec<Period>> {
    let repository = PeriodRepository::new(pool.clone());
    let periods = repository.find_ongoing(user.id).await?;

    if periods.len() > 1 {
        log::warn!(
            "user {} has {} on-going periods",
            user.username,
            periods.len()
        );
    }

    Ok(periods)
}

/// Closes every on-going period the user has, stamping them with the current
/// time. Returns how many periods were ended.
pub async fn end_ongoing_periods(pool: &SqlitePool, user: &User) -> DbResult<u64> {
    let repository = PeriodRepository::new(pool.clone());
    let now = Utc::now();

    let periods = ongoing_periods(pool, user).await?;
    let ended = periods.len() as u64;

    for period in periods {
        repository.set_ended_at(period.id, now).await?;
    }

    Ok(ended)
}

/// Starts a new period for the user. Any period still on-going is ended
/// first: a dangling period means we missed its real end, and closing it
/// here keeps it editable as its own record rather than absorbing the gap.
pub async fn start_period(pool: &SqlitePool, user: &User) -> DbResult<Period> {
    end_ongoing_periods(pool, user).await?;

    let repository = PeriodRepository::new(pool.clone());
    repository.create(user.id, Utc::now()).await
}

/// Returns the user's current on-going period, if any. When several exist
/// the oldest one is reported.
pub async fn ongoing_period(pool: &SqlitePool, user: &User) -> DbResult<Option<Period>> {
    let mut periods = ongoing_periods(pool, user).await?;

    if periods.is_empty() {
        Ok(None)
    } else {
        Ok(Some(periods.remove(0)))
    }
}
