//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**: the date the literal date
//! spec `"today"` resolves to. It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! When no evaluation date is pinned, "today" is the local calendar date of
//! the system clock. Pinning one makes every `"today"` lookup deterministic,
//! which is what tests and "as of" re-runs want.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use chrono::{Local, NaiveDate};

/// Process-wide settings used by bizcal.
pub struct Settings {
    evaluation_date: Mutex<Option<NaiveDate>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the current evaluation date.
    ///
    /// Falls back to the system's local date when nothing is pinned.
    pub fn evaluation_date(&self) -> NaiveDate {
        self.pinned().unwrap_or_else(|| Local::now().date_naive())
    }

    /// Return the pinned evaluation date, if any.
    pub fn pinned(&self) -> Option<NaiveDate> {
        *self.lock()
    }

    /// Pin the evaluation date.
    pub fn set_evaluation_date(&self, date: NaiveDate) {
        *self.lock() = Some(date);
    }

    /// Clear the evaluation date, resetting it to "use the system clock".
    pub fn reset_evaluation_date(&self) {
        *self.lock() = None;
    }

    // The guarded value is a plain `Option<NaiveDate>`; a panic while holding
    // the lock cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, Option<NaiveDate>> {
        self.evaluation_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Pins the evaluation date for the lifetime of the guard.
///
/// The previously pinned value (or its absence) is restored on drop.
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<NaiveDate>,
}

impl ScopedEvaluationDate {
    /// Pin `date` as the evaluation date until the guard goes out of scope.
    pub fn new(date: NaiveDate) -> Self {
        let settings = Settings::instance();
        let previous = settings.pinned();
        settings.set_evaluation_date(date);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(date) => settings.set_evaluation_date(date),
            None => settings.reset_evaluation_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_date_is_restored() {
        let pinned = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        {
            let _guard = ScopedEvaluationDate::new(pinned);
            assert_eq!(Settings::instance().evaluation_date(), pinned);
            assert_eq!(Settings::instance().pinned(), Some(pinned));
        }
        assert_ne!(Settings::instance().pinned(), Some(pinned));
    }
}
