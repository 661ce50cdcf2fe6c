use chrono::{DateTime, Utc};

/// Clock abstracts access to the current timestamp so services remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Seconds since the Unix epoch. Defaults to `now().timestamp()`.
    fn unix_seconds(&self) -> i64 {
        self.now().timestamp()
    }
}
