//! Service global context

pub mod auth;

use std::sync::Arc;

use chrono::Datelike;
use mockable::{Clock, DefaultClock};

use auth::Credentials;

struct ContextInner {
    /// Accepted login
    credentials: Credentials,
    /// Source of the current date
    clock: Box<dyn Clock + Send + Sync>,
}

#[derive(Clone)]
pub struct Context(Arc<ContextInner>);

impl Context {
    /// Context using the system clock
    pub fn new(credentials: Credentials) -> Context {
        Self::with_clock(credentials, DefaultClock)
    }

    /// Context with custom clock
    pub fn with_clock(credentials: Credentials, clock: impl Clock + Send + Sync + 'static) -> Self {
        Self(Arc::new(ContextInner {
            credentials,
            clock: Box::new(clock),
        }))
    }

    /// Context for testing purposes - `admin`/`123456` login and the clock frozen in `year`
    #[cfg(test)]
    pub fn test(year: i32) -> Self {
        Self::with_clock(Credentials::new("admin", "123456"), tests::FixedClock::new(year))
    }

    /// Access to credentials
    pub fn credentials(&self) -> &Credentials {
        &self.0.credentials
    }

    /// Current year according to the local time
    pub fn current_year(&self) -> i32 {
        self.0.clock.local().year()
    }
}
