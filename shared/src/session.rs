//! Session status polling.
//!
//! The poller only owns the "am I signed in" flag. Scheduling (interval
//! ticks, window focus) lives with whoever mounts it; once the owner shuts
//! it down, late answers from checks already in flight are dropped.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Responded { status: u16 },
    NetworkFailure,
}

impl CheckOutcome {
    /// Only a 2xx answer counts. A 401 and a dropped connection look the
    /// same to the UI.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Responded { status } if (200..300).contains(status))
    }
}

#[derive(Debug, Clone)]
pub struct SessionPoller {
    alive: Rc<Cell<bool>>,
    authenticated: Rc<Cell<bool>>,
}

impl Default for SessionPoller {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionPoller {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
            authenticated: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Runs one check. Returns the new flag, or `None` when the poller was
    /// shut down while the check was running.
    pub async fn refresh<F, Fut>(&self, probe: F) -> Option<bool>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = CheckOutcome>,
    {
        if !self.alive.get() {
            return None;
        }

        let outcome = probe().await;
        if !self.alive.get() {
            log::debug!("session check finished after shutdown, ignoring {:?}", outcome);
            return None;
        }

        let authenticated = outcome.is_authenticated();
        self.authenticated.set(authenticated);
        Some(authenticated)
    }

    pub fn shut_down(&self) {
        self.alive.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_success_status_authenticates() {
        let poller = SessionPoller::new();
        let result = block_on(poller.refresh(|| async { CheckOutcome::Responded { status: 200 } }));
        assert_eq!(result, Some(true));
        assert!(poller.is_authenticated());
    }

    #[test]
    fn test_unauthorized_and_network_failure_are_indistinguishable() {
        let poller = SessionPoller::new();
        block_on(poller.refresh(|| async { CheckOutcome::Responded { status: 204 } }));
        assert!(poller.is_authenticated());

        let after_401 = block_on(poller.refresh(|| async { CheckOutcome::Responded { status: 401 } }));
        assert_eq!(after_401, Some(false));

        block_on(poller.refresh(|| async { CheckOutcome::Responded { status: 200 } }));
        let after_network = block_on(poller.refresh(|| async { CheckOutcome::NetworkFailure }));
        assert_eq!(after_network, after_401);
        assert!(!poller.is_authenticated());
    }

    #[test]
    fn test_repeated_checks_overwrite_the_flag() {
        let poller = SessionPoller::new();
        for status in [200, 200, 500, 200] {
            block_on(poller.refresh(|| async move { CheckOutcome::Responded { status } }));
        }
        assert!(poller.is_authenticated());
    }

    #[test]
    fn test_no_update_after_shutdown() {
        let poller = SessionPoller::new();
        let handle = poller.clone();

        let result = block_on(poller.refresh(|| async move {
            handle.shut_down();
            CheckOutcome::Responded { status: 200 }
        }));

        assert_eq!(result, None);
        assert!(!poller.is_authenticated());
        assert!(!poller.is_alive());

        let skipped = block_on(poller.refresh(|| async { CheckOutcome::Responded { status: 200 } }));
        assert_eq!(skipped, None);
    }
}
