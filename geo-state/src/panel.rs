//! Fetch state for a single data panel.
//!
//! A panel is keyed by its input (the location, plus the population hint for
//! the economic panel). Every request it issues gets a sequence number; only
//! the result carrying the latest number is applied, so a slow response for
//! an old location can never overwrite a newer one.

use geo_api::ApiError;
use log::debug;

/// What a panel is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    /// No input yet, or the last error was dismissed.
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> PanelState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PanelState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PanelState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Proof that a request was issued; hand it back with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
}

/// Panel fetch controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel<K, T> {
    key: Option<K>,
    seq: u64,
    state: PanelState<T>,
    /// Last loaded data, kept while a re-fetch is in flight or has failed.
    previous: Option<T>,
    /// Set by `observe`; a dismissed error then forgets the key so the
    /// same input fetches again when resubmitted.
    auto: bool,
    fallback: &'static str,
}

impl<K: Clone + PartialEq, T> Panel<K, T> {
    /// `fallback` is shown when a failure carries no backend message.
    pub fn new(fallback: &'static str) -> Self {
        Self {
            key: None,
            seq: 0,
            state: PanelState::Idle,
            previous: None,
            auto: false,
            fallback,
        }
    }

    pub fn state(&self) -> &PanelState<T> {
        &self.state
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Data from the last successful request, if it has been superseded by
    /// a request that is still loading or has failed.
    pub fn previous(&self) -> Option<&T> {
        match self.state {
            PanelState::Loading | PanelState::Failed(_) => self.previous.as_ref(),
            _ => None,
        }
    }

    /// Input changed on a panel that fetches automatically.
    ///
    /// Returns the ticket and key to request with when `key` is present and
    /// differs from the last one seen; at most one request per distinct key.
    pub fn observe(&mut self, key: Option<K>) -> Option<(RequestTicket, K)> {
        self.auto = true;
        if key == self.key {
            return None;
        }
        self.key = key;
        match self.key.clone() {
            Some(key) => {
                let ticket = self.begin();
                self.previous = None;
                Some((ticket, key))
            }
            None => {
                self.reset();
                None
            }
        }
    }

    /// Input changed on a panel that only fetches on demand.
    pub fn track(&mut self, key: Option<K>) {
        self.auto = false;
        if key == self.key {
            return;
        }
        if key.is_none() || self.state.is_loading() {
            self.reset();
        }
        self.key = key;
    }

    /// Explicit user re-trigger. Ignored without input or while a request is
    /// already in flight.
    pub fn trigger(&mut self) -> Option<(RequestTicket, K)> {
        if self.state.is_loading() {
            return None;
        }
        let key = self.key.clone()?;
        Some((self.begin(), key))
    }

    /// Apply a result. Returns `false` (and changes nothing) when a newer
    /// request has been issued since `ticket`.
    pub fn resolve(&mut self, ticket: RequestTicket, result: Result<T, ApiError>) -> bool {
        if ticket.seq != self.seq {
            debug!(
                "Discarding stale response #{} (latest is #{})",
                ticket.seq, self.seq
            );
            return false;
        }
        self.state = match result {
            Ok(data) => {
                self.previous = None;
                PanelState::Loaded(data)
            }
            Err(e) => PanelState::Failed(e.user_message(self.fallback)),
        };
        true
    }

    /// Clear a displayed error.
    ///
    /// An on-demand panel keeps its key so the trigger stays available. An
    /// automatic panel forgets it, so resubmitting the same input retries.
    /// Previously loaded data, if any, is shown again.
    pub fn dismiss(&mut self) {
        if !matches!(self.state, PanelState::Failed(_)) {
            return;
        }
        if self.auto {
            self.key = None;
        }
        self.state = match self.previous.take() {
            Some(data) => PanelState::Loaded(data),
            None => PanelState::Idle,
        };
    }

    fn begin(&mut self) -> RequestTicket {
        self.seq += 1;
        let state = std::mem::replace(&mut self.state, PanelState::Loading);
        if let PanelState::Loaded(data) = state {
            self.previous = Some(data);
        }
        RequestTicket { seq: self.seq }
    }

    /// Back to `Idle`, invalidating any request in flight.
    fn reset(&mut self) {
        self.seq += 1;
        self.state = PanelState::Idle;
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Failed to calculate carbon footprint";

    fn panel() -> Panel<String, u32> {
        Panel::new(FALLBACK)
    }

    #[test]
    fn test_no_location_issues_no_request() {
        let mut p = panel();
        assert_eq!(p.observe(None), None);
        assert_eq!(p.state(), &PanelState::Idle);
        assert_eq!(p.trigger(), None);
    }

    #[test]
    fn test_one_request_per_distinct_location() {
        let mut p = panel();
        let (ticket, key) = p.observe(Some("Pune".into())).unwrap();
        assert_eq!(key, "Pune");
        assert!(p.state().is_loading());
        assert_eq!(p.observe(Some("Pune".into())), None);

        assert!(p.resolve(ticket, Ok(7)));
        assert_eq!(p.state().data(), Some(&7));
        assert_eq!(p.observe(Some("Pune".into())), None);
        assert!(p.observe(Some("Nagpur".into())).is_some());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut p = panel();
        let (first, _) = p.observe(Some("Pune".into())).unwrap();
        let (second, _) = p.observe(Some("Nagpur".into())).unwrap();

        assert!(p.resolve(second, Ok(2)));
        assert!(!p.resolve(first, Ok(1)));
        assert_eq!(p.state().data(), Some(&2));
    }

    #[test]
    fn test_clearing_location_cancels_in_flight_result() {
        let mut p = panel();
        let (ticket, _) = p.observe(Some("Pune".into())).unwrap();
        assert_eq!(p.observe(None), None);
        assert!(!p.resolve(ticket, Ok(1)));
        assert_eq!(p.state(), &PanelState::Idle);
    }

    #[test]
    fn test_error_messages() {
        let mut p = panel();
        let (ticket, _) = p.observe(Some("Pune".into())).unwrap();
        p.resolve(
            ticket,
            Err(ApiError::Status {
                status: 400,
                message: Some("X".into()),
            }),
        );
        assert_eq!(p.state().error(), Some("X"));

        let (ticket, _) = p.trigger().unwrap();
        p.resolve(ticket, Err(ApiError::Transport("offline".into())));
        assert_eq!(p.state().error(), Some(FALLBACK));

        p.dismiss();
        assert_eq!(p.state(), &PanelState::Idle);
    }

    #[test]
    fn test_on_demand_panel_waits_for_trigger() {
        let mut p = panel();
        p.track(Some("Pune".into()));
        assert_eq!(p.state(), &PanelState::Idle);

        let (ticket, key) = p.trigger().unwrap();
        assert_eq!(key, "Pune");
        assert_eq!(p.trigger(), None, "no second request while loading");
        assert!(p.resolve(ticket, Ok(3)));

        p.track(Some("Nagpur".into()));
        assert_eq!(p.state().data(), Some(&3));
        p.track(None);
        assert_eq!(p.state(), &PanelState::Idle);
        assert_eq!(p.trigger(), None);
    }

    #[test]
    fn test_dismissed_error_retries_same_location() {
        let mut p = panel();
        let (ticket, _) = p.observe(Some("Pune".into())).unwrap();
        p.resolve(ticket, Err(ApiError::Transport("offline".into())));
        p.dismiss();
        assert_eq!(p.state(), &PanelState::Idle);

        let (ticket, key) = p.observe(Some("Pune".into())).unwrap();
        assert_eq!(key, "Pune");
        assert!(p.resolve(ticket, Ok(5)));
        assert_eq!(p.state().data(), Some(&5));
    }

    #[test]
    fn test_on_demand_panel_keeps_insights_through_retry() {
        let mut p = panel();
        p.track(Some("Pune".into()));
        let (ticket, _) = p.trigger().unwrap();
        p.resolve(ticket, Ok(1));

        let (ticket, _) = p.trigger().unwrap();
        assert_eq!(p.previous(), Some(&1));
        p.resolve(ticket, Err(ApiError::Transport("offline".into())));
        assert_eq!(p.state().error(), Some(FALLBACK));
        assert_eq!(p.previous(), Some(&1));

        p.dismiss();
        assert_eq!(p.state().data(), Some(&1));
        assert_eq!(p.previous(), None);
        assert!(p.trigger().is_some(), "key kept for the generate button");
    }

    #[test]
    fn test_new_location_drops_previous_data() {
        let mut p = panel();
        let (ticket, _) = p.observe(Some("Pune".into())).unwrap();
        p.resolve(ticket, Ok(1));
        p.observe(Some("Nagpur".into())).unwrap();
        assert_eq!(p.previous(), None);
    }

    #[test]
    fn test_population_is_part_of_the_key() {
        let mut p: Panel<(String, Option<u64>), u32> = Panel::new(FALLBACK);
        let (ticket, _) = p.observe(Some(("Pune".into(), None))).unwrap();
        p.resolve(ticket, Ok(1));

        assert_eq!(p.observe(Some(("Pune".into(), None))), None);
        let (_, key) = p.observe(Some(("Pune".into(), Some(3_124_458)))).unwrap();
        assert_eq!(key, ("Pune".to_string(), Some(3_124_458)));
        assert_eq!(p.observe(Some(("Pune".into(), Some(3_124_458)))), None);
    }
}
