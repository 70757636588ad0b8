use super::{Place, SelectedLocation};
use crate::contexts::{SearchError, SearchResult};

/// Whether the suggestion overlay is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Idle,
    Suggesting,
}

/// Identifies one outbound autocomplete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub seq: u64,
    pub text: String,
}

/// What happened to a response handed to [`SearchState::apply_response`]
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// Candidates replaced; carries the new count
    Updated(usize),
    /// Candidates replaced after the previous request had failed
    Recovered(usize),
    /// The fetch for the latest query failed; candidates untouched
    Failed(SearchError),
    /// A newer request or a selection superseded this one
    Stale,
}

impl ResponseOutcome {
    /// Change to report through the owner's error handler: `Some(Some(err))`
    /// on a failure, `Some(None)` once a success follows one, `None` otherwise
    pub fn error_change(&self) -> Option<Option<SearchError>> {
        match self {
            ResponseOutcome::Failed(err) => Some(Some(err.clone())),
            ResponseOutcome::Recovered(_) => Some(None),
            ResponseOutcome::Updated(_) | ResponseOutcome::Stale => None,
        }
    }
}

/// Query text and suggestions owned by one location search widget.
///
/// Every non-empty query gets a ticket with a fresh sequence number. A
/// response is only applied while its ticket is still the latest one, so
/// replies arriving out of order never overwrite newer results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    query: String,
    candidates: Vec<Place>,
    last_error: Option<SearchError>,
    latest_seq: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[Place] {
        &self.candidates
    }

    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    pub fn mode(&self) -> SearchMode {
        if self.candidates.is_empty() {
            SearchMode::Idle
        } else {
            SearchMode::Suggesting
        }
    }

    pub fn is_suggesting(&self) -> bool {
        self.mode() == SearchMode::Suggesting
    }

    /// Record new input text. Returns the ticket to fetch with, or `None` for
    /// empty text, which issues nothing and leaves current suggestions alone.
    pub fn set_query(&mut self, text: impl Into<String>) -> Option<QueryTicket> {
        self.query = text.into();
        if self.query.is_empty() {
            return None;
        }

        self.latest_seq += 1;
        Some(QueryTicket {
            seq: self.latest_seq,
            text: self.query.clone(),
        })
    }

    pub fn is_current(&self, ticket: &QueryTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    /// Apply the result of the request identified by `ticket`
    pub fn apply_response(
        &mut self,
        ticket: &QueryTicket,
        result: SearchResult<Vec<Place>>,
    ) -> ResponseOutcome {
        if !self.is_current(ticket) {
            return ResponseOutcome::Stale;
        }

        match result {
            Ok(places) => {
                let recovered = self.last_error.take().is_some();
                self.candidates = places;
                if recovered {
                    ResponseOutcome::Recovered(self.candidates.len())
                } else {
                    ResponseOutcome::Updated(self.candidates.len())
                }
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                ResponseOutcome::Failed(err)
            }
        }
    }

    /// Pick the candidate at `index`: the query becomes its address, the
    /// overlay closes and any request still in flight is invalidated.
    pub fn select(&mut self, index: usize) -> Option<SelectedLocation> {
        let selection = self.candidates.get(index)?.to_selection();

        self.query = selection.address.clone();
        self.candidates.clear();
        self.latest_seq += 1;

        Some(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocoding::tests::FakeProvider;
    use crate::geocoding::Geocoder;
    use futures::executor::block_on;

    fn paris_results() -> Vec<Place> {
        vec![
            Place::new("Paris, France", 2.3483915, 48.8534951),
            Place::new("Paris, TX, United States of America", -95.555513, 33.6617962),
            Place::new("Paris, TN, United States of America", -88.3267072, 36.3020023),
        ]
    }

    #[test]
    fn test_set_query_updates_text_immediately() {
        let mut state = SearchState::new();
        let ticket = state.set_query("Lon").unwrap();

        assert_eq!(state.query(), "Lon");
        assert_eq!(ticket.text, "Lon");
        assert_eq!(state.mode(), SearchMode::Idle);
    }

    #[test]
    fn test_empty_query_issues_no_request() {
        let mut state = SearchState::new();
        let ticket = state.set_query("Par").unwrap();
        state.apply_response(&ticket, Ok(paris_results()));

        assert_eq!(state.set_query(""), None);
        assert_eq!(state.query(), "");
        // previous suggestions stay until a later response replaces them
        assert_eq!(state.candidates().len(), 3);
        assert!(state.is_suggesting());
    }

    #[test]
    fn test_response_shows_candidates_in_order() {
        let mut state = SearchState::new();
        let ticket = state.set_query("Paris").unwrap();

        let outcome = state.apply_response(&ticket, Ok(paris_results()));

        assert_eq!(outcome, ResponseOutcome::Updated(3));
        assert_eq!(state.mode(), SearchMode::Suggesting);
        let rows: Vec<&str> = state.candidates().iter().map(Place::address).collect();
        assert_eq!(
            rows,
            vec![
                "Paris, France",
                "Paris, TX, United States of America",
                "Paris, TN, United States of America",
            ]
        );
    }

    #[test]
    fn test_empty_response_hides_overlay() {
        let mut state = SearchState::new();
        let ticket = state.set_query("Paris").unwrap();
        state.apply_response(&ticket, Ok(paris_results()));

        let ticket = state.set_query("Parisxq").unwrap();
        assert_eq!(state.apply_response(&ticket, Ok(Vec::new())), ResponseOutcome::Updated(0));
        assert_eq!(state.mode(), SearchMode::Idle);
    }

    #[test]
    fn test_select_normalizes_and_resets() {
        let mut state = SearchState::new();
        let ticket = state.set_query("Pari").unwrap();
        state.apply_response(&ticket, Ok(paris_results()));

        let selection = state.select(1).unwrap();

        assert_eq!(
            selection,
            SelectedLocation {
                latitude: 33.6617962,
                longitude: -95.555513,
                address: "Paris, TX, United States of America".to_string(),
            }
        );
        assert_eq!(state.query(), "Paris, TX, United States of America");
        assert!(state.candidates().is_empty());
        assert_eq!(state.mode(), SearchMode::Idle);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut state = SearchState::new();
        let ticket = state.set_query("Pari").unwrap();
        state.apply_response(&ticket, Ok(paris_results()));

        assert_eq!(state.select(7), None);
        assert_eq!(state.query(), "Pari");
        assert_eq!(state.candidates().len(), 3);
    }

    #[test]
    fn test_late_response_for_older_query_is_discarded() {
        let mut state = SearchState::new();
        let par = state.set_query("Par").unwrap();
        let paris = state.set_query("Paris").unwrap();

        // "Paris" lands first, then the slower "Par" reply
        assert_eq!(state.apply_response(&paris, Ok(paris_results())), ResponseOutcome::Updated(3));
        let par_results = vec![Place::new("Parma, Italy", 10.3279036, 44.8013678)];
        assert_eq!(state.apply_response(&par, Ok(par_results)), ResponseOutcome::Stale);

        assert_eq!(state.candidates(), paris_results().as_slice());
        assert_eq!(state.query(), "Paris");
    }

    #[test]
    fn test_response_after_selection_is_discarded() {
        let mut state = SearchState::new();
        let first = state.set_query("Paris").unwrap();
        state.apply_response(&first, Ok(paris_results()));
        let second = state.set_query("Paris,").unwrap();
        state.select(0).unwrap();

        assert_eq!(state.apply_response(&second, Ok(paris_results())), ResponseOutcome::Stale);
        assert_eq!(state.mode(), SearchMode::Idle);
    }

    #[test]
    fn test_failure_keeps_candidates_and_query() {
        let mut state = SearchState::new();
        let ticket = state.set_query("Paris").unwrap();
        state.apply_response(&ticket, Ok(paris_results()));

        let ticket = state.set_query("Paris F").unwrap();
        let err = SearchError::Network("connection reset".to_string());
        let outcome = state.apply_response(&ticket, Err(err.clone()));

        assert_eq!(outcome, ResponseOutcome::Failed(err.clone()));
        assert_eq!(state.query(), "Paris F");
        assert_eq!(state.candidates(), paris_results().as_slice());
        assert_eq!(state.last_error(), Some(&err));
    }

    #[test]
    fn test_success_clears_last_error() {
        let mut state = SearchState::new();
        let ticket = state.set_query("Pa").unwrap();
        state.apply_response(&ticket, Err(SearchError::Parse("eof".to_string())));

        let ticket = state.set_query("Par").unwrap();
        let outcome = state.apply_response(&ticket, Ok(paris_results()));

        assert_eq!(outcome, ResponseOutcome::Recovered(3));
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn test_error_change_after_failure_then_success() {
        let mut state = SearchState::new();
        let err = SearchError::Status {
            status: 429,
            message: "Too Many Requests".to_string(),
        };

        let ticket = state.set_query("Pa").unwrap();
        let failed = state.apply_response(&ticket, Err(err.clone()));
        assert_eq!(failed.error_change(), Some(Some(err)));

        let ticket = state.set_query("Par").unwrap();
        let recovered = state.apply_response(&ticket, Ok(paris_results()));
        assert_eq!(recovered.error_change(), Some(None));

        // nothing left to clear on the next success
        let ticket = state.set_query("Pari").unwrap();
        let updated = state.apply_response(&ticket, Ok(paris_results()));
        assert_eq!(updated, ResponseOutcome::Updated(3));
        assert_eq!(updated.error_change(), None);
        assert_eq!(ResponseOutcome::Stale.error_change(), None);
    }

    #[test]
    fn test_stale_failure_is_not_recorded() {
        let mut state = SearchState::new();
        let old = state.set_query("Pa").unwrap();
        state.set_query("Par").unwrap();

        let outcome = state.apply_response(&old, Err(SearchError::Network("timeout".to_string())));
        assert_eq!(outcome, ResponseOutcome::Stale);
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn test_typing_session_with_geocoder() {
        let mut provider = FakeProvider::default();
        provider.answers.insert("Par".to_string(), Ok(paris_results()));
        provider.answers.insert(
            "Pari".to_string(),
            Err(SearchError::Status {
                status: 429,
                message: "Too Many Requests".to_string(),
            }),
        );
        let geocoder = Geocoder::new(provider);
        let mut state = SearchState::new();

        for text in ["P", "Pa", "Par", "", "Pari"] {
            if let Some(ticket) = state.set_query(text) {
                let result = block_on(geocoder.autocomplete(&ticket.text));
                state.apply_response(&ticket, result);
            }
        }

        assert_eq!(state.query(), "Pari");
        assert_eq!(state.candidates().len(), 3);
        assert!(matches!(state.last_error(), Some(SearchError::Status { status: 429, .. })));

        let selection = state.select(0).unwrap();
        assert_eq!(selection.address, "Paris, France");
        assert_eq!(selection.latitude, 48.8534951);
        assert_eq!(selection.longitude, 2.3483915);
    }
}
