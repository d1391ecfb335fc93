//! Component state for the character roster, kept free of browser types so
//! the whole fetch/filter/paginate lifecycle is testable on the host.

use crate::api::{ApiError, Person};

pub const PAGE_SIZE: usize = 5;
pub const FETCH_ERROR_MESSAGE: &str = "Could not load the character list. Please try again later.";

/// What happens to the previously loaded page when a fetch fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Keep the last successful page in state under the error banner.
    #[default]
    RetainStale,
    /// Drop the list so only the error remains.
    ClearStale,
}

#[derive(Clone, Debug)]
pub struct RosterState {
    pub page: usize,
    pub people: Vec<Person>,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    pub policy: ErrorPolicy,
    newest_ticket: u64,
}

impl Default for RosterState {
    fn default() -> Self {
        Self {
            page: 1,
            people: Vec::new(),
            search: String::new(),
            loading: true,
            error: None,
            policy: ErrorPolicy::default(),
            newest_ticket: 0,
        }
    }
}

impl RosterState {
    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Register a new in-flight listing request and return its ticket.
    /// Tickets are monotonic; only the most recently issued one may commit.
    pub fn begin_fetch(&mut self) -> u64 {
        self.newest_ticket += 1;
        self.loading = true;
        self.newest_ticket
    }

    /// Commit a finished request. Returns false if the ticket has been
    /// superseded by a newer `begin_fetch`, in which case nothing changes;
    /// `loading` still belongs to the newer request.
    pub fn finish_fetch(&mut self, ticket: u64, outcome: Result<Vec<Person>, ApiError>) -> bool {
        if ticket != self.newest_ticket {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(people) => {
                self.people = people;
                self.error = None;
            }
            Err(_) => {
                if self.policy == ErrorPolicy::ClearStale {
                    self.people.clear();
                }
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn page_count(&self) -> usize {
        page_count(self.people.len())
    }

    pub fn visible_people(&self) -> Vec<Person> {
        filter_by_name(&self.people, &self.search)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Order-preserving, case-insensitive name filter. An empty search text
/// returns the list unchanged.
pub fn filter_by_name<'a>(people: &'a [Person], search: &str) -> Vec<&'a Person> {
    if search.is_empty() {
        return people.iter().collect();
    }
    let needle = search.to_lowercase();
    people
        .iter()
        .filter(|person| person.name.to_lowercase().contains(&needle))
        .collect()
}

/// Page-button count, derived from however many entries the current page
/// holds rather than the total the listing endpoint reports (see DESIGN.md).
pub fn page_count(loaded: usize) -> usize {
    loaded.div_ceil(PAGE_SIZE)
}
