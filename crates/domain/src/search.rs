//! Search and browse state
//!
//! Every request that produces a result set is tagged with a monotonically increasing
//! [`RequestID`]. A response is only applied if it belongs to the most recently issued request,
//! so overlapping requests always end with the results of the one issued last.

use log::debug;

use crate::{BodyPart, BodyPartCatalog, BodyPartSelection, Exercise, Pagination, ReadError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(input: &str) -> Result<Self, SearchQueryError> {
        let normalized = input.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(SearchQueryError::Empty);
        }

        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match against any of the searchable fields.
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.0))
    }

    #[must_use]
    pub fn filter(&self, exercises: impl IntoIterator<Item = Exercise>) -> Vec<Exercise> {
        exercises.into_iter().filter(|e| self.matches(e)).collect()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SearchQueryError {
    #[error("Search query must not be empty")]
    Empty,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestID(u64);

impl RequestID {
    #[must_use]
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Search(SearchQuery),
    Browse(BodyPartSelection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestID,
    pub request: Request,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Applied { matches: usize },
    Stale,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SearchResults<'a> {
    NotSearched,
    Searching,
    Found(&'a [Exercise]),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchState {
    query: String,
    catalog: Option<BodyPartCatalog>,
    selection: BodyPartSelection,
    results: Option<Vec<Exercise>>,
    applied: Option<Request>,
    latest: RequestID,
    pending: Option<RequestID>,
    pagination: Pagination,
}

impl SearchState {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, input: &str) {
        self.query = input.to_string();
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&BodyPartCatalog> {
        self.catalog.as_ref()
    }

    /// The body parts that can be selected.
    ///
    /// Until a catalog has been loaded, only the `all` sentinel is available.
    #[must_use]
    pub fn body_parts(&self) -> BodyPartCatalog {
        self.catalog.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn selection(&self) -> &BodyPartSelection {
        &self.selection
    }

    /// The request whose response produced the current results.
    #[must_use]
    pub fn applied(&self) -> Option<&Request> {
        self.applied.as_ref()
    }

    #[must_use]
    pub fn results(&self) -> SearchResults<'_> {
        if self.pending.is_some() {
            return SearchResults::Searching;
        }
        match &self.results {
            None => SearchResults::NotSearched,
            Some(results) => SearchResults::Found(results),
        }
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_page(&mut self, page: usize) {
        let len = self.results.as_ref().map_or(0, Vec::len);
        self.pagination.set_page(page, len);
    }

    /// Exercises on the current page of the results.
    #[must_use]
    pub fn page_results(&self) -> &[Exercise] {
        match &self.results {
            Some(results) => self.pagination.slice(results),
            None => &[],
        }
    }

    /// Store the body part catalog. Only the first successful load is kept.
    pub fn load_catalog(
        &mut self,
        result: Result<BodyPartCatalog, ReadError>,
    ) -> Result<(), ReadError> {
        if self.catalog.is_some() {
            debug!("ignoring repeated body part catalog load");
            return Ok(());
        }
        self.catalog = Some(result?);
        Ok(())
    }

    /// Start a search for the current query.
    ///
    /// Returns `None` without changing any state if the query is empty after trimming.
    pub fn begin_search(&mut self) -> Option<PendingRequest> {
        let query = SearchQuery::new(&self.query).ok()?;
        Some(self.issue(Request::Search(query)))
    }

    /// Start loading the exercises of a body part.
    ///
    /// The selection changes once the response has been applied.
    pub fn select_body_part(&mut self, body_part: BodyPart) -> PendingRequest {
        self.issue(Request::Browse(BodyPartSelection::from(body_part)))
    }

    /// Apply the response to a request.
    ///
    /// Responses to requests that have been superseded are discarded. On error, the current
    /// results, query and selection stay untouched and the error is passed on to the caller.
    pub fn complete(
        &mut self,
        pending: PendingRequest,
        result: Result<Vec<Exercise>, ReadError>,
    ) -> Result<SearchOutcome, ReadError> {
        if pending.id != self.latest {
            debug!(
                "discarding stale response to request {:?} (latest {:?})",
                pending.id, self.latest
            );
            return Ok(SearchOutcome::Stale);
        }

        self.pending = None;
        let exercises = result?;
        let matches = exercises.len();

        match &pending.request {
            Request::Search(_) => self.query.clear(),
            Request::Browse(selection) => self.selection = selection.clone(),
        }
        self.results = Some(exercises);
        self.applied = Some(pending.request);
        self.pagination.reset();

        Ok(SearchOutcome::Applied { matches })
    }

    fn issue(&mut self, request: Request) -> PendingRequest {
        self.latest = self.latest.next();
        self.pending = Some(self.latest);
        PendingRequest {
            id: self.latest,
            request,
        }
    }
}
