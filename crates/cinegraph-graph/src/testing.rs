//! In-memory session source for tests.
//!
//! Records every session opened and closed plus every query run, and
//! answers queries with scripted rows or a scripted error.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::client::GraphError;
use crate::mapper::MovieRow;
use crate::queries::QueryDescriptor;
use crate::session::{GraphSession, SessionSource};

/// A scripted result row. A `None` field makes its accessor fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeRow {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl FakeRow {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id: Some(id),
            name: Some(name.to_string()),
        }
    }

    pub fn missing_name(id: i64) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }
}

impl MovieRow for FakeRow {
    fn id(&self) -> Result<i64, GraphError> {
        self.id
            .ok_or_else(|| GraphError::Serialization("row has no id".to_string()))
    }

    fn name(&self) -> Result<String, GraphError> {
        self.name
            .clone()
            .ok_or_else(|| GraphError::Serialization("row has no name".to_string()))
    }
}

#[derive(Default)]
struct FakeState {
    opened: usize,
    closed: usize,
    executed: Vec<QueryDescriptor>,
    rows: Vec<FakeRow>,
    run_error: Option<GraphError>,
    session_error: Option<GraphError>,
}

/// Shared handle to the fake; clones observe the same counters.
#[derive(Clone, Default)]
pub struct FakeSessionSource {
    state: Arc<Mutex<FakeState>>,
}

impl FakeSessionSource {
    /// Every query run returns `rows`.
    pub fn with_rows(rows: Vec<FakeRow>) -> Self {
        let source = Self::default();
        source.lock().rows = rows;
        source
    }

    /// The next query run fails with `err`.
    pub fn fail_next_run(&self, err: GraphError) {
        self.lock().run_error = Some(err);
    }

    /// The next session acquisition fails with `err`.
    pub fn fail_next_session(&self, err: GraphError) {
        self.lock().session_error = Some(err);
    }

    pub fn opened(&self) -> usize {
        self.lock().opened
    }

    pub fn closed(&self) -> usize {
        self.lock().closed
    }

    /// Queries run so far, in order.
    pub fn executed(&self) -> Vec<QueryDescriptor> {
        self.lock().executed.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SessionSource for FakeSessionSource {
    type Session = FakeSession;

    async fn session(&self) -> Result<FakeSession, GraphError> {
        let mut state = self.lock();
        if let Some(err) = state.session_error.take() {
            return Err(err);
        }
        state.opened += 1;
        Ok(FakeSession {
            state: Arc::clone(&self.state),
        })
    }
}

pub struct FakeSession {
    state: Arc<Mutex<FakeState>>,
}

#[async_trait]
impl GraphSession for FakeSession {
    type Row = FakeRow;

    async fn run(&mut self, query: &QueryDescriptor) -> Result<Vec<FakeRow>, GraphError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.executed.push(query.clone());
        match state.run_error.take() {
            Some(err) => Err(err),
            None => Ok(state.rows.clone()),
        }
    }

    async fn close(self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.closed += 1;
    }
}
