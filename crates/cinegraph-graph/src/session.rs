//! Session traits and the session-scoped executor.

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::client::GraphError;
use crate::mapper::MovieRow;
use crate::queries::QueryDescriptor;

/// One logical unit of work against the graph store.
#[async_trait]
pub trait GraphSession: Send + 'static {
    type Row: MovieRow + Send;

    /// Run a query and collect every row it returns.
    async fn run(&mut self, query: &QueryDescriptor) -> Result<Vec<Self::Row>, GraphError>;

    /// Release the session. Takes `self`, so a session cannot be closed twice.
    async fn close(self);
}

/// Something that can hand out fresh sessions.
#[async_trait]
pub trait SessionSource: Send + Sync {
    type Session: GraphSession;

    async fn session(&self) -> Result<Self::Session, GraphError>;
}

/// Run `work` against a freshly acquired session and release it afterwards.
///
/// Exactly one session is opened per call and it is closed on both the
/// success and the error path before the result is handed back. The
/// result of `work` is returned untouched. If no session could be
/// acquired, that error is returned and nothing is closed.
///
/// If the returned future is dropped before `work` finishes (client
/// disconnect, timeout, panic), the session is released in the background.
pub async fn with_session<S, F, T, E>(source: &S, work: F) -> Result<T, E>
where
    S: SessionSource + ?Sized,
    F: for<'s> FnOnce(&'s mut S::Session) -> BoxFuture<'s, Result<T, E>>,
    E: From<GraphError>,
{
    let mut guard = SessionGuard::empty();
    let session = guard.slot.insert(source.session().await?);
    tracing::debug!("Opened graph session");

    let result = work(session).await;

    guard.close().await;
    tracing::debug!(ok = result.is_ok(), "Closed graph session");

    result
}

/// Owns a live session until it is closed. Dropping it unclosed spawns the close.
struct SessionGuard<S: GraphSession> {
    slot: Option<S>,
}

impl<S: GraphSession> SessionGuard<S> {
    fn empty() -> Self {
        Self { slot: None }
    }

    async fn close(mut self) {
        if let Some(session) = self.slot.take() {
            session.close().await;
        }
    }
}

impl<S: GraphSession> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        let Some(session) = self.slot.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                tracing::debug!("Releasing abandoned graph session");
                handle.spawn(session.close());
            }
            Err(_) => tracing::warn!("No async runtime to release abandoned graph session"),
        }
    }
}
