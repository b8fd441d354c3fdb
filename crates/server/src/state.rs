//! Shared application state handed to every handler.

use std::sync::Arc;

use catalog::FilmStore;
use kinopoisk::KinopoiskClient;
use tokio::sync::Mutex;

/// Collaborators shared across requests.
///
/// The store is injected as a trait object so tests can run against an
/// in-memory collection instead of a file on disk.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FilmStore>,
    pub provider: KinopoiskClient,
    /// Serializes every load-modify-save section on the shared document.
    /// Without it two concurrent mutations race and the later save wins.
    pub document_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn FilmStore>, provider: KinopoiskClient) -> Self {
        Self {
            store,
            provider,
            document_lock: Arc::new(Mutex::new(())),
        }
    }
}
