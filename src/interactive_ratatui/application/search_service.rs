use crate::github::{GENERIC_FETCH_ERROR, SearchBackend};
use crate::interactive_ratatui::domain::models::{AuthStatus, FetchOutcome, FetchRequest};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, error, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum WorkerRequest {
    Authenticate,
    Fetch(FetchRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    Auth(AuthStatus),
    Fetch(FetchOutcome),
}

/// Turns backend calls into outcomes the controller can apply. Every
/// request yields exactly one outcome, panics included.
#[derive(Clone)]
pub struct SearchService {
    backend: Arc<dyn SearchBackend>,
}

impl SearchService {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    pub fn fetch(&self, request: &FetchRequest) -> FetchOutcome {
        let filter = &request.filter;
        let result = catch_unwind(AssertUnwindSafe(|| {
            self.backend
                .search(filter.language(), filter.text(), request.page)
        }));

        match result {
            Ok(Ok(page)) => {
                debug!(
                    epoch = request.epoch.0,
                    page = request.page,
                    items = page.items.len(),
                    "fetch succeeded"
                );
                FetchOutcome::success(request, page)
            }
            Ok(Err(e)) => {
                warn!(epoch = request.epoch.0, page = request.page, "fetch failed: {e}");
                FetchOutcome::failure(request, e.user_message())
            }
            Err(_) => {
                error!(page = request.page, "search backend panicked");
                FetchOutcome::failure(request, GENERIC_FETCH_ERROR)
            }
        }
    }

    pub fn authenticate(&self) -> AuthStatus {
        match catch_unwind(AssertUnwindSafe(|| self.backend.authenticate())) {
            Ok(Ok(login)) => AuthStatus::Authenticated { login },
            Ok(Err(e)) => {
                warn!("authentication failed: {e}");
                AuthStatus::Unauthenticated(e.user_message())
            }
            Err(_) => {
                error!("authentication panicked");
                AuthStatus::Unauthenticated(GENERIC_FETCH_ERROR.to_string())
            }
        }
    }

    pub fn handle(&self, request: &WorkerRequest) -> WorkerResponse {
        match request {
            WorkerRequest::Authenticate => WorkerResponse::Auth(self.authenticate()),
            WorkerRequest::Fetch(fetch) => WorkerResponse::Fetch(self.fetch(fetch)),
        }
    }
}

/// Start the background worker. Each request runs on its own thread so a
/// slow page never blocks a newer query; responses arrive in completion
/// order and the receiver decides which ones still matter.
pub fn spawn_worker(service: SearchService) -> (Sender<WorkerRequest>, Receiver<WorkerResponse>) {
    let (request_tx, request_rx) = mpsc::channel::<WorkerRequest>();
    let (response_tx, response_rx) = mpsc::channel::<WorkerResponse>();

    thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            let service = service.clone();
            let response_tx = response_tx.clone();
            thread::spawn(move || {
                let response = service.handle(&request);
                // The UI may already be gone
                let _ = response_tx.send(response);
            });
        }
    });

    (request_tx, response_rx)
}
