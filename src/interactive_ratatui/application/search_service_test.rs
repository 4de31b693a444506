#[cfg(test)]
mod tests {
    use super::super::search_service::*;
    use crate::github::{GENERIC_FETCH_ERROR, SearchBackend, SearchError, SearchPage};
    use crate::interactive_ratatui::domain::filter::Filter;
    use crate::interactive_ratatui::domain::models::{
        AuthStatus, Epoch, FetchOutcome, FetchRequest,
    };
    use crate::schemas::Issue;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    fn issue(id: u64) -> Issue {
        Issue {
            id,
            number: id,
            owner_login: "o".to_string(),
            repo_name: "r".to_string(),
            url: format!("https://github.com/o/r/issues/{id}"),
            title: format!("Issue {id}"),
            body: None,
            labels: Vec::new(),
            star_count: 0,
            comments_count: 0,
            primary_language: None,
            created_at: String::new(),
            repo_lookup: None,
        }
    }

    /// Scripted backend. Requests for the "slow" language sleep before answering.
    #[derive(Default)]
    struct FakeBackend {
        calls: Mutex<Vec<(Option<String>, Option<String>, u32)>>,
        fail_with: Option<&'static str>,
        panic: bool,
        login: Option<&'static str>,
    }

    impl SearchBackend for FakeBackend {
        fn search(
            &self,
            language: Option<&str>,
            text: Option<&str>,
            page: u32,
        ) -> Result<SearchPage, SearchError> {
            self.calls.lock().unwrap().push((
                language.map(str::to_string),
                text.map(str::to_string),
                page,
            ));
            if self.panic {
                panic!("backend exploded");
            }
            if let Some(message) = self.fail_with {
                return Err(SearchError::Service(message.to_string()));
            }
            if language == Some("slow") {
                thread::sleep(Duration::from_millis(200));
            }
            Ok(SearchPage {
                items: vec![issue(u64::from(page))],
                total_count: 42,
            })
        }

        fn authenticate(&self) -> Result<String, SearchError> {
            if self.panic {
                panic!("backend exploded");
            }
            match self.login {
                Some(login) => Ok(login.to_string()),
                None => Err(SearchError::Unauthorized("Bad credentials".to_string())),
            }
        }
    }

    fn request(epoch: u64, language: &str, page: u32) -> FetchRequest {
        FetchRequest {
            epoch: Epoch(epoch),
            filter: Filter::new(Some(language.to_string()), Some("parser".to_string())),
            page,
        }
    }

    #[test]
    fn test_fetch_forwards_filter_and_page() {
        let backend = Arc::new(FakeBackend::default());
        let service = SearchService::new(backend.clone());

        let outcome = service.fetch(&request(3, "Rust", 2));

        assert_eq!(outcome.epoch, Epoch(3));
        assert_eq!(outcome.page, 2);
        let page = outcome.result.unwrap();
        assert_eq!(page.total_count, 42);
        assert_eq!(
            backend.calls.lock().unwrap().as_slice(),
            &[(Some("Rust".to_string()), Some("parser".to_string()), 2)]
        );
    }

    #[test]
    fn test_fetch_failure_carries_service_message() {
        let backend = Arc::new(FakeBackend {
            fail_with: Some("API rate limit exceeded"),
            ..Default::default()
        });
        let service = SearchService::new(backend);

        let outcome = service.fetch(&request(1, "Go", 1));

        assert_eq!(outcome.result, Err("API rate limit exceeded".to_string()));
    }

    #[test]
    fn test_fetch_panic_becomes_generic_failure() {
        let backend = Arc::new(FakeBackend {
            panic: true,
            ..Default::default()
        });
        let service = SearchService::new(backend);

        let outcome = service.fetch(&request(7, "Go", 3));

        assert_eq!(outcome.epoch, Epoch(7));
        assert_eq!(outcome.page, 3);
        assert_eq!(outcome.result, Err(GENERIC_FETCH_ERROR.to_string()));
    }

    #[test]
    fn test_authenticate() {
        let ok = SearchService::new(Arc::new(FakeBackend {
            login: Some("octocat"),
            ..Default::default()
        }));
        assert_eq!(
            ok.authenticate(),
            AuthStatus::Authenticated {
                login: "octocat".to_string()
            }
        );

        let denied = SearchService::new(Arc::new(FakeBackend::default()));
        assert_eq!(
            denied.authenticate(),
            AuthStatus::Unauthenticated("Bad credentials".to_string())
        );

        let broken = SearchService::new(Arc::new(FakeBackend {
            panic: true,
            ..Default::default()
        }));
        assert!(matches!(broken.authenticate(), AuthStatus::Unauthenticated(_)));
    }

    #[test]
    fn test_worker_answers_in_completion_order() {
        let service = SearchService::new(Arc::new(FakeBackend::default()));
        let (tx, rx) = spawn_worker(service);

        tx.send(WorkerRequest::Fetch(request(1, "slow", 1))).unwrap();
        tx.send(WorkerRequest::Fetch(request(2, "Rust", 1))).unwrap();

        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();

        // The newer, faster request is not held up by the slow one
        match (first, second) {
            (WorkerResponse::Fetch(a), WorkerResponse::Fetch(b)) => {
                assert_eq!(a.epoch, Epoch(2));
                assert_eq!(b.epoch, Epoch(1));
            }
            other => panic!("unexpected responses: {other:?}"),
        }
    }

    #[test]
    fn test_worker_handles_authentication() {
        let service = SearchService::new(Arc::new(FakeBackend {
            login: Some("octocat"),
            ..Default::default()
        }));
        let (tx, rx) = spawn_worker(service);

        tx.send(WorkerRequest::Authenticate).unwrap();

        let response = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(
            response,
            WorkerResponse::Auth(AuthStatus::Authenticated {
                login: "octocat".to_string()
            })
        );
    }

    #[test]
    fn test_every_request_gets_one_outcome() {
        let service = SearchService::new(Arc::new(FakeBackend {
            panic: true,
            ..Default::default()
        }));
        let (tx, rx) = spawn_worker(service);

        for page in 1..=3 {
            tx.send(WorkerRequest::Fetch(request(1, "Go", page))).unwrap();
        }

        let mut pages: Vec<u32> = (0..3)
            .map(|_| match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
                WorkerResponse::Fetch(FetchOutcome { page, result, .. }) => {
                    assert!(result.is_err());
                    page
                }
                other => panic!("unexpected response: {other:?}"),
            })
            .collect();
        pages.sort_unstable();
        assert_eq!(pages, vec![1, 2, 3]);
    }
}
