use crate::github::SearchBackend;
use crate::interactive_ratatui::application::search_controller::SearchController;
use crate::interactive_ratatui::application::search_service::SearchService;
use crate::interactive_ratatui::domain::filter::Filter;
use crate::interactive_ratatui::domain::models::{AuthStatus, LoadState};
use crate::schemas::Issue;
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Issues collected for one-shot output.
#[derive(Debug, Clone)]
pub struct PrintReport {
    pub items: Vec<Issue>,
    pub total_count: u64,
    pub pages_loaded: u32,
    pub duration: Duration,
}

/// Sign in, then pull up to `pages` pages of `filter` through the same
/// controller the interactive view uses.
pub fn collect_pages(
    backend: Arc<dyn SearchBackend>,
    filter: Filter,
    pages: u32,
    show_progress: bool,
) -> Result<PrintReport> {
    let start = Instant::now();
    let service = SearchService::new(backend);

    match service.authenticate() {
        AuthStatus::Authenticated { login } => info!(%login, "authenticated"),
        AuthStatus::Unauthenticated(reason) => bail!("Not signed in to GitHub: {reason}"),
        AuthStatus::Resolving => bail!("Not signed in to GitHub"),
    }

    let progress = if show_progress {
        let pb = ProgressBar::new(u64::from(pages.max(1)));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} pages")?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut controller = SearchController::new(filter);
    let mut next = controller.start();
    while let Some(request) = next.take() {
        controller.apply(service.fetch(&request));
        if let Some(pb) = &progress {
            pb.inc(1);
        }
        if let LoadState::ErrorFirstPage(message) | LoadState::ErrorSubsequentPage(message) =
            controller.state()
        {
            if let Some(pb) = &progress {
                pb.abandon();
            }
            bail!("{message}");
        }
        if controller.cursor().current_page < pages {
            next = controller.load_next_page();
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(PrintReport {
        items: controller.items().to_vec(),
        total_count: controller.total_count(),
        pages_loaded: controller.cursor().current_page,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{SearchError, SearchPage};

    struct PagedBackend {
        signed_in: bool,
        fail_on_page: Option<u32>,
    }

    impl SearchBackend for PagedBackend {
        fn search(
            &self,
            _language: Option<&str>,
            _text: Option<&str>,
            page: u32,
        ) -> Result<SearchPage, SearchError> {
            if self.fail_on_page == Some(page) {
                return Err(SearchError::Service("API rate limit exceeded".to_string()));
            }
            let base = u64::from(page) * 100;
            let items = (base..base + 30)
                .map(|id| Issue {
                    id,
                    number: id,
                    owner_login: "golang".to_string(),
                    repo_name: "go".to_string(),
                    url: format!("https://github.com/golang/go/issues/{id}"),
                    title: format!("Issue {id}"),
                    body: None,
                    labels: Vec::new(),
                    star_count: 0,
                    comments_count: 0,
                    primary_language: Some("Go".to_string()),
                    created_at: String::new(),
                    repo_lookup: None,
                })
                .collect();
            Ok(SearchPage {
                items,
                total_count: 75,
            })
        }

        fn authenticate(&self) -> Result<String, SearchError> {
            if self.signed_in {
                Ok("gopher".to_string())
            } else {
                Err(SearchError::Unauthorized("Bad credentials".to_string()))
            }
        }
    }

    fn backend(signed_in: bool, fail_on_page: Option<u32>) -> Arc<dyn SearchBackend> {
        Arc::new(PagedBackend {
            signed_in,
            fail_on_page,
        })
    }

    #[test]
    fn test_single_page_by_default() {
        let report = collect_pages(backend(true, None), Filter::default(), 1, false).unwrap();
        assert_eq!(report.items.len(), 30);
        assert_eq!(report.total_count, 75);
        assert_eq!(report.pages_loaded, 1);
    }

    #[test]
    fn test_stops_at_last_page() {
        let report = collect_pages(backend(true, None), Filter::default(), 10, false).unwrap();
        // Three pages of 30 clamp to the 75 reported matches
        assert_eq!(report.items.len(), 75);
        assert_eq!(report.pages_loaded, 3);
    }

    #[test]
    fn test_requires_sign_in() {
        let err = collect_pages(backend(false, None), Filter::default(), 1, false).unwrap_err();
        assert!(err.to_string().contains("Bad credentials"));
    }

    #[test]
    fn test_page_failure_is_reported() {
        let err = collect_pages(backend(true, Some(2)), Filter::default(), 3, false).unwrap_err();
        assert_eq!(err.to_string(), "API rate limit exceeded");
    }
}
