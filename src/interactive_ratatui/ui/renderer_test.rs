#[cfg(test)]
mod tests {
    use super::super::app_state::AppState;
    use super::super::commands::Command;
    use super::super::events::Message;
    use super::super::renderer::Renderer;
    use crate::github::SearchPage;
    use crate::interactive_ratatui::domain::filter::Filter;
    use crate::interactive_ratatui::domain::models::{AuthStatus, FetchOutcome, FetchRequest};
    use crate::schemas::Issue;
    use ratatui::{Terminal, backend::TestBackend};

    fn create_test_issue(id: u64) -> Issue {
        Issue {
            id,
            number: id,
            owner_login: "denoland".to_string(),
            repo_name: "deno".to_string(),
            url: format!("https://github.com/denoland/deno/issues/{id}"),
            title: format!("Issue {id}"),
            body: None,
            labels: Vec::new(),
            star_count: 1,
            comments_count: 0,
            primary_language: Some("TypeScript".to_string()),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            repo_lookup: None,
        }
    }

    fn draw(renderer: &mut Renderer, state: &AppState, height: u16) -> String {
        let backend = TestBackend::new(100, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| renderer.render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn sign_in(state: &mut AppState) -> FetchRequest {
        match state.update(Message::AuthResolved(AuthStatus::Authenticated {
            login: "octocat".to_string(),
        })) {
            Command::Fetch(request) => request,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    fn deliver(state: &mut AppState, request: &FetchRequest, count: u64, total: u64) {
        let base = u64::from(request.page) * 100;
        let page = SearchPage {
            items: (base..base + count).map(create_test_issue).collect(),
            total_count: total,
        };
        state.update(Message::FetchCompleted(FetchOutcome::success(request, page)));
    }

    #[test]
    fn test_signing_in_screen() {
        let mut renderer = Renderer::new();
        let state = AppState::default();

        let content = draw(&mut renderer, &state, 20);

        assert!(content.contains("goodfirst"));
        assert!(content.contains("Signing in..."));
        assert!(content.contains("Signing in to GitHub..."));
    }

    #[test]
    fn test_loading_then_results() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new(Filter::new(Some("Rust".to_string()), None));
        let request = sign_in(&mut state);

        let content = draw(&mut renderer, &state, 20);
        assert!(content.contains("Signed in as @octocat"));
        assert!(content.contains("Fetching good first issues..."));
        assert!(content.contains("Language: Rust"));

        deliver(&mut state, &request, 30, 75);
        let content = draw(&mut renderer, &state, 20);
        assert!(content.contains("Showing 30 of 75 issues"));
        assert!(content.contains("Good First Issues · page 1/3"));
        assert!(content.contains("denoland / deno"));
    }

    #[test]
    fn test_first_page_error_screen() {
        let mut renderer = Renderer::new();
        let mut state = AppState::default();
        let request = sign_in(&mut state);
        state.update(Message::FetchCompleted(FetchOutcome::failure(
            &request,
            "Failed to fetch issues. Please try again.",
        )));

        let content = draw(&mut renderer, &state, 20);

        assert!(content.contains("Something went wrong"));
        assert!(content.contains("Failed to fetch issues. Please try again."));
        assert!(!content.contains("Showing"));
    }

    #[test]
    fn test_empty_result_screen() {
        let mut renderer = Renderer::new();
        let mut state = AppState::default();
        let request = sign_in(&mut state);
        deliver(&mut state, &request, 0, 0);

        let content = draw(&mut renderer, &state, 20);
        assert!(content.contains("No issues found."));
        assert!(!renderer.take_continuation_signal());
    }

    #[test]
    fn test_visible_marker_drives_next_page() {
        let mut renderer = Renderer::new();
        let mut state = AppState::default();
        let request = sign_in(&mut state);
        deliver(&mut state, &request, 2, 60);

        draw(&mut renderer, &state, 30);
        assert!(renderer.take_continuation_signal());

        let next = match state.update(Message::ReachedBottom) {
            Command::Fetch(request) => request,
            other => panic!("expected fetch, got {other:?}"),
        };
        assert_eq!(next.page, 2);

        // Marker still on screen while loading: no further signal
        let content = draw(&mut renderer, &state, 30);
        assert!(content.contains("Loading more issues..."));
        assert!(!renderer.take_continuation_signal());

        deliver(&mut state, &next, 2, 60);
        draw(&mut renderer, &state, 30);
        assert!(renderer.take_continuation_signal());
    }

    #[test]
    fn test_language_picker_overlay() {
        let mut renderer = Renderer::new();
        let mut state = AppState::default();
        state.update(Message::OpenLanguagePicker);

        let content = draw(&mut renderer, &state, 40);

        assert!(content.contains("All languages"));
        assert!(content.contains("Esc/Tab: Close"));
    }
}
