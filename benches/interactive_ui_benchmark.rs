use codspeed_criterion_compat::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use goodfirst::github::SearchPage;
use goodfirst::interactive_ratatui::domain::filter::Filter;
use goodfirst::interactive_ratatui::domain::models::{AuthStatus, FetchOutcome};
use goodfirst::interactive_ratatui::ui::{
    app_state::AppState,
    commands::Command,
    components::{Component, result_list::ResultList, search_bar::SearchBar},
    events::Message,
    renderer::Renderer,
};
use goodfirst::schemas::{Issue, Label};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

fn create_test_issues(count: u64) -> Vec<Issue> {
    (0..count)
        .map(|i| {
            let title = if i % 10 == 0 {
                format!("日本語のドキュメントを修正 {i} 🦀")
            } else if i % 5 == 0 {
                format!(
                    "Very long issue title that should be truncated when the terminal is narrow, number {i}"
                )
            } else {
                format!("Fix typo in README {i}")
            };
            Issue {
                id: i,
                number: i,
                owner_login: format!("owner{}", i % 7),
                repo_name: format!("repo{}", i % 3),
                url: format!("https://github.com/owner/repo/issues/{i}"),
                title,
                body: Some("A short description of what needs to change.\nSecond line.".to_string()),
                labels: vec![
                    Label {
                        name: "good first issue".to_string(),
                    },
                    Label {
                        name: "documentation".to_string(),
                    },
                ],
                star_count: i * 13,
                comments_count: i % 4,
                primary_language: Some("TypeScript".to_string()),
                created_at: "2024-01-01T00:00:00Z".to_string(),
                repo_lookup: None,
            }
        })
        .collect()
}

fn loaded_state(count: u64) -> AppState {
    let mut state = AppState::new(Filter::new(Some("TypeScript".to_string()), None));
    let command = state.update(Message::AuthResolved(AuthStatus::Authenticated {
        login: "octocat".to_string(),
    }));
    if let Command::Fetch(request) = command {
        let page = SearchPage {
            items: create_test_issues(count),
            total_count: 1000,
        };
        state.update(Message::FetchCompleted(FetchOutcome::success(&request, page)));
    }
    state
}

fn benchmark_search_bar_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_bar");
    let test_area = Rect::new(0, 0, 80, 3);

    group.bench_function("render_loading", |b| {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("parser".to_string());
        search_bar.set_loading(true);

        b.iter_batched(
            || TestBackend::new(80, 24),
            |backend| {
                let mut terminal = Terminal::new(backend).unwrap();
                terminal.draw(|f| search_bar.render(f, test_area)).unwrap();
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn benchmark_result_list_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("result_list");
    let test_area = Rect::new(0, 0, 80, 20);

    for count in [30u64, 990] {
        let issues = create_test_issues(count);
        group.bench_function(format!("render_{count}_issues"), |b| {
            let mut result_list = ResultList::new();
            result_list.set_items(&issues);
            result_list.set_selected_index(issues.len() / 2);

            b.iter_batched(
                || TestBackend::new(80, 24),
                |backend| {
                    let mut terminal = Terminal::new(backend).unwrap();
                    terminal.draw(|f| result_list.render(f, test_area)).unwrap();
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("renderer");

    group.bench_function("render_loaded_frame", |b| {
        let state = loaded_state(30);
        let mut renderer = Renderer::new();

        b.iter_batched(
            || TestBackend::new(120, 40),
            |backend| {
                let mut terminal = Terminal::new(backend).unwrap();
                terminal.draw(|f| renderer.render(f, &state)).unwrap();
                black_box(renderer.take_continuation_signal());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn benchmark_app_state_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("app_state");

    group.bench_function("update_query_changed", |b| {
        b.iter_batched(
            || loaded_state(30),
            |mut state| black_box(state.update(Message::QueryChanged("docs".to_string()))),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("update_query_committed", |b| {
        b.iter_batched(
            || loaded_state(30),
            |mut state| black_box(state.update(Message::QueryCommitted("docs".to_string()))),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_search_bar_rendering,
    benchmark_result_list_rendering,
    benchmark_full_frame,
    benchmark_app_state_updates
);
criterion_main!(benches);
