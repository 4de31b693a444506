use super::list_item::{ListItem, truncate_message, wrap_text};
use super::view_layout::Styles;
use crate::formatters::{comments_label, format_relative};
use crate::interactive_ratatui::constants::BODY_PREVIEW_LINES;
use crate::interactive_ratatui::domain::languages::{label_color, language_color};
use crate::schemas::Issue;
use chrono::{DateTime, Utc};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const BODY_INDENT: &str = "  ";

impl ListItem for Issue {
    fn create_lines(&self, max_width: usize, now: DateTime<Utc>) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(3 + BODY_PREVIEW_LINES);

        // owner/repo ★ stars ● language
        let mut header = vec![
            Span::styled(self.owner_login.clone(), Styles::link()),
            Span::styled(" / ", Styles::dimmed()),
            Span::styled(
                self.repo_name.clone(),
                Styles::link().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ★ {}", self.star_count), Styles::label()),
        ];
        if let Some(language) = &self.primary_language {
            header.push(Span::styled(
                "  ● ",
                Style::default().fg(language_color(language)),
            ));
            header.push(Span::styled(language.clone(), Styles::dimmed()));
        }
        lines.push(Line::from(header));

        let number = format!("#{} ", self.number);
        let title_width = max_width.saturating_sub(number.chars().count());
        lines.push(Line::from(vec![
            Span::styled(number, Styles::dimmed()),
            Span::styled(
                truncate_message(&self.title, title_width),
                Styles::normal().add_modifier(Modifier::BOLD),
            ),
        ]));

        if let Some(body) = &self.body {
            let body_width = max_width.saturating_sub(BODY_INDENT.len());
            let wrapped = wrap_text(body, body_width);
            let overflow = wrapped.len() > BODY_PREVIEW_LINES;
            for (i, line) in wrapped.iter().take(BODY_PREVIEW_LINES).enumerate() {
                let text = if overflow && i + 1 == BODY_PREVIEW_LINES {
                    truncate_message(&format!("{line}..."), body_width)
                } else {
                    line.clone()
                };
                lines.push(Line::from(Span::styled(
                    format!("{BODY_INDENT}{text}"),
                    Styles::dimmed(),
                )));
            }
        }

        let mut meta: Vec<Span<'static>> = Vec::new();
        for label in &self.labels {
            meta.push(Span::styled(
                format!("[{}]", label.name),
                Style::default().fg(label_color(&label.name)),
            ));
            meta.push(Span::raw(" "));
        }
        meta.push(Span::styled(
            format!(
                "💬 {} · opened {}",
                comments_label(self.comments_count),
                format_relative(&self.created_at, now)
            ),
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::from(meta));

        lines
    }

    fn key(&self) -> u64 {
        self.id
    }
}
