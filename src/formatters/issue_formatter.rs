use crate::formatters::relative_time::format_relative;
use crate::schemas::Issue;
use chrono::{DateTime, Utc};

const BODY_PREVIEW_CHARS: usize = 150;

/// One issue as printed by `--print`: a header line with repository,
/// stars and language, the title, an optional body preview and a meta line.
pub fn format_issue(issue: &Issue, use_color: bool, now: DateTime<Utc>) -> String {
    use colored::Colorize;

    let language = issue.primary_language.as_deref().unwrap_or("-");
    let labels = issue
        .labels
        .iter()
        .map(|label| label.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let age = format_relative(&issue.created_at, now);
    let preview = issue.body.as_deref().map(body_preview);

    let mut out = if use_color {
        format!(
            "{} ★ {} {}\n  {} {}\n",
            issue.full_repo_name().bright_green(),
            issue.star_count.to_string().bright_yellow(),
            language.bright_magenta(),
            format!("#{}", issue.number).dimmed(),
            issue.title.bold()
        )
    } else {
        format!(
            "{} ★ {} {}\n  #{} {}\n",
            issue.full_repo_name(),
            issue.star_count,
            language,
            issue.number,
            issue.title
        )
    };

    if let Some(preview) = preview {
        if use_color {
            out.push_str(&format!("  {}\n", preview.dimmed()));
        } else {
            out.push_str(&format!("  {preview}\n"));
        }
    }

    let meta = format!(
        "[{labels}] · {} · opened {age}",
        comments_label(issue.comments_count)
    );
    if use_color {
        out.push_str(&format!("  {}\n  {}", meta.dimmed(), issue.url.bright_blue()));
    } else {
        out.push_str(&format!("  {meta}\n  {}", issue.url));
    }
    out
}

pub fn format_summary(shown: usize, total_count: u64) -> String {
    format!("Showing {shown} of {total_count} issues")
}

pub fn comments_label(count: u64) -> String {
    if count == 1 {
        "1 comment".to_string()
    } else {
        format!("{count} comments")
    }
}

fn body_preview(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= BODY_PREVIEW_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(BODY_PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    }
}
