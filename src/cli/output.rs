// Output formatting: the thin text adapter over the headless view trees

use crate::models::{Priority, StageCatalog, StageDefinition};
use crate::view::{
    MarkerStatus, ProcessListView, SummaryView, TimelineView,
};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_DIM: &str = "\x1b[2m";
const ANSI_INVERSE: &str = "\x1b[7m";
const ANSI_RESET: &str = "\x1b[0m";

const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_CYAN: &str = "\x1b[36m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";

/// Whether stdout wants color
pub fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", code, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => ANSI_FG_RED,
        Priority::Recommended => ANSI_FG_YELLOW,
        Priority::Future => ANSI_FG_BRIGHT_BLACK,
    }
}

/// Render the stage timeline: one marker line, then the current stage's
/// name, description, and focus areas.
pub fn format_timeline(view: &TimelineView, color: bool) -> String {
    let mut line = String::from("  ");
    for marker in &view.markers {
        let (symbol, code) = match marker.status {
            MarkerStatus::Completed => ("*", ANSI_FG_GREEN),
            MarkerStatus::Current => ("@", ANSI_FG_CYAN),
            MarkerStatus::Future => ("o", ANSI_FG_BRIGHT_BLACK),
        };
        line.push_str(&paint(symbol, code, color));
        line.push(' ');
        if marker.status == MarkerStatus::Current {
            line.push_str(&paint(&marker.short_name, ANSI_BOLD, color));
        } else {
            line.push_str(&marker.short_name);
        }
        if let Some(completed) = marker.connector_completed {
            let connector = if completed { " == " } else { " -- " };
            line.push_str(&paint(connector, ANSI_FG_BRIGHT_BLACK, color));
        }
    }

    let mut out = String::new();
    out.push_str(&line);
    out.push('\n');
    if !view.current_name.is_empty() {
        out.push_str(&format!(
            "\n  Stage: {}\n  {}\n",
            paint(&view.current_name, ANSI_BOLD, color),
            view.current_description
        ));
        if !view.current_focus.is_empty() {
            out.push_str("  Focus areas:\n");
            for focus in &view.current_focus {
                out.push_str(&format!("    - {}\n", focus));
            }
        }
    }
    out
}

/// Render the bucketed process checklist.
///
/// Collapsed sections print their header only; `long` adds the
/// dimension explanations and every rating option's description.
pub fn format_process_list(view: &ProcessListView, color: bool, long: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} processes for your stage\n", view.visible_count));

    for section in &view.sections {
        let header = format!(
            "\n{} ({}) [{}]\n",
            paint(section.title, priority_color(section.priority), color),
            section.count(),
            section.toggle_label
        );
        out.push_str(&header);
        if section.collapsed {
            continue;
        }

        for entry in &section.entries {
            let optional = if entry.optional { " [OPTIONAL]" } else { "" };
            out.push_str(&format!(
                "\n  {} {}{}\n",
                entry.id,
                paint(&entry.title, ANSI_BOLD, color),
                optional
            ));
            out.push_str(&format!("    {}\n", entry.description));
            if let Some(focus) = &entry.stage_focus {
                out.push_str(&format!("    For your stage: {}\n", focus));
            }

            for row in &entry.dimensions {
                let mut options = String::new();
                for option in &row.options {
                    let cell = if option.selected {
                        format!("[{}]", option.index)
                    } else {
                        format!(" {} ", option.index)
                    };
                    let painted = if option.active {
                        paint(&cell, ANSI_INVERSE, color)
                    } else if option.selected {
                        paint(&cell, ANSI_FG_GREEN, color)
                    } else {
                        cell
                    };
                    options.push_str(&painted);
                }
                let note = if row.note.is_empty() {
                    paint(&format!("({})", row.placeholder), ANSI_DIM, color)
                } else {
                    row.note.clone()
                };
                out.push_str(&format!(
                    "    {:<14} {}  {}\n",
                    row.label, options, note
                ));
                if long {
                    out.push_str(&format!("      {}\n", row.help));
                    for option in &row.options {
                        out.push_str(&format!(
                            "      {} = {}\n",
                            option.index, option.description
                        ));
                    }
                }
            }
        }
    }
    out
}

pub fn format_summary(view: &SummaryView) -> String {
    format!(
        "Average maturity score: {} ({} scores recorded)\n",
        view.display(),
        view.score_count
    )
}

/// Preview of the stage after the current one
pub fn format_stage_preview(next: Option<&StageDefinition>, color: bool) -> String {
    match next {
        Some(stage) => {
            let mut out = format!(
                "Next stage: {}\n\n{}\n",
                paint(&stage.name, ANSI_BOLD, color),
                stage.description
            );
            if !stage.focus.is_empty() {
                out.push_str("\nFocus areas:\n");
                for focus in &stage.focus {
                    out.push_str(&format!("  - {}\n", focus));
                }
            }
            out
        }
        None => "You are already at the last stage.\n".to_string(),
    }
}

/// The valid values for the three selectors
pub fn format_selector_options(stages: &StageCatalog) -> String {
    let mut out = String::from("Employees:\n");
    for range in &stages.employee_ranges {
        out.push_str(&format!("  {:<14} {}\n", range.value, range.label));
    }
    out.push_str("Revenue:\n");
    for revenue in &stages.revenue_stages {
        out.push_str(&format!("  {:<14} {}\n", revenue.value, revenue.label));
    }
    out.push_str("Funding:\n");
    for funding in &stages.funding_stages {
        out.push_str(&format!("  {:<14} {}\n", funding.value, funding.label));
    }
    out
}
