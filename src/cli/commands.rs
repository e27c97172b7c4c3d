use crate::app::App;
use crate::cli::error::{internal_error, user_error, validate_score_value};
use crate::cli::output::{
    format_process_list, format_selector_options, format_stage_preview, format_summary,
    format_timeline, use_color,
};
use crate::models::Priority;
use crate::schema;
use crate::store::StateStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "opscheck")]
#[command(about = "Operational maturity self-assessment checklist for growing companies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Directory containing processes.json and stages.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the timeline, the process checklist, and the summary
    Show {
        /// Include dimension explanations and rating descriptions
        #[arg(long)]
        long: bool,
    },
    /// Show only the stage timeline
    Timeline,
    /// Change a growth-stage selector
    Set {
        #[command(subcommand)]
        selector: SetCommands,
    },
    /// List the valid selector values
    Options,
    /// Record a score for a process dimension
    Score {
        /// Process id (e.g. P01)
        process: String,
        /// Dimension id (e.g. reliability)
        dimension: String,
        /// Score value (an option index, e.g. 0-4)
        value: String,
    },
    /// Record a free-text note for a process dimension
    Note {
        /// Process id (e.g. P01)
        process: String,
        /// Dimension id (e.g. ownership)
        dimension: String,
        /// Note text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Toggle a section's visibility and show the resulting checklist
    Toggle {
        /// Section: critical, recommended, or future
        section: String,
    },
    /// Show the average maturity score
    Summary,
    /// Preview the next growth stage
    Next,
    /// Export the checklist as a CSV file
    Export {
        /// Directory to write into (defaults to the current directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Interactive session: score, annotate, and toggle sections live
    Session,
}

#[derive(Subcommand)]
pub enum SetCommands {
    /// Employee bracket; this one also moves the current stage
    Employees { value: String },
    /// Revenue stage (recorded, does not move the current stage)
    Revenue { value: String },
    /// Funding stage (recorded, does not move the current stage)
    Funding { value: String },
}

pub fn run() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(schema::default_data_dir);
    let store = StateStore::open_default();
    let mut app = match App::init(&data_dir, store) {
        Ok(app) => app,
        Err(e) => {
            // Fatal: no partial UI, nothing else runs
            eprintln!("Error loading data: {}", e);
            internal_error(&format!(
                "schema documents must be readable from {}",
                data_dir.display()
            ));
        }
    };
    let color = use_color();

    match cli.command {
        Commands::Show { long } => {
            print!("{}", format_timeline(&app.timeline(), color));
            print!(
                "{}",
                format_process_list(&app.process_list(Instant::now()), color, long)
            );
            print!("{}", format_summary(&app.summary()));
        }
        Commands::Timeline => {
            print!("{}", format_timeline(&app.timeline(), color));
        }
        Commands::Set { selector } => {
            let result = match &selector {
                SetCommands::Employees { value } => app.set_employees(value),
                SetCommands::Revenue { value } => app.set_revenue(value),
                SetCommands::Funding { value } => app.set_funding(value),
            };
            if let Err(message) = result {
                user_error(&message);
            }
            // Selector changes re-derive everything downstream
            print!("{}", format_timeline(&app.timeline(), color));
            print!(
                "{}",
                format_process_list(&app.process_list(Instant::now()), color, false)
            );
        }
        Commands::Options => {
            print!("{}", format_selector_options(&app.stages));
        }
        Commands::Score {
            process,
            dimension,
            value,
        } => {
            let value = validate_score_value(&value).unwrap_or_else(|m| user_error(&m));
            app.set_score(&process, &dimension, value)
                .unwrap_or_else(|m| user_error(&m));
            print!("{}", format_summary(&app.summary()));
        }
        Commands::Note {
            process,
            dimension,
            text,
        } => {
            let text = text.join(" ");
            app.set_note(&process, &dimension, &text)
                .unwrap_or_else(|m| user_error(&m));
        }
        Commands::Toggle { section } => {
            // Collapse state is session-local, so this shows the flipped
            // section for this render only
            let priority = Priority::from_str(&section)
                .unwrap_or_else(|| user_error(&format!("Unknown section: '{}'", section)));
            app.toggle_section(priority);
            print!(
                "{}",
                format_process_list(&app.process_list(Instant::now()), color, false)
            );
        }
        Commands::Summary => {
            print!("{}", format_summary(&app.summary()));
        }
        Commands::Next => {
            print!("{}", format_stage_preview(app.next_stage(), color));
        }
        Commands::Export { output } => {
            let dir = output.unwrap_or_else(|| PathBuf::from("."));
            let path = app.export(&dir)?;
            println!("CSV exported: {}", path.display());
        }
        Commands::Session => {
            run_session(&mut app, color)?;
        }
    }

    Ok(())
}

/// The interactive event loop: one command per line, one at a time.
fn run_session(app: &mut App, color: bool) -> Result<()> {
    println!("opscheck session. Type 'help' for commands, 'quit' to leave.");
    print!("{}", format_timeline(&app.timeline(), color));
    print!(
        "{}",
        format_process_list(&app.process_list(Instant::now()), color, false)
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let now = Instant::now();
        app.view_state.tick(now);
        if let Err(message) = handle_session_line(app, line, color, now) {
            // A bad session command never ends the session
            println!("Error: {}", message);
        }
        if let Some(toast) = app.view_state.toast(Instant::now()) {
            println!("[{}]", toast);
        }
    }
    Ok(())
}

fn handle_session_line(
    app: &mut App,
    line: &str,
    color: bool,
    now: Instant,
) -> Result<(), String> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();

    match command {
        "help" => {
            println!("Commands:");
            println!("  show [long]                    full checklist");
            println!("  timeline                       stage timeline");
            println!("  set <employees|revenue|funding> <value>");
            println!("  options                        valid selector values");
            println!("  score <process> <dimension> <value>");
            println!("  note <process> <dimension> <text...>");
            println!("  toggle <critical|recommended|future>");
            println!("  summary                        average maturity score");
            println!("  next                           preview the next stage");
            println!("  export                         write the CSV");
            println!("  quit");
            Ok(())
        }
        "show" => {
            let long = parts.next() == Some("long");
            print!("{}", format_timeline(&app.timeline(), color));
            print!("{}", format_process_list(&app.process_list(now), color, long));
            print!("{}", format_summary(&app.summary()));
            Ok(())
        }
        "timeline" => {
            print!("{}", format_timeline(&app.timeline(), color));
            Ok(())
        }
        "set" => {
            let field = parts.next().ok_or("Usage: set <field> <value>")?;
            let value = parts.next().ok_or("Usage: set <field> <value>")?;
            match field {
                "employees" => app.set_employees(value)?,
                "revenue" => app.set_revenue(value)?,
                "funding" => app.set_funding(value)?,
                _ => return Err(format!("Unknown selector: '{}'", field)),
            }
            print!("{}", format_timeline(&app.timeline(), color));
            print!("{}", format_process_list(&app.process_list(now), color, false));
            Ok(())
        }
        "options" => {
            print!("{}", format_selector_options(&app.stages));
            Ok(())
        }
        "score" => {
            let process = parts.next().ok_or("Usage: score <process> <dimension> <value>")?;
            let dimension = parts.next().ok_or("Usage: score <process> <dimension> <value>")?;
            let value = parts.next().ok_or("Usage: score <process> <dimension> <value>")?;
            let value = validate_score_value(value)?;
            app.set_score(process, dimension, value)?;
            // The tapped option flashes briefly, like a tap highlight
            app.view_state.flash(process, dimension, value, now);
            print!("{}", format_summary(&app.summary()));
            Ok(())
        }
        "note" => {
            let process = parts.next().ok_or("Usage: note <process> <dimension> <text...>")?;
            let dimension = parts.next().ok_or("Usage: note <process> <dimension> <text...>")?;
            let text: Vec<&str> = parts.collect();
            app.set_note(process, dimension, &text.join(" "))?;
            println!("Noted.");
            Ok(())
        }
        "toggle" => {
            let section = parts.next().ok_or("Usage: toggle <critical|recommended|future>")?;
            let priority = Priority::from_str(section)
                .ok_or_else(|| format!("Unknown section: '{}'", section))?;
            app.toggle_section(priority);
            print!("{}", format_process_list(&app.process_list(now), color, false));
            Ok(())
        }
        "summary" => {
            print!("{}", format_summary(&app.summary()));
            Ok(())
        }
        "next" => {
            print!("{}", format_stage_preview(app.next_stage(), color));
            Ok(())
        }
        "export" => {
            let path = app
                .export(std::path::Path::new("."))
                .map_err(|e| format!("export failed: {:#}", e))?;
            log::info!("export written to {}", path.display());
            app.view_state.show_toast("CSV exported", now);
            Ok(())
        }
        _ => Err(format!("Unknown command: '{}'. Type 'help'.", command)),
    }
}
