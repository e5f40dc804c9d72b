use clap::Parser;
use colored::*;
use console::Term;
use directories::ProjectDirs;
use jot::api::JotApi;
use jot::commands::{CmdMessage, CmdResult, MessageLevel};
use jot::config::JotConfig;
use jot::error::{JotError, Result};
use jot::index::DisplayNote;
use jot::model::display_category;
use jot::store::{FsBackend, NoteStore};
use jot::theme::Theme;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: JotApi<FsBackend>,
    config: JotConfig,
    data_dir: PathBuf,
    theme: Theme,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { text, category }) => handle_add(&mut ctx, text, category),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Edit { position, text }) => handle_edit(&mut ctx, position, text),
        Some(Commands::Delete { positions }) => handle_delete(&mut ctx, positions),
        Some(Commands::Pin { positions }) => handle_pin(&mut ctx, positions),
        Some(Commands::Unpin { positions }) => handle_unpin(&mut ctx, positions),
        Some(Commands::Theme { mode }) => handle_theme(&mut ctx, mode),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

/// Data directory resolution: JOT_DATA_DIR env, then --data, then a local
/// .jot/ when one exists, then the OS data dir.
fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Ok(dir) = std::env::var("JOT_DATA_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(dir) = &cli.data {
        return PathBuf::from(dir);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let local = cwd.join(".jot");
    if local.is_dir() {
        return local;
    }

    match ProjectDirs::from("com", "jot", "jot") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => local,
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli);
    let config = JotConfig::load(&data_dir)?;

    let store = NoteStore::with_backend(FsBackend::new(data_dir.clone()));
    // Theme is loaded before anything is painted.
    let theme = store.theme()?;
    let api = JotApi::new(store);

    Ok(AppContext {
        api,
        config,
        data_dir,
        theme,
    })
}

fn handle_add(ctx: &mut AppContext, text: Vec<String>, category: Option<String>) -> Result<()> {
    let category = match category {
        Some(c) => {
            let c = c.to_lowercase();
            if !ctx.config.is_known_category(&c) {
                return Err(JotError::Api(format!(
                    "Unknown category \"{}\" (configured: {})",
                    c,
                    ctx.config.categories.join(", ")
                )));
            }
            c
        }
        None => ctx.config.default_category.clone(),
    };

    let result = ctx.api.add(&text.join(" "), &category)?;
    print_messages(&result.messages);
    render_list(ctx)
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search(&term)?,
        None => ctx.api.list()?,
    };
    print_notes(&result.listed_notes, ctx.theme);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search(&term)?;
    print_notes(&result.listed_notes, ctx.theme);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, position: usize, text: Vec<String>) -> Result<()> {
    let result = ctx.api.edit(position, &text.join(" "))?;
    print_messages(&result.messages);
    render_list(ctx)
}

fn handle_delete(ctx: &mut AppContext, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.delete(&positions)?;
    print_messages(&result.messages);
    render_list(ctx)
}

fn handle_pin(ctx: &mut AppContext, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.pin(&positions)?;
    print_messages(&result.messages);
    render_list(ctx)
}

fn handle_unpin(ctx: &mut AppContext, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.unpin(&positions)?;
    print_messages(&result.messages);
    render_list(ctx)
}

fn handle_theme(ctx: &mut AppContext, mode: Option<String>) -> Result<()> {
    let result: CmdResult = match mode.as_deref() {
        None => {
            println!("Theme: {}", ctx.api.theme()?);
            return Ok(());
        }
        Some("toggle") => ctx.api.toggle_theme()?,
        Some(other) => {
            let theme: Theme = other
                .parse()
                .map_err(|_| JotError::Api(format!("Unknown theme mode: {}", other)))?;
            ctx.api.set_theme(theme)?
        }
    };
    ctx.theme = ctx.api.theme()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("default-category = {}", ctx.config.default_category);
            println!("categories = {}", ctx.config.categories.join(", "));
        }
        (Some("default-category"), None) => {
            println!("default-category = {}", ctx.config.default_category);
        }
        (Some("default-category"), Some(v)) => {
            ctx.config.set_default_category(&v)?;
            ctx.config.save(&ctx.data_dir)?;
            println!("default-category = {}", ctx.config.default_category);
        }
        (Some("categories"), None) => {
            println!("categories = {}", ctx.config.categories.join(", "));
        }
        (Some("categories"), Some(v)) => {
            ctx.config
                .set_categories(v.split(',').map(|s| s.to_string()).collect())?;
            ctx.config.save(&ctx.data_dir)?;
            println!("categories = {}", ctx.config.categories.join(", "));
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

/// Every mutation repaints the full list from the freshly persisted state.
fn render_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_notes(&result.listed_notes, ctx.theme);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const PIN_MARKER: &str = "⚑";
const FALLBACK_WIDTH: usize = 80;

fn print_notes(notes: &[DisplayNote], theme: Theme) {
    if notes.is_empty() {
        println!("No notes.");
        return;
    }

    let (_, cols) = Term::stdout().size();
    let line_width = if cols == 0 {
        FALLBACK_WIDTH
    } else {
        cols as usize
    };

    let mut last_was_pinned = false;
    for dn in notes {
        if last_was_pinned && !dn.note.pinned {
            println!();
        }
        last_was_pinned = dn.note.pinned;

        let idx_str = format!("{:>3}. ", dn.position);
        let marker = if dn.note.pinned {
            format!("{} ", PIN_MARKER)
        } else {
            "  ".to_string()
        };
        let label = format!("[{}] ", display_category(&dn.note.category));

        let fixed = idx_str.width() + marker.width() + label.width();
        let available = line_width.saturating_sub(fixed);
        let text = truncate_to_width(&dn.note.text, available);

        let idx_colored = if dn.note.pinned {
            idx_str.yellow()
        } else {
            idx_str.normal()
        };
        let (label_colored, text_colored) = match theme {
            Theme::Dark => (label.bright_cyan(), text.bright_white()),
            Theme::Light => (label.cyan(), text.normal()),
        };

        println!("{}{}{}{}", marker, idx_colored, label_colored, text_colored);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
