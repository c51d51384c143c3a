mod app;
mod cache;
mod dump;
mod render;
mod ui;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use coursebook_config::Config;
use coursebook_engine::{Catalog, io};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{Stdout, stdout},
    path::{Path, PathBuf},
};

use app::{App, Control};
use dump::DumpFormat;

#[derive(Parser)]
#[command(name = "coursebook")]
#[command(author, version)]
#[command(about = "Terminal viewer for markdown course lessons")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Args)]
struct ViewArgs {
    /// Directory containing catalog.toml (defaults to the config file's content_path)
    content_dir: Option<PathBuf>,

    /// Course to open first
    #[arg(long)]
    course: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print one lesson to stdout
    Dump {
        /// Directory containing catalog.toml
        content_dir: PathBuf,

        /// Course id
        #[arg(long)]
        course: String,

        /// Lesson id within the course
        #[arg(long)]
        lesson: u32,

        #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
        format: DumpFormat,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Dump {
            content_dir,
            course,
            lesson,
            format,
        }) => {
            let catalog = load(&content_dir, None)?;
            dump::dump_lesson(&catalog, &course, lesson, format, &mut stdout().lock())
        }
        None => view(cli.view),
    }
}

fn view(args: ViewArgs) -> Result<()> {
    // Determine content path from CLI args or config file
    let (content_dir, config_path, default_course) = match args.content_dir {
        Some(dir) => (dir, None, None),
        None => {
            let config_path = Config::config_path();
            let config = Config::load()
                .with_context(|| format!("Failed to load config file {}", config_path.display()))?
                .with_context(|| {
                    format!(
                        "No content directory given and no config file found at {}",
                        config_path.display()
                    )
                })?;
            (config.content_path, Some(config_path), config.default_course)
        }
    };
    let course = args.course.or(default_course);

    let catalog = load(&content_dir, config_path)?;
    let mut app = App::new(catalog, course.as_deref())?;

    let mut terminal = enter_terminal()?;
    let res = run_app(&mut terminal, &mut app);
    let restored = restore_terminal().and(terminal.show_cursor().map_err(anyhow::Error::from));

    log::debug!("Parsed {} lessons this session", app.parses());
    prefer_session_error(res, restored)
}

/// Raw mode plus the alternate screen. Undone again if any later step fails.
fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let entered = (|| -> Result<_> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    })();
    if entered.is_err()
        && let Err(e) = restore_terminal()
    {
        log::warn!("Failed to restore terminal: {e:#}");
    }
    entered
}

/// Leaves raw mode and the alternate screen, attempting both even if the
/// first fails.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let mut stdout = stdout();
    let screen = execute!(stdout, LeaveAlternateScreen);
    raw?;
    screen?;
    Ok(())
}

/// An error from the session itself wins over a failure to restore the
/// terminal; the latter is then only logged.
fn prefer_session_error(session: Result<()>, restored: Result<()>) -> Result<()> {
    match (session, restored) {
        (Err(e), Err(restore)) => {
            log::warn!("Failed to restore terminal: {restore:#}");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

/// Load and validate the catalog, naming the config file in errors when the
/// directory came from it.
fn load(content_dir: &Path, config_path: Option<PathBuf>) -> Result<Catalog> {
    let source = match config_path {
        Some(path) => format!(" from config file '{}'", path.display()),
        None => String::new(),
    };
    io::load_catalog(content_dir).with_context(|| {
        format!(
            "Content directory '{}'{source} could not be loaded",
            content_dir.display()
        )
    })
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}
