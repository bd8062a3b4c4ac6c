mod api;
mod app;
mod channel;
mod config;
mod constants;
mod debounce;
mod filter;
mod input;
mod logo;
mod page;
mod player;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use ratatui::{
  DefaultTerminal,
  crossterm::event::{self, Event, KeyEventKind},
};
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use api::Api;
use app::App;
use config::Config;
use constants::constants;

// --- CLI ---

#[derive(Parser, Debug)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Args {
  /// Base URL of the channel catalog backend (overrides the saved preference)
  #[arg(short, long)]
  api_base: Option<String>,

  /// Log filter directives, e.g. 'debug' or 'telly=trace' (overrides RUST_LOG)
  #[arg(short, long)]
  log_filter: Option<String>,
}

// --- Logging ---

/// Log to a file under the platform data dir; stdout belongs to the TUI.
/// Returns the guard that flushes buffered log lines on drop.
fn init_tracing(filter: Option<&str>) -> Option<tracing_appender::non_blocking::WorkerGuard> {
  let proj_dirs = ProjectDirs::from("", "", "telly")?;
  let log_dir = proj_dirs.data_dir().join("logs");
  std::fs::create_dir_all(&log_dir).ok()?;

  let appender = tracing_appender::rolling::daily(log_dir, "telly.log");
  let (writer, guard) = tracing_appender::non_blocking(appender);
  let env_filter = match filter {
    Some(directives) => EnvFilter::new(directives),
    None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
  };
  let file_layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);

  tracing_subscriber::registry().with(env_filter).with(file_layer).init();
  Some(guard)
}

// --- Main ---

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  let _log_guard = init_tracing(args.log_filter.as_deref());

  let default_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    ratatui::restore();
    default_hook(info);
  }));

  let mut terminal = ratatui::init();
  let result = run(&mut terminal, args).await;
  ratatui::restore();
  result
}

async fn run(terminal: &mut DefaultTerminal, args: Args) -> Result<()> {
  let base = args
    .api_base
    .or_else(|| Config::load().api_base)
    .unwrap_or_else(|| constants().default_api_base.clone());
  let client = reqwest::Client::builder()
    .connect_timeout(Duration::from_secs(10))
    .build()
    .context("failed to build HTTP client")?;

  let mut app = App::new(Api::new(client, &base));
  app.trigger_init();

  loop {
    app.check_pending();
    app.player.pump();
    app.tick();

    terminal.draw(|frame| ui::ui(frame, &mut app))?;

    if event::poll(Duration::from_millis(100))? {
      match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
          input::handle_key_event(&mut app, key);
        }
        _ => {}
      }
    }

    if app.should_quit {
      break;
    }
  }

  app.player.close();
  Ok(())
}
