use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{ApiEvent, ApiOutcome, AppEvent, CatalogCommand, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::router::Route;
use anyhow::Context;
use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(250);
const COMMAND_QUEUE_DEPTH: usize = 16;

/// Restores the terminal exactly once, from drop or from a panic,
/// whichever fires first.
struct TerminalGuard {
    restored: Arc<AtomicBool>,
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

impl TerminalGuard {
    fn install() -> Self {
        let restored = Arc::new(AtomicBool::new(false));
        let hook_flag = Arc::clone(&restored);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if !hook_flag.swap(true, Ordering::SeqCst) {
                restore_terminal();
            }
            default_hook(info);
        }));
        Self { restored }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored.swap(true, Ordering::SeqCst) {
            restore_terminal();
        }
    }
}

fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok((terminal, TerminalGuard::install()))
}

/// Runs the UI until the user quits. Catalog requests are executed on a
/// small tokio runtime so the draw loop never blocks on the network.
pub fn run(config: Config, initial_route: Route) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("stockroom-catalog")
        .build()
        .context("Failed to build catalog runtime")?;

    let client = CatalogClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.connect_timeout_seconds),
    );

    let events = EventHandler::new(TICK_RATE);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let worker = runtime.spawn(run_catalog_worker(client, command_rx, events.sender()));

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new();
    app.set_command_sender(command_tx);
    app.open(initial_route);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // ratatui re-measures the frame on every draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Api(event)) => app.on_api(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    worker.abort();
    runtime.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}

/// Executes catalog commands one at a time and reports every outcome back
/// to the event loop tagged with the generation it was issued under.
async fn run_catalog_worker(
    client: CatalogClient,
    mut commands: mpsc::Receiver<CatalogCommand>,
    events: std::sync::mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let generation = command.generation();
        let op = command.op();
        tracing::debug!(op, generation, "catalog request");
        let outcome = match command {
            CatalogCommand::List { .. } => ApiOutcome::Listed(client.list().await),
            CatalogCommand::Get { id, .. } => ApiOutcome::Fetched(client.get(id).await),
            CatalogCommand::Create { draft, .. } => {
                ApiOutcome::Created(client.create(&draft).await)
            }
            CatalogCommand::Update { id, draft, .. } => {
                ApiOutcome::Updated(client.update(id, &draft).await)
            }
            CatalogCommand::Remove { id, .. } => ApiOutcome::Removed(client.remove(id).await),
        };
        tracing::debug!(op, generation, ok = outcome.is_ok(), "catalog response");
        if events
            .send(AppEvent::Api(ApiEvent { generation, outcome }))
            .is_err()
        {
            break;
        }
    }
    tracing::debug!("catalog worker stopped");
}
