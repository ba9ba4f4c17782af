use std::time::Instant;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use ruler::app::App;
use ruler::cli::{parse_args, run_cli_command, CliCommand};
use ruler::config::AppConfig;
use ruler::logging::init_logging;
use ruler::terminal::{setup_panic_hook, TerminalManager};
use ruler::ui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let options = match parse_args(std::env::args())? {
        CliCommand::Run(options) => options,
        command => return run_cli_command(command).unwrap_or(Ok(())),
    };

    init_logging()?;

    let mut config = AppConfig::load(options.config_path.as_deref())?;
    options.apply(&mut config)?;
    config.validate()?;
    info!(?config, "starting ruler");

    let mut app = App::new(&config)?;

    setup_panic_hook();

    // Single-threaded: the App owns the ruler and all mutation happens on
    // this thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));
    manager.restore()?;

    result?;

    // Leave the picked value on stdout for scripts.
    println!("{}", app.readout().text);
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Frame timer. Skipped ticks are dropped so a burst of mouse events
    // cannot queue up animation frames.
    let mut frames = interval(app.frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }
        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                app.on_frame(now - last_frame);
                last_frame = now;
            }

            event = event_stream.next() => match event {
                Some(Ok(event)) => app.handle_event(event),
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            }
        }
    }
}
