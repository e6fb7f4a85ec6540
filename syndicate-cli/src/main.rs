use clap::Parser;
use std::sync::Arc;
use syndicate_advisor::{AdvisorConfig, GeminiNarrator, Narrator};
use syndicate_cli::{
    infrastructure::{CliError, LogConfig, Result},
    presentation::tui::{self, app::UserAction, App, AppEvent},
};
use syndicate_core::{GameRoster, MAX_NIGHTS};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "syndicate")]
#[command(
    version,
    about = "Syndicate - tactical roster management for Mafia moderators"
)]
struct Cli {
    /// Night cycles tracked at startup (1-10)
    #[arg(short = 'n', long, default_value_t = 2)]
    nights: usize,

    /// Pre-recruit a player (repeatable)
    #[arg(short = 'p', long = "player")]
    players: Vec<String>,

    /// Write logs to this file (stdout logging is off in TUI mode)
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.nights == 0 || cli.nights > MAX_NIGHTS {
        return Err(CliError::InvalidConfig(format!(
            "nights must be between 1 and {}",
            MAX_NIGHTS
        )));
    }

    let mut log_config = LogConfig::tui();
    if let Some(path) = cli.log_file.clone() {
        log_config = log_config.with_file_output(path);
    }
    log_config.init().map_err(CliError::Logging)?;

    let mut roster = GameRoster::with_nights(cli.nights);
    for name in &cli.players {
        roster.add_player(name);
    }

    tracing::info!(
        nights = cli.nights,
        players = cli.players.len(),
        "Starting session"
    );

    let narrator: Arc<dyn Narrator> = Arc::new(GeminiNarrator::new(AdvisorConfig::from_env()));

    let mut terminal = tui::setup_terminal()?;
    let mut app = App::new(roster);

    let result = run_app_loop(&mut terminal, &mut app, narrator).await;

    tui::restore_terminal(terminal)?;

    result
}

async fn run_app_loop(
    terminal: &mut tui::TuiTerminal,
    app: &mut App,
    narrator: Arc<dyn Narrator>,
) -> Result<()> {
    let (advisor_tx, mut advisor_rx) = mpsc::channel::<String>(8);

    loop {
        terminal.draw(|f| tui::ui::render(f, app))?;

        tokio::select! {
            Ok(app_event) = tui::event::read_events() => {
                match app_event {
                    AppEvent::Key(key) => {
                        match app.handle_key(key) {
                            Some(UserAction::Quit) => break,
                            Some(UserAction::Analyze) => {
                                spawn_analysis(app, &narrator, &advisor_tx);
                            }
                            None => {}
                        }
                    }
                    AppEvent::Tick => {}
                }
            }

            Some(text) = advisor_rx.recv() => {
                app.advisor_tab.set_text(text);
                app.log("Advisor responded".to_string());
            }
        }
    }

    Ok(())
}

/// Analysis runs detached so the TUI never blocks on the network.
/// Responses funnel through the channel; the latest one wins.
fn spawn_analysis(app: &mut App, narrator: &Arc<dyn Narrator>, tx: &mpsc::Sender<String>) {
    let snapshot = app.roster.snapshot();
    app.advisor_tab.set_pending();
    app.log("Advisor consulted".to_string());

    let narrator = Arc::clone(narrator);
    let tx = tx.clone();
    tokio::spawn(async move {
        let text = narrator.analyze(&snapshot).await;
        let _ = tx.send(text).await;
    });
}
