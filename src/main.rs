use anyhow::Result;

use tilde::config::ConfigManager;
use tilde::terminal::{self, Terminal};
use tilde::{logging, App};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // `run` has dropped the terminal guard by the time it returns, so raw
    // mode is already off here
    if let Err(e) = run().await {
        terminal::die(&e);
    }
}

async fn run() -> Result<()> {
    // Get command line arguments
    let path = std::env::args().nth(1);

    let mut config_manager = ConfigManager::for_user();
    config_manager.load()?;
    let config_path = config_manager.config_path().to_path_buf();
    let config = config_manager.into_config();
    if let Some(log_file) = logging::init(&config.log)? {
        tracing::info!(log = %log_file.display(), config = %config_path.display(), "starting");
    }

    let mut terminal = Terminal::enable_raw_mode(config.terminal.read_timeout_deciseconds)?;
    let (rows, cols) = terminal.window_size()?;

    let mut app = match path {
        Some(path) => App::with_file(config, rows, cols, path).await?,
        None => App::new(config, rows, cols),
    };

    app.run(&mut terminal).await
}
