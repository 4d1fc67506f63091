mod cli;
mod config;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::App;

fn main() -> Result<()> {
    let app = App::parse();

    tracing_subscriber::fmt()
        .with_max_level(app.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = config::Settings::load(&app.overrides())?;
    app.cmd.run(&settings)
}
