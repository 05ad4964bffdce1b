use anyhow::Result;
use bevy::prelude::*;
use clap::Parser;

use ball_merger::core::config::GameConfig;
use ball_merger::core::size_table::SizeTable;
use ball_merger::GamePlugin;

#[derive(Parser, Debug)]
#[command(about = "Drop-and-merge ball game", version)]
struct Args {
    /// Path to the RON game configuration.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = GameConfig::load_from_file(&args.config).map_err(anyhow::Error::msg)?;
    let table = SizeTable::try_from_config(&cfg).map_err(anyhow::Error::msg)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg)
        .insert_resource(table)
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
