use bevy::prelude::*;

use crate::app::overlay::OverlayPlugin;
use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::gameplay::drop::DropPlugin;
use crate::gameplay::loss::LossPlugin;
use crate::gameplay::merge::MergePlugin;
use crate::physics::arena::ArenaPlugin;
use crate::rendering::camera::CameraPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .configure_sets(
                Update,
                (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
            )
            .add_plugins((
                CameraPlugin,
                ArenaPlugin,
                DropPlugin,
                MergePlugin,
                LossPlugin,
                OverlayPlugin,
            ))
            .add_systems(Startup, log_config_warnings);
    }
}

fn log_config_warnings(cfg: Res<GameConfig>) {
    for warning in cfg.validate() {
        warn!(target: "config", "{warning}");
    }
}
