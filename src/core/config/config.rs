use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::core::size_table::SizeSpec;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 960.0,
            title: "Ball Merger".into(),
        }
    }
}

/// Container geometry, in pixels. The arena is centered on the world origin.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
}
impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 960.0,
            wall_thickness: 64.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsTuning {
    pub gravity_y: f32,
    pub friction: f32,
    pub restitution: f32,
}
impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity_y: -981.0,
            friction: 0.006,
            restitution: 0.1,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DropConfig {
    /// Spawn height of dropped/preview balls, in pixels below the arena top.
    pub spawn_height: f32,
    /// Wall-clock delay between a drop and the next preview appearing.
    pub cooldown_secs: f32,
    /// The sequence generator draws uniformly from the first `easy_tiers`
    /// entries of the size table.
    pub easy_tiers: usize,
}
impl Default for DropConfig {
    fn default() -> Self {
        Self {
            spawn_height: 32.0,
            cooldown_secs: 0.5,
            easy_tiers: 4,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LossConfig {
    /// Loss line, in pixels below the arena top. A colliding ball sitting
    /// entirely above this line ends the run.
    pub height_from_top: f32,
    pub draw_line: bool,
}
impl Default for LossConfig {
    fn default() -> Self {
        Self {
            height_from_top: 160.0,
            draw_line: true,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub arena: ArenaConfig,
    pub physics: PhysicsTuning,
    pub drop: DropConfig,
    pub loss: LossConfig,
    pub rapier_debug: bool,
    pub tiers: Vec<SizeSpec>,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            arena: Default::default(),
            physics: Default::default(),
            drop: Default::default(),
            loss: Default::default(),
            rapier_debug: false,
            tiers: default_tiers(),
        }
    }
}

fn default_tiers() -> Vec<SizeSpec> {
    let radii = [
        26.0, 39.0, 54.0, 56.0, 76.0, 92.0, 96.0, 129.0, 154.0, 154.0, 204.0,
    ];
    radii
        .iter()
        .enumerate()
        .map(|(i, &radius)| SizeSpec {
            radius,
            asset: format!("sprites/circle{i}.png"),
        })
        .collect()
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let data =
            fs::read_to_string(path).map_err(|e| format!("read config {}: {e}", path.display()))?;
        ron::from_str(&data).map_err(|e| format!("parse config {}: {e}", path.display()))
    }

    /// World-space y of the ball spawn point.
    pub fn spawn_y(&self) -> f32 {
        self.arena.height * 0.5 - self.drop.spawn_height
    }

    /// World-space y of the loss line.
    pub fn loss_line_y(&self) -> f32 {
        self.arena.height * 0.5 - self.loss.height_from_top
    }

    /// Non-fatal sanity checks, logged as warnings at startup. Fatal size
    /// table problems are caught by `SizeTable::try_from_config` instead.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            w.push("arena dimensions must be > 0".into());
        }
        if self.arena.width > self.window.width || self.arena.height > self.window.height {
            w.push(format!(
                "arena {}x{} exceeds window {}x{}; container edges will be off-screen",
                self.arena.width, self.arena.height, self.window.width, self.window.height
            ));
        }
        if self.arena.wall_thickness <= 0.0 {
            w.push("arena.wall_thickness must be > 0; balls can escape the container".into());
        }
        if self.physics.gravity_y >= 0.0 {
            w.push(format!(
                "physics.gravity_y is {}; balls will not fall",
                self.physics.gravity_y
            ));
        }
        if !(0.0..=1.5).contains(&self.physics.restitution) {
            w.push(format!(
                "restitution {} outside recommended 0..1.5",
                self.physics.restitution
            ));
        }
        if self.physics.friction < 0.0 {
            w.push("physics.friction negative".into());
        }
        if self.drop.cooldown_secs <= 0.0 {
            w.push("drop.cooldown_secs <= 0; double-drop debounce disabled".into());
        } else if self.drop.cooldown_secs < 0.05 {
            w.push(format!(
                "drop.cooldown_secs {} very small; preview reappears almost instantly",
                self.drop.cooldown_secs
            ));
        }
        if self.loss.height_from_top <= 0.0 || self.loss.height_from_top >= self.arena.height {
            w.push(format!(
                "loss.height_from_top {} outside the arena; the run may never or always end",
                self.loss.height_from_top
            ));
        }
        if self.drop.spawn_height >= self.loss.height_from_top {
            w.push(format!(
                "drop.spawn_height {} at or below the loss line {}; drops start in the danger zone",
                self.drop.spawn_height, self.loss.height_from_top
            ));
        }
        w
    }
}
