pub mod config;

pub use config::{
    ArenaConfig, DropConfig, GameConfig, LossConfig, PhysicsTuning, WindowConfig,
};
