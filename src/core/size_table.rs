use bevy::prelude::*;
use serde::Deserialize;

use crate::core::config::GameConfig;

/// One entry of the ordered size catalog. The tier index is the position in
/// the table; merging two tier-`i` balls produces one tier-`i+1` ball.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SizeSpec {
    pub radius: f32,
    pub asset: String,
}

/// Validated, immutable tier catalog built from config at startup.
#[derive(Resource, Debug, Clone)]
pub struct SizeTable(Vec<SizeSpec>);

impl SizeTable {
    /// Validates the catalog shape. Malformed tables are a startup-fatal
    /// config error, not a recoverable runtime condition.
    pub fn new(specs: Vec<SizeSpec>) -> Result<Self, String> {
        if specs.is_empty() {
            return Err("size table is empty".into());
        }
        for (i, spec) in specs.iter().enumerate() {
            if spec.radius <= 0.0 {
                return Err(format!("tier {i}: radius {} must be > 0", spec.radius));
            }
            if spec.asset.trim().is_empty() {
                return Err(format!("tier {i}: missing asset path"));
            }
            if i > 0 && spec.radius < specs[i - 1].radius {
                return Err(format!(
                    "tier {i}: radius {} shrinks below tier {} ({}); radii must not decrease",
                    spec.radius,
                    i - 1,
                    specs[i - 1].radius
                ));
            }
        }
        Ok(Self(specs))
    }

    pub fn try_from_config(cfg: &GameConfig) -> Result<Self, String> {
        let table = Self::new(cfg.tiers.clone())?;
        let k = cfg.drop.easy_tiers;
        if k == 0 || k > table.len() {
            return Err(format!(
                "drop.easy_tiers {k} outside 1..={}",
                table.len()
            ));
        }
        Ok(table)
    }

    /// Panics on an out-of-range tier; callers only pass indices obtained
    /// from this table or the sequence generator.
    pub fn spec(&self, tier: usize) -> &SizeSpec {
        &self.0[tier]
    }

    pub fn radius(&self, tier: usize) -> f32 {
        self.0[tier].radius
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SizeSpec> {
        self.0.iter()
    }

    /// The tier produced by fusing two `tier` balls, or `None` at the top of
    /// the table (top-tier pairs do not merge).
    pub fn next_tier(&self, tier: usize) -> Option<usize> {
        let next = tier + 1;
        (next < self.0.len()).then_some(next)
    }
}
