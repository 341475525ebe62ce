//! `ForceMode` - one variant per force shape, dispatched by `match`.

use glam::Vec3;

use super::context::ForceContext;
use super::modes::{
    ExplosionModeConfig, ImplosionModeConfig, OrbitModeConfig, PullModeConfig, PushModeConfig,
    RingModeConfig, TornadoModeConfig, VortexModeConfig,
};
use crate::config::json::normalize_ident;

/// Which shape a force field has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForceModeKind {
    Pull,
    Push,
    Vortex,
    Orbit,
    Tornado,
    Ring,
    Implosion,
    Explosion,
}

impl ForceModeKind {
    pub const ALL: [ForceModeKind; 8] = [
        ForceModeKind::Pull,
        ForceModeKind::Push,
        ForceModeKind::Vortex,
        ForceModeKind::Orbit,
        ForceModeKind::Tornado,
        ForceModeKind::Ring,
        ForceModeKind::Implosion,
        ForceModeKind::Explosion,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        match normalize_ident(id).as_str() {
            "pull" => Some(ForceModeKind::Pull),
            "push" => Some(ForceModeKind::Push),
            "vortex" => Some(ForceModeKind::Vortex),
            "orbit" => Some(ForceModeKind::Orbit),
            "tornado" => Some(ForceModeKind::Tornado),
            "ring" => Some(ForceModeKind::Ring),
            "implosion" => Some(ForceModeKind::Implosion),
            "explosion" => Some(ForceModeKind::Explosion),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ForceModeKind::Pull => "pull",
            ForceModeKind::Push => "push",
            ForceModeKind::Vortex => "vortex",
            ForceModeKind::Orbit => "orbit",
            ForceModeKind::Tornado => "tornado",
            ForceModeKind::Ring => "ring",
            ForceModeKind::Implosion => "implosion",
            ForceModeKind::Explosion => "explosion",
        }
    }

    /// Default configuration for this kind.
    pub fn default_mode(self) -> ForceMode {
        match self {
            ForceModeKind::Pull => ForceMode::Pull(PullModeConfig::default()),
            ForceModeKind::Push => ForceMode::Push(PushModeConfig::default()),
            ForceModeKind::Vortex => ForceMode::Vortex(VortexModeConfig::default()),
            ForceModeKind::Orbit => ForceMode::Orbit(OrbitModeConfig::default()),
            ForceModeKind::Tornado => ForceMode::Tornado(TornadoModeConfig::default()),
            ForceModeKind::Ring => ForceMode::Ring(RingModeConfig::default()),
            ForceModeKind::Implosion => ForceMode::Implosion(ImplosionModeConfig::default()),
            ForceModeKind::Explosion => ForceMode::Explosion(ExplosionModeConfig::default()),
        }
    }
}

/// A validated force-mode configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceMode {
    Pull(PullModeConfig),
    Push(PushModeConfig),
    Vortex(VortexModeConfig),
    Orbit(OrbitModeConfig),
    Tornado(TornadoModeConfig),
    Ring(RingModeConfig),
    Implosion(ImplosionModeConfig),
    Explosion(ExplosionModeConfig),
}

impl ForceMode {
    pub fn kind(&self) -> ForceModeKind {
        match self {
            ForceMode::Pull(_) => ForceModeKind::Pull,
            ForceMode::Push(_) => ForceModeKind::Push,
            ForceMode::Vortex(_) => ForceModeKind::Vortex,
            ForceMode::Orbit(_) => ForceModeKind::Orbit,
            ForceMode::Tornado(_) => ForceModeKind::Tornado,
            ForceMode::Ring(_) => ForceModeKind::Ring,
            ForceMode::Implosion(_) => ForceModeKind::Implosion,
            ForceMode::Explosion(_) => ForceModeKind::Explosion,
        }
    }

    /// Distance at and beyond which `strength_at` is always zero.
    pub fn effective_radius(&self) -> f32 {
        match self {
            ForceMode::Pull(c) => c.radius(),
            ForceMode::Push(c) => c.radius(),
            ForceMode::Vortex(c) => c.radius(),
            ForceMode::Orbit(c) => c.effective_radius(),
            ForceMode::Tornado(c) => c.radius_at_height(0.0),
            ForceMode::Ring(c) => c.influence_radius(),
            ForceMode::Implosion(c) => c.suction_radius(),
            ForceMode::Explosion(c) => c.blast_radius(),
        }
    }

    /// Scalar strength at `distance` from the field center.
    pub fn strength_at(&self, distance: f32) -> f32 {
        match self {
            ForceMode::Pull(c) => c.strength_at(distance),
            ForceMode::Push(c) => c.strength_at(distance),
            ForceMode::Vortex(c) => c.strength_at(distance),
            ForceMode::Orbit(c) => c.strength_at(distance),
            ForceMode::Tornado(c) => c.strength_at(distance),
            ForceMode::Ring(c) => c.strength_at(distance),
            ForceMode::Implosion(c) => c.strength_at(distance),
            ForceMode::Explosion(c) => c.strength_at(distance),
        }
    }

    /// Force vector for one entity this tick. Applying it is up to the caller.
    pub fn force_at(&self, ctx: &ForceContext) -> Vec3 {
        match self {
            ForceMode::Pull(c) => c.force_at(ctx),
            ForceMode::Push(c) => c.force_at(ctx),
            ForceMode::Vortex(c) => c.force_at(ctx),
            ForceMode::Orbit(c) => c.force_at(ctx),
            ForceMode::Tornado(c) => c.force_at(ctx),
            ForceMode::Ring(c) => c.force_at(ctx),
            ForceMode::Implosion(c) => c.force_at(ctx),
            ForceMode::Explosion(c) => c.force_at(ctx),
        }
    }

    /// Unit direction of `force_at`, zero where there is no force.
    pub fn direction_at(&self, ctx: &ForceContext) -> Vec3 {
        self.force_at(ctx).normalize_or_zero()
    }
}

impl Default for ForceMode {
    fn default() -> Self {
        ForceMode::Pull(PullModeConfig::default())
    }
}

macro_rules! impl_from_config {
    ($($variant:ident => $config:ty),* $(,)?) => {
        $(
            impl From<$config> for ForceMode {
                fn from(config: $config) -> Self {
                    ForceMode::$variant(config)
                }
            }
        )*
    };
}

impl_from_config! {
    Pull => PullModeConfig,
    Push => PushModeConfig,
    Vortex => VortexModeConfig,
    Orbit => OrbitModeConfig,
    Tornado => TornadoModeConfig,
    Ring => RingModeConfig,
    Implosion => ImplosionModeConfig,
    Explosion => ExplosionModeConfig,
}
