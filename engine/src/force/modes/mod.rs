//! The eight force-mode configurations.

pub mod explosion;
pub mod implosion;
pub mod orbit;
pub mod pull;
pub mod push;
pub mod ring;
pub mod tornado;
pub mod vortex;

pub use explosion::{ExplosionModeBuilder, ExplosionModeConfig};
pub use implosion::{ImplosionModeBuilder, ImplosionModeConfig};
pub use orbit::{OrbitModeBuilder, OrbitModeConfig};
pub use pull::{PullModeBuilder, PullModeConfig};
pub use push::{PushModeBuilder, PushModeConfig};
pub use ring::{RingModeBuilder, RingModeConfig};
pub use tornado::{TornadoModeBuilder, TornadoModeConfig};
pub use vortex::{VortexModeBuilder, VortexModeConfig};
