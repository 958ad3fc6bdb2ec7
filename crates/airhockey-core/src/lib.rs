pub mod config;
pub mod geometry;
pub mod physics;

// Re-exports
pub use config::{ConfigError, GameConfig};
pub use geometry::{Circle, Cuboid, Cylinder, Plane, Ray, Sphere};
pub use physics::{MalletState, Player, PuckState, TableBounds, strike_puck};

// Re-export glam for consistent version usage
pub use glam;
