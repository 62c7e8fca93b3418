//! Cross-frontend primitives for presenting the game.
//!
//! Houses the snapshot store, the animated scene that tracks it, the HUD
//! view-model, and the diagnostic message log. Terminal and future graphical
//! clients draw from these types and differ only in how they paint them.
pub mod config;
pub mod event;
pub mod frontend;
pub mod hud;
pub mod message;
pub mod scene;
pub mod store;

pub use config::{BehaviorConfig, FrontendConfig, MessageConfig, ParticleConfig};
pub use event::{EventConsumer, EventImpact, SceneEventConsumer};
pub use frontend::Frontend;
pub use hud::{ActionButton, BattleStatus, HudView};
pub use scene::{ActorReconciler, FrameReport, ReconcileScope, Scene};
pub use store::StateStore;
