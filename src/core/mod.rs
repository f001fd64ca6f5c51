pub mod config;
pub mod constants;
pub mod game_manager;
pub mod game_session;
pub mod player;
pub mod reveal;
pub mod roles;
pub mod session;

pub use config::{AiTopic, GameConfig, WordSource};
pub use constants::*;
pub use game_manager::GameManager;
pub use game_session::{start_session, GamePhase, GameSession};
pub use player::{Player, SecretWord};
pub use reveal::{Advance, RevealAction, RevealCursor, RevealFlow, RevealStage};
pub use roles::{assign_roles, assign_roles_with_rng, Role};
pub use session::Session;
