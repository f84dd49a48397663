pub mod agent;
pub mod clock;
pub mod content;
pub mod dice;
pub mod difficulty;
pub mod extension;
pub mod game;
pub mod journal;
pub mod occupancy;
pub mod progress;
pub mod replay;
pub mod roster;
pub mod state;
pub mod types;

pub use content::ContentTimings;
pub use difficulty::NightConfig;
pub use extension::{ExtensionContext, NightExtension};
pub use game::{AdvanceResult, AgentView, Game, Snapshot};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use progress::Progress;
pub use replay::*;
pub use types::*;
