pub use crate::error::EntityError;
pub use crate::faction::Faction;
pub use crate::level::Level;
pub use crate::release::Release;
pub use crate::snapshot::{DataSource, Snapshot};
pub use crate::stat::{Stat, StatKind};
pub use crate::trainer::Trainer;
