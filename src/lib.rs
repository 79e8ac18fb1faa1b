pub mod context;
pub mod locale;
mod matcher;
pub mod options;
pub mod pipeline;
pub mod slugen;
pub mod stage;
pub mod symbols;

pub use locale::{LOCALE_TABLE, supported_locales};
pub use options::Options;
pub use slugen::{Slugen, SlugenError, slugify};
pub use stage::{Stage, StageError};
pub use symbols::SYMBOL_TABLE;
