pub mod interaction;

pub use interaction::{ButtonInteractionPlugin, ButtonSet};
