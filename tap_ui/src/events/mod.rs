pub mod pointer_events;

pub use pointer_events::{ButtonClicked, PointerInput};
