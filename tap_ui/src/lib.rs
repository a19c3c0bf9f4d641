//! Clickable button widgets for Bevy ECS, with one callback sink per pointer
//! event kind (click, press-down, press-up, enter, exit) and keyboard submit
//! activation with a timed pressed flash.

pub mod components;
pub mod diagnostics;
pub mod events;
pub mod plugins;
pub mod theme;

// Re-export commonly used types and components
pub use components::{
    Button, CallbackSink, DispatchOutcome, Focus, HitBox, ListenerId, PushButton, Selectable,
    SelectionState, SubmitFade, VisualStateHost,
};
pub use diagnostics::UiProfiler;
pub use events::{ButtonClicked, PointerInput};
pub use plugins::{ButtonInteractionPlugin, ButtonSet};
pub use theme::{ButtonTheme, ColorBlock, ColorDef, ThemeError};
