use bevy_ecs::prelude::Component;
use bevy_reflect::Reflect;
use tracing::trace;

use crate::theme::ColorBlock;

/// The visual state a selectable widget can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum SelectionState {
    #[default]
    Normal,
    Pressed,
    Disabled,
}

/// Capability interface for the component that owns a widget's selection
/// state, activity flags, and visual transitions.
///
/// Button dispatch only talks to this trait, so tests can substitute their
/// own host and the widget stays decoupled from any concrete state machine.
pub trait VisualStateHost {
    fn is_active(&self) -> bool;
    fn is_interactable(&self) -> bool;
    /// The state the host would show given its current flags.
    fn current_state(&self) -> SelectionState;
    /// Cross-fade duration in unscaled seconds.
    fn fade_duration(&self) -> f32;
    /// Show `state`, either instantly or animated over the fade duration.
    fn transition_to(&mut self, state: SelectionState, instant: bool);
    /// Press-down visual transition.
    fn begin_press(&mut self);
    /// Press-up visual transition.
    fn end_press(&mut self);
}

/// Concrete visual-state host: tracks activity, interactability, and the
/// currently shown selection state.
///
/// Rendering the shown state (tinting with the [`ColorBlock`] colors) is the
/// renderer's job; this component only records it.
#[derive(Component, Debug, Clone, Reflect)]
pub struct Selectable {
    pub active: bool,
    pub interactable: bool,
    pub colors: ColorBlock,
    pointer_down: bool,
    shown: SelectionState,
}

impl Default for Selectable {
    fn default() -> Self {
        Self::new(ColorBlock::default())
    }
}

impl Selectable {
    pub fn new(colors: ColorBlock) -> Self {
        Self {
            active: true,
            interactable: true,
            colors,
            pointer_down: false,
            shown: SelectionState::Normal,
        }
    }

    /// The state implied by the current flags, regardless of what is shown.
    pub fn computed_state(&self) -> SelectionState {
        if !self.interactable {
            SelectionState::Disabled
        } else if self.pointer_down {
            SelectionState::Pressed
        } else {
            SelectionState::Normal
        }
    }

    /// The state currently presented to the renderer.
    pub fn shown_state(&self) -> SelectionState {
        self.shown
    }
}

impl VisualStateHost for Selectable {
    fn is_active(&self) -> bool {
        self.active
    }

    fn is_interactable(&self) -> bool {
        self.interactable
    }

    fn current_state(&self) -> SelectionState {
        self.computed_state()
    }

    fn fade_duration(&self) -> f32 {
        self.colors.fade_duration
    }

    fn transition_to(&mut self, state: SelectionState, instant: bool) {
        trace!(?state, instant, "selection state transition");
        self.shown = state;
    }

    fn begin_press(&mut self) {
        self.pointer_down = true;
        let state = self.computed_state();
        self.transition_to(state, false);
    }

    fn end_press(&mut self) {
        self.pointer_down = false;
        let state = self.computed_state();
        self.transition_to(state, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computed_state_prefers_disabled_over_pressed() {
        let mut selectable = Selectable::default();
        assert_eq!(selectable.computed_state(), SelectionState::Normal);

        selectable.begin_press();
        assert_eq!(selectable.computed_state(), SelectionState::Pressed);

        selectable.interactable = false;
        assert_eq!(selectable.computed_state(), SelectionState::Disabled);
    }

    #[test]
    fn press_transitions_update_shown_state() {
        let mut selectable = Selectable::default();
        assert_eq!(selectable.shown_state(), SelectionState::Normal);

        selectable.begin_press();
        assert_eq!(selectable.shown_state(), SelectionState::Pressed);

        selectable.end_press();
        assert_eq!(selectable.shown_state(), SelectionState::Normal);
    }

    #[test]
    fn fade_duration_comes_from_the_color_block() {
        let mut colors = ColorBlock::default();
        colors.fade_duration = 0.5;
        let selectable = Selectable::new(colors);
        assert_eq!(selectable.fade_duration(), 0.5);
    }
}
