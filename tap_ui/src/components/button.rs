use bevy_ecs::prelude::Component;
use bevy_input::mouse::MouseButton;
use bevy_reflect::Reflect;

use crate::components::selectable::{SelectionState, VisualStateHost};
use crate::components::sink::CallbackSink;
use crate::components::HitBox;
use crate::components::Selectable;
use crate::diagnostics::{markers, UiProfiler};
use crate::events::PointerInput;

/// A clickable widget with one callback sink per pointer event kind.
///
/// Sinks start empty; listeners are registered through each sink's
/// `add`/`remove` surface. Input reaches the widget through [`dispatch`],
/// normally fed by [`pointer_input_system`] and [`submit_system`].
///
/// [`dispatch`]: Button::dispatch
/// [`pointer_input_system`]: crate::plugins::interaction::pointer_input_system
/// [`submit_system`]: crate::plugins::interaction::submit_system
#[derive(Component, Debug, Default)]
#[require(Selectable, HitBox)]
pub struct Button {
    pub on_click: CallbackSink,
    pub on_pointer_down: CallbackSink,
    pub on_pointer_up: CallbackSink,
    pub on_pointer_enter: CallbackSink,
    pub on_pointer_exit: CallbackSink,
}

/// Named alias of [`Button`] adding no state or behavior. Kept so layouts and
/// tooling can refer to the widget by a distinct name.
pub type PushButton = Button;

/// What a single [`Button::dispatch`] call did, for the ECS layer to act on.
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    /// The click sink was invoked.
    pub clicked: bool,
    /// A submit activation wants this fade timer attached to the widget.
    pub start_fade: Option<SubmitFade>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    fn can_fire(host: &impl VisualStateHost) -> bool {
        host.is_active() && host.is_interactable()
    }

    /// Feed one input event through the widget.
    ///
    /// Gated steps (marker emission and sink invocation) only run while the
    /// host is active and interactable; the gate is re-evaluated on every
    /// call. Base visual transitions on press/release/enter/exit run
    /// regardless of the gate. Non-primary pointer events are complete
    /// no-ops.
    pub fn dispatch(
        &mut self,
        host: &mut impl VisualStateHost,
        profiler: &mut UiProfiler,
        input: PointerInput,
    ) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        match input {
            PointerInput::Click(button) => {
                if button != MouseButton::Left {
                    return outcome;
                }
                if Self::can_fire(host) {
                    profiler.mark(markers::CLICK);
                    self.on_click.invoke();
                    outcome.clicked = true;
                }
            }
            PointerInput::Press(button) => {
                if button != MouseButton::Left {
                    return outcome;
                }
                host.begin_press();
                if Self::can_fire(host) {
                    profiler.mark(markers::POINTER_DOWN);
                    self.on_pointer_down.invoke();
                }
            }
            PointerInput::Release(button) => {
                if button != MouseButton::Left {
                    return outcome;
                }
                host.end_press();
                if Self::can_fire(host) {
                    profiler.mark(markers::POINTER_UP);
                    self.on_pointer_up.invoke();
                }
            }
            PointerInput::Enter(button) => {
                if button != MouseButton::Left {
                    return outcome;
                }
                // Upstream runs the press-up transition here instead of an
                // enter-specific one. Kept as observed; see the quirk tests.
                host.end_press();
                if Self::can_fire(host) {
                    profiler.mark(markers::POINTER_ENTER);
                    self.on_pointer_enter.invoke();
                }
            }
            PointerInput::Exit(button) => {
                if button != MouseButton::Left {
                    return outcome;
                }
                // Same press-up transition as Enter.
                host.end_press();
                if Self::can_fire(host) {
                    profiler.mark(markers::POINTER_EXIT);
                    self.on_pointer_exit.invoke();
                }
            }
            PointerInput::Submit => {
                // Submit fires the click sink without consulting the gate.
                profiler.mark(markers::CLICK);
                self.on_click.invoke();
                outcome.clicked = true;

                // A listener may have disabled the widget, so the gate is
                // checked only now, before the pressed flash starts.
                if Self::can_fire(host) {
                    host.transition_to(SelectionState::Pressed, false);
                    outcome.start_fade = Some(SubmitFade::new(host.fade_duration()));
                }
            }
        }
        outcome
    }
}

/// One-shot timer restoring a widget's visual state after a submit-triggered
/// pressed flash.
///
/// Ticked once per frame with unscaled elapsed seconds; completes the first
/// tick on which accumulated time reaches the duration. Interactability is
/// not re-checked while waiting. Dropping the component cancels the revert.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
pub struct SubmitFade {
    duration: f32,
    elapsed: f32,
}

impl SubmitFade {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    /// Accumulate `unscaled_delta` seconds. Returns `true` once the fade
    /// duration has elapsed and the revert transition should run.
    pub fn tick(&mut self, unscaled_delta: f32) -> bool {
        self.elapsed += unscaled_delta;
        self.elapsed >= self.duration
    }
}
