use bevy_ecs::prelude::{Entity, Event};
use bevy_input::mouse::MouseButton;
use bevy_reflect::Reflect;

/// An input event delivered to a button widget.
///
/// Pointer variants carry the originating mouse button; everything but the
/// primary (left) button is ignored by dispatch. `Submit` is the non-pointer
/// activation path (confirm key on a focused widget) and carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    /// Pointer click (press and release over the same widget).
    Click(MouseButton),
    /// Pointer press began over the widget.
    Press(MouseButton),
    /// Pointer press ended.
    Release(MouseButton),
    /// Pointer entered the widget bounds.
    Enter(MouseButton),
    /// Pointer left the widget bounds.
    Exit(MouseButton),
    /// Non-pointer activation, e.g. the confirm key.
    Submit,
}

/// Sent whenever a button's click sink fired, from a pointer click or a
/// submit activation.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct ButtonClicked {
    pub entity: Entity,
}
