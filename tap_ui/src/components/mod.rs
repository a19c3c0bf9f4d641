pub mod button;
pub mod selectable;
pub mod sink;

pub use button::{Button, DispatchOutcome, PushButton, SubmitFade};
pub use selectable::{Selectable, SelectionState, VisualStateHost};
pub use sink::{CallbackSink, ListenerId};

use bevy_ecs::prelude::Component;
use bevy_math::{Rect, Vec2};
use bevy_reflect::Reflect;
use bevy_transform::prelude::GlobalTransform;

/// Marker for the widget that receives submit (confirm key) activation.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
pub struct Focus;

/// Axis-aligned pick bounds around the entity origin, in local space.
#[derive(Component, Debug, Clone, Copy, Reflect)]
pub struct HitBox {
    pub half_size: Vec2,
}

impl Default for HitBox {
    fn default() -> Self {
        Self {
            half_size: Vec2::new(50.0, 50.0),
        }
    }
}

impl HitBox {
    pub fn new(half_size: Vec2) -> Self {
        Self { half_size }
    }

    /// Whether a world-space point falls inside these bounds.
    pub fn contains(&self, transform: &GlobalTransform, point: Vec2) -> bool {
        let local = transform
            .affine()
            .inverse()
            .transform_point3(point.extend(0.0))
            .truncate();
        Rect::from_center_half_size(Vec2::ZERO, self.half_size).contains(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_box_respects_the_entity_transform() {
        let hit_box = HitBox::new(Vec2::new(10.0, 10.0));
        let transform = GlobalTransform::from_xyz(100.0, 100.0, 0.0);

        assert!(hit_box.contains(&transform, Vec2::new(100.0, 100.0)));
        assert!(hit_box.contains(&transform, Vec2::new(109.0, 91.0)));
        assert!(!hit_box.contains(&transform, Vec2::new(100.0, 120.0)));
        assert!(!hit_box.contains(&transform, Vec2::new(0.0, 0.0)));
    }
}
