use bevy_ecs::prelude::Resource;
use tracing::trace;

/// Marker names recorded by button dispatch.
pub mod markers {
    pub const CLICK: &str = "button.on_click";
    pub const POINTER_DOWN: &str = "button.on_pointer_down";
    pub const POINTER_UP: &str = "button.on_pointer_up";
    pub const POINTER_ENTER: &str = "button.on_pointer_enter";
    pub const POINTER_EXIT: &str = "button.on_pointer_exit";
}

/// Resource collecting named telemetry markers emitted by widget dispatch.
///
/// Markers accumulate within a frame and are cleared at the end of it by
/// [`ButtonInteractionPlugin`], so consumers read them during the frame they
/// were emitted. Each marker is also mirrored as a `tracing` trace event so
/// external subscribers see them without polling this resource.
///
/// [`ButtonInteractionPlugin`]: crate::plugins::interaction::ButtonInteractionPlugin
#[derive(Resource, Debug, Default)]
pub struct UiProfiler {
    recorded: Vec<&'static str>,
}

impl UiProfiler {
    pub fn mark(&mut self, name: &'static str) {
        trace!(marker = name, "ui marker");
        self.recorded.push(name);
    }

    /// Markers recorded so far, in emission order.
    pub fn recorded(&self) -> &[&'static str] {
        &self.recorded
    }

    pub fn count(&self, name: &str) -> usize {
        self.recorded.iter().filter(|marker| **marker == name).count()
    }

    pub fn clear(&mut self) {
        self.recorded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_recorded_in_order() {
        let mut profiler = UiProfiler::default();
        profiler.mark(markers::POINTER_DOWN);
        profiler.mark(markers::POINTER_UP);
        profiler.mark(markers::CLICK);

        assert_eq!(
            profiler.recorded(),
            &[markers::POINTER_DOWN, markers::POINTER_UP, markers::CLICK]
        );
        assert_eq!(profiler.count(markers::CLICK), 1);

        profiler.clear();
        assert_eq!(profiler.count(markers::CLICK), 0);
    }
}
