use bevy_app::{App, Update};
use bevy_ecs::prelude::*;
use bevy_input::keyboard::KeyCode;
use bevy_input::mouse::{MouseButton, MouseButtonInput};
use bevy_input::{ButtonInput, ButtonState};
use bevy_log::{info, LogPlugin};
use bevy_math::{DVec2, Vec2};
use bevy_time::TimePlugin;
use bevy_transform::prelude::GlobalTransform;
use bevy_window::{PrimaryWindow, Window};

use tap_ui::{Button, ButtonInteractionPlugin, Focus, HitBox, Selectable, SubmitFade, UiProfiler};

// Headless demo: drives the button systems with synthetic input instead of a
// real window, and logs what fires.
fn main() {
    let mut app = App::new();
    app.add_plugins((LogPlugin::default(), TimePlugin))
        .add_plugins(ButtonInteractionPlugin::default())
        // Markers only live until the end of the frame, so read them in-frame.
        .add_systems(Update, log_markers.after(tap_ui::ButtonSet::Fade));

    // A fake primary window with the cursor parked over the button.
    let window_entity = {
        let mut window = Window::default();
        let height = window.height() as f64;
        window.set_physical_cursor_position(Some(DVec2::new(100.0, height - 100.0)));
        app.world_mut().spawn((window, PrimaryWindow)).id()
    };

    let mut button = Button::new();
    button.on_pointer_enter.add(|| info!("pointer entered the button"));
    button.on_pointer_exit.add(|| info!("pointer left the button"));
    button.on_pointer_down.add(|| info!("button pressed"));
    button.on_pointer_up.add(|| info!("button released"));
    button.on_click.add(|| info!("button clicked!"));

    let button_entity = app
        .world_mut()
        .spawn((
            button,
            Selectable::default(),
            HitBox::new(Vec2::new(60.0, 25.0)),
            GlobalTransform::from_xyz(100.0, 100.0, 0.0),
            Focus,
        ))
        .id();

    // Frame 1: the parked cursor synthesizes a pointer-enter.
    app.update();

    // Frames 2-3: a full primary press and release, ending in a click.
    app.world_mut().send_event(MouseButtonInput {
        button: MouseButton::Left,
        state: ButtonState::Pressed,
        window: window_entity,
    });
    app.update();
    app.world_mut().send_event(MouseButtonInput {
        button: MouseButton::Left,
        state: ButtonState::Released,
        window: window_entity,
    });
    app.update();

    // Keyboard submit: clicks again and flashes the pressed state.
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Enter);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();

    // Let the fade run out (default duration is 0.1s of real time).
    while app.world().get::<SubmitFade>(button_entity).is_some() {
        std::thread::sleep(std::time::Duration::from_millis(20));
        app.update();
    }

    let shown = app
        .world()
        .get::<Selectable>(button_entity)
        .expect("button keeps its selectable")
        .shown_state();
    info!("fade finished, button settled in {:?} state", shown);
}

fn log_markers(profiler: Res<UiProfiler>) {
    if !profiler.recorded().is_empty() {
        info!("markers this frame: {:?}", profiler.recorded());
    }
}
