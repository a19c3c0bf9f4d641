use bevy_app::{App, Last, Plugin, Startup, Update};
use bevy_ecs::entity::EntityHashSet;
use bevy_ecs::prelude::*;
use bevy_input::keyboard::KeyCode;
use bevy_input::mouse::{MouseButton, MouseButtonInput};
use bevy_input::{ButtonInput, ButtonState};
use bevy_log::{error, info, warn};
use bevy_math::Vec2;
use bevy_time::{Real, Time};
use bevy_transform::prelude::GlobalTransform;
use bevy_window::{PrimaryWindow, Window};
use std::path::PathBuf;

use crate::components::selectable::{SelectionState, VisualStateHost};
use crate::components::{Button, Focus, HitBox, Selectable, SubmitFade};
use crate::diagnostics::UiProfiler;
use crate::events::{ButtonClicked, PointerInput};
use crate::theme::{ButtonTheme, ColorBlock, ThemeError};

/// Resource holding the optional path the theme is loaded from at startup.
#[derive(Resource, Debug, Default)]
struct ThemeSource(Option<PathBuf>);

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ButtonSet {
    LoadTheme,
    InputHandling,
    Fade,
}

/// Wires button widgets into the host app: turns raw mouse and keyboard
/// input into [`Button::dispatch`] calls and drives pending submit fades.
#[derive(Default)]
pub struct ButtonInteractionPlugin {
    theme_path: Option<PathBuf>,
}

impl ButtonInteractionPlugin {
    /// Load the [`ButtonTheme`] from a TOML file at startup instead of using
    /// the built-in defaults.
    pub fn with_theme(path: impl Into<PathBuf>) -> Self {
        Self {
            theme_path: Some(path.into()),
        }
    }
}

impl Plugin for ButtonInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Selectable>()
            .register_type::<SelectionState>()
            .register_type::<SubmitFade>()
            .register_type::<HitBox>()
            .register_type::<Focus>()
            .register_type::<ButtonClicked>()
            .register_type::<ButtonTheme>();

        // Idempotent if the host app already set up input and time.
        app.add_event::<ButtonClicked>()
            .add_event::<MouseButtonInput>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Time<Real>>();
        app.init_resource::<UiProfiler>();
        app.insert_resource(ThemeSource(self.theme_path.clone()));

        app.add_systems(Startup, load_theme_system.in_set(ButtonSet::LoadTheme))
            .configure_sets(Update, (ButtonSet::InputHandling, ButtonSet::Fade).chain())
            .add_systems(
                Update,
                (
                    (pointer_input_system, submit_system)
                        .chain()
                        .in_set(ButtonSet::InputHandling),
                    submit_fade_system.in_set(ButtonSet::Fade),
                ),
            )
            .add_systems(Last, reset_profiler_system);

        info!("Button interaction plugin initialized");
    }
}

/// Startup system: loads the button theme from file, falling back to the
/// defaults on any error.
fn load_theme_system(mut commands: Commands, source: Res<ThemeSource>) {
    let theme = match &source.0 {
        Some(path) => match ColorBlock::load_config(path) {
            Ok(block) => {
                info!("Loaded button theme from {:?}", path);
                block
            }
            Err(err) => {
                match &err {
                    ThemeError::ReadError(io_err) => {
                        error!("Error reading theme file {:?}: {}", path, io_err)
                    }
                    ThemeError::ParseError(toml_err) => {
                        error!("Error parsing theme file {:?}: {}", path, toml_err)
                    }
                    ThemeError::FileNotFound(_) => warn!("Theme file {:?} not found", path),
                }
                warn!("Using default button theme");
                ColorBlock::default()
            }
        },
        None => ColorBlock::default(),
    };
    commands.insert_resource(ButtonTheme(theme));
}

/// Drops the frame's telemetry markers once every consumer has had a chance
/// to read them, so the marker log stays frame-sized.
fn reset_profiler_system(mut profiler: ResMut<UiProfiler>) {
    profiler.clear();
}

/// Turns mouse input against the primary window into button dispatches:
/// enter/exit from cursor movement, press on primary-down over a widget,
/// release and click on primary-up.
pub fn pointer_input_system(
    mut mouse_button_events: EventReader<MouseButtonInput>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut clicked_writer: EventWriter<ButtonClicked>,
    mut profiler: ResMut<UiProfiler>,
    mut buttons: Query<(Entity, &GlobalTransform, &HitBox, &mut Button, &mut Selectable)>,
    mut hovered: Local<EntityHashSet>,
    mut pressed_on: Local<Option<(Entity, MouseButton)>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let window_height = window.height();
    let cursor_world = window
        .cursor_position()
        .map(|pos| Vec2::new(pos.x, window_height - pos.y));

    // Synthesize enter/exit from the current cursor position. The payload is
    // always the primary button, matching the upstream event contract.
    for (entity, transform, hit_box, mut button, mut selectable) in buttons.iter_mut() {
        let inside = cursor_world.is_some_and(|point| hit_box.contains(transform, point));
        let was_inside = hovered.contains(&entity);
        if inside == was_inside {
            continue;
        }
        let input = if inside {
            hovered.insert(entity);
            PointerInput::Enter(MouseButton::Left)
        } else {
            hovered.remove(&entity);
            PointerInput::Exit(MouseButton::Left)
        };
        button.dispatch(selectable.as_mut(), &mut profiler, input);
    }

    for event in mouse_button_events.read() {
        match event.state {
            ButtonState::Pressed => {
                let Some(point) = cursor_world else {
                    continue;
                };
                // Topmost widget wins; smaller z is closer, as in render order.
                let mut top_hit: Option<(Entity, f32)> = None;
                for (entity, transform, hit_box, _, _) in buttons.iter() {
                    if !hit_box.contains(transform, point) {
                        continue;
                    }
                    let z = transform.translation().z;
                    if top_hit.map_or(true, |(_, prev_z)| z < prev_z) {
                        top_hit = Some((entity, z));
                    }
                }
                let Some((entity, _)) = top_hit else {
                    continue;
                };
                if let Ok((_, _, _, mut button, mut selectable)) = buttons.get_mut(entity) {
                    button.dispatch(
                        selectable.as_mut(),
                        &mut profiler,
                        PointerInput::Press(event.button),
                    );
                }
                // Only a primary press opens a press-release pair; recording
                // other buttons here would clobber one still in flight.
                if event.button == MouseButton::Left {
                    *pressed_on = Some((entity, event.button));
                }
            }
            ButtonState::Released => {
                let Some((entity, pressed_button)) = *pressed_on else {
                    continue;
                };
                if pressed_button != event.button {
                    continue;
                }
                *pressed_on = None;
                let Ok((_, transform, hit_box, mut button, mut selectable)) =
                    buttons.get_mut(entity)
                else {
                    continue;
                };
                // The release is delivered to the widget that took the press,
                // wherever the cursor is now.
                button.dispatch(
                    selectable.as_mut(),
                    &mut profiler,
                    PointerInput::Release(event.button),
                );
                let still_inside = cursor_world.is_some_and(|point| hit_box.contains(transform, point));
                if still_inside {
                    let outcome = button.dispatch(
                        selectable.as_mut(),
                        &mut profiler,
                        PointerInput::Click(event.button),
                    );
                    if outcome.clicked {
                        clicked_writer.send(ButtonClicked { entity });
                    }
                }
            }
        }
    }
}

/// Dispatches a submit activation to the focused button when a confirm key
/// was just pressed, and attaches the returned fade timer.
pub fn submit_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut clicked_writer: EventWriter<ButtonClicked>,
    mut profiler: ResMut<UiProfiler>,
    mut commands: Commands,
    mut focused: Query<(Entity, &mut Button, &mut Selectable), With<Focus>>,
) {
    if !keyboard.any_just_pressed([KeyCode::Enter, KeyCode::Space]) {
        return;
    }
    for (entity, mut button, mut selectable) in focused.iter_mut() {
        let outcome = button.dispatch(selectable.as_mut(), &mut profiler, PointerInput::Submit);
        if outcome.clicked {
            clicked_writer.send(ButtonClicked { entity });
        }
        if let Some(fade) = outcome.start_fade {
            commands.entity(entity).insert(fade);
        }
    }
}

/// Advances pending submit fades with unscaled time and applies the revert
/// transition once a fade completes. Interactability is deliberately not
/// re-checked while a fade is pending.
pub fn submit_fade_system(
    time: Res<Time<Real>>,
    mut commands: Commands,
    mut fading: Query<(Entity, &mut SubmitFade, &mut Selectable)>,
) {
    for (entity, mut fade, mut selectable) in fading.iter_mut() {
        if fade.tick(time.delta_secs()) {
            let state = selectable.computed_state();
            selectable.transition_to(state, false);
            commands.entity(entity).remove::<SubmitFade>();
        }
    }
}
