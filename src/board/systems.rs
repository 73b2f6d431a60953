use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::MouseButtonInput;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::collections::HashSet;

use super::resources::{BoardParameters, PlaybackClock};
use super::state::{BoardEvent, BoardKey, TacticsBoard};
use super::store::FrameStore;
use super::territory::TerritoryDiagram;
use crate::math::types::Point2D;

pub fn board_key(code: KeyCode) -> Option<BoardKey> {
    match code {
        KeyCode::Space => Some(BoardKey::TogglePause),
        KeyCode::ArrowRight => Some(BoardKey::StepForward),
        KeyCode::ArrowLeft => Some(BoardKey::StepBackward),
        _ => None,
    }
}

/// Ob das Bedienfeld den Zeiger gerade für sich beansprucht.
#[derive(Resource, Debug, Default)]
pub struct PointerOverPanel(pub bool);

#[derive(Default)]
pub struct InputTracker {
    cursor: Option<Point2D>,
    held_keys: HashSet<KeyCode>,
}

/// Übersetzt Tastatur- und Mausereignisse in Brett-Ereignisse.
///
/// Fensterkoordinaten (Ursprung oben links, y nach unten) sind bereits
/// Brett-Koordinaten. Innerhalb eines Typs bleibt die Eingangsreihenfolge
/// erhalten; pro Frame gilt: Tasten, dann die letzte Cursorposition, dann die
/// Maustasten. Ein Drücken verwendet die zuletzt gemeldete Cursorposition.
pub fn collect_input_system(
    mut keys: EventReader<KeyboardInput>,
    mut cursor_moves: EventReader<CursorMoved>,
    mut buttons: EventReader<MouseButtonInput>,
    windows: Query<&Window, With<PrimaryWindow>>,
    over_panel: Res<PointerOverPanel>,
    mut tracker: Local<InputTracker>,
    mut events: EventWriter<BoardEvent>,
) {
    for input in keys.read() {
        match input.state {
            ButtonState::Pressed => {
                // Tastenwiederholung meldet erneut Pressed
                if !tracker.held_keys.insert(input.key_code) {
                    continue;
                }
                if let Some(key) = board_key(input.key_code) {
                    events.send(BoardEvent::Key(key));
                }
            }
            ButtonState::Released => {
                tracker.held_keys.remove(&input.key_code);
            }
        }
    }

    if let Some(moved) = cursor_moves.read().last() {
        tracker.cursor = Some(moved.position);
        events.send(BoardEvent::PointerMove(moved.position));
    }

    for input in buttons.read().filter(|input| input.button == MouseButton::Left) {
        match input.state {
            // Klicks ins Bedienfeld sollen keine Spieler greifen
            ButtonState::Pressed if over_panel.0 => {}
            ButtonState::Pressed => {
                let cursor = tracker.cursor.or_else(|| {
                    windows
                        .get_single()
                        .ok()
                        .and_then(|window| window.cursor_position())
                });
                if let Some(position) = cursor {
                    events.send(BoardEvent::PointerDown(position));
                }
            }
            ButtonState::Released => {
                events.send(BoardEvent::PointerUp);
            }
        }
    }
}

pub fn apply_board_events_system(
    mut events: EventReader<BoardEvent>,
    mut board: ResMut<TacticsBoard>,
    store: Res<FrameStore>,
) {
    for event in events.read() {
        board.handle(*event, &*store);
    }
}

/// Berechnet Tessellation und Besitz neu, sobald sich der Frame oder der Zuschnitt geändert hat.
pub fn rebuild_territory_system(
    board: Res<TacticsBoard>,
    params: Res<BoardParameters>,
    mut territory: ResMut<TerritoryDiagram>,
) {
    let clipped = params.clip_cells_to_anchors;
    if !territory.is_stale(board.revision(), clipped) {
        return;
    }

    match TerritoryDiagram::compute(board.frame(), &params.voronoi_config()) {
        Ok(rebuilt) => {
            debug!(
                "Territory at t = {}: {} regions, {} ridges.",
                board.time(),
                rebuilt.regions.len(),
                rebuilt.ridges.len()
            );
            *territory = rebuilt;
        }
        Err(e) => {
            error!("Territory at t = {} could not be built: {e}", board.time());
            territory.clear();
        }
    }
    territory.source = Some((board.revision(), clipped));
}

/// Automatischer Schritt, wenn der Wiedergabetakt abläuft und nicht pausiert ist.
pub fn auto_advance_system(
    time: Res<Time>,
    mut clock: ResMut<PlaybackClock>,
    mut board: ResMut<TacticsBoard>,
    store: Res<FrameStore>,
) {
    if !clock.0.tick(time.delta()).just_finished() || !board.is_playing() {
        return;
    }
    board.handle(BoardEvent::Tick, &*store);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::state::{DragState, DragTarget, PlaybackMode};
    use bevy::input::keyboard::Key;
    use std::time::Duration;

    const DATA: &str = "\
time,team,player_id,x,y
0,team1,1,100,100
0,team2,2,200,200
0,ball,,150,150
1,team1,1,300,400
1,team2,2,900,400
1,ball,,600,400
";

    fn base_app() -> App {
        let store = FrameStore::from_reader(DATA.as_bytes()).unwrap();
        let params = BoardParameters::default();
        let board = TacticsBoard::new(&store, params.hit_radii());

        let mut app = App::new();
        app.add_event::<BoardEvent>()
            .insert_resource(store)
            .insert_resource(board)
            .insert_resource(params)
            .init_resource::<TerritoryDiagram>();
        app
    }

    fn board_app() -> App {
        let mut app = base_app();
        app.add_systems(
            Update,
            (apply_board_events_system, rebuild_territory_system).chain(),
        );
        app
    }

    fn input_app() -> App {
        let mut app = base_app();
        app.add_event::<KeyboardInput>()
            .add_event::<MouseButtonInput>()
            .add_event::<CursorMoved>()
            .init_resource::<PointerOverPanel>()
            .add_systems(
                Update,
                (
                    collect_input_system,
                    apply_board_events_system,
                    rebuild_territory_system,
                )
                    .chain(),
            );
        app
    }

    fn key(key_code: KeyCode, logical_key: Key, state: ButtonState) -> KeyboardInput {
        KeyboardInput {
            key_code,
            logical_key,
            state,
            window: Entity::PLACEHOLDER,
        }
    }

    fn left_button(state: ButtonState) -> MouseButtonInput {
        MouseButtonInput {
            button: MouseButton::Left,
            state,
            window: Entity::PLACEHOLDER,
        }
    }

    fn cursor(x: f32, y: f32) -> CursorMoved {
        CursorMoved {
            window: Entity::PLACEHOLDER,
            position: Vec2::new(x, y),
            delta: None,
        }
    }

    fn written_events(app: &App) -> Vec<BoardEvent> {
        let events = app.world.resource::<Events<BoardEvent>>();
        events.get_reader().read(events).copied().collect()
    }

    #[test]
    fn test_keys_map_to_board_keys() {
        assert_eq!(board_key(KeyCode::Space), Some(BoardKey::TogglePause));
        assert_eq!(board_key(KeyCode::ArrowRight), Some(BoardKey::StepForward));
        assert_eq!(board_key(KeyCode::ArrowLeft), Some(BoardKey::StepBackward));
        assert_eq!(board_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_key_presses_keep_arrival_order() {
        let mut app = input_app();
        app.world.send_event(key(KeyCode::ArrowRight, Key::ArrowRight, ButtonState::Pressed));
        app.world.send_event(key(KeyCode::Space, Key::Space, ButtonState::Pressed));
        app.world.send_event(key(KeyCode::KeyQ, Key::Character("q".into()), ButtonState::Pressed));
        app.world.send_event(key(KeyCode::ArrowLeft, Key::ArrowLeft, ButtonState::Pressed));
        app.update();

        assert_eq!(
            written_events(&app),
            vec![
                BoardEvent::Key(BoardKey::StepForward),
                BoardEvent::Key(BoardKey::TogglePause),
                BoardEvent::Key(BoardKey::StepBackward),
            ]
        );
        let board = app.world.resource::<TacticsBoard>();
        assert_eq!(board.time(), 0);
        assert_eq!(board.state().mode, PlaybackMode::Paused);
    }

    #[test]
    fn test_held_key_steps_once() {
        let mut app = input_app();
        app.world.send_event(key(KeyCode::ArrowRight, Key::ArrowRight, ButtonState::Pressed));
        app.world.send_event(key(KeyCode::ArrowRight, Key::ArrowRight, ButtonState::Pressed));
        app.update();
        assert_eq!(app.world.resource::<TacticsBoard>().time(), 1);

        app.world.send_event(key(KeyCode::ArrowRight, Key::ArrowRight, ButtonState::Released));
        app.world.send_event(key(KeyCode::ArrowRight, Key::ArrowRight, ButtonState::Pressed));
        app.update();
        assert_eq!(app.world.resource::<TacticsBoard>().time(), 0);
    }

    #[test]
    fn test_step_then_press_grabs_on_the_new_frame() {
        let mut app = input_app();
        app.world.send_event(key(KeyCode::ArrowRight, Key::ArrowRight, ButtonState::Pressed));
        app.world.send_event(cursor(600.0, 400.0));
        app.world.send_event(left_button(ButtonState::Pressed));
        app.update();

        assert_eq!(
            written_events(&app),
            vec![
                BoardEvent::Key(BoardKey::StepForward),
                BoardEvent::PointerMove(Point2D::new(600.0, 400.0)),
                BoardEvent::PointerDown(Point2D::new(600.0, 400.0)),
            ]
        );
        let board = app.world.resource::<TacticsBoard>();
        assert_eq!(board.time(), 1);
        assert_eq!(board.state().drag, DragState::Dragging(DragTarget::Ball));

        app.world.send_event(cursor(640.0, 420.0));
        app.update();
        let board = app.world.resource::<TacticsBoard>();
        assert_eq!(board.time(), 1);
        assert_eq!(board.frame().ball, Point2D::new(640.0, 420.0));
    }

    #[test]
    fn test_release_then_press_in_one_frame_keeps_dragging() {
        let mut app = input_app();
        app.world.send_event(cursor(150.0, 150.0));
        app.world.send_event(left_button(ButtonState::Pressed));
        app.update();
        assert_eq!(
            app.world.resource::<TacticsBoard>().state().drag,
            DragState::Dragging(DragTarget::Ball)
        );

        app.world.send_event(left_button(ButtonState::Released));
        app.world.send_event(left_button(ButtonState::Pressed));
        app.update();
        assert_eq!(
            app.world.resource::<TacticsBoard>().state().drag,
            DragState::Dragging(DragTarget::Ball)
        );
    }

    #[test]
    fn test_press_over_panel_is_ignored_but_release_is_not() {
        let mut app = input_app();
        app.world.resource_mut::<PointerOverPanel>().0 = true;
        app.world.send_event(cursor(150.0, 150.0));
        app.world.send_event(left_button(ButtonState::Pressed));
        app.world.send_event(MouseButtonInput {
            button: MouseButton::Right,
            state: ButtonState::Pressed,
            window: Entity::PLACEHOLDER,
        });
        app.world.send_event(left_button(ButtonState::Released));
        app.update();

        assert_eq!(
            written_events(&app),
            vec![
                BoardEvent::PointerMove(Point2D::new(150.0, 150.0)),
                BoardEvent::PointerUp,
            ]
        );
        assert_eq!(app.world.resource::<TacticsBoard>().state().drag, DragState::Idle);
    }

    #[test]
    fn test_events_apply_in_write_order() {
        let mut app = board_app();
        app.world.send_event(BoardEvent::Key(BoardKey::TogglePause));
        app.world.send_event(BoardEvent::Key(BoardKey::StepForward));
        app.world.send_event(BoardEvent::PointerDown(Point2D::new(600.0, 400.0)));
        app.world.send_event(BoardEvent::PointerMove(Point2D::new(640.0, 420.0)));
        app.update();

        let board = app.world.resource::<TacticsBoard>();
        assert_eq!(board.time(), 1);
        assert_eq!(board.state().mode, PlaybackMode::Paused);
        assert!(matches!(board.state().drag, DragState::Dragging(_)));
        assert_eq!(board.frame().ball, Point2D::new(640.0, 420.0));
    }

    #[test]
    fn test_territory_follows_the_board() {
        let mut app = board_app();
        app.update();
        let first = app.world.resource::<TerritoryDiagram>().clone();
        assert_eq!(first.regions.len(), 2);
        assert_eq!(first.source, Some((0, false)));

        app.world.send_event(BoardEvent::Key(BoardKey::StepForward));
        app.update();
        let second = app.world.resource::<TerritoryDiagram>();
        assert_eq!(second.source, Some((1, false)));
        assert_ne!(first.regions, second.regions);
    }

    #[test]
    fn test_auto_advance_steps_once_per_period_unless_paused() {
        let mut app = base_app();
        app.init_resource::<Time>()
            .insert_resource(PlaybackClock::default())
            .add_systems(Update, auto_advance_system);

        let advance = |app: &mut App, millis: u64| {
            app.world
                .resource_mut::<Time>()
                .advance_by(Duration::from_millis(millis));
            app.update();
            app.world.resource::<TacticsBoard>().time()
        };

        // Takt von 1 s
        assert_eq!(advance(&mut app, 600), 0);
        assert_eq!(advance(&mut app, 600), 1);
        assert_eq!(advance(&mut app, 600), 1);
        assert_eq!(advance(&mut app, 600), 0);

        app.world.resource_mut::<TacticsBoard>().toggle_pause();
        assert_eq!(advance(&mut app, 1000), 0);
        assert_eq!(advance(&mut app, 1000), 0);

        app.world.resource_mut::<TacticsBoard>().toggle_pause();
        assert_eq!(advance(&mut app, 700), 1);
    }
}
