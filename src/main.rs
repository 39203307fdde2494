use macroquad::prelude::*;
use ndarray::array;
use seekers::simulation::ecosystem::Ecosystem;
use seekers::simulation::event_log::EventKind;
use seekers::simulation::params::Params;
use seekers::simulation::scheduler::{AutoMode, Scheduler};

mod graphics;

/// Frames per second the tick unit is calibrated to.
const TICKS_PER_SECOND: f32 = 60.0;
const NOTIFICATION_SECONDS: f32 = 2.5;
const HELP_SECONDS: f32 = 5.0;

struct Overlay {
    notification: Option<(String, f32)>,
    rips: Vec<(Vec2, f32)>,
    help: f32,
    show_info: bool,
}

impl Overlay {
    fn notify(&mut self, text: impl Into<String>) {
        self.notification = Some((text.into(), NOTIFICATION_SECONDS));
    }

    fn age(&mut self, seconds: f32) {
        if let Some((_, remaining)) = &mut self.notification {
            *remaining -= seconds;
            if *remaining <= 0.0 {
                self.notification = None;
            }
        }
        self.rips.iter_mut().for_each(|(_, remaining)| *remaining -= seconds);
        self.rips.retain(|(_, remaining)| *remaining > 0.0);
        self.help -= seconds;
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn load_params() -> Params {
    match std::env::args().nth(1) {
        Some(path) => Params::load_from_file(&path).unwrap_or_else(|e| {
            log::warn!("could not load parameters from {path}: {e}; using defaults");
            Params::default()
        }),
        None => Params::default(),
    }
}

#[macroquad::main("Seekers")]
async fn main() {
    env_logger::init();

    let mut params = load_params();
    params.box_width = screen_width();
    params.box_height = screen_height();

    let mut ecosystem = Ecosystem::new(&params);
    let mut scheduler = Scheduler::new();
    let mut overlay = Overlay {
        notification: None,
        rips: Vec::new(),
        help: 0.0,
        show_info: false,
    };
    let mut paused = false;
    let mut seen_events = ecosystem.event_log.last_seq();

    log::info!(
        "starting seekers simulation: {} seekers, {} obstacles",
        params.n_seekers,
        params.n_obstacles
    );

    loop {
        let frame_seconds = get_frame_time();
        let shift = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);

        // the world follows the window
        params.box_width = screen_width();
        params.box_height = screen_height();

        if is_key_pressed(KeyCode::R) {
            params.auto_respawn = !params.auto_respawn;
            overlay.notify(format!("Auto respawn mode {}", on_off(params.auto_respawn)));
        }
        if is_key_pressed(KeyCode::G) {
            params.dynamic_obstacles = !params.dynamic_obstacles;
            overlay.notify(if params.dynamic_obstacles { "Dynamic obstacles" } else { "Static obstacles" });
        }
        for (key, mode, name) in [
            (KeyCode::M, AutoMode::Mutation, "mutation"),
            (KeyCode::S, AutoMode::Selection, "selection"),
            (KeyCode::E, AutoMode::Evolution, "evolution"),
        ] {
            if !is_key_pressed(key) {
                continue;
            }
            if shift {
                let enabled = scheduler.toggle(mode);
                overlay.notify(format!("Auto {} mode {}", name, on_off(enabled)));
            } else if let Err(e) = mode.apply(&mut ecosystem, &params) {
                overlay.notify(e.to_string());
            }
        }
        if is_key_pressed(KeyCode::X) {
            ecosystem.reset(&params);
        }
        if is_key_pressed(KeyCode::P) {
            paused = !paused;
        }
        if is_key_pressed(KeyCode::I) {
            overlay.show_info = !overlay.show_info;
        }
        if is_key_pressed(KeyCode::H) {
            overlay.help = HELP_SECONDS;
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            ecosystem.spawn_obstacle(&params, Some(array![x, y]));
        }

        if !paused {
            ecosystem.step(&params, frame_seconds * TICKS_PER_SECOND);
            scheduler.run(frame_seconds, &mut ecosystem, &params);
            overlay.age(frame_seconds);
        }

        for event in ecosystem.event_log.since(seen_events) {
            match event.kind {
                EventKind::Culled => {
                    if let Some(pos) = &event.pos {
                        overlay.rips.push((vec2(pos[0], pos[1]), NOTIFICATION_SECONDS));
                    }
                }
                EventKind::Mutation | EventKind::Selection | EventKind::Evolution | EventKind::Reset => {
                    overlay.notification = Some((event.description.clone(), NOTIFICATION_SECONDS));
                }
                EventKind::Consumed => {}
            }
        }
        seen_events = ecosystem.event_log.last_seq();

        clear_background(Color::from_rgba(16, 153, 187, 255));

        let snapshot = ecosystem.snapshot();
        graphics::draw_obstacles(&snapshot);
        graphics::draw_seekers(&snapshot, overlay.show_info);
        for (pos, _) in &overlay.rips {
            graphics::draw_rip(*pos);
        }
        graphics::draw_epoch(snapshot.epoch);
        if let Some((text, _)) = &overlay.notification {
            graphics::draw_notification(text);
        }
        if overlay.help > 0.0 {
            graphics::draw_help();
        }

        next_frame().await
    }
}
