use macroquad::prelude::*;
use seekers::simulation::ecosystem::Snapshot;

const SEEKER_RADIUS: f32 = 14.0;
const OBSTACLE_RADIUS: f32 = 12.0;

pub fn draw_obstacles(snapshot: &Snapshot) {
    snapshot.obstacles.iter().for_each(|entity| {
        draw_circle(entity.x, entity.y, OBSTACLE_RADIUS, Color::from_rgba(230, 60, 90, 255));
        // eyes
        let (sin, cos) = entity.rot.sin_cos();
        draw_circle(entity.x + cos * 5.0 - sin * 4.0, entity.y + sin * 5.0 + cos * 4.0, 2.5, WHITE);
        draw_circle(entity.x + cos * 5.0 + sin * 4.0, entity.y + sin * 5.0 - cos * 4.0, 2.5, WHITE);
    });
}

pub fn draw_seekers(snapshot: &Snapshot, show_info: bool) {
    snapshot.seekers.iter().for_each(|entity| {
        draw_circle(entity.x, entity.y, SEEKER_RADIUS, Color::from_rgba(255, 220, 0, 255));

        // mouth wedge pointing along the heading
        let (sin_a, cos_a) = (entity.rot + 0.4).sin_cos();
        let (sin_b, cos_b) = (entity.rot - 0.4).sin_cos();
        draw_triangle(
            vec2(entity.x, entity.y),
            vec2(entity.x + cos_a * SEEKER_RADIUS, entity.y + sin_a * SEEKER_RADIUS),
            vec2(entity.x + cos_b * SEEKER_RADIUS, entity.y + sin_b * SEEKER_RADIUS),
            Color::from_rgba(16, 153, 187, 255),
        );

        if show_info {
            let text = format!("{:.3}", entity.fitness);
            draw_text(&text, entity.x - 20.0, entity.y - 25.0, 16.0, WHITE);
        }
    });
}

pub fn draw_rip(pos: Vec2) {
    draw_rectangle(pos.x - 8.0, pos.y - 12.0, 16.0, 24.0, GRAY);
    draw_text("RIP", pos.x - 10.0, pos.y + 2.0, 14.0, BLACK);
}

pub fn draw_epoch(epoch: u32) {
    draw_text(&format!("Epoch {}", epoch), 50.0, screen_height() - 50.0, 35.0, WHITE);
}

pub fn draw_notification(text: &str) {
    draw_text(text, 50.0, 80.0, 35.0, WHITE);
}

pub fn draw_help() {
    let lines = [
        "        HELP        ",
        "",
        "r    - obstacles respawn",
        "g    - dynamic obstacles",
        "m(M) - (auto)mutation",
        "s(S) - (auto)selection",
        "e(E) - (auto)evolution",
        "x    - reset",
        "p    - pause/resume",
        "i    - show/hide info",
        "h    - this help",
    ];
    let x = screen_width() / 2.0 - 200.0;
    let y = screen_height() / 2.0 - 150.0;
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, x, y + i as f32 * 32.0, 30.0, WHITE);
    }
}
