// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use anglevis::{
    config::{color_from, Config},
    models::SceneScript,
    views::{AngleScene, SceneStyle},
};

struct Model {
    // Core components:
    scene: AngleScene,
    background_color: Rgb,

    // Playback state:
    loop_scene: bool,
    scene_start: Option<f32>,
    elapsed: f32,

    // FPS
    last_update: Instant,
    fps: f32,

    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load the scene script
    let scene_path = config.resolve_scene_path();
    let script = SceneScript::load(&scene_path).expect("Failed to load scene file");

    let style = SceneStyle::from_config(&config);
    let scene = AngleScene::new(&script, style).expect("Invalid scene script");

    println!(
        "anglevis: scene '{}' loaded ({:.1}s timeline)",
        script.name,
        scene.duration()
    );

    // Create window
    app.new_window()
        .title("anglevis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    Model {
        scene,
        background_color: color_from(config.style.background_color),
        loop_scene: config.playback.loop_scene,
        scene_start: None,
        elapsed: 0.0,
        last_update: Instant::now(),
        fps: 0.0,
        debug_flag: false,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // Restart the scene from the top
        Key::Space => {
            model.scene_start = None;
        }
        Key::L => {
            model.loop_scene = !model.loop_scene;
            println!("loop: {}", model.loop_scene);
        }
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        Key::Q => {
            app.quit();
        }
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation; only the readout is gated on the debug flag
    model.fps = fps_from(duration);

    // One clock for the whole scene: elapsed time since the scene start
    let start = *model.scene_start.get_or_insert(app.time);
    let mut elapsed = app.time - start;

    if model.loop_scene && model.scene.is_complete(elapsed) {
        model.scene_start = Some(app.time);
        elapsed = 0.0;
    }

    model.elapsed = elapsed;
    model.scene.update(elapsed);
}

fn fps_from(duration: std::time::Duration) -> f32 {
    1.0 / duration.as_secs_f32()
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background_color);

    model.scene.draw(&draw);

    if model.debug_flag {
        // Draw (+,+) axes
        draw.line()
            .points(pt2(0.0, 0.0), pt2(50.0, 0.0))
            .color(RED)
            .stroke_weight(1.0);
        draw.line()
            .points(pt2(0.0, 0.0), pt2(0.0, 50.0))
            .color(BLUE)
            .stroke_weight(1.0);

        draw.text(&format!(
            "FPS: {:.1}\nt: {:.2}s\nangle: {:.1} deg",
            model.fps,
            model.elapsed,
            model.scene.current_angle().to_degrees()
        ))
        .x_y(500.0, 300.0)
        .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fps_reflects_frame_duration() {
        assert!((fps_from(Duration::from_millis(20)) - 50.0).abs() < 0.5);
        assert!((fps_from(Duration::from_millis(100)) - 10.0).abs() < 0.5);
    }
}
