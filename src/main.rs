mod display;
mod util;

use std::path::{Path, PathBuf};

use display::{Display, InputState, RenderTarget};
use sdl2::keyboard::Scancode;
use sdl2::mouse::MouseButton;
use softblit::{rgb, rgba, Bitmap, BlendMode, EngineConfig, Transform};
use tracing_subscriber::EnvFilter;
use util::{FpsCounter, StepClock};

const DEFAULT_CONFIG: &str = "softblit.json";

/// A demo program driven by the fixed-step main loop
trait Scene {
    /// Advance one fixed step; returning false ends the loop
    fn update(&mut self, input: &InputState, dt: f32) -> bool;

    /// Draw the current state into the frame buffer
    fn render(&self, frame: &mut Bitmap);

    fn name(&self) -> &str;
}

// ============================================================================
// Sandbox scene
// ============================================================================

const FRICTION: f32 = 0.92;
const THRUST: f32 = 5.0;
const TURN_RATE: f32 = 2.0;
const INK: u32 = rgb(180, 200, 190);
const CURSOR: u32 = rgb(200, 64, 120);

const ORIENTATIONS: [Transform; 4] = [
    Transform::NONE,
    Transform::ROTATE_90,
    Transform::ROTATE_180,
    Transform::ROTATE_270,
];

/// Steerable ship plus a gallery of every primitive and blit
struct Sandbox {
    sprite: Bitmap,
    pos: (f32, f32),
    vel: (f32, f32),
    angle: f32,
    spin: f32,
    zoom: f32,
    blend: BlendMode,
    /// Pinned crosshairs placed with the left mouse button
    marks: Vec<(i32, i32)>,
    mouse: (i32, i32),
    wheel: i32,
    time: f32,
}

impl Sandbox {
    fn new(config: &EngineConfig) -> softblit::Result<Self> {
        let sprite = match &config.sprite {
            Some(path) => load_sprite(path, config.color_key).or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "using built-in sprite");
                builtin_sprite()
            })?,
            None => builtin_sprite()?,
        };
        Ok(Self {
            sprite,
            pos: (config.width as f32 / 2.0, config.height as f32 / 2.0),
            vel: (0.0, 0.0),
            angle: 0.0,
            spin: 0.0,
            zoom: 1.0,
            blend: BlendMode::Blend,
            marks: Vec::new(),
            mouse: (0, 0),
            wheel: 0,
            time: 0.0,
        })
    }

    fn draw_gallery(&self, frame: &mut Bitmap) {
        let (w, h) = (frame.width() as i32, frame.height() as i32);

        frame.set_blend_mode(BlendMode::None);
        frame.draw_rect(0, 0, w, h, rgb(40, 48, 60));

        frame.set_blend_mode(self.blend);
        let pulse = ((self.time * 2.0).sin() * 0.5 + 0.5) * 255.0;
        frame.fill_circle(w - 20, 20, 12, rgba(255, 80, 40, pulse as u8));
        frame.draw_circle(w - 20, 20, 14, rgba(255, 200, 40, 200));
        frame.fill_triangle(w - 40, h - 8, w - 8, h - 8, w - 24, h - 36, rgba(60, 160, 255, 160));
        frame.draw_triangle(w - 40, h - 8, w - 8, h - 8, w - 24, h - 36, INK);
        frame.fill_rect(20, h - 24, 24, 16, rgba(120, 255, 120, 96));

        // Quarter-turn strip down the left edge, clipped to its column
        let step = self.sprite.height().max(self.sprite.width()) as i32;
        frame.set_clip(0, 0, step, h);
        for (i, &t) in ORIENTATIONS.iter().enumerate() {
            frame.copy_ex(&self.sprite, 0, i as i32 * step, 1, 1, t);
        }
        frame.reset_clip();
        frame.copy_ex(&self.sprite, step + 2, 0, 2, 2, Transform::FLIP_HORIZONTAL);
    }
}

impl Scene for Sandbox {
    fn update(&mut self, input: &InputState, dt: f32) -> bool {
        if input.is_pressed(Scancode::Escape) || input.quit_requested() {
            return false;
        }

        let (cos, sin) = (self.angle.cos(), self.angle.sin());
        let mut acc = (0.0, 0.0);
        if input.is_down(Scancode::W) {
            acc = (cos * THRUST * dt, sin * THRUST * dt);
        }
        if input.is_down(Scancode::S) {
            acc = (-cos * THRUST * dt, -sin * THRUST * dt);
        }
        if input.is_down(Scancode::A) {
            self.spin = -TURN_RATE * dt;
        }
        if input.is_down(Scancode::D) {
            self.spin = TURN_RATE * dt;
        }
        if input.is_pressed(Scancode::B) {
            self.blend = match self.blend {
                BlendMode::None => BlendMode::Mask,
                BlendMode::Mask => BlendMode::Blend,
                BlendMode::Blend => BlendMode::None,
            };
            tracing::info!(mode = ?self.blend, "blend mode");
        }

        self.angle += self.spin;
        self.spin *= FRICTION;
        self.vel = (
            (self.vel.0 + acc.0) * FRICTION,
            (self.vel.1 + acc.1) * FRICTION,
        );
        self.pos = (self.pos.0 + self.vel.0, self.pos.1 + self.vel.1);

        self.mouse = input.mouse();
        self.wheel = (self.wheel + input.wheel()).clamp(-16, 16);
        self.zoom = (1.0 + self.wheel as f32 * 0.125).max(0.25);
        if input.mouse_is_pressed(MouseButton::Left) {
            self.marks.push(self.mouse);
        }
        if input.mouse_is_up(MouseButton::Right) {
            self.marks.clear();
        }
        if input.mouse_is_down(MouseButton::Middle) {
            self.pos = (self.mouse.0 as f32, self.mouse.1 as f32);
            self.vel = (0.0, 0.0);
        }
        if input.is_up(Scancode::R) {
            self.angle = 0.0;
            self.spin = 0.0;
            self.wheel = 0;
        }

        self.time += dt;
        true
    }

    fn render(&self, frame: &mut Bitmap) {
        frame.reset_clip();
        frame.clear(rgb(12, 14, 20));
        self.draw_gallery(frame);

        let (x, y) = (self.pos.0 as i32, self.pos.1 as i32);
        let (cx, cy) = (
            self.sprite.width() as i32 / 2,
            self.sprite.height() as i32 / 2,
        );
        frame.set_blend_mode(BlendMode::Mask);
        frame.draw_bitmap(&self.sprite, x, y, self.angle, cx, cy, self.zoom, self.zoom);

        frame.set_blend_mode(BlendMode::None);
        let nose = (
            self.pos.0 + self.angle.cos() * 8.0 * self.zoom,
            self.pos.1 + self.angle.sin() * 8.0 * self.zoom,
        );
        frame.draw_line(x, y, nose.0 as i32, nose.1 as i32, INK);

        let reach = 2 + self.wheel.abs();
        let (mx, my) = self.mouse;
        for &(px, py) in self.marks.iter().chain(std::iter::once(&self.mouse)) {
            frame.draw_line(px - 2, py, px + 2, py, INK);
            frame.draw_line(px, py - 2, px, py + 2, INK);
        }
        frame.draw_line(mx - reach, my, mx + reach, my, CURSOR);
        frame.draw_line(mx, my - reach, mx, my + reach, CURSOR);
        frame.draw_point(0, 0, rgba(255, 255, 255, 0));
    }

    fn name(&self) -> &str {
        "sandbox"
    }
}

fn load_sprite(path: &Path, key: Option<u32>) -> softblit::Result<Bitmap> {
    match key {
        Some(key) => Bitmap::load_with_color_key(path, key),
        None => Bitmap::load(path),
    }
}

/// 16x16 arrow used when no sprite file is configured
fn builtin_sprite() -> softblit::Result<Bitmap> {
    let mut sprite = Bitmap::new(16, 16)?;
    sprite.fill_triangle(15, 8, 1, 1, 1, 14, rgb(220, 220, 240));
    sprite.fill_triangle(12, 8, 4, 5, 4, 11, rgb(90, 140, 255));
    sprite.fill_circle(4, 8, 2, rgb(255, 140, 40));
    Ok(sprite)
}

// ============================================================================
// Entry point
// ============================================================================

/// Parse command line arguments and return (config path, vsync override)
fn parse_args() -> (PathBuf, Option<bool>) {
    let args: Vec<String> = std::env::args().collect();
    let mut config = PathBuf::from(DEFAULT_CONFIG);
    let mut vsync = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = Some(false),
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: softblit [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --config PATH, -c PATH  JSON settings file (default: {})",
                    DEFAULT_CONFIG
                );
                println!("  --no-vsync              Disable VSync");
                println!("  --help                  Show this help message");
                println!();
                println!("Controls: W/S thrust, A/D turn, B cycle blend mode,");
                println!("R reset, mouse wheel zoom, left click mark, right click clear,");
                println!("middle drag move ship, Escape quit");
                std::process::exit(0);
            },
            other => tracing::warn!(arg = other, "ignoring unknown argument"),
        }
        i += 1;
    }

    (config, vsync)
}

fn load_config(path: &Path) -> EngineConfig {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return EngineConfig::default();
    }
    EngineConfig::load(path).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "config rejected, using defaults");
        EngineConfig::default()
    })
}

fn run(config: &EngineConfig, scene: &mut dyn Scene) -> softblit::Result<()> {
    let (mut display, texture_creator) = Display::new(config)?;
    let mut target = RenderTarget::new(&texture_creator, display.width(), display.height())?;
    let mut frame = Bitmap::new(display.width(), display.height())?;
    let mut input = InputState::new(config.scale_x, config.scale_y);

    let mut clock = StepClock::new(config.step());
    let mut fps_counter = FpsCounter::new(60);
    let mut since_report = 0.0;

    tracing::info!(scene = scene.name(), "main loop started");
    'main: loop {
        for _ in 0..clock.advance() {
            display.poll_input(&mut input);
            if !scene.update(&input, clock.step()) {
                break 'main;
            }
        }

        scene.render(&mut frame);
        display.present(&mut target, &frame)?;

        let (dt, avg_fps) = fps_counter.tick();
        since_report += dt;
        if since_report >= 1.0 {
            since_report = 0.0;
            tracing::debug!(
                fps = avg_fps as u32,
                frame_ms = fps_counter.avg_frame_time_ms(),
                "frame timing"
            );
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    tracing::info!("main loop finished");
    Ok(())
}

fn main() -> softblit::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (config_path, vsync) = parse_args();
    let mut config = load_config(&config_path);
    if let Some(vsync) = vsync {
        config.vsync = vsync;
    }

    let mut scene = Sandbox::new(&config)?;
    run(&config, &mut scene)
}
