use ansi_term::Colour;
use hullos::mach::{Hardware, MoveError};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::time::Instant;

/// Fastest wheel speed, in distance units per second.
const MAX_SPEED: f32 = 200.0;
/// Speed of an untimed move.
const FAST_SPEED: f32 = 100.0;
const MAX_DISTANCE: i32 = 200;

/// A robot that exists only in the action log. Motion takes wall-clock
/// time so programs that wait for the motors behave as on the real thing.
pub struct Simulator {
    started: Instant,
    motion_end: u64,
    wheels: (i32, i32, i32),
    flicker: bool,
    busy_lines: usize,
    rng: ThreadRng,
    log: Vec<String>,
}

impl Simulator {
    pub fn new() -> Simulator {
        Simulator {
            started: Instant::now(),
            motion_end: 0,
            wheels: (69, 69, 110),
            flicker: true,
            busy_lines: 0,
            rng: rand::thread_rng(),
            log: vec![],
        }
    }

    /// Actions since the last call, oldest first.
    pub fn take_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }

    fn act(&mut self, text: String) {
        let stamp = chrono::Local::now().format("%H:%M:%S%.3f");
        self.log.push(format!("[{}] {}", stamp, text));
    }

    fn run_motors(&mut self, millis: u64) {
        self.motion_end = self.millis() + millis;
    }

    fn timed(&mut self, distance: f32, seconds: f32) -> Result<(), MoveError> {
        if seconds <= 0.0 {
            return Err(MoveError(1));
        }
        if distance.abs() / seconds > MAX_SPEED {
            return Err(MoveError(2));
        }
        self.run_motors((seconds * 1000.0) as u64);
        Ok(())
    }

    fn swatch(r: u8, g: u8, b: u8) -> String {
        Colour::RGB(r, g, b).paint("\u{25cf}").to_string()
    }
}

fn fast_millis(distance: f32) -> u64 {
    (distance.abs() / FAST_SPEED * 1000.0) as u64
}

fn arc_length(radius: i32, angle: i32) -> f32 {
    radius as f32 * (angle as f32).to_radians()
}

fn rotation_length(spacing: i32, angle: i32) -> f32 {
    arc_length(spacing / 2, angle)
}

impl Hardware for Simulator {
    fn motors_moving(&mut self) -> bool {
        self.millis() < self.motion_end
    }

    fn motor_stop(&mut self) {
        if self.motors_moving() {
            self.act(String::from("motors stopped"));
        }
        self.motion_end = 0;
    }

    fn fast_move_distance(&mut self, left: i32, right: i32) {
        self.act(format!("move left {} right {}", left, right));
        self.run_motors(fast_millis(left.abs().max(right.abs()) as f32));
    }

    fn timed_move_distance(&mut self, left: i32, right: i32, seconds: f32) -> Result<(), MoveError> {
        self.act(format!("move left {} right {} in {}s", left, right, seconds));
        self.timed(left.abs().max(right.abs()) as f32, seconds)
    }

    fn fast_rotate(&mut self, angle: i32) {
        self.act(format!("rotate {}", angle));
        let length = rotation_length(self.wheels.2, angle);
        self.run_motors(fast_millis(length));
    }

    fn timed_rotate(&mut self, angle: i32, seconds: f32) -> Result<(), MoveError> {
        self.act(format!("rotate {} in {}s", angle, seconds));
        self.timed(rotation_length(self.wheels.2, angle), seconds)
    }

    fn fast_move_arc(&mut self, radius: i32, angle: i32) {
        self.act(format!("arc radius {} angle {}", radius, angle));
        self.run_motors(fast_millis(arc_length(radius, angle)));
    }

    fn timed_move_arc(&mut self, radius: i32, angle: i32, seconds: f32) -> Result<(), MoveError> {
        self.act(format!("arc radius {} angle {} in {}s", radius, angle, seconds));
        self.timed(arc_length(radius, angle), seconds)
    }

    fn set_wheel_settings(&mut self, left_diameter: i32, right_diameter: i32, spacing: i32) {
        self.wheels = (left_diameter, right_diameter, spacing);
        self.act(format!("wheels {:?}", self.wheels));
    }

    fn wheel_settings(&self) -> String {
        format!(
            "Left diameter: {} Right diameter: {} Spacing: {}",
            self.wheels.0, self.wheels.1, self.wheels.2
        )
    }

    fn flickering_coloured_lights(&mut self, r: u8, g: u8, b: u8, min: u8, max: u8) {
        let swatch = Simulator::swatch(r, g, b);
        let mode = if self.flicker { "flicker" } else { "steady" };
        self.act(format!("lights {} {} {}..{}", swatch, mode, min, max));
    }

    fn transition_to_color(&mut self, speed: u8, r: u8, g: u8, b: u8) {
        let swatch = Simulator::swatch(r, g, b);
        self.act(format!("lights fade to {} step {}", swatch, speed));
    }

    fn set_flicker_speed(&mut self, speed: u8) {
        self.act(format!("flicker speed {}", speed));
    }

    fn set_light_color(&mut self, r: u8, g: u8, b: u8, pixel: u8) {
        let swatch = Simulator::swatch(r, g, b);
        self.act(format!("pixel {} {}", pixel, swatch));
    }

    fn set_all_lights_off(&mut self) {
        self.act(String::from("lights off"));
    }

    fn randomise_lights(&mut self) {
        let (r, g, b) = (self.rng.gen(), self.rng.gen(), self.rng.gen());
        let swatch = Simulator::swatch(r, g, b);
        self.act(format!("lights random {}", swatch));
    }

    fn flicker_on(&mut self) {
        self.flicker = true;
        self.act(String::from("flicker on"));
    }

    fn flicker_off(&mut self) {
        self.flicker = false;
        self.act(String::from("flicker off"));
    }

    fn start_busy_pixel(&mut self, r: u8, g: u8, b: u8) {
        self.busy_lines = 0;
        let swatch = Simulator::swatch(r, g, b);
        self.act(format!("busy {}", swatch));
    }

    fn update_busy_pixel(&mut self) {
        self.busy_lines += 1;
    }

    fn stop_busy_pixel(&mut self) {
        self.act(format!("busy done after {} lines", self.busy_lines));
    }

    fn play_tone(&mut self, frequency: i32, duration_ms: i32) {
        self.act(format!("tone {}Hz for {}ms", frequency, duration_ms));
    }

    fn distance(&mut self) -> i32 {
        self.rng.gen_range(1..=MAX_DISTANCE)
    }

    fn coin_toss(&mut self) -> bool {
        self.rng.gen()
    }

    fn millis(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}
