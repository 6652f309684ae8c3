/// Non-zero status reported by a timed motion request the motors
/// cannot honour (for example, too fast for the requested time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveError(pub i32);

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ## The robot as seen by the interpreter
///
/// Motors, lights, speaker, distance sensor, random source and clock.
/// Every instruction reaches the physical world only through this trait.
pub trait Hardware {
    fn motors_moving(&mut self) -> bool;
    fn motor_stop(&mut self);
    fn fast_move_distance(&mut self, left: i32, right: i32);
    fn timed_move_distance(&mut self, left: i32, right: i32, seconds: f32) -> Result<(), MoveError>;
    fn fast_rotate(&mut self, angle: i32);
    fn timed_rotate(&mut self, angle: i32, seconds: f32) -> Result<(), MoveError>;
    fn fast_move_arc(&mut self, radius: i32, angle: i32);
    fn timed_move_arc(&mut self, radius: i32, angle: i32, seconds: f32) -> Result<(), MoveError>;
    fn set_wheel_settings(&mut self, left_diameter: i32, right_diameter: i32, spacing: i32);
    fn wheel_settings(&self) -> String;

    fn flickering_coloured_lights(&mut self, r: u8, g: u8, b: u8, min: u8, max: u8);
    fn transition_to_color(&mut self, speed: u8, r: u8, g: u8, b: u8);
    fn set_flicker_speed(&mut self, speed: u8);
    fn set_light_color(&mut self, r: u8, g: u8, b: u8, pixel: u8);
    fn set_all_lights_off(&mut self);
    fn randomise_lights(&mut self);
    fn flicker_on(&mut self);
    fn flicker_off(&mut self);
    fn start_busy_pixel(&mut self, r: u8, g: u8, b: u8);
    fn update_busy_pixel(&mut self);
    fn stop_busy_pixel(&mut self);

    fn play_tone(&mut self, frequency: i32, duration_ms: i32);
    fn distance(&mut self) -> i32;
    fn coin_toss(&mut self) -> bool;
    /// Milliseconds since power on.
    fn millis(&self) -> u64;
}

/// Every side effect a `Recorder` has seen, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    MotorStop,
    FastMove(i32, i32),
    TimedMove(i32, i32, f32),
    FastRotate(i32),
    TimedRotate(i32, f32),
    FastArc(i32, i32),
    TimedArc(i32, i32, f32),
    WheelSettings(i32, i32, i32),
    Flicker(u8, u8, u8, u8, u8),
    Transition(u8, u8, u8, u8),
    FlickerSpeed(u8),
    Pixel(u8, u8, u8, u8),
    LightsOff,
    RandomLights,
    FlickerOn,
    FlickerOff,
    BusyStart(u8, u8, u8),
    BusyUpdate,
    BusyStop,
    Tone(i32, i32),
}

/// Hardware that records calls instead of moving anything. Sensor
/// values, motor activity and the clock are plain fields so a caller
/// can script them.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    pub moving: bool,
    pub distance: i32,
    pub coin: bool,
    pub now: u64,
    pub move_status: i32,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    fn timed(&mut self, call: Call) -> Result<(), MoveError> {
        self.calls.push(call);
        match self.move_status {
            0 => Ok(()),
            status => Err(MoveError(status)),
        }
    }
}

impl Hardware for Recorder {
    fn motors_moving(&mut self) -> bool {
        self.moving
    }
    fn motor_stop(&mut self) {
        self.calls.push(Call::MotorStop);
    }
    fn fast_move_distance(&mut self, left: i32, right: i32) {
        self.calls.push(Call::FastMove(left, right));
    }
    fn timed_move_distance(&mut self, left: i32, right: i32, seconds: f32) -> Result<(), MoveError> {
        self.timed(Call::TimedMove(left, right, seconds))
    }
    fn fast_rotate(&mut self, angle: i32) {
        self.calls.push(Call::FastRotate(angle));
    }
    fn timed_rotate(&mut self, angle: i32, seconds: f32) -> Result<(), MoveError> {
        self.timed(Call::TimedRotate(angle, seconds))
    }
    fn fast_move_arc(&mut self, radius: i32, angle: i32) {
        self.calls.push(Call::FastArc(radius, angle));
    }
    fn timed_move_arc(&mut self, radius: i32, angle: i32, seconds: f32) -> Result<(), MoveError> {
        self.timed(Call::TimedArc(radius, angle, seconds))
    }
    fn set_wheel_settings(&mut self, left_diameter: i32, right_diameter: i32, spacing: i32) {
        self.calls
            .push(Call::WheelSettings(left_diameter, right_diameter, spacing));
    }
    fn wheel_settings(&self) -> String {
        String::from("Wheels: recorder")
    }
    fn flickering_coloured_lights(&mut self, r: u8, g: u8, b: u8, min: u8, max: u8) {
        self.calls.push(Call::Flicker(r, g, b, min, max));
    }
    fn transition_to_color(&mut self, speed: u8, r: u8, g: u8, b: u8) {
        self.calls.push(Call::Transition(speed, r, g, b));
    }
    fn set_flicker_speed(&mut self, speed: u8) {
        self.calls.push(Call::FlickerSpeed(speed));
    }
    fn set_light_color(&mut self, r: u8, g: u8, b: u8, pixel: u8) {
        self.calls.push(Call::Pixel(r, g, b, pixel));
    }
    fn set_all_lights_off(&mut self) {
        self.calls.push(Call::LightsOff);
    }
    fn randomise_lights(&mut self) {
        self.calls.push(Call::RandomLights);
    }
    fn flicker_on(&mut self) {
        self.calls.push(Call::FlickerOn);
    }
    fn flicker_off(&mut self) {
        self.calls.push(Call::FlickerOff);
    }
    fn start_busy_pixel(&mut self, r: u8, g: u8, b: u8) {
        self.calls.push(Call::BusyStart(r, g, b));
    }
    fn update_busy_pixel(&mut self) {
        self.calls.push(Call::BusyUpdate);
    }
    fn stop_busy_pixel(&mut self) {
        self.calls.push(Call::BusyStop);
    }
    fn play_tone(&mut self, frequency: i32, duration_ms: i32) {
        self.calls.push(Call::Tone(frequency, duration_ms));
    }
    fn distance(&mut self) -> i32 {
        self.distance
    }
    fn coin_toss(&mut self) -> bool {
        self.coin
    }
    fn millis(&self) -> u64 {
        self.now
    }
}
