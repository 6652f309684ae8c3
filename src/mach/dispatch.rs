use super::{DeviceState, Hardware, Instruction, Runtime};
use crate::lang::{
    is_identifier, parse_condition, parse_value, Cursor, Error, ErrorCode, Reading, Resolve,
    MAX_NAME_LENGTH,
};
use crate::mach::Var;

/// Every instruction the machine understands, named by what it does.
/// The first letter of the wire form selects the group, the second the
/// operation; both are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    // I
    Version,
    Distance,
    Status,
    Messaging,
    PrintProgram,
    // M
    MoveForward,
    Rotate,
    MoveArc,
    MoveMotors,
    ConfigWheels,
    ViewWheels,
    CheckMoving,
    Stop,
    // P
    Candle,
    ColourByName,
    FadeToColour,
    FlickerSpeed,
    SetPixel,
    PixelsOff,
    RandomColours,
    FlickerOn,
    FlickerOff,
    // C
    JumpIfStopped,
    AwaitMove,
    Delay,
    Label,
    Jump,
    CoinToss,
    MeasureAndJump,
    JumpIfTrue,
    JumpIfFalse,
    // R
    Download,
    Start,
    Halt,
    Pause,
    Resume,
    ClearProgram,
    // V
    ClearVariables,
    SetVariable,
    ViewVariable,
    // S
    Tone,
    // W
    WriteText,
    WriteLine,
    WriteValue,
}

const OPERATIONS: [(&[u8; 2], Operation); 44] = [
    (b"IV", Operation::Version),
    (b"ID", Operation::Distance),
    (b"IS", Operation::Status),
    (b"IM", Operation::Messaging),
    (b"IP", Operation::PrintProgram),
    (b"MF", Operation::MoveForward),
    (b"MR", Operation::Rotate),
    (b"MA", Operation::MoveArc),
    (b"MM", Operation::MoveMotors),
    (b"MW", Operation::ConfigWheels),
    (b"MV", Operation::ViewWheels),
    (b"MC", Operation::CheckMoving),
    (b"MS", Operation::Stop),
    (b"PC", Operation::Candle),
    (b"PN", Operation::ColourByName),
    (b"PX", Operation::FadeToColour),
    (b"PF", Operation::FlickerSpeed),
    (b"PI", Operation::SetPixel),
    (b"PO", Operation::PixelsOff),
    (b"PR", Operation::RandomColours),
    (b"PA", Operation::FlickerOn),
    (b"PS", Operation::FlickerOff),
    (b"CI", Operation::JumpIfStopped),
    (b"CA", Operation::AwaitMove),
    (b"CD", Operation::Delay),
    (b"CL", Operation::Label),
    (b"CJ", Operation::Jump),
    (b"CC", Operation::CoinToss),
    (b"CM", Operation::MeasureAndJump),
    (b"CT", Operation::JumpIfTrue),
    (b"CF", Operation::JumpIfFalse),
    (b"RM", Operation::Download),
    (b"RS", Operation::Start),
    (b"RH", Operation::Halt),
    (b"RP", Operation::Pause),
    (b"RR", Operation::Resume),
    (b"RC", Operation::ClearProgram),
    (b"VC", Operation::ClearVariables),
    (b"VS", Operation::SetVariable),
    (b"VV", Operation::ViewVariable),
    (b"ST", Operation::Tone),
    (b"WT", Operation::WriteText),
    (b"WL", Operation::WriteLine),
    (b"WV", Operation::WriteValue),
];

impl Operation {
    pub fn decode(group: u8, operation: u8) -> Option<Operation> {
        let code = [group.to_ascii_uppercase(), operation.to_ascii_uppercase()];
        OPERATIONS
            .iter()
            .find(|(c, _)| **c == code)
            .map(|(_, op)| *op)
    }

    /// The two-letter wire form.
    pub fn code(self) -> &'static str {
        OPERATIONS
            .iter()
            .find(|(_, op)| *op == self)
            .and_then(|(c, _)| std::str::from_utf8(&c[..]).ok())
            .unwrap_or("??")
    }
}

/// Why one instruction was not carried out. Reported as
/// `<code>Fail` or `<code>Fail: <reason>`.
#[derive(Debug)]
pub(super) struct Fail(Option<String>);

impl Fail {
    fn plain() -> Fail {
        Fail(None)
    }
    fn because<T: std::fmt::Display>(reason: T) -> Fail {
        Fail(Some(reason.to_string()))
    }
    fn missing(what: &str) -> Fail {
        Fail(Some(format!("no {}", what)))
    }
}

impl From<Error> for Fail {
    fn from(error: Error) -> Fail {
        Fail::because(error.code().description().to_ascii_lowercase())
    }
}

/// Confirmation suffix such as `"OK"`, or nothing.
type Outcome = Result<Option<&'static str>, Fail>;

const OK: Outcome = Ok(Some("OK"));

struct Env<'a, H> {
    vars: &'a Var,
    hardware: &'a mut H,
}

impl<'a, H: Hardware> Resolve for Env<'a, H> {
    fn variable(&mut self, name: &[u8]) -> Option<i32> {
        self.vars.fetch(name)
    }
    fn reading(&mut self, reading: Reading) -> i32 {
        match reading {
            Reading::Distance => self.hardware.distance(),
        }
    }
}

fn has_more(c: &mut Cursor) -> bool {
    c.skip_spaces();
    !c.at_end()
}

fn tenths(time: i32) -> f32 {
    time as f32 / 10.0
}

impl<H: Hardware> Runtime<H> {
    /// Carries out one framed instruction.
    pub(super) fn dispatch(&mut self, instruction: &Instruction) {
        let (group, operation) = match (instruction.group(), instruction.operation()) {
            (None, _) | (Some(b'#'), _) => return,
            (Some(g), Some(o)) => (g, o),
            (Some(_), None) => {
                tracing::debug!(%instruction, "instruction without operation letter");
                return;
            }
        };
        let op = match Operation::decode(group, operation) {
            Some(op) => op,
            None => {
                tracing::debug!(%instruction, "unknown instruction ignored");
                return;
            }
        };
        tracing::trace!(?op, %instruction, "dispatch");
        let mut c = Cursor::new(instruction.operands());
        let outcome = self.perform(op, &mut c);
        if !self.diagnostics.confirm() {
            return;
        }
        match outcome {
            Ok(Some(suffix)) => self.println(&format!("{}{}", op.code(), suffix)),
            Ok(None) => {}
            Err(Fail(None)) => self.println(&format!("{}Fail", op.code())),
            Err(Fail(Some(reason))) => self.println(&format!("{}Fail: {}", op.code(), reason)),
        }
    }

    fn perform(&mut self, op: Operation, c: &mut Cursor) -> Outcome {
        use Operation::*;
        match op {
            Version => {
                self.confirm("IVOK");
                let version = self.config.version.clone();
                self.println(&version);
                Ok(None)
            }
            Distance => {
                self.confirm("IDOK");
                let distance = self.hardware.distance();
                self.println(&distance.to_string());
                Ok(None)
            }
            Status => {
                self.confirm("ISOK");
                let status = format!("{} {}", self.program.state, self.diagnostics.level());
                self.println(&status);
                Ok(None)
            }
            Messaging => {
                let level = self.operand(c, "level")?;
                self.diagnostics.set_level(level as u8);
                OK
            }
            PrintProgram => {
                let dump = self.store.dump(self.store.program_offset());
                self.print(&dump);
                OK
            }
            MoveForward => self.move_forward(c),
            Rotate => self.rotate(c),
            MoveArc => self.move_arc(c),
            MoveMotors => self.move_motors(c),
            ConfigWheels => {
                let left = self.operand(c, "left diameter")?;
                let right = self.next_operand(c, "right diameter")?;
                let spacing = self.next_operand(c, "spacing")?;
                self.hardware.set_wheel_settings(left, right, spacing);
                OK
            }
            ViewWheels => {
                let settings = self.hardware.wheel_settings();
                self.println(&settings);
                Ok(None)
            }
            CheckMoving => {
                if self.hardware.motors_moving() {
                    self.println("MCMove");
                } else {
                    self.println("MCstopped");
                }
                Ok(None)
            }
            Stop => {
                self.hardware.motor_stop();
                OK
            }
            Candle => {
                let (r, g, b) = self.colour(c, true)?;
                self.hardware.flickering_coloured_lights(r, g, b, 0, 200);
                OK
            }
            ColourByName => self.colour_by_name(c),
            FadeToColour => {
                let speed = self.operand(c, "speed")?.max(1).min(20);
                let (r, g, b) = self.colour(c, false)?;
                self.hardware.transition_to_color((21 - speed) as u8, r, g, b);
                OK
            }
            FlickerSpeed => {
                let speed = self.operand(c, "speed")?;
                self.hardware.set_flicker_speed(speed as u8);
                OK
            }
            SetPixel => {
                let pixel = self.operand(c, "pixel")?;
                let (r, g, b) = self.colour(c, false)?;
                self.hardware.set_light_color(r, g, b, pixel as u8);
                OK
            }
            PixelsOff => {
                self.hardware.set_all_lights_off();
                OK
            }
            RandomColours => {
                self.hardware.randomise_lights();
                OK
            }
            FlickerOn => {
                self.hardware.flicker_on();
                OK
            }
            FlickerOff => {
                self.hardware.flicker_off();
                OK
            }
            JumpIfStopped => {
                let target = self.label_target(c)?;
                let moving = self.hardware.motors_moving();
                Ok(self.jump_if(!moving, target))
            }
            AwaitMove => {
                self.program.await_move();
                OK
            }
            Delay => {
                let tenths = self.operand(c, "delay")?;
                let deadline = self.hardware.millis() + tenths.max(0) as u64 * 100;
                self.program.await_until(deadline);
                OK
            }
            Label => OK,
            Jump => {
                let target = self.label_target(c)?;
                self.program.pc = target;
                OK
            }
            CoinToss => {
                let target = self.label_target(c)?;
                let heads = self.hardware.coin_toss();
                Ok(self.jump_if(heads, target))
            }
            MeasureAndJump => {
                let limit = self.operand(c, "dist")?;
                self.separator(c, "dest")?;
                let target = self.label_target(c)?;
                let measured = self.hardware.distance();
                Ok(self.jump_if(measured < limit, target))
            }
            JumpIfTrue | JumpIfFalse => {
                let result = self.condition(c)?;
                self.separator(c, "dest")?;
                let target = self.label_target(c)?;
                Ok(self.jump_if(result == (op == JumpIfTrue), target))
            }
            Download => {
                if self.device != DeviceState::ExecuteImmediately {
                    self.println("RMFAIL: not accepting commands");
                    return Ok(None);
                }
                self.start_download();
                OK
            }
            Start => {
                self.start_program(self.store.program_offset());
                OK
            }
            Halt => {
                self.halt_program();
                OK
            }
            Pause => {
                tracing::debug!(pc = self.program.pc, "program paused");
                self.program.pause();
                OK
            }
            Resume => {
                if self.program.resume() {
                    tracing::debug!(pc = self.program.pc, "program resumed");
                    OK
                } else {
                    Err(Fail::because(self.program.state))
                }
            }
            ClearProgram => {
                self.halt_program();
                self.store.clear_program();
                OK
            }
            ClearVariables => {
                self.vars.clear();
                OK
            }
            SetVariable => {
                let name = self.variable_name(c)?;
                c.skip_spaces();
                if !c.eat(b'=') {
                    return Err(ErrorCode::NoEqualsInSet.into());
                }
                let value = self.operand(c, "value")?;
                self.vars.store(name, value)?;
                OK
            }
            ViewVariable => {
                let name = self.variable_name(c)?;
                match self.vars.fetch(name) {
                    Some(value) => {
                        self.confirm("VVOK");
                        self.println(&value.to_string());
                        Ok(None)
                    }
                    None => Err(ErrorCode::UndefinedVariable.into()),
                }
            }
            Tone => self.tone(c),
            WriteText => {
                let text = String::from_utf8_lossy(c.rest()).into_owned();
                self.print(&text);
                Ok(None)
            }
            WriteLine => {
                self.print("\n");
                Ok(None)
            }
            WriteValue => {
                let value = self.operand(c, "value")?;
                self.print(&value.to_string());
                Ok(None)
            }
        }
    }

    // Operands

    fn value(&mut self, c: &mut Cursor) -> Result<i32, Error> {
        let mut env = Env {
            vars: &self.vars,
            hardware: &mut self.hardware,
        };
        parse_value(c, &mut env)
    }

    fn condition(&mut self, c: &mut Cursor) -> Result<bool, Fail> {
        if !has_more(c) {
            return Err(Fail::missing("condition"));
        }
        let mut env = Env {
            vars: &self.vars,
            hardware: &mut self.hardware,
        };
        Ok(parse_condition(c, &mut env)?)
    }

    fn operand(&mut self, c: &mut Cursor, what: &str) -> Result<i32, Fail> {
        if !has_more(c) {
            return Err(Fail::missing(what));
        }
        Ok(self.value(c)?)
    }

    fn separator(&mut self, c: &mut Cursor, what: &str) -> Result<(), Fail> {
        c.skip_spaces();
        if c.eat(b',') {
            Ok(())
        } else {
            Err(Fail::missing(what))
        }
    }

    fn next_operand(&mut self, c: &mut Cursor, what: &str) -> Result<i32, Fail> {
        self.separator(c, what)?;
        self.operand(c, what)
    }

    fn colour(&mut self, c: &mut Cursor, first: bool) -> Result<(u8, u8, u8), Fail> {
        let r = if first {
            self.operand(c, "red")?
        } else {
            self.next_operand(c, "red")?
        };
        let g = self.next_operand(c, "green")?;
        let b = self.next_operand(c, "blue")?;
        Ok((r as u8, g as u8, b as u8))
    }

    fn variable_name<'c>(&mut self, c: &mut Cursor<'c>) -> Result<&'c [u8], Fail> {
        c.skip_spaces();
        let name = c.take_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        if name.is_empty() {
            return Err(Fail::missing("name"));
        }
        if name.len() > MAX_NAME_LENGTH || !is_identifier(name) {
            return Err(ErrorCode::InvalidVariableName.into());
        }
        Ok(name)
    }

    /// Resolves the label text at the cursor to a store offset.
    fn label_target(&mut self, c: &mut Cursor) -> Result<usize, Fail> {
        let label = c.rest();
        if label.is_empty() {
            return Err(Fail::missing("dest"));
        }
        match self.store.find_label(self.program.base, label) {
            Some(target) => Ok(target),
            None => {
                tracing::warn!(label = %String::from_utf8_lossy(label), "label not found");
                Err(Fail::because("label not found"))
            }
        }
    }

    fn jump_if(&mut self, take: bool, target: usize) -> Option<&'static str> {
        if take {
            self.program.pc = target;
            Some("jump")
        } else {
            Some("continue")
        }
    }

    // Motion

    fn move_forward(&mut self, c: &mut Cursor) -> Outcome {
        let distance = self.operand(c, "dist")?;
        if !has_more(c) {
            self.hardware.fast_move_distance(distance, distance);
            return OK;
        }
        let time = self.next_operand(c, "time")?;
        self.hardware
            .timed_move_distance(distance, distance, tenths(time))
            .map_err(|_| Fail::plain())?;
        OK
    }

    fn rotate(&mut self, c: &mut Cursor) -> Outcome {
        let angle = self.operand(c, "angle")?;
        if !has_more(c) {
            self.hardware.fast_rotate(angle);
            return OK;
        }
        let time = self.next_operand(c, "time")?;
        self.hardware
            .timed_rotate(angle, tenths(time))
            .map_err(|_| Fail::plain())?;
        OK
    }

    fn move_arc(&mut self, c: &mut Cursor) -> Outcome {
        let radius = self.operand(c, "radius")?;
        let angle = self.next_operand(c, "angle")?;
        if !has_more(c) {
            self.hardware.fast_move_arc(radius, angle);
            return OK;
        }
        let time = self.next_operand(c, "time")?;
        self.hardware
            .timed_move_arc(radius, angle, tenths(time))
            .map_err(|_| Fail::plain())?;
        OK
    }

    fn move_motors(&mut self, c: &mut Cursor) -> Outcome {
        let left = self.operand(c, "left distance")?;
        let right = self.next_operand(c, "right distance")?;
        if !has_more(c) {
            self.hardware.fast_move_distance(left, right);
            return OK;
        }
        let time = self.next_operand(c, "time")?;
        self.hardware
            .timed_move_distance(left, right, tenths(time))
            .map_err(Fail::because)?;
        OK
    }

    // Lights and sound

    fn colour_by_name(&mut self, c: &mut Cursor) -> Outcome {
        c.skip_spaces();
        let name = c.bump().ok_or_else(|| Fail::missing("colour"))?;
        let (r, g, b) = match name.to_ascii_lowercase() {
            b'r' => (255, 0, 0),
            b'g' => (0, 255, 0),
            b'b' => (0, 0, 255),
            b'c' => (0, 255, 255),
            b'm' => (255, 0, 255),
            b'y' => (255, 255, 0),
            b'w' => (255, 255, 255),
            _ => (0, 0, 0),
        };
        self.hardware.flickering_coloured_lights(r, g, b, 0, 200);
        OK
    }

    fn tone(&mut self, c: &mut Cursor) -> Outcome {
        let frequency = self.operand(c, "frequency")?;
        let duration = self.next_operand(c, "duration")?;
        self.separator(c, "wait")?;
        match c.bump().map(|b| b.to_ascii_uppercase()) {
            Some(b'W') => {
                let deadline = self.hardware.millis() + duration.max(0) as u64;
                self.program.await_until(deadline);
            }
            Some(b'N') => {}
            _ => return Err(Fail::missing("wait")),
        }
        self.hardware.play_tone(frequency, duration);
        OK
    }
}

impl From<ErrorCode> for Fail {
    fn from(code: ErrorCode) -> Fail {
        Error::new(code).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(Operation::decode(b'm', b'f'), Some(Operation::MoveForward));
        assert_eq!(Operation::decode(b'C', b'l'), Some(Operation::Label));
        assert_eq!(Operation::decode(b'Z', b'Z'), None);
        assert_eq!(Operation::decode(b'R', b'X'), None);
    }

    #[test]
    fn test_code_round_trips() {
        for (code, op) in OPERATIONS.iter() {
            assert_eq!(op.code().as_bytes(), &code[..]);
        }
    }
}
