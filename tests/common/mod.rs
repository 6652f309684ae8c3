#![allow(dead_code)]
use hullos::mach::{Call, ProgramState, Recorder, Runtime};

pub fn robot() -> Runtime<Recorder> {
    Runtime::new(Recorder::new())
}

/// A robot that confirms every instruction.
pub fn confirming() -> Runtime<Recorder> {
    let mut r = robot();
    r.set_diagnostics(1);
    r
}

/// Sends raw protocol bytes.
pub fn send(runtime: &mut Runtime<Recorder>, bytes: &[u8]) -> String {
    for b in bytes {
        runtime.receive(*b);
    }
    runtime.take_output()
}

pub fn script(runtime: &mut Runtime<Recorder>, lines: &[&str]) -> String {
    for line in lines {
        runtime.enter(line);
    }
    runtime.take_output()
}

pub fn exec(runtime: &mut Runtime<Recorder>) -> String {
    exec_n(runtime, 5000)
}

/// Ticks until the program stops, advancing the clock 10 ms a tick.
pub fn exec_n(runtime: &mut Runtime<Recorder>, ticks: usize) -> String {
    let mut s = runtime.take_output();
    for _ in 0..ticks {
        if runtime.program_state() == ProgramState::Stopped {
            return s;
        }
        runtime.tick();
        runtime.hardware_mut().now += 10;
        s.push_str(&runtime.take_output());
    }
    s.push_str(&format!("\n{} ticks exceeded.\n", ticks));
    s
}

/// The calls that drive the wheels.
pub fn moves(runtime: &Runtime<Recorder>) -> Vec<Call> {
    runtime
        .hardware()
        .calls
        .iter()
        .filter(|c| match c {
            Call::FastMove(..) | Call::TimedMove(..) => true,
            Call::FastRotate(..) | Call::TimedRotate(..) => true,
            Call::FastArc(..) | Call::TimedArc(..) => true,
            _ => false,
        })
        .cloned()
        .collect()
}

/// The calls that set lights.
pub fn lights(runtime: &Runtime<Recorder>) -> Vec<Call> {
    runtime
        .hardware()
        .calls
        .iter()
        .filter(|c| match c {
            Call::Flicker(..) | Call::Transition(..) | Call::Pixel(..) => true,
            _ => false,
        })
        .cloned()
        .collect()
}
