mod common;
use common::*;
use hullos::mach::{Call, ProgramState};

#[test]
fn test_stop_confirms() {
    let mut r = confirming();
    assert_eq!(send(&mut r, b"MS\r"), "MSOK\n");
    assert_eq!(r.hardware().calls, vec![Call::MotorStop]);
}

#[test]
fn test_unknown_instruction_is_silent() {
    let mut r = confirming();
    assert_eq!(send(&mut r, b"ZZ\r"), "");
    assert_eq!(send(&mut r, b"#comment\r"), "");
    assert_eq!(send(&mut r, b"\r"), "");
    assert!(r.hardware().calls.is_empty());
}

#[test]
fn test_confirmation_off() {
    let mut r = robot();
    assert_eq!(send(&mut r, b"MF10\r"), "");
    assert_eq!(moves(&r), vec![Call::FastMove(10, 10)]);
}

#[test]
fn test_timed_moves() {
    let mut r = confirming();
    assert_eq!(send(&mut r, b"MF100,20\r"), "MFOK\n");
    assert_eq!(send(&mut r, b"mr90,5\r"), "MROK\n");
    assert_eq!(send(&mut r, b"MA50,180\r"), "MAOK\n");
    assert_eq!(
        moves(&r),
        vec![
            Call::TimedMove(100, 100, 2.0),
            Call::TimedRotate(90, 0.5),
            Call::FastArc(50, 180),
        ]
    );
}

#[test]
fn test_move_failures() {
    let mut r = confirming();
    assert_eq!(send(&mut r, b"MF\r"), "MFFail: no dist\n");
    assert_eq!(send(&mut r, b"MA50\r"), "MAFail: no angle\n");
    r.hardware_mut().move_status = 3;
    assert_eq!(send(&mut r, b"MM10,20,5\r"), "MMFail: 3\n");
    assert_eq!(send(&mut r, b"MF10,1\r"), "MFFail\n");
}

#[test]
fn test_values_in_operands() {
    let mut r = confirming();
    r.hardware_mut().distance = 30;
    assert_eq!(send(&mut r, b"VSx=4\r"), "VSOK\n");
    assert_eq!(send(&mut r, b"MFx*5\r"), "MFOK\n");
    assert_eq!(send(&mut r, b"MR%dist\r"), "MROK\n");
    assert_eq!(send(&mut r, b"MFy\r"), "MFFail: variable used before it was created\n");
    assert_eq!(send(&mut r, b"MF1/0\r"), "MFFail: division by zero\n");
    assert_eq!(moves(&r), vec![Call::FastMove(20, 20), Call::FastRotate(30)]);
}

#[test]
fn test_colour_names() {
    let mut r = robot();
    send(&mut r, b"PNr\rPNc\rPNk\rPNq\r");
    assert_eq!(
        lights(&r),
        vec![
            Call::Flicker(255, 0, 0, 0, 200),
            Call::Flicker(0, 255, 255, 0, 200),
            Call::Flicker(0, 0, 0, 0, 200),
            Call::Flicker(0, 0, 0, 0, 200),
        ]
    );
}

#[test]
fn test_fade_speed_is_clamped_and_inverted() {
    let mut r = robot();
    send(&mut r, b"PX30,1,2,3\rPX0,4,5,6\rPX5,7,8,9\r");
    assert_eq!(
        lights(&r),
        vec![
            Call::Transition(1, 1, 2, 3),
            Call::Transition(20, 4, 5, 6),
            Call::Transition(16, 7, 8, 9),
        ]
    );
}

#[test]
fn test_pixels() {
    let mut r = confirming();
    assert_eq!(send(&mut r, b"PI3,10,20,30\r"), "PIOK\n");
    assert_eq!(send(&mut r, b"PC1,2\r"), "PCFail: no blue\n");
    assert_eq!(send(&mut r, b"PO\rPR\r"), "POOK\nPROK\n");
    assert_eq!(
        r.hardware().calls,
        vec![Call::Pixel(10, 20, 30, 3), Call::LightsOff, Call::RandomLights]
    );
}

#[test]
fn test_information() {
    let mut r = confirming();
    r.hardware_mut().distance = 42;
    assert_eq!(
        send(&mut r, b"IV\r"),
        format!("IVOK\nVersion {}\n", env!("CARGO_PKG_VERSION"))
    );
    assert_eq!(send(&mut r, b"ID\r"), "IDOK\n42\n");
    assert_eq!(send(&mut r, b"IS\r"), "ISOK\n0 1\n");
    assert_eq!(send(&mut r, b"IM0\r"), "");
    assert_eq!(send(&mut r, b"IS\r"), "0 0\n");
    assert_eq!(send(&mut r, b"MC\r"), "MCstopped\n");
    r.hardware_mut().moving = true;
    assert_eq!(send(&mut r, b"MC\r"), "MCMove\n");
}

#[test]
fn test_variables() {
    let mut r = confirming();
    assert_eq!(send(&mut r, b"VSspeed=7\rVVspeed\r"), "VSOK\nVVOK\n7\n");
    assert_eq!(send(&mut r, b"VSspeed=speed+1\rVVSPEED\r"), "VSOK\nVVOK\n8\n");
    assert_eq!(send(&mut r, b"VC\rVVspeed\r"), "VCOK\nVVFail: variable used before it was created\n");
    assert_eq!(send(&mut r, b"VSx4\r"), "VSFail: no equals in set\n");
}

#[test]
fn test_most_negative_literal() {
    let mut r = confirming();
    assert_eq!(
        send(&mut r, b"VSx=-2147483648\rVVx\r"),
        "VSOK\nVVOK\n-2147483648\n"
    );
}

#[test]
fn test_write() {
    let mut r = confirming();
    assert_eq!(send(&mut r, b"WTHello\rWL\rWV6*7\r"), "Hello\n42");
}

#[test]
fn test_pause_and_resume() {
    let mut r = confirming();
    assert_eq!(send(&mut r, b"RR\r"), "RRFail: 0\n");
    assert_eq!(send(&mut r, b"RP\r"), "RPOK\n");
    assert_eq!(r.program_state(), ProgramState::Paused);
    assert_eq!(send(&mut r, b"RR\r"), "RROK\n");
    assert_eq!(r.program_state(), ProgramState::Active);
    assert_eq!(send(&mut r, b"RH\r"), "RHOK\n");
    assert_eq!(r.program_state(), ProgramState::Stopped);
}

#[test]
fn test_tone() {
    let mut r = confirming();
    assert_eq!(send(&mut r, b"ST440,100,N\r"), "STOK\n");
    assert_eq!(send(&mut r, b"ST440\r"), "STFail: no duration\n");
    assert_eq!(send(&mut r, b"ST440,100,X\r"), "STFail: no wait\n");
    assert_eq!(r.hardware().calls, vec![Call::Tone(440, 100)]);
}

#[test]
fn test_wheels() {
    let mut r = confirming();
    assert_eq!(send(&mut r, b"MW69,70,110\r"), "MWOK\n");
    assert_eq!(send(&mut r, b"MV\r"), "Wheels: recorder\n");
    assert_eq!(r.hardware().calls, vec![Call::WheelSettings(69, 70, 110)]);
}

#[test]
fn test_overlong_instruction_dropped() {
    let mut r = confirming();
    let mut line = b"WT".to_vec();
    line.extend(std::iter::repeat(b'a').take(70));
    line.push(b'\r');
    assert_eq!(send(&mut r, &line), "");
    assert_eq!(send(&mut r, b"MS\r"), "MSOK\n");
}
