mod common;
use common::*;
use hullos::mach::{Call, Config, DeviceState, ProgramState, Recorder, Runtime};

#[test]
fn test_download_stores_and_starts() {
    let mut r = confirming();
    assert_eq!(send(&mut r, b"RM\r"), "RMOK\n");
    assert_eq!(r.device_state(), DeviceState::StoreProgram);
    assert_eq!(send(&mut r, b"PNr\rMF10\rRX\r"), "");
    assert_eq!(r.device_state(), DeviceState::ExecuteImmediately);
    assert!(r.store().is_program_stored());
    assert_eq!(r.store().program_bytes(), b"PNr\rMF10\r");
    assert_eq!(r.program_state(), ProgramState::Active);
}

#[test]
fn test_hello_finish_and_abort() {
    let mut r = robot();
    send(&mut r, b"RM\rhello\rrx\r");
    assert_eq!(r.store().program_bytes(), b"hello\r");
    assert!(r.store().is_program_stored());
    assert_eq!(r.program_state(), ProgramState::Active);

    send(&mut r, b"RM\rhello\rra\r");
    assert!(!r.store().is_program_stored());
    assert_eq!(r.store().program_bytes(), b"");
    assert_eq!(r.program_state(), ProgramState::Stopped);
}

#[test]
fn test_download_halts_running_program() {
    let mut r = robot();
    send(&mut r, b"RM\rCLa\rCJa\rRX\r");
    exec_n(&mut r, 5);
    assert_eq!(r.program_state(), ProgramState::Active);
    send(&mut r, b"RM\r");
    assert_eq!(r.program_state(), ProgramState::Stopped);
    assert_eq!(r.device_state(), DeviceState::StoreProgram);
}

#[test]
fn test_abort_discards() {
    let mut r = robot();
    assert_eq!(send(&mut r, b"RM\rPNr\rRA\r"), "RA\n");
    assert_eq!(r.device_state(), DeviceState::ExecuteImmediately);
    assert!(!r.store().is_program_stored());
    assert_eq!(r.program_state(), ProgramState::Stopped);
}

#[test]
fn test_busy_pixel() {
    let mut r = robot();
    send(&mut r, b"RM\rPNr\rPNg\rRX\r");
    let busy: Vec<Call> = r
        .hardware()
        .calls
        .iter()
        .filter(|c| match c {
            Call::BusyStart(..) | Call::BusyUpdate | Call::BusyStop => true,
            _ => false,
        })
        .cloned()
        .collect();
    assert_eq!(
        busy,
        vec![
            Call::BusyStart(128, 128, 128),
            Call::BusyUpdate,
            Call::BusyUpdate,
            Call::BusyStop,
        ]
    );
}

#[test]
fn test_r_lines_are_not_stored() {
    let mut r = robot();
    send(&mut r, b"RM\rR\rPNg\rRS\rMF1\rRX\r");
    assert_eq!(r.store().program_bytes(), b"PNg\rMF1\r");
}

#[test]
fn test_instructions_are_not_run_while_downloading() {
    let mut r = robot();
    send(&mut r, b"RM\rMF10\rPNr\r");
    assert!(moves(&r).is_empty());
    assert!(lights(&r).is_empty());
}

#[test]
fn test_echo_and_dump() {
    let mut r = robot();
    r.set_diagnostics(4);
    assert_eq!(send(&mut r, b"RM\rPNr\rRX\r"), "PNr\n");
    r.set_diagnostics(8);
    assert_eq!(
        send(&mut r, b"RM\rPNr\rRX\r"),
        "Program: \nPNr\nProgram size: 5\n"
    );
}

#[test]
fn test_listing() {
    let mut r = robot();
    send(&mut r, b"RM\rCLl1\rCJl1\rRX\r");
    assert_eq!(
        send(&mut r, b"RH\rIP\r"),
        "Program: \nCLl1\nCJl1\nProgram size: 11\n"
    );
}

#[test]
fn test_store_overrun() {
    let config = Config {
        store_size: 28,
        program_offset: 20,
        ..Config::default()
    };
    let mut r = Runtime::with_config(Recorder::new(), config);
    assert_eq!(send(&mut r, b"RM\rPNr\rPNg\rPNb\rRX\r"), "Eeprom end\n");
    assert!(!r.store().is_program_stored());
    assert_eq!(r.program_state(), ProgramState::Stopped);
    assert_eq!(r.device_state(), DeviceState::ExecuteImmediately);
}

#[test]
fn test_power_on_runs_stored_program() {
    let mut first = robot();
    send(&mut first, b"RM\rPNb\rRX\r");
    let image = first.store().bytes().to_vec();

    let mut second = robot();
    second.load_store(&image);
    second.power_on();
    assert_eq!(second.program_state(), ProgramState::Active);
    exec(&mut second);
    assert_eq!(lights(&second), vec![Call::Flicker(0, 0, 255, 0, 200)]);
}

#[test]
fn test_power_on_rejects_corrupt_store() {
    let mut first = robot();
    send(&mut first, b"RM\rPNb\rRX\r");
    let mut image = first.store().bytes().to_vec();
    image[22] = b'r';

    let mut second = robot();
    second.load_store(&image);
    second.power_on();
    assert_eq!(second.program_state(), ProgramState::Stopped);
    assert_eq!(send(&mut second, b"RS\r"), "");
    assert_eq!(second.program_state(), ProgramState::Stopped);
}

#[test]
fn test_clear_program() {
    let mut r = confirming();
    send(&mut r, b"RM\rPNb\rRX\r");
    assert_eq!(send(&mut r, b"RC\r"), "RCOK\n");
    assert!(!r.store().is_program_stored());
    assert_eq!(r.program_state(), ProgramState::Stopped);
}
