extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::Cli;
use ansi_term::Style;
use hullos::mach::{Config, Runtime};
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

mod sim;
use sim::Simulator;

const POLL: Duration = Duration::from_millis(10);

pub fn main(cli: Cli) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        tracing::warn!(%error, "Ctrl-C handler not installed");
    }
    if let Err(error) = main_loop(cli, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(cli: Cli, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("HullOS")?;
    interface.set_prompt("> ")?;
    interface.set_report_signal(Signal::Interrupt, true);

    let config = Config {
        store_size: cli.store_size,
        diagnostics: cli.diagnostics,
        ..Config::default()
    };
    let mut robot = Runtime::with_config(Simulator::new(), config);
    load(&cli.eeprom, &mut robot)?;
    let mut saved = robot.store().bytes().to_vec();
    robot.power_on();

    if let Some(script) = &cli.script {
        let text = std::fs::read(script)?;
        for b in text {
            robot.receive_script_byte(b);
        }
        robot.receive_script_byte(b'\r');
    }

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            robot.interrupt();
        }
        match interface.read_line_step(Some(POLL))? {
            Some(ReadResult::Input(line)) => {
                robot.enter(&line);
                if !line.trim().is_empty() {
                    interface.add_history_unique(line);
                }
            }
            Some(ReadResult::Signal(Signal::Interrupt)) => {
                interface.set_buffer("")?;
                robot.interrupt();
            }
            Some(ReadResult::Signal(_)) | Some(ReadResult::Eof) => break,
            None => {}
        }
        robot.tick();
        report(&interface, &mut robot)?;
        if robot.store().bytes() != &saved[..] {
            saved = robot.store().bytes().to_vec();
            save(&cli.eeprom, &saved);
        }
    }
    Ok(())
}

fn report<T: Terminal>(interface: &Interface<T>, robot: &mut Runtime<Simulator>) -> std::io::Result<()> {
    for action in robot.hardware_mut().take_log() {
        interface.write_fmt(format_args!("{}\n", Style::new().dimmed().paint(action)))?;
    }
    let output = robot.take_output();
    if !output.is_empty() {
        interface.write_fmt(format_args!("{}", Style::new().bold().paint(output)))?;
    }
    Ok(())
}

fn load(path: &Path, robot: &mut Runtime<Simulator>) -> std::io::Result<()> {
    match std::fs::read(path) {
        Ok(image) => {
            tracing::info!(path = %path.display(), bytes = image.len(), "store image loaded");
            robot.load_store(&image);
            Ok(())
        }
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error),
    }
}

fn save(path: &Path, image: &[u8]) {
    if let Err(error) = std::fs::write(path, image) {
        tracing::warn!(path = %path.display(), %error, "store image not saved");
    }
}
