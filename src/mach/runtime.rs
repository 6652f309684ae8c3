use super::{
    Assembler, Config, Download, Downloader, Hardware, Program, ProgramState, Store, Var,
    PROGRAM_TERMINATOR, STATEMENT_TERMINATOR,
};
use crate::lang::{Compiled, Compiler, LineReader};

/// Where protocol bytes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    ExecuteImmediately,
    StoreProgram,
}

/// ## Diagnostic level
///
/// A bit set selecting optional output.
///
/// | Bit | Output |
/// |-----|--------|
/// | 1 | `XYOK` / `XYFail` confirmation of every instruction |
/// | 2 | `Offset: n` before each stored statement runs |
/// | 4 | Echo of downloaded program bytes |
/// | 8 | Listing of a program once its download completes |

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics(u8);

impl Diagnostics {
    pub const CONFIRMATION: u8 = 1;
    pub const LINE_NUMBERS: u8 = 2;
    pub const ECHO_DOWNLOADS: u8 = 4;
    pub const DUMP_DOWNLOADS: u8 = 8;

    pub fn new(level: u8) -> Diagnostics {
        Diagnostics(level)
    }
    pub fn level(self) -> u8 {
        self.0
    }
    pub fn set_level(&mut self, level: u8) {
        self.0 = level;
    }
    pub fn confirm(self) -> bool {
        self.0 & Self::CONFIRMATION != 0
    }
    pub fn line_numbers(self) -> bool {
        self.0 & Self::LINE_NUMBERS != 0
    }
    pub fn echo_downloads(self) -> bool {
        self.0 & Self::ECHO_DOWNLOADS != 0
    }
    pub fn dump_downloads(self) -> bool {
        self.0 & Self::DUMP_DOWNLOADS != 0
    }
}

/// ## The robot's command interpreter
///
/// Owns everything between the serial line and the hardware. Script
/// text arrives through [`receive_script_byte`](Runtime::receive_script_byte)
/// and is compiled a line at a time; the resulting instructions, and any
/// raw protocol bytes given to [`receive`](Runtime::receive), are either
/// carried out at once or stored as a program, depending on the
/// [`DeviceState`]. [`tick`](Runtime::tick) advances a stored program by
/// one statement. Text the robot would write back to the host collects
/// in an output buffer; take it with [`take_output`](Runtime::take_output).

pub struct Runtime<H: Hardware> {
    pub(super) hardware: H,
    pub(super) config: Config,
    pub(super) store: Store,
    pub(super) vars: Var,
    pub(super) program: Program,
    pub(super) device: DeviceState,
    pub(super) diagnostics: Diagnostics,
    compiler: Compiler,
    script: LineReader,
    serial: Assembler,
    fetch: Assembler,
    download: Downloader,
    output: String,
}

impl<H: Hardware> Runtime<H> {
    pub fn new(hardware: H) -> Runtime<H> {
        Runtime::with_config(hardware, Config::default())
    }

    pub fn with_config(hardware: H, config: Config) -> Runtime<H> {
        let store = Store::new(config.store_size, config.program_offset);
        let download = Downloader::new(store.program_offset());
        let diagnostics = Diagnostics::new(config.diagnostics);
        Runtime {
            hardware,
            config,
            store,
            vars: Var::new(),
            program: Program::new(),
            device: DeviceState::ExecuteImmediately,
            diagnostics,
            compiler: Compiler::new(),
            script: LineReader::new(),
            serial: Assembler::new(),
            fetch: Assembler::new(),
            download,
            output: String::new(),
        }
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hardware
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn program_state(&self) -> ProgramState {
        self.program.state
    }

    pub fn program_counter(&self) -> usize {
        self.program.pc
    }

    pub fn device_state(&self) -> DeviceState {
        self.device
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    pub fn set_diagnostics(&mut self, level: u8) {
        self.diagnostics.set_level(level);
    }

    pub fn is_compiling(&self) -> bool {
        self.compiler.is_compiling()
    }

    /// Everything written to the host since the last call.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Replaces the store contents with a saved image.
    pub fn load_store(&mut self, image: &[u8]) {
        self.halt_program();
        self.store.load(image);
    }

    /// Starts the stored program, if a valid one is present.
    pub fn power_on(&mut self) {
        if self.store.is_program_stored() {
            tracing::info!("stored program found, starting");
            self.start_program(self.store.program_offset());
        } else {
            tracing::debug!("no stored program");
        }
    }

    /// Stops a running program and the motors, as if `RH` had arrived.
    pub fn interrupt(&mut self) {
        tracing::info!(pc = self.program.pc, "interrupted");
        self.halt_program();
    }

    /// Feeds one line of script followed by a line terminator.
    pub fn enter(&mut self, line: &str) {
        for b in line.bytes() {
            self.receive_script_byte(b);
        }
        self.receive_script_byte(STATEMENT_TERMINATOR);
    }

    /// Drains the waiting serial bytes, then runs one tick.
    pub fn update(&mut self, script: &[u8]) {
        for b in script {
            self.receive_script_byte(*b);
        }
        self.tick();
    }

    /// One byte of script text from the host.
    pub fn receive_script_byte(&mut self, b: u8) {
        match self.script.accept(b) {
            None => {}
            Some(Err(error)) => {
                let error = if self.compiler.is_compiling() {
                    error.in_line_number(Some(self.compiler.line_number()))
                } else {
                    error
                };
                self.compiler.reject_line();
                self.println(&error.to_string());
            }
            Some(Ok(line)) => self.compile(&line),
        }
    }

    fn compile(&mut self, line: &[u8]) {
        let mut out = Vec::new();
        match self.compiler.compile_line(line, &mut self.vars, &mut out) {
            Ok(Compiled::Statement) => {}
            Ok(Compiled::ProgramEnd { failed }) => {
                self.println(if failed { "Errors" } else { "OK" });
            }
            Err(error) => {
                let text = format!("{}: {}", error, String::from_utf8_lossy(line));
                self.println(&text);
            }
        }
        for b in out {
            self.receive(b);
        }
    }

    /// One byte of the instruction protocol.
    pub fn receive(&mut self, b: u8) {
        match self.device {
            DeviceState::ExecuteImmediately => {
                if let Some(instruction) = self.serial.accept(b) {
                    self.dispatch(&instruction);
                }
            }
            DeviceState::StoreProgram => match self.download.accept(b) {
                Download::Ignore => {}
                Download::Store(b) => self.store_program_byte(b),
                Download::Finish => self.finish_download(),
                Download::Abort => self.abort_download(),
            },
        }
    }

    /// Advances the stored program by at most one statement.
    pub fn tick(&mut self) {
        match self.program.state {
            ProgramState::Active => self.step(),
            ProgramState::AwaitingMove => {
                let moving = self.hardware.motors_moving();
                self.program.poll(moving, self.hardware.millis());
            }
            ProgramState::AwaitingDelay => {
                self.program.poll(false, self.hardware.millis());
            }
            ProgramState::Stopped | ProgramState::Paused => {}
        }
    }

    fn step(&mut self) {
        if self.diagnostics.line_numbers() {
            let line = format!("Offset: {}", self.program.pc);
            self.println(&line);
        }
        loop {
            let b = match self.store.read(self.program.pc) {
                Some(b) => b,
                None => {
                    self.halt_program();
                    return;
                }
            };
            self.program.pc += 1;
            if b == PROGRAM_TERMINATOR || self.program.pc >= self.store.size() {
                tracing::debug!(pc = self.program.pc, "program ended");
                self.halt_program();
                return;
            }
            if let Some(instruction) = self.fetch.accept(b) {
                self.dispatch(&instruction);
            }
            if b == STATEMENT_TERMINATOR {
                return;
            }
        }
    }

    pub(super) fn start_program(&mut self, pos: usize) {
        if !self.store.is_program_stored() {
            tracing::debug!("start ignored, no program stored");
            return;
        }
        self.vars.clear();
        self.hardware.set_all_lights_off();
        self.fetch.reset();
        self.program.start(pos);
        tracing::debug!(pos, "program started");
    }

    pub(super) fn halt_program(&mut self) {
        self.hardware.motor_stop();
        self.program.halt();
    }

    pub(super) fn start_download(&mut self) {
        self.halt_program();
        self.store.clear_program();
        self.download = Downloader::new(self.store.program_offset());
        self.device = DeviceState::StoreProgram;
        self.hardware.start_busy_pixel(128, 128, 128);
        tracing::debug!("download started");
    }

    fn end_download(&mut self) {
        self.hardware.stop_busy_pixel();
        self.device = DeviceState::ExecuteImmediately;
        self.serial.reset();
    }

    fn store_program_byte(&mut self, b: u8) {
        let pos = self.download.advance();
        if self.store.write(pos, b).is_err() {
            if self.download.mark_overrun() {
                tracing::warn!(pos, "program does not fit in the store");
                self.println("Eeprom end");
            }
            return;
        }
        if self.diagnostics.echo_downloads() {
            if b == STATEMENT_TERMINATOR {
                self.print("\n");
            } else {
                self.output.push(char::from(b));
            }
        }
        if b == STATEMENT_TERMINATOR {
            self.hardware.update_busy_pixel();
        }
    }

    fn finish_download(&mut self) {
        self.end_download();
        let pos = self.download.advance();
        if self.download.overrun() || self.store.write(pos, PROGRAM_TERMINATOR).is_err() {
            if self.download.mark_overrun() {
                self.println("Eeprom end");
            }
            tracing::warn!("download discarded");
            self.store.clear_program();
            return;
        }
        self.store.set_program_stored();
        tracing::info!(bytes = pos - self.store.program_offset(), "program stored");
        if self.diagnostics.dump_downloads() {
            let dump = self.store.dump(self.store.program_offset());
            self.print(&dump);
        }
        self.start_program(self.store.program_offset());
    }

    fn abort_download(&mut self) {
        self.println("RA");
        self.end_download();
        self.store.clear_program();
        tracing::debug!("download aborted");
    }

    // Output

    pub(super) fn print(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub(super) fn println(&mut self, s: &str) {
        self.output.push_str(s);
        self.output.push('\n');
    }

    pub(super) fn confirm(&mut self, s: &str) {
        if self.diagnostics.confirm() {
            self.println(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::{Call, Recorder};

    fn runtime() -> Runtime<Recorder> {
        Runtime::new(Recorder::new())
    }

    fn send(r: &mut Runtime<Recorder>, bytes: &[u8]) {
        for b in bytes {
            r.receive(*b);
        }
    }

    #[test]
    fn test_immediate_instruction() {
        let mut r = runtime();
        r.set_diagnostics(1);
        send(&mut r, b"MS\r");
        assert_eq!(r.take_output(), "MSOK\n");
        assert_eq!(r.hardware().calls, vec![Call::MotorStop]);
    }

    #[test]
    fn test_download_starts_program() {
        let mut r = runtime();
        send(&mut r, b"RM\rPNr\rRX\r");
        assert_eq!(r.device_state(), DeviceState::ExecuteImmediately);
        assert_eq!(r.program_state(), ProgramState::Active);
        assert_eq!(r.store().program_bytes(), b"PNr\r");
        r.tick();
        r.tick();
        assert_eq!(r.program_state(), ProgramState::Stopped);
        assert!(r
            .hardware()
            .calls
            .contains(&Call::Flicker(255, 0, 0, 0, 200)));
    }

    #[test]
    fn test_download_overrun() {
        let mut r = Runtime::with_config(
            Recorder::new(),
            Config {
                store_size: 24,
                program_offset: 20,
                ..Config::default()
            },
        );
        send(&mut r, b"RM\rPNr\rPNg\rRX\r");
        assert_eq!(r.take_output(), "Eeprom end\n");
        assert!(!r.store().is_program_stored());
        assert_eq!(r.program_state(), ProgramState::Stopped);
    }

    #[test]
    fn test_offsets_reported() {
        let mut r = runtime();
        send(&mut r, b"RM\rCLa\rRX\r");
        r.set_diagnostics(Diagnostics::LINE_NUMBERS);
        r.tick();
        assert_eq!(r.take_output(), "Offset: 20\n");
    }
}
