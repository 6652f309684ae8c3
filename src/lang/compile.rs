use super::expr::{scan_comparison, scan_operator, scan_single, Single};
use super::stack::{Construction, ConstructionKind, ConstructionStack};
use super::{is_identifier, Cursor, Error, Keyword, LineNumber};
use crate::error;
use crate::mach::{Var, STATEMENT_TERMINATOR};
use std::mem;

type Result<T> = std::result::Result<T, Error>;

const TERM: u8 = STATEMENT_TERMINATOR;

/// What a successfully compiled line means to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compiled {
    Statement,
    ProgramEnd { failed: bool },
}

/// ## Script compiler
///
/// Translates one script line at a time into byte-coded instructions.
/// The compiler owns all state that survives between lines: whether a
/// program is being compiled, the open blocks and their labels, and the
/// current indent. Only one compilation can exist per `Compiler`, and
/// every call takes it mutably, so lines cannot interleave.

#[derive(Debug, Default)]
pub struct Compiler {
    compiling: bool,
    indent: usize,
    opens_block: bool,
    label_counter: u16,
    program_error: bool,
    line_number: u16,
    stack: ConstructionStack,
}

impl Compiler {
    pub fn new() -> Compiler {
        Compiler::default()
    }

    pub fn is_compiling(&self) -> bool {
        self.compiling
    }

    pub fn has_failed(&self) -> bool {
        self.program_error
    }

    pub fn line_number(&self) -> u16 {
        self.line_number
    }

    /// Abandons any program being compiled.
    pub fn reset(&mut self) {
        *self = Compiler::default();
    }

    /// Counts a line that never reached the compiler, such as one too
    /// long for the line buffer, as a failed line.
    pub fn reject_line(&mut self) {
        self.program_error = true;
        self.line_number = self.line_number.wrapping_add(1);
    }

    fn begin(&mut self) {
        self.compiling = true;
        self.indent = 0;
        self.opens_block = false;
        self.label_counter = 0;
        self.program_error = false;
        self.line_number = 1;
        self.stack.clear();
    }

    /// Compiles one line (no terminator) and appends the instructions to
    /// `out`. Instructions emitted before an error are left in `out` and
    /// terminated.
    pub fn compile_line(&mut self, line: &[u8], vars: &mut Var, out: &mut Vec<u8>) -> Result<Compiled> {
        let compiling = self.compiling;
        let line_number: LineNumber = Some(self.line_number);
        let start = out.len();
        let result = LineCompiler {
            ctx: &mut *self,
            cursor: Cursor::new(line),
            vars: &mut *vars,
            out: &mut *out,
            dedented: false,
            last_closed: None,
            else_reopened: false,
        }
        .compile();
        if out.len() > start && out.last() != Some(&TERM) {
            out.push(TERM);
        }
        self.line_number = self.line_number.wrapping_add(1);
        result.map_err(|error| {
            self.program_error = true;
            tracing::debug!(%error, "script line rejected");
            if compiling {
                error.in_line_number(line_number)
            } else {
                error
            }
        })
    }
}

struct LineCompiler<'a, 'b> {
    ctx: &'b mut Compiler,
    cursor: Cursor<'a>,
    vars: &'b mut Var,
    out: &'b mut Vec<u8>,
    dedented: bool,
    last_closed: Option<ConstructionKind>,
    else_reopened: bool,
}

enum Command {
    Keyword(Keyword),
    System,
    Assignment,
}

impl<'a, 'b> LineCompiler<'a, 'b> {
    fn compile(mut self) -> Result<Compiled> {
        let indent = self.cursor.skip_spaces();
        if self.cursor.at_end() || self.cursor.peek() == Some(b'#') {
            return Ok(Compiled::Statement);
        }
        let command = if self.cursor.eat(b'*') {
            Command::System
        } else {
            match Keyword::match_at(&mut self.cursor) {
                Some(keyword) => Command::Keyword(keyword),
                None => Command::Assignment,
            }
        };
        let may_indent = mem::replace(&mut self.ctx.opens_block, false);
        if self.ctx.compiling {
            if indent < self.ctx.indent {
                self.dedented = true;
                let keyword = match command {
                    Command::Keyword(k) => Some(k),
                    _ => None,
                };
                self.indent_out(indent, keyword)?;
            } else if indent > self.ctx.indent {
                if !may_indent {
                    return Err(error!(IndentInwardsWithoutBlock));
                }
                self.ctx.indent = indent;
            }
        }
        match command {
            Command::System => {
                let rest = self.cursor.rest();
                self.out.extend_from_slice(rest);
                Ok(Compiled::Statement)
            }
            Command::Assignment => self.assignment().map(|_| Compiled::Statement),
            Command::Keyword(Keyword::End) => self.end(),
            Command::Keyword(keyword) => self.statement(keyword).map(|_| Compiled::Statement),
        }
    }

    fn statement(&mut self, keyword: Keyword) -> Result<()> {
        use Keyword::*;
        match keyword {
            Angry => self.emit("PF20"),
            Happy => self.emit("PF1"),
            Move => {
                self.emit("MF")?;
                self.value_intime_and_background()
            }
            Turn => {
                self.emit("MR")?;
                self.value_intime_and_background()
            }
            Arc => self.arc(),
            Delay => {
                if self.at_line_end() {
                    return Err(error!(MissingTimeInDelay));
                }
                self.emit("CD")?;
                self.value()
            }
            Colour | Color => self.colour(),
            Pixel => self.pixel(),
            Set => {
                self.cursor.skip_spaces();
                self.assignment()
            }
            If => self.compile_if(),
            While => self.compile_while(),
            Forever => self.compile_forever(),
            Else => self.compile_else(),
            Endif => self.close_explicitly(ConstructionKind::If),
            Endwhile => self.close_explicitly(ConstructionKind::While),
            Break => self.break_or_continue(true),
            Continue => self.break_or_continue(false),
            Sound => self.sound(),
            Clear => {
                if self.ctx.compiling {
                    return Err(error!(ClearInsideProgram));
                }
                self.emit("VC")
            }
            Run => {
                if self.ctx.compiling {
                    return Err(error!(RunInsideProgram));
                }
                self.emit("RS")
            }
            Stop => {
                if self.ctx.compiling {
                    return Err(error!(StopInsideProgram));
                }
                self.emit("RH")
            }
            Wait => self.emit("CA"),
            Red | Green | Blue | Yellow | Magenta | Cyan | White => {
                self.emit("PN")?;
                let initial = keyword.name().as_bytes()[0];
                self.out.push(initial);
                Ok(())
            }
            Black => self.emit("PNk"),
            Begin => {
                if self.ctx.compiling {
                    return Err(error!(BeginInsideProgram));
                }
                self.ctx.begin();
                self.emit("RC")?;
                self.out.push(TERM);
                self.emit("RM")
            }
            Print => self.print(),
            Println => {
                if self.at_line_end() {
                    return self.emit("WL");
                }
                let result = self.print();
                self.out.push(TERM);
                self.emit("WL")?;
                result
            }
            End => Err(error!(NotAStatement)),
            Do | Until | Intime | Background | Duration | Angle => Err(error!(NotAStatement)),
        }
    }

    fn emit(&mut self, s: &str) -> Result<()> {
        self.out.extend_from_slice(s.as_bytes());
        Ok(())
    }

    fn emit_label(&mut self, command: &str, label: u16) {
        self.out.extend_from_slice(command.as_bytes());
        self.out.extend_from_slice(label.to_string().as_bytes());
    }

    fn at_line_end(&mut self) -> bool {
        self.cursor.skip_spaces();
        self.cursor.at_end()
    }

    fn next_label(&mut self) -> u16 {
        self.ctx.label_counter = self.ctx.label_counter.wrapping_add(1);
        self.ctx.label_counter
    }

    fn push(&mut self, kind: ConstructionKind, label: u16) -> Result<()> {
        self.ctx.stack.push(Construction {
            kind,
            label,
            indent: self.ctx.indent,
        })
    }

    // Values

    fn single(&mut self) -> Result<()> {
        let single = scan_single(&mut self.cursor)?;
        if let Single::Variable(name) = single {
            if self.vars.find(name).is_none() {
                return Err(error!(UndefinedVariable));
            }
        }
        self.out.extend_from_slice(single.to_string().as_bytes());
        Ok(())
    }

    fn value(&mut self) -> Result<()> {
        self.single()?;
        if let Some(op) = scan_operator(&mut self.cursor) {
            self.out.push(op.symbol() as u8);
            self.single()?;
        }
        Ok(())
    }

    fn condition(&mut self) -> Result<()> {
        self.single()?;
        let (_, text) = scan_comparison(&mut self.cursor).ok_or_else(|| error!(MissingOperator))?;
        self.emit(text)?;
        self.single()
    }

    fn comma_value(&mut self, missing: Error) -> Result<()> {
        self.cursor.skip_spaces();
        if !self.cursor.eat(b',') {
            return Err(missing);
        }
        self.out.push(b',');
        if self.at_line_end() {
            return Err(missing);
        }
        self.value()
    }

    // Movement

    fn value_intime_and_background(&mut self) -> Result<()> {
        if self.at_line_end() {
            return self.emit("20000");
        }
        self.value()?;
        let mut background = false;
        if !self.at_line_end() {
            match Keyword::match_at(&mut self.cursor) {
                Some(Keyword::Intime) => {
                    self.out.push(b',');
                    if self.at_line_end() {
                        return Err(error!(MissingTimeInIntime));
                    }
                    self.value()?;
                    if !self.at_line_end() {
                        match Keyword::match_at(&mut self.cursor) {
                            Some(Keyword::Background) => background = true,
                            _ => return Err(error!(IntimeExpected)),
                        }
                    }
                }
                Some(Keyword::Background) => background = true,
                _ => return Err(error!(IntimeExpected)),
            }
        }
        if !background {
            self.out.push(TERM);
            self.emit("CA")?;
        }
        Ok(())
    }

    fn arc(&mut self) -> Result<()> {
        if self.at_line_end() {
            return Err(error!(NoRadiusInArc));
        }
        self.emit("MA")?;
        self.value()?;
        self.cursor.skip_spaces();
        if Keyword::match_at(&mut self.cursor) != Some(Keyword::Angle) {
            return Err(error!(NoAngleInArc));
        }
        self.out.push(b',');
        self.value_intime_and_background()
    }

    // Lights and sound

    fn colour(&mut self) -> Result<()> {
        if self.at_line_end() {
            return Err(error!(MissingRedValue));
        }
        self.emit("PC")?;
        self.value()?;
        self.comma_value(error!(MissingGreenValue))?;
        self.comma_value(error!(MissingBlueValue))
    }

    fn pixel(&mut self) -> Result<()> {
        if self.at_line_end() {
            return Err(error!(MissingPixelNumber));
        }
        self.emit("PI")?;
        self.value()?;
        self.comma_value(error!(MissingRedValue))?;
        self.comma_value(error!(MissingGreenValue))?;
        self.comma_value(error!(MissingBlueValue))
    }

    fn sound(&mut self) -> Result<()> {
        if self.at_line_end() {
            return Err(error!(MissingPitchInSound));
        }
        self.emit("ST")?;
        self.value()?;
        self.out.push(b',');
        let mut wait = false;
        if self.at_line_end() {
            self.emit("500")?;
        } else {
            match Keyword::match_at(&mut self.cursor) {
                Some(Keyword::Wait) => {
                    self.emit("500")?;
                    wait = true;
                }
                Some(Keyword::Duration) => {
                    self.cursor.skip_spaces();
                    self.value()?;
                    if !self.at_line_end() {
                        match Keyword::match_at(&mut self.cursor) {
                            Some(Keyword::Wait) => wait = true,
                            _ => return Err(error!(WaitExpected)),
                        }
                    }
                }
                _ => return Err(error!(DurationExpected)),
            }
        }
        self.emit(if wait { ",W" } else { ",N" })
    }

    // Variables and output

    fn assignment(&mut self) -> Result<()> {
        let mut probe = self.cursor.clone();
        let name = probe.take_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        if !is_identifier(name) {
            return Err(error!(InvalidVariableName));
        }
        probe.skip_spaces();
        if !probe.eat(b'=') {
            return Err(error!(NoEqualsInSet));
        }
        if self.vars.find(name).is_none() {
            self.vars.create(name)?;
        }
        self.cursor = probe;
        self.emit("VS")?;
        self.out.extend_from_slice(name);
        self.out.push(b'=');
        self.cursor.skip_spaces();
        self.value()
    }

    fn print(&mut self) -> Result<()> {
        self.cursor.skip_spaces();
        if self.cursor.eat(b'"') {
            self.emit("WT")?;
            let text = self.cursor.take_while(|b| b != b'"');
            self.out.extend_from_slice(text);
            if !self.cursor.eat(b'"') {
                return Err(error!(MissingCloseQuote));
            }
            Ok(())
        } else {
            self.emit("WV")?;
            self.value()
        }
    }

    // Blocks

    fn compile_if(&mut self) -> Result<()> {
        if !self.ctx.compiling {
            return Err(error!(IfOutsideProgram));
        }
        let label = self.next_label();
        self.push(ConstructionKind::If, label)?;
        self.emit("CF")?;
        let result = self.condition();
        self.emit_label(",l", label);
        self.next_label();
        self.ctx.opens_block = true;
        result
    }

    fn compile_while(&mut self) -> Result<()> {
        if !self.ctx.compiling {
            return Err(error!(WhileOutsideProgram));
        }
        let label = self.next_label();
        self.push(ConstructionKind::While, label)?;
        self.emit_label("CLl", label);
        self.out.push(TERM);
        let exit = self.next_label();
        self.ctx.opens_block = true;
        self.emit("CF")?;
        self.condition()?;
        self.emit_label(",l", exit);
        Ok(())
    }

    fn compile_forever(&mut self) -> Result<()> {
        if !self.ctx.compiling {
            return Err(error!(ForeverOutsideProgram));
        }
        let label = self.next_label();
        self.push(ConstructionKind::Forever, label)?;
        self.emit_label("CLl", label);
        self.next_label();
        self.ctx.opens_block = true;
        Ok(())
    }

    fn break_or_continue(&mut self, is_break: bool) -> Result<()> {
        if !self.ctx.compiling {
            return Err(if is_break {
                error!(BreakOutsideProgram)
            } else {
                error!(ContinueOutsideProgram)
            });
        }
        let label = match self.ctx.stack.find_loop() {
            Some(construction) => construction.label,
            None if is_break => return Err(error!(NoLoopForBreak)),
            None => return Err(error!(NoLoopForContinue)),
        };
        if is_break {
            self.emit_label("CJl", label.wrapping_add(1));
        } else {
            self.emit_label("CJl", label);
        }
        Ok(())
    }

    fn compile_else(&mut self) -> Result<()> {
        if !self.ctx.compiling {
            return Err(error!(ElseOutsideProgram));
        }
        if self.else_reopened {
            return Ok(());
        }
        match self.ctx.stack.top().copied() {
            Some(top)
                if !self.dedented
                    && top.kind == ConstructionKind::If
                    && top.indent == self.ctx.indent =>
            {
                self.reopen_for_else()
            }
            _ => Err(error!(ElseWithoutIf)),
        }
    }

    /// `endif` and `endwhile`. A block already closed by this line's
    /// dedent needs nothing more; an unindented block at this indent is
    /// closed here.
    fn close_explicitly(&mut self, kind: ConstructionKind) -> Result<()> {
        if !self.ctx.compiling {
            return Err(error!(BlockEndOutsideProgram));
        }
        let matches = |k: ConstructionKind| match kind {
            ConstructionKind::If => k == ConstructionKind::If,
            _ => k != ConstructionKind::If,
        };
        if self.dedented && (self.last_closed.map_or(false, matches) || self.else_reopened) {
            return Ok(());
        }
        match self.ctx.stack.top().copied() {
            Some(top) if !self.dedented && matches(top.kind) && top.indent == self.ctx.indent => {
                self.close_top();
                Ok(())
            }
            _ if kind == ConstructionKind::If => Err(error!(EndifWithoutIf)),
            _ => Err(error!(EndwhileWithoutWhile)),
        }
    }

    fn reopen_for_else(&mut self) -> Result<()> {
        if let Some(construction) = self.ctx.stack.pop() {
            let end = construction.label.wrapping_add(1);
            self.emit_label("CJl", end);
            self.out.push(TERM);
            self.emit_label("CLl", construction.label);
            self.ctx.stack.push(Construction {
                label: end,
                ..construction
            })?;
            self.ctx.opens_block = true;
            self.else_reopened = true;
        }
        Ok(())
    }

    fn close_top(&mut self) {
        if let Some(construction) = self.ctx.stack.pop() {
            match construction.kind {
                ConstructionKind::If => {
                    self.emit_label("CLl", construction.label);
                    self.out.push(TERM);
                }
                ConstructionKind::While | ConstructionKind::Forever => {
                    self.emit_label("CJl", construction.label);
                    self.out.push(TERM);
                    self.emit_label("CLl", construction.label.wrapping_add(1));
                    self.out.push(TERM);
                }
            }
            self.last_closed = Some(construction.kind);
        }
    }

    fn indent_out(&mut self, indent: usize, keyword: Option<Keyword>) -> Result<()> {
        while indent < self.ctx.indent {
            let top = match self.ctx.stack.top() {
                Some(top) => *top,
                None => return Err(error!(IndentOutwardsWithoutBlock)),
            };
            self.ctx.indent = top.indent;
            if top.kind == ConstructionKind::If
                && top.indent == indent
                && keyword == Some(Keyword::Else)
            {
                self.reopen_for_else()?;
            } else {
                self.close_top();
            }
        }
        if indent != self.ctx.indent {
            return Err(error!(IndentMismatch));
        }
        Ok(())
    }

    fn end(mut self) -> Result<Compiled> {
        if !self.ctx.compiling {
            return Err(error!(EndOutsideProgram));
        }
        let failed = self.ctx.program_error;
        self.emit(if failed { "RA" } else { "RX" })?;
        self.ctx.compiling = false;
        tracing::debug!(failed, "program compiled");
        Ok(Compiled::ProgramEnd { failed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn compile(lines: &[&str]) -> (Vec<u8>, Vec<Result<Compiled>>) {
        let mut compiler = Compiler::new();
        let mut vars = Var::new();
        let mut out = vec![];
        let results = lines
            .iter()
            .map(|line| compiler.compile_line(line.as_bytes(), &mut vars, &mut out))
            .collect();
        (out, results)
    }

    fn output(lines: &[&str]) -> String {
        String::from_utf8(compile(lines).0).unwrap()
    }

    fn first_error(lines: &[&str]) -> ErrorCode {
        compile(lines)
            .1
            .into_iter()
            .find_map(|r| r.err())
            .map(|e| e.code())
            .unwrap()
    }

    #[test]
    fn test_immediate_statements() {
        assert_eq!(output(&["move 50"]), "MF50\rCA\r");
        assert_eq!(output(&["move"]), "MF20000\r");
        assert_eq!(output(&["turn 90 intime 20"]), "MR90,20\rCA\r");
        assert_eq!(output(&["move 10 background"]), "MF10\r");
        assert_eq!(output(&["arc 100 angle 90"]), "MA100,90\rCA\r");
        assert_eq!(output(&["angry"]), "PF20\r");
        assert_eq!(output(&["magenta"]), "PNm\r");
        assert_eq!(output(&["black"]), "PNk\r");
        assert_eq!(output(&["colour 255, 0,10"]), "PC255,0,10\r");
        assert_eq!(output(&["sound 440"]), "ST440,500,N\r");
        assert_eq!(output(&["sound 440 duration 100 wait"]), "ST440,100,W\r");
        assert_eq!(output(&["print \"hi there\""]), "WThi there\r");
        assert_eq!(output(&["println 3"]), "WV3\rWL\r");
        assert_eq!(output(&["println"]), "WL\r");
        assert_eq!(output(&["*IV"]), "IV\r");
    }

    #[test]
    fn test_comments_and_blank_lines_emit_nothing() {
        assert_eq!(output(&["# a comment", "", "    "]), "");
    }

    #[test]
    fn test_assignment_creates_variable() {
        assert_eq!(output(&["set x = 5", "move x"]), "VSx=5\rMFx\rCA\r");
        assert_eq!(output(&["count = 1", "count = count + 1"]), "VScount=1\rVScount=count+1\r");
        assert_eq!(first_error(&["move y"]), ErrorCode::UndefinedVariable);
        assert_eq!(first_error(&["set 9 = 1"]), ErrorCode::InvalidVariableName);
        assert_eq!(first_error(&["set x 1"]), ErrorCode::NoEqualsInSet);
    }

    #[test]
    fn test_if_block() {
        assert_eq!(
            output(&["begin", "if 1 > 2", "    red", "end"]),
            "RC\rRM\rCF1>2,l1\rPNr\rCLl1\rRX\r"
        );
    }

    #[test]
    fn test_if_else_block() {
        assert_eq!(
            output(&["begin", "if 1 > 2", "  red", "else", "  green", "end"]),
            "RC\rRM\rCF1>2,l1\rPNr\rCJl2\rCLl1\rPNg\rCLl2\rRX\r"
        );
    }

    #[test]
    fn test_while_block() {
        assert_eq!(
            output(&["begin", "c = 0", "while c < 3", "  c = c + 1", "end"]),
            "RC\rRM\rVSc=0\rCLl1\rCFc<3,l2\rVSc=c+1\rCJl1\rCLl2\rRX\r"
        );
    }

    #[test]
    fn test_forever_with_break() {
        assert_eq!(
            output(&["begin", "forever", "  break", "end"]),
            "RC\rRM\rCLl1\rCJl2\rCJl1\rCLl2\rRX\r"
        );
    }

    #[test]
    fn test_forever_with_continue() {
        assert_eq!(
            output(&["begin", "forever", "  continue", "end"]),
            "RC\rRM\rCLl1\rCJl1\rCJl1\rCLl2\rRX\r"
        );
    }

    #[test]
    fn test_explicit_closers() {
        assert_eq!(
            output(&["begin", "if 1 == 1", "red", "else", "blue", "endif", "end"]),
            "RC\rRM\rCF1==1,l1\rPNr\rCJl2\rCLl1\rPNb\rCLl2\rRX\r"
        );
        assert_eq!(
            output(&["begin", "while 1 < 2", "  red", "endwhile", "end"]),
            "RC\rRM\rCLl1\rCF1<2,l2\rPNr\rCJl1\rCLl2\rRX\r"
        );
    }

    #[test]
    fn test_indent_errors() {
        assert_eq!(
            first_error(&["begin", "red", "  green"]),
            ErrorCode::IndentInwardsWithoutBlock
        );
        assert_eq!(
            first_error(&["begin", "if 1 > 2", "    red", "  green"]),
            ErrorCode::IndentMismatch
        );
    }

    #[test]
    fn test_loop_control_outside_loops() {
        assert_eq!(
            first_error(&["begin", "if 1 > 2", "  break"]),
            ErrorCode::NoLoopForBreak
        );
        assert_eq!(first_error(&["begin", "continue"]), ErrorCode::NoLoopForContinue);
        assert_eq!(first_error(&["break"]), ErrorCode::BreakOutsideProgram);
    }

    #[test]
    fn test_context_errors() {
        assert_eq!(first_error(&["if 1 > 2"]), ErrorCode::IfOutsideProgram);
        assert_eq!(first_error(&["end"]), ErrorCode::EndOutsideProgram);
        assert_eq!(first_error(&["begin", "begin"]), ErrorCode::BeginInsideProgram);
        assert_eq!(first_error(&["begin", "run"]), ErrorCode::RunInsideProgram);
        assert_eq!(first_error(&["begin", "else"]), ErrorCode::ElseWithoutIf);
        assert_eq!(first_error(&["intime 4"]), ErrorCode::NotAStatement);
    }

    #[test]
    fn test_error_marks_program_failed() {
        let (out, results) = compile(&["begin", "move y", "end"]);
        let error = results[1].clone().unwrap_err();
        assert_eq!(error.line_number(), Some(2));
        assert_eq!(results[2], Ok(Compiled::ProgramEnd { failed: true }));
        assert!(out.ends_with(b"RA\r"));
    }

    #[test]
    fn test_operand_errors() {
        assert_eq!(first_error(&["delay"]), ErrorCode::MissingTimeInDelay);
        assert_eq!(first_error(&["move 50 intime"]), ErrorCode::MissingTimeInIntime);
        assert_eq!(first_error(&["move 50zz"]), ErrorCode::IntimeExpected);
        assert_eq!(first_error(&["arc 10 90"]), ErrorCode::NoAngleInArc);
        assert_eq!(first_error(&["colour 1,2"]), ErrorCode::MissingBlueValue);
        assert_eq!(first_error(&["sound 1 loud"]), ErrorCode::DurationExpected);
        assert_eq!(first_error(&["print \"open"]), ErrorCode::MissingCloseQuote);
    }
}
