use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line,
        }
    }
}

/// Every failure the script compiler, the value evaluator or the
/// program store can report.
/// The discriminant is the number shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidVariableName = 1,
    TooManyVariables = 2,
    NoEqualsInSet = 3,
    UndefinedVariable = 4,
    InvalidNumber = 5,
    InvalidReading = 6,
    MissingValue = 7,
    MissingTimeInIntime = 8,
    IntimeExpected = 9,
    NoRadiusInArc = 10,
    NoAngleInArc = 11,
    MissingTimeInDelay = 12,
    MissingRedValue = 13,
    MissingGreenValue = 14,
    MissingBlueValue = 15,
    MissingPixelNumber = 16,
    MissingPitchInSound = 17,
    DurationExpected = 18,
    WaitExpected = 19,
    MissingOperator = 20,
    MissingCloseQuote = 21,
    IfOutsideProgram = 22,
    ElseOutsideProgram = 23,
    WhileOutsideProgram = 24,
    ForeverOutsideProgram = 25,
    BreakOutsideProgram = 26,
    ContinueOutsideProgram = 27,
    EndOutsideProgram = 28,
    BlockEndOutsideProgram = 29,
    ClearInsideProgram = 30,
    RunInsideProgram = 31,
    StopInsideProgram = 32,
    BeginInsideProgram = 33,
    NoLoopForBreak = 34,
    NoLoopForContinue = 35,
    IndentOutwardsWithoutBlock = 36,
    IndentMismatch = 37,
    IndentInwardsWithoutBlock = 38,
    ElseWithoutIf = 39,
    EndifWithoutIf = 40,
    EndwhileWithoutWhile = 41,
    NotAStatement = 42,
    ConstructionStackFull = 43,
    LineTooLong = 44,
    DivisionByZero = 45,
    Overflow = 46,
    StoreEnd = 47,
}

impl ErrorCode {
    pub fn description(self) -> &'static str {
        use ErrorCode::*;
        match self {
            InvalidVariableName => "INVALID VARIABLE NAME",
            TooManyVariables => "TOO MANY VARIABLES",
            NoEqualsInSet => "NO EQUALS IN SET",
            UndefinedVariable => "VARIABLE USED BEFORE IT WAS CREATED",
            InvalidNumber => "INVALID DIGIT IN NUMBER",
            InvalidReading => "INVALID READING DEVICE",
            MissingValue => "MISSING VALUE",
            MissingTimeInIntime => "MISSING TIME VALUE IN INTIME",
            IntimeExpected => "INTIME EXPECTED",
            NoRadiusInArc => "NO RADIUS IN ARC",
            NoAngleInArc => "NO ANGLE IN ARC",
            MissingTimeInDelay => "MISSING TIME IN DELAY",
            MissingRedValue => "MISSING RED VALUE",
            MissingGreenValue => "MISSING GREEN VALUE",
            MissingBlueValue => "MISSING BLUE VALUE",
            MissingPixelNumber => "MISSING PIXEL NUMBER",
            MissingPitchInSound => "MISSING PITCH IN SOUND",
            DurationExpected => "DURATION EXPECTED",
            WaitExpected => "WAIT EXPECTED AFTER DURATION",
            MissingOperator => "MISSING OPERATOR IN COMPARE",
            MissingCloseQuote => "MISSING CLOSE QUOTE",
            IfOutsideProgram => "IF CANNOT BE USED OUTSIDE A PROGRAM",
            ElseOutsideProgram => "ELSE CANNOT BE USED OUTSIDE A PROGRAM",
            WhileOutsideProgram => "WHILE CANNOT BE USED OUTSIDE A PROGRAM",
            ForeverOutsideProgram => "FOREVER CANNOT BE USED OUTSIDE A PROGRAM",
            BreakOutsideProgram => "BREAK CANNOT BE USED OUTSIDE A PROGRAM",
            ContinueOutsideProgram => "CONTINUE CANNOT BE USED OUTSIDE A PROGRAM",
            EndOutsideProgram => "END WHEN NOT COMPILING PROGRAM",
            BlockEndOutsideProgram => "BLOCK END OUTSIDE A PROGRAM",
            ClearInsideProgram => "CLEAR WHEN COMPILING PROGRAM",
            RunInsideProgram => "RUN WHEN COMPILING PROGRAM",
            StopInsideProgram => "STOP WHEN COMPILING PROGRAM",
            BeginInsideProgram => "BEGIN WHEN COMPILING PROGRAM",
            NoLoopForBreak => "BREAK WITHOUT ENCLOSING LOOP",
            NoLoopForContinue => "CONTINUE WITHOUT ENCLOSING LOOP",
            IndentOutwardsWithoutBlock => "INDENT OUTWARDS WITHOUT ENCLOSING COMMAND",
            IndentMismatch => "INDENT DOES NOT MATCH ENCLOSING STATEMENT",
            IndentInwardsWithoutBlock => "INDENT INWARDS WITHOUT A VALID ENCLOSING STATEMENT",
            ElseWithoutIf => "ELSE WITHOUT IF",
            EndifWithoutIf => "ENDIF WITHOUT IF",
            EndwhileWithoutWhile => "ENDWHILE WITHOUT WHILE",
            NotAStatement => "KEYWORD CANNOT START A STATEMENT",
            ConstructionStackFull => "BLOCKS NESTED TOO DEEPLY",
            LineTooLong => "LINE BUFFER OVERFLOW",
            DivisionByZero => "DIVISION BY ZERO",
            Overflow => "OVERFLOW",
            StoreEnd => "EEPROM END",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code = self.code as u16;
        match self.line_number {
            Some(line_number) => write!(
                f,
                "ERROR {} {} IN LINE {}",
                code,
                self.code.description(),
                line_number
            ),
            None => write!(f, "ERROR {} {}", code, self.code.description()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_line_number() {
        let e = error!(MissingTimeInDelay, Some(3));
        assert_eq!(e.to_string(), "ERROR 12 MISSING TIME IN DELAY IN LINE 3");
    }

    #[test]
    fn test_display_direct() {
        let e = error!(UndefinedVariable);
        assert_eq!(e.code(), ErrorCode::UndefinedVariable);
        assert_eq!(e.to_string(), "ERROR 4 VARIABLE USED BEFORE IT WAS CREATED");
    }
}
