use super::{Cursor, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

pub const MAX_NAME_LENGTH: usize = 10;

/// Sensor readings that can appear in a value as `%name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Distance,
}

impl Reading {
    pub fn from_name(name: &[u8]) -> Option<Reading> {
        if name.eq_ignore_ascii_case(b"dist") {
            Some(Reading::Distance)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Reading::Distance => "dist",
        }
    }
}

/// One operand: the smallest thing a value is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Single<'a> {
    Variable(&'a [u8]),
    Number(i32),
    Reading(Reading),
}

impl<'a> std::fmt::Display for Single<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Single::Variable(name) => write!(f, "{}", String::from_utf8_lossy(name)),
            Single::Number(n) => write!(f, "{}", n),
            Single::Reading(r) => write!(f, "%{}", r.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn from_byte(b: u8) -> Option<Operator> {
        match b {
            b'+' => Some(Operator::Add),
            b'-' => Some(Operator::Subtract),
            b'*' => Some(Operator::Multiply),
            b'/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn apply(self, lhs: i32, rhs: i32) -> Result<i32> {
        let result = match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => {
                if rhs == 0 {
                    return Err(error!(DivisionByZero));
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or_else(|| error!(Overflow))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
    LessOrEqual,
    GreaterOrEqual,
    Less,
    Greater,
}

// Longest first so `<=` is never read as `<`.
const COMPARISONS: [(&str, Comparison); 8] = [
    ("==", Comparison::Equal),
    ("!=", Comparison::NotEqual),
    ("<>", Comparison::NotEqual),
    ("<=", Comparison::LessOrEqual),
    (">=", Comparison::GreaterOrEqual),
    ("<", Comparison::Less),
    (">", Comparison::Greater),
    ("=", Comparison::Equal),
];

impl Comparison {
    /// Matches a comparison operator at the cursor and returns it with
    /// the text that matched.
    pub fn match_at(cursor: &mut Cursor) -> Option<(Comparison, &'static str)> {
        for (text, comparison) in COMPARISONS.iter() {
            if cursor.starts_with(text.as_bytes()) {
                cursor.advance(text.len());
                return Some((*comparison, text));
            }
        }
        None
    }

    pub fn test(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Comparison::Equal => lhs == rhs,
            Comparison::NotEqual => lhs != rhs,
            Comparison::LessOrEqual => lhs <= rhs,
            Comparison::GreaterOrEqual => lhs >= rhs,
            Comparison::Less => lhs < rhs,
            Comparison::Greater => lhs > rhs,
        }
    }
}

/// Supplies the run-time meaning of names found in a value.
pub trait Resolve {
    fn variable(&mut self, name: &[u8]) -> Option<i32>;
    fn reading(&mut self, reading: Reading) -> i32;
}

pub fn is_identifier(name: &[u8]) -> bool {
    match name.first() {
        Some(b) if b.is_ascii_alphabetic() => {}
        _ => return false,
    }
    name.len() <= MAX_NAME_LENGTH && name.iter().all(|b| is_name_byte(*b))
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scans one operand. Leading spaces are skipped.
pub fn scan_single<'a>(cursor: &mut Cursor<'a>) -> Result<Single<'a>> {
    cursor.skip_spaces();
    match cursor.peek() {
        Some(b) if b.is_ascii_alphabetic() => {
            let name = cursor.take_while(is_name_byte);
            if name.len() > MAX_NAME_LENGTH {
                return Err(error!(InvalidVariableName));
            }
            Ok(Single::Variable(name))
        }
        Some(b'%') => {
            cursor.bump();
            let name = cursor.take_while(is_name_byte);
            match Reading::from_name(name) {
                Some(reading) => Ok(Single::Reading(reading)),
                None => Err(error!(InvalidReading)),
            }
        }
        Some(b) if b.is_ascii_digit() || b == b'+' || b == b'-' => scan_number(cursor),
        _ => Err(error!(MissingValue)),
    }
}

fn scan_number<'a>(cursor: &mut Cursor<'a>) -> Result<Single<'a>> {
    let negative = if cursor.eat(b'-') {
        true
    } else {
        cursor.eat(b'+');
        false
    };
    let digits = cursor.take_while(|b| b.is_ascii_digit());
    if digits.is_empty() {
        return Err(error!(InvalidNumber));
    }
    let mut n: i32 = 0;
    // Negative literals accumulate downward so i32::MIN is reachable.
    for d in digits {
        let d = i32::from(d - b'0');
        n = n
            .checked_mul(10)
            .and_then(|n| if negative { n.checked_sub(d) } else { n.checked_add(d) })
            .ok_or_else(|| error!(Overflow))?;
    }
    Ok(Single::Number(n))
}

/// Scans an arithmetic operator if one follows the spaces at the cursor.
/// The cursor is left alone when there is none.
pub fn scan_operator(cursor: &mut Cursor) -> Option<Operator> {
    let mut probe = cursor.clone();
    probe.skip_spaces();
    let op = Operator::from_byte(probe.peek()?)?;
    probe.bump();
    *cursor = probe;
    Some(op)
}

pub fn scan_comparison(cursor: &mut Cursor) -> Option<(Comparison, &'static str)> {
    cursor.skip_spaces();
    Comparison::match_at(cursor)
}

pub fn evaluate_single<R: Resolve + ?Sized>(single: Single, resolve: &mut R) -> Result<i32> {
    match single {
        Single::Number(n) => Ok(n),
        Single::Variable(name) => resolve
            .variable(name)
            .ok_or_else(|| error!(UndefinedVariable)),
        Single::Reading(reading) => Ok(resolve.reading(reading)),
    }
}

/// Reads `single [op single]` and computes it.
pub fn parse_value<R: Resolve + ?Sized>(cursor: &mut Cursor, resolve: &mut R) -> Result<i32> {
    let lhs = evaluate_single(scan_single(cursor)?, resolve)?;
    match scan_operator(cursor) {
        None => Ok(lhs),
        Some(op) => {
            let rhs = evaluate_single(scan_single(cursor)?, resolve)?;
            op.apply(lhs, rhs)
        }
    }
}

/// Reads `single comparison single` and tests it.
pub fn parse_condition<R: Resolve + ?Sized>(cursor: &mut Cursor, resolve: &mut R) -> Result<bool> {
    let lhs = evaluate_single(scan_single(cursor)?, resolve)?;
    let (comparison, _) = scan_comparison(cursor).ok_or_else(|| error!(MissingOperator))?;
    let rhs = evaluate_single(scan_single(cursor)?, resolve)?;
    Ok(comparison.test(lhs, rhs))
}

#[cfg(test)]
mod tests {
    use super::super::ErrorCode;
    use super::*;

    struct Env;

    impl Resolve for Env {
        fn variable(&mut self, name: &[u8]) -> Option<i32> {
            if name == b"x" {
                Some(5)
            } else {
                None
            }
        }
        fn reading(&mut self, _reading: Reading) -> i32 {
            42
        }
    }

    fn value(s: &str) -> Result<i32> {
        parse_value(&mut Cursor::new(s.as_bytes()), &mut Env)
    }

    fn condition(s: &str) -> Result<bool> {
        parse_condition(&mut Cursor::new(s.as_bytes()), &mut Env)
    }

    #[test]
    fn test_singles() {
        assert_eq!(value("12"), Ok(12));
        assert_eq!(value("-7"), Ok(-7));
        assert_eq!(value("x"), Ok(5));
        assert_eq!(value("%dist"), Ok(42));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(value("x+1"), Ok(6));
        assert_eq!(value("x * 3"), Ok(15));
        assert_eq!(value("%dist / 2"), Ok(21));
        assert_eq!(value("1/0").unwrap_err().code(), ErrorCode::DivisionByZero);
        assert_eq!(
            value("2147483647+1").unwrap_err().code(),
            ErrorCode::Overflow
        );
    }

    #[test]
    fn test_number_limits() {
        assert_eq!(value("-2147483648"), Ok(i32::MIN));
        assert_eq!(value("2147483647"), Ok(i32::MAX));
        assert_eq!(
            value("-2147483649").unwrap_err().code(),
            ErrorCode::Overflow
        );
        assert_eq!(
            value("2147483648").unwrap_err().code(),
            ErrorCode::Overflow
        );
    }

    #[test]
    fn test_value_errors() {
        assert_eq!(value("").unwrap_err().code(), ErrorCode::MissingValue);
        assert_eq!(value("-").unwrap_err().code(), ErrorCode::InvalidNumber);
        assert_eq!(value("%temp").unwrap_err().code(), ErrorCode::InvalidReading);
        assert_eq!(value("y").unwrap_err().code(), ErrorCode::UndefinedVariable);
    }

    #[test]
    fn test_comparisons_longest_first() {
        assert_eq!(condition("x<=5"), Ok(true));
        assert_eq!(condition("x<5"), Ok(false));
        assert_eq!(condition("x <> 4"), Ok(true));
        assert_eq!(condition("x=5"), Ok(true));
        assert_eq!(condition("x==5"), Ok(true));
        assert_eq!(condition("x 5").unwrap_err().code(), ErrorCode::MissingOperator);
    }

    #[test]
    fn test_identifier() {
        assert!(is_identifier(b"count_1"));
        assert!(!is_identifier(b"1count"));
        assert!(!is_identifier(b"averyverylongname"));
        assert!(!is_identifier(b""));
    }
}
