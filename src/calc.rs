//! Calculator
//!
//! Evaluates a single binary expression, `<num> <op> <num>`, with `op` one of `+ - * /`.
//! Whitespace around the operator is optional, so `5+3` and `5 + 3` are the same.

use crate::errors::ShellError;

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl TryFrom<char> for Operator {
    type Error = ShellError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(ShellError::InvalidOperator(other)),
        }
    }
}

/// A parsed `<num> <op> <num>` expression
///
/// The operator is kept as typed, it is validated by [`Expression::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub lhs: f64,
    pub operator: char,
    pub rhs: f64,
}

impl Expression {
    /// Parses an expression.
    ///
    /// # Errors
    /// [`ShellError::InvalidInput`] unless the input is a number, one operator character
    /// and another number, with nothing but whitespace after it.
    pub fn parse(input: &str) -> Result<Self, ShellError> {
        let (lhs, rest) = split_number(input.trim_start()).ok_or(ShellError::InvalidInput)?;

        let mut rest = rest.trim_start().chars();
        let operator = rest.next().ok_or(ShellError::InvalidInput)?;

        let (rhs, tail) =
            split_number(rest.as_str().trim_start()).ok_or(ShellError::InvalidInput)?;
        if !tail.trim().is_empty() {
            return Err(ShellError::InvalidInput);
        }

        Ok(Self { lhs, operator, rhs })
    }

    /// Computes the value.
    ///
    /// # Errors
    /// - [`ShellError::InvalidOperator`] for an operator other than `+ - * /`
    /// - [`ShellError::DivisionByZero`] when dividing by zero
    pub fn evaluate(&self) -> Result<f64, ShellError> {
        let Self { lhs, rhs, .. } = *self;
        match Operator::try_from(self.operator)? {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div if rhs == 0.0 => Err(ShellError::DivisionByZero),
            Operator::Div => Ok(lhs / rhs),
        }
    }
}

/// Parses and evaluates an expression in one go.
pub fn evaluate(input: &str) -> Result<f64, ShellError> {
    Expression::parse(input)?.evaluate()
}

/// Formats a result the way the calculator prints it, with two decimals.
pub fn format_result(value: f64) -> String {
    format!("{value:.2}")
}

/// Splits the longest decimal literal off the front of `input`.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional exponent.
/// An `e` that is not followed by exponent digits is left in the rest.
fn split_number(input: &str) -> Option<(f64, &str)> {
    let bytes = input.as_bytes();
    let digits_from = |mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };

    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    let value = input[..end].parse::<f64>().ok()?;
    Some((value, &input[end..]))
}
