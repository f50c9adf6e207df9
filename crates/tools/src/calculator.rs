//! Arithmetic calculator tool
//!
//! Evaluates plain math expressions: `+ - * / **`, parentheses and unary
//! minus. Input is validated against a small character whitelist before
//! parsing so arbitrary text never reaches the evaluator.

use thiserror::Error;

use crate::Tool;

/// Errors produced while evaluating an expression
///
/// Display strings are chat-facing; the tool prefixes them with `Error:`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid characters in expression. Only numbers and operators (+, -, *, /, **) are allowed")]
    InvalidCharacters,

    #[error("Mismatched parentheses in expression")]
    MismatchedParens,

    #[error("Invalid mathematical expression. Please check your syntax")]
    Syntax,

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Result is infinity (number too large)")]
    Overflow,

    #[error("Result is not a number (invalid operation)")]
    NotANumber,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Pow,
    LParen,
    RParen,
}

fn lex(expr: &str) -> Result<Vec<Token>, CalcError> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' => i += 1,
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token::Pow);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                let value = literal.parse::<f64>().map_err(|_| CalcError::Syntax)?;
                tokens.push(Token::Number(value));
            }
            _ => return Err(CalcError::InvalidCharacters),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.advance();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// term := unary (('*' | '/') unary)*
    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.unary()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.advance();
                    value *= self.unary()?;
                }
                Token::Slash => {
                    self.advance();
                    let divisor = self.unary()?;
                    if divisor == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// unary := ('-' | '+') unary | power
    ///
    /// Exponentiation binds tighter than unary minus, so -2**2 is -4.
    fn unary(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                Ok(-self.unary()?)
            }
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            _ => self.power(),
        }
    }

    /// power := atom ('**' unary)?
    fn power(&mut self) -> Result<f64, CalcError> {
        let base = self.atom()?;
        if self.peek() == Some(Token::Pow) {
            self.advance();
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    /// atom := number | '(' expr ')'
    fn atom(&mut self) -> Result<f64, CalcError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(CalcError::Syntax),
                }
            }
            _ => Err(CalcError::Syntax),
        }
    }
}

/// Evaluate a math expression
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    let open = expr.chars().filter(|c| *c == '(').count();
    let close = expr.chars().filter(|c| *c == ')').count();
    if open != close {
        return Err(CalcError::MismatchedParens);
    }

    let tokens = lex(expr)?;
    if tokens.is_empty() {
        return Err(CalcError::Syntax);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let result = parser.expr()?;

    if parser.pos != parser.tokens.len() {
        return Err(CalcError::Syntax);
    }

    if result.is_nan() {
        return Err(CalcError::NotANumber);
    }
    if result.is_infinite() {
        return Err(CalcError::Overflow);
    }

    Ok(result)
}

/// Format a result, dropping the fraction when the value is a whole number
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// A calculator tool that evaluates mathematical expressions
#[derive(Debug, Default)]
pub struct CalculatorTool;

impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Useful for performing mathematical calculations. Input should be a valid mathematical \
         expression like '5+3' or '10*2'. Supports +, -, *, /, ** (power), and parentheses."
    }

    fn run(&self, query: &str) -> String {
        let query = query.trim();

        if query.is_empty() {
            return "Error: Please provide a mathematical expression to calculate. \
                    For example: 'Calculate 5 + 3'"
                .to_string();
        }

        match evaluate(query) {
            Ok(result) => format!("The result of {} is {}", query, format_number(result)),
            Err(err) => format!("Error: {}.", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_addition() {
        let result = CalculatorTool.run("5+3");
        assert!(result.contains('8'));
        assert!(result.contains("5+3"));
    }

    #[test]
    fn test_multiplication() {
        assert!(CalculatorTool.run("10*2").contains("20"));
    }

    #[test]
    fn test_complex_expression() {
        assert!(CalculatorTool.run("(5+3)*2").contains("16"));
    }

    #[test]
    fn test_division() {
        assert!(CalculatorTool.run("10/2").contains('5'));
    }

    #[test]
    fn test_power() {
        assert!(CalculatorTool.run("2**3").contains('8'));
    }

    #[test]
    fn test_division_by_zero() {
        let result = CalculatorTool.run("5/0");
        assert!(result.contains("Error"));
        assert!(result.to_lowercase().contains("zero"));
    }

    #[test]
    fn test_invalid_expression() {
        assert!(CalculatorTool.run("5+*3").contains("Error"));
    }

    #[test]
    fn test_invalid_characters() {
        let result = CalculatorTool.run("5+3; import os");
        assert!(result.contains("Error"));
        assert!(result.contains("Invalid characters"));
    }

    #[test]
    fn test_mismatched_parens() {
        let result = CalculatorTool.run("(5+3");
        assert!(result.contains("Mismatched parentheses"));
    }

    #[test]
    fn test_empty_input() {
        let result = CalculatorTool.run("   ");
        assert!(result.contains("provide a mathematical expression"));
    }

    #[test]
    fn test_evaluate_precedence() {
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
        assert_eq!(evaluate("2**3**2").unwrap(), 512.0);
        assert_eq!(evaluate("-2**2").unwrap(), -4.0);
    }

    #[test]
    fn test_evaluate_unary_minus() {
        assert_eq!(evaluate("-5+3").unwrap(), -2.0);
        assert_eq!(evaluate("2*-3").unwrap(), -6.0);
    }

    #[test]
    fn test_evaluate_decimal() {
        assert_eq!(evaluate("2.5*2").unwrap(), 5.0);
    }

    #[test]
    fn test_whole_number_formatting() {
        let result = CalculatorTool.run("7.0+3.0");
        assert!(result.ends_with("is 10"), "unexpected reply: {}", result);
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert_eq!(evaluate("5 5"), Err(CalcError::Syntax));
        assert_eq!(evaluate("()"), Err(CalcError::Syntax));
    }
}
