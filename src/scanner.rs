use thiserror::Error;
use tracing::{debug, trace};

use crate::token::{Literal, Token, TokenType};

/// public interface for tokenizing
///
/// Lexical errors are handed to `error_reporter` in source order and never stop the scan:
/// the returned tokens always end with a single `EOF`.
pub fn tokenize<F>(source: &str, error_reporter: F) -> Vec<Token>
where
    F: FnMut(ScanningError),
{
    Scanner::new(source, error_reporter).scan_tokens()
}

pub struct Scanner<'a, F> {
    source: &'a str,
    tokens: Vec<Token>,
    error_reporter: F,
    error_count: usize,

    // position of the start of lexeme
    current_lexeme_start: usize,
    // line the lexeme starts on, strings can span several
    current_lexeme_line: usize,
    current: usize,
    line: usize,
}

#[derive(Debug, PartialEq, Error)]
pub enum ScanningError {
    #[error("Unexpected character.")]
    UnexpectedCharacter { line: usize, character: char },
    #[error("Unterminated string.")]
    UnterminatedString {
        line: usize,
        start_line: usize,
        string_start: String,
    },
}

impl ScanningError {
    pub fn line(&self) -> usize {
        match self {
            ScanningError::UnexpectedCharacter { line, .. }
            | ScanningError::UnterminatedString { line, .. } => *line,
        }
    }
}

impl<'a, F> Scanner<'a, F>
where
    F: FnMut(ScanningError),
{
    pub fn new(source: &'a str, error_reporter: F) -> Scanner<'a, F> {
        Scanner {
            source,
            tokens: vec![],
            error_reporter,
            error_count: 0,
            current_lexeme_start: 0,
            current_lexeme_line: 1,
            current: 0,
            line: 1,
        }
    }

    /// Runs the scan to completion. Takes `self` since a scanner is good for one pass only.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            let maybe_error = self.scan_token();
            if let Err(scanning_error) = maybe_error {
                trace!(line = scanning_error.line(), "{scanning_error}");
                self.error_count += 1;
                (self.error_reporter)(scanning_error)
            }
        }
        self.tokens.push(Token::new(TokenType::EOF, "", None, self.line));
        debug!(
            tokens = self.tokens.len(),
            errors = self.error_count,
            lines = self.line,
            "finished scanning"
        );
        self.tokens
    }

    fn scan_token(&mut self) -> Result<(), ScanningError> {
        // set start of lexeme
        self.current_lexeme_start = self.current;
        self.current_lexeme_line = self.line;
        let Some(c) = self.advance() else {
            return Ok(());
        };
        let maybe_token_type = match c {
            '(' => Some(TokenType::LeftParen),
            ')' => Some(TokenType::RightParen),
            '{' => Some(TokenType::LeftBrace),
            '}' => Some(TokenType::RightBrace),
            ',' => Some(TokenType::Comma),
            '.' => Some(TokenType::Dot),
            '-' => Some(TokenType::Minus),
            '+' => Some(TokenType::Plus),
            ';' => Some(TokenType::Semicolon),
            '*' => Some(TokenType::Star),
            '!' => match self.match_one('=') {
                true => Some(TokenType::BangEqual),
                false => Some(TokenType::Bang),
            },
            '=' => match self.match_one('=') {
                true => Some(TokenType::EqualEqual),
                false => Some(TokenType::Equal),
            },
            '<' => match self.match_one('=') {
                true => Some(TokenType::LessEqual),
                false => Some(TokenType::Less),
            },
            '>' => match self.match_one('=') {
                true => Some(TokenType::GreaterEqual),
                false => Some(TokenType::Greater),
            },
            '/' => {
                if self.match_one('/') {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                    None
                } else {
                    Some(TokenType::Slash)
                }
            }
            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            }
            '"' => Some(self.consume_if_match_string()?),
            c if is_digit(c) => Some(self.consume_if_match_number()),
            c if is_alpha(c) => Some(self.consume_if_match_identifier()),
            _ => {
                return Err(ScanningError::UnexpectedCharacter {
                    line: self.line,
                    character: c,
                });
            }
        };

        if let Some(token_type) = maybe_token_type {
            self.add_token(token_type);
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn match_one(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) -> Option<char> {
        let current_char = self.peek()?;
        // cursors are byte offsets, step over the whole character
        self.current += current_char.len_utf8();
        Some(current_char)
    }

    fn add_token(&mut self, token_type: TokenType) {
        let text = &self.source[self.current_lexeme_start..self.current];
        let literal = match token_type {
            // the lexeme includes both quotes
            TokenType::String => Some(Literal::String(text[1..text.len() - 1].to_string())),
            TokenType::Number => text.parse().ok().map(Literal::Number),
            _ => None,
        };
        self.tokens.push(Token::new(
            token_type,
            text,
            literal,
            self.current_lexeme_line,
        ));
    }

    /// like advance but does not consume the character. 1 lookahead.
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// 2 lookahead
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next()?;
        chars.next()
    }

    fn consume_if_match_string(&mut self) -> Result<TokenType, ScanningError> {
        while self.peek().is_some_and(|c| c != '"') {
            if self.peek() == Some('\n') {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(ScanningError::UnterminatedString {
                line: self.line,
                start_line: self.current_lexeme_line,
                string_start: self.source[self.current_lexeme_start..self.current].to_string(),
            });
        }

        // consume closing quote
        self.advance();

        Ok(TokenType::String)
    }

    fn consume_if_match_number(&mut self) -> TokenType {
        while self.peek().is_some_and(is_digit) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(is_digit) {
            // consume the '.'
            self.advance();

            while self.peek().is_some_and(is_digit) {
                self.advance();
            }
        }

        TokenType::Number
    }

    fn consume_if_match_identifier(&mut self) -> TokenType {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let lexeme = &self.source[self.current_lexeme_start..self.current];
        match_keyword(lexeme).unwrap_or(TokenType::Identifier)
    }
}

fn match_keyword(input: &str) -> Option<TokenType> {
    match input {
        "and" => Some(TokenType::And),
        "class" => Some(TokenType::Class),
        "else" => Some(TokenType::Else),
        "false" => Some(TokenType::False),
        "fun" => Some(TokenType::Fun),
        "for" => Some(TokenType::For),
        "if" => Some(TokenType::If),
        "nil" => Some(TokenType::Nil),
        "or" => Some(TokenType::Or),
        "print" => Some(TokenType::Print),
        "return" => Some(TokenType::Return),
        "super" => Some(TokenType::Super),
        "this" => Some(TokenType::This),
        "true" => Some(TokenType::True),
        "var" => Some(TokenType::Var),
        "while" => Some(TokenType::While),
        _ => None,
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
fn is_alpha(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '_')
}
fn is_alphanumeric(c: char) -> bool {
    is_digit(c) || is_alpha(c)
}
