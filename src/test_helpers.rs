use crate::scanner::{tokenize, ScanningError};
use crate::token::{Token, TokenType};

// Shared by the test modules, scanning panics on the first lexical error unless errors are collected.

pub fn scan(code: &str) -> Vec<Token> {
    tokenize(code, |error| panic!("{error:?}"))
}

pub fn scan_collecting_errors(code: &str) -> (Vec<Token>, Vec<ScanningError>) {
    let mut errors = vec![];
    let tokens = tokenize(code, |error| errors.push(error));
    (tokens, errors)
}

pub fn token_types(code: &str) -> Vec<TokenType> {
    scan(code).into_iter().map(|token| token.r#type).collect()
}
