//! Scanner for the Lox scripting language: turns source text into tokens for a parser.

pub mod reporter;
pub mod repl;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod test_helpers;
