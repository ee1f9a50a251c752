//! Main assembler logic
//!
//! One instruction per line, assembled in source order. Any error aborts the
//! whole assembly; no partial program is ever produced.

use crate::error::{AssembleError, Result};
use crate::lexer::Token;
use crate::parser::parse_line;
use logos::Logos;
use wordvm_spec::Program;

/// Assemble source text into a program.
pub fn assemble(source: &str) -> Result<Program> {
    let mut code = Vec::new();

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;

        let mut tokens = Vec::new();
        for (result, span) in Token::lexer(text).spanned() {
            match result {
                Ok(token) => tokens.push(token),
                Err(()) => {
                    return Err(AssembleError::InvalidToken {
                        line,
                        text: text[span].to_string(),
                    })
                }
            }
        }

        // Blank and comment-only lines assemble to nothing
        if tokens.is_empty() {
            continue;
        }

        let instruction = parse_line(&tokens, line)?;
        let word = crate::encoder::encode(&instruction)
            .map_err(|source| AssembleError::Encode { line, source })?;
        code.push(word);
    }

    Ok(Program::new(code))
}
