//! # Lexer for the wordvm Assembly Language
//!
//! Lines are tokenized independently. Spaces, tabs, and commas all separate
//! tokens; `//` starts a comment running to end of line.

use logos::Logos;

/// Tokens of one source line
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r,]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    /// Register reference: `R` followed by a decimal index
    #[regex(r"R[0-9]+", |lex| lex.slice()[1..].parse().ok())]
    Register(u32),

    /// Mnemonic (lowercase only; the language is case-sensitive)
    #[regex(r"[a-z]+", |lex| lex.slice().to_string())]
    Mnemonic(String),

    /// Non-negative decimal literal
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Number(u32),
}

impl Token {
    /// Short description for error messages
    pub fn describe(&self) -> String {
        match self {
            Token::Register(index) => format!("R{index}"),
            Token::Mnemonic(text) => text.clone(),
            Token::Number(value) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_instruction() {
        let mut lex = Token::lexer("add R3 R1 R2");
        assert_eq!(lex.next(), Some(Ok(Token::Mnemonic("add".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Register(3))));
        assert_eq!(lex.next(), Some(Ok(Token::Register(1))));
        assert_eq!(lex.next(), Some(Ok(Token::Register(2))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_commas_separate_tokens() {
        let mut lex = Token::lexer("ifeq R5,R2,R3");
        assert_eq!(lex.next(), Some(Ok(Token::Mnemonic("ifeq".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Register(5))));
        assert_eq!(lex.next(), Some(Ok(Token::Register(2))));
        assert_eq!(lex.next(), Some(Ok(Token::Register(3))));
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        let mut lex = Token::lexer("halt // stop here R1 55");
        assert_eq!(lex.next(), Some(Ok(Token::Mnemonic("halt".to_string()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_numbers() {
        let mut lex = Token::lexer("const R1 4194303");
        assert_eq!(lex.next(), Some(Ok(Token::Mnemonic("const".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Register(1))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(4194303))));
    }

    #[test]
    fn test_malformed_register_is_an_error() {
        // "Rx" is neither a register nor a lowercase mnemonic
        let mut lex = Token::lexer("goto Rx");
        assert_eq!(lex.next(), Some(Ok(Token::Mnemonic("goto".to_string()))));
        assert!(matches!(lex.next(), Some(Err(_))));
    }

    #[test]
    fn test_uppercase_mnemonic_is_an_error() {
        let mut lex = Token::lexer("HALT");
        assert!(matches!(lex.next(), Some(Err(_))));
    }
}
