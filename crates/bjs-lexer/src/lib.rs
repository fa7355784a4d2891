//! BanglaScript lexer: converts source text into a lossless token stream.

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer, EXPRESSION_KEYWORDS};
pub use token::{Token, TokenKind};
