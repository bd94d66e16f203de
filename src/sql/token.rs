/// Token types for the SQL scanner
use phf::phf_map;

// Perfect hash map for O(1) keyword lookup
static KEYWORDS: phf::Map<&'static str, TokenType> = phf_map! {
    "select" => TokenType::Select,
    "distinct" => TokenType::Distinct,
    "from" => TokenType::From,
    "where" => TokenType::Where,
    "inner" => TokenType::Inner,
    "outer" => TokenType::Outer,
    "left" => TokenType::Left,
    "right" => TokenType::Right,
    "join" => TokenType::Join,
    "on" => TokenType::On,
    "as" => TokenType::As,
    "between" => TokenType::Between,
    "and" => TokenType::And,
    "or" => TokenType::Or,
    "xor" => TokenType::Xor,
    "not" => TokenType::Not,
    "exists" => TokenType::Exists,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    // Keywords
    Select,
    Distinct,
    From,
    Where,
    Inner,
    Outer,
    Left,
    Right,
    Join,
    On,
    As,
    Between,
    And,
    Or,
    Xor,
    Not,
    Exists,

    // Operators
    Equals,     // =
    NotEquals,  // <>
    NotEquals2, // != (alternate spelling)
    Less,       // <
    More,       // >
    Asterisk,   // *

    // Structural
    LParen,    // (
    RParen,    // )
    Comma,     // ,
    Period,    // .
    Semicolon, // ;

    // Literals
    Numeric,
    Character,
    Identifier,

    // Special
    Eof,
}

impl TokenType {
    /// Keyword lookup, case-insensitive.
    pub fn from_keyword(s: &str) -> Option<Self> {
        let lowercase = s.to_lowercase();
        KEYWORDS.get(lowercase.as_str()).copied()
    }

    /// Boolean operator tokens (AND/OR/XOR).
    pub fn is_operator(&self) -> bool {
        matches!(self, TokenType::And | TokenType::Or | TokenType::Xor)
    }

    /// Tokens that terminate a condition list.
    pub fn is_condition_break(&self) -> bool {
        matches!(
            self,
            TokenType::RParen
                | TokenType::Where
                | TokenType::Comma
                | TokenType::Join
                | TokenType::Inner
                | TokenType::Outer
                | TokenType::Left
                | TokenType::Right
                | TokenType::Semicolon
        )
    }
}

/// A classified token with its source lexeme and position.
#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }
}
