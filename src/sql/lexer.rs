/// SQL scanner - classifies source characters into tokens on demand

use super::token::{Token, TokenType};
use crate::error::{ParadoxError, Result};

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// True when another token remains after whitespace and comments.
    ///
    /// An unterminated block comment is left in place and reported by
    /// the following `next_token` call.
    pub fn has_next(&mut self) -> bool {
        let _ = self.skip_separators();
        !self.is_eof()
    }

    /// Read every remaining token, ending with a single Eof token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.token_type == TokenType::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_separators()?;

        let line = self.line;
        let column = self.column;

        if self.is_eof() {
            return Ok(Token::new(TokenType::Eof, "", line, column));
        }

        let ch = self.current_char();
        match ch {
            '\'' => self.read_character(line, column),
            '"' => self.read_delimited_identifier('"', '"', line, column),
            '[' => self.read_delimited_identifier('[', ']', line, column),
            '0'..='9' => self.read_numeric(line, column),
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.read_identifier(line, column)),
            '=' => {
                self.advance();
                Ok(Token::new(TokenType::Equals, "=", line, column))
            }
            '!' => {
                self.advance();
                if self.current_char() == '=' {
                    self.advance();
                    Ok(Token::new(TokenType::NotEquals2, "!=", line, column))
                } else {
                    Err(ParadoxError::InvalidSql(format!(
                        "Unexpected character '!' at line {} column {}",
                        line, column
                    )))
                }
            }
            '<' => {
                self.advance();
                if self.current_char() == '>' {
                    self.advance();
                    Ok(Token::new(TokenType::NotEquals, "<>", line, column))
                } else {
                    Ok(Token::new(TokenType::Less, "<", line, column))
                }
            }
            '>' => {
                self.advance();
                Ok(Token::new(TokenType::More, ">", line, column))
            }
            '*' => {
                self.advance();
                Ok(Token::new(TokenType::Asterisk, "*", line, column))
            }
            '(' => {
                self.advance();
                Ok(Token::new(TokenType::LParen, "(", line, column))
            }
            ')' => {
                self.advance();
                Ok(Token::new(TokenType::RParen, ")", line, column))
            }
            ',' => {
                self.advance();
                Ok(Token::new(TokenType::Comma, ",", line, column))
            }
            '.' => {
                self.advance();
                Ok(Token::new(TokenType::Period, ".", line, column))
            }
            ';' => {
                self.advance();
                Ok(Token::new(TokenType::Semicolon, ";", line, column))
            }
            _ => Err(ParadoxError::InvalidSql(format!(
                "Unexpected character '{}' at line {} column {}",
                ch, line, column
            ))),
        }
    }

    fn current_char(&self) -> char {
        if self.is_eof() {
            '\0'
        } else {
            self.input[self.position]
        }
    }

    fn peek_char(&self) -> Option<char> {
        if self.position + 1 < self.input.len() {
            Some(self.input[self.position + 1])
        } else {
            None
        }
    }

    fn advance(&mut self) {
        if !self.is_eof() {
            if self.input[self.position] == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.position += 1;
        }
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Skip whitespace, `--` line comments and `/* */` block comments.
    fn skip_separators(&mut self) -> Result<()> {
        loop {
            while !self.is_eof() && self.current_char().is_whitespace() {
                self.advance();
            }
            if self.current_char() == '-' && self.peek_char() == Some('-') {
                while !self.is_eof() && self.current_char() != '\n' {
                    self.advance();
                }
                continue;
            }
            if self.current_char() == '/' && self.peek_char() == Some('*') {
                // Position stays on the opening '/' when unterminated,
                // so the error is reported on every subsequent call.
                let mut probe = self.position + 2;
                let mut closed = false;
                while probe < self.input.len() {
                    if self.input[probe] == '*' && self.input.get(probe + 1) == Some(&'/') {
                        closed = true;
                        break;
                    }
                    probe += 1;
                }
                if !closed {
                    return Err(ParadoxError::InvalidSql(format!(
                        "Unterminated block comment at line {} column {}",
                        self.line, self.column
                    )));
                }
                while self.position <= probe + 1 {
                    self.advance();
                }
                continue;
            }
            return Ok(());
        }
    }

    /// Single-quoted character literal; a doubled quote escapes.
    fn read_character(&mut self, line: usize, column: usize) -> Result<Token> {
        let value = self.read_quoted('\'', '\'')?;
        Ok(Token::new(TokenType::Character, value, line, column))
    }

    /// Delimited identifier, verbatim lexeme, keyword promotion suppressed.
    fn read_delimited_identifier(
        &mut self,
        open: char,
        close: char,
        line: usize,
        column: usize,
    ) -> Result<Token> {
        let value = self.read_quoted(open, close)?;
        Ok(Token::new(TokenType::Identifier, value, line, column))
    }

    fn read_quoted(&mut self, open: char, close: char) -> Result<String> {
        self.advance(); // skip opening delimiter
        let mut value = String::new();
        loop {
            if self.is_eof() {
                return Err(ParadoxError::InvalidSql(format!(
                    "Unterminated {}{}{} literal",
                    open, value, close
                )));
            }
            let ch = self.current_char();
            if ch == close {
                // A doubled closing delimiter escapes itself
                if self.peek_char() == Some(close) && open == close {
                    value.push(close);
                    self.advance();
                    self.advance();
                    continue;
                }
                self.advance();
                return Ok(value);
            }
            value.push(ch);
            self.advance();
        }
    }

    /// Digits, optional fraction, optional exponent. The lexeme is kept
    /// verbatim; numeric interpretation happens at evaluation time.
    fn read_numeric(&mut self, line: usize, column: usize) -> Result<Token> {
        let mut value = String::new();

        while !self.is_eof() && self.current_char().is_ascii_digit() {
            value.push(self.current_char());
            self.advance();
        }

        if self.current_char() == '.' && self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            value.push('.');
            self.advance();
            while !self.is_eof() && self.current_char().is_ascii_digit() {
                value.push(self.current_char());
                self.advance();
            }
        }

        if self.current_char() == 'e' || self.current_char() == 'E' {
            value.push(self.current_char());
            self.advance();
            if self.current_char() == '+' || self.current_char() == '-' {
                value.push(self.current_char());
                self.advance();
            }
            if !self.current_char().is_ascii_digit() {
                return Err(ParadoxError::InvalidSql(format!(
                    "Invalid number '{}' at line {} column {}",
                    value, line, column
                )));
            }
            while !self.is_eof() && self.current_char().is_ascii_digit() {
                value.push(self.current_char());
                self.advance();
            }
        }

        Ok(Token::new(TokenType::Numeric, value, line, column))
    }

    fn read_identifier(&mut self, line: usize, column: usize) -> Token {
        let mut value = String::new();

        while !self.is_eof() {
            let ch = self.current_char();
            if ch.is_alphanumeric() || ch == '_' {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let token_type = TokenType::from_keyword(&value).unwrap_or(TokenType::Identifier);
        Token::new(token_type, value, line, column)
    }
}
