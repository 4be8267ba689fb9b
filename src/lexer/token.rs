// Minijas - A single-pass compiler for a Rust-flavored mini-language targeting JVM assembly
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Token definitions for the Minijas language.
//!
//! The token set is generated with the `logos` derive. Whitespace and
//! comments (`//` line and `/* */` block) are skipped by the lexer.
//! `return`, `break`, `for`, `loop`, `in`, `->` and `..` are reserved:
//! the lexer classifies them, the grammar gives them no productions.

use logos::Logos;

/// A token in the Minijas language.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
pub enum Token {
    // Literals
    /// Integer literal.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i32>().ok())]
    IntLit(i32),
    /// Float literal.
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f32>().ok())]
    FloatLit(f32),
    /// String literal (content between the quotes; no escape sequences).
    #[regex(r#""[^"\n]*""#, |lex| { let s = lex.slice(); s[1..s.len() - 1].to_string() })]
    StringLit(String),
    /// Identifier (variable or function name).
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // Declaration keywords
    /// `let` - variable declaration.
    #[token("let")]
    Let,
    /// `mut` - mutable binding modifier.
    #[token("mut")]
    Mut,
    /// `func` - function declaration.
    #[token("func")]
    Func,

    // Type keywords
    /// `i32` - 32-bit integer type.
    #[token("i32")]
    I32Type,
    /// `f32` - 32-bit float type.
    #[token("f32")]
    F32Type,
    /// `str` - string type.
    #[token("str")]
    StrType,
    /// `bool` - boolean type.
    #[token("bool")]
    BoolType,

    // Control flow keywords
    /// `if` - conditional statement.
    #[token("if")]
    If,
    /// `else` - else branch.
    #[token("else")]
    Else,
    /// `while` - while loop.
    #[token("while")]
    While,
    /// `for` - reserved.
    #[token("for")]
    For,
    /// `loop` - reserved.
    #[token("loop")]
    Loop,
    /// `in` - reserved.
    #[token("in")]
    In,
    /// `break` - reserved.
    #[token("break")]
    Break,
    /// `return` - reserved.
    #[token("return")]
    Return,

    // Builtin statement keywords
    /// `print` - print without trailing newline.
    #[token("print")]
    Print,
    /// `println` - print with trailing newline.
    #[token("println")]
    Println,

    // Operator keywords
    /// `as` - type cast.
    #[token("as")]
    As,

    // Boolean literals
    /// `true` - boolean true value.
    #[token("true")]
    True,
    /// `false` - boolean false value.
    #[token("false")]
    False,

    // Arithmetic operators
    /// `+` - addition.
    #[token("+")]
    Plus,
    /// `-` - subtraction.
    #[token("-")]
    Minus,
    /// `*` - multiplication.
    #[token("*")]
    Star,
    /// `/` - division.
    #[token("/")]
    Slash,
    /// `%` - remainder.
    #[token("%")]
    Percent,

    // Comparison operators
    /// `==` - equal.
    #[token("==")]
    EqualEqual,
    /// `!=` - not equal.
    #[token("!=")]
    BangEqual,
    /// `<` - less than.
    #[token("<")]
    Less,
    /// `>` - greater than.
    #[token(">")]
    Greater,
    /// `<=` - less or equal.
    #[token("<=")]
    LessEqual,
    /// `>=` - greater or equal.
    #[token(">=")]
    GreaterEqual,

    // Shift operators
    /// `<<` - left shift.
    #[token("<<")]
    ShiftLeft,
    /// `>>` - right shift.
    #[token(">>")]
    ShiftRight,

    // Logical operators
    /// `||` - logical OR.
    #[token("||")]
    OrOr,
    /// `&&` - logical AND.
    #[token("&&")]
    AndAnd,
    /// `!` - logical NOT.
    #[token("!")]
    Bang,
    /// `&` - reference marker (only valid in `&str`).
    #[token("&")]
    Ampersand,

    // Assignment operators
    /// `=` - assignment.
    #[token("=")]
    Assign,
    /// `+=` - add assign.
    #[token("+=")]
    PlusAssign,
    /// `-=` - subtract assign.
    #[token("-=")]
    MinusAssign,
    /// `*=` - multiply assign.
    #[token("*=")]
    StarAssign,
    /// `/=` - divide assign.
    #[token("/=")]
    SlashAssign,
    /// `%=` - remainder assign.
    #[token("%=")]
    PercentAssign,

    // Punctuation
    /// `(` - left parenthesis.
    #[token("(")]
    LParen,
    /// `)` - right parenthesis.
    #[token(")")]
    RParen,
    /// `{` - left brace.
    #[token("{")]
    LBrace,
    /// `}` - right brace.
    #[token("}")]
    RBrace,
    /// `[` - left bracket.
    #[token("[")]
    LBracket,
    /// `]` - right bracket.
    #[token("]")]
    RBracket,
    /// `;` - semicolon.
    #[token(";")]
    Semicolon,
    /// `:` - colon.
    #[token(":")]
    Colon,
    /// `,` - comma.
    #[token(",")]
    Comma,
    /// `->` - reserved (return type arrow).
    #[token("->")]
    Arrow,
    /// `..` - reserved (range).
    #[token("..")]
    DotDot,
}

impl Token {
    /// Check if this token starts an assignment operator.
    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            Token::Assign
                | Token::PlusAssign
                | Token::MinusAssign
                | Token::StarAssign
                | Token::SlashAssign
                | Token::PercentAssign
        )
    }

    /// Check if this token is a relational operator.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Token::EqualEqual
                | Token::BangEqual
                | Token::Less
                | Token::Greater
                | Token::LessEqual
                | Token::GreaterEqual
        )
    }

    /// Get a human-readable name for this token type.
    pub fn name(&self) -> &'static str {
        match self {
            Token::IntLit(_) => "integer literal",
            Token::FloatLit(_) => "float literal",
            Token::StringLit(_) => "string literal",
            Token::Ident(_) => "identifier",
            Token::Let => "'let'",
            Token::Mut => "'mut'",
            Token::Func => "'func'",
            Token::I32Type => "'i32'",
            Token::F32Type => "'f32'",
            Token::StrType => "'str'",
            Token::BoolType => "'bool'",
            Token::If => "'if'",
            Token::Else => "'else'",
            Token::While => "'while'",
            Token::For => "'for'",
            Token::Loop => "'loop'",
            Token::In => "'in'",
            Token::Break => "'break'",
            Token::Return => "'return'",
            Token::Print => "'print'",
            Token::Println => "'println'",
            Token::As => "'as'",
            Token::True => "'true'",
            Token::False => "'false'",
            Token::Plus => "'+'",
            Token::Minus => "'-'",
            Token::Star => "'*'",
            Token::Slash => "'/'",
            Token::Percent => "'%'",
            Token::EqualEqual => "'=='",
            Token::BangEqual => "'!='",
            Token::Less => "'<'",
            Token::Greater => "'>'",
            Token::LessEqual => "'<='",
            Token::GreaterEqual => "'>='",
            Token::ShiftLeft => "'<<'",
            Token::ShiftRight => "'>>'",
            Token::OrOr => "'||'",
            Token::AndAnd => "'&&'",
            Token::Bang => "'!'",
            Token::Ampersand => "'&'",
            Token::Assign => "'='",
            Token::PlusAssign => "'+='",
            Token::MinusAssign => "'-='",
            Token::StarAssign => "'*='",
            Token::SlashAssign => "'/='",
            Token::PercentAssign => "'%='",
            Token::LParen => "'('",
            Token::RParen => "')'",
            Token::LBrace => "'{'",
            Token::RBrace => "'}'",
            Token::LBracket => "'['",
            Token::RBracket => "']'",
            Token::Semicolon => "';'",
            Token::Colon => "':'",
            Token::Comma => "','",
            Token::Arrow => "'->'",
            Token::DotDot => "'..'",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::IntLit(n) => write!(f, "{}", n),
            Token::FloatLit(v) => write!(f, "{}", v),
            Token::StringLit(s) => write!(f, "\"{}\"", s),
            Token::Ident(s) => write!(f, "{}", s),
            _ => write!(f, "{}", self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_assignment() {
        assert!(Token::Assign.is_assignment());
        assert!(Token::PlusAssign.is_assignment());
        assert!(Token::PercentAssign.is_assignment());
        assert!(!Token::EqualEqual.is_assignment());
    }

    #[test]
    fn test_is_comparison() {
        assert!(Token::Less.is_comparison());
        assert!(Token::GreaterEqual.is_comparison());
        assert!(!Token::ShiftLeft.is_comparison());
        assert!(!Token::Assign.is_comparison());
    }

    #[test]
    fn test_token_names() {
        assert_eq!(Token::Let.name(), "'let'");
        assert_eq!(Token::Ident("foo".to_string()).name(), "identifier");
        assert_eq!(Token::IntLit(3).name(), "integer literal");
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::IntLit(42).to_string(), "42");
        assert_eq!(Token::StringLit("hi".to_string()).to_string(), "\"hi\"");
        assert_eq!(Token::Semicolon.to_string(), "';'");
    }
}
