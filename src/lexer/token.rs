use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    // Keywords
    #[token("def")]
    Def,
    #[token("extern")]
    Extern,
    #[token("if")]
    If,
    #[token("else")]
    Else,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Ident(String),

    #[regex(r"[0-9]+(\.[0-9]*)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Operator characters. Only + - * / are binary operators; the rest lex
    // fine and are rejected at the grammar level, which keeps "unknown
    // operator" a parse decision rather than a lex error.
    #[regex(r"[+\-*/<>=]", |lex| lex.slice().chars().next())]
    Op(char),

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // Comments (skip)
    #[regex(r"#[^\n]*")]
    Comment,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Def => write!(f, "'def'"),
            Token::Extern => write!(f, "'extern'"),
            Token::If => write!(f, "'if'"),
            Token::Else => write!(f, "'else'"),
            Token::Ident(name) => write!(f, "identifier '{name}'"),
            Token::Number(value) => write!(f, "number {value}"),
            Token::Op(op) => write!(f, "'{op}'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::LBrace => write!(f, "'{{'"),
            Token::RBrace => write!(f, "'}}'"),
            Token::Comma => write!(f, "','"),
            Token::Semicolon => write!(f, "';'"),
            Token::Comment => write!(f, "comment"),
        }
    }
}
