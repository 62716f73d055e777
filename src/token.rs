/// Lexeme kinds for literal tokens as produced by the lexer. Operator tokens never reach this
/// layer directly; the parser maps them to `OperatorName` when it builds unary/binary nodes.
///
/// The raw source bytes of the token travel alongside this tag (see `Expr::LiteralExpr`), since
/// several analyses inspect the exact spelling rather than the decoded value: `0`, `.0`, and
/// `0x0` are all zero, but only by looking at the bytes can that be decided without a full
/// numeric parse.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum TokenType {
    LiteralBigInt,
    LiteralFalse,
    LiteralNull,
    LiteralNumber,
    LiteralNumberBin,
    LiteralNumberHex,
    LiteralNumberOct,
    LiteralRegex,
    LiteralString,
    LiteralTrue,
}
