use crate::ast::Expr;
use crate::operator::OperatorName;
use crate::operator::OpPrec;
use crate::operator::BINARY_PRECEDENCE;
use crate::token::TokenType;

const UNDEFINED: &[u8] = b"undefined";

/// Returns whether `expr` is the literal `true`, or its two-byte encoding `!0`. Minified code
/// routinely spells booleans this way, so both shapes must be recognised.
pub fn is_true(expr: &Expr) -> bool {
    match expr {
        Expr::LiteralExpr {
            tt: TokenType::LiteralTrue,
            ..
        } => true,
        Expr::UnaryExpr {
            operator: OperatorName::LogicalNot,
            argument,
        } => match argument.as_ref() {
            Expr::LiteralExpr {
                tt: TokenType::LiteralNumber,
                raw,
            } => raw.as_slice() == b"0",
            _ => false,
        },
        _ => false,
    }
}

/// Returns whether `expr` is the literal `false`, or `!` applied to a nonzero decimal literal
/// (`!1`).
pub fn is_false(expr: &Expr) -> bool {
    match expr {
        Expr::LiteralExpr {
            tt: TokenType::LiteralFalse,
            ..
        } => true,
        Expr::UnaryExpr {
            operator: OperatorName::LogicalNot,
            argument,
        } => match argument.as_ref() {
            Expr::LiteralExpr {
                tt: TokenType::LiteralNumber,
                raw,
            } => raw.as_slice() != b"0",
            _ => false,
        },
        _ => false,
    }
}

/// Returns whether `expr` always evaluates to `undefined`: a bare reference to the identifier
/// `undefined`, or any `void` expression. No scope resolution happens here; the caller must rule
/// out a shadowing binding of `undefined`. A `void` operand may have side effects, which the
/// caller is responsible for preserving.
pub fn is_undefined(expr: &Expr) -> bool {
    match expr {
        Expr::IdentifierExpr { name } => name.as_slice() == UNDEFINED,
        Expr::UnaryExpr {
            operator: OperatorName::Void,
            ..
        } => true,
        _ => false,
    }
}

/// Returns whether `expr` coerces to `true` under ToBoolean, or None when not statically known.
pub fn is_truthy(expr: &Expr) -> Option<bool> {
    is_falsy(expr).map(|falsy| !falsy)
}

/// Returns whether `expr` coerces to `false` under ToBoolean, or None when not statically known.
///
/// Any nesting of groups and logical NOTs is peeled off first, with NOTs flipping a parity bit;
/// the verdict then comes from the innermost expression. Only literals (and `undefined` per
/// `is_undefined`) are classified. Object and array literals are always truthy in ECMAScript but
/// deliberately stay unknown here.
pub fn is_falsy(expr: &Expr) -> Option<bool> {
    let mut expr = expr;
    let mut negated = false;
    loop {
        match expr {
            Expr::GroupExpr { expression } => expr = expression.as_ref(),
            Expr::UnaryExpr {
                operator: OperatorName::LogicalNot,
                argument,
            } => {
                negated = !negated;
                expr = argument.as_ref();
            }
            _ => break,
        }
    }
    if let Expr::LiteralExpr { tt, raw } = expr {
        let tt = *tt;
        let d = raw.as_slice();
        if tt == TokenType::LiteralFalse
            || tt == TokenType::LiteralNull
            || tt == TokenType::LiteralString && d.len() == 2
            || tt == TokenType::LiteralNumber
                && (d == b"0" || d.len() == 2 && d[0] == b'.' && d[1] == b'0')
            || (tt == TokenType::LiteralNumberBin
                || tt == TokenType::LiteralNumberOct
                || tt == TokenType::LiteralNumberHex)
                && d.len() == 3
                && d[2] == b'0'
            || tt == TokenType::LiteralBigInt && d.len() == 2 && d[0] == b'0'
        {
            return Some(!negated);
        } else if tt == TokenType::LiteralTrue
            || tt == TokenType::LiteralString
            || tt == TokenType::LiteralNumber
            || tt == TokenType::LiteralNumberBin
            || tt == TokenType::LiteralNumberOct
            || tt == TokenType::LiteralNumberHex
            || tt == TokenType::LiteralBigInt
        {
            return Some(negated);
        }
    } else if is_undefined(expr) {
        return Some(!negated);
    }
    None
}

/// Returns whether `a` and `b` are trivially the same expression: identifier references with
/// identical names, ignoring one level of grouping on each side. A narrow, side-effect-free check
/// for duplicate branches like `cond ? x : x`; never a general structural equality.
pub fn is_equal_expr(a: &Expr, b: &Expr) -> bool {
    let a = match a {
        Expr::GroupExpr { expression } => expression.as_ref(),
        _ => a,
    };
    let b = match b {
        Expr::GroupExpr { expression } => expression.as_ref(),
        _ => b,
    };
    match (a, b) {
        (Expr::IdentifierExpr { name: left }, Expr::IdentifierExpr { name: right }) => {
            left.as_slice() == right.as_slice()
        }
        _ => false,
    }
}

/// Returns whether `expr` is syntactically guaranteed to produce a boolean: a logical NOT, a
/// comparison or equality operator, a boolean literal, or a grouping of one of those. Operand
/// types are not inspected, so `a && b` is not boolean by this check even though it often is.
pub fn is_boolean_expr(expr: &Expr) -> bool {
    let mut expr = expr;
    loop {
        return match expr {
            Expr::UnaryExpr { operator, .. } => *operator == OperatorName::LogicalNot,
            Expr::BinaryExpr { operator, .. } => {
                let prec = BINARY_PRECEDENCE[operator];
                prec == OpPrec::Compare || prec == OpPrec::Equals
            }
            Expr::LiteralExpr { tt, .. } => {
                *tt == TokenType::LiteralTrue || *tt == TokenType::LiteralFalse
            }
            Expr::GroupExpr { expression } => {
                expr = expression.as_ref();
                continue;
            }
            _ => false,
        };
    }
}
