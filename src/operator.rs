use crate::ast::Expr;
use lazy_static::lazy_static;
use std::collections::HashMap;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperatorName {
    Addition,
    Assignment,
    AssignmentAddition,
    AssignmentBitwiseAnd,
    AssignmentBitwiseLeftShift,
    AssignmentBitwiseOr,
    AssignmentBitwiseRightShift,
    AssignmentBitwiseUnsignedRightShift,
    AssignmentBitwiseXor,
    AssignmentDivision,
    AssignmentExponentiation,
    AssignmentLogicalAnd,
    AssignmentLogicalOr,
    AssignmentMultiplication,
    AssignmentNullishCoalescing,
    AssignmentRemainder,
    AssignmentSubtraction,
    Await,
    BitwiseAnd,
    BitwiseLeftShift,
    BitwiseNot,
    BitwiseOr,
    BitwiseRightShift,
    BitwiseUnsignedRightShift,
    BitwiseXor,
    Comma,
    Delete,
    Division,
    Equality,
    Exponentiation,
    GreaterThan,
    GreaterThanOrEqual,
    In,
    Inequality,
    Instanceof,
    LessThan,
    LessThanOrEqual,
    LogicalAnd,
    LogicalNot,
    LogicalOr,
    Multiplication,
    NullishCoalescing,
    PostfixDecrement,
    PostfixIncrement,
    PrefixDecrement,
    PrefixIncrement,
    Remainder,
    StrictEquality,
    StrictInequality,
    Subtraction,
    Typeof,
    UnaryNegation,
    UnaryPlus,
    Void,
}

/// Minimum syntactic binding strengths, ordered weakest to strongest. An expression can be
/// printed without surrounding parentheses in any context requiring at most its own level.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum OpPrec {
    Expr,
    Assign,
    Coalesce,
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Equals,
    Compare,
    Shift,
    Add,
    Mul,
    Exp,
    Unary,
    Update,
    LHS,
    Member,
    Primary,
}

// The operand tables below are deliberately not derivable from the operators' own levels.
// Associativity and a few grammar quirks mean the left and right child of a binary operator can
// each need a different minimum level than the operator itself; a wrong entry changes what a
// reprint means (`a - -b` printed as `a--b` tokenises as a decrement). Entries are therefore
// listed per operator rather than computed.
lazy_static! {
    /// Precedence of a unary expression, by operator.
    pub static ref UNARY_PRECEDENCE: HashMap<OperatorName, OpPrec> = {
        let mut map = HashMap::<OperatorName, OpPrec>::new();
        map.insert(OperatorName::PostfixIncrement, OpPrec::Update);
        map.insert(OperatorName::PostfixDecrement, OpPrec::Update);
        map.insert(OperatorName::PrefixIncrement, OpPrec::Update);
        map.insert(OperatorName::PrefixDecrement, OpPrec::Update);
        map.insert(OperatorName::LogicalNot, OpPrec::Unary);
        map.insert(OperatorName::BitwiseNot, OpPrec::Unary);
        map.insert(OperatorName::Typeof, OpPrec::Unary);
        map.insert(OperatorName::Void, OpPrec::Unary);
        map.insert(OperatorName::Delete, OpPrec::Unary);
        map.insert(OperatorName::UnaryPlus, OpPrec::Unary);
        map.insert(OperatorName::UnaryNegation, OpPrec::Unary);
        map.insert(OperatorName::Await, OpPrec::Unary);
        map
    };

    /// Minimum precedence of the operand of a unary expression, by operator.
    pub static ref UNARY_OPERAND_PRECEDENCE: HashMap<OperatorName, OpPrec> = {
        let mut map = HashMap::<OperatorName, OpPrec>::new();
        map.insert(OperatorName::PostfixIncrement, OpPrec::LHS);
        map.insert(OperatorName::PostfixDecrement, OpPrec::LHS);
        map.insert(OperatorName::PrefixIncrement, OpPrec::Unary);
        map.insert(OperatorName::PrefixDecrement, OpPrec::Unary);
        map.insert(OperatorName::LogicalNot, OpPrec::Unary);
        map.insert(OperatorName::BitwiseNot, OpPrec::Unary);
        map.insert(OperatorName::Typeof, OpPrec::Unary);
        map.insert(OperatorName::Void, OpPrec::Unary);
        map.insert(OperatorName::Delete, OpPrec::Unary);
        map.insert(OperatorName::UnaryPlus, OpPrec::Unary);
        map.insert(OperatorName::UnaryNegation, OpPrec::Unary);
        map.insert(OperatorName::Await, OpPrec::Unary);
        map
    };

    /// Precedence of a binary expression, by operator.
    pub static ref BINARY_PRECEDENCE: HashMap<OperatorName, OpPrec> = {
        let mut map = HashMap::<OperatorName, OpPrec>::new();
        map.insert(OperatorName::Assignment, OpPrec::Assign);
        map.insert(OperatorName::AssignmentAddition, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseAnd, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseLeftShift, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseOr, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseRightShift, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseUnsignedRightShift, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseXor, OpPrec::Assign);
        map.insert(OperatorName::AssignmentDivision, OpPrec::Assign);
        map.insert(OperatorName::AssignmentExponentiation, OpPrec::Assign);
        map.insert(OperatorName::AssignmentLogicalAnd, OpPrec::Assign);
        map.insert(OperatorName::AssignmentLogicalOr, OpPrec::Assign);
        map.insert(OperatorName::AssignmentMultiplication, OpPrec::Assign);
        map.insert(OperatorName::AssignmentNullishCoalescing, OpPrec::Assign);
        map.insert(OperatorName::AssignmentRemainder, OpPrec::Assign);
        map.insert(OperatorName::AssignmentSubtraction, OpPrec::Assign);
        map.insert(OperatorName::Exponentiation, OpPrec::Exp);
        map.insert(OperatorName::Multiplication, OpPrec::Mul);
        map.insert(OperatorName::Division, OpPrec::Mul);
        map.insert(OperatorName::Remainder, OpPrec::Mul);
        map.insert(OperatorName::Addition, OpPrec::Add);
        map.insert(OperatorName::Subtraction, OpPrec::Add);
        map.insert(OperatorName::BitwiseLeftShift, OpPrec::Shift);
        map.insert(OperatorName::BitwiseRightShift, OpPrec::Shift);
        map.insert(OperatorName::BitwiseUnsignedRightShift, OpPrec::Shift);
        map.insert(OperatorName::LessThan, OpPrec::Compare);
        map.insert(OperatorName::LessThanOrEqual, OpPrec::Compare);
        map.insert(OperatorName::GreaterThan, OpPrec::Compare);
        map.insert(OperatorName::GreaterThanOrEqual, OpPrec::Compare);
        map.insert(OperatorName::In, OpPrec::Compare);
        map.insert(OperatorName::Instanceof, OpPrec::Compare);
        map.insert(OperatorName::Equality, OpPrec::Equals);
        map.insert(OperatorName::Inequality, OpPrec::Equals);
        map.insert(OperatorName::StrictEquality, OpPrec::Equals);
        map.insert(OperatorName::StrictInequality, OpPrec::Equals);
        map.insert(OperatorName::BitwiseAnd, OpPrec::BitAnd);
        map.insert(OperatorName::BitwiseXor, OpPrec::BitXor);
        map.insert(OperatorName::BitwiseOr, OpPrec::BitOr);
        map.insert(OperatorName::LogicalAnd, OpPrec::And);
        map.insert(OperatorName::LogicalOr, OpPrec::Or);
        map.insert(OperatorName::NullishCoalescing, OpPrec::Coalesce);
        map.insert(OperatorName::Comma, OpPrec::Expr);
        map
    };

    /// Minimum precedence of the left operand of a binary expression, by operator.
    pub static ref BINARY_LEFT_PRECEDENCE: HashMap<OperatorName, OpPrec> = {
        let mut map = HashMap::<OperatorName, OpPrec>::new();
        map.insert(OperatorName::Assignment, OpPrec::LHS);
        map.insert(OperatorName::AssignmentAddition, OpPrec::LHS);
        map.insert(OperatorName::AssignmentBitwiseAnd, OpPrec::LHS);
        map.insert(OperatorName::AssignmentBitwiseLeftShift, OpPrec::LHS);
        map.insert(OperatorName::AssignmentBitwiseOr, OpPrec::LHS);
        map.insert(OperatorName::AssignmentBitwiseRightShift, OpPrec::LHS);
        map.insert(OperatorName::AssignmentBitwiseUnsignedRightShift, OpPrec::LHS);
        map.insert(OperatorName::AssignmentBitwiseXor, OpPrec::LHS);
        map.insert(OperatorName::AssignmentDivision, OpPrec::LHS);
        map.insert(OperatorName::AssignmentExponentiation, OpPrec::LHS);
        map.insert(OperatorName::AssignmentLogicalAnd, OpPrec::LHS);
        map.insert(OperatorName::AssignmentLogicalOr, OpPrec::LHS);
        map.insert(OperatorName::AssignmentMultiplication, OpPrec::LHS);
        map.insert(OperatorName::AssignmentNullishCoalescing, OpPrec::LHS);
        map.insert(OperatorName::AssignmentRemainder, OpPrec::LHS);
        map.insert(OperatorName::AssignmentSubtraction, OpPrec::LHS);
        // `**` does not accept a bare unary on the left: `(-a) ** b` must keep its parentheses.
        map.insert(OperatorName::Exponentiation, OpPrec::Update);
        map.insert(OperatorName::Multiplication, OpPrec::Mul);
        map.insert(OperatorName::Division, OpPrec::Mul);
        map.insert(OperatorName::Remainder, OpPrec::Mul);
        map.insert(OperatorName::Addition, OpPrec::Add);
        map.insert(OperatorName::Subtraction, OpPrec::Add);
        map.insert(OperatorName::BitwiseLeftShift, OpPrec::Shift);
        map.insert(OperatorName::BitwiseRightShift, OpPrec::Shift);
        map.insert(OperatorName::BitwiseUnsignedRightShift, OpPrec::Shift);
        map.insert(OperatorName::LessThan, OpPrec::Compare);
        map.insert(OperatorName::LessThanOrEqual, OpPrec::Compare);
        map.insert(OperatorName::GreaterThan, OpPrec::Compare);
        map.insert(OperatorName::GreaterThanOrEqual, OpPrec::Compare);
        map.insert(OperatorName::In, OpPrec::Compare);
        map.insert(OperatorName::Instanceof, OpPrec::Compare);
        map.insert(OperatorName::Equality, OpPrec::Equals);
        map.insert(OperatorName::Inequality, OpPrec::Equals);
        map.insert(OperatorName::StrictEquality, OpPrec::Equals);
        map.insert(OperatorName::StrictInequality, OpPrec::Equals);
        map.insert(OperatorName::BitwiseAnd, OpPrec::BitAnd);
        map.insert(OperatorName::BitwiseXor, OpPrec::BitXor);
        map.insert(OperatorName::BitwiseOr, OpPrec::BitOr);
        map.insert(OperatorName::LogicalAnd, OpPrec::And);
        map.insert(OperatorName::LogicalOr, OpPrec::Or);
        map.insert(OperatorName::NullishCoalescing, OpPrec::Coalesce);
        map.insert(OperatorName::Comma, OpPrec::Expr);
        map
    };

    /// Minimum precedence of the right operand of a binary expression, by operator.
    pub static ref BINARY_RIGHT_PRECEDENCE: HashMap<OperatorName, OpPrec> = {
        let mut map = HashMap::<OperatorName, OpPrec>::new();
        map.insert(OperatorName::Assignment, OpPrec::Assign);
        map.insert(OperatorName::AssignmentAddition, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseAnd, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseLeftShift, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseOr, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseRightShift, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseUnsignedRightShift, OpPrec::Assign);
        map.insert(OperatorName::AssignmentBitwiseXor, OpPrec::Assign);
        map.insert(OperatorName::AssignmentDivision, OpPrec::Assign);
        map.insert(OperatorName::AssignmentExponentiation, OpPrec::Assign);
        map.insert(OperatorName::AssignmentLogicalAnd, OpPrec::Assign);
        map.insert(OperatorName::AssignmentLogicalOr, OpPrec::Assign);
        map.insert(OperatorName::AssignmentMultiplication, OpPrec::Assign);
        map.insert(OperatorName::AssignmentNullishCoalescing, OpPrec::Assign);
        map.insert(OperatorName::AssignmentRemainder, OpPrec::Assign);
        map.insert(OperatorName::AssignmentSubtraction, OpPrec::Assign);
        map.insert(OperatorName::Exponentiation, OpPrec::Exp);
        map.insert(OperatorName::Multiplication, OpPrec::Exp);
        map.insert(OperatorName::Division, OpPrec::Exp);
        map.insert(OperatorName::Remainder, OpPrec::Exp);
        map.insert(OperatorName::Addition, OpPrec::Mul);
        map.insert(OperatorName::Subtraction, OpPrec::Mul);
        map.insert(OperatorName::BitwiseLeftShift, OpPrec::Add);
        map.insert(OperatorName::BitwiseRightShift, OpPrec::Add);
        map.insert(OperatorName::BitwiseUnsignedRightShift, OpPrec::Add);
        map.insert(OperatorName::LessThan, OpPrec::Shift);
        map.insert(OperatorName::LessThanOrEqual, OpPrec::Shift);
        map.insert(OperatorName::GreaterThan, OpPrec::Shift);
        map.insert(OperatorName::GreaterThanOrEqual, OpPrec::Shift);
        map.insert(OperatorName::In, OpPrec::Shift);
        map.insert(OperatorName::Instanceof, OpPrec::Shift);
        map.insert(OperatorName::Equality, OpPrec::Compare);
        map.insert(OperatorName::Inequality, OpPrec::Compare);
        map.insert(OperatorName::StrictEquality, OpPrec::Compare);
        map.insert(OperatorName::StrictInequality, OpPrec::Compare);
        map.insert(OperatorName::BitwiseAnd, OpPrec::Compare);
        map.insert(OperatorName::BitwiseXor, OpPrec::BitAnd);
        map.insert(OperatorName::BitwiseOr, OpPrec::BitXor);
        // Right-nested `&&`/`||`/`??` reprints left-nested: changes order in the AST but not in
        // execution.
        map.insert(OperatorName::LogicalAnd, OpPrec::And);
        map.insert(OperatorName::LogicalOr, OpPrec::Or);
        map.insert(OperatorName::NullishCoalescing, OpPrec::Or);
        map.insert(OperatorName::Comma, OpPrec::Assign);
        map
    };
}

/// Returns the precedence at which `expr`, printed without enclosing parentheses, would reparse
/// with its original structure.
pub fn expr_prec(expr: &Expr) -> OpPrec {
    let mut expr = expr;
    loop {
        return match expr {
            Expr::IdentifierExpr { .. }
            | Expr::LiteralExpr { .. }
            | Expr::LiteralArrayExpr { .. }
            | Expr::LiteralObjectExpr { .. }
            | Expr::FunctionExpr { .. }
            | Expr::ClassExpr { .. } => OpPrec::Primary,
            Expr::UnaryExpr { operator, .. } => UNARY_PRECEDENCE[operator],
            Expr::BinaryExpr { operator, .. } => BINARY_PRECEDENCE[operator],
            // `new Foo` binds less tightly than `new Foo()`; `new Foo().bar` and `(new Foo).bar`
            // reparse differently otherwise.
            Expr::NewExpr {
                arguments: None, ..
            } => OpPrec::LHS,
            Expr::NewExpr { .. } => OpPrec::Member,
            Expr::LiteralTemplateExpr { tag: None, .. } => OpPrec::Primary,
            Expr::LiteralTemplateExpr { .. } => OpPrec::Member,
            Expr::MemberExpr { .. }
            | Expr::ComputedMemberExpr { .. }
            | Expr::NewTargetExpr {}
            | Expr::ImportMetaExpr {} => OpPrec::Member,
            Expr::CallExpr { .. } | Expr::OptChainExpr { .. } => OpPrec::LHS,
            Expr::ConditionalExpr { .. }
            | Expr::YieldExpr { .. }
            | Expr::ArrowFunctionExpr { .. } => OpPrec::Assign,
            // A group is as strong as whatever it wraps; the parentheses are structural.
            Expr::GroupExpr { expression } => {
                expr = expression.as_ref();
                continue;
            }
        };
    }
}
