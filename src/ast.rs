use crate::operator::OperatorName;
use crate::source::SourceRange;
use crate::token::TokenType;

// These are for readability only, and do not increase type safety or define different structures.
type Expression = Box<Expr>;
type Statement = Box<Stmt>;

#[derive(Eq, PartialEq, Debug)]
pub enum VarDeclMode {
    Const,
    Let,
    Var,
}

#[derive(Debug)]
pub enum ArrayElement {
    Single(Expression),
    Rest(Expression),
    Empty,
}

#[derive(Debug)]
pub enum ObjectMemberKey {
    // Identifier, keyword, string, or number.
    Direct(SourceRange),
    Computed(Expression),
}

#[derive(Debug)]
pub enum ObjectMember {
    Valued {
        key: ObjectMemberKey,
        value: Expression,
    },
    Shorthand {
        name: SourceRange,
    },
    Rest {
        value: Expression,
    },
}

#[derive(Debug)]
pub enum LiteralTemplatePart {
    Substitution(Expression),
    String(SourceRange),
}

#[derive(Debug)]
pub enum Binding {
    Identifier {
        name: SourceRange,
    },
    // Unnamed elements can exist.
    ArrayPattern {
        elements: Vec<Option<BindingElement>>,
        rest: Option<Box<Binding>>,
    },
    // `...` in an object pattern must be followed by an identifier.
    ObjectPattern {
        properties: Vec<BindingElement>,
        rest: Option<SourceRange>,
    },
}

#[derive(Debug)]
pub struct BindingElement {
    // None for elisions in array patterns.
    pub binding: Option<Binding>,
    pub default_value: Option<Expression>,
}

/// An `x as y` pair from an import or export list. The binding is `*` for namespace
/// imports/exports.
#[derive(Debug)]
pub struct Alias {
    pub name: SourceRange,
    pub binding: SourceRange,
}

#[derive(Debug)]
pub struct VariableDeclarator {
    pub pattern: BindingElement,
    pub initializer: Option<Expression>,
}

#[derive(Debug)]
pub enum Expr {
    ArrowFunctionExpr {
        is_async: bool,
        parameters: Vec<BindingElement>,
        body: Vec<Stmt>,
    },
    BinaryExpr {
        operator: OperatorName,
        left: Expression,
        right: Expression,
    },
    CallExpr {
        callee: Expression,
        arguments: Vec<Expr>,
    },
    ClassExpr {
        name: Option<SourceRange>,
    },
    ConditionalExpr {
        test: Expression,
        consequent: Expression,
        alternate: Expression,
    },
    ComputedMemberExpr {
        object: Expression,
        member: Expression,
    },
    FunctionExpr {
        is_async: bool,
        generator: bool,
        name: Option<SourceRange>,
        body: Vec<Stmt>,
    },
    // Parentheses in the source become explicit nodes, so that a reprint can drop any that are
    // redundant. They carry no semantics of their own.
    GroupExpr {
        expression: Expression,
    },
    IdentifierExpr {
        name: SourceRange,
    },
    ImportMetaExpr {},
    LiteralArrayExpr {
        elements: Vec<ArrayElement>,
    },
    // The raw source bytes (quotes and radix prefixes included) travel with the token kind; see
    // TokenType for why the spelling matters.
    LiteralExpr {
        tt: TokenType,
        raw: SourceRange,
    },
    LiteralObjectExpr {
        members: Vec<ObjectMember>,
    },
    LiteralTemplateExpr {
        tag: Option<Expression>,
        parts: Vec<LiteralTemplatePart>,
    },
    MemberExpr {
        object: Expression,
        member: SourceRange,
    },
    NewExpr {
        callee: Expression,
        // None when the source has no parameter list at all (`new Foo`), which prints at a
        // different precedence than `new Foo()`.
        arguments: Option<Vec<Expr>>,
    },
    NewTargetExpr {},
    OptChainExpr {
        base: Expression,
    },
    UnaryExpr {
        operator: OperatorName,
        argument: Expression,
    },
    YieldExpr {
        argument: Option<Expression>,
        delegate: bool,
    },
}

#[derive(Debug)]
pub enum Stmt {
    BlockStmt {
        body: Vec<Stmt>,
    },
    EmptyStmt {},
    ExpressionStmt {
        expression: Expression,
    },
    IfStmt {
        test: Expression,
        consequent: Statement,
        alternate: Option<Statement>,
    },
    ReturnStmt {
        value: Option<Expression>,
    },
    ThrowStmt {
        value: Expression,
    },
    VarDecl {
        mode: VarDeclMode,
        declarators: Vec<VariableDeclarator>,
    },
}
