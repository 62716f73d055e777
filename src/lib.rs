//! The decision layer of a JavaScript minifier: given an already-parsed AST, this crate answers
//! the questions a printer and its rewrite passes ask per node, and compacts literal tokens in
//! place. It neither parses nor prints.
//!
//! Four independent parts share the AST vocabulary:
//!
//! - `operator` — the precedence model: what binding strength an expression has on its own, and
//!   the minimum strength each operand position demands, so redundant parentheses can be dropped
//!   without reparsing differently.
//! - `analyze` — constant-value predicates: statically known truthiness, undefined-ness, boolean
//!   shape, and a narrow identifier equality check.
//! - `classify` — statement predicates: no-op detection and trailing return/throw divergence.
//! - `literal` — in-place string escape minimisation and binary/octal to decimal conversion.
//!
//! Everything is a pure function or an in-place rewrite of a caller-owned buffer; there is no
//! shared mutable state, and all inputs are assumed to have been accepted by the parser. Inputs
//! outside a function's documented shape come back unchanged or classify as unknown rather than
//! erroring.

pub mod analyze;
pub mod ast;
pub mod char;
pub mod classify;
pub mod literal;
pub mod operator;
pub mod source;
pub mod token;

pub use analyze::is_boolean_expr;
pub use analyze::is_equal_expr;
pub use analyze::is_false;
pub use analyze::is_falsy;
pub use analyze::is_true;
pub use analyze::is_truthy;
pub use analyze::is_undefined;
pub use classify::has_return_or_throw_stmt;
pub use classify::is_empty_stmt;
pub use classify::is_ident_binding_element;
pub use classify::is_ident_end_alias;
pub use classify::is_return_or_throw_stmt;
pub use literal::binary_number;
pub use literal::minify_string;
pub use literal::octal_number;
pub use operator::expr_prec;
pub use operator::OpPrec;
pub use operator::OperatorName;
pub use operator::BINARY_LEFT_PRECEDENCE;
pub use operator::BINARY_PRECEDENCE;
pub use operator::BINARY_RIGHT_PRECEDENCE;
pub use operator::UNARY_OPERAND_PRECEDENCE;
pub use operator::UNARY_PRECEDENCE;
