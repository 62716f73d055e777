use crate::ast::Alias;
use crate::ast::Binding;
use crate::ast::BindingElement;
use crate::ast::Stmt;

/// Returns whether `stmt` does nothing at all: absent, an explicit `;`, or a block built entirely
/// out of such statements, at any nesting depth.
pub fn is_empty_stmt(stmt: Option<&Stmt>) -> bool {
    match stmt {
        None => true,
        Some(Stmt::EmptyStmt {}) => true,
        Some(Stmt::BlockStmt { body }) => body.iter().all(|stmt| is_empty_stmt(Some(stmt))),
        Some(_) => false,
    }
}

pub fn is_return_or_throw_stmt(stmt: &Stmt) -> bool {
    matches!(stmt, Stmt::ReturnStmt { .. } | Stmt::ThrowStmt { .. })
}

/// Returns whether control flow cannot continue past `stmt`: it is itself a return or throw, or a
/// block whose last statement is. Deliberately shallow — earlier statements of the block and
/// compound statements (if/for/while/switch) are never inspected, even when every branch of them
/// diverges.
pub fn has_return_or_throw_stmt(stmt: &Stmt) -> bool {
    if is_return_or_throw_stmt(stmt) {
        return true;
    }
    if let Stmt::BlockStmt { body } = stmt {
        if let Some(last) = body.last() {
            return is_return_or_throw_stmt(last);
        }
    }
    false
}

/// Returns whether the element binds a bare identifier, i.e. starts with an identifier character
/// when printed.
pub fn is_ident_binding_element(element: &BindingElement) -> bool {
    matches!(element.binding, Some(Binding::Identifier { .. }))
}

/// Returns whether the alias ends in an identifier when printed, i.e. is not a `*` namespace
/// binding.
pub fn is_ident_end_alias(alias: &Alias) -> bool {
    alias.binding.as_slice() != b"*"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceRange;

    fn block(body: Vec<Stmt>) -> Stmt {
        Stmt::BlockStmt { body }
    }

    fn throw_stmt() -> Stmt {
        Stmt::ThrowStmt {
            value: Box::new(crate::ast::Expr::IdentifierExpr {
                name: SourceRange::anonymous("e"),
            }),
        }
    }

    fn debuggerish() -> Stmt {
        // Any statement that is neither empty nor return/throw.
        Stmt::ExpressionStmt {
            expression: Box::new(crate::ast::Expr::IdentifierExpr {
                name: SourceRange::anonymous("a"),
            }),
        }
    }

    #[test]
    fn test_is_empty_stmt() {
        assert!(is_empty_stmt(None));
        assert!(is_empty_stmt(Some(&Stmt::EmptyStmt {})));
        assert!(is_empty_stmt(Some(&block(vec![]))));
        let nested = block(vec![
            Stmt::EmptyStmt {},
            block(vec![block(vec![]), Stmt::EmptyStmt {}]),
        ]);
        assert!(is_empty_stmt(Some(&nested)));
        let with_content = block(vec![
            Stmt::EmptyStmt {},
            block(vec![block(vec![debuggerish()])]),
        ]);
        assert!(!is_empty_stmt(Some(&with_content)));
    }

    #[test]
    fn test_is_return_or_throw_stmt() {
        assert!(is_return_or_throw_stmt(&Stmt::ReturnStmt { value: None }));
        assert!(is_return_or_throw_stmt(&throw_stmt()));
        assert!(!is_return_or_throw_stmt(&Stmt::EmptyStmt {}));
        assert!(!is_return_or_throw_stmt(&block(vec![throw_stmt()])));
    }

    #[test]
    fn test_has_return_or_throw_stmt() {
        assert!(has_return_or_throw_stmt(&Stmt::ReturnStmt { value: None }));
        assert!(has_return_or_throw_stmt(&block(vec![
            debuggerish(),
            throw_stmt(),
        ])));
        // A statement after the throw hides it; only the last statement counts.
        assert!(!has_return_or_throw_stmt(&block(vec![
            throw_stmt(),
            debuggerish(),
        ])));
        assert!(!has_return_or_throw_stmt(&block(vec![])));
        // No recursion into nested blocks.
        assert!(!has_return_or_throw_stmt(&block(vec![block(vec![
            throw_stmt()
        ])])));
    }

    #[test]
    fn test_is_ident_binding_element() {
        let ident = BindingElement {
            binding: Some(Binding::Identifier {
                name: SourceRange::anonymous("a"),
            }),
            default_value: None,
        };
        let pattern = BindingElement {
            binding: Some(Binding::ArrayPattern {
                elements: vec![],
                rest: None,
            }),
            default_value: None,
        };
        let elision = BindingElement {
            binding: None,
            default_value: None,
        };
        assert!(is_ident_binding_element(&ident));
        assert!(!is_ident_binding_element(&pattern));
        assert!(!is_ident_binding_element(&elision));
    }

    #[test]
    fn test_is_ident_end_alias() {
        let named = Alias {
            name: SourceRange::anonymous("a"),
            binding: SourceRange::anonymous("b"),
        };
        let star = Alias {
            name: SourceRange::anonymous("a"),
            binding: SourceRange::anonymous("*"),
        };
        assert!(is_ident_end_alias(&named));
        assert!(!is_ident_end_alias(&star));
    }
}
