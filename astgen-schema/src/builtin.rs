//! Built-in schema for the tree-walking interpreter.

use crate::model::{Family, Schema, Variant};

/// Returns the expression and statement families of the interpreter.
///
/// The generated units land in the interpreter's `ast_nodes` package, so
/// imports are written relative to the interpreter's source root.
#[must_use]
pub fn interpreter_schema() -> Schema {
    Schema::new()
        .family(expression_family())
        .family(statement_family())
}

fn expression_family() -> Family {
    Family::new("Expr", "expression.py")
        .import("from typing import Any, List")
        .import("")
        .import("from src.pychart._interpreter.token_type import Token")
        .variant(
            Variant::new("Binary")
                .field("left", "Expr")
                .field("operator", "Token")
                .field("right", "Expr"),
        )
        .variant(
            Variant::new("Unary")
                .field("operator", "Token")
                .field("right", "Expr"),
        )
        .variant(Variant::new("Literal").field("value", "Any"))
        .variant(Variant::new("Grouping").field("expr", "Expr"))
        .variant(Variant::new("Variable").field("name", "Token"))
        .variant(
            Variant::new("Assignment")
                .field("name", "Token")
                .field("initializer", "Expr"),
        )
        .variant(
            Variant::new("Call")
                .field("callee", "Expr")
                .field("arguments", "List[Expr]"),
        )
        .variant(Variant::new("Array").field("elems", "List[Expr]"))
        .variant(
            Variant::new("Index")
                .field("indexee", "Expr")
                .field("index", "Expr"),
        )
        .variant(
            Variant::new("IndexSet")
                .field("index", "Index")
                .field("value", "Expr"),
        )
}

fn statement_family() -> Family {
    Family::new("Stmt", "statement.py")
        .import("from typing import List, Optional, Any")
        .import("")
        .import("from src.pychart._interpreter.ast_nodes.expression import Expr")
        .import("from src.pychart._interpreter.token_type.token import Token")
        .variant(Variant::new("Expression").field("expr", "Expr"))
        .variant(Variant::new("Return").field("expr", "Expr"))
        .variant(
            Variant::new("Let")
                .field("name", "Token")
                .field("initializer", "Optional[Expr]"),
        )
        .variant(Variant::new("Block").field("statements", "List[Stmt]"))
        .variant(
            Variant::new("Function")
                .field("name", "Token")
                .field("params", "List[Token]")
                .field("body", "List[Stmt]"),
        )
        .variant(
            Variant::new("If")
                .field("if_test", "Expr")
                .field("if_body", "Stmt")
                .field("else_body", "Optional[Stmt]"),
        )
        .variant(
            Variant::new("While")
                .field("while_test", "Expr")
                .field("while_body", "Stmt"),
        )
        .variant(Variant::new("Break"))
}
