//! SQL executor: a keyword classifier over normalized statement text,
//! answering from fixed in-memory sample tables.

use crate::error::ExecError;
use crate::result::{Console, ExecutionResult, SEPARATOR};

/// Sample `users` table: (id, name, email).
const USERS: &[(u32, &str, &str)] = &[
    (1, "John Doe", "john@example.com"),
    (2, "Jane Smith", "jane@example.com"),
    (3, "Bob Johnson", "bob@example.com"),
];

/// Sample `products` table: (id, name, price).
const PRODUCTS: &[(u32, &str, &str)] = &[
    (1, "Mechanical Keyboard", "89.99"),
    (2, "Laptop Stand", "34.50"),
    (3, "USB-C Hub", "24.99"),
    (4, "Webcam Cover", "4.99"),
];

pub fn run(code: &str) -> Result<ExecutionResult, ExecError> {
    let normalized = normalize(code);
    let mut console = Console::new();

    // Classify on the statement's leading keyword, not on substrings:
    // a CREATE or INSERT mentioning the word "select" in an identifier
    // or string value must not take the SELECT branch.
    if normalized.starts_with("select") {
        if !normalized.contains(" from ") {
            return Err(ExecError::Syntax(
                "SELECT statement is missing a FROM clause".to_string(),
            ));
        }
        if normalized.contains("from users") {
            select_users(&mut console);
        } else if normalized.contains("from products") {
            select_products(&mut console);
        } else {
            console.line("Executing SELECT query");
            console.line(SEPARATOR);
            console.line("0 rows returned");
        }
    } else if normalized.starts_with("insert into") {
        console.line("Executing INSERT query");
        console.line(SEPARATOR);
        console.line("1 row inserted successfully");
    } else if normalized.starts_with("update ") {
        console.line("Executing UPDATE query");
        console.line(SEPARATOR);
        console.line("1 row updated successfully");
    } else if normalized.starts_with("delete") {
        console.line("Executing DELETE query");
        console.line(SEPARATOR);
        console.line("1 row deleted successfully");
    } else if normalized.starts_with("create table") {
        console.line("Executing CREATE TABLE statement");
        console.line(SEPARATOR);
        console.line("Table created successfully");
    } else {
        console.line("Executing SQL query");
        console.line(SEPARATOR);
        console.line("Query executed successfully");
    }

    Ok(console.finish())
}

fn select_users(console: &mut Console) {
    console.line("Executing SELECT query on users table");
    console.line(SEPARATOR);
    console.line("id | name        | email");
    console.line(SEPARATOR);
    for (id, name, email) in USERS {
        console.line(format!("{id}  | {name:<11} | {email}"));
    }
    console.line(SEPARATOR);
    console.line(format!("{} rows returned", USERS.len()));
}

fn select_products(console: &mut Console) {
    console.line("Executing SELECT query on products table");
    console.line(SEPARATOR);
    console.line("id | name                 | price");
    console.line(SEPARATOR);
    for (id, name, price) in PRODUCTS {
        console.line(format!("{id}  | {name:<20} | {price}"));
    }
    console.line(SEPARATOR);
    console.line(format!("{} rows returned", PRODUCTS.len()));
}

/// Lowercase, drop `--` line comments, and collapse all whitespace runs
/// to single spaces, so the classifier sees one canonical form that
/// starts at the first real statement regardless of layout.
fn normalize(code: &str) -> String {
    code.lines()
        .map(|line| match line.find("--") {
            Some(at) => &line[..at],
            None => line,
        })
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
