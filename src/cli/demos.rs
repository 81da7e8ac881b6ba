//! Built-in demo statements

use crate::translate;

/// Statements translated by `sql2mongo demos`.
pub const DEMO_STATEMENTS: &[&str] = &[
    "SELECT nombre, edad FROM usuarios WHERE edad > 20;",
    "SELECT nombre, libro_id, text_id FROM productos WHERE precio >= 100 AND categoria = 'libros' LIMIT 10;",
    "INSERT INTO usuarios (nombre,edad,email) VALUES ('Ana', 28, 'ana@mail.com');",
    "UPDATE usuarios SET puntos = 100 WHERE id = 5;",
    "DELETE FROM sesiones WHERE expirado = 1;",
    "SELECT id FROM users WHERE id = 2;",
];

/// One translated demo statement.
#[derive(Debug)]
pub struct DemoOutcome {
    pub sql: &'static str,
    /// The command, or the error message when translation failed
    pub result: Result<String, String>,
}

impl DemoOutcome {
    /// Text for stdout on success; on failure, the `ERROR:` line meant for
    /// stderr.
    pub fn render(&self) -> Result<String, String> {
        match &self.result {
            Ok(command) => Ok(format!("-- SQL: {}\n{}", self.sql, command)),
            Err(message) => Err(format!("ERROR: {}", message)),
        }
    }
}

/// Translates every demo statement. A failing statement does not stop the
/// others.
pub fn run_demos() -> Vec<DemoOutcome> {
    DEMO_STATEMENTS
        .iter()
        .map(|&sql| DemoOutcome {
            sql,
            result: translate(sql)
                .map(|t| t.command)
                .map_err(|e| e.to_string()),
        })
        .collect()
}
