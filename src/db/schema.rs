use anyhow::{ Context, Result };
use sqlx::PgPool;

/// DDL creating every table the repositories use
pub const SCHEMA_SQL: &str = include_str!("../../database/schema/schema.sql");

/// DDL dropping the tables again
pub const DELETE_SQL: &str = include_str!("../../database/schema/delete.sql");

// Serializes concurrent schema setup (parallel test binaries, several dbutil runs)
const SCHEMA_LOCK_KEY: i64 = 0x5354_5544_494f;

/// Split a SQL script into statements, preserving dollar-quoted blocks
pub fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current_stmt = String::new();
    let mut in_dollar_quoted = false;
    let mut previous: Option<char> = None;

    for ch in sql.chars() {
        current_stmt.push(ch);

        if previous == Some('$') && ch == '$' {
            in_dollar_quoted = !in_dollar_quoted;
        }

        // Split on semicolon only if not in a dollar-quoted block
        if ch == ';' && !in_dollar_quoted {
            push_statement(&mut statements, &current_stmt);
            current_stmt.clear();
        }
        previous = Some(ch);
    }

    push_statement(&mut statements, &current_stmt);
    statements
}

fn push_statement(statements: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    let has_code = trimmed
        .lines()
        .any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with("--")
        });
    if has_code {
        statements.push(trimmed.to_string());
    }
}

/// Execute a SQL script in one transaction
pub async fn apply_schema(pool: &PgPool, sql: &str, verbose: bool) -> Result<()> {
    let mut tx = pool.begin().await.context("Failed to open schema transaction")?;

    sqlx
        ::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx).await
        .context("Failed to take schema lock")?;

    for stmt in split_sql_statements(sql) {
        if verbose {
            log::info!("Executing: {}", stmt);
        }
        sqlx
            ::query(&stmt)
            .execute(&mut *tx).await
            .with_context(|| format!("Failed to execute SQL: {}", stmt))?;
    }

    tx.commit().await.context("Failed to commit schema transaction")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_semicolons() {
        let statements = split_sql_statements("SELECT 1; SELECT 2;\nSELECT 3");
        assert_eq!(statements, vec!["SELECT 1;", "SELECT 2;", "SELECT 3"]);
    }

    #[test]
    fn keeps_dollar_quoted_bodies_together() {
        let sql =
            "CREATE FUNCTION f() RETURNS void AS $$ BEGIN PERFORM 1; END; $$ LANGUAGE plpgsql;\nSELECT 1;";
        let statements = split_sql_statements(sql);

        assert_eq!(statements.len(), 2);
        assert!(statements[0].contains("PERFORM 1; END;"));
        assert_eq!(statements[1], "SELECT 1;");
    }

    #[test]
    fn drops_comment_only_tail() {
        let statements = split_sql_statements("SELECT 1;\n-- trailing note\n");
        assert_eq!(statements, vec!["SELECT 1;"]);
    }

    #[test]
    fn bundled_schema_creates_every_table() {
        let statements = split_sql_statements(SCHEMA_SQL);
        for table in ["clients", "coaches", "halls", "trainings", "clients_trainings"] {
            let create = format!("CREATE TABLE IF NOT EXISTS {} (", table);
            assert!(
                statements.iter().any(|s| s.contains(&create)),
                "missing table {}",
                table
            );
        }
    }

    #[test]
    fn delete_script_drops_join_table_first() {
        let statements = split_sql_statements(DELETE_SQL);
        assert_eq!(statements.len(), 5);
        assert!(statements[0].ends_with("DROP TABLE IF EXISTS clients_trainings;"));
    }
}
