// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-neutral schema snapshots used to check that the `SQLite` and
//! `MySQL` migration sets describe the same league tables.

use std::collections::{BTreeMap, BTreeSet};

use color_eyre::{eyre::Context, Result};
use diesel::sql_types::{Integer, Text};
use diesel::{MysqlConnection, QueryableByName, RunQueryDsl, SqliteConnection};

/// Tables every backend must define.
pub const LEAGUE_TABLES: [&str; 5] = ["game_slots", "games", "players", "statistics", "teams"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub tables: BTreeMap<String, Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: BTreeMap<String, Column>,
    pub primary_keys: BTreeSet<String>,
    pub foreign_keys: BTreeSet<ForeignKey>,
    pub unique_constraints: BTreeSet<Vec<String>>,
    /// Non-unique indexes, keyed by column list since names differ per backend.
    pub indexes: BTreeSet<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub kind: ColumnKind,
    pub nullable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColumnKind {
    Integer,
    Real,
    Text,
    Blob,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ForeignKey {
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
}

/// Maps a declared `SQLite` type onto its affinity.
#[must_use]
pub fn sqlite_kind(declared: &str) -> ColumnKind {
    let upper = declared.to_uppercase();
    if upper.contains("INT") {
        ColumnKind::Integer
    } else if upper.contains("REAL") || upper.contains("FLOA") || upper.contains("DOUB") {
        ColumnKind::Real
    } else if upper.contains("BLOB") {
        ColumnKind::Blob
    } else {
        ColumnKind::Text
    }
}

#[must_use]
pub fn mysql_kind(data_type: &str) -> ColumnKind {
    match data_type.to_uppercase().as_str() {
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => ColumnKind::Integer,
        "DECIMAL" | "NUMERIC" | "FLOAT" | "DOUBLE" | "REAL" => ColumnKind::Real,
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
            ColumnKind::Blob
        }
        _ => ColumnKind::Text,
    }
}

#[derive(QueryableByName)]
struct NameRow {
    #[diesel(sql_type = Text)]
    name: String,
}

pub fn introspect_sqlite(conn: &mut SqliteConnection) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct ColumnRow {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    #[derive(QueryableByName)]
    struct ForeignKeyRow {
        #[diesel(sql_type = Text)]
        table: String,
        #[diesel(sql_type = Text)]
        from: String,
        #[diesel(sql_type = Text)]
        to: String,
    }

    #[derive(QueryableByName)]
    struct IndexRow {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        origin: String,
    }

    let tables: Vec<NameRow> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type = 'table' \
         AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' \
         ORDER BY name",
    )
    .load(conn)
    .wrap_err("Failed to list SQLite tables")?;

    let mut schema = Schema::default();
    for NameRow { name: table_name } in tables {
        let mut table = Table::default();

        let columns: Vec<ColumnRow> =
            diesel::sql_query(format!("PRAGMA table_info({table_name})"))
                .load(conn)
                .wrap_err_with(|| format!("Failed to read columns of {table_name}"))?;
        for col in columns {
            if col.pk > 0 {
                table.primary_keys.insert(col.name.clone());
            }
            table.columns.insert(
                col.name,
                Column {
                    kind: sqlite_kind(&col.r#type),
                    nullable: col.notnull == 0,
                },
            );
        }

        let fks: Vec<ForeignKeyRow> =
            diesel::sql_query(format!("PRAGMA foreign_key_list({table_name})"))
                .load(conn)
                .wrap_err_with(|| format!("Failed to read foreign keys of {table_name}"))?;
        table.foreign_keys = fks
            .into_iter()
            .map(|fk| ForeignKey {
                from_column: fk.from,
                to_table: fk.table,
                to_column: fk.to,
            })
            .collect();

        let indexes: Vec<IndexRow> =
            diesel::sql_query(format!("PRAGMA index_list({table_name})"))
                .load(conn)
                .wrap_err_with(|| format!("Failed to read indexes of {table_name}"))?;
        for index in indexes {
            let columns: Vec<String> =
                diesel::sql_query(format!("PRAGMA index_info({})", index.name))
                    .load::<NameRow>(conn)
                    .wrap_err_with(|| format!("Failed to read columns of index {}", index.name))?
                    .into_iter()
                    .map(|row| row.name)
                    .collect();

            // origin 'u' is a UNIQUE clause; 'c' is CREATE INDEX.
            match index.origin.as_str() {
                "u" => {
                    table.unique_constraints.insert(columns);
                }
                "c" => {
                    table.indexes.insert(columns);
                }
                _ => {}
            }
        }

        schema.tables.insert(table_name, table);
    }

    Ok(schema)
}

#[allow(clippy::too_many_lines)]
pub fn introspect_mysql(conn: &mut MysqlConnection, database: &str) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct ColumnRow {
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Text)]
        data_type: String,
        #[diesel(sql_type = Text)]
        is_nullable: String,
        #[diesel(sql_type = Text)]
        column_key: String,
    }

    #[derive(QueryableByName)]
    #[allow(clippy::struct_field_names)]
    struct ForeignKeyRow {
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Text)]
        referenced_table_name: String,
        #[diesel(sql_type = Text)]
        referenced_column_name: String,
    }

    #[derive(QueryableByName)]
    struct IndexRow {
        #[diesel(sql_type = Text)]
        index_name: String,
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Integer)]
        non_unique: i32,
    }

    let tables: Vec<NameRow> = diesel::sql_query(
        "SELECT table_name AS name FROM information_schema.tables \
         WHERE table_schema = ? AND table_name != '__diesel_schema_migrations' \
         ORDER BY table_name",
    )
    .bind::<Text, _>(database)
    .load(conn)
    .wrap_err("Failed to list MySQL tables")?;

    let mut schema = Schema::default();
    for NameRow { name: table_name } in tables {
        let mut table = Table::default();

        let columns: Vec<ColumnRow> = diesel::sql_query(
            "SELECT column_name, data_type, is_nullable, column_key \
             FROM information_schema.columns \
             WHERE table_schema = ? AND table_name = ? ORDER BY ordinal_position",
        )
        .bind::<Text, _>(database)
        .bind::<Text, _>(&table_name)
        .load(conn)
        .wrap_err_with(|| format!("Failed to read columns of {table_name}"))?;
        for col in columns {
            if col.column_key == "PRI" {
                table.primary_keys.insert(col.column_name.clone());
            }
            table.columns.insert(
                col.column_name,
                Column {
                    kind: mysql_kind(&col.data_type),
                    nullable: col.is_nullable == "YES",
                },
            );
        }

        let fks: Vec<ForeignKeyRow> = diesel::sql_query(
            "SELECT column_name, referenced_table_name, referenced_column_name \
             FROM information_schema.key_column_usage \
             WHERE table_schema = ? AND table_name = ? AND referenced_table_name IS NOT NULL",
        )
        .bind::<Text, _>(database)
        .bind::<Text, _>(&table_name)
        .load(conn)
        .wrap_err_with(|| format!("Failed to read foreign keys of {table_name}"))?;
        table.foreign_keys = fks
            .into_iter()
            .map(|fk| ForeignKey {
                from_column: fk.column_name,
                to_table: fk.referenced_table_name,
                to_column: fk.referenced_column_name,
            })
            .collect();

        // information_schema.statistics covers UNIQUE KEYs and plain indexes.
        let index_rows: Vec<IndexRow> = diesel::sql_query(
            "SELECT index_name, column_name, non_unique FROM information_schema.statistics \
             WHERE table_schema = ? AND table_name = ? AND index_name != 'PRIMARY' \
             ORDER BY index_name, seq_in_index",
        )
        .bind::<Text, _>(database)
        .bind::<Text, _>(&table_name)
        .load(conn)
        .wrap_err_with(|| format!("Failed to read indexes of {table_name}"))?;

        let mut grouped: BTreeMap<String, (bool, Vec<String>)> = BTreeMap::new();
        for row in index_rows {
            let entry = grouped
                .entry(row.index_name)
                .or_insert_with(|| (row.non_unique == 0, Vec::new()));
            entry.1.push(row.column_name);
        }
        for (unique, columns) in grouped.into_values() {
            if unique {
                table.unique_constraints.insert(columns);
            } else {
                table.indexes.insert(columns);
            }
        }

        schema.tables.insert(table_name, table);
    }

    Ok(schema)
}

/// Lists every difference between the two snapshots. Empty means parity.
///
/// `InnoDB` creates an index for each foreign key column that lacks one, so
/// single-column indexes on foreign keys are tolerated when only `MySQL`
/// has them.
#[must_use]
pub fn schema_differences(sqlite: &Schema, mysql: &Schema) -> Vec<String> {
    let mut differences = Vec::new();

    for required in LEAGUE_TABLES {
        if !sqlite.tables.contains_key(required) {
            differences.push(format!("table '{required}' is missing from SQLite"));
        }
        if !mysql.tables.contains_key(required) {
            differences.push(format!("table '{required}' is missing from MySQL"));
        }
    }

    for (name, sqlite_table) in &sqlite.tables {
        let Some(mysql_table) = mysql.tables.get(name) else {
            if !LEAGUE_TABLES.contains(&name.as_str()) {
                differences.push(format!("table '{name}' exists only in SQLite"));
            }
            continue;
        };
        table_differences(name, sqlite_table, mysql_table, &mut differences);
    }

    for name in mysql.tables.keys() {
        if !sqlite.tables.contains_key(name) && !LEAGUE_TABLES.contains(&name.as_str()) {
            differences.push(format!("table '{name}' exists only in MySQL"));
        }
    }

    differences
}

fn table_differences(name: &str, sqlite: &Table, mysql: &Table, out: &mut Vec<String>) {
    for (column, sqlite_col) in &sqlite.columns {
        match mysql.columns.get(column) {
            None => out.push(format!("{name}.{column} exists only in SQLite")),
            Some(mysql_col) if mysql_col.kind != sqlite_col.kind => out.push(format!(
                "{name}.{column} type differs: SQLite {:?}, MySQL {:?}",
                sqlite_col.kind, mysql_col.kind
            )),
            Some(mysql_col) if mysql_col.nullable != sqlite_col.nullable => out.push(format!(
                "{name}.{column} nullability differs: SQLite {}, MySQL {}",
                sqlite_col.nullable, mysql_col.nullable
            )),
            Some(_) => {}
        }
    }
    for column in mysql.columns.keys() {
        if !sqlite.columns.contains_key(column) {
            out.push(format!("{name}.{column} exists only in MySQL"));
        }
    }

    if sqlite.primary_keys != mysql.primary_keys {
        out.push(format!(
            "{name} primary key differs: SQLite {:?}, MySQL {:?}",
            sqlite.primary_keys, mysql.primary_keys
        ));
    }
    if sqlite.foreign_keys != mysql.foreign_keys {
        out.push(format!(
            "{name} foreign keys differ: SQLite {:?}, MySQL {:?}",
            sqlite.foreign_keys, mysql.foreign_keys
        ));
    }
    if sqlite.unique_constraints != mysql.unique_constraints {
        out.push(format!(
            "{name} unique constraints differ: SQLite {:?}, MySQL {:?}",
            sqlite.unique_constraints, mysql.unique_constraints
        ));
    }

    for columns in sqlite.indexes.difference(&mysql.indexes) {
        out.push(format!("{name} index on {columns:?} is missing from MySQL"));
    }
    let fk_columns: BTreeSet<&str> = mysql
        .foreign_keys
        .iter()
        .map(|fk| fk.from_column.as_str())
        .collect();
    for columns in mysql.indexes.difference(&sqlite.indexes) {
        let implicit_fk_index =
            matches!(columns.as_slice(), [only] if fk_columns.contains(only.as_str()));
        if !implicit_fk_index {
            out.push(format!("{name} index on {columns:?} exists only in MySQL"));
        }
    }
}
