//! Portable identifier demo
//!
//! Creates a table on an in-memory SQLite database, stores a few rows
//! keyed by `PortableUuid` and prints the reflected schema alongside the
//! DDL the same table would get on the other dialects.

use typehaus::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DatabaseConfig::new(
        "sqlite".to_string(),
        "sqlite::memory:".to_string(),
        1,
        1,
        30,
        600,
        0,
    );
    let typehaus = TypeHaus::new(config).await?;

    let nodes = TableSchema::new("nodes")
        .column(ColumnSchema::new("id", ColumnType::PortableUuid).primary_key())
        .column(ColumnSchema::new("name", ColumnType::string(256)).not_null())
        .column(ColumnSchema::new("parent_id", ColumnType::PortableUuid));
    typehaus.auto_migrate(&nodes, true).await?;

    let pool = typehaus
        .sqlite_pool()
        .ok_or_else(|| anyhow::anyhow!("expected a SQLite pool"))?;

    let root = PortableUuid::new_v4();
    let child = PortableUuid::new_v4();
    for (id, name, parent_id) in [(root, "Codes", None), (child, "Themes", Some(root))] {
        sqlx::query("INSERT INTO nodes (id, name, parent_id) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(parent_id)
            .execute(pool)
            .await?;
    }

    let rows = sqlx::query("SELECT id, name, parent_id FROM nodes")
        .fetch_all(pool)
        .await?;
    println!("Stored rows:");
    for row in rows {
        let id: PortableUuid = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let parent_id: Option<PortableUuid> = row.try_get("parent_id")?;
        println!("  {} {} parent={:?}", id, name, parent_id.map(|p| p.to_string()));
    }

    println!("Reflected columns:");
    for column in typehaus.reflect_table("nodes").await? {
        println!("  {} {} -> {:?}", column.name, column.raw_type, column.column_type);
    }

    for dialect in Dialect::ALL {
        println!("{}: {}", dialect, nodes.create_table_sql(dialect)?);
    }

    Ok(())
}
