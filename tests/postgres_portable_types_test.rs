//! Integration tests for portable types on PostgreSQL
//!
//! Requires DATABASE_URL pointing at a disposable database:
//! `cargo test -- --ignored`

use typehaus::prelude::*;

async fn setup() -> TypeHaus {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let config = DatabaseConfig::new("postgresql".to_string(), database_url, 1, 2, 30, 600, 0);
    TypeHaus::new(config)
        .await
        .expect("Failed to connect to database")
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_portable_uuid_uses_native_uuid_column() {
    let typehaus = setup().await;
    let table = TableSchema::new("typehaus_pg_nodes")
        .column(ColumnSchema::new("id", ColumnType::PortableUuid).primary_key())
        .column(ColumnSchema::new("parent_id", ColumnType::PortableUuid));
    typehaus.auto_migrate(&table, true).await.unwrap();

    let pool = typehaus.pg_pool().expect("Postgres pool");
    let id = PortableUuid::new_v4();
    sqlx::query("INSERT INTO typehaus_pg_nodes (id, parent_id) VALUES ($1, $2)")
        .bind(id)
        .bind(Option::<PortableUuid>::None)
        .execute(pool)
        .await
        .unwrap();

    let row = sqlx::query("SELECT id, id::text AS id_text, parent_id FROM typehaus_pg_nodes")
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(row.try_get::<PortableUuid, _>("id").unwrap(), id);
    assert_eq!(
        row.try_get::<String, _>("id_text").unwrap(),
        id.as_uuid().to_string()
    );
    assert_eq!(row.try_get::<Option<PortableUuid>, _>("parent_id").unwrap(), None);

    let columns = typehaus.reflect_table("typehaus_pg_nodes").await.unwrap();
    assert_eq!(columns[0].column_type, ColumnType::Uuid);

    sqlx::query(&table.drop_table_sql(Dialect::Postgres).unwrap())
        .execute(pool)
        .await
        .unwrap();
}
