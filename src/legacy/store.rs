use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr,
    FromQueryResult, JsonValue, Statement,
};

use crate::database::get_readonly_url;

/// Read-only handle on a legacy model database.
///
/// The store only knows two things: which columns a table has, and how to
/// select all rows projected onto a column list. Rows come back as JSON
/// maps so the migration can work field-by-field without a typed model for
/// every legacy table.
pub struct LegacyStore {
    db: DatabaseConnection,
}

impl LegacyStore {
    pub async fn open(database_path: &str) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(get_readonly_url(database_path));
        opt.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await?;
        Ok(Self { db })
    }

    /// Wrap an existing connection, e.g. an in-memory database in tests.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Column names of a legacy table, in table order.
    pub async fn columns(&self, table: &str) -> Result<Vec<String>, DbErr> {
        let stmt = Statement::from_string(
            DbBackend::Sqlite,
            format!("PRAGMA table_info({})", table),
        );
        let rows = self.db.query_all(stmt).await?;
        rows.iter()
            .map(|row| row.try_get::<String>("", "name"))
            .collect()
    }

    /// Select every row of `table` projected onto `columns`, in id order.
    pub async fn fetch_all(
        &self,
        table: &str,
        columns: &[String],
    ) -> Result<Vec<JsonValue>, DbErr> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", columns.join(", "), table);
        JsonValue::find_by_statement(Statement::from_string(DbBackend::Sqlite, sql))
            .all(&self.db)
            .await
    }
}
