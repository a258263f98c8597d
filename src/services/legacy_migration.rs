//! Copies a legacy v2 model database into the new schema.
//!
//! One entity is migrated today: connection nodes, the root of the 1D
//! network. Further entity types must follow foreign-key order (nodes
//! before the structures that reference them).

use std::collections::BTreeSet;

use sea_orm::{
    DatabaseConnection, EntityName, EntityTrait, IdenStatic, IntoActiveModel, Iterable,
    TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tracing::{debug, info};

use crate::database::entities::connection_nodes;
use crate::database::migrations::Migrator;
use crate::errors::{GeometryError, MigrateError};
use crate::geometry;
use crate::legacy::entities::connection_nodes as legacy_nodes;
use crate::legacy::LegacyStore;

/// Target columns that must carry a value in every source row
const REQUIRED_COLUMNS: &[&str] = &["id", "the_geom"];

#[derive(Debug)]
pub struct MigrationReport {
    pub rows_copied: usize,
}

/// Copy every legacy connection node into the new schema.
///
/// The whole row set is materialized and converted before anything is
/// written; the writes then happen inside a single transaction. A failing
/// row therefore means zero rows land in the target. The target schema is
/// initialized first if needed, which is idempotent.
pub async fn migrate_connection_nodes(
    source: &LegacyStore,
    target: &DatabaseConnection,
) -> Result<MigrationReport, MigrateError> {
    Migrator::up(target, None).await?;

    let legacy_table = legacy_nodes::Entity.table_name();
    let target_columns: Vec<String> = connection_nodes::Column::iter()
        .map(|c| c.as_str().to_string())
        .collect();
    let legacy_columns: BTreeSet<String> =
        source.columns(legacy_table).await?.into_iter().collect();

    for column in REQUIRED_COLUMNS {
        if !legacy_columns.contains(*column) {
            return Err(MigrateError::MissingColumn {
                column: (*column).to_string(),
            });
        }
    }

    // Project onto the intersection of the two column sets; legacy-only
    // fields (provider code, auxiliary linestring) drop out here.
    let projection: Vec<String> = target_columns
        .iter()
        .filter(|c| legacy_columns.contains(*c))
        .cloned()
        .collect();
    debug!("Projecting {} onto: {}", legacy_table, projection.join(", "));

    let rows = source.fetch_all(legacy_table, &projection).await?;

    let mut models = Vec::with_capacity(rows.len());
    for row in &rows {
        models.push(convert_row(row, &target_columns)?);
    }

    let txn = target.begin().await.map_err(MigrateError::Transaction)?;
    let rows_copied = models.len();
    for model in models {
        connection_nodes::Entity::insert(model.into_active_model())
            .exec(&txn)
            .await
            .map_err(MigrateError::Transaction)?;
    }
    txn.commit().await.map_err(MigrateError::Transaction)?;

    info!("Copied {} connection nodes from {}", rows_copied, legacy_table);
    Ok(MigrationReport { rows_copied })
}

/// Build a target model from one projected source row. Geometry fields are
/// re-encoded as canonical EWKT; everything else passes through by name.
fn convert_row(
    row: &Value,
    target_columns: &[String],
) -> Result<connection_nodes::Model, MigrateError> {
    let row_id = row.get("id").and_then(Value::as_i64).unwrap_or_default();

    let mut fields = serde_json::Map::new();
    for column in target_columns {
        let value = row.get(column.as_str()).cloned().unwrap_or(Value::Null);
        let value = if column.contains("geom") && !value.is_null() {
            match value {
                Value::String(text) => {
                    let ewkt = geometry::reencode_ewkt(&text).map_err(|source| {
                        MigrateError::GeometryConversion {
                            row: row_id,
                            column: column.clone(),
                            source,
                        }
                    })?;
                    Value::String(ewkt)
                }
                _ => {
                    return Err(MigrateError::GeometryConversion {
                        row: row_id,
                        column: column.clone(),
                        source: GeometryError::NotText,
                    })
                }
            }
        } else {
            value
        };

        if value.is_null() && REQUIRED_COLUMNS.contains(&column.as_str()) {
            return Err(MigrateError::SchemaMismatch {
                row: row_id,
                column: column.clone(),
            });
        }
        fields.insert(column.clone(), value);
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|source| MigrateError::RowDecode { row: row_id, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_carries_fields_over_by_name() {
        let row = serde_json::json!({
            "id": 7,
            "storage_area": 12.5,
            "initial_waterlevel": 0.8,
            "the_geom": "SRID=4326;POINT(5.38 52.09)",
        });
        let columns: Vec<String> = ["id", "storage_area", "initial_waterlevel", "the_geom"]
            .iter()
            .map(|c| c.to_string())
            .collect();

        let model = convert_row(&row, &columns).unwrap();
        assert_eq!(model.id, 7);
        assert_eq!(model.storage_area, Some(12.5));
        assert_eq!(model.initial_waterlevel, Some(0.8));
        assert_eq!(model.the_geom, "SRID=4326;POINT(5.38 52.09)");
    }

    #[test]
    fn convert_rejects_null_geometry() {
        let row = serde_json::json!({ "id": 1, "the_geom": null });
        let columns: Vec<String> = ["id", "the_geom"].iter().map(|c| c.to_string()).collect();

        let err = convert_row(&row, &columns).unwrap_err();
        assert!(matches!(
            err,
            MigrateError::SchemaMismatch { row: 1, ref column } if column == "the_geom"
        ));
    }

    #[test]
    fn convert_rejects_malformed_geometry() {
        let row = serde_json::json!({ "id": 2, "the_geom": "POINT(nowhere)" });
        let columns: Vec<String> = ["id", "the_geom"].iter().map(|c| c.to_string()).collect();

        let err = convert_row(&row, &columns).unwrap_err();
        assert!(matches!(err, MigrateError::GeometryConversion { row: 2, .. }));
    }

    #[test]
    fn convert_rejects_non_text_geometry() {
        let row = serde_json::json!({ "id": 3, "the_geom": 42 });
        let columns: Vec<String> = ["id", "the_geom"].iter().map(|c| c.to_string()).collect();

        let err = convert_row(&row, &columns).unwrap_err();
        assert!(matches!(
            err,
            MigrateError::GeometryConversion {
                source: GeometryError::NotText,
                ..
            }
        ));
    }
}
