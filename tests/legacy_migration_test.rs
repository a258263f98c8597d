use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    EntityTrait, PaginatorTrait, Schema, Set, Statement,
};
use sea_orm_migration::MigratorTrait;

use hydromodel::database::entities::connection_nodes;
use hydromodel::database::migrations::Migrator;
use hydromodel::database::{self, MigrateDirection};
use hydromodel::errors::MigrateError;
use hydromodel::geometry::Geometry;
use hydromodel::legacy::entities::connection_nodes as legacy_nodes;
use hydromodel::legacy::LegacyStore;
use hydromodel::services::legacy_migration::migrate_connection_nodes;

async fn memory_db() -> DatabaseConnection {
    // One pooled connection only: a second connection to "sqlite::memory:"
    // would open its own private database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1);
    Database::connect(opt)
        .await
        .expect("connect to in-memory database")
}

async fn legacy_store() -> LegacyStore {
    let db = memory_db().await;
    let schema = Schema::new(DbBackend::Sqlite);
    let stmt = schema.create_table_from_entity(legacy_nodes::Entity);
    db.execute(db.get_database_backend().build(&stmt))
        .await
        .expect("create legacy table");
    LegacyStore::from_connection(db)
}

async fn seed_node(
    store: &LegacyStore,
    id: i32,
    storage_area: Option<f64>,
    initial_waterlevel: Option<f64>,
    the_geom: &str,
) {
    legacy_nodes::ActiveModel {
        id: Set(id),
        storage_area: Set(storage_area),
        initial_waterlevel: Set(initial_waterlevel),
        code: Set(format!("prov-{}", id)),
        the_geom: Set(the_geom.to_string()),
        the_geom_linestring: Set(None),
    }
    .insert(store.connection())
    .await
    .expect("seed legacy node");
}

#[tokio::test]
async fn migrates_nodes_field_for_field() {
    let source = legacy_store().await;
    seed_node(
        &source,
        7,
        Some(12.5),
        Some(0.8),
        "SRID=4326;POINT(5.38 52.09)",
    )
    .await;
    seed_node(&source, 8, None, Some(-1.2), "POINT( 4.89   52.37 )").await;

    let target = memory_db().await;
    let report = migrate_connection_nodes(&source, &target)
        .await
        .expect("migration succeeds");
    assert_eq!(report.rows_copied, 2);

    let node = connection_nodes::Entity::find_by_id(7)
        .one(&target)
        .await
        .unwrap()
        .expect("node 7 was copied");
    assert_eq!(node.storage_area, Some(12.5));
    assert_eq!(node.initial_waterlevel, Some(0.8));
    assert_eq!(node.the_geom, "SRID=4326;POINT(5.38 52.09)");

    // Geometry without an SRID prefix is normalised to canonical EWKT;
    // the shape survives the round-trip unchanged
    let node = connection_nodes::Entity::find_by_id(8)
        .one(&target)
        .await
        .unwrap()
        .expect("node 8 was copied");
    assert_eq!(node.storage_area, None);
    assert_eq!(
        node.the_geom.parse::<Geometry>().unwrap(),
        "POINT(4.89 52.37)".parse::<Geometry>().unwrap()
    );
}

#[tokio::test]
async fn empty_legacy_table_yields_an_initialized_empty_target() {
    let source = legacy_store().await;
    let target = memory_db().await;

    let report = migrate_connection_nodes(&source, &target)
        .await
        .expect("migration of empty table succeeds");
    assert_eq!(report.rows_copied, 0);

    // The target schema exists, it just holds no rows
    let count = connection_nodes::Entity::find().count(&target).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn malformed_geometry_commits_nothing() {
    let source = legacy_store().await;
    seed_node(&source, 1, Some(1.0), None, "SRID=4326;POINT(1 2)").await;
    seed_node(&source, 2, Some(2.0), None, "POINT(nowhere at all)").await;

    let target = memory_db().await;
    let err = migrate_connection_nodes(&source, &target).await.unwrap_err();
    assert!(matches!(err, MigrateError::GeometryConversion { row: 2, .. }));

    let count = connection_nodes::Entity::find().count(&target).await.unwrap();
    assert_eq!(count, 0, "no partial copy may remain");
}

#[tokio::test]
async fn null_geometry_is_a_schema_mismatch() {
    // Older tooling left the geometry column nullable, so build the legacy
    // table raw instead of from the typed model
    let db = memory_db().await;
    db.execute(Statement::from_string(
        DbBackend::Sqlite,
        "CREATE TABLE v2_connection_nodes (id integer primary key, \
         storage_area double, initial_waterlevel double, \
         code varchar(100), the_geom text, the_geom_linestring text)"
            .to_string(),
    ))
    .await
    .expect("create nullable legacy table");
    db.execute(Statement::from_string(
        DbBackend::Sqlite,
        "INSERT INTO v2_connection_nodes (id, storage_area, code, the_geom) \
         VALUES (5, 1.5, 'prov-5', NULL)"
            .to_string(),
    ))
    .await
    .expect("seed raw legacy row");
    let source = LegacyStore::from_connection(db);

    let target = memory_db().await;
    let err = migrate_connection_nodes(&source, &target).await.unwrap_err();
    assert!(matches!(
        err,
        MigrateError::SchemaMismatch { row: 5, ref column } if column == "the_geom"
    ));

    let count = connection_nodes::Entity::find().count(&target).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn source_without_required_column_is_rejected() {
    let db = memory_db().await;
    db.execute(Statement::from_string(
        DbBackend::Sqlite,
        "CREATE TABLE v2_connection_nodes (id integer primary key, storage_area double)"
            .to_string(),
    ))
    .await
    .expect("create truncated legacy table");
    let source = LegacyStore::from_connection(db);

    let target = memory_db().await;
    let err = migrate_connection_nodes(&source, &target).await.unwrap_err();
    assert!(matches!(
        err,
        MigrateError::MissingColumn { ref column } if column == "the_geom"
    ));
}

#[tokio::test]
async fn schema_initialization_is_idempotent() {
    let target = memory_db().await;
    Migrator::up(&target, None).await.expect("first init");

    connection_nodes::ActiveModel {
        id: Set(1),
        storage_area: Set(Some(3.0)),
        initial_waterlevel: Set(None),
        the_geom: Set("SRID=4326;POINT(0 0)".to_string()),
    }
    .insert(&target)
    .await
    .expect("insert into initialized schema");

    // Re-running initialization must not touch existing data
    Migrator::up(&target, None).await.expect("second init");
    let count = connection_nodes::Entity::find().count(&target).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn migrate_database_initializes_a_file_backed_schema() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join("model.sqlite");
    let path = path.to_str().expect("utf-8 path");

    database::migrate_database(path, MigrateDirection::Up)
        .await
        .expect("first init");
    database::migrate_database(path, MigrateDirection::Up)
        .await
        .expect("re-running init is a no-op");

    let db = database::establish_connection(&database::get_database_url(Some(path)))
        .await
        .expect("open initialized database");
    let count = connection_nodes::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn rerunning_the_copy_rolls_back_on_conflict() {
    let source = legacy_store().await;
    seed_node(&source, 1, Some(1.0), None, "SRID=4326;POINT(1 1)").await;
    seed_node(&source, 2, Some(2.0), None, "SRID=4326;POINT(2 2)").await;

    let target = memory_db().await;
    migrate_connection_nodes(&source, &target)
        .await
        .expect("first copy succeeds");

    // The second run collides on the primary keys and must leave the
    // target exactly as the first run did
    let err = migrate_connection_nodes(&source, &target).await.unwrap_err();
    assert!(matches!(err, MigrateError::Transaction(_)));

    let count = connection_nodes::Entity::find().count(&target).await.unwrap();
    assert_eq!(count, 2);
}
