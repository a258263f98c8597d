use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create surface_parameters table
        manager
            .create_table(
                Table::create()
                    .table(SurfaceParameters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SurfaceParameters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SurfaceParameters::OutflowDelay)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurfaceParameters::SurfaceLayerThickness)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurfaceParameters::Infiltration)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurfaceParameters::MaxInfiltrationCapacity)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurfaceParameters::MinInfiltrationCapacity)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurfaceParameters::InfiltrationDecayConstant)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurfaceParameters::InfiltrationRecoveryConstant)
                            .double()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create surfaces table
        manager
            .create_table(
                Table::create()
                    .table(Surfaces::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Surfaces::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Surfaces::DisplayName).string().not_null())
                    .col(ColumnDef::new(Surfaces::Code).string().not_null())
                    .col(ColumnDef::new(Surfaces::ZoomCategory).integer())
                    .col(ColumnDef::new(Surfaces::NrOfInhabitants).double())
                    .col(ColumnDef::new(Surfaces::DryWeatherFlow).double())
                    .col(ColumnDef::new(Surfaces::Function).string())
                    .col(ColumnDef::new(Surfaces::Area).double())
                    .col(ColumnDef::new(Surfaces::SurfaceParametersId).integer())
                    .col(ColumnDef::new(Surfaces::TheGeom).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_surfaces_surface_parameters_id")
                            .from(Surfaces::Table, Surfaces::SurfaceParametersId)
                            .to(SurfaceParameters::Table, SurfaceParameters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create surface_maps table
        manager
            .create_table(
                Table::create()
                    .table(SurfaceMaps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SurfaceMaps::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SurfaceMaps::SurfaceType).string())
                    .col(ColumnDef::new(SurfaceMaps::SurfaceId).integer())
                    .col(
                        ColumnDef::new(SurfaceMaps::ConnectionNodeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SurfaceMaps::Percentage).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_surface_maps_connection_node_id")
                            .from(SurfaceMaps::Table, SurfaceMaps::ConnectionNodeId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create impervious_surfaces table
        manager
            .create_table(
                Table::create()
                    .table(ImperviousSurfaces::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImperviousSurfaces::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ImperviousSurfaces::DisplayName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ImperviousSurfaces::Code).string().not_null())
                    .col(
                        ColumnDef::new(ImperviousSurfaces::SurfaceClass)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ImperviousSurfaces::SurfaceSubClass).string())
                    .col(
                        ColumnDef::new(ImperviousSurfaces::SurfaceInclination)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ImperviousSurfaces::ZoomCategory).integer())
                    .col(ColumnDef::new(ImperviousSurfaces::NrOfInhabitants).double())
                    .col(ColumnDef::new(ImperviousSurfaces::DryWeatherFlow).double())
                    .col(ColumnDef::new(ImperviousSurfaces::Area).double())
                    .col(ColumnDef::new(ImperviousSurfaces::TheGeom).text())
                    .to_owned(),
            )
            .await?;

        // Create impervious_surface_maps table
        manager
            .create_table(
                Table::create()
                    .table(ImperviousSurfaceMaps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImperviousSurfaceMaps::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ImperviousSurfaceMaps::ImperviousSurfaceId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ImperviousSurfaceMaps::ConnectionNodeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ImperviousSurfaceMaps::Percentage).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_impervious_surface_maps_impervious_surface_id")
                            .from(
                                ImperviousSurfaceMaps::Table,
                                ImperviousSurfaceMaps::ImperviousSurfaceId,
                            )
                            .to(ImperviousSurfaces::Table, ImperviousSurfaces::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_impervious_surface_maps_connection_node_id")
                            .from(
                                ImperviousSurfaceMaps::Table,
                                ImperviousSurfaceMaps::ConnectionNodeId,
                            )
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ImperviousSurfaceMaps::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ImperviousSurfaces::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SurfaceMaps::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Surfaces::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SurfaceParameters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum ConnectionNodes {
    Table,
    Id,
}

#[derive(Iden)]
enum SurfaceParameters {
    Table,
    Id,
    OutflowDelay,
    SurfaceLayerThickness,
    Infiltration,
    MaxInfiltrationCapacity,
    MinInfiltrationCapacity,
    InfiltrationDecayConstant,
    InfiltrationRecoveryConstant,
}

#[derive(Iden)]
enum Surfaces {
    Table,
    Id,
    DisplayName,
    Code,
    ZoomCategory,
    NrOfInhabitants,
    DryWeatherFlow,
    Function,
    Area,
    SurfaceParametersId,
    TheGeom,
}

#[derive(Iden)]
enum SurfaceMaps {
    Table,
    Id,
    SurfaceType,
    SurfaceId,
    ConnectionNodeId,
    Percentage,
}

#[derive(Iden)]
enum ImperviousSurfaces {
    Table,
    Id,
    DisplayName,
    Code,
    SurfaceClass,
    SurfaceSubClass,
    SurfaceInclination,
    ZoomCategory,
    NrOfInhabitants,
    DryWeatherFlow,
    Area,
    TheGeom,
}

#[derive(Iden)]
enum ImperviousSurfaceMaps {
    Table,
    Id,
    ImperviousSurfaceId,
    ConnectionNodeId,
    Percentage,
}
