use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create connection_nodes table
        manager
            .create_table(
                Table::create()
                    .table(ConnectionNodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConnectionNodes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ConnectionNodes::StorageArea).double())
                    .col(ColumnDef::new(ConnectionNodes::InitialWaterlevel).double())
                    .col(ColumnDef::new(ConnectionNodes::TheGeom).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Create cross_section_definitions table
        manager
            .create_table(
                Table::create()
                    .table(CrossSectionDefinitions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrossSectionDefinitions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrossSectionDefinitions::Shape).integer())
                    .col(ColumnDef::new(CrossSectionDefinitions::Width).string())
                    .col(ColumnDef::new(CrossSectionDefinitions::Height).string())
                    .col(
                        ColumnDef::new(CrossSectionDefinitions::Code)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create channels table
        manager
            .create_table(
                Table::create()
                    .table(Channels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Channels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Channels::DisplayName).string().not_null())
                    .col(ColumnDef::new(Channels::Code).string().not_null())
                    .col(ColumnDef::new(Channels::CalculationType).integer())
                    .col(ColumnDef::new(Channels::DistCalcPoints).double())
                    .col(ColumnDef::new(Channels::ZoomCategory).integer())
                    .col(ColumnDef::new(Channels::ConnectionNodeStartId).integer())
                    .col(ColumnDef::new(Channels::ConnectionNodeEndId).integer())
                    .col(ColumnDef::new(Channels::TheGeom).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channels_connection_node_start_id")
                            .from(Channels::Table, Channels::ConnectionNodeStartId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channels_connection_node_end_id")
                            .from(Channels::Table, Channels::ConnectionNodeEndId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create cross_section_locations table
        manager
            .create_table(
                Table::create()
                    .table(CrossSectionLocations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrossSectionLocations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrossSectionLocations::ChannelId).integer())
                    .col(ColumnDef::new(CrossSectionLocations::DefinitionId).integer())
                    .col(ColumnDef::new(CrossSectionLocations::ReferenceLevel).double())
                    .col(ColumnDef::new(CrossSectionLocations::FrictionType).integer())
                    .col(ColumnDef::new(CrossSectionLocations::FrictionValue).double())
                    .col(ColumnDef::new(CrossSectionLocations::BankLevel).double())
                    .col(
                        ColumnDef::new(CrossSectionLocations::Code)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CrossSectionLocations::TheGeom).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cross_section_locations_channel_id")
                            .from(
                                CrossSectionLocations::Table,
                                CrossSectionLocations::ChannelId,
                            )
                            .to(Channels::Table, Channels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cross_section_locations_definition_id")
                            .from(
                                CrossSectionLocations::Table,
                                CrossSectionLocations::DefinitionId,
                            )
                            .to(CrossSectionDefinitions::Table, CrossSectionDefinitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create pipes table
        manager
            .create_table(
                Table::create()
                    .table(Pipes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pipes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pipes::DisplayName).string().not_null())
                    .col(ColumnDef::new(Pipes::Code).string().not_null())
                    .col(ColumnDef::new(Pipes::ProfileNum).integer())
                    .col(ColumnDef::new(Pipes::SewerageType).integer())
                    .col(ColumnDef::new(Pipes::CalculationType).integer())
                    .col(ColumnDef::new(Pipes::InvertLevelStartPoint).double())
                    .col(ColumnDef::new(Pipes::InvertLevelEndPoint).double())
                    .col(ColumnDef::new(Pipes::CrossSectionDefinitionId).integer())
                    .col(ColumnDef::new(Pipes::FrictionValue).double())
                    .col(ColumnDef::new(Pipes::FrictionType).integer())
                    .col(ColumnDef::new(Pipes::DistCalcPoints).double())
                    .col(ColumnDef::new(Pipes::Material).integer())
                    .col(ColumnDef::new(Pipes::OriginalLength).double())
                    .col(ColumnDef::new(Pipes::ZoomCategory).integer())
                    .col(ColumnDef::new(Pipes::ConnectionNodeStartId).integer())
                    .col(ColumnDef::new(Pipes::ConnectionNodeEndId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pipes_cross_section_definition_id")
                            .from(Pipes::Table, Pipes::CrossSectionDefinitionId)
                            .to(CrossSectionDefinitions::Table, CrossSectionDefinitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pipes_connection_node_start_id")
                            .from(Pipes::Table, Pipes::ConnectionNodeStartId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pipes_connection_node_end_id")
                            .from(Pipes::Table, Pipes::ConnectionNodeEndId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create culverts table
        manager
            .create_table(
                Table::create()
                    .table(Culverts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Culverts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Culverts::DisplayName).string().not_null())
                    .col(ColumnDef::new(Culverts::Code).string().not_null())
                    .col(ColumnDef::new(Culverts::CalculationType).integer())
                    .col(ColumnDef::new(Culverts::FrictionValue).double())
                    .col(ColumnDef::new(Culverts::FrictionType).integer())
                    .col(ColumnDef::new(Culverts::DistCalcPoints).double())
                    .col(ColumnDef::new(Culverts::ZoomCategory).integer())
                    .col(ColumnDef::new(Culverts::CrossSectionDefinitionId).integer())
                    .col(
                        ColumnDef::new(Culverts::DischargeCoefficientPositive)
                            .double()
                            .not_null()
                            .default(1.0),
                    )
                    .col(
                        ColumnDef::new(Culverts::DischargeCoefficientNegative)
                            .double()
                            .not_null()
                            .default(1.0),
                    )
                    .col(ColumnDef::new(Culverts::InvertLevelStartPoint).double())
                    .col(ColumnDef::new(Culverts::InvertLevelEndPoint).double())
                    .col(ColumnDef::new(Culverts::TheGeom).text().not_null())
                    .col(ColumnDef::new(Culverts::ConnectionNodeStartId).integer())
                    .col(ColumnDef::new(Culverts::ConnectionNodeEndId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_culverts_cross_section_definition_id")
                            .from(Culverts::Table, Culverts::CrossSectionDefinitionId)
                            .to(CrossSectionDefinitions::Table, CrossSectionDefinitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_culverts_connection_node_start_id")
                            .from(Culverts::Table, Culverts::ConnectionNodeStartId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_culverts_connection_node_end_id")
                            .from(Culverts::Table, Culverts::ConnectionNodeEndId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create weirs table
        manager
            .create_table(
                Table::create()
                    .table(Weirs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Weirs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Weirs::DisplayName).string().not_null())
                    .col(ColumnDef::new(Weirs::Code).string().not_null())
                    .col(ColumnDef::new(Weirs::CrestLevel).double())
                    .col(ColumnDef::new(Weirs::CrestType).integer())
                    .col(ColumnDef::new(Weirs::CrossSectionDefinitionId).integer())
                    .col(
                        ColumnDef::new(Weirs::Sewerage)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Weirs::DischargeCoefficientPositive).double())
                    .col(ColumnDef::new(Weirs::DischargeCoefficientNegative).double())
                    .col(ColumnDef::new(Weirs::External).boolean())
                    .col(ColumnDef::new(Weirs::ZoomCategory).integer())
                    .col(ColumnDef::new(Weirs::FrictionValue).double())
                    .col(ColumnDef::new(Weirs::FrictionType).integer())
                    .col(ColumnDef::new(Weirs::ConnectionNodeStartId).integer())
                    .col(ColumnDef::new(Weirs::ConnectionNodeEndId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weirs_cross_section_definition_id")
                            .from(Weirs::Table, Weirs::CrossSectionDefinitionId)
                            .to(CrossSectionDefinitions::Table, CrossSectionDefinitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weirs_connection_node_start_id")
                            .from(Weirs::Table, Weirs::ConnectionNodeStartId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weirs_connection_node_end_id")
                            .from(Weirs::Table, Weirs::ConnectionNodeEndId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create orifices table
        manager
            .create_table(
                Table::create()
                    .table(Orifices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orifices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orifices::DisplayName).string().not_null())
                    .col(ColumnDef::new(Orifices::Code).string().not_null())
                    .col(ColumnDef::new(Orifices::CrestLevel).double())
                    .col(
                        ColumnDef::new(Orifices::Sewerage)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Orifices::CrossSectionDefinitionId).integer())
                    .col(ColumnDef::new(Orifices::FrictionValue).double())
                    .col(ColumnDef::new(Orifices::FrictionType).integer())
                    .col(ColumnDef::new(Orifices::DischargeCoefficientPositive).double())
                    .col(ColumnDef::new(Orifices::DischargeCoefficientNegative).double())
                    .col(ColumnDef::new(Orifices::ZoomCategory).integer())
                    .col(ColumnDef::new(Orifices::CrestType).integer().default(4))
                    .col(ColumnDef::new(Orifices::ConnectionNodeStartId).integer())
                    .col(ColumnDef::new(Orifices::ConnectionNodeEndId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orifices_cross_section_definition_id")
                            .from(Orifices::Table, Orifices::CrossSectionDefinitionId)
                            .to(CrossSectionDefinitions::Table, CrossSectionDefinitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orifices_connection_node_start_id")
                            .from(Orifices::Table, Orifices::ConnectionNodeStartId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orifices_connection_node_end_id")
                            .from(Orifices::Table, Orifices::ConnectionNodeEndId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create pumpstations table
        manager
            .create_table(
                Table::create()
                    .table(Pumpstations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pumpstations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pumpstations::DisplayName).string().not_null())
                    .col(ColumnDef::new(Pumpstations::Code).string().not_null())
                    .col(ColumnDef::new(Pumpstations::Classification).integer())
                    .col(ColumnDef::new(Pumpstations::PumpType).integer())
                    .col(
                        ColumnDef::new(Pumpstations::Sewerage)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Pumpstations::StartLevel).double())
                    .col(ColumnDef::new(Pumpstations::LowerStopLevel).double())
                    .col(ColumnDef::new(Pumpstations::UpperStopLevel).double())
                    .col(ColumnDef::new(Pumpstations::Capacity).double())
                    .col(ColumnDef::new(Pumpstations::ZoomCategory).integer())
                    .col(ColumnDef::new(Pumpstations::ConnectionNodeStartId).integer())
                    .col(ColumnDef::new(Pumpstations::ConnectionNodeEndId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pumpstations_connection_node_start_id")
                            .from(Pumpstations::Table, Pumpstations::ConnectionNodeStartId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pumpstations_connection_node_end_id")
                            .from(Pumpstations::Table, Pumpstations::ConnectionNodeEndId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create manholes table
        manager
            .create_table(
                Table::create()
                    .table(Manholes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Manholes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Manholes::DisplayName).string().not_null())
                    .col(ColumnDef::new(Manholes::Code).string().not_null())
                    .col(
                        ColumnDef::new(Manholes::ConnectionNodeId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Manholes::Shape).string())
                    .col(ColumnDef::new(Manholes::Width).double())
                    .col(ColumnDef::new(Manholes::Length).double())
                    .col(ColumnDef::new(Manholes::ManholeIndicator).integer())
                    .col(ColumnDef::new(Manholes::CalculationType).integer())
                    .col(ColumnDef::new(Manholes::BottomLevel).double())
                    .col(ColumnDef::new(Manholes::SurfaceLevel).double())
                    .col(ColumnDef::new(Manholes::DrainLevel).double())
                    .col(ColumnDef::new(Manholes::SedimentLevel).double())
                    .col(ColumnDef::new(Manholes::ZoomCategory).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_manholes_connection_node_id")
                            .from(Manholes::Table, Manholes::ConnectionNodeId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create boundary_conditions_1d table
        manager
            .create_table(
                Table::create()
                    .table(BoundaryConditions1d::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BoundaryConditions1d::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BoundaryConditions1d::ConnectionNodeId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BoundaryConditions1d::BoundaryType).integer())
                    .col(ColumnDef::new(BoundaryConditions1d::Timeseries).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_boundary_conditions_1d_connection_node_id")
                            .from(
                                BoundaryConditions1d::Table,
                                BoundaryConditions1d::ConnectionNodeId,
                            )
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create laterals_1d table
        manager
            .create_table(
                Table::create()
                    .table(Laterals1d::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Laterals1d::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Laterals1d::ConnectionNodeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Laterals1d::Timeseries).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_laterals_1d_connection_node_id")
                            .from(Laterals1d::Table, Laterals1d::ConnectionNodeId)
                            .to(ConnectionNodes::Table, ConnectionNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create levees table
        manager
            .create_table(
                Table::create()
                    .table(Levees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Levees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Levees::Material).integer())
                    .col(ColumnDef::new(Levees::MaxBreachDepth).double())
                    .col(ColumnDef::new(Levees::CrestLevel).double())
                    .col(ColumnDef::new(Levees::Code).string().not_null())
                    .col(ColumnDef::new(Levees::TheGeom).text())
                    .to_owned(),
            )
            .await?;

        // Create obstacles table
        manager
            .create_table(
                Table::create()
                    .table(Obstacles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Obstacles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Obstacles::CrestLevel).double())
                    .col(ColumnDef::new(Obstacles::Code).string().not_null())
                    .col(ColumnDef::new(Obstacles::TheGeom).text())
                    .to_owned(),
            )
            .await?;

        // Create grid_refinements table
        manager
            .create_table(
                Table::create()
                    .table(GridRefinements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GridRefinements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GridRefinements::DisplayName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GridRefinements::RefinementLevel).integer())
                    .col(ColumnDef::new(GridRefinements::Code).string().not_null())
                    .col(ColumnDef::new(GridRefinements::TheGeom).text())
                    .to_owned(),
            )
            .await?;

        // Create grid_refinement_areas table
        manager
            .create_table(
                Table::create()
                    .table(GridRefinementAreas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GridRefinementAreas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GridRefinementAreas::DisplayName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GridRefinementAreas::RefinementLevel).integer())
                    .col(ColumnDef::new(GridRefinementAreas::Code).string().not_null())
                    .col(ColumnDef::new(GridRefinementAreas::TheGeom).text())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GridRefinementAreas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GridRefinements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Obstacles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Levees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Laterals1d::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BoundaryConditions1d::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Manholes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pumpstations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orifices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Weirs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Culverts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pipes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CrossSectionLocations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Channels::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CrossSectionDefinitions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ConnectionNodes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum ConnectionNodes {
    Table,
    Id,
    StorageArea,
    InitialWaterlevel,
    TheGeom,
}

#[derive(Iden)]
enum CrossSectionDefinitions {
    Table,
    Id,
    Shape,
    Width,
    Height,
    Code,
}

#[derive(Iden)]
enum Channels {
    Table,
    Id,
    DisplayName,
    Code,
    CalculationType,
    DistCalcPoints,
    ZoomCategory,
    ConnectionNodeStartId,
    ConnectionNodeEndId,
    TheGeom,
}

#[derive(Iden)]
enum CrossSectionLocations {
    Table,
    Id,
    ChannelId,
    DefinitionId,
    ReferenceLevel,
    FrictionType,
    FrictionValue,
    BankLevel,
    Code,
    TheGeom,
}

#[derive(Iden)]
enum Pipes {
    Table,
    Id,
    DisplayName,
    Code,
    ProfileNum,
    SewerageType,
    CalculationType,
    InvertLevelStartPoint,
    InvertLevelEndPoint,
    CrossSectionDefinitionId,
    FrictionValue,
    FrictionType,
    DistCalcPoints,
    Material,
    OriginalLength,
    ZoomCategory,
    ConnectionNodeStartId,
    ConnectionNodeEndId,
}

#[derive(Iden)]
enum Culverts {
    Table,
    Id,
    DisplayName,
    Code,
    CalculationType,
    FrictionValue,
    FrictionType,
    DistCalcPoints,
    ZoomCategory,
    CrossSectionDefinitionId,
    DischargeCoefficientPositive,
    DischargeCoefficientNegative,
    InvertLevelStartPoint,
    InvertLevelEndPoint,
    TheGeom,
    ConnectionNodeStartId,
    ConnectionNodeEndId,
}

#[derive(Iden)]
enum Weirs {
    Table,
    Id,
    DisplayName,
    Code,
    CrestLevel,
    CrestType,
    CrossSectionDefinitionId,
    Sewerage,
    DischargeCoefficientPositive,
    DischargeCoefficientNegative,
    External,
    ZoomCategory,
    FrictionValue,
    FrictionType,
    ConnectionNodeStartId,
    ConnectionNodeEndId,
}

#[derive(Iden)]
enum Orifices {
    Table,
    Id,
    DisplayName,
    Code,
    CrestLevel,
    Sewerage,
    CrossSectionDefinitionId,
    FrictionValue,
    FrictionType,
    DischargeCoefficientPositive,
    DischargeCoefficientNegative,
    ZoomCategory,
    CrestType,
    ConnectionNodeStartId,
    ConnectionNodeEndId,
}

#[derive(Iden)]
enum Pumpstations {
    Table,
    Id,
    DisplayName,
    Code,
    Classification,
    PumpType,
    Sewerage,
    StartLevel,
    LowerStopLevel,
    UpperStopLevel,
    Capacity,
    ZoomCategory,
    ConnectionNodeStartId,
    ConnectionNodeEndId,
}

#[derive(Iden)]
enum Manholes {
    Table,
    Id,
    DisplayName,
    Code,
    ConnectionNodeId,
    Shape,
    Width,
    Length,
    ManholeIndicator,
    CalculationType,
    BottomLevel,
    SurfaceLevel,
    DrainLevel,
    SedimentLevel,
    ZoomCategory,
}

#[derive(Iden)]
enum BoundaryConditions1d {
    #[iden = "boundary_conditions_1d"]
    Table,
    Id,
    ConnectionNodeId,
    BoundaryType,
    Timeseries,
}

#[derive(Iden)]
enum Laterals1d {
    #[iden = "laterals_1d"]
    Table,
    Id,
    ConnectionNodeId,
    Timeseries,
}

#[derive(Iden)]
enum Levees {
    Table,
    Id,
    Material,
    MaxBreachDepth,
    CrestLevel,
    Code,
    TheGeom,
}

#[derive(Iden)]
enum Obstacles {
    Table,
    Id,
    CrestLevel,
    Code,
    TheGeom,
}

#[derive(Iden)]
enum GridRefinements {
    Table,
    Id,
    DisplayName,
    RefinementLevel,
    Code,
    TheGeom,
}

#[derive(Iden)]
enum GridRefinementAreas {
    Table,
    Id,
    DisplayName,
    RefinementLevel,
    Code,
    TheGeom,
}
