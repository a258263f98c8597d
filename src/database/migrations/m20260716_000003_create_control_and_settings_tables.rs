use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create control_groups table
        manager
            .create_table(
                Table::create()
                    .table(ControlGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ControlGroups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ControlGroups::Name).string())
                    .col(ColumnDef::new(ControlGroups::Description).text())
                    .to_owned(),
            )
            .await?;

        // Create control_measure_groups table
        manager
            .create_table(
                Table::create()
                    .table(ControlMeasureGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ControlMeasureGroups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create control_measure_maps table
        manager
            .create_table(
                Table::create()
                    .table(ControlMeasureMaps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ControlMeasureMaps::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ControlMeasureMaps::MeasureGroupId).integer())
                    .col(ColumnDef::new(ControlMeasureMaps::ObjectType).string())
                    .col(ColumnDef::new(ControlMeasureMaps::ObjectId).integer())
                    .col(ColumnDef::new(ControlMeasureMaps::Weight).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_control_measure_maps_measure_group_id")
                            .from(
                                ControlMeasureMaps::Table,
                                ControlMeasureMaps::MeasureGroupId,
                            )
                            .to(ControlMeasureGroups::Table, ControlMeasureGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create the five control rule tables
        manager
            .create_table(
                Table::create()
                    .table(ControlTables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ControlTables::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ControlTables::MeasureVariable).string())
                    .col(ColumnDef::new(ControlTables::MeasureOperator).string())
                    .col(ColumnDef::new(ControlTables::ActionType).string())
                    .col(ColumnDef::new(ControlTables::ActionTable).text())
                    .col(ColumnDef::new(ControlTables::TargetType).string())
                    .col(ColumnDef::new(ControlTables::TargetId).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ControlPid::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ControlPid::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ControlPid::MeasureVariable).string())
                    .col(ColumnDef::new(ControlPid::Setpoint).double())
                    .col(ColumnDef::new(ControlPid::Kp).double())
                    .col(ColumnDef::new(ControlPid::Ki).double())
                    .col(ColumnDef::new(ControlPid::Kd).double())
                    .col(ColumnDef::new(ControlPid::ActionType).string())
                    .col(ColumnDef::new(ControlPid::TargetType).string())
                    .col(ColumnDef::new(ControlPid::TargetId).integer())
                    .col(ColumnDef::new(ControlPid::TargetUpperLimit).string())
                    .col(ColumnDef::new(ControlPid::TargetLowerLimit).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ControlDelta::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ControlDelta::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ControlDelta::MeasureVariable).string())
                    .col(ColumnDef::new(ControlDelta::MeasureDelta).double())
                    .col(ColumnDef::new(ControlDelta::MeasureDt).double())
                    .col(ColumnDef::new(ControlDelta::ActionType).string())
                    .col(ColumnDef::new(ControlDelta::ActionValue).string())
                    .col(ColumnDef::new(ControlDelta::ActionTime).double())
                    .col(ColumnDef::new(ControlDelta::TargetType).string())
                    .col(ColumnDef::new(ControlDelta::TargetId).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ControlMemory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ControlMemory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ControlMemory::MeasureVariable).string())
                    .col(ColumnDef::new(ControlMemory::UpperThreshold).double())
                    .col(ColumnDef::new(ControlMemory::LowerThreshold).double())
                    .col(ColumnDef::new(ControlMemory::ActionType).string())
                    .col(ColumnDef::new(ControlMemory::ActionValue).string())
                    .col(ColumnDef::new(ControlMemory::TargetType).string())
                    .col(ColumnDef::new(ControlMemory::TargetId).integer())
                    .col(
                        ColumnDef::new(ControlMemory::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ControlMemory::IsInverse)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ControlTimed::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ControlTimed::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ControlTimed::ActionType).string())
                    .col(ColumnDef::new(ControlTimed::ActionTable).text())
                    .col(ColumnDef::new(ControlTimed::TargetType).string())
                    .col(ColumnDef::new(ControlTimed::TargetId).integer())
                    .to_owned(),
            )
            .await?;

        // Create controls table
        manager
            .create_table(
                Table::create()
                    .table(Controls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Controls::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Controls::ControlGroupId).integer())
                    .col(ColumnDef::new(Controls::ControlType).string())
                    .col(ColumnDef::new(Controls::ControlId).integer())
                    .col(ColumnDef::new(Controls::MeasureGroupId).integer())
                    .col(ColumnDef::new(Controls::MeasureFrequency).integer())
                    .col(ColumnDef::new(Controls::Start).string())
                    .col(ColumnDef::new(Controls::End).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_controls_control_group_id")
                            .from(Controls::Table, Controls::ControlGroupId)
                            .to(ControlGroups::Table, ControlGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_controls_measure_group_id")
                            .from(Controls::Table, Controls::MeasureGroupId)
                            .to(ControlMeasureGroups::Table, ControlMeasureGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create numerical_settings table
        manager
            .create_table(
                Table::create()
                    .table(NumericalSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NumericalSettings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NumericalSettings::CflStrictnessFactor1d).double())
                    .col(ColumnDef::new(NumericalSettings::CflStrictnessFactor2d).double())
                    .col(ColumnDef::new(NumericalSettings::ConvergenceCg).double())
                    .col(ColumnDef::new(NumericalSettings::ConvergenceEps).double())
                    .col(ColumnDef::new(NumericalSettings::FlowDirectionThreshold).double())
                    .col(
                        ColumnDef::new(NumericalSettings::FrictShallowWaterCorrection).integer(),
                    )
                    .col(
                        ColumnDef::new(NumericalSettings::GeneralNumericalThreshold).double(),
                    )
                    .col(ColumnDef::new(NumericalSettings::IntegrationMethod).integer())
                    .col(ColumnDef::new(NumericalSettings::LimiterGrad1d).integer())
                    .col(ColumnDef::new(NumericalSettings::LimiterGrad2d).integer())
                    .col(
                        ColumnDef::new(NumericalSettings::LimiterSlopeCrossectionalArea2d)
                            .integer(),
                    )
                    .col(ColumnDef::new(NumericalSettings::LimiterSlopeFriction2d).integer())
                    .col(ColumnDef::new(NumericalSettings::MaxNonlinIterations).integer())
                    .col(
                        ColumnDef::new(NumericalSettings::MaxDegree)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(NumericalSettings::MinimumFrictionVelocity).double())
                    .col(ColumnDef::new(NumericalSettings::MinimumSurfaceArea).double())
                    .col(ColumnDef::new(NumericalSettings::PreconCg).integer())
                    .col(ColumnDef::new(NumericalSettings::PreissmannSlot).double())
                    .col(ColumnDef::new(NumericalSettings::PumpImplicitRatio).double())
                    .col(
                        ColumnDef::new(NumericalSettings::ThinWaterLayerDefinition).double(),
                    )
                    .col(
                        ColumnDef::new(NumericalSettings::UseOfCg)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(NumericalSettings::UseOfNestedNewton)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // Create groundwater table
        manager
            .create_table(
                Table::create()
                    .table(Groundwater::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Groundwater::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Groundwater::GroundwaterImperviousLayerLevel).double(),
                    )
                    .col(
                        ColumnDef::new(Groundwater::GroundwaterImperviousLayerLevelFile)
                            .string(),
                    )
                    .col(
                        ColumnDef::new(Groundwater::GroundwaterImperviousLayerLevelType)
                            .integer(),
                    )
                    .col(ColumnDef::new(Groundwater::PhreaticStorageCapacity).double())
                    .col(ColumnDef::new(Groundwater::PhreaticStorageCapacityFile).string())
                    .col(ColumnDef::new(Groundwater::PhreaticStorageCapacityType).integer())
                    .col(ColumnDef::new(Groundwater::EquilibriumInfiltrationRate).double())
                    .col(
                        ColumnDef::new(Groundwater::EquilibriumInfiltrationRateFile).string(),
                    )
                    .col(
                        ColumnDef::new(Groundwater::EquilibriumInfiltrationRateType)
                            .integer(),
                    )
                    .col(ColumnDef::new(Groundwater::InitialInfiltrationRate).double())
                    .col(ColumnDef::new(Groundwater::InitialInfiltrationRateFile).string())
                    .col(ColumnDef::new(Groundwater::InitialInfiltrationRateType).integer())
                    .col(ColumnDef::new(Groundwater::InfiltrationDecayPeriod).double())
                    .col(ColumnDef::new(Groundwater::InfiltrationDecayPeriodFile).string())
                    .col(ColumnDef::new(Groundwater::InfiltrationDecayPeriodType).integer())
                    .col(ColumnDef::new(Groundwater::GroundwaterHydroConnectivity).double())
                    .col(
                        ColumnDef::new(Groundwater::GroundwaterHydroConnectivityFile)
                            .string(),
                    )
                    .col(
                        ColumnDef::new(Groundwater::GroundwaterHydroConnectivityType)
                            .integer(),
                    )
                    .col(ColumnDef::new(Groundwater::DisplayName).string())
                    .col(ColumnDef::new(Groundwater::Leakage).double())
                    .col(ColumnDef::new(Groundwater::LeakageFile).string())
                    .to_owned(),
            )
            .await?;

        // Create interflow table
        manager
            .create_table(
                Table::create()
                    .table(Interflow::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Interflow::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Interflow::InterflowType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Interflow::Porosity).double())
                    .col(ColumnDef::new(Interflow::PorosityFile).string())
                    .col(ColumnDef::new(Interflow::PorosityLayerThickness).double())
                    .col(ColumnDef::new(Interflow::ImperviousLayerElevation).double())
                    .col(ColumnDef::new(Interflow::HydraulicConductivity).double())
                    .col(ColumnDef::new(Interflow::HydraulicConductivityFile).string())
                    .col(ColumnDef::new(Interflow::DisplayName).string())
                    .to_owned(),
            )
            .await?;

        // Create simple_infiltration table
        manager
            .create_table(
                Table::create()
                    .table(SimpleInfiltration::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SimpleInfiltration::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SimpleInfiltration::InfiltrationRate)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SimpleInfiltration::InfiltrationRateFile).string())
                    .col(
                        ColumnDef::new(SimpleInfiltration::InfiltrationSurfaceOption)
                            .integer(),
                    )
                    .col(
                        ColumnDef::new(SimpleInfiltration::MaxInfiltrationCapacityFile)
                            .text(),
                    )
                    .col(ColumnDef::new(SimpleInfiltration::DisplayName).string())
                    .to_owned(),
            )
            .await?;

        // Create global_settings table
        manager
            .create_table(
                Table::create()
                    .table(GlobalSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GlobalSettings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GlobalSettings::Use2dFlow)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GlobalSettings::Use1dFlow)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GlobalSettings::Use2dRain)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(GlobalSettings::ManholeStorageArea).double())
                    .col(ColumnDef::new(GlobalSettings::Name).string().unique_key())
                    .col(
                        ColumnDef::new(GlobalSettings::SimTimeStep)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GlobalSettings::MinimumSimTimeStep).double())
                    .col(ColumnDef::new(GlobalSettings::MaximumSimTimeStep).double())
                    .col(
                        ColumnDef::new(GlobalSettings::NrTimesteps)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GlobalSettings::StartTime).date_time())
                    .col(ColumnDef::new(GlobalSettings::StartDate).date().not_null())
                    .col(ColumnDef::new(GlobalSettings::GridSpace).double().not_null())
                    .col(
                        ColumnDef::new(GlobalSettings::DistCalcPoints)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GlobalSettings::Kmax).integer().not_null())
                    .col(ColumnDef::new(GlobalSettings::GuessDams).integer())
                    .col(
                        ColumnDef::new(GlobalSettings::TableStepSize)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GlobalSettings::Advection1d)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GlobalSettings::Advection2d)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GlobalSettings::DemFile).string())
                    .col(ColumnDef::new(GlobalSettings::EpsgCode).integer())
                    .col(ColumnDef::new(GlobalSettings::FrictType).integer())
                    .col(ColumnDef::new(GlobalSettings::FrictCoef).double().not_null())
                    .col(ColumnDef::new(GlobalSettings::FrictCoefFile).string())
                    .col(
                        ColumnDef::new(GlobalSettings::FrictAvg)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(GlobalSettings::WaterLevelIniType).integer())
                    .col(
                        ColumnDef::new(GlobalSettings::InitialWaterlevel)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GlobalSettings::InitialWaterlevelFile).string())
                    .col(ColumnDef::new(GlobalSettings::InitialGroundwaterLevel).double())
                    .col(
                        ColumnDef::new(GlobalSettings::InitialGroundwaterLevelFile).string(),
                    )
                    .col(
                        ColumnDef::new(GlobalSettings::InitialGroundwaterLevelType)
                            .integer(),
                    )
                    .col(ColumnDef::new(GlobalSettings::InterceptionGlobal).double())
                    .col(ColumnDef::new(GlobalSettings::InterceptionFile).string())
                    .col(
                        ColumnDef::new(GlobalSettings::DemObstacleDetection)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(GlobalSettings::DemObstacleHeight).double())
                    .col(ColumnDef::new(GlobalSettings::EmbeddedCutoffThreshold).double())
                    .col(
                        ColumnDef::new(GlobalSettings::Use0dInflow)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(GlobalSettings::ControlGroupId).integer())
                    .col(
                        ColumnDef::new(GlobalSettings::FloodingThreshold)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GlobalSettings::TimestepPlus)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(GlobalSettings::MaxAngle1dAdvection).double())
                    .col(ColumnDef::new(GlobalSettings::OutputTimeStep).double())
                    .col(ColumnDef::new(GlobalSettings::WindShieldingFile).string())
                    .col(ColumnDef::new(GlobalSettings::TableStepSize1d).double())
                    .col(ColumnDef::new(GlobalSettings::TableStepSizeVolume2d).double())
                    .col(
                        ColumnDef::new(GlobalSettings::NumericalSettingsId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GlobalSettings::GroundwaterSettingsId).integer())
                    .col(
                        ColumnDef::new(GlobalSettings::SimpleInfiltrationSettingsId)
                            .integer(),
                    )
                    .col(ColumnDef::new(GlobalSettings::InterflowSettingsId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_global_settings_numerical_settings_id")
                            .from(GlobalSettings::Table, GlobalSettings::NumericalSettingsId)
                            .to(NumericalSettings::Table, NumericalSettings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_global_settings_groundwater_settings_id")
                            .from(GlobalSettings::Table, GlobalSettings::GroundwaterSettingsId)
                            .to(Groundwater::Table, Groundwater::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_global_settings_simple_infiltration_settings_id")
                            .from(
                                GlobalSettings::Table,
                                GlobalSettings::SimpleInfiltrationSettingsId,
                            )
                            .to(SimpleInfiltration::Table, SimpleInfiltration::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_global_settings_interflow_settings_id")
                            .from(GlobalSettings::Table, GlobalSettings::InterflowSettingsId)
                            .to(Interflow::Table, Interflow::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_global_settings_control_group_id")
                            .from(GlobalSettings::Table, GlobalSettings::ControlGroupId)
                            .to(ControlGroups::Table, ControlGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create aggregation_settings table
        manager
            .create_table(
                Table::create()
                    .table(AggregationSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AggregationSettings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AggregationSettings::GlobalSettingsId).integer())
                    .col(
                        ColumnDef::new(AggregationSettings::VarName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(AggregationSettings::FlowVariable).string())
                    .col(
                        ColumnDef::new(AggregationSettings::AggregationMethod)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(AggregationSettings::AggregationInSpace)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AggregationSettings::Timestep)
                            .integer()
                            .not_null()
                            .default(300),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aggregation_settings_global_settings_id")
                            .from(
                                AggregationSettings::Table,
                                AggregationSettings::GlobalSettingsId,
                            )
                            .to(GlobalSettings::Table, GlobalSettings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AggregationSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GlobalSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SimpleInfiltration::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Interflow::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Groundwater::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NumericalSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Controls::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ControlTimed::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ControlMemory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ControlDelta::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ControlPid::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ControlTables::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ControlMeasureMaps::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ControlMeasureGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ControlGroups::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum ControlGroups {
    Table,
    Id,
    Name,
    Description,
}

#[derive(Iden)]
enum ControlMeasureGroups {
    Table,
    Id,
}

#[derive(Iden)]
enum ControlMeasureMaps {
    Table,
    Id,
    MeasureGroupId,
    ObjectType,
    ObjectId,
    Weight,
}

#[derive(Iden)]
enum ControlTables {
    Table,
    Id,
    MeasureVariable,
    MeasureOperator,
    ActionType,
    ActionTable,
    TargetType,
    TargetId,
}

#[derive(Iden)]
enum ControlPid {
    Table,
    Id,
    MeasureVariable,
    Setpoint,
    Kp,
    Ki,
    Kd,
    ActionType,
    TargetType,
    TargetId,
    TargetUpperLimit,
    TargetLowerLimit,
}

#[derive(Iden)]
enum ControlDelta {
    Table,
    Id,
    MeasureVariable,
    MeasureDelta,
    MeasureDt,
    ActionType,
    ActionValue,
    ActionTime,
    TargetType,
    TargetId,
}

#[derive(Iden)]
enum ControlMemory {
    Table,
    Id,
    MeasureVariable,
    UpperThreshold,
    LowerThreshold,
    ActionType,
    ActionValue,
    TargetType,
    TargetId,
    IsActive,
    IsInverse,
}

#[derive(Iden)]
enum ControlTimed {
    Table,
    Id,
    ActionType,
    ActionTable,
    TargetType,
    TargetId,
}

#[derive(Iden)]
enum Controls {
    Table,
    Id,
    ControlGroupId,
    ControlType,
    ControlId,
    MeasureGroupId,
    MeasureFrequency,
    Start,
    End,
}

#[derive(Iden)]
enum NumericalSettings {
    Table,
    Id,
    #[iden = "cfl_strictness_factor_1d"]
    CflStrictnessFactor1d,
    #[iden = "cfl_strictness_factor_2d"]
    CflStrictnessFactor2d,
    ConvergenceCg,
    ConvergenceEps,
    FlowDirectionThreshold,
    FrictShallowWaterCorrection,
    GeneralNumericalThreshold,
    IntegrationMethod,
    #[iden = "limiter_grad_1d"]
    LimiterGrad1d,
    #[iden = "limiter_grad_2d"]
    LimiterGrad2d,
    #[iden = "limiter_slope_crossectional_area_2d"]
    LimiterSlopeCrossectionalArea2d,
    #[iden = "limiter_slope_friction_2d"]
    LimiterSlopeFriction2d,
    MaxNonlinIterations,
    MaxDegree,
    MinimumFrictionVelocity,
    MinimumSurfaceArea,
    PreconCg,
    PreissmannSlot,
    PumpImplicitRatio,
    ThinWaterLayerDefinition,
    UseOfCg,
    UseOfNestedNewton,
}

#[derive(Iden)]
enum Groundwater {
    Table,
    Id,
    GroundwaterImperviousLayerLevel,
    GroundwaterImperviousLayerLevelFile,
    GroundwaterImperviousLayerLevelType,
    PhreaticStorageCapacity,
    PhreaticStorageCapacityFile,
    PhreaticStorageCapacityType,
    EquilibriumInfiltrationRate,
    EquilibriumInfiltrationRateFile,
    EquilibriumInfiltrationRateType,
    InitialInfiltrationRate,
    InitialInfiltrationRateFile,
    InitialInfiltrationRateType,
    InfiltrationDecayPeriod,
    InfiltrationDecayPeriodFile,
    InfiltrationDecayPeriodType,
    GroundwaterHydroConnectivity,
    GroundwaterHydroConnectivityFile,
    GroundwaterHydroConnectivityType,
    DisplayName,
    Leakage,
    LeakageFile,
}

#[derive(Iden)]
enum Interflow {
    Table,
    Id,
    InterflowType,
    Porosity,
    PorosityFile,
    PorosityLayerThickness,
    ImperviousLayerElevation,
    HydraulicConductivity,
    HydraulicConductivityFile,
    DisplayName,
}

#[derive(Iden)]
enum SimpleInfiltration {
    Table,
    Id,
    InfiltrationRate,
    InfiltrationRateFile,
    InfiltrationSurfaceOption,
    MaxInfiltrationCapacityFile,
    DisplayName,
}

#[derive(Iden)]
enum GlobalSettings {
    Table,
    Id,
    #[iden = "use_2d_flow"]
    Use2dFlow,
    #[iden = "use_1d_flow"]
    Use1dFlow,
    #[iden = "use_2d_rain"]
    Use2dRain,
    ManholeStorageArea,
    Name,
    SimTimeStep,
    MinimumSimTimeStep,
    MaximumSimTimeStep,
    NrTimesteps,
    StartTime,
    StartDate,
    GridSpace,
    DistCalcPoints,
    Kmax,
    GuessDams,
    TableStepSize,
    #[iden = "advection_1d"]
    Advection1d,
    #[iden = "advection_2d"]
    Advection2d,
    DemFile,
    EpsgCode,
    FrictType,
    FrictCoef,
    FrictCoefFile,
    FrictAvg,
    WaterLevelIniType,
    InitialWaterlevel,
    InitialWaterlevelFile,
    InitialGroundwaterLevel,
    InitialGroundwaterLevelFile,
    InitialGroundwaterLevelType,
    InterceptionGlobal,
    InterceptionFile,
    DemObstacleDetection,
    DemObstacleHeight,
    EmbeddedCutoffThreshold,
    #[iden = "use_0d_inflow"]
    Use0dInflow,
    ControlGroupId,
    FloodingThreshold,
    TimestepPlus,
    #[iden = "max_angle_1d_advection"]
    MaxAngle1dAdvection,
    OutputTimeStep,
    WindShieldingFile,
    #[iden = "table_step_size_1d"]
    TableStepSize1d,
    #[iden = "table_step_size_volume_2d"]
    TableStepSizeVolume2d,
    NumericalSettingsId,
    GroundwaterSettingsId,
    SimpleInfiltrationSettingsId,
    InterflowSettingsId,
}

#[derive(Iden)]
enum AggregationSettings {
    Table,
    Id,
    GlobalSettingsId,
    VarName,
    FlowVariable,
    AggregationMethod,
    AggregationInSpace,
    Timestep,
}
