use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::database::entities::controls::ControlType;
use crate::database::entities::{
    control_delta, control_measure_maps, control_memory, control_pid, control_tables,
    control_timed, controls,
};
use crate::errors::ControlError;

/// A control's rule, resolved from the `(control_type, control_id)` pair
/// into the matching rule table.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlRule {
    Table(control_tables::Model),
    Pid(control_pid::Model),
    Delta(control_delta::Model),
    Memory(control_memory::Model),
    Timed(control_timed::Model),
}

/// Weights are authored with two decimals
const WEIGHT_TOLERANCE: f64 = 1e-6;

pub struct ControlService {
    db: DatabaseConnection,
}

impl ControlService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve a control's rule by explicit lookup.
    pub async fn resolve_rule(
        &self,
        control: &controls::Model,
    ) -> Result<ControlRule, ControlError> {
        let type_text = control
            .control_type
            .as_deref()
            .ok_or(ControlError::Incomplete {
                control: control.id,
                field: "control_type",
            })?;
        let control_type: ControlType = type_text
            .parse()
            .map_err(|_| ControlError::UnknownControlType(type_text.to_string()))?;
        let rule_id = control.control_id.ok_or(ControlError::Incomplete {
            control: control.id,
            field: "control_id",
        })?;

        let rule = match control_type {
            ControlType::Table => control_tables::Entity::find_by_id(rule_id)
                .one(&self.db)
                .await?
                .map(ControlRule::Table),
            ControlType::Pid => control_pid::Entity::find_by_id(rule_id)
                .one(&self.db)
                .await?
                .map(ControlRule::Pid),
            ControlType::Delta => control_delta::Entity::find_by_id(rule_id)
                .one(&self.db)
                .await?
                .map(ControlRule::Delta),
            ControlType::Memory => control_memory::Entity::find_by_id(rule_id)
                .one(&self.db)
                .await?
                .map(ControlRule::Memory),
            ControlType::Timed => control_timed::Entity::find_by_id(rule_id)
                .one(&self.db)
                .await?
                .map(ControlRule::Timed),
        };

        rule.ok_or(ControlError::DanglingRule {
            control: control.id,
            control_type: control_type.as_str().to_string(),
            rule_id,
        })
    }

    /// Write-time validation: the rule must exist and the measure group
    /// must balance.
    pub async fn validate(&self, control: &controls::Model) -> Result<(), ControlError> {
        self.resolve_rule(control).await?;
        if let Some(group_id) = control.measure_group_id {
            self.validate_measure_group(group_id).await?;
        }
        Ok(())
    }

    /// The weights of one measure group must sum to 1.0.
    pub async fn validate_measure_group(&self, group_id: i32) -> Result<(), ControlError> {
        let maps = control_measure_maps::Entity::find()
            .filter(control_measure_maps::Column::MeasureGroupId.eq(group_id))
            .all(&self.db)
            .await?;
        let total: f64 = maps.iter().filter_map(|map| map.weight).sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ControlError::UnbalancedWeights {
                group: group_id,
                total,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::entities::control_measure_groups;
    use crate::database::test_utils::setup_test_db;
    use sea_orm::{ActiveModelTrait, Set};

    async fn insert_table_rule(db: &DatabaseConnection) -> control_tables::Model {
        control_tables::ActiveModel {
            measure_variable: Set(Some("s1".to_string())),
            measure_operator: Set(Some(">".to_string())),
            action_type: Set(Some("set_crest_level".to_string())),
            action_table: Set(Some("1.2, 4.5, 2.3, 5.6".to_string())),
            target_type: Set(Some("weirs".to_string())),
            target_id: Set(Some(12)),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("insert table rule")
    }

    async fn insert_control(
        db: &DatabaseConnection,
        control_type: Option<&str>,
        control_id: Option<i32>,
    ) -> controls::Model {
        controls::ActiveModel {
            control_type: Set(control_type.map(str::to_string)),
            control_id: Set(control_id),
            measure_frequency: Set(Some(60)),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("insert control")
    }

    #[tokio::test]
    async fn resolves_table_rule() {
        let db = setup_test_db().await;
        let rule = insert_table_rule(&db).await;
        let control = insert_control(&db, Some("table"), Some(rule.id)).await;

        let service = ControlService::new(db);
        let resolved = service.resolve_rule(&control).await.unwrap();
        assert_eq!(resolved, ControlRule::Table(rule));
    }

    #[tokio::test]
    async fn rejects_unknown_control_type() {
        let db = setup_test_db().await;
        let control = insert_control(&db, Some("fuzzy"), Some(1)).await;

        let service = ControlService::new(db);
        let err = service.resolve_rule(&control).await.unwrap_err();
        assert!(matches!(err, ControlError::UnknownControlType(t) if t == "fuzzy"));
    }

    #[tokio::test]
    async fn rejects_dangling_rule_reference() {
        let db = setup_test_db().await;
        let control = insert_control(&db, Some("memory"), Some(99)).await;

        let service = ControlService::new(db);
        let err = service.resolve_rule(&control).await.unwrap_err();
        assert!(matches!(
            err,
            ControlError::DanglingRule {
                rule_id: 99,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn rejects_control_without_rule_id() {
        let db = setup_test_db().await;
        let control = insert_control(&db, Some("pid"), None).await;

        let service = ControlService::new(db);
        let err = service.resolve_rule(&control).await.unwrap_err();
        assert!(matches!(
            err,
            ControlError::Incomplete {
                field: "control_id",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn measure_group_weights_must_balance() {
        let db = setup_test_db().await;
        let group = control_measure_groups::ActiveModel { id: Set(7) }
            .insert(&db)
            .await
            .expect("insert measure group");

        for (object_id, weight) in [(1, 0.75), (2, 0.25)] {
            control_measure_maps::ActiveModel {
                measure_group_id: Set(Some(group.id)),
                object_type: Set(Some("connection_nodes".to_string())),
                object_id: Set(Some(object_id)),
                weight: Set(Some(weight)),
                ..Default::default()
            }
            .insert(&db)
            .await
            .expect("insert measure map");
        }

        let service = ControlService::new(db);
        service.validate_measure_group(group.id).await.unwrap();
    }

    #[tokio::test]
    async fn unbalanced_measure_group_is_rejected() {
        let db = setup_test_db().await;
        let group = control_measure_groups::ActiveModel { id: Set(7) }
            .insert(&db)
            .await
            .expect("insert measure group");

        control_measure_maps::ActiveModel {
            measure_group_id: Set(Some(group.id)),
            object_type: Set(Some("connection_nodes".to_string())),
            object_id: Set(Some(1)),
            weight: Set(Some(0.5)),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("insert measure map");

        let service = ControlService::new(db);
        let err = service.validate_measure_group(group.id).await.unwrap_err();
        assert!(matches!(
            err,
            ControlError::UnbalancedWeights { total, .. } if (total - 0.5).abs() < 1e-9
        ));
    }
}
