use async_trait::async_trait;
use chrono::{DateTime, Utc};
use counter_sdk::CalculationRecord;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::repo::{CounterRepository, CounterScan, NewCalculation, ScanPage};

use super::entity::{self, Entity as CalculationEntity};

pub struct SeaOrmCounterRepository {
    db: DatabaseConnection,
}

impl SeaOrmCounterRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CounterRepository for SeaOrmCounterRepository {
    async fn increment_or_insert(
        &self,
        calculation: NewCalculation,
        now: DateTime<Utc>,
    ) -> anyhow::Result<CalculationRecord> {
        let calculation_id = calculation.calculation_id.clone();

        let active_model = entity::ActiveModel {
            calculation_id: ActiveValue::Set(calculation.calculation_id),
            expression: ActiveValue::Set(calculation.expression),
            representative_result: ActiveValue::Set(calculation.representative_result),
            count: ActiveValue::Set(1),
            last_updated_at: ActiveValue::Set(now),
        };

        // INSERT .. ON CONFLICT (calculation_id)
        //   DO UPDATE SET count = calculations.count + 1, last_updated_at = excluded.last_updated_at
        CalculationEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(entity::Column::CalculationId)
                    .value(
                        entity::Column::Count,
                        Expr::col((CalculationEntity, entity::Column::Count)).add(1),
                    )
                    .update_column(entity::Column::LastUpdatedAt)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        let model = CalculationEntity::find_by_id(calculation_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Record should exist after upsert"))?;

        Ok(CalculationRecord::try_from(model)?)
    }

    async fn find(&self, calculation_id: &str) -> anyhow::Result<Option<CalculationRecord>> {
        let model = CalculationEntity::find_by_id(calculation_id.to_owned())
            .one(&self.db)
            .await?;

        Ok(model.map(CalculationRecord::try_from).transpose()?)
    }
}

#[async_trait]
impl CounterScan for SeaOrmCounterRepository {
    async fn scan_page(&self, after: Option<String>, limit: u64) -> anyhow::Result<ScanPage> {
        let limit = limit.max(1);

        let mut query = CalculationEntity::find().order_by_asc(entity::Column::CalculationId);
        if let Some(after) = after {
            query = query.filter(entity::Column::CalculationId.gt(after));
        }

        // One extra row tells whether another page follows.
        let mut models = query.limit(limit.saturating_add(1)).all(&self.db).await?;
        let page_len = usize::try_from(limit)?;
        let has_more = models.len() > page_len;
        models.truncate(page_len);

        let next_token = if has_more {
            models.last().map(|m| m.calculation_id.clone())
        } else {
            None
        };

        let records = models
            .into_iter()
            .map(CalculationRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ScanPage {
            records,
            next_token,
        })
    }
}
