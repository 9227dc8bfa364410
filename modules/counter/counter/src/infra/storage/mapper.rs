use counter_sdk::CalculationRecord;

use super::entity;

/// A stored row that breaks the `count >= 1` invariant.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("calculation '{calculation_id}' has malformed count {count}")]
pub struct MalformedCount {
    pub calculation_id: String,
    pub count: i64,
}

impl TryFrom<entity::Model> for CalculationRecord {
    type Error = MalformedCount;

    fn try_from(model: entity::Model) -> Result<Self, Self::Error> {
        let count = u64::try_from(model.count)
            .ok()
            .filter(|c| *c >= 1)
            .ok_or_else(|| MalformedCount {
                calculation_id: model.calculation_id.clone(),
                count: model.count,
            })?;

        Ok(CalculationRecord {
            calculation_id: model.calculation_id,
            expression: model.expression,
            representative_result: model.representative_result,
            count,
            last_updated_at: model.last_updated_at,
        })
    }
}
