//! SeaORM adapter for BenefitRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{BenefitType, EmployeeBenefit, EmployeeId, NewEmployeeBenefit};
use crate::domain::ports::BenefitRepository;
use crate::entity::employee_benefits;
use crate::error::DomainError;

/// SeaORM implementation of BenefitRepository
pub struct SeaOrmBenefitRepository {
    db: DatabaseConnection,
}

impl SeaOrmBenefitRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BenefitRepository for SeaOrmBenefitRepository {
    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<EmployeeBenefit>, DomainError> {
        let results = employee_benefits::Entity::find()
            .filter(employee_benefits::Column::EmployeeId.eq(employee_id.0))
            .order_by_asc(employee_benefits::Column::Id)
            .all(&self.db)
            .await?;

        results.into_iter().map(EmployeeBenefit::try_from).collect()
    }

    async fn create(&self, benefit: &NewEmployeeBenefit) -> Result<EmployeeBenefit, DomainError> {
        let model = employee_benefits::ActiveModel {
            employee_id: Set(benefit.employee_id.0),
            benefit_type: Set(benefit.benefit_type.to_string()),
            description: Set(benefit.description.clone()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        EmployeeBenefit::try_from(result)
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<employee_benefits::Model> for EmployeeBenefit {
    type Error = DomainError;

    fn try_from(model: employee_benefits::Model) -> Result<Self, Self::Error> {
        let benefit_type: BenefitType = model.benefit_type.parse().map_err(|e: String| {
            DomainError::Internal(format!("Benefit {} has {}", model.id, e.to_lowercase()))
        })?;

        Ok(EmployeeBenefit {
            id: model.id,
            employee_id: EmployeeId(model.employee_id),
            benefit_type,
            description: model.description,
        })
    }
}
