//! SeaORM adapter for EmployeeRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::entities::{
    ContactDetails, Employee, EmployeeFilter, EmployeeId, NewEmployee,
};
use crate::domain::ports::EmployeeRepository;
use crate::entity::{employee_benefits, employees};
use crate::error::DomainError;

/// SeaORM implementation of EmployeeRepository
pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn not_found(id: EmployeeId) -> DomainError {
    DomainError::NotFound(format!("Employee {} not found", id))
}

/// Lowercased `%needle%` LIKE pattern with backslash, `%` and `_` escaped
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError> {
        let mut query = employees::Entity::find().order_by_asc(employees::Column::Id);

        if let Some(needle) = filter.needle() {
            // SQLite's LOWER() only folds ASCII, so other needles are matched below
            if needle.is_ascii() {
                query = query.filter(
                    Expr::expr(Func::lower(Expr::col(employees::Column::FirstName)))
                        .like(LikeExpr::new(contains_pattern(needle)).escape('\\')),
                );
            }
        }

        let results = query.all(&self.db).await?;

        Ok(results
            .into_iter()
            .map(Employee::from)
            .filter(|e| filter.matches(e))
            .collect())
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        let contact = &employee.contact;

        let model = employees::ActiveModel {
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            social_security_number: Set(employee.social_security_number.clone()),
            address1: Set(contact.address1.clone()),
            address2: Set(contact.address2.clone()),
            city: Set(contact.city.clone()),
            state: Set(contact.state.clone()),
            zip_code: Set(contact.zip_code.clone()),
            phone_number: Set(contact.phone_number.clone()),
            email: Set(contact.email.clone()),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into())
    }

    async fn update_contact(
        &self,
        id: EmployeeId,
        contact: &ContactDetails,
    ) -> Result<Employee, DomainError> {
        let txn = self.db.begin().await?;

        let existing = employees::Entity::find_by_id(id.0)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(id))?;

        let mut model: employees::ActiveModel = existing.into();
        model.address1 = Set(contact.address1.clone());
        model.address2 = Set(contact.address2.clone());
        model.city = Set(contact.city.clone());
        model.state = Set(contact.state.clone());
        model.zip_code = Set(contact.zip_code.clone());
        model.phone_number = Set(contact.phone_number.clone());
        model.email = Set(contact.email.clone());
        model.updated_at = Set(Some(Utc::now()));

        let updated = model.update(&txn).await?;
        txn.commit().await?;

        Ok(updated.into())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        // Benefits are owned by the employee
        employee_benefits::Entity::delete_many()
            .filter(employee_benefits::Column::EmployeeId.eq(id.0))
            .exec(&txn)
            .await?;

        let result = employees::Entity::delete_by_id(id.0).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        txn.commit().await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(employees::Entity::find().count(&self.db).await?)
    }
}

/// Convert SeaORM model to domain entity
impl From<employees::Model> for Employee {
    fn from(model: employees::Model) -> Self {
        Employee {
            id: EmployeeId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            social_security_number: model.social_security_number,
            contact: ContactDetails {
                address1: model.address1,
                address2: model.address2,
                city: model.city,
                state: model.state,
                zip_code: model.zip_code,
                phone_number: model.phone_number,
                email: model.email,
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
