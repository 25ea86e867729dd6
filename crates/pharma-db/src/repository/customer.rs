//! # Customer Repository
//!
//! Database operations for customer (patient) records.
//!
//! Mirrors the product repository: typed CRUD with store-assigned
//! ids, full-replace updates, and silent no-ops for missing ids.
//! Customers have no enforced link to sales; a sale only records a
//! free-text patient name.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use pharma_core::{Customer, NewCustomer};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a new customer and returns the store-assigned id.
    ///
    /// `name` is NOT NULL at the store level; all other fields accept
    /// absent values.
    pub async fn insert(&self, customer: &NewCustomer) -> DbResult<i64> {
        debug!(name = %customer.name, "Inserting customer");

        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, age, phone, diagnosis, last_visit)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&customer.name)
        .bind(customer.age)
        .bind(&customer.phone)
        .bind(&customer.diagnosis)
        .bind(customer.last_visit)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Lists every customer, ordered by name ascending.
    pub async fn list_all(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, age, phone, diagnosis, last_visit, created_at
            FROM customers
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Gets a customer by id; `Ok(None)` when the id does not exist.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, age, phone, diagnosis, last_visit, created_at
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Overwrites all attributes of the customer with the given id.
    /// Full replace; a missing id is a silent no-op.
    pub async fn update(&self, id: i64, customer: &NewCustomer) -> DbResult<()> {
        debug!(id = %id, name = %customer.name, "Updating customer");

        sqlx::query(
            r#"
            UPDATE customers SET
                name = ?2, age = ?3, phone = ?4, diagnosis = ?5, last_visit = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&customer.name)
        .bind(customer.age)
        .bind(&customer.phone)
        .bind(&customer.diagnosis)
        .bind(customer.last_visit)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Hard-deletes a customer by id. A missing id is a silent no-op.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting customer");

        sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts all customers (dashboard figure).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;

    fn sample_customer(name: &str) -> NewCustomer {
        NewCustomer {
            name: name.to_string(),
            age: Some(47),
            phone: Some("0555-123456".to_string()),
            diagnosis: Some("hypertension".to_string()),
            last_visit: NaiveDate::from_ymd_opt(2026, 8, 1),
        }
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let new = sample_customer("Maryam Haddad");
        let id = repo.insert(&new).await.unwrap();

        let customer = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(customer.id, id);
        assert_eq!(customer.name, new.name);
        assert_eq!(customer.age, new.age);
        assert_eq!(customer.phone, new.phone);
        assert_eq!(customer.diagnosis, new.diagnosis);
        assert_eq!(customer.last_visit, new.last_visit);
    }

    #[tokio::test]
    async fn test_optional_fields_stay_absent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let minimal = NewCustomer {
            name: "Walk-in".to_string(),
            ..Default::default()
        };
        let id = repo.insert(&minimal).await.unwrap();

        // Absent fields stay NULL in storage; presentation decides how
        // to render them
        let customer = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(customer.age, None);
        assert_eq!(customer.phone, None);
        assert_eq!(customer.diagnosis, None);
        assert_eq!(customer.last_visit, None);
    }

    #[tokio::test]
    async fn test_list_all_orders_by_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        repo.insert(&sample_customer("Omar")).await.unwrap();
        repo.insert(&sample_customer("Aisha")).await.unwrap();

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Aisha", "Omar"]);
    }

    #[tokio::test]
    async fn test_update_is_full_replace_and_noop_when_missing() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let id = repo.insert(&sample_customer("Sami")).await.unwrap();

        let replacement = NewCustomer {
            name: "Sami K.".to_string(),
            ..Default::default()
        };
        repo.update(id, &replacement).await.unwrap();

        let customer = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(customer.name, "Sami K.");
        assert_eq!(customer.phone, None);

        // Missing id: no error, nothing created
        repo.update(424242, &replacement).await.unwrap();
        assert!(repo.get_by_id(424242).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_and_count() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let id = repo.insert(&sample_customer("Leila")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);

        repo.delete(id).await.unwrap();
        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.delete(id).await.unwrap(); // no-op
    }
}
