use crate::core::registry::{CodeRecord, CodeRegistry, RegistryWrite};
use crate::utils::error::{RegistryError, Result};
use async_trait::async_trait;
use sea_orm::*;
use tracing::{debug, warn};

use super::super::entities::{self, code_record};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert one registry record
    pub async fn insert_code_record(&self, record: &CodeRecord) -> Result<()> {
        debug!(code = %record.code, batch_id = %record.batch_id, "Inserting code record");

        entities::CodeRecord::insert(to_active_model(record)?)
            .exec_without_returning(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(())
    }

    /// Find a record by code or internal identifier
    pub async fn find_by_code_or_id(&self, key: &str) -> Result<Option<CodeRecord>> {
        debug!("Looking up code record: {}", key);

        let model = entities::CodeRecord::find()
            .filter(
                Condition::any()
                    .add(code_record::Column::Code.eq(key))
                    .add(code_record::Column::Id.eq(key)),
            )
            .one(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        model.map(from_model).transpose()
    }

    /// All records of a batch ordered by serial number
    pub async fn list_by_batch(&self, batch_id: &str) -> Result<Vec<CodeRecord>> {
        debug!("Listing code records of batch: {}", batch_id);

        entities::CodeRecord::find()
            .filter(code_record::Column::BatchId.eq(batch_id))
            .order_by_asc(code_record::Column::SerialNo)
            .all(&self.db)
            .await
            .map_err(RegistryError::Database)?
            .into_iter()
            .map(from_model)
            .collect()
    }

    /// Total number of registry records
    pub async fn count_records(&self) -> Result<u64> {
        entities::CodeRecord::find()
            .count(&self.db)
            .await
            .map_err(RegistryError::Database)
    }
}

#[async_trait]
impl CodeRegistry for SeaOrmDatabase {
    async fn write(&self, record: &CodeRecord) -> RegistryWrite {
        match self.insert_code_record(record).await {
            Ok(()) => RegistryWrite::Written,
            Err(RegistryError::Database(e)) if is_unique_violation(&e) => {
                RegistryWrite::DuplicateKey
            }
            Err(e) => {
                warn!(code = %record.code, error = %e, "Registry write failed");
                RegistryWrite::Failed(e.to_string())
            }
        }
    }

    async fn find_by_code_or_id(&self, key: &str) -> Result<Option<CodeRecord>> {
        SeaOrmDatabase::find_by_code_or_id(self, key).await
    }

    async fn list_by_batch(&self, batch_id: &str) -> Result<Vec<CodeRecord>> {
        SeaOrmDatabase::list_by_batch(self, batch_id).await
    }
}

/// Whether a database error is a unique key violation on any backend
pub(super) fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }
    let message = err.to_string();
    message.contains("UNIQUE constraint failed") || message.contains("duplicate key value")
}

fn to_active_model(record: &CodeRecord) -> Result<code_record::ActiveModel> {
    let warranty_years = i32::try_from(record.warranty_years).map_err(|_| {
        RegistryError::Validation(format!(
            "Warranty of {} years for {} does not fit the registry column",
            record.warranty_years, record.code
        ))
    })?;

    Ok(code_record::ActiveModel {
        id: Set(record.id.clone()),
        code: Set(record.code.clone()),
        part_type: Set(record.part_type.clone()),
        manufacture_date: Set(record.manufacture_date),
        lot_no: Set(record.lot_no.clone()),
        serial_no: Set(i64::from(record.serial_no)),
        manufacturer_name: Set(record.manufacturer_name.clone()),
        warranty_years: Set(warranty_years),
        expiry_date: Set(record.expiry_date),
        url: Set(record.url.clone()),
        batch_id: Set(record.batch_id.clone()),
        created_at: Set(record.created_at.into()),
    })
}

fn from_model(model: code_record::Model) -> Result<CodeRecord> {
    let serial_no = u32::try_from(model.serial_no).map_err(|_| {
        RegistryError::Internal(format!(
            "Stored serial number out of range for {}: {}",
            model.code, model.serial_no
        ))
    })?;
    let warranty_years = u32::try_from(model.warranty_years).map_err(|_| {
        RegistryError::Internal(format!(
            "Stored warranty out of range for {}: {}",
            model.code, model.warranty_years
        ))
    })?;

    Ok(CodeRecord {
        id: model.id,
        code: model.code,
        part_type: model.part_type,
        manufacture_date: model.manufacture_date,
        lot_no: model.lot_no,
        serial_no,
        manufacturer_name: model.manufacturer_name,
        warranty_years,
        expiry_date: model.expiry_date,
        url: model.url,
        batch_id: model.batch_id,
        created_at: model.created_at.with_timezone(&chrono::Utc),
    })
}
