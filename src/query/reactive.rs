// Copyright (c) 2025 - Cowboy AI, Inc.
//! Dynamic access to reactive cells
//!
//! The query layer reads and writes cells as JSON. Writes are shape-checked
//! by deserializing into the cell's type; a mismatch leaves the cell as is.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{CatalogError, CatalogResult};
use crate::frp::ReactiveCell;

/// Type-erased reactive field
pub trait ReactiveField: Send + Sync {
    fn field_name(&self) -> &str;

    /// Current cell value as JSON
    fn read(&self) -> CatalogResult<Value>;

    /// Replace the cell value from JSON
    fn write(&self, value: Value) -> CatalogResult<()>;
}

impl<T> ReactiveField for ReactiveCell<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    fn field_name(&self) -> &str {
        self.name()
    }

    fn read(&self) -> CatalogResult<Value> {
        Ok(serde_json::to_value(self.get())?)
    }

    fn write(&self, value: Value) -> CatalogResult<()> {
        let typed = serde_json::from_value::<T>(value).map_err(|e| CatalogError::InvalidCellValue {
            field: self.name().to_string(),
            reason: e.to_string(),
        })?;
        self.set(typed);
        Ok(())
    }
}
