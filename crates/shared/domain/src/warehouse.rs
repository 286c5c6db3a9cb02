use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A storage site with a unit capacity and the load currently held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    id: Option<i64>,
    name: String,
    location: String,
    capacity: i64,
    current_load: i64,
}

impl Warehouse {
    /// Assembles a new, empty warehouse. The name and capacity setters' rules apply.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        capacity: i64,
    ) -> Result<Self, DomainError> {
        let mut warehouse = Self::restore(None, String::new(), location, 0, 0);
        warehouse.set_name(name)?;
        warehouse.set_capacity(capacity)?;
        Ok(warehouse)
    }

    /// Rebuilds a warehouse from stored values without running the setters' checks.
    #[must_use]
    pub fn restore(
        id: Option<i64>,
        name: impl Into<String>,
        location: impl Into<String>,
        capacity: i64,
        current_load: i64,
    ) -> Self {
        Self { id, name: name.into(), location: location.into(), capacity, current_load }
    }

    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub const fn capacity(&self) -> i64 {
        self.capacity
    }

    #[must_use]
    pub const fn current_load(&self) -> i64 {
        self.current_load
    }

    pub const fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be blank"));
        }
        self.name = name;
        Ok(())
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_capacity(&mut self, capacity: i64) -> Result<(), DomainError> {
        if capacity <= 0 {
            return Err(DomainError::validation(format!(
                "capacity must be greater than 0, got {capacity}"
            )));
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Only a negative load is rejected here; exceeding capacity is caught by `validate`.
    pub fn set_current_load(&mut self, current_load: i64) -> Result<(), DomainError> {
        if current_load < 0 {
            return Err(DomainError::validation(format!(
                "current load cannot be negative, got {current_load}"
            )));
        }
        self.current_load = current_load;
        Ok(())
    }

    #[must_use]
    pub fn validate(&self) -> bool {
        !self.location.trim().is_empty()
            && self.capacity > 0
            && (0..=self.capacity).contains(&self.current_load)
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map_or_else(|| "new".to_owned(), |id| id.to_string());
        write!(f, "WAREHOUSE [ID: {id}, Name: {}, Load: {}/{}]", self.name, self.current_load, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank_name_and_bad_capacity() {
        assert!(Warehouse::new(" ", "Lyon", 10).is_err());
        assert!(Warehouse::new("North", "Lyon", 0).is_err());
        let warehouse = Warehouse::new("North", "Lyon", 10).unwrap();
        assert_eq!(warehouse.current_load(), 0);
        assert!(warehouse.validate());
    }

    #[test]
    fn negative_load_is_rejected_by_setter() {
        let mut warehouse = Warehouse::new("North", "Lyon", 10).unwrap();
        assert!(warehouse.set_current_load(-1).is_err());
        warehouse.set_current_load(11).unwrap();
        assert!(!warehouse.validate());
    }

    #[test]
    fn load_boundaries() {
        let at = |load| Warehouse::restore(Some(1), "Hub", "Rotterdam", 100, load).validate();

        assert!(at(0));
        assert!(at(100));
        assert!(!at(101));
        assert!(!at(-1));
        assert!(!Warehouse::restore(Some(1), "Hub", " ", 100, 0).validate());
    }
}
