use freight_kernel::domain::Warehouse;

#[freight_derive::api_model]
#[derive(Default, Clone, PartialEq, Eq)]
pub struct WarehouseDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i64>,
    pub current_load: Option<i64>,
}

impl From<&Warehouse> for WarehouseDto {
    fn from(warehouse: &Warehouse) -> Self {
        Self {
            id: warehouse.id(),
            name: Some(warehouse.name().to_owned()),
            location: Some(warehouse.location().to_owned()),
            capacity: Some(warehouse.capacity()),
            current_load: Some(warehouse.current_load()),
        }
    }
}
