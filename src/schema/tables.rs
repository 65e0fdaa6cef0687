//! Esquemas declarados de las tres tablas del sistema
//!
//! El orden de columnas es el orden persistido en la planilla y no
//! debe cambiar sin migrar las pestañas a mano.

use super::{ColumnDef, ColumnType, Dependent, TableSchema};

pub static VEHICLES: TableSchema = TableSchema {
    name: "vehicles",
    columns: &[
        ColumnDef { name: "id", ty: ColumnType::Integer, unique: false, nullable: false },
        ColumnDef { name: "name", ty: ColumnType::Text, unique: false, nullable: false },
        ColumnDef { name: "plate", ty: ColumnType::Text, unique: true, nullable: false },
        ColumnDef { name: "renavam", ty: ColumnType::Text, unique: false, nullable: true },
        ColumnDef { name: "year", ty: ColumnType::Integer, unique: false, nullable: false },
        ColumnDef { name: "purchase_price", ty: ColumnType::Decimal, unique: false, nullable: false },
        ColumnDef { name: "purchase_date", ty: ColumnType::Date, unique: false, nullable: true },
    ],
    dependents: &[Dependent { schema: &SERVICES, fk_column: "vehicle_id" }],
};

pub static PROVIDERS: TableSchema = TableSchema {
    name: "providers",
    columns: &[
        ColumnDef { name: "id", ty: ColumnType::Integer, unique: false, nullable: false },
        ColumnDef { name: "company", ty: ColumnType::Text, unique: true, nullable: false },
        ColumnDef { name: "phone", ty: ColumnType::Text, unique: false, nullable: true },
        ColumnDef { name: "contact_name", ty: ColumnType::Text, unique: false, nullable: true },
        ColumnDef { name: "tax_id", ty: ColumnType::Text, unique: false, nullable: true },
        ColumnDef { name: "email", ty: ColumnType::Text, unique: false, nullable: true },
        ColumnDef { name: "address", ty: ColumnType::Text, unique: false, nullable: true },
        ColumnDef { name: "address_number", ty: ColumnType::Text, unique: false, nullable: true },
        ColumnDef { name: "city", ty: ColumnType::Text, unique: false, nullable: true },
        ColumnDef { name: "district", ty: ColumnType::Text, unique: false, nullable: true },
        ColumnDef { name: "postal_code", ty: ColumnType::Text, unique: false, nullable: true },
    ],
    dependents: &[Dependent { schema: &SERVICES, fk_column: "provider_id" }],
};

pub static SERVICES: TableSchema = TableSchema {
    name: "services",
    columns: &[
        ColumnDef { name: "id", ty: ColumnType::Integer, unique: false, nullable: false },
        ColumnDef { name: "vehicle_id", ty: ColumnType::Integer, unique: false, nullable: false },
        ColumnDef { name: "provider_id", ty: ColumnType::Integer, unique: false, nullable: false },
        ColumnDef { name: "service_name", ty: ColumnType::Text, unique: false, nullable: false },
        ColumnDef { name: "service_date", ty: ColumnType::Date, unique: false, nullable: true },
        ColumnDef { name: "warranty_days", ty: ColumnType::Integer, unique: false, nullable: false },
        ColumnDef { name: "amount", ty: ColumnType::Decimal, unique: false, nullable: false },
        ColumnDef { name: "mileage_at_service", ty: ColumnType::Integer, unique: false, nullable: false },
        ColumnDef { name: "mileage_next_service", ty: ColumnType::Integer, unique: false, nullable: false },
        ColumnDef { name: "note", ty: ColumnType::Text, unique: false, nullable: true },
        // Derivada de service_date + warranty_days; se persiste para
        // filtrar por vencimiento sin recalcular en cada lectura
        ColumnDef { name: "due_date", ty: ColumnType::Date, unique: false, nullable: true },
    ],
    dependents: &[],
};
