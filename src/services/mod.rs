//! Servicios de composición de datos para reportes

pub mod report_service;

pub use report_service::ReportService;
