//! Services module
//!
//! Este módulo contiene la lógica de negocio que no pertenece a un único
//! repositorio: autenticación, agregaciones de reportes y exportación.

pub mod auth_service;
pub mod export_service;
pub mod report_service;
