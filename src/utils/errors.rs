//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;
use validator::{ValidationError, ValidationErrors};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error")]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        details: Some(json!({ "sql_error": e.to_string() })),
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "Los datos proporcionados no son válidos".to_string(),
                    details: Some(json!(field_errors(&e))),
                    code: Some("VALIDATION_ERROR".to_string()),
                },
            ),

            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_FOUND".to_string()),
                },
            ),

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: msg,
                    details: None,
                    code: Some("BAD_REQUEST".to_string()),
                },
            ),

            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Aplana los errores del validador a un mapa campo -> mensajes
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errs)| {
            let messages = field_errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("El campo {} no es válido.", field))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Función helper para crear errores de validación de un solo campo
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    let mut error = ValidationError::new("custom");
    error.message = Some(message.into());

    let mut errors = ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Mensaje de matrícula duplicada, compartido por el pre-chequeo del
/// controlador y por la traducción de la violación del índice único
pub const DUPLICATE_PLATE_MESSAGE: &str = "El número de matrícula ya está registrado.";

pub fn duplicate_plate_error() -> AppError {
    validation_error("license_plate", DUPLICATE_PLATE_MESSAGE)
}

/// Detecta la violación de un índice único en Postgres (SQLSTATE 23505)
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_produces_field_map() {
        let error = validation_error("license_plate", DUPLICATE_PLATE_MESSAGE);
        match error {
            AppError::Validation(errors) => {
                let map = field_errors(&errors);
                assert_eq!(
                    map.get("license_plate"),
                    Some(&vec![DUPLICATE_PLATE_MESSAGE.to_string()])
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_is_unique_violation_ignores_other_errors() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
