use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::{DocumentKind, ValidationResult};
use crate::engine::{generate, validate_kind};
use crate::error::Result as CheckitResult;

const VALUE_REQUIRED: &str = "Value is required and must be a string";
const TYPE_REQUIRED: &str = "Type must be one of: cpf, cnpj, cep, email, phone, creditCard";

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratedValue {
    pub value: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    pub brand: Option<String>,
}

/// Path segment used by the per-type routes.
fn kind_from_path(segment: &str) -> Option<DocumentKind> {
    match segment {
        "cpf" => Some(DocumentKind::Cpf),
        "cnpj" => Some(DocumentKind::Cnpj),
        "cep" => Some(DocumentKind::Cep),
        "email" => Some(DocumentKind::Email),
        "phone" => Some(DocumentKind::Phone),
        "credit-card" => Some(DocumentKind::CreditCard),
        _ => None,
    }
}

fn generated_message(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Cpf => "CPF gerado com sucesso",
        DocumentKind::Cnpj => "CNPJ gerado com sucesso",
        DocumentKind::Cep => "CEP gerado com sucesso",
        DocumentKind::Email => "E-mail gerado com sucesso",
        DocumentKind::Phone => "Telefone gerado com sucesso",
        DocumentKind::CreditCard => "Cartão de crédito gerado com sucesso",
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "error": "Bad request",
            "message": message,
        })),
    )
        .into_response()
}

fn not_found_response(path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "message": format!("Route {path} not found"),
        })),
    )
        .into_response()
}

/// Non-empty string `value` out of a JSON body.
fn required_value(body: &Value) -> Option<&str> {
    body.get("value")
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
}

fn ok(result: CheckitResult<ValidationResult>) -> Response {
    match result {
        Ok(data) => Json(ApiResponse {
            success: true,
            data,
        })
        .into_response(),
        Err(e) => bad_request(&e.to_string()),
    }
}

pub async fn index() -> Json<Value> {
    Json(json!({
        "name": "Checkit API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "API de validação brasileira",
        "endpoints": {
            "health": "/api/v1/health",
            "validation": "/api/v1/validate",
        },
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn validate_one(
    Path(segment): Path<String>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Some(kind) = kind_from_path(&segment) else {
        return not_found_response(uri.path());
    };
    let Ok(Json(body)) = body else {
        return bad_request(VALUE_REQUIRED);
    };
    let Some(value) = required_value(&body) else {
        return bad_request(VALUE_REQUIRED);
    };
    let options = body.get("options").cloned().unwrap_or(Value::Null);
    ok(validate_kind(kind, value, &options))
}

pub async fn validate_generic(body: Result<Json<Value>, JsonRejection>) -> Response {
    let Ok(Json(body)) = body else {
        return bad_request(VALUE_REQUIRED);
    };
    let Some(value) = required_value(&body) else {
        return bad_request(VALUE_REQUIRED);
    };
    let Some(kind) = body
        .get("type")
        .and_then(Value::as_str)
        .and_then(DocumentKind::from_wire)
    else {
        return bad_request(TYPE_REQUIRED);
    };
    let options = body.get("options").cloned().unwrap_or(Value::Null);
    ok(validate_kind(kind, value, &options))
}

pub async fn generate_one(
    Path(segment): Path<String>,
    Query(query): Query<GenerateQuery>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let Some(kind) = kind_from_path(&segment) else {
        return not_found_response(uri.path());
    };
    match generate(kind, query.brand.as_deref()) {
        Ok(value) => Json(ApiResponse {
            success: true,
            data: GeneratedValue {
                value,
                message: generated_message(kind).to_string(),
            },
        })
        .into_response(),
        Err(e) => bad_request(&e.to_string()),
    }
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    not_found_response(uri.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(kind_from_path("credit-card"), Some(DocumentKind::CreditCard));
        assert_eq!(kind_from_path("creditCard"), None);
        assert_eq!(kind_from_path("generic"), None);
    }

    #[test]
    fn test_required_value() {
        assert_eq!(required_value(&json!({ "value": "123" })), Some("123"));
        assert_eq!(required_value(&json!({ "value": "" })), None);
        assert_eq!(required_value(&json!({ "value": 123 })), None);
        assert_eq!(required_value(&json!({})), None);
    }
}
