//! Typed request inputs and response payloads.
//!
//! Numeric fields stay as raw text: the inventory coerces them leniently,
//! and a front end decoding a form should not reject what the inventory accepts.

use serde::{Deserialize, Serialize};

use crate::model::ProductRecord;

/// Where mutating operations send the caller afterwards.
pub const INDEX: &str = "/";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddProductForm {
    pub code: String,
    pub category: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchForm {
    pub criterion: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdjustQuantityForm {
    pub code: String,
    pub delta: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetPriceForm {
    pub code: String,
    pub price: String,
}

/// Records to render in place of the index page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Redirect {
    pub location: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Redirect {
    pub fn to_index(message: Option<String>) -> Self {
        Self {
            location: INDEX,
            message,
        }
    }
}

/// Outcome class of a modify request. `NotFound` is kept apart from the
/// other refusals so a front end can answer it with a distinct status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    NotFound,
    Rejected,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifyResponse {
    pub success: bool,
    pub message: String,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_decode_from_json() {
        let form: AdjustQuantityForm =
            serde_json::from_str(r#"{"code":"A1","delta":"-3"}"#).unwrap();
        assert_eq!(form.code, "A1");
        assert_eq!(form.delta, "-3");
    }

    #[test]
    fn modify_response_uses_snake_case_status() {
        let response = ModifyResponse {
            success: false,
            message: "Product not found: X".into(),
            status: Status::NotFound,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "success": false,
                "message": "Product not found: X",
                "status": "not_found",
            })
        );
    }

    #[test]
    fn redirect_omits_empty_message() {
        let json = serde_json::to_string(&Redirect::to_index(None)).unwrap();
        assert_eq!(json, r#"{"location":"/"}"#);
    }
}
