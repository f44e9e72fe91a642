//! M-Pesa payment models

use serde::{Deserialize, Serialize};

/// Body for `POST /initiate-mpesa-payment`
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    /// Whole shillings; M-Pesa rejects fractional amounts
    pub amount: u64,
    pub phone_number: String,
    pub booking_id: u64,
}

/// Acknowledgement of an STK push. Fields vary by gateway response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentResponse {
    #[serde(default, alias = "CustomerMessage", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, rename = "CheckoutRequestID", skip_serializing_if = "Option::is_none")]
    pub checkout_request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_response_fields() {
        let json = r#"{"CheckoutRequestID":"ws_CO_1","CustomerMessage":"Success. Request accepted"}"#;
        let response: PaymentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.checkout_request_id.as_deref(), Some("ws_CO_1"));
        assert_eq!(response.message.as_deref(), Some("Success. Request accepted"));
    }

    #[test]
    fn test_empty_response_is_accepted() {
        let response: PaymentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.message.is_none());
    }
}
