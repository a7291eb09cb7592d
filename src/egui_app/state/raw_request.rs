/// Request document the raw editor starts with.
pub const DEFAULT_RAW_REQUEST: &str = r#"{
  "features": {
    "Gender": "Female",
    "Age": 29,
    "Under 30": "No",
    "Senior Citizen": "No",
    "Married": "Yes",
    "Dependents": "No",
    "Number of Dependents": 0,
    "Referred a Friend": "No",
    "Number of Referrals": 0,
    "Tenure in Months": 3,
    "Offer": null,
    "Phone Service": "Yes",
    "Avg Monthly Long Distance Charges": 10.0,
    "Multiple Lines": "No",
    "Internet Service": "Yes",
    "Internet Type": "Fiber Optic",
    "Avg Monthly GB Download": 25,
    "Online Security": "No",
    "Online Backup": "Yes",
    "Device Protection Plan": "No",
    "Premium Tech Support": "No",
    "Streaming TV": "Yes",
    "Streaming Movies": "Yes",
    "Streaming Music": "No",
    "Unlimited Data": "Yes",
    "Contract": "Month-to-Month",
    "Paperless Billing": "Yes",
    "Payment Method": "Bank Withdrawal",
    "Monthly Charge": 95.0,
    "Total Charges": 280.0,
    "Total Refunds": 0.0,
    "Total Extra Data Charges": 0.0,
    "Total Long Distance Charges": 30.0,
    "Total Revenue": 310.0,
    "CLTV": 4000
  }
}"#;

/// Free-text JSON request editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRequestState {
    pub text: String,
}

impl Default for RawRequestState {
    fn default() -> Self {
        Self {
            text: DEFAULT_RAW_REQUEST.to_string(),
        }
    }
}
