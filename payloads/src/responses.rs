use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unvalidated passthrough fields.
///
/// The backend forwards the upstream operator API's payload alongside the
/// fields it normalizes. Nothing here is schema-checked; consumers that dig
/// into it must handle absent keys themselves.
pub type RawFields = HashMap<String, serde_json::Value>;

/// Response for the `/health` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Usage within one time-of-day band (daytime or nighttime).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandUsage {
    pub used: f64,
    pub limit: f64,
    pub remaining: f64,
    pub percentage: f64,
}

/// Response for the `/usage/summary` endpoint.
///
/// The band breakdown and reported time are only present when the backend
/// can retrieve the detailed report; older deployments return just the
/// totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub used: f64,
    pub limit: f64,
    pub percentage: f64,
    pub reported_time: Option<String>,
    pub daytime: Option<BandUsage>,
    pub nighttime: Option<BandUsage>,
}

impl UsageSummary {
    /// Gigabytes left in the monthly allowance, floored at zero.
    pub fn remaining(&self) -> f64 {
        (self.limit - self.used).max(0.0)
    }
}

impl Default for UsageSummary {
    fn default() -> Self {
        // limit of 1 rather than 0 so percentage math on the placeholder
        // value never divides by zero
        Self {
            used: 0.0,
            limit: 1.0,
            percentage: 0.0,
            reported_time: None,
            daytime: None,
            nighttime: None,
        }
    }
}

/// Response for the `/profile/info` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub fullname: String,
    pub package: String,
    pub contact_no: Option<String>,
    pub email: Option<String>,
    pub raw_data: RawFields,
}

impl ProfileInfo {
    /// The mobile number only exists in the passthrough payload.
    pub fn mobile_no(&self) -> Option<&str> {
        self.raw_data.get("mobile_no").and_then(|v| v.as_str())
    }
}

/// Response for the `/bills/status` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillStatus {
    pub status: String,
    pub amount: Option<f64>,
    pub due_date: Option<String>,
    pub raw_data: RawFields,
}

impl BillStatus {
    /// Whether the bill alerts should fire. The backend passes the
    /// operator's status description through verbatim, so this matches on
    /// substrings rather than exact values.
    pub fn is_unpaid(&self) -> bool {
        self.status.to_lowercase().contains("unpaid")
    }

    /// Paid/overdue/other banding for the status badge.
    pub fn band(&self) -> BillBand {
        let status = self.status.to_lowercase();
        if status.contains("unpaid") || status.contains("due") {
            BillBand::Overdue
        } else if status.contains("paid") {
            BillBand::Paid
        } else {
            BillBand::Unknown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillBand {
    Paid,
    Overdue,
    Unknown,
}

/// One value-added-service bundle from `/vas/bundles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VasBundle {
    pub name: String,
    pub used: Option<String>,
    pub expiry_date: Option<String>,
    pub description: Option<String>,
    pub raw_data: RawFields,
}

/// Response for the `/vas/bundles` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VasBundles {
    pub bundles: Vec<VasBundle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaid_matching_is_case_insensitive() {
        let bill = BillStatus {
            status: "UNPAID".into(),
            ..Default::default()
        };
        assert!(bill.is_unpaid());
        assert_eq!(bill.band(), BillBand::Overdue);

        let bill = BillStatus {
            status: "Paid".into(),
            ..Default::default()
        };
        assert!(!bill.is_unpaid());
        assert_eq!(bill.band(), BillBand::Paid);

        let bill = BillStatus {
            status: "Payment Due".into(),
            ..Default::default()
        };
        assert!(!bill.is_unpaid());
        assert_eq!(bill.band(), BillBand::Overdue);
    }

    #[test]
    fn usage_placeholder_avoids_division_by_zero() {
        let usage = UsageSummary::default();
        assert_eq!(usage.limit, 1.0);
        assert_eq!(usage.percentage, 0.0);
        assert_eq!(usage.remaining(), 1.0);
    }

    #[test]
    fn usage_summary_accepts_totals_only_payload() {
        let usage: UsageSummary = serde_json::from_str(
            r#"{"used": 42.5, "limit": 100.0, "percentage": 42.5}"#,
        )
        .unwrap();
        assert_eq!(usage.used, 42.5);
        assert!(usage.daytime.is_none());
        assert!(usage.reported_time.is_none());
    }

    #[test]
    fn profile_raw_data_passes_through() {
        let profile: ProfileInfo = serde_json::from_str(
            r#"{
                "fullname": "A. Subscriber",
                "package": "FIBRE 100",
                "contact_no": null,
                "email": "a@example.com",
                "raw_data": {"mobile_no": "0771234567", "city": "Colombo"}
            }"#,
        )
        .unwrap();
        assert_eq!(profile.mobile_no(), Some("0771234567"));
        assert_eq!(profile.raw_data["city"], "Colombo");
    }
}
