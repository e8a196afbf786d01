//! Guest Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Guest entity
///
/// One invitation. `reservation_code` is generated at registration and never
/// changes; the confirmation fields are written exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub reservation_code: String,
    pub max_companions: i64,
    pub confirmed: bool,
    pub confirmation_email: Option<String>,
    pub confirmed_companions: i64,
    /// Epoch millis
    pub created_at: i64,
    /// Epoch millis
    pub updated_at: i64,
}

impl Guest {
    /// Guest plus confirmed companions, saturating at `i64::MAX`.
    pub fn total_attendees(&self) -> i64 {
        self.confirmed_companions.saturating_add(1)
    }
}

/// Create guest payload (`POST /`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestCreate {
    pub name: Option<String>,
    pub max_companions: Option<i64>,
}

/// Update guest payload (`PUT /{id}`)
///
/// Only the mutable fields; the reservation code and confirmation state
/// are not reachable from here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestUpdate {
    pub name: Option<String>,
    pub max_companions: Option<i64>,
}

/// Confirm attendance payload (`POST /confirmar`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfirmAttendance {
    pub reservation_code: Option<String>,
    pub email: Option<String>,
    /// Accepted as any JSON value and coerced with [`coerce_companions`].
    pub companions: Option<Value>,
}

/// Coerce a raw companion value to an integer.
///
/// Numbers are truncated toward zero, numeric strings are parsed, and
/// anything else (absent, null, booleans, non-numeric text, NaN) is 0.
/// Negative values pass through so the caller can reject them.
pub fn coerce_companions(raw: Option<&Value>) -> i64 {
    match raw {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(truncate_finite))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate_finite))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn truncate_finite(f: f64) -> Option<i64> {
    // `as` saturates for out-of-range values
    f.is_finite().then(|| f.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_guest_serializes_camel_case() {
        let guest = Guest {
            id: 1,
            name: "Ana".into(),
            reservation_code: "AB12CD".into(),
            max_companions: 2,
            confirmed: false,
            confirmation_email: None,
            confirmed_companions: 0,
            created_at: 10,
            updated_at: 10,
        };
        let v = serde_json::to_value(&guest).unwrap();
        assert_eq!(v["reservationCode"], "AB12CD");
        assert_eq!(v["maxCompanions"], 2);
        assert_eq!(v["confirmedCompanions"], 0);
        assert_eq!(v["confirmationEmail"], Value::Null);
        assert_eq!(v["createdAt"], 10);
        assert_eq!(guest.total_attendees(), 1);
    }

    #[test]
    fn test_total_attendees_saturates() {
        let guest = Guest {
            id: 1,
            name: "Ana".into(),
            reservation_code: "AB12CD".into(),
            max_companions: i64::MAX,
            confirmed: true,
            confirmation_email: Some("ana@x.com".into()),
            confirmed_companions: i64::MAX,
            created_at: 10,
            updated_at: 10,
        };
        assert_eq!(guest.total_attendees(), i64::MAX);
    }

    #[test]
    fn test_payloads_accept_missing_fields() {
        let create: GuestCreate = serde_json::from_value(json!({})).unwrap();
        assert!(create.name.is_none());
        assert!(create.max_companions.is_none());

        let confirm: ConfirmAttendance =
            serde_json::from_value(json!({"reservationCode": "AB12CD", "email": "a@b.c"}))
                .unwrap();
        assert_eq!(confirm.reservation_code.as_deref(), Some("AB12CD"));
        assert!(confirm.companions.is_none());
    }

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(coerce_companions(Some(&json!(2))), 2);
        assert_eq!(coerce_companions(Some(&json!(-1))), -1);
        assert_eq!(coerce_companions(Some(&json!(1.9))), 1);
    }

    #[test]
    fn test_coerce_strings() {
        assert_eq!(coerce_companions(Some(&json!("3"))), 3);
        assert_eq!(coerce_companions(Some(&json!(" 2 "))), 2);
        assert_eq!(coerce_companions(Some(&json!("2.5"))), 2);
        assert_eq!(coerce_companions(Some(&json!("two"))), 0);
        assert_eq!(coerce_companions(Some(&json!(""))), 0);
        assert_eq!(coerce_companions(Some(&json!("NaN"))), 0);
    }

    #[test]
    fn test_coerce_non_numeric_degrades_to_zero() {
        assert_eq!(coerce_companions(None), 0);
        assert_eq!(coerce_companions(Some(&Value::Null)), 0);
        assert_eq!(coerce_companions(Some(&json!(true))), 0);
        assert_eq!(coerce_companions(Some(&json!([1]))), 0);
        assert_eq!(coerce_companions(Some(&json!({"n": 1}))), 0);
    }
}
