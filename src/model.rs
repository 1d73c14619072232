//! Data types for the presence dashboard.
//! Wire shapes mirror the backend's JSON API; derivation and validation of
//! what actually gets rendered happen here, away from any DOM concern.

use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// One element of the `/api/v1/users` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub user_id: u32,
    #[serde(default)]
    pub info: UserInfo,
}

/// One selectable dropdown entry derived from a valid `UserRecord`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: u32,
    pub label: String,
    pub avatar_uri: String,
}

/// Derives dropdown entries from fetched records, preserving response order.
/// Records missing a name or avatar URI are rejected instead of rendering as
/// blank options.
pub fn option_entries(records: &[UserRecord]) -> Vec<OptionEntry> {
    records
        .iter()
        .filter(|r| !r.info.name.is_empty() && !r.info.avatar.is_empty())
        .map(|r| OptionEntry {
            value: r.user_id,
            label: r.info.name.clone(),
            avatar_uri: r.info.avatar.clone(),
        })
        .collect()
}

/// One weekday's presence total or mean, in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekdayRow {
    pub day: String,
    pub seconds: f64,
}

/// One weekday's mean start/end, as seconds since midnight.
#[derive(Clone, Debug, PartialEq)]
pub struct StartEndRow {
    pub day: String,
    pub start_secs: f64,
    pub end_secs: f64,
}

/// Decodes `[day, seconds]` rows. The backend prepends a textual header row
/// to the weekday-totals response for its chart consumers; any row whose
/// second cell is not numeric is dropped here.
pub fn weekday_rows(raw: &[Value]) -> Vec<WeekdayRow> {
    raw.iter()
        .filter_map(|row| {
            Some(WeekdayRow {
                day: row.get(0)?.as_str()?.to_string(),
                seconds: row.get(1)?.as_f64()?,
            })
        })
        .collect()
}

/// Decodes `[day, start_secs, end_secs]` rows.
pub fn start_end_rows(raw: &[Value]) -> Vec<StartEndRow> {
    raw.iter()
        .filter_map(|row| {
            Some(StartEndRow {
                day: row.get(0)?.as_str()?.to_string(),
                start_secs: row.get(1)?.as_f64()?,
                end_secs: row.get(2)?.as_f64()?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_users() -> Vec<UserRecord> {
        serde_json::from_str(
            r#"[
                {"user_id": 10, "info": {"name": "Maciej Z.", "avatar": "https://intranet.example.com/api/images/users/10"}},
                {"user_id": 11, "info": {"name": "Anna K.", "avatar": "https://intranet.example.com/api/images/users/11"}},
                {"user_id": 12, "info": {"name": "Piotr N."}},
                {"user_id": 13, "info": {"avatar": "https://intranet.example.com/api/images/users/13"}}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn decodes_the_users_payload() {
        let users = sample_users();
        assert_eq!(users.len(), 4);
        assert_eq!(users[0].user_id, 10);
        assert_eq!(users[1].info.name, "Anna K.");
        // missing fields default to empty rather than failing the decode
        assert_eq!(users[2].info.avatar, "");
        assert_eq!(users[3].info.name, "");
    }

    #[test]
    fn entries_keep_response_order_and_fields() {
        let users = sample_users();
        let entries = option_entries(&users[..2]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, 10);
        assert_eq!(entries[0].label, "Maciej Z.");
        assert_eq!(
            entries[1].avatar_uri,
            "https://intranet.example.com/api/images/users/11"
        );
    }

    #[test]
    fn entries_reject_incomplete_records() {
        let entries = option_entries(&sample_users());
        // the avatar-less and nameless records are dropped
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.value == 10 || e.value == 11));
    }

    #[test]
    fn no_records_no_entries() {
        assert!(option_entries(&[]).is_empty());
    }

    #[test]
    fn weekday_rows_drop_the_header() {
        let raw: Vec<Value> = serde_json::from_str(
            r#"[["Weekday", "Presence (s)"], ["Mon", 28800], ["Tue", 30612.5]]"#,
        )
        .unwrap();
        let rows = weekday_rows(&raw);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].day, "Mon");
        assert_eq!(rows[0].seconds, 28800.0);
        assert_eq!(rows[1].seconds, 30612.5);
    }

    #[test]
    fn start_end_rows_decode_both_offsets() {
        let raw: Vec<Value> =
            serde_json::from_str(r#"[["Mon", 33134.0, 61064.0], ["Tue", "x", 1]]"#).unwrap();
        let rows = start_end_rows(&raw);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].start_secs, 33134.0);
        assert_eq!(rows[0].end_secs, 61064.0);
    }
}
