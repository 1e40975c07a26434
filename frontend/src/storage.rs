use chrono::{DateTime, Utc};
use shared::refresh::get_last_fetch_key;
use shared::FeedKind;
use web_sys::{window, Storage};

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn read_last_fetch(feed: FeedKind) -> Option<DateTime<Utc>> {
    local_storage()
        .and_then(|s| s.get_item(&get_last_fetch_key(feed.slug())).ok().flatten())
        .and_then(|v| v.parse::<i64>().ok())
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// Only called after a successful fetch.
pub fn write_last_fetch(feed: FeedKind, at: DateTime<Utc>) {
    let Some(storage) = local_storage() else {
        return;
    };
    let key = get_last_fetch_key(feed.slug());
    if storage
        .set_item(&key, &at.timestamp_millis().to_string())
        .is_err()
    {
        log::warn!("Could not persist {}", key);
    }
}
