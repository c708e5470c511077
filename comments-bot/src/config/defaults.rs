//! All setting definitions with their default values.

/// A single setting definition.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

pub const SETTINGS: &[SettingDef] = &[
    SettingDef {
        key: "LEGACY_COMMENTS_URL",
        default: comment_client::LEGACY_BASE,
        description: "Legacy HTML item page (queried with ?id=)",
    },
    SettingDef {
        key: "TREE_COMMENTS_URL",
        default: comment_client::TREE_BASE,
        description: "Threaded comment API (queried with ?itemAOID=)",
    },
    SettingDef {
        key: "CONNECT_TIMEOUT_SECS",
        default: "5",
        description: "TCP connect + TLS handshake limit",
    },
    SettingDef {
        key: "TRANSFER_TIMEOUT_SECS",
        default: "5",
        description: "Longest pause while reading a response body",
    },
    SettingDef {
        key: "REQUEST_TIMEOUT_SECS",
        default: "10",
        description: "Hard cutoff for a whole request",
    },
    SettingDef {
        key: "MAX_SEARCH_RESULTS",
        default: "40",
        description: "Item search result limit",
    },
    SettingDef {
        key: "ITEM_DB_PATH",
        default: "",
        description: "SQLite item database (empty: items.db in the data directory)",
    },
];

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    SETTINGS.iter().find(|d| d.key == key).map(|d| d.default)
}
