use chrono::NaiveDate;

/// Validated input for creating an item
///
/// Produced by request validation; the store fills in the id and both
/// timestamps.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub item_name: String,
    pub description: String,
    pub location_found: Option<String>,
    pub date_found: Option<NaiveDate>,
    pub claimed: bool,
}

/// Validated partial update for an item
///
/// `None` means the stored value is left alone.
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub location_found: Option<String>,
    pub date_found: Option<NaiveDate>,
    pub claimed: Option<bool>,
}
