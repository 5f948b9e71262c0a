use serde::Serialize;
use std::collections::BTreeMap;

/// Headline counts of the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_count: usize,
    pub pending_count: usize,
    pub by_employee: BTreeMap<String, usize>,
    pub by_theme: BTreeMap<String, usize>,
}
