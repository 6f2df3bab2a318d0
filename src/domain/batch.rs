use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A cohort derived by grouping members on their batch label. Labels
/// are free text shaped like "Winter 2024"; nothing enforces that, so
/// the parse falls back gracefully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchGroup {
    pub name: String,
    pub semester: String,
    pub year: String,
    #[serde(rename = "memberCount")]
    pub member_count: usize,
}

impl BatchGroup {
    pub fn from_label(name: &str, member_count: usize) -> Self {
        let mut tokens = name.split_whitespace();
        let semester = tokens.next().unwrap_or("Batch").to_owned();
        let year = tokens.next().unwrap_or("").to_owned();

        Self {
            name: name.to_owned(),
            semester,
            year,
            member_count,
        }
    }
}

/// Orders batch labels newest first: descending parsed year, winter
/// intakes ahead of other intakes of the same year. Non-numeric years
/// sort as 0. Labels the comparator cannot tell apart keep their
/// original order under a stable sort.
pub fn compare_batch_labels(a: &str, b: &str) -> Ordering {
    let (year_a, winter_a) = label_sort_key(a);
    let (year_b, winter_b) = label_sort_key(b);

    year_b
        .cmp(&year_a)
        .then(winter_b.cmp(&winter_a))
}

fn label_sort_key(label: &str) -> (i32, bool) {
    let mut tokens = label.split_whitespace();
    let semester = tokens.next().unwrap_or("").to_lowercase();
    let year = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(0);
    let winter = semester.contains("winter") || semester.starts_with('w');

    (year, winter)
}
