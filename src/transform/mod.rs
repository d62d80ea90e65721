use std::collections::BTreeMap;

use crate::roster::MemberRecord;
use crate::utils;

/// All members sharing one membership year, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    pub year: i32,
    pub members: Vec<MemberRecord>,
}

/// Group records by year. Years come out deduplicated and ascending; members
/// within a year keep their input order.
pub fn group_by_year(records: &[MemberRecord]) -> Vec<Cohort> {
    let mut by_year: BTreeMap<i32, Vec<MemberRecord>> = BTreeMap::new();
    for record in records {
        by_year.entry(record.year).or_default().push(record.clone());
    }
    by_year
        .into_iter()
        .map(|(year, members)| Cohort { year, members })
        .collect()
}

pub fn distinct_years(cohorts: &[Cohort]) -> Vec<i32> {
    cohorts.iter().map(|c| c.year).collect()
}

/// Display casing for nicknames. Shouty all-caps nicknames (longer than two
/// characters) are folded down to sentence case, all-lowercase ones get each
/// space-separated word capitalized, and anything mixed-case is taken as
/// deliberate and passed through verbatim.
pub fn format_nickname(nickname: &str) -> String {
    if nickname.is_empty() {
        return String::new();
    }
    if utils::is_all_uppercase(nickname) && nickname.chars().count() > 2 {
        return utils::sentence_case(nickname);
    }
    if utils::is_all_lowercase(nickname) {
        return utils::capitalize_words(nickname);
    }
    nickname.to_string()
}
