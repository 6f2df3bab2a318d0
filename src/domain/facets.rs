use std::collections::BTreeSet;

use serde::Serialize;

use super::{compare_batch_labels, BatchGroup, Company, Member, Partner};

// Display rank for partner sections; categories outside the list come
// last, alphabetically.
const PARTNER_CATEGORY_RANK: [&str; 7] = [
    "TECHNOLOGY",
    "VENTURE CAPITAL",
    "ECOSYSTEM",
    "INITIATIVES",
    "STARTUP",
    "INDUSTRY",
    "OTHER",
];

/// Distinct non-empty batch labels across all members, newest first.
pub fn member_batches(members: &[Member]) -> Vec<String> {
    let distinct: BTreeSet<String> = members
        .iter()
        .map(|member| member.batch.clone())
        .filter(|batch| !batch.is_empty())
        .collect();

    let mut batches: Vec<String> = distinct.into_iter().collect();
    batches.sort_by(|a, b| compare_batch_labels(a, b));
    batches
}

/// Distinct study fields, ascending.
pub fn member_studies(members: &[Member]) -> Vec<String> {
    members
        .iter()
        .filter_map(|member| member.study.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Distinct category tags across all companies, ascending.
pub fn company_categories(companies: &[Company]) -> Vec<String> {
    companies
        .iter()
        .flat_map(|company| company.category.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Distinct founding years as strings, ascending string order.
pub fn company_years(companies: &[Company]) -> Vec<String> {
    companies
        .iter()
        .map(|company| company.founding_year.to_string())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Distinct batch labels across all founders, newest first.
pub fn company_batches(companies: &[Company]) -> Vec<String> {
    let distinct: BTreeSet<String> = companies
        .iter()
        .flat_map(|company| company.founders.iter())
        .map(|founder| founder.batch.clone())
        .filter(|batch| !batch.is_empty())
        .collect();

    let mut batches: Vec<String> = distinct.into_iter().collect();
    batches.sort_by(|a, b| compare_batch_labels(a, b));
    batches
}

/// Members partitioned by batch label, groups ordered newest first.
pub fn batch_groups(members: &[Member]) -> Vec<BatchGroup> {
    member_batches(members)
        .into_iter()
        .map(|name| {
            let count = members
                .iter()
                .filter(|member| member.batch == name)
                .count();
            BatchGroup::from_label(&name, count)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorySummary {
    #[serde(rename = "totalMembers")]
    pub total_members: usize,
    #[serde(rename = "totalBatches")]
    pub total_batches: usize,
    #[serde(rename = "totalCompanies")]
    pub total_companies: usize,
}

pub fn summarize(members: &[Member]) -> DirectorySummary {
    let total_companies = members
        .iter()
        .filter_map(|member| member.company.as_deref())
        .collect::<BTreeSet<&str>>()
        .len();

    DirectorySummary {
        total_members: members.len(),
        total_batches: member_batches(members).len(),
        total_companies,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartnerGroup {
    pub category: String,
    pub partners: Vec<Partner>,
}

/// Partners grouped by category. Input order is kept inside each
/// group; groups follow the fixed category rank.
pub fn partner_groups(partners: &[Partner]) -> Vec<PartnerGroup> {
    let mut groups: Vec<PartnerGroup> = Vec::new();
    for partner in partners {
        match groups
            .iter_mut()
            .find(|group| group.category == partner.category)
        {
            Some(group) => group.partners.push(partner.clone()),
            None => groups.push(PartnerGroup {
                category: partner.category.clone(),
                partners: vec![partner.clone()],
            }),
        }
    }

    groups.sort_by(|a, b| {
        category_rank(&a.category)
            .cmp(&category_rank(&b.category))
            .then_with(|| a.category.cmp(&b.category))
    });
    groups
}

fn category_rank(category: &str) -> usize {
    let upper = category.to_uppercase();
    PARTNER_CATEGORY_RANK
        .iter()
        .position(|known| *known == upper)
        .unwrap_or(PARTNER_CATEGORY_RANK.len())
}
