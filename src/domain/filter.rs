use super::{Company, Member};

/// One facet's active selection. Absent query parameters and the
/// literal "all" both mean no filtering on that facet.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FacetSelection {
    #[default]
    All,
    Value(String),
}

impl FacetSelection {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("all") => Self::All,
            Some(value) => Self::Value(value.to_owned()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Value(selected) => selected == value,
        }
    }

    pub fn matches_optional(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Value(selected) => value == Some(selected.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub batch: FacetSelection,
    pub study: FacetSelection,
}

impl MemberFilter {
    pub fn matches(&self, member: &Member) -> bool {
        self.batch.matches(&member.batch)
            && self.study.matches_optional(member.study.as_deref())
    }

    pub fn apply(&self, members: &[Member]) -> Vec<Member> {
        members
            .iter()
            .filter(|member| self.matches(member))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompanyFilter {
    pub batch: FacetSelection,
    pub category: FacetSelection,
    pub year: FacetSelection,
}

impl CompanyFilter {
    /// A batch selection matches when ANY founder belongs to it, and a
    /// category selection when the tag list contains it (membership,
    /// not equality).
    pub fn matches(&self, company: &Company) -> bool {
        let matches_batch = match &self.batch {
            FacetSelection::All => true,
            FacetSelection::Value(batch) => company
                .founders
                .iter()
                .any(|founder| &founder.batch == batch),
        };

        let matches_category = match &self.category {
            FacetSelection::All => true,
            FacetSelection::Value(category) => {
                company.category.iter().any(|tag| tag == category)
            }
        };

        matches_batch
            && matches_category
            && self.year.matches(&company.founding_year.to_string())
    }

    pub fn apply(&self, companies: &[Company]) -> Vec<Company> {
        companies
            .iter()
            .filter(|company| self.matches(company))
            .cloned()
            .collect()
    }
}
