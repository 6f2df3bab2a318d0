use crate::domain::{
    Company, Founder, Member, MemberSource, Partner, PartnerSource, SourceError,
};

const MOCK_IMAGE_URL: &str = "/example.png";
const REPEATS_PER_BATCH: usize = 4;

pub struct MemberTemplate {
    pub name: &'static str,
    pub role: &'static str,
    pub study: &'static str,
    pub company: &'static str,
    pub linkedin_url: &'static str,
    pub bio: &'static str,
    pub expertise: &'static [&'static str],
    pub achievements: &'static str,
    pub gender: &'static str,
}

pub const MEMBER_TEMPLATES: [MemberTemplate; 8] = [
    MemberTemplate {
        name: "Sarah Chen",
        role: "CEO & Co-Founder",
        study: "Computer Science",
        company: "TechFlow AI",
        linkedin_url: "https://linkedin.com/in/sarahchen",
        bio: "Passionate about using AI to solve real-world problems. Previously at Google and Meta.",
        expertise: &["Machine Learning", "Product Strategy", "Leadership"],
        achievements: "Raised $5M seed round, 50K+ users in first year",
        gender: "female",
    },
    MemberTemplate {
        name: "Marcus Weber",
        role: "CTO & Co-Founder",
        study: "Computer Science",
        company: "CloudSync",
        linkedin_url: "https://linkedin.com/in/marcusweber",
        bio: "Building scalable cloud infrastructure. Former principal engineer at AWS.",
        expertise: &["Cloud Architecture", "DevOps", "Distributed Systems"],
        achievements: "Built systems serving 10M+ daily active users",
        gender: "male",
    },
    MemberTemplate {
        name: "Priya Patel",
        role: "CEO & Founder",
        study: "Medicine",
        company: "HealthTech Solutions",
        linkedin_url: "https://linkedin.com/in/priyapatel",
        bio: "Revolutionizing healthcare delivery with technology. MD turned entrepreneur.",
        expertise: &["Healthcare", "Digital Health", "Product Development"],
        achievements: "Y Combinator W24, Partnership with 20+ hospitals",
        gender: "female",
    },
    MemberTemplate {
        name: "David Müller",
        role: "CPO & Co-Founder",
        study: "Design",
        company: "DesignHub",
        linkedin_url: "https://linkedin.com/in/davidmuller",
        bio: "Creating beautiful and functional design tools for the next generation of creators.",
        expertise: &["Product Design", "UX/UI", "Creative Tools"],
        achievements: "15K designers using platform, Featured in ProductHunt top 5",
        gender: "male",
    },
    MemberTemplate {
        name: "Lisa Anderson",
        role: "CEO & Co-Founder",
        study: "Business Administration",
        company: "EduTech Pro",
        linkedin_url: "https://linkedin.com/in/lisaanderson",
        bio: "Making quality education accessible to everyone. Former teacher and education consultant.",
        expertise: &["EdTech", "Growth Marketing", "Business Development"],
        achievements: "100K+ students, 15 countries, €2M ARR",
        gender: "female",
    },
    MemberTemplate {
        name: "Alex Thompson",
        role: "CTO & Co-Founder",
        study: "Engineering",
        company: "FinanceFlow",
        linkedin_url: "https://linkedin.com/in/alexthompson",
        bio: "Building modern financial infrastructure for SMEs. Ex-Goldman Sachs and Stripe.",
        expertise: &["FinTech", "Backend Engineering", "Security"],
        achievements: "€10M Series A, Processing €50M monthly",
        gender: "male",
    },
    MemberTemplate {
        name: "Nina Kowalski",
        role: "CEO & Founder",
        study: "Environmental Science",
        company: "GreenTech Innovations",
        linkedin_url: "https://linkedin.com/in/ninakowalski",
        bio: "Fighting climate change through innovative sustainability solutions. Environmental scientist and entrepreneur.",
        expertise: &["Sustainability", "Climate Tech", "Impact Investing"],
        achievements: "B Corp certified, Reduced 50K tons CO2, €3M raised",
        gender: "female",
    },
    MemberTemplate {
        name: "James Park",
        role: "CEO & Co-Founder",
        study: "Marketing",
        company: "FoodTech Labs",
        linkedin_url: "https://linkedin.com/in/jamespark",
        bio: "Reimagining the food industry with sustainable alternatives. Former Michelin-starred chef.",
        expertise: &["Food Science", "Supply Chain", "Operations"],
        achievements: "Partnership with 100+ restaurants, €1.5M seed",
        gender: "male",
    },
];

pub const MOCK_BATCHES: [&str; 6] = [
    "Winter 2025",
    "Summer 2025",
    "Winter 2024",
    "Summer 2024",
    "Winter 2023",
    "Summer 2023",
];

/// Builds a fresh mock collection: every template appears four times
/// per batch, ids counting up from 1. A new call returns a new
/// collection; nothing is shared across calls.
pub fn build_mock_members(
    templates: &[MemberTemplate],
    batches: &[&str],
) -> Vec<Member> {
    let mut members =
        Vec::with_capacity(templates.len() * batches.len() * REPEATS_PER_BATCH);
    let mut next_id = 1;

    for batch in batches {
        for _ in 0..REPEATS_PER_BATCH {
            for template in templates {
                members.push(member_from_template(next_id, batch, template));
                next_id += 1;
            }
        }
    }

    members
}

fn member_from_template(
    id: i64,
    batch: &str,
    template: &MemberTemplate,
) -> Member {
    Member {
        id,
        name: template.name.to_owned(),
        batch: batch.to_owned(),
        role: template.role.to_owned(),
        study: Some(template.study.to_owned()),
        company: Some(template.company.to_owned()),
        linkedin_url: Some(template.linkedin_url.to_owned()),
        image_url: MOCK_IMAGE_URL.to_owned(),
        bio: Some(template.bio.to_owned()),
        expertise: Some(
            template
                .expertise
                .iter()
                .map(|item| (*item).to_owned())
                .collect(),
        ),
        achievements: Some(template.achievements.to_owned()),
        gender: Some(template.gender.to_owned()),
    }
}

pub struct MockMemberSource;

#[async_trait::async_trait]
impl MemberSource for MockMemberSource {
    async fn fetch_members(&self) -> Result<Vec<Member>, SourceError> {
        Ok(build_mock_members(&MEMBER_TEMPLATES, &MOCK_BATCHES))
    }
}

pub fn mock_partners() -> Vec<Partner> {
    let entries = [
        ("1", "NimbusWorks", "Technology"),
        ("2", "Hexagon Software", "Technology"),
        ("3", "Alpenblick Ventures", "Venture Capital"),
        ("4", "Isar Capital", "Venture Capital"),
        ("5", "Founders Hub Munich", "Ecosystem"),
        ("6", "Campus Founders Network", "Initiatives"),
        ("7", "Brightpath Robotics", "Startup"),
        ("8", "Bavaria Motors Group", "Industry"),
        ("9", "Print & Co", "Other"),
    ];

    entries
        .iter()
        .map(|(id, name, category)| Partner {
            id: (*id).to_owned(),
            name: (*name).to_owned(),
            category: (*category).to_owned(),
            logo_url: "/placeholder-logo.png".to_owned(),
        })
        .collect()
}

pub struct MockPartnerSource;

#[async_trait::async_trait]
impl PartnerSource for MockPartnerSource {
    async fn fetch_partners(&self) -> Result<Vec<Partner>, SourceError> {
        Ok(mock_partners())
    }
}

fn founder(name: &str, role: &str, batch: &str) -> Founder {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    Founder {
        name: name.to_owned(),
        role: role.to_owned(),
        batch: batch.to_owned(),
        image_url: format!(
            "https://ui-avatars.com/api/?name={}&size=80",
            initials
        ),
    }
}

/// The static startup catalog shown on the landing page.
pub fn company_catalog() -> Vec<Company> {
    vec![
        Company {
            id: 1,
            name: "Forto".to_owned(),
            website: "forto.com".to_owned(),
            description: "Forto's logistics platform covers the entire supply chain process, from offer to booking, document administration, tracking and tracing. By delivering a highly transparent, frictionless, and sustainable digital supply chain, Forto supports its customers with greater visibility, insight, and control.".to_owned(),
            logo_url: "https://ui-avatars.com/api/?name=Forto&size=300".to_owned(),
            founding_year: 2016,
            category: vec!["SaaS".to_owned(), "Logistics".to_owned(), "Supply Chain".to_owned()],
            founders: vec![
                founder("Erik Muttersbach", "CEO", "Spring 2013"),
                founder("Michael Wax", "CTO", "Spring 2013"),
            ],
        },
        Company {
            id: 2,
            name: "TechVenture".to_owned(),
            website: "techventure.io".to_owned(),
            description: "TechVenture is revolutionizing the way businesses approach digital transformation. With cutting-edge AI and machine learning solutions, we help companies automate processes, gain insights from data, and scale their operations efficiently.".to_owned(),
            logo_url: "https://ui-avatars.com/api/?name=TechVenture&size=300".to_owned(),
            founding_year: 2018,
            category: vec!["AI".to_owned(), "SaaS".to_owned(), "Manufacturing".to_owned()],
            founders: vec![
                founder("Sarah Johnson", "CEO & Founder", "Fall 2015"),
            ],
        },
        Company {
            id: 3,
            name: "FinanceFlow".to_owned(),
            website: "financeflow.com".to_owned(),
            description: "FinanceFlow provides next-generation financial management tools for small and medium-sized businesses. Our cloud-based platform simplifies accounting, invoicing, and financial reporting, helping businesses make better financial decisions with real-time insights and automation.".to_owned(),
            logo_url: "https://ui-avatars.com/api/?name=FinanceFlow&size=300".to_owned(),
            founding_year: 2017,
            category: vec!["SaaS".to_owned(), "FinTech".to_owned(), "Accounting".to_owned()],
            founders: vec![
                founder("David Chen", "CEO", "Spring 2013"),
                founder("Lisa Park", "CFO", "Fall 2014"),
            ],
        },
        Company {
            id: 4,
            name: "HealthTech Solutions".to_owned(),
            website: "healthtech.io".to_owned(),
            description: "HealthTech Solutions is transforming healthcare delivery through innovative technology. Our telemedicine platform connects patients with healthcare providers, streamlines medical records management, and improves patient outcomes through data-driven insights and personalized care.".to_owned(),
            logo_url: "https://ui-avatars.com/api/?name=HealthTech&size=300".to_owned(),
            founding_year: 2019,
            category: vec!["HealthTech".to_owned(), "Telemedicine".to_owned()],
            founders: vec![
                founder("Amanda Rodriguez", "CEO & Chief Medical Officer", "Fall 2015"),
                founder("James Wilson", "CTO", "Spring 2016"),
            ],
        },
        Company {
            id: 5,
            name: "EduLearn".to_owned(),
            website: "edulearn.com".to_owned(),
            description: "EduLearn is democratizing education through our interactive online learning platform. We offer courses in technology, business, and creative skills, with personalized learning paths and real-world projects.".to_owned(),
            logo_url: "https://ui-avatars.com/api/?name=EduLearn&size=300".to_owned(),
            founding_year: 2020,
            category: vec!["EdTech".to_owned(), "AI".to_owned()],
            founders: vec![
                founder("Robert Martinez", "Founder & CEO", "Fall 2014"),
            ],
        },
    ]
}
