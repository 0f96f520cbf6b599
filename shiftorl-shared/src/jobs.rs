/// Job listing catalogue
///
/// The listings are a fixed set curated by the agency; they change with a
/// deploy, not at runtime, so they live in code instead of the database.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Listing category shown as a filter on the jobs page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobCategory {
    #[serde(rename = "Technical Roles")]
    Technical,
    #[serde(rename = "Marketing Roles")]
    Marketing,
    #[serde(rename = "Medical Roles")]
    Medical,
    #[serde(rename = "Finance Roles")]
    Finance,
}

impl JobCategory {
    pub const ALL: [JobCategory; 4] = [
        JobCategory::Technical,
        JobCategory::Marketing,
        JobCategory::Medical,
        JobCategory::Finance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobCategory::Technical => "Technical Roles",
            JobCategory::Marketing => "Marketing Roles",
            JobCategory::Medical => "Medical Roles",
            JobCategory::Finance => "Finance Roles",
        }
    }

    /// Parses a filter value; `None` for unknown labels
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// One open position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    #[serde(rename = "type")]
    pub job_type: &'static str,
    pub salary: &'static str,
    pub description: &'static str,

    /// ISO date, `YYYY-MM-DD`
    pub posted_date: &'static str,

    pub category: JobCategory,
}

impl JobListing {
    pub fn posted_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.posted_date, "%Y-%m-%d").ok()
    }
}

/// Listing plus its relative age, as served to the jobs page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(flatten)]
    pub listing: JobListing,
    pub posted_ago: Option<String>,
}

static CATALOGUE: [JobListing; 8] = [
    JobListing {
        id: "1",
        title: "Senior Full Stack Developer",
        company: "",
        location: "Orlando, FL",
        job_type: "Full-time",
        salary: "$95,000 - $130,000",
        description: "Senior Full Stack Developer position requiring expertise in React, Node.js, and cloud technologies. Remote work options available.",
        posted_date: "2025-09-28",
        category: JobCategory::Technical,
    },
    JobListing {
        id: "2",
        title: "Digital Marketing Specialist",
        company: "",
        location: "Winter Park, FL",
        job_type: "Full-time",
        salary: "$75,000 - $90,000",
        description: "Digital marketing specialist role focusing on SEO, PPC, and social media campaigns. Analytics experience preferred.",
        posted_date: "2025-09-29",
        category: JobCategory::Marketing,
    },
    JobListing {
        id: "3",
        title: "Registered Nurse - Emergency Department",
        company: "",
        location: "Orlando, FL",
        job_type: "Full-time",
        salary: "$80,000 - $100,000",
        description: "Emergency Department RN position. BSN required, ED experience preferred. Comprehensive benefits package included.",
        posted_date: "2025-09-30",
        category: JobCategory::Medical,
    },
    JobListing {
        id: "4",
        title: "Senior Financial Analyst",
        company: "",
        location: "Lakeland, FL",
        job_type: "Full-time",
        salary: "$70,000 - $85,000",
        description: "Senior Financial Analyst role involving financial modeling and investment analysis. CFA or MBA preferred.",
        posted_date: "2025-10-01",
        category: JobCategory::Finance,
    },
    JobListing {
        id: "5",
        title: "Cloud DevOps Engineer",
        company: "",
        location: "San Juan, PR",
        job_type: "Full-time",
        salary: "$100,000 - $125,000",
        description: "Cloud DevOps Engineer specializing in AWS, Docker, and Kubernetes. CI/CD pipeline experience essential.",
        posted_date: "2025-10-02",
        category: JobCategory::Technical,
    },
    JobListing {
        id: "6",
        title: "Content Marketing Manager",
        company: "",
        location: "Remote",
        job_type: "Full-time",
        salary: "$85,000 - $105,000",
        description: "Content Marketing Manager role focusing on brand storytelling and content strategy. Remote position available.",
        posted_date: "2025-10-03",
        category: JobCategory::Marketing,
    },
    JobListing {
        id: "7",
        title: "Nurse Practitioner - Family Medicine",
        company: "",
        location: "Winter Garden, FL",
        job_type: "Full-time",
        salary: "$110,000 - $130,000",
        description: "Family Medicine Nurse Practitioner position. MSN and certification required. Excellent work-life balance.",
        posted_date: "2025-10-04",
        category: JobCategory::Medical,
    },
    JobListing {
        id: "8",
        title: "Investment Advisor",
        company: "",
        location: "Aguadilla, PR",
        job_type: "Full-time",
        salary: "$90,000 - $140,000",
        description: "Investment Advisor role serving high-net-worth clients. Series 7 and 66 licenses required.",
        posted_date: "2025-10-05",
        category: JobCategory::Finance,
    },
];

/// Every listing, in catalogue order
pub fn all_listings() -> &'static [JobListing] {
    &CATALOGUE
}

/// Listings in `category`; `None` means all
pub fn filter_by_category(category: Option<JobCategory>) -> Vec<&'static JobListing> {
    CATALOGUE
        .iter()
        .filter(|job| category.map_or(true, |c| job.category == c))
        .collect()
}

/// Categories that have at least one listing, in first-seen order
pub fn categories() -> Vec<JobCategory> {
    let mut seen = Vec::new();
    for job in CATALOGUE.iter() {
        if !seen.contains(&job.category) {
            seen.push(job.category);
        }
    }
    seen
}

/// Relative age label for a posting date
///
/// Whole days are rounded up from the absolute distance to midnight UTC of
/// the posting date, then bucketed into days, weeks or months.
pub fn posted_ago(posted: NaiveDate, now: DateTime<Utc>) -> String {
    let posted = posted.and_time(chrono::NaiveTime::MIN).and_utc();
    let millis = (now - posted).num_milliseconds().unsigned_abs();
    let day = 24 * 60 * 60 * 1000;
    let days = millis.div_ceil(day);

    match days {
        1 => "1 day ago".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => format!("{} weeks ago", d / 7),
        d => format!("{} months ago", d / 30),
    }
}

/// Listings in `category` with their age labels relative to `now`
pub fn postings(category: Option<JobCategory>, now: DateTime<Utc>) -> Vec<JobPosting> {
    filter_by_category(category)
        .into_iter()
        .map(|listing| JobPosting {
            listing: listing.clone(),
            posted_ago: listing.posted_on().map(|d| posted_ago(d, now)),
        })
        .collect()
}
