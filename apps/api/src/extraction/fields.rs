//! Best-effort field extraction over raw resume text. Regex and keyword
//! heuristics only: no linguistic annotation and no accuracy guarantee.
//! Empty output always means "nothing matched", never a swallowed error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::user::{ContactInfo, Experience};

// ─────────────────────────────────────────────────────────────────────────────
// Vocabulary
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed matching vocabulary, lowercase. Matched case-insensitively as
/// substrings, so "JavaScript" in a resume also hits the `java` entry.
const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring",
    "laravel",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "gitlab",
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "data analysis",
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "plotly",
    "html",
    "css",
    "sass",
    "bootstrap",
    "tailwind",
    "jquery",
    "git",
    "github",
    "bitbucket",
    "agile",
    "scrum",
    "kanban",
    "linux",
    "bash",
    "shell scripting",
    "powershell",
    "ci/cd",
    "rest api",
    "graphql",
    "microservices",
    "oauth",
    "jwt",
];

/// Display casing for matched keywords; anything absent here is title-cased.
const SKILL_DISPLAY_OVERRIDES: &[(&str, &str)] = &[
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("node.js", "Node.js"),
    ("mysql", "MySQL"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("aws", "AWS"),
    ("gcp", "GCP"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("sql", "SQL"),
    ("api", "API"),
    ("rest api", "REST API"),
    ("graphql", "GraphQL"),
    ("ci/cd", "CI/CD"),
    ("oauth", "OAuth"),
    ("jwt", "JWT"),
];

/// Section headers that open the experience scan.
const EXPERIENCE_MARKERS: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "professional experience",
    "work experience",
    "career history",
    "employment history",
];

/// Section headers that close the experience scan.
const SECTION_ENDERS: &[&str] = &[
    "education",
    "skills",
    "projects",
    "certifications",
    "achievements",
];

/// Everything the field extractor can pull from the text.
#[derive(Debug, Clone)]
pub struct ResumeFields {
    pub name: String,
    pub contact: ContactInfo,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
}

/// Extracts all structured fields. Total: the sub-extractions are
/// independent and each falls back to its empty or default value when
/// nothing matches.
pub fn extract_resume_fields(text: &str) -> ResumeFields {
    ResumeFields {
        name: extract_name(text),
        contact: extract_contact(text),
        skills: extract_skills(text),
        experience: extract_experience(text),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Name
// ─────────────────────────────────────────────────────────────────────────────

/// First match within the first five lines wins: a two-to-three-word
/// title-case span, else a line of capitals, rewritten to title case.
/// "Unknown" when neither pattern hits.
fn extract_name(text: &str) -> String {
    static TITLE_CASE_NAME: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^([A-Z][a-z]+ [A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)").unwrap());
    static ALL_CAPS_NAME: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^([A-Z\s]{2,50})\s*$").unwrap());

    for line in text.lines().take(5) {
        let line = line.trim();
        for pattern in [&TITLE_CASE_NAME, &ALL_CAPS_NAME] {
            if let Some(caps) = pattern.captures(line) {
                return title_case(&caps[1]);
            }
        }
    }
    "Unknown".to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact
// ─────────────────────────────────────────────────────────────────────────────

/// Email, phone, and LinkedIn slug. Missing pieces stay `None`; `location`
/// is never populated here.
fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(text),
        phone: extract_phone(text),
        linkedin: extract_linkedin(text),
        location: None,
    }
}

fn extract_email(text: &str) -> Option<String> {
    static EMAIL: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// Ordered phone patterns; the first pattern with a match wins. The US
/// pattern re-emits its groups in fixed `(xxx) xxx-xxxx` form, the others
/// join their digit groups.
fn extract_phone(text: &str) -> Option<String> {
    static US: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\+?1?[-.\s]?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})").unwrap()
    });
    static INDIA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?91[-.\s]?([0-9]{10})").unwrap());
    static INTERNATIONAL: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\+?([0-9]{1,4})[-.\s]?([0-9]{6,14})").unwrap());

    if let Some(caps) = US.captures(text) {
        return Some(format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]));
    }
    if let Some(caps) = INDIA.captures(text) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = INTERNATIONAL.captures(text) {
        return Some(format!("{}{}", &caps[1], &caps[2]));
    }
    None
}

/// Matches current and legacy profile URLs case-insensitively and re-emits
/// the canonical `linkedin.com/in/<slug>` form.
fn extract_linkedin(text: &str) -> Option<String> {
    static LINKEDIN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?:linkedin\.com/in/|linkedin\.com/profile/view\?id=)([A-Za-z0-9-]+)")
            .unwrap()
    });
    let lowered = text.to_lowercase();
    LINKEDIN
        .captures(&lowered)
        .map(|caps| format!("linkedin.com/in/{}", &caps[1]))
}

// ─────────────────────────────────────────────────────────────────────────────
// Skills
// ─────────────────────────────────────────────────────────────────────────────

/// Case-insensitive substring scan over the fixed vocabulary. Matches are
/// rewritten for display, deduplicated, and sorted alphabetically; callers
/// must not rely on any other order.
fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut found = Vec::new();
    for &keyword in SKILL_KEYWORDS {
        if lowered.contains(keyword) {
            found.push(capitalize_skill(keyword));
        }
    }
    found.sort();
    found.dedup();
    found
}

fn capitalize_skill(keyword: &str) -> String {
    SKILL_DISPLAY_OVERRIDES
        .iter()
        .find(|(lower, _)| *lower == keyword)
        .map(|(_, display)| (*display).to_string())
        .unwrap_or_else(|| title_case(keyword))
}

/// Uppercases the first letter of every alphabetic run and lowercases the
/// rest, so "JOHN DOE" becomes "John Doe" and "machine learning" becomes
/// "Machine Learning".
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Experience
// ─────────────────────────────────────────────────────────────────────────────

/// Section-scan heuristic. Opens at the first line containing an experience
/// marker, then records every non-bullet line with at least two words as a
/// job-entry candidate until an ender header appears. An `N years` pattern
/// in the line sets the year count, defaulting to 1.
fn extract_experience(text: &str) -> Vec<Experience> {
    static YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*(?:years?|yrs?)").unwrap());

    let mut entries = Vec::new();
    let mut in_section = false;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let lowered = line.to_lowercase();

        if EXPERIENCE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            in_section = true;
            continue;
        }
        if in_section && SECTION_ENDERS.iter().any(|ender| lowered.contains(ender)) {
            break;
        }
        if !in_section {
            continue;
        }
        if line.starts_with(&['•', '-', '◦'][..]) {
            continue;
        }
        if line.split_whitespace().count() < 2 {
            continue;
        }

        let years = YEARS
            .captures(&lowered)
            .and_then(|caps| caps[1].parse::<f64>().ok())
            .unwrap_or(1.0);
        entries.push(Experience {
            company: "Unknown".to_string(),
            role: line.to_string(),
            start_date: None,
            end_date: None,
            years: Some(years),
            description: None,
        });
    }

    entries
}
