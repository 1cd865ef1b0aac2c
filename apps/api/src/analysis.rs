//! Skill gap analysis: a pure comparison of a user's stored skills against
//! a role's required list.

use serde::{Deserialize, Serialize};

/// Full analysis payload returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    pub user_id: String,
    pub target_role: String,
    pub required_skills: Vec<String>,
    pub user_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: f64,
}

/// The matched/missing split plus the match percentage.
#[derive(Debug, Clone)]
pub struct GapReport {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: f64,
}

/// Splits the required list into matched and missing against the user's
/// skills. Comparison is case-insensitive exact equality; "JS" does not
/// match "JavaScript". Output preserves the required list's order and
/// casing. The percentage is unrounded and 0 when the required list is
/// empty.
pub fn compute_skill_gap(required: &[String], user_skills: &[String]) -> GapReport {
    let user_lowered: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    for skill in required {
        if user_lowered.contains(&skill.to_lowercase()) {
            matched_skills.push(skill.clone());
        } else {
            missing_skills.push(skill.clone());
        }
    }

    let match_percentage = if required.is_empty() {
        0.0
    } else {
        matched_skills.len() as f64 / required.len() as f64 * 100.0
    };

    GapReport {
        matched_skills,
        missing_skills,
        match_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matched_and_missing_partition_required() {
        let required = skills(&["Python", "SQL", "Excel"]);
        let report = compute_skill_gap(&required, &skills(&["python"]));

        let mut union = report.matched_skills.clone();
        union.extend(report.missing_skills.clone());
        union.sort();
        let mut expected = required.clone();
        expected.sort();
        assert_eq!(union, expected);
        assert!(report
            .matched_skills
            .iter()
            .all(|s| !report.missing_skills.contains(s)));
    }

    #[test]
    fn test_match_is_case_insensitive_and_keeps_required_casing() {
        let report = compute_skill_gap(&skills(&["Python"]), &skills(&["python"]));
        assert_eq!(report.matched_skills, vec!["Python"]);
        assert!(report.missing_skills.is_empty());
        assert!((report.match_percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let report = compute_skill_gap(&skills(&["JavaScript"]), &skills(&["JS"]));
        assert_eq!(report.missing_skills, vec!["JavaScript"]);
        assert!(report.matched_skills.is_empty());
    }

    #[test]
    fn test_empty_required_list_scores_zero() {
        let report = compute_skill_gap(&[], &skills(&["Python"]));
        assert!(report.matched_skills.is_empty());
        assert!(report.missing_skills.is_empty());
        assert_eq!(report.match_percentage, 0.0);
    }

    #[test]
    fn test_output_preserves_required_order() {
        let required = skills(&["Tableau", "Python", "Excel", "SQL"]);
        let report = compute_skill_gap(&required, &skills(&["sql", "tableau"]));
        assert_eq!(report.matched_skills, vec!["Tableau", "SQL"]);
        assert_eq!(report.missing_skills, vec!["Python", "Excel"]);
    }

    #[test]
    fn test_duplicate_user_skills_do_not_double_count() {
        let report = compute_skill_gap(&skills(&["Python", "SQL"]), &skills(&["python", "Python"]));
        assert_eq!(report.matched_skills, vec!["Python"]);
        assert!((report.match_percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_three_of_ten_matches_thirty_percent() {
        let required = skills(&[
            "Python",
            "SQL",
            "Excel",
            "Tableau",
            "Power BI",
            "Pandas",
            "NumPy",
            "Matplotlib",
            "Statistics",
            "Data Visualization",
        ]);
        let report = compute_skill_gap(&required, &skills(&["AWS", "Python", "SQL", "Pandas"]));
        assert_eq!(report.matched_skills, vec!["Python", "SQL", "Pandas"]);
        assert_eq!(report.missing_skills.len(), 7);
        assert!((report.match_percentage - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_extracted_sample_resume_scores_twenty_percent_for_data_analyst() {
        let fields = crate::extraction::fields::extract_resume_fields(
            "Experienced Python developer, SQL, AWS",
        );
        let required = skills(&[
            "Python",
            "SQL",
            "Excel",
            "Tableau",
            "Power BI",
            "Pandas",
            "NumPy",
            "Matplotlib",
            "Statistics",
            "Data Visualization",
        ]);
        let report = compute_skill_gap(&required, &fields.skills);
        assert_eq!(report.matched_skills, vec!["Python", "SQL"]);
        assert_eq!(report.missing_skills.len(), 8);
        assert!((report.match_percentage - 20.0).abs() < 1e-9);
    }
}
