//! Learning-resource recommendation: a catalog lookup per missing skill
//! with a synthesized search fallback for skills the catalog does not know.

use std::collections::BTreeMap;

use crate::models::resources::{Difficulty, LearningResource, Recommendation, ResourceType};

/// One recommendation per catalog resource for each missing skill, in input
/// order. Catalog lookup is an exact, case-sensitive key match. Skills with
/// no catalog entry get exactly one generic search resource with the skill
/// name URL-encoded into the query.
pub fn recommend_for_missing(
    missing_skills: &[String],
    catalog: &BTreeMap<String, Vec<LearningResource>>,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    for skill in missing_skills {
        match catalog.get(skill) {
            Some(resources) if !resources.is_empty() => {
                for resource in resources {
                    recommendations.push(Recommendation {
                        skill: skill.clone(),
                        resource: resource.clone(),
                    });
                }
            }
            _ => recommendations.push(generic_recommendation(skill)),
        }
    }
    recommendations
}

fn generic_recommendation(skill: &str) -> Recommendation {
    Recommendation {
        skill: skill.to_string(),
        resource: LearningResource {
            title: format!("Learn {skill}"),
            description: format!("Search for {skill} tutorials and courses online"),
            url: format!(
                "https://www.google.com/search?q={}+tutorial",
                urlencoding::encode(skill)
            ),
            duration: "Variable".to_string(),
            difficulty: Difficulty::Beginner,
            resource_type: ResourceType::Search,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_resource(title: &str) -> LearningResource {
        LearningResource {
            title: title.to_string(),
            description: "desc".to_string(),
            url: "https://example.org".to_string(),
            duration: "10 hours".to_string(),
            difficulty: Difficulty::Beginner,
            resource_type: ResourceType::Course,
        }
    }

    fn make_catalog() -> BTreeMap<String, Vec<LearningResource>> {
        let mut catalog = BTreeMap::new();
        catalog.insert(
            "Python".to_string(),
            vec![
                make_resource("Python Crash Course"),
                make_resource("Python for Everybody"),
            ],
        );
        catalog.insert("SQL".to_string(), vec![make_resource("SQLBolt")]);
        catalog
    }

    #[test]
    fn test_catalog_hit_emits_one_entry_per_resource() {
        let recs = recommend_for_missing(&["Python".to_string()], &make_catalog());
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.skill == "Python"));
        assert_eq!(recs[0].resource.title, "Python Crash Course");
        assert_eq!(recs[1].resource.title, "Python for Everybody");
    }

    #[test]
    fn test_output_follows_input_order() {
        let missing = vec!["SQL".to_string(), "Python".to_string()];
        let recs = recommend_for_missing(&missing, &make_catalog());
        assert_eq!(recs[0].skill, "SQL");
        assert!(recs[1..].iter().all(|r| r.skill == "Python"));
    }

    #[test]
    fn test_unknown_skill_gets_single_generic_resource() {
        let recs = recommend_for_missing(&["Terraform".to_string()], &make_catalog());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].skill, "Terraform");
        assert_eq!(recs[0].resource.resource_type, ResourceType::Search);
        assert_eq!(recs[0].resource.title, "Learn Terraform");
        assert!(recs[0].resource.url.contains("Terraform+tutorial"));
    }

    #[test]
    fn test_generic_fallback_url_encodes_skill() {
        let recs = recommend_for_missing(&["C++".to_string()], &make_catalog());
        assert!(recs[0].resource.url.contains("C%2B%2B"));
        assert_eq!(recs[0].resource.title, "Learn C++");

        let recs = recommend_for_missing(&["Power BI".to_string()], &make_catalog());
        assert_eq!(recs[0].skill, "Power BI");
        assert!(recs[0].resource.url.contains("Power%20BI"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let recs = recommend_for_missing(&["python".to_string()], &make_catalog());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].resource.resource_type, ResourceType::Search);
    }

    #[test]
    fn test_empty_input_yields_no_recommendations() {
        assert!(recommend_for_missing(&[], &make_catalog()).is_empty());
    }
}
