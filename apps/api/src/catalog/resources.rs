//! Learning-resource catalog: skill to resource list, backed by
//! `resources.json` and seeded explicitly at startup.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;
use crate::models::resources::{Difficulty, LearningResource, ResourceType};
use crate::store::JsonStore;

pub type ResourceMap = BTreeMap<String, Vec<LearningResource>>;

#[derive(Clone)]
pub struct ResourceCatalog {
    store: JsonStore<ResourceMap>,
}

impl ResourceCatalog {
    pub fn new(path: PathBuf, lock_timeout: Duration) -> Self {
        ResourceCatalog {
            store: JsonStore::new(path, lock_timeout),
        }
    }

    /// Writes the default catalog if the backing file does not exist yet.
    /// Returns whether seeding happened; an existing file is left untouched.
    pub async fn seed_defaults(&self) -> Result<bool, AppError> {
        let guard = self.store.lock().await?;
        if guard.exists().await? {
            return Ok(false);
        }
        guard.store(&default_resources()).await?;
        Ok(true)
    }

    /// The whole catalog keyed by skill. Lookup against it is case-sensitive.
    pub async fn all(&self) -> Result<ResourceMap, AppError> {
        self.store.read().await
    }

    /// Appends a resource under the skill, creating the key if it is new.
    pub async fn append(&self, skill: &str, resource: LearningResource) -> Result<(), AppError> {
        let guard = self.store.lock().await?;
        let mut catalog = guard.load().await?;
        catalog.entry(skill.to_string()).or_default().push(resource);
        guard.store(&catalog).await
    }
}

fn resource(
    title: &str,
    description: &str,
    url: &str,
    duration: &str,
    difficulty: Difficulty,
    resource_type: ResourceType,
) -> LearningResource {
    LearningResource {
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        duration: duration.to_string(),
        difficulty,
        resource_type,
    }
}

/// Curated starter catalog written on first startup.
fn default_resources() -> ResourceMap {
    let mut catalog = ResourceMap::new();
    catalog.insert(
        "Python".to_string(),
        vec![
            resource(
                "Python Crash Course",
                "A hands-on, project-based introduction to programming",
                "https://nostarch.com/python-crash-course-3rd-edition",
                "40 hours",
                Difficulty::Beginner,
                ResourceType::Book,
            ),
            resource(
                "Automate the Boring Stuff with Python",
                "Practical programming for total beginners",
                "https://automatetheboringstuff.com/",
                "30 hours",
                Difficulty::Beginner,
                ResourceType::Book,
            ),
            resource(
                "Python for Everybody Specialization",
                "Learn to program and analyze data with Python",
                "https://www.coursera.org/specializations/python",
                "32 hours",
                Difficulty::Beginner,
                ResourceType::Course,
            ),
        ],
    );
    catalog.insert(
        "JavaScript".to_string(),
        vec![
            resource(
                "JavaScript: The Definitive Guide",
                "Master the world's most-used programming language",
                "https://www.oreilly.com/library/view/javascript-the-definitive/9781491952016/",
                "50 hours",
                Difficulty::Intermediate,
                ResourceType::Book,
            ),
            resource(
                "JavaScript30",
                "Build 30 things in 30 days with vanilla JavaScript",
                "https://javascript30.com/",
                "30 hours",
                Difficulty::Intermediate,
                ResourceType::Course,
            ),
        ],
    );
    catalog.insert(
        "React".to_string(),
        vec![
            resource(
                "React - The Complete Guide",
                "Learn React from the ground up, including hooks and routing",
                "https://www.udemy.com/course/react-the-complete-guide-incl-redux/",
                "48 hours",
                Difficulty::Intermediate,
                ResourceType::Course,
            ),
            resource(
                "Official React Documentation",
                "The canonical guide to modern React",
                "https://react.dev/learn",
                "20 hours",
                Difficulty::Beginner,
                ResourceType::Documentation,
            ),
        ],
    );
    catalog.insert(
        "SQL".to_string(),
        vec![
            resource(
                "SQL in 10 Minutes, Sams Teach Yourself",
                "Quick, practical lessons in SQL querying",
                "https://www.amazon.com/SQL-Minutes-Sams-Teach-Yourself/dp/0135182794",
                "15 hours",
                Difficulty::Beginner,
                ResourceType::Book,
            ),
            resource(
                "SQLBolt Interactive Tutorial",
                "Interactive lessons and exercises in the browser",
                "https://sqlbolt.com/",
                "10 hours",
                Difficulty::Beginner,
                ResourceType::Tutorial,
            ),
        ],
    );
    catalog.insert(
        "Machine Learning".to_string(),
        vec![
            resource(
                "Machine Learning Course by Andrew Ng",
                "The classic broad introduction to machine learning",
                "https://www.coursera.org/learn/machine-learning",
                "60 hours",
                Difficulty::Intermediate,
                ResourceType::Course,
            ),
            resource(
                "Hands-On Machine Learning",
                "Concepts and tools with Scikit-Learn, Keras and TensorFlow",
                "https://www.oreilly.com/library/view/hands-on-machine-learning/9781492032632/",
                "40 hours",
                Difficulty::Intermediate,
                ResourceType::Book,
            ),
        ],
    );
    catalog.insert(
        "Docker".to_string(),
        vec![resource(
            "Docker Deep Dive",
            "Containers from first principles to production",
            "https://www.pluralsight.com/courses/docker-deep-dive-update",
            "12 hours",
            Difficulty::Intermediate,
            ResourceType::Course,
        )],
    );
    catalog.insert(
        "AWS".to_string(),
        vec![resource(
            "AWS Cloud Practitioner Essentials",
            "Foundational overview of the AWS cloud",
            "https://aws.amazon.com/training/digital/aws-cloud-practitioner-essentials/",
            "24 hours",
            Difficulty::Beginner,
            ResourceType::Course,
        )],
    );
    catalog
}
