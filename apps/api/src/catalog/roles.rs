//! Role catalog: role name to ordered required-skill list, backed by
//! `roles.json` and seeded explicitly at startup.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;
use crate::store::JsonStore;

type RoleMap = BTreeMap<String, Vec<String>>;

/// Default roles written on first startup when `roles.json` is absent.
const DEFAULT_ROLES: &[(&str, &[&str])] = &[
    (
        "Data Analyst",
        &[
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
        ],
    ),
    (
        "Python Developer",
        &[
            "Python",
            "Django",
            "Flask",
            "FastAPI",
            "PostgreSQL",
            "Git",
            "REST API",
            "Docker",
            "Linux",
            "Unit Testing",
        ],
    ),
    (
        "Frontend Developer",
        &[
            "JavaScript",
            "TypeScript",
            "React",
            "HTML",
            "CSS",
            "Tailwind",
            "Git",
            "REST API",
            "Webpack",
            "Node.js",
        ],
    ),
    (
        "Machine Learning Engineer",
        &[
            "Python",
            "TensorFlow",
            "PyTorch",
            "Scikit-learn",
            "Pandas",
            "NumPy",
            "SQL",
            "Docker",
            "Kubernetes",
            "MLOps",
            "Statistics",
        ],
    ),
    (
        "Full Stack Developer",
        &[
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Express",
            "MongoDB",
            "PostgreSQL",
            "Git",
            "Docker",
            "AWS",
            "REST API",
        ],
    ),
    (
        "DevOps Engineer",
        &[
            "Linux",
            "Docker",
            "Kubernetes",
            "AWS",
            "Jenkins",
            "Git",
            "Bash",
            "Python",
            "Terraform",
            "Ansible",
            "CI/CD",
        ],
    ),
    (
        "Data Scientist",
        &[
            "Python",
            "R",
            "Machine Learning",
            "Deep Learning",
            "Statistics",
            "Pandas",
            "NumPy",
            "Matplotlib",
            "Jupyter",
            "SQL",
            "TensorFlow",
        ],
    ),
    (
        "Mobile Developer",
        &[
            "React Native",
            "Flutter",
            "iOS",
            "Android",
            "Swift",
            "Kotlin",
            "JavaScript",
            "Firebase",
            "REST API",
            "Git",
        ],
    ),
];

#[derive(Clone)]
pub struct RoleCatalog {
    store: JsonStore<RoleMap>,
}

impl RoleCatalog {
    pub fn new(path: PathBuf, lock_timeout: Duration) -> Self {
        RoleCatalog {
            store: JsonStore::new(path, lock_timeout),
        }
    }

    /// Writes the default roles if the backing file does not exist yet.
    /// Returns whether seeding happened; an existing file is left untouched.
    pub async fn seed_defaults(&self) -> Result<bool, AppError> {
        let guard = self.store.lock().await?;
        if guard.exists().await? {
            return Ok(false);
        }
        guard.store(&default_roles()).await?;
        Ok(true)
    }

    /// All role names, in the catalog's sorted key order.
    pub async fn role_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.store.read().await?.into_keys().collect())
    }

    /// Required skills for a role. `None` means the role is unknown, which
    /// is distinct from a role defined with an empty skill list.
    pub async fn required_skills(&self, role: &str) -> Result<Option<Vec<String>>, AppError> {
        Ok(self.store.read().await?.remove(role))
    }

    /// Adds or overwrites a role's skill list.
    pub async fn upsert(&self, role: &str, skills: Vec<String>) -> Result<(), AppError> {
        let guard = self.store.lock().await?;
        let mut roles = guard.load().await?;
        roles.insert(role.to_string(), skills);
        guard.store(&roles).await
    }
}

fn default_roles() -> RoleMap {
    DEFAULT_ROLES
        .iter()
        .map(|(role, skills)| {
            (
                (*role).to_string(),
                skills.iter().map(|s| (*s).to_string()).collect(),
            )
        })
        .collect()
}
