use serde::{Deserialize, Serialize};

/// Closed difficulty scale for a learning resource. Unknown values are
/// rejected at the boundary rather than stored as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Closed resource kinds. `Search` marks the synthesized fallback entry
/// pointing at a web search instead of a curated resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Course,
    Article,
    Video,
    Book,
    Tutorial,
    Documentation,
    Search,
}

/// One learning resource as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub description: String,
    pub url: String,
    pub duration: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

/// A resource tagged with the missing skill it addresses. Serialized flat:
/// the wire shape is the resource fields plus `skill` at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill: String,
    #[serde(flatten)]
    pub resource: LearningResource,
}
