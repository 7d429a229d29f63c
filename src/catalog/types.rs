use serde::Deserialize;

/// The catalog document: three collections cross-referenced by uid
///
/// Fetched once per run and treated as immutable afterwards. Records carry
/// far more fields upstream than we need; serde ignores the rest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub courses: Vec<Course>,

    #[serde(rename = "learningPaths", default)]
    pub learning_paths: Vec<LearningPath>,

    #[serde(default)]
    pub modules: Vec<Module>,
}

/// A course record; its study guide references learning paths by uid
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub uid: String,

    #[serde(default)]
    pub study_guide: Vec<StudyGuideRef>,
}

/// One entry of a course's study guide
///
/// Only entries with `type == "learningPath"` matter here; other types
/// (exam objectives and the like) are skipped during resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudyGuideRef {
    #[serde(default)]
    pub uid: String,

    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A learning path record with its ordered module uid list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LearningPath {
    #[serde(default)]
    pub uid: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub modules: Vec<String>,
}

/// A module record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub uid: String,

    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog() {
        let json = r#"{
            "courses": [
                {"uid": "course.ai-102t00", "study_guide": [
                    {"uid": "learn.path-1", "type": "learningPath"},
                    {"uid": "exam.obj", "type": "examObjective"}
                ]}
            ],
            "learningPaths": [
                {"uid": "learn.path-1", "url": "https://h/paths/p1?wt=1", "modules": ["learn.mod-1"]}
            ],
            "modules": [
                {"uid": "learn.mod-1", "url": "https://h/modules/m1/"}
            ]
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.courses.len(), 1);
        assert_eq!(catalog.learning_paths.len(), 1);
        assert_eq!(catalog.modules.len(), 1);
        assert_eq!(catalog.courses[0].study_guide[0].kind, "learningPath");
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "courses": [{"uid": "c1", "title": "Extra", "study_guide": []}],
            "learningPaths": [],
            "modules": [],
            "units": [{"uid": "ignored"}]
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.courses[0].uid, "c1");
    }

    #[test]
    fn test_deserialize_missing_collections_default_empty() {
        let catalog: Catalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.courses.is_empty());
        assert!(catalog.learning_paths.is_empty());
        assert!(catalog.modules.is_empty());
    }
}
