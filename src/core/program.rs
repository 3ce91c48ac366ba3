//! # Programs
//!
//! A `Program` is one opportunity listing: an employment, self-employment
//! or employability scheme. Records arrive as JSON from a `ProgramSource`
//! and are never mutated after loading.
//!
//! The wire names are camelCase (`programName`, `keyFacts`, `careerType`)
//! to match the catalogue back end.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub program_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_facts: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub career_type: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A user review. Only the count feeds into filtering and sorting; the
/// fields are shown on the detail card when present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Review {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Program {
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// The five lowercase texts a search query is matched against, in order:
    /// name, description, then key facts, locations and career types each
    /// joined with `,`.
    pub fn search_haystacks(&self) -> [String; 5] {
        [
            self.program_name.to_lowercase(),
            self.description.to_lowercase(),
            self.key_facts.join(",").to_lowercase(),
            self.locations.join(",").to_lowercase(),
            self.career_type.join(",").to_lowercase(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "id": "p1",
            "programName": "Bakery Training",
            "description": "Learn to bake",
            "keyFacts": ["hands-on", "12 weeks"],
            "locations": ["London"],
            "careerType": ["Food"],
            "reviews": [{"author": "Amal", "rating": 4.5}, {}]
        }"#;
        let program: Program = serde_json::from_str(json).unwrap();
        assert_eq!(program.program_name, "Bakery Training");
        assert_eq!(program.key_facts, vec!["hands-on", "12 weeks"]);
        assert_eq!(program.career_type, vec!["Food"]);
        assert_eq!(program.review_count(), 2);
        assert_eq!(program.reviews[0].author.as_deref(), Some("Amal"));
        assert_eq!(program.reviews[1], Review::default());
    }

    #[test]
    fn test_missing_sequences_default_to_empty() {
        let json = r#"{"id": "p2", "programName": "Bare"}"#;
        let program: Program = serde_json::from_str(json).unwrap();
        assert!(program.description.is_empty());
        assert!(program.key_facts.is_empty());
        assert!(program.locations.is_empty());
        assert_eq!(program.review_count(), 0);
    }

    #[test]
    fn test_search_haystacks_join_with_commas() {
        let program = Program {
            id: "p3".into(),
            program_name: "Coding Bootcamp".into(),
            description: "Intensive COURSE".into(),
            key_facts: vec!["Remote".into(), "Paid".into()],
            locations: vec!["Leeds".into(), "York".into()],
            career_type: vec!["Tech".into()],
            reviews: Vec::new(),
        };
        let [name, desc, facts, locations, careers] = program.search_haystacks();
        assert_eq!(name, "coding bootcamp");
        assert_eq!(desc, "intensive course");
        assert_eq!(facts, "remote,paid");
        assert_eq!(locations, "leeds,york");
        assert_eq!(careers, "tech");
    }
}
