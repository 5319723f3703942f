/// Art profile form and its generated summary
///
/// The "AI summary" is a fixed template filled with the form fields.
use std::fmt;

use thiserror::Error;

/// Interests offered on the profile form, in display order
pub const ART_INTERESTS: [&str; 10] = [
    "Pottery",
    "Textiles",
    "Woodwork",
    "Jewelry",
    "Paintings",
    "Sculptures",
    "Metalwork",
    "Ceramics",
    "Weaving",
    "Embroidery",
];

pub const MIN_AGE: u8 = 13;
pub const MAX_AGE: u8 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

impl Experience {
    pub const ALL: [Experience; 4] = [
        Experience::Beginner,
        Experience::Intermediate,
        Experience::Advanced,
        Experience::Professional,
    ];

    /// The bare level name used inside the summary
    pub fn name(self) -> &'static str {
        match self {
            Experience::Beginner => "Beginner",
            Experience::Intermediate => "Intermediate",
            Experience::Advanced => "Advanced",
            Experience::Professional => "Professional",
        }
    }
}

/// Picker label
impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hint = match self {
            Experience::Beginner => "Just starting to explore art",
            Experience::Intermediate => "Some experience with art",
            Experience::Advanced => "Experienced art enthusiast",
            Experience::Professional => "Working in creative field",
        };
        write!(f, "{} - {}", self.name(), hint)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Please enter your full name")]
    MissingName,
    #[error("Please enter your age")]
    MissingAge,
    #[error("Age must be a whole number between {} and {}", MIN_AGE, MAX_AGE)]
    InvalidAge,
    #[error("Please describe your skills and talents")]
    MissingSkills,
}

/// Raw form input, kept as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    /// Kept as text so partial input survives editing
    pub age: String,
    pub location: String,
    pub skills: String,
    pub experience: Option<Experience>,
    /// Selected interests, in the order they were picked
    pub interests: Vec<String>,
}

impl ProfileForm {
    /// Select an interest, or deselect it if already selected
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(index) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(index);
        } else {
            self.interests.push(interest.to_string());
        }
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }

    /// Check the required fields, returning the parsed age
    pub fn validate(&self) -> Result<u8, ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::MissingName);
        }

        let age = self.age.trim();
        if age.is_empty() {
            return Err(ProfileError::MissingAge);
        }
        let age: u8 = age.parse().map_err(|_| ProfileError::InvalidAge)?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ProfileError::InvalidAge);
        }

        if self.skills.trim().is_empty() {
            return Err(ProfileError::MissingSkills);
        }

        Ok(age)
    }

    /// Validate the form and fill the profile summary template
    pub fn summary(&self) -> Result<String, ProfileError> {
        let age = self.validate()?;
        let experience = self.experience.map(Experience::name).unwrap_or_default();
        let interests = self.interests.join(", ");
        let specialties = self
            .interests
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" and ");

        Ok(format!(
            "Based on your profile, you are a {age}-year-old art enthusiast named {name} \
             with skills in {skills}. Your interests in {interests} suggest you have a deep \
             appreciation for traditional crafts. With {experience} experience, you would \
             particularly enjoy exploring handcrafted pieces that showcase authentic techniques \
             and cultural heritage. We recommend connecting with artisans who specialize in \
             {specialties} to discover unique pieces that align with your artistic sensibilities.",
            name = self.name,
            skills = self.skills,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProfileForm {
        ProfileForm {
            name: "Ana Lima".to_string(),
            age: "34".to_string(),
            location: "Porto, Portugal".to_string(),
            skills: "wheel throwing".to_string(),
            experience: Some(Experience::Intermediate),
            interests: Vec::new(),
        }
    }

    #[test]
    fn test_toggle_interest_keeps_pick_order() {
        let mut form = ProfileForm::default();
        form.toggle_interest("Weaving");
        form.toggle_interest("Pottery");
        form.toggle_interest("Jewelry");
        form.toggle_interest("Pottery");

        assert_eq!(form.interests, vec!["Weaving", "Jewelry"]);
        assert!(form.has_interest("Weaving"));
        assert!(!form.has_interest("Pottery"));
    }

    #[test]
    fn test_summary_text() {
        let mut form = filled();
        form.toggle_interest("Pottery");
        form.toggle_interest("Textiles");
        form.toggle_interest("Weaving");

        let summary = form.summary().unwrap();
        assert_eq!(
            summary,
            "Based on your profile, you are a 34-year-old art enthusiast named Ana Lima with \
             skills in wheel throwing. Your interests in Pottery, Textiles, Weaving suggest you \
             have a deep appreciation for traditional crafts. With Intermediate experience, you \
             would particularly enjoy exploring handcrafted pieces that showcase authentic \
             techniques and cultural heritage. We recommend connecting with artisans who \
             specialize in Pottery and Textiles to discover unique pieces that align with your \
             artistic sensibilities."
        );
    }

    #[test]
    fn test_summary_without_experience_or_interests() {
        let mut form = filled();
        form.experience = None;

        let summary = form.summary().unwrap();
        assert!(summary.contains("Your interests in  suggest"));
        assert!(summary.contains("With  experience"));
        assert!(summary.contains("specialize in  to discover"));
    }

    #[test]
    fn test_validation() {
        let mut form = filled();
        form.name = "  ".to_string();
        assert_eq!(form.validate(), Err(ProfileError::MissingName));

        let mut form = filled();
        form.age.clear();
        assert_eq!(form.validate(), Err(ProfileError::MissingAge));

        for bad in ["12", "121", "thirty", "-5", "300"] {
            let mut form = filled();
            form.age = bad.to_string();
            assert_eq!(form.validate(), Err(ProfileError::InvalidAge), "age {bad}");
        }

        let mut form = filled();
        form.skills.clear();
        assert_eq!(form.summary(), Err(ProfileError::MissingSkills));

        let mut form = filled();
        form.age = " 13 ".to_string();
        assert_eq!(form.validate(), Ok(13));
    }
}
