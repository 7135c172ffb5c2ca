use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Biological sex used to pick the Mifflin-St Jeor constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Map the profile service's free-form gender string.
    ///
    /// Anything other than "male" uses the female equation; a missing value counts as male.
    pub fn from_backend(value: Option<&str>) -> Self {
        match value {
            None => Gender::Male,
            Some(v) if v.trim().is_empty() || v.trim().eq_ignore_ascii_case("male") => Gender::Male,
            Some(_) => Gender::Female,
        }
    }
}

impl FromStr for Gender {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(PlannerError::InvalidInput(format!("unknown gender '{}'", other))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Daily activity level, each mapped to a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Map the profile service's `daily_activity_level` value.
    ///
    /// The service's "active" is what this planner calls `Moderate`.
    pub fn from_backend(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("sedentary") => ActivityLevel::Sedentary,
            Some("lightly_active") => ActivityLevel::Light,
            Some("active") => ActivityLevel::Moderate,
            Some("very_active") => ActivityLevel::VeryActive,
            _ => ActivityLevel::Moderate,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightlyactive" => Ok(ActivityLevel::Light),
            "moderate" | "moderatelyactive" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "veryactive" => Ok(ActivityLevel::VeryActive),
            _ => Err(PlannerError::InvalidInput(format!(
                "unknown activity level '{}'",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        };
        write!(f, "{}", name)
    }
}

/// Weight goal applied as a fixed calorie offset to TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Goal {
    #[default]
    Maintain,
    Lose,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Maintain, Goal::Lose, Goal::Gain];

    /// Map the profile service's `primary_goal` value.
    pub fn from_backend(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("muscle_gain") => Goal::Gain,
            Some("fat_loss") => Goal::Lose,
            Some("endurance") => Goal::Maintain,
            _ => Goal::Maintain,
        }
    }
}

impl FromStr for Goal {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "maintain" | "maintain weight" => Ok(Goal::Maintain),
            "lose" | "lose weight" => Ok(Goal::Lose),
            "gain" | "gain muscle" => Ok(Goal::Gain),
            other => Err(PlannerError::InvalidInput(format!("unknown goal '{}'", other))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Maintain => write!(f, "Maintain Weight"),
            Goal::Lose => write!(f, "Lose Weight"),
            Goal::Gain => write!(f, "Gain Muscle"),
        }
    }
}

/// Diet preference; selects both the catalog slice and the macro split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum DietPreference {
    #[default]
    Balanced,
    Vegan,
    Keto,
    #[serde(rename = "High-Protein")]
    HighProtein,
    Mediterranean,
}

impl DietPreference {
    pub const ALL: [DietPreference; 5] = [
        DietPreference::Balanced,
        DietPreference::Vegan,
        DietPreference::Keto,
        DietPreference::HighProtein,
        DietPreference::Mediterranean,
    ];
}

impl FromStr for DietPreference {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "balanced" => Ok(DietPreference::Balanced),
            "vegan" => Ok(DietPreference::Vegan),
            "keto" => Ok(DietPreference::Keto),
            "highprotein" => Ok(DietPreference::HighProtein),
            "mediterranean" => Ok(DietPreference::Mediterranean),
            _ => Err(PlannerError::InvalidInput(format!(
                "unknown diet type '{}'",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DietPreference::Balanced => "Balanced",
            DietPreference::Vegan => "Vegan",
            DietPreference::Keto => "Keto",
            DietPreference::HighProtein => "High-Protein",
            DietPreference::Mediterranean => "Mediterranean",
        };
        write!(f, "{}", name)
    }
}

/// A validated physiological profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Profile {
    /// Reject non-positive body measurements.
    pub fn validate(&self) -> Result<()> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(PlannerError::Validation(
                "weight must be a positive number of kilograms".to_string(),
            ));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(PlannerError::Validation(
                "height must be a positive number of centimetres".to_string(),
            ));
        }
        if self.age == 0 {
            return Err(PlannerError::Validation("age must be positive".to_string()));
        }
        Ok(())
    }
}

/// Profile payload as returned by the user profile service.
///
/// Every field is optional; [`ProfileRecord::to_profile`] fails when a body
/// measurement is missing and falls back to defaults for the enums.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub height_cm: Option<f64>,

    #[serde(default)]
    pub weight_kg: Option<f64>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub daily_activity_level: Option<String>,

    #[serde(default)]
    pub primary_goal: Option<String>,
}

impl ProfileRecord {
    pub fn to_profile(&self) -> Result<Profile> {
        let weight_kg = self
            .weight_kg
            .ok_or_else(|| PlannerError::Validation("weight is required".to_string()))?;
        let height_cm = self
            .height_cm
            .ok_or_else(|| PlannerError::Validation("height is required".to_string()))?;
        let age = self
            .age
            .ok_or_else(|| PlannerError::Validation("age is required".to_string()))?;

        let profile = Profile {
            weight_kg,
            height_cm,
            age,
            gender: Gender::from_backend(self.gender.as_deref()),
            activity_level: ActivityLevel::from_backend(self.daily_activity_level.as_deref()),
            goal: Goal::from_backend(self.primary_goal.as_deref()),
        };
        profile.validate()?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_parsing() {
        assert_eq!("very active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("VeryActive".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("light".parse::<ActivityLevel>().unwrap(), ActivityLevel::Light);
        assert!("couch".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_backend_activity_mapping() {
        assert_eq!(ActivityLevel::from_backend(Some("active")), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_backend(Some("lightly_active")), ActivityLevel::Light);
        assert_eq!(ActivityLevel::from_backend(Some("unknown")), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_backend(None), ActivityLevel::Moderate);
    }

    #[test]
    fn test_backend_goal_mapping() {
        assert_eq!(Goal::from_backend(Some("muscle_gain")), Goal::Gain);
        assert_eq!(Goal::from_backend(Some("fat_loss")), Goal::Lose);
        assert_eq!(Goal::from_backend(Some("endurance")), Goal::Maintain);
        assert_eq!(Goal::from_backend(None), Goal::Maintain);
    }

    #[test]
    fn test_backend_gender_mapping() {
        assert_eq!(Gender::from_backend(None), Gender::Male);
        assert_eq!(Gender::from_backend(Some("MALE")), Gender::Male);
        assert_eq!(Gender::from_backend(Some("Female")), Gender::Female);
        assert_eq!(Gender::from_backend(Some("other")), Gender::Female);
    }

    #[test]
    fn test_diet_preference_round_trips_display() {
        for diet in DietPreference::ALL {
            assert_eq!(diet.to_string().parse::<DietPreference>().unwrap(), diet);
        }
    }

    #[test]
    fn test_record_missing_weight_is_validation_error() {
        let record = ProfileRecord {
            age: Some(30),
            height_cm: Some(170.0),
            ..Default::default()
        };
        assert!(matches!(record.to_profile(), Err(PlannerError::Validation(_))));
    }

    #[test]
    fn test_record_from_backend_json() {
        let json = r#"{"age": 25, "height_cm": 175, "weight_kg": 70,
            "gender": "Male", "daily_activity_level": "active", "primary_goal": "fat_loss"}"#;
        let record: ProfileRecord = serde_json::from_str(json).unwrap();
        let profile = record.to_profile().unwrap();

        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, Goal::Lose);
        assert_eq!(profile.gender, Gender::Male);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let profile = Profile {
            weight_kg: 0.0,
            height_cm: 170.0,
            age: 30,
            gender: Gender::Female,
            activity_level: ActivityLevel::Light,
            goal: Goal::Maintain,
        };
        assert!(profile.validate().is_err());
    }
}
