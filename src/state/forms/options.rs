//! Option domains for the choice fields of the quote form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned when a raw string is not part of an option domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option '{}'", self.0)
    }
}

impl std::error::Error for UnknownOption {}

/// Project type selected on step 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Ecommerce,
    LandingPage,
    Cms,
    Portfolio,
    Custom,
    NotSure,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        Self::Ecommerce,
        Self::LandingPage,
        Self::Cms,
        Self::Portfolio,
        Self::Custom,
        Self::NotSure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ecommerce => "ecommerce",
            Self::LandingPage => "landing-page",
            Self::Cms => "cms",
            Self::Portfolio => "portfolio",
            Self::Custom => "custom",
            Self::NotSure => "not-sure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ecommerce => "E-commerce",
            Self::LandingPage => "Landing Page",
            Self::Cms => "CMS",
            Self::Portfolio => "Portfolio",
            Self::Custom => "Custom",
            Self::NotSure => "Not sure",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Ecommerce => "Online store with shopping cart and payment processing",
            Self::LandingPage => "Single page to promote a product or service",
            Self::Cms => "Content management system for blogs or news sites",
            Self::Portfolio => "Showcase your work and projects",
            Self::Custom => "Custom web application with specific requirements",
            Self::NotSure => "I need help determining what's best for my project",
        }
    }
}

impl FromStr for ProjectType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Budget range in AUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "1k-2k")]
    OneToTwoK,
    #[serde(rename = "2k-4k")]
    TwoToFourK,
    #[serde(rename = "4k-7k")]
    FourToSevenK,
    #[serde(rename = "7k+")]
    SevenKPlus,
    #[serde(rename = "not-sure")]
    NotSure,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 5] = [
        Self::OneToTwoK,
        Self::TwoToFourK,
        Self::FourToSevenK,
        Self::SevenKPlus,
        Self::NotSure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToTwoK => "1k-2k",
            Self::TwoToFourK => "2k-4k",
            Self::FourToSevenK => "4k-7k",
            Self::SevenKPlus => "7k+",
            Self::NotSure => "not-sure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneToTwoK => "AUD $1,000 - $2,000",
            Self::TwoToFourK => "AUD $2,000 - $4,000",
            Self::FourToSevenK => "AUD $4,000 - $7,000",
            Self::SevenKPlus => "AUD $7,000+",
            Self::NotSure => "Not sure yet",
        }
    }
}

impl FromStr for BudgetRange {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Desired completion timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "asap")]
    Asap,
    #[serde(rename = "1-2-weeks")]
    OneToTwoWeeks,
    #[serde(rename = "2-4-weeks")]
    TwoToFourWeeks,
    #[serde(rename = "1-2-months")]
    OneToTwoMonths,
    #[serde(rename = "2-3-months")]
    TwoToThreeMonths,
    #[serde(rename = "flexible")]
    Flexible,
}

impl Timeline {
    pub const ALL: [Timeline; 6] = [
        Self::Asap,
        Self::OneToTwoWeeks,
        Self::TwoToFourWeeks,
        Self::OneToTwoMonths,
        Self::TwoToThreeMonths,
        Self::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asap => "asap",
            Self::OneToTwoWeeks => "1-2-weeks",
            Self::TwoToFourWeeks => "2-4-weeks",
            Self::OneToTwoMonths => "1-2-months",
            Self::TwoToThreeMonths => "2-3-months",
            Self::Flexible => "flexible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Asap => "ASAP (As soon as possible)",
            Self::OneToTwoWeeks => "1-2 weeks",
            Self::TwoToFourWeeks => "2-4 weeks",
            Self::OneToTwoMonths => "1-2 months",
            Self::TwoToThreeMonths => "2-3 months",
            Self::Flexible => "Flexible timeline",
        }
    }
}

impl FromStr for Timeline {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Preferred time of day for a follow-up call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactTime {
    Morning,
    Afternoon,
    Evening,
    Anytime,
}

impl ContactTime {
    pub const ALL: [ContactTime; 4] = [
        Self::Morning,
        Self::Afternoon,
        Self::Evening,
        Self::Anytime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Anytime => "anytime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning (9 AM - 12 PM)",
            Self::Afternoon => "Afternoon (12 PM - 5 PM)",
            Self::Evening => "Evening (5 PM - 8 PM)",
            Self::Anytime => "Anytime",
        }
    }
}

impl FromStr for ContactTime {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_round_trips_through_wire_value() {
        for value in ProjectType::ALL {
            assert_eq!(value.as_str().parse::<ProjectType>(), Ok(value));
        }
    }

    #[test]
    fn test_unknown_project_type_is_rejected() {
        assert_eq!(
            "website".parse::<ProjectType>(),
            Err(UnknownOption("website".to_string()))
        );
        assert!("".parse::<ProjectType>().is_err());
    }

    #[test]
    fn test_budget_serializes_to_wire_value() {
        let json = serde_json::to_string(&BudgetRange::SevenKPlus).unwrap();
        assert_eq!(json, "\"7k+\"");
        let parsed: BudgetRange = serde_json::from_str("\"2k-4k\"").unwrap();
        assert_eq!(parsed, BudgetRange::TwoToFourK);
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for value in Timeline::ALL {
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.as_str()));
        }
        for value in ContactTime::ALL {
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.as_str()));
        }
        for value in ProjectType::ALL {
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.as_str()));
        }
    }

    #[test]
    fn test_option_parsing_is_case_sensitive() {
        assert!("Morning".parse::<ContactTime>().is_err());
        assert!("ASAP".parse::<Timeline>().is_err());
    }
}
