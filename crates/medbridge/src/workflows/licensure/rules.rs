use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Countries of training with a defined licensing pathway.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SupportedCountry {
    Ireland,
    UnitedKingdom,
    Iran,
    India,
    Egypt,
}

impl SupportedCountry {
    /// Case-insensitive resolution of caller-supplied country text.
    pub fn resolve(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "IRELAND" => Some(SupportedCountry::Ireland),
            "UK" | "UNITED KINGDOM" => Some(SupportedCountry::UnitedKingdom),
            "IRAN" => Some(SupportedCountry::Iran),
            "INDIA" => Some(SupportedCountry::India),
            "EGYPT" => Some(SupportedCountry::Egypt),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SupportedCountry::Ireland => "Ireland",
            SupportedCountry::UnitedKingdom => "United Kingdom",
            SupportedCountry::Iran => "Iran",
            SupportedCountry::India => "India",
            SupportedCountry::Egypt => "Egypt",
        }
    }
}

/// Licensing parameters for one country of training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRule {
    pub minimum_training_months: u32,
    pub gp_exam_waiver_eligible: bool,
    pub specialist_approved_jurisdiction: bool,
}

/// Raised when an applicant's country has no entry in the rule table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no licensing rules defined for country '{0}'")]
pub struct UnsupportedCountryError(pub String);

/// Immutable per-country rule table, built once and shared.
///
/// New pathways are added by extending the table data, not by changing
/// evaluation logic.
#[derive(Debug, Clone)]
pub struct CountryRuleSet {
    rules: BTreeMap<SupportedCountry, CountryRule>,
}

impl CountryRuleSet {
    /// Baseline table for the five focus countries, aligned with the FMRAC
    /// Canadian Standard.
    pub fn standard() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            SupportedCountry::Ireland,
            CountryRule {
                minimum_training_months: 12,
                gp_exam_waiver_eligible: true,
                specialist_approved_jurisdiction: true,
            },
        );
        rules.insert(
            SupportedCountry::UnitedKingdom,
            CountryRule {
                minimum_training_months: 12,
                gp_exam_waiver_eligible: true,
                specialist_approved_jurisdiction: true,
            },
        );
        rules.insert(
            SupportedCountry::Iran,
            CountryRule {
                minimum_training_months: 18,
                gp_exam_waiver_eligible: false,
                specialist_approved_jurisdiction: false,
            },
        );
        rules.insert(
            SupportedCountry::India,
            CountryRule {
                minimum_training_months: 12,
                gp_exam_waiver_eligible: false,
                specialist_approved_jurisdiction: false,
            },
        );
        rules.insert(
            SupportedCountry::Egypt,
            CountryRule {
                minimum_training_months: 24,
                gp_exam_waiver_eligible: false,
                specialist_approved_jurisdiction: false,
            },
        );

        Self { rules }
    }

    pub fn rule(&self, country: SupportedCountry) -> Option<&CountryRule> {
        self.rules.get(&country)
    }

    /// Resolve free-text country input to a rule entry.
    pub fn resolve(
        &self,
        raw: &str,
    ) -> Result<(SupportedCountry, CountryRule), UnsupportedCountryError> {
        let country = SupportedCountry::resolve(raw)
            .ok_or_else(|| UnsupportedCountryError(raw.to_string()))?;
        let rule = self
            .rules
            .get(&country)
            .copied()
            .ok_or_else(|| UnsupportedCountryError(raw.to_string()))?;
        Ok((country, rule))
    }

    pub fn countries(&self) -> impl Iterator<Item = SupportedCountry> + '_ {
        self.rules.keys().copied()
    }
}

impl Default for CountryRuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
