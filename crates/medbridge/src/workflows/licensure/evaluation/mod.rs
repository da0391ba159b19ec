mod criteria;

pub(crate) use criteria::actions;

use serde::{Deserialize, Serialize};

use super::domain::{Applicant, CredentialStatus, Criterion};
use super::rules::{CountryRuleSet, SupportedCountry, UnsupportedCountryError};
use criteria::{CheckContext, PIPELINE};

/// Stateless engine mapping attested credentials onto the Canadian licensing
/// pathway.
pub struct MappingEngine {
    rules: CountryRuleSet,
}

impl MappingEngine {
    pub fn new(rules: CountryRuleSet) -> Self {
        Self { rules }
    }

    /// Engine backed by the standard five-country rule table.
    pub fn standard() -> Self {
        Self::new(CountryRuleSet::standard())
    }

    pub fn rules(&self) -> &CountryRuleSet {
        &self.rules
    }

    /// Run the fixed criterion pipeline against one applicant.
    ///
    /// The only failure is an unresolvable country; every other input is
    /// processed as attested. Identical input always yields an identical
    /// report, gap-action order included.
    pub fn evaluate(
        &self,
        applicant: &Applicant,
    ) -> Result<CredentialMappingReport, UnsupportedCountryError> {
        let (country, rule) = self.rules.resolve(&applicant.country)?;

        let mut elements = Vec::with_capacity(PIPELINE.len());
        let mut gap_actions = Vec::new();

        let ctx = CheckContext {
            applicant,
            rule: &rule,
        };
        for check in PIPELINE {
            let finding = check(&ctx);
            elements.push(CriterionOutcome {
                criterion: finding.criterion,
                status: finding.status,
            });
            if let Some(action) = finding.action {
                gap_actions.push(action);
            }
        }

        let summary = render_summary(&elements, &gap_actions);

        Ok(CredentialMappingReport {
            country,
            elements,
            gap_actions,
            summary,
        })
    }
}

/// Status recorded for one criterion, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionOutcome {
    pub criterion: Criterion,
    pub status: CredentialStatus,
}

/// Gap analysis produced by a single evaluation, immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialMappingReport {
    pub country: SupportedCountry,
    pub elements: Vec<CriterionOutcome>,
    pub gap_actions: Vec<String>,
    pub summary: String,
}

impl CredentialMappingReport {
    pub fn status_of(&self, criterion: Criterion) -> Option<CredentialStatus> {
        self.elements
            .iter()
            .find(|outcome| outcome.criterion == criterion)
            .map(|outcome| outcome.status)
    }

    /// True when no remediation remains.
    pub fn meets_standard(&self) -> bool {
        self.gap_actions.is_empty()
    }
}

const SUMMARY_KEY_WIDTH: usize = 18;

fn render_summary(elements: &[CriterionOutcome], gap_actions: &[String]) -> String {
    let mut lines = vec!["Credential status:".to_string()];
    for outcome in elements {
        lines.push(format!(
            "• {:<width$} {}",
            outcome.criterion.key(),
            outcome.status.glyph(),
            width = SUMMARY_KEY_WIDTH
        ));
    }

    lines.push(String::new());
    lines.push("Next required actions:".to_string());
    if gap_actions.is_empty() {
        lines.push("• None – you meet the Canadian Standard!".to_string());
    } else {
        for action in gap_actions {
            lines.push(format!("• {action}"));
        }
    }

    lines.join("\n")
}
