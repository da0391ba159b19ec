use crate::workflows::licensure::rules::{CountryRuleSet, SupportedCountry};

#[test]
fn country_resolution_is_case_insensitive() {
    for raw in ["ireland", "IRELAND", "Ireland"] {
        assert_eq!(
            SupportedCountry::resolve(raw),
            Some(SupportedCountry::Ireland)
        );
    }

    for raw in ["uk", "UK", "united kingdom", "United Kingdom"] {
        assert_eq!(
            SupportedCountry::resolve(raw),
            Some(SupportedCountry::UnitedKingdom)
        );
    }

    assert_eq!(
        SupportedCountry::resolve("  egypt  "),
        Some(SupportedCountry::Egypt)
    );
}

#[test]
fn unknown_countries_do_not_resolve() {
    assert_eq!(SupportedCountry::resolve("France"), None);
    assert_eq!(SupportedCountry::resolve(""), None);
}

#[test]
fn resolve_preserves_the_raw_input_in_the_error() {
    let rules = CountryRuleSet::standard();
    let error = rules.resolve("Atlantis").expect_err("no such pathway");
    assert!(error.to_string().contains("Atlantis"));
}

#[test]
fn standard_table_matches_the_published_minimums() {
    let rules = CountryRuleSet::standard();

    let expectations = [
        (SupportedCountry::Ireland, 12, true, true),
        (SupportedCountry::UnitedKingdom, 12, true, true),
        (SupportedCountry::Iran, 18, false, false),
        (SupportedCountry::India, 12, false, false),
        (SupportedCountry::Egypt, 24, false, false),
    ];

    for (country, months, waiver, jurisdiction) in expectations {
        let rule = rules.rule(country).expect("country in table");
        assert_eq!(rule.minimum_training_months, months, "{country:?}");
        assert_eq!(rule.gp_exam_waiver_eligible, waiver, "{country:?}");
        assert_eq!(
            rule.specialist_approved_jurisdiction, jurisdiction,
            "{country:?}"
        );
    }
}

#[test]
fn standard_table_covers_exactly_the_focus_countries() {
    let rules = CountryRuleSet::standard();
    assert_eq!(rules.countries().count(), 5);
}
