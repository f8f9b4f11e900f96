//! Tests for the relationship rules (US16, US20, US24)

use gedcheck::models::{Family, Individual};
use gedcheck::report::Finding;
use gedcheck::rules::{AuntsAndUncles, MaleLastNames, UniqueFamiliesBySpouses, check_rule};
use gedcheck::IndividualCollection;

use crate::utils::{families, spouses};

fn tree() -> IndividualCollection {
    [
        ("@I1@", "Emily Williams"),
        ("@I2@", "Bob Williams"),
        ("@I3@", "Emma Davis"),
        ("@I4@", "Robert Jones"),
        ("@I5@", "Peter Jones"),
        ("@I6@", "Helen Jones"),
    ]
    .into_iter()
    .map(|(id, name)| Individual::new(id).with_name(name))
    .collect()
}

fn couple(id: &str, husband: &str, wife: &str) -> Family {
    Family::new(id).with_husband(husband).with_wife(wife)
}

#[test]
fn test_male_last_name_without_error() {
    let families = families([
        couple("@F1@", "@I5@", "@I4@").with_children(["@I6@"]),
        couple("@F2@", "@I6@", "@I3@"),
    ]);

    let outcome = check_rule(&MaleLastNames, &tree(), &families);
    assert!(outcome.findings.is_empty());
}

#[test]
fn test_male_last_name_with_error() {
    let families = families([
        couple("@F1@", "@I1@", "@I2@").with_children(["@I6@"]),
        couple("@F2@", "@I6@", "@I3@"),
    ]);

    let outcome = check_rule(&MaleLastNames, &tree(), &families);

    assert_eq!(
        outcome.findings,
        vec![Finding::MaleSurnameMismatch {
            family_id: "@F1@".to_string(),
            child: gedcheck::report::Party::new("@I6@", "Helen Jones"),
            expected: "Williams".to_string(),
            actual: "Jones".to_string(),
        }]
    );
}

#[test]
fn test_aunts_and_uncles_without_error() {
    // Siblings married to each other's spouses, but no one to a parent's sibling
    let families = families([
        couple("@F1@", "@I1@", "@I2@").with_children(["@I3@", "@I4@"]),
        couple("@F2@", "@I5@", "@I4@"),
        couple("@F3@", "@I6@", "@I3@"),
    ]);

    let outcome = check_rule(&AuntsAndUncles, &tree(), &families);
    assert!(outcome.findings.is_empty());
}

#[test]
fn test_aunts_and_uncles_with_error() {
    let families = families([
        couple("@F1@", "@I1@", "@I2@").with_children(["@I3@", "@I4@"]),
        couple("@F2@", "@I5@", "@I4@").with_children(["@I6@"]),
        couple("@F3@", "@I3@", "@I6@"),
    ]);

    let outcome = check_rule(&AuntsAndUncles, &tree(), &families);

    assert_eq!(
        outcome.text(),
        "ERROR: User Story US20: Aunts and Uncles\n\
         Individual: @I6@ - Helen Jones is married to either their aunt or uncle @I3@ - Emma Davis\n\n\n"
    );
}

#[test]
fn test_unique_families_without_wife() {
    let mut without_wife = Family::new("F1").with_husband("Ind1").with_marriage("01/01/2000");
    without_wife.wife = None;
    let families = families([
        without_wife,
        Family::new("F2")
            .with_husband("Ind1")
            .with_wife("Ind2")
            .with_marriage("01/01/2000"),
    ]);

    let outcome = check_rule(&UniqueFamiliesBySpouses, &spouses(), &families);
    assert!(outcome.findings.is_empty());
}

#[test]
fn test_unique_families_with_error() {
    let families = families(["F1", "F2"].map(|id| {
        Family::new(id)
            .with_husband("Ind1")
            .with_wife("Ind2")
            .with_marriage("01/01/2000")
    }));

    let outcome = check_rule(&UniqueFamiliesBySpouses, &spouses(), &families);

    assert_eq!(
        outcome.text(),
        "ERROR: User Story US24: Unique Families By Spouse :\n\
         F1: Husbund Name: David Brown,Wife Name: Mary Brown and F2: Husbund Name: David Brown,Wife Name: Mary Brown\n\
         have same spouses and marriage dates :01/01/2000\n\n\
         ERROR: User Story US24: Unique Families By Spouse :\n\
         F2: Husbund Name: David Brown,Wife Name: Mary Brown and F1: Husbund Name: David Brown,Wife Name: Mary Brown\n\
         have same spouses and marriage dates :01/01/2000\n\n"
    );
}
