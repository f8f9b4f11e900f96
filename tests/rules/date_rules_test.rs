//! Tests for the date comparison rules (US03, US04, US08)
//!
//! Each case builds the registries by hand and runs a single rule.

use gedcheck::models::{Family, Individual};
use gedcheck::rules::{
    BirthBeforeDeath, BirthDuringMarriage, MarriageBeforeDivorce, RuleId, check_rule,
};
use gedcheck::{FamilyCollection, IndividualCollection};

use crate::utils::{families, spouses};

fn one_person(individual: Individual) -> IndividualCollection {
    [individual].into_iter().collect()
}

#[test]
fn test_birth_before_death_with_error() {
    let individuals = one_person(
        Individual::new("Ind1")
            .with_name("David Brown")
            .with_birth("01/01/2000")
            .with_death("01/01/1999"),
    );

    let outcome = check_rule(&BirthBeforeDeath, &individuals, &FamilyCollection::new());

    assert_eq!(outcome.rule, RuleId::BirthBeforeDeath);
    assert_eq!(
        outcome.text(),
        "ERROR:INDIVIDUAL: User Story US03: Birth Before Death \n\
         Individual: Ind1 - David Brown was born after death\n\
         DOB: 01/01/2000 DOD: 01/01/1999\n\n"
    );
}

#[test]
fn test_birth_before_death_with_parse_error() {
    let individuals = one_person(
        Individual::new("Ind1")
            .with_name("David Brown")
            .with_birth("01/01/2000")
            .with_death("test"),
    );

    let outcome = check_rule(&BirthBeforeDeath, &individuals, &FamilyCollection::new());

    assert!(outcome.findings.is_empty());
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(
        outcome.diagnostics[0].to_string(),
        "US03 Ind1: Unparseable date: \"test\""
    );
}

#[test]
fn test_marriage_before_divorce_with_error() {
    let families = families([Family::new("F1")
        .with_husband("Ind1")
        .with_wife("Ind2")
        .with_marriage("01/01/2000")
        .with_divorce("01/01/1999")]);

    let outcome = check_rule(&MarriageBeforeDivorce, &spouses(), &families);

    assert_eq!(
        outcome.text(),
        "ERROR:FAMILY: User Story US04: Marriage Before Divorce \n\
         Family: F1\n\
         Individual: Ind1: David BrownInd2: Mary Brown marriage date is before divorce date.\n\
         Marriage Date: 01/01/2000 Divorce Date: 01/01/1999\n\n"
    );
}

#[test]
fn test_marriage_before_divorce_with_parse_error() {
    let families = families([Family::new("F1")
        .with_husband("Ind1")
        .with_wife("Ind2")
        .with_marriage("test")
        .with_divorce("01/01/1999")]);

    let outcome = check_rule(&MarriageBeforeDivorce, &spouses(), &families);

    assert!(outcome.findings.is_empty());
    assert_eq!(outcome.diagnostics[0].message, "Unparseable date: \"test\"");
}

#[test]
fn test_unknown_spouse_renders_empty_name() {
    let families = families([Family::new("F1")
        .with_husband("Ind1")
        .with_wife("Ind9")
        .with_marriage("01/01/2000")
        .with_divorce("01/01/1999")]);

    let outcome = check_rule(&MarriageBeforeDivorce, &spouses(), &families);

    assert!(outcome
        .text()
        .contains("Individual: Ind1: David BrownInd9:  marriage date is before divorce date.\n"));
}

fn with_child(birth: &str) -> IndividualCollection {
    let mut individuals = spouses();
    individuals.add(Individual::new("Ind3").with_name("John Brown").with_birth(birth));
    individuals
}

#[test]
fn test_birth_during_marriage_without_child() {
    let families = families([Family::new("F1")
        .with_husband("Ind1")
        .with_wife("Ind2")
        .with_marriage("01/01/2001")]);

    let outcome = check_rule(&BirthDuringMarriage, &with_child("01/01/2000"), &families);
    assert!(outcome.findings.is_empty());
}

#[test]
fn test_birth_before_marriage_with_error() {
    let families = families([Family::new("F1")
        .with_husband("Ind1")
        .with_wife("Ind2")
        .with_marriage("01/01/2001")
        .with_children(["Ind3"])]);

    let outcome = check_rule(&BirthDuringMarriage, &with_child("01/01/2000"), &families);

    assert_eq!(
        outcome.text(),
        "ERROR: User Story US08: Birth Before Marriage Date \n\
         Family ID: F1\n\
         Individual: Ind3: John Brown Has been born before parents' marriage\n\
         DOB: 01/01/2000 Parents Marriage Date: 01/01/2001\n\n\n"
    );
}

#[test]
fn test_birth_after_divorce_with_error() {
    let families = families([Family::new("F1")
        .with_husband("Ind1")
        .with_wife("Ind2")
        .with_marriage("01/01/2000")
        .with_divorce("01/01/2010")
        .with_children(["Ind3"])]);

    let outcome = check_rule(&BirthDuringMarriage, &with_child("01/01/2011"), &families);

    assert_eq!(
        outcome.text(),
        "ERROR: User Story US08: Birth After Divorce Date\n\
         Family ID: F1\n\
         Individual: Ind3: John Brown Has been born after parents' divorce\n\
         DOB: 01/01/2011 Parents Divorce Date: 01/01/2010\n\n\n"
    );
}

#[test]
fn test_birth_during_marriage_with_parse_error() {
    let families = families([Family::new("F1")
        .with_husband("Ind1")
        .with_wife("Ind2")
        .with_marriage("01/01/2000")
        .with_children(["Ind3"])]);

    let outcome = check_rule(&BirthDuringMarriage, &with_child("test"), &families);

    assert!(outcome.findings.is_empty());
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].record_id, "Ind3");
}
