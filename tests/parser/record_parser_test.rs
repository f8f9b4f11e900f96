//! Tests for the record parser
//!
//! Covers how source lines become individual and family records, including
//! the lines the parser is expected to skip.

use gedcheck::parser::{RecordParser, parse_file, parse_str};

use crate::utils::family_fixture;

#[test]
fn test_parse_fixture_registries() {
    let records = parse_file(&family_fixture()).unwrap();

    assert_eq!(records.individuals.len(), 10);
    assert_eq!(records.families.len(), 5);
    assert_eq!(records.summary.records(), 15);

    let bob = records.individuals.get("@I2@").unwrap();
    assert_eq!(bob.name, "Bob Williams");
    assert_eq!(bob.birth.as_deref(), Some("10/19/1997"));
    assert_eq!(bob.death.as_deref(), Some("05/12/1995"));

    let f4 = records.families.get("@F4@").unwrap();
    assert_eq!(f4.husband.as_deref(), Some("@I7@"));
    assert_eq!(f4.wife.as_deref(), Some("@I8@"));
    assert_eq!(f4.marriage.as_deref(), Some("10/6/2015"));
    assert_eq!(f4.children, vec!["@I9@"]);
}

#[test]
fn test_records_keep_file_order() {
    let records = parse_file(&family_fixture()).unwrap();

    let ids: Vec<_> = records.individuals.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["@I1@", "@I2@", "@I3@", "@I4@", "@I5@", "@I6@", "@I7@", "@I8@", "@I9@", "@I10@"]
    );
    let families: Vec<_> = records.families.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(families, vec!["@F1@", "@F2@", "@F3@", "@F4@", "@F5@"]);
}

#[test]
fn test_header_lines_are_skipped() {
    let records = parse_str("0 HEAD\n1 SOUR test\n2 VERS 1.0\n1 CHAR UTF-8\n0 TRLR\n");

    assert!(records.individuals.is_empty());
    assert!(records.families.is_empty());
    assert_eq!(records.summary.lines, 5);
    assert_eq!(records.summary.skipped, 2);
    assert_eq!(records.summary.ignored, 1);
}

#[test]
fn test_dates_attach_to_the_open_field() {
    let records = parse_str(
        "0 @I1@ INDI\n\
         1 NAME John /Smith/\n\
         1 BIRT\n\
         2 PLAC Somewhere\n\
         2 DATE 3 FEB 1950\n\
         1 DEAT\n\
         2 DATE 14 MAR 2001\n",
    );

    let john = records.individuals.get("@I1@").unwrap();
    assert_eq!(john.name, "John Smith");
    assert_eq!(john.birth.as_deref(), Some("02/3/1950"));
    assert_eq!(john.death.as_deref(), Some("03/14/2001"));
}

#[test]
fn test_unrecognized_dates_are_left_unset() {
    let records = parse_str(
        "0 @F1@ FAM\n\
         1 MARR\n\
         2 DATE ABT 1900\n\
         1 DIV\n\
         2 DATE 1 FOO 1910\n",
    );

    let family = records.families.get("@F1@").unwrap();
    assert_eq!(family.marriage, None);
    assert_eq!(family.divorce, None);
}

#[test]
fn test_duplicate_id_keeps_later_record() {
    let records = parse_str(
        "0 @I1@ INDI\n\
         1 NAME First /Version/\n\
         0 @I2@ INDI\n\
         1 NAME Other /Person/\n\
         0 @I1@ INDI\n\
         1 NAME Second /Version/\n",
    );

    assert_eq!(records.individuals.len(), 2);
    assert_eq!(records.individuals.get("@I1@").unwrap().name, "Second Version");
    let ids: Vec<_> = records.individuals.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["@I1@", "@I2@"]);
}

#[test]
fn test_garbage_lines_do_not_stop_parsing() {
    let records = RecordParser::new().parse_lines([
        "this is not a record line",
        "0 @I1@ INDI",
        "x NAME Broken",
        "1 NAME Kept /Name/",
        "",
    ]);

    assert_eq!(records.individuals.get("@I1@").unwrap().name, "Kept Name");
    assert_eq!(records.summary.skipped, 2);
    assert_eq!(records.summary.lines, 5);
}

#[test]
fn test_missing_file_is_an_error() {
    let err = parse_file(std::path::Path::new("/no/such/file.ged")).unwrap_err();
    assert!(err.to_string().contains("/no/such/file.ged"));
}
