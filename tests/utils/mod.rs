use std::path::PathBuf;

use gedcheck::models::{Family, Individual};
use gedcheck::{FamilyCollection, IndividualCollection};

/// Base path for test data files
#[must_use]
pub fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// Path to the sample family tree used by the end-to-end tests
#[must_use]
pub fn family_fixture() -> PathBuf {
    test_data_dir().join("family.ged")
}

/// The report the sample family tree must produce, byte for byte
pub const FAMILY_REPORT: &str = "ERROR:INDIVIDUAL: User Story US03: Birth Before Death \n\
Individual: @I2@ - Bob Williams was born after death\n\
DOB: 10/19/1997 DOD: 05/12/1995\n\
\n\
ERROR:INDIVIDUAL: User Story US03: Birth Before Death \n\
Individual: @I8@ - Bob Williams was born after death\n\
DOB: 10/19/1997 DOD: 05/12/1995\n\
\n\
ERROR:FAMILY: User Story US04: Marriage Before Divorce \n\
Family: @F1@\n\
Individual: @I1@: Emily Williams@I2@: Bob Williams marriage date is before divorce date.\n\
Marriage Date: 07/22/1980 Divorce Date: 07/19/1975\n\
\n\
ERROR: User Story US08: Birth Before Marriage Date \n\
Family ID: @F1@\n\
Individual: @I3@: Emma Davis Has been born before parents' marriage\n\
DOB: 04/18/1960 Parents Marriage Date: 07/22/1980\n\
\n\
\n\
ERROR: User Story US08: Birth Before Marriage Date \n\
Family ID: @F1@\n\
Individual: @I4@: Robert Jones Has been born before parents' marriage\n\
DOB: 07/11/1960 Parents Marriage Date: 07/22/1980\n\
\n\
\n\
ERROR: User Story US08: Birth Before Marriage Date \n\
Family ID: @F4@\n\
Individual: @I9@: Emma Davis Has been born before parents' marriage\n\
DOB: 04/18/1960 Parents Marriage Date: 10/6/2015\n\
\n\
\n\
ERROR: User Story US20: Aunts and Uncles\n\
Individual: @I6@ - Helen Jones is married to either their aunt or uncle @I3@ - Emma Davis\n\
\n\
\n";

/// Two spouses with names, as most rule tests need
#[must_use]
pub fn spouses() -> IndividualCollection {
    [
        Individual::new("Ind1").with_name("David Brown"),
        Individual::new("Ind2").with_name("Mary Brown"),
    ]
    .into_iter()
    .collect()
}

/// Build a family registry from a list of families
#[must_use]
pub fn families(families: impl IntoIterator<Item = Family>) -> FamilyCollection {
    families.into_iter().collect()
}
