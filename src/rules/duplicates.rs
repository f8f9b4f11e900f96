//! US24: no two families share the same spouses and marriage date

use crate::models::Family;
use crate::report::Finding;
use crate::rules::{Rule, RuleContext, RuleId, RuleOutcome};
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Marriage dates compare as calendar days; one that does not parse falls
/// back to its stored text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum MarriageKey<'a> {
    Date(NaiveDate),
    Text(&'a str),
}

type SpouseKey<'a> = (&'a str, &'a str, MarriageKey<'a>);

fn spouse_key(family: &Family) -> Option<SpouseKey<'_>> {
    let stored = family.marriage.as_deref()?;
    let marriage = family
        .marriage_date()
        .ok()
        .flatten()
        .map_or(MarriageKey::Text(stored), MarriageKey::Date);
    Some((family.husband.as_deref()?, family.wife.as_deref()?, marriage))
}

/// Reports every ordered pair of families with identical husband, wife and
/// marriage date
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueFamiliesBySpouses;

impl Rule for UniqueFamiliesBySpouses {
    fn id(&self) -> RuleId {
        RuleId::UniqueFamiliesBySpouses
    }

    fn check(&self, ctx: &RuleContext<'_>, outcome: &mut RuleOutcome) {
        let mut groups: FxHashMap<SpouseKey<'_>, SmallVec<[&Family; 2]>> = FxHashMap::default();
        for family in ctx.families.iter() {
            if let Some(key) = spouse_key(family) {
                groups.entry(key).or_default().push(family);
            }
        }

        for family in ctx.families.iter() {
            let Some(key) = spouse_key(family) else {
                continue;
            };
            let Some(group) = groups.get(&key) else {
                continue;
            };
            let (husband, wife, _) = key;

            for other in group.iter().filter(|other| other.id != family.id) {
                outcome.push(Finding::DuplicateFamily {
                    family_id: family.id.clone(),
                    other_family_id: other.id.clone(),
                    husband_name: ctx.individuals.name_of(husband).to_string(),
                    wife_name: ctx.individuals.name_of(wife).to_string(),
                    marriage: family.marriage.clone().unwrap_or_default(),
                });
            }
        }
    }
}
