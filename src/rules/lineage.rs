//! Rules that follow relationships across more than one family
//!
//! Records carry no sex tag, so a person counts as male when some family
//! lists them as its husband.

use crate::report::{Finding, Party};
use crate::rules::{Rule, RuleContext, RuleId, RuleOutcome};
use rustc_hash::FxHashSet;

/// US16: male children carry their father's surname
#[derive(Debug, Clone, Copy, Default)]
pub struct MaleLastNames;

impl Rule for MaleLastNames {
    fn id(&self) -> RuleId {
        RuleId::MaleLastNames
    }

    fn check(&self, ctx: &RuleContext<'_>, outcome: &mut RuleOutcome) {
        for family in ctx.families.iter() {
            let Some(expected) = family
                .husband
                .as_deref()
                .and_then(|id| ctx.individuals.get(id))
                .and_then(|husband| husband.surname())
            else {
                continue;
            };

            for child_id in &family.children {
                if !ctx.index.is_husband(child_id) {
                    continue;
                }
                let Some(child) = ctx.individuals.get(child_id) else {
                    continue;
                };
                let Some(actual) = child.surname() else {
                    continue;
                };

                if actual != expected {
                    outcome.push(Finding::MaleSurnameMismatch {
                        family_id: family.id.clone(),
                        child: Party::new(&child.id, &child.name),
                        expected: expected.to_string(),
                        actual: actual.to_string(),
                    });
                }
            }
        }
    }
}

/// US20: nobody marries a sibling of one of their parents
#[derive(Debug, Clone, Copy, Default)]
pub struct AuntsAndUncles;

impl Rule for AuntsAndUncles {
    fn id(&self) -> RuleId {
        RuleId::AuntsAndUncles
    }

    fn check(&self, ctx: &RuleContext<'_>, outcome: &mut RuleOutcome) {
        let mut reported: FxHashSet<(&str, &str)> = FxHashSet::default();

        for family in ctx.families.iter() {
            for nephew in &family.children {
                for marriage in ctx.index.spouse_families(nephew) {
                    let Some(partner) = marriage.other_spouse(nephew) else {
                        continue;
                    };

                    let related = ctx
                        .index
                        .parents_of(nephew)
                        .any(|parent| ctx.index.are_siblings(parent, partner));

                    if related && reported.insert((nephew.as_str(), partner)) {
                        outcome.push(Finding::AuntUncleMarriage {
                            nephew: Party::resolve(ctx.individuals, Some(nephew.as_str())),
                            relative: Party::resolve(ctx.individuals, Some(partner)),
                        });
                    }
                }
            }
        }
    }
}
