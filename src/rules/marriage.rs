//! Marriage timeline rules
//!
//! US04 compares a family's own marriage and divorce dates; US08 compares
//! each child's birth against them.

use crate::report::{Finding, Party};
use crate::rules::{Rule, RuleContext, RuleId, RuleOutcome};

/// Flags families whose divorce date is strictly before the marriage date
#[derive(Debug, Clone, Copy, Default)]
pub struct MarriageBeforeDivorce;

impl Rule for MarriageBeforeDivorce {
    fn id(&self) -> RuleId {
        RuleId::MarriageBeforeDivorce
    }

    fn check(&self, ctx: &RuleContext<'_>, outcome: &mut RuleOutcome) {
        for family in ctx.families.iter() {
            let (Some(marriage), Some(divorce)) = (&family.marriage, &family.divorce) else {
                continue;
            };

            let dates = family
                .marriage_date()
                .and_then(|married| Ok((married, family.divorce_date()?)));
            let (married, divorced) = match dates {
                Ok((Some(married), Some(divorced))) => (married, divorced),
                Ok(_) => continue,
                Err(e) => {
                    outcome.diagnose(&family.id, &e);
                    continue;
                }
            };

            if divorced < married {
                outcome.push(Finding::DivorceBeforeMarriage {
                    family_id: family.id.clone(),
                    husband: Party::resolve(ctx.individuals, family.husband.as_deref()),
                    wife: Party::resolve(ctx.individuals, family.wife.as_deref()),
                    marriage: marriage.clone(),
                    divorce: divorce.clone(),
                });
            }
        }
    }
}

/// Flags children born before their parents married or after they divorced
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthDuringMarriage;

impl Rule for BirthDuringMarriage {
    fn id(&self) -> RuleId {
        RuleId::BirthDuringMarriage
    }

    fn check(&self, ctx: &RuleContext<'_>, outcome: &mut RuleOutcome) {
        for family in ctx.families.iter() {
            let Some(marriage) = family.marriage.as_deref() else {
                continue;
            };
            if family.children.is_empty() {
                continue;
            }

            let married = match family.marriage_date() {
                Ok(Some(date)) => date,
                Ok(None) => continue,
                Err(e) => {
                    outcome.diagnose(&family.id, &e);
                    continue;
                }
            };

            // A bad divorce date only disables the divorce comparison
            let divorced = match family.divorce_date() {
                Ok(date) => date,
                Err(e) => {
                    outcome.diagnose(&family.id, &e);
                    None
                }
            };

            for child_id in &family.children {
                let Some(child) = ctx.individuals.get(child_id) else {
                    continue;
                };
                let born = match child.birth_date() {
                    Ok(Some(date)) => date,
                    Ok(None) => continue,
                    Err(e) => {
                        outcome.diagnose(&child.id, &e);
                        continue;
                    }
                };
                let birth = child.birth.clone().unwrap_or_default();

                if born < married {
                    outcome.push(Finding::BornBeforeMarriage {
                        family_id: family.id.clone(),
                        child: Party::new(&child.id, &child.name),
                        birth: birth.clone(),
                        marriage: marriage.to_string(),
                    });
                }

                if let Some(divorced) = divorced {
                    if born > divorced {
                        outcome.push(Finding::BornAfterDivorce {
                            family_id: family.id.clone(),
                            child: Party::new(&child.id, &child.name),
                            birth,
                            divorce: family.divorce.clone().unwrap_or_default(),
                        });
                    }
                }
            }
        }
    }
}
