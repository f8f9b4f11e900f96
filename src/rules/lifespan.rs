//! US03: nobody is born after they die

use crate::report::{Finding, Party};
use crate::rules::{Rule, RuleContext, RuleId, RuleOutcome};

/// Flags individuals whose birth date is strictly after their death date
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthBeforeDeath;

impl Rule for BirthBeforeDeath {
    fn id(&self) -> RuleId {
        RuleId::BirthBeforeDeath
    }

    fn check(&self, ctx: &RuleContext<'_>, outcome: &mut RuleOutcome) {
        for individual in ctx.individuals.iter() {
            // Both dates are parsed whenever present, so a bad date is reported
            // even if the other one is missing.
            let dates = individual
                .birth_date()
                .and_then(|birth| Ok((birth, individual.death_date()?)));

            let (birth, death) = match dates {
                Ok((Some(birth), Some(death))) => (birth, death),
                Ok(_) => continue,
                Err(e) => {
                    outcome.diagnose(&individual.id, &e);
                    continue;
                }
            };

            if birth > death {
                outcome.push(Finding::BirthAfterDeath {
                    individual: Party::new(&individual.id, &individual.name),
                    birth: individual.birth.clone().unwrap_or_default(),
                    death: individual.death.clone().unwrap_or_default(),
                });
            }
        }
    }
}
