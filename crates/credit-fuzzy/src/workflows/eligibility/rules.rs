use serde::{Deserialize, Serialize};

use super::error::FuzzyConfigError;
use super::membership::{DegreeTriple, Term};

/// Conjunctive rule: `credit is <term> AND debt ratio is <term> => consequent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub credit: Term,
    pub debt_ratio: Term,
    pub consequent: f64,
}

impl Rule {
    pub fn new(credit: Term, debt_ratio: Term, consequent: f64) -> Self {
        Self {
            credit,
            debt_ratio,
            consequent,
        }
    }

    /// Firing strength under fuzzy AND (minimum).
    pub fn strength(&self, credit: &DegreeTriple, debt_ratio: &DegreeTriple) -> f64 {
        credit
            .degree(self.credit)
            .min(debt_ratio.degree(self.debt_ratio))
    }
}

/// Ordered rule list. Order does not change the aggregate but is kept for reproducible output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    pub fn new(rules: Vec<Rule>) -> Result<Self, FuzzyConfigError> {
        if rules.is_empty() {
            return Err(FuzzyConfigError::EmptyRuleBase);
        }
        if let Some(index) = rules.iter().position(|rule| !rule.consequent.is_finite()) {
            return Err(FuzzyConfigError::InvalidConsequent { index });
        }
        Ok(Self { rules })
    }

    /// The four credit rules: strong credit with low debt scores highest, weak credit
    /// with heavy debt lowest.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule::new(Term::High, Term::Low, 90.0),
                Rule::new(Term::Medium, Term::Medium, 70.0),
                Rule::new(Term::Low, Term::High, 30.0),
                Rule::new(Term::Medium, Term::Low, 80.0),
            ],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TryFrom<Vec<Rule>> for RuleBase {
    type Error = FuzzyConfigError;

    fn try_from(rules: Vec<Rule>) -> Result<Self, Self::Error> {
        RuleBase::new(rules)
    }
}

impl From<RuleBase> for Vec<Rule> {
    fn from(base: RuleBase) -> Self {
        base.rules
    }
}

/// Strength and crisp consequent of one fired rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Firing {
    pub strength: f64,
    pub consequent: f64,
}

/// Lazily fires each rule of `rule_base` against the two degree triples, in rule order.
///
/// The returned iterator is cheap to clone, so the sequence can be replayed.
pub fn fire<'a>(
    rule_base: &'a RuleBase,
    credit: &'a DegreeTriple,
    debt_ratio: &'a DegreeTriple,
) -> Firings<'a> {
    Firings {
        rules: rule_base.rules.iter(),
        credit,
        debt_ratio,
    }
}

#[derive(Debug, Clone)]
pub struct Firings<'a> {
    rules: std::slice::Iter<'a, Rule>,
    credit: &'a DegreeTriple,
    debt_ratio: &'a DegreeTriple,
}

impl Iterator for Firings<'_> {
    type Item = Firing;

    fn next(&mut self) -> Option<Self::Item> {
        let rule = self.rules.next()?;
        Some(Firing {
            strength: rule.strength(self.credit, self.debt_ratio),
            consequent: rule.consequent,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rules.size_hint()
    }
}

impl ExactSizeIterator for Firings<'_> {}
