use crate::core::rules;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// A check-digit rule: `(branch_code, account_number) -> valid`.
pub type RuleFn = fn(i64, &str) -> bool;

#[derive(Clone, Copy)]
pub struct BankRule {
    pub code: u32,
    pub name: &'static str,
    pub check: RuleFn,
}

impl BankRule {
    pub const fn new(code: u32, name: &'static str, check: RuleFn) -> Self {
        Self { code, name, check }
    }

    pub fn apply(&self, branch_code: i64, account_number: &str) -> bool {
        (self.check)(branch_code, account_number)
    }
}

impl fmt::Debug for BankRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankRule")
            .field("code", &self.code)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

const MASAV_RULES: &[BankRule] = &[
    BankRule::new(1, "Isracard", rules::isracard),
    BankRule::new(3, "Bank Esh", rules::esh),
    BankRule::new(4, "Bank Yahav", rules::yahav),
    BankRule::new(9, "Postal Bank", rules::postal_bank),
    BankRule::new(10, "Bank Leumi", rules::leumi),
    BankRule::new(11, "Discount", rules::discount_group),
    BankRule::new(12, "Bank Hapoalim", rules::hapoalim),
    BankRule::new(13, "Igud", rules::no_rule),
    BankRule::new(14, "Otsar HaHayal", rules::beinleumi_group),
    BankRule::new(15, "Ofek", rules::mod97_padded),
    BankRule::new(17, "Mercantile Discount", rules::discount_group),
    BankRule::new(18, "One Zero", rules::mod97_padded),
    BankRule::new(20, "Mizrahi-Tefahot", rules::mizrahi),
    BankRule::new(21, "Nima Shefa", rules::nima),
    BankRule::new(22, "Citibank", rules::citibank),
    BankRule::new(23, "HSBC", rules::hsbc),
    BankRule::new(31, "First International", rules::beinleumi_group),
    BankRule::new(35, "GROW", rules::grow),
    BankRule::new(39, "Bank of India", rules::no_rule),
    BankRule::new(46, "Massad", rules::beinleumi_group),
    BankRule::new(47, "Global Remit", rules::global_remit),
    BankRule::new(52, "Poalei Agudat Israel", rules::beinleumi_group),
    BankRule::new(54, "Bank of Jerusalem", rules::no_rule),
    BankRule::new(58, "Rewire", rules::rewire),
    BankRule::new(69, "GMT", rules::gmt),
    BankRule::new(79, "019 Sherutey Tashlum", rules::sherutey_tashlum_019),
];

/// Immutable bank code → rule table.
#[derive(Debug, Clone)]
pub struct BankRuleRegistry {
    rules: HashMap<u32, BankRule>,
}

impl BankRuleRegistry {
    pub fn from_rules(rules: impl IntoIterator<Item = BankRule>) -> Self {
        Self {
            rules: rules.into_iter().map(|rule| (rule.code, rule)).collect(),
        }
    }

    /// The rule set published by MASAV.
    pub fn masav() -> Self {
        Self::from_rules(MASAV_RULES.iter().copied())
    }

    pub fn get(&self, bank_code: u32) -> Option<&BankRule> {
        self.rules.get(&bank_code)
    }

    /// Looks up a code of any integer width; codes outside `u32` have no rule.
    pub fn lookup(&self, bank_code: i64) -> Option<&BankRule> {
        u32::try_from(bank_code).ok().and_then(|code| self.get(code))
    }

    pub fn contains(&self, bank_code: u32) -> bool {
        self.rules.contains_key(&bank_code)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules ordered by bank code.
    pub fn rules(&self) -> Vec<&BankRule> {
        let mut rules: Vec<&BankRule> = self.rules.values().collect();
        rules.sort_by_key(|rule| rule.code);
        rules
    }
}

static DEFAULT_REGISTRY: LazyLock<BankRuleRegistry> = LazyLock::new(BankRuleRegistry::masav);

/// Process-wide MASAV registry, built on first use.
pub fn default_registry() -> &'static BankRuleRegistry {
    &DEFAULT_REGISTRY
}
