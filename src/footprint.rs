//! Annual footprint computation.

use crate::factors::{FactorTable, FACTORS};
use crate::input::UserInput;

const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// The categories a footprint is broken down into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Transport,
    Energy,
    Shopping,
    Meat,
    Hvac,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Transport,
        Category::Energy,
        Category::Shopping,
        Category::Meat,
        Category::Hvac,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Transport => "Transporte",
            Category::Energy => "Energía",
            Category::Shopping => "Compras",
            Category::Meat => "Alimentación",
            Category::Hvac => "Climatización",
        }
    }
}

/// Result of one calculation, in kg CO2 per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootprintResult {
    pub total: f64,
    pub transport: f64,
    pub energy: f64,
    pub shopping: f64,
    pub meat: f64,
    pub hvac: f64,
}

impl FootprintResult {
    /// Contribution of a single category.
    pub fn contribution(&self, category: Category) -> f64 {
        match category {
            Category::Transport => self.transport,
            Category::Energy => self.energy,
            Category::Shopping => self.shopping,
            Category::Meat => self.meat,
            Category::Hvac => self.hvac,
        }
    }

    /// Category contributions in display order.
    pub fn breakdown(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.contribution(category)))
    }
}

/// Computes the annual footprint with the standard factor table.
pub fn compute_footprint(input: &UserInput) -> FootprintResult {
    compute_with(&FACTORS, input)
}

/// Computes the annual footprint against an explicit factor table.
pub fn compute_with(factors: &FactorTable, input: &UserInput) -> FootprintResult {
    let transport = annual(
        input.weekly_distance,
        WEEKS_PER_YEAR,
        factors.transport(input.transport),
    );

    let energy = annual(input.monthly_electricity, MONTHS_PER_YEAR, factors.electricity)
        + annual(input.monthly_gas, MONTHS_PER_YEAR, factors.gas);

    let shopping = factors.shopping(input.shopping);
    let meat = factors.meat(input.meat);

    let hvac = annual(input.daily_hvac_hours, DAYS_PER_YEAR, factors.hvac);

    FootprintResult {
        total: transport + energy + shopping + meat + hvac,
        transport,
        energy,
        shopping,
        meat,
        hvac,
    }
}

/// Yearly emissions for a per-period quantity.
///
/// A zero factor contributes nothing even when `quantity * periods`
/// overflows to infinity, so the product never turns into NaN.
fn annual(quantity: f64, periods: f64, factor: f64) -> f64 {
    if factor == 0.0 {
        return 0.0;
    }
    quantity * periods * factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::{Choice, MeatTier, ShoppingTier, TransportMode};
    use crate::input::RawInput;

    fn sample_input() -> UserInput {
        UserInput {
            transport: Some(TransportMode::Car),
            weekly_distance: 100.0,
            monthly_electricity: 300.0,
            monthly_gas: 20.0,
            shopping: Some(ShoppingTier::Average),
            meat: Some(MeatTier::Weekly),
            daily_hvac_hours: 2.0,
        }
    }

    #[test]
    fn test_worked_example() {
        let result = compute_footprint(&sample_input());

        assert!((result.transport - 998.4).abs() < 1e-9);
        assert!((result.energy - 2190.0).abs() < 1e-9);
        assert_eq!(result.shopping, 1500.0);
        assert_eq!(result.meat, 1500.0);
        assert_eq!(result.hvac, 365.0);
        assert!((result.total - 6553.4).abs() < 1e-9);
    }

    #[test]
    fn test_total_is_exact_sum_of_formulas() {
        let input = UserInput {
            transport: Some(TransportMode::Train),
            weekly_distance: 37.3,
            monthly_electricity: 123.4,
            monthly_gas: 7.7,
            shopping: Some(ShoppingTier::Consumerist),
            meat: Some(MeatTier::Rarely),
            daily_hvac_hours: 5.5,
        };

        let result = compute_footprint(&input);

        let transport = 37.3 * 52.0 * 0.041;
        let energy = (123.4 * 12.0 * 0.475) + (7.7 * 12.0 * 2.0);
        let hvac = 5.5 * 365.0 * 0.5;
        assert_eq!(result.transport, transport);
        assert_eq!(result.energy, energy);
        assert_eq!(result.hvac, hvac);
        assert_eq!(result.total, transport + energy + 3000.0 + 800.0 + hvac);
        assert_eq!(
            result.total,
            result.transport + result.energy + result.shopping + result.meat + result.hvac
        );
    }

    #[test]
    fn test_zero_input_is_zero() {
        let input = UserInput {
            transport: Some(TransportMode::Bike),
            ..UserInput::default()
        };

        assert_eq!(compute_footprint(&input).total, 0.0);
        assert_eq!(compute_footprint(&UserInput::default()).total, 0.0);
    }

    #[test]
    fn test_unknown_transport_matches_zero_contribution() {
        let mut raw = RawInput {
            transport: "spaceship".to_string(),
            weekly_distance: "500".to_string(),
            monthly_electricity: "100".to_string(),
            shopping: "average".to_string(),
            ..RawInput::default()
        };
        let unknown = compute_footprint(&UserInput::from_raw(&raw));

        raw.transport = "bike".to_string();
        let bike = compute_footprint(&UserInput::from_raw(&raw));

        assert_eq!(unknown.transport, 0.0);
        assert_eq!(unknown, bike);
    }

    #[test]
    fn test_unknown_tiers_contribute_nothing() {
        let input = UserInput {
            shopping: None,
            meat: None,
            ..sample_input()
        };

        let result = compute_footprint(&input);

        assert_eq!(result.shopping, 0.0);
        assert_eq!(result.meat, 0.0);
    }

    #[test]
    fn test_monotonic_in_each_quantity() {
        let base = sample_input();
        let before = compute_footprint(&base).total;

        for step in [0.0, 0.1, 1.0, 250.0] {
            let bumped = [
                UserInput { weekly_distance: base.weekly_distance + step, ..base },
                UserInput { monthly_electricity: base.monthly_electricity + step, ..base },
                UserInput { monthly_gas: base.monthly_gas + step, ..base },
                UserInput { daily_hvac_hours: base.daily_hvac_hours + step, ..base },
            ];
            for input in bumped {
                assert!(compute_footprint(&input).total >= before);
            }
        }
    }

    #[test]
    fn test_non_negative_for_all_choices() {
        for mode in TransportMode::ALL {
            for shopping in ShoppingTier::ALL {
                for meat in MeatTier::ALL {
                    let input = UserInput {
                        transport: Some(*mode),
                        shopping: Some(*shopping),
                        meat: Some(*meat),
                        ..sample_input()
                    };
                    assert!(compute_footprint(&input).total >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let input = sample_input();
        assert_eq!(compute_footprint(&input), compute_footprint(&input));
    }

    #[test]
    fn test_breakdown_order_and_values() {
        let result = compute_footprint(&sample_input());
        let categories: Vec<Category> = result.breakdown().map(|(c, _)| c).collect();
        assert_eq!(categories, Category::ALL.to_vec());

        let sum: f64 = result.breakdown().map(|(_, v)| v).sum();
        assert!((sum - result.total).abs() < 1e-9);
    }

    #[test]
    fn test_custom_table() {
        let mut table = FACTORS;
        table.hvac = 1.0;
        let input = UserInput {
            daily_hvac_hours: 2.0,
            ..UserInput::default()
        };
        assert_eq!(compute_with(&table, &input).hvac, 730.0);
    }

    #[test]
    fn test_huge_distance_with_zero_factor_stays_zero() {
        let mut raw = RawInput {
            transport: "bike".to_string(),
            weekly_distance: "1e308".to_string(),
            ..RawInput::default()
        };
        let bike = compute_footprint(&UserInput::from_raw(&raw));

        raw.transport = "spaceship".to_string();
        let unknown = compute_footprint(&UserInput::from_raw(&raw));

        for result in [bike, unknown] {
            assert_eq!(result.transport, 0.0);
            assert_eq!(result.total, 0.0);
        }
    }

    #[test]
    fn test_huge_quantities_never_produce_nan() {
        let input = UserInput {
            weekly_distance: 1e308,
            monthly_electricity: 1e308,
            monthly_gas: 1e308,
            daily_hvac_hours: 1e308,
            ..sample_input()
        };
        let result = compute_footprint(&input);

        assert!(!result.total.is_nan());
        assert!(result.total >= 0.0);
    }
}
