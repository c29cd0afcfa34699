//! Emission factor table and the categorical keys that index it.
//!
//! All factors are approximate kg of CO2. They are fixed for the lifetime
//! of the process and never adjusted per region or year.

/// How the user gets around during the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Car,
    Bus,
    Bike,
    Train,
}

/// How much the user buys in a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoppingTier {
    Minimalist,
    Average,
    Consumerist,
}

/// How often the user eats meat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeatTier {
    Daily,
    Weekly,
    Rarely,
    Vegetarian,
}

/// Shared behaviour for the closed sets of form choices.
///
/// Every variant has a stable lowercase key (used in config files) and a
/// human-readable label (used in the form).
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// All variants, in form order.
    const ALL: &'static [Self];

    /// The lowercase key, e.g. "car".
    fn key(self) -> &'static str;

    /// The label shown in the form.
    fn label(self) -> &'static str;

    /// Parses a key, ignoring case and surrounding whitespace.
    ///
    /// Unknown keys yield `None`, which the calculator treats as a zero
    /// contribution.
    fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.key().eq_ignore_ascii_case(key))
    }

    /// Cycles forward, wrapping around. `None` starts at the first variant.
    fn next(current: Option<Self>) -> Self {
        match current.and_then(|c| Self::ALL.iter().position(|v| *v == c)) {
            Some(idx) => Self::ALL[(idx + 1) % Self::ALL.len()],
            None => Self::ALL[0],
        }
    }

    /// Cycles backward, wrapping around. `None` starts at the first variant.
    fn previous(current: Option<Self>) -> Self {
        match current.and_then(|c| Self::ALL.iter().position(|v| *v == c)) {
            Some(0) => Self::ALL[Self::ALL.len() - 1],
            Some(idx) => Self::ALL[idx - 1],
            None => Self::ALL[0],
        }
    }
}

impl Choice for TransportMode {
    const ALL: &'static [Self] = &[Self::Car, Self::Bus, Self::Bike, Self::Train];

    fn key(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bus => "bus",
            Self::Bike => "bike",
            Self::Train => "train",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Car => "Auto",
            Self::Bus => "Autobús",
            Self::Bike => "Bicicleta",
            Self::Train => "Tren",
        }
    }
}

impl Choice for ShoppingTier {
    const ALL: &'static [Self] = &[Self::Minimalist, Self::Average, Self::Consumerist];

    fn key(self) -> &'static str {
        match self {
            Self::Minimalist => "minimalist",
            Self::Average => "average",
            Self::Consumerist => "consumerist",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Minimalist => "Minimalista",
            Self::Average => "Promedio",
            Self::Consumerist => "Consumista",
        }
    }
}

impl Choice for MeatTier {
    const ALL: &'static [Self] = &[Self::Daily, Self::Weekly, Self::Rarely, Self::Vegetarian];

    fn key(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Rarely => "rarely",
            Self::Vegetarian => "vegetarian",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Daily => "Diario",
            Self::Weekly => "Semanal",
            Self::Rarely => "Rara vez",
            Self::Vegetarian => "Vegetariano",
        }
    }
}

/// Per-variant transport factors, kg CO2 per km.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportFactors {
    pub car: f64,
    pub bus: f64,
    pub bike: f64,
    pub train: f64,
}

/// Flat annual shopping footprints, kg CO2 per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoppingFactors {
    pub minimalist: f64,
    pub average: f64,
    pub consumerist: f64,
}

/// Flat annual diet footprints, kg CO2 per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeatFactors {
    pub daily: f64,
    pub weekly: f64,
    pub rarely: f64,
    pub vegetarian: f64,
}

/// The full emission factor table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorTable {
    pub transport: TransportFactors,
    /// Per kWh.
    pub electricity: f64,
    /// Per m3.
    pub gas: f64,
    pub shopping: ShoppingFactors,
    pub meat: MeatFactors,
    /// Per hour of use per day.
    pub hvac: f64,
}

/// The table every calculation uses.
pub const FACTORS: FactorTable = FactorTable {
    transport: TransportFactors {
        car: 0.192,
        bus: 0.105,
        bike: 0.0,
        train: 0.041,
    },
    electricity: 0.475,
    gas: 2.0,
    shopping: ShoppingFactors {
        minimalist: 500.0,
        average: 1500.0,
        consumerist: 3000.0,
    },
    meat: MeatFactors {
        daily: 2500.0,
        weekly: 1500.0,
        rarely: 800.0,
        vegetarian: 500.0,
    },
    hvac: 0.5,
};

impl FactorTable {
    /// Factor for a transport mode, 0 when no mode matched.
    pub fn transport(&self, mode: Option<TransportMode>) -> f64 {
        match mode {
            Some(TransportMode::Car) => self.transport.car,
            Some(TransportMode::Bus) => self.transport.bus,
            Some(TransportMode::Bike) => self.transport.bike,
            Some(TransportMode::Train) => self.transport.train,
            None => 0.0,
        }
    }

    /// Annual shopping value, 0 when no tier matched.
    pub fn shopping(&self, tier: Option<ShoppingTier>) -> f64 {
        match tier {
            Some(ShoppingTier::Minimalist) => self.shopping.minimalist,
            Some(ShoppingTier::Average) => self.shopping.average,
            Some(ShoppingTier::Consumerist) => self.shopping.consumerist,
            None => 0.0,
        }
    }

    /// Annual diet value, 0 when no tier matched.
    pub fn meat(&self, tier: Option<MeatTier>) -> f64 {
        match tier {
            Some(MeatTier::Daily) => self.meat.daily,
            Some(MeatTier::Weekly) => self.meat.weekly,
            Some(MeatTier::Rarely) => self.meat.rarely,
            Some(MeatTier::Vegetarian) => self.meat.vegetarian,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_for_every_variant() {
        for mode in TransportMode::ALL {
            assert_eq!(TransportMode::from_key(mode.key()), Some(*mode));
        }
        for tier in ShoppingTier::ALL {
            assert_eq!(ShoppingTier::from_key(tier.key()), Some(*tier));
        }
        for tier in MeatTier::ALL {
            assert_eq!(MeatTier::from_key(tier.key()), Some(*tier));
        }
    }

    #[test]
    fn test_from_key_ignores_case_and_whitespace() {
        assert_eq!(TransportMode::from_key("  CAR "), Some(TransportMode::Car));
        assert_eq!(MeatTier::from_key("Vegetarian"), Some(MeatTier::Vegetarian));
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert_eq!(TransportMode::from_key("spaceship"), None);
        assert_eq!(ShoppingTier::from_key(""), None);
        assert_eq!(MeatTier::from_key("sometimes"), None);
    }

    #[test]
    fn test_cycling_wraps_around() {
        assert_eq!(TransportMode::next(Some(TransportMode::Train)), TransportMode::Car);
        assert_eq!(TransportMode::previous(Some(TransportMode::Car)), TransportMode::Train);
        assert_eq!(ShoppingTier::next(Some(ShoppingTier::Minimalist)), ShoppingTier::Average);
        assert_eq!(MeatTier::previous(Some(MeatTier::Weekly)), MeatTier::Daily);
    }

    #[test]
    fn test_cycling_from_none_starts_at_first() {
        assert_eq!(TransportMode::next(None), TransportMode::Car);
        assert_eq!(MeatTier::previous(None), MeatTier::Daily);
    }

    #[test]
    fn test_unmatched_lookups_are_zero() {
        assert_eq!(FACTORS.transport(None), 0.0);
        assert_eq!(FACTORS.shopping(None), 0.0);
        assert_eq!(FACTORS.meat(None), 0.0);
    }

    #[test]
    fn test_bike_is_free() {
        assert_eq!(FACTORS.transport(Some(TransportMode::Bike)), 0.0);
    }

    #[test]
    fn test_all_factors_non_negative() {
        for mode in TransportMode::ALL {
            assert!(FACTORS.transport(Some(*mode)) >= 0.0);
        }
        for tier in ShoppingTier::ALL {
            assert!(FACTORS.shopping(Some(*tier)) >= 0.0);
        }
        for tier in MeatTier::ALL {
            assert!(FACTORS.meat(Some(*tier)) >= 0.0);
        }
        assert!(FACTORS.electricity >= 0.0);
        assert!(FACTORS.gas >= 0.0);
        assert!(FACTORS.hvac >= 0.0);
    }
}
