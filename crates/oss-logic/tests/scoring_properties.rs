use oss_logic::live_data::{Plot, PlotStatus, UtilityUptime};
use oss_logic::requirement::{InvestorRequirement, NeedLevel};
use oss_logic::scoring::{plot_points, port_points, score_zone, LandTolerance, PLOTS_MAX};
use oss_logic::zones::{default_catalog, GasAvailability, PortProximity, SupplyRating};
use proptest::prelude::*;

fn need() -> impl Strategy<Value = NeedLevel> {
    prop_oneof![
        Just(NeedLevel::Low),
        Just(NeedLevel::Medium),
        Just(NeedLevel::High),
    ]
}

fn requirement() -> impl Strategy<Value = InvestorRequirement> {
    (
        prop_oneof![
            Just(String::new()),
            Just("textiles".to_string()),
            Just("Steel".to_string()),
            "[a-zA-Z ]{0,12}",
        ],
        need(),
        any::<bool>(),
        need(),
        prop_oneof![
            Just(String::new()),
            Just("large".to_string()),
            (0.1f64..200.0).prop_map(|a| format!("{a:.1} acres")),
        ],
        any::<bool>(),
    )
        .prop_map(
            |(sector, power_need, port_access, water_requirements, land_size, proximity_to_city)| {
                InvestorRequirement {
                    sector,
                    power_need,
                    port_access,
                    water_requirements,
                    land_size,
                    proximity_to_city,
                }
            },
        )
}

fn gas_availability() -> impl Strategy<Value = GasAvailability> {
    prop_oneof![
        Just(GasAvailability::Available),
        Just(GasAvailability::Planned),
        Just(GasAvailability::None),
    ]
}

fn supply_rating() -> impl Strategy<Value = SupplyRating> {
    prop_oneof![
        Just(SupplyRating::Excellent),
        Just(SupplyRating::Good),
        Just(SupplyRating::Adequate),
    ]
}

fn plots() -> impl Strategy<Value = Vec<Plot>> {
    prop::collection::vec((any::<bool>(), 0.5f64..50.0), 0..20).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (free, size))| Plot {
                id: format!("P{i}"),
                status: if free {
                    PlotStatus::Available
                } else {
                    PlotStatus::Reserved
                },
                size_acres: size,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn every_criterion_within_its_max(
        req in requirement(),
        zone_idx in 0usize..10,
        power in 0.0f64..100.0,
        gas in 0.0f64..100.0,
        water in 0.0f64..100.0,
        plots in plots(),
    ) {
        let catalog = default_catalog();
        let zone = &catalog[zone_idx % catalog.len()];
        let uptime = UtilityUptime::new(power, gas, water);
        let b = score_zone(&req, zone, &uptime, &plots, LandTolerance::default());
        for (name, points, max) in b.criteria() {
            prop_assert!(points.is_finite(), "{} not finite", name);
            prop_assert!(points >= 0.0 && points <= max, "{}: {} > {}", name, points, max);
        }
        prop_assert!(b.total() <= 130.0);
    }

    #[test]
    fn score_is_monotone_in_power_uptime(
        req in requirement(),
        zone_idx in 0usize..10,
        low in 0.0f64..100.0,
        bump in 0.0f64..10.0,
        gas in 0.0f64..100.0,
        water in 0.0f64..100.0,
        plots in plots(),
    ) {
        let catalog = default_catalog();
        let zone = &catalog[zone_idx % catalog.len()];
        let tol = LandTolerance::default();
        let before = score_zone(&req, zone, &UtilityUptime::new(low, gas, water), &plots, tol);
        let after = score_zone(&req, zone, &UtilityUptime::new(low + bump, gas, water), &plots, tol);
        prop_assert!(after.total() >= before.total());
    }

    #[test]
    fn scoring_is_pure(
        req in requirement(),
        zone_idx in 0usize..10,
        power in 0.0f64..100.0,
        plots in plots(),
    ) {
        let catalog = default_catalog();
        let zone = &catalog[zone_idx % catalog.len()];
        let uptime = UtilityUptime::new(power, power, power);
        let a = score_zone(&req, zone, &uptime, &plots, LandTolerance::default());
        let b = score_zone(&req, zone, &uptime, &plots, LandTolerance::default());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn plot_points_bounds(plots in plots()) {
        let p = plot_points(&plots);
        let free = plots.iter().filter(|p| p.is_available()).count();
        if plots.is_empty() || free == 0 {
            prop_assert_eq!(p, 0.0);
        } else if free == plots.len() {
            prop_assert_eq!(p, PLOTS_MAX);
        } else {
            prop_assert!(p > 0.0 && p < PLOTS_MAX);
        }
    }

    /// Below every uptime threshold, with no sector, land or plot match, a
    /// zone earns nothing beyond what port access alone pays.
    #[test]
    fn zone_matching_nothing_earns_only_port_credit(
        zone_idx in 0usize..10,
        power_need in need(),
        water_need in need(),
        gas in gas_availability(),
        power_rating in supply_rating(),
        water_rating in supply_rating(),
        port_access in any::<bool>(),
        proximity_to_city in any::<bool>(),
        power in 0.0f64..90.0,
        gas_uptime in 0.0f64..90.0,
        water in 0.0f64..90.0,
    ) {
        let catalog = default_catalog();
        let mut zone = catalog[zone_idx % catalog.len()].clone();
        zone.best_for = vec!["Steel".into()];
        zone.infrastructure.gas = gas;
        zone.infrastructure.power = power_rating;
        zone.infrastructure.water = water_rating;
        zone.infrastructure.port = PortProximity::Distant;
        let req = InvestorRequirement {
            sector: "Space Mining".into(),
            power_need,
            port_access,
            water_requirements: water_need,
            land_size: String::new(),
            proximity_to_city,
        };
        let uptime = UtilityUptime::new(power, gas_uptime, water);
        let b = score_zone(&req, &zone, &uptime, &[], LandTolerance::default());
        prop_assert_eq!(b.total(), port_points(req.port_access, PortProximity::Distant));
    }
}
