use crate::models::SustainabilityMetrics;

const MILESTONES: [u64; 5] = [5, 20, 50, 100, 200];

pub fn sustainability_metrics(total_orders: u64) -> SustainabilityMetrics {
    SustainabilityMetrics {
        plastic_saved_grams: total_orders * 15,
        chemical_preservatives_avoided: total_orders * 3,
        local_sourcing_percentage: 85,
        carbon_footprint_reduction: total_orders as f64 * 0.2,
        biodegradable_packaging_used: total_orders,
        water_conservation_liters: total_orders as f64 * 2.5,
        supporting_local_farmers: true,
    }
}

pub fn eco_badge_level(total_orders: u64) -> &'static str {
    match total_orders {
        100.. => "Eco Champion",
        50..=99 => "Green Guardian",
        20..=49 => "Nature Lover",
        5..=19 => "Eco Conscious",
        _ => "Getting Started",
    }
}

pub fn next_eco_milestone(total_orders: u64) -> String {
    match MILESTONES.iter().find(|&&m| total_orders < m) {
        Some(m) => format!(
            "{} more orders to reach next eco milestone!",
            m - total_orders
        ),
        None => "You've achieved all eco milestones! You're an environmental superhero!"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges() {
        assert_eq!(eco_badge_level(0), "Getting Started");
        assert_eq!(eco_badge_level(5), "Eco Conscious");
        assert_eq!(eco_badge_level(21), "Nature Lover");
        assert_eq!(eco_badge_level(50), "Green Guardian");
        assert_eq!(eco_badge_level(100), "Eco Champion");
    }

    #[test]
    fn test_next_milestone() {
        assert_eq!(
            next_eco_milestone(21),
            "29 more orders to reach next eco milestone!"
        );
        assert!(next_eco_milestone(200).starts_with("You've achieved"));
    }

    #[test]
    fn test_metrics_scale_with_orders() {
        let m = sustainability_metrics(21);
        assert_eq!(m.plastic_saved_grams, 315);
        assert_eq!(m.chemical_preservatives_avoided, 63);
        assert_eq!(m.biodegradable_packaging_used, 21);
        assert!((m.water_conservation_liters - 52.5).abs() < 1e-9);
        assert!((m.carbon_footprint_reduction - 4.2).abs() < 1e-9);
    }
}
