//! Static lookup tables that map a skin profile or a weather reading to
//! catalog products. Everything here is a pure function of its inputs.

use crate::entities::products::ProductCategory;
use crate::entities::subscription_plans::PlanType;
use crate::entities::weather_data::WeatherCondition;
use crate::entities::{product_entity, skin_profile_entity};
use crate::models::{ProductResponse, Recommendations, WeatherReading};

const BUCKET_LIMIT: usize = 3;
const WEATHER_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineBucket {
    Morning,
    Evening,
    Weekly,
}

pub fn bucket_for(category: ProductCategory) -> RoutineBucket {
    use ProductCategory::*;
    match category {
        Cleanser | Toner | Moisturizer => RoutineBucket::Morning,
        Serum | NightCream | Oil => RoutineBucket::Evening,
        Mask | Scrub | Treatment => RoutineBucket::Weekly,
    }
}

pub fn recommended_plan(concern_count: usize) -> PlanType {
    match concern_count {
        0 => PlanType::Basic,
        1 | 2 => PlanType::Premium,
        _ => PlanType::Luxury,
    }
}

fn in_catalog_order(catalog: &[product_entity::Model]) -> Vec<&product_entity::Model> {
    let mut items: Vec<_> = catalog.iter().filter(|p| p.is_active).collect();
    items.sort_by_key(|p| p.id);
    items
}

pub fn recommend(
    profile: &skin_profile_entity::Model,
    catalog: &[product_entity::Model],
) -> Recommendations {
    let mut rec = Recommendations {
        morning: Vec::new(),
        evening: Vec::new(),
        weekly: Vec::new(),
        plan: recommended_plan(profile.skin_concerns.len()),
    };

    for product in in_catalog_order(catalog) {
        if !product.skin_types.contains_tag(&profile.skin_type) {
            continue;
        }
        let bucket = match bucket_for(product.category) {
            RoutineBucket::Morning => &mut rec.morning,
            RoutineBucket::Evening => &mut rec.evening,
            RoutineBucket::Weekly => &mut rec.weekly,
        };
        if bucket.len() < BUCKET_LIMIT {
            bucket.push(ProductResponse::from(product.clone()));
        }
    }

    rec
}

/// Categories to send for a weather condition name; unknown names get moisturizer.
pub fn weather_categories(condition: &str) -> &'static [ProductCategory] {
    use ProductCategory::*;
    match condition {
        "humid" => &[Toner, Mask, Moisturizer],
        "dry" => &[Moisturizer, Serum, Oil],
        "sunny" => &[Serum, Toner, Treatment],
        "rainy" => &[Cleanser, Toner, Moisturizer],
        "windy" => &[Moisturizer, Treatment, Oil],
        _ => &[Moisturizer],
    }
}

pub fn recommend_for_weather(
    condition: WeatherCondition,
    catalog: &[product_entity::Model],
) -> Vec<ProductResponse> {
    let categories = weather_categories(&condition.to_string());
    in_catalog_order(catalog)
        .into_iter()
        .filter(|p| categories.contains(&p.category))
        .take(WEATHER_LIMIT)
        .cloned()
        .map(ProductResponse::from)
        .collect()
}

pub fn adaptation_message(reading: &WeatherReading) -> String {
    match reading.condition {
        WeatherCondition::Humid => format!(
            "It's humid today ({}% humidity). We're sending lightweight, non-greasy formulations to keep your skin fresh!",
            reading.humidity
        ),
        WeatherCondition::Dry => "Dry weather detected. Your products today focus on deep hydration and barrier protection.".to_string(),
        WeatherCondition::Sunny => "Sunny day ahead! Your routine includes antioxidant-rich products and natural sun protection.".to_string(),
        WeatherCondition::Rainy => "Rainy weather calls for gentle, soothing products to maintain your skin's balance.".to_string(),
        WeatherCondition::Windy => "Windy conditions today. We've selected protective and nourishing products for your skin barrier.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TagList;
    use chrono::Utc;

    fn product(id: i64, category: ProductCategory, skin_types: &[&str]) -> product_entity::Model {
        product_entity::Model {
            id,
            name: format!("Product {id}"),
            category,
            ingredients: TagList::default(),
            skin_types: TagList::parse(skin_types).unwrap(),
            benefits: TagList::default(),
            usage_instructions: String::new(),
            shelf_life_hours: 24,
            price: 10000,
            is_active: true,
        }
    }

    fn profile(skin_type: &str, concerns: &[&str]) -> skin_profile_entity::Model {
        skin_profile_entity::Model {
            id: 1,
            user_id: 1,
            skin_type: skin_type.to_string(),
            skin_concerns: TagList::parse(concerns).unwrap(),
            allergies: TagList::default(),
            preferred_ingredients: TagList::default(),
            skin_tone: None,
            routine_frequency: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_buckets_respect_skin_type_and_limit() {
        let catalog = vec![
            product(1, ProductCategory::Cleanser, &["dry"]),
            product(2, ProductCategory::Toner, &["dry", "oily"]),
            product(3, ProductCategory::Moisturizer, &["dry"]),
            product(4, ProductCategory::Cleanser, &["dry"]),
            product(5, ProductCategory::NightCream, &["dry"]),
            product(6, ProductCategory::Mask, &["oily"]),
            product(7, ProductCategory::Scrub, &["Dry"]),
        ];

        let rec = recommend(&profile("dry", &[]), &catalog);

        let ids = |v: &[ProductResponse]| v.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(&rec.morning), vec![1, 2, 3]);
        assert_eq!(ids(&rec.evening), vec![5]);
        assert_eq!(ids(&rec.weekly), vec![7]);
        assert_eq!(rec.plan, PlanType::Basic);
    }

    #[test]
    fn test_plan_follows_concern_count() {
        assert_eq!(recommended_plan(0), PlanType::Basic);
        assert_eq!(recommended_plan(2), PlanType::Premium);
        assert_eq!(recommended_plan(3), PlanType::Luxury);
        let rec = recommend(&profile("oily", &["acne", "pores", "dullness"]), &[]);
        assert_eq!(rec.plan, PlanType::Luxury);
    }

    #[test]
    fn test_weather_selection() {
        let catalog: Vec<_> = (1..=8)
            .map(|id| product(id, ProductCategory::Moisturizer, &["all"]))
            .chain([product(9, ProductCategory::Scrub, &["all"])])
            .collect();

        let picked = recommend_for_weather(WeatherCondition::Dry, &catalog);
        assert_eq!(picked.len(), 5);
        assert!(picked.iter().all(|p| p.category == ProductCategory::Moisturizer));

        let sunny = recommend_for_weather(WeatherCondition::Sunny, &catalog);
        assert!(sunny.is_empty());
    }

    #[test]
    fn test_unknown_condition_falls_back_to_moisturizer() {
        assert_eq!(weather_categories("foggy"), &[ProductCategory::Moisturizer]);
    }

    #[test]
    fn test_humid_message_mentions_humidity() {
        let reading = WeatherReading {
            city: "Mumbai".into(),
            temperature: 30.0,
            humidity: 77,
            condition: WeatherCondition::Humid,
        };
        assert!(adaptation_message(&reading).contains("77%"));
    }
}
