use sea_orm_migration::prelude::*;
use serde_json::json;

use crate::m20250901_000001_create_core_tables::{Products, SubscriptionPlans};
use crate::m20250901_000002_create_freshness_tables::DeliveryZones;

struct SeedProduct {
    name: &'static str,
    category: &'static str,
    ingredients: &'static [&'static str],
    skin_types: &'static [&'static str],
    benefits: &'static [&'static str],
    usage: &'static str,
    shelf_life_hours: i32,
    price: i64,
}

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Papaya-Honey Brightening Mask",
        category: "mask",
        ingredients: &["Fresh papaya", "Raw honey", "Turmeric powder", "Rose water"],
        skin_types: &["all", "dull", "pigmented"],
        benefits: &["Brightening", "Exfoliation", "Natural glow", "Anti-aging"],
        usage: "Apply thick layer, leave for 15 minutes, rinse with lukewarm water",
        shelf_life_hours: 12,
        price: 29900,
    },
    SeedProduct {
        name: "Cucumber-Aloe Cooling Mask",
        category: "mask",
        ingredients: &["Fresh cucumber", "Aloe vera gel", "Mint extract", "Glycerin"],
        skin_types: &["sensitive", "oily", "irritated"],
        benefits: &["Soothing", "Cooling", "Anti-inflammatory", "Hydrating"],
        usage: "Apply evenly, relax for 20 minutes, remove gently",
        shelf_life_hours: 24,
        price: 24900,
    },
    SeedProduct {
        name: "Raw Milk-Turmeric Cleanser",
        category: "cleanser",
        ingredients: &["Raw milk", "Turmeric", "Chickpea flour", "Rose water"],
        skin_types: &["dry", "sensitive", "mature"],
        benefits: &["Gentle cleansing", "Moisturizing", "Brightening", "Anti-bacterial"],
        usage: "Massage gently for 30 seconds, rinse with cool water",
        shelf_life_hours: 8,
        price: 19900,
    },
    SeedProduct {
        name: "Honey-Oat Gentle Cleanser",
        category: "cleanser",
        ingredients: &["Raw honey", "Ground oats", "Coconut milk", "Lavender oil"],
        skin_types: &["all", "sensitive", "acne-prone"],
        benefits: &["Deep cleansing", "Exfoliation", "Antibacterial", "Calming"],
        usage: "Work into lather with damp hands, massage and rinse",
        shelf_life_hours: 12,
        price: 17900,
    },
    SeedProduct {
        name: "Rose Water-Mint Toner",
        category: "toner",
        ingredients: &["Pure rose water", "Fresh mint", "Witch hazel", "Glycerin"],
        skin_types: &["all", "oily", "combination"],
        benefits: &["Toning", "Refreshing", "pH balancing", "Pore minimizing"],
        usage: "Apply with cotton pad or pat gently with hands",
        shelf_life_hours: 48,
        price: 14900,
    },
    SeedProduct {
        name: "Green Tea-Cucumber Toner",
        category: "toner",
        ingredients: &["Fresh green tea", "Cucumber juice", "Aloe vera", "Niacinamide"],
        skin_types: &["oily", "acne-prone", "dull"],
        benefits: &["Antioxidant", "Oil control", "Brightening", "Anti-aging"],
        usage: "Use twice daily after cleansing",
        shelf_life_hours: 36,
        price: 16900,
    },
    SeedProduct {
        name: "Aloe-Chia Hydrating Gel",
        category: "moisturizer",
        ingredients: &["Aloe vera gel", "Chia seed extract", "Hyaluronic acid", "Vitamin E"],
        skin_types: &["oily", "combination", "sensitive"],
        benefits: &["Deep hydration", "Light texture", "Non-greasy", "Cooling"],
        usage: "Apply thin layer, perfect for humid weather",
        shelf_life_hours: 24,
        price: 22900,
    },
    SeedProduct {
        name: "Coconut-Shea Night Cream",
        category: "night_cream",
        ingredients: &["Virgin coconut oil", "Shea butter", "Jojoba oil", "Vitamin C"],
        skin_types: &["dry", "mature", "normal"],
        benefits: &["Deep nourishment", "Anti-aging", "Repair", "Softening"],
        usage: "Apply generously before bed, massage gently",
        shelf_life_hours: 16,
        price: 27900,
    },
    SeedProduct {
        name: "Cucumber Eye Patches",
        category: "treatment",
        ingredients: &["Fresh cucumber", "Potato starch", "Collagen", "Caffeine"],
        skin_types: &["all", "tired", "puffy"],
        benefits: &["De-puffing", "Dark circle reduction", "Hydrating", "Refreshing"],
        usage: "Place under eyes for 15 minutes, use 3x per week",
        shelf_life_hours: 6,
        price: 19900,
    },
    SeedProduct {
        name: "Beetroot Lip Balm",
        category: "treatment",
        ingredients: &["Fresh beetroot", "Coconut oil", "Beeswax", "Vitamin E"],
        skin_types: &["all", "dry", "chapped"],
        benefits: &["Natural tint", "Moisturizing", "Healing", "Plumping"],
        usage: "Apply as needed throughout the day",
        shelf_life_hours: 72,
        price: 12900,
    },
    SeedProduct {
        name: "Oatmeal-Yogurt Gentle Scrub",
        category: "scrub",
        ingredients: &["Ground oats", "Fresh yogurt", "Honey", "Lemon juice"],
        skin_types: &["all", "sensitive", "dry"],
        benefits: &["Gentle exfoliation", "Moisturizing", "Brightening", "Smoothing"],
        usage: "Use 2x per week, massage gently in circular motions",
        shelf_life_hours: 8,
        price: 18900,
    },
    SeedProduct {
        name: "Coffee-Sugar Body Scrub",
        category: "scrub",
        ingredients: &["Ground coffee", "Brown sugar", "Coconut oil", "Vanilla extract"],
        skin_types: &["all", "rough", "cellulite"],
        benefits: &["Exfoliation", "Circulation boost", "Firming", "Moisturizing"],
        usage: "Use on damp skin in shower, scrub and rinse",
        shelf_life_hours: 12,
        price: 21900,
    },
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Plans: price in paise, 30-day cycle
        let plans = Query::insert()
            .into_table(SubscriptionPlans::Table)
            .columns([
                SubscriptionPlans::PlanType,
                SubscriptionPlans::Price,
                SubscriptionPlans::DurationDays,
                SubscriptionPlans::Features,
                SubscriptionPlans::IsActive,
            ])
            .values_panic([
                "basic".into(),
                99900i64.into(),
                30.into(),
                json!(["Daily cleanser", "Weekly mask", "Basic toner"]).into(),
                true.into(),
            ])
            .values_panic([
                "premium".into(),
                199900i64.into(),
                30.into(),
                json!([
                    "Full morning routine",
                    "Evening routine",
                    "Weekly treatments",
                    "Weather adaptation"
                ])
                .into(),
                true.into(),
            ])
            .values_panic([
                "luxury".into(),
                299900i64.into(),
                30.into(),
                json!([
                    "Complete personalized routine",
                    "Twice daily delivery",
                    "Premium ingredients",
                    "Personal skin consultant",
                    "Express delivery"
                ])
                .into(),
                true.into(),
            ])
            .to_owned();
        manager.exec_stmt(plans).await?;

        let mut products = Query::insert()
            .into_table(Products::Table)
            .columns([
                Products::Name,
                Products::Category,
                Products::Ingredients,
                Products::SkinTypes,
                Products::Benefits,
                Products::UsageInstructions,
                Products::ShelfLifeHours,
                Products::Price,
                Products::IsActive,
            ])
            .to_owned();
        for p in PRODUCTS {
            products.values_panic([
                p.name.into(),
                p.category.into(),
                json!(p.ingredients).into(),
                json!(p.skin_types).into(),
                json!(p.benefits).into(),
                p.usage.into(),
                p.shelf_life_hours.into(),
                p.price.into(),
                true.into(),
            ]);
        }
        manager.exec_stmt(products).await?;

        let zones = Query::insert()
            .into_table(DeliveryZones::Table)
            .columns([
                DeliveryZones::City,
                DeliveryZones::ZoneName,
                DeliveryZones::Pincodes,
                DeliveryZones::DeliverySlots,
                DeliveryZones::PreparationTimeHours,
                DeliveryZones::IsActive,
            ])
            .values_panic([
                "Mumbai".into(),
                "South Mumbai".into(),
                json!(["400001", "400002", "400003", "400004", "400005", "400020", "400021"])
                    .into(),
                json!({"morning": "6-9", "evening": "5-8", "night": "8-10"}).into(),
                2.into(),
                true.into(),
            ])
            .values_panic([
                "Mumbai".into(),
                "Bandra-Andheri".into(),
                json!(["400050", "400051", "400052", "400053", "400058", "400059", "400061"])
                    .into(),
                json!({"morning": "7-10", "evening": "6-9"}).into(),
                3.into(),
                true.into(),
            ])
            .values_panic([
                "Delhi".into(),
                "Central Delhi".into(),
                json!(["110001", "110002", "110003", "110011", "110012", "110055"]).into(),
                json!({"morning": "6-9", "evening": "5-8"}).into(),
                2.into(),
                true.into(),
            ])
            .values_panic([
                "Bangalore".into(),
                "Koramangala-Indiranagar".into(),
                json!(["560034", "560038", "560047", "560095", "560008", "560012"]).into(),
                json!({"morning": "7-10", "evening": "6-9"}).into(),
                2.into(),
                true.into(),
            ])
            .to_owned();
        manager.exec_stmt(zones).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(DeliveryZones::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Products::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(SubscriptionPlans::Table).to_owned())
            .await?;
        Ok(())
    }
}
