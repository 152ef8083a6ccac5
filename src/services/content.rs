//! Editorial content served as-is: category showcase, ingredient
//! transparency and community tips.

use rand::seq::SliceRandom;
use serde_json::{Value, json};

pub fn product_categories() -> Value {
    let categories = json!({
        "cleansers": {
            "name": "Cleansers",
            "description": "Fresh milk-based and fruit cleansers",
            "products": ["Raw Milk-Turmeric Cleanser", "Honey-Oat Gentle Cleanser", "Cucumber-Mint Face Wash"]
        },
        "masks": {
            "name": "Face Masks",
            "description": "Single-use fruit and herb masks",
            "products": ["Papaya-Honey Brightening Mask", "Aloe-Cucumber Soothing Mask", "Clay-Neem Purifying Mask"]
        },
        "toners": {
            "name": "Toners",
            "description": "Natural floral and herbal toners",
            "products": ["Rose Water Toner", "Mint-Cucumber Refresher", "Green Tea-Aloe Toner"]
        },
        "moisturizers": {
            "name": "Moisturizers",
            "description": "Hydrating gels and creams",
            "products": ["Aloe-Chia Hydrating Gel", "Coconut-Shea Day Cream", "Night Nourishing Oil Blend"]
        },
        "treatments": {
            "name": "Treatments",
            "description": "Targeted eye and lip care",
            "products": ["Cucumber Eye Pads", "Beetroot Lip Balm", "Coffee-Coconut Under Eye Cream"]
        },
        "scrubs": {
            "name": "Exfoliators",
            "description": "Gentle weekly scrubs",
            "products": ["Oatmeal-Yogurt Scrub", "Sugar-Honey Body Polish", "Rice-Milk Face Scrub"]
        }
    });
    let total = categories.as_object().map(|o| o.len()).unwrap_or(0);
    json!({ "categories": categories, "total_categories": total })
}

pub fn ingredient_details() -> Value {
    json!({
        "aloe_vera": {
            "benefits": ["Soothing", "Anti-inflammatory", "Hydrating"],
            "source": "Organic farms in Rajasthan",
            "extraction_method": "Cold-pressed",
            "purity": "99.5%"
        },
        "turmeric": {
            "benefits": ["Anti-bacterial", "Brightening", "Anti-aging"],
            "source": "Kerala organic farms",
            "extraction_method": "Traditional grinding",
            "purity": "98%"
        },
        "rose_water": {
            "benefits": ["Toning", "Hydrating", "Calming"],
            "source": "Kashmir rose gardens",
            "extraction_method": "Steam distillation",
            "purity": "100% natural"
        }
    })
}

pub fn sourcing_info() -> Value {
    json!({
        "local_farms": [
            {
                "name": "Green Valley Organic Farm",
                "location": "Pune, Maharashtra",
                "speciality": "Aloe Vera, Neem, Tulsi",
                "certification": "Organic India Certified"
            },
            {
                "name": "Himalayan Herb Gardens",
                "location": "Uttarakhand",
                "speciality": "Rose, Lavender, Chamomile",
                "certification": "NPOP Certified"
            }
        ],
        "organic_certification": true,
        "fair_trade": true,
        "seasonal_availability": {
            "summer": ["Cucumber", "Mint", "Aloe Vera", "Rose"],
            "monsoon": ["Neem", "Turmeric", "Honey", "Clay"],
            "winter": ["Almond Oil", "Shea Butter", "Oats", "Milk"],
            "spring": ["Green Tea", "Lemon", "Papaya", "Vitamin E"]
        }
    })
}

pub fn general_ingredient_info() -> Value {
    json!({
        "common_ingredients": {
            "Natural Ingredients": {
                "Turmeric": "Anti-inflammatory, brightening, antibacterial",
                "Aloe Vera": "Soothing, hydrating, healing",
                "Rose Water": "Toning, calming, pH balancing",
                "Honey": "Moisturizing, antibacterial, gentle exfoliation",
                "Oats": "Gentle cleansing, soothing, anti-inflammatory",
                "Cucumber": "Cooling, hydrating, reduces puffiness"
            }
        },
        "avoided_chemicals": {
            "Parabens": "Preservatives linked to hormone disruption",
            "Sulfates": "Harsh cleansing agents that strip natural oils",
            "Silicones": "Can clog pores and prevent skin breathing",
            "Artificial Fragrances": "Can cause allergic reactions and sensitivity",
            "Formaldehyde": "Carcinogenic preservative",
            "Phthalates": "Endocrine disruptors found in fragrances"
        },
        "sourcing_philosophy": "Fresh, Local, Organic, Sustainable"
    })
}

fn featured_ingredients() -> Vec<Value> {
    vec![
        json!({
            "name": "Turmeric",
            "benefits": "Anti-inflammatory, brightening, antibacterial",
            "origin": "Kerala organic farms",
            "fun_fact": "Used in Indian beauty rituals for over 4000 years",
            "best_for": "Acne-prone and dull skin"
        }),
        json!({
            "name": "Rose Water",
            "benefits": "Toning, hydrating, pH balancing",
            "origin": "Kashmir rose gardens",
            "fun_fact": "Takes 60 roses to make 1 ml of pure rose water",
            "best_for": "All skin types, especially sensitive"
        }),
    ]
}

fn diy_tips() -> Vec<Value> {
    vec![
        json!({
            "title": "Ice Cube Facial",
            "description": "Wrap ice in cloth and gently massage face for 2 minutes to reduce puffiness",
            "best_time": "Morning before applying products"
        }),
        json!({
            "title": "Face Yoga",
            "description": "5 minutes of facial exercises daily can improve circulation and firmness",
            "best_time": "Evening during your skincare routine"
        }),
    ]
}

pub fn community_tips() -> Value {
    let mut rng = rand::thread_rng();
    let featured = featured_ingredients()
        .choose(&mut rng)
        .cloned()
        .unwrap_or(Value::Null);
    let diy = diy_tips().choose(&mut rng).cloned().unwrap_or(Value::Null);

    json!({
        "community_content": {
            "daily_tips": [
                {
                    "tip": "Apply products on slightly damp skin for better absorption",
                    "category": "application",
                    "user": "SkincareLover23",
                    "likes": 45
                },
                {
                    "tip": "Store your fresh products in the refrigerator for extra cooling effect",
                    "category": "storage",
                    "user": "FreshSkinFan",
                    "likes": 38
                },
                {
                    "tip": "Use cucumber eye patches while doing your morning yoga",
                    "category": "lifestyle",
                    "user": "WellnessWarrior",
                    "likes": 52
                }
            ],
            "success_stories": [
                {
                    "title": "My 30-day Freskin transformation",
                    "preview": "From dull to glowing skin with consistent fresh products...",
                    "user": "GlowGetter",
                    "duration": "30 days",
                    "before_after": true
                },
                {
                    "title": "How I finally found products that work for sensitive skin",
                    "preview": "After years of reactions, Freskin's gentle formulas...",
                    "user": "SensitiveSkinSurvivor",
                    "duration": "45 days",
                    "before_after": false
                }
            ],
            "seasonal_advice": {
                "current_season": "summer",
                "tips": [
                    "Switch to lighter gels and hydrating mists",
                    "Use clay masks twice a week to control oil",
                    "Don't skip moisturizer even if you have oily skin"
                ]
            }
        },
        "featured_ingredient": featured,
        "diy_tip": diy
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_count_matches_table() {
        let v = product_categories();
        assert_eq!(v["total_categories"], 6);
        assert!(v["categories"]["masks"]["products"].is_array());
    }

    #[test]
    fn test_community_tips_pick_featured_content() {
        let v = community_tips();
        assert!(v["featured_ingredient"]["name"].is_string());
        assert!(v["diy_tip"]["title"].is_string());
        assert_eq!(v["community_content"]["daily_tips"].as_array().unwrap().len(), 3);
    }
}
