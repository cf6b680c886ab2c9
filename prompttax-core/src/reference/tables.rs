//! Built-in coefficient tables
//!
//! Rows are stored as static arrays and materialized once into owned
//! structs on first access.

use std::sync::OnceLock;

use super::{CarbonCredit, CategoryCoefficient, RegionCoefficient};
use crate::traits::ReferenceData;
use crate::types::Category;

/// (category, label, description, watts per user-minute)
const CATEGORY_ROWS: [(Category, &str, &str, f64); 5] = [
    (
        Category::Chatbots,
        "AI Chatbots",
        "ChatGPT, Claude, Gemini, and similar conversational AI tools",
        0.05, // ~3W per query, ~1 query/min
    ),
    (
        Category::AiSearch,
        "AI Search",
        "AI powered search engines like Perplexity, Google AI Overview, Bing Copilot",
        0.04,
    ),
    (
        Category::AiImageGen,
        "Image Generation",
        "DALL·E, Midjourney, Stable Diffusion, and other image generators",
        0.12, // GPU heavy, infrequent generations
    ),
    (
        Category::AiVideoGen,
        "Video Generation",
        "Sora, Runway, Pika, and other AI video tools",
        0.25,
    ),
    (
        Category::AiWriting,
        "AI Writing Assistants",
        "Grammarly AI, Jasper, Notion AI, and other writing tools",
        0.03,
    ),
];

/// (code, name, country, [grid gCO₂/kWh, water L/kWh, PM2.5, SO₂, NOx mg/kWh, PUE])
const REGION_ROWS: [(&str, &str, &str, [f64; 6]); 13] = [
    ("US", "United States (Average)", "United States", [390.0, 2.2, 18.0, 420.0, 320.0, 1.2]),
    ("US-CA", "California", "United States", [210.0, 1.8, 10.0, 180.0, 200.0, 1.15]),
    ("US-TX", "Texas", "United States", [420.0, 2.5, 22.0, 500.0, 380.0, 1.25]),
    ("GB", "United Kingdom", "United Kingdom", [230.0, 1.5, 8.0, 200.0, 220.0, 1.18]),
    ("DE", "Germany", "Germany", [350.0, 1.8, 14.0, 300.0, 280.0, 1.2]),
    ("FR", "France", "France", [55.0, 3.0, 3.0, 80.0, 90.0, 1.15]),
    ("IN", "India", "India", [710.0, 3.5, 45.0, 900.0, 650.0, 1.35]),
    ("CN", "China", "China", [580.0, 2.8, 38.0, 750.0, 520.0, 1.3]),
    ("JP", "Japan", "Japan", [470.0, 2.0, 15.0, 350.0, 300.0, 1.2]),
    ("BR", "Brazil", "Brazil", [75.0, 4.0, 5.0, 100.0, 120.0, 1.25]),
    ("AU", "Australia", "Australia", [620.0, 2.6, 28.0, 600.0, 450.0, 1.22]),
    ("SE", "Sweden", "Sweden", [12.0, 1.2, 1.0, 15.0, 25.0, 1.1]),
    ("NO", "Norway", "Norway", [8.0, 1.0, 0.5, 10.0, 18.0, 1.08]),
];

/// (id, project, type, standard, vintage, region, $/t, available t, description)
const CREDIT_ROWS: [(&str, &str, &str, &str, u16, &str, f64, f64, &str); 6] = [
    (
        "cc-001",
        "Amazon Rainforest Protection Initiative",
        "REDD+ Forest Conservation",
        "Verra VCS",
        2024,
        "Brazil",
        14.50,
        50_000.0,
        "Protects over 200,000 hectares of native Amazon rainforest from deforestation, preserving biodiversity and supporting indigenous communities.",
    ),
    (
        "cc-002",
        "Gujarat Solar Farm Expansion",
        "Renewable Energy",
        "Gold Standard",
        2024,
        "India",
        8.75,
        120_000.0,
        "Expanding solar photovoltaic capacity in Gujarat state, displacing coal fired electricity generation and providing clean energy to rural communities.",
    ),
    (
        "cc-003",
        "Kenyan Cookstove Distribution Program",
        "Clean Cooking",
        "Gold Standard",
        2023,
        "Kenya",
        12.00,
        30_000.0,
        "Distributes fuel efficient cookstoves to rural households, reducing wood fuel consumption by up to 60% and improving indoor air quality.",
    ),
    (
        "cc-004",
        "Scottish Peatland Restoration",
        "Wetland Restoration",
        "Peatland Code",
        2024,
        "United Kingdom",
        22.00,
        8_000.0,
        "Restoring degraded peatlands in the Scottish Highlands, re wetting and revegetating areas to restore natural carbon sequestration capacity.",
    ),
    (
        "cc-005",
        "Texas Wind Power Collective",
        "Renewable Energy",
        "American Carbon Registry",
        2024,
        "United States",
        10.25,
        75_000.0,
        "A collective of wind farms across West Texas generating clean electricity and displacing fossil fuel generation from the ERCOT grid.",
    ),
    (
        "cc-006",
        "Indonesian Mangrove Reforestation",
        "Blue Carbon",
        "Verra VCS",
        2023,
        "Indonesia",
        18.50,
        15_000.0,
        "Planting and restoring mangrove forests along the coast of Sumatra, providing coastal protection and sequestering carbon at rates 3 to 5 times higher than terrestrial forests.",
    ),
];

/// Tables compiled into the crate
#[derive(Debug, Clone)]
pub struct BuiltinReference {
    categories: Vec<CategoryCoefficient>,
    regions: Vec<RegionCoefficient>,
    credits: Vec<CarbonCredit>,
}

impl BuiltinReference {
    fn load() -> Self {
        let categories = CATEGORY_ROWS
            .iter()
            .map(|&(category, label, description, watts)| CategoryCoefficient {
                category,
                label: label.to_string(),
                description: description.to_string(),
                avg_watts_per_minute: watts,
            })
            .collect();

        let regions = REGION_ROWS
            .iter()
            .map(|&(code, name, country, [grid, water, pm25, so2, nox, pue])| RegionCoefficient {
                region_code: code.to_string(),
                region_name: name.to_string(),
                country: country.to_string(),
                grid_intensity_g_co2_per_kwh: grid,
                water_liters_per_kwh: water,
                pm25_factor_mg_per_kwh: pm25,
                so2_factor_mg_per_kwh: so2,
                nox_factor_mg_per_kwh: nox,
                pue_multiplier: pue,
            })
            .collect();

        let credits = CREDIT_ROWS
            .iter()
            .map(
                |&(id, project, kind, standard, vintage, region, price, available, description)| {
                    CarbonCredit {
                        id: id.to_string(),
                        project_name: project.to_string(),
                        project_type: kind.to_string(),
                        verification_standard: standard.to_string(),
                        vintage,
                        region: region.to_string(),
                        price_per_ton_usd: price,
                        description: description.to_string(),
                        available_tons: available,
                    }
                },
            )
            .collect();

        Self {
            categories,
            regions,
            credits,
        }
    }

    /// Category rows in canonical order
    pub fn categories(&self) -> &[CategoryCoefficient] {
        &self.categories
    }
}

impl ReferenceData for BuiltinReference {
    fn category(&self, category: Category) -> Option<&CategoryCoefficient> {
        self.categories.iter().find(|c| c.category == category)
    }

    fn regions(&self) -> &[RegionCoefficient] {
        &self.regions
    }

    fn credits(&self) -> &[CarbonCredit] {
        &self.credits
    }
}

/// Shared built-in tables, materialized on first use
pub fn builtin() -> &'static BuiltinReference {
    static TABLES: OnceLock<BuiltinReference> = OnceLock::new();
    TABLES.get_or_init(BuiltinReference::load)
}
