//! Read-only reference data: continents, the seeded destination catalog,
//! the recommender's appeal catalog and minimum stays.
//!
//! Built once at startup and shared behind an `Arc`; nothing mutates it.

use std::collections::HashMap;

use crate::models::{
    destination::{AppealDestination, Continent, DestinationRecord},
    preference::{
        AgeRange::{self, *},
        BudgetLevel,
        Gender::{self, *},
    },
};

const DEFAULT_MINIMUM_STAY_DAYS: i32 = 2;

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub continents: Vec<Continent>,
    pub destinations: Vec<DestinationRecord>,
    pub appeal_catalog: Vec<AppealDestination>,
    destination_slugs: HashMap<String, i32>,
    minimum_stays: HashMap<String, i32>,
    default_minimum_stay: i32,
}

impl ReferenceData {
    pub fn new(
        continents: Vec<Continent>,
        destinations: Vec<DestinationRecord>,
        appeal_catalog: Vec<AppealDestination>,
    ) -> Self {
        Self {
            continents,
            destinations,
            appeal_catalog,
            destination_slugs: HashMap::new(),
            minimum_stays: HashMap::new(),
            default_minimum_stay: DEFAULT_MINIMUM_STAY_DAYS,
        }
    }

    pub fn with_slug(mut self, slug: &str, destination_id: i32) -> Self {
        self.destination_slugs.insert(slug.to_string(), destination_id);
        self
    }

    pub fn with_minimum_stay(mut self, destination_name: &str, days: i32) -> Self {
        self.minimum_stays.insert(destination_name.to_string(), days);
        self
    }

    pub fn continent(&self, id: i32) -> Option<&Continent> {
        self.continents.iter().find(|c| c.id == id)
    }

    /// Minimum trip length a destination needs before it is recommended.
    pub fn minimum_stay(&self, destination_name: &str) -> i32 {
        self.minimum_stays
            .get(destination_name)
            .copied()
            .unwrap_or(self.default_minimum_stay)
    }

    /// Resolves the questionnaire's destination vocabulary (`"japan"`,
    /// `"hong-kong"`, ...) to a destination id.
    pub fn destination_id_for_slug(&self, slug: &str) -> Option<i32> {
        self.destination_slugs
            .get(slug.trim().to_lowercase().as_str())
            .copied()
    }

    /// The catalog the service ships with.
    pub fn standard() -> Self {
        let continents = vec![
            continent(1, "Asia", "asia"),
            continent(2, "Europe", "europe"),
            continent(3, "North America", "north-america"),
            continent(4, "South America", "south-america"),
            continent(5, "Africa", "africa"),
            continent(6, "Oceania", "oceania"),
        ];

        #[rustfmt::skip]
        let seeds: [(&str, i32, &str, &str, i32, &str); 25] = [
            ("japan", 1, "Japan", "Japan", 98, "Temples, neon cities and world-class food."),
            ("china", 2, "China", "China", 90, "Ancient wonders alongside futuristic skylines."),
            ("hong-kong", 3, "Hong Kong", "China", 88, "Harbour views, dim sum and night markets."),
            ("india", 4, "India", "India", 86, "Palaces, spice markets and sacred rivers."),
            ("taiwan", 5, "Taiwan", "Taiwan", 84, "Night markets, hot springs and mountain gorges."),
            ("france", 6, "France", "France", 97, "Art, cuisine and countryside chateaux."),
            ("italy", 7, "Italy", "Italy", 96, "Renaissance cities, coastlines and pasta."),
            ("spain", 8, "Spain", "Spain", 93, "Tapas, beaches and Gaudi architecture."),
            ("germany", 9, "Germany", "Germany", 85, "Castles, beer gardens and design museums."),
            ("uk", 10, "United Kingdom", "United Kingdom", 89, "Historic London and wild highlands."),
            ("usa", 11, "United States", "United States", 95, "Iconic cities and national parks."),
            ("canada", 12, "Canada", "Canada", 87, "Rockies, lakes and friendly cities."),
            ("mexico", 13, "Mexico", "Mexico", 88, "Mayan ruins, beaches and street food."),
            ("costa-rica", 14, "Costa Rica", "Costa Rica", 82, "Rainforests, volcanoes and wildlife."),
            ("guatemala", 15, "Guatemala", "Guatemala", 74, "Volcano lakes and colonial towns."),
            ("brazil", 16, "Brazil", "Brazil", 91, "Carnival energy and Amazon adventures."),
            ("argentina", 17, "Argentina", "Argentina", 86, "Tango, steak and Patagonian peaks."),
            ("peru", 18, "Peru", "Peru", 89, "Machu Picchu and Andean culture."),
            ("chile", 19, "Chile", "Chile", 80, "Deserts, glaciers and vineyards."),
            ("colombia", 20, "Colombia", "Colombia", 81, "Coffee country and Caribbean coast."),
            ("south-africa", 21, "South Africa", "South Africa", 85, "Safaris, wine lands and Table Mountain."),
            ("morocco", 22, "Morocco", "Morocco", 83, "Souks, riads and Sahara dunes."),
            ("egypt", 23, "Egypt", "Egypt", 87, "Pyramids and Nile cruises."),
            ("kenya", 24, "Kenya", "Kenya", 79, "The great migration and Maasai Mara."),
            ("tanzania", 25, "Tanzania", "Tanzania", 78, "Kilimanjaro, Serengeti and Zanzibar."),
        ];

        let destinations = seeds
            .iter()
            .map(|(_, id, name, country, popularity, description)| DestinationRecord {
                id: *id,
                name: name.to_string(),
                country: country.to_string(),
                continent_id: continent_for_destination(*id),
                description: Some(description.to_string()),
                popularity_score: *popularity,
                image_url: None,
                created_at: None,
            })
            .collect();

        let mut reference = Self::new(continents, destinations, appeal_catalog());
        for (slug, id, ..) in seeds.iter() {
            reference = reference.with_slug(slug, *id);
        }

        reference
            .with_minimum_stay("Tokyo", 5)
            .with_minimum_stay("Paris", 4)
            .with_minimum_stay("New York City", 4)
            .with_minimum_stay("Bangkok", 3)
            .with_minimum_stay("Barcelona", 3)
    }
}

fn continent(id: i32, name: &str, code: &str) -> Continent {
    Continent {
        id,
        name: name.to_string(),
        code: code.to_string(),
    }
}

fn continent_for_destination(id: i32) -> i32 {
    match id {
        1..=5 => 1,
        6..=10 => 2,
        11..=15 => 3,
        16..=20 => 4,
        _ => 5,
    }
}

const ALL_GENDERS: [Gender; 3] = [Male, Female, Other];

fn appeal(
    id: i32,
    name: &str,
    country: &str,
    description: &str,
    image_url: &str,
    popularity_score: i32,
    budget_level: BudgetLevel,
    age_appeal: &[AgeRange],
    gender_appeal: &[Gender],
    continent_code: &str,
) -> AppealDestination {
    AppealDestination {
        id,
        name: name.to_string(),
        country: country.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        popularity_score,
        budget_level,
        age_appeal: age_appeal.to_vec(),
        gender_appeal: gender_appeal.to_vec(),
        continent_code: continent_code.to_string(),
    }
}

#[rustfmt::skip]
fn appeal_catalog() -> Vec<AppealDestination> {
    vec![
        appeal(1, "Bangkok", "Thailand", "Budget-friendly paradise with street food and temples",
            "https://images.unsplash.com/photo-1563492065153-83ee6b0f4d12?w=400",
            95, BudgetLevel::Economy, &[From18To25, From26To35], &ALL_GENDERS, "asia"),
        appeal(2, "Ho Chi Minh City", "Vietnam", "Vibrant city perfect for young budget travelers",
            "https://images.unsplash.com/photo-1583417319070-4a69db38a482?w=400",
            88, BudgetLevel::Economy, &[From18To25, From26To35], &ALL_GENDERS, "asia"),
        appeal(3, "Tokyo", "Japan", "Sophisticated metropolis perfect for mature luxury travelers",
            "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=400",
            98, BudgetLevel::Luxury, &[From36To45, From46To55, From56To65], &ALL_GENDERS, "asia"),
        appeal(4, "Barcelona", "Spain", "Perfect blend of culture, nightlife, and affordability",
            "https://images.unsplash.com/photo-1583422409516-2895a77efded?w=400",
            92, BudgetLevel::MidRange, &[From26To35, From36To45], &ALL_GENDERS, "europe"),
        appeal(5, "Prague", "Czech Republic", "Fairy-tale city with affordable luxury and rich history",
            "https://images.unsplash.com/photo-1541849546-216549ae216d?w=400",
            89, BudgetLevel::MidRange, &[From26To35, From36To45, From46To55], &ALL_GENDERS, "europe"),
        appeal(6, "Paris", "France", "Ultimate luxury destination for sophisticated travelers",
            "https://images.unsplash.com/photo-1431274172761-fca41d930114?w=400",
            99, BudgetLevel::Luxury, &[From36To45, From46To55, From56To65, Over65], &[Female, Other], "europe"),
        appeal(7, "New York City", "United States", "The city that never sleeps - perfect for ambitious travelers",
            "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?w=400",
            96, BudgetLevel::Luxury, &[From26To35, From36To45], &ALL_GENDERS, "north-america"),
        appeal(8, "Vancouver", "Canada", "Nature meets urban sophistication",
            "https://images.unsplash.com/photo-1549880338-65ddcdfd017b?w=400",
            87, BudgetLevel::MidRange, &[From26To35, From36To45, From46To55], &ALL_GENDERS, "north-america"),
        appeal(9, "Buenos Aires", "Argentina", "Passionate city perfect for tango lovers and culture enthusiasts",
            "https://images.unsplash.com/photo-1589909202802-8f4aadce1849?w=400",
            90, BudgetLevel::Economy, &[From26To35, From36To45], &ALL_GENDERS, "south-america"),
        appeal(10, "Rio de Janeiro", "Brazil", "Beach paradise with vibrant nightlife and carnival spirit",
            "https://images.unsplash.com/photo-1483729558449-99ef09a8c325?w=400",
            94, BudgetLevel::MidRange, &[From18To25, From26To35], &ALL_GENDERS, "south-america"),
    ]
}
