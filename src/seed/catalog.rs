//! Fixed sample data the seeder draws from.

use rust_decimal::Decimal;

/// One entry of the sample listing catalog. Catalog listings are available
/// unless the seeder flips them.
#[derive(Debug, Clone, Copy)]
pub struct CatalogListing {
    pub title: &'static str,
    pub description: &'static str,
    /// Base nightly price in cents
    pub price_cents: i64,
}

impl CatalogListing {
    pub fn price(&self) -> Decimal {
        Decimal::new(self.price_cents, 2)
    }
}

const fn entry(title: &'static str, description: &'static str, price_cents: i64) -> CatalogListing {
    CatalogListing {
        title,
        description,
        price_cents,
    }
}

pub static SAMPLE_LISTINGS: [CatalogListing; 20] = [
    entry(
        "Cozy Mountain Cabin",
        "Beautiful wooden cabin with stunning mountain views. Perfect for a peaceful getaway with modern amenities and a fireplace.",
        15000,
    ),
    entry(
        "Beachfront Villa",
        "Luxurious villa steps from the beach. Features private pool, ocean views, and fully equipped kitchen.",
        30000,
    ),
    entry(
        "Downtown Luxury Apartment",
        "Modern apartment in the heart of the city. Walking distance to restaurants, shops, and attractions.",
        20000,
    ),
    entry(
        "Rustic Farmhouse",
        "Charming farmhouse with acres of land. Perfect for families who want to experience country living.",
        12000,
    ),
    entry(
        "Ski Resort Condo",
        "Ski-in/ski-out condo with mountain views. Includes hot tub access and ski storage.",
        25000,
    ),
    entry(
        "Desert Oasis",
        "Unique desert retreat with pool and spa. Stargazing deck and panoramic desert views.",
        18000,
    ),
    entry(
        "Historic City Loft",
        "Renovated loft in a historic building. Exposed brick walls and high ceilings with modern amenities.",
        17500,
    ),
    entry(
        "Lakefront Cottage",
        "Charming cottage on the lake with private dock. Perfect for fishing, swimming, and water activities.",
        14000,
    ),
    entry(
        "Tropical Paradise",
        "Private villa surrounded by tropical gardens. Infinity pool and ocean breezes.",
        35000,
    ),
    entry(
        "Alpine Chalet",
        "Traditional chalet with stunning alpine views. Cozy fireplace and outdoor hot tub.",
        22000,
    ),
    entry(
        "Urban Penthouse",
        "Luxury penthouse with city skyline views. Rooftop terrace and gourmet kitchen.",
        40000,
    ),
    entry(
        "Countryside B&B",
        "Charming bed and breakfast in the countryside. Home-cooked breakfast included.",
        9500,
    ),
    entry(
        "Island Retreat",
        "Private island villa accessible only by boat. Complete privacy and stunning ocean views.",
        50000,
    ),
    entry(
        "Wine Country Villa",
        "Elegant villa in the heart of wine country. Wine tasting tours and vineyard views.",
        27500,
    ),
    entry(
        "Modern Treehouse",
        "Unique treehouse experience with modern comforts. Surrounded by forest and wildlife.",
        16000,
    ),
    entry(
        "Coastal Lighthouse",
        "Converted lighthouse with panoramic ocean views. Historic charm with modern amenities.",
        32000,
    ),
    entry(
        "Mountain View Lodge",
        "Spacious lodge with breathtaking mountain views. Perfect for large groups and families.",
        28000,
    ),
    entry(
        "Seaside Bungalow",
        "Charming bungalow steps from the beach. Private garden and outdoor dining area.",
        13500,
    ),
    entry(
        "Artistic Studio Loft",
        "Creative loft space perfect for artists and designers. High ceilings and natural light.",
        15500,
    ),
    entry(
        "Zen Garden Retreat",
        "Peaceful retreat with Japanese garden and meditation space. Perfect for relaxation.",
        19000,
    ),
];

pub static SAMPLE_USERS: [&str; 20] = [
    "John Smith",
    "Emma Johnson",
    "Michael Brown",
    "Sarah Davis",
    "David Wilson",
    "Lisa Anderson",
    "Robert Taylor",
    "Jennifer Martinez",
    "Christopher Garcia",
    "Amanda Rodriguez",
    "James Lopez",
    "Michelle Gonzalez",
    "Daniel Perez",
    "Ashley Torres",
    "Matthew Flores",
    "Nicole Rivera",
    "Joshua Cooper",
    "Stephanie Richardson",
    "Andrew Cox",
    "Rebecca Howard",
];
