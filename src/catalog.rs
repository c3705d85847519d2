//! Static Catalog
//!
//! Sightseeing spots and hand-picked venues bundled with the app.

use crate::models::{CuratedVenue, PointOfInterest};

/// Card photo for live food results
pub const LIVE_FOOD_PHOTO: &str =
    "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?auto=format&fit=crop&w=1200&q=60";

/// Card photo for hotels
pub const HOTEL_PHOTO: &str =
    "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?auto=format&fit=crop&w=1200&q=60";

pub const TOUR_SPOTS: &[PointOfInterest] = &[
    PointOfInterest {
        name: "Victoria Memorial",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6d/Victoria_Memorial_Kolkata_12.jpg/1280px-Victoria_Memorial_Kolkata_12.jpg",
        desc: "Marble icon dedicated to Queen Victoria (1906–1921).",
        query: "Victoria Memorial Kolkata",
    },
    PointOfInterest {
        name: "Howrah Bridge",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/57/Howrah_bridge_calcutta.jpg/1280px-Howrah_bridge_calcutta.jpg",
        desc: "Cantilever bridge linking Howrah & Kolkata over Hooghly.",
        query: "Howrah Bridge",
    },
    PointOfInterest {
        name: "Dakshineswar Kali Temple",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6a/Dakshineswar_Kali_Temple_from_River_Hooghly.jpg/1280px-Dakshineswar_Kali_Temple_from_River_Hooghly.jpg",
        desc: "Famed 19th-century temple on the riverbank.",
        query: "Dakshineswar Kali Temple",
    },
    PointOfInterest {
        name: "Belur Math",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/26/Belur_Math%2C_Belur%2C_Howrah%2C_West_Bengal.jpg/1280px-Belur_Math%2C_Belur%2C_Howrah%2C_West_Bengal.jpg",
        desc: "Headquarters of Ramakrishna Mission with serene campus.",
        query: "Belur Math",
    },
    PointOfInterest {
        name: "Prinsep Ghat",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/6/69/Prinsep_Ghat_Kolkata_1.jpg/1280px-Prinsep_Ghat_Kolkata_1.jpg",
        desc: "Riverside promenade with views & evening vibe.",
        query: "Prinsep Ghat",
    },
    PointOfInterest {
        name: "Indian Museum",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4e/Indian_Museum_Kolkata_2.jpg/1280px-Indian_Museum_Kolkata_2.jpg",
        desc: "Oldest museum in India—art, archaeology & fossils.",
        query: "Indian Museum Kolkata",
    },
    PointOfInterest {
        name: "Science City",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/3/34/Science_City_Kolkata.jpg/1280px-Science_City_Kolkata.jpg",
        desc: "Interactive science center & digitarium.",
        query: "Science City Kolkata",
    },
    PointOfInterest {
        name: "Eco Park",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/28/Eco_Park_Gate_1%2C_New_Town%2C_Kolkata.jpg/1280px-Eco_Park_Gate_1%2C_New_Town%2C_Kolkata.jpg",
        desc: "Large urban park with themed gardens & boating.",
        query: "Eco Park Kolkata",
    },
    PointOfInterest {
        name: "Kumartuli",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/08/Kumartuli%2C_Kolkata.jpg/1280px-Kumartuli%2C_Kolkata.jpg",
        desc: "Artisans' quarter—Durga idols being made.",
        query: "Kumartuli",
    },
    PointOfInterest {
        name: "South Park Street Cemetery",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/19/South_Park_Street_Cemetery_2018.jpg/1280px-South_Park_Street_Cemetery_2018.jpg",
        desc: "18th-century cemetery with Gothic tombs.",
        query: "South Park Street Cemetery",
    },
    PointOfInterest {
        name: "Marble Palace",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/7/77/Marble_Palace_Kolkata.JPG/1280px-Marble_Palace_Kolkata.JPG",
        desc: "1830s mansion with European art collection.",
        query: "Marble Palace Kolkata",
    },
    PointOfInterest {
        name: "National Library",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/1c/National_Library_Kolkata_2011-06-24_8320.JPG/1280px-National_Library_Kolkata_2011-06-24_8320.JPG",
        desc: "India's largest library (public since 1953).",
        query: "National Library Kolkata",
    },
];

pub const CURATED_FOOD: &[CuratedVenue] = &[
    CuratedVenue {
        name: "Peter Cat",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/1d/Peter_Cat_restaurant%2C_Park_Street%2C_Kolkata.jpg/1280px-Peter_Cat_restaurant%2C_Park_Street%2C_Kolkata.jpg",
        desc: "Legendary Chelo Kebab & continental since 1975.",
    },
    CuratedVenue {
        name: "Flurys",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d2/Flurys%2C_Park_Street%2C_Kolkata.jpg/1280px-Flurys%2C_Park_Street%2C_Kolkata.jpg",
        desc: "Iconic tearoom for breakfast & pastries.",
    },
    CuratedVenue {
        name: "Bhojohori Manna",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/0f/Bhojohori_Manna%2C_Kolkata.jpg/1280px-Bhojohori_Manna%2C_Kolkata.jpg",
        desc: "Homestyle Bengali classics—fish curry, kosha mangsho.",
    },
    CuratedVenue {
        name: "Arsalan",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/f/f6/Arsalan%2C_Park_Circus%2C_Kolkata.jpg/1280px-Arsalan%2C_Park_Circus%2C_Kolkata.jpg",
        desc: "Kolkata biryani favourite.",
    },
    CuratedVenue {
        name: "Indian Coffee House",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/21/Coffee_House_College_Street.jpg/1280px-Coffee_House_College_Street.jpg",
        desc: "Historic adda spot on College Street.",
    },
    CuratedVenue {
        name: "Balaram Mullick & Radharaman Mullick",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/1c/Mithai_Shop_in_Kolkata.jpg/1280px-Mithai_Shop_in_Kolkata.jpg",
        desc: "Century-old sweets—sandesh & rosogolla.",
    },
    CuratedVenue {
        name: "6 Ballygunge Place",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2a/Six_Ballygunge_Place%2C_Kolkata.jpg/1280px-Six_Ballygunge_Place%2C_Kolkata.jpg",
        desc: "Elegant Bengali spread in a bungalow.",
    },
    CuratedVenue {
        name: "Nizam's",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/9/9d/Kathi_roll.jpg/1280px-Kathi_roll.jpg",
        desc: "Birthplace of Kolkata Kathi rolls.",
    },
    CuratedVenue {
        name: "Mocambo",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/b/b3/Prawn_a_la_russe.jpg/1280px-Prawn_a_la_russe.jpg",
        desc: "Retro continental icon on Park Street.",
    },
    CuratedVenue {
        name: "Mitra Café",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/8/84/Fish_Kobiraji.jpg/1280px-Fish_Kobiraji.jpg",
        desc: "Famous for fish kobiraji.",
    },
    CuratedVenue {
        name: "Paramount Sherbat",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/50/Paramount_College_Street.jpg/1280px-Paramount_College_Street.jpg",
        desc: "Heritage sherbet house since 1918.",
    },
    CuratedVenue {
        name: "Golbari",
        img: "https://upload.wikimedia.org/wikipedia/commons/thumb/3/35/Kosha_Mangsho.jpg/1280px-Kosha_Mangsho.jpg",
        desc: "Spicy kosha mangsho at Shyambazar.",
    },
];

pub const CURATED_HOTELS: &[CuratedVenue] = &[
    CuratedVenue {
        name: "The Oberoi Grand",
        img: HOTEL_PHOTO,
        desc: "Victorian landmark on Chowringhee.",
    },
    CuratedVenue {
        name: "Taj Bengal",
        img: HOTEL_PHOTO,
        desc: "Alipore luxury stay near the zoo and National Library.",
    },
    CuratedVenue {
        name: "The Park",
        img: HOTEL_PHOTO,
        desc: "Boutique hotel in the middle of Park Street nightlife.",
    },
    CuratedVenue {
        name: "ITC Sonar",
        img: HOTEL_PHOTO,
        desc: "Resort-style hotel with lakeside gardens near EM Bypass.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_unique() {
        let tour: HashSet<_> = TOUR_SPOTS.iter().map(|s| s.name).collect();
        assert_eq!(tour.len(), TOUR_SPOTS.len());
        let food: HashSet<_> = CURATED_FOOD.iter().map(|s| s.name).collect();
        assert_eq!(food.len(), CURATED_FOOD.len());
    }

    #[test]
    fn test_every_spot_has_query() {
        assert!(TOUR_SPOTS.iter().all(|s| !s.query.is_empty() && s.img.starts_with("https://")));
    }
}
