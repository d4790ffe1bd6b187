//! Country and city tables
//!
//! Countries are listed alphabetically, the order the country selector shows
//! them in. City lists keep their curated order.

use serde::Serialize;

/// A selectable country and the cities offered for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    /// Display name, also sent to the API as the `country` parameter
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code, lowercase
    pub code: &'static str,
    pub cities: &'static [&'static str],
}

impl CountryEntry {
    /// Flag image for the location panel
    pub fn flag_url(&self) -> String {
        format!("https://flagcdn.com/{}.svg", self.code)
    }

    /// Resolve a city name case-insensitively to its canonical spelling
    pub fn find_city(&self, name: &str) -> Option<&'static str> {
        let name = name.trim();
        self.cities
            .iter()
            .copied()
            .find(|city| city.eq_ignore_ascii_case(name))
    }

    /// Whether `city` is one of this country's cities (exact match)
    pub fn has_city(&self, city: &str) -> bool {
        self.cities.contains(&city)
    }
}

pub static COUNTRIES: &[CountryEntry] = &[
    CountryEntry {
        name: "Bahrain",
        code: "bh",
        cities: &["Manama", "Riffa", "Muharraq", "Hamad Town", "A'ali", "Isa Town"],
    },
    CountryEntry {
        name: "Egypt",
        code: "eg",
        cities: &[
            "Cairo", "Alexandria", "Giza", "Mansoura", "Luxor", "Aswan", "Port Said", "Suez",
        ],
    },
    CountryEntry {
        name: "France",
        code: "fr",
        cities: &[
            "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg", "Montpellier",
        ],
    },
    CountryEntry {
        name: "Germany",
        code: "de",
        cities: &[
            "Berlin", "Munich", "Hamburg", "Cologne", "Frankfurt", "Stuttgart", "Düsseldorf",
            "Dortmund",
        ],
    },
    CountryEntry {
        name: "India",
        code: "in",
        cities: &[
            "Mumbai", "Delhi", "Bangalore", "Hyderabad", "Chennai", "Kolkata", "Pune", "Ahmedabad",
        ],
    },
    CountryEntry {
        name: "Indonesia",
        code: "id",
        cities: &[
            "Jakarta", "Surabaya", "Bandung", "Medan", "Semarang", "Makassar", "Palembang",
            "Tangerang",
        ],
    },
    CountryEntry {
        name: "Jordan",
        code: "jo",
        cities: &[
            "Amman", "Zarqa", "Irbid", "Russeifa", "Aqaba", "Salt", "Madaba", "Jerash",
        ],
    },
    CountryEntry {
        name: "Kuwait",
        code: "kw",
        cities: &[
            "Kuwait City", "Hawalli", "Farwaniya", "Ahmadi", "Jahra", "Mubarak Al-Kabeer",
        ],
    },
    CountryEntry {
        name: "Lebanon",
        code: "lb",
        cities: &[
            "Beirut", "Tripoli", "Sidon", "Tyre", "Nabatieh", "Baalbek", "Jounieh", "Zahle",
        ],
    },
    CountryEntry {
        name: "Malaysia",
        code: "my",
        cities: &[
            "Kuala Lumpur", "George Town", "Ipoh", "Shah Alam", "Petaling Jaya", "Klang",
            "Johor Bahru", "Seremban",
        ],
    },
    CountryEntry {
        name: "Morocco",
        code: "ma",
        cities: &[
            "Casablanca", "Rabat", "Fez", "Marrakech", "Agadir", "Tangier", "Meknes", "Oujda",
        ],
    },
    CountryEntry {
        name: "Oman",
        code: "om",
        cities: &[
            "Muscat", "Salalah", "Nizwa", "Sur", "Sohar", "Ibri", "Rustaq", "Buraimi",
        ],
    },
    CountryEntry {
        name: "Pakistan",
        code: "pk",
        cities: &[
            "Karachi", "Lahore", "Islamabad", "Rawalpindi", "Faisalabad", "Multan", "Peshawar",
            "Quetta",
        ],
    },
    CountryEntry {
        name: "Qatar",
        code: "qa",
        cities: &["Doha", "Al Rayyan", "Umm Salal", "Al Wakrah", "Al Khor", "Dukhan"],
    },
    CountryEntry {
        name: "Saudi Arabia",
        code: "sa",
        cities: &[
            "Riyadh", "Jeddah", "Mecca", "Medina", "Dammam", "Tabuk", "Abha", "Hail",
        ],
    },
    CountryEntry {
        name: "Turkey",
        code: "tr",
        cities: &[
            "Istanbul", "Ankara", "Izmir", "Bursa", "Antalya", "Gaziantep", "Konya", "Adana",
        ],
    },
    CountryEntry {
        name: "United Arab Emirates",
        code: "ae",
        cities: &[
            "Dubai", "Abu Dhabi", "Sharjah", "Ajman", "Ras Al Khaimah", "Fujairah",
            "Umm Al Quwain",
        ],
    },
    CountryEntry {
        name: "United Kingdom",
        code: "gb",
        cities: &[
            "London", "Manchester", "Birmingham", "Leeds", "Glasgow", "Sheffield", "Bradford",
            "Liverpool",
        ],
    },
    CountryEntry {
        name: "United States",
        code: "us",
        cities: &[
            "New York", "Los Angeles", "Chicago", "Houston", "Miami", "San Francisco", "Seattle",
            "Boston",
        ],
    },
];

/// Countries offered by the selector, i.e. those with a non-empty city list
pub fn countries() -> impl Iterator<Item = &'static CountryEntry> {
    COUNTRIES.iter().filter(|c| !c.cities.is_empty())
}

/// Look up a country by name, ignoring ASCII case and surrounding whitespace
pub fn find_country(name: &str) -> Option<&'static CountryEntry> {
    let name = name.trim();
    countries().find(|c| c.name.eq_ignore_ascii_case(name))
}
