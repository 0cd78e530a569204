use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Language assumed for any country the registry does not know.
pub const FALLBACK_LANGUAGE: &str = "English";

/// Country to language table shipped with the tool, in display order.
pub const BUILTIN_MARKETS: &[(&str, &str)] = &[
    ("Germany", "German"),
    ("United States", "English"),
    ("France", "French"),
    ("Italy", "Italian"),
    ("Spain", "Spanish"),
    ("China", "Chinese"),
    ("Japan", "Japanese"),
    ("South Korea", "Korean"),
    ("Brazil", "Portuguese"),
    ("Netherlands", "Dutch"),
    ("United Kingdom", "English"),
    ("Canada", "English"),
    ("Australia", "English"),
    ("India", "English"),
    ("Russia", "Russian"),
    ("Mexico", "Spanish"),
    ("Argentina", "Spanish"),
    ("Poland", "Polish"),
    ("Turkey", "Turkish"),
    ("Sweden", "Swedish"),
    ("Norway", "Norwegian"),
    ("Denmark", "Danish"),
    ("Finland", "Finnish"),
    ("Belgium", "French"),
    ("Switzerland", "German"),
    ("Austria", "German"),
    ("Portugal", "Portuguese"),
    ("Greece", "Greek"),
    ("Czech Republic", "Czech"),
    ("Hungary", "Hungarian"),
    ("Romania", "Romanian"),
    ("Israel", "Hebrew"),
    ("South Africa", "English"),
    ("New Zealand", "English"),
    ("Singapore", "English"),
    ("Malaysia", "Malay"),
    ("Thailand", "Thai"),
    ("Indonesia", "Indonesian"),
    ("Philippines", "Filipino"),
    ("Vietnam", "Vietnamese"),
    ("Chile", "Spanish"),
    ("Colombia", "Spanish"),
    ("Peru", "Spanish"),
    ("Venezuela", "Spanish"),
    ("Egypt", "Arabic"),
    ("Saudi Arabia", "Arabic"),
    ("United Arab Emirates", "Arabic"),
    ("Qatar", "Arabic"),
    ("Kuwait", "Arabic"),
    ("Ireland", "English"),
    ("Ukraine", "Ukrainian"),
    ("Belarus", "Belarusian"),
    ("Kazakhstan", "Kazakh"),
    ("Uzbekistan", "Uzbek"),
    ("Pakistan", "Urdu"),
    ("Bangladesh", "Bengali"),
    ("Sri Lanka", "Sinhala"),
    ("Nepal", "Nepali"),
    ("Myanmar", "Burmese"),
    ("Cambodia", "Khmer"),
    ("Laos", "Lao"),
    ("Mongolia", "Mongolian"),
    ("Brunei", "Malay"),
    ("East Timor", "Tetum"),
    ("Afghanistan", "Pashto"),
    ("Iraq", "Arabic"),
    ("Iran", "Persian"),
    ("Jordan", "Arabic"),
    ("Lebanon", "Arabic"),
    ("Syria", "Arabic"),
    ("Yemen", "Arabic"),
    ("Oman", "Arabic"),
    ("Bahrain", "Arabic"),
    ("Morocco", "Arabic"),
    ("Algeria", "Arabic"),
    ("Tunisia", "Arabic"),
    ("Libya", "Arabic"),
    ("Sudan", "Arabic"),
    ("Ethiopia", "Amharic"),
    ("Kenya", "Swahili"),
    ("Tanzania", "Swahili"),
    ("Uganda", "English"),
    ("Ghana", "English"),
    ("Nigeria", "English"),
    ("Cameroon", "French"),
    ("Ivory Coast", "French"),
    ("Senegal", "French"),
    ("Mali", "French"),
    ("Burkina Faso", "French"),
    ("Niger", "French"),
    ("Chad", "French"),
    ("Central African Republic", "French"),
    ("Democratic Republic of the Congo", "French"),
    ("Republic of the Congo", "French"),
    ("Gabon", "French"),
    ("Equatorial Guinea", "Spanish"),
    ("São Tomé and Príncipe", "Portuguese"),
    ("Angola", "Portuguese"),
    ("Zambia", "English"),
    ("Zimbabwe", "English"),
    ("Botswana", "English"),
    ("Namibia", "English"),
    ("Mozambique", "Portuguese"),
    ("Madagascar", "Malagasy"),
    ("Mauritius", "English"),
    ("Seychelles", "English"),
    ("Comoros", "Comorian"),
    ("Djibouti", "French"),
    ("Eritrea", "Tigrinya"),
    ("Somalia", "Somali"),
    ("Rwanda", "Kinyarwanda"),
    ("Burundi", "Kirundi"),
    ("Malawi", "English"),
    ("Lesotho", "Sesotho"),
    ("Eswatini", "English"),
    ("Guinea", "French"),
    ("Guinea-Bissau", "Portuguese"),
    ("Sierra Leone", "English"),
    ("Liberia", "English"),
    ("Togo", "French"),
    ("Benin", "French"),
    ("Mauritania", "Arabic"),
    ("Gambia", "English"),
    ("Cape Verde", "Portuguese"),
];

static BUILTIN: Lazy<MarketRegistry> =
    Lazy::new(|| MarketRegistry::from_pairs(BUILTIN_MARKETS.iter().copied()));

/// Read-only lookup from country name to the language searched in that market.
#[derive(Debug, Clone, Default)]
pub struct MarketRegistry {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl MarketRegistry {
    /// The built-in table.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Build a registry from `(country, language)` pairs. A repeated country keeps its
    /// first position and takes the last language given.
    pub fn from_pairs<I, C, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, L)>,
        C: Into<String>,
        L: Into<String>,
    {
        let mut registry = Self::default();
        for (country, language) in pairs {
            let country = country.into();
            let language = language.into();
            match registry.index.get(&country) {
                Some(&pos) => registry.entries[pos].1 = language,
                None => {
                    registry.index.insert(country.clone(), registry.entries.len());
                    registry.entries.push((country, language));
                }
            }
        }
        registry
    }

    /// Language for `country`, or [`FALLBACK_LANGUAGE`] when unknown. Never fails.
    pub fn resolve(&self, country: &str) -> &str {
        self.index
            .get(country)
            .map(|&pos| self.entries[pos].1.as_str())
            .unwrap_or(FALLBACK_LANGUAGE)
    }

    pub fn contains(&self, country: &str) -> bool {
        self.index.contains_key(country)
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(country, _)| country.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(country, language)| (country.as_str(), language.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
