use crate::i18n::Language;
use serde::Serialize;

/// Landing page text for one language, fully populated and ready to render
///
/// Strings are stored raw. The HTML renderer escapes them; the JSON API
/// ships them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// Hero headline
    pub title: &'static str,

    /// Hero paragraph beneath the headline
    pub subtitle: &'static str,

    /// Label of the primary call to action (links to /flights)
    pub cta_primary: &'static str,

    /// Label of the secondary call to action (links to /hotels)
    pub cta_secondary: &'static str,

    /// Heading above the feature list
    pub section_title: &'static str,

    /// Feature list, rendered in order
    pub features: &'static [&'static str],

    /// Footer line
    pub footer: &'static str,
}

/// Per-language override: every field is optional
///
/// `features` is replaced as a whole when present; entries are never merged
/// with the base list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialRecord {
    pub title: Option<&'static str>,
    pub subtitle: Option<&'static str>,
    pub cta_primary: Option<&'static str>,
    pub cta_secondary: Option<&'static str>,
    pub section_title: Option<&'static str>,
    pub features: Option<&'static [&'static str]>,
    pub footer: Option<&'static str>,
}

impl PartialRecord {
    /// Override with no fields: resolves to the base record.
    pub const EMPTY: PartialRecord = PartialRecord {
        title: None,
        subtitle: None,
        cta_primary: None,
        cta_secondary: None,
        section_title: None,
        features: None,
        footer: None,
    };

    /// Names of the fields this override leaves to the base record.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("title", self.title.is_none()),
            ("subtitle", self.subtitle.is_none()),
            ("ctaPrimary", self.cta_primary.is_none()),
            ("ctaSecondary", self.cta_secondary.is_none()),
            ("sectionTitle", self.section_title.is_none()),
            ("features", self.features.is_none()),
            ("footer", self.footer.is_none()),
        ];

        fields
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect()
    }
}

/// Get the override entry for a language.
///
/// `None` and `Some(&PartialRecord::EMPTY)` resolve identically.
pub fn overrides(language: Language) -> Option<&'static PartialRecord> {
    match language {
        Language::En => Some(&ENGLISH_OVERRIDES),
        Language::Fr => Some(&FRENCH_OVERRIDES),
        Language::Nl => Some(&DUTCH_OVERRIDES),
        Language::De => Some(&GERMAN_OVERRIDES),
        Language::Es => Some(&SPANISH_OVERRIDES),
        Language::Pt => Some(&PORTUGUESE_OVERRIDES),
        Language::Hi => Some(&HINDI_OVERRIDES),
        Language::Ml => Some(&MALAYALAM_OVERRIDES),
        Language::Ta => Some(&TAMIL_OVERRIDES),
        Language::Ar => Some(&ARABIC_OVERRIDES),
        Language::Zh => Some(&CHINESE_OVERRIDES),
        Language::Ja => Some(&JAPANESE_OVERRIDES),
        Language::Ru => Some(&RUSSIAN_OVERRIDES),
    }
}

// ==================== English Strings ====================

/// English base record: the fallback for every missing field
pub const ENGLISH_BASE: DisplayRecord = DisplayRecord {
    title: "Online travel booking for flights and hotels",
    subtitle: "Plan your next trip with flexible search, secure booking, and real-time updates.",
    cta_primary: "Start planning",
    cta_secondary: "Explore destinations",
    section_title: "What you can do on this site",
    features: &[
        "Build a complete travel plan with flights and hotels",
        "Search and filter by budget, dates, airlines, and rating",
        "Contact support when you need help with a booking",
        "Use admin tools for managing trips and customers",
    ],
    footer: "Built with Next.js, FastAPI, and SQLite.",
};

const ENGLISH_OVERRIDES: PartialRecord = PartialRecord::EMPTY;

// ==================== Full Translations ====================

const FRENCH_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("Réservation de voyages en ligne (vols et hôtels)"),
    subtitle: Some(
        "Préparez votre prochain voyage avec une recherche flexible, une réservation sécurisée et des mises à jour en temps réel.",
    ),
    cta_primary: Some("Commencer à planifier"),
    cta_secondary: Some("Explorer les destinations"),
    section_title: Some("Ce que vous pouvez faire sur ce site"),
    features: Some(&[
        "Construire un itinéraire complet avec vols et hôtels",
        "Rechercher et filtrer par budget, dates, compagnies aériennes et note",
        "Contacter le support en cas de problème avec une réservation",
        "Utiliser des outils d’administration pour gérer voyages et clients",
    ]),
    footer: Some("Construit avec Next.js, FastAPI et SQLite."),
};

const DUTCH_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("Online reizen boeken voor vluchten en hotels"),
    subtitle: Some(
        "Plan je volgende reis met flexibele zoekopties, veilige boeking en realtime updates.",
    ),
    cta_primary: Some("Begin met plannen"),
    cta_secondary: Some("Bestemmingen verkennen"),
    section_title: Some("Wat je op deze site kunt doen"),
    features: Some(&[
        "Maak een volledig reisplan met vluchten en hotels",
        "Zoek en filter op budget, data, luchtvaartmaatschappij en beoordeling",
        "Neem contact op met support bij vragen over je boeking",
        "Gebruik admintools om reizen en klanten te beheren",
    ]),
    footer: Some("Gebouwd met Next.js, FastAPI en SQLite."),
};

// ==================== Hero + CTA Translations ====================

const GERMAN_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("Online Reisebuchung für Flüge und Hotels"),
    subtitle: Some(
        "Plane deine nächste Reise mit flexibler Suche, sicherer Buchung und Echtzeit-Updates.",
    ),
    cta_primary: Some("Reise planen"),
    cta_secondary: Some("Ziele entdecken"),
    ..PartialRecord::EMPTY
};

const SPANISH_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("Reserva de viajes en línea para vuelos y hoteles"),
    subtitle: Some(
        "Planifica tu próximo viaje con búsqueda flexible, reserva segura y actualizaciones en tiempo real.",
    ),
    cta_primary: Some("Comenzar a planear"),
    cta_secondary: Some("Explorar destinos"),
    ..PartialRecord::EMPTY
};

const PORTUGUESE_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("Reserva de viagens online para voos e hotéis"),
    subtitle: Some(
        "Planeje sua próxima viagem com busca flexível, reserva segura e atualizações em tempo real.",
    ),
    cta_primary: Some("Começar a planejar"),
    cta_secondary: Some("Explorar destinos"),
    ..PartialRecord::EMPTY
};

const HINDI_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("ऑनलाइन ट्रैवल बुकिंग (फ्लाइट और होटल)"),
    subtitle: Some(
        "लचीली खोज, सुरक्षित बुकिंग और रियल-टाइम अपडेट के साथ अपनी अगली यात्रा की योजना बनाएं।",
    ),
    cta_primary: Some("योजना शुरू करें"),
    cta_secondary: Some("डेस्टिनेशन देखें"),
    ..PartialRecord::EMPTY
};

// Everything except the footer
const MALAYALAM_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("ഓൺലൈൻ ട്രാവൽ ബുക്കിംഗ് (വിമാനങ്ങളും ഹോട്ടലുകളും)"),
    subtitle: Some(
        "ഇഷ്ടാനുസൃത തിരച്ചിൽ, സുരക്ഷിത ബുക്കിംഗ്, റിയൽ-ടൈം അപ്ഡേറ്റുകൾ എന്നിവയോടെ നിങ്ങളുടെ അടുത്ത യാത്ര പ്ലാൻ ചെയ്യൂ.",
    ),
    cta_primary: Some("യാത്ര പ്ലാൻ ചെയ്യുക"),
    cta_secondary: Some("ഗമ്യസ്ഥലങ്ങൾ കാണുക"),
    section_title: Some("ഈ സൈറ്റിൽ നിങ്ങൾക്ക് ചെയ്യാനാകുന്നത്"),
    features: Some(&[
        "വിമാനങ്ങളും ഹോട്ടലുകളും ചേർത്ത് പൂർണ്ണ യാത്രാപദ്ധതി തയ്യാറാക്കുക",
        "ബജറ്റ്, തീയതി, എയർലൈൻസ്, റേറ്റിംഗ് എന്നിവ പ്രകാരം തിരയാനും ഫിൽറ്റർ ചെയ്യാനും കഴിയൂ",
        "ബുക്കിംഗുമായി ബന്ധപ്പെട്ട സഹായത്തിനായി സപ്പോർട്ട് ടീമിനെ സമീപിക്കുക",
        "ട്രിപ്പുകളും കസ്റ്റമർമാരും മാനേജ് ചെയ്യാൻ അഡ്മിൻ ടൂളുകൾ ഉപയോഗിക്കുക",
    ]),
    footer: None,
};

// ==================== Hero-only Translations ====================

const TAMIL_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("ஆன்லைன் பயண முன்பதிவு (விமானம் & ஹோட்டல்)"),
    subtitle: Some(
        "நெகிழ்வான தேடல், பாதுகாப்பான முன்பதிவு, நேரடி புதுப்பிப்புகளுடன் உங்கள் அடுத்த பயணத்தை திட்டமிடுங்கள்.",
    ),
    ..PartialRecord::EMPTY
};

const ARABIC_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("حجز السفر عبر الإنترنت للرحلات والفنادق"),
    subtitle: Some("خطط لرحلتك القادمة مع بحث مرن، حجز آمن وتحديثات لحظية."),
    ..PartialRecord::EMPTY
};

const CHINESE_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("机票与酒店一站式在线预订"),
    subtitle: Some("通过灵活搜索、安全预订和实时更新来规划您的下一次旅行。"),
    ..PartialRecord::EMPTY
};

const JAPANESE_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("フライトとホテルのオンライン旅行予約"),
    subtitle: Some("柔軟な検索、安全な予約、リアルタイム更新で次の旅行を計画しましょう。"),
    ..PartialRecord::EMPTY
};

const RUSSIAN_OVERRIDES: PartialRecord = PartialRecord {
    title: Some("Онлайн-бронирование путешествий (авиабилеты и отели)"),
    subtitle: Some(
        "Планируйте своё следующее путешествие с гибким поиском, безопасным бронированием и обновлениями в реальном времени.",
    ),
    ..PartialRecord::EMPTY
};
