//! Fixed reference tables for the kingdom, phylum and class browsers.
//!
//! All data is `'static` and read-only.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhylumInfo {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingdomInfo {
    pub name: &'static str,
    pub phyla: &'static [PhylumInfo],
}

/// Detail content for phyla that have their own page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhylumDetail {
    pub name: &'static str,
    pub summary: &'static str,
    pub traits: &'static [&'static str],
    /// Class names with a page of their own, linked from the phylum page.
    pub classes: &'static [PhylumInfo],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Characteristic {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassInfo {
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static [&'static str],
    pub characteristics_title: &'static str,
    /// Column headings for the characteristics table.
    pub characteristic_labels: (&'static str, &'static str),
    pub characteristics: &'static [Characteristic],
}

impl ClassInfo {
    /// "Class Mammalia" → "Mammalia".
    pub fn simple_name(&self) -> &'static str {
        self.title.split(' ').nth(1).unwrap_or("Animals")
    }
}

const ANIMALIA_PHYLA: &[PhylumInfo] = &[
    PhylumInfo { name: "Porifera", description: "(sponges)" },
    PhylumInfo { name: "Cnidaria", description: "(jellyfish, corals, sea anemones)" },
    PhylumInfo { name: "Platyhelminthes", description: "(flatworms)" },
    PhylumInfo { name: "Nematoda", description: "(roundworms)" },
    PhylumInfo { name: "Annelida", description: "(segmented worms)" },
    PhylumInfo { name: "Mollusca", description: "(snails, clams, octopuses)" },
    PhylumInfo { name: "Arthropoda", description: "(insects, spiders, crustaceans)" },
    PhylumInfo { name: "Echinodermata", description: "(sea stars, sea urchins)" },
    PhylumInfo { name: "Chordata", description: "(vertebrates and related animals)" },
];

pub static KINGDOMS: &[KingdomInfo] = &[
    KingdomInfo { name: "Animalia", phyla: ANIMALIA_PHYLA },
    KingdomInfo { name: "Plantae", phyla: &[] },
    KingdomInfo { name: "Fungi", phyla: &[] },
    KingdomInfo { name: "Monera", phyla: &[] },
    KingdomInfo { name: "Protista", phyla: &[] },
];

pub static PHYLUM_DETAILS: &[PhylumDetail] = &[PhylumDetail {
    name: "Chordata",
    summary: "Chordates are animals that, at some stage of their life, have a notochord, \
              a dorsal hollow nerve cord, pharyngeal slits and a post-anal tail. \
              The phylum includes all vertebrates along with tunicates and lancelets.",
    traits: &[
        "Notochord",
        "Dorsal hollow nerve cord",
        "Pharyngeal slits",
        "Post-anal tail",
    ],
    classes: &[
        PhylumInfo { name: "Mammalia", description: "(mammals)" },
        PhylumInfo { name: "Reptilia", description: "(reptiles)" },
        PhylumInfo { name: "Aves", description: "(birds)" },
        PhylumInfo { name: "Amphibia", description: "(amphibians)" },
        PhylumInfo { name: "Actinopterygii", description: "(ray-finned fishes)" },
    ],
}];

pub static CLASSES: &[ClassInfo] = &[
    ClassInfo {
        key: "mammalia",
        title: "Class Mammalia",
        subtitle: "The Warm-Blooded Vertebrates",
        description: &[
            "Mammalia is a diverse class of vertebrate animals characterized primarily by the \
             presence of mammary glands in females, which produce milk for nourishing their young.",
            "Other key features typically include the presence of hair or fur, a neocortex region \
             in the brain, three middle ear bones (malleus, incus, and stapes), and being \
             warm-blooded (endothermic).",
            "Mammals inhabit a vast range of environments, from oceans and deserts to forests and \
             polar regions, and exhibit an incredible variety of forms and lifestyles, from the \
             tiny bumblebee bat to the enormous blue whale.",
        ],
        characteristics_title: "Major Orders of Mammals",
        characteristic_labels: ("Order Name", "Common Examples"),
        characteristics: &[
            Characteristic { name: "Monotremata", description: "Platypuses, Echidnas" },
            Characteristic { name: "Didelphimorphia", description: "Opossums" },
            Characteristic { name: "Diprotodontia", description: "Kangaroos, Koalas, Wombats" },
            Characteristic { name: "Primates", description: "Monkeys, Apes, Lemurs, Humans" },
            Characteristic { name: "Rodentia", description: "Rats, Mice, Squirrels, Beavers" },
            Characteristic { name: "Chiroptera", description: "Bats" },
            Characteristic { name: "Carnivora", description: "Dogs, Cats, Bears, Seals" },
            Characteristic {
                name: "Cetartiodactyla",
                description: "Cattle, Pigs, Hippos, Whales, Dolphins, Deer, Giraffes",
            },
        ],
    },
    ClassInfo {
        key: "reptilia",
        title: "Class Reptilia",
        subtitle: "The Cold-Blooded Scaly Vertebrates",
        description: &[
            "Reptilia is a class of tetrapod animals comprising today's turtles, crocodilians, \
             snakes, lizards, tuatara, and their extinct relatives.",
            "Most reptiles are ectothermic (\"cold-blooded\"), meaning they regulate their body \
             temperature using external heat sources. They are typically covered in scales or \
             scutes, protecting them from desiccation and injury.",
            "Reptiles reproduce sexually, and most lay amniotic eggs enclosed in leathery or hard \
             shells, usually on land.",
        ],
        characteristics_title: "Major Orders/Groups of Reptiles",
        characteristic_labels: ("Order/Group", "Common Examples"),
        characteristics: &[
            Characteristic { name: "Testudines", description: "Turtles, Tortoises, Terrapins" },
            Characteristic { name: "Squamata", description: "Lizards, Snakes, Amphisbaenians" },
            Characteristic {
                name: "Crocodilia",
                description: "Crocodiles, Alligators, Caimans, Gharials",
            },
            Characteristic {
                name: "Rhynchocephalia",
                description: "Tuataras (found only in New Zealand)",
            },
        ],
    },
];

/// Continent name → map image shown next to a record's locations.
pub static CONTINENT_IMAGES: &[(&str, &str)] = &[
    ("Africa", "/images/continents/africa.svg"),
    ("Antarctica", "/images/continents/antarctica.svg"),
    ("Asia", "/images/continents/asia.svg"),
    ("Central-America", "/images/continents/central-america.svg"),
    ("Eurasia", "/images/continents/eurasia.svg"),
    ("Europe", "/images/continents/europe.svg"),
    ("North-America", "/images/continents/north-america.svg"),
    ("Ocean", "/images/continents/ocean.svg"),
    ("Oceania", "/images/continents/oceania.svg"),
    ("South-America", "/images/continents/south-america.svg"),
];

/// Exact-match kingdom lookup.
pub fn kingdom(name: &str) -> Option<&'static KingdomInfo> {
    KINGDOMS.iter().find(|k| k.name == name)
}

pub fn phylum_detail(name: &str) -> Option<&'static PhylumDetail> {
    PHYLUM_DETAILS.iter().find(|p| p.name == name)
}

/// Phyla that have a detail page and should be linked.
pub fn has_phylum_page(name: &str) -> bool {
    phylum_detail(name).is_some()
}

/// Case-insensitive class lookup.
pub fn class(name: &str) -> Option<&'static ClassInfo> {
    let key = name.trim().to_ascii_lowercase();
    CLASSES.iter().find(|c| c.key == key)
}

pub fn has_class_page(name: &str) -> bool {
    class(name).is_some()
}

/// Image for a location reported by the taxonomy provider. Matching ignores case and
/// treats spaces as hyphens ("North America" == "North-America").
pub fn continent_image(location: &str) -> Option<&'static str> {
    let normalized = location.trim().replace(' ', "-");
    CONTINENT_IMAGES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&normalized))
        .map(|(_, path)| *path)
}
