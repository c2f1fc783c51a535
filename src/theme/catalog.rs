//! Static palette table.

use super::{ColorTheme, Tier1Palette};

/// Every built-in theme, Earth Tone first.
pub static THEMES: [ColorTheme; 12] = [
    ColorTheme {
        key: "earth-tone",
        name: "Earth Tone",
        description: "Natural greens and browns for job-site classic looks",
        tier1: Tier1Palette {
            subcategory1: "#556b2f",
            subcategory2: "#8b4513",
            subcategory3: "#cd853f",
            subcategory4: "#a0522d",
            subcategory5: "#6b8e23",
            default: "#8b7355",
        },
        tier2: [
            "#6b8e23", "#556b2f", "#808000", "#9acd32", "#8fbc8f", //
            "#8b4513", "#a0522d", "#d2691e", "#cd853f", "#deb887", //
            "#bc8f8f", "#c19a6b", "#967117", "#a67b5b", "#826644", //
            "#704214", "#8a795d", "#b5651d", "#6f4e37", "#c2b280",
        ],
    },
    ColorTheme {
        key: "pastel",
        name: "Pastel",
        description: "Soft, low-saturation tones",
        tier1: Tier1Palette {
            subcategory1: "#a8d8ea",
            subcategory2: "#aa96da",
            subcategory3: "#fcbad3",
            subcategory4: "#ffffd2",
            subcategory5: "#b5ead7",
            default: "#e2e2e2",
        },
        tier2: [
            "#a8d8ea", "#bde0fe", "#a2d2ff", "#cdb4db", "#ffc8dd", //
            "#ffafcc", "#fcbad3", "#f1c0e8", "#cfbaf0", "#a3c4f3", //
            "#90dbf4", "#8eecf5", "#98f5e1", "#b9fbc0", "#fbf8cc", //
            "#fde4cf", "#ffcfd2", "#e4c1f9", "#d0f4de", "#ffd6a5",
        ],
    },
    ColorTheme {
        key: "futuristic",
        name: "Futuristic",
        description: "Saturated cyan, violet and magenta",
        tier1: Tier1Palette {
            subcategory1: "#00f5d4",
            subcategory2: "#9b5de5",
            subcategory3: "#f15bb5",
            subcategory4: "#00bbf9",
            subcategory5: "#fee440",
            default: "#3a86ff",
        },
        tier2: [
            "#00f5d4", "#00bbf9", "#3a86ff", "#4cc9f0", "#4895ef", //
            "#9b5de5", "#7209b7", "#560bad", "#b5179e", "#8338ec", //
            "#f15bb5", "#ff006e", "#f72585", "#ff5d8f", "#ff8fab", //
            "#fee440", "#ffbe0b", "#fb5607", "#06d6a0", "#118ab2",
        ],
    },
    ColorTheme {
        key: "classic-construction",
        name: "Classic Construction",
        description: "Safety yellow, hazard orange and blueprint blue",
        tier1: Tier1Palette {
            subcategory1: "#fbbf24",
            subcategory2: "#f97316",
            subcategory3: "#1e3a8a",
            subcategory4: "#737373",
            subcategory5: "#dc2626",
            default: "#525252",
        },
        tier2: [
            "#fbbf24", "#f59e0b", "#d97706", "#b45309", "#92400e", //
            "#f97316", "#ea580c", "#c2410c", "#9a3412", "#fdba74", //
            "#1e3a8a", "#1e40af", "#1d4ed8", "#2563eb", "#3b82f6", //
            "#737373", "#525252", "#a3a3a3", "#dc2626", "#b91c1c",
        ],
    },
    ColorTheme {
        key: "molten-core",
        name: "Molten Core",
        description: "Lava reds, oranges and gold",
        tier1: Tier1Palette {
            subcategory1: "#ff4500",
            subcategory2: "#ff8c00",
            subcategory3: "#b22222",
            subcategory4: "#ffd700",
            subcategory5: "#8b0000",
            default: "#4a0e0e",
        },
        tier2: [
            "#ff4500", "#ff6347", "#ff7f50", "#e9967a", "#fa8072", //
            "#ff8c00", "#ffa500", "#ffb347", "#f4a460", "#d2691e", //
            "#b22222", "#a52a2a", "#cd5c5c", "#dc143c", "#c04000", //
            "#ffd700", "#ffc000", "#e6be8a", "#daa520", "#b8860b",
        ],
    },
    ColorTheme {
        key: "neon-noir",
        name: "Neon Noir",
        description: "Electric neon accents on near-black",
        tier1: Tier1Palette {
            subcategory1: "#ff00ff",
            subcategory2: "#00ffff",
            subcategory3: "#39ff14",
            subcategory4: "#ff3131",
            subcategory5: "#bc13fe",
            default: "#121212",
        },
        tier2: [
            "#ff00ff", "#e100ff", "#ff6ec7", "#ff1493", "#c71585", //
            "#00ffff", "#1a1a1a", "#00bfff", "#1e90ff", "#7df9ff", //
            "#39ff14", "#7fff00", "#ccff00", "#00ff7f", "#32cd32", //
            "#ff3131", "#ff5f1f", "#ffac1c", "#bc13fe", "#8a2be2",
        ],
    },
    ColorTheme {
        key: "dust-planet",
        name: "Dust Planet",
        description: "Desert sands and rust",
        tier1: Tier1Palette {
            subcategory1: "#c2956b",
            subcategory2: "#a86b4c",
            subcategory3: "#d9b48f",
            subcategory4: "#7d5a44",
            subcategory5: "#e8c39e",
            default: "#9c7a5b",
        },
        tier2: [
            "#c2956b", "#b5835a", "#a8734b", "#d4a373", "#e6b88a", //
            "#a86b4c", "#94583a", "#7f4a30", "#c48a66", "#d99f7a", //
            "#d9b48f", "#ccab85", "#bfa07a", "#e3c29e", "#f0d3b0", //
            "#7d5a44", "#6b4c39", "#5a3f30", "#8f6b52", "#a17d63",
        ],
    },
    ColorTheme {
        key: "crystal-cavern",
        name: "Crystal Cavern",
        description: "Cool amethyst and aquamarine",
        tier1: Tier1Palette {
            subcategory1: "#5e60ce",
            subcategory2: "#48bfe3",
            subcategory3: "#72efdd",
            subcategory4: "#6930c3",
            subcategory5: "#80ffdb",
            default: "#4ea8de",
        },
        tier2: [
            "#5e60ce", "#5390d9", "#4ea8de", "#48bfe3", "#56cfe1", //
            "#64dfdf", "#72efdd", "#80ffdb", "#6930c3", "#7400b8", //
            "#9d4edd", "#c77dff", "#e0aaff", "#7b2cbf", "#5a189a", //
            "#3c096c", "#10002b", "#240046", "#caf0f8", "#90e0ef",
        ],
    },
    ColorTheme {
        key: "paper-studio",
        name: "Paper Studio",
        description: "Muted inks on warm paper",
        tier1: Tier1Palette {
            subcategory1: "#3d405b",
            subcategory2: "#81b29a",
            subcategory3: "#e07a5f",
            subcategory4: "#f2cc8f",
            subcategory5: "#6d6875",
            default: "#8d99ae",
        },
        tier2: [
            "#3d405b", "#4a4e69", "#22223b", "#9a8c98", "#c9ada7", //
            "#81b29a", "#6a994e", "#a7c957", "#588157", "#3a5a40", //
            "#e07a5f", "#e76f51", "#f4a261", "#bc6c25", "#dda15e", //
            "#f2cc8f", "#e9c46a", "#ccd5ae", "#d4a373", "#b08968",
        ],
    },
    ColorTheme {
        key: "paper-bright",
        name: "Paper Bright",
        description: "Crisp primaries on white paper",
        tier1: Tier1Palette {
            subcategory1: "#ef476f",
            subcategory2: "#ffd166",
            subcategory3: "#06d6a0",
            subcategory4: "#118ab2",
            subcategory5: "#073b4c",
            default: "#8d99ae",
        },
        tier2: [
            "#ef476f", "#f78c6b", "#ffd166", "#f9c74f", "#f8961e", //
            "#06d6a0", "#43aa8b", "#90be6d", "#2a9d8f", "#52b788", //
            "#118ab2", "#277da1", "#4d908e", "#577590", "#3a86ff", //
            "#073b4c", "#264653", "#8338ec", "#ff006e", "#fb5607",
        ],
    },
    ColorTheme {
        key: "velvet-lounge",
        name: "Velvet Lounge",
        description: "Deep plum, wine and mauve",
        tier1: Tier1Palette {
            subcategory1: "#6a0572",
            subcategory2: "#ab83a1",
            subcategory3: "#a4133c",
            subcategory4: "#c9184a",
            subcategory5: "#3c096c",
            default: "#590d22",
        },
        tier2: [
            "#6a0572", "#7b2d8b", "#8e3e9c", "#a14fad", "#b461be", //
            "#ab83a1", "#c4a1bd", "#9d7397", "#8a5f84", "#745070", //
            "#a4133c", "#800f2f", "#ff4d6d", "#ff758f", "#c9184a", //
            "#3c096c", "#5a189a", "#7b2cbf", "#9d4edd", "#240046",
        ],
    },
    ColorTheme {
        key: "volcanic-dunes",
        name: "Volcanic Dunes",
        description: "Ember oranges fading into basalt teal",
        tier1: Tier1Palette {
            subcategory1: "#9a031e",
            subcategory2: "#e36414",
            subcategory3: "#fb8b24",
            subcategory4: "#5f0f40",
            subcategory5: "#0f4c5c",
            default: "#3e2723",
        },
        tier2: [
            "#9a031e", "#ae2012", "#bb3e03", "#ca6702", "#ee9b00", //
            "#e36414", "#f48c06", "#faa307", "#ffba08", "#dc2f02", //
            "#fb8b24", "#e85d04", "#d00000", "#9d0208", "#6a040f", //
            "#5f0f40", "#0f4c5c", "#370617", "#03071e", "#e9d8a6",
        ],
    },
];

/// Legacy tier2 names mapped to 1-based tier2 slots.
///
/// Older project data stored tier2 colors by these names; they resolve to the
/// same slot in every theme.
pub static LEGACY_TIER2_SLOTS: [(&str, usize); 20] = [
    ("foundation", 1),
    ("framing", 2),
    ("roofing", 3),
    ("lumber", 4),
    ("shingles", 5),
    ("electrical", 6),
    ("plumbing", 7),
    ("hvac", 8),
    ("low_voltage", 9),
    ("gas", 10),
    ("barriers", 11),
    ("drywall", 12),
    ("exteriors", 13),
    ("siding", 14),
    ("insulation", 15),
    ("windows", 16),
    ("doors", 17),
    ("cabinets", 18),
    ("fixtures", 19),
    ("flooring", 20),
];
