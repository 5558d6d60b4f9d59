//! Static catalog of guideline tables.
//!
//! Everything here is immutable configuration: which CSV file backs each
//! domain, which columns are searched versus emitted, which keywords route
//! a query to a domain, and which keywords a platform filter matches on.
//! Declaration order matters for routing — ties go to the first maximum.

/// Per-domain table layout: backing file plus the columns used for
/// matching ("search") and the columns projected into results ("output").
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub file: &'static str,
    pub search_cols: &'static [&'static str],
    pub output_cols: &'static [&'static str],
}

/// Fallback domain when routing finds nothing and for unknown domain names.
pub const DEFAULT_DOMAIN: &str = "component";

const COMPONENT_SPEC: TableSpec = TableSpec {
    file: "components.csv",
    search_cols: &["Component", "Platform", "Accessibility", "Best Practices"],
    output_cols: &[
        "Component",
        "Platform",
        "SwiftUI API",
        "Compose API",
        "Flutter API",
        "RN Component",
        "Accessibility",
        "Best Practices",
    ],
};

/// Domain catalog. Files are relative to the configured data directory.
pub const DOMAINS: &[(&str, TableSpec)] = &[
    (
        "style",
        TableSpec {
            file: "styles.csv",
            search_cols: &["Style", "Platform", "Keywords", "Use Cases"],
            output_cols: &[
                "Style",
                "Platform",
                "Keywords",
                "Use Cases",
                "Colors",
                "Typography",
                "Components",
                "Animation",
                "Example Apps",
            ],
        },
    ),
    (
        "color",
        TableSpec {
            file: "colors.csv",
            search_cols: &["Palette Name", "Platform", "Dynamic Color Support"],
            output_cols: &[
                "Palette Name",
                "Platform",
                "Primary",
                "Secondary",
                "Tertiary",
                "Surface",
                "On-Surface",
                "Error",
                "Dynamic Color Support",
            ],
        },
    ),
    (
        "typography",
        TableSpec {
            file: "typography.csv",
            search_cols: &["Style Name", "Platform", "Use Case"],
            output_cols: &[
                "Style Name",
                "Platform",
                "Font Family",
                "Size",
                "Weight",
                "Line Height",
                "Letter Spacing",
                "Use Case",
            ],
        },
    ),
    ("component", COMPONENT_SPEC),
    (
        "navigation",
        TableSpec {
            file: "navigation.csv",
            search_cols: &["Pattern", "Platform", "Best For", "Thumb Zone"],
            output_cols: &[
                "Pattern",
                "Platform",
                "Implementation",
                "Thumb Zone",
                "Gesture Support",
                "Deep Linking",
                "Best For",
            ],
        },
    ),
    (
        "gesture",
        TableSpec {
            file: "gestures.csv",
            search_cols: &["Gesture", "Platform", "Haptic Feedback", "Accessibility Alternative"],
            output_cols: &[
                "Gesture",
                "Platform",
                "SwiftUI",
                "Compose",
                "Flutter",
                "Haptic Feedback",
                "Accessibility Alternative",
            ],
        },
    ),
    (
        "accessibility",
        TableSpec {
            file: "accessibility.csv",
            search_cols: &["Guideline", "WCAG Level", "Testing Method", "Priority"],
            output_cols: &[
                "Guideline",
                "WCAG Level",
                "iOS Implementation",
                "Android Implementation",
                "Testing Method",
                "Priority",
            ],
        },
    ),
    (
        "animation",
        TableSpec {
            file: "animations.csv",
            search_cols: &["Animation Type", "Platform", "Use Case", "Reduce Motion Alternative"],
            output_cols: &[
                "Animation Type",
                "Platform",
                "Duration",
                "Easing",
                "SwiftUI API",
                "Compose API",
                "Use Case",
                "Reduce Motion Alternative",
            ],
        },
    ),
];

/// Look up a domain's table spec.
pub fn domain_spec(domain: &str) -> Option<&'static TableSpec> {
    DOMAINS
        .iter()
        .find(|(name, _)| *name == domain)
        .map(|(_, spec)| spec)
}

/// Look up a domain's table spec, falling back to the component domain for
/// unknown names. Single-domain search never errors on a bad domain name.
pub fn domain_spec_or_default(domain: &str) -> &'static TableSpec {
    domain_spec(domain).unwrap_or(&COMPONENT_SPEC)
}

/// Stack guideline tables, relative to the data directory. All stacks
/// share one column layout ([`STACK_SEARCH_COLS`] / [`STACK_OUTPUT_COLS`]).
pub const STACKS: &[(&str, &str)] = &[
    ("swiftui", "stacks/swiftui.csv"),
    ("jetpack-compose", "stacks/jetpack-compose.csv"),
    ("flutter", "stacks/flutter.csv"),
    ("react-native", "stacks/react-native.csv"),
    ("kmp-compose", "stacks/kmp-compose.csv"),
    ("material3", "stacks/material3.csv"),
    ("liquid-glass", "stacks/liquid-glass.csv"),
];

pub const STACK_SEARCH_COLS: &[&str] = &["Category", "Guideline", "Description", "Do", "Don't"];

pub const STACK_OUTPUT_COLS: &[&str] = &[
    "Category",
    "Guideline",
    "Description",
    "Do",
    "Don't",
    "Code Good",
    "Code Bad",
    "Severity",
    "Docs URL",
];

/// Look up a stack's backing file.
pub fn stack_file(stack: &str) -> Option<&'static str> {
    STACKS
        .iter()
        .find(|(name, _)| *name == stack)
        .map(|(_, file)| *file)
}

/// Valid stack identifiers, in declaration order.
pub fn stack_names() -> Vec<&'static str> {
    STACKS.iter().map(|(name, _)| *name).collect()
}

/// Characteristic keywords per domain, used for query routing. Matched as
/// case-insensitive substrings of the query.
pub const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "style",
        &["style", "design", "material", "liquid", "glass", "minimal", "dark", "theme", "visual"],
    ),
    (
        "color",
        &["color", "palette", "hex", "rgb", "primary", "secondary", "tonal", "dynamic"],
    ),
    (
        "typography",
        &["font", "typography", "text", "display", "headline", "body", "label", "size"],
    ),
    (
        "component",
        &[
            "button", "card", "list", "dialog", "sheet", "fab", "chip", "toggle", "slider",
            "textfield", "input",
        ],
    ),
    (
        "navigation",
        &["navigation", "tab", "drawer", "stack", "bottom", "rail", "deep link", "routing"],
    ),
    (
        "gesture",
        &["gesture", "tap", "swipe", "drag", "pinch", "long press", "haptic", "touch"],
    ),
    (
        "accessibility",
        &[
            "accessibility", "a11y", "wcag", "screen reader", "voiceover", "talkback", "contrast",
            "focus",
        ],
    ),
    (
        "animation",
        &["animation", "motion", "spring", "transition", "ease", "duration", "reduce motion"],
    ),
];

/// Rows whose Platform value contains this marker pass every platform
/// filter — cross-platform guidance is relevant everywhere.
pub const CROSS_PLATFORM_MARKER: &str = "cross-platform";

/// Keywords matched (as substrings of the lowercased Platform value) per
/// platform filter hint.
pub const PLATFORM_KEYWORDS: &[(&str, &[&str])] = &[
    ("ios", &["ios", "iphone", "ipad", "apple", "swiftui"]),
    ("android", &["android", "material", "compose"]),
    ("cross-platform", &["cross-platform", "flutter", "react native", "kmp", "both"]),
];

/// Look up a platform hint's keyword set.
pub fn platform_keywords(platform: &str) -> Option<&'static [&'static str]> {
    PLATFORM_KEYWORDS
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, keywords)| *keywords)
}
