#![forbid(unsafe_code)]

/// Name of the single area every fresh inspection starts with.
pub const DEFAULT_AREA_NAME: &str = "General";

/// Built-in inspection-point catalog, grouped by category. Category and
/// point order is presentation order.
pub const INSPECTION_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Structural & Interior",
        &[
            "Hairline Cracks",
            "Ceilings",
            "Walls",
            "Floors",
            "Doors & Locks",
            "Wardrobes & Cabinets Functionality",
            "Switch Logic & Placement",
            "Stoppers & Door Closers",
            "Window Lock & Roller Mechanism",
            "Curtain Box Provision",
        ],
    ),
    (
        "Safety / Utility",
        &[
            "Access Panel for AC Maintenance",
            "Water Heater Installation Check",
            "Water Pump Operational Test",
            "Fire Alarm/Smoke Detector Test",
        ],
    ),
    (
        "Plumbing System",
        &[
            "Water Pressure & Flow",
            "Pipes & Fittings",
            "Sinks, Showers, Toilets",
            "Hot Water System",
            "Water Tank Status (Cleaning)",
            "Under-Sink Leaks",
            "Drainage Flow Speed",
            "Toilet Flushing Pressure",
            "Drain Ventilation (Gurgling Sounds)",
        ],
    ),
    (
        "Moisture & Thermal",
        &["Signs of Damp or Mold", "Thermal Imaging"],
    ),
    (
        "Kitchen Inspection",
        &[
            "Cabinet Quality & Alignment",
            "Countertops & Backsplash",
            "Sink & Mixer Tap Functionality",
            "Kitchen Appliances",
        ],
    ),
    (
        "HVAC System",
        &["AC Units", "Ventilation Fans", "Thermostat Functionality"],
    ),
    ("Fire & Safety", &["Smoke Detectors", "Fire Extinguishers"]),
    (
        "Finishing & Aesthetics",
        &[
            "Paint Finish",
            "Joinery (wardrobes, cabinets)",
            "Flooring Condition",
        ],
    ),
    (
        "External Inspection",
        &["Roof Condition", "Walls & Paint", "Drainage", "Windows & Doors"],
    ),
    (
        "External Area",
        &[
            "Balcony Drainage Test",
            "Tiling Level & Grouting",
            "Lighting in Outdoor Areas",
            "External Tap Functionality",
        ],
    ),
    (
        "Electrical System",
        &[
            "Main Distribution Board (DB)",
            "Sockets & Switches",
            "Lighting Fixtures",
            "Grounding & Earthing",
            "DB Labeling",
            "All Light Points Working",
            "All Power Outlets Tested",
            "AC Drainage Check",
            "Isolators for AC & Heater",
            "Telephone/Internet Outlet Presence",
            "Bell/Intercom Functionality",
        ],
    ),
    (
        "Bathroom Inspection",
        &[
            "Tiling & Grouting",
            "Waterproofing Issues",
            "Toilet Flushing",
            "Water Pressure",
            "Toilets/Wet Areas Floor Slope",
            "Exhaust Fan Working",
            "Glass Shower Partition Sealing",
        ],
    ),
];

pub fn points_for(category: &str) -> Option<&'static [&'static str]> {
    INSPECTION_CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, points)| *points)
}

/// Default name for the next area added to an inspection that already has
/// `existing` areas.
pub fn next_area_name(existing: usize) -> String {
    format!("New Area {}", existing + 1)
}
