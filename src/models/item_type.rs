use ansi_term::Colour;
use serde::{Serialize, Serializer};

/// How the free-text DETAILS lines of a row get labeled.
pub enum DetailLabels {
    /// Every line gets the same label (Hotel: "Room Type: ...").
    Uniform(&'static str),
    /// Line N gets label N; extra lines stay verbatim.
    Positional(&'static [&'static str]),
    /// Lines are kept as written.
    Verbatim,
}

/// Category of a booking row / display item.
///
/// The set is open: anything the sheet sends that we do not recognize becomes
/// `Other` and degrades to a generic icon, color and verbatim details.
/// `None` is the synthetic placeholder type for gap days.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemType {
    Flight,
    Hotel,
    Cruise,
    Train,
    Lounge,
    Show,
    Event,
    Attraction,
    Bus,
    Port,
    Uber,
    Drive,
    Food,
    Parking,
    ThemePark,
    None,
    Other(String),
}

impl ItemType {
    pub fn from_sheet(s: &str) -> Self {
        match s.trim() {
            "Flight" => Self::Flight,
            "Hotel" => Self::Hotel,
            "Cruise" => Self::Cruise,
            "Train" => Self::Train,
            "Lounge" => Self::Lounge,
            "Show" => Self::Show,
            "Event" => Self::Event,
            "Attraction" => Self::Attraction,
            "Bus" => Self::Bus,
            "Port" => Self::Port,
            "Uber" => Self::Uber,
            "Drive" => Self::Drive,
            "Food" => Self::Food,
            "Parking" => Self::Parking,
            "Theme Park" => Self::ThemePark,
            "None" => Self::None,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Flight => "Flight",
            Self::Hotel => "Hotel",
            Self::Cruise => "Cruise",
            Self::Train => "Train",
            Self::Lounge => "Lounge",
            Self::Show => "Show",
            Self::Event => "Event",
            Self::Attraction => "Attraction",
            Self::Bus => "Bus",
            Self::Port => "Port",
            Self::Uber => "Uber",
            Self::Drive => "Drive",
            Self::Food => "Food",
            Self::Parking => "Parking",
            Self::ThemePark => "Theme Park",
            Self::None => "None",
            Self::Other(s) => s,
        }
    }

    /// Phase-name pair for interval types. `None` means single-point:
    /// the row yields exactly one item with no phase.
    pub fn phases(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Hotel => Some(("Check-in", "Check-out")),
            Self::Flight => Some(("Take off", "Land")),
            Self::Cruise => Some(("Embarkation", "Disembarkation")),
            Self::Train => Some(("Depart", "Arrive")),
            _ => None,
        }
    }

    pub fn is_multi_phase(&self) -> bool {
        self.phases().is_some()
    }

    /// Label template applied to the DETAILS lines.
    pub fn detail_labels(&self) -> DetailLabels {
        match self {
            Self::Hotel => DetailLabels::Uniform("Room Type"),
            Self::Flight => DetailLabels::Positional(&["Flight #", "Aircraft", "Cabin"]),
            Self::Cruise => {
                DetailLabels::Positional(&["Cruise Line", "Ship", "Cabin Type", "Cabin #"])
            }
            Self::Train => {
                DetailLabels::Positional(&["Train Company", "Train #", "Coach Type", "Seat #"])
            }
            _ => DetailLabels::Verbatim,
        }
    }

    /// Interval types whose start item shows its duration inline as the
    /// first details line (a hotel stay length, a cruise length).
    pub fn leads_with_duration(&self) -> bool {
        matches!(self, Self::Hotel | Self::Cruise)
    }

    /// Verb for "transit to destination" types whose titles get rewritten
    /// to "{verb} to {destination}".
    pub fn transit_verb(&self) -> Option<&'static str> {
        match self {
            Self::Uber => Some("Uber"),
            _ => None,
        }
    }

    /// Terminal icon glyph for the timeline gutter.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Flight => "✈",
            Self::Hotel => "⌂",
            Self::Cruise => "⚓",
            Self::Train => "🚆",
            Self::Lounge => "🛋",
            Self::Show => "🎟",
            Self::Event => "✦",
            Self::Attraction => "★",
            Self::Bus => "🚌",
            Self::Port => "📍",
            Self::Uber => "🚕",
            Self::Drive => "🚗",
            Self::Food => "🍴",
            Self::Parking => "🅿",
            Self::ThemePark => "🎡",
            Self::None => "·",
            Self::Other(_) => "●",
        }
    }

    /// Display color for the type badge and calendar markers.
    pub fn color(&self) -> Colour {
        match self {
            Self::Flight => Colour::Blue,
            Self::Hotel => Colour::Purple,
            Self::Cruise => Colour::Cyan,
            Self::Train => Colour::Green,
            Self::Lounge => Colour::RGB(255, 153, 51),
            Self::Show => Colour::RGB(255, 105, 180),
            Self::Event => Colour::Yellow,
            Self::Attraction => Colour::RGB(255, 215, 0),
            Self::Bus => Colour::RGB(0, 170, 170),
            Self::Port => Colour::RGB(70, 130, 180),
            Self::Uber => Colour::RGB(90, 200, 90),
            Self::Drive => Colour::RGB(160, 160, 255),
            Self::Food => Colour::Red,
            Self::Parking => Colour::RGB(100, 149, 237),
            Self::ThemePark => Colour::RGB(255, 140, 0),
            Self::None => Colour::Fixed(245),
            Self::Other(_) => Colour::White,
        }
    }
}

impl Serialize for ItemType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
