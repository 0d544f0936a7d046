use crate::models::ModelError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Language {
    Yoruba => "yoruba",
    Igbo => "igbo",
    Hausa => "hausa",
    English => "english",
});

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(MatchType {
    Exact => "exact",
    Fuzzy => "fuzzy",
    UniversalFuzzy => "universal_fuzzy",
    Fallback => "fallback",
});

impl Language {
    /// Every supported language, in corpus partition order.
    pub const ALL: [Language; 4] = [
        Language::Yoruba,
        Language::Igbo,
        Language::Hausa,
        Language::English,
    ];

    /// Title-case name used in human-readable payloads and synthesized text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Yoruba => "Yoruba",
            Self::Igbo => "Igbo",
            Self::Hausa => "Hausa",
            Self::English => "English",
        }
    }
}

impl Severity {
    /// Severity assigned when a record carries none.
    pub fn default_level() -> Self {
        Severity::Moderate
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::default_level()
    }
}
