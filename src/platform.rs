use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    PC,
    PS4,
    PS5,
    XB1,
    XBSX
}

impl Platform {
    #[inline]
    pub fn list() -> &'static [Platform] {
        &[Self::PC, Self::PS4, Self::PS5, Self::XB1, Self::XBSX]
    }

    /// Convert enum value to its name
    ///
    /// `Platform::XBSX` -> `XBSX`
    #[inline]
    pub fn to_name(&self) -> &str {
        match self {
            Self::PC   => "PC",
            Self::PS4  => "PS4",
            Self::PS5  => "PS5",
            Self::XB1  => "XB1",
            Self::XBSX => "XBSX"
        }
    }

    /// Convert enum value to the value used by the API
    ///
    /// `Platform::XBSX` -> `XBSX/S`
    #[inline]
    pub fn to_value(&self) -> &str {
        match self {
            Self::XBSX => "XBSX/S",

            platform => platform.to_name()
        }
    }

    /// Try to convert string to enum
    ///
    /// - `XBSX` -> `Platform::XBSX`
    /// - `XBSX/S` -> `Platform::XBSX`
    pub fn from_str<T: AsRef<str>>(str: T) -> Option<Self> {
        match str.as_ref() {
            "PC"  => Some(Self::PC),
            "PS4" => Some(Self::PS4),
            "PS5" => Some(Self::PS5),
            "XB1" => Some(Self::XB1),

            "XBSX" | "XBSX/S" => Some(Self::XBSX),

            _ => None
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_value())
    }
}
