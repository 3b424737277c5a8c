/// Chart window selectable from the five range buttons.
///
/// The forecast endpoint and the bookmark store use different numeric
/// encodings for the same five windows; both mappings live here so no
/// magic numbers leak into the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    NineMonths,
    OneYear,
}

impl TimeRange {
    /// Short label shown on the range buttons.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::SixMonths => "6m",
            Self::NineMonths => "9m",
            Self::OneYear => "1y",
        }
    }

    /// Window length in calendar months.
    pub const fn months(self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::NineMonths => 9,
            Self::OneYear => 12,
        }
    }

    /// Code understood by the forecast endpoint.
    pub const fn forecast_code(self) -> u8 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 2,
            Self::SixMonths => 3,
            Self::NineMonths => 4,
            Self::OneYear => 5,
        }
    }

    /// Code used for bookmark store lookups.
    pub const fn bookmark_code(self) -> u8 {
        match self {
            Self::OneMonth => 11,
            Self::ThreeMonths => 23,
            Self::SixMonths => 35,
            Self::NineMonths => 47,
            Self::OneYear => 59,
        }
    }

    pub fn from_forecast_code(code: u8) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.forecast_code() == code)
    }

    pub fn from_bookmark_code(code: u8) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.bookmark_code() == code)
    }

    /// All windows, in button order.
    pub fn all() -> &'static [Self] {
        &[
            Self::OneMonth,
            Self::ThreeMonths,
            Self::SixMonths,
            Self::NineMonths,
            Self::OneYear,
        ]
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
