use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Country {
    UnitedStates,
    Canada,
}

/// Jurisdictions accepted on a trip ledger: the 58 IFTA members (48
/// contiguous U.S. states and 10 Canadian provinces) plus the District of
/// Columbia.
///
/// DC is not an IFTA member. It is accepted so that ledgers which log DC
/// miles and purchases on their own line still parse. Its tax comes from the
/// rate table like any other code, and removing its rate makes it show up as
/// a `NoFuelTaxRate` advisory rather than failing the report.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
pub enum Jurisdiction {
    // United States.
    AL,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    // Not an IFTA member; see above.
    DC,
    FL,
    GA,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,

    // Canada.
    AB,
    BC,
    MB,
    NB,
    NL,
    NS,
    ON,
    PE,
    QC,
    SK,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 59] = [
        Jurisdiction::AL,
        Jurisdiction::AZ,
        Jurisdiction::AR,
        Jurisdiction::CA,
        Jurisdiction::CO,
        Jurisdiction::CT,
        Jurisdiction::DE,
        Jurisdiction::DC,
        Jurisdiction::FL,
        Jurisdiction::GA,
        Jurisdiction::ID,
        Jurisdiction::IL,
        Jurisdiction::IN,
        Jurisdiction::IA,
        Jurisdiction::KS,
        Jurisdiction::KY,
        Jurisdiction::LA,
        Jurisdiction::ME,
        Jurisdiction::MD,
        Jurisdiction::MA,
        Jurisdiction::MI,
        Jurisdiction::MN,
        Jurisdiction::MS,
        Jurisdiction::MO,
        Jurisdiction::MT,
        Jurisdiction::NE,
        Jurisdiction::NV,
        Jurisdiction::NH,
        Jurisdiction::NJ,
        Jurisdiction::NM,
        Jurisdiction::NY,
        Jurisdiction::NC,
        Jurisdiction::ND,
        Jurisdiction::OH,
        Jurisdiction::OK,
        Jurisdiction::OR,
        Jurisdiction::PA,
        Jurisdiction::RI,
        Jurisdiction::SC,
        Jurisdiction::SD,
        Jurisdiction::TN,
        Jurisdiction::TX,
        Jurisdiction::UT,
        Jurisdiction::VT,
        Jurisdiction::VA,
        Jurisdiction::WA,
        Jurisdiction::WV,
        Jurisdiction::WI,
        Jurisdiction::WY,
        Jurisdiction::AB,
        Jurisdiction::BC,
        Jurisdiction::MB,
        Jurisdiction::NB,
        Jurisdiction::NL,
        Jurisdiction::NS,
        Jurisdiction::ON,
        Jurisdiction::PE,
        Jurisdiction::QC,
        Jurisdiction::SK,
    ];

    fn info(&self) -> (&'static str, &'static str, Country) {
        use Country::*;
        match self {
            Jurisdiction::AL => ("AL", "Alabama", UnitedStates),
            Jurisdiction::AZ => ("AZ", "Arizona", UnitedStates),
            Jurisdiction::AR => ("AR", "Arkansas", UnitedStates),
            Jurisdiction::CA => ("CA", "California", UnitedStates),
            Jurisdiction::CO => ("CO", "Colorado", UnitedStates),
            Jurisdiction::CT => ("CT", "Connecticut", UnitedStates),
            Jurisdiction::DE => ("DE", "Delaware", UnitedStates),
            Jurisdiction::DC => ("DC", "District of Columbia", UnitedStates),
            Jurisdiction::FL => ("FL", "Florida", UnitedStates),
            Jurisdiction::GA => ("GA", "Georgia", UnitedStates),
            Jurisdiction::ID => ("ID", "Idaho", UnitedStates),
            Jurisdiction::IL => ("IL", "Illinois", UnitedStates),
            Jurisdiction::IN => ("IN", "Indiana", UnitedStates),
            Jurisdiction::IA => ("IA", "Iowa", UnitedStates),
            Jurisdiction::KS => ("KS", "Kansas", UnitedStates),
            Jurisdiction::KY => ("KY", "Kentucky", UnitedStates),
            Jurisdiction::LA => ("LA", "Louisiana", UnitedStates),
            Jurisdiction::ME => ("ME", "Maine", UnitedStates),
            Jurisdiction::MD => ("MD", "Maryland", UnitedStates),
            Jurisdiction::MA => ("MA", "Massachusetts", UnitedStates),
            Jurisdiction::MI => ("MI", "Michigan", UnitedStates),
            Jurisdiction::MN => ("MN", "Minnesota", UnitedStates),
            Jurisdiction::MS => ("MS", "Mississippi", UnitedStates),
            Jurisdiction::MO => ("MO", "Missouri", UnitedStates),
            Jurisdiction::MT => ("MT", "Montana", UnitedStates),
            Jurisdiction::NE => ("NE", "Nebraska", UnitedStates),
            Jurisdiction::NV => ("NV", "Nevada", UnitedStates),
            Jurisdiction::NH => ("NH", "New Hampshire", UnitedStates),
            Jurisdiction::NJ => ("NJ", "New Jersey", UnitedStates),
            Jurisdiction::NM => ("NM", "New Mexico", UnitedStates),
            Jurisdiction::NY => ("NY", "New York", UnitedStates),
            Jurisdiction::NC => ("NC", "North Carolina", UnitedStates),
            Jurisdiction::ND => ("ND", "North Dakota", UnitedStates),
            Jurisdiction::OH => ("OH", "Ohio", UnitedStates),
            Jurisdiction::OK => ("OK", "Oklahoma", UnitedStates),
            Jurisdiction::OR => ("OR", "Oregon", UnitedStates),
            Jurisdiction::PA => ("PA", "Pennsylvania", UnitedStates),
            Jurisdiction::RI => ("RI", "Rhode Island", UnitedStates),
            Jurisdiction::SC => ("SC", "South Carolina", UnitedStates),
            Jurisdiction::SD => ("SD", "South Dakota", UnitedStates),
            Jurisdiction::TN => ("TN", "Tennessee", UnitedStates),
            Jurisdiction::TX => ("TX", "Texas", UnitedStates),
            Jurisdiction::UT => ("UT", "Utah", UnitedStates),
            Jurisdiction::VT => ("VT", "Vermont", UnitedStates),
            Jurisdiction::VA => ("VA", "Virginia", UnitedStates),
            Jurisdiction::WA => ("WA", "Washington", UnitedStates),
            Jurisdiction::WV => ("WV", "West Virginia", UnitedStates),
            Jurisdiction::WI => ("WI", "Wisconsin", UnitedStates),
            Jurisdiction::WY => ("WY", "Wyoming", UnitedStates),
            Jurisdiction::AB => ("AB", "Alberta", Canada),
            Jurisdiction::BC => ("BC", "British Columbia", Canada),
            Jurisdiction::MB => ("MB", "Manitoba", Canada),
            Jurisdiction::NB => ("NB", "New Brunswick", Canada),
            Jurisdiction::NL => ("NL", "Newfoundland and Labrador", Canada),
            Jurisdiction::NS => ("NS", "Nova Scotia", Canada),
            Jurisdiction::ON => ("ON", "Ontario", Canada),
            Jurisdiction::PE => ("PE", "Prince Edward Island", Canada),
            Jurisdiction::QC => ("QC", "Quebec", Canada),
            Jurisdiction::SK => ("SK", "Saskatchewan", Canada),
        }
    }

    pub fn code(&self) -> &'static str {
        self.info().0
    }

    /// Human-readable name, used for display ordering.
    pub fn name(&self) -> &'static str {
        self.info().1
    }

    pub fn country(&self) -> Country {
        self.info().2
    }

    pub fn is_ifta_member(&self) -> bool {
        *self != Jurisdiction::DC
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownJurisdictionCode(pub String);

impl std::fmt::Display for UnknownJurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown jurisdiction code '{}'", self.0)
    }
}

impl std::error::Error for UnknownJurisdictionCode {}

impl FromStr for Jurisdiction {
    type Err = UnknownJurisdictionCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Jurisdiction::ALL
            .iter()
            .find(|j| j.code().eq_ignore_ascii_case(code))
            .copied()
            .ok_or_else(|| UnknownJurisdictionCode(code.to_string()))
    }
}
