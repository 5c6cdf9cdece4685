use serde::{Deserialize, Serialize};

/// How the investor expects to react to a sharp drawdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "I'd panic and sell everything")]
    Panic,
    #[serde(rename = "I'd be worried but wait it out")]
    WaitItOut,
    #[serde(rename = "I'd stay calm and maybe buy more")]
    BuyMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "A few weeks")]
    Weeks,
    #[serde(rename = "A few months")]
    Months,
    #[serde(rename = "A few years")]
    Years,
    #[serde(rename = "Long-term (even pass down to kids)")]
    LongTerm,
}

/// Token themes the investor is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Eth,
    Defi,
    Stablecoin,
    L2,
    Rwa,
    Meme,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exclusion {
    Volatile,
    Meme,
    Illiquid,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "I'm new")]
    New,
    #[serde(rename = "I've dabbled")]
    Dabbled,
    #[serde(rename = "I'm a pro")]
    Pro,
}

/// Investor profile posted to `/submit_survey`.
///
/// Serialized field names and answer strings match what the backend accepts.
/// Any combination of answers is valid, including an empty theme list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySubmission {
    pub risk_level: RiskLevel,
    pub horizon: Horizon,
    pub themes: Vec<Theme>,
    #[serde(default)]
    pub exclusions: Vec<Exclusion>,
    pub experience: Experience,
    #[serde(default)]
    pub notes: String,
}

