//! Static vocabularies sampled by the generators.
//!
//! Each enum serializes to the exact spelling downstream readers expect and
//! exposes its full value set as `ALL`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Movie,
    Series,
    Documentary,
    MusicVideo,
    ShortFilm,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Movie,
        ContentType::Series,
        ContentType::Documentary,
        ContentType::MusicVideo,
        ContentType::ShortFilm,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    ScienceFiction,
    Horror,
    Thriller,
    Romance,
    Animation,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::ScienceFiction,
        Genre::Horror,
        Genre::Thriller,
        Genre::Romance,
        Genre::Animation,
    ];
}

/// Audience rating of a catalog entry (film and TV scales).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
    #[serde(rename = "TV-Y")]
    TvY,
    #[serde(rename = "TV-G")]
    TvG,
    #[serde(rename = "TV-PG")]
    TvPg,
    #[serde(rename = "TV-14")]
    Tv14,
    #[serde(rename = "TV-MA")]
    TvMa,
}

impl Rating {
    pub const ALL: [Rating; 10] = [
        Rating::G,
        Rating::Pg,
        Rating::Pg13,
        Rating::R,
        Rating::Nc17,
        Rating::TvY,
        Rating::TvG,
        Rating::TvPg,
        Rating::Tv14,
        Rating::TvMa,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Web,
    MobileIos,
    MobileAndroid,
    SmartTv,
    GamingConsole,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Web,
        Platform::MobileIos,
        Platform::MobileAndroid,
        Platform::SmartTv,
        Platform::GamingConsole,
    ];
}

/// Viewer location as a two-letter country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    Us,
    Uk,
    Ca,
    Au,
    Fr,
    De,
    Jp,
    Br,
    In,
    Mx,
}

impl Country {
    pub const ALL: [Country; 10] = [
        Country::Us,
        Country::Uk,
        Country::Ca,
        Country::Au,
        Country::Fr,
        Country::De,
        Country::Jp,
        Country::Br,
        Country::In,
        Country::Mx,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    Ja,
    Ko,
    Hi,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Ja,
        Language::Ko,
        Language::Hi,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Trending,
    Popular,
    Exclusive,
    AwardWinning,
    NewRelease,
}

impl Tag {
    pub const ALL: [Tag; 5] = [
        Tag::Trending,
        Tag::Popular,
        Tag::Exclusive,
        Tag::AwardWinning,
        Tag::NewRelease,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    #[serde(rename = "TV")]
    Tv,
    Phone,
    Tablet,
    Computer,
    Console,
}

impl DeviceType {
    pub const ALL: [DeviceType; 5] = [
        DeviceType::Tv,
        DeviceType::Phone,
        DeviceType::Tablet,
        DeviceType::Computer,
        DeviceType::Console,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamingQuality {
    #[serde(rename = "SD")]
    Sd,
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "FHD")]
    Fhd,
    #[serde(rename = "4K")]
    Uhd4k,
}

impl StreamingQuality {
    pub const ALL: [StreamingQuality; 4] = [
        StreamingQuality::Sd,
        StreamingQuality::Hd,
        StreamingQuality::Fhd,
        StreamingQuality::Uhd4k,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementType {
    Like,
    Rate,
    Share,
    Comment,
    AddToList,
}

impl EngagementType {
    pub const ALL: [EngagementType; 5] = [
        EngagementType::Like,
        EngagementType::Rate,
        EngagementType::Share,
        EngagementType::Comment,
        EngagementType::AddToList,
    ];
}
