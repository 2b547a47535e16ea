//! Enumerated generation options.
//!
//! Each option has three spellings:
//! - the wire value sent to the model and persisted in history (`Display`, `AsRef<str>`)
//! - a kebab-case name for the command line ([`cli_name`](Language::cli_name))
//! - a bilingual display label ([`label`](Language::label))
//!
//! `FromStr` accepts either the wire value or the kebab-case name, ignoring case.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

fn parse_option<T>(kind: &str, s: &str, cli_name: fn(&T) -> &'static str) -> Result<T, String>
where
    T: IntoEnumIterator + AsRef<str>,
{
    let needle = s.trim();
    T::iter()
        .find(|v| {
            AsRef::<str>::as_ref(v).eq_ignore_ascii_case(needle)
                || cli_name(v).eq_ignore_ascii_case(needle)
        })
        .ok_or_else(|| format!("Unknown {}: {}", kind, s))
}

/// Language every generated natural-language field must be written in.
///
/// # Examples
///
/// ```
/// use selah_core::Language;
///
/// let lang: Language = "english".parse().unwrap();
/// assert_eq!(lang, Language::English);
/// assert_eq!(lang.to_string(), "English");
/// assert_eq!(Language::default(), Language::Korean);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum Language {
    /// 한국어
    #[default]
    Korean,
    /// English
    English,
    /// Español
    Spanish,
    /// Français
    French,
    /// Deutsch
    German,
    /// 日本語
    Japanese,
    /// 中文
    Chinese,
    /// Русский
    Russian,
    /// العربية
    Arabic,
}

impl Language {
    /// Kebab-case command line name.
    pub fn cli_name(&self) -> &'static str {
        match self {
            Language::Korean => "korean",
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
            Language::Japanese => "japanese",
            Language::Chinese => "chinese",
            Language::Russian => "russian",
            Language::Arabic => "arabic",
        }
    }

    /// Display label shown in option lists.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Korean => "한국어 (Korean)",
            Language::English => "English",
            Language::Spanish => "Español (Spanish)",
            Language::French => "Français (French)",
            Language::German => "Deutsch (German)",
            Language::Japanese => "日本語 (Japanese)",
            Language::Chinese => "中文 (Chinese)",
            Language::Russian => "Русский (Russian)",
            Language::Arabic => "العربية (Arabic)",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("language", s, Language::cli_name)
    }
}

/// Named cinematic look applied to the whole video.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum VisualStyle {
    /// Photoreal live-action look
    #[default]
    #[serde(rename = "Cinematic Realism")]
    #[strum(to_string = "Cinematic Realism")]
    CinematicRealism,
    /// Large-scale animated feature look
    #[serde(rename = "Epic Animation")]
    #[strum(to_string = "Epic Animation")]
    EpicAnimation,
    /// Moving oil-painting look
    #[serde(rename = "Painterly Style")]
    #[strum(to_string = "Painterly Style")]
    PainterlyStyle,
    /// Observational documentary look
    #[serde(rename = "Documentary Style")]
    #[strum(to_string = "Documentary Style")]
    DocumentaryStyle,
    /// Aged film stock look
    #[serde(rename = "Vintage Film Look")]
    #[strum(to_string = "Vintage Film Look")]
    VintageFilmLook,
    /// Science fiction production design
    #[serde(rename = "Science Fiction")]
    #[strum(to_string = "Science Fiction")]
    ScienceFiction,
    /// Fantasy illustration look
    #[serde(rename = "Fantasy Art")]
    #[strum(to_string = "Fantasy Art")]
    FantasyArt,
}

impl VisualStyle {
    /// Kebab-case command line name.
    pub fn cli_name(&self) -> &'static str {
        match self {
            VisualStyle::CinematicRealism => "cinematic-realism",
            VisualStyle::EpicAnimation => "epic-animation",
            VisualStyle::PainterlyStyle => "painterly",
            VisualStyle::DocumentaryStyle => "documentary",
            VisualStyle::VintageFilmLook => "vintage-film",
            VisualStyle::ScienceFiction => "science-fiction",
            VisualStyle::FantasyArt => "fantasy-art",
        }
    }

    /// Display label shown in option lists.
    pub fn label(&self) -> &'static str {
        match self {
            VisualStyle::CinematicRealism => "영화적 사실주의 (Cinematic Realism)",
            VisualStyle::EpicAnimation => "에픽 애니메이션 (Epic Animation)",
            VisualStyle::PainterlyStyle => "회화적 스타일 (Painterly Style)",
            VisualStyle::DocumentaryStyle => "다큐멘터리 스타일 (Documentary Style)",
            VisualStyle::VintageFilmLook => "빈티지 필름룩 (Vintage Film Look)",
            VisualStyle::ScienceFiction => "공상 과학 (Science Fiction)",
            VisualStyle::FantasyArt => "판타지 아트 (Fantasy Art)",
        }
    }
}

impl std::str::FromStr for VisualStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("visual style", s, VisualStyle::cli_name)
    }
}

/// Historical setting the scenes are staged in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum HistoricalEra {
    /// Let the model choose
    #[default]
    #[serde(rename = "Filmmaker's Interpretation")]
    #[strum(to_string = "Filmmaker's Interpretation")]
    FilmmakersInterpretation,
    /// Creation, the Flood
    #[serde(rename = "Primeval History (e.g., Creation, Flood)")]
    #[strum(to_string = "Primeval History (e.g., Creation, Flood)")]
    PrimevalHistory,
    /// Abraham, Moses
    #[serde(rename = "Patriarchal Era (e.g., Abraham, Moses)")]
    #[strum(to_string = "Patriarchal Era (e.g., Abraham, Moses)")]
    PatriarchalEra,
    /// David, Solomon
    #[serde(rename = "Old Testament Kingdom Era (e.g., David, Solomon)")]
    #[strum(to_string = "Old Testament Kingdom Era (e.g., David, Solomon)")]
    KingdomEra,
    /// New Testament period
    #[serde(rename = "Second Temple & Roman Empire (New Testament)")]
    #[strum(to_string = "Second Temple & Roman Empire (New Testament)")]
    SecondTemple,
    /// Early church
    #[serde(rename = "Early Church & Byzantine Era")]
    #[strum(to_string = "Early Church & Byzantine Era")]
    EarlyChurch,
    /// Medieval Europe
    #[serde(rename = "Medieval European Setting")]
    #[strum(to_string = "Medieval European Setting")]
    Medieval,
    /// Renaissance and Reformation
    #[serde(rename = "Renaissance & Reformation Era")]
    #[strum(to_string = "Renaissance & Reformation Era")]
    Renaissance,
    /// Victorian era
    #[serde(rename = "Victorian Era Setting")]
    #[strum(to_string = "Victorian Era Setting")]
    Victorian,
    /// Present day
    #[serde(rename = "Modern Day Reinterpretation")]
    #[strum(to_string = "Modern Day Reinterpretation")]
    ModernDay,
    /// Near future
    #[serde(rename = "Near Future Sci-Fi")]
    #[strum(to_string = "Near Future Sci-Fi")]
    NearFuture,
    /// Dystopian future
    #[serde(rename = "Dystopian / Cyberpunk Future")]
    #[strum(to_string = "Dystopian / Cyberpunk Future")]
    Cyberpunk,
}

impl HistoricalEra {
    /// Kebab-case command line name.
    pub fn cli_name(&self) -> &'static str {
        match self {
            HistoricalEra::FilmmakersInterpretation => "filmmaker",
            HistoricalEra::PrimevalHistory => "primeval",
            HistoricalEra::PatriarchalEra => "patriarchal",
            HistoricalEra::KingdomEra => "kingdom",
            HistoricalEra::SecondTemple => "second-temple",
            HistoricalEra::EarlyChurch => "early-church",
            HistoricalEra::Medieval => "medieval",
            HistoricalEra::Renaissance => "renaissance",
            HistoricalEra::Victorian => "victorian",
            HistoricalEra::ModernDay => "modern",
            HistoricalEra::NearFuture => "near-future",
            HistoricalEra::Cyberpunk => "cyberpunk",
        }
    }

    /// Display label shown in option lists.
    pub fn label(&self) -> &'static str {
        match self {
            HistoricalEra::FilmmakersInterpretation => {
                "감독의 창의적 해석 (Filmmaker's Interpretation)"
            }
            HistoricalEra::PrimevalHistory => "태초 시대 (창조, 홍수 등)",
            HistoricalEra::PatriarchalEra => "족장 시대 (아브라함, 모세 등)",
            HistoricalEra::KingdomEra => "구약 왕국 시대 (다윗, 솔로몬 등)",
            HistoricalEra::SecondTemple => "신약 시대 (제2성전, 로마 제국)",
            HistoricalEra::EarlyChurch => "초대 교회 및 비잔틴 시대",
            HistoricalEra::Medieval => "중세 유럽 배경",
            HistoricalEra::Renaissance => "르네상스 및 종교개혁 시대",
            HistoricalEra::Victorian => "빅토리아 시대 배경",
            HistoricalEra::ModernDay => "현대적 재해석",
            HistoricalEra::NearFuture => "가까운 미래 (SF)",
            HistoricalEra::Cyberpunk => "디스토피아 / 사이버펑크 미래",
        }
    }
}

impl std::str::FromStr for HistoricalEra {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("historical era", s, HistoricalEra::cli_name)
    }
}
