//! Static display-string tables, one per locale.

use crate::locale::Locale;
use steamstats_common::SeriesMetric;
use tracing::debug;

/// English month names as they appear at the start of period labels.
pub const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display strings of one language.
///
/// Title templates use `{game}`, `{year}`, `{metric}` and `{count}` placeholders.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleTable {
    /// Locale this table belongs to.
    pub locale: Locale,
    /// Page heading.
    pub page_title: &'static str,
    /// Label of the game selector.
    pub game_select: &'static str,
    /// Label of the year selector.
    pub year_select: &'static str,
    /// Average players axis and legend label.
    pub avg_players: &'static str,
    /// Peak players axis and legend label.
    pub peak_players: &'static str,
    /// Label of the language selector.
    pub language: &'static str,
    /// X axis label.
    pub month: &'static str,
    /// Month tick labels, January first.
    pub months: [&'static str; 12],
    avg_players_title: &'static str,
    peak_players_title: &'static str,
    count_words: &'static [&'static str],
    line_chart_title: &'static str,
    bar_chart_title: &'static str,
}

pub(crate) static ENGLISH: LocaleTable = LocaleTable {
    locale: Locale::English,
    page_title: "Steam Player Statistics",
    game_select: "Select a game:",
    year_select: "Year:",
    avg_players: "Average Players",
    peak_players: "Peak Players",
    language: "Language",
    month: "Month",
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
    ],
    avg_players_title: "Average players",
    peak_players_title: "Peak players",
    count_words: &[],
    line_chart_title: "{metric} for {game} in {year}",
    bar_chart_title: "{year} Average players for the top {count} games",
};

pub(crate) static CHINESE: LocaleTable = LocaleTable {
    locale: Locale::Chinese,
    page_title: "Steam 玩家统计数据",
    game_select: "游戏选择：",
    year_select: "年:",
    avg_players: "平均玩家",
    peak_players: "峰值玩家",
    language: "语言",
    month: "月",
    months: [
        "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
        "十二月",
    ],
    avg_players_title: "平均玩家",
    peak_players_title: "峰值玩家",
    count_words: &[
        "零", "一", "二", "三", "四", "五", "六", "七", "八", "九", "十",
    ],
    line_chart_title: "{year}里 {game} 的{metric}",
    bar_chart_title: "{year} 前{count}名游戏的平均玩家",
};

pub(crate) static FRENCH: LocaleTable = LocaleTable {
    locale: Locale::French,
    page_title: "Steam Player Statistics",
    game_select: "Sélectionnez un jeu：",
    year_select: "Année:",
    avg_players: "Joueurs Moyens",
    peak_players: "Joueurs Max",
    language: "Langue",
    month: "Mois",
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
    ],
    avg_players_title: "Joueurs moyens",
    peak_players_title: "Joueurs max",
    count_words: &[
        "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
    ],
    line_chart_title: "{metric} pour {game} en {year}",
    bar_chart_title: "Moyenne des joueurs des {count} meilleurs jeux en {year}",
};

/// Table for `code`, or the English table when the code is not supported.
pub fn locale_table(code: &str) -> &'static LocaleTable {
    Locale::from_code(code).map_or_else(
        || {
            debug!("Unsupported language code '{}', falling back to English", code);
            Locale::default().table()
        },
        Locale::table,
    )
}

impl LocaleTable {
    /// Axis/legend label of a series metric.
    pub const fn metric_label(&self, metric: SeriesMetric) -> &'static str {
        match metric {
            SeriesMetric::AvgPlayers => self.avg_players,
            SeriesMetric::PeakPlayers => self.peak_players,
        }
    }

    /// Metric phrase used inside chart titles.
    pub const fn metric_title(&self, metric: SeriesMetric) -> &'static str {
        match metric {
            SeriesMetric::AvgPlayers => self.avg_players_title,
            SeriesMetric::PeakPlayers => self.peak_players_title,
        }
    }

    /// `count` as written in titles; digits when the language has no word for it.
    pub fn count_text(&self, count: usize) -> String {
        self.count_words
            .get(count)
            .map_or_else(|| count.to_string(), |word| (*word).to_string())
    }

    /// Title of the single-game line chart.
    pub fn line_chart_title(&self, game: &str, year: &str, metric: SeriesMetric) -> String {
        self.line_chart_title
            .replace("{metric}", self.metric_title(metric))
            .replace("{game}", game)
            .replace("{year}", year)
    }

    /// Title of the comparison bar chart.
    pub fn bar_chart_title(&self, year: &str, game_count: usize) -> String {
        self.bar_chart_title
            .replace("{year}", year)
            .replace("{count}", &self.count_text(game_count))
    }

    /// Localised abbreviation of the month word that starts `period_label`.
    ///
    /// Labels that do not start with an English month name are returned unchanged.
    pub fn month_tick<'a>(&self, period_label: &'a str) -> &'a str {
        let month_word = period_label.split_whitespace().next().unwrap_or_default();
        ENGLISH_MONTHS
            .iter()
            .position(|name| *name == month_word)
            .map_or(period_label, |index| self.months[index])
    }
}
