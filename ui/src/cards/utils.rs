use crate::core::{
    format,
    period::Period,
    source::{SourceError, TimeframeRecord},
};

/// Text content of one rendered card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub title: String,
    pub tracked: String,
    pub previous: String,
}

/// Assembles the strings a card shows for the selected period. Pure; the
/// previous-period label is precomputed by the caller so every card in a
/// pass shares the same one.
pub fn card_content(
    record: &TimeframeRecord,
    period: Period,
    previous_label: &str,
) -> Result<CardContent, SourceError> {
    let figures = record
        .timeframes
        .get(period)
        .ok_or_else(|| SourceError::MissingPeriodData {
            title: record.title.clone(),
            period,
        })?;

    Ok(CardContent {
        title: record.title.clone(),
        tracked: format::format_hours(figures.current),
        previous: format::format_previous(previous_label, figures.previous),
    })
}

/// Modifier-class slug for a record title ("Self Care" -> "self-care").
pub(crate) fn card_slug(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
