use super::error::ParseError;
use super::schedule::{DaySchedule, WeeklySchedule};
use super::time_span::TimeSpan;
use super::weekday::{expand_weekday_range, resolve_weekday, Weekday};

/// Number of trailing whitespace tokens that make up the time span of a
/// day-group written in the spaced form, e.g. `6:45 am - 8:45 am`.
pub const TIME_SPAN_TOKENS: usize = 5;

/// Parses a full opening-hours string such as
/// `Mon, Weds 11:45 am - 4:45 pm / Tues 7:45 am - 2 am`.
///
/// Day-groups are separated by `/`. When several groups name the same
/// weekday the last one wins. Any malformed group fails the whole call.
pub fn parse_schedule(text: &str) -> Result<WeeklySchedule, ParseError> {
    let mut days = Vec::new();

    for group in text.split('/').map(str::trim) {
        let (weekday_spec, span) = split_day_group(group)?;
        let span = TimeSpan::parse(&span)?;

        for weekday in parse_weekday_spec(&weekday_spec)? {
            days.push(DaySchedule::new(weekday, span));
        }
    }

    tracing::trace!(input = text, entries = days.len(), "parsed opening hours");
    Ok(days.into_iter().collect())
}

/// Splits one day-group into its weekday-spec and its time span, each with
/// internal whitespace removed.
///
/// The time span is positional: the last five tokens of the group. A group
/// whose final token is already a complete `open-close` span (`11am-10pm`)
/// uses that token alone.
pub fn split_day_group(group: &str) -> Result<(String, String), ParseError> {
    let malformed = |reason: String| ParseError::MalformedScheduleGroup {
        group: group.to_string(),
        reason,
    };

    let tokens: Vec<&str> = group.split_whitespace().collect();
    let span_len = match tokens.last() {
        Some(last) if is_compact_span(last) => 1,
        _ if tokens.len() < TIME_SPAN_TOKENS => {
            return Err(malformed(format!(
                "expected at least {} tokens, found {}",
                TIME_SPAN_TOKENS,
                tokens.len()
            )));
        }
        _ => TIME_SPAN_TOKENS,
    };

    let (weekday_tokens, span_tokens) = tokens.split_at(tokens.len() - span_len);
    if weekday_tokens.is_empty() {
        return Err(malformed("missing weekday list".to_string()));
    }

    Ok((weekday_tokens.concat(), span_tokens.concat()))
}

fn is_compact_span(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit()) && token.contains('-')
}

/// Resolves a comma-separated weekday-spec such as `Mon,Wed-Sun` into the
/// weekdays it names, in source order.
pub fn parse_weekday_spec(spec: &str) -> Result<Vec<Weekday>, ParseError> {
    let mut weekdays = Vec::new();

    for item in spec.split(',') {
        match item.split_once('-') {
            Some((start, end)) => {
                let start = resolve_weekday(start)?;
                let end = resolve_weekday(end)?;
                weekdays.extend(expand_weekday_range(start, end));
            }
            None => weekdays.push(resolve_weekday(item)?),
        }
    }

    Ok(weekdays)
}
