//! Interactive prompts shared by the commands.
//!
//! Thin wrappers around `dialoguer` with the colorful theme, so that every
//! command asks for dates, durations and selections the same way.

use crate::libs::formatter::{format_hours, parse_date, parse_duration};
use crate::libs::messages::Message;
use crate::libs::period::{Direction, PeriodKind};
use crate::msg_info;
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

/// Asks for a `YYYY-MM-DD` date, offering `default`.
pub fn date(prompt: Message, default: NaiveDate) -> Result<NaiveDate> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.format("%Y-%m-%d").to_string())
        .validate_with(move |input: &String| -> Result<(), String> {
            parse_date(input, default)
                .map(|_| ())
                .map_err(|e| Message::InvalidDate(e.to_string()).to_string())
        })
        .interact_text()?;

    Ok(parse_date(&input, default)?)
}

/// Asks for an `HH:MM` duration and returns decimal hours.
pub fn duration(default: Option<f64>) -> Result<f64> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(Message::PromptTime.to_string());
    if let Some(hours) = default {
        input = input.default(format_hours(hours));
    }
    let value = input
        .validate_with(|input: &String| -> Result<(), String> {
            parse_duration(input)
                .map(|_| ())
                .map_err(|e| Message::InvalidDuration(e.to_string()).to_string())
        })
        .interact_text()?;

    Ok(parse_duration(&value)?)
}

/// Asks for free text; empty input is allowed.
pub fn text(prompt: Message, default: &str) -> Result<String> {
    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(value)
}

pub fn select<T: ToString>(prompt: Message, items: &[T], default: usize) -> Result<usize> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(items)
        .default(default)
        .interact()?;

    Ok(selection)
}

pub fn multi_select<T: ToString>(prompt: Message, items: &[T]) -> Result<Vec<usize>> {
    let selection = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(items)
        .interact()?;

    Ok(selection)
}

pub fn confirm(prompt: Message) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?;

    Ok(confirmed)
}

/// Offers to keep `date` or enter another one.
pub fn pick_date(date: NaiveDate) -> Result<NaiveDate> {
    msg_info!(Message::UsingDefaultDate(date.format("%Y-%m-%d").to_string()));
    let options = [Message::OptionUseDate, Message::OptionEnterDate];
    match select(Message::PromptSelectOption, &options, 0)? {
        0 => Ok(date),
        _ => self::date(Message::PromptEnterDate, date),
    }
}

/// Asks whether to move to the previous or next period, or stop.
///
/// Returns `None` when the user picks exit or dismisses the prompt.
pub fn navigation(kind: PeriodKind) -> Result<Option<Direction>> {
    let options = [Message::OptionPrevious(kind), Message::OptionNext(kind), Message::OptionExit];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNavigation.to_string())
        .items(&options)
        .default(2)
        .interact_opt()?;

    Ok(match selection {
        Some(0) => Some(Direction::Previous),
        Some(1) => Some(Direction::Next),
        _ => None,
    })
}
