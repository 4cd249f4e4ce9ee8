//! Reading and writing of ups.conf style device blocks:
//!
//! ```text
//! [ups1]
//! 	driver = "snmp-ups"
//! 	port = "10.0.0.5"
//! ```

use std::fmt;

use thiserror::Error;

use super::{fields, DeviceConfiguration, DeviceConfigurations};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfParseError {
    #[error("line {0}: field outside of a device section")]
    OrphanField(usize),
    #[error("line {0}: unterminated section header")]
    UnterminatedSection(usize),
    #[error("line {0}: empty section name")]
    EmptySection(usize),
    #[error("line {0}: empty field name")]
    EmptyKey(usize),
    #[error("line {0}: unterminated quoted value")]
    UnterminatedQuote(usize),
}

pub fn parse_configuration_file(text: &str) -> Result<DeviceConfigurations, ConfParseError> {
    let mut configs = DeviceConfigurations::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or(ConfParseError::UnterminatedSection(lineno))?
                .trim();
            if name.is_empty() {
                return Err(ConfParseError::EmptySection(lineno));
            }
            let mut config = DeviceConfiguration::new();
            config.set(fields::NAME, name);
            configs.push(config);
            continue;
        }

        let config = configs
            .last_mut()
            .ok_or(ConfParseError::OrphanField(lineno))?;
        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), parse_value(value.trim(), lineno)?),
            // Bare flag, e.g. "nolock"
            None => (line, String::new()),
        };
        if key.is_empty() {
            return Err(ConfParseError::EmptyKey(lineno));
        }
        config.set(key, value);
    }

    Ok(configs)
}

fn parse_value(raw: &str, lineno: usize) -> Result<String, ConfParseError> {
    let Some(quoted) = raw.strip_prefix('"') else {
        // Unquoted values end at a comment
        let value = raw.split('#').next().unwrap_or_default();
        return Ok(value.trim_end().to_string());
    };

    let mut value = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Ok(value),
            '\\' => match chars.next() {
                Some(escaped) => value.push(escaped),
                None => break,
            },
            other => value.push(other),
        }
    }
    Err(ConfParseError::UnterminatedQuote(lineno))
}

pub(super) fn write_configuration(
    f: &mut fmt::Formatter<'_>,
    config: &DeviceConfiguration,
) -> fmt::Result {
    writeln!(f, "[{}]", config.name().unwrap_or_default())?;
    for (key, value) in config.iter().filter(|(key, _)| *key != fields::NAME) {
        writeln!(f, "\t{} = \"{}\"", key, escape(value))?;
    }
    Ok(())
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
