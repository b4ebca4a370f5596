use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use recordsmith_core::{FieldConstraints, FieldDescriptor, FieldKind, FieldValue};

use crate::config::GeneratorConfig;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const EMAIL_LOCAL_LEN: usize = 5;
const MAX_INTEGER_DIGITS: u32 = 18;
const MAX_DECIMAL_DIGITS: u32 = 15;
const MAX_SCALE: u32 = 9;
const PERCENT_MAX: f64 = 100.0;

/// Settings the synthesizer reads from the engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisSettings {
    pub email_domain: String,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

impl From<&GeneratorConfig> for SynthesisSettings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            email_domain: config.email_domain.clone(),
        }
    }
}

/// Synthesize a value for a field descriptor.
pub fn synthesize_field(
    field: &FieldDescriptor,
    literal: Option<&str>,
    settings: &SynthesisSettings,
    rng: &mut dyn RngCore,
) -> FieldValue {
    synthesize(
        field.kind,
        &field.constraints,
        &field.choices,
        literal,
        settings,
        rng,
    )
}

/// Produce a value for the given classification.
///
/// A literal is honoured instead of a random value. Relationship, identifier
/// and unknown kinds produce [`FieldValue::Null`]; relationships are resolved
/// by the engine and identifiers are assigned on insert.
pub fn synthesize(
    kind: FieldKind,
    constraints: &FieldConstraints,
    choices: &[String],
    literal: Option<&str>,
    settings: &SynthesisSettings,
    rng: &mut dyn RngCore,
) -> FieldValue {
    if let Some(literal) = literal {
        return coerce_literal(kind, literal);
    }

    match kind {
        FieldKind::Boolean => FieldValue::Bool(rng.random_bool(0.5)),
        FieldKind::Integer => random_integer(constraints, rng),
        FieldKind::Decimal | FieldKind::Currency => random_decimal(constraints, rng),
        FieldKind::Percent => random_percent(constraints, rng),
        FieldKind::Date => FieldValue::Date(Utc::now().date_naive()),
        FieldKind::Datetime => FieldValue::DateTime(Utc::now()),
        FieldKind::Time => FieldValue::Time(fixed_time()),
        FieldKind::ShortText | FieldKind::LongText | FieldKind::MaskedText => {
            FieldValue::Text(random_letters(constraints.length as usize, rng))
        }
        FieldKind::Email => FieldValue::Text(random_email(&settings.email_domain, rng)),
        FieldKind::Phone => FieldValue::Text(random_phone(rng)),
        FieldKind::Url => FieldValue::Text(fixed_url(&settings.email_domain)),
        FieldKind::SingleSelect | FieldKind::MultiSelect => pick_choice(choices, rng),
        FieldKind::Relationship | FieldKind::Identifier | FieldKind::Unknown => FieldValue::Null,
    }
}

/// Convert a caller literal into the field's natural value type.
///
/// Literals that do not parse for the field's kind are kept as text.
pub fn coerce_literal(kind: FieldKind, literal: &str) -> FieldValue {
    let parsed = match kind {
        FieldKind::Boolean => match literal.to_ascii_lowercase().as_str() {
            "true" => Some(FieldValue::Bool(true)),
            "false" => Some(FieldValue::Bool(false)),
            _ => None,
        },
        FieldKind::Integer => literal.trim().parse().ok().map(FieldValue::Int),
        FieldKind::Decimal | FieldKind::Currency | FieldKind::Percent => {
            literal
                .trim()
                .parse()
                .ok()
                .filter(|value: &f64| value.is_finite())
                .map(FieldValue::Decimal)
        }
        FieldKind::Date => NaiveDate::parse_from_str(literal.trim(), "%Y-%m-%d")
            .ok()
            .map(FieldValue::Date),
        FieldKind::Datetime => DateTime::parse_from_rfc3339(literal.trim())
            .ok()
            .map(|value| FieldValue::DateTime(value.with_timezone(&Utc))),
        FieldKind::Time => NaiveTime::parse_from_str(literal.trim(), "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(literal.trim(), "%H:%M"))
            .ok()
            .map(FieldValue::Time),
        FieldKind::Relationship | FieldKind::Identifier => Some(FieldValue::Id(literal.to_string())),
        _ => None,
    };

    parsed.unwrap_or_else(|| FieldValue::Text(literal.to_string()))
}

fn random_integer(constraints: &FieldConstraints, rng: &mut dyn RngCore) -> FieldValue {
    let digits = constraints.digits.clamp(1, MAX_INTEGER_DIGITS);
    let upper = 10_i64.pow(digits);
    FieldValue::Int(rng.random_range(0..upper))
}

fn random_decimal(constraints: &FieldConstraints, rng: &mut dyn RngCore) -> FieldValue {
    let digits = constraints.integer_digits().min(MAX_DECIMAL_DIGITS);
    let upper = 10_i64.pow(digits);
    let whole = rng.random_range(0..upper) as f64;
    let fraction = truncate_to_scale(rng.random::<f64>(), constraints.scale);
    FieldValue::Decimal(whole + fraction)
}

fn random_percent(constraints: &FieldConstraints, rng: &mut dyn RngCore) -> FieldValue {
    let value = rng.random_range(0.0..PERCENT_MAX);
    FieldValue::Decimal(truncate_to_scale(value, constraints.scale))
}

// Truncation keeps the value below the bound it was sampled under.
fn truncate_to_scale(value: f64, scale: u32) -> f64 {
    let factor = 10_f64.powi(scale.min(MAX_SCALE) as i32);
    (value * factor).floor() / factor
}

fn random_letters(len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

fn random_email(domain: &str, rng: &mut dyn RngCore) -> String {
    let user = random_letters(EMAIL_LOCAL_LEN, rng);
    format!("{user}@{domain}")
}

fn random_phone(rng: &mut dyn RngCore) -> String {
    let area = rng.random_range(0..1000);
    let exchange = rng.random_range(0..1000);
    let line = rng.random_range(0..10000);
    format!("{area:03}-{exchange:03}-{line:04}")
}

fn fixed_url(domain: &str) -> String {
    format!("https://www.{domain}")
}

fn fixed_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn pick_choice(choices: &[String], rng: &mut dyn RngCore) -> FieldValue {
    choices
        .choose(rng)
        .map(|choice| FieldValue::Text(choice.clone()))
        .unwrap_or(FieldValue::Null)
}
