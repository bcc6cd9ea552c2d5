//! Conversions de valeurs vers les formats attendus par la F2b

use crate::error::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Montant au format fixe F2b : point décimal, pas de séparateur de
/// milliers, quel que soit le locale d'entrée
///
/// ```
/// use f2bbilling::convert::format_money;
/// assert_eq!(format_money(1200.2, 2), "1200.20");
/// assert_eq!(format_money(0.0, 2), "0.00");
/// ```
pub fn format_money(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Date au format F2b : `YYYY-MM-DD`, ou `YYYY-MM-DDTHH:MM:SS` quand
/// l'heure est requise (séparateur `T` littéral, pas d'offset)
pub fn format_date(value: NaiveDateTime, with_time: bool) -> String {
    if with_time {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        value.format("%Y-%m-%d").to_string()
    }
}

/// Idem pour une date sans composante horaire
pub fn format_day(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Parse une date `YYYY-MM-DD HH:MM:SS`, ou `YYYY-MM-DD` (minuit)
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime);
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")?;
    Ok(date.and_time(NaiveTime::MIN))
}

/// Remplace le balisage `<br>` (toutes variantes) par des sauts de ligne
///
/// Les messages `log` de la F2b embarquent du HTML de présentation ;
/// l'appelant veut du texte brut.
pub fn br2nl(value: &str) -> String {
    static BR_TAG: OnceLock<Regex> = OnceLock::new();
    let re = BR_TAG.get_or_init(|| Regex::new(r"(?i)<br(\s*)?/?>").expect("static regex"));
    re.replace_all(value, "\n").into_owned()
}

/// Encodage s/n des indicateurs booléens du web service
pub fn bool_flag(value: bool) -> &'static str {
    if value { "s" } else { "n" }
}
