//! Parsing des enveloppes SOAP de réponse

use super::{SoapBody, SoapEnvelope, SoapHeader};
use std::io::BufReader;
use xmltree::Element;

/// Erreur de parsing SOAP
#[derive(Debug, thiserror::Error)]
pub enum SoapParseError {
    #[error("XML parse error: {0}")]
    XmlError(#[from] xmltree::ParseError),

    #[error("Missing SOAP Envelope")]
    MissingEnvelope,

    #[error("Missing SOAP Body")]
    MissingBody,
}

/// Parse une enveloppe SOAP complète
///
/// Seul le suffixe des noms est vérifié : `s:Envelope`, `soap-env:Envelope`
/// ou `Envelope` sont tous acceptés.
pub fn parse_soap_envelope(xml: &[u8]) -> Result<SoapEnvelope, SoapParseError> {
    let reader = BufReader::new(xml);
    let root = Element::parse(reader)?;

    if !root.name.ends_with("Envelope") {
        return Err(SoapParseError::MissingEnvelope);
    }

    let mut header = None;
    let mut body = None;
    for child in root.children.iter().filter_map(|n| n.as_element()) {
        if child.name.ends_with("Header") && header.is_none() {
            header = Some(SoapHeader {
                content: child.clone(),
            });
        } else if child.name.ends_with("Body") && body.is_none() {
            body = Some(SoapBody {
                content: child.clone(),
            });
        }
    }

    let body = body.ok_or(SoapParseError::MissingBody)?;

    Ok(SoapEnvelope { header, body })
}
