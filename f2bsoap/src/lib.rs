//! # f2bsoap - Plumbing SOAP pour le client F2b
//!
//! Couche SOAP minimale, sans aucune connaissance du métier F2b :
//!
//! - ✅ Modèle d'enveloppe ([`SoapEnvelope`], [`SoapHeader`], [`SoapBody`])
//! - ✅ Sérialisation d'un document avec prologue XML configurable
//!   (encodage et version déclarés par l'appelant)
//! - ✅ Parsing tolérant des enveloppes de réponse
//! - ✅ Navigation par suffixe de nom (les préfixes de namespace varient
//!   d'un serveur à l'autre)
//!
//! ## Example
//!
//! ```
//! use f2bsoap::{build_soap_document, parse_soap_envelope, DocumentConfig};
//! use xmltree::Element;
//!
//! let mut body = Element::new("m:Ping");
//! body.attributes
//!     .insert("xmlns:m".to_string(), "http://example.com/ping.xsd".to_string());
//!
//! let xml = build_soap_document(body, &DocumentConfig::default()).unwrap();
//! let envelope = parse_soap_envelope(xml.as_bytes()).unwrap();
//! assert!(envelope.body.child_with_suffix("Ping").is_some());
//! ```

mod builder;
mod envelope;
mod parser;

pub use builder::{DocumentConfig, SOAP_ENVELOPE_NS, build_soap_document};
pub use envelope::{SoapBody, SoapEnvelope, SoapHeader, child_text, find_child_with_suffix};
pub use parser::{SoapParseError, parse_soap_envelope};
