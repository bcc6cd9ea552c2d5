//! Transport HTTP des documents SOAP
//!
//! POST synchrone via ureq, un agent frais par appel. La vérification du
//! certificat TLS suit le port de destination, voir
//! [`crate::ServiceEndpoint::verify_tls`].

use crate::config::BillingContext;
use crate::documents::RequestDocument;
use crate::error::Result;
use f2bsoap::{SoapEnvelope, parse_soap_envelope};
use std::time::Duration;
use tracing::{debug, info};
use ureq::Agent;
use ureq::tls::TlsConfig;

/// Réponse brute d'un échange :
/// - statut HTTP
/// - corps XML brut (toujours)
/// - enveloppe SOAP parsée si le corps en est une
pub struct WireReply {
    pub status: ureq::http::StatusCode,
    pub raw_body: String,
    pub envelope: Option<SoapEnvelope>,
}

/// Envoie un document vers son service et lit la réponse
///
/// Aucune relance : un échec réseau remonte tel quel à l'appelant.
pub fn send_document(context: &BillingContext, document: &RequestDocument) -> Result<WireReply> {
    let endpoint = &context.endpoint;
    let url = endpoint.service_url(document.service);

    info!("POST {} (correlation {})", url, document.correlation_id);
    debug!("SOAPRequest (XML): {}", document.xml);

    // Ne pas traiter les 4xx/5xx comme des erreurs de transport : les
    // erreurs SOAP arrivent dans des corps HTTP 500 qu'il faut lire.
    let config = Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(Duration::from_secs(endpoint.timeout_secs)))
        .tls_config(
            TlsConfig::builder()
                .disable_verification(!endpoint.verify_tls())
                .build(),
        )
        .build();
    let agent: Agent = config.into();

    let mut response = agent
        .post(&url)
        .header(
            "Content-Type",
            format!("text/xml; charset=\"{}\"", endpoint.encoding),
        )
        .header("Accept", "text/xml")
        .header("Cache-Control", "no-cache")
        .header("Pragma", "no-cache")
        .header("SOAPAction", &url)
        .header("Content-Length", document.xml.len().to_string())
        .send(document.xml.as_str())?;

    let status = response.status();
    let raw_body = response.body_mut().read_to_string()?;

    debug!("SOAPResponse (XML): {}", raw_body);

    // Parsing tolérant : l'appelant décide quoi faire d'un corps qui
    // n'est pas une enveloppe SOAP.
    let envelope = parse_soap_envelope(raw_body.as_bytes()).ok();

    Ok(WireReply {
        status,
        raw_body,
        envelope,
    })
}
