//! Client principal du web service de cobranças F2b
//!
//! Séquence par appel : validation du contexte → construction du
//! document → POST → interprétation du statut de la réponse. Toute
//! défaillance remonte comme une [`F2bError`] au message lisible.

use crate::config::BillingContext;
use crate::documents::build_document;
use crate::error::{F2bError, Result};
use crate::models::{Charge, ChargeAction, DuplicateQuery, Operation, StatusCriteria};
use crate::response::check_service_status;
use crate::transport::send_document;
use f2bsoap::SoapEnvelope;
use tracing::debug;

/// Réponse interprétée d'une transmission
#[derive(Debug, Clone)]
pub struct F2bResponse {
    /// Statut HTTP de l'échange
    pub status: ureq::http::StatusCode,

    /// Corps brut de la réponse, pour la journalisation externe
    pub raw_body: String,

    /// Arbre XML de la réponse
    pub envelope: SoapEnvelope,
}

/// Client du web service F2b
///
/// Le contexte est en lecture seule après construction ; chaque appel
/// est un aller-retour indépendant et le client peut être partagé entre
/// threads.
#[derive(Debug, Clone)]
pub struct F2bClient {
    context: BillingContext,
}

impl F2bClient {
    pub fn new(context: BillingContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &BillingContext {
        &self.context
    }

    /// Point d'entrée unique : transmet une opération et rend la
    /// réponse parsée
    pub fn transmit(&self, operation: &Operation) -> Result<F2bResponse> {
        self.context.validate()?;

        let document = build_document(operation, &self.context)?;
        debug!(
            "transmitting {} ({} bytes)",
            document.service,
            document.xml.len()
        );

        let reply = send_document(&self.context, &document)?;

        let envelope = reply.envelope.ok_or_else(|| {
            F2bError::Response(format!(
                "service reply is not a SOAP document (HTTP {})",
                reply.status
            ))
        })?;

        check_service_status(&envelope)?;

        Ok(F2bResponse {
            status: reply.status,
            raw_body: reply.raw_body,
            envelope,
        })
    }

    /// Enregistre une cobrança
    pub fn register_charge(&self, charge: Charge) -> Result<F2bResponse> {
        self.transmit(&Operation::Charge(charge))
    }

    /// Demande la segunda via d'une cobrança
    pub fn request_duplicate(&self, query: DuplicateQuery) -> Result<F2bResponse> {
        self.transmit(&Operation::Duplicate(query))
    }

    /// Applique une action à une cobrança existante
    pub fn apply_action(&self, action: ChargeAction) -> Result<F2bResponse> {
        self.transmit(&Operation::Action(action))
    }

    /// Consulte la situation des cobranças selon un critère
    pub fn query_status(&self, criteria: StatusCriteria) -> Result<F2bResponse> {
        self.transmit(&Operation::Status(criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChargeAction;

    #[test]
    fn transmit_validates_before_any_network_io() {
        // Hôte inexistant : si la validation ne court-circuitait pas,
        // l'appel échouerait en Transport, pas en MissingCredential.
        let mut context = BillingContext::new("", "Empresa", "senha");
        context.endpoint.host = "f2b.invalid".to_string();
        let client = F2bClient::new(context);

        let err = client
            .apply_action(ChargeAction::for_charge("1"))
            .unwrap_err();
        assert!(matches!(err, F2bError::MissingCredential("account_id")));
    }
}
