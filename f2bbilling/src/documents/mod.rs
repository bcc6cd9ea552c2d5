//! Construction des documents XML des quatre opérations
//!
//! Chaque variante d'[`Operation`] remplit son corps `xmltree::Element`,
//! enveloppé ensuite dans le document SOAP commun par `f2bsoap`. Avec
//! des modèles typés, un attribut obligatoire absent ne peut pas
//! arriver jusqu'ici : seule la sérialisation peut encore échouer.

mod action;
mod charge;
mod duplicate;
mod status;

use crate::config::BillingContext;
use crate::convert::format_day;
use crate::error::Result;
use crate::models::Operation;
use chrono::{Local, NaiveDate};
use f2bsoap::DocumentConfig;
use uuid::Uuid;
use xmltree::{Element, XMLNode};

/// Adresse bac à sable de la F2b, substituée aux emails du sacado en
/// mode test
pub const SANDBOX_EMAIL: &str = "teste@f2b.com.br";

/// Document prêt à transmettre
#[derive(Debug, Clone)]
pub struct RequestDocument {
    /// Chemin du service destinataire (ex: "WSBilling")
    pub service: &'static str,

    /// Identifiant de corrélation embarqué dans l'en-tête `mensagem` ;
    /// stable au sein du document, régénéré à chaque appel
    pub correlation_id: String,

    /// Document SOAP sérialisé
    pub xml: String,
}

/// Construit le document d'une opération
pub fn build_document(operation: &Operation, context: &BillingContext) -> Result<RequestDocument> {
    let correlation_id = new_correlation_id();
    let today = Local::now().date_naive();
    build_document_at(operation, context, &correlation_id, today)
}

/// Variante déterministe (id et date imposés), utilisée par les tests
pub(crate) fn build_document_at(
    operation: &Operation,
    context: &BillingContext,
    correlation_id: &str,
    today: NaiveDate,
) -> Result<RequestDocument> {
    let mut root = Element::new(operation.root_element());
    root.attributes
        .insert("xmlns:m".to_string(), operation.namespace().to_string());

    match operation {
        Operation::Charge(charge) => charge::fill(&mut root, charge, context, correlation_id, today),
        Operation::Duplicate(query) => {
            duplicate::fill(&mut root, query, context, correlation_id, today)
        }
        Operation::Action(action) => action::fill(&mut root, action, context, correlation_id, today),
        Operation::Status(criteria) => {
            status::fill(&mut root, criteria, context, correlation_id, today)
        }
    }

    let config = DocumentConfig {
        encoding: context.endpoint.encoding.clone(),
        version: context.endpoint.version.clone(),
    };
    let xml = f2bsoap::build_soap_document(root, &config)?;

    Ok(RequestDocument {
        service: operation.service_name(),
        correlation_id: correlation_id.to_string(),
        xml,
    })
}

/// Identifiant de document : un UUIDv4 en hexadécimal simple (32 chars)
fn new_correlation_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// En-tête `mensagem` commun (@data, @numero)
pub(super) fn message_element(correlation_id: &str, today: NaiveDate) -> Element {
    let mut mensagem = Element::new("mensagem");
    set_attr(&mut mensagem, "data", format_day(today));
    set_attr(&mut mensagem, "numero", correlation_id);
    mensagem
}

/// En-tête `cliente` (@conta, @senha) des services authentifiés par senha
pub(super) fn client_element(context: &BillingContext) -> Element {
    let mut cliente = Element::new("cliente");
    set_attr(&mut cliente, "conta", context.account_id.as_str());
    set_attr(&mut cliente, "senha", context.password.as_str());
    cliente
}

pub(super) fn set_attr(elem: &mut Element, name: &str, value: impl Into<String>) {
    elem.attributes.insert(name.to_string(), value.into());
}

pub(super) fn push_child(parent: &mut Element, child: Element) {
    parent.children.push(XMLNode::Element(child));
}

pub(super) fn text_child(parent: &mut Element, name: &str, text: &str) {
    let mut child = Element::new(name);
    child.children.push(XMLNode::Text(text.to_string()));
    push_child(parent, child);
}
