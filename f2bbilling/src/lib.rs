//! # f2bbilling - Client du web service de cobranças F2b
//!
//! Cette crate fournit un client Rust pour le web service de
//! transactions de la F2b (www.f2b.com.br) : enregistrement de
//! cobranças, segunda via, actions sur cobranças existantes et consulta
//! de situação.
//!
//! ## Vue d'ensemble
//!
//! Un appel = un aller-retour synchrone :
//! - Validation des credentials du contexte
//! - Construction du document XML de l'opération (enveloppe SOAP via
//!   `f2bsoap`)
//! - POST HTTPS vers le service propre à l'opération
//! - Interprétation du statut `log` de la réponse ; tout statut autre
//!   que "OK" devient une [`F2bError`] portant le message du service
//!
//! ## Structure des modules
//!
//! ```text
//! f2bbilling/
//! ├── src/
//! │   ├── lib.rs              # Module principal (ce fichier)
//! │   ├── client.rs           # F2bClient, point d'entrée transmit()
//! │   ├── config.rs           # BillingContext et ServiceEndpoint
//! │   ├── convert.rs          # Formats money/date, br2nl, flags s/n
//! │   ├── models.rs           # Charge, Debtor, Operation, critères...
//! │   ├── documents/          # Corps XML des quatre opérations
//! │   ├── transport.rs        # POST ureq, politique TLS par port
//! │   ├── response.rs         # Statut `log` des racines de réponse
//! │   └── error.rs            # F2bError
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use f2bbilling::{BillingContext, F2bClient, StatusCriteria};
//! use chrono::NaiveDate;
//!
//! fn main() -> anyhow::Result<()> {
//!     let context = BillingContext::from_env()?;
//!     let client = F2bClient::new(context);
//!
//!     let reply = client.query_status(StatusCriteria::CreditDate {
//!         start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//!         end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
//!     })?;
//!
//!     println!("HTTP {}", reply.status);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod convert;
pub mod documents;
pub mod error;
pub mod models;
pub mod response;
pub mod transport;

pub use client::{F2bClient, F2bResponse};
pub use config::{BillingContext, ServiceEndpoint};
pub use documents::{RequestDocument, SANDBOX_EMAIL, build_document};
pub use error::{F2bError, Result};
pub use models::{
    Address, Charge, ChargeAction, Debtor, DebtorKind, DuplicateFilter, DuplicateQuery, Operation,
    Penalty, Phone, ScheduleAction, StatusCriteria,
};
pub use response::{RESPONSE_ROOTS, check_service_status};
pub use transport::WireReply;
