//! Configuration du client F2b
//!
//! Le contexte est une valeur injectée dans [`crate::F2bClient`] à la
//! construction ; il n'y a aucun état global. Les valeurs par défaut du
//! point d'accès sont celles de la production F2b.

use crate::error::{F2bError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Point d'accès au web service F2b
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    pub protocol: String,
    pub host: String,
    pub port: u16,

    /// Timeout de la requête, en secondes
    pub timeout_secs: u64,

    /// Encodage déclaré dans le prologue XML et le Content-Type
    pub encoding: String,

    /// Version XML déclarée dans le prologue
    pub version: String,
}

impl Default for ServiceEndpoint {
    fn default() -> Self {
        Self {
            protocol: "https".to_string(),
            host: "www.f2b.com.br".to_string(),
            port: 443,
            timeout_secs: 30,
            encoding: "ISO-8859-1".to_string(),
            version: "1.0".to_string(),
        }
    }
}

impl ServiceEndpoint {
    /// URL complète d'un service (ex: "WSBilling")
    pub fn service_url(&self, service: &str) -> String {
        format!("{}://{}:{}/{}", self.protocol, self.host, self.port, service)
    }

    /// La vérification du certificat TLS suit le port : activée
    /// uniquement sur le port HTTPS standard. Politique assumée ici
    /// plutôt que dérivée en silence.
    pub fn verify_tls(&self) -> bool {
        self.port == 443
    }
}

/// Contexte de facturation : compte, credentials et point d'accès
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingContext {
    /// Code du compte auprès de la F2b
    pub account_id: String,

    /// Nom de l'entreprise/du client tel que déclaré à la F2b
    pub company_name: String,

    /// Senha du compte pour la consommation du web service
    pub password: String,

    /// En mode test, les emails du sacado d'une cobrança sont remplacés
    /// par l'adresse bac à sable de la F2b
    pub test_mode: bool,

    #[serde(default)]
    pub endpoint: ServiceEndpoint,
}

impl BillingContext {
    pub fn new(
        account_id: impl Into<String>,
        company_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            company_name: company_name.into(),
            password: password.into(),
            test_mode: false,
            endpoint: ServiceEndpoint::default(),
        }
    }

    /// Pré-analyse des attributs obligatoires : compte, senha,
    /// entreprise. Première absence gagnante.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(F2bError::MissingCredential("account_id"));
        }
        if self.password.trim().is_empty() {
            return Err(F2bError::MissingCredential("password"));
        }
        if self.company_name.trim().is_empty() {
            return Err(F2bError::MissingCredential("company_name"));
        }
        Ok(())
    }

    /// Charge le contexte depuis l'environnement
    ///
    /// Variables requises : `F2B_ACCOUNT_ID`, `F2B_COMPANY_NAME`,
    /// `F2B_PASSWORD`. Optionnelles : `F2B_TEST_MODE` (`1`/`true`),
    /// `F2B_PROTOCOL`, `F2B_HOST`, `F2B_PORT`, `F2B_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let required = |name: &'static str| -> Result<String> {
            vars.get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(F2bError::MissingCredential(name))
        };

        let mut endpoint = ServiceEndpoint::default();
        if let Some(protocol) = vars.get("F2B_PROTOCOL") {
            endpoint.protocol = protocol.clone();
        }
        if let Some(host) = vars.get("F2B_HOST") {
            endpoint.host = host.clone();
        }
        if let Some(port) = vars.get("F2B_PORT") {
            endpoint.port = port
                .parse()
                .map_err(|_| F2bError::InvalidParameters("F2B_PORT must be a port number".to_string()))?;
        }
        if let Some(timeout) = vars.get("F2B_TIMEOUT_SECS") {
            endpoint.timeout_secs = timeout.parse().map_err(|_| {
                F2bError::InvalidParameters("F2B_TIMEOUT_SECS must be a number of seconds".to_string())
            })?;
        }

        let test_mode = vars
            .get("F2B_TEST_MODE")
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false);

        let context = Self {
            account_id: required("F2B_ACCOUNT_ID")?,
            company_name: required("F2B_COMPANY_NAME")?,
            password: required("F2B_PASSWORD")?,
            test_mode,
            endpoint,
        };

        tracing::debug!(
            "F2b context loaded for account {} (test_mode: {})",
            context.account_id,
            context.test_mode
        );

        Ok(context)
    }
}
