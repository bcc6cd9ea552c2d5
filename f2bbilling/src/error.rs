//! Gestion des erreurs pour le client F2b

use thiserror::Error;

/// Type Result personnalisé pour f2bbilling
pub type Result<T> = std::result::Result<T, F2bError>;

/// Erreur unique exposée par le client F2b
///
/// Toutes les défaillances (validation du contexte, construction du
/// document, transport, réponse du service) sont normalisées dans ce
/// type ; le message est toujours lisible par un humain.
#[derive(Error, Debug)]
pub enum F2bError {
    /// Credential obligatoire absent du contexte
    #[error("Missing F2b credential: {0}")]
    MissingCredential(&'static str),

    /// Paramètres d'opération inexploitables
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Date fournie dans un format non reconnu
    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    /// Échec de sérialisation du document XML
    #[error("XML serialization error: {0}")]
    Xml(#[from] xmltree::Error),

    /// Échec réseau (connexion, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// Réponse illisible (XML invalide, enveloppe absente)
    #[error("Unreadable response: {0}")]
    Response(String),

    /// Le service a répondu un statut `log` différent de "OK"
    #[error("{0}")]
    Service(String),
}

impl From<f2bsoap::SoapParseError> for F2bError {
    fn from(err: f2bsoap::SoapParseError) -> Self {
        F2bError::Response(err.to_string())
    }
}

impl F2bError {
    /// Vrai si l'erreur vient du service F2b lui-même (statut non-OK)
    pub fn is_service_error(&self) -> bool {
        matches!(self, F2bError::Service(_))
    }

    /// Vrai si l'erreur est survenue avant tout échange réseau
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            F2bError::MissingCredential(_)
                | F2bError::InvalidParameters(_)
                | F2bError::Date(_)
                | F2bError::Xml(_)
        )
    }
}
