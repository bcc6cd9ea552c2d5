//! Interprétation des réponses du web service
//!
//! Chaque opération répond sous sa propre racine ; toutes portent un
//! élément `log` au même niveau. Toute valeur autre que la chaîne
//! littérale "OK" est une erreur de service.

use crate::convert::br2nl;
use crate::error::{F2bError, Result};
use f2bsoap::{SoapEnvelope, child_text};

/// Racines de réponse connues des quatre services
pub const RESPONSE_ROOTS: [&str; 4] = [
    "F2bCobrancaRetorno",
    "F2bAcaoCobrancaRetorno",
    "F2bSegundaViaRetorno",
    "F2bSituacaoCobrancaRetorno",
];

/// Vérifie le statut `log` d'une réponse parsée
///
/// Quand aucune racine connue n'est présente, aucune validation n'est
/// faite et l'arbre est rendu tel quel à l'appelant (voir DESIGN.md).
pub fn check_service_status(envelope: &SoapEnvelope) -> Result<()> {
    for root in RESPONSE_ROOTS {
        let Some(retorno) = envelope.body.child_with_suffix(root) else {
            continue;
        };
        let Some(log) = child_text(retorno, "log") else {
            continue;
        };
        if log != "OK" {
            return Err(F2bError::Service(format!("F2b: {}", br2nl(&log))));
        }
    }
    Ok(())
}
