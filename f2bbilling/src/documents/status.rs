//! Corps du document F2bSituacaoCobranca (consulta de situação)

use super::{client_element, message_element, push_child, set_attr};
use crate::config::BillingContext;
use crate::convert::format_day;
use crate::models::StatusCriteria;
use chrono::NaiveDate;
use xmltree::Element;

pub(super) fn fill(
    root: &mut Element,
    criteria: &StatusCriteria,
    context: &BillingContext,
    correlation_id: &str,
    today: NaiveDate,
) {
    push_child(root, message_element(correlation_id, today));
    push_child(root, client_element(context));

    // Un seul élément cobranca, dont les attributs sélectionnent le
    // critère de recherche
    let mut cobranca = Element::new("cobranca");
    match criteria {
        StatusCriteria::CreditDate { start, end } => {
            set_attr(&mut cobranca, "credito", format_day(*start));
            set_attr(&mut cobranca, "credito_final", format_day(*end));
        }
        StatusCriteria::ChargeNumber { start, end } => {
            set_attr(&mut cobranca, "numero", start.as_str());
            if let Some(end) = end {
                set_attr(&mut cobranca, "numero_final", end.as_str());
            }
        }
        StatusCriteria::RegistrationDate { start, end } => {
            set_attr(&mut cobranca, "registro", format_day(*start));
            set_attr(&mut cobranca, "registro_final", format_day(*end));
        }
        StatusCriteria::DueDate { start, end } => {
            set_attr(&mut cobranca, "vencimento", format_day(*start));
            set_attr(&mut cobranca, "vencimento_final", format_day(*end));
        }
        StatusCriteria::ProcessingDate { start, end } => {
            set_attr(&mut cobranca, "processamento", format_day(*start));
            set_attr(&mut cobranca, "processamento_final", format_day(*end));
        }
        StatusCriteria::DebtorCode(code) => {
            set_attr(&mut cobranca, "cod_sacado", code.as_str());
        }
        StatusCriteria::GroupCode(code) => {
            set_attr(&mut cobranca, "cod_grupo", code.as_str());
        }
        StatusCriteria::PaymentType(kind) => {
            set_attr(&mut cobranca, "tipo_pagamento", kind.as_str());
        }
        StatusCriteria::DocumentNumber(number) => {
            set_attr(&mut cobranca, "numero_documento", number.as_str());
        }
    }
    push_child(root, cobranca);
}
