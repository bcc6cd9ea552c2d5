//! Corps du document F2bAcaoCobranca (action sur une cobrança)

use super::{client_element, message_element, push_child, set_attr};
use crate::config::BillingContext;
use crate::convert::{bool_flag, format_date, format_money};
use crate::models::ChargeAction;
use chrono::NaiveDate;
use xmltree::Element;

pub(super) fn fill(
    root: &mut Element,
    action: &ChargeAction,
    context: &BillingContext,
    correlation_id: &str,
    today: NaiveDate,
) {
    push_child(root, message_element(correlation_id, today));
    push_child(root, client_element(context));

    let mut acao = Element::new("acao_cobranca");
    set_attr(&mut acao, "numero", action.charge_number.as_str());
    set_attr(&mut acao, "cancelar_cobranca", bool_flag(action.cancel_charge));
    set_attr(
        &mut acao,
        "registrar_pagamento",
        bool_flag(action.register_payment),
    );
    if let Some(amount) = action.payment_amount {
        set_attr(
            &mut acao,
            "registrar_pagamento_valor",
            format_money(amount, 2),
        );
    }
    if let Some(date) = action.payment_date {
        set_attr(&mut acao, "dt_registrar_pagamento", format_date(date, true));
    }
    set_attr(&mut acao, "cancelar_multa", bool_flag(action.cancel_fine));
    set_attr(
        &mut acao,
        "permitir_pagamento",
        bool_flag(action.allow_payment),
    );
    if let Some(date) = action.allow_payment_date {
        set_attr(&mut acao, "dt_permitir_pagamento", format_date(date, true));
    }
    set_attr(&mut acao, "reenviar_email", bool_flag(action.resend_email));
    if let Some(ref email) = action.resend_to {
        set_attr(&mut acao, "email_tosend", email.as_str());
    }

    if let Some(ref schedule) = action.schedule {
        let mut agendamento = Element::new("acao_agendamento");
        set_attr(&mut agendamento, "numero", schedule.number.as_str());
        set_attr(
            &mut agendamento,
            "cancelar_agendamento",
            bool_flag(schedule.cancel),
        );
        push_child(&mut acao, agendamento);
    }

    push_child(root, acao);
}
