//! Corps du document F2bCobranca (enregistrement d'une cobrança)
//!
//! Le document porte des valeurs de compte figées : boleto Bradesco,
//! taxa en reais, multa en pourcentage, envoi désactivé.

use super::{SANDBOX_EMAIL, message_element, push_child, set_attr, text_child};
use crate::config::BillingContext;
use crate::convert::{format_day, format_money};
use crate::models::{Charge, DebtorKind};
use chrono::NaiveDate;
use xmltree::{Element, XMLNode};

pub(super) fn fill(
    root: &mut Element,
    charge: &Charge,
    context: &BillingContext,
    correlation_id: &str,
    today: NaiveDate,
) {
    let mut mensagem = message_element(correlation_id, today);
    set_attr(&mut mensagem, "tipo_ws", "WebService");
    push_child(root, mensagem);

    // Sacador : le titulaire du compte émetteur
    let mut sacador = Element::new("sacador");
    set_attr(&mut sacador, "conta", context.account_id.as_str());
    sacador
        .children
        .push(XMLNode::Text(context.company_name.clone()));
    push_child(root, sacador);

    push_child(root, cobranca_element(charge));
    push_child(root, agendamento_element(charge));
    push_child(root, sacado_element(charge, context));
}

fn cobranca_element(charge: &Charge) -> Element {
    let mut cobranca = Element::new("cobranca");
    set_attr(&mut cobranca, "valor", format_money(charge.amount, 2));
    // B: boleto seulement
    set_attr(&mut cobranca, "tipo_cobranca", "B");
    if let Some(ref document_number) = charge.document_number {
        // sic : nom d'attribut tel que défini par le schéma F2b
        set_attr(&mut cobranca, "num_dcument", document_number.as_str());
    }
    set_attr(&mut cobranca, "cod_banco", "237");
    if let Some(fee) = charge.fee {
        set_attr(&mut cobranca, "taxa", format_money(fee, 2));
        // 0 = R$
        set_attr(&mut cobranca, "tipo_taxa", "0");
    }

    for line in &charge.statement {
        text_child(&mut cobranca, "demonstrativo", line);
    }

    let mut multa = Element::new("multa");
    if let Some(penalty) = charge.penalty {
        set_attr(&mut multa, "valor", format_money(penalty.amount, 2));
        set_attr(&mut multa, "valor_dia", format_money(penalty.daily_amount, 2));
    }
    // 1 = pourcentage, pour la multa comme pour la mora journalière
    set_attr(&mut multa, "tipo_multa", "1");
    set_attr(&mut multa, "tipo_multa_dia", "1");
    // jours de retard acceptés après le vencimento (max 20)
    set_attr(&mut multa, "atraso", "20");
    push_child(&mut cobranca, multa);

    cobranca
}

fn agendamento_element(charge: &Charge) -> Element {
    let mut agendamento = Element::new("agendamento");
    set_attr(&mut agendamento, "vencimento", format_day(charge.due_date));
    set_attr(&mut agendamento, "ultimo_dia", "n");
    set_attr(&mut agendamento, "periodicidade", "1");
    // 0 : agendamento par période indéterminée
    set_attr(&mut agendamento, "periodos", "0");
    set_attr(&mut agendamento, "sem_vencimento", "n");
    agendamento
        .children
        .push(XMLNode::Text("Via WebService".to_string()));
    agendamento
}

fn sacado_element(charge: &Charge, context: &BillingContext) -> Element {
    let debtor = &charge.debtor;

    let mut sacado = Element::new("sacado");
    set_attr(&mut sacado, "grupo", "WebService");
    if let Some(ref code) = debtor.code {
        set_attr(&mut sacado, "codigo", code.as_str());
    }
    // n : seul le registre de la cobrança, aucun envoi au sacado
    set_attr(&mut sacado, "envio", "n");

    text_child(&mut sacado, "nome", &debtor.name);

    // En mode test, la F2b n'accepte que son adresse bac à sable
    if context.test_mode {
        text_child(&mut sacado, "email", SANDBOX_EMAIL);
    } else {
        for email in &debtor.emails {
            text_child(&mut sacado, "email", email);
        }
    }

    let mut endereco = Element::new("endereco");
    set_attr(&mut endereco, "logradouro", debtor.address.street.as_str());
    set_attr(&mut endereco, "numero", debtor.address.number.as_str());
    if let Some(ref complement) = debtor.address.complement {
        set_attr(&mut endereco, "complemento", complement.as_str());
    }
    set_attr(&mut endereco, "bairro", debtor.address.neighborhood.as_str());
    set_attr(&mut endereco, "cidade", debtor.address.city.as_str());
    set_attr(&mut endereco, "estado", debtor.address.state.as_str());
    set_attr(&mut endereco, "cep", debtor.address.postal_code.as_str());
    push_child(&mut sacado, endereco);

    if let Some(ref phone) = debtor.landline {
        let mut telefone = Element::new("telefone");
        set_attr(&mut telefone, "ddd", phone.area_code.as_str());
        set_attr(&mut telefone, "numero", phone.number.as_str());
        push_child(&mut sacado, telefone);
    }

    if let Some(ref phone) = debtor.mobile {
        let mut telefone_cel = Element::new("telefone_cel");
        set_attr(&mut telefone_cel, "ddd_cel", phone.area_code.as_str());
        set_attr(&mut telefone_cel, "numero_cel", phone.number.as_str());
        push_child(&mut sacado, telefone_cel);
    }

    if let Some(ref notes) = debtor.notes {
        text_child(&mut sacado, "observacao", notes);
    }

    // Exactement un des deux éléments selon le type de sacado
    let tax_element = match debtor.kind {
        DebtorKind::Company => "cnpj",
        DebtorKind::Person => "cpf",
    };
    text_child(&mut sacado, tax_element, &debtor.tax_id);

    sacado
}
