//! Corps du document F2bSegundaVia (segunda via d'une cobrança)

use super::{client_element, message_element, push_child, set_attr};
use crate::config::BillingContext;
use crate::convert::format_day;
use crate::models::DuplicateQuery;
use chrono::NaiveDate;
use xmltree::Element;

pub(super) fn fill(
    root: &mut Element,
    query: &DuplicateQuery,
    context: &BillingContext,
    correlation_id: &str,
    today: NaiveDate,
) {
    push_child(root, message_element(correlation_id, today));
    push_child(root, client_element(context));

    // Le schéma attend les attributs d'identification même vides ; seule
    // la plage de vencimento est réellement optionnelle.
    let mut sacado = Element::new("sacado");
    set_attr(
        &mut sacado,
        "txt_email",
        query.email.clone().unwrap_or_default(),
    );
    set_attr(
        &mut sacado,
        "num_cpf",
        query.tax_id.clone().unwrap_or_default(),
    );
    set_attr(&mut sacado, "somente_registradas", query.filter.wire_value());
    if let Some(start) = query.due_date {
        set_attr(&mut sacado, "vencimento", format_day(start));
    }
    if let Some(end) = query.due_date_end {
        set_attr(&mut sacado, "vencimento_final", format_day(end));
    }
    push_child(root, sacado);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::models::{DuplicateFilter, DuplicateQuery, Operation};
    use chrono::NaiveDate;

    fn query() -> DuplicateQuery {
        DuplicateQuery {
            email: Some("joao@example.com".to_string()),
            tax_id: Some("12345678900".to_string()),
            filter: DuplicateFilter::RegisteredAndPaid,
            due_date: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            due_date_end: Some(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()),
        }
    }

    #[test]
    fn duplicate_document_shape() {
        let root = built_root(&Operation::Duplicate(query()));

        assert!(child(&root, "mensagem").is_some());
        let cliente = child(&root, "cliente").expect("cliente");
        assert_eq!(attr(cliente, "conta"), Some("12345"));
        assert_eq!(attr(cliente, "senha"), Some("s3cret"));

        let sacado = child(&root, "sacado").expect("sacado");
        assert_eq!(attr(sacado, "txt_email"), Some("joao@example.com"));
        assert_eq!(attr(sacado, "num_cpf"), Some("12345678900"));
        assert_eq!(attr(sacado, "somente_registradas"), Some("2"));
        assert_eq!(attr(sacado, "vencimento"), Some("2024-03-01"));
        assert_eq!(attr(sacado, "vencimento_final"), Some("2024-03-31"));
    }

    #[test]
    fn identification_attributes_are_sent_even_when_empty() {
        let empty = DuplicateQuery {
            email: None,
            tax_id: None,
            filter: DuplicateFilter::Registered,
            due_date: None,
            due_date_end: None,
        };
        let root = built_root(&Operation::Duplicate(empty));
        let sacado = child(&root, "sacado").unwrap();
        assert_eq!(attr(sacado, "txt_email"), Some(""));
        assert_eq!(attr(sacado, "num_cpf"), Some(""));
        assert_eq!(attr(sacado, "somente_registradas"), Some("1"));
        assert!(attr(sacado, "vencimento").is_none());
        assert!(attr(sacado, "vencimento_final").is_none());
    }
}
