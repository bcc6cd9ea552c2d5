//! Exemple d'enregistrement d'une cobrança
//!
//! Cet exemple montre comment :
//! - Charger le contexte depuis l'environnement (F2B_ACCOUNT_ID, ...)
//! - Construire le document XML d'une cobrança
//! - Le transmettre au web service (seulement si F2B_SEND=1)

use chrono::NaiveDate;
use f2bbilling::{
    Address, BillingContext, Charge, Debtor, DebtorKind, F2bClient, Operation, Penalty, Phone,
    build_document,
};

fn main() -> anyhow::Result<()> {
    // Initialiser le logging
    tracing_subscriber::fmt::init();

    println!("=== F2b - Enregistrement d'une cobrança ===\n");

    let context = BillingContext::from_env().unwrap_or_else(|err| {
        println!("Contexte d'environnement incomplet ({err}), credentials de démonstration.");
        let mut context = BillingContext::new("12345", "Empresa Exemplo", "s3cret");
        context.test_mode = true;
        context
    });

    let charge = Charge {
        amount: 1200.2,
        document_number: Some("NF-2024-001".to_string()),
        fee: Some(2.5),
        penalty: Some(Penalty {
            amount: 2.0,
            daily_amount: 0.1,
        }),
        due_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        statement: vec!["Mensalidade março/2024".to_string()],
        debtor: Debtor {
            code: Some("S042".to_string()),
            name: "João da Silva".to_string(),
            emails: vec!["joao@example.com".to_string()],
            address: Address {
                street: "Rua das Flores".to_string(),
                number: "100".to_string(),
                complement: Some("Apto 12".to_string()),
                neighborhood: "Centro".to_string(),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                postal_code: "01000-000".to_string(),
            },
            landline: None,
            mobile: Some(Phone {
                area_code: "11".to_string(),
                number: "99999-0000".to_string(),
            }),
            tax_id: "12345678900".to_string(),
            kind: DebtorKind::Person,
            notes: None,
        },
    };

    let operation = Operation::Charge(charge);

    // Montrer le document qui partirait sur le fil
    let document = build_document(&operation, &context)?;
    println!("Service: {}", document.service);
    println!("Correlation: {}", document.correlation_id);
    println!("\n{}\n", document.xml);

    if std::env::var("F2B_SEND").as_deref() == Ok("1") {
        println!("Transmission vers la F2b...");
        let client = F2bClient::new(context);
        match client.transmit(&operation) {
            Ok(reply) => println!("✓ Transmis (HTTP {})", reply.status),
            Err(err) => println!("✗ Échec : {err}"),
        }
    } else {
        println!("F2B_SEND != 1, pas de transmission.");
    }

    Ok(())
}
