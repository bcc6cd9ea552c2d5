//! Exemple de consulta de situação par plage de data de crédito

use chrono::NaiveDate;
use f2bbilling::{BillingContext, F2bClient, StatusCriteria};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let context = BillingContext::from_env()?;
    let client = F2bClient::new(context);

    let reply = client.query_status(StatusCriteria::CreditDate {
        start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    })?;

    println!("HTTP {}", reply.status);
    if let Some(retorno) = reply
        .envelope
        .body
        .child_with_suffix("F2bSituacaoCobrancaRetorno")
    {
        println!("{} élément(s) dans la réponse", retorno.children.len());
    }

    Ok(())
}
