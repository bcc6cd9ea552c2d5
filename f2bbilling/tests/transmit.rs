//! Tests d'intégration de la transmission contre un serveur HTTP local

use chrono::NaiveDate;
use f2bbilling::{
    Address, BillingContext, Charge, ChargeAction, Debtor, DebtorKind, F2bClient, F2bError,
    Operation, StatusCriteria,
};

const OK_CHARGE_RESPONSE: &str = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Body>
    <m:F2bCobrancaRetorno xmlns:m="http://www.f2b.com.br/soap/wsbilling.xsd">
      <log>OK</log>
      <cobranca numero="000123"/>
    </m:F2bCobrancaRetorno>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;

fn context_for(server: &mockito::Server) -> BillingContext {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port.split_once(':').expect("host:port");

    let mut context = BillingContext::new("12345", "Empresa Exemplo", "s3cret");
    context.endpoint.protocol = "http".to_string();
    context.endpoint.host = host.to_string();
    context.endpoint.port = port.parse().expect("numeric port");
    context.endpoint.timeout_secs = 5;
    context
}

fn sample_charge() -> Charge {
    Charge {
        amount: 350.0,
        document_number: None,
        fee: None,
        penalty: None,
        due_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        statement: vec!["Mensalidade".to_string()],
        debtor: Debtor {
            code: None,
            name: "João da Silva".to_string(),
            emails: vec!["joao@example.com".to_string()],
            address: Address {
                street: "Rua das Flores".to_string(),
                number: "100".to_string(),
                complement: None,
                neighborhood: "Centro".to_string(),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                postal_code: "01000-000".to_string(),
            },
            landline: None,
            mobile: None,
            tax_id: "12345678900".to_string(),
            kind: DebtorKind::Person,
            notes: None,
        },
    }
}

#[test]
fn transmit_returns_parsed_tree_on_ok() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/WSBilling")
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body(OK_CHARGE_RESPONSE)
        .create();

    let client = F2bClient::new(context_for(&server));
    let reply = client.register_charge(sample_charge()).expect("transmits");

    mock.assert();
    assert_eq!(reply.status.as_u16(), 200);
    let retorno = reply
        .envelope
        .body
        .child_with_suffix("F2bCobrancaRetorno")
        .expect("response root");
    let cobranca = f2bsoap::find_child_with_suffix(retorno, "cobranca").expect("cobranca");
    assert_eq!(
        cobranca.attributes.get("numero").map(String::as_str),
        Some("000123")
    );
}

#[test]
fn soap_headers_are_sent() {
    let mut server = mockito::Server::new();
    let soap_action = format!("http://{}/WSBilling", server.host_with_port());
    let mock = server
        .mock("POST", "/WSBilling")
        .match_header("content-type", "text/xml; charset=\"ISO-8859-1\"")
        .match_header("accept", "text/xml")
        .match_header("cache-control", "no-cache")
        .match_header("pragma", "no-cache")
        .match_header("soapaction", soap_action.as_str())
        .with_status(200)
        .with_body(OK_CHARGE_RESPONSE)
        .create();

    let client = F2bClient::new(context_for(&server));
    client.register_charge(sample_charge()).expect("transmits");

    mock.assert();
}

#[test]
fn service_error_surfaces_log_message() {
    let body = r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Body>
    <m:F2bAcaoCobrancaRetorno xmlns:m="http://www.f2b.com.br/soap/wsbillingaction.xsd">
      <log>Cobrança não encontrada&lt;br/&gt;verifique o número</log>
    </m:F2bAcaoCobrancaRetorno>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;

    let mut server = mockito::Server::new();
    server
        .mock("POST", "/WSBillingAction")
        .with_status(500)
        .with_body(body)
        .create();

    let client = F2bClient::new(context_for(&server));
    let err = client
        .apply_action(ChargeAction::for_charge("000999"))
        .unwrap_err();

    assert!(err.is_service_error());
    assert_eq!(
        err.to_string(),
        "F2b: Cobrança não encontrada\nverifique o número"
    );
}

#[test]
fn status_query_targets_its_own_service() {
    let body = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body>
    <m:F2bSituacaoCobrancaRetorno xmlns:m="http://www.f2b.com.br/soap/wsbillingstatus.xsd">
      <log>OK</log>
    </m:F2bSituacaoCobrancaRetorno>
  </s:Body>
</s:Envelope>"#;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/WSBillingStatus")
        .with_status(200)
        .with_body(body)
        .create();

    let client = F2bClient::new(context_for(&server));
    client
        .query_status(StatusCriteria::CreditDate {
            start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        })
        .expect("transmits");

    mock.assert();
}

#[test]
fn unknown_response_root_is_passed_through() {
    let body = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body>
    <RetornoDesconhecido><log>Erro X</log></RetornoDesconhecido>
  </s:Body>
</s:Envelope>"#;

    let mut server = mockito::Server::new();
    server
        .mock("POST", "/WSBilling")
        .with_status(200)
        .with_body(body)
        .create();

    let client = F2bClient::new(context_for(&server));
    let reply = client.register_charge(sample_charge()).expect("passes through");
    assert!(
        reply
            .envelope
            .body
            .child_with_suffix("RetornoDesconhecido")
            .is_some()
    );
}

#[test]
fn non_xml_reply_is_a_response_error() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/WSBilling")
        .with_status(502)
        .with_body("Bad Gateway")
        .create();

    let client = F2bClient::new(context_for(&server));
    let err = client.register_charge(sample_charge()).unwrap_err();
    assert!(matches!(err, F2bError::Response(_)));
}

#[test]
fn missing_credential_short_circuits_before_network() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/WSBilling").expect(0).create();

    let mut context = context_for(&server);
    context.account_id = String::new();
    let client = F2bClient::new(context);

    let err = client.register_charge(sample_charge()).unwrap_err();
    assert!(matches!(err, F2bError::MissingCredential("account_id")));
    mock.assert();
}

#[test]
fn transmit_dispatches_any_operation_variant() {
    let body = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body>
    <m:F2bSegundaViaRetorno xmlns:m="http://www.f2b.com.br/soap/wsbillingsegundavia.xsd">
      <log>OK</log>
    </m:F2bSegundaViaRetorno>
  </s:Body>
</s:Envelope>"#;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/WSBillingSegundaVia")
        .with_status(200)
        .with_body(body)
        .create();

    let operation = Operation::Duplicate(f2bbilling::DuplicateQuery {
        email: Some("joao@example.com".to_string()),
        tax_id: None,
        filter: f2bbilling::DuplicateFilter::Registered,
        due_date: None,
        due_date_end: None,
    });

    let client = F2bClient::new(context_for(&server));
    client.transmit(&operation).expect("transmits");
    mock.assert();
}
