//! Structures de données des opérations du web service F2b
//!
//! Les quatre opérations forment l'union fermée [`Operation`] : chaque
//! variante porte son payload typé et connaît son service, son namespace
//! et ses éléments racine.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Personne physique ou morale — pilote l'élément `cpf`/`cnpj` du sacado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtorKind {
    Person,
    Company,
}

/// Canal téléphonique
///
/// L'élément n'est émis que si l'indicatif ET le numéro sont connus ;
/// le type rend la règle vérifiable à la compilation : un canal absent
/// est un `Option::None`, jamais un élément à moitié rempli.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub area_code: String,
    pub number: String,
}

/// Adresse postale du sacado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Sacado : la personne ou l'entreprise facturée
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debtor {
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    pub emails: Vec<String>,
    pub address: Address,
    #[serde(default)]
    pub landline: Option<Phone>,
    #[serde(default)]
    pub mobile: Option<Phone>,

    /// CPF ou CNPJ selon `kind`
    pub tax_id: String,
    pub kind: DebtorKind,

    #[serde(default)]
    pub notes: Option<String>,
}

/// Multa de retard : pourcentage à l'échéance plus accrue journalière
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    pub amount: f64,
    pub daily_amount: f64,
}

/// Paramètres d'enregistrement d'une cobrança
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charge {
    pub amount: f64,
    #[serde(default)]
    pub document_number: Option<String>,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub penalty: Option<Penalty>,
    pub due_date: NaiveDate,

    /// Lignes libres du demonstrativo
    #[serde(default)]
    pub statement: Vec<String>,

    pub debtor: Debtor,
}

/// Sous-action sur un agendamento existant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleAction {
    pub number: String,
    pub cancel: bool,
}

/// Action appliquée à une cobrança existante
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeAction {
    pub charge_number: String,
    pub cancel_charge: bool,
    pub register_payment: bool,
    #[serde(default)]
    pub payment_amount: Option<f64>,
    #[serde(default)]
    pub payment_date: Option<NaiveDateTime>,
    pub cancel_fine: bool,
    pub allow_payment: bool,
    #[serde(default)]
    pub allow_payment_date: Option<NaiveDateTime>,
    pub resend_email: bool,
    #[serde(default)]
    pub resend_to: Option<String>,
    #[serde(default)]
    pub schedule: Option<ScheduleAction>,
}

impl ChargeAction {
    /// Action vierge sur une cobrança : aucun indicateur levé
    pub fn for_charge(charge_number: impl Into<String>) -> Self {
        Self {
            charge_number: charge_number.into(),
            cancel_charge: false,
            register_payment: false,
            payment_amount: None,
            payment_date: None,
            cancel_fine: false,
            allow_payment: false,
            allow_payment_date: None,
            resend_email: false,
            resend_to: None,
            schedule: None,
        }
    }
}

/// Filtre de la segunda via
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicateFilter {
    /// Cobranças registradas
    Registered,
    /// Cobranças registradas e pagas
    RegisteredAndPaid,
}

impl DuplicateFilter {
    pub fn wire_value(self) -> &'static str {
        match self {
            DuplicateFilter::Registered => "1",
            DuplicateFilter::RegisteredAndPaid => "2",
        }
    }
}

/// Recherche de segunda via d'une cobrança
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateQuery {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    pub filter: DuplicateFilter,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date_end: Option<NaiveDate>,
}

/// Critère de la consulta de situação — exactement un critère par requête
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StatusCriteria {
    /// Par data de crédito (baixa)
    CreditDate { start: NaiveDate, end: NaiveDate },
    /// Par numeração de cobrança
    ChargeNumber { start: String, end: Option<String> },
    /// Par data de registro
    RegistrationDate { start: NaiveDate, end: NaiveDate },
    /// Par data de vencimento
    DueDate { start: NaiveDate, end: NaiveDate },
    /// Par data de processamento
    ProcessingDate { start: NaiveDate, end: NaiveDate },
    /// Par código de sacado
    DebtorCode(String),
    /// Par código de grupo de cobrança
    GroupCode(String),
    /// Par tipo de pagamento
    PaymentType(String),
    /// Par número de documento
    DocumentNumber(String),
}

/// Les quatre opérations du web service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Operation {
    /// Enregistrement d'une cobrança
    Charge(Charge),
    /// Segunda via d'une cobrança existante
    Duplicate(DuplicateQuery),
    /// Action sur une cobrança existante
    Action(ChargeAction),
    /// Consulta de situação
    Status(StatusCriteria),
}

impl Operation {
    /// Chemin du service visé — chaque opération a le sien
    pub fn service_name(&self) -> &'static str {
        match self {
            Operation::Charge(_) => "WSBilling",
            Operation::Duplicate(_) => "WSBillingSegundaVia",
            Operation::Action(_) => "WSBillingAction",
            Operation::Status(_) => "WSBillingStatus",
        }
    }

    /// Namespace `xmlns:m` du corps de la requête
    pub fn namespace(&self) -> &'static str {
        match self {
            Operation::Charge(_) => "http://www.f2b.com.br/soap/wsbilling.xsd",
            Operation::Duplicate(_) => "http://www.f2b.com.br/soap/wsbillingsegundavia.xsd",
            Operation::Action(_) => "http://www.f2b.com.br/soap/wsbillingaction.xsd",
            Operation::Status(_) => "http://www.f2b.com.br/soap/wsbillingstatus.xsd",
        }
    }

    /// Nom de l'élément racine de la requête
    pub fn root_element(&self) -> &'static str {
        match self {
            Operation::Charge(_) => "m:F2bCobranca",
            Operation::Duplicate(_) => "m:F2bSegundaVia",
            Operation::Action(_) => "m:F2bAcaoCobranca",
            Operation::Status(_) => "m:F2bSituacaoCobranca",
        }
    }

    /// Nom de l'élément racine de la réponse correspondante
    pub fn response_root(&self) -> &'static str {
        match self {
            Operation::Charge(_) => "F2bCobrancaRetorno",
            Operation::Duplicate(_) => "F2bSegundaViaRetorno",
            Operation::Action(_) => "F2bAcaoCobrancaRetorno",
            Operation::Status(_) => "F2bSituacaoCobrancaRetorno",
        }
    }
}
