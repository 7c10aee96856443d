//! Wire formats of the MockBank backend.
//!
//! Field names follow the backend's Portuguese JSON keys. Responses are read
//! leniently: optional fields default, numeric strings are accepted and
//! unknown fields are ignored.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Account, AccountType, CategorySummary, FinancialSummary, Profile, ProfileUpdate, Transaction,
    TransferKind,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::{Credentials, NewTransfer, Registration};
use crate::domain::serde_utils::{joined_message, string_or_u64};

#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub apelido: &'a str,
    pub senha: &'a str,
}

impl<'a> From<&'a Credentials> for LoginBody<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            apelido: &credentials.nickname,
            senha: credentials.password.as_str(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterBody<'a> {
    pub nome: &'a str,
    pub cpf: &'a str,
    pub apelido: &'a str,
    pub senha: &'a str,
}

impl<'a> From<&'a Registration> for RegisterBody<'a> {
    fn from(registration: &'a Registration) -> Self {
        Self {
            nome: &registration.name,
            cpf: &registration.cpf,
            apelido: &registration.nickname,
            senha: registration.password.as_str(),
        }
    }
}

/// Body of any non-2xx response.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "joined_message::deserialize")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub apelido: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub data_nascimento: Option<String>,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub tipo_conta: Option<String>,
}

impl From<ProfileResponse> for Profile {
    fn from(body: ProfileResponse) -> Self {
        Self {
            name: body.nome,
            nickname: body.apelido,
            email: body.email.unwrap_or_default(),
            cpf: body.cpf,
            phone: body.telefone.unwrap_or_default(),
            birth_date: body.data_nascimento.unwrap_or_default(),
            address: body.endereco.unwrap_or_default(),
            account_type: body
                .tipo_conta
                .filter(|label| !label.trim().is_empty())
                .map(|label| AccountType::parse(&label)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateBody<'a> {
    pub email: &'a str,
    pub telefone: &'a str,
    pub data_nascimento: &'a str,
    pub endereco: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_conta: Option<&'a str>,
}

impl<'a> From<&'a ProfileUpdate> for ProfileUpdateBody<'a> {
    fn from(update: &'a ProfileUpdate) -> Self {
        Self {
            email: &update.email,
            telefone: &update.phone,
            data_nascimento: &update.birth_date,
            endereco: &update.address,
            tipo_conta: update.account_type.as_ref().map(AccountType::as_str),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    #[serde(default, deserialize_with = "string_or_u64::deserialize")]
    pub id: Option<u64>,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub saldo: Decimal,
    #[serde(default)]
    pub tipo: String,
}

impl From<AccountResponse> for Account {
    fn from(body: AccountResponse) -> Self {
        Self::new(
            body.id.unwrap_or_default(),
            body.nome,
            body.numero,
            body.saldo,
            AccountType::parse(&body.tipo),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct BalanceResponse {
    pub saldo: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    #[serde(default, deserialize_with = "string_or_u64::deserialize")]
    pub id: Option<u64>,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub valor: Decimal,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub conta_origem: Option<String>,
    #[serde(default)]
    pub conta_destino: Option<String>,
}

impl TransactionResponse {
    /// Converts to a domain transaction.
    ///
    /// # Errors
    /// Returns a decode error when the timestamp is missing or unreadable.
    pub fn into_transaction(self) -> Result<Transaction, ApiError> {
        let raw = self
            .data
            .ok_or_else(|| ApiError::decode("transaction without data field"))?;
        let timestamp = parse_timestamp(&raw)
            .ok_or_else(|| ApiError::decode(format!("unreadable timestamp: {raw}")))?;

        let kind = TransferKind::parse(&self.tipo);
        let counterparty = match kind {
            TransferKind::Received => self.conta_origem,
            TransferKind::Sent => self.conta_destino,
        };

        let transaction = Transaction::new(kind, self.descricao, self.valor, timestamp)
            .with_category(self.categoria)
            .with_counterparty(counterparty);

        Ok(match self.id {
            Some(id) => transaction.with_id(id),
            None => transaction,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub enviado: Decimal,
    #[serde(default)]
    pub recebido: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    #[serde(default)]
    pub total_recebido: Decimal,
    #[serde(default)]
    pub total_enviado: Decimal,
    #[serde(default)]
    pub saldo: Decimal,
    #[serde(default)]
    pub categorias: Option<Vec<CategoryResponse>>,
}

impl From<SummaryResponse> for FinancialSummary {
    fn from(body: SummaryResponse) -> Self {
        Self {
            total_received: body.total_recebido,
            total_sent: body.total_enviado,
            balance: body.saldo,
            categories: body
                .categorias
                .unwrap_or_default()
                .into_iter()
                .map(|c| CategorySummary {
                    name: c.nome,
                    sent: c.enviado,
                    received: c.recebido,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferBody<'a> {
    pub conta_destino: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    pub descricao: &'a str,
    pub categoria: &'a str,
}

impl<'a> From<&'a NewTransfer> for TransferBody<'a> {
    fn from(transfer: &'a NewTransfer) -> Self {
        Self {
            conta_destino: &transfer.destination,
            valor: transfer.amount,
            descricao: &transfer.description,
            categoria: &transfer.category,
        }
    }
}

/// Parses the timestamp shapes the backend has been seen to emit.
///
/// Naive values are taken as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;
    use test_case::test_case;

    #[test_case("2024-03-05T14:30:00.000Z" ; "rfc3339 with millis")]
    #[test_case("2024-03-05T14:30:00" ; "naive iso")]
    #[test_case("2024-03-05 14:30:00" ; "sql style")]
    fn test_timestamp_shapes(raw: &str) {
        let ts = parse_timestamp(raw).unwrap();
        assert_eq!((ts.day(), ts.month(), ts.hour(), ts.minute()), (5, 3, 14, 30));
    }

    #[test]
    fn test_timestamp_date_only_and_garbage() {
        assert_eq!(parse_timestamp("2024-03-05").unwrap().hour(), 0);
        assert!(parse_timestamp("ontem").is_none());
    }

    #[test]
    fn test_received_uses_origin_account() {
        let body: TransactionResponse = serde_json::from_value(json!({
            "id": "7",
            "tipo": "recebida",
            "descricao": "Pix",
            "valor": 25.5,
            "data": "2024-03-05T14:30:00Z",
            "contaOrigem": "bruno",
            "contaDestino": "ana"
        }))
        .unwrap();

        let tx = body.into_transaction().unwrap();
        assert_eq!(tx.id(), Some(7));
        assert_eq!(tx.kind(), TransferKind::Received);
        assert_eq!(tx.counterparty(), Some("bruno"));
        assert_eq!(tx.amount(), Decimal::new(255, 1));
        assert_eq!(tx.category(), None);
    }

    #[test]
    fn test_transaction_without_date_is_decode_error() {
        let body: TransactionResponse =
            serde_json::from_value(json!({"tipo": "enviada", "valor": 1})).unwrap();
        assert!(matches!(body.into_transaction(), Err(ApiError::Decode { .. })));
    }

    #[test]
    fn test_summary_without_categories() {
        let body: SummaryResponse = serde_json::from_value(json!({
            "totalRecebido": 100,
            "totalEnviado": "40.5",
            "saldo": 59.5
        }))
        .unwrap();

        let summary = FinancialSummary::from(body);
        assert_eq!(summary.total_sent, Decimal::new(405, 1));
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn test_transfer_amount_serialized_as_number() {
        let transfer = NewTransfer {
            destination: "bruno".to_string(),
            amount: Decimal::new(1050, 2),
            description: "Transferência".to_string(),
            category: "Outros".to_string(),
        };

        let value = serde_json::to_value(TransferBody::from(&transfer)).unwrap();
        assert_eq!(value["valor"], json!(10.5));
        assert_eq!(value["contaDestino"], json!("bruno"));
    }

    #[test]
    fn test_profile_blank_account_type_is_absent() {
        let body: ProfileResponse = serde_json::from_value(json!({
            "nome": "Ana",
            "apelido": "ana",
            "cpf": "123.456.789-01",
            "tipoConta": ""
        }))
        .unwrap();

        let profile = Profile::from(body);
        assert_eq!(profile.account_type, None);
        assert_eq!(profile.email, "");
    }
}
