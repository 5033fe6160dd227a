use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;
use crate::validation::{self, Constraint, FieldRules};

pub const NOME_MAX_LEN: usize = 200;
pub const DOCUMENTO_MAX_LEN: usize = 14;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fornecedor")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nome: String,
    pub documento: String,
    pub ativo: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Request payload for create and update.
///
/// Every field is optional so a missing `nome` or `documento` surfaces as a
/// validation error rather than a body decoding failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FornecedorInput {
    #[serde(default, alias = "Id")]
    pub id: Option<Uuid>,
    #[serde(default, alias = "Nome")]
    pub nome: Option<String>,
    #[serde(default, alias = "Documento")]
    pub documento: Option<String>,
    #[serde(default, alias = "Ativo")]
    pub ativo: bool,
}

fn nome(f: &FornecedorInput) -> Option<&str> { f.nome.as_deref() }
fn documento(f: &FornecedorInput) -> Option<&str> { f.documento.as_deref() }

pub const SCHEMA: &[FieldRules<FornecedorInput>] = &[
    FieldRules {
        field: "nome",
        value: nome,
        constraints: &[Constraint::Required, Constraint::MaxLength(NOME_MAX_LEN)],
    },
    FieldRules {
        field: "documento",
        value: documento,
        constraints: &[Constraint::Required, Constraint::MaxLength(DOCUMENTO_MAX_LEN)],
    },
];

impl FornecedorInput {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validation::validate(self, SCHEMA).map_err(errors::ModelError::Validation)
    }

    /// Id to assign on create: the supplied one unless absent or nil.
    pub fn id_or_new(&self) -> Uuid {
        match self.id {
            Some(id) if !id.is_nil() => id,
            _ => Uuid::new_v4(),
        }
    }

    /// Validate and build the full row stored under `id`.
    pub fn into_model(self, id: Uuid) -> Result<Model, errors::ModelError> {
        self.validate()?;
        Ok(Model {
            id,
            nome: self.nome.unwrap_or_default(),
            documento: self.documento.unwrap_or_default(),
            ativo: self.ativo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> FornecedorInput {
        FornecedorInput {
            id: None,
            nome: Some("Acme".into()),
            documento: Some("12345678900".into()),
            ativo: true,
        }
    }

    #[test]
    fn valid_input_builds_model() {
        let id = Uuid::new_v4();
        let m = acme().into_model(id).unwrap();
        assert_eq!(m.id, id);
        assert_eq!(m.nome, "Acme");
        assert_eq!(m.documento, "12345678900");
        assert!(m.ativo);
    }

    #[test]
    fn empty_nome_is_rejected() {
        let input = FornecedorInput { nome: Some(String::new()), ..acme() };
        let Err(errors::ModelError::Validation(errs)) = input.validate() else { panic!("expected validation error") };
        assert_eq!(errs.fields().collect::<Vec<_>>(), ["nome"]);
    }

    #[test]
    fn missing_fields_report_each_field() {
        let Err(errors::ModelError::Validation(errs)) = FornecedorInput::default().validate() else { panic!("expected validation error") };
        assert_eq!(errs.len(), 2);
        assert!(errs.get("nome").is_some());
        assert!(errs.get("documento").is_some());
    }

    #[test]
    fn documento_longer_than_cnpj_is_rejected() {
        let input = FornecedorInput { documento: Some("123456789012345".into()), ..acme() };
        let Err(errors::ModelError::Validation(errs)) = input.validate() else { panic!("expected validation error") };
        assert_eq!(
            errs.get("documento").unwrap(),
            ["The field documento must be a string with a maximum length of 14.".to_string()]
        );
    }

    #[test]
    fn nome_at_limit_is_accepted() {
        let input = FornecedorInput { nome: Some("x".repeat(NOME_MAX_LEN)), ..acme() };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn nil_id_is_replaced() {
        let input = FornecedorInput { id: Some(Uuid::nil()), ..acme() };
        assert!(!input.id_or_new().is_nil());
        let fixed = Uuid::new_v4();
        let input = FornecedorInput { id: Some(fixed), ..acme() };
        assert_eq!(input.id_or_new(), fixed);
    }

    #[test]
    fn accepts_pascal_case_body() {
        let input: FornecedorInput = serde_json::from_str(
            r#"{"Nome":"Acme","Documento":"12345678900","Ativo":true}"#,
        )
        .unwrap();
        assert_eq!(input, acme());
    }

    #[test]
    fn model_serializes_camel_case() {
        let m = acme().into_model(Uuid::nil()).unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["nome"], "Acme");
        assert_eq!(json["ativo"], true);
        assert_eq!(json["id"], Uuid::nil().to_string());
    }
}
