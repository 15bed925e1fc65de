//! Field rules for the SAT "Constancia de Situación Fiscal" template.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{CsfError, Result};

/// Tax identifier (RFC) field.
pub const RFC: &str = "RFC";
/// CURP field.
pub const CURP: &str = "CURP";
/// Postal code field.
pub const POSTAL_CODE: &str = "Código Postal";
/// Place and date of issuance field.
pub const ISSUANCE: &str = "Fecha y lugar de emisión";

/// A named pattern. Every capture group contributes to the value.
#[derive(Debug, Clone)]
pub struct FieldRule {
    name: &'static str,
    pattern: Regex,
}

impl FieldRule {
    /// Compile a rule. Patterns need at least one capture group.
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| CsfError::InvalidRule {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        if pattern.captures_len() < 2 {
            return Err(CsfError::InvalidRule {
                name: name.to_string(),
                reason: "pattern has no capture group".to_string(),
            });
        }
        Ok(Self { name, pattern })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Number of capture groups (1 for single-line fields, 2 for wrapped ones).
    pub fn group_count(&self) -> usize {
        self.pattern.captures_len() - 1
    }
}

/// Ordered, immutable set of field rules.
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    rules: Vec<FieldRule>,
}

impl FieldCatalog {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// The catalog for the SAT template, compiled once per process.
    pub fn builtin() -> &'static FieldCatalog {
        &BUILTIN_CATALOG
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Field names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// (name, pattern) pairs in evaluation order.
const BUILTIN_RULES: &[(&str, &str)] = &[
    (
        "Cédula de Identificación fiscal",
        r"CÉDULA DE IDENTIFICACIÓN FISCAL \n(\w*)",
    ),
    (CURP, r"CURP:\n(\w*)"),
    (RFC, r"RFC:\n(\w*)"),
    (
        "Nombre o Razón Social",
        r"Registro\s*Federal\s*de\s*Contribuyentes\n([^\n]*)\nNombre,\s*denominación\s*o\s*razón",
    ),
    (
        POSTAL_CODE,
        r"Código\s*Postal:\s*(.*?)\nTipo\s*de\s*Vialidad:",
    ),
    (
        "Tipo Vialidad",
        r"Tipo\s*de\s*Vialidad:\s*(.*?)\nNombre\s*de\s*Vialidad:",
    ),
    (
        "Nombre Vialidad",
        r"Nombre\s*de\s*Vialidad:\s*(.*?)\s*Número\s*Exterior:",
    ),
    ("Número Exterior", r"Número\s*Exterior:\s*([^\n]*)"),
    ("Número Interior", r"Número\s*Interior:\s*(.*?)\n*Nombre"),
    ("Nombre Colonia", r"Nombre\s*de\s*la\s*Colonia:\s*([^\n]*)"),
    (
        "Nombre Localidad",
        r"Nombre\s*de\s*la\s*Localidad:\s*(.*?)\s*Nombre",
    ),
    // Long municipality names wrap onto a second line
    (
        "Nombre Municipio o Demarcación Territorial",
        r"\s*Territorial:\s*(.*?)\n(.*?)\s*Nombre\s*de\s*la\s*Entidad\s*Federativa:",
    ),
    (
        "Nombre Entidad Federativa",
        r"Nombre\s*de\s*la\s*Entidad\s*Federativa:\s*(.*?)\s*\n",
    ),
    ("Entre Calle", r"Entre\s*Calle:\s*(.*?)\n(.*?)\s*Y\s*Calle:"),
    ("Y Calle", r"Y\s*Calle:\s*([^\n]*)"),
    // The second line is usually the RFC printed next to the date
    (ISSUANCE, r"Lugar y Fecha de Emisión\n*([^\n]*)\n*([^\n]*)"),
];

lazy_static! {
    static ref BUILTIN_CATALOG: FieldCatalog = FieldCatalog::new(
        BUILTIN_RULES
            .iter()
            .map(|&(name, pattern)| FieldRule::new(name, pattern).unwrap())
            .collect()
    );
}
