// Catalog module - maps display labels to the analyzer's canonical identifiers

use std::collections::HashMap;

/// Identifier handed to the analyzer when a label has no explicit mapping.
pub const FALLBACK_ID: &str = "Generic";

/// Display-label to canonical-id table, in menu order.
///
/// Ids strip the spaces/punctuation the analyzer CLI rejects, except where the
/// tool historically accepts the label verbatim ("Informatica - PC",
/// "Informatica Cloud").
const TECHNOLOGIES: &[(&str, &str)] = &[
    ("ABInitio", "ABInitio"),
    ("ADF", "ADF"),
    ("Alteryx", "Alteryx"),
    ("Athena", "Athena"),
    ("BigQuery", "BigQuery"),
    ("BODS", "BODS"),
    ("Cloudera (Impala)", "ClouderaImpala"),
    ("Datastage", "Datastage"),
    ("Greenplum", "Greenplum"),
    ("Hive", "Hive"),
    ("IBM DB2", "IBMDB2"),
    ("Informatica - Big Data Edition", "InformaticaBigDataEdition"),
    ("Informatica - PC", "Informatica - PC"),
    ("Informatica Cloud", "Informatica Cloud"),
    ("MS SQL Server", "MSSQLServer"),
    ("Netezza", "Netezza"),
    ("Oozie", "Oozie"),
    ("Oracle", "Oracle"),
    ("Oracle Data Integrator", "OracleDataIntegrator"),
    ("PentahoDI", "PentahoDI"),
    ("PIG", "PIG"),
    ("Presto", "Presto"),
    ("PySpark", "PySpark"),
    ("Redshift", "Redshift"),
    ("SAPHANA - CalcViews", "SAPHANACalcViews"),
    ("SAS", "SAS"),
    ("Snowflake", "Snowflake"),
    ("SPSS", "SPSS"),
    ("SQOOP", "SQOOP"),
    ("SSIS", "SSIS"),
    ("SSRS", "SSRS"),
    ("Synapse", "Synapse"),
    ("Talend", "Talend"),
    ("Teradata", "Teradata"),
    ("Vertica", "Vertica"),
    ("Others", "Generic"),
];

pub struct TechnologyCatalog {
    entries: HashMap<&'static str, &'static str>,
}

impl TechnologyCatalog {
    pub fn new() -> Self {
        Self {
            entries: TECHNOLOGIES.iter().copied().collect(),
        }
    }

    /// Exact-match lookup only. Any label not present verbatim maps to
    /// [`FALLBACK_ID`]; there is deliberately no fuzzy or case-insensitive
    /// matching, and unmapped labels never fail.
    pub fn resolve(&self, display_label: &str) -> &'static str {
        self.entries.get(display_label).copied().unwrap_or(FALLBACK_ID)
    }

    pub fn contains(&self, display_label: &str) -> bool {
        self.entries.contains_key(display_label)
    }

    /// Display labels in their original menu order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        TECHNOLOGIES.iter().map(|(label, _)| *label)
    }
}

impl Default for TechnologyCatalog {
    fn default() -> Self {
        Self::new()
    }
}
