use chrono::Duration;
use rosterlink_core::pipeline::run;
use rosterlink_core::{PipelineConfig, Table};

const CONFIG: &str = r#"
[documents]
file = "registry.csv"

[documents.columns]
internal_id     = "NumInterno"
category        = "Categoria"
reviewer_name   = "NomRevisor"
event_timestamp = "FechaHistorico"
associated_id   = "NumDocAsociado"

[roster]
file = "roster.csv"

[roster.columns]
full_name                  = "Nombre Funcionario"
unit_code                  = "Código Unidad"
unit_description           = "Descripción Unidad"
unit_code_secondary        = "Código Unidad 2"
unit_description_secondary = "Descripción Unidad 2"
"#;

fn documents_table() -> Table {
    let mut table = Table::new(
        ["NumInterno", "Categoria", "NomRevisor", "FechaHistorico", "NumDocAsociado"]
            .map(String::from)
            .to_vec(),
    );
    let rows = [
        // agreement 1: three lifecycle events, reviewer with accents and a
        // 4-token name in one row, extra spacing in another
        ["1", "Convenio con Entidades Públicas", "Ana  María Pérez Gonzalez", "2024-03-01 10:00:00", ""],
        ["1", "Convenio con Entidades Públicas", "Ana Maria Perez  Gonzalez", "2024-03-01 10:05:00", ""],
        ["1", "Convenio con Entidades Públicas", "Ana María Pérez Gonzalez", "2024-03-01 10:20:00", ""],
        // resolutions 2 and 3 enact agreement 1
        ["2", "Resolución", "José Soto Rojas", "2024-03-02 09:00:00", "1"],
        ["3", "Resolución", "Desconocido Total", "2024-03-03 09:00:00", "1"],
    ];
    for row in rows {
        table.push_row(row.map(String::from).to_vec());
    }
    table
}

fn roster_table() -> Table {
    let mut table = Table::new(
        [
            "Nombre Funcionario",
            "Código Unidad",
            "Descripción Unidad",
            "Código Unidad 2",
            "Descripción Unidad 2",
        ]
        .map(String::from)
        .to_vec(),
    );
    let rows = [
        ["Pérez Gonzalez Ana", "101", "Finanzas", "", ""],
        ["Pérez Gonzalez Ana", "101", "Finanzas", "", ""], // exact duplicate
        ["Soto Rojas José", "102", "Jurídica", "201", "Convenios"],
    ];
    for row in rows {
        table.push_row(row.map(String::from).to_vec());
    }
    table
}

#[test]
fn full_pipeline_links_reviewers_and_references() {
    let config = PipelineConfig::from_toml(CONFIG).unwrap();
    let output = run(&config, &documents_table(), &roster_table()).unwrap();

    // roster dedup: three raw rows, two survive
    assert_eq!(output.roster.len(), 2);

    // every document row survives the left join exactly once
    assert_eq!(output.summary.document_rows, 5);
    assert_eq!(output.summary.linked_rows, 5);

    // the 4-token accented reviewer matches the 3-token roster name
    let agreement_rows: Vec<_> = output
        .linked
        .iter()
        .filter(|l| l.document.internal_id == "1")
        .collect();
    assert_eq!(agreement_rows.len(), 3);
    for row in &agreement_rows {
        assert_eq!(row.document.reviewer_name, "Ana Perez Gonzalez");
        let roster = row.roster.as_ref().expect("reviewer should match roster");
        assert_eq!(roster.unit_code, "101");
    }

    // resolution 2 matches, resolution 3 does not
    let resolution_2 = output
        .linked
        .iter()
        .find(|l| l.document.internal_id == "2")
        .unwrap();
    assert_eq!(
        resolution_2.roster.as_ref().map(|r| r.unit_code.as_str()),
        Some("102")
    );
    let resolution_3 = output
        .linked
        .iter()
        .find(|l| l.document.internal_id == "3")
        .unwrap();
    assert!(resolution_3.roster.is_none());

    assert_eq!(output.summary.matched_reviewers, 4);
    assert_eq!(output.summary.unmatched_reviewers, 1);

    // agreement 1 is referenced by both resolutions
    let referencing = agreement_rows[0]
        .referencing_ids
        .as_ref()
        .expect("agreement should be referenced");
    let ids: Vec<&str> = referencing.iter().map(String::as_str).collect();
    assert_eq!(ids, vec!["2", "3"]);
    assert!(resolution_2.referencing_ids.is_none());
    assert_eq!(output.summary.referenced_documents, 1);

    // elapsed: [None, 5min, 15min] across agreement 1's sorted events
    let elapsed: Vec<Option<Duration>> = agreement_rows
        .iter()
        .map(|l| l.document.elapsed_since_previous)
        .collect();
    assert_eq!(
        elapsed,
        vec![None, Some(Duration::minutes(5)), Some(Duration::minutes(15))]
    );
}

#[test]
fn category_filter_variant_drops_other_categories() {
    let config_toml = format!(
        r#"{CONFIG}
[documents.filter]
column = "Categoria"
values = ["Convenio con Entidades Públicas"]
"#
    );
    let config = PipelineConfig::from_toml(&config_toml).unwrap();
    let output = run(&config, &documents_table(), &roster_table()).unwrap();

    assert_eq!(output.summary.document_rows, 3);
    assert!(output
        .linked
        .iter()
        .all(|l| l.document.category == "Convenio con Entidades Públicas"));
    // nothing points at agreement 1 once the resolutions are filtered out
    assert!(output.linked.iter().all(|l| l.referencing_ids.is_none()));
}
