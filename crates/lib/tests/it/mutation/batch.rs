//! Tests for building row mutations and moving them into batch entries.

use fieldpath::mutation::{MutateRowsEntry, Mutation, SingleRowMutation};

fn sample_mutations() -> Vec<Mutation> {
    vec![
        Mutation::set_cell("profile", "name", 1_000, "Alice"),
        Mutation::delete_from_column_all("profile", "nickname"),
        Mutation::delete_from_family("scratch"),
    ]
}

#[test]
fn test_construction_forms_agree() {
    let from_list = SingleRowMutation::with_mutations("row", sample_mutations());
    let from_iter = SingleRowMutation::with_mutations("row", sample_mutations().into_iter());

    let mut incremental = SingleRowMutation::new("row");
    for mutation in sample_mutations() {
        incremental.push(mutation);
    }

    assert_eq!(from_list, from_iter);
    assert_eq!(from_list, incremental);
    assert_eq!(from_list.mutations(), sample_mutations().as_slice());
}

#[test]
fn test_move_into_batch() {
    let mut rows = vec![
        SingleRowMutation::with_mutations("row1", sample_mutations()),
        SingleRowMutation::with_mutations("row2", [Mutation::delete_from_row()]),
    ];

    let mut batch: Vec<MutateRowsEntry> = Vec::new();
    for row in &mut rows {
        let mut entry = MutateRowsEntry::default();
        row.move_to(&mut entry);
        batch.push(entry);
    }

    assert_eq!(batch[0].row_key, "row1");
    assert_eq!(batch[0].mutations, sample_mutations());
    assert_eq!(batch[1].mutations, vec![Mutation::delete_from_row()]);
    assert!(rows.iter().all(|row| row.is_empty() && row.row_key().is_empty()));
}

#[test]
fn test_entry_converts_back() {
    let entry = SingleRowMutation::with_mutations("row", sample_mutations()).into_entry();
    let row = SingleRowMutation::from(entry);
    assert_eq!(row.row_key(), "row");
    assert_eq!(row.len(), 3);
}

#[test]
fn test_entry_json_round_trip() -> fieldpath::Result<()> {
    let entry = SingleRowMutation::with_mutations("row", sample_mutations()).into_entry();
    let json = serde_json::to_string(&entry)?;
    let decoded: MutateRowsEntry = serde_json::from_str(&json)?;
    assert_eq!(decoded, entry);
    Ok(())
}
