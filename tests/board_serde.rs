use nqueens::{solve, Board};

#[test]
fn board_serializes_as_column_array() -> anyhow::Result<()> {
    let b = solve(5)?.next().expect("5-queens has solutions");
    let json = serde_json::to_string(&b)?;
    assert_eq!(json, "[0,2,4,1,3]");
    let back: Board = serde_json::from_str(&json)?;
    assert_eq!(back, b);
    Ok(())
}

#[test]
fn invalid_board_rejected_on_deserialize() {
    assert!(serde_json::from_str::<Board>("[0,1,2]").is_err());
    assert!(serde_json::from_str::<Board>("[7]").is_err());
}

#[test]
fn queen_serializes_as_struct() -> anyhow::Result<()> {
    let q = nqueens::Queen::new(1, 3);
    assert_eq!(serde_json::to_string(&q)?, r#"{"row":1,"column":3}"#);
    Ok(())
}
