use nqueens::{attacks, is_valid, solve, Board, Error, Queen};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[test]
fn render_four_queens() {
    let b = solve(4).unwrap().next().expect("4-queens has a solution");
    let grid = b.render();
    assert_eq!(grid, ".Q..\n...Q\nQ...\n..Q.");
    assert_eq!(format!("{b}"), grid);
}

#[test]
fn render_degenerate_boards() {
    let empty = solve(0).unwrap().next().unwrap();
    assert_eq!(empty.render(), "");
    let one = solve(1).unwrap().next().unwrap();
    assert_eq!(one.to_string(), "Q");
}

#[test]
fn try_from_validates() -> anyhow::Result<()> {
    let b = Board::try_from(vec![2, 0, 3, 1])?;
    assert_eq!(b.columns(), &[2, 0, 3, 1]);
    assert_eq!(b.mirrored().columns(), &[1, 3, 0, 2]);

    let err = Board::try_from(vec![0, 2, 1]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    let err = Board::from_columns(&[0, 5]).unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");
    Ok(())
}

fn pairwise_valid(cols: &[usize]) -> bool {
    let qs: Vec<Queen> = cols.iter().enumerate().map(|(r, &c)| Queen::new(r, c)).collect();
    qs.iter().enumerate().all(|(i, a)| qs[i + 1..].iter().all(|b| !attacks(*a, *b)))
}

#[test]
fn is_valid_agrees_with_pairwise_scan() {
    let mut rng = SmallRng::seed_from_u64(0x5eed_cafe);
    for n in 1..=8usize {
        let mut cols: Vec<usize> = (0..n).collect();
        for _ in 0..200 {
            cols.shuffle(&mut rng);
            assert_eq!(is_valid(&cols), pairwise_valid(&cols), "cols={cols:?}");
            // arbitrary columns, repeats allowed
            let loose: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
            assert_eq!(is_valid(&loose), pairwise_valid(&loose), "cols={loose:?}");
        }
    }
}
