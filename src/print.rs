use bigdecimal::BigDecimal;
use num_traits::One;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::precision::Precision;

/// Tail probabilities `P(at least k)` for every `k`, accumulated from the top of the
/// `distribution`. The first entry is always exactly 1.
pub fn tails(distribution: &[BigDecimal]) -> Vec<BigDecimal> {
    let mut tails = Vec::with_capacity(distribution.len());
    let mut cumulative = BigDecimal::default();
    for prob in distribution.iter().rev() {
        cumulative += prob;
        tails.push(cumulative.clone());
    }
    tails.reverse();
    if let Some(first) = tails.first_mut() {
        *first = BigDecimal::one();
    }
    tails
}

pub fn tabulate_distribution(distribution: &[BigDecimal], digits: u64) -> Table {
    let precision = Precision::Digits(digits);
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(5))
                    .with(HAlign::Centred),
            ),
            Col::new(Styles::default().with(MinWidth(15)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(15)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["k".into(), "P(exactly k)".into(), "P(at least k)".into()],
        ));
    for (k, (exact, tail)) in distribution.iter().zip(tails(distribution)).enumerate() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{k}").into(),
                format!("{}", precision.apply(exact.clone())).into(),
                format!("{}", precision.apply(tail)).into(),
            ],
        ));
    }
    table
}
