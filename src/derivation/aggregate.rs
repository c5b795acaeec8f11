// src/derivation/aggregate.rs

/// A record that contributes a monetary amount to summary tiles.
pub trait Amount {
    fn amount(&self) -> f64;
}

pub fn aggregate_total<'a, R, I>(records: I) -> f64
where
    R: Amount + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records.into_iter().map(|record| record.amount()).sum()
}
