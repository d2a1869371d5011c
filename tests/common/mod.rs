//! Shared fixtures and helpers for the integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use lockstep::Table;

/// Zodiac signs in calendar order, with Ophiuchus between Scorpio and
/// Sagittarius. Ophiuchus (U+26CE) sorts after Pisces (U+2653) by code
/// point, so this is the order a canonical override has to supply.
pub const ZODIAC: [&str; 13] = [
    "♈", "♉", "♊", "♋", "♌", "♍", "♎", "♏", "⛎", "♐", "♑", "♒", "♓",
];

pub const COLORS: [&str; 13] = [
    "Red", "Orange", "Yellow", "Lime", "Green", "Teal", "Cyan", "Azure", "Blue", "Violet",
    "Magenta", "Rose", "Gray",
];

pub const REALMS: [&str; 13] = [
    "Asgard",
    "Vanaheim",
    "Alfheim",
    "Midgard",
    "Jotunheim",
    "Muspelheim",
    "Niflheim",
    "Svartalfheim",
    "Helheim",
    "Ginnungagap",
    "Yggdrasil",
    "Bifrost",
    "Valhalla",
];

/// Row `i` of the fixture holds `COLORS[i]`, `REALMS[i]`, and a shuffled sign.
pub const SHUFFLE: [usize; 13] = [8, 3, 11, 0, 6, 12, 1, 9, 4, 10, 2, 7, 5];

/// A 13 x 3 table with the zodiac column out of order.
pub fn thirteen() -> Table {
    let months: Vec<&str> = SHUFFLE.iter().map(|&i| ZODIAC[i]).collect();
    Table::create([
        ("colors", COLORS.to_vec()),
        ("realms", REALMS.to_vec()),
        ("months", months),
    ])
    .unwrap()
}

pub fn zodiac_order() -> Vec<String> {
    ZODIAC.iter().map(|s| (*s).to_string()).collect()
}

pub fn table(columns: &[(&str, &[&str])]) -> Table {
    Table::create(columns.iter().map(|(name, labels)| (*name, labels.to_vec()))).unwrap()
}

/// Labels of one column, owned for easy comparison.
pub fn labels(table: &Table, column: &str) -> Vec<String> {
    table
        .column(column)
        .unwrap_or_else(|| panic!("column `{column}` missing"))
        .as_slice()
        .to_vec()
}

/// A fresh, empty scratch directory under the system temp dir.
pub fn scratch_dir(tag: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "lockstep-{tag}-{}-{n}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
