#[macro_use]
extern crate log;

use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use splay::SplayTree;
use std::env;

fn log_level() -> LevelFilter {
    env::var("SPLAY_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn show(tree: &SplayTree<i32>) {
    for record in tree.dump() {
        println!("{}", record);
    }
    println!();
}

fn main() {
    if let Err(err) = SimpleLogger::init(log_level(), Config::default()) {
        eprintln!("Error: could not install logger: {}", err);
    }

    let mut tree = SplayTree::new();

    println!("Insert 1, 7, 8, 24, 30, 9.");
    for &value in &[1, 7, 8, 24, 30, 9] {
        tree.insert(value);
    }
    show(&tree);

    println!("Delete 7.");
    tree.remove(&7);
    show(&tree);

    println!("Search 9.");
    if !tree.search(&9) {
        warn!("9 was not found");
    }
    show(&tree);

    println!("Insert 5 and 10.");
    tree.insert(5);
    tree.insert(10);
    show(&tree);

    if let Err(err) = tree.check_invariants() {
        error!("tree is corrupt: {}", err);
    }
    info!("{} values stored", tree.len());
}
