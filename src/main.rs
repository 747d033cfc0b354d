extern crate balanced_collections;

use balanced_collections::avl_tree::AvlTree;
use balanced_collections::red_black_tree::{RedBlackFull, RedBlackInsertOnly};
use balanced_collections::{BalancedTree, RemovableTree};
use log::{error, info, LevelFilter};
use rand::Rng;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::fmt::Display;
use std::process;

const DEFAULT_NUM_OF_KEYS: usize = 20;

fn parse_level(arg: Option<String>) -> LevelFilter {
    match arg.as_ref().map(|level| level.as_str()) {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn report<B>(name: &str, tree: &B)
where
    B: BalancedTree<u32> + Display,
{
    println!("{}:\n{}", name, tree);
    info!(
        "{}: len {}, height {}, contains 10: {}, is_bst: {}, is_balanced: {}",
        name,
        tree.len(),
        tree.height(),
        tree.contains(&10),
        tree.is_bst(),
        tree.is_balanced(),
    );
}

fn fill<B>(tree: &mut B, keys: &[u32])
where
    B: BalancedTree<u32>,
{
    for key in keys {
        if let Err(err) = tree.add(*key) {
            error!("failed to add {}: {}", key, err);
        }
    }
}

fn remove_first<B>(name: &str, tree: &mut B, keys: &[u32])
where
    B: RemovableTree<u32> + Display,
{
    if let Some(key) = keys.first() {
        info!("{}: removing {} returned {:?}", name, key, tree.remove(key));
        report(name, tree);
    }
}

fn main() {
    let mut args = env::args().skip(1);
    let level = parse_level(args.next());
    let num_of_keys = match args.next().map(|arg| arg.parse::<usize>()) {
        None => DEFAULT_NUM_OF_KEYS,
        Some(Ok(num_of_keys)) => num_of_keys,
        Some(Err(err)) => {
            eprintln!("invalid number of keys: {}", err);
            process::exit(1);
        },
    };

    let logger = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    if let Err(err) = logger {
        eprintln!("failed to initialize logger: {}", err);
    }

    let mut rng = rand::thread_rng();
    let keys: Vec<u32> = (0..num_of_keys)
        .map(|_| rng.gen_range(0, num_of_keys as u32 + 1))
        .collect();
    info!("keys: {:?}", keys);

    let mut avl_tree = AvlTree::new();
    fill(&mut avl_tree, &keys);
    report("avl tree", &avl_tree);
    remove_first("avl tree", &mut avl_tree, &keys);

    let mut insert_only = RedBlackInsertOnly::new();
    fill(&mut insert_only, &keys);
    report("insert-only red black tree", &insert_only);

    let mut full = RedBlackFull::new();
    fill(&mut full, &keys);
    report("red black tree", &full);
    remove_first("red black tree", &mut full, &keys);
}
