use crate::Trial;

#[quickcheck]
fn path_length_identity(trial: Trial) -> bool {
    let tree = trial.tree();
    tree.external_path_len() == tree.internal_path_len() + 2 * tree.size()
}

#[quickcheck]
fn one_more_external_node_than_nodes(trial: Trial) -> bool {
    let tree = trial.tree();
    tree.external_node_count() == tree.size() + 1
}

#[quickcheck]
fn height_at_least_floor_lg_size(trial: Trial) -> bool {
    let tree = trial.tree();
    tree.is_empty() || tree.height() >= tree.size().ilog2() as usize
}

#[quickcheck]
fn height_is_one_past_deepest_node(trial: Trial) -> bool {
    let tree = trial.tree();
    let deepest = tree.in_order().iter().map(|node| node.depth() + 1).max();
    tree.height() == deepest.unwrap_or(0)
}

#[quickcheck]
fn symmetric_order_holds_globally(trial: Trial) -> bool {
    let tree = trial.tree();
    let nodes = tree.in_order();

    tree.verify().is_empty() && nodes.windows(2).all(|w| w[0].key() < w[1].key())
}

#[quickcheck]
fn every_draw_is_counted(trial: Trial) -> bool {
    let tree = trial.tree();
    let counted: usize = tree.in_order().iter().map(|node| node.count()).sum();

    counted == tree.n() && tree.size() <= tree.n()
}

#[quickcheck]
fn keys_come_from_the_universe(trial: Trial) -> bool {
    let tree = trial.tree();
    let universe = 1..=tree.n() as u64;

    tree.in_order()
        .iter()
        .all(|node| universe.contains(&node.key()))
}

#[quickcheck]
fn encodings_match_size(trial: Trial) -> bool {
    let tree = trial.tree();
    let parens = tree.paren_systems();
    let ruin = tree.gambler_ruin_seq();

    parens.len() == 2 * tree.size()
        && ruin.len() == 2 * tree.size() + 1
        && ruin.matches('+').count() == tree.size()
        && ruin.ends_with('-')
}

#[quickcheck]
fn queries_are_idempotent(trial: Trial) -> bool {
    let tree = trial.tree();

    tree.height() == tree.height()
        && tree.leaves() == tree.leaves()
        && tree.internal_path_len() == tree.internal_path_len()
        && tree.external_path_len() == tree.external_path_len()
        && tree.successful_search_cost() == tree.successful_search_cost()
        && tree.unsuccessful_search_cost() == tree.unsuccessful_search_cost()
        && tree.paren_systems() == tree.paren_systems()
        && tree.gambler_ruin_seq() == tree.gambler_ruin_seq()
}

#[quickcheck]
fn same_seed_same_tree(trial: Trial) -> bool {
    let a = trial.tree();
    let b = trial.tree();

    a == b && a.gambler_ruin_seq() == b.gambler_ruin_seq()
}

#[quickcheck]
fn search_costs_are_bounded_below(trial: Trial) -> bool {
    let tree = trial.tree();
    match (tree.successful_search_cost(), tree.unsuccessful_search_cost()) {
        (Ok(hit), Ok(miss)) => hit >= 1.0 && miss >= 1.0,
        (Err(_), Err(_)) => tree.is_empty(),
        _ => false,
    }
}
