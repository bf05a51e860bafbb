use crate::network::types::{Node, Route};

/// Two supply nodes (100 and 150 units) shipping directly to two demand nodes
/// (120 and 130 units). The optimum is unique: S1 -> D1 carries 100, S2 -> D1
/// carries 20, and S2 -> D2 carries 130, for a total cost of 430.
pub(crate) fn two_by_two_config() -> (Vec<Node>, Vec<Route>) {
    let nodes = vec![
        Node::new_supply("S1", 100.0),
        Node::new_supply("S2", 150.0),
        Node::new_demand("D1", 120.0),
        Node::new_demand("D2", 130.0),
    ];
    let routes = vec![
        Route::new("S1", "D1", 2.0),
        Route::new("S1", "D2", 4.0),
        Route::new("S2", "D1", 5.0),
        Route::new("S2", "D2", 1.0),
    ];
    (nodes, routes)
}

/// Two factories shipping through two cross-docks to two distribution centers,
/// balanced at 250 units. The optimum costs 640; the split of D1's last 20
/// units between cross-docks is not unique.
pub(crate) fn crossdock_config() -> (Vec<Node>, Vec<Route>) {
    let nodes = vec![
        Node::new_supply("S1", 100.0),
        Node::new_supply("S2", 150.0),
        Node::new_transshipment("T1"),
        Node::new_transshipment("T2"),
        Node::new_demand("D1", 120.0),
        Node::new_demand("D2", 130.0),
    ];
    let routes = vec![
        Route::new("S1", "T1", 1.0),
        Route::new("S1", "T2", 3.0),
        Route::new("S2", "T1", 2.0),
        Route::new("S2", "T2", 1.0),
        Route::new("T1", "D1", 2.0),
        Route::new("T1", "D2", 4.0),
        Route::new("T2", "D1", 3.0),
        Route::new("T2", "D2", 1.0),
    ];
    (nodes, routes)
}
